use crate::cmd::{sponge_args, sponge_bits, Cmd, SpongeConfig};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use crypto_hash::{search::find_leading_zeros, SpongeParams};
use std::time::Instant;

pub struct SearchCmd {
    pipe: Vec<u8>,
}

impl SearchCmd {
    pub fn new(pipe: &[u8]) -> Self {
        Self {
            pipe: pipe.to_vec(),
        }
    }
}

impl Cmd for SearchCmd {
    const NAME: &'static str = "search";

    fn cmd() -> Command {
        sponge_args(
            Command::new(Self::NAME)
                .about("search `BASE || counter` whose digest starts with hex zeros")
                .arg(
                    Arg::new("base")
                        .value_name("BASE")
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(String))
                        .required(false)
                        .help("the message prefix, appended after the pipe data"),
                )
                .arg(
                    Arg::new("zeros")
                        .long("zeros")
                        .short('z')
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(usize))
                        .default_value("5")
                        .help("the number of leading hex zeros"),
                )
                .arg(
                    Arg::new("threads")
                        .long("threads")
                        .short('t')
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("the search threads, 0 means all cpus"),
                ),
        )
    }

    fn run(&self, m: &ArgMatches) -> anyhow::Result<()> {
        let c = SpongeConfig::config();
        let (r, d) = sponge_bits(m, c.rate_bits, c.output_bits);
        let params = SpongeParams::new(r, d)?;
        let zeros = m.get_one::<usize>("zeros").copied().unwrap_or(5);
        let threads = m.get_one::<usize>("threads").copied().unwrap_or(c.threads);

        let mut base = self.pipe.clone();
        if let Some(s) = m.get_one::<String>("base") {
            base.extend_from_slice(s.as_bytes());
        }

        let now = Instant::now();
        let hit = find_leading_zeros(base.as_slice(), params, zeros, threads, c.search_batch)?;
        log::info!(
            "found after {} candidates in {:?}",
            hit.counter + 1,
            now.elapsed()
        );

        println!("counter: {}", hit.counter);
        println!("message: {}", String::from_utf8_lossy(hit.message.as_slice()));
        println!("digest: {}", hex::encode(hit.digest.as_slice()));
        Ok(())
    }
}
