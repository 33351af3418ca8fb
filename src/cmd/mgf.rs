use crate::cmd::{decode_hex, print_hex, sponge_args, sponge_bits, Cmd, SpongeConfig};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use cipher::mgf1;

pub struct MgfCmd {
    pipe: Vec<u8>,
}

impl MgfCmd {
    pub fn new(pipe: &[u8]) -> Self {
        Self {
            pipe: pipe.to_vec(),
        }
    }

    /// 种子为管道数据后接`SEED`
    fn seed(&self, m: &ArgMatches) -> anyhow::Result<Vec<u8>> {
        let mut seed = self.pipe.clone();
        if let Some(s) = m.get_one::<String>("seed") {
            if m.get_flag("str") {
                seed.extend_from_slice(s.as_bytes());
            } else {
                seed.extend(decode_hex(s)?);
            }
        }
        Ok(seed)
    }
}

impl Cmd for MgfCmd {
    const NAME: &'static str = "mgf";

    fn cmd() -> Command {
        sponge_args(
            Command::new(Self::NAME)
                .about("MGF1 mask generation")
                .arg(
                    Arg::new("seed")
                        .value_name("SEED")
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(String))
                        .required(true)
                        .help("the seed in hex"),
                )
                .arg(
                    Arg::new("len")
                        .value_name("LENGTH")
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(usize))
                        .required(true)
                        .help("the mask length in bytes"),
                )
                .arg(
                    Arg::new("str")
                        .long("str")
                        .action(ArgAction::SetTrue)
                        .required(false)
                        .help("treat the seed as a utf-8 string"),
                ),
        )
    }

    fn run(&self, m: &ArgMatches) -> anyhow::Result<()> {
        let c = SpongeConfig::config();
        let (r, d) = sponge_bits(m, c.oaep.rate_bits, c.oaep.output_bits);
        let len = m.get_one::<usize>("len").copied().unwrap_or_default();

        let mask = mgf1(self.seed(m)?.as_slice(), len, r, d)?;
        print_hex(mask.as_slice(), false);
        Ok(())
    }
}
