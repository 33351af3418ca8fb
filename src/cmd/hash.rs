use crate::cmd::{print_hex, read_file, sponge_args, sponge_bits, Cmd, SpongeConfig};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use crypto_hash::{DigestX, SpongeHash};
use std::path::PathBuf;

pub struct HashCmd {
    pipe: Vec<u8>,
}

impl HashCmd {
    pub fn new(pipe: &[u8]) -> Self {
        Self {
            pipe: pipe.to_vec(),
        }
    }

    /// 依次写入管道数据, 字符串和文件内容
    fn digest(&self, mut h: SpongeHash, m: &ArgMatches) -> anyhow::Result<Vec<u8>> {
        h.write_x(self.pipe.as_slice());

        if let Some(x) = m.get_one::<String>("str") {
            h.write_x(x.as_bytes());
        }

        if let Some(f) = m.get_one::<PathBuf>("file") {
            h.write_x(read_file(f)?.as_slice());
        }

        Ok(h.finish_x())
    }
}

impl Cmd for HashCmd {
    const NAME: &'static str = "hash";

    fn cmd() -> Command {
        sponge_args(
            Command::new(Self::NAME)
                .about("keccak sponge hash")
                .arg(
                    Arg::new("str")
                        .value_name("STRING")
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(String))
                        .required(false)
                        .help("hash string"),
                )
                .arg(
                    Arg::new("file")
                        .short('f')
                        .long("file")
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(PathBuf))
                        .required(false)
                        .help("to specified the file path"),
                )
                .arg(
                    Arg::new("prefix")
                        .long("prefix")
                        .required(false)
                        .action(ArgAction::SetTrue)
                        .help("display prefix with `0x`"),
                ),
        )
    }

    fn run(&self, m: &ArgMatches) -> anyhow::Result<()> {
        let c = SpongeConfig::config();
        let (r, d) = sponge_bits(m, c.rate_bits, c.output_bits);
        let h = SpongeHash::with_bits(r, d)?;
        log::debug!("hash with {}", h.params());

        let digest = self.digest(h, m)?;
        print_hex(digest.as_slice(), m.get_flag("prefix"));
        Ok(())
    }
}
