use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

use crate::error::SpongeError;

pub trait Cmd {
    const NAME: &'static str;

    fn cmd() -> Command;

    fn run(&self, m: &ArgMatches) -> anyhow::Result<()>;
}

mod config;
pub use config::{ConfigCmd, OaepConfig, SpongeConfig};

mod hash;
pub use hash::HashCmd;

mod mgf;
pub use mgf::MgfCmd;

mod oaep;
pub use oaep::OaepCmd;

mod search;
pub use search::SearchCmd;

/// `--rate`和`--output`, 未指定时使用配置文件中的值
pub(crate) fn sponge_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("rate")
            .long("rate")
            .short('r')
            .action(ArgAction::Set)
            .value_parser(value_parser!(usize))
            .required(false)
            .help("the sponge rate in bits"),
    )
    .arg(
        Arg::new("output")
            .long("output")
            .short('o')
            .action(ArgAction::Set)
            .value_parser(value_parser!(usize))
            .required(false)
            .help("the digest length in bits"),
    )
}

pub(crate) fn sponge_bits(m: &ArgMatches, rate: usize, output: usize) -> (usize, usize) {
    (
        m.get_one::<usize>("rate").copied().unwrap_or(rate),
        m.get_one::<usize>("output").copied().unwrap_or(output),
    )
}

pub(crate) fn read_file(f: &PathBuf) -> Result<Vec<u8>, anyhow::Error> {
    if !f.exists() {
        return Err(SpongeError::PathNotExist(f.display().to_string()).into());
    }

    if !f.is_file() {
        return Err(SpongeError::NotFile(f.display().to_string()).into());
    }

    Ok(std::fs::read(f)?)
}

/// 允许`0x`前缀
pub(crate) fn decode_hex(s: &str) -> Result<Vec<u8>, SpongeError> {
    let h = s.trim();
    let h = h
        .strip_prefix("0x")
        .or_else(|| h.strip_prefix("0X"))
        .unwrap_or(h);
    hex::decode(h).map_err(|_| SpongeError::InvalidHex(s.to_string()))
}

pub(crate) fn print_hex(data: &[u8], prefix: bool) {
    if prefix {
        println!("0x{}", hex::encode(data));
    } else {
        println!("{}", hex::encode(data));
    }
}

#[cfg(test)]
mod tests {
    use super::decode_hex;

    #[test]
    fn hex_input() {
        assert_eq!(decode_hex("0a0B").unwrap(), vec![0x0a, 0x0b]);
        assert_eq!(decode_hex("0x0a0b").unwrap(), vec![0x0a, 0x0b]);
        assert_eq!(decode_hex(" 0Xff\n").unwrap(), vec![0xff]);
        assert!(decode_hex("").unwrap().is_empty());
        assert!(decode_hex("abc").is_err());
        assert!(decode_hex("zz").is_err());
    }
}
