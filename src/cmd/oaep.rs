use crate::cmd::{decode_hex, print_hex, sponge_args, sponge_bits, Cmd, SpongeConfig};
use crate::error::SpongeError;
use cipher::{oaep::block_to_integer, DefaultRand, FixedRand, OAEPEncoding, Rand};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use crypto_hash::SpongeHash;

pub struct OaepCmd {
    pipe: Vec<u8>,
}

impl OaepCmd {
    pub fn new(pipe: &[u8]) -> Self {
        Self {
            pipe: pipe.to_vec(),
        }
    }

    fn encoding(&self, m: &ArgMatches) -> anyhow::Result<OAEPEncoding<SpongeHash, SeedRand>> {
        let c = SpongeConfig::config();
        let (r, d) = sponge_bits(m, c.oaep.rate_bits, c.oaep.output_bits);
        let k = m.get_one::<usize>("k").copied().unwrap_or(c.oaep.k);
        let label = m
            .get_one::<String>("label")
            .map(|s| s.as_bytes())
            .unwrap_or_default();

        let rng = match m.get_one::<String>("seed") {
            Some(s) => SeedRand::Fixed(FixedRand::new(decode_hex(s)?.as_slice())),
            None => SeedRand::Os(DefaultRand::default()),
        };

        let hasher = SpongeHash::with_bits(r, d)?;
        log::debug!("oaep with {}, k = {k}", hasher.params());
        Ok(OAEPEncoding::new(hasher, rng, label, k)?)
    }

    fn encode(&self, m: &ArgMatches) -> anyhow::Result<Vec<u8>> {
        let mut msg = self.pipe.clone();
        if let Some(s) = m.get_one::<String>("msg") {
            msg.extend_from_slice(s.as_bytes());
        }

        Ok(self.encoding(m)?.encode(msg.as_slice())?)
    }

    /// 编码块来自`MESSAGE`的十六进制或管道的原始字节
    fn decode(&self, m: &ArgMatches) -> anyhow::Result<Vec<u8>> {
        let em = match m.get_one::<String>("msg") {
            Some(s) => decode_hex(s)?,
            None if !self.pipe.is_empty() => self.pipe.clone(),
            None => {
                return Err(
                    SpongeError::InvalidArg("no encoded block to decode".to_string()).into(),
                )
            }
        };

        Ok(self.encoding(m)?.decode(em.as_slice())?)
    }
}

/// `--seed`指定时重放种子, 否则使用系统随机数
#[derive(Clone)]
enum SeedRand {
    Os(DefaultRand),
    Fixed(FixedRand),
}

impl Rand for SeedRand {
    fn rand(&mut self, random: &mut [u8]) {
        match self {
            Self::Os(r) => r.rand(random),
            Self::Fixed(r) => r.rand(random),
        }
    }
}

impl Cmd for OaepCmd {
    const NAME: &'static str = "oaep";

    fn cmd() -> Command {
        sponge_args(
            Command::new(Self::NAME)
                .about("OAEP encode or decode with the keccak sponge hash")
                .arg(
                    Arg::new("msg")
                        .value_name("MESSAGE")
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(String))
                        .required(false)
                        .help("the message to encode, or the hex encoded block to decode"),
                )
                .arg(
                    Arg::new("label")
                        .long("label")
                        .short('l')
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(String))
                        .required(false)
                        .help("the label, empty by default"),
                )
                .arg(
                    Arg::new("k")
                        .short('k')
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("the encoded block length in bytes"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(String))
                        .required(false)
                        .help("the hex seed bytes, random by default"),
                )
                .arg(
                    Arg::new("decode")
                        .long("decode")
                        .short('d')
                        .action(ArgAction::SetTrue)
                        .required(false)
                        .help("decode the encoded block"),
                )
                .arg(
                    Arg::new("integer")
                        .long("integer")
                        .short('i')
                        .action(ArgAction::SetTrue)
                        .required(false)
                        .help("print the encoded block as a big-endian decimal integer"),
                ),
        )
    }

    fn run(&self, m: &ArgMatches) -> anyhow::Result<()> {
        if !m.get_flag("decode") {
            let em = self.encode(m)?;
            if m.get_flag("integer") {
                println!("{}", block_to_integer(em.as_slice()));
            } else {
                print_hex(em.as_slice(), false);
            }
            return Ok(());
        }

        #[allow(unused_mut)]
        let mut msg = self.decode(m)?;
        match std::str::from_utf8(msg.as_slice()) {
            Ok(s) => println!("{s}"),
            Err(_) => print_hex(msg.as_slice(), false),
        }

        #[cfg(feature = "sec-zeroize")]
        {
            use zeroize::Zeroize;
            msg.zeroize();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::OaepCmd;
    use crate::cmd::Cmd;
    use cipher::{oaep_encode_with, FixedRand};

    #[test]
    fn fixed_seed_matches_library() {
        let seed = [7u8; 32];
        let seed_hex = hex::encode(seed);
        let m = OaepCmd::cmd()
            .try_get_matches_from([
                "oaep", "hello", "-k", "128", "-r", "1152", "-o", "256", "--seed",
                seed_hex.as_str(), "--label", "L",
            ])
            .unwrap();
        let em = OaepCmd::new(b"").encode(&m).unwrap();
        assert_eq!(
            em,
            oaep_encode_with(b"hello", b"L", 128, 1152, 256, FixedRand::new(&seed)).unwrap()
        );

        let em_hex = hex::encode(&em);
        let m = OaepCmd::cmd()
            .try_get_matches_from([
                "oaep", em_hex.as_str(), "-d", "-k", "128", "-r", "1152", "-o", "256",
                "--label", "L",
            ])
            .unwrap();
        assert_eq!(OaepCmd::new(b"").decode(&m).unwrap(), b"hello".to_vec());
    }

    #[test]
    fn decode_from_pipe() {
        let m = OaepCmd::cmd()
            .try_get_matches_from(["oaep", "x", "-k", "128", "-r", "1152", "-o", "256"])
            .unwrap();
        let em = OaepCmd::new(b"pipe-").encode(&m).unwrap();
        assert_eq!(em.len(), 128);

        let m = OaepCmd::cmd()
            .try_get_matches_from(["oaep", "-d", "-k", "128", "-r", "1152", "-o", "256"])
            .unwrap();
        assert_eq!(
            OaepCmd::new(em.as_slice()).decode(&m).unwrap(),
            b"pipe-x".to_vec()
        );
        assert!(OaepCmd::new(b"").decode(&m).is_err());
    }
}
