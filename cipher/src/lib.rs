mod error;
pub use error::CipherError;

pub use rand::{DefaultRand, FixedRand, Rand, SeedableRng, StdRng};

pub mod oaep;
pub use oaep::{mgf1, oaep_decode, oaep_encode, oaep_encode_with, OAEPEncoding, MGF1};

pub trait Encode {
    // 写入em之前不清空
    fn encode(&self, msg: &[u8], em: &mut Vec<u8>) -> Result<(), CipherError>;
}

pub trait Decode {
    // 写入msg之前不清空
    fn decode(&self, em: &[u8], msg: &mut Vec<u8>) -> Result<(), CipherError>;
}
