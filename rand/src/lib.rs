//! 安全随机字节源.
//!
//! - `DefaultRand`: 操作系统随机数发生器;
//! - `FixedRand`: 按顺序重放给定的字节, 用于复现OAEP编码的结果;
//! - 任何`RngCore`, 例如种子固定的`StdRng`;

pub trait Rand {
    fn rand(&mut self, random: &mut [u8]);

    fn random_bytes(&mut self, n: usize) -> Vec<u8> {
        let mut v = vec![0u8; n];
        self.rand(v.as_mut_slice());
        v
    }
}

mod default_rand;
pub use default_rand::{DefaultRand, FixedRand};

pub use xrand::rngs::StdRng;
pub use xrand::SeedableRng;

impl<T: xrand::RngCore> Rand for T {
    fn rand(&mut self, random: &mut [u8]) {
        self.fill_bytes(random);
    }
}
