//! = RFC 8017
//!
//! == PKCS #1: RSA Cryptography Specification Version 2.2
//!
//! === OAEP(Optimal Asymmetric Encryption Padding)
//!
//! 以海绵哈希作为`Hash`和MGF1的哈希函数. 编码结果是RSA加密的明文块, RSA模幂运算本身不在这里实现,
//! 块和整数之间按大端序转换(`block_to_integer`, `integer_to_block`).
//!

mod mgf;
pub use mgf::{mgf1, MGF1};

mod encoding;
pub use encoding::OAEPEncoding;

use crate::{CipherError, DefaultRand, FixedRand, Rand};
use crypto_hash::SpongeHash;
use num_bigint::BigUint;

/// 使用操作系统随机数生成种子
pub fn oaep_encode(
    message: &[u8],
    label: &[u8],
    k: usize,
    rate_bits: usize,
    output_bits: usize,
) -> Result<Vec<u8>, CipherError> {
    oaep_encode_with(
        message,
        label,
        k,
        rate_bits,
        output_bits,
        DefaultRand::default(),
    )
}

pub fn oaep_encode_with<R: Rand>(
    message: &[u8],
    label: &[u8],
    k: usize,
    rate_bits: usize,
    output_bits: usize,
    rng: R,
) -> Result<Vec<u8>, CipherError> {
    let hasher = SpongeHash::with_bits(rate_bits, output_bits)?;
    OAEPEncoding::new(hasher, rng, label, k)?.encode(message)
}

/// 解码不消耗随机数
pub fn oaep_decode(
    encoded: &[u8],
    label: &[u8],
    k: usize,
    rate_bits: usize,
    output_bits: usize,
) -> Result<Vec<u8>, CipherError> {
    let hasher = SpongeHash::with_bits(rate_bits, output_bits)?;
    OAEPEncoding::new(hasher, FixedRand::default(), label, k)?.decode(encoded)
}

/// 编码块按大端序转换为整数
pub fn block_to_integer(block: &[u8]) -> BigUint {
    BigUint::from_bytes_be(block)
}

/// 整数按大端序转换为`k`字节的编码块, 高位补0
pub fn integer_to_block(n: &BigUint, k: usize) -> Result<Vec<u8>, CipherError> {
    let mut m = n.to_bytes_be();
    if n.bits() == 0 {
        m.clear();
    }

    let mlen = m.len();
    if mlen > k {
        return Err(CipherError::InvalidBlockSize {
            target: k,
            real: mlen,
        });
    }

    m.resize(k, 0);
    m.rotate_right(k - mlen);
    Ok(m)
}
