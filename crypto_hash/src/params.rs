use crate::keccak::{sponge, StateArray};
use crate::HashError;
use std::fmt::Display;

/// 海绵函数的参数: 位率`r`和输出位长度`d`, 容量`c = 1600 - r`隐含其中.
///
/// 由`new`构造的参数总是合法的, 所以基于它的哈希计算不会失败.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpongeParams {
    rate_bits: usize,
    output_bits: usize,
}

impl SpongeParams {
    /// 状态字节长度
    pub const STATE_BYTES: usize = StateArray::LANES << 3;

    pub const KECCAK_224: Self = Self::new_uncheck(1152, 224);
    pub const KECCAK_256: Self = Self::new_uncheck(1088, 256);
    pub const KECCAK_384: Self = Self::new_uncheck(832, 384);
    pub const KECCAK_512: Self = Self::new_uncheck(576, 512);

    const fn new_uncheck(rate_bits: usize, output_bits: usize) -> Self {
        Self {
            rate_bits,
            output_bits,
        }
    }

    pub fn new(rate_bits: usize, output_bits: usize) -> Result<Self, HashError> {
        Self::check_rate(rate_bits)?;
        Self::check_output(output_bits)?;
        Ok(Self::new_uncheck(rate_bits, output_bits))
    }

    /// 返回位率对应的字节长度
    pub const fn check_rate(rate_bits: usize) -> Result<usize, HashError> {
        if rate_bits == 0 || rate_bits & 7 != 0 || rate_bits > (Self::STATE_BYTES << 3) {
            Err(HashError::InvalidRate(rate_bits))
        } else {
            Ok(rate_bits >> 3)
        }
    }

    /// 返回输出位长度对应的字节长度, 单次挤压最多读出整个状态.
    pub const fn check_output(output_bits: usize) -> Result<usize, HashError> {
        if output_bits == 0 || output_bits & 7 != 0 || output_bits > (Self::STATE_BYTES << 3) {
            Err(HashError::InvalidOutput(output_bits))
        } else {
            Ok(output_bits >> 3)
        }
    }

    pub const fn rate_bits(&self) -> usize {
        self.rate_bits
    }

    pub const fn output_bits(&self) -> usize {
        self.output_bits
    }

    pub const fn rate_bytes(&self) -> usize {
        self.rate_bits >> 3
    }

    pub const fn output_bytes(&self) -> usize {
        self.output_bits >> 3
    }

    /// `squeeze(keccak(absorb(pad(msg))), d)`
    pub fn hash(&self, msg: &[u8]) -> Vec<u8> {
        let mut padded = Vec::with_capacity(msg.len() + self.rate_bytes());
        padded.extend_from_slice(msg);
        sponge::pad_in_place(&mut padded, self.rate_bytes());

        let state = padded
            .chunks_exact(self.rate_bytes())
            .fold(StateArray::zero(), |s, block| sponge::absorb_block(&s, block))
            .permute();

        let mut out = Vec::with_capacity(self.output_bytes());
        sponge::squeeze_into(&state, self.output_bytes(), &mut out);
        out
    }
}

impl Display for SpongeParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Keccak[r={}, c={}]({})",
            self.rate_bits,
            (Self::STATE_BYTES << 3) - self.rate_bits,
            self.output_bits
        ))
    }
}

impl TryFrom<(usize, usize)> for SpongeParams {
    type Error = HashError;

    fn try_from((rate_bits, output_bits): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(rate_bits, output_bits)
    }
}
