use crate::keccak::{sponge, StateArray};
use crate::{DigestX, HashError, SpongeParams};
use std::io::Write;

/// `hash(M, r, d) = squeeze(keccak(absorb(pad(M, r), r)), d)`
///
/// `rate_bits`和`output_bits`不合法时返回`HashError`.
pub fn hash(msg: &[u8], rate_bits: usize, output_bits: usize) -> Result<Vec<u8>, HashError> {
    SpongeParams::new(rate_bits, output_bits).map(|p| p.hash(msg))
}

/// 流式的海绵哈希, 任意分段写入后`finish_x`的结果和对全部数据调用`hash`相同. <br>
///
/// 写入时每满一个块就吸收进状态, 缓冲区只保存不足一块的数据.
#[derive(Clone)]
pub struct SpongeHash {
    params: SpongeParams,
    state: StateArray,
    buf: Vec<u8>,
}

impl SpongeHash {
    pub fn new(params: SpongeParams) -> Self {
        Self {
            params,
            state: StateArray::zero(),
            buf: Vec::with_capacity(params.rate_bytes()),
        }
    }

    pub fn with_bits(rate_bits: usize, output_bits: usize) -> Result<Self, HashError> {
        SpongeParams::new(rate_bits, output_bits).map(Self::new)
    }

    pub const fn params(&self) -> SpongeParams {
        self.params
    }

    fn absorb_bytes(&mut self, mut s: &[u8]) {
        let r = self.params.rate_bytes();

        if !self.buf.is_empty() {
            let l = (r - self.buf.len()).min(s.len());
            self.buf.extend_from_slice(&s[..l]);
            s = &s[l..];

            if self.buf.len() == r {
                self.state = sponge::absorb_block(&self.state, self.buf.as_slice());
                self.buf.clear();
            }
        }

        let mut itr = s.chunks_exact(r);
        for chunk in &mut itr {
            self.state = sponge::absorb_block(&self.state, chunk);
        }
        self.buf.extend_from_slice(itr.remainder());
    }

    fn finalize_inner(&mut self) -> Vec<u8> {
        let r = self.params.rate_bytes();
        sponge::pad_in_place(&mut self.buf, r);

        let state = self
            .buf
            .chunks_exact(r)
            .fold(self.state, |s, block| sponge::absorb_block(&s, block))
            .permute();

        let mut out = Vec::with_capacity(self.params.output_bytes());
        sponge::squeeze_into(&state, self.params.output_bytes(), &mut out);
        out
    }

    fn reset(&mut self) {
        #[cfg(feature = "sec-zeroize")]
        {
            use zeroize::Zeroize;
            self.state.zeroize();
            self.buf.zeroize();
        }

        self.state = StateArray::zero();
        self.buf.clear();
    }
}

impl Write for SpongeHash {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.absorb_bytes(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl DigestX for SpongeHash {
    fn block_bits_x(&self) -> usize {
        self.params.rate_bits()
    }

    fn digest_bits_x(&self) -> usize {
        self.params.output_bits()
    }

    fn write_x(&mut self, data: &[u8]) {
        self.absorb_bytes(data)
    }

    fn finish_x(&mut self) -> Vec<u8> {
        let digest = self.finalize_inner();
        self.reset();
        digest
    }

    fn reset_x(&mut self) {
        self.reset()
    }
}

#[cfg(feature = "sec-zeroize-drop")]
impl Drop for SpongeHash {
    fn drop(&mut self) {
        self.reset()
    }
}
