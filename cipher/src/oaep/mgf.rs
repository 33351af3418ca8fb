use crate::CipherError;
use crypto_hash::{DigestX, SpongeHash};
use std::ops::Range;

/// MGF1: `T = Hash(seed || C(0)) || Hash(seed || C(1)) || ...`, `C(i)`是4字节大端序计数器,
/// 取`T`的前`len`字节.
#[derive(Clone)]
pub struct MGF1<H: DigestX> {
    hasher: H,
}

impl<H: DigestX> MGF1<H> {
    pub fn new(hasher: H) -> Self {
        Self { hasher }
    }

    pub fn hash_len(&self) -> usize {
        (self.hasher.digest_bits_x() + 7) >> 3
    }

    /// `Hash(data)`
    pub fn digest(&mut self, data: &[u8]) -> Vec<u8> {
        self.hasher.reset_x();
        self.hasher.write_x(data);
        self.hasher.finish_x()
    }

    // 计数器只有32位, 最多迭代2^32次
    fn check_len(&self, len: usize) -> Result<(), CipherError> {
        let hlen = self.hash_len();
        if hlen == 0 {
            return Err(CipherError::Config(
                "mgf1: the hash digest length must be positive".to_string(),
            ));
        }

        let blocks = (len / hlen) as u64 + u64::from(len % hlen != 0);
        if blocks > (1u64 << 32) {
            return Err(CipherError::Config(format!(
                "mgf1: the mask length `{len}` is too long"
            )));
        }

        Ok(())
    }

    /// `out ^= MGF1(seed, out.len())`
    pub fn mask(&mut self, seed: &[u8], out: &mut [u8]) -> Result<(), CipherError> {
        self.check_len(out.len())?;

        let (mut done, mut cnt) = (0, 0u32);
        while done < out.len() {
            self.hasher.reset_x();
            self.hasher.write_x(seed);
            self.hasher.write_x(&cnt.to_be_bytes());
            let digest = self.hasher.finish_x();

            out.iter_mut()
                .skip(done)
                .zip(digest.iter())
                .for_each(|(a, &b)| {
                    *a ^= b;
                    done += 1;
                });

            cnt = cnt.wrapping_add(1);
        }

        Ok(())
    }

    /// `msg[obound] ^= MGF1(msg[sbound], obound.len())`, 调用者保证两个区间不相交.
    pub(crate) fn mask_in(
        &mut self,
        msg: &mut [u8],
        obound: Range<usize>,
        sbound: Range<usize>,
    ) -> Result<(), CipherError> {
        let (head, tail) = msg.split_at_mut(obound.start.max(sbound.start));
        let (seed, out) = if obound.start < sbound.start {
            (&tail[..sbound.len()], &mut head[obound])
        } else {
            (&head[sbound], &mut tail[..obound.len()])
        };

        self.mask(seed, out)
    }

    pub fn generate(&mut self, seed: &[u8], len: usize) -> Result<Vec<u8>, CipherError> {
        self.check_len(len)?;
        let mut out = vec![0u8; len];
        self.mask(seed, out.as_mut_slice())?;
        Ok(out)
    }
}

/// 以`hash(·, rate_bits, output_bits)`为哈希函数的MGF1
pub fn mgf1(
    seed: &[u8],
    length: usize,
    rate_bits: usize,
    output_bits: usize,
) -> Result<Vec<u8>, CipherError> {
    let hasher = SpongeHash::with_bits(rate_bits, output_bits)?;
    MGF1::new(hasher).generate(seed, length)
}

#[cfg(test)]
mod tests {
    use super::{mgf1, MGF1};
    use crate::CipherError;
    use crypto_hash::{hash, HashError, SpongeHash, SpongeParams};

    #[test]
    fn known_masks() {
        let cases = [
            (256, 50, "f2aaa925e182146a3e1903754a16b746d71776fe64b69e3db93e5ab9c371573ec79a1bd5816901dcf78aad3820102c2ec130"),
            (224, 50, "f2aaa925e182146a3e1903754a16b746d71776fe64b69e3db93e5ab9c79a1bd5816901dcf78aad3820102c2ec1302756cec0"),
        ];

        for (i, (d, len, tgt)) in cases.into_iter().enumerate() {
            assert_eq!(
                mgf1(b"seed", len, 1152, d).unwrap(),
                hex::decode(tgt).unwrap(),
                "case {i} failed"
            );
        }
    }

    #[test]
    fn first_block_is_counter_zero() {
        let mask = mgf1(b"seed", 32, 1152, 256).unwrap();
        assert_eq!(mask, hash(b"seed\x00\x00\x00\x00", 1152, 256).unwrap());

        let mask = mgf1(b"seed", 40, 1152, 256).unwrap();
        assert_eq!(
            &mask[32..],
            &hash(b"seed\x00\x00\x00\x01", 1152, 256).unwrap()[..8]
        );
    }

    #[test]
    fn mask_length() {
        for n in [0, 1, 27, 28, 29, 56, 100, 255] {
            assert_eq!(mgf1(b"abc", n, 1152, 224).unwrap().len(), n, "len {n}");
        }
        assert!(mgf1(b"abc", 0, 1152, 224).unwrap().is_empty());
    }

    #[test]
    fn invalid_params() {
        assert_eq!(
            mgf1(b"abc", 10, 1152, 3),
            Err(CipherError::Hash(HashError::InvalidOutput(3)))
        );
    }

    #[test]
    fn too_many_counter_blocks() {
        for len in [((1usize << 32) + 1) * 32, usize::MAX] {
            assert!(
                matches!(mgf1(b"s", len, 1152, 256), Err(CipherError::Config(_))),
                "len {len}"
            );
        }

        let mut mgf = MGF1::new(SpongeHash::new(SpongeParams::KECCAK_256));
        let mut out = [0u8; 4];
        assert!(mgf.check_len((1usize << 32) * 32).is_ok());
        assert!(mgf.check_len((1usize << 32) * 32 + 1).is_err());
        assert!(mgf.mask(b"s", &mut out).is_ok());
    }

    #[test]
    fn mask_in_place_both_orders() {
        let mut mgf = MGF1::new(SpongeHash::new(SpongeParams::KECCAK_256));
        let mut buf = (0..100u8).collect::<Vec<_>>();
        let orig = buf.clone();

        mgf.mask_in(buf.as_mut_slice(), 40..100, 0..40).unwrap();
        let mask = mgf.generate(&orig[..40], 60).unwrap();
        assert_eq!(&buf[..40], &orig[..40]);
        assert!(buf[40..]
            .iter()
            .zip(orig[40..].iter().zip(mask.iter()))
            .all(|(&a, (&b, &c))| a == b ^ c));

        let mut buf2 = orig.clone();
        mgf.mask_in(buf2.as_mut_slice(), 0..40, 40..100).unwrap();
        let mask = mgf.generate(&orig[40..], 40).unwrap();
        assert_eq!(&buf2[40..], &orig[40..]);
        assert!(buf2[..40]
            .iter()
            .zip(orig[..40].iter().zip(mask.iter()))
            .all(|(&a, (&b, &c))| a == b ^ c));
    }
}
