use crate::oaep::MGF1;
use crate::{CipherError, Decode, Encode, Rand};
use crypto_hash::DigestX;
use std::cell::RefCell;
use std::ops::Range;

/// Optimal Asymmetric Encryption Padding
///
/// `EM = 0x00 || maskedSeed || maskedDB`, 其中`DB = lHash || PS || 0x01 || M`.
pub struct OAEPEncoding<H: DigestX, R: Rand> {
    mgf: RefCell<MGF1<H>>,
    rng: RefCell<R>,
    label_hash: Vec<u8>,
    klen: usize,
    hlen: usize,
}

impl<H: DigestX, R: Rand> OAEPEncoding<H, R> {
    /// - `label`: 和消息相关联的标签;
    /// - `k`: 编码块的字节长度, 即RSA模数的字节长度;
    pub fn new(hasher: H, rng: R, label: &[u8], k: usize) -> Result<Self, CipherError> {
        let hlen = (hasher.digest_bits_x() + 7) >> 3;
        if hlen == 0 {
            return Err(CipherError::Config(
                "oaep: the hash digest length must be positive".to_string(),
            ));
        }

        if k < (hlen << 1) + 2 {
            return Err(CipherError::Config(format!(
                "oaep: the block length `{k}` is too short, it should be at least {}",
                (hlen << 1) + 2
            )));
        }

        let mut mgf = MGF1::new(hasher);
        let label_hash = mgf.digest(label);

        Ok(Self {
            mgf: RefCell::new(mgf),
            rng: RefCell::new(rng),
            label_hash,
            klen: k,
            hlen,
        })
    }

    pub fn set_label(&mut self, label: &[u8]) {
        self.label_hash = self.mgf.get_mut().digest(label);
    }

    pub const fn key_len(&self) -> usize {
        self.klen
    }

    pub const fn hash_len(&self) -> usize {
        self.hlen
    }

    pub const fn max_msg_len(&self) -> usize {
        self.key_len() - (self.hash_len() << 1) - 2
    }

    fn bounds(&self) -> (Range<usize>, Range<usize>) {
        (1..(self.hlen + 1), (self.hlen + 1)..self.klen)
    }

    pub fn encode(&self, msg: &[u8]) -> Result<Vec<u8>, CipherError> {
        let mut em = Vec::with_capacity(self.klen);
        Encode::encode(self, msg, &mut em)?;
        Ok(em)
    }

    pub fn decode(&self, em: &[u8]) -> Result<Vec<u8>, CipherError> {
        let mut msg = Vec::with_capacity(self.max_msg_len());
        Decode::decode(self, em, &mut msg)?;
        Ok(msg)
    }

    fn encode_inner(&self, msg: &[u8], out: &mut Vec<u8>) -> Result<(), CipherError> {
        let (klen, hlen) = (self.key_len(), self.hash_len());
        if msg.len() > self.max_msg_len() {
            return Err(CipherError::MessageTooLong {
                max: self.max_msg_len(),
                real: msg.len(),
            });
        }

        // em = 0x00 || seed || db
        let (mut em, mut idx) = (vec![0u8; klen], 1);

        self.rng.borrow_mut().rand(&mut em[idx..(idx + hlen)]);
        idx += hlen;

        // db = lHash || ps || 0x01 || M
        em[idx..(idx + hlen)].copy_from_slice(self.label_hash.as_slice());
        idx += hlen;
        idx += self.max_msg_len() - msg.len();
        em[idx] = 0x01;
        idx += 1;
        em[idx..].copy_from_slice(msg);

        let (seed_bound, db_bound) = self.bounds();
        let mut mgf = self.mgf.borrow_mut();
        // maskedDB = db ^ MGF(seed, k - hLen - 1)
        mgf.mask_in(em.as_mut_slice(), db_bound.clone(), seed_bound.clone())?;
        // maskedSeed = seed ^ MGF(maskedDB, hLen)
        mgf.mask_in(em.as_mut_slice(), seed_bound, db_bound)?;

        out.extend_from_slice(em.as_slice());

        #[cfg(feature = "sec-zeroize")]
        zeroize::Zeroize::zeroize(&mut em);

        Ok(())
    }

    fn decode_inner(&self, em: &[u8], out: &mut Vec<u8>) -> Result<(), CipherError> {
        let (klen, hlen) = (self.key_len(), self.hash_len());
        if em.len() != klen {
            return Err(CipherError::InvalidBlockSize {
                target: klen,
                real: em.len(),
            });
        }

        if em[0] != 0 {
            return Err(CipherError::MalformedPadding(format!(
                "oaep: the leading byte `{:#04x}` of the encoded block is not 0x00",
                em[0]
            )));
        }

        let mut m = em.to_vec();
        let (seed_bound, db_bound) = self.bounds();
        let mut mgf = self.mgf.borrow_mut();
        // seed = maskedSeed ^ MGF(maskedDB, hLen)
        mgf.mask_in(m.as_mut_slice(), seed_bound.clone(), db_bound.clone())?;
        // db = maskedDB ^ MGF(seed, k - hLen - 1)
        mgf.mask_in(m.as_mut_slice(), db_bound.clone(), seed_bound)?;
        drop(mgf);

        let (lhash, rest) = m[db_bound].split_at(hlen);
        let res = match rest.iter().position(|&x| x == 0x01) {
            None => Err(CipherError::MalformedPadding(
                "oaep: the 0x01 delimiter was not found in the data block".to_string(),
            )),
            Some(_) if lhash != self.label_hash.as_slice() => Err(CipherError::LabelMismatch),
            Some(pos) => {
                out.extend_from_slice(&rest[(pos + 1)..]);
                Ok(())
            }
        };

        #[cfg(feature = "sec-zeroize")]
        zeroize::Zeroize::zeroize(&mut m);

        res
    }
}

impl<H: DigestX, R: Rand> Encode for OAEPEncoding<H, R> {
    fn encode(&self, msg: &[u8], em: &mut Vec<u8>) -> Result<(), CipherError> {
        self.encode_inner(msg, em).map_err(|e| {
            log::debug!("{e}");
            e
        })
    }
}

impl<H: DigestX, R: Rand> Decode for OAEPEncoding<H, R> {
    fn decode(&self, em: &[u8], msg: &mut Vec<u8>) -> Result<(), CipherError> {
        self.decode_inner(em, msg).map_err(|e| {
            log::debug!("{e}");
            e
        })
    }
}

impl<H, R> Clone for OAEPEncoding<H, R>
where
    H: DigestX + Clone,
    R: Rand + Clone,
{
    fn clone(&self) -> Self {
        Self {
            mgf: self.mgf.clone(),
            rng: self.rng.clone(),
            label_hash: self.label_hash.clone(),
            klen: self.klen,
            hlen: self.hlen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::OAEPEncoding;
    use crate::{CipherError, FixedRand, SeedableRng, StdRng};
    use crypto_hash::{SpongeHash, SpongeParams};

    fn oaep(p: SpongeParams, label: &[u8], k: usize) -> OAEPEncoding<SpongeHash, StdRng> {
        OAEPEncoding::new(SpongeHash::new(p), StdRng::seed_from_u64(0x5eed), label, k).unwrap()
    }

    #[test]
    fn known_encoding() {
        let cases = [
            (
                SpongeParams::new(1152, 256).unwrap(),
                (0..32u8).collect::<Vec<_>>(),
                &b""[..],
                256,
                &b"Hello, RSA with OAEP!"[..],
                "00f3d5c6426d86f587e799d525b35a901db8fd48ad0650dddf0f5e6ef005594f4f90c081fad0e6fa2e1e01efc19b90477f7ac96cdebaba0534ed5ff058cf8802b98afffe74b4469c4c5b6b584935e23b76be68e44b892b4e0d76c32308ea3e104d67c4dac2365bc12cd2c5348a52873da398b7caad3064f7d5efff97feb65b0070184f52fe49203f5eedd192f5d1ed31a6574185f7827fb34b1c40b4d00960a19459310bdf48c78a0ce79acf2884ecb0bec89c5811d611973822e5c0887087b250144de435485a3909e1133dd9e52438da179ff975d8caf250323d291587970f5842e1905ad951ac6dd22d5af49d6e5b1d2a68a379087e9a22e9087a6def1ef7",
            ),
            (
                SpongeParams::KECCAK_224,
                vec![0xa5u8; 28],
                &b"label"[..],
                128,
                &b"attack at dawn"[..],
                "00b20e9fd09279bba5602135169cf3dfd0576f9362d779107114d627671fbdbd48cd53565373b6de8e9543654bcbc40708fba65522569a0c75f7ba35c2d5e18030b2e6958c60ccaa466c2c06b47e563ea66be42f2b5d1168484c1ddf82e398d5a806a3a0c7c20774e2a463457871a36e01da76415b15b226c2d68af193ba06fe",
            ),
        ];

        for (i, (p, seed, label, k, msg, tgt)) in cases.into_iter().enumerate() {
            let o = OAEPEncoding::new(SpongeHash::new(p), FixedRand::new(&seed), label, k).unwrap();
            let em = o.encode(msg).unwrap();
            assert_eq!(em, hex::decode(tgt).unwrap(), "case {i} failed");
            assert_eq!(o.decode(em.as_slice()).unwrap(), msg.to_vec(), "case {i} failed");
        }
    }

    #[test]
    fn round_trip() {
        let p = SpongeParams::new(1152, 256).unwrap();
        let o = oaep(p, b"", 256);
        assert_eq!(o.max_msg_len(), 256 - 64 - 2);

        for len in [0, 1, 21, 100, 189, 190] {
            let msg = (0..len).map(|x| (x * 31 + 7) as u8).collect::<Vec<_>>();
            let em = o.encode(msg.as_slice()).unwrap();
            assert_eq!(em.len(), 256, "len {len}");
            assert_eq!(em[0], 0, "len {len}");
            assert_eq!(o.decode(em.as_slice()).unwrap(), msg, "len {len}");
        }
    }

    #[test]
    fn randomized_encoding() {
        let o = oaep(SpongeParams::KECCAK_224, b"ctx", 128);
        let (a, b) = (o.encode(b"same").unwrap(), o.encode(b"same").unwrap());
        assert_ne!(a, b);
        assert_eq!(o.decode(a.as_slice()).unwrap(), b"same".to_vec());
        assert_eq!(o.decode(b.as_slice()).unwrap(), b"same".to_vec());
    }

    #[test]
    fn message_too_long() {
        let o = oaep(SpongeParams::KECCAK_256, b"", 100);
        assert_eq!(o.max_msg_len(), 34);
        assert_eq!(
            o.encode(&[0u8; 35]),
            Err(CipherError::MessageTooLong { max: 34, real: 35 })
        );
        assert_eq!(o.encode(&[0u8; 34]).unwrap().len(), 100);
    }

    #[test]
    fn block_too_short() {
        let r = OAEPEncoding::new(
            SpongeHash::new(SpongeParams::KECCAK_256),
            FixedRand::default(),
            b"",
            65,
        );
        assert!(matches!(r, Err(CipherError::Config(_))));

        // k = 2*hLen + 2 时只能编码空消息
        let o = oaep(SpongeParams::KECCAK_256, b"", 66);
        assert_eq!(o.max_msg_len(), 0);
        let em = o.encode(b"").unwrap();
        assert_eq!(o.decode(em.as_slice()).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn label_mismatch() {
        let p = SpongeParams::KECCAK_256;
        let mut o = oaep(p, b"alice", 200);
        let em = o.encode(b"secret").unwrap();

        o.set_label(b"bob");
        assert_eq!(o.decode(em.as_slice()), Err(CipherError::LabelMismatch));

        o.set_label(b"alice");
        assert_eq!(o.decode(em.as_slice()).unwrap(), b"secret".to_vec());
    }

    #[test]
    fn malformed_blocks() {
        let o = oaep(SpongeParams::KECCAK_256, b"", 128);
        let em = o.encode(b"msg").unwrap();

        assert_eq!(
            o.decode(&em[1..]),
            Err(CipherError::InvalidBlockSize {
                target: 128,
                real: 127
            })
        );

        let mut bad = em.clone();
        bad[0] = 0x01;
        assert!(matches!(
            o.decode(bad.as_slice()),
            Err(CipherError::MalformedPadding(_))
        ));

        let mut flipped = em.clone();
        flipped[1] ^= 0x80;
        assert!(o.decode(flipped.as_slice()).is_err());
    }

    #[test]
    fn missing_delimiter() {
        // 构造一个db中没有0x01的块: 先在明文域构造, 再按编码流程加掩码
        let p = SpongeParams::KECCAK_256;
        let (k, hlen) = (128usize, 32usize);
        let seed = [0x42u8; 32];
        let mut mgf = crate::oaep::MGF1::new(SpongeHash::new(p));

        let mut em = vec![0u8; k];
        em[1..(hlen + 1)].copy_from_slice(&seed);
        em[(hlen + 1)..(2 * hlen + 1)].copy_from_slice(mgf.digest(b"").as_slice());
        mgf.mask_in(em.as_mut_slice(), (hlen + 1)..k, 1..(hlen + 1))
            .unwrap();
        mgf.mask_in(em.as_mut_slice(), 1..(hlen + 1), (hlen + 1)..k)
            .unwrap();

        let o = oaep(p, b"", k);
        assert!(matches!(
            o.decode(em.as_slice()),
            Err(CipherError::MalformedPadding(_))
        ));
    }
}
