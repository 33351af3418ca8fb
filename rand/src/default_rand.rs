use crate::Rand;
use xrand::rngs::OsRng;
use xrand::RngCore;

/// 默认使用OsRng <br>
#[derive(Copy, Clone, Default)]
pub struct DefaultRand {
    rng: OsRng,
}

impl Rand for DefaultRand {
    fn rand(&mut self, random: &mut [u8]) {
        self.rng.fill_bytes(random);
    }
}

/// 循环重放`bytes`, 为空时输出全0.
#[derive(Clone, Debug, Default)]
pub struct FixedRand {
    bytes: Vec<u8>,
    pos: usize,
}

impl FixedRand {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            pos: 0,
        }
    }
}

impl Rand for FixedRand {
    fn rand(&mut self, random: &mut [u8]) {
        if self.bytes.is_empty() {
            random.fill(0);
            return;
        }

        for b in random.iter_mut() {
            *b = self.bytes[self.pos];
            self.pos = (self.pos + 1) % self.bytes.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{DefaultRand, FixedRand, Rand, SeedableRng, StdRng};

    #[test]
    fn fixed_rand_replays() {
        let mut r = FixedRand::new(&[1, 2, 3]);
        assert_eq!(r.random_bytes(2), vec![1, 2]);
        assert_eq!(r.random_bytes(5), vec![3, 1, 2, 3, 1]);

        let mut r = FixedRand::default();
        assert_eq!(r.random_bytes(3), vec![0, 0, 0]);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let (mut a, mut b) = (StdRng::seed_from_u64(7), StdRng::seed_from_u64(7));
        assert_eq!(a.random_bytes(32), b.random_bytes(32));
    }

    #[test]
    fn os_rng_fills() {
        let mut r = DefaultRand::default();
        let (x, y) = (r.random_bytes(32), r.random_bytes(32));
        assert_eq!(x.len(), 32);
        assert_ne!(x, y);
    }
}
