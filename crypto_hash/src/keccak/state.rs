use std::ops::{BitXorAssign, Deref, DerefMut};

/// 1600位的状态数组, 由25条64位的lane组成. <br>
///
/// lane (x,y) 保存在`self.0[x + 5*y]`, 其中第z位对应lane的第z位(小端序).
///
/// 每个step mapping都是值到值的变换, 不会原地修改输入状态.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct StateArray(pub [u64; 25]);

/// - theta: 通过y轴lane的异或压缩出列奇偶`C[x]`, `D[x] = C[x-1] ^ C[x+1]`, 再将`D[x]`异或到x列的每条lane;
/// - rho: 每条lane按旋转表`ROT[x][y]`循环左移;
/// - pi: lane (x,y) 移动到`(y, (2x+3y) mod 5)`;
/// - chi: 将每条x轴上的lane替换为`a[x] ^ (!a[x+1] & a[x+2])`;
/// - iota: 将当前轮的轮常数异或到lane (0,0);
pub(crate) struct StepMapping;

impl StateArray {
    pub const X_SIZE: usize = 5;
    pub const Y_SIZE: usize = 5;
    pub const LANES: usize = Self::X_SIZE * Self::Y_SIZE;
    pub const ROUNDS: usize = 24;

    #[rustfmt::skip]
    const RC: [u64; Self::ROUNDS] = [
        0x0000000000000001,0x0000000000008082,0x800000000000808a,0x8000000080008000,0x000000000000808b,0x0000000080000001,
        0x8000000080008081,0x8000000000008009,0x000000000000008a,0x0000000000000088,0x0000000080008009,0x000000008000000a,
        0x000000008000808b,0x800000000000008b,0x8000000000008089,0x8000000000008003,0x8000000000008002,0x8000000000000080,
        0x000000000000800a,0x800000008000000a,0x8000000080008081,0x8000000000008080,0x0000000080000001,0x8000000080008008,
    ];

    // 按`[x][y]`索引
    #[rustfmt::skip]
    const ROT: [[u32; Self::Y_SIZE]; Self::X_SIZE] = [
        [0, 1, 62, 28, 27],
        [36, 44, 6, 55, 20],
        [3, 10, 43, 25, 39],
        [41, 45, 15, 21, 8],
        [18, 2, 61, 56, 14],
    ];

    pub const fn zero() -> Self {
        Self([0u64; Self::LANES])
    }

    #[inline]
    pub const fn index(x: usize, y: usize) -> usize {
        x + Self::X_SIZE * y
    }

    pub const fn round_constant(round_idx: usize) -> u64 {
        Self::RC[round_idx]
    }

    pub const fn rotation(x: usize, y: usize) -> u32 {
        Self::ROT[x][y]
    }

    /// 单轮置换: `iota(chi(pi(rho(theta(s)))))`
    pub fn round(self, round_idx: usize) -> Self {
        let s = StepMapping::theta(&self);
        let s = StepMapping::rho(&s);
        let s = StepMapping::pi(&s);
        let s = StepMapping::chi(&s);
        StepMapping::iota(round_idx, &s)
    }

    /// 24轮置换
    pub fn permute(self) -> Self {
        (0..Self::ROUNDS).fold(self, |s, ri| s.round(ri))
    }
}

impl StepMapping {
    fn theta(s: &StateArray) -> StateArray {
        let mut c = [0u64; StateArray::X_SIZE];
        for (x, c) in c.iter_mut().enumerate() {
            *c = (0..StateArray::Y_SIZE).fold(0, |a, y| a ^ s[StateArray::index(x, y)]);
        }

        let mut out = *s;
        for x in 0..StateArray::X_SIZE {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5];
            for y in 0..StateArray::Y_SIZE {
                out[StateArray::index(x, y)] ^= d;
            }
        }

        out
    }

    fn rho(s: &StateArray) -> StateArray {
        let mut out = StateArray::zero();
        for x in 0..StateArray::X_SIZE {
            for y in 0..StateArray::Y_SIZE {
                let i = StateArray::index(x, y);
                out[i] = s[i].rotate_left(StateArray::rotation(x, y));
            }
        }

        out
    }

    fn pi(s: &StateArray) -> StateArray {
        let mut out = StateArray::zero();
        for x in 0..StateArray::X_SIZE {
            for y in 0..StateArray::Y_SIZE {
                out[StateArray::index(y, (2 * x + 3 * y) % 5)] = s[StateArray::index(x, y)];
            }
        }

        out
    }

    fn chi(s: &StateArray) -> StateArray {
        let mut out = StateArray::zero();
        for y in 0..StateArray::Y_SIZE {
            for x in 0..StateArray::X_SIZE {
                out[StateArray::index(x, y)] = s[StateArray::index(x, y)]
                    ^ (!s[StateArray::index((x + 1) % 5, y)] & s[StateArray::index((x + 2) % 5, y)]);
            }
        }

        out
    }

    fn iota(round_idx: usize, s: &StateArray) -> StateArray {
        let mut out = *s;
        out[0] ^= StateArray::round_constant(round_idx);
        out
    }
}

impl BitXorAssign<&Self> for StateArray {
    fn bitxor_assign(&mut self, rhs: &Self) {
        self.0.iter_mut().zip(rhs.0.iter()).for_each(|(a, &b)| *a ^= b);
    }
}

impl Deref for StateArray {
    type Target = [u64; 25];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for StateArray {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[cfg(feature = "sec-zeroize")]
impl zeroize::Zeroize for StateArray {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
