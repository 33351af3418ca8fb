//! # Keccak置换和海绵结构
//!
//! - 置换: 25条64位lane组成的1600位状态, 每轮依次执行`theta, rho, pi, chi, iota`, 共24轮;
//! - 填充: `M || 0x06 || 0^j || 0x80`, 只差1字节时为`M || 0x86`;
//! - 吸收: 块内第j个字节异或到lane `j mod 25`的低8位, 每块之后置换一次;
//! - 挤压: 按小端序从lane中读出字节, 只挤压一次;
//!
//! 注意: 这里的旋转表按`[x][y]`索引, 吸收和挤压的字节布局也和FIPS 202不同,
//! 因此输出和标准SHA-3不兼容.
//!

mod state;
pub use state::StateArray;

pub mod sponge;
pub use sponge::{absorb, pad, squeeze};
