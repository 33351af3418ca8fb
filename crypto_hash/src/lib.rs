use std::io::Write;

mod error;
pub use error::HashError;

pub mod keccak;

mod params;
pub use params::SpongeParams;

mod hasher;
pub use hasher::{hash, SpongeHash};

pub mod search;

/// 运行时确定参数的哈希算法实现该trait. 通过`Write` trait或`write_x`将数据更新到`self`中后,
/// 使用`finish_x`生成消息摘要.
///
/// 可用于如下应用中:
/// - 掩码生成函数(MGF1);
/// - OAEP中标签的哈希;
pub trait DigestX: Write {
    /// 每次按块处理消息的块的位长度
    fn block_bits_x(&self) -> usize;
    /// 生成的摘要的位长度
    fn digest_bits_x(&self) -> usize;
    fn write_x(&mut self, data: &[u8]);
    /// 生成消息摘要, 并重置到初始化状态
    fn finish_x(&mut self) -> Vec<u8>;
    fn reset_x(&mut self);
}
