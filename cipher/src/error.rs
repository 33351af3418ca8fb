use crypto_hash::HashError;
use std::{error::Error, fmt::Display};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CipherError {
    /// 不合法的哈希参数
    Hash(HashError),

    /// 不合法的配置参数
    Config(String),

    /// 消息字节长度`real`超过最大长度`max`
    MessageTooLong { max: usize, real: usize },

    /// 找不到分隔符或编码格式错误
    MalformedPadding(String),

    /// 解码出的标签哈希和期望的不一致
    LabelMismatch,

    /// 不合法分组大小
    InvalidBlockSize { target: usize, real: usize },
}

impl Display for CipherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hash(e) => f.write_fmt(format_args!("{e}")),
            Self::Config(s) => f.write_str(s.as_str()),
            Self::MessageTooLong { max, real } => f.write_fmt(format_args!(
                "The message length `{real}` is too long, it should not exceed `{max}` bytes"
            )),
            Self::MalformedPadding(s) => f.write_str(s.as_str()),
            Self::LabelMismatch => f.write_str("The decoded label hash not match to the label"),
            Self::InvalidBlockSize { target, real } => f.write_fmt(format_args!(
                "Invalid block data size `{real}` not match to target size `{target}`"
            )),
        }
    }
}

impl Error for CipherError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Hash(e) => Some(e),
            _ => None,
        }
    }
}

impl From<HashError> for CipherError {
    fn from(value: HashError) -> Self {
        Self::Hash(value)
    }
}
