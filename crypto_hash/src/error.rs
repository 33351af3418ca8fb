use std::{error::Error, fmt::Display};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HashError {
    /// 位率必须是8的倍数, 且在`(0, 1600]`之间
    InvalidRate(usize),

    /// 输出位长度必须是8的倍数, 且在`(0, 1600]`之间
    InvalidOutput(usize),

    /// 实际字节长度`real`和目标字节长度`target`不匹配
    MismatchingByteLen {
        target: usize,
        real: usize,
    },

    Search(String),
}

impl Display for HashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashError::InvalidRate(bits) => f.write_fmt(format_args!(
                "Invalid rate `{bits}` bits, it should be a positive multiple of 8 not greater than 1600"
            )),
            HashError::InvalidOutput(bits) => f.write_fmt(format_args!(
                "Invalid output length `{bits}` bits, it should be a positive multiple of 8 not greater than 1600"
            )),
            HashError::MismatchingByteLen { target, real } => f.write_fmt(format_args!(
                "real byte length `{real}` not match to target byte length `{target}`"
            )),
            HashError::Search(s) => f.write_str(s.as_str()),
        }
    }
}

impl Error for HashError {}
