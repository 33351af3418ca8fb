use crate::keccak::StateArray;
use crate::{HashError, SpongeParams};

/// 在消息后补`0x06 || 0^j || 0x80`, 使得字节长度为`rate_bytes`的整数倍. <br>
///
/// 消息长度已经是`rate_bytes`的整数倍时仍会补满一整个块.
pub(crate) fn pad_in_place(s: &mut Vec<u8>, rate_bytes: usize) {
    let q = rate_bytes - (s.len() % rate_bytes);
    if q == 1 {
        // 0x06 | 0x80
        s.push(0x86);
    } else {
        s.push(0x06);
        s.resize(s.len() + q - 2, 0);
        s.push(0x80);
    }
}

/// `S[j mod 25] ^= P[j]`, 然后执行一次置换
pub(crate) fn absorb_block(state: &StateArray, block: &[u8]) -> StateArray {
    let mut s = *state;
    block
        .iter()
        .enumerate()
        .for_each(|(j, &b)| s[j % StateArray::LANES] ^= b as u64);
    s.permute()
}

pub(crate) fn squeeze_into(state: &StateArray, output_bytes: usize, out: &mut Vec<u8>) {
    out.extend((0..output_bytes).map(|i| (state[i >> 3] >> ((i & 7) << 3)) as u8));
}

/// 返回`msg || pad`
pub fn pad(msg: &[u8], rate_bits: usize) -> Result<Vec<u8>, HashError> {
    let rate_bytes = SpongeParams::check_rate(rate_bits)?;
    let mut s = Vec::with_capacity(msg.len() + rate_bytes);
    s.extend_from_slice(msg);
    pad_in_place(&mut s, rate_bytes);
    Ok(s)
}

/// 从全零状态开始按`rate_bits / 8`分块吸收已填充的消息, 返回最后一块置换后的状态.
pub fn absorb(padded: &[u8], rate_bits: usize) -> Result<StateArray, HashError> {
    let rate_bytes = SpongeParams::check_rate(rate_bits)?;
    if padded.len() % rate_bytes != 0 {
        return Err(HashError::MismatchingByteLen {
            target: (padded.len() / rate_bytes + 1) * rate_bytes,
            real: padded.len(),
        });
    }

    Ok(padded
        .chunks_exact(rate_bytes)
        .fold(StateArray::zero(), |s, block| absorb_block(&s, block)))
}

/// 从状态中按小端序读出`output_bits / 8`字节, 不会再执行置换.
pub fn squeeze(state: &StateArray, output_bits: usize) -> Result<Vec<u8>, HashError> {
    let output_bytes = SpongeParams::check_output(output_bits)?;
    let mut out = Vec::with_capacity(output_bytes);
    squeeze_into(state, output_bytes, &mut out);
    Ok(out)
}
