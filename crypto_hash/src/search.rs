//! 寻找摘要的十六进制表示以指定个数的`0`开头的消息.
//!
//! 候选消息为`base || decimal(counter)`, `counter`从0开始递增. 每批候选消息并行计算,
//! 返回计数器最小的命中结果, 因此结果和顺序搜索一致.

use crate::{HashError, SpongeParams};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchHit {
    pub counter: u64,
    pub message: Vec<u8>,
    pub digest: Vec<u8>,
}

/// 摘要的十六进制表示是否以`zeros`个`0`开头
pub fn has_leading_zeros(digest: &[u8], zeros: usize) -> bool {
    if zeros > (digest.len() << 1) {
        return false;
    }

    let (full, half) = (zeros >> 1, zeros & 1);
    digest[..full].iter().all(|&b| b == 0) && (half == 0 || digest[full] >> 4 == 0)
}

fn candidate(base: &[u8], counter: u64) -> Vec<u8> {
    let c = counter.to_string();
    let mut msg = Vec::with_capacity(base.len() + c.len());
    msg.extend_from_slice(base);
    msg.extend_from_slice(c.as_bytes());
    msg
}

/// - `threads`: 为0时使用全部CPU核心;
/// - `batch`: 每批并行测试的候选个数;
pub fn find_leading_zeros(
    base: &[u8],
    params: SpongeParams,
    zeros: usize,
    threads: usize,
    batch: u64,
) -> Result<SearchHit, HashError> {
    if zeros > (params.output_bytes() << 1) {
        return Err(HashError::Search(format!(
            "Invalid zeros `{}`, the digest only has {} hex digits",
            zeros,
            params.output_bytes() << 1
        )));
    }

    let threads = if threads == 0 {
        num_cpus::get()
    } else {
        threads
    };
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| HashError::Search(format!("build search thread pool failed: {e}")))?;

    let batch = batch.max(1);
    log::debug!("search {zeros} leading zeros with {params} on {threads} threads");

    pool.install(|| {
        let mut start = 0u64;
        loop {
            let end = start.saturating_add(batch);
            let hit = (start..end).into_par_iter().find_map_first(|counter| {
                let message = candidate(base, counter);
                let digest = params.hash(message.as_slice());
                has_leading_zeros(digest.as_slice(), zeros).then_some(SearchHit {
                    counter,
                    message,
                    digest,
                })
            });

            if let Some(hit) = hit {
                return Ok(hit);
            }

            if end == u64::MAX {
                return Err(HashError::Search(
                    "the counter space was exhausted".to_string(),
                ));
            }

            log::trace!("no hit in [{start}, {end})");
            start = end;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{find_leading_zeros, has_leading_zeros};
    use crate::{HashError, SpongeParams};

    #[test]
    fn leading_zero_digits() {
        let d = [0x00, 0x0f, 0xff];
        assert!(has_leading_zeros(&d, 0));
        assert!(has_leading_zeros(&d, 2));
        assert!(has_leading_zeros(&d, 3));
        assert!(!has_leading_zeros(&d, 4));
        assert!(!has_leading_zeros(&d, 7));
        assert!(has_leading_zeros(&[0, 0], 4));
    }

    #[test]
    fn search_example_message() {
        let hit = find_leading_zeros(b"Example message!", SpongeParams::KECCAK_224, 2, 2, 64)
            .unwrap();
        assert_eq!(hit.counter, 321);
        assert_eq!(hit.message, b"Example message!321".to_vec());
        assert_eq!(hit.digest.len(), 28);
        assert_eq!(
            hit.digest,
            hex::decode("00560aa05e019e738f7c56ebe68aa32632827d5b2d1f531bede1e734").unwrap()
        );

        // 批大小不影响结果
        let hit = find_leading_zeros(b"Example message!", SpongeParams::KECCAK_224, 3, 0, 1000)
            .unwrap();
        assert_eq!(hit.counter, 7938);
        assert_eq!(hit.message, b"Example message!7938".to_vec());
        assert!(has_leading_zeros(hit.digest.as_slice(), 3));
    }

    #[test]
    fn zero_digits_hits_first_candidate() {
        let hit = find_leading_zeros(b"x", SpongeParams::KECCAK_256, 0, 1, 8).unwrap();
        assert_eq!(hit.counter, 0);
        assert_eq!(hit.message, b"x0".to_vec());
    }

    #[test]
    fn too_many_zeros() {
        assert!(matches!(
            find_leading_zeros(b"x", SpongeParams::KECCAK_224, 57, 1, 8),
            Err(HashError::Search(_))
        ));
    }
}
