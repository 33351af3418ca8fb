pub mod cmd;
pub mod error;

pub fn log_error<T>(x: Result<T, anyhow::Error>) -> Option<T> {
    x.map_err(|e| {
        log::error!("{e:#}");
    })
    .ok()
}

#[cfg(test)]
mod tests {
    #[test]
    fn build_info() {
        let version = env!("SPONGE_VERSION_INFO");
        assert!(version.starts_with(env!("CARGO_PKG_VERSION")));

        #[cfg(feature = "sec-zeroize")]
        assert!(version.ends_with("-zeroize"));
        #[cfg(not(feature = "sec-zeroize"))]
        assert!(version.ends_with("-no-zeroize"));

        let (_branch, commit) = env!("SPONGE_GIT_INFO").rsplit_once('-').unwrap();
        assert!(commit.len() <= 8);
    }
}
