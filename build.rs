use chrono::{DateTime, Local};
use std::{process::Command, time::SystemTime};

fn git(args: &[&str]) -> anyhow::Result<String> {
    let output = Command::new("git").args(args).output()?;

    if output.status.success() {
        Ok(String::from_utf8(output.stdout)?.trim().to_string())
    } else {
        // 不在git仓库中
        println!(
            "cargo:warning=git {}: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
                .lines()
                .next()
                .unwrap_or_default()
        );
        Ok(String::default())
    }
}

/// git无法执行时, 若存在`IGNORE_CMD_ERR`则返回空字符串
fn git_or_empty(args: &[&str], ignore: bool) -> String {
    git(args).unwrap_or_else(|e| {
        if !ignore {
            panic!(
                "git {} run failed: {e}\nYou can use the environment variable `IGNORE_CMD_ERR` to disable this panic",
                args.join(" ")
            );
        }
        String::default()
    })
}

fn main() {
    let ignore = std::env::var("IGNORE_CMD_ERR").is_ok();

    let mut commit = git_or_empty(&["log", "-n", "1", "--pretty=format:%H"], ignore);
    commit.truncate(8);
    let branch = git_or_empty(&["branch", "--show-current"], ignore);

    // 编译期是否启用了敏感数据清零
    let zeroize = if std::env::var("CARGO_FEATURE_SEC_ZEROIZE").is_ok() {
        "zeroize"
    } else {
        "no-zeroize"
    };

    println!(
        "cargo:rustc-env=SPONGE_VERSION_INFO={}-{}-{zeroize}",
        env!("CARGO_PKG_VERSION"),
        DateTime::<Local>::from(SystemTime::now()).format("%Y/%m/%d-%H:%M:%S:%Z")
    );
    println!("cargo:rustc-env=SPONGE_GIT_INFO={branch}-{commit}");

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=IGNORE_CMD_ERR");
}
