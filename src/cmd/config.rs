use std::sync::OnceLock;

use clap::{ArgMatches, Command};
use config::Config;
use crypto_hash::{HashError, SpongeParams};
use serde::{Deserialize, Serialize};

use crate::cmd::Cmd;
use crate::error::SpongeError;

static CONFIG: OnceLock<SpongeConfig> = OnceLock::new();

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub struct OaepConfig {
    // encoded block byte size
    pub k: usize,
    pub rate_bits: usize,
    pub output_bits: usize,
}

impl Default for OaepConfig {
    fn default() -> Self {
        Self {
            k: 256,
            rate_bits: 1152,
            output_bits: 256,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub struct SpongeConfig {
    pub rate_bits: usize,
    pub output_bits: usize,

    // maximum creatable threads
    pub threads: usize,

    // candidates per parallel search round
    pub search_batch: u64,

    pub oaep: OaepConfig,
}

impl Default for SpongeConfig {
    fn default() -> Self {
        Self {
            rate_bits: 1152,
            output_bits: 224,
            threads: (num_cpus::get() >> 1).max(1),
            search_batch: 4096,
            oaep: OaepConfig::default(),
        }
    }
}

impl SpongeConfig {
    /// 未调用`init`时返回默认配置叠加环境变量
    pub fn config() -> &'static Self {
        CONFIG.get_or_init(|| {
            Self::load(None).unwrap_or_else(|e| {
                log::warn!("load config failed, use the default config: {e}");
                Self::default()
            })
        })
    }

    /// 只在第一次调用时生效
    pub fn init(f: Option<&str>) -> Result<&'static Self, SpongeError> {
        if let Some(c) = CONFIG.get() {
            return Ok(c);
        }

        let c = Self::load(f)?;
        Ok(CONFIG.get_or_init(|| c))
    }

    /// 默认值 < 配置文件 < `SPONGE_`前缀的环境变量, 嵌套字段用`__`分隔, 如`SPONGE_OAEP__K`
    pub fn load(f: Option<&str>) -> Result<Self, SpongeError> {
        Self::load_with_env(f, Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("SPONGE")
            .prefix_separator("_")
            .try_parsing(true)
            .separator("__")
    }

    fn load_with_env(f: Option<&str>, env: config::Environment) -> Result<Self, SpongeError> {
        let cfg_err = |e: config::ConfigError| SpongeError::ConfigFailed(e.to_string());

        let default_config = Config::try_from(&SpongeConfig::default()).map_err(cfg_err)?;

        let mut config = Config::builder().add_source(default_config);

        if let Some(f) = f {
            config = config.add_source(config::File::with_name(f).required(false));
        }

        config = config.add_source(env);

        let config = config.build().map_err(cfg_err)?;
        let mut sconfig: SpongeConfig = config.try_deserialize().map_err(cfg_err)?;

        sconfig.threads = sconfig.threads.max(1);
        sconfig.search_batch = sconfig.search_batch.max(1);

        log::trace!("{:?}", sconfig);

        Ok(sconfig)
    }

    pub fn hash_params(&self) -> Result<SpongeParams, HashError> {
        SpongeParams::new(self.rate_bits, self.output_bits)
    }
}

pub struct ConfigCmd;

impl Cmd for ConfigCmd {
    const NAME: &'static str = "config";

    fn cmd() -> Command {
        Command::new(Self::NAME).about("print the effective config as json")
    }

    fn run(&self, _m: &ArgMatches) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(SpongeConfig::config())?);
        Ok(())
    }
}
