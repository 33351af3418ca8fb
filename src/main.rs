use clap::{value_parser, Arg, ArgAction, Command};
use log::LevelFilter;
use spongekit::cmd::{Cmd, ConfigCmd, HashCmd, MgfCmd, OaepCmd, SearchCmd, SpongeConfig};
use spongekit::log_error;
use std::io::Read;

fn run(app: &clap::ArgMatches) -> anyhow::Result<()> {
    SpongeConfig::init(app.get_one::<String>("config").map(|s| s.as_str()))?;

    let Some((s, m)) = app.subcommand() else {
        println!(
            "{} {} {}",
            env!("CARGO_PKG_NAME"),
            env!("SPONGE_VERSION_INFO"),
            env!("SPONGE_GIT_INFO")
        );
        return Ok(());
    };

    let mut pdata = Vec::with_capacity(1024);
    if app.get_flag("pipe") {
        let _len = std::io::stdin().lock().read_to_end(&mut pdata)?;
    }

    match s {
        HashCmd::NAME => HashCmd::new(pdata.as_slice()).run(m),
        MgfCmd::NAME => MgfCmd::new(pdata.as_slice()).run(m),
        OaepCmd::NAME => OaepCmd::new(pdata.as_slice()).run(m),
        SearchCmd::NAME => SearchCmd::new(pdata.as_slice()).run(m),
        ConfigCmd::NAME => ConfigCmd.run(m),
        name => anyhow::bail!("unsupport for {}", name),
    }
}

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let app = Command::new("sponge")
        .version(env!("SPONGE_VERSION_INFO"))
        .about("keccak sponge hash, mgf1 and oaep padding")
        .arg(
            Arg::new("pipe")
                .long("pipe")
                .short('p')
                .action(ArgAction::SetTrue)
                .required(false)
                .help("read the input data from stdin"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .action(ArgAction::Set)
                .value_parser(value_parser!(String))
                .required(false)
                .help("the config file path, json or json5"),
        )
        .subcommand(HashCmd::cmd())
        .subcommand(MgfCmd::cmd())
        .subcommand(OaepCmd::cmd())
        .subcommand(SearchCmd::cmd())
        .subcommand(ConfigCmd::cmd())
        .get_matches();

    if log_error(run(&app)).is_none() {
        std::process::exit(1);
    }
}
