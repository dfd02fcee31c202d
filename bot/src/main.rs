use std::num::NonZeroUsize;

use bot_config::{load_config_from, write_template, BotConfig, ScratchDir};
use clap::Parser;
use eyre::WrapErr;
use string_helpers::chunker;
use tracing::info;

mod cli;

use cli::{Command, RootArgs};

const ADMINS_PER_LINE: usize = 5;

fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = RootArgs::parse();

    match args.command {
        Command::Check => {
            let config = load_config_from(&args.config).wrap_err("load config")?;
            print_summary(&config);
            println!("config=ok");
        }
        Command::Template => {
            write_template(&args.config)?;
            println!("template={}", args.config.display());
        }
        Command::Run { scratch_parent } => {
            let config = load_config_from(&args.config).wrap_err("load config")?;
            let scratch = match scratch_parent {
                Some(parent) => ScratchDir::init_in(parent),
                None => ScratchDir::init(),
            }
            .wrap_err("initialize scratch directory")?;

            info!(
                scratch = %scratch.path().display(),
                ps4_ip = config.ps4_ip(),
                "startup checks passed"
            );
            // The Discord command layer takes over from here in the full bot.
            println!("ready scratch={}", scratch.path().display());
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

fn print_summary(config: &BotConfig) {
    println!("ps4_ip={}", config.ps4_ip());
    println!("user_id={}", config.user_id());
    println!(
        "google_credentials_file={}",
        config.google_credentials_file().display()
    );
    println!("allow_bot_usage_in_dms={}", config.allow_bot_usage_in_dms());

    let per_line = NonZeroUsize::new(ADMINS_PER_LINE).unwrap_or(NonZeroUsize::MIN);
    for admins in chunker(config.bot_admins(), per_line) {
        let ids = admins
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        println!("bot_admins={ids}");
    }

    println!("built_in_saves={}", config.built_in_saves().len());
    for save in config.built_in_saves().values() {
        println!("  {save}");
    }
}
