use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "save-bot")]
#[command(about = "PS4 save transfer bot: config loading and startup checks")]
#[command(arg_required_else_help = true)]
pub struct RootArgs {
    #[arg(
        long,
        global = true,
        default_value = bot_config::DEFAULT_CONFIG_PATH,
        value_name = "FILE",
        help = "Path to the YAML config file"
    )]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(about = "Validate the config file and print a summary")]
    Check,
    #[command(about = "Write the example config file, replacing any existing one")]
    Template,
    #[command(about = "Load the config and prepare the scratch directory")]
    Run {
        #[arg(
            long,
            value_name = "DIR",
            help = "Create the scratch directory here instead of the system temp dir"
        )]
        scratch_parent: Option<PathBuf>,
    },
}
