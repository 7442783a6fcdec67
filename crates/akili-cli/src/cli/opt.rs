use clap::ArgAction;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "akili", about = "Progress-gated AI curriculum for the terminal")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Run(Run),

    Validate(Validate),
}

#[derive(Debug, Parser)]
pub(crate) struct Run {
    #[arg(short, long)]
    pub(crate) debug: bool,

    /// Directory holding the persisted learner state
    #[arg(long, env = "AKILI_DATA_DIR", default_value = ".akili")]
    pub(crate) data_dir: PathBuf,

    /// Directory with curriculum YAML replacing the built-in tracks
    #[arg(short, long, env = "AKILI_CURRICULUM")]
    pub(crate) curriculum: Option<PathBuf>,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub(crate) api_key: Option<String>,

    #[arg(long, env = "AKILI_API_BASE")]
    pub(crate) api_base: Option<String>,

    #[arg(short, long, env = "AKILI_MODEL")]
    pub(crate) model: Option<String>,
}

#[derive(Debug, Parser)]
pub(crate) struct Validate {
    #[arg(required = true)]
    pub(crate) paths: Vec<PathBuf>,

    #[arg(
        long,
        default_missing_value("true"),
        default_value("true"),
        num_args(0..=1),
        require_equals(true),
        action = ArgAction::Set
    )]
    pub(crate) strict: bool,
}
