mod config;
mod types;
pub mod validation;

pub use config::{RunConfig, load_config};
pub use types::{Cli, FileConfig, Report};

use clap::Parser;

#[must_use]
pub fn args_checks() -> Cli {
    Cli::parse()
}
