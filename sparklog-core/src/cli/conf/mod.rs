mod dump;

pub use dump::*;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Print resolved configuration
    Dump {
        /// Single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
}
