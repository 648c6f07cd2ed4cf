use clap::Parser;

use crate::cmd::Commands;

/// Session-memory business dashboard.
/// Nothing is persisted; every invocation starts from the seeded sample
/// session.
#[derive(Parser)]
#[command(name = "bm", version, about = "Business management dashboard CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}
