use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tt", about = concat!("[>] tiertask v", env!("CARGO_PKG_VERSION"), " - tiered tasks in your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Task pack file (default: tasks.json)
    #[arg(short = 'p', long = "pack", global = true)]
    pub pack: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks matching a query
    List(ListArgs),
    /// Show task details
    Show(ShowArgs),
    /// Roll a random task from the current tier
    Roll,
    /// Show the current rolled task
    Current,
    /// Mark a task complete
    Done(IdArgs),
    /// Mark a task incomplete again
    Undone(IdArgs),
    /// Show per-tier progress
    Stats,
}

#[derive(Args)]
pub struct ListArgs {
    /// Search text (prefix-matched keywords)
    pub search: Option<String>,

    /// Only this tier (easy, medium, hard, elite, master, grandmaster)
    #[arg(long)]
    pub tier: Option<String>,

    /// Source filter: ca or clog
    #[arg(long)]
    pub source: Option<String>,

    /// Status filter: open or done
    #[arg(long)]
    pub status: Option<String>,

    /// Sort by tier (easiest first)
    #[arg(long)]
    pub sort_tier: bool,

    /// Sort by completion (incomplete first)
    #[arg(long)]
    pub sort_completion: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Task id
    pub id: String,
}

#[derive(Args)]
pub struct IdArgs {
    /// Task id
    pub id: String,
}
