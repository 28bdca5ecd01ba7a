//! CLI argument definitions using clap

use clap::Parser;

/// Discover and print the organization hierarchy behind an Anypoint account
#[derive(Parser, Debug)]
#[command(name = "orgtree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root organization id to start discovery from
    pub organization_id: String,

    /// Override the directory service base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Enable debug logging (-d info, -dd debug, -ddd trace)
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count)]
    pub debug: u8,
}
