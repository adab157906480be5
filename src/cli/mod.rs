//! CLI module for the ride accounts service

pub mod serve;

use clap::{Parser, Subcommand};

/// Ride Accounts - account registration API for the ride platform
#[derive(Parser)]
#[command(name = "ride-accounts")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,
}
