//! Secrets Guide - GitHub Repository Secrets Walkthrough
//!
//! Prints the manual steps for wiring the swarm's two Supabase secrets into a
//! GitHub repository, echoes the values currently resolved from the
//! environment so they can be pasted into the GitHub UI, and pauses for one
//! acknowledgment before exiting.
//!
//! # Usage
//!
//! ```bash
//! # Interactive walkthrough; press Enter at the end to close
//! secrets-guide
//!
//! # Non-interactive; EOF on stdin ends the final pause
//! secrets-guide < /dev/null
//! ```

mod ack;
mod snapshot;
mod transcript;

use clap::Parser;

use crate::snapshot::EnvSnapshot;

/// Walkthrough for configuring the swarm's GitHub repository secrets.
#[derive(Parser, Debug)]
#[command(name = "secrets-guide")]
#[command(about = "Prints the GitHub secrets setup steps and waits for acknowledgment")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Ignored. The walkthrough behaves identically with any arguments.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    ignored: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if !args.ignored.is_empty() {
        tracing::debug!(count = args.ignored.len(), "ignoring command-line arguments");
    }

    let snapshot = EnvSnapshot::capture();
    tracing::debug!(
        url_set = !snapshot.supabase_url.is_empty(),
        key_set = !snapshot.supabase_key.is_empty(),
        "captured environment snapshot"
    );

    print!("{}", transcript::render(&snapshot));
    println!();
    println!("Press Enter to close this window...");

    ack::wait_for_ack(tokio::io::stdin()).await?;
    tracing::debug!("acknowledged, exiting");

    Ok(())
}
