//! commit-msg hook that enforces Conventional Commits
//!
//! Invoked by git (or a hook framework) with the path of the commit message
//! file. Exits with status 0 when the message is accepted, 1 otherwise.

use clap::Parser;
use std::process;

use conventional_commit_hook::hook::{Args, RESULT_FAIL, run};

fn main() {
    // Logs go to stderr so they never mix with the report on stdout.
    // Default to "warn" level if RUST_LOG is not set
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {cause}");
            }
            process::exit(RESULT_FAIL);
        }
    }
}
