mod archiver;
mod assets;
mod cli;
mod config;
mod downloader;
mod error;
mod fetcher;
mod models;
mod parser;
mod resolve;
#[cfg(test)]
mod test_support;

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use crate::archiver::Archiver;
use crate::cli::{Args, process_input, run_interactive};
use crate::config::StoreConfig;

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt().with_env_filter(filter).with_target(false).init();

    if !args.has_valid_inputs() {
        let _ = Args::command().print_help();
        return ExitCode::from(1);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = StoreConfig::default().with_base_dir(&args.base_dir);
    let archiver = Archiver::new(config)?;
    let kind = args.default_kind();

    for input in &args.inputs {
        process_input(&archiver, input, kind);
    }

    if args.interactive {
        run_interactive(&archiver, io::stdin().lock(), io::stdout(), kind)?;
    }
    Ok(())
}
