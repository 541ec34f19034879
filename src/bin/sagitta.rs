//! Sagitta CLI binary.

use anyhow::Context;
use clap::Parser;
use sagitta::cli::args::SagittaArgs;
use sagitta::cli::commands::execute_command;
use std::process;

fn main() {
    let args = SagittaArgs::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: &SagittaArgs) -> anyhow::Result<()> {
    execute_command(args).context("analysis failed")?;
    Ok(())
}
