use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};

use maptree::cli::{self, Cli};
use maptree::fs::RealFileSystem;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init()
        .ok();

    if cli::wants_help(std::env::args_os().skip(1)) {
        return match Cli::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("maptree: {err}");
                ExitCode::from(1)
            }
        };
    }

    let args = Cli::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("maptree: {err:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(args: Cli) -> anyhow::Result<()> {
    let options = args.render_options()?;
    let root = args.root();
    cli::validate_root(&root)?;

    let display_root = maptree::root_display_path(&root)
        .with_context(|| format!("cannot resolve {}", root.display()))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    writeln!(out, "{}", display_root.display())?;

    let summary = maptree::walk_tree(&RealFileSystem, &root, &options, &mut out).await?;
    out.flush()?;

    log::debug!(
        "{} directories, {} files, {} unreadable",
        summary.directories,
        summary.files,
        summary.unreadable
    );
    Ok(())
}
