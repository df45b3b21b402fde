use std::{fs, io, path::PathBuf, process::ExitCode};

use brisk::{evaluate_source, render_source};
use clap::Parser;
use tracing::info;

/// brisk is a minimal scripting language that can be evaluated directly or
/// rendered into equivalent C source code.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Renders the script as C source code instead of evaluating it.
    #[arg(short, long)]
    emit: bool,

    /// Where the rendered C code is written with `--emit`.
    #[arg(short, long, default_value = "out.c")]
    output: PathBuf,

    /// The script to run.
    file: PathBuf,
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    // RUST_LOG controls the log level, defaulting to warnings only.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt().with_env_filter(filter)
         .with_writer(io::stderr)
         .with_target(false)
         .init();
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let script = fs::read_to_string(&args.file).map_err(|e| {
                                                   format!("Failed to read the input file '{}': {e}",
                                                           args.file.display())
                                               })?;

    if script.trim().is_empty() {
        info!(file = %args.file.display(), "empty script, nothing to do");
        return Ok(());
    }

    if args.emit {
        let code = render_source(&script)?;
        fs::write(&args.output, code).map_err(|e| {
                                         format!("Failed to write '{}': {e}",
                                                 args.output.display())
                                     })?;
        info!(output = %args.output.display(), "wrote C source");
    } else {
        evaluate_source(&script, io::stdout().lock())?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    if let Err(e) = run(&args) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
