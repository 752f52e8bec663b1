//! stayshelf CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use stayshelf::cli::{Cli, CommandContext, CommandDispatcher};
use stayshelf::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("stayshelf=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stayshelf=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("stayshelf starting with args: {:?}", cli);

    let context = match CommandContext::resolve(&cli) {
        Ok(context) => context,
        Err(e) => {
            let mut ui = create_ui(OutputMode::Normal, cli.no_color);
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    let mut ui = create_ui(context.output_mode(&cli), cli.no_color);
    let dispatcher = CommandDispatcher::new(context);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
