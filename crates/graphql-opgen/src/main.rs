mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.cmd.take() else {
        return match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err:#}");
                std::process::ExitCode::FAILURE
            },
        };
    };

    let result = command.run(cli).await;
    if let Some(stdout) = &result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = &result.stderr {
        eprintln!("{stderr}");
    }
    result.exit_code
}

/// `-v` always wins; otherwise `LOG_LEVEL` picks the level.
fn init_logging(verbose: bool) {
    let (log_level, env_warning) = if verbose {
        (tracing::Level::DEBUG, None)
    } else {
        match std::env::var("LOG_LEVEL") {
            Ok(env_val) => match parse_log_level(&env_val) {
                Some(level) => (level, None),
                None => (
                    DEFAULT_LOG_LEVEL,
                    Some(format!("Ignoring unrecognized `LOG_LEVEL` value `{env_val}`")),
                ),
            },
            Err(_) => (DEFAULT_LOG_LEVEL, None),
        }
    };

    // Documents are reported on stdout, so logs stay on stderr.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging at `{log_level}`.");

    if let Some(warning) = env_warning {
        log::warn!("{warning}");
    }
}

fn parse_log_level(value: &str) -> Option<tracing::Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(tracing::Level::TRACE),
        "debug" | "verbose" => Some(tracing::Level::DEBUG),
        "info" => Some(tracing::Level::INFO),
        "warn" => Some(tracing::Level::WARN),
        "error" => Some(tracing::Level::ERROR),
        _ => None,
    }
}
