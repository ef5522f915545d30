use std::io::{self, IsTerminal};
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

/// 日誌輸出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("queue_smoke=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("queue_smoke=info"))
    }
}

/// Builds the CLI subscriber. Installing it is left to the caller.
pub fn cli_subscriber(verbose: bool, format: LogFormat) -> Box<dyn Subscriber + Send + Sync> {
    subscriber_with_writer(verbose, format, io::stderr().is_terminal(), io::stderr)
}

pub fn lambda_subscriber() -> Box<dyn Subscriber + Send + Sync> {
    // Lambda uses JSON format for better CloudWatch integration
    subscriber_with_writer(false, LogFormat::Json, false, io::stdout)
}

pub fn subscriber_with_writer<W>(
    verbose: bool,
    format: LogFormat,
    ansi: bool,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(env_filter(verbose));

    match format {
        LogFormat::Compact => Box::new(
            registry.with(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(ansi)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            ),
        ),
        LogFormat::Json => Box::new(
            registry.with(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(ansi)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            ),
        ),
    }
}
