use std::io;

use clap::Parser;
use serde_json::Value;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use deferred_square::runtime::{self, DEFAULT_DELAY_MS, SchedulerConfig};
use deferred_square::console::report;
use deferred_square::{NumericInput, compute};

/// Squares a value after a fixed delay and prints the outcome.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Value to square, parsed as JSON (text that isn't JSON is taken as a string)
    #[arg(default_value = "5", allow_hyphen_values = true)]
    input: String,

    /// Milliseconds to wait before the result settles
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    delay_ms: u64,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries the program output, logs go to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn parse_input(raw: &str) -> NumericInput {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    runtime::init_with_config(SchedulerConfig {
        delay_ms: cli.delay_ms,
    })?;

    let squared = compute(parse_input(&cli.input));
    report(squared, &mut io::stdout()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_json_values() {
        assert_eq!(parse_input("5"), json!(5));
        assert_eq!(parse_input("-3"), json!(-3));
        assert_eq!(parse_input("null"), json!(null));
        assert_eq!(parse_input("\"hello\""), json!("hello"));
    }

    #[test]
    fn bare_text_becomes_a_string() {
        assert_eq!(parse_input("hello"), json!("hello"));
    }

    #[test]
    fn negative_input_is_not_a_flag() {
        let cli = Cli::try_parse_from(["deferred-square", "-3"]).unwrap();
        assert_eq!(cli.input, "-3");
        assert_eq!(cli.delay_ms, DEFAULT_DELAY_MS);
    }

    #[test]
    fn delay_is_configurable() {
        let cli = Cli::try_parse_from(["deferred-square", "--delay-ms", "10"]).unwrap();
        assert_eq!(cli.input, "5");
        assert_eq!(cli.delay_ms, 10);
    }
}
