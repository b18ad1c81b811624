//! CLI demonstrating the Attempt outcome types.
//!
//! Failures are data: every subcommand exits 0 whether the demonstrated
//! operation succeeded or failed.

use attempt_core::{attempt_spawned, attempt_spawned_with_timeout, ErrorInfo, Outcome};
use clap::{Parser, Subcommand};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "attempt", version, about = "Value-based outcome demonstrations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Divide two integers, reporting division by zero as a failed outcome.
    Divide {
        #[arg(allow_negative_numbers = true)]
        a: i64,

        #[arg(allow_negative_numbers = true)]
        b: i64,

        /// Print the serialized outcome instead of a sentence.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Run the failure, success, and tuple-style samples.
    Demo,

    /// Capture a producer's error, panic, or timeout as an outcome.
    Capture {
        /// Make the producer return an error with this message.
        #[arg(long, conflicts_with = "panic")]
        fail: Option<String>,

        /// Make the producer panic.
        #[arg(long, default_value_t = false)]
        panic: bool,

        /// How long the producer sleeps before finishing.
        #[arg(long, default_value_t = 10)]
        delay_ms: u64,

        /// Deadline for the producer; expiry is captured as a failure.
        #[arg(long, env = "ATTEMPT_TIMEOUT_MS")]
        timeout_ms: Option<u64>,

        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

/// Sample domain operation: integer division without panicking.
fn divide(a: i64, b: i64) -> Outcome<i64> {
    if b == 0 {
        return Outcome::fail(ErrorInfo::new("Division by zero"));
    }
    match a.checked_div(b) {
        Some(q) => Outcome::ok(q),
        None => Outcome::fail(ErrorInfo::new("Division overflow")),
    }
}

/// Error type for the `capture` producer.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct ProducerError(String);

fn render(outcome: &Outcome<i64>) -> String {
    match outcome {
        Outcome::Success(value) => format!("Result: {value}\n"),
        Outcome::Failure(error) => format!("Operation failed: {error}\n"),
    }
}

fn render_demo() -> String {
    let mut out = String::from("=== Simple failure handling ===\n");
    out.push_str(&render(&divide(8, 0)));

    out.push_str("\n=== Successful operation ===\n");
    let success = divide(8, 4);
    if let Some(value) = success.value() {
        out.push_str(&format!("Result: {value}\n"));
    }

    out.push_str("\n=== Tuple-style deconstruction ===\n");
    match divide(10, 2).destructure() {
        (_, Some(error)) => out.push_str(&format!("Error: {error}\n")),
        (Some(value), None) => out.push_str(&format!("Value: {value}\n")),
        (None, None) => {}
    }

    out
}

async fn run_capture(
    fail: Option<String>,
    panic: bool,
    delay: Duration,
    timeout: Option<Duration>,
) -> Outcome<i64> {
    let producer = move || async move {
        tokio::time::sleep(delay).await;
        if panic {
            panic!("producer panicked on request");
        }
        match fail {
            Some(message) => Err(ProducerError(message)),
            None => Ok(5),
        }
    };

    match timeout {
        Some(deadline) => attempt_spawned_with_timeout(deadline, producer).await,
        None => attempt_spawned(producer).await,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Divide { a, b, json } => {
            let outcome = divide(a, b);
            tracing::info!(a, b, succeeded = outcome.succeeded(), "divide");
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                print!("{}", render(&outcome));
            }
        }
        Commands::Demo => {
            print!("{}", render_demo());
        }
        Commands::Capture {
            fail,
            panic,
            delay_ms,
            timeout_ms,
            json,
        } => {
            tracing::info!(delay_ms, ?timeout_ms, panic, "running producer");
            let outcome = run_capture(
                fail,
                panic,
                Duration::from_millis(delay_ms),
                timeout_ms.map(Duration::from_millis),
            )
            .await;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                print!("{}", render(&outcome));
            }
        }
    }

    Ok(())
}
