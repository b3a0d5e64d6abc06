use std::future::Future;
use std::io;

use tracing::{debug, warn};

use super::error::AppError;

/// Reusable CLI application runner that handles:
/// - Signal handling (SIGINT, SIGTERM, SIGHUP)
/// - Stdout buffering
/// - Exit codes (0 = success, 1 = error, 130 = SIGINT, 143 = SIGTERM, 129 = SIGHUP)
pub struct CliApp {
    name: String,
}

impl CliApp {
    /// Create a new CLI application runner
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Run the CLI application with signal handling
    ///
    /// Creates a buffered stdout writer and passes it to the main function,
    /// which is responsible for flushing it.
    ///
    /// This function never returns - it calls std::process::exit with the appropriate code
    pub async fn run<F, Fut>(self, main_fn: F) -> !
    where
        F: FnOnce(tokio::io::BufWriter<tokio::io::Stdout>) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        let writer = tokio::io::BufWriter::new(tokio::io::stdout());
        debug!(app = %self.name, "Starting");

        // Race main application logic against signal reception
        tokio::select! {
            result = main_fn(writer) => {
                std::process::exit(Self::exit_code(&result));
            }
            signal_code = Self::wait_for_signal() => {
                std::process::exit(signal_code);
            }
        }
    }

    /// Map the main function's result to a process exit code, reporting errors on stderr
    fn exit_code(result: &Result<(), AppError>) -> i32 {
        match result {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        }
    }

    /// Wait for a termination signal and return the exit code to use
    ///
    /// If signal handlers cannot be installed this never resolves, so the
    /// main function still runs to completion.
    async fn wait_for_signal() -> i32 {
        match Self::listen_for_signal().await {
            Ok(code) => code,
            Err(e) => {
                warn!(error = %e, "Signal handling unavailable");
                std::future::pending().await
            }
        }
    }

    #[cfg(unix)]
    async fn listen_for_signal() -> io::Result<i32> {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sigint = signal(SignalKind::interrupt())?;
        let mut sighup = signal(SignalKind::hangup())?;

        let code = tokio::select! {
            _ = sigterm.recv() => {
                eprintln!("Received SIGTERM");
                143 // 128 + 15
            }
            _ = sigint.recv() => {
                eprintln!("Received SIGINT");
                130 // 128 + 2
            }
            _ = sighup.recv() => {
                eprintln!("Received SIGHUP");
                129 // 128 + 1
            }
        };
        Ok(code)
    }

    #[cfg(not(unix))]
    async fn listen_for_signal() -> io::Result<i32> {
        tokio::signal::ctrl_c().await?;
        eprintln!("Received Ctrl+C");
        Ok(130)
    }
}
