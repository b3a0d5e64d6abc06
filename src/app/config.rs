use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::Level;

use super::error::AppError;

pub const USAGE: &str = "Usage: outcomes <dates.csv> [--fail-fast | --fail-safe | --mode <mode>] [--log-level <level>]";

/// Environment variable consulted for the log level when no flag is given
pub const LOG_ENV: &str = "OUTCOMES_LOG";

/// How the binary reacts to a row that fails to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    /// Abort on the first bad row and write nothing
    FailFast,
    /// Skip bad rows and write every row that parsed
    #[default]
    FailSafe,
}

impl FromStr for FailureMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fail-fast" => Ok(Self::FailFast),
            "fail-safe" => Ok(Self::FailSafe),
            _ => Err(usage(&format!("unknown failure mode {s:?}"))),
        }
    }
}

/// Settings for one run of the binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub mode: FailureMode,
    pub log_level: Level,
}

impl RunConfig {
    /// Read settings from the process arguments and environment
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_args(env::args(), env::var(LOG_ENV).ok())
    }

    /// Parse settings from an argument list whose first element is the program name
    ///
    /// `--log-level` takes precedence over `env_level`, which takes precedence
    /// over the default of `warn`.
    pub fn from_args<I, S>(args: I, env_level: Option<String>) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::<String>::into).skip(1);
        let mut input = None;
        let mut mode = FailureMode::default();
        let mut log_level = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--fail-fast" => mode = FailureMode::FailFast,
                "--fail-safe" => mode = FailureMode::FailSafe,
                "--mode" => {
                    let value = args
                        .next()
                        .ok_or_else(|| usage("--mode requires a value"))?;
                    mode = value.parse()?;
                }
                "--log-level" => {
                    let value = args
                        .next()
                        .ok_or_else(|| usage("--log-level requires a value"))?;
                    log_level = Some(parse_level(&value)?);
                }
                flag if flag.starts_with("--") => {
                    return Err(usage(&format!("unknown option {flag}")));
                }
                path if input.is_none() => input = Some(PathBuf::from(path)),
                _ => return Err(usage("only one input file is accepted")),
            }
        }

        let input = input.ok_or_else(|| usage("missing input file"))?;
        let log_level = match (log_level, env_level) {
            (Some(level), _) => level,
            (None, Some(value)) => parse_level(&value)?,
            (None, None) => Level::WARN,
        };

        Ok(Self {
            input,
            mode,
            log_level,
        })
    }
}

fn parse_level(value: &str) -> Result<Level, AppError> {
    value
        .trim()
        .parse()
        .map_err(|_| usage(&format!("invalid log level {value:?}")))
}

fn usage(reason: &str) -> AppError {
    AppError::InvalidArguments(format!("{reason}\n{USAGE}"))
}
