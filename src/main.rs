use futures::TryStreamExt;
use tokio::io::{BufWriter, Stdout};
use tracing::{info, warn};

use outcomes::prelude::*;

#[tokio::main]
async fn main() {
    let config = match RunConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .init();

    CliApp::new("outcomes")
        .run(|writer| run_date_pipeline(writer, config))
        .await
}

/// Main application logic - parses every row and writes the dates that parsed
async fn run_date_pipeline(
    mut writer: BufWriter<Stdout>,
    config: RunConfig,
) -> Result<(), AppError> {
    let rows = CsvRecordStream::from_file(&config.input).await?;

    match config.mode {
        FailureMode::FailFast => {
            // The first bad row surfaces here as an Aborted error
            let dated: Vec<DatedRow> = rows.rethrow(parse_row).try_collect().await?;
            info!(parsed = dated.len(), "All rows parsed");
            write_dates(&dated, &mut writer).await?;
        }
        FailureMode::FailSafe => {
            let mut session = ProcessingSession::new(SkipErrors);
            let report = session.process_stream(rows.capture(parse_row)).await;
            info!(
                parsed = report.outcomes.successes().len(),
                failed = report.outcomes.failures().len(),
                "Finished processing rows"
            );
            if report.nothing_succeeded() {
                warn!(
                    input = %config.input.display(),
                    "No row could be parsed, check that the input has a date column"
                );
            }
            write_dates(report.outcomes.successes(), &mut writer).await?;
        }
    }

    Ok(())
}
