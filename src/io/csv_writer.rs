use std::io;

use csv::WriterBuilder;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::error::IoError;
use super::parse::DatedRow;

/// Write parsed rows as `row,date` CSV, header included
pub async fn write_dates<'a, I, W>(rows: I, mut writer: W) -> Result<(), IoError>
where
    I: IntoIterator<Item = &'a DatedRow>,
    W: AsyncWrite + Unpin + Send,
{
    // Headers are written by hand so that an empty result still gets one
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    csv_writer.write_record(["row", "date"])?;
    for row in rows {
        csv_writer.serialize(row)?;
    }

    let buffer = csv_writer
        .into_inner()
        .map_err(|err| IoError::Io(io::Error::new(err.error().kind(), err.to_string())))?;

    writer.write_all(&buffer).await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CalendarDate;

    fn dated(row: usize, text: &str) -> DatedRow {
        DatedRow {
            row,
            date: text.parse::<CalendarDate>().unwrap(),
        }
    }

    #[tokio::test]
    async fn writes_header_for_empty_input() {
        let rows: Vec<DatedRow> = Vec::new();

        let mut output = Vec::new();
        write_dates(&rows, &mut output).await.unwrap();

        let result = String::from_utf8(output).unwrap();
        assert_eq!(result, "row,date\n");
    }

    #[tokio::test]
    async fn writes_rows_in_order() {
        let rows = vec![dated(1, "2021-06-21"), dated(3, "2001-12-21")];

        let mut output = Vec::new();
        write_dates(&rows, &mut output).await.unwrap();

        let result = String::from_utf8(output).unwrap();
        assert_eq!(result, "row,date\n1,2021-06-21\n3,2001-12-21\n");
    }
}
