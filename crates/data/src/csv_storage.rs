use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim, Writer};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub struct CsvStorage;

impl CsvStorage {
    /// Reads every row of a headered CSV file.
    ///
    /// Columns are matched by header name (surrounding whitespace in headers is
    /// ignored); empty cells deserialize as `None`.
    ///
    /// # Errors
    /// Returns error if the file cannot be opened or a row cannot be parsed
    pub fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
        let rows = Self::read_rows_from(file)
            .with_context(|| format!("Failed to read CSV file: {}", path.display()))?;

        tracing::debug!("Read {} rows from {}", rows.len(), path.display());
        Ok(rows)
    }

    /// Same as [`CsvStorage::read_rows`] over any reader.
    ///
    /// # Errors
    /// Returns error if a row cannot be parsed; the message names the line.
    pub fn read_rows_from<R: Read, T: DeserializeOwned>(reader: R) -> Result<Vec<T>> {
        let mut reader = ReaderBuilder::new().trim(Trim::Headers).from_reader(reader);
        let mut rows = Vec::new();

        for (index, result) in reader.deserialize().enumerate() {
            // +2: one for the header, one for 1-based numbering
            let row: T = result.with_context(|| format!("Malformed row at line {}", index + 2))?;
            rows.push(row);
        }

        Ok(rows)
    }

    /// Writes rows to a CSV file with a header derived from the row type.
    ///
    /// # Errors
    /// Returns error if file cannot be created or writing fails
    pub fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
        let mut writer = Writer::from_writer(file);

        for row in rows {
            writer.serialize(row)?;
        }

        writer.flush()?;
        tracing::info!("Wrote {} rows to {}", rows.len(), path.display());
        Ok(())
    }
}
