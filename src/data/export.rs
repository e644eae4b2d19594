//! CSV export of the reading log.

use std::io::Write;
use std::path::Path;

use crate::data::reading::ReadingLog;
use crate::error::Result;

pub const EXPORT_FILE_NAME: &str = "drilling_data.csv";
pub const EXPORT_MIME: &str = "text/csv";
pub const CSV_HEADER: [&str; 4] = ["Time", "Depth", "RPM", "Torque"];

/// Write the whole log as CSV: header row, then one row per reading, no index column.
///
/// The header is written even when the log is empty.
pub fn write_csv<W: Write>(writer: W, log: &ReadingLog) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for reading in log {
        wtr.serialize(reading)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Encode the log as UTF-8 CSV bytes.
pub fn to_csv_bytes(log: &ReadingLog) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_csv(&mut buf, log)?;
    Ok(buf)
}

/// A downloadable file offered to the user once the run is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    pub fn from_log(log: &ReadingLog) -> Result<Self> {
        Ok(Self {
            file_name: EXPORT_FILE_NAME.to_string(),
            mime: EXPORT_MIME,
            bytes: to_csv_bytes(log)?,
        })
    }

    /// Number of data rows (header excluded).
    pub fn row_count(&self) -> usize {
        self.bytes
            .split(|&b| b == b'\n')
            .filter(|line| !line.is_empty())
            .count()
            .saturating_sub(1)
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, &self.bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_log_still_has_header() {
        let bytes = to_csv_bytes(&ReadingLog::new()).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "Time,Depth,RPM,Torque\n");
    }

    #[test]
    fn rows_are_plain_integers() {
        let mut log = ReadingLog::new();
        log.append(3, 812, 55);
        let artifact = ExportArtifact::from_log(&log).unwrap();
        assert_eq!(
            String::from_utf8(artifact.bytes.clone()).unwrap(),
            "Time,Depth,RPM,Torque\n1,3,812,55\n"
        );
        assert_eq!(artifact.row_count(), 1);
        assert_eq!(artifact.file_name, "drilling_data.csv");
        assert_eq!(artifact.mime, "text/csv");
    }
}
