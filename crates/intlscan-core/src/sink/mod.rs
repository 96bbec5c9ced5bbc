//! Output sink: writes records to a CSV, TSV or JSON-lines file.
//!
//! The target file is truncated on open, never appended to. Delimited formats
//! start with a header row. Every record is flushed as it is written.

mod delimited;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::record::OutputRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Tsv,
    Jsonl,
}

impl OutputFormat {
    fn separator(self) -> Option<char> {
        match self {
            OutputFormat::Csv => Some(','),
            OutputFormat::Tsv => Some('\t'),
            OutputFormat::Jsonl => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Jsonl => "jsonl",
        };
        f.write_str(s)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            "jsonl" | "jsonlines" => Ok(OutputFormat::Jsonl),
            other => Err(format!("unknown output format: {other} (expected csv, tsv or jsonl)")),
        }
    }
}

/// Streaming record writer.
pub struct RecordSink {
    out: Box<dyn Write + Send>,
    format: OutputFormat,
    written: usize,
}

impl fmt::Debug for RecordSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordSink")
            .field("format", &self.format)
            .field("written", &self.written)
            .finish()
    }
}

impl RecordSink {
    /// Creates (or truncates) `path` and writes the header, if the format has one.
    pub fn create(path: &Path, format: OutputFormat) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("create output dir {}", parent.display()))?;
        }
        let file = fs::File::create(path)
            .with_context(|| format!("create output file {}", path.display()))?;
        tracing::debug!(path = %path.display(), %format, "opened output sink");
        Self::from_writer(BufWriter::new(file), format)
    }

    /// Wraps any writer (used for stdout and tests).
    pub fn from_writer<W: Write + Send + 'static>(out: W, format: OutputFormat) -> Result<Self> {
        let mut sink = Self {
            out: Box::new(out),
            format,
            written: 0,
        };
        if let Some(sep) = format.separator() {
            delimited::write_row(&mut sink.out, &OutputRecord::FIELDS, sep)
                .context("write header row")?;
            sink.out.flush()?;
        }
        Ok(sink)
    }

    pub fn write_record(&mut self, record: &OutputRecord) -> Result<()> {
        match self.format.separator() {
            Some(sep) => delimited::write_row(&mut self.out, &record.to_row(), sep)?,
            None => {
                serde_json::to_writer(&mut self.out, record)?;
                self.out.write_all(b"\n")?;
            }
        }
        self.out.flush().context("flush output record")?;
        self.written += 1;
        Ok(())
    }

    /// Flushes and returns the number of records written (header excluded).
    pub fn finish(mut self) -> Result<usize> {
        self.out.flush()?;
        Ok(self.written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{emit_failure, OutputRecord};
    use tempfile::tempdir;

    fn sample() -> OutputRecord {
        OutputRecord {
            url: "https://www.spain-realty.com/".to_string(),
            is_international: true,
            countries_found: "italy, portugal, spain".to_string(),
            international_indicators: String::new(),
            status: "success".to_string(),
        }
    }

    #[test]
    fn csv_header_and_quoted_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut sink = RecordSink::create(&path, OutputFormat::Csv).unwrap();
        sink.write_record(&sample()).unwrap();
        sink.write_record(&emit_failure("https://www.x.com/", "TimeoutError"))
            .unwrap();
        assert_eq!(sink.finish().unwrap(), 2);

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "url,is_international,countries_found,international_indicators,status"
        );
        assert_eq!(
            lines[1],
            "https://www.spain-realty.com/,true,\"italy, portugal, spain\",,success"
        );
        assert_eq!(lines[2], "https://www.x.com/,false,,,error: TimeoutError");
    }

    #[test]
    fn existing_file_is_overwritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale,data\nmore,stale\nrows,here\n").unwrap();
        let sink = RecordSink::create(&path, OutputFormat::Csv).unwrap();
        sink.finish().unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(!text.contains("stale"));
    }

    #[test]
    fn tsv_does_not_quote_commas() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/out.tsv");
        let mut sink = RecordSink::create(&path, OutputFormat::Tsv).unwrap();
        sink.write_record(&sample()).unwrap();
        sink.finish().unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\titaly, portugal, spain\t"));
    }

    #[test]
    fn jsonl_has_no_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.jsonl");
        let mut sink = RecordSink::create(&path, OutputFormat::Jsonl).unwrap();
        sink.write_record(&sample()).unwrap();
        sink.finish().unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 1);
        let v: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(v["is_international"], serde_json::Value::Bool(true));
        assert_eq!(v["countries_found"], "italy, portugal, spain");
    }

    #[test]
    fn format_parses_from_str() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
