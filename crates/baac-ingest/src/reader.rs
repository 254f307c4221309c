//! Streaming CSV row source.
//!
//! Records are read one at a time into a reused buffer; nothing beyond the
//! current row is kept in memory.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use csv::{ByteRecord, ReaderBuilder};

use baac_model::{InputEncoding, RawRecord, RecordKind};

use crate::error::{IngestError, Result};
use crate::preflight::check_input_file;

/// Iterator of [`RawRecord`]s read from a delimited text source.
pub struct CsvRowSource<R> {
    path: PathBuf,
    headers: Arc<[String]>,
    reader: csv::Reader<R>,
    encoding: InputEncoding,
    record: ByteRecord,
}

impl CsvRowSource<File> {
    /// Open the source table of `kind` at `path`, using the kind's delimiter.
    pub fn open(path: &Path, kind: RecordKind, encoding: InputEncoding) -> Result<Self> {
        check_input_file(path)?;
        let file = File::open(path).map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_reader(file, path, kind, encoding)
    }
}

impl<R: Read> CsvRowSource<R> {
    /// Wrap any reader. `path` is only used in diagnostics.
    pub fn from_reader(
        reader: R,
        path: &Path,
        kind: RecordKind,
        encoding: InputEncoding,
    ) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(kind.input_delimiter())
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let raw_headers = reader
            .byte_headers()
            .map_err(|source| IngestError::CsvParse {
                path: path.to_path_buf(),
                source,
            })?
            .clone();
        if raw_headers.is_empty() {
            return Err(IngestError::NoHeader {
                path: path.to_path_buf(),
            });
        }
        let headers = raw_headers
            .iter()
            .map(|field| {
                decode(field, encoding)
                    .map(|header| header.trim_start_matches('\u{feff}').to_string())
                    .ok_or_else(|| IngestError::InvalidUtf8 {
                        path: path.to_path_buf(),
                        line: 1,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            path: path.to_path_buf(),
            headers: headers.into(),
            reader,
            encoding,
            record: ByteRecord::new(),
        })
    }

    /// Column names from the header row, in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn current_line(&self) -> u64 {
        self.record.position().map_or(0, csv::Position::line)
    }

    fn build_record(&self) -> Result<RawRecord> {
        let line = self.current_line();
        let values = self
            .record
            .iter()
            .map(|field| {
                decode(field, self.encoding).ok_or_else(|| IngestError::InvalidUtf8 {
                    path: self.path.clone(),
                    line,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        RawRecord::new(Arc::clone(&self.headers), values).map_err(|source| {
            IngestError::MalformedRow {
                path: self.path.clone(),
                line,
                source,
            }
        })
    }
}

impl<R: Read> Iterator for CsvRowSource<R> {
    type Item = Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_byte_record(&mut self.record) {
            Ok(true) => Some(self.build_record()),
            Ok(false) => None,
            Err(source) => Some(Err(IngestError::CsvParse {
                path: self.path.clone(),
                source,
            })),
        }
    }
}

fn decode(field: &[u8], encoding: InputEncoding) -> Option<String> {
    match encoding {
        InputEncoding::Utf8 => std::str::from_utf8(field).ok().map(str::to_string),
        InputEncoding::Latin1 => Some(field.iter().copied().map(char::from).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(data: &[u8], kind: RecordKind, encoding: InputEncoding) -> CsvRowSource<&[u8]> {
        CsvRowSource::from_reader(data, Path::new("test.csv"), kind, encoding).unwrap()
    }

    #[test]
    fn test_tab_delimited_characteristics() {
        let data = b"Num_Acc\tmois\tadr\n200900000001\t3\t- rte, de nice\n";
        let mut rows = source(data, RecordKind::Characteristics, InputEncoding::Utf8);
        assert_eq!(rows.headers(), &["Num_Acc", "mois", "adr"]);
        let record = rows.next().unwrap().unwrap();
        assert_eq!(record.get("adr"), Some("- rte, de nice"));
        assert!(rows.next().is_none());
    }

    #[test]
    fn test_comma_delimited_keeps_whitespace() {
        let data = b"Num_Acc,catv,num_veh\n200900000001, ,\"A,01\"\n";
        let mut rows = source(data, RecordKind::Vehicles, InputEncoding::Utf8);
        let record = rows.next().unwrap().unwrap();
        assert_eq!(record.get("catv"), Some(" "));
        assert_eq!(record.get("num_veh"), Some("A,01"));
    }

    #[test]
    fn test_bom_stripped_from_first_header() {
        let data = "\u{feff}Num_Acc,catv\n1,7\n".as_bytes();
        let rows = source(data, RecordKind::Vehicles, InputEncoding::Utf8);
        assert_eq!(rows.headers()[0], "Num_Acc");
    }

    #[test]
    fn test_latin1_decoding() {
        let data = b"Num_Acc,adr\n1,all\xe9e des pins\n";
        let mut rows = source(data, RecordKind::Locations, InputEncoding::Latin1);
        let record = rows.next().unwrap().unwrap();
        assert_eq!(record.get("adr"), Some("allée des pins"));
    }

    #[test]
    fn test_invalid_utf8_reports_line() {
        let data = b"Num_Acc,adr\n1,ok\n2,all\xe9e\n";
        let mut rows = source(data, RecordKind::Locations, InputEncoding::Utf8);
        assert!(rows.next().unwrap().is_ok());
        let err = rows.next().unwrap().unwrap_err();
        assert!(matches!(err, IngestError::InvalidUtf8 { line: 3, .. }));
    }

    #[test]
    fn test_ragged_rows_are_malformed_not_fatal() {
        let data = b"Num_Acc,catv\n1,7,9\n2\n3,7\n";
        let mut rows = source(data, RecordKind::Vehicles, InputEncoding::Utf8);
        assert!(matches!(
            rows.next().unwrap().unwrap_err(),
            IngestError::MalformedRow { line: 2, .. }
        ));
        assert!(matches!(
            rows.next().unwrap().unwrap_err(),
            IngestError::MalformedRow { line: 3, .. }
        ));
        let record = rows.next().unwrap().unwrap();
        assert_eq!(record.get("Num_Acc"), Some("3"));
        assert!(rows.next().is_none());
    }

    #[test]
    fn test_empty_input_has_no_header() {
        let result =
            CsvRowSource::from_reader(&b""[..], Path::new("empty.csv"), RecordKind::Persons, InputEncoding::Utf8);
        assert!(matches!(result, Err(IngestError::NoHeader { .. })));
    }
}
