//! Survey table reading.
//!
//! Each table is a `;`-delimited CSV whose first column identifies the
//! informant or interlocutor and whose remaining columns are survey slots.
//! The source files are exported as utf-8-sig, so a leading BOM is tolerated.

use std::path::{Path, PathBuf};

use tracing::debug;

use langweb_core::constants::{IDENTITY_HEADERS, VALUE_SEPARATOR};
use langweb_core::errors::IngestError;
use langweb_core::types::{Field, Record};

/// One parsed survey table.
#[derive(Debug, Clone)]
pub struct SurveyTable {
    pub path: PathBuf,
    /// Header of the identity column (`informant` or `interlocutor`).
    pub identity_header: String,
    /// Headers of the remaining columns, in source order.
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

/// Read one survey table.
///
/// The header row's first column must be one of [`IDENTITY_HEADERS`]; every
/// data row must match the header's column count; an identity cell holding a
/// comma-separated list is rejected. All violations are fatal; the scripts
/// are re-run after the source data is fixed.
pub fn read_table(path: &Path, delimiter: u8) -> Result<SurveyTable, IngestError> {
    let raw = std::fs::read(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw = strip_bom(&raw);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(raw);

    let mut rows = reader.records();
    let header = match rows.next() {
        Some(Ok(row)) => row,
        Some(Err(e)) => {
            return Err(IngestError::Csv {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        }
        None => {
            return Err(IngestError::EmptyHeader {
                path: path.to_path_buf(),
            })
        }
    };

    let identity_header = header
        .get(0)
        .map(|h| h.trim().to_string())
        .unwrap_or_default();
    if identity_header.is_empty() {
        return Err(IngestError::EmptyHeader {
            path: path.to_path_buf(),
        });
    }
    if !IDENTITY_HEADERS.contains(&identity_header.as_str()) {
        return Err(IngestError::UnrecognizedIdentityHeader {
            path: path.to_path_buf(),
            found: identity_header,
            expected: &IDENTITY_HEADERS,
        });
    }

    let columns: Vec<String> = header.iter().skip(1).map(|c| c.trim().to_string()).collect();
    let expected = 1 + columns.len();

    let mut records = Vec::new();
    for (idx, row) in rows.enumerate() {
        // Rows are 1-based in error messages, and row 1 is the header.
        let row_number = idx + 2;
        let row = row.map_err(|e| IngestError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if row.len() != expected {
            return Err(IngestError::MalformedRow {
                path: path.to_path_buf(),
                row: row_number,
                found: row.len(),
                expected,
            });
        }

        let key = row.get(0).unwrap_or_default().trim().to_string();
        if key.contains(VALUE_SEPARATOR) {
            return Err(IngestError::MultiValuedKey {
                path: path.to_path_buf(),
                row: row_number,
                cell: key,
            });
        }

        let mut record = Record::new(key);
        for (column, cell) in columns.iter().zip(row.iter().skip(1)) {
            record.fields.push(Field::new(column.clone(), cell));
        }
        records.push(record);
    }

    debug!(
        path = %path.display(),
        identity = %identity_header,
        columns = columns.len(),
        records = records.len(),
        "read survey table"
    );

    Ok(SurveyTable {
        path: path.to_path_buf(),
        identity_header,
        columns,
        records,
    })
}

/// Strip a UTF-8 byte order mark, if present.
fn strip_bom(raw: &[u8]) -> &[u8] {
    raw.strip_prefix(b"\xef\xbb\xbf").unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_reads_rows_into_ordered_records() {
        let file = write_csv(b"interlocutor;languages;frequency\npartner;Dutch, Turkish;daily\n");
        let table = read_table(file.path(), b';').unwrap();
        assert_eq!(table.identity_header, "interlocutor");
        assert_eq!(table.columns, vec!["languages", "frequency"]);
        assert_eq!(table.records.len(), 1);
        let record = &table.records[0];
        assert_eq!(record.key, "partner");
        assert_eq!(record.primary().unwrap().category, "languages");
        assert_eq!(record.primary().unwrap().value, "Dutch, Turkish");
    }

    #[test]
    fn test_strips_utf8_bom() {
        let file = write_csv(b"\xef\xbb\xbfinformant;languages\nmusic;Turkish\n");
        let table = read_table(file.path(), b';').unwrap();
        assert_eq!(table.identity_header, "informant");
        assert_eq!(table.records[0].key, "music");
    }

    #[test]
    fn test_rejects_unknown_identity_header() {
        let file = write_csv(b"participant;languages\npartner;Dutch\n");
        let err = read_table(file.path(), b';').unwrap_err();
        assert!(matches!(
            err,
            IngestError::UnrecognizedIdentityHeader { .. }
        ));
    }

    #[test]
    fn test_rejects_wrong_column_count() {
        let file = write_csv(b"informant;languages;frequency\npartner;Dutch\n");
        let err = read_table(file.path(), b';').unwrap_err();
        match err {
            IngestError::MalformedRow { row, found, expected, .. } => {
                assert_eq!(row, 2);
                assert_eq!(found, 2);
                assert_eq!(expected, 3);
            }
            other => panic!("expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_multi_valued_identity_cell() {
        let file = write_csv(b"informant;languages\npartner, mother;Dutch\n");
        let err = read_table(file.path(), b';').unwrap_err();
        assert!(matches!(err, IngestError::MultiValuedKey { row: 2, .. }));
    }

    #[test]
    fn test_header_only_table_is_empty() {
        let file = write_csv(b"informant;languages\n");
        let table = read_table(file.path(), b';').unwrap();
        assert!(table.records.is_empty());
    }
}
