//! Tabular input readers.
//!
//! Both readers return every data row as a [`RawRow`]; cells that are empty
//! or not numeric read as absent and the row is dropped later by
//! validation. Rows come back sorted: PANGAEA tables by depth, SISAL tables
//! by age.

use std::cmp::Ordering;
use std::path::Path;

use tracing::{debug, info};

use geolod_graph::family::Measurement;
use geolod_graph::series::RawRow;

use crate::config::{InputConfig, InputFormat};
use crate::error::InputError;

/// Column of the SISAL age, in years BP.
pub const SISAL_AGE: &str = "age_bp";
/// Column of the SISAL sample depth, in millimetres.
pub const SISAL_DEPTH: &str = "depth_sample";
/// Column of the SISAL entity identifier.
pub const SISAL_ENTITY: &str = "entity_id";

/// Reads the rows of one series.
///
/// # Errors
///
/// Returns [`InputError`] if the file cannot be read or its layout does not
/// match `input`.
pub fn load(
    input: &InputConfig,
    path: &Path,
    measurement: Measurement,
) -> Result<Vec<RawRow>, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = match &input.format {
        InputFormat::PangaeaTab {
            depth_column,
            age_column,
            value_column,
        } => parse_pangaea_tab(&text, path, [*depth_column, *age_column, *value_column])?,
        format @ InputFormat::SisalCsv { .. } => {
            let column = format
                .sisal_value_column(measurement)
                .ok_or_else(|| InputError::MissingColumn {
                    path: path.to_path_buf(),
                    column: format!("<{measurement} column>"),
                })?;
            parse_sisal_csv(text.as_bytes(), path, column)?
        }
    };
    info!(path = %path.display(), %measurement, rows = rows.len(), "input read");
    Ok(rows)
}

/// Parses a PANGAEA `.tab` export. `columns` holds the 0-based depth, age
/// and value column indices.
///
/// A leading `/* ... */` block is metadata. The rest is tab-separated: the
/// first non-blank line names the columns and every following line is a
/// data row. Quote characters are literal.
///
/// # Errors
///
/// Returns [`InputError::UnterminatedPreamble`],
/// [`InputError::MissingHeader`] or [`InputError::Csv`].
pub fn parse_pangaea_tab(
    text: &str,
    path: &Path,
    columns: [usize; 3],
) -> Result<Vec<RawRow>, InputError> {
    let body = after_preamble(text).ok_or_else(|| InputError::UnterminatedPreamble {
        path: path.to_path_buf(),
    })?;
    let csv_error = |source| InputError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(body.as_bytes());
    let headers = reader.headers().map_err(csv_error)?;
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(InputError::MissingHeader {
            path: path.to_path_buf(),
        });
    }
    debug!(columns = headers.len(), "column header");

    let [depth, age, value] = columns;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        rows.push(RawRow {
            depth: number(record.get(depth)),
            age: number(record.get(age)),
            value: number(record.get(value)),
            entity: None,
        });
    }
    rows.sort_by(|a, b| ascending(a.depth, b.depth));
    Ok(rows)
}

/// Text after a leading `/* ... */` block, or all of it when there is none.
fn after_preamble(text: &str) -> Option<&str> {
    if !text.trim_start().starts_with("/*") {
        return Some(text);
    }
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        offset += line.len();
        if line.starts_with("*/") {
            return Some(&text[offset..]);
        }
    }
    None
}

/// Parses a SISAL CSV export, converting `age_bp` to ka.
///
/// # Errors
///
/// Returns [`InputError::MissingColumn`] if `age_bp` or `value_column` is
/// absent, or [`InputError::Csv`] for malformed CSV.
pub fn parse_sisal_csv<R: std::io::Read>(
    reader: R,
    path: &Path,
    value_column: &str,
) -> Result<Vec<RawRow>, InputError> {
    let csv_error = |source| InputError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = reader.headers().map_err(csv_error)?.clone();
    let find = |name: &str| headers.iter().position(|h| h.trim() == name);
    let require = |name: &str| {
        find(name).ok_or_else(|| InputError::MissingColumn {
            path: path.to_path_buf(),
            column: name.to_owned(),
        })
    };
    let age = require(SISAL_AGE)?;
    let value = require(value_column)?;
    let depth = find(SISAL_DEPTH);
    let entity = find(SISAL_ENTITY);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        rows.push(RawRow {
            depth: depth.and_then(|i| number(record.get(i))),
            age: number(record.get(age)).map(|bp| bp / 1000.0),
            value: number(record.get(value)),
            entity: entity
                .and_then(|i| record.get(i))
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_owned),
        });
    }
    rows.sort_by(|a, b| ascending(a.age, b.age));
    Ok(rows)
}

fn number(cell: Option<&str>) -> Option<f64> {
    cell.and_then(|c| c.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Ascending with absent values last.
fn ascending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAB: &str = "/* DATA DESCRIPTION:\n\
Citation:\tSpahni, R et al. (2005)\n\
Parameter(s):\tDepth ice/snow [m]\n\
*/\n\
Depth ice/snow [m]\tDepth ref [m]\tGas age [ka BP]\tGas age [ka BP]\tCH4 [ppbv]\n\
120.5\t1\t2.1\t2.2\t610.3\n\
99.8\t1\t1.9\t2.0\t598.1\n\
\n\
130.0\t1\t\t2.5\tn/a\n";

    #[test]
    fn pangaea_skips_preamble_and_header() {
        let rows = parse_pangaea_tab(TAB, Path::new("x.tab"), [0, 3, 4]).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].depth, Some(99.8));
        assert_eq!(rows[0].age, Some(2.0));
        assert_eq!(rows[0].value, Some(598.1));
        assert_eq!(rows[2].value, None);
    }

    #[test]
    fn pangaea_without_preamble() {
        let text = "depth\tage\tvalue\n1\t2\t3\n";
        let rows = parse_pangaea_tab(text, Path::new("x.tab"), [0, 1, 2]).unwrap();
        assert_eq!(rows, vec![RawRow::new(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn pangaea_unterminated_preamble() {
        let err = parse_pangaea_tab("/* no end\n1\t2\t3\n", Path::new("x.tab"), [0, 1, 2]);
        assert!(matches!(err, Err(InputError::UnterminatedPreamble { .. })));
    }

    #[test]
    fn pangaea_missing_column_reads_as_absent() {
        let rows = parse_pangaea_tab("h\n1\t2\n", Path::new("x.tab"), [0, 1, 7]).unwrap();
        assert_eq!(rows[0].value, None);
    }

    #[test]
    fn pangaea_rows_may_be_ragged() {
        let text = "Depth [m]\tAge \"model\" [ka]\tCH4 [ppbv]\n\
2.0\t5\t600\tflag\n\
1.0\t4\n";
        let rows = parse_pangaea_tab(text, Path::new("x.tab"), [0, 1, 2]).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].depth, Some(1.0));
        assert_eq!(rows[0].value, None);
        assert_eq!(rows[1], RawRow::new(2.0, 5.0, 600.0));
    }

    #[test]
    fn pangaea_preamble_ends_at_marker_line() {
        assert_eq!(after_preamble("a\tb\n"), Some("a\tb\n"));
        assert_eq!(after_preamble("/* x\n*/\nh\n1\n"), Some("h\n1\n"));
        assert_eq!(after_preamble("/* x\n */\n"), None);
    }

    #[test]
    fn pangaea_header_only_is_empty() {
        let rows = parse_pangaea_tab("/*\n*/\nh\n", Path::new("x.tab"), [0, 1, 2]).unwrap();
        assert!(rows.is_empty());
        let err = parse_pangaea_tab("/*\n*/\n\n", Path::new("x.tab"), [0, 1, 2]);
        assert!(matches!(err, Err(InputError::MissingHeader { .. })));
    }

    const SISAL: &str = "site_id,site_name,entity_id,entity_name,sample_id,depth_sample,age_bp,d18o_permille,d13c_permille\n\
145,Corchia,228,CC5,2,10.5,12000,-4.9,\n\
145,Corchia,227,CC1,1,3.0,1500,-5.1,-2.2\n\
145,Corchia,227,CC1,3,,abc,-5.0,-2.0\n";

    #[test]
    fn sisal_converts_ages_and_sorts() {
        let rows = parse_sisal_csv(SISAL.as_bytes(), Path::new("s.csv"), "d18o_permille").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].age, Some(1.5));
        assert_eq!(rows[0].entity.as_deref(), Some("227"));
        assert_eq!(rows[1].age, Some(12.0));
        assert_eq!(rows[1].depth, Some(10.5));
        assert_eq!(rows[2].age, None);
        assert_eq!(rows[2].depth, None);
    }

    #[test]
    fn sisal_empty_cells_are_absent() {
        let rows = parse_sisal_csv(SISAL.as_bytes(), Path::new("s.csv"), "d13c_permille").unwrap();
        let cc5 = rows.iter().find(|r| r.entity.as_deref() == Some("228")).unwrap();
        assert_eq!(cc5.value, None);
    }

    #[test]
    fn sisal_requires_value_column() {
        let err = parse_sisal_csv(SISAL.as_bytes(), Path::new("s.csv"), "ch4_ppbv");
        assert!(matches!(
            err,
            Err(InputError::MissingColumn { column, .. }) if column == "ch4_ppbv"
        ));
    }
}
