//! Inflow series loading.
//!
//! The series is either inline in the project file or a named column of a
//! CSV file. Blank lines and lines starting with `#` are skipped; the first
//! remaining record is the header. Quoted cells may contain commas.

use crate::schema::{InflowDef, Project};
use crate::validate::validate_inflow_values;
use crate::ProjectResult;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum InflowError {
    #[error("{source_name}: no header line")]
    MissingHeader { source_name: String },

    #[error("{source_name}: column '{column}' not found (available: {available})")]
    ColumnNotFound {
        source_name: String,
        column: String,
        available: String,
    },

    #[error("{source_name}:{line}: {message}")]
    Parse {
        source_name: String,
        line: usize,
        message: String,
    },

    #[error("{source_name}: column '{column}' has no values")]
    Empty { source_name: String, column: String },
}

/// Extract a named column of discharge values from CSV text.
///
/// `source_name` only labels error messages. Line numbers in errors count
/// physical lines, header and comments included.
pub fn parse_csv_column(
    content: &str,
    column: &str,
    source_name: &str,
) -> Result<Vec<f64>, InflowError> {
    let parse_error = |line: u64, message: String| InflowError::Parse {
        source_name: source_name.to_string(),
        line: line as usize,
        message,
    };
    let from_csv = |e: csv::Error| {
        let line = e.position().map_or(0, |p| p.line());
        parse_error(line, e.to_string())
    };

    let mut reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers().map_err(from_csv)?.clone();
    if headers.is_empty() {
        return Err(InflowError::MissingHeader {
            source_name: source_name.to_string(),
        });
    }
    let index = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| InflowError::ColumnNotFound {
            source_name: source_name.to_string(),
            column: column.to_string(),
            available: headers.iter().collect::<Vec<_>>().join(", "),
        })?;

    let mut values = Vec::new();
    for result in reader.records() {
        let record = result.map_err(from_csv)?;
        let line = record.position().map_or(0, |p| p.line());
        let cell = record.get(index).ok_or_else(|| {
            parse_error(
                line,
                format!(
                    "insufficient columns: expected at least {}, got {}",
                    index + 1,
                    record.len()
                ),
            )
        })?;
        let value = cell
            .parse::<f64>()
            .map_err(|_| parse_error(line, format!("failed to parse '{cell}' as a discharge")))?;
        values.push(value);
    }

    if values.is_empty() {
        return Err(InflowError::Empty {
            source_name: source_name.to_string(),
            column: column.to_string(),
        });
    }
    Ok(values)
}

/// Resolve a CSV path from the project file location.
pub fn resolve_path(project_path: &Path, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    project_path
        .parent()
        .map(|dir| dir.join(p))
        .unwrap_or_else(|| p.to_path_buf())
}

/// Inflow series of a project, validated (non-empty, finite, non-negative).
pub fn load_inflow(project: &Project, project_path: &Path) -> ProjectResult<Vec<f64>> {
    let values = match &project.inflow {
        InflowDef::Inline { values } => values.clone(),
        InflowDef::Csv { path, column } => {
            let csv_path = resolve_path(project_path, path);
            let content = std::fs::read_to_string(&csv_path)?;
            parse_csv_column(&content, column, &csv_path.display().to_string())?
        }
    };
    validate_inflow_values(&values)?;
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_named_column() {
        let csv = "# gauge export\ntime,Qinp\n0,100.5\n1, 120\n\n2,98.25\n";
        let values = parse_csv_column(csv, "Qinp", "test").unwrap();
        assert_eq!(values, vec![100.5, 120.0, 98.25]);
    }

    #[test]
    fn quoted_header_is_accepted() {
        let csv = "\"Qinp\"\n1\n2\n";
        assert_eq!(parse_csv_column(csv, "Qinp", "test").unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn quoted_cells_with_commas_keep_columns() {
        let csv = "time,Qinp\n\"18 Mar, 2022\",100\n\"19 Mar, 2022\",120\n";
        assert_eq!(
            parse_csv_column(csv, "Qinp", "test").unwrap(),
            vec![100.0, 120.0]
        );

        let csv = "time,Qinp\n\"1,5\",100\n";
        assert_eq!(parse_csv_column(csv, "Qinp", "test").unwrap(), vec![100.0]);
    }

    #[test]
    fn quoted_discharge_cell_is_read() {
        let csv = "\"gauge, upstream\",Qinp\nA,\" 42.5 \"\n";
        assert_eq!(parse_csv_column(csv, "Qinp", "test").unwrap(), vec![42.5]);
    }

    #[test]
    fn comment_lines_count_towards_line_numbers() {
        let err = parse_csv_column("# export\nQinp\n1\nx\n", "Qinp", "test").unwrap_err();
        assert!(matches!(err, InflowError::Parse { line: 4, .. }));
    }

    #[test]
    fn missing_column_lists_available() {
        let err = parse_csv_column("time,flow\n0,1\n", "Qinp", "test").unwrap_err();
        assert_eq!(
            err,
            InflowError::ColumnNotFound {
                source_name: "test".to_string(),
                column: "Qinp".to_string(),
                available: "time, flow".to_string(),
            }
        );
    }

    #[test]
    fn bad_cell_reports_line() {
        let err = parse_csv_column("Qinp\n1.0\nabc\n", "Qinp", "gauge.csv").unwrap_err();
        assert!(matches!(err, InflowError::Parse { line: 3, .. }));
        assert!(err.to_string().starts_with("gauge.csv:3"));
    }

    #[test]
    fn short_row_reports_line() {
        let err = parse_csv_column("t,Qinp\n0,1\n1\n", "Qinp", "test").unwrap_err();
        assert!(matches!(err, InflowError::Parse { line: 3, .. }));
    }

    #[test]
    fn header_only_is_empty() {
        assert!(matches!(
            parse_csv_column("Qinp\n", "Qinp", "test"),
            Err(InflowError::Empty { .. })
        ));
        assert!(matches!(
            parse_csv_column("", "Qinp", "test"),
            Err(InflowError::MissingHeader { .. })
        ));
    }

    #[test]
    fn relative_paths_resolve_next_to_project() {
        let resolved = resolve_path(Path::new("/data/study/project.yaml"), "Qinp.csv");
        assert_eq!(resolved, PathBuf::from("/data/study/Qinp.csv"));
        let absolute = resolve_path(Path::new("/data/study/project.yaml"), "/srv/Qinp.csv");
        assert_eq!(absolute, PathBuf::from("/srv/Qinp.csv"));
    }
}
