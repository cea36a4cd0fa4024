//! Sensor package file parsing.
//!
//! Package files are plain text, one package per line: a workout type code
//! followed by whitespace-separated numeric parameters, e.g.
//! `SWM 720 1 80 25 40`. Blank lines and `#` comments are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::ParseError;

/// One raw sensor package as read from a file, before dispatching.
///
/// The line number is 1-based and carried along so dispatch failures can be
/// reported against the source line.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorPackage {
    pub code: String,
    pub params: Vec<f64>,
    pub line: usize,
}

/// Loads sensor packages from a plain-text file.
///
/// # Errors
/// Returns ParseError if the file is missing or unreadable, or if any line
/// is malformed. The first bad line aborts the load; there is no
/// skip-and-continue for data errors.
pub fn load_packages<P: AsRef<Path>>(path: P) -> Result<Vec<SensorPackage>, ParseError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ParseError::FileNotFound(path.display().to_string()));
    }

    let file = File::open(path)
        .map_err(|e| ParseError::CannotRead(format!("{}: {}", path.display(), e)))?;

    read_packages(BufReader::new(file))
}

/// Reads sensor packages from any buffered source.
pub fn read_packages<R: BufRead>(reader: R) -> Result<Vec<SensorPackage>, ParseError> {
    let mut packages = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let row = idx + 1;
        let line = line.map_err(|e| ParseError::CannotRead(format!("line {}: {}", row, e)))?;

        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            debug!("skipping line {}", row);
            continue;
        }

        let mut tokens = text.split_whitespace();

        // split_whitespace on a non-empty trimmed line yields at least one
        // token, so the unwrap-free pattern below always matches.
        let Some(code) = tokens.next() else {
            continue;
        };

        // A leading number means the code column is missing.
        if code.parse::<f64>().is_ok() {
            return Err(ParseError::MissingTypeCode {
                row,
                value: code.to_string(),
            });
        }

        let mut params = Vec::new();
        for token in tokens {
            let value = token.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                row,
                value: token.to_string(),
            })?;
            params.push(value);
        }

        packages.push(SensorPackage {
            code: code.to_string(),
            params,
            line: row,
        });
    }

    Ok(packages)
}
