mod parser;

use std::io::Read;
use std::path::Path;

use crate::avis::FaitTerrain;

#[derive(Debug)]
pub enum FtImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidRow { line: usize, reason: String },
}

impl std::fmt::Display for FtImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FtImportError::Io(err) => write!(f, "failed to read FT register: {}", err),
            FtImportError::Csv(err) => write!(f, "invalid FT register CSV data: {}", err),
            FtImportError::InvalidRow { line, reason } => {
                write!(f, "invalid FT register row at line {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for FtImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FtImportError::Io(err) => Some(err),
            FtImportError::Csv(err) => Some(err),
            FtImportError::InvalidRow { .. } => None,
        }
    }
}

impl From<std::io::Error> for FtImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for FtImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads FT cases from a register CSV export.
pub struct FtCaseImporter;

impl FtCaseImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<FaitTerrain>, FtImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<FaitTerrain>, FtImportError> {
        parser::parse_cases(reader)
    }
}
