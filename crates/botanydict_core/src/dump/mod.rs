//! Upstream `division.dmp` interchange: parsing, bulk import, SQL export.
//!
//! # Responsibility
//! - Read the tab-pipe-delimited upstream reference dump.
//! - Load parsed records into storage in one transaction.
//! - Emit a portable SQL rendition of the division table.
//!
//! # Invariants
//! - Import is atomic: either every record lands or none do.
//! - Re-importing a dump refreshes existing rows instead of failing on
//!   duplicate ids.
//!
//! # See also
//! - docs/architecture/dump-format.md

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

mod reader;
mod sql_export;

pub use reader::{import_dump, parse_dump, ImportSummary};
pub use sql_export::export_sql;

pub type DumpResult<T> = Result<T, DumpError>;

/// Error for dump parsing, bulk import and SQL export.
#[derive(Debug)]
pub enum DumpError {
    Io(io::Error),
    /// A record did not contain exactly the expected field count.
    FieldCount { line: usize, found: usize },
    /// The id field of a record is not an integer.
    InvalidId { line: usize, value: String },
    /// Export was attempted for a record without a row identity.
    Unpersisted { index: usize },
    Db(DbError),
}

impl Display for DumpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "dump i/o error: {err}"),
            Self::FieldCount { line, found } => write!(
                f,
                "dump line {line}: expected {} fields, found {found}",
                reader::DUMP_FIELD_COUNT
            ),
            Self::InvalidId { line, value } => {
                write!(f, "dump line {line}: invalid division id `{value}`")
            }
            Self::Unpersisted { index } => {
                write!(f, "division at index {index} has no id and cannot be exported")
            }
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DumpError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for DumpError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<DbError> for DumpError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for DumpError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
