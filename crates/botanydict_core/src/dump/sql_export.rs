//! SQL export of the division table.
//!
//! # Responsibility
//! - Render divisions as a portable `CREATE TABLE` + `INSERT` script.
//!
//! # Invariants
//! - Text fields are single-quote escaped in emitted statements.
//! - Only persisted records (with a row identity) can be exported.

use super::{DumpError, DumpResult};
use crate::model::division::Division;
use std::io::Write;

/// Writes a SQL script recreating the division table with the given rows.
pub fn export_sql(divisions: &[Division], mut out: impl Write) -> DumpResult<()> {
    writeln!(out, "CREATE TABLE division (")?;
    writeln!(out, "  division_id INTEGER PRIMARY KEY,")?;
    writeln!(out, "  division_code TEXT,")?;
    writeln!(out, "  division_name TEXT,")?;
    writeln!(out, "  comments TEXT")?;
    writeln!(out, ");")?;
    writeln!(out)?;

    for (index, division) in divisions.iter().enumerate() {
        let id = division.id.ok_or(DumpError::Unpersisted { index })?;
        writeln!(
            out,
            "INSERT INTO division VALUES ({}, '{}', '{}', '{}');",
            id,
            escape_sql_text(&division.code),
            escape_sql_text(&division.name),
            escape_sql_text(&division.comments),
        )?;
    }

    Ok(())
}

fn escape_sql_text(value: &str) -> String {
    value.replace('\'', "''")
}
