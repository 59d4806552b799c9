//! Parser and bulk loader for the upstream division dump.
//!
//! # Responsibility
//! - Parse `division.dmp` records into `Division` values.
//! - Upsert parsed records into the `divisions` table in one transaction.
//!
//! # Invariants
//! - Upstream ids are kept verbatim; import never re-assigns identity.
//! - Parse errors carry the 1-based line number of the offending record.

use super::{DumpError, DumpResult};
use crate::model::division::{Division, DivisionId};
use log::info;
use rusqlite::{params, Connection};
use std::io::BufRead;

/// Fields per dump record: id, code, name, comments.
pub(super) const DUMP_FIELD_COUNT: usize = 4;

const FIELD_SEPARATOR: &str = "\t|\t";
const RECORD_TERMINATOR: &str = "\t|";

/// Outcome of a bulk dump import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Number of records applied (inserted or refreshed).
    pub records: usize,
}

/// Parses the upstream `division.dmp` format.
///
/// Records are `\t|\t`-separated and `\t|`-terminated; blank lines are
/// skipped and every field is whitespace-trimmed.
pub fn parse_dump(reader: impl BufRead) -> DumpResult<Vec<Division>> {
    let mut divisions = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let record = line.trim_end();
        if record.is_empty() {
            continue;
        }

        divisions.push(parse_record(record, index + 1)?);
    }

    Ok(divisions)
}

/// Parses a dump and upserts every record in a single transaction.
///
/// Existing rows with matching ids get their code/name/comments refreshed,
/// so re-running an import against a newer upstream dump is safe.
pub fn import_dump(conn: &mut Connection, reader: impl BufRead) -> DumpResult<ImportSummary> {
    let divisions = parse_dump(reader)?;

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO divisions (
                division_id,
                division_code,
                division_name,
                comments
            ) VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(division_id) DO UPDATE SET
                division_code = excluded.division_code,
                division_name = excluded.division_name,
                comments = excluded.comments;",
        )?;

        for division in &divisions {
            stmt.execute(params![
                division.id,
                division.code.as_str(),
                division.name.as_str(),
                division.comments.as_str(),
            ])?;
        }
    }
    tx.commit()?;

    info!(
        "event=dump_import module=dump status=ok records={}",
        divisions.len()
    );

    Ok(ImportSummary {
        records: divisions.len(),
    })
}

fn parse_record(record: &str, line: usize) -> DumpResult<Division> {
    let record = record.strip_suffix(RECORD_TERMINATOR).unwrap_or(record);
    let fields: Vec<&str> = record.split(FIELD_SEPARATOR).collect();

    if fields.len() != DUMP_FIELD_COUNT {
        return Err(DumpError::FieldCount {
            line,
            found: fields.len(),
        });
    }

    let id_text = fields[0].trim();
    let id: DivisionId = id_text.parse().map_err(|_| DumpError::InvalidId {
        line,
        value: id_text.to_string(),
    })?;

    Ok(Division::with_id(
        id,
        fields[1].trim(),
        fields[2].trim(),
        fields[3].trim(),
    ))
}
