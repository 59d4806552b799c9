//! Division repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `divisions` reference table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `division_id` is assigned at insert time and never updated afterwards.
//! - Repositories refuse connections that have not completed migrations.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::division::{Division, DivisionId};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DIVISION_SELECT_SQL: &str = "SELECT
    division_id,
    division_code,
    division_name,
    comments
FROM divisions";

const DIVISIONS_TABLE: &str = "divisions";
const REQUIRED_COLUMNS: &[&str] = &[
    "division_id",
    "division_code",
    "division_name",
    "comments",
];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for division persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(DivisionId),
    /// Update/delete was attempted on a record that was never persisted.
    MissingId,
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "division not found: {id}"),
            Self::MissingId => write!(f, "division has no id; it was never persisted"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected \
                 {expected_version}; run migrations before constructing a repository"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Query options for listing divisions.
#[derive(Debug, Clone, Default)]
pub struct DivisionListQuery {
    /// Case-insensitive substring match on the display name.
    pub name_contains: Option<String>,
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Repository interface for division CRUD operations.
pub trait DivisionRepository {
    /// Persists one division and returns its row identity.
    ///
    /// Records carrying an explicit `id` keep it; records without one
    /// receive the identity assigned by storage.
    fn insert_division(&self, division: &Division) -> RepoResult<DivisionId>;
    /// Rewrites code/name/comments of an existing row, keyed by `id`.
    fn update_division(&self, division: &Division) -> RepoResult<()>;
    fn get_division(&self, id: DivisionId) -> RepoResult<Option<Division>>;
    /// Exact code match. When duplicates exist, the lowest id wins.
    fn find_by_code(&self, code: &str) -> RepoResult<Option<Division>>;
    fn list_divisions(&self, query: &DivisionListQuery) -> RepoResult<Vec<Division>>;
    /// Hard delete. Reference rows carry no tombstone state.
    fn delete_division(&self, id: DivisionId) -> RepoResult<()>;
}

/// SQLite-backed division repository.
pub struct SqliteDivisionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDivisionRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl DivisionRepository for SqliteDivisionRepository<'_> {
    fn insert_division(&self, division: &Division) -> RepoResult<DivisionId> {
        self.conn.execute(
            "INSERT INTO divisions (
                division_id,
                division_code,
                division_name,
                comments
            ) VALUES (?1, ?2, ?3, ?4);",
            params![
                division.id,
                division.code.as_str(),
                division.name.as_str(),
                division.comments.as_str(),
            ],
        )?;

        match division.id {
            Some(id) => Ok(id),
            None => Ok(self.conn.last_insert_rowid()),
        }
    }

    fn update_division(&self, division: &Division) -> RepoResult<()> {
        let id = division.id.ok_or(RepoError::MissingId)?;

        let changed = self.conn.execute(
            "UPDATE divisions
             SET
                division_code = ?1,
                division_name = ?2,
                comments = ?3
             WHERE division_id = ?4;",
            params![
                division.code.as_str(),
                division.name.as_str(),
                division.comments.as_str(),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn get_division(&self, id: DivisionId) -> RepoResult<Option<Division>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DIVISION_SELECT_SQL} WHERE division_id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_division_row(row)?));
        }

        Ok(None)
    }

    fn find_by_code(&self, code: &str) -> RepoResult<Option<Division>> {
        let mut stmt = self.conn.prepare(&format!(
            "{DIVISION_SELECT_SQL}
             WHERE division_code = ?1
             ORDER BY division_id ASC
             LIMIT 1;"
        ))?;

        let mut rows = stmt.query(params![code])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_division_row(row)?));
        }

        Ok(None)
    }

    fn list_divisions(&self, query: &DivisionListQuery) -> RepoResult<Vec<Division>> {
        let mut sql = format!("{DIVISION_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(fragment) = query.name_contains.as_deref() {
            sql.push_str(" AND division_name LIKE ? ESCAPE '\\'");
            bind_values.push(Value::Text(format!("%{}%", escape_like(fragment))));
        }

        sql.push_str(" ORDER BY division_id ASC");

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            bind_values.push(Value::Integer(i64::from(limit)));
            if query.offset > 0 {
                sql.push_str(" OFFSET ?");
                bind_values.push(Value::Integer(i64::from(query.offset)));
            }
        } else if query.offset > 0 {
            sql.push_str(" LIMIT -1 OFFSET ?");
            bind_values.push(Value::Integer(i64::from(query.offset)));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut divisions = Vec::new();

        while let Some(row) = rows.next()? {
            divisions.push(parse_division_row(row)?);
        }

        Ok(divisions)
    }

    fn delete_division(&self, id: DivisionId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM divisions WHERE division_id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let mut stmt = conn.prepare(&format!("PRAGMA table_info({DIVISIONS_TABLE});"))?;
    let mut rows = stmt.query([])?;
    let mut columns = Vec::new();
    while let Some(row) = rows.next()? {
        columns.push(row.get::<_, String>("name")?);
    }

    if columns.is_empty() {
        return Err(RepoError::MissingRequiredTable(DIVISIONS_TABLE));
    }

    for &column in REQUIRED_COLUMNS {
        if !columns.iter().any(|have| have == column) {
            return Err(RepoError::MissingRequiredColumn {
                table: DIVISIONS_TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn parse_division_row(row: &Row<'_>) -> RepoResult<Division> {
    let id: DivisionId = row.get("division_id")?;

    Ok(Division {
        id: Some(id),
        code: row.get("division_code")?,
        name: row.get("division_name")?,
        comments: row.get("comments")?,
    })
}

fn escape_like(fragment: &str) -> String {
    fragment
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
