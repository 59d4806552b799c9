//! Division domain model.
//!
//! # Responsibility
//! - Define the canonical record for one row of the `divisions` reference
//!   table.
//! - Leave row-identity assignment to the persistence layer.
//!
//! # Invariants
//! - `id` is `None` until a repository persists the record (or the record was
//!   built from upstream dump data that already carries an id).
//! - Once assigned, `id` is never rewritten by any write path.
//!
//! # See also
//! - docs/architecture/data-model.md

use serde::{Deserialize, Serialize};

/// Integer primary-key identity of a persisted division row.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type DivisionId = i64;

/// One row of the `divisions` reference table.
///
/// A plain mutable record with no format constraints on its text fields;
/// all in-memory operations are total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Division {
    /// Row identity. Serialized as `division_id` to match external schema
    /// naming.
    #[serde(rename = "division_id")]
    pub id: Option<DivisionId>,
    /// Short division code, e.g. `PLN`.
    #[serde(rename = "division_code")]
    pub code: String,
    /// Display name, e.g. `Plants`.
    #[serde(rename = "division_name")]
    pub name: String,
    /// Free-form notes. Often empty in upstream data.
    pub comments: String,
}

impl Division {
    /// Creates an unpersisted division (`id = None`).
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        comments: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            code: code.into(),
            name: name.into(),
            comments: comments.into(),
        }
    }

    /// Creates a division carrying an externally assigned identity.
    ///
    /// Used by dump import, where the upstream file owns the id space.
    pub fn with_id(
        id: DivisionId,
        code: impl Into<String>,
        name: impl Into<String>,
        comments: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            code: code.into(),
            name: name.into(),
            comments: comments.into(),
        }
    }

    /// Returns whether this record already has a row identity.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Replaces the display name.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replaces the free-form comments.
    pub fn set_comments(&mut self, comments: impl Into<String>) {
        self.comments = comments.into();
    }
}
