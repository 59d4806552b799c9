//! Domain model for the division reference table.
//!
//! # Responsibility
//! - Define the canonical record shape persisted by the repository layer.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod division;
