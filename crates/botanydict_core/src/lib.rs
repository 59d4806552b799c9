//! Persistence core for the botany dictionary's division reference table.
//! This crate is the single source of truth for division storage semantics.

pub mod db;
pub mod dump;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use dump::{export_sql, import_dump, parse_dump, DumpError, DumpResult, ImportSummary};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::division::{Division, DivisionId};
pub use repo::division_repo::{
    DivisionListQuery, DivisionRepository, RepoError, RepoResult, SqliteDivisionRepository,
};
pub use service::division_service::DivisionService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
