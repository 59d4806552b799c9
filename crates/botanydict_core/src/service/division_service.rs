//! Division use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::division::{Division, DivisionId};
use crate::repo::division_repo::{DivisionListQuery, DivisionRepository, RepoError, RepoResult};

/// Use-case service wrapper for division CRUD operations.
pub struct DivisionService<R: DivisionRepository> {
    repo: R,
}

impl<R: DivisionRepository> DivisionService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new division row and returns its assigned identity.
    pub fn create_division(
        &self,
        code: impl Into<String>,
        name: impl Into<String>,
        comments: impl Into<String>,
    ) -> RepoResult<DivisionId> {
        let division = Division::new(code, name, comments);
        self.repo.insert_division(&division)
    }

    /// Persists a prepared record, keeping an explicit id when present.
    pub fn insert_division(&self, division: &Division) -> RepoResult<DivisionId> {
        self.repo.insert_division(division)
    }

    /// Updates an existing division by row identity.
    ///
    /// Returns repository-level not-found or missing-id errors unchanged.
    pub fn update_division(&self, division: &Division) -> RepoResult<()> {
        self.repo.update_division(division)
    }

    /// Replaces the display name of the division with the given id.
    pub fn rename_division(&self, id: DivisionId, name: impl Into<String>) -> RepoResult<()> {
        let mut division = self
            .repo
            .get_division(id)?
            .ok_or(RepoError::NotFound(id))?;
        division.rename(name);
        self.repo.update_division(&division)
    }

    /// Replaces the free-form comments of the division with the given id.
    pub fn annotate_division(
        &self,
        id: DivisionId,
        comments: impl Into<String>,
    ) -> RepoResult<()> {
        let mut division = self
            .repo
            .get_division(id)?
            .ok_or(RepoError::NotFound(id))?;
        division.set_comments(comments);
        self.repo.update_division(&division)
    }

    /// Gets one division by row identity.
    pub fn get_division(&self, id: DivisionId) -> RepoResult<Option<Division>> {
        self.repo.get_division(id)
    }

    /// Looks a division up by its short code.
    pub fn find_by_code(&self, code: &str) -> RepoResult<Option<Division>> {
        self.repo.find_by_code(code)
    }

    /// Lists divisions using filter and pagination options.
    pub fn list_divisions(&self, query: &DivisionListQuery) -> RepoResult<Vec<Division>> {
        self.repo.list_divisions(query)
    }

    /// Deletes a division by row identity.
    pub fn delete_division(&self, id: DivisionId) -> RepoResult<()> {
        self.repo.delete_division(id)
    }
}
