/// Test utilities for the JSON storage backend.
///
/// Provides an RAII environment whose temp directory is removed when the
/// value drops, so test data never outlives a test even on panic.
use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::booking_repository::BookingRepository;
use super::category_repository::CategoryRepository;
use super::connection::JsonConnection;
use super::organization_repository::OrganizationRepository;
use super::settings_repository::SettingsRepository;

/// Test environment owning a temp data directory and a connection into it
pub struct TestEnvironment {
    /// The temporary directory - kept alive to prevent cleanup until drop
    _temp_dir: TempDir,
    /// The JSON connection for the test
    pub connection: JsonConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: PathBuf,
}

impl TestEnvironment {
    /// Create a new test environment with automatic cleanup
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = JsonConnection::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }

    /// Get the base directory path for this test environment
    pub fn base_directory(&self) -> &Path {
        &self.base_path
    }
}

/// Convenience bundle of all four repositories over one test environment
pub struct RepositoryTestHelper {
    pub env: TestEnvironment,
    pub category_repo: CategoryRepository,
    pub booking_repo: BookingRepository,
    pub settings_repo: SettingsRepository,
    pub organization_repo: OrganizationRepository,
}

impl RepositoryTestHelper {
    /// Create a new repository test helper with all repositories
    pub fn new() -> Result<Self> {
        let env = TestEnvironment::new()?;

        let category_repo = CategoryRepository::new(env.connection.clone());
        let booking_repo = BookingRepository::new(env.connection.clone());
        let settings_repo = SettingsRepository::new(env.connection.clone());
        let organization_repo = OrganizationRepository::new(env.connection.clone());

        Ok(Self {
            env,
            category_repo,
            booking_repo,
            settings_repo,
            organization_repo,
        })
    }
}
