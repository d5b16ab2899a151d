use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// JsonConnection manages the data directory and raw slot file access for
/// the JSON storage backend. Repositories layer record semantics on top.
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a new JSON connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).with_context(|| {
                format!("Failed to create data directory: {}", base_path.display())
            })?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a new JSON connection in the default data directory
    /// (a "Buffet Tracker" folder under the platform data directory)
    pub fn new_default() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .context("Could not determine the platform data directory")?;
        Self::new(data_dir.join("Buffet Tracker"))
    }

    /// Get the base directory this connection operates in
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Get the path of the file backing a named slot
    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", slot))
    }

    /// Read the raw contents of a slot, or `None` when nothing has been
    /// persisted yet
    pub fn read_slot(&self, slot: &str) -> Result<Option<String>> {
        let path = self.slot_path(slot);

        if !path.exists() {
            debug!("Slot {} has no file yet, treating as empty", slot);
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read slot file: {}", path.display()))?;
        Ok(Some(content))
    }

    /// Replace the contents of a slot.
    ///
    /// The new document is written to a temp file and renamed into place so
    /// an interrupted write cannot corrupt the slot.
    pub fn write_slot(&self, slot: &str, content: &str) -> Result<()> {
        let path = self.slot_path(slot);
        let temp_path = path.with_extension("tmp");

        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write slot file: {}", temp_path.display()))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to commit slot file: {}", path.display()))?;

        debug!("Wrote slot {} ({} bytes)", slot, content.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_slot_reads_as_none() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection = JsonConnection::new(temp_dir.path()).expect("Failed to create connection");

        let content = connection.read_slot("category-store").expect("Failed to read slot");
        assert!(content.is_none());
    }

    #[test]
    fn written_slot_reads_back() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection = JsonConnection::new(temp_dir.path()).expect("Failed to create connection");

        connection
            .write_slot("category-store", "[]")
            .expect("Failed to write slot");
        let content = connection.read_slot("category-store").expect("Failed to read slot");
        assert_eq!(content.as_deref(), Some("[]"));
    }

    #[test]
    fn write_leaves_no_temp_file_behind() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection = JsonConnection::new(temp_dir.path()).expect("Failed to create connection");

        connection
            .write_slot("settings-store", "{}")
            .expect("Failed to write slot");
        assert!(connection.slot_path("settings-store").exists());
        assert!(!connection.slot_path("settings-store").with_extension("tmp").exists());
    }

    #[test]
    fn creates_missing_base_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let nested = temp_dir.path().join("nested").join("data");

        let connection = JsonConnection::new(&nested).expect("Failed to create connection");
        assert!(nested.exists());
        connection.write_slot("user-store", "[]").expect("Failed to write slot");
    }
}
