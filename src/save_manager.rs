//! Profile persistence: a checksummed binary save file.
//!
//! Layout: version magic (8 bytes LE), payload length (4 bytes LE),
//! bincode-serialized profile, SHA-256 over everything before it. A wrong
//! magic or a checksum mismatch is a hard load error; corrupt saves are
//! never half-loaded.

use crate::core::constants::SAVE_VERSION_MAGIC;
use crate::core::profile::Profile;
use chrono::Utc;
use directories::ProjectDirs;
use log::{debug, warn};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Uses the platform config directory (e.g. `~/.config/tidepool`).
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "tidepool").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "could not determine config directory")
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(Self {
            save_path: config_dir.join("profile.dat"),
        })
    }

    /// Saves to an explicit path instead of the platform directory.
    pub fn with_path(save_path: PathBuf) -> Self {
        Self { save_path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.save_path
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Writes the profile, stamping `last_save_time` first.
    pub fn save(&self, profile: &mut Profile) -> io::Result<()> {
        profile.last_save_time = Utc::now().timestamp();

        let data = bincode::serialize(profile)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let data_len = data.len() as u32;

        let mut hasher = Sha256::new();
        hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(&self.save_path)?;
        file.write_all(&SAVE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;

        debug!("saved {} bytes to {}", data_len, self.save_path.display());
        Ok(())
    }

    /// Loads and verifies the profile.
    pub fn load(&self) -> io::Result<Profile> {
        let mut file = fs::File::open(&self.save_path)?;

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);
        if version != SAVE_VERSION_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "unrecognized save version: expected 0x{SAVE_VERSION_MAGIC:016X}, got 0x{version:016X}"
                ),
            ));
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        let mut data = vec![0u8; data_len as usize];
        file.read_exact(&mut data)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&data);
        let computed = hasher.finalize();

        if computed.as_slice() != stored_checksum {
            warn!("checksum mismatch in {}", self.save_path.display());
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "save file checksum mismatch",
            ));
        }

        bincode::deserialize(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn delete_save(&self) -> io::Result<()> {
        if self.save_exists() {
            fs::remove_file(&self.save_path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn manager_in_tempdir() -> (tempfile::TempDir, SaveManager) {
        let dir = tempdir().unwrap();
        let manager = SaveManager::with_path(dir.path().join("profile.dat"));
        (dir, manager)
    }

    #[test]
    fn test_save_load_round_trip() {
        let (_dir, manager) = manager_in_tempdir();
        let mut profile = Profile::new("keeper");
        profile.deposit_algae(123.0);

        manager.save(&mut profile).unwrap();
        let loaded = manager.load().unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_save_stamps_time() {
        let (_dir, manager) = manager_in_tempdir();
        let mut profile = Profile::new("keeper");
        profile.last_save_time = 0;
        manager.save(&mut profile).unwrap();
        assert!(profile.last_save_time > 0);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let (_dir, manager) = manager_in_tempdir();
        assert!(manager.load().is_err());
        assert!(!manager.save_exists());
    }

    #[test]
    fn test_load_rejects_wrong_magic() {
        let (_dir, manager) = manager_in_tempdir();
        let mut profile = Profile::new("keeper");
        manager.save(&mut profile).unwrap();

        let mut bytes = fs::read(manager.path()).unwrap();
        bytes[0] ^= 0xFF;
        fs::write(manager.path(), &bytes).unwrap();

        let err = manager.load().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_load_rejects_corrupted_payload() {
        let (_dir, manager) = manager_in_tempdir();
        let mut profile = Profile::new("keeper");
        manager.save(&mut profile).unwrap();

        let mut bytes = fs::read(manager.path()).unwrap();
        let mid = bytes.len() / 2;
        bytes[mid] ^= 0xFF;
        fs::write(manager.path(), &bytes).unwrap();

        let err = manager.load().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_delete_save() {
        let (_dir, manager) = manager_in_tempdir();
        let mut profile = Profile::new("keeper");
        manager.save(&mut profile).unwrap();
        assert!(manager.save_exists());
        manager.delete_save().unwrap();
        assert!(!manager.save_exists());
        // Deleting twice is fine.
        manager.delete_save().unwrap();
    }
}
