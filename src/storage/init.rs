//! Storage initialization
//!
//! Handles first-run setup: the config directory, the settings record and an
//! empty ledger file.

use std::fs::OpenOptions;
use std::path::Path;

use crate::config::paths::GbillPaths;
use crate::config::settings::Settings;
use crate::error::GbillError;

use super::bills::BillRepository;

/// Initialize gbill with the ledger stored at `db_path`
///
/// An existing ledger at `db_path` is kept when it reads as a list of bills,
/// so re-running `init` never loses bills. Anything else is replaced by an
/// empty ledger.
pub fn initialize(paths: &GbillPaths, db_path: &Path) -> Result<Settings, GbillError> {
    paths.ensure_directories()?;

    let settings_file = paths.settings_file();
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings_file)
        .map_err(|e| GbillError::FileCreate(format!("{}: {}", settings_file.display(), e)))?;

    let settings = Settings::new(db_path);
    settings.save(paths)?;

    let repo = BillRepository::new(db_path);
    if !repo.is_valid() {
        repo.init()?;
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Bill;
    use tempfile::TempDir;

    #[test]
    fn test_initialize() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GbillPaths::with_base_dir(temp_dir.path().join("config"));
        let db_path = temp_dir.path().join("bills.json");

        let settings = initialize(&paths, &db_path).unwrap();

        assert_eq!(settings.database, db_path);
        assert_eq!(Settings::load(&paths).unwrap(), settings);
        assert_eq!(std::fs::read_to_string(&db_path).unwrap(), "[]");
    }

    #[test]
    fn test_doesnt_overwrite_existing_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GbillPaths::with_base_dir(temp_dir.path().join("config"));
        let db_path = temp_dir.path().join("bills.json");

        initialize(&paths, &db_path).unwrap();
        let repo = BillRepository::new(&db_path);
        repo.write_all(&[Bill::new(vec!["Ann".into()], "Bo", 5.0)])
            .unwrap();

        initialize(&paths, &db_path).unwrap();

        assert_eq!(repo.read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_replaces_corrupt_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GbillPaths::with_base_dir(temp_dir.path().join("config"));
        let db_path = temp_dir.path().join("bills.json");
        std::fs::write(&db_path, "garbage").unwrap();

        initialize(&paths, &db_path).unwrap();

        assert!(BillRepository::new(&db_path).read_all().unwrap().is_empty());
    }

    #[test]
    fn test_replaces_json_that_is_not_a_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GbillPaths::with_base_dir(temp_dir.path().join("config"));
        let db_path = temp_dir.path().join("bills.json");
        std::fs::write(&db_path, "{}").unwrap();

        initialize(&paths, &db_path).unwrap();

        assert_eq!(std::fs::read_to_string(&db_path).unwrap(), "[]");
    }

    #[test]
    fn test_directory_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let paths = GbillPaths::with_base_dir(blocker.join("config"));

        let err = initialize(&paths, &temp_dir.path().join("bills.json")).unwrap_err();
        assert!(matches!(err, GbillError::DirectoryCreate(_)));
    }

    #[test]
    fn test_ledger_write_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GbillPaths::with_base_dir(temp_dir.path().join("config"));
        let db_path = temp_dir.path().join("no-such-dir").join("bills.json");

        let err = initialize(&paths, &db_path).unwrap_err();
        assert!(matches!(err, GbillError::Write(_)));
    }
}
