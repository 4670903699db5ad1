//! CSV-backed record store.
//!
//! The file is the sole source of truth: every operation loads it fresh and
//! every mutation rewrites it whole. Nothing is cached across requests.

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::AppError;
use crate::models::application::JobApplication;

/// Column order of the backing file. Fixed; there is no schema versioning.
const HEADERS: [&str; 7] = [
    "Job Title",
    "Company",
    "Location",
    "Status",
    "Package",
    "Experience(Years)",
    "Qualification",
];

/// Durable, title-keyed CRUD over a single CSV file.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        CsvStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates the backing file with only the header row if it does not
    /// exist. Idempotent.
    pub fn initialize(&self) -> Result<(), AppError> {
        if self.path.exists() {
            return Ok(());
        }
        let file = File::create(&self.path).map_err(AppError::StorageUnavailable)?;
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(HEADERS)?;
        writer.flush().map_err(AppError::StorageUnavailable)?;
        info!("Created backing store at {}", self.path.display());
        Ok(())
    }

    /// Reads every data row, in file order.
    ///
    /// Rows shorter than seven columns are padded with empty strings rather
    /// than dropped; one malformed row never fails the load.
    pub fn load_all(&self) -> Result<Vec<JobApplication>, AppError> {
        let file = File::open(&self.path).map_err(AppError::StorageUnavailable)?;
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(file);

        let mut applications = Vec::new();
        for record in reader.records() {
            let record = record?;
            let field = |i: usize| record.get(i).unwrap_or("").to_string();
            applications.push(JobApplication {
                title: field(0),
                company: field(1),
                location: field(2),
                status: field(3),
                package: field(4),
                experience_years: field(5),
                qualification: field(6),
            });
        }
        Ok(applications)
    }

    /// Inserts the record, or replaces the existing record with the same
    /// title in place. Matching is exact string equality, case-sensitive,
    /// no trimming; an empty title is a valid key. Returns the updated
    /// collection after persisting it.
    pub fn upsert(&self, application: JobApplication) -> Result<Vec<JobApplication>, AppError> {
        let mut applications = self.load_all()?;
        match applications.iter_mut().find(|a| a.title == application.title) {
            Some(existing) => *existing = application,
            None => applications.push(application),
        }
        self.persist(&applications)?;
        Ok(applications)
    }

    /// Removes every record with the given title. A missing title is a
    /// no-op that still rewrites the store. Returns the filtered collection.
    pub fn delete(&self, title: &str) -> Result<Vec<JobApplication>, AppError> {
        let mut applications = self.load_all()?;
        applications.retain(|a| a.title != title);
        self.persist(&applications)?;
        Ok(applications)
    }

    /// Rewrites the file whole: header row plus one row per record. Never
    /// appends.
    fn persist(&self, applications: &[JobApplication]) -> Result<(), AppError> {
        let file = File::create(&self.path).map_err(AppError::StorageUnavailable)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.write_record(HEADERS)?;
        for application in applications {
            writer.serialize(application)?;
        }
        writer.flush().map_err(AppError::StorageUnavailable)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn make_store(dir: &TempDir) -> CsvStore {
        let store = CsvStore::new(dir.path().join("applications.csv"));
        store.initialize().unwrap();
        store
    }

    fn make_application(title: &str, status: &str) -> JobApplication {
        JobApplication {
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            status: status.to_string(),
            package: "100k".to_string(),
            experience_years: "2".to_string(),
            qualification: "BS".to_string(),
        }
    }

    #[test]
    fn fresh_store_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = make_store(&dir);
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn initialize_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = make_store(&dir);
        store.upsert(make_application("SWE", "Applied")).unwrap();
        store.initialize().unwrap();
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn load_without_initialize_is_storage_unavailable() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::new(dir.path().join("missing.csv"));
        assert!(matches!(
            store.load_all(),
            Err(AppError::StorageUnavailable(_))
        ));
    }

    #[test]
    fn upsert_appends_then_replaces_in_place() {
        let dir = TempDir::new().unwrap();
        let store = make_store(&dir);
        store.upsert(make_application("SWE", "Applied")).unwrap();
        store.upsert(make_application("SRE", "Applied")).unwrap();

        // Same title: replaced at its original index, not moved or duplicated.
        let apps = store.upsert(make_application("SWE", "Interview")).unwrap();
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].title, "SWE");
        assert_eq!(apps[0].status, "Interview");
        assert_eq!(apps[1].title, "SRE");
    }

    #[test]
    fn upsert_enforces_title_uniqueness() {
        let dir = TempDir::new().unwrap();
        let store = make_store(&dir);
        for status in ["Applied", "Interview", "Rejected", "Accepted"] {
            store.upsert(make_application("SWE", status)).unwrap();
        }
        let apps = store.load_all().unwrap();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].status, "Accepted");
    }

    #[test]
    fn upsert_is_idempotent_on_unchanged_input() {
        let dir = TempDir::new().unwrap();
        let store = make_store(&dir);
        let app = make_application("SWE", "Applied");
        let once = store.upsert(app.clone()).unwrap();
        let twice = store.upsert(app).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn title_match_is_exact_and_case_sensitive() {
        let dir = TempDir::new().unwrap();
        let store = make_store(&dir);
        store.upsert(make_application("SWE", "Applied")).unwrap();
        store.upsert(make_application("swe", "Applied")).unwrap();
        store.upsert(make_application("SWE ", "Applied")).unwrap();
        assert_eq!(store.load_all().unwrap().len(), 3);
    }

    #[test]
    fn empty_title_is_a_valid_key() {
        let dir = TempDir::new().unwrap();
        let store = make_store(&dir);
        store.upsert(make_application("", "Applied")).unwrap();
        let apps = store.upsert(make_application("", "Interview")).unwrap();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].status, "Interview");
    }

    #[test]
    fn delete_removes_record_and_is_noop_for_absent_keys() {
        let dir = TempDir::new().unwrap();
        let store = make_store(&dir);
        store.upsert(make_application("SWE", "Applied")).unwrap();

        let apps = store.delete("nonexistent").unwrap();
        assert_eq!(apps, store.load_all().unwrap());
        assert_eq!(apps.len(), 1);

        assert!(store.delete("SWE").unwrap().is_empty());
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn embedded_commas_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = make_store(&dir);
        let mut app = make_application("Engineer, Platform", "Applied");
        app.location = "Portland, OR".to_string();
        store.upsert(app.clone()).unwrap();
        assert_eq!(store.load_all().unwrap(), vec![app]);
    }

    #[test]
    fn short_rows_are_padded_not_dropped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("applications.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(
            file,
            "Job Title,Company,Location,Status,Package,Experience(Years),Qualification"
        )
        .unwrap();
        writeln!(file, "SWE,Acme").unwrap();
        writeln!(file, "SRE,Initech,Remote,Applied,90k,3,MS").unwrap();

        let apps = CsvStore::new(&path).load_all().unwrap();
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].title, "SWE");
        assert_eq!(apps[0].company, "Acme");
        assert_eq!(apps[0].location, "");
        assert_eq!(apps[0].qualification, "");
        assert_eq!(apps[1].qualification, "MS");
    }

    #[test]
    fn insert_update_delete_scenario() {
        let dir = TempDir::new().unwrap();
        let store = make_store(&dir);

        store.upsert(make_application("SWE", "Applied")).unwrap();
        let apps = store.load_all().unwrap();
        assert_eq!(apps, vec![make_application("SWE", "Applied")]);

        store.upsert(make_application("SWE", "Interview")).unwrap();
        let apps = store.load_all().unwrap();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].status, "Interview");

        store.delete("SWE").unwrap();
        assert!(store.load_all().unwrap().is_empty());
    }
}
