use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

use once_cell::sync::Lazy;
use tempfile::NamedTempFile;
use tracing::debug;

use super::record::DailyRecord;
use crate::types::{GameDate, StoreError};

/// Append-only table of daily records keyed by date.
///
/// `append` never overwrites: if a record already exists for the date, the
/// stored record is returned unchanged and the caller should adopt it.
pub trait DailyRecordStore {
    fn record_for(&self, date: GameDate) -> Result<Option<DailyRecord>, StoreError>;

    fn list_records(&self) -> Result<Vec<DailyRecord>, StoreError>;

    fn append(&self, record: DailyRecord) -> Result<DailyRecord, StoreError>;
}

impl<S: DailyRecordStore + ?Sized> DailyRecordStore for &S {
    fn record_for(&self, date: GameDate) -> Result<Option<DailyRecord>, StoreError> {
        (**self).record_for(date)
    }

    fn list_records(&self) -> Result<Vec<DailyRecord>, StoreError> {
        (**self).list_records()
    }

    fn append(&self, record: DailyRecord) -> Result<DailyRecord, StoreError> {
        (**self).append(record)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: RwLock<BTreeMap<GameDate, DailyRecord>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store. For repeated dates the first record wins.
    pub fn with_records(records: impl IntoIterator<Item = DailyRecord>) -> Self {
        let mut map = BTreeMap::new();
        for record in records {
            map.entry(record.date).or_insert(record);
        }
        Self {
            records: RwLock::new(map),
        }
    }
}

fn poisoned() -> StoreError {
    StoreError::Unavailable("record store lock poisoned".to_string())
}

impl DailyRecordStore for InMemoryRecordStore {
    fn record_for(&self, date: GameDate) -> Result<Option<DailyRecord>, StoreError> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.get(&date).copied())
    }

    fn list_records(&self) -> Result<Vec<DailyRecord>, StoreError> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.values().copied().collect())
    }

    fn append(&self, record: DailyRecord) -> Result<DailyRecord, StoreError> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        Ok(*records.entry(record.date).or_insert(record))
    }
}

/// Appends to the same file are serialized within the process: every
/// handle on a path shares one writer lock. Separate processes writing the
/// same file are not coordinated.
static WRITER_LOCKS: Lazy<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Records kept as a JSON array in a single file.
///
/// A missing file reads as an empty history. Writes go to a uniquely named
/// temporary sibling first and are persisted over the original.
#[derive(Debug, Clone)]
pub struct JsonFileRecordStore {
    path: PathBuf,
}

impl JsonFileRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    // Relative and absolute spellings of one file must share a lock
    fn writer_lock(&self) -> Result<Arc<Mutex<()>>, StoreError> {
        let key = match (fs::canonicalize(self.parent_dir()), self.path.file_name()) {
            (Ok(dir), Some(name)) => dir.join(name),
            _ => self.path.clone(),
        };

        let mut locks = WRITER_LOCKS.lock().map_err(|_| poisoned())?;
        Ok(Arc::clone(locks.entry(key).or_default()))
    }

    fn load(&self) -> Result<Vec<DailyRecord>, StoreError> {
        match fs::File::open(&self.path) {
            Ok(f) => Ok(serde_json::from_reader(std::io::BufReader::new(f))?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, records: &[DailyRecord]) -> Result<(), StoreError> {
        let mut temp = NamedTempFile::new_in(self.parent_dir())?;
        serde_json::to_writer_pretty(&mut temp, records)?;
        temp.as_file().sync_all()?;

        temp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

impl DailyRecordStore for JsonFileRecordStore {
    fn record_for(&self, date: GameDate) -> Result<Option<DailyRecord>, StoreError> {
        Ok(self.load()?.into_iter().find(|record| record.date == date))
    }

    fn list_records(&self) -> Result<Vec<DailyRecord>, StoreError> {
        self.load()
    }

    fn append(&self, record: DailyRecord) -> Result<DailyRecord, StoreError> {
        let lock = self.writer_lock()?;
        let _guard = lock.lock().map_err(|_| poisoned())?;

        let mut records = self.load()?;

        if let Some(existing) = records.iter().find(|r| r.date == record.date) {
            debug!(date = %record.date, spell_id = %existing.spell_id, "Daily record already present");
            return Ok(*existing);
        }

        records.push(record);
        self.write_all(&records)?;
        Ok(record)
    }
}
