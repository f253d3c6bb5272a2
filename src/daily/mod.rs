pub mod config;
pub mod record;
pub mod selector;
pub mod store;

pub use config::SelectionConfig;
pub use record::DailyRecord;
pub use selector::DailySelector;
pub use store::{DailyRecordStore, InMemoryRecordStore, JsonFileRecordStore};
