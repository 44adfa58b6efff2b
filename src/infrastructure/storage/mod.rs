pub mod memory_store;
pub mod preference_store;

pub use memory_store::MemoryPreferenceStore;
pub use preference_store::{FilePreferenceStore, PreferenceFileError};
