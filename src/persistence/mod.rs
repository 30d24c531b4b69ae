pub mod store;

pub use store::{
    get_as, keys, set_as, JsonFileStore, MemoryStore, SettingsStore, StoreError,
};
