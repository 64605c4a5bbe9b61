//! guide-engine: Headless core of the Arduino guide
//!
//! This crate provides everything the guide does without a screen:
//! - The view router, kept in sync with session history and a persisted selection
//! - Address and link classification
//! - Key-value storage (file, memory, disabled)
//! - Learning-path progress and the tutorial stepper
//! - Configuration

pub mod address;
pub mod config;
pub mod history;
pub mod progress;
pub mod router;
pub mod store;
pub mod tutorial;
pub mod view;

// Re-export commonly used types
pub use address::{Address, Href};
pub use config::{ConfigError, GuideConfig, CONFIG_FILE};
pub use history::{History, Traversal};
pub use progress::{Card, LearningPath, ProgressError, ProgressTracker, Tally};
pub use router::{
    Activation, Dispatched, LinkOutcome, NavigationEvent, Router, DEFAULT_STORAGE_KEY,
};
pub use store::{
    open_or_memory, DisabledStore, DynStore, FileStore, KeyValueStore, MemoryStore, StoreError,
    STORE_FILE,
};
pub use tutorial::{Step, Stepper, Tutorial, TutorialCatalog, TutorialError};
pub use view::{View, ViewError, ViewId, ViewRegistry, ViewSpec};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_version() {
        let version = engine_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
