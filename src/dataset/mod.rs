pub mod loader;
pub mod types;

pub use self::loader::{load_dataset, load_dataset_from_reader};
pub use self::types::{Dataset, LaunchRecord, Outcome, PayloadBounds};
