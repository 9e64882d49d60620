pub mod client;
pub mod error;
pub mod mapping;
pub(crate) mod rate_limit;
pub mod types;

pub use client::SheetsClient;
pub use error::SheetsError;
pub use mapping::load_mapping_file;
pub use types::ValueRange;
