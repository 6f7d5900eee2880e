//! Public types exposed by the `supplier-directory` crate.

pub mod record;
pub mod search;
pub mod wire;

pub use record::SupplierRecord;
pub use search::{SearchOutcome, SearchQuery};
pub use wire::UploadResponse;
