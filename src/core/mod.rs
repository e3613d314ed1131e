pub mod csv_export;
pub mod email;
pub mod fetch;
pub mod pipeline;
pub mod sanitize;
pub mod sheets;
pub mod table;

pub use crate::domain::model::{Listing, RunSummary, SearchFilters, Table};
pub use crate::domain::ports::{ConfigProvider, ListingSource};
pub use crate::utils::error::Result;
