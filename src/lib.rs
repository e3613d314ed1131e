pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::fetch::RapidApiSource;
pub use core::pipeline::SyncPipeline;
pub use core::sheets::{GoogleSheetsClient, SheetExporter};
pub use utils::error::{EtlError, Result};
