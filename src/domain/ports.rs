use crate::domain::model::{Listing, SearchFilters};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch(&self, filters: &SearchFilters) -> Result<Vec<Listing>>;
}

pub trait ConfigProvider: Send + Sync {
    fn query(&self) -> &str;
    fn site(&self) -> &str;
    fn output_path(&self) -> &str;
    fn snapshot_file(&self) -> &str;
    fn spreadsheet_id(&self) -> &str;
    fn range(&self) -> &str;
}
