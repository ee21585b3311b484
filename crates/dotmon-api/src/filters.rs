// Alert filter endpoints

use tracing::debug;

use crate::client::{Client, created_id, ensure_success};
use crate::error::Error;
use crate::models::{CreateResponseBlock, Filter, ResponseBlock};

impl Client {
    pub async fn create_filter(&self, filter: &Filter) -> Result<i64, Error> {
        debug!(name = %filter.name, "creating filter");
        let block: Option<CreateResponseBlock> = self.put("filters", filter).await?;
        created_id(block, "filter")
    }

    pub async fn get_filter(&self, id: i64) -> Result<Option<Filter>, Error> {
        self.get_entity(&format!("filter/{id}"), id).await
    }

    pub async fn update_filter(&self, id: i64, filter: &Filter) -> Result<(), Error> {
        debug!(id, "updating filter");
        let block: Option<ResponseBlock> = self.post(&format!("filter/{id}"), filter).await?;
        ensure_success(block)
    }

    pub async fn delete_filter(&self, id: i64) -> Result<(), Error> {
        debug!(id, "deleting filter");
        let block: Option<ResponseBlock> = self.delete(&format!("filter/{id}")).await?;
        ensure_success(block)
    }

    pub async fn filter_exists(&self, id: i64) -> Result<bool, Error> {
        Ok(self.get_filter(id).await?.is_some())
    }

    pub async fn filter_ids(&self) -> Result<Vec<i64>, Error> {
        self.get_ids("filters").await
    }

    /// Filters whose name matches exactly.
    pub async fn filters_by_name(&self, name: &str) -> Result<Vec<Filter>, Error> {
        let mut found = Vec::new();
        for id in self.filter_ids().await? {
            if let Some(filter) = self.get_filter(id).await? {
                if filter.name == name {
                    found.push(filter);
                }
            }
        }
        Ok(found)
    }
}
