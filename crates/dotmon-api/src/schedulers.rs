// Scheduler endpoints

use tracing::debug;

use crate::client::{Client, created_id, ensure_success};
use crate::error::Error;
use crate::models::{CreateResponseBlock, ResponseBlock, Scheduler};

impl Client {
    pub async fn create_scheduler(&self, scheduler: &Scheduler) -> Result<i64, Error> {
        debug!(name = %scheduler.name, "creating scheduler");
        let block: Option<CreateResponseBlock> = self.put("schedulers", scheduler).await?;
        created_id(block, "scheduler")
    }

    pub async fn get_scheduler(&self, id: i64) -> Result<Option<Scheduler>, Error> {
        self.get_entity(&format!("scheduler/{id}"), id).await
    }

    pub async fn update_scheduler(&self, id: i64, scheduler: &Scheduler) -> Result<(), Error> {
        debug!(id, "updating scheduler");
        let block: Option<ResponseBlock> = self
            .post(&format!("scheduler/{id}"), scheduler)
            .await?;
        ensure_success(block)
    }

    pub async fn delete_scheduler(&self, id: i64) -> Result<(), Error> {
        debug!(id, "deleting scheduler");
        let block: Option<ResponseBlock> = self.delete(&format!("scheduler/{id}")).await?;
        ensure_success(block)
    }

    pub async fn scheduler_exists(&self, id: i64) -> Result<bool, Error> {
        Ok(self.get_scheduler(id).await?.is_some())
    }

    pub async fn scheduler_ids(&self) -> Result<Vec<i64>, Error> {
        self.get_ids("schedulers").await
    }

    /// Schedulers whose name matches exactly.
    pub async fn schedulers_by_name(&self, name: &str) -> Result<Vec<Scheduler>, Error> {
        let mut found = Vec::new();
        for id in self.scheduler_ids().await? {
            if let Some(scheduler) = self.get_scheduler(id).await? {
                if scheduler.name == name {
                    found.push(scheduler);
                }
            }
        }
        Ok(found)
    }
}
