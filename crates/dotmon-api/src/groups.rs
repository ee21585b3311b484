// Notification group endpoints

use tracing::debug;

use crate::client::{Client, created_id, ensure_success};
use crate::error::Error;
use crate::models::{CreateResponseBlock, Group, ResponseBlock};

impl Client {
    pub async fn create_group(&self, group: &Group) -> Result<i64, Error> {
        debug!(name = %group.name, "creating notification group");
        let block: Option<CreateResponseBlock> = self.put("groups", group).await?;
        created_id(block, "notification group")
    }

    pub async fn get_group(&self, id: i64) -> Result<Option<Group>, Error> {
        self.get_entity(&format!("group/{id}"), id).await
    }

    pub async fn update_group(&self, id: i64, group: &Group) -> Result<(), Error> {
        debug!(id, "updating notification group");
        let block: Option<ResponseBlock> = self.post(&format!("group/{id}"), group).await?;
        ensure_success(block)
    }

    pub async fn delete_group(&self, id: i64) -> Result<(), Error> {
        debug!(id, "deleting notification group");
        let block: Option<ResponseBlock> = self.delete(&format!("group/{id}")).await?;
        ensure_success(block)
    }

    pub async fn group_exists(&self, id: i64) -> Result<bool, Error> {
        Ok(self.get_group(id).await?.is_some())
    }

    pub async fn group_ids(&self) -> Result<Vec<i64>, Error> {
        self.get_ids("groups").await
    }

    /// Groups whose name matches exactly.
    pub async fn groups_by_name(&self, name: &str) -> Result<Vec<Group>, Error> {
        let mut found = Vec::new();
        for id in self.group_ids().await? {
            if let Some(group) = self.get_group(id).await? {
                if group.name == name {
                    found.push(group);
                }
            }
        }
        Ok(found)
    }
}
