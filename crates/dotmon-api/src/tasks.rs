// Task endpoints
//
// Tasks live under a device. Creation is `PUT tasks`, everything else
// addresses `task/{id}`; the device's task list is `device/{id}/tasks`.

use tracing::debug;

use crate::client::{Client, created_id, ensure_success};
use crate::error::Error;
use crate::models::{CreateResponseBlock, ResponseBlock, Task};

impl Client {
    /// Create a task and return its new id.
    pub async fn create_task(&self, task: &Task) -> Result<i64, Error> {
        debug!(name = %task.name, device_id = task.device_id, "creating task");
        let block: Option<CreateResponseBlock> = self.put("tasks", task).await?;
        created_id(block, "task")
    }

    /// Fetch a task. `None` when the API reports nothing for this id.
    pub async fn get_task(&self, id: i64) -> Result<Option<Task>, Error> {
        self.get_entity(&format!("task/{id}"), id).await
    }

    /// Replace a task's settings. The whole object is sent.
    pub async fn update_task(&self, id: i64, task: &Task) -> Result<(), Error> {
        debug!(id, "updating task");
        let block: Option<ResponseBlock> = self.post(&format!("task/{id}"), task).await?;
        ensure_success(block)
    }

    pub async fn delete_task(&self, id: i64) -> Result<(), Error> {
        debug!(id, "deleting task");
        let block: Option<ResponseBlock> = self.delete(&format!("task/{id}")).await?;
        ensure_success(block)
    }

    pub async fn task_exists(&self, id: i64) -> Result<bool, Error> {
        Ok(self.get_task(id).await?.is_some())
    }

    /// Ids of every task attached to a device.
    pub async fn device_task_ids(&self, device_id: i64) -> Result<Vec<i64>, Error> {
        self.get_ids(&format!("device/{device_id}/tasks")).await
    }

    /// Every task attached to a device, fetched one by one.
    pub async fn device_tasks(&self, device_id: i64) -> Result<Vec<Task>, Error> {
        let mut tasks = Vec::new();
        for id in self.device_task_ids(device_id).await? {
            if let Some(task) = self.get_task(id).await? {
                tasks.push(task);
            }
        }
        Ok(tasks)
    }

    /// Tasks on a device whose name matches exactly.
    pub async fn tasks_by_name(&self, device_id: i64, name: &str) -> Result<Vec<Task>, Error> {
        let mut tasks = self.device_tasks(device_id).await?;
        tasks.retain(|t| t.name == name);
        Ok(tasks)
    }
}
