// Device endpoints

use tracing::debug;

use crate::client::{Client, created_id, ensure_success};
use crate::error::Error;
use crate::models::{CreateResponseBlock, Device, ResponseBlock};

impl Client {
    /// Create a device and return its new id.
    pub async fn create_device(&self, device: &Device) -> Result<i64, Error> {
        debug!(name = %device.name, platform_id = device.platform_id, "creating device");
        let block: Option<CreateResponseBlock> = self.put("devices", device).await?;
        created_id(block, "device")
    }

    pub async fn get_device(&self, id: i64) -> Result<Option<Device>, Error> {
        self.get_entity(&format!("device/{id}"), id).await
    }

    pub async fn update_device(&self, id: i64, device: &Device) -> Result<(), Error> {
        debug!(id, "updating device");
        let block: Option<ResponseBlock> = self.post(&format!("device/{id}"), device).await?;
        ensure_success(block)
    }

    /// Delete a device. The API removes its tasks with it.
    pub async fn delete_device(&self, id: i64) -> Result<(), Error> {
        debug!(id, "deleting device");
        let block: Option<ResponseBlock> = self.delete(&format!("device/{id}")).await?;
        ensure_success(block)
    }

    pub async fn device_exists(&self, id: i64) -> Result<bool, Error> {
        Ok(self.get_device(id).await?.is_some())
    }

    /// Ids of every device on a platform.
    pub async fn device_ids(&self, platform_id: i64) -> Result<Vec<i64>, Error> {
        self.get_ids(&format!("devices/{platform_id}")).await
    }

    /// Devices on a platform whose name matches exactly.
    pub async fn devices_by_name(&self, platform_id: i64, name: &str) -> Result<Vec<Device>, Error> {
        let mut found = Vec::new();
        for id in self.device_ids(platform_id).await? {
            if let Some(device) = self.get_device(id).await? {
                if device.name == name {
                    found.push(device);
                }
            }
        }
        Ok(found)
    }
}
