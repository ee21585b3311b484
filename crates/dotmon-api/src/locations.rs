// Monitoring locations and platforms
//
// `locations/{platform_id}` returns full objects rather than ids.
// Deleted locations are always dropped; unavailable ones only on request.

use crate::client::Client;
use crate::error::Error;
use crate::models::{Location, Platform};

impl Client {
    /// All live locations on a platform.
    pub async fn locations(
        &self,
        platform_id: i64,
        include_unavailable: bool,
    ) -> Result<Vec<Location>, Error> {
        let all: Vec<Location> = self
            .get(&format!("locations/{platform_id}"))
            .await?
            .unwrap_or_default();
        Ok(all
            .into_iter()
            .filter(|l| !l.is_deleted && (include_unavailable || l.available))
            .collect())
    }

    pub async fn public_locations(
        &self,
        platform_id: i64,
        include_unavailable: bool,
    ) -> Result<Vec<Location>, Error> {
        let mut all = self.locations(platform_id, include_unavailable).await?;
        all.retain(|l| !l.is_private);
        Ok(all)
    }

    pub async fn private_locations(
        &self,
        platform_id: i64,
        include_unavailable: bool,
    ) -> Result<Vec<Location>, Error> {
        let mut all = self.locations(platform_id, include_unavailable).await?;
        all.retain(|l| l.is_private);
        Ok(all)
    }

    /// A single location by id, unavailable ones included.
    pub async fn location(&self, platform_id: i64, id: i64) -> Result<Option<Location>, Error> {
        Ok(self
            .locations(platform_id, true)
            .await?
            .into_iter()
            .find(|l| l.id == id))
    }

    /// Locations whose name matches exactly.
    pub async fn locations_by_name(
        &self,
        platform_id: i64,
        name: &str,
        include_unavailable: bool,
    ) -> Result<Vec<Location>, Error> {
        let mut all = self.locations(platform_id, include_unavailable).await?;
        all.retain(|l| l.name == name);
        Ok(all)
    }

    /// Every platform available to the account.
    pub async fn platforms(&self) -> Result<Vec<Platform>, Error> {
        Ok(self.get("platforms").await?.unwrap_or_default())
    }
}
