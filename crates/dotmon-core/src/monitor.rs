// ── Monitor: lifecycle entry point ──
//
// Owns the API client and drives create/read/update/delete for every
// resource kind. All operations in the process are serialized behind one
// lock; the API is not safe to hit concurrently from a single account.

use std::sync::LazyLock;

use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

use dotmon_api::Client;

use crate::config::MonitorConfig;
use crate::error::CoreError;
use crate::resource::Resource;

static OPERATION_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Hold the process-wide operation lock until the guard is dropped.
pub(crate) async fn serialize() -> MutexGuard<'static, ()> {
    OPERATION_LOCK.lock().await
}

/// The main entry point for consumers.
///
/// Build with [`Monitor::new`], then call [`connect`](Self::connect)
/// once to establish the session. A session that expires later is
/// renewed by the client on its own.
pub struct Monitor {
    config: MonitorConfig,
    client: Client,
}

impl Monitor {
    /// Create a monitor from configuration. Does NOT log in.
    pub fn new(config: MonitorConfig) -> Result<Self, CoreError> {
        let client = Client::new(config.base_url.clone(), &config.transport())?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// The underlying API client, for calls the monitor does not wrap.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Log in with the configured UID.
    pub async fn connect(&self) -> Result<(), CoreError> {
        let _guard = serialize().await;
        debug!(url = %self.config.base_url, "logging in");
        self.client.login(&self.config.uid).await?;
        info!("connected to Dotcom-Monitor");
        Ok(())
    }

    /// Drop the session. Later operations fail until `connect` is called again.
    pub fn disconnect(&self) {
        self.client.logout();
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Validate and create a resource, then read it back.
    ///
    /// Returns the new id and the resource as the API stored it.
    pub async fn create<R: Resource>(&self, spec: &R) -> Result<(i64, R), CoreError> {
        spec.validate()?;
        let _guard = serialize().await;

        let id = R::create(&self.client, &spec.to_wire()).await?;
        info!(entity = R::ENTITY, id, "created");

        let stored = self.fetch::<R>(id).await?.ok_or_else(|| {
            CoreError::Internal(format!("{} {id} vanished right after creation", R::ENTITY))
        })?;
        Ok((id, stored))
    }

    /// Read a resource. `None` means it no longer exists.
    pub async fn read<R: Resource>(&self, id: i64) -> Result<Option<R>, CoreError> {
        let _guard = serialize().await;
        let found = self.fetch::<R>(id).await?;
        if found.is_none() {
            debug!(entity = R::ENTITY, id, "not found");
        }
        Ok(found)
    }

    /// Replace a resource's settings, then read it back.
    ///
    /// Returns `None`, without sending anything, when the resource is gone.
    pub async fn update<R: Resource>(&self, id: i64, spec: &R) -> Result<Option<R>, CoreError> {
        spec.validate()?;
        let _guard = serialize().await;

        let Some(current) = self.fetch::<R>(id).await? else {
            warn!(entity = R::ENTITY, id, "not found; nothing to update");
            return Ok(None);
        };
        spec.check_update(&current)?;

        R::update(&self.client, id, &spec.to_wire()).await?;
        info!(entity = R::ENTITY, id, "updated");

        let stored = self.fetch::<R>(id).await?.ok_or_else(|| {
            CoreError::not_found(R::ENTITY, format!("id {id} (after update)"))
        })?;
        Ok(Some(stored))
    }

    /// Delete a resource. Returns `false` when it was already gone.
    pub async fn delete<R: Resource>(&self, id: i64) -> Result<bool, CoreError> {
        let _guard = serialize().await;
        if !self.probe::<R>(id).await {
            debug!(entity = R::ENTITY, id, "already deleted");
            return Ok(false);
        }
        R::delete(&self.client, id).await?;
        info!(entity = R::ENTITY, id, "deleted");
        Ok(true)
    }

    /// Whether a resource exists. A failed probe counts as "exists" so
    /// a transient API problem never makes a caller forget a resource.
    pub async fn exists<R: Resource>(&self, id: i64) -> bool {
        let _guard = serialize().await;
        self.probe::<R>(id).await
    }

    // ── Internals (caller holds the lock) ────────────────────────────

    async fn fetch<R: Resource>(&self, id: i64) -> Result<Option<R>, CoreError> {
        Ok(R::fetch(&self.client, id).await?.map(R::from_wire))
    }

    async fn probe<R: Resource>(&self, id: i64) -> bool {
        match R::fetch(&self.client, id).await {
            Ok(found) => found.is_some(),
            Err(e) => {
                warn!(entity = R::ENTITY, id, error = %e, "existence check failed; assuming it exists");
                true
            }
        }
    }
}
