// ── Resource kinds ──
//
// Binds each spec type to its wire type and to the `dotmon_api::Client`
// calls that manage it, so the lifecycle in `monitor` is written once.

use std::future::Future;

use dotmon_api::{Client, Device, Error as ApiError, Filter, Group, Scheduler, Task};

use crate::error::CoreError;
use crate::model::{DeviceSpec, FilterSpec, GroupSpec, SchedulerSpec, TaskSpec};
use crate::validate::Validate;

/// A spec type that maps onto one API entity kind.
pub trait Resource: Validate + Clone + Send + Sync + Sized {
    type Wire: Send + Sync;

    fn to_wire(&self) -> Self::Wire;
    fn from_wire(wire: Self::Wire) -> Self;

    fn create(
        client: &Client,
        wire: &Self::Wire,
    ) -> impl Future<Output = Result<i64, ApiError>> + Send;

    fn fetch(
        client: &Client,
        id: i64,
    ) -> impl Future<Output = Result<Option<Self::Wire>, ApiError>> + Send;

    fn update(
        client: &Client,
        id: i64,
        wire: &Self::Wire,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn delete(client: &Client, id: i64) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Reject changes the API cannot apply in place.
    fn check_update(&self, _current: &Self) -> Result<(), CoreError> {
        Ok(())
    }
}

macro_rules! resource {
    ($spec:ty, $wire:ty, $create:ident, $get:ident, $update:ident, $delete:ident) => {
        impl Resource for $spec {
            type Wire = $wire;

            fn to_wire(&self) -> $wire {
                <$wire>::from(self)
            }

            fn from_wire(wire: $wire) -> Self {
                Self::from(wire)
            }

            fn create(
                client: &Client,
                wire: &$wire,
            ) -> impl Future<Output = Result<i64, ApiError>> + Send {
                client.$create(wire)
            }

            fn fetch(
                client: &Client,
                id: i64,
            ) -> impl Future<Output = Result<Option<$wire>, ApiError>> + Send {
                client.$get(id)
            }

            fn update(
                client: &Client,
                id: i64,
                wire: &$wire,
            ) -> impl Future<Output = Result<(), ApiError>> + Send {
                client.$update(id, wire)
            }

            fn delete(
                client: &Client,
                id: i64,
            ) -> impl Future<Output = Result<(), ApiError>> + Send {
                client.$delete(id)
            }
        }
    };
}

resource!(DeviceSpec, Device, create_device, get_device, update_device, delete_device);
resource!(GroupSpec, Group, create_group, get_group, update_group, delete_group);
resource!(
    SchedulerSpec,
    Scheduler,
    create_scheduler,
    get_scheduler,
    update_scheduler,
    delete_scheduler
);
resource!(FilterSpec, Filter, create_filter, get_filter, update_filter, delete_filter);

impl Resource for TaskSpec {
    type Wire = Task;

    fn to_wire(&self) -> Task {
        Task::from(self)
    }

    fn from_wire(wire: Task) -> Self {
        Self::from(wire)
    }

    fn create(client: &Client, wire: &Task) -> impl Future<Output = Result<i64, ApiError>> + Send {
        client.create_task(wire)
    }

    fn fetch(
        client: &Client,
        id: i64,
    ) -> impl Future<Output = Result<Option<Task>, ApiError>> + Send {
        client.get_task(id)
    }

    fn update(
        client: &Client,
        id: i64,
        wire: &Task,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        client.update_task(id, wire)
    }

    fn delete(client: &Client, id: i64) -> impl Future<Output = Result<(), ApiError>> + Send {
        client.delete_task(id)
    }

    /// Tasks cannot move between devices.
    fn check_update(&self, current: &Self) -> Result<(), CoreError> {
        if self.device_id == current.device_id {
            Ok(())
        } else {
            Err(CoreError::ValidationFailed {
                entity_type: Self::ENTITY.into(),
                violations: vec![format!(
                    "device_id: cannot move a task from device {} to {}; recreate it instead",
                    current.device_id, self.device_id
                )],
            })
        }
    }
}
