// ── Lookups ──
//
// Resolve resources by name (or id) into exactly one match, and resolve
// location selections into concrete location lists. Nothing here is
// cached; every lookup lists and fetches afresh.

use std::collections::HashSet;

use tracing::debug;

use dotmon_api::{Location, Platform};

use crate::error::CoreError;
use crate::model::{
    DeviceSpec, FilterSpec, GroupSpec, LocationFilter, LocationSelection, Lookup, SchedulerSpec,
    TaskSpec,
};
use crate::monitor::{Monitor, serialize};

/// Locations inside national firewalls: Hong Kong, Shanghai, Beijing,
/// Chengdu, Guangzhou, Qingdao, Shenzhen.
pub const RESTRICTIVE_LOCATION_IDS: [i64; 7] = [11, 72, 184, 445, 446, 447, 448];

/// The only platform with a location list.
const LOCATION_PLATFORM_ID: i64 = 1;

/// Reduce `matches` to its single element.
fn exactly_one<T>(
    mut matches: Vec<T>,
    id_of: impl Fn(&T) -> i64,
    entity_type: &str,
    identifier: &str,
) -> Result<T, CoreError> {
    match matches.len() {
        0 => Err(CoreError::not_found(entity_type, identifier)),
        1 => matches
            .pop()
            .ok_or_else(|| CoreError::Internal("match list emptied unexpectedly".into())),
        _ => Err(CoreError::Ambiguous {
            entity_type: entity_type.into(),
            identifier: identifier.into(),
            ids: matches.iter().map(id_of).collect(),
        }),
    }
}

/// Drop restrictive locations and collapse duplicates by id.
pub fn remove_restrictive(locations: Vec<Location>) -> Vec<Location> {
    let mut seen = HashSet::new();
    locations
        .into_iter()
        .filter(|l| !RESTRICTIVE_LOCATION_IDS.contains(&l.id) && seen.insert(l.id))
        .collect()
}

impl Monitor {
    /// The task named `name` on device `device_id`.
    pub async fn find_task(&self, device_id: i64, name: &str) -> Result<(i64, TaskSpec), CoreError> {
        let _guard = serialize().await;
        let found = self.client().tasks_by_name(device_id, name).await?;
        let task = exactly_one(
            found,
            |t| t.id,
            "task",
            &format!("name {name:?} on device {device_id}"),
        )?;
        Ok((task.id, task.into()))
    }

    /// The device named `name` on platform `platform_id`.
    pub async fn find_device(
        &self,
        platform_id: i64,
        name: &str,
    ) -> Result<(i64, DeviceSpec), CoreError> {
        let _guard = serialize().await;
        let found = self.client().devices_by_name(platform_id, name).await?;
        let device = exactly_one(
            found,
            |d| d.id,
            "device",
            &format!("name {name:?} on platform {platform_id}"),
        )?;
        Ok((device.id, device.into()))
    }

    pub async fn find_group(&self, name: &str) -> Result<(i64, GroupSpec), CoreError> {
        let _guard = serialize().await;
        let found = self.client().groups_by_name(name).await?;
        let group = exactly_one(found, |g| g.id, "notification group", &format!("name {name:?}"))?;
        Ok((group.id, group.into()))
    }

    pub async fn find_scheduler(&self, lookup: &Lookup) -> Result<(i64, SchedulerSpec), CoreError> {
        let _guard = serialize().await;
        let found = match lookup {
            Lookup::Id(id) => self.client().get_scheduler(*id).await?.into_iter().collect(),
            Lookup::Name(name) => self.client().schedulers_by_name(name).await?,
        };
        let scheduler = exactly_one(found, |s| s.id, "scheduler", &lookup.to_string())?;
        Ok((scheduler.id, scheduler.into()))
    }

    pub async fn find_filter(&self, lookup: &Lookup) -> Result<(i64, FilterSpec), CoreError> {
        let _guard = serialize().await;
        let found = match lookup {
            Lookup::Id(id) => self.client().get_filter(*id).await?.into_iter().collect(),
            Lookup::Name(name) => self.client().filters_by_name(name).await?,
        };
        let filter = exactly_one(found, |f| f.id, "filter", &lookup.to_string())?;
        Ok((filter.id, filter.into()))
    }

    /// A single location by id or name, unavailable ones included.
    pub async fn find_location(
        &self,
        platform_id: i64,
        lookup: &Lookup,
    ) -> Result<Location, CoreError> {
        let _guard = serialize().await;
        let found = match lookup {
            Lookup::Id(id) => self
                .client()
                .location(platform_id, *id)
                .await?
                .into_iter()
                .collect(),
            Lookup::Name(name) => {
                self.client()
                    .locations_by_name(platform_id, name, true)
                    .await?
            }
        };
        exactly_one(found, |l| l.id, "location", &lookup.to_string())
    }

    /// Resolve a location selection into concrete locations.
    ///
    /// Requested ids or names that do not exist, and selections that
    /// end up empty, are errors.
    pub async fn select_locations(
        &self,
        selection: &LocationSelection,
    ) -> Result<Vec<Location>, CoreError> {
        if selection.platform_id != LOCATION_PLATFORM_ID {
            return Err(CoreError::ValidationFailed {
                entity_type: "location selection".into(),
                violations: vec![format!(
                    "platform_id: only platform {LOCATION_PLATFORM_ID} has locations, got {}",
                    selection.platform_id
                )],
            });
        }

        let _guard = serialize().await;
        let client = self.client();
        let platform = selection.platform_id;
        let unavailable = selection.include_unavailable;

        let mut selected = match &selection.filter {
            LocationFilter::All => client.locations(platform, unavailable).await?,
            LocationFilter::Public => client.public_locations(platform, unavailable).await?,
            LocationFilter::Private => client.private_locations(platform, unavailable).await?,
            LocationFilter::Ids(ids) => {
                let all = client.locations(platform, unavailable).await?;
                let missing: Vec<String> = ids
                    .iter()
                    .filter(|id| !all.iter().any(|l| l.id == **id))
                    .map(ToString::to_string)
                    .collect();
                if !missing.is_empty() {
                    return Err(CoreError::not_found(
                        "location",
                        format!("ids {}", missing.join(", ")),
                    ));
                }
                all.into_iter().filter(|l| ids.contains(&l.id)).collect()
            }
            LocationFilter::Names(names) => {
                let all = client.locations(platform, unavailable).await?;
                let missing: Vec<&str> = names
                    .iter()
                    .filter(|n| !all.iter().any(|l| &l.name == *n))
                    .map(String::as_str)
                    .collect();
                if !missing.is_empty() {
                    return Err(CoreError::not_found(
                        "location",
                        format!("names {}", missing.join(", ")),
                    ));
                }
                all.into_iter().filter(|l| names.contains(&l.name)).collect()
            }
        };

        if !selection.include_restrictive {
            selected = remove_restrictive(selected);
        }
        if selected.is_empty() {
            return Err(CoreError::not_found(
                "location",
                format!("selection {:?} on platform {platform}", selection.filter),
            ));
        }
        debug!(count = selected.len(), "locations selected");
        Ok(selected)
    }

    /// Every platform available to the account.
    pub async fn platforms(&self) -> Result<Vec<Platform>, CoreError> {
        let _guard = serialize().await;
        Ok(self.client().platforms().await?)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn loc(id: i64) -> Location {
        Location {
            id,
            name: format!("loc-{id}"),
            available: true,
            ..Location::default()
        }
    }

    #[test]
    fn restrictive_locations_are_removed_and_deduped() {
        let kept = remove_restrictive(vec![loc(1), loc(11), loc(2), loc(1), loc(448)]);
        let ids: Vec<i64> = kept.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn exactly_one_reports_every_candidate() {
        let err = exactly_one(vec![loc(3), loc(4)], |l| l.id, "location", "name \"x\"")
            .unwrap_err();
        match err {
            CoreError::Ambiguous { ids, .. } => assert_eq!(ids, vec![3, 4]),
            other => panic!("expected Ambiguous, got {other:?}"),
        }

        let err = exactly_one(Vec::<Location>::new(), |l| l.id, "location", "id 9").unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
    }
}
