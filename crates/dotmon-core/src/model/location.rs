// ── Location selection ──

use std::fmt;

/// Identify a single entity by id or by exact name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Id(i64),
    Name(String),
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id {id}"),
            Self::Name(name) => write!(f, "name {name:?}"),
        }
    }
}

/// Which locations of a platform to select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationFilter {
    All,
    Public,
    Private,
    Ids(Vec<i64>),
    Names(Vec<String>),
}

/// A set of monitoring locations to resolve into ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationSelection {
    pub filter: LocationFilter,
    /// Only ServerView (1) has a location list.
    pub platform_id: i64,
    pub include_unavailable: bool,
    /// Keep locations behind national firewalls (mainland China, Hong Kong).
    pub include_restrictive: bool,
}

impl LocationSelection {
    pub fn new(filter: LocationFilter) -> Self {
        Self {
            filter,
            platform_id: 1,
            include_unavailable: false,
            include_restrictive: true,
        }
    }
}
