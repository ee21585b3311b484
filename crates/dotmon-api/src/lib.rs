// dotmon-api: Async Rust client for the Dotcom-Monitor configuration API
//
// Session auth is a single `POST /login` carrying the customer UID; the
// response sets the `.ASPXFORMSAUTH` cookie that every later call replays.
// Endpoint groups (tasks, devices, groups, ...) live in their own modules
// as inherent methods on `Client`.

pub mod auth;
pub mod client;
pub mod devices;
pub mod error;
pub mod filters;
pub mod groups;
pub mod locations;
pub mod models;
pub mod schedulers;
pub mod tasks;
pub mod transport;

pub use client::{AUTH_COOKIE_NAME, Client, DEFAULT_BASE_URL};
pub use error::Error;
pub use models::*;
pub use transport::{TlsMode, TransportConfig};
