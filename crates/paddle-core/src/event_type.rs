//! Webhook event types.

use serde::{Deserialize, Serialize};

/// A webhook event type the API can emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventType {
    /// Event name, e.g. `product.created`.
    pub name: String,
    /// What the event signals.
    pub description: String,
    /// Group the event belongs to, e.g. `Product`.
    pub group: String,
    /// API versions that emit this event.
    #[serde(default)]
    pub available_versions: Vec<u32>,
}
