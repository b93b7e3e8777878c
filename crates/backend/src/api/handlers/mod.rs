use serde::Deserialize;

pub mod dashboards;
pub mod events;
pub mod field_configs;
pub mod incidents;
pub mod inventory;
pub mod live;
pub mod metrics;
pub mod products;
pub mod reporting;
pub mod signal_dependencies;
pub mod stores;
pub mod system_components;

/// Optional `?eventId=` filter shared by metric and reporting reads.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventIdQuery {
    pub event_id: Option<i32>,
}
