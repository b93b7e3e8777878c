//! SQLite persistence, one repository module per entity. Each module owns
//! its sea-orm entity and converts rows into the contract types at the edge.

pub mod field_config;
pub mod incident;
pub mod inventory;
pub mod product;
pub mod reporting;
pub mod sales_event;
pub mod sales_metrics;
pub mod signal_dependency;
pub mod store;
pub mod system_component;
pub mod war_room_participant;
pub mod resolution_path;
