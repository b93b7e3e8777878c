//! Record schemas, one module per entity family.

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
pub mod war_room;
