//! Shared record schemas for the sales-event monitoring backend.
//!
//! Every entity is a flat record keyed by an opaque `i32` id. Decimal fields
//! travel as fixed-precision strings; timestamps are UTC instants. The wire
//! format is camelCase JSON.

pub mod dashboards;
pub mod domain;
