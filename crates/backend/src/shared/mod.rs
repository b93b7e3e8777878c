pub mod aggregation;
pub mod config;
pub mod data;
pub mod error;
