//! Append-only reporting tables. One entity per chart on the dashboard.

pub mod ai_insight;
pub mod customer_behavior;
pub mod hourly_sales;
pub mod inventory_alert;
pub mod market_trend;
pub mod product_performance;
pub mod regional_sales;
pub mod social_mention;
pub mod top_performer;
