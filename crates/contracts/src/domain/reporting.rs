//! Derived reporting tables, populated by the batch seeding routine.
//! Purely additive; there is no update path in normal operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlySalesData {
    pub id: i32,
    pub event_id: Option<i32>,
    /// "HH:MM"
    pub hour: String,
    pub date: DateTime<Utc>,
    pub target_sales: String,
    pub actual_sales: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertHourlySalesData {
    #[serde(default)]
    pub event_id: Option<i32>,
    pub hour: String,
    pub date: DateTime<Utc>,
    pub target_sales: String,
    pub actual_sales: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPerformance {
    pub id: i32,
    pub product_id: Option<i32>,
    pub event_id: Option<i32>,
    pub revenue: String,
    pub units_sold: i32,
    pub ranking: i32,
    pub growth_rate: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertProductPerformance {
    #[serde(default)]
    pub product_id: Option<i32>,
    #[serde(default)]
    pub event_id: Option<i32>,
    pub revenue: String,
    pub units_sold: i32,
    pub ranking: i32,
    #[serde(default)]
    pub growth_rate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalSalesData {
    pub id: i32,
    pub event_id: Option<i32>,
    pub region: String,
    pub store_count: i32,
    pub revenue: String,
    pub growth_rate: String,
    pub performance_vs_target: String,
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertRegionalSalesData {
    #[serde(default)]
    pub event_id: Option<i32>,
    pub region: String,
    pub store_count: i32,
    pub revenue: String,
    pub growth_rate: String,
    pub performance_vs_target: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerBehaviorMetrics {
    pub id: i32,
    pub event_id: Option<i32>,
    pub total_visitors: i32,
    pub bounce_rate: String,
    /// Average session duration in seconds.
    pub session_duration: i32,
    pub pages_per_session: String,
    pub customer_satisfaction: String,
    pub nps_score: i32,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertCustomerBehaviorMetrics {
    #[serde(default)]
    pub event_id: Option<i32>,
    pub total_visitors: i32,
    pub bounce_rate: String,
    pub session_duration: i32,
    pub pages_per_session: String,
    pub customer_satisfaction: String,
    pub nps_score: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMention {
    pub id: i32,
    pub event_id: Option<i32>,
    pub platform: String,
    pub mentions: i32,
    /// positive, negative, mixed
    pub sentiment: String,
    pub engagement_rate: String,
    pub influence_score: i32,
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertSocialMention {
    #[serde(default)]
    pub event_id: Option<i32>,
    pub platform: String,
    pub mentions: i32,
    pub sentiment: String,
    pub engagement_rate: String,
    pub influence_score: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketTrend {
    pub id: i32,
    pub event_id: Option<i32>,
    pub trend_name: String,
    pub category: String,
    /// high, medium, low
    pub impact: String,
    pub confidence: String,
    pub description: String,
    pub predicted_growth: Option<String>,
    pub data_source: String,
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertMarketTrend {
    #[serde(default)]
    pub event_id: Option<i32>,
    pub trend_name: String,
    pub category: String,
    pub impact: String,
    pub confidence: String,
    pub description: String,
    #[serde(default)]
    pub predicted_growth: Option<String>,
    pub data_source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPerformer {
    pub id: i32,
    pub event_id: Option<i32>,
    pub name: String,
    pub region: String,
    pub store_id: i32,
    pub sales: String,
    pub target_percentage: String,
    pub ranking: i32,
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertTopPerformer {
    #[serde(default)]
    pub event_id: Option<i32>,
    pub name: String,
    pub region: String,
    pub store_id: i32,
    pub sales: String,
    pub target_percentage: String,
    pub ranking: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiInsight {
    pub id: i32,
    pub event_id: Option<i32>,
    /// prediction, recommendation, alert
    pub category: String,
    pub title: String,
    pub description: String,
    pub confidence: String,
    /// high, medium, low
    pub impact: String,
    pub data_source: String,
    pub priority: i32,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAiInsight {
    #[serde(default)]
    pub event_id: Option<i32>,
    pub category: String,
    pub title: String,
    pub description: String,
    pub confidence: String,
    pub impact: String,
    pub data_source: String,
    #[serde(default = "default_priority")]
    pub priority: i32,
}

fn default_priority() -> i32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryAlert {
    pub id: i32,
    pub product_id: Option<i32>,
    pub store_id: i32,
    pub location: String,
    pub current_stock: i32,
    pub min_threshold: i32,
    /// critical, warning, info
    pub severity: String,
    pub eta: Option<String>,
    pub auto_reorder_enabled: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertInventoryAlert {
    #[serde(default)]
    pub product_id: Option<i32>,
    pub store_id: i32,
    pub location: String,
    pub current_stock: i32,
    pub min_threshold: i32,
    pub severity: String,
    #[serde(default)]
    pub eta: Option<String>,
    #[serde(default)]
    pub auto_reorder_enabled: bool,
}
