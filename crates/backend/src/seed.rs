//! Sample-data population for a fresh store. Runs through `&dyn Storage`,
//! so the memory and SQLite backends seed identically. Skipped entirely
//! when any sales event already exists.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::Rng;
use serde_json::json;

use contracts::domain::incident::InsertIncident;
use contracts::domain::inventory::InsertInventory;
use contracts::domain::product::InsertProduct;
use contracts::domain::reporting::{
    InsertAiInsight, InsertCustomerBehaviorMetrics, InsertHourlySalesData, InsertInventoryAlert,
    InsertMarketTrend, InsertProductPerformance, InsertRegionalSalesData, InsertSocialMention,
    InsertTopPerformer,
};
use contracts::domain::sales_event::InsertSalesEvent;
use contracts::domain::sales_metrics::InsertSalesMetrics;
use contracts::domain::store::InsertStore;
use contracts::domain::system_component::InsertSystemComponent;
use contracts::domain::war_room::{InsertIncidentResolutionPath, InsertWarRoomParticipant};

use crate::storage::{Result, Storage};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

pub async fn seed_if_empty(storage: &dyn Storage) -> Result<()> {
    if !storage.sales_events().await?.is_empty() {
        tracing::info!("store already seeded, skipping");
        return Ok(());
    }
    tracing::info!("seeding sample data");

    let event = storage
        .create_sales_event(InsertSalesEvent {
            name: "Black Friday 2024".to_string(),
            start_date: date(2024, 11, 29),
            end_date: date(2024, 12, 2),
            target_revenue: "2500000".to_string(),
            status: "active".to_string(),
            signal_config: Some(json!({
                "bundles": ["sales", "market", "customer", "inventory"],
                "updateFrequency": "realtime"
            })),
        })
        .await?;
    let event_id = Some(event.id);

    let products = seed_products(storage).await?;
    let stores = seed_stores(storage).await?;

    let mut rng = rand::thread_rng();
    for product_id in &products {
        for (store_id, region) in &stores {
            storage
                .create_inventory(InsertInventory {
                    product_id: Some(*product_id),
                    store_id: *store_id,
                    region: region.clone(),
                    current_stock: rng.gen_range(10..110),
                    min_threshold: 20,
                })
                .await?;
        }
    }

    storage
        .create_sales_metrics(InsertSalesMetrics {
            event_id,
            timestamp: Utc::now(),
            total_sales: "125000".to_string(),
            active_customers: 1247,
            avg_basket_size: "425.50".to_string(),
            conversion_rate: "3.2".to_string(),
            inventory_health: "92".to_string(),
        })
        .await?;

    seed_incidents(storage).await?;
    seed_system_components(storage).await?;
    seed_reporting(storage, event_id, &products).await?;

    tracing::info!("sample data seeded");
    Ok(())
}

async fn seed_products(storage: &dyn Storage) -> Result<Vec<i32>> {
    let rows = [
        (
            "Premium Memory Foam",
            "Memory Foam",
            "Queen",
            "1299.99",
            "PMF-001",
            "Premium memory foam mattress with cooling gel",
        ),
        (
            "Hybrid Comfort",
            "Hybrid",
            "King",
            "899.99",
            "HC-002",
            "Hybrid spring and foam construction",
        ),
        (
            "Natural Latex",
            "Latex",
            "Queen",
            "1599.99",
            "NL-003",
            "100% natural latex mattress",
        ),
    ];
    let mut ids = Vec::new();
    for (name, category, size, price, sku, description) in rows {
        let product = storage
            .create_product(InsertProduct {
                name: name.to_string(),
                category: category.to_string(),
                size: Some(size.to_string()),
                price: price.to_string(),
                sku: sku.to_string(),
                description: Some(description.to_string()),
            })
            .await?;
        ids.push(product.id);
    }
    Ok(ids)
}

async fn seed_stores(storage: &dyn Storage) -> Result<Vec<(i32, String)>> {
    let rows = [
        ("West Coast Region", "West Coast", "Los Angeles, CA", 15),
        ("East Coast Region", "East Coast", "New York, NY", 12),
        ("Midwest Region", "Midwest", "Chicago, IL", 8),
    ];
    let mut ids = Vec::new();
    for (name, region, address, store_count) in rows {
        let store = storage
            .create_store(InsertStore {
                name: name.to_string(),
                region: region.to_string(),
                address: Some(address.to_string()),
                status: "active".to_string(),
                store_count,
            })
            .await?;
        ids.push((store.id, store.region));
    }
    Ok(ids)
}

async fn seed_incidents(storage: &dyn Storage) -> Result<()> {
    let payment = storage
        .create_incident(InsertIncident {
            incident_id: "INC-2025-001".to_string(),
            title: "Payment Gateway Timeout".to_string(),
            description: "Critical payment processing failures affecting checkout".to_string(),
            severity: "critical".to_string(),
            status: "investigating".to_string(),
            assigned_team: Some("Payment Engineering".to_string()),
            impact: Some("High revenue impact".to_string()),
            eta_minutes: Some(15),
            escalation_level: 3,
            users_affected: Some(35500),
            revenue_at_risk: Some("47000.00".to_string()),
            current_action: Some("Manual Gateway Configuration".to_string()),
            action_eta_minutes: Some(12),
            action_owner: Some("Mike Kumar".to_string()),
            war_room_active: true,
            war_room_participants: 6,
        })
        .await?;

    let mobile = storage
        .create_incident(InsertIncident {
            incident_id: "INC-2025-002".to_string(),
            title: "Mobile App Crashes".to_string(),
            description: "High crash rate on iOS and Android platforms".to_string(),
            severity: "high".to_string(),
            status: "investigating".to_string(),
            assigned_team: Some("Mobile Engineering".to_string()),
            impact: Some("User experience degradation".to_string()),
            eta_minutes: Some(25),
            escalation_level: 2,
            users_affected: Some(12000),
            revenue_at_risk: Some("8500.00".to_string()),
            current_action: Some("Rolling Back Mobile App".to_string()),
            action_eta_minutes: Some(7),
            action_owner: Some("Deployment Monitor AI".to_string()),
            war_room_active: true,
            war_room_participants: 4,
        })
        .await?;

    // (type, name, role, status, description, eta, badge)
    let payment_participants = [
        (
            "ai",
            "Payment Analyzer AI",
            "Transaction Pattern Analysis",
            "active",
            "Analyzing 15K transactions/sec for timeout patterns",
            Some(2),
            "purple",
        ),
        (
            "ai",
            "Capacity Predictor AI",
            "Resource Forecasting",
            "standby",
            "Scaling recommendations ready",
            None,
            "blue",
        ),
        (
            "human",
            "Sarah Chen",
            "Chief Technology Officer",
            "active",
            "Coordinating with payment vendor CEO",
            Some(8),
            "red",
        ),
        (
            "human",
            "Mike Kumar",
            "Sr. Payment Engineer",
            "active",
            "Manual gateway config adjustment",
            Some(15),
            "orange",
        ),
        (
            "human",
            "Rachel Johnson",
            "DevOps Lead",
            "active",
            "Monitoring infrastructure health",
            None,
            "green",
        ),
        (
            "human",
            "David Lee",
            "Customer Support Lead",
            "active",
            "Managing customer communications",
            None,
            "blue",
        ),
    ];
    let mobile_participants = [
        (
            "ai",
            "Crash Analytics AI",
            "Error Pattern Detection",
            "completed",
            "Identified memory leak in checkout module - auto-rollback triggered",
            None,
            "green",
        ),
        (
            "ai",
            "Deployment Monitor AI",
            "Rollback Orchestration",
            "active",
            "75% devices updated to v2.1.2 stable",
            Some(10),
            "orange",
        ),
        (
            "human",
            "Alex Rodriguez",
            "Engineering Manager",
            "active",
            "Monitoring rollback metrics & crash rates",
            Some(5),
            "orange",
        ),
        (
            "human",
            "Jessica Wang",
            "Sr. Mobile Developer",
            "active",
            "Preparing hotfix for edge cases",
            Some(20),
            "blue",
        ),
    ];
    for (incident_id, participants) in [
        (payment.id, payment_participants.as_slice()),
        (mobile.id, mobile_participants.as_slice()),
    ] {
        for (participant_type, name, role, status, description, eta, badge) in participants {
            storage
                .create_war_room_participant(InsertWarRoomParticipant {
                    incident_id: Some(incident_id),
                    participant_type: participant_type.to_string(),
                    name: name.to_string(),
                    role: role.to_string(),
                    status: status.to_string(),
                    description: Some(description.to_string()),
                    eta_minutes: *eta,
                    badge_color: Some(badge.to_string()),
                })
                .await?;
        }
    }

    // (name, type, description, success, time, tradeoffs, priority)
    let payment_paths = [
        (
            "Path A",
            "current",
            "Manual config adjustment + backup gateway",
            85,
            "12 min",
            "Current approach",
            1,
        ),
        (
            "Path B",
            "fallback",
            "Full payment service restart",
            95,
            "30 min",
            "30min downtime",
            2,
        ),
        (
            "Path C",
            "nuclear",
            "Switch to backup payment provider",
            99,
            "2 hr",
            "2hr setup",
            3,
        ),
    ];
    let mobile_paths = [
        (
            "Path A",
            "current",
            "Automated rollback to v2.1.2",
            90,
            "7 min",
            "Current approach",
            1,
        ),
        (
            "Path B",
            "fallback",
            "Manual hotfix deployment",
            95,
            "45 min",
            "Manual intervention",
            2,
        ),
        (
            "Path C",
            "nuclear",
            "Rollback to v2.0.8 LTS",
            99,
            "15 min",
            "Loss of features",
            3,
        ),
    ];
    for (incident_id, paths) in [
        (payment.id, payment_paths.as_slice()),
        (mobile.id, mobile_paths.as_slice()),
    ] {
        for (path_name, path_type, description, success_rate, time_estimate, tradeoffs, priority) in
            paths
        {
            storage
                .create_incident_resolution_path(InsertIncidentResolutionPath {
                    incident_id: Some(incident_id),
                    path_name: path_name.to_string(),
                    path_type: path_type.to_string(),
                    description: description.to_string(),
                    success_rate: *success_rate,
                    time_estimate: Some(time_estimate.to_string()),
                    tradeoffs: Some(tradeoffs.to_string()),
                    priority: *priority,
                })
                .await?;
        }
    }

    Ok(())
}

async fn seed_system_components(storage: &dyn Storage) -> Result<()> {
    let rows = [
        ("Web Frontend", "operational", 245),
        ("Payment Gateway", "degraded", 890),
        ("Inventory API", "operational", 156),
        ("Analytics Pipeline", "operational", 324),
    ];
    for (name, status, response_time_ms) in rows {
        storage
            .create_system_component(InsertSystemComponent {
                name: name.to_string(),
                status: status.to_string(),
                response_time_ms: Some(response_time_ms),
            })
            .await?;
    }
    Ok(())
}

async fn seed_reporting(
    storage: &dyn Storage,
    event_id: Option<i32>,
    products: &[i32],
) -> Result<()> {
    let mut rng = rand::thread_rng();

    // 24 hourly rows on a sine curve around the base target.
    let midnight = Utc::now()
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or_else(Utc::now);
    for i in 0..24u32 {
        let target = 85000.0
            + (i as f64 / 24.0 * std::f64::consts::PI * 2.0).sin() * 45000.0
            + rng.gen::<f64>() * 10000.0;
        let actual = target * (0.85 + rng.gen::<f64>() * 0.3);
        storage
            .create_hourly_sales(InsertHourlySalesData {
                event_id,
                hour: format!("{:02}:00", i),
                date: midnight + Duration::hours(i as i64),
                target_sales: format!("{:.2}", target),
                actual_sales: format!("{:.2}", actual),
            })
            .await?;
    }

    let performance = [(45200, 156), (35600, 89), (38900, 67)];
    for (index, (revenue, units_sold)) in performance.iter().enumerate() {
        storage
            .create_product_performance(InsertProductPerformance {
                product_id: products.get(index).copied(),
                event_id,
                revenue: revenue.to_string(),
                units_sold: *units_sold,
                ranking: index as i32 + 1,
                growth_rate: Some(format!("{:.2}", rng.gen::<f64>() * 40.0 - 10.0)),
            })
            .await?;
    }

    let regions = [
        ("West Coast", 24, 485000.0),
        ("East Coast", 18, 392000.0),
        ("Midwest", 15, 328000.0),
        ("Southwest", 12, 267000.0),
        ("Southeast", 19, 356000.0),
    ];
    for (region, store_count, base_revenue) in regions {
        storage
            .create_regional_sales(InsertRegionalSalesData {
                event_id,
                region: region.to_string(),
                store_count,
                revenue: format!("{:.2}", base_revenue * (0.9 + rng.gen::<f64>() * 0.2)),
                growth_rate: format!("{:.2}", rng.gen::<f64>() * 25.0 + 5.0),
                performance_vs_target: format!("{:.2}", 85.0 + rng.gen::<f64>() * 30.0),
            })
            .await?;
    }

    storage
        .create_customer_behavior(InsertCustomerBehaviorMetrics {
            event_id,
            total_visitors: 12847,
            bounce_rate: "23.4".to_string(),
            session_duration: 287,
            pages_per_session: "4.2".to_string(),
            customer_satisfaction: "4.7".to_string(),
            nps_score: 68,
        })
        .await?;

    let social = [
        ("Twitter", 2847, "positive", "8.2", 87),
        ("Instagram", 3921, "positive", "12.4", 92),
        ("Facebook", 1563, "mixed", "6.8", 73),
        ("TikTok", 4206, "positive", "15.7", 95),
        ("Reddit", 892, "mixed", "4.3", 64),
    ];
    for (platform, mentions, sentiment, engagement_rate, influence_score) in social {
        storage
            .create_social_mention(InsertSocialMention {
                event_id,
                platform: platform.to_string(),
                mentions,
                sentiment: sentiment.to_string(),
                engagement_rate: engagement_rate.to_string(),
                influence_score,
            })
            .await?;
    }

    let trends = [
        (
            "Sustainable Sleep Products",
            "Environmental",
            "high",
            "87.3",
            "Growing consumer preference for eco-friendly materials driving 23% increase in organic product sales",
            "34.2",
            "Market Research AI",
        ),
        (
            "Smart Home Integration",
            "Technology",
            "medium",
            "72.8",
            "Sleep technology integration showing steady adoption with 18% quarterly growth",
            "28.7",
            "IoT Analytics Platform",
        ),
        (
            "Premium Wellness Focus",
            "Consumer Behavior",
            "high",
            "91.2",
            "Premium product segment outperforming budget options by 42% in current quarter",
            "45.6",
            "Consumer Sentiment AI",
        ),
    ];
    for (trend_name, category, impact, confidence, description, predicted_growth, data_source) in
        trends
    {
        storage
            .create_market_trend(InsertMarketTrend {
                event_id,
                trend_name: trend_name.to_string(),
                category: category.to_string(),
                impact: impact.to_string(),
                confidence: confidence.to_string(),
                description: description.to_string(),
                predicted_growth: Some(predicted_growth.to_string()),
                data_source: data_source.to_string(),
            })
            .await?;
    }

    let performers = [
        ("Alex Thompson", "West Coast", 1, "47200", "142.3"),
        ("Sarah Chen", "East Coast", 5, "39800", "128.7"),
        ("Michael Rodriguez", "Midwest", 8, "35400", "115.2"),
        ("Jessica Park", "Southwest", 12, "33100", "108.9"),
        ("David Kim", "Southeast", 15, "31700", "103.4"),
    ];
    for (index, (name, region, store_id, sales, target_percentage)) in
        performers.iter().enumerate()
    {
        storage
            .create_top_performer(InsertTopPerformer {
                event_id,
                name: name.to_string(),
                region: region.to_string(),
                store_id: *store_id,
                sales: sales.to_string(),
                target_percentage: target_percentage.to_string(),
                ranking: index as i32 + 1,
            })
            .await?;
    }

    let insights = [
        (
            "prediction",
            "Sales Acceleration Detected",
            "Current trajectory suggests 18% above target by end of day. Recommend increasing inventory for top 3 products.",
            "94.2",
            "high",
            "Sales Prediction Engine",
            1,
        ),
        (
            "recommendation",
            "Regional Optimization Opportunity",
            "West Coast region showing 23% higher conversion rates. Consider reallocating marketing spend from underperforming regions.",
            "87.6",
            "medium",
            "Regional Analytics AI",
            2,
        ),
        (
            "alert",
            "Customer Satisfaction Trend",
            "NPS score increased by 12 points compared to last quarter. Current strategies are highly effective.",
            "91.8",
            "high",
            "Sentiment Analysis Engine",
            3,
        ),
        (
            "prediction",
            "Inventory Optimization Alert",
            "Premium Memory Foam projected to sell out within 6 hours. Immediate restocking recommended.",
            "96.7",
            "high",
            "Inventory Prediction AI",
            1,
        ),
    ];
    for (category, title, description, confidence, impact, data_source, priority) in insights {
        storage
            .create_ai_insight(InsertAiInsight {
                event_id,
                category: category.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                confidence: confidence.to_string(),
                impact: impact.to_string(),
                data_source: data_source.to_string(),
                priority,
            })
            .await?;
    }

    let alerts = [
        (1, 3, "West Coast - Store 3", 8, 15, "critical", "2 hours", true),
        (2, 7, "East Coast - Store 7", 12, 20, "warning", "4 hours", true),
        (3, 12, "Midwest - Store 12", 23, 25, "info", "6 hours", false),
    ];
    for (product_index, store_id, location, current_stock, min_threshold, severity, eta, auto) in
        alerts
    {
        storage
            .create_inventory_alert(InsertInventoryAlert {
                product_id: products.get(product_index - 1).copied(),
                store_id,
                location: location.to_string(),
                current_stock,
                min_threshold,
                severity: severity.to_string(),
                eta: Some(eta.to_string()),
                auto_reorder_enabled: auto,
            })
            .await?;
    }

    Ok(())
}
