use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::api::handlers;
use crate::storage::DynStorage;

/// Builds the full application router over the selected storage backend.
pub fn configure_routes(storage: DynStorage) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Sales events
        .route(
            "/api/events",
            get(handlers::events::list).post(handlers::events::create),
        )
        .route("/api/events/:id", put(handlers::events::update))
        // Sales metrics
        .route(
            "/api/metrics",
            get(handlers::metrics::list).post(handlers::metrics::create),
        )
        .route("/api/metrics/latest", get(handlers::metrics::latest))
        // Products
        .route(
            "/api/products",
            get(handlers::products::list).post(handlers::products::create),
        )
        .route("/api/products/:id", get(handlers::products::get_by_id))
        // Inventory
        .route("/api/inventory", get(handlers::inventory::list))
        .route(
            "/api/inventory/low-stock",
            get(handlers::inventory::low_stock),
        )
        .route("/api/inventory/:id", put(handlers::inventory::update))
        // Stores
        .route("/api/stores", get(handlers::stores::list))
        .route("/api/stores/:id", get(handlers::stores::get_by_id))
        // Incidents and the war room
        .route(
            "/api/incidents",
            get(handlers::incidents::list).post(handlers::incidents::create),
        )
        .route("/api/incidents/:id", put(handlers::incidents::update))
        .route(
            "/api/incidents/:id/escalate",
            post(handlers::incidents::escalate),
        )
        .route(
            "/api/incidents/:id/participants",
            get(handlers::incidents::participants).post(handlers::incidents::create_participant),
        )
        .route(
            "/api/incidents/:id/resolution-paths",
            get(handlers::incidents::resolution_paths)
                .post(handlers::incidents::create_resolution_path),
        )
        // System health
        .route(
            "/api/system/components",
            get(handlers::system_components::list),
        )
        .route(
            "/api/system/components/:id",
            put(handlers::system_components::update),
        )
        // Signal configuration
        .route(
            "/api/field-configs",
            get(handlers::field_configs::list).post(handlers::field_configs::create),
        )
        .route(
            "/api/field-configs/:id",
            put(handlers::field_configs::update).delete(handlers::field_configs::delete),
        )
        .route(
            "/api/signal-dependencies",
            get(handlers::signal_dependencies::list).post(handlers::signal_dependencies::create),
        )
        .route(
            "/api/signal-dependencies/:id",
            delete(handlers::signal_dependencies::delete),
        )
        // Reporting
        .route("/api/hourly-sales", get(handlers::reporting::hourly_sales))
        .route(
            "/api/product-performance",
            get(handlers::reporting::product_performance),
        )
        .route(
            "/api/regional-sales",
            get(handlers::reporting::regional_sales),
        )
        .route(
            "/api/customer-behavior",
            get(handlers::reporting::customer_behavior),
        )
        .route(
            "/api/customer-behavior/latest",
            get(handlers::reporting::customer_behavior_latest),
        )
        .route(
            "/api/social-mentions",
            get(handlers::reporting::social_mentions),
        )
        .route("/api/market-trends", get(handlers::reporting::market_trends))
        .route(
            "/api/top-performers",
            get(handlers::reporting::top_performers),
        )
        .route("/api/ai-insights", get(handlers::reporting::ai_insights))
        .route(
            "/api/inventory-alerts",
            get(handlers::reporting::inventory_alerts),
        )
        // Derived rollups
        .route(
            "/api/store-metrics",
            get(handlers::dashboards::store_metrics),
        )
        .route(
            "/api/regional-performance",
            get(handlers::dashboards::regional_performance),
        )
        // Real-time simulation
        .route("/api/live/metrics", get(handlers::live::metrics))
        .with_state(storage)
}
