use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr, Statement};

/// Opens the SQLite database, creating the file and parent directory when
/// missing.
pub async fn connect(db_file: &str) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    let conn = Database::connect(&db_url).await?;
    Ok(conn)
}

/// Minimal schema bootstrap: one table per entity, created when absent.
/// Decimal fields are TEXT (fixed-precision strings); timestamps are TEXT
/// UTC instants; booleans are INTEGER 0/1.
pub async fn create_schema(conn: &DatabaseConnection) -> Result<(), DbErr> {
    for sql in SCHEMA {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }
    tracing::info!("database schema ready");
    Ok(())
}

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS sales_events (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        start_date TEXT NOT NULL,
        end_date TEXT NOT NULL,
        target_revenue TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT 'planned',
        signal_config TEXT,
        created_at TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS sales_metrics (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        event_id INTEGER,
        timestamp TEXT NOT NULL,
        total_sales TEXT NOT NULL,
        active_customers INTEGER NOT NULL,
        avg_basket_size TEXT NOT NULL,
        conversion_rate TEXT NOT NULL,
        inventory_health TEXT NOT NULL
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        category TEXT NOT NULL,
        size TEXT,
        price TEXT NOT NULL,
        sku TEXT NOT NULL UNIQUE,
        description TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS inventory (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        product_id INTEGER,
        store_id INTEGER NOT NULL,
        region TEXT NOT NULL,
        current_stock INTEGER NOT NULL,
        min_threshold INTEGER NOT NULL,
        last_updated TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS stores (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        region TEXT NOT NULL,
        address TEXT,
        status TEXT NOT NULL DEFAULT 'active',
        store_count INTEGER NOT NULL
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS incidents (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        incident_id TEXT NOT NULL UNIQUE,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        severity TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT 'open',
        assigned_team TEXT,
        impact TEXT,
        eta_minutes INTEGER,
        escalation_level INTEGER NOT NULL DEFAULT 1,
        users_affected INTEGER,
        revenue_at_risk TEXT,
        current_action TEXT,
        action_eta_minutes INTEGER,
        action_owner TEXT,
        war_room_active INTEGER NOT NULL DEFAULT 0,
        war_room_participants INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        resolved_at TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS war_room_participants (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        incident_id INTEGER,
        participant_type TEXT NOT NULL,
        name TEXT NOT NULL,
        role TEXT NOT NULL,
        status TEXT NOT NULL,
        description TEXT,
        eta_minutes INTEGER,
        badge_color TEXT,
        created_at TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS incident_resolution_paths (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        incident_id INTEGER,
        path_name TEXT NOT NULL,
        path_type TEXT NOT NULL,
        description TEXT NOT NULL,
        success_rate INTEGER NOT NULL,
        time_estimate TEXT,
        tradeoffs TEXT,
        priority INTEGER NOT NULL DEFAULT 1,
        created_at TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS system_components (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        status TEXT NOT NULL,
        response_time_ms INTEGER,
        last_check TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS data_field_configs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        event_id INTEGER,
        bundle_id TEXT NOT NULL,
        data_source TEXT NOT NULL,
        field_name TEXT NOT NULL,
        update_frequency TEXT NOT NULL DEFAULT 'realtime',
        retention_days INTEGER NOT NULL DEFAULT 7,
        is_active INTEGER NOT NULL DEFAULT 1,
        created_at TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS signal_dependencies (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        event_id INTEGER,
        source_bundle TEXT NOT NULL,
        source_field TEXT NOT NULL,
        target_bundle TEXT NOT NULL,
        target_field TEXT NOT NULL,
        dependency_type TEXT NOT NULL,
        weight INTEGER DEFAULT 1,
        created_at TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS hourly_sales_data (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        event_id INTEGER,
        hour TEXT NOT NULL,
        date TEXT NOT NULL,
        target_sales TEXT NOT NULL,
        actual_sales TEXT NOT NULL,
        created_at TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS product_performance (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        product_id INTEGER,
        event_id INTEGER,
        revenue TEXT NOT NULL,
        units_sold INTEGER NOT NULL,
        ranking INTEGER NOT NULL,
        growth_rate TEXT,
        last_updated TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS regional_sales_data (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        event_id INTEGER,
        region TEXT NOT NULL,
        store_count INTEGER NOT NULL,
        revenue TEXT NOT NULL,
        growth_rate TEXT NOT NULL,
        performance_vs_target TEXT NOT NULL,
        last_updated TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS customer_behavior_metrics (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        event_id INTEGER,
        total_visitors INTEGER NOT NULL,
        bounce_rate TEXT NOT NULL,
        session_duration INTEGER NOT NULL,
        pages_per_session TEXT NOT NULL,
        customer_satisfaction TEXT NOT NULL,
        nps_score INTEGER NOT NULL,
        timestamp TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS social_mentions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        event_id INTEGER,
        platform TEXT NOT NULL,
        mentions INTEGER NOT NULL,
        sentiment TEXT NOT NULL,
        engagement_rate TEXT NOT NULL,
        influence_score INTEGER NOT NULL,
        last_updated TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS market_trends (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        event_id INTEGER,
        trend_name TEXT NOT NULL,
        category TEXT NOT NULL,
        impact TEXT NOT NULL,
        confidence TEXT NOT NULL,
        description TEXT NOT NULL,
        predicted_growth TEXT,
        data_source TEXT NOT NULL,
        last_updated TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS top_performers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        event_id INTEGER,
        name TEXT NOT NULL,
        region TEXT NOT NULL,
        store_id INTEGER NOT NULL,
        sales TEXT NOT NULL,
        target_percentage TEXT NOT NULL,
        ranking INTEGER NOT NULL,
        last_updated TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS ai_insights (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        event_id INTEGER,
        category TEXT NOT NULL,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        confidence TEXT NOT NULL,
        impact TEXT NOT NULL,
        data_source TEXT NOT NULL,
        priority INTEGER NOT NULL DEFAULT 1,
        created_at TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS inventory_alerts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        product_id INTEGER,
        store_id INTEGER NOT NULL,
        location TEXT NOT NULL,
        current_stock INTEGER NOT NULL,
        min_threshold INTEGER NOT NULL,
        severity TEXT NOT NULL,
        eta TEXT,
        auto_reorder_enabled INTEGER NOT NULL DEFAULT 0,
        created_at TEXT
    );
    "#,
];
