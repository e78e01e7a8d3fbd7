use partner_dashboard::{api, AppConfig, DashboardService, PgPartnerSource};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::load()?;
    info!("Starting server with config: {:?}", config);

    // 每次加载单独建立连接, 这里只保存连接串
    let source = Arc::new(PgPartnerSource::new(config.database.url.clone()));
    let service = Arc::new(
        DashboardService::new(source, config.card_layout())
            .with_load_timeout(config.load_timeout()),
    );

    let app = api::router(service);

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  GET /health");
    info!("  GET /api/partners  - partner cards with discount tiers");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
