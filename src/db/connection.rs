use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::ConnectOptions;
use std::str::FromStr;
use std::time::Duration;

/// 打开一个独占的数据库连接 (不使用连接池, 每次加载一个连接)
pub async fn open_connection(database_url: &str) -> Result<PgConnection, sqlx::Error> {
    let connect_options = PgConnectOptions::from_str(database_url)?
        // 设置慢查询日志阈值为 5秒
        .log_slow_statements(tracing::log::LevelFilter::Warn, Duration::from_secs(5));

    connect_options.connect().await
}
