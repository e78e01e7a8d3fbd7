use bigdecimal::BigDecimal;
use std::time::Duration;
use thiserror::Error;

/// 一次加载过程的失败 (全有或全无, 不返回部分数据)
#[derive(Debug, Error)]
pub enum LoadError {
    /// 数据库不可达、认证失败、连接串无效、网络故障
    #[error("database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    /// 查询语句或表结构不匹配、解码失败
    #[error("partner query failed: {0}")]
    Query(#[source] sqlx::Error),

    /// 聚合销售额为负 (上游数据质量问题)
    #[error("partner {partner_id} has negative total sales {total_sales}")]
    NegativeSales {
        partner_id: i32,
        total_sales: BigDecimal,
    },

    /// 调用方设置的超时
    #[error("partner load timed out after {0:?}")]
    TimedOut(Duration),
}

impl LoadError {
    /// 查询阶段的 sqlx 错误分类: 网络层故障仍算连接错误
    pub fn from_query(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => LoadError::Connection(err),
            other => LoadError::Query(other),
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, LoadError::Connection(_))
    }

    /// 面向用户的提示信息
    pub fn user_message(&self) -> String {
        match self {
            LoadError::Connection(e) => format!("Database connection error: {}", e),
            LoadError::Query(e) => format!("Database query error: {}", e),
            other => format!("Unexpected error: {}", other),
        }
    }
}

/// 启动配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Source(#[from] config::ConfigError),

    #[error("invalid layout: {0}")]
    InvalidLayout(&'static str),
}
