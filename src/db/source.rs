use crate::db::{connection, queries};
use crate::error::LoadError;
use crate::models::PartnerSummary;
use async_trait::async_trait;
use sqlx::Connection;

/// 合作伙伴数据来源
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PartnerSource: Send + Sync {
    /// 拉取按名称排序的全部合作伙伴汇总
    async fn fetch_partner_summaries(&self) -> Result<Vec<PartnerSummary>, LoadError>;
}

/// PostgreSQL 实现: 每次调用打开并释放自己的连接
pub struct PgPartnerSource {
    database_url: String,
}

impl PgPartnerSource {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }
}

impl std::fmt::Debug for PgPartnerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgPartnerSource").finish_non_exhaustive()
    }
}

#[async_trait]
impl PartnerSource for PgPartnerSource {
    async fn fetch_partner_summaries(&self) -> Result<Vec<PartnerSummary>, LoadError> {
        let mut conn = connection::open_connection(&self.database_url)
            .await
            .map_err(LoadError::Connection)?;

        let result = queries::list_partner_summaries(&mut conn).await;

        // 查询失败时连接同样在这里关闭; future 被取消时由 Drop 释放
        if let Err(e) = conn.close().await {
            tracing::warn!("关闭数据库连接失败: {}", e);
        }

        result
    }
}
