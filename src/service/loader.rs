use crate::db::PartnerSource;
use crate::error::LoadError;
use crate::models::{PartnerSummary, Snapshot};
use crate::service::{discount_tier, CardLayout};
use chrono::Utc;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// 看板加载服务: 查询 -> 折扣 -> 布局, 每次生成独立的快照
pub struct DashboardService {
    source: Arc<dyn PartnerSource>,
    layout: CardLayout,
    load_timeout: Option<Duration>,
}

impl DashboardService {
    pub fn new(source: Arc<dyn PartnerSource>, layout: CardLayout) -> Self {
        Self {
            source,
            layout,
            load_timeout: None,
        }
    }

    pub fn with_load_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.load_timeout = timeout;
        self
    }

    /// 执行一次完整加载
    ///
    /// 失败时不产生任何快照, 调用方保留加载前的状态。
    pub async fn load(&self) -> Result<Snapshot, LoadError> {
        let start_time = Instant::now();

        let fetch = self.source.fetch_partner_summaries();
        let fetched = match self.load_timeout {
            Some(limit) => tokio::time::timeout(limit, fetch)
                .await
                .unwrap_or(Err(LoadError::TimedOut(limit))),
            None => fetch.await,
        };

        let summaries = match fetched {
            Ok(summaries) => summaries,
            Err(e) => {
                tracing::error!("✗ 合作伙伴加载失败, 耗时: {:?}, 错误: {}", start_time.elapsed(), e);
                return Err(e);
            }
        };

        let snapshot = self.build_snapshot(summaries);
        tracing::info!(
            "✓ 加载 {} 个合作伙伴, 内容高度 {}, 耗时: {:?}",
            snapshot.len(),
            snapshot.content_extent,
            start_time.elapsed()
        );
        Ok(snapshot)
    }

    fn build_snapshot(&self, summaries: Vec<PartnerSummary>) -> Snapshot {
        let tiers = summaries
            .iter()
            .map(|s| discount_tier(&s.total_sales))
            .collect();
        let placements = self.layout.stack(&summaries);
        let content_extent = self.layout.content_extent(summaries.len());

        Snapshot {
            summaries,
            tiers,
            placements,
            content_extent,
            loaded_at: Utc::now(),
        }
    }
}
