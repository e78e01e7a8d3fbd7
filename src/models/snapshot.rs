use crate::models::PartnerSummary;
use crate::service::DiscountTier;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// 单张卡片的纵向位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardPlacement {
    pub partner_id: i32,
    pub top: i64,
    pub height: u32,
}

/// 一次加载的不可变结果: summaries / tiers / placements 按下标一一对应
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub summaries: Vec<PartnerSummary>,
    pub tiers: Vec<DiscountTier>,
    pub placements: Vec<CardPlacement>,
    /// 滚动区域需要的总高度
    pub content_extent: i64,
    pub loaded_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// 按显示顺序遍历 (汇总, 折扣, 位置)
    pub fn cards(&self) -> impl Iterator<Item = (&PartnerSummary, DiscountTier, &CardPlacement)> {
        self.summaries
            .iter()
            .zip(self.tiers.iter().copied())
            .zip(self.placements.iter())
            .map(|((summary, tier), placement)| (summary, tier, placement))
    }
}
