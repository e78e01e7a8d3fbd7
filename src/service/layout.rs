use crate::models::{CardPlacement, PartnerSummary};

/// 卡片纵向堆叠参数 (card_height 必须为正, 由配置校验)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    pub card_height: u32,
    pub gap: u32,
    pub start_top: i64,
}

impl CardLayout {
    fn step(&self) -> i64 {
        i64::from(self.card_height) + i64::from(self.gap)
    }

    /// 按输入顺序依次堆叠卡片
    ///
    /// 输入必须已经是最终显示顺序 (查询按名称排序), 这里不做任何排序,
    /// 也不看卡片内容: 第 i 张的位置只取决于 i。
    pub fn stack(&self, summaries: &[PartnerSummary]) -> Vec<CardPlacement> {
        let mut placements = Vec::with_capacity(summaries.len());
        let mut top = self.start_top;

        for summary in summaries {
            placements.push(CardPlacement {
                partner_id: summary.id,
                top,
                height: self.card_height,
            });
            top += self.step();
        }

        placements
    }

    /// 滚动区域总高度: start_top + n*card_height + (n-1)*gap, n = 0 时为 start_top
    pub fn content_extent(&self, count: usize) -> i64 {
        match count {
            0 => self.start_top,
            n => self.start_top + n as i64 * self.step() - i64::from(self.gap),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    const LAYOUT: CardLayout = CardLayout {
        card_height: 120,
        gap: 15,
        start_top: 20,
    };

    fn partners(count: i32) -> Vec<PartnerSummary> {
        (1..=count)
            .map(|id| PartnerSummary {
                id,
                partner_type: "ЗАО".to_string(),
                name: format!("partner {}", id),
                director: String::new(),
                phone: String::new(),
                rating: String::new(),
                total_sales: BigDecimal::from(id * 1000),
            })
            .collect()
    }

    #[test]
    fn empty_input_stacks_nothing() {
        assert!(LAYOUT.stack(&[]).is_empty());
        assert_eq!(LAYOUT.content_extent(0), 20);
    }

    #[test]
    fn cards_are_spaced_by_height_plus_gap() {
        let placements = LAYOUT.stack(&partners(3));
        let tops: Vec<i64> = placements.iter().map(|p| p.top).collect();
        assert_eq!(tops, vec![20, 155, 290]);
        assert_eq!(
            placements.iter().map(|p| p.partner_id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert!(placements.iter().all(|p| p.height == 120));
    }

    #[test]
    fn placements_never_overlap() {
        for layout in [
            LAYOUT,
            CardLayout { card_height: 1, gap: 0, start_top: -40 },
            CardLayout { card_height: 300, gap: 7, start_top: 0 },
        ] {
            for n in 0..12 {
                let placements = layout.stack(&partners(n));
                assert_eq!(placements.len(), n as usize);
                if let Some(first) = placements.first() {
                    assert_eq!(first.top, layout.start_top);
                }
                for pair in placements.windows(2) {
                    assert_eq!(
                        pair[1].top - pair[0].top,
                        i64::from(layout.card_height + layout.gap)
                    );
                    assert!(pair[0].top + i64::from(pair[0].height) <= pair[1].top);
                }
                if let Some(last) = placements.last() {
                    assert_eq!(
                        layout.content_extent(placements.len()),
                        last.top + i64::from(last.height)
                    );
                }
            }
        }
    }

    #[test]
    fn extent_formula() {
        // 20 + 3*120 + 2*15
        assert_eq!(LAYOUT.content_extent(3), 410);
        assert_eq!(LAYOUT.content_extent(1), 140);
    }
}
