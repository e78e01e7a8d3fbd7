use bigdecimal::BigDecimal;
use serde::{Serialize, Serializer};
use std::fmt;

/// 折扣档位 (百分比)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiscountTier {
    None,
    Five,
    Ten,
    Fifteen,
}

impl DiscountTier {
    pub fn percent(self) -> u8 {
        match self {
            DiscountTier::None => 0,
            DiscountTier::Five => 5,
            DiscountTier::Ten => 10,
            DiscountTier::Fifteen => 15,
        }
    }
}

impl fmt::Display for DiscountTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

impl Serialize for DiscountTier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.percent())
    }
}

/// 按累计销售额计算折扣档位
///
/// 从高到低比较, 严格大于: 300000 / 50000 / 10000 恰好相等时落入低一档。
/// 负数不在约定范围内, 由查询层保证不会出现。
pub fn discount_tier(total_sales: &BigDecimal) -> DiscountTier {
    if *total_sales > BigDecimal::from(300_000) {
        DiscountTier::Fifteen
    } else if *total_sales > BigDecimal::from(50_000) {
        DiscountTier::Ten
    } else if *total_sales > BigDecimal::from(10_000) {
        DiscountTier::Five
    } else {
        DiscountTier::None
    }
}
