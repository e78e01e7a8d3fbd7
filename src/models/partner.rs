use crate::error::LoadError;
use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 查询原始行 (partner + partner_type + 聚合销售额)
#[derive(Debug, Clone, FromRow)]
pub struct PartnerRow {
    pub id_partner: i32,
    pub partner_type: String,
    pub partner_name: String,
    pub director: Option<String>,
    pub phone: Option<String>,
    pub rating: Option<String>,
    pub total_sales: Option<BigDecimal>,
}

/// 合作伙伴汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerSummary {
    pub id: i32,
    pub partner_type: String,
    pub name: String,
    pub director: String,
    pub phone: String,
    pub rating: String,
    pub total_sales: BigDecimal,
}

impl TryFrom<PartnerRow> for PartnerSummary {
    type Error = LoadError;

    /// 空聚合按 0 处理; 负数违反数据约束, 整次加载失败
    fn try_from(row: PartnerRow) -> Result<Self, Self::Error> {
        let total_sales = row.total_sales.unwrap_or_else(BigDecimal::zero);
        if total_sales < BigDecimal::zero() {
            return Err(LoadError::NegativeSales {
                partner_id: row.id_partner,
                total_sales,
            });
        }

        Ok(Self {
            id: row.id_partner,
            partner_type: row.partner_type,
            name: row.partner_name,
            director: row.director.unwrap_or_default(),
            phone: row.phone.unwrap_or_default(),
            rating: row.rating.unwrap_or_default(),
            total_sales,
        })
    }
}
