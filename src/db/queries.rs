use crate::error::LoadError;
use crate::models::{PartnerRow, PartnerSummary};
use futures::TryStreamExt;
use sqlx::PgConnection;

/// 合作伙伴 + 类型 + 累计销售额 (无出库记录的合作伙伴销售额为 0), 按名称升序
pub const PARTNER_SUMMARIES_SQL: &str = r#"
    SELECT p.id_partner,
           pt.partner_type,
           p.partner_name,
           p.director,
           p.phone,
           p.rating::text AS rating,
           COALESCE(SUM(w.quantity * pr.min_cost_for_partner), 0)::numeric AS total_sales
    FROM partner p
    INNER JOIN partner_type pt ON pt.id_partner_type = p.type_id
    LEFT JOIN warehouse w ON w.partner_id = p.id_partner
    LEFT JOIN product pr ON pr.id_product = w.product_id
    GROUP BY p.id_partner, pt.partner_type, p.partner_name, p.director, p.phone, p.rating
    ORDER BY p.partner_name
"#;

/// 查询全部合作伙伴汇总
///
/// 逐行转换, 任何一行失败整次查询失败, 不返回部分结果。
pub async fn list_partner_summaries(
    conn: &mut PgConnection,
) -> Result<Vec<PartnerSummary>, LoadError> {
    let mut rows = sqlx::query_as::<_, PartnerRow>(PARTNER_SUMMARIES_SQL).fetch(&mut *conn);

    let mut summaries = Vec::new();
    while let Some(row) = rows.try_next().await.map_err(LoadError::from_query)? {
        summaries.push(PartnerSummary::try_from(row)?);
    }

    tracing::debug!("查询到 {} 个合作伙伴", summaries.len());
    Ok(summaries)
}
