// ==========================================
// 结账配送决策引擎 - 购物车事实提取
// ==========================================
// 依据: Delivery_Rules_Spec.md - 2. Cart Fact Extractor
// 红线: 无状态、无副作用;所有函数对输入域全定义,
//       缺失字段按 false/0 处理,绝不抛错
// ==========================================
// 职责: 从购物车快照派生规则表消费的布尔/数值事实
// 输入: CartSnapshot + EngineConfig
// 输出: CartFacts
// ==========================================

use crate::config::EngineConfig;
use crate::domain::cart::{attribute_keys, CartSnapshot, OUT_OF_STOCK};
use crate::domain::types::DeliveryProvider;

// ==========================================
// CartFacts - 单次评估的购物车事实
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartFacts {
    /// 购物车小计 (最小货币单位)
    pub subtotal_minor_units: u64,
    /// 是否含大家电品类
    pub has_large_appliance: bool,
    /// 是否需要上楼梯搬运
    pub requires_steps: bool,
    /// 是否含安装服务 (行级标签或车级属性)
    pub has_installation_service: bool,
    /// 是否符合紧凑承运方资格
    pub compact_carrier_eligible: bool,
    /// 是否含缺货行
    pub has_out_of_stock_line: bool,
    /// 是否显式选择了自提
    pub collection_selected: bool,
    /// 是否所有行都不带行级属性
    pub no_line_attributes: bool,
    /// 承运方提示
    pub delivery_provider: Option<DeliveryProvider>,
}

impl CartFacts {
    /// 提取购物车事实
    pub fn extract(cart: &CartSnapshot, config: &EngineConfig) -> CartFacts {
        let product_lines: Vec<_> = cart.lines.iter().filter_map(|l| l.product()).collect();

        let subtotal_minor_units = cart
            .lines
            .iter()
            .map(|l| parse_amount_minor(&l.total_amount))
            .sum();

        let has_large_appliance = product_lines.iter().any(|p| {
            p.category.as_deref().map_or(false, |category| {
                let category = category.to_lowercase();
                config
                    .large_appliance_categories
                    .iter()
                    .any(|known| known.to_lowercase() == category)
            })
        });

        let requires_steps = cart.attribute(attribute_keys::REQUIRES_STEPS) == Some("yes");

        let has_installation_service = product_lines.iter().any(|p| p.installation)
            || cart.attribute(attribute_keys::HAS_SERVICE) == Some("true");

        // 紧凑承运方资格: 无旧机回收,且至少一条商品行,
        // 且所有商品行均为小件且不含安装
        // (零商品行的购物车永不合格)
        let compact_carrier_eligible = !product_lines.iter().any(|p| p.appliance_removal)
            && !product_lines.is_empty()
            && product_lines.iter().all(|p| p.small_item && !p.installation);

        let has_out_of_stock_line = cart
            .lines
            .iter()
            .any(|l| l.attribute.as_deref() == Some(OUT_OF_STOCK));

        let delivery_provider =
            DeliveryProvider::from_attribute(cart.attribute(attribute_keys::DELIVERY_PROVIDER));

        let collection_selected = cart.attribute(attribute_keys::SHIPPING_METHOD)
            == Some("collection")
            || delivery_provider == Some(DeliveryProvider::Collection);

        let no_line_attributes = cart.lines.iter().all(|l| l.attribute.is_none());

        CartFacts {
            subtotal_minor_units,
            has_large_appliance,
            requires_steps,
            has_installation_service,
            compact_carrier_eligible,
            has_out_of_stock_line,
            collection_selected,
            no_line_attributes,
            delivery_provider,
        }
    }
}

/// 解析行金额为最小货币单位
///
/// 金额为主单位十进制字符串 (如 "149.99" → 14999);
/// 不可解析、负值、非有限值一律按 0 处理
fn parse_amount_minor(raw: &str) -> u64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => (v * 100.0).round() as u64,
        _ => 0,
    }
}
