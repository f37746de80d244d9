// ==========================================
// 结账配送决策引擎 - 购物车快照实体
// ==========================================
// 依据: Delivery_Rules_Spec.md - 主实体定义
// ==========================================
// 职责: 定义一次结账评估的输入快照
// 红线: 快照在单次评估期间不可变,不含派生逻辑
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// 购物车属性键 (cart-level attributes)
// ==========================================
pub mod attribute_keys {
    /// 是否需要上楼梯搬运 ("yes"/其他)
    pub const REQUIRES_STEPS: &str = "requiresSteps";
    /// 显式选择的配送方式 ("collection" 有效)
    pub const SHIPPING_METHOD: &str = "shippingMethod";
    /// 是否包含安装服务 ("true"/其他)
    pub const HAS_SERVICE: &str = "hasService";
    /// 承运方提示 ("Arrow-XL"/"Internal"/"Collection")
    pub const DELIVERY_PROVIDER: &str = "deliveryProvider";
    /// 顾客已选配送日期 (YYYY-MM-DD)
    pub const DELIVERY_SCHEDULE: &str = "deliverySchedule";
}

/// 行级属性取值: 缺货状态
pub const OUT_OF_STOCK: &str = "out_of_stock";

// ==========================================
// 商品信息 (Product)
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductInfo {
    /// 商品品类 (自由文本,如 "Range Cooker")
    pub category: Option<String>,
    /// 小件商品标签 (紧凑承运方资格)
    pub small_item: bool,
    /// 安装服务标签
    pub installation: bool,
    /// 旧机回收标签
    pub appliance_removal: bool,
}

// ==========================================
// 货品变体 (Merchandise)
// ==========================================
// 只有 Product 变体携带服务标签与品类;
// 其他行 (如服务费行) 不参与商品相关事实推导
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Merchandise {
    Product(ProductInfo),
    Other,
}

impl Merchandise {
    pub fn as_product(&self) -> Option<&ProductInfo> {
        match self {
            Merchandise::Product(info) => Some(info),
            Merchandise::Other => None,
        }
    }
}

// ==========================================
// 购物车行 (Cart Line)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// 数量
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// 行金额 (主单位十进制字符串,如 "149.99";不可解析按 0 处理)
    #[serde(default)]
    pub total_amount: String,
    /// 行级自由文本属性 (如库存状态)
    #[serde(default)]
    pub attribute: Option<String>,
    /// 货品变体
    pub merchandise: Merchandise,
}

fn default_quantity() -> u32 {
    1
}

impl CartLine {
    pub fn product(&self) -> Option<&ProductInfo> {
        self.merchandise.as_product()
    }
}

// ==========================================
// 配送地址 (Delivery Address)
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeliveryAddress {
    /// 邮编 (缺失是合法输入)
    pub postcode: Option<String>,
}

// ==========================================
// 购物车快照 (Cart Snapshot)
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub delivery_address: DeliveryAddress,
    /// 购物车级命名属性 (键 → 字符串值)
    pub attributes: HashMap<String, String>,
}

impl CartSnapshot {
    /// 读取购物车级属性值
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn postcode(&self) -> Option<&str> {
        self.delivery_address.postcode.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merchandise_as_product() {
        let product = Merchandise::Product(ProductInfo {
            category: Some("Range Cooker".to_string()),
            ..Default::default()
        });
        assert!(product.as_product().is_some());
        assert!(Merchandise::Other.as_product().is_none());
    }

    #[test]
    fn test_cart_line_deserialize_defaults() {
        // 缺省字段按默认值补齐
        let line: CartLine = serde_json::from_str(
            r#"{"merchandise": {"type": "other"}}"#,
        )
        .unwrap();
        assert_eq!(line.quantity, 1);
        assert_eq!(line.total_amount, "");
        assert!(line.attribute.is_none());
    }

    #[test]
    fn test_cart_snapshot_attribute_lookup() {
        let mut attributes = HashMap::new();
        attributes.insert(attribute_keys::REQUIRES_STEPS.to_string(), "yes".to_string());
        let cart = CartSnapshot {
            attributes,
            ..Default::default()
        };
        assert_eq!(cart.attribute(attribute_keys::REQUIRES_STEPS), Some("yes"));
        assert_eq!(cart.attribute(attribute_keys::HAS_SERVICE), None);
    }
}
