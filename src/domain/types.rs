// ==========================================
// 结账配送决策引擎 - 领域类型定义
// ==========================================
// 依据: Delivery_Rules_Spec.md - 区域分类与配送承运方
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 配送区域 (Delivery Zone)
// ==========================================
// 红线: 远区判定优先于本地判定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Zone {
    Local,    // 本地配送圈
    Remote,   // 远区(红区)
    Standard, // 两者皆非
}

impl Zone {
    pub fn is_local(&self) -> bool {
        matches!(self, Zone::Local)
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Zone::Remote)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Local => write!(f, "LOCAL"),
            Zone::Remote => write!(f, "REMOTE"),
            Zone::Standard => write!(f, "STANDARD"),
        }
    }
}

// ==========================================
// 配送承运方提示 (Delivery Provider)
// ==========================================
// 购物车属性 deliveryProvider 的已知取值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryProvider {
    #[serde(rename = "Arrow-XL")]
    ArrowXl,
    Internal,
    Collection,
}

impl DeliveryProvider {
    /// 从购物车属性值解析承运方
    ///
    /// 未知取值或缺失 → None (属性缺失是合法输入,不是错误)
    pub fn from_attribute(value: Option<&str>) -> Option<DeliveryProvider> {
        match value {
            Some("Arrow-XL") => Some(DeliveryProvider::ArrowXl),
            Some("Internal") => Some(DeliveryProvider::Internal),
            Some("Collection") => Some(DeliveryProvider::Collection),
            _ => None,
        }
    }
}

impl fmt::Display for DeliveryProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryProvider::ArrowXl => write!(f, "Arrow-XL"),
            DeliveryProvider::Internal => write!(f, "Internal"),
            DeliveryProvider::Collection => write!(f, "Collection"),
        }
    }
}
