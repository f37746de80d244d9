// ==========================================
// 结账配送决策引擎 - 领域模型层
// ==========================================
// 依据: Delivery_Rules_Spec.md - 主实体定义
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含规则逻辑,不含 I/O
// ==========================================

pub mod calendar;
pub mod cart;
pub mod delivery;
pub mod types;

// 重导出核心类型
pub use calendar::{DeliveryCalendar, DisabledRange};
pub use cart::{
    attribute_keys, CartLine, CartSnapshot, DeliveryAddress, Merchandise, ProductInfo,
    OUT_OF_STOCK,
};
pub use delivery::{
    DeliveryOption, EvaluationReport, HideOperation, Operation, RenameOperation,
    ScheduleCapture, METAFIELD_KEY, METAFIELD_NAMESPACE,
};
pub use types::{DeliveryProvider, Zone};
