// ==========================================
// 结账配送决策引擎 - 引擎层
// ==========================================
// 依据: Delivery_Rules_Spec.md - 组件设计
// ==========================================
// 职责: 实现业务规则引擎
// 红线: 引擎无状态、无 I/O;所有规则必须输出 reason
// ==========================================

pub mod calendar;
pub mod cart_facts;
pub mod eligibility;
pub mod rename;
pub mod zone;

// 重导出核心引擎
pub use calendar::DateAvailabilityResolver;
pub use cart_facts::CartFacts;
pub use eligibility::{
    decision_table, Decision, EligibilityEngine, EligibilityRule, RuleContext, RuleOutcome,
};
pub use rename::MessageTagger;
pub use zone::ZoneClassifier;
