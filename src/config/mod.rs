// ==========================================
// 结账配送决策引擎 - 配置层
// ==========================================
// 依据: Delivery_Rules_Spec.md - 配置项全集
// ==========================================
// 职责: 引擎配置管理
// 说明: 商户配置界面与持久化属外部协作方,
//       本层只负责读取与默认值
// ==========================================

pub mod engine_config;

// 重导出核心配置类型
pub use engine_config::{
    ConfigError, DeliveryMessageConfig, EngineConfig, OptionTitles, PostcodeZoneConfig,
};
