// ==========================================
// 结账配送决策引擎 - 核心库
// ==========================================
// 依据: Delivery_Rules_Spec.md - 系统宪法
// 系统定位: 决策支持引擎 (宿主平台最终应用操作)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 引擎配置
pub mod config;

// 导入层 - 外部清单数据
pub mod importer;

// 数据源层 - 配送日期数据源客户端
pub mod feed;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{DeliveryProvider, Zone};

// 领域实体
pub use domain::{
    CartLine, CartSnapshot, DeliveryAddress, DeliveryCalendar, DeliveryOption, DisabledRange,
    EvaluationReport, Merchandise, Operation, ProductInfo, ScheduleCapture,
};

// 引擎
pub use engine::{
    CartFacts, DateAvailabilityResolver, Decision, EligibilityEngine, MessageTagger,
    RuleOutcome, ZoneClassifier,
};

// 配置
pub use config::{DeliveryMessageConfig, EngineConfig, OptionTitles, PostcodeZoneConfig};

// 数据源
pub use feed::{DateFeedResponse, DeliveryDateFeed, FeedError, HttpDateFeed, LatestFeedClient};

// API
pub use api::{ApiError, ApiResult, CheckoutApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "结账配送决策引擎";

// ==========================================
// 预编译检查
// ==========================================
