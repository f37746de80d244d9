// ==========================================
// 结账配送决策引擎 - API 层错误类型
// ==========================================
// 依据: Rust 错误处理最佳实践
// 工具: thiserror 派生宏
// ==========================================
// 说明: 核心引擎函数对输入域全定义,不产生错误;
//       错误只出现在边界 (配置文件、数据源、清单导入)
// ==========================================

use crate::config::ConfigError;
use crate::feed::FeedError;
use crate::importer::ImportError;
use thiserror::Error;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("配送日期数据源错误: {0}")]
    Feed(#[from] FeedError),

    #[error("清单导入错误: {0}")]
    Import(#[from] ImportError),

    #[error("无效输入: {0}")]
    InvalidInput(String),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
