// ==========================================
// 结账配送决策引擎 - 邮编区域清单导入
// ==========================================
// 依据: Delivery_Rules_Spec.md - 配置项全集 (区域前缀)
// ==========================================
// 职责: 从 CSV 清单导入邮编前缀 (商户以表格维护区域清单)
// 规则: 前缀一律规范化 (大写、去空白),去重保序;
//       空行/坏行跳过计数,不中断导入
// ==========================================

use crate::engine::zone::ZoneClassifier;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

// ==========================================
// 导入层错误类型
// ==========================================
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("清单文件读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV 解析失败: {0}")]
    Csv(#[from] csv::Error),
}

// CSV 行格式: Postcode 列
#[derive(Debug, Deserialize)]
struct ZoneListRecord {
    #[serde(rename = "Postcode")]
    postcode: String,
}

// ==========================================
// 导入结果 (Zone Import Result)
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneImportResult {
    /// 规范化、去重后的前缀 (保持文件内顺序)
    pub prefixes: Vec<String>,
    /// 跳过的行数 (空值、重复、坏行)
    pub skipped: usize,
}

// ==========================================
// ZoneListImporter - 区域清单导入器
// ==========================================
pub struct ZoneListImporter;

impl ZoneListImporter {
    /// 从 CSV 文件导入前缀清单
    pub fn import_csv_path(path: &Path) -> Result<ZoneImportResult, ImportError> {
        let file = File::open(path)?;
        Self::import_csv_reader(file)
    }

    /// 从任意 reader 导入前缀清单
    pub fn import_csv_reader<R: Read>(reader: R) -> Result<ZoneImportResult, ImportError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut seen: HashSet<String> = HashSet::new();
        let mut result = ZoneImportResult::default();

        for record in csv_reader.deserialize::<ZoneListRecord>() {
            match record {
                Ok(row) => {
                    let prefix = ZoneClassifier::normalize(&row.postcode);
                    if prefix.is_empty() || !seen.insert(prefix.clone()) {
                        result.skipped += 1;
                    } else {
                        result.prefixes.push(prefix);
                    }
                }
                Err(e) => {
                    // 单行解析失败不中断整体导入
                    warn!("清单行解析失败,已跳过: {}", e);
                    result.skipped += 1;
                }
            }
        }

        Ok(result)
    }
}
