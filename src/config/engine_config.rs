// ==========================================
// 结账配送决策引擎 - 引擎配置
// ==========================================
// 依据: Delivery_Rules_Spec.md - 配置项全集
// ==========================================
// 职责: 区域前缀、品类清单、阈值、选项标题等
//       可注入配置;支持 JSON 文件加载/保存
// 红线: 规则逻辑不得内嵌硬编码清单,一律走配置
// ==========================================

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

// ==========================================
// 配置层错误类型
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读写失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置文件解析失败: {0}")]
    Parse(#[from] serde_json::Error),
}

// ==========================================
// 邮编区域配置 (Postcode Zone Config)
// ==========================================
// 不变式: 前缀必须已规范化 (大写、去空白);
//         匹配语义为规范化邮编的 starts-with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostcodeZoneConfig {
    pub local_prefixes: Vec<String>,
    pub remote_prefixes: Vec<String>,
}

// ==========================================
// 规则表选项标题 (Option Titles)
// ==========================================
// 规则表按标题精确匹配宿主配置的配送选项;
// 标题漂移会导致全部隐藏 (fail-closed),由引擎告警
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionTitles {
    /// 紧凑承运方 (小件低值)
    pub compact_carrier: String,
    /// 远区配送
    pub remote_delivery: String,
    /// 门店自提
    pub collection: String,
    /// 单人配送
    pub one_person: String,
    /// 本地双人配送
    pub local_two_person: String,
    /// 双人快递服务 (非本地)
    pub courier_two_person: String,
    /// 缺货待联系
    pub contact_to_arrange: String,
}

impl Default for OptionTitles {
    fn default() -> Self {
        Self {
            compact_carrier: "DPD tracked 24-48hr delivery".to_string(),
            remote_delivery: "Remote delivery".to_string(),
            collection: "Collect from Trafford Park".to_string(),
            one_person: "Appliance World 1 man delivery".to_string(),
            local_two_person: "Appliance World 2 man delivery".to_string(),
            courier_two_person: "AIT 2 man courier service".to_string(),
            contact_to_arrange: "Available to order: We will contact you to arrange delivery"
                .to_string(),
        }
    }
}

// ==========================================
// 邮编提示信息配置 (Delivery Message Config)
// ==========================================
// 商户维护的 (邮编前缀, 提示信息) 对,命中时追加到选项标题
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeliveryMessageConfig {
    pub postcode_prefix: String,
    pub message: String,
}

// ==========================================
// EngineConfig - 引擎配置全集
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// 本地/远区邮编前缀
    pub zones: PostcodeZoneConfig,
    /// 大家电品类名 (匹配不区分大小写)
    pub large_appliance_categories: Vec<String>,
    /// 低值订单阈值 (最小货币单位)
    pub low_value_threshold_minor: u64,
    /// 规则表选项标题
    pub option_titles: OptionTitles,
    /// 每周休息日 (如 "Sunday",默认日期顺延至次日)
    pub rest_day: String,
    /// 日历视野长度 (月)
    pub horizon_months: u32,
    /// 邮编提示信息规则 (可选)
    pub delivery_message: Option<DeliveryMessageConfig>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            zones: PostcodeZoneConfig {
                // 曼彻斯特本地配送圈
                local_prefixes: vec![
                    "M".to_string(),
                    "SK".to_string(),
                    "WA".to_string(),
                    "OL".to_string(),
                    "BL".to_string(),
                    "WN".to_string(),
                    "CW".to_string(),
                ],
                // 远区 (苏格兰高地、岛屿、北爱尔兰)
                remote_prefixes: vec![
                    "AB".to_string(),
                    "IV".to_string(),
                    "KW".to_string(),
                    "HS".to_string(),
                    "ZE".to_string(),
                    "PA20".to_string(),
                    "PH17".to_string(),
                    "BT".to_string(),
                    "IM".to_string(),
                ],
            },
            large_appliance_categories: vec![
                "range cooker".to_string(),
                "american fridge freezer".to_string(),
            ],
            low_value_threshold_minor: 15000, // £150
            option_titles: OptionTitles::default(),
            rest_day: "Sunday".to_string(),
            horizon_months: 3,
            delivery_message: None,
        }
    }
}

impl EngineConfig {
    /// 解析休息日配置
    ///
    /// 不可解析时回落到周日 (配置错误不阻断评估)
    pub fn rest_day(&self) -> Weekday {
        self.rest_day.parse().unwrap_or(Weekday::Sun)
    }

    /// 从 JSON 文件加载配置
    pub fn load_from_path(path: &Path) -> Result<EngineConfig, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// 保存配置到 JSON 文件
    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    /// 默认配置文件路径 (平台配置目录下)
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("delivery-decision-engine").join("config.json"))
    }

    /// 加载配置,文件缺失时使用内置默认值
    pub fn load_or_default(path: Option<&Path>) -> EngineConfig {
        let resolved = path
            .map(Path::to_path_buf)
            .or_else(EngineConfig::default_config_path);

        match resolved {
            Some(p) if p.exists() => match EngineConfig::load_from_path(&p) {
                Ok(config) => {
                    info!("已加载配置文件: {}", p.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("配置文件加载失败,使用默认配置: {}", e);
                    EngineConfig::default()
                }
            },
            _ => {
                info!("未找到配置文件,使用默认配置");
                EngineConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.low_value_threshold_minor, 15000);
        assert_eq!(config.rest_day(), Weekday::Sun);
        assert_eq!(config.horizon_months, 3);
        assert!(config.zones.local_prefixes.contains(&"CW".to_string()));
        assert!(config.delivery_message.is_none());
    }

    #[test]
    fn test_rest_day_parse_fallback() {
        let mut config = EngineConfig::default();
        config.rest_day = "Monday".to_string();
        assert_eq!(config.rest_day(), Weekday::Mon);

        config.rest_day = "not-a-day".to_string();
        assert_eq!(config.rest_day(), Weekday::Sun); // 回落默认
    }

    #[test]
    fn test_partial_config_file_uses_defaults() {
        // 部分字段缺省的配置文件按默认值补齐
        let config: EngineConfig =
            serde_json::from_str(r#"{"lowValueThresholdMinor": 20000}"#).unwrap();
        assert_eq!(config.low_value_threshold_minor, 20000);
        assert_eq!(
            config.option_titles.remote_delivery,
            "Remote delivery".to_string()
        );
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = EngineConfig::default();
        config.delivery_message = Some(DeliveryMessageConfig {
            postcode_prefix: "CH".to_string(),
            message: "Ships in 5-10 days. We will contact you to confirm.".to_string(),
        });
        config.save_to_path(&path).unwrap();

        let loaded = EngineConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let config = EngineConfig::load_or_default(Some(&path));
        assert_eq!(config, EngineConfig::default());
    }
}
