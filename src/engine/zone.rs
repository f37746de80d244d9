// ==========================================
// 结账配送决策引擎 - 区域分类器
// ==========================================
// 依据: Delivery_Rules_Spec.md - 1. Zone Classifier
// 红线: 无状态、无副作用、无 I/O 操作
// ==========================================
// 职责: 邮编规范化 + 本地/远区前缀匹配
// 输入: 邮编字符串 (可缺失) + 区域前缀配置
// 输出: 区域分类 (远区判定优先)
// ==========================================

use crate::config::PostcodeZoneConfig;
use crate::domain::types::Zone;

// ==========================================
// ZoneClassifier - 纯函数工具类
// ==========================================
pub struct ZoneClassifier;

impl ZoneClassifier {
    /// 规范化邮编: 大写 + 去除所有空白
    pub fn normalize(postcode: &str) -> String {
        postcode
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase()
    }

    /// 规范化邮编是否命中任一前缀
    ///
    /// 空邮编恒为 false (缺失输入是合法的 "否",不是错误)
    fn matches_any(normalized: &str, prefixes: &[String]) -> bool {
        if normalized.is_empty() {
            return false;
        }
        prefixes
            .iter()
            .filter(|p| !p.is_empty())
            .any(|p| normalized.starts_with(p.as_str()))
    }

    /// 是否本地配送圈
    pub fn is_local(postcode: Option<&str>, zones: &PostcodeZoneConfig) -> bool {
        match postcode {
            Some(pc) => Self::matches_any(&Self::normalize(pc), &zones.local_prefixes),
            None => false,
        }
    }

    /// 是否远区 (红区)
    pub fn is_remote(postcode: Option<&str>, zones: &PostcodeZoneConfig) -> bool {
        match postcode {
            Some(pc) => Self::matches_any(&Self::normalize(pc), &zones.remote_prefixes),
            None => false,
        }
    }

    /// 区域分类
    ///
    /// # 规则
    /// 1. 命中远区前缀 → REMOTE (优先于本地)
    /// 2. 命中本地前缀 → LOCAL
    /// 3. 其他 (含邮编缺失) → STANDARD
    pub fn classify(postcode: Option<&str>, zones: &PostcodeZoneConfig) -> Zone {
        if Self::is_remote(postcode, zones) {
            Zone::Remote
        } else if Self::is_local(postcode, zones) {
            Zone::Local
        } else {
            Zone::Standard
        }
    }
}
