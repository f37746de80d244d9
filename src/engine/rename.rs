// ==========================================
// 结账配送决策引擎 - 邮编提示信息规则
// ==========================================
// 依据: Delivery_Rules_Spec.md - 邮编提示信息 (商户配置)
// ==========================================
// 职责: 地址命中配置前缀时,为全部配送选项追加提示信息
// 说明: 简单 filter-map,与资格决策表相互独立
// ==========================================

use crate::config::DeliveryMessageConfig;
use crate::domain::delivery::{DeliveryOption, Operation};
use crate::engine::zone::ZoneClassifier;

// ==========================================
// MessageTagger - 纯函数工具类
// ==========================================
pub struct MessageTagger;

impl MessageTagger {
    /// 为命中前缀的地址生成改名操作
    ///
    /// # 规则
    /// - 规范化邮编以配置前缀开头 → 每个选项一个改名操作,
    ///   新标题为 "{原标题} - {信息}" (原标题为空时只用信息)
    /// - 邮编缺失、前缀为空、未命中 → 空操作列表
    pub fn message_operations(
        postcode: Option<&str>,
        options: &[DeliveryOption],
        config: &DeliveryMessageConfig,
    ) -> Vec<Operation> {
        let prefix = ZoneClassifier::normalize(&config.postcode_prefix);
        if prefix.is_empty() {
            return Vec::new();
        }

        let normalized = match postcode {
            Some(pc) => ZoneClassifier::normalize(pc),
            None => return Vec::new(),
        };
        if normalized.is_empty() || !normalized.starts_with(prefix.as_str()) {
            return Vec::new();
        }

        options
            .iter()
            .map(|option| {
                let title = if option.title.is_empty() {
                    config.message.clone()
                } else {
                    format!("{} - {}", option.title, config.message)
                };
                Operation::rename(option.handle.clone(), title)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_config() -> DeliveryMessageConfig {
        DeliveryMessageConfig {
            postcode_prefix: "CH".to_string(),
            message: "Ships in 5-10 days. We will contact you to confirm.".to_string(),
        }
    }

    fn options() -> Vec<DeliveryOption> {
        vec![
            DeliveryOption::new("h1", "Appliance World 1 man delivery"),
            DeliveryOption::new("h2", ""),
        ]
    }

    #[test]
    fn test_matching_postcode_renames_all_options() {
        let ops =
            MessageTagger::message_operations(Some("ch1 1aa"), &options(), &message_config());
        assert_eq!(
            ops,
            vec![
                Operation::rename(
                    "h1",
                    "Appliance World 1 man delivery - Ships in 5-10 days. We will contact you to confirm."
                ),
                // 空标题只用信息本身
                Operation::rename("h2", "Ships in 5-10 days. We will contact you to confirm."),
            ]
        );
    }

    #[test]
    fn test_non_matching_postcode_no_operations() {
        let ops =
            MessageTagger::message_operations(Some("M1 1AA"), &options(), &message_config());
        assert!(ops.is_empty());
    }

    #[test]
    fn test_missing_postcode_no_operations() {
        let ops = MessageTagger::message_operations(None, &options(), &message_config());
        assert!(ops.is_empty());
    }

    #[test]
    fn test_empty_prefix_no_operations() {
        let config = DeliveryMessageConfig {
            postcode_prefix: "  ".to_string(),
            message: "msg".to_string(),
        };
        let ops = MessageTagger::message_operations(Some("M1 1AA"), &options(), &config);
        assert!(ops.is_empty());
    }
}
