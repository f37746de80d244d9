// ==========================================
// 结账配送决策引擎 - 配送选项与操作实体
// ==========================================
// 依据: Delivery_Rules_Spec.md - 宿主平台变更接口
// ==========================================
// 职责: 定义宿主平台提供的配送选项句柄,以及
//       引擎回传的隐藏/改名操作 (宿主只支持隐藏与改名,
//       不支持白名单,故正向决策在边界翻译为负向操作)
// ==========================================

use crate::domain::types::Zone;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// 配送选项 (Delivery Option)
// ==========================================
// handle 为稳定标识,title 为规则表匹配键 (精确、大小写敏感)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryOption {
    pub handle: String,
    pub title: String,
}

impl DeliveryOption {
    pub fn new(handle: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            title: title.into(),
        }
    }
}

// ==========================================
// 隐藏操作 (Hide Operation)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HideOperation {
    pub delivery_option_handle: String,
}

// ==========================================
// 改名操作 (Rename Operation)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameOperation {
    pub delivery_option_handle: String,
    pub title: String,
}

// ==========================================
// 操作 (Operation)
// ==========================================
// 外层标签序列化: {"hide": {...}} / {"rename": {...}}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Hide(HideOperation),
    Rename(RenameOperation),
}

impl Operation {
    pub fn hide(handle: impl Into<String>) -> Self {
        Operation::Hide(HideOperation {
            delivery_option_handle: handle.into(),
        })
    }

    pub fn rename(handle: impl Into<String>, title: impl Into<String>) -> Self {
        Operation::Rename(RenameOperation {
            delivery_option_handle: handle.into(),
            title: title.into(),
        })
    }
}

// ==========================================
// 排期属性回写 (Schedule Capture)
// ==========================================
// 顾客已选配送日期从购物车属性回写到订单元字段
pub const METAFIELD_NAMESPACE: &str = "deliveryApp";
pub const METAFIELD_KEY: &str = "deliverySchedule";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCapture {
    pub namespace: String,
    pub key: String,
    pub value: String,
}

impl ScheduleCapture {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            namespace: METAFIELD_NAMESPACE.to_string(),
            key: METAFIELD_KEY.to_string(),
            value: value.into(),
        }
    }
}

// ==========================================
// 评估报告 (Evaluation Report)
// ==========================================
// 红线: 所有规则必须输出 reason,评估结果必须可追溯
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    /// 单次评估追踪 ID
    pub evaluation_id: Uuid,
    /// 地址区域分类
    pub zone: Zone,
    /// 命中的规则名
    pub matched_rule: String,
    /// 保留可见的选项标题集
    pub kept_titles: Vec<String>,
    /// 决策原因
    pub reasons: Vec<String>,
    /// 回传宿主的操作列表
    pub operations: Vec<Operation>,
}
