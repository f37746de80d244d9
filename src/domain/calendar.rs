// ==========================================
// 结账配送决策引擎 - 配送日历实体
// ==========================================
// 依据: Delivery_Rules_Spec.md - 日期可用性
// ==========================================
// 职责: 定义禁用日期区间与日历限制结果
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// 禁用区间 (Disabled Range)
// ==========================================
// 闭区间 [start, end];任一端可开放表示该方向无界
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisabledRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

impl DisabledRange {
    /// 闭区间 [start, end] (单日区间 start == end)
    pub fn closed(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// 开放结尾: 封锁 start 起的所有日期
    pub fn from(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// 开放起始: 封锁 end 及之前的所有日期
    pub fn until(end: NaiveDate) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    /// 判断日期是否落在区间内
    pub fn contains(&self, date: NaiveDate) -> bool {
        let after_start = self.start.map_or(true, |s| date >= s);
        let before_end = self.end.map_or(true, |e| date <= e);
        after_start && before_end
    }
}

// ==========================================
// 配送日历 (Delivery Calendar)
// ==========================================
// 单次地址评估的日期限制结果,供日期选择 UI 消费
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryCalendar {
    /// 默认选中日期 (今天,休息日顺延至明天)
    pub selected_date: NaiveDate,
    /// 不可选的连续日期区间 (含末位开放区间)
    pub disabled_ranges: Vec<DisabledRange>,
    /// 历史日期封锁 ({end: 昨天},无条件)
    pub past_cutoff: DisabledRange,
}

impl DeliveryCalendar {
    /// 判断日期是否可选
    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        !self.past_cutoff.contains(date)
            && !self.disabled_ranges.iter().any(|r| r.contains(date))
    }
}
