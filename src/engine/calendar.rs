// ==========================================
// 结账配送决策引擎 - 日期可用性解析器
// ==========================================
// 依据: Delivery_Rules_Spec.md - 4. Date Availability Resolver
// 红线: 无状态、无 I/O;today 必须显式传入,
//       引擎内不得读取系统时钟
// ==========================================
// 职责: 可用日期集 → 默认选中日期 + 最小禁用区间集
// 复杂度: 视野长度线性扫描 (数周至数月,无需再优化)
// ==========================================

use crate::config::EngineConfig;
use crate::domain::calendar::{DeliveryCalendar, DisabledRange};
use crate::feed::DateFeedResponse;
use chrono::{Datelike, Months, NaiveDate, Weekday};
use std::collections::BTreeSet;
use tracing::warn;

// 省略年份的数据源日期格式 (解析时补当前年)
const YEARLESS_FORMATS: &[&str] = &[
    "%a %b %d %Y",
    "%b %d %Y",
    "%d %b %Y",
    "%d %B %Y",
    "%B %d %Y",
];

// ==========================================
// DateAvailabilityResolver - 纯函数工具类
// ==========================================
pub struct DateAvailabilityResolver;

impl DateAvailabilityResolver {
    /// 默认选中日期
    ///
    /// # 规则
    /// - today 落在休息日 → today + 1
    /// - 否则 → today
    pub fn resolve_default_date(today: NaiveDate, rest_day: Weekday) -> NaiveDate {
        if today.weekday() == rest_day {
            today.succ_opt().unwrap_or(today)
        } else {
            today
        }
    }

    /// 历史日期封锁 ({end: 昨天},无条件,与数据源无关)
    pub fn past_cutoff(today: NaiveDate) -> DisabledRange {
        DisabledRange::until(today.pred_opt().unwrap_or(today))
    }

    /// 计算禁用区间集
    ///
    /// # 规则
    /// 1. 在 [horizon_start, horizon_end] 内顺序扫描,
    ///    每段不在 available 内的极大连续日期段产出一个闭区间
    ///    (单日段产出 start == end 的区间)
    /// 2. available 非空时追加开放区间 {start: 最后可用日+1}
    ///    (数据源视野之外的日期是未知,不得视为可用)
    /// 3. 末位闭区间被开放区间完全覆盖时不再产出 (最小区间集)
    /// 4. available 为空 → 整个视野退化为单个全封锁区间
    pub fn compute_disabled_ranges(
        available: &BTreeSet<NaiveDate>,
        horizon_start: NaiveDate,
        horizon_end: NaiveDate,
    ) -> Vec<DisabledRange> {
        let mut ranges = Vec::new();
        let last_available = available.iter().next_back().copied();

        // 最后可用日之后统一由开放区间封锁,扫描到此为止
        let scan_end = match last_available {
            Some(last) => horizon_end.min(last),
            None => horizon_end,
        };

        let mut run_start: Option<NaiveDate> = None;
        let mut day = horizon_start;
        while day <= scan_end {
            if available.contains(&day) {
                if let (Some(start), Some(end)) = (run_start.take(), day.pred_opt()) {
                    ranges.push(DisabledRange::closed(start, end));
                }
            } else if run_start.is_none() {
                run_start = Some(day);
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        if let Some(start) = run_start {
            ranges.push(DisabledRange::closed(start, scan_end));
        }

        if let Some(after_last) = last_available.and_then(|d| d.succ_opt()) {
            ranges.push(DisabledRange::from(after_last));
        }

        ranges
    }

    /// 日历视野: 当月首日 → today + horizon_months
    pub fn horizon(today: NaiveDate, horizon_months: u32) -> (NaiveDate, NaiveDate) {
        let start = today.with_day(1).unwrap_or(today);
        let end = today
            .checked_add_months(Months::new(horizon_months))
            .unwrap_or(today);
        (start, end)
    }

    /// 解析数据源日期字符串集
    ///
    /// # 规则
    /// - 首选 ISO 格式 (YYYY-MM-DD)
    /// - 省略年份的格式补 default_year 再解析
    /// - 不可解析的条目跳过并告警 (数据源噪声不是错误)
    pub fn parse_feed_dates(raw_dates: &[String], default_year: i32) -> BTreeSet<NaiveDate> {
        let mut dates = BTreeSet::new();
        for raw in raw_dates {
            match Self::parse_feed_date(raw, default_year) {
                Some(date) => {
                    dates.insert(date);
                }
                None => warn!(raw = raw.as_str(), "无法解析的数据源日期条目,已跳过"),
            }
        }
        dates
    }

    fn parse_feed_date(raw: &str, default_year: i32) -> Option<NaiveDate> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Some(date);
        }

        let with_year = format!("{} {}", trimmed, default_year);
        YEARLESS_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(&with_year, fmt).ok())
    }

    /// 数据源响应 → 配送日历
    pub fn build_calendar(
        feed: &DateFeedResponse,
        today: NaiveDate,
        config: &EngineConfig,
    ) -> DeliveryCalendar {
        let available = Self::parse_feed_dates(&feed.dates, today.year());
        let (horizon_start, horizon_end) = Self::horizon(today, config.horizon_months);

        DeliveryCalendar {
            selected_date: Self::resolve_default_date(today, config.rest_day()),
            disabled_ranges: Self::compute_disabled_ranges(
                &available,
                horizon_start,
                horizon_end,
            ),
            past_cutoff: Self::past_cutoff(today),
        }
    }
}
