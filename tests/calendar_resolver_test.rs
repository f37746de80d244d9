// ==========================================
// DateAvailabilityResolver 引擎集成测试
// ==========================================
// 测试目标: 验证数据源响应到配送日历的完整组装
// 覆盖范围: 区间合并、末位开放区间、休息日顺延、
//           历史日期封锁、数据源退化情形
// ==========================================

use chrono::NaiveDate;
use delivery_decision_engine::config::EngineConfig;
use delivery_decision_engine::domain::calendar::DisabledRange;
use delivery_decision_engine::engine::DateAvailabilityResolver;
use delivery_decision_engine::feed::DateFeedResponse;

// ==========================================
// 测试辅助函数
// ==========================================

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn feed(dates: &[&str]) -> DateFeedResponse {
    DateFeedResponse {
        dates: dates.iter().map(|s| s.to_string()).collect(),
    }
}

// ==========================================
// 测试用例 1: 参考日历场景
// ==========================================

#[test]
fn test_calendar_reference_scenario() {
    // 2024-06-03 (周一),可用日 6-10/6-11/6-13
    let config = EngineConfig::default();
    let response = feed(&["2024-06-10", "2024-06-11", "2024-06-13"]);
    let calendar = DateAvailabilityResolver::build_calendar(&response, d(2024, 6, 3), &config);

    assert_eq!(calendar.selected_date, d(2024, 6, 3));
    assert_eq!(calendar.past_cutoff, DisabledRange::until(d(2024, 6, 2)));
    assert_eq!(
        calendar.disabled_ranges,
        vec![
            DisabledRange::closed(d(2024, 6, 1), d(2024, 6, 9)),
            DisabledRange::closed(d(2024, 6, 12), d(2024, 6, 12)),
            DisabledRange::from(d(2024, 6, 14)),
        ]
    );

    // 只有数据源声明的日期可选
    assert!(calendar.is_selectable(d(2024, 6, 10)));
    assert!(calendar.is_selectable(d(2024, 6, 13)));
    assert!(!calendar.is_selectable(d(2024, 6, 12)));
    assert!(!calendar.is_selectable(d(2024, 8, 1)));
}

#[test]
fn test_calendar_sunday_rolls_to_monday() {
    // 2024-06-02 是周日 → 默认选中顺延至 6-03
    let config = EngineConfig::default();
    let response = feed(&["2024-06-03"]);
    let calendar = DateAvailabilityResolver::build_calendar(&response, d(2024, 6, 2), &config);
    assert_eq!(calendar.selected_date, d(2024, 6, 3));
}

// ==========================================
// 测试用例 2: 数据源退化情形
// ==========================================

#[test]
fn test_calendar_empty_feed_blocks_whole_horizon() {
    // 无任何可用日 → 整个视野封锁,无末位开放区间
    let config = EngineConfig::default();
    let calendar =
        DateAvailabilityResolver::build_calendar(&feed(&[]), d(2024, 6, 15), &config);

    assert_eq!(
        calendar.disabled_ranges,
        vec![DisabledRange::closed(d(2024, 6, 1), d(2024, 9, 15))]
    );
    assert!(!calendar.is_selectable(d(2024, 6, 20)));
}

#[test]
fn test_calendar_garbage_entries_are_ignored() {
    let config = EngineConfig::default();
    let response = feed(&["2024-06-10", "definitely not a date"]);
    let calendar = DateAvailabilityResolver::build_calendar(&response, d(2024, 6, 3), &config);
    assert!(calendar.is_selectable(d(2024, 6, 10)));
}

// ==========================================
// 测试用例 3: 省略年份的数据源格式
// ==========================================

#[test]
fn test_calendar_yearless_feed_dates() {
    // 数据源省略年份 → 按 today 的年份补全
    let config = EngineConfig::default();
    let response = feed(&["Mon Jun 10", "Tue Jun 11"]);
    let calendar = DateAvailabilityResolver::build_calendar(&response, d(2024, 6, 3), &config);

    assert!(calendar.is_selectable(d(2024, 6, 10)));
    assert!(calendar.is_selectable(d(2024, 6, 11)));
    assert!(!calendar.is_selectable(d(2024, 6, 12)));
}
