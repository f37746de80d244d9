// ==========================================
// 结账配送决策引擎 - 结账评估 API
// ==========================================
// 依据: Delivery_Rules_Spec.md - 外部接口
// ==========================================
// 职责: 组合区域分类、事实提取、规则引擎与日历解析,
//       提供单次结账评估的业务门面
// 红线: 每次评估携带追踪 ID,结果必须可追溯
// ==========================================

use crate::api::error::ApiResult;
use crate::config::EngineConfig;
use crate::domain::calendar::DeliveryCalendar;
use crate::domain::cart::{attribute_keys, CartSnapshot};
use crate::domain::delivery::{DeliveryOption, EvaluationReport, ScheduleCapture};
use crate::engine::{
    CartFacts, DateAvailabilityResolver, EligibilityEngine, MessageTagger, ZoneClassifier,
};
use crate::feed::{DateFeedResponse, DeliveryDateFeed, FeedError};
use chrono::NaiveDate;
use tracing::{info, instrument, warn};
use uuid::Uuid;

// ==========================================
// CheckoutApi - 结账评估门面
// ==========================================
pub struct CheckoutApi {
    config: EngineConfig,
    engine: EligibilityEngine,
}

impl CheckoutApi {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            engine: EligibilityEngine::new(),
        }
    }

    pub fn with_default_config() -> Self {
        Self::new(EngineConfig::default())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// 单次结账评估: 购物车 + 当前配送选项 → 操作列表
    ///
    /// # 步骤
    /// 1. 区域分类
    /// 2. 事实提取
    /// 3. 决策表求值
    /// 4. 保留集 → 隐藏操作翻译
    /// 5. 邮编提示信息规则 (如有配置)
    #[instrument(skip_all, fields(evaluation_id = tracing::field::Empty))]
    pub fn evaluate(
        &self,
        cart: &CartSnapshot,
        options: &[DeliveryOption],
    ) -> EvaluationReport {
        let evaluation_id = Uuid::new_v4();
        tracing::Span::current().record("evaluation_id", evaluation_id.to_string().as_str());

        let postcode = cart.postcode();
        let zone = ZoneClassifier::classify(postcode, &self.config.zones);
        let facts = CartFacts::extract(cart, &self.config);
        let decision = self.engine.decide(&facts, zone, &self.config);
        let kept_titles = decision.kept_titles(options);

        let mut operations = self.engine.hide_operations(options, &decision);
        if let Some(message_config) = &self.config.delivery_message {
            operations.extend(MessageTagger::message_operations(
                postcode,
                options,
                message_config,
            ));
        }

        info!(
            zone = %zone,
            rule = decision.rule_name,
            kept = kept_titles.len(),
            operations = operations.len(),
            "结账评估完成"
        );

        EvaluationReport {
            evaluation_id,
            zone,
            matched_rule: decision.rule_name.to_string(),
            kept_titles,
            reasons: decision.reasons,
            operations,
        }
    }

    /// 数据源响应 → 配送日历
    pub fn build_calendar(&self, feed: &DateFeedResponse, today: NaiveDate) -> DeliveryCalendar {
        DateAvailabilityResolver::build_calendar(feed, today, &self.config)
    }

    /// 拉取数据源并组装配送日历
    ///
    /// # 规则
    /// - 数据源失败 → Ok(None): 没有真实可用性数据时
    ///   不提供日期选择,而不是放开全部日期
    /// - 响应被更新请求取代 → Err(Superseded): 必须丢弃,
    ///   不得当作 "无限制" 应用
    pub async fn fetch_calendar(
        &self,
        feed: &dyn DeliveryDateFeed,
        postcode: &str,
        today: NaiveDate,
    ) -> ApiResult<Option<DeliveryCalendar>> {
        match feed.fetch_dates(postcode).await {
            Ok(response) => Ok(Some(self.build_calendar(&response, today))),
            Err(FeedError::Superseded) => Err(FeedError::Superseded.into()),
            Err(e) => {
                warn!(postcode, error = %e, "配送日期数据源不可用,本轮不提供日期选择");
                Ok(None)
            }
        }
    }

    /// 读取顾客已选配送日期 (回写订单元字段用)
    pub fn capture_schedule(&self, cart: &CartSnapshot) -> Option<ScheduleCapture> {
        cart.attribute(attribute_keys::DELIVERY_SCHEDULE)
            .filter(|value| !value.is_empty())
            .map(ScheduleCapture::new)
    }
}
