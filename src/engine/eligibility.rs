// ==========================================
// 结账配送决策引擎 - 配送资格规则引擎
// ==========================================
// 依据: Delivery_Rules_Spec.md - 3. Eligibility Rule Engine
// 红线: 规则表严格有序,首条命中即生效;
//       所有规则必须输出 reason
// ==========================================
// 职责: 有序决策表求值 + 保留集到隐藏操作的边界翻译
// 输入: CartFacts + Zone + EngineConfig + 当前配送选项
// 输出: Decision (保留标题集) / Vec<Operation> (隐藏操作)
// ==========================================

use crate::config::EngineConfig;
use crate::domain::delivery::{DeliveryOption, Operation};
use crate::domain::types::Zone;
use crate::engine::cart_facts::CartFacts;
use tracing::{debug, warn};

// ==========================================
// 规则求值上下文
// ==========================================
pub struct RuleContext<'a> {
    pub facts: &'a CartFacts,
    pub zone: Zone,
    pub config: &'a EngineConfig,
}

// ==========================================
// 规则结论 (Rule Outcome)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// 只保留指定标题,其余全部隐藏
    Keep(Vec<String>),
    /// 全部保留 (不发出任何隐藏操作)
    KeepAll,
}

// ==========================================
// 资格规则 (Eligibility Rule)
// ==========================================
// 决策表的一行: (谓词, 结论),按表序求值
pub struct EligibilityRule {
    pub name: &'static str,
    /// 命中原因描述 (决策可追溯)
    pub reason: &'static str,
    applies: fn(&RuleContext) -> bool,
    outcome: fn(&RuleContext) -> RuleOutcome,
}

impl EligibilityRule {
    /// 谓词是否命中 (规则可脱离表序单独测试)
    pub fn matches(&self, ctx: &RuleContext) -> bool {
        (self.applies)(ctx)
    }

    /// 求值结论
    pub fn evaluate(&self, ctx: &RuleContext) -> RuleOutcome {
        (self.outcome)(ctx)
    }
}

// ==========================================
// 决策结果 (Decision)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub rule_name: &'static str,
    pub outcome: RuleOutcome,
    pub reasons: Vec<String>,
}

impl Decision {
    /// 保留标题集 (KeepAll 时等于全部候选标题)
    pub fn kept_titles(&self, options: &[DeliveryOption]) -> Vec<String> {
        match &self.outcome {
            RuleOutcome::Keep(titles) => titles.clone(),
            RuleOutcome::KeepAll => options.iter().map(|o| o.title.clone()).collect(),
        }
    }
}

// ==========================================
// 标准决策表 (canonical rule table)
// ==========================================
// 表序即优先级,多条件同时为真时只有首条命中者生效。
// 追加/重排规则即可调整业务优先级,无需组合分析。
pub fn decision_table() -> Vec<EligibilityRule> {
    vec![
        // 1. 紧凑承运方资格
        EligibilityRule {
            name: "COMPACT_CARRIER",
            reason: "所有商品行均为小件,无回收且无安装",
            applies: |ctx| ctx.facts.compact_carrier_eligible,
            outcome: |ctx| RuleOutcome::Keep(vec![ctx.config.option_titles.compact_carrier.clone()]),
        },
        // 2. 远区
        EligibilityRule {
            name: "REMOTE_ZONE",
            reason: "邮编命中远区前缀",
            applies: |ctx| ctx.zone.is_remote(),
            outcome: |ctx| RuleOutcome::Keep(vec![ctx.config.option_titles.remote_delivery.clone()]),
        },
        // 3. 显式自提
        EligibilityRule {
            name: "COLLECTION_SELECTED",
            reason: "顾客显式选择自提",
            applies: |ctx| ctx.facts.collection_selected,
            outcome: |ctx| RuleOutcome::Keep(vec![ctx.config.option_titles.collection.clone()]),
        },
        // 4. 大家电 (本地→本地双人,非本地→快递双人)
        EligibilityRule {
            name: "LARGE_APPLIANCE",
            reason: "购物车含大家电品类",
            applies: |ctx| ctx.facts.has_large_appliance,
            outcome: |ctx| {
                if ctx.zone.is_local() {
                    RuleOutcome::Keep(vec![ctx.config.option_titles.local_two_person.clone()])
                } else {
                    RuleOutcome::Keep(vec![ctx.config.option_titles.courier_two_person.clone()])
                }
            },
        },
        // 5. 低值订单
        EligibilityRule {
            name: "LOW_VALUE",
            reason: "小计低于低值订单阈值",
            applies: |ctx| ctx.facts.subtotal_minor_units < ctx.config.low_value_threshold_minor,
            outcome: |ctx| RuleOutcome::Keep(vec![ctx.config.option_titles.compact_carrier.clone()]),
        },
        // 6. 安装服务 + 非本地
        EligibilityRule {
            name: "INSTALLATION_NON_LOCAL",
            reason: "含安装服务且地址非本地",
            applies: |ctx| ctx.facts.has_installation_service && !ctx.zone.is_local(),
            outcome: |ctx| {
                RuleOutcome::Keep(vec![ctx.config.option_titles.courier_two_person.clone()])
            },
        },
        // 7. 非本地 + 需上楼
        EligibilityRule {
            name: "NON_LOCAL_STEPS",
            reason: "地址非本地且需上楼梯搬运",
            applies: |ctx| !ctx.zone.is_local() && ctx.facts.requires_steps,
            outcome: |ctx| {
                RuleOutcome::Keep(vec![ctx.config.option_titles.courier_two_person.clone()])
            },
        },
        // 8. 非本地 + 无需上楼
        EligibilityRule {
            name: "NON_LOCAL_NO_STEPS",
            reason: "地址非本地且无需上楼梯搬运",
            applies: |ctx| !ctx.zone.is_local() && !ctx.facts.requires_steps,
            outcome: |ctx| {
                RuleOutcome::Keep(vec![
                    ctx.config.option_titles.one_person.clone(),
                    ctx.config.option_titles.courier_two_person.clone(),
                ])
            },
        },
        // 9. 本地 + 需上楼
        EligibilityRule {
            name: "LOCAL_STEPS",
            reason: "地址本地且需上楼梯搬运",
            applies: |ctx| ctx.zone.is_local() && ctx.facts.requires_steps,
            outcome: |ctx| {
                RuleOutcome::Keep(vec![ctx.config.option_titles.local_two_person.clone()])
            },
        },
        // 10. 缺货
        EligibilityRule {
            name: "OUT_OF_STOCK",
            reason: "购物车含缺货行",
            applies: |ctx| ctx.facts.has_out_of_stock_line,
            outcome: |ctx| {
                RuleOutcome::Keep(vec![ctx.config.option_titles.contact_to_arrange.clone()])
            },
        },
        // 11. 本地 + 无需上楼 + 无缺货
        EligibilityRule {
            name: "LOCAL_NO_STEPS",
            reason: "地址本地、无需上楼且无缺货行",
            applies: |ctx| {
                ctx.zone.is_local()
                    && !ctx.facts.requires_steps
                    && !ctx.facts.has_out_of_stock_line
            },
            outcome: |ctx| {
                RuleOutcome::Keep(vec![
                    ctx.config.option_titles.one_person.clone(),
                    ctx.config.option_titles.local_two_person.clone(),
                ])
            },
        },
        // 12. 无行级属性 (空操作特例)
        EligibilityRule {
            name: "NO_LINE_ATTRIBUTES",
            reason: "所有行均无行级属性且无安装服务",
            applies: |ctx| ctx.facts.no_line_attributes && !ctx.facts.has_installation_service,
            outcome: |_| RuleOutcome::KeepAll,
        },
        // 13. 兜底默认
        EligibilityRule {
            name: "DEFAULT",
            reason: "无前序规则命中",
            applies: |_| true,
            outcome: |ctx| {
                RuleOutcome::Keep(vec![
                    ctx.config.option_titles.one_person.clone(),
                    ctx.config.option_titles.courier_two_person.clone(),
                ])
            },
        },
    ]
}

// ==========================================
// EligibilityEngine - 配送资格规则引擎
// ==========================================
// 红线: 引擎自身无状态,同一输入必得同一输出
pub struct EligibilityEngine {
    rules: Vec<EligibilityRule>,
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl EligibilityEngine {
    pub fn new() -> Self {
        Self {
            rules: decision_table(),
        }
    }

    /// 按表序求值决策表,返回首条命中规则的结论
    ///
    /// # 返回
    /// - Decision: 命中规则名 + 结论 + 决策原因
    ///
    /// 末条规则恒真,故必有命中
    pub fn decide(&self, facts: &CartFacts, zone: Zone, config: &EngineConfig) -> Decision {
        let ctx = RuleContext { facts, zone, config };

        let mut reasons = vec![format!(
            "zone={}, subtotal={}p, steps={}, installation={}",
            zone,
            facts.subtotal_minor_units,
            facts.requires_steps,
            facts.has_installation_service
        )];

        for rule in &self.rules {
            if (rule.applies)(&ctx) {
                reasons.push(format!("{}: {}", rule.name, rule.reason));
                let outcome = (rule.outcome)(&ctx);
                debug!(rule = rule.name, ?outcome, "规则命中");
                return Decision {
                    rule_name: rule.name,
                    outcome,
                    reasons,
                };
            }
        }

        // 不可达: 末条规则恒真;保留兜底以保证函数全定义
        reasons.push("DEFAULT: 无前序规则命中".to_string());
        Decision {
            rule_name: "DEFAULT",
            outcome: RuleOutcome::Keep(vec![
                config.option_titles.one_person.clone(),
                config.option_titles.courier_two_person.clone(),
            ]),
            reasons,
        }
    }

    /// 保留集到隐藏操作的边界翻译
    ///
    /// # 规则
    /// - hide = options 中标题不在保留集内的全部选项
    /// - KeepAll → 空操作列表 (全部可见)
    /// - 保留标题未命中任何选项 → 告警 (标题漂移,不是错误)
    /// - 全部选项被隐藏 → 告警 (fail-closed,须被监控发现)
    pub fn hide_operations(
        &self,
        options: &[DeliveryOption],
        decision: &Decision,
    ) -> Vec<Operation> {
        let kept = match &decision.outcome {
            RuleOutcome::KeepAll => return Vec::new(),
            RuleOutcome::Keep(titles) => titles,
        };

        for title in kept {
            if !options.iter().any(|o| &o.title == title) {
                warn!(
                    rule = decision.rule_name,
                    title = title.as_str(),
                    "保留标题未命中任何配送选项,疑似标题漂移"
                );
            }
        }

        let operations: Vec<Operation> = options
            .iter()
            .filter(|o| !kept.contains(&o.title))
            .map(|o| Operation::hide(o.handle.clone()))
            .collect();

        if !options.is_empty() && operations.len() == options.len() {
            warn!(
                rule = decision.rule_name,
                "全部配送选项被隐藏 (fail-closed),请核对规则表标题配置"
            );
        }

        operations
    }
}
