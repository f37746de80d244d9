// ==========================================
// 结账配送决策引擎 - 诊断 CLI 入口
// ==========================================
// 用法: delivery-decision-engine <request.json> [config.json]
// 输入: {"cart": {...}, "deliveryOptions": [...]} 评估请求
// 输出: 评估报告 JSON (stdout)
// ==========================================

use anyhow::{Context, Result};
use delivery_decision_engine::api::CheckoutApi;
use delivery_decision_engine::config::EngineConfig;
use delivery_decision_engine::domain::{CartSnapshot, DeliveryOption};
use delivery_decision_engine::logging;
use serde::Deserialize;
use std::path::Path;

// 评估请求文件格式
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EvaluationRequest {
    cart: CartSnapshot,
    #[serde(default)]
    delivery_options: Vec<DeliveryOption>,
}

fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", delivery_decision_engine::APP_NAME);
    tracing::info!("系统版本: {}", delivery_decision_engine::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let request_path = args
        .next()
        .context("用法: delivery-decision-engine <request.json> [config.json]")?;
    let config_path = args.next();

    // 加载配置 (缺省时使用内置默认值)
    let config = EngineConfig::load_or_default(config_path.as_deref().map(Path::new));

    // 读取评估请求
    let raw = std::fs::read_to_string(&request_path)
        .with_context(|| format!("无法读取评估请求文件: {}", request_path))?;
    let request: EvaluationRequest =
        serde_json::from_str(&raw).context("评估请求 JSON 解析失败")?;

    // 执行评估
    let api = CheckoutApi::new(config);
    let report = api.evaluate(&request.cart, &request.delivery_options);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
