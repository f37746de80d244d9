// ==========================================
// 结账配送决策引擎 - 配送日期数据源
// ==========================================
// 依据: Delivery_Rules_Spec.md - 外部接口 / 并发模型
// ==========================================
// 职责: 按邮编获取可用配送日期的客户端接口
// 红线: 地址变更后,旧请求的迟到响应必须丢弃
//       (last-request-wins),不得应用到新地址
// ==========================================

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

// ==========================================
// 数据源层错误类型
// ==========================================
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("配送日期数据源请求失败: {0}")]
    Http(#[from] reqwest::Error),

    #[error("配送日期数据源响应格式错误: {0}")]
    Malformed(String),

    #[error("请求已被更新的地址变更取代")]
    Superseded,
}

// ==========================================
// 数据源响应 (Date Feed Response)
// ==========================================
// 日期为字符串,可能省略年份 (解析在日历解析器中完成)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFeedResponse {
    pub dates: Vec<String>,
}

// ==========================================
// DeliveryDateFeed - 数据源接口
// ==========================================
#[async_trait]
pub trait DeliveryDateFeed: Send + Sync {
    /// 获取指定邮编的可用配送日期
    async fn fetch_dates(&self, postcode: &str) -> Result<DateFeedResponse, FeedError>;
}

// ==========================================
// HttpDateFeed - HTTP 数据源实现
// ==========================================
pub struct HttpDateFeed {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDateFeed {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl DeliveryDateFeed for HttpDateFeed {
    async fn fetch_dates(&self, postcode: &str) -> Result<DateFeedResponse, FeedError> {
        let url = format!("{}/getdeliverydates", self.base_url.trim_end_matches('/'));
        debug!(url = url.as_str(), postcode, "请求配送日期数据源");

        let response = self
            .client
            .get(&url)
            .query(&[("postcode", postcode)])
            .send()
            .await?
            .error_for_status()?;

        response
            .json::<DateFeedResponse>()
            .await
            .map_err(|e| FeedError::Malformed(e.to_string()))
    }
}

// ==========================================
// LatestFeedClient - last-request-wins 包装
// ==========================================
// 每次请求领取递增票号;响应返回时若票号已不是最新,
// 判定为被取代,调用方必须丢弃
pub struct LatestFeedClient<F: DeliveryDateFeed> {
    inner: Arc<F>,
    generation: AtomicU64,
}

impl<F: DeliveryDateFeed> LatestFeedClient<F> {
    pub fn new(inner: Arc<F>) -> Self {
        Self {
            inner,
            generation: AtomicU64::new(0),
        }
    }

    /// 获取最新地址的配送日期
    ///
    /// # 返回
    /// - Ok(response): 本请求仍是最新,响应可用
    /// - Err(Superseded): 期间发起了更新的请求,本响应作废
    pub async fn fetch_latest(&self, postcode: &str) -> Result<DateFeedResponse, FeedError> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.inner.fetch_dates(postcode).await;

        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!(postcode, ticket, "数据源响应已被取代,丢弃");
            return Err(FeedError::Superseded);
        }
        result
    }
}

#[async_trait]
impl<F: DeliveryDateFeed> DeliveryDateFeed for LatestFeedClient<F> {
    async fn fetch_dates(&self, postcode: &str) -> Result<DateFeedResponse, FeedError> {
        self.fetch_latest(postcode).await
    }
}
