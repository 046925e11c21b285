//! HTTP 执行器 - 基础设施层
//!
//! 持有唯一的 reqwest::Client，只暴露"发请求"的能力

use reqwest::header::HeaderMap;
use reqwest::Client;
use serde_json::Value as JsonValue;
use std::time::Duration;
use tracing::debug;

/// 原始 HTTP 响应：(状态码, 响应原文)
pub type RawResponse = (u16, String);

/// HTTP 执行器
///
/// 职责：
/// - 持有连接池（Client）
/// - 暴露 GET / POST JSON 能力，每次调用单独设置超时
/// - 不认识题目 / 提交
/// - 不解释响应内容
#[derive(Clone)]
pub struct HttpExecutor {
    client: Client,
}

impl HttpExecutor {
    /// 创建新的 HTTP 执行器
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent("Mozilla/5.0").build()?;
        Ok(Self { client })
    }

    /// 发送 GET 请求
    ///
    /// # 参数
    /// - `url`: 请求地址
    /// - `timeout`: 超时时间
    ///
    /// # 返回
    /// 返回 (状态码, 响应原文)，网络错误或超时返回 Err
    pub async fn get_text(&self, url: &str, timeout: Duration) -> Result<RawResponse, reqwest::Error> {
        debug!("GET {}", url);
        let resp = self.client.get(url).timeout(timeout).send().await?;
        let status = resp.status().as_u16();
        let text = resp.text().await?;
        Ok((status, text))
    }

    /// 发送 JSON POST 请求
    ///
    /// # 参数
    /// - `url`: 请求地址
    /// - `headers`: 附加请求头
    /// - `body`: JSON 请求体
    /// - `timeout`: 超时时间
    ///
    /// # 返回
    /// 返回 (状态码, 响应原文)，响应体不做解析
    pub async fn post_json(
        &self,
        url: &str,
        headers: HeaderMap,
        body: &JsonValue,
        timeout: Duration,
    ) -> Result<RawResponse, reqwest::Error> {
        debug!("POST {} Payload: {}", url, body);
        let resp = self
            .client
            .post(url)
            .headers(headers)
            .json(body)
            .timeout(timeout)
            .send()
            .await?;
        let status = resp.status().as_u16();
        let text = resp.text().await?;
        Ok((status, text))
    }
}
