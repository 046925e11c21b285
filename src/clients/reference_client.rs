/// 题解站点客户端
///
/// 按题号下载 walkccc 题解页面
use crate::config::Config;
use crate::infrastructure::HttpExecutor;
use crate::models::ProblemId;
use std::time::Duration;
use tracing::debug;

/// 题解站点客户端
pub struct ReferenceClient {
    executor: HttpExecutor,
    url_template: String,
    timeout: Duration,
}

impl ReferenceClient {
    /// 创建新的题解站点客户端
    pub fn new(executor: HttpExecutor, config: &Config) -> Self {
        Self {
            executor,
            url_template: config.reference_url_template.clone(),
            timeout: config.reference_timeout(),
        }
    }

    /// 题号对应的页面地址
    pub fn page_url(&self, id: ProblemId) -> String {
        self.url_template.replace("{id}", &id.to_string())
    }

    /// 下载题解页面
    ///
    /// # 参数
    /// - `id`: 题号
    ///
    /// # 返回
    /// 仅在 2xx 时返回页面内容；非 2xx、网络错误、超时都返回 None
    pub async fn fetch(&self, id: ProblemId) -> Option<String> {
        let url = self.page_url(id);

        match self.executor.get_text(&url, self.timeout).await {
            Ok((status, body)) if (200..300).contains(&status) => Some(body),
            Ok((status, _)) => {
                debug!("题解页面返回 {}: {}", status, url);
                None
            }
            Err(e) => {
                debug!("题解页面请求失败 ({}): {}", url, e);
                None
            }
        }
    }
}
