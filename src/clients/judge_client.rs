/// 判题平台客户端
///
/// 封装所有与 LeetCode 相关的调用：题目 id 查询、提交代码、已通过题目同步
use crate::config::{Config, Credentials};
use crate::error::ConfigError;
use crate::infrastructure::HttpExecutor;
use crate::models::{slug_from_url, ProblemId, ResponseBody, SubmissionOutcome};
use anyhow::{bail, Context, Result};
use regex::Regex;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, COOKIE, ORIGIN, REFERER};
use serde_json::{json, Value};
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{debug, warn};

/// 提交语言
pub const SUBMIT_LANGUAGE: &str = "java";

/// 已通过题目同步时的分页大小
const SOLVED_PAGE_SIZE: usize = 100;
/// 已通过题目同步的最大偏移
const SOLVED_MAX_SKIP: usize = 3700;

static BLOCK_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)cloudflare|access denied").expect("block marker pattern is valid")
});

const QUESTION_DATA_QUERY: &str = r#"query questionData($titleSlug: String!) {
    question(titleSlug: $titleSlug) { questionId }
}"#;

const QUESTION_LIST_QUERY: &str = r#"query problemsetQuestionListV2($filters: QuestionFilterInput, $limit: Int, $searchKeyword: String, $skip: Int, $sortBy: QuestionSortByInput, $categorySlug: String) {
    problemsetQuestionListV2(
        filters: $filters
        limit: $limit
        searchKeyword: $searchKeyword
        skip: $skip
        sortBy: $sortBy
        categorySlug: $categorySlug
    ) {
        questions { questionFrontendId status }
        hasMore
    }
}"#;

/// 判题平台客户端
pub struct JudgeClient {
    executor: HttpExecutor,
    base_url: String,
    headers: HeaderMap,
    timeout: Duration,
}

impl JudgeClient {
    /// 创建新的判题平台客户端
    ///
    /// 凭据中含有无法放进请求头的字符时返回错误
    pub fn new(
        executor: HttpExecutor,
        config: &Config,
        credentials: &Credentials,
    ) -> Result<Self, ConfigError> {
        let base_url = config.platform_base_url.trim_end_matches('/').to_string();
        let headers = build_headers(&base_url, credentials)?;

        Ok(Self {
            executor,
            base_url,
            headers,
            timeout: config.platform_timeout(),
        })
    }

    /// 按 slug 查询平台内部题目 id
    ///
    /// # 参数
    /// - `slug`: 题目链接中的 slug
    ///
    /// # 返回
    /// 非 2xx、网络错误或返回数据缺失时返回 None
    pub async fn resolve_id(&self, slug: &str) -> Option<String> {
        let payload = json!({
            "operationName": "questionData",
            "variables": { "titleSlug": slug },
            "query": QUESTION_DATA_QUERY,
        });

        let (status, text) = match self.post(&self.graphql_url(), self.headers.clone(), &payload).await {
            Ok(resp) => resp,
            Err(e) => {
                debug!("查询题目 id 失败 ({}): {}", slug, e);
                return None;
            }
        };

        if !(200..300).contains(&status) {
            debug!("查询题目 id 返回 {} ({})", status, slug);
            return None;
        }

        let data: Value = serde_json::from_str(&text).ok()?;
        match data.pointer("/data/question/questionId")? {
            Value::String(id) if !id.is_empty() => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }

    /// 提交代码
    ///
    /// # 参数
    /// - `problem_url`: 题目链接（同时作为 Referer）
    /// - `code`: Java 源码
    ///
    /// # 返回
    /// 返回 (状态码, 返回体)。无法解析题目 id 时返回合成的 400，
    /// 网络异常时返回合成的 500，均不会报错
    pub async fn submit(&self, problem_url: &str, code: &str) -> SubmissionOutcome {
        let Some(slug) = slug_from_url(problem_url) else {
            return SubmissionOutcome::new(400, ResponseBody::error("Could not parse problem slug"));
        };

        let Some(question_id) = self.resolve_id(slug).await else {
            return SubmissionOutcome::new(400, ResponseBody::error("Could not fetch questionId"));
        };

        let url = format!("{}/problems/{}/submit/", self.base_url, slug);
        let mut headers = self.headers.clone();
        match HeaderValue::from_str(problem_url) {
            Ok(referer) => {
                headers.insert(REFERER, referer);
            }
            Err(_) => warn!("⚠️ 题目链接无法作为 Referer: {}", problem_url),
        }

        let payload = json!({
            "lang": SUBMIT_LANGUAGE,
            "question_id": question_id,
            "typed_code": code,
        });

        match self.post(&url, headers, &payload).await {
            Ok((status, text)) => SubmissionOutcome::new(status, ResponseBody::from_text(&text)),
            Err(e) => SubmissionOutcome::new(500, ResponseBody::error(e.to_string())),
        }
    }

    /// 拉取平台上已通过的题号
    ///
    /// 按最近提交时间倒序分页，遇到未通过的题目即停止
    pub async fn fetch_solved_ids(&self) -> Result<Vec<ProblemId>> {
        let mut solved = Vec::new();
        let mut skip = 0;

        while skip <= SOLVED_MAX_SKIP {
            let payload = json!({
                "operationName": "problemsetQuestionListV2",
                "query": QUESTION_LIST_QUERY,
                "variables": {
                    "skip": skip,
                    "limit": SOLVED_PAGE_SIZE,
                    "categorySlug": "all-code-essentials",
                    "filters": {
                        "filterCombineType": "ALL",
                        "statusFilter": { "questionStatuses": [], "operator": "IS" }
                    },
                    "sortBy": { "sortField": "LAST_SUBMITTED_TIME", "sortOrder": "DESCENDING" },
                    "searchKeyword": ""
                }
            });

            let (status, text) = self
                .post(&self.graphql_url(), self.headers.clone(), &payload)
                .await
                .context("题目列表请求失败")?;
            if !(200..300).contains(&status) {
                bail!("题目列表请求返回 {}", status);
            }

            let data: Value = serde_json::from_str(&text).context("题目列表不是合法的 JSON")?;
            let list = data
                .pointer("/data/problemsetQuestionListV2")
                .context("题目列表缺少 problemsetQuestionListV2 字段")?;
            let questions = list
                .get("questions")
                .and_then(|v| v.as_array())
                .map(Vec::as_slice)
                .unwrap_or_default();

            if questions.is_empty() {
                break;
            }

            solved.extend(
                questions
                    .iter()
                    .filter(|q| is_solved(q))
                    .filter_map(frontend_id),
            );

            let last_solved = questions.last().is_some_and(is_solved);
            let has_more = list.get("hasMore").and_then(|v| v.as_bool()).unwrap_or(false);
            if !last_solved || !has_more {
                break;
            }

            skip += SOLVED_PAGE_SIZE;
        }

        solved.sort_unstable();
        solved.dedup();
        Ok(solved)
    }

    fn graphql_url(&self) -> String {
        format!("{}/graphql", self.base_url)
    }

    async fn post(
        &self,
        url: &str,
        headers: HeaderMap,
        payload: &Value,
    ) -> Result<(u16, String), reqwest::Error> {
        self.executor
            .post_json(url, headers, payload, self.timeout)
            .await
    }
}

/// 提交是否被 Cloudflare 拦截或限流
pub fn is_blocked(outcome: &SubmissionOutcome) -> bool {
    matches!(outcome.status, 403 | 429) || BLOCK_MARKER.is_match(&outcome.body.to_string())
}

fn is_solved(question: &Value) -> bool {
    question.get("status").and_then(|v| v.as_str()) == Some("SOLVED")
}

fn frontend_id(question: &Value) -> Option<ProblemId> {
    match question.get("questionFrontendId")? {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_u64().and_then(|n| ProblemId::try_from(n).ok()),
        _ => None,
    }
}

/// 构建平台请求公共头
fn build_headers(base_url: &str, credentials: &Credentials) -> Result<HeaderMap, ConfigError> {
    let invalid = |what: &str| ConfigError::InvalidHeaderValue {
        field: what.to_string(),
    };

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        ORIGIN,
        HeaderValue::from_str(base_url).map_err(|_| invalid("平台地址"))?,
    );
    headers.insert(
        HeaderName::from_static("x-csrftoken"),
        HeaderValue::from_str(&credentials.csrf_token).map_err(|_| invalid("csrftoken"))?,
    );
    headers.insert(
        COOKIE,
        HeaderValue::from_str(&credentials.cookie_header()).map_err(|_| invalid("session"))?,
    );
    Ok(headers)
}
