use crate::error::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// 选题策略
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// 随机抽样，有限次数内抽不到可做的题就放弃
    Sampling,
    /// 在所有可做的题中均匀随机选取
    Exhaustive,
}

impl FromStr for SelectionMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sampling" => Ok(SelectionMode::Sampling),
            "exhaustive" => Ok(SelectionMode::Exhaustive),
            _ => Err(()),
        }
    }
}

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 题号上限（题号范围 [1, max_problem]）
    pub max_problem: u32,
    /// 抽样选题的最大尝试次数
    pub selection_attempts: usize,
    /// 选题策略
    pub selection: SelectionMode,
    /// 题解页面地址模板，`{id}` 会被替换为题号
    pub reference_url_template: String,
    /// 题解页面请求超时（秒）
    pub reference_timeout_secs: u64,
    /// 判题平台根地址
    pub platform_base_url: String,
    /// 判题平台请求超时（秒）
    pub platform_timeout_secs: u64,
    /// 进度文件
    pub progress_file: String,
    /// 跳过日志文件
    pub skip_file: String,
    /// 被拦截多少次后停止本次运行
    pub max_block_rejections: usize,
    /// 单次运行最多尝试的题目数
    pub max_total_attempts: usize,
    /// 启动时是否同步平台上已通过的题目
    pub sync_solved: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- 登录凭据 ---
    pub session_token: String,
    pub csrf_token: String,
    /// 合并令牌（浏览器插件导出），与上面两项二选一
    pub merge_token: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_problem: 3691,
            selection_attempts: 100,
            selection: SelectionMode::Sampling,
            reference_url_template: "https://walkccc.me/LeetCode/problems/{id}/".to_string(),
            reference_timeout_secs: 5,
            platform_base_url: "https://leetcode.com".to_string(),
            platform_timeout_secs: 30,
            progress_file: "progress.json".to_string(),
            skip_file: "skipped.log".to_string(),
            max_block_rejections: 4,
            max_total_attempts: 2000,
            sync_solved: false,
            verbose_logging: false,
            session_token: String::new(),
            csrf_token: String::new(),
            merge_token: String::new(),
        }
    }
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 若设置了 `AUTOSUBMIT_CONFIG`，先读取该 TOML 文件，再用环境变量覆盖
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 从 TOML 文件加载配置，缺失的字段使用默认值
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| ConfigError::FileReadFailed {
                path: path.display().to_string(),
                source,
            })?;
        toml::from_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })
    }

    /// 使用给定的查找函数读取变量
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match lookup("AUTOSUBMIT_CONFIG") {
            Some(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::default(),
        };

        Ok(Self {
            max_problem: parse_var(&lookup, "MAX_PROBLEM", base.max_problem, "u32")?,
            selection_attempts: parse_var(
                &lookup,
                "SELECTION_ATTEMPTS",
                base.selection_attempts,
                "usize",
            )?,
            selection: parse_var(&lookup, "SELECTION_MODE", base.selection, "sampling|exhaustive")?,
            reference_url_template: lookup("REFERENCE_URL_TEMPLATE")
                .unwrap_or(base.reference_url_template),
            reference_timeout_secs: parse_var(
                &lookup,
                "REFERENCE_TIMEOUT_SECS",
                base.reference_timeout_secs,
                "u64",
            )?,
            platform_base_url: lookup("PLATFORM_BASE_URL").unwrap_or(base.platform_base_url),
            platform_timeout_secs: parse_var(
                &lookup,
                "PLATFORM_TIMEOUT_SECS",
                base.platform_timeout_secs,
                "u64",
            )?,
            progress_file: lookup("PROGRESS_FILE").unwrap_or(base.progress_file),
            skip_file: lookup("SKIP_FILE").unwrap_or(base.skip_file),
            max_block_rejections: parse_var(
                &lookup,
                "MAX_BLOCK_REJECTIONS",
                base.max_block_rejections,
                "usize",
            )?,
            max_total_attempts: parse_var(
                &lookup,
                "MAX_TOTAL_ATTEMPTS",
                base.max_total_attempts,
                "usize",
            )?,
            sync_solved: parse_var(&lookup, "SYNC_SOLVED", base.sync_solved, "bool")?,
            verbose_logging: parse_var(&lookup, "VERBOSE_LOGGING", base.verbose_logging, "bool")?,
            session_token: lookup("LEETCODE_SESSION").unwrap_or(base.session_token),
            csrf_token: lookup("CSRFTOKEN").unwrap_or(base.csrf_token),
            merge_token: lookup("MERGE_TOKEN").unwrap_or(base.merge_token),
        })
    }

    pub fn reference_timeout(&self) -> Duration {
        Duration::from_secs(self.reference_timeout_secs)
    }

    pub fn platform_timeout(&self) -> Duration {
        Duration::from_secs(self.platform_timeout_secs)
    }

    /// 解析登录凭据
    ///
    /// 优先使用单独设置的两个令牌，否则解码合并令牌
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let session = self.session_token.trim();
        let csrf = self.csrf_token.trim();
        if !session.is_empty() && !csrf.is_empty() {
            return Ok(Credentials::new(session, csrf));
        }

        let merged = self.merge_token.trim();
        if !merged.is_empty() {
            return Credentials::from_merge_token(merged);
        }

        Err(ConfigError::MissingCredentials)
    }
}

fn parse_var<F, T>(
    lookup: &F,
    var_name: &str,
    default: T,
    expected_type: &str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var_name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }),
        None => Ok(default),
    }
}

/// 判题平台登录凭据
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub session: String,
    pub csrf_token: String,
}

impl Credentials {
    pub fn new(session: impl Into<String>, csrf_token: impl Into<String>) -> Self {
        Self {
            session: session.into(),
            csrf_token: csrf_token.into(),
        }
    }

    /// 解码合并令牌
    ///
    /// 格式：`<4 位长度><session><4 位长度><csrftoken>`，长度左侧补零
    pub fn from_merge_token(token: &str) -> Result<Self, ConfigError> {
        let (session, rest) = take_segment(token)?;
        let (csrf_token, _) = take_segment(rest)?;
        if session.is_empty() || csrf_token.is_empty() {
            return Err(ConfigError::MalformedMergeToken {
                reason: "令牌内容为空".to_string(),
            });
        }
        Ok(Self::new(session, csrf_token))
    }

    /// `Cookie` 请求头
    pub fn cookie_header(&self) -> String {
        format!(
            "LEETCODE_SESSION={}; csrftoken={};",
            self.session, self.csrf_token
        )
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("session", &format!("<{} chars>", self.session.len()))
            .field("csrf_token", &format!("<{} chars>", self.csrf_token.len()))
            .finish()
    }
}

const LENGTH_PREFIX: usize = 4;

fn take_segment(input: &str) -> Result<(&str, &str), ConfigError> {
    let prefix = input
        .get(..LENGTH_PREFIX)
        .ok_or_else(|| ConfigError::MalformedMergeToken {
            reason: "缺少长度前缀".to_string(),
        })?;
    let len: usize = prefix
        .parse()
        .map_err(|_| ConfigError::MalformedMergeToken {
            reason: format!("长度前缀不是数字: {}", prefix),
        })?;
    let end = LENGTH_PREFIX + len;
    let value = input
        .get(LENGTH_PREFIX..end)
        .ok_or_else(|| ConfigError::MalformedMergeToken {
            reason: format!("声明长度 {} 超出剩余内容", len),
        })?;
    Ok((value, &input[end..]))
}
