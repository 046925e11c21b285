use thiserror::Error;

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 缺少登录凭据
    #[error("缺少登录凭据: 请设置 LEETCODE_SESSION 和 CSRFTOKEN，或设置 MERGE_TOKEN")]
    MissingCredentials,
    /// 合并令牌格式错误
    #[error("合并令牌格式错误: {reason}")]
    MalformedMergeToken { reason: String },
    /// 凭据或地址无法放入请求头
    #[error("{field} 含有无法放入请求头的字符")]
    InvalidHeaderValue { field: String },
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    FileReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 进度文件错误
#[derive(Debug, Error)]
pub enum StoreError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 文件内容不是合法的进度记录
    #[error("进度文件已损坏 ({path}): {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// 单题跳过原因
///
/// `Display` 的输出即写入跳过日志的文字
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// 题解页面不存在、非 200 或超时
    #[error("page not found")]
    PageNotFound,
    /// 题解页面中没有题目链接
    #[error("URL not found")]
    MissingUrl,
    /// 没有 Java 题解，或是付费题
    #[error("solution not found or unavailable")]
    MissingSolution,
    /// 提交被拒绝（含无法解析题目 id、网络异常）
    #[error("submission failed: {reason}")]
    SubmissionFailed { reason: String },
    /// 被 Cloudflare 拦截或限流
    #[error("blocked or rate-limited (status {status}): {reason}")]
    Blocked { status: u16, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_reason_wording() {
        assert_eq!(SkipReason::PageNotFound.to_string(), "page not found");
        assert_eq!(SkipReason::MissingUrl.to_string(), "URL not found");
        assert_eq!(
            SkipReason::MissingSolution.to_string(),
            "solution not found or unavailable"
        );
        assert_eq!(
            SkipReason::SubmissionFailed {
                reason: "Could not fetch questionId".into()
            }
            .to_string(),
            "submission failed: Could not fetch questionId"
        );
        assert_eq!(
            SkipReason::Blocked {
                status: 403,
                reason: "CSRF verification failed".into()
            }
            .to_string(),
            "blocked or rate-limited (status 403): CSRF verification failed"
        );
    }
}
