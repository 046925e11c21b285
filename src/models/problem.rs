use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 题号（两个站点共用的数字编号）
pub type ProblemId = u32;

/// 做题进度
///
/// 题号（字符串形式）→ 是否已成功提交。
/// 值为 `true` 的题目不会再被选中。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressRecord {
    entries: BTreeMap<String, bool>,
}

impl ProgressRecord {
    /// 创建空进度
    pub fn new() -> Self {
        Self::default()
    }

    /// 题目是否已成功提交过
    pub fn is_completed(&self, id: ProblemId) -> bool {
        self.entries.get(&id.to_string()).copied().unwrap_or(false)
    }

    /// 记录一次尝试的结果
    pub fn record(&mut self, id: ProblemId, succeeded: bool) {
        self.entries.insert(id.to_string(), succeeded);
    }

    /// 查询原始记录（未记录时返回 None）
    pub fn get(&self, id: ProblemId) -> Option<bool> {
        self.entries.get(&id.to_string()).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 已成功提交的题目数量
    pub fn completed_count(&self) -> usize {
        self.entries.values().filter(|done| **done).count()
    }
}

/// 题解页面解析结果
///
/// 两个字段可以各自缺失：有链接但没有题解（例如付费题）是常见情况
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// 判题平台上的题目链接
    pub problem_url: Option<String>,
    /// Java 题解源码
    pub code: Option<String>,
}

impl Extraction {
    pub fn missing() -> Self {
        Self::default()
    }

    pub fn url_only(url: impl Into<String>) -> Self {
        Self {
            problem_url: Some(url.into()),
            code: None,
        }
    }

    pub fn complete(url: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            problem_url: Some(url.into()),
            code: Some(code.into()),
        }
    }
}

/// 从题目链接中取出 slug（最后一个非空路径段）
///
/// `https://leetcode.com/problems/two-sum/` → `two-sum`
pub fn slug_from_url(url: &str) -> Option<&str> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty() && !segment.contains(':'))
}
