use serde_json::{json, Map, Value};
use std::fmt;

/// 判题平台返回体
///
/// 平台正常时返回 JSON 对象，被拦截或出错时可能是 HTML / 纯文本
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// 解析成功的 JSON 对象
    Structured(Map<String, Value>),
    /// 无法解析为 JSON 对象时保留原文
    RawText(String),
}

impl ResponseBody {
    /// 从响应原文构建返回体
    pub fn from_text(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => ResponseBody::Structured(map),
            Ok(other) => ResponseBody::RawText(other.to_string()),
            Err(_) => ResponseBody::RawText(text.to_string()),
        }
    }

    /// 只含 `error` 字段的合成返回体
    pub fn error(message: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert("error".to_string(), Value::String(message.into()));
        ResponseBody::Structured(map)
    }

    /// 读取字符串字段（仅对结构化返回体有效）
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            ResponseBody::Structured(map) => map.get(name),
            ResponseBody::RawText(_) => None,
        }
    }

    /// 转为 JSON 值，原文包装为 `{"raw": ...}`
    pub fn to_json(&self) -> Value {
        match self {
            ResponseBody::Structured(map) => Value::Object(map.clone()),
            ResponseBody::RawText(text) => json!({ "raw": text }),
        }
    }

    /// 便于人阅读的多行格式
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.to_json()).unwrap_or_else(|_| self.to_string())
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseBody::Structured(map) => write!(f, "{}", Value::Object(map.clone())),
            ResponseBody::RawText(text) => write!(f, "{}", text),
        }
    }
}

/// 一次提交的结果：(状态码, 返回体)
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionOutcome {
    pub status: u16,
    pub body: ResponseBody,
}

impl SubmissionOutcome {
    pub fn new(status: u16, body: ResponseBody) -> Self {
        Self { status, body }
    }

    /// 平台是否受理了提交
    ///
    /// 状态码 200 且返回体带有提交编号字段
    pub fn is_accepted(&self) -> bool {
        self.status == 200
            && ["submission_id", "submissionId"]
                .iter()
                .any(|key| self.body.field(key).is_some_and(|v| !v.is_null()))
    }

    /// 失败原因：error 字段 → message 字段 → 返回体原文
    ///
    /// 字段值为 null、false、0、空串、空数组或空对象时视为缺失；
    /// 返回体为空时给出 `empty response (status N)`
    pub fn failure_reason(&self) -> String {
        let reason = match &self.body {
            ResponseBody::Structured(_) => self
                .text_field("error")
                .or_else(|| self.text_field("message"))
                .unwrap_or_else(|| self.body.to_string()),
            ResponseBody::RawText(text) => text.trim().to_string(),
        };

        if reason.is_empty() {
            format!("empty response (status {})", self.status)
        } else {
            reason
        }
    }

    fn text_field(&self, name: &str) -> Option<String> {
        match self.body.field(name)? {
            Value::Null | Value::Bool(false) => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::Array(items) if items.is_empty() => None,
            Value::Object(map) if map.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
