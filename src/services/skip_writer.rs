//! 跳过日志写入服务 - 业务能力层
//!
//! 只负责"写 skipped.log"能力，不关心流程

use crate::error::SkipReason;
use crate::models::ProblemId;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;

/// 跳过日志写入服务
///
/// 职责：
/// - 每跳过一道题追加一行 `<题号>: <原因>`
/// - 每次写入都重新打开文件，写完即关闭
/// - 程序不会读回这个文件
pub struct SkipWriter {
    skip_file_path: PathBuf,
}

impl SkipWriter {
    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            skip_file_path: path.into(),
        }
    }

    /// 写入跳过记录
    ///
    /// # 参数
    /// - `id`: 题号
    /// - `reason`: 跳过原因
    pub fn write(&self, id: ProblemId, reason: &SkipReason) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.skip_file_path)
            .with_context(|| format!("无法打开跳过日志: {}", self.skip_file_path.display()))?;

        let reason = single_line(&reason.to_string());
        writeln!(file, "{}: {}", id, reason)
            .with_context(|| format!("无法写入跳过日志: {}", self.skip_file_path.display()))?;

        warn!("⚠️ 跳过 #{}: {}", id, reason);

        Ok(())
    }
}

/// 把多行原因压成一行，保证一次跳过只占一行
fn single_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Default for SkipWriter {
    fn default() -> Self {
        Self::with_path("skipped.log")
    }
}
