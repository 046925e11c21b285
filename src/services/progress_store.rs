//! 进度存储服务 - 业务能力层
//!
//! 只负责进度文件的读取与写回

use crate::error::StoreError;
use crate::models::ProgressRecord;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// 进度存储
///
/// 进度文件是格式化的 JSON 对象：`{"<题号>": true/false}`。
/// 写回时先写临时文件再重命名，写到一半崩溃不会破坏原文件。
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 读取进度
    ///
    /// 文件不存在时返回空进度；内容不是合法进度时返回 [`StoreError::Corrupt`]，
    /// 调用方应终止运行而不是覆盖该文件
    pub fn load(&self) -> Result<ProgressRecord, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("进度文件不存在，使用空进度: {}", self.path.display());
                return Ok(ProgressRecord::new());
            }
            Err(source) => {
                return Err(StoreError::ReadFailed {
                    path: self.path.display().to_string(),
                    source,
                })
            }
        };

        serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            path: self.path.display().to_string(),
            source,
        })
    }

    /// 写回进度（覆盖原文件）
    pub fn save(&self, record: &ProgressRecord) -> Result<(), StoreError> {
        let write_failed = |source| StoreError::WriteFailed {
            path: self.path.display().to_string(),
            source,
        };

        let json = serde_json::to_string_pretty(record).map_err(|e| write_failed(e.into()))?;

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, json).map_err(write_failed)?;
        fs::rename(&tmp_path, &self.path).map_err(write_failed)?;

        debug!("进度已保存: {} 条记录", record.len());
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "progress.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
