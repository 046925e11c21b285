//! 尝试上下文
//!
//! 封装"我正在第几次尝试、做的是哪道题"这一信息

use crate::models::ProblemId;
use std::fmt::Display;

/// 单题尝试上下文
#[derive(Debug, Clone, Copy)]
pub struct AttemptCtx {
    /// 题号
    pub problem_id: ProblemId,

    /// 本次运行中的第几次尝试（从1开始，仅用于日志显示）
    pub attempt: usize,
}

impl AttemptCtx {
    pub fn new(problem_id: ProblemId, attempt: usize) -> Self {
        Self {
            problem_id,
            attempt,
        }
    }
}

impl Display for AttemptCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[题目 #{} 尝试#{}]", self.problem_id, self.attempt)
    }
}
