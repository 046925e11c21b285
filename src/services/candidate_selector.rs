//! 选题服务 - 业务能力层
//!
//! 只负责"下一道做哪题"，不关心题目能否做成

use crate::config::{Config, SelectionMode};
use crate::models::{is_statically_excluded, ProblemId, ProgressRecord};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::HashSet;

/// 选题服务
///
/// 可选的题目需同时满足：
/// - 进度中没有标记为成功
/// - 不是付费题 / 数据库题
/// - 不在本次运行额外排除的集合中（已通过、本次已尝试）
pub struct CandidateSelector {
    max_problem: ProblemId,
    mode: SelectionMode,
    max_attempts: usize,
    excluded: HashSet<ProblemId>,
}

impl CandidateSelector {
    pub fn new(max_problem: ProblemId, mode: SelectionMode, max_attempts: usize) -> Self {
        Self {
            max_problem,
            mode,
            max_attempts,
            excluded: HashSet::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.max_problem,
            config.selection,
            config.selection_attempts,
        )
    }

    /// 额外排除一道题
    pub fn exclude(&mut self, id: ProblemId) {
        self.excluded.insert(id);
    }

    /// 额外排除一批题
    pub fn exclude_all(&mut self, ids: impl IntoIterator<Item = ProblemId>) {
        self.excluded.extend(ids);
    }

    pub fn excluded_count(&self) -> usize {
        self.excluded.len()
    }

    /// 题目当前是否可选
    pub fn is_eligible(&self, record: &ProgressRecord, id: ProblemId) -> bool {
        !record.is_completed(id) && !is_statically_excluded(id) && !self.excluded.contains(&id)
    }

    /// 选出一道可做的题
    ///
    /// # 参数
    /// - `record`: 当前进度
    /// - `rng`: 随机数源
    ///
    /// # 返回
    /// 抽样模式下 `max_attempts` 次都抽中不可选的题时返回 None，
    /// 即使还有未做的题；穷举模式只在确实没有可选题时返回 None
    pub fn select<R: Rng>(&self, record: &ProgressRecord, rng: &mut R) -> Option<ProblemId> {
        if self.max_problem == 0 {
            return None;
        }

        match self.mode {
            SelectionMode::Sampling => (0..self.max_attempts)
                .map(|_| rng.random_range(1..=self.max_problem))
                .find(|id| self.is_eligible(record, *id)),
            SelectionMode::Exhaustive => {
                let eligible: Vec<ProblemId> = (1..=self.max_problem)
                    .filter(|id| self.is_eligible(record, *id))
                    .collect();
                eligible.choose(rng).copied()
            }
        }
    }
}
