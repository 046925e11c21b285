//! 运行编排器 - 编排层
//!
//! ## 职责
//!
//! 1. **初始化**：解析凭据、构建客户端、读取进度、同步已通过题目
//! 2. **选题循环**：选题 → 单题流程 → 记录结果，跳过时换一道题继续
//! 3. **持久化**：每记录一次结果就写回进度文件
//! 4. **终止条件**：提交成功一次、无题可选、被拦截次数过多、尝试次数达到上限

use crate::clients::{JudgeClient, ReferenceClient};
use crate::config::Config;
use crate::error::SkipReason;
use crate::infrastructure::HttpExecutor;
use crate::models::{ProblemId, ProgressRecord};
use crate::services::{CandidateSelector, ProgressStore, SkipWriter, SolutionExtractor};
use crate::utils::logging::{log_attempt_start, log_startup};
use crate::workflow::{AttemptCtx, AttemptFlow, AttemptResult};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info, warn};

/// 本次运行结束的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// 成功提交了一道题
    Submitted(ProblemId),
    /// 没有可选的题目
    NoCandidate,
    /// 被拦截次数达到上限
    TooManyBlocks,
    /// 尝试次数达到上限
    AttemptLimit,
}

/// 运行统计
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub attempts: usize,
    pub skipped: usize,
    pub blocked: usize,
    pub stop: StopReason,
}

impl RunSummary {
    pub fn submitted(&self) -> Option<ProblemId> {
        match self.stop {
            StopReason::Submitted(id) => Some(id),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct RunStats {
    attempts: usize,
    skipped: usize,
    blocked: usize,
}

impl RunStats {
    fn finish(self, stop: StopReason) -> RunSummary {
        RunSummary {
            attempts: self.attempts,
            skipped: self.skipped,
            blocked: self.blocked,
            stop,
        }
    }
}

/// 应用主结构
pub struct App {
    config: Config,
    store: ProgressStore,
    record: ProgressRecord,
    selector: CandidateSelector,
    flow: AttemptFlow,
    skip_writer: SkipWriter,
    rng: StdRng,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        Self::initialize_with_rng(config, StdRng::from_os_rng()).await
    }

    /// 使用指定的随机数源初始化应用
    pub async fn initialize_with_rng(config: Config, rng: StdRng) -> Result<Self> {
        let credentials = config.credentials()?;

        let executor = HttpExecutor::new().context("无法创建 HTTP 客户端")?;
        let judge = JudgeClient::new(executor.clone(), &config, &credentials)?;
        let reference = ReferenceClient::new(executor, &config);
        let flow = AttemptFlow::new(
            reference,
            SolutionExtractor::new(),
            judge,
            config.verbose_logging,
        );

        // 进度文件损坏时直接终止，不覆盖原文件
        let store = ProgressStore::new(&config.progress_file);
        let record = store.load()?;

        let mut selector = CandidateSelector::from_config(&config);
        if config.sync_solved {
            sync_solved(&flow, &mut selector).await;
        }

        log_startup(&config, &record);

        Ok(Self {
            skip_writer: SkipWriter::with_path(&config.skip_file),
            config,
            store,
            record,
            selector,
            flow,
            rng,
        })
    }

    /// 当前进度
    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    /// 运行应用主逻辑
    ///
    /// 一直换题尝试，直到一道题提交成功，或无题可选 / 达到上限
    pub async fn run(&mut self) -> Result<RunSummary> {
        let mut stats = RunStats::default();

        loop {
            if stats.attempts >= self.config.max_total_attempts {
                warn!("⚠️ 已尝试 {} 道题，达到上限，结束本次运行", stats.attempts);
                return Ok(stats.finish(StopReason::AttemptLimit));
            }

            let Some(problem_id) = self.selector.select(&self.record, &mut self.rng) else {
                info!("没有可做的新题目，结束本次运行");
                return Ok(stats.finish(StopReason::NoCandidate));
            };

            stats.attempts += 1;
            // 本次运行内不再选中同一道题
            self.selector.exclude(problem_id);

            let ctx = AttemptCtx::new(problem_id, stats.attempts);
            log_attempt_start(&ctx);

            match self.flow.run(&ctx).await {
                AttemptResult::Accepted(_) => {
                    self.commit(problem_id, true)?;
                    return Ok(stats.finish(StopReason::Submitted(problem_id)));
                }
                AttemptResult::Skipped(reason) => {
                    stats.skipped += 1;
                    let blocked = matches!(reason, SkipReason::Blocked { .. });

                    if let Err(e) = self.skip_writer.write(problem_id, &reason) {
                        error!("{} 写入跳过日志失败: {:#}", ctx, e);
                    }
                    self.commit(problem_id, false)?;

                    if blocked {
                        stats.blocked += 1;
                        warn!(
                            "🚫 被拦截次数: {}/{}",
                            stats.blocked, self.config.max_block_rejections
                        );
                        if stats.blocked >= self.config.max_block_rejections {
                            error!("❗ 多次被拦截或限流，请稍后再试或更新登录凭据");
                            return Ok(stats.finish(StopReason::TooManyBlocks));
                        }
                    }
                }
            }
        }
    }

    /// 记录结果并立即写回进度文件
    fn commit(&mut self, problem_id: ProblemId, succeeded: bool) -> Result<()> {
        self.record.record(problem_id, succeeded);
        self.store
            .save(&self.record)
            .with_context(|| format!("无法保存进度 (题目 #{})", problem_id))?;
        Ok(())
    }
}

/// 同步平台上已通过的题目，失败时仅记录警告
async fn sync_solved(flow: &AttemptFlow, selector: &mut CandidateSelector) {
    info!("🔄 正在同步平台上已通过的题目...");
    match flow.judge().fetch_solved_ids().await {
        Ok(ids) => {
            let solved = ids.len();
            selector.exclude_all(ids);
            info!(
                "✓ 平台上已通过 {} 道题，本次运行将跳过 (排除集合共 {} 道)",
                solved,
                selector.excluded_count()
            );
        }
        Err(e) => warn!("⚠️ 同步已通过题目失败，继续运行: {:#}", e),
    }
}
