//! 单题尝试流程 - 流程层
//!
//! 核心职责：定义"一道题"的完整处理流程
//!
//! 流程顺序：
//! 1. 下载题解页面
//! 2. 解析题目链接 → 解析 Java 代码
//! 3. 提交到判题平台 → 判断是否受理
//!
//! 任一步失败都返回跳过原因，由编排层记录

use tracing::{debug, info, warn};

use crate::clients::{is_blocked, JudgeClient, ReferenceClient};
use crate::error::SkipReason;
use crate::models::SubmissionOutcome;
use crate::services::SolutionExtractor;
use crate::utils::logging::truncate_text;
use crate::workflow::attempt_ctx::AttemptCtx;

/// 单题尝试结果
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptResult {
    /// 平台受理了提交
    Accepted(SubmissionOutcome),
    /// 跳过（附原因）
    Skipped(SkipReason),
}

/// 单题尝试流程
///
/// - 编排 下载 → 解析 → 提交
/// - 决定每一步失败时的跳过原因
/// - 不读写进度，不写跳过日志
pub struct AttemptFlow {
    reference: ReferenceClient,
    extractor: SolutionExtractor,
    judge: JudgeClient,
    verbose_logging: bool,
}

impl AttemptFlow {
    /// 创建新的尝试流程
    pub fn new(
        reference: ReferenceClient,
        extractor: SolutionExtractor,
        judge: JudgeClient,
        verbose_logging: bool,
    ) -> Self {
        Self {
            reference,
            extractor,
            judge,
            verbose_logging,
        }
    }

    /// 判题平台客户端（用于启动时同步已通过题目）
    pub fn judge(&self) -> &JudgeClient {
        &self.judge
    }

    pub async fn run(&self, ctx: &AttemptCtx) -> AttemptResult {
        // ========== 步骤 1: 下载题解页面 ==========
        let Some(html) = self.reference.fetch(ctx.problem_id).await else {
            return AttemptResult::Skipped(SkipReason::PageNotFound);
        };
        debug!("{} 题解页面大小: {} 字节", ctx, html.len());

        // ========== 步骤 2: 解析链接与代码 ==========
        let extraction = self.extractor.extract(&html);
        let Some(problem_url) = extraction.problem_url else {
            return AttemptResult::Skipped(SkipReason::MissingUrl);
        };
        let Some(code) = extraction.code else {
            return AttemptResult::Skipped(SkipReason::MissingSolution);
        };

        self.log_code(ctx, &problem_url, &code);

        // ========== 步骤 3: 提交 ==========
        info!("{} 📤 正在提交到判题平台...", ctx);
        let outcome = self.judge.submit(&problem_url, &code).await;

        if outcome.is_accepted() {
            info!("{} ✅ 提交成功", ctx);
            return AttemptResult::Accepted(outcome);
        }

        if is_blocked(&outcome) {
            warn!("{} 🚫 疑似被拦截或限流 (状态码 {})", ctx, outcome.status);
            return AttemptResult::Skipped(SkipReason::Blocked {
                status: outcome.status,
                reason: outcome.failure_reason(),
            });
        }

        warn!("{} ❌ 提交失败 (状态码 {})", ctx, outcome.status);
        warn!("{} 详细返回: {}", ctx, outcome.body.pretty());
        AttemptResult::Skipped(SkipReason::SubmissionFailed {
            reason: outcome.failure_reason(),
        })
    }

    // ========== 日志辅助方法 ==========

    fn log_code(&self, ctx: &AttemptCtx, problem_url: &str, code: &str) {
        info!("{} 题目链接: {}", ctx, problem_url);
        if self.verbose_logging {
            info!("{} 📄 Java 题解:\n{}", ctx, code);
        } else {
            info!(
                "{} 📄 Java 题解 ({} 行): {}",
                ctx,
                code.lines().count(),
                truncate_text(code.lines().next().unwrap_or_default(), 60)
            );
        }
    }
}
