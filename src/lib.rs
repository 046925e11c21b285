//! # LeetCode Autosubmit
//!
//! 从 walkccc 题解站抓取 Java 题解并代为提交到 LeetCode 的自动化工具。
//! 每次运行最多成功提交一道题，进度保存在本地 JSON 文件中，多次运行逐步推进。
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（HTTP 连接池），只暴露能力
//! - `HttpExecutor` - 唯一的 client owner，提供 GET / POST JSON 能力
//!
//! ### ② 业务能力层（Clients / Services）
//! - `clients/` - 与外部站点交互
//!   - `ReferenceClient` - 下载题解页面
//!   - `JudgeClient` - 查询题目 id、提交代码、同步已通过题目
//! - `services/` - 描述"我能做什么"，不关心流程
//!   - `CandidateSelector` - 选题能力
//!   - `SolutionExtractor` - 解析题解页面能力
//!   - `ProgressStore` - 读写进度文件能力
//!   - `SkipWriter` - 写 skipped.log 能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一道题"的完整处理流程
//! - `AttemptCtx` - 上下文封装（题号 + 第几次尝试）
//! - `AttemptFlow` - 流程编排（下载 → 解析 → 提交）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/run_orchestrator` - 选题循环、记录进度、终止条件
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::{Config, Credentials, SelectionMode};
pub use error::{ConfigError, SkipReason, StoreError};
pub use infrastructure::HttpExecutor;
pub use models::{Extraction, ProblemId, ProgressRecord, ResponseBody, SubmissionOutcome};
pub use orchestrator::{App, RunSummary, StopReason};
pub use workflow::{AttemptCtx, AttemptFlow, AttemptResult};
