//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责一次运行的完整调度，是整个系统的"指挥中心"。
//!
//! ### `run_orchestrator` - 运行编排器
//! - 管理应用生命周期（初始化、运行）
//! - 持有进度（ProgressRecord）并负责写回
//! - 选题、换题、写跳过日志
//! - 输出运行统计
//!
//! ## 层次关系
//!
//! ```text
//! run_orchestrator (选题循环)
//!     ↓
//! workflow::AttemptFlow (处理单道题)
//!     ↓
//! services / clients (能力层：选题 / 解析 / 存储 / 请求)
//!     ↓
//! infrastructure (基础设施：HttpExecutor)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单次提交**：一次运行最多成功提交一道题
//! 2. **立即持久化**：每记录一次结果就写回进度
//! 3. **向下依赖**：编排层 → workflow → services → infrastructure

pub mod run_orchestrator;

pub use run_orchestrator::{App, RunSummary, StopReason};
