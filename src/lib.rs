// ==========================================
// 贷款欺诈审核系统 - 核心库
// ==========================================
// 技术栈: Rust + Tokio + SQLite
// 系统定位: 决策支持后端 (阈值变更驱动重算与客户端刷新)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 阈值状态
pub mod config;

// 通知层 - 刷新信号扇出与变更编排
pub mod notify;

// 变更源层 - 外部配置推送接入
pub mod feed;

// 导入层 - 种子数据
pub mod importer;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - 进程装配
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::ApplicationStatus;

// 领域实体
pub use domain::{LoanApplication, NewApplication};

// 配置
pub use config::ThresholdStore;

// 引擎
pub use engine::{classify, RecalcEngine, RecalcSummary};

// 通知
pub use notify::{Broadcaster, ChangeCoordinator, RefreshListener};

// 变更源
pub use feed::{ConfigFeed, FeedHandle, ThresholdUpdate};

// API
pub use api::{ApplicationApi, ConfigApi, PollApi, PollOutcome};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "贷款欺诈审核系统";

// 数据库版本
pub const DB_VERSION: &str = "v0.1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
