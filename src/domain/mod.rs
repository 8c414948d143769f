// ==========================================
// 贷款欺诈审核系统 - 领域层
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 领域层不依赖仓储/引擎
// ==========================================

pub mod application;
pub mod types;

// 重导出
pub use application::{LoanApplication, NewApplication};
pub use types::ApplicationStatus;
