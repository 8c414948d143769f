// ==========================================
// 贷款欺诈审核系统 - 配置层
// ==========================================
// 职责: 进程内共享决策配置
// ==========================================

pub mod threshold_store;

// 重导出
pub use threshold_store::{ThresholdStore, DEFAULT_FAIL_THRESHOLD};
