// ==========================================
// 贷款欺诈审核系统 - 应用层
// ==========================================
// 职责: 进程装配，连接传输层与核心组件
// ==========================================

pub mod state;

// 重导出
pub use state::{get_default_db_path, AppState};
