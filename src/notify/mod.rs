// ==========================================
// 贷款欺诈审核系统 - 通知层
// ==========================================
// 职责: 刷新信号扇出 (Broadcaster) 与变更编排 (ChangeCoordinator)
// 说明: 本层是全系统唯一存在并发协调与时序保证的位置
// ==========================================

pub mod broadcaster;
pub mod coordinator;

// 重导出
pub use broadcaster::{Broadcaster, RefreshListener};
pub use coordinator::ChangeCoordinator;
