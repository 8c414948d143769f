// ==========================================
// 贷款欺诈审核系统 - 引擎层
// ==========================================
// 职责: 业务规则（分类策略、状态重算）
// 红线: 引擎不直接持有连接，经仓储访问数据
// ==========================================

pub mod classifier;
pub mod recalc;

// 重导出
pub use classifier::{classify, REVIEW_BAND_RATIO};
pub use recalc::{RecalcEngine, RecalcSummary};
