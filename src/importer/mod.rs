// ==========================================
// 贷款欺诈审核系统 - 导入层
// ==========================================
// 职责: 种子数据生成与导入
// ==========================================

pub mod seeder;

// 重导出
pub use seeder::{Seeder, DEFAULT_SEED_COUNT};
