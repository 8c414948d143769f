// ==========================================
// 贷款欺诈审核系统 - 贷款申请领域模型
// ==========================================
// 用途: 审核对象，状态由重算引擎单一维护
// ==========================================

use crate::domain::types::ApplicationStatus;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// LoanApplication - 贷款申请
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanApplication {
    pub id: i64,                       // 申请ID (自增，稳定)
    pub applicant_name: String,        // 申请人姓名
    pub credit_score: i32,             // 信用评分 (300-850)
    pub amount_requested: f64,         // 申请金额
    pub risk_factor: f64,              // 风险系数 (0.0-1.0)
    pub status: ApplicationStatus,     // 审核状态
    pub created_at: NaiveDateTime,     // 创建时间
}

impl LoanApplication {
    /// 风险百分比 (0-100)
    ///
    /// 分类引擎以百分比口径工作，换算在此统一完成。
    pub fn risk_percentage(&self) -> f64 {
        self.risk_factor * 100.0
    }
}

// ==========================================
// NewApplication - 待插入申请
// ==========================================
// 用途: 插入路径专用，id/created_at 由数据库生成
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewApplication {
    pub applicant_name: String,
    pub credit_score: i32,
    pub amount_requested: f64,
    pub risk_factor: f64,
    pub status: ApplicationStatus,
}
