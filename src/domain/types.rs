// ==========================================
// 贷款欺诈审核系统 - 领域类型定义
// ==========================================
// 红线: 状态集合封闭，仅三档
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 审核状态 (Application Status)
// ==========================================
// 序列化格式: snake_case (与数据库存储一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Approved,       // 通过
    ReviewRequired, // 需人工复核
    Rejected,       // 拒绝
}

impl ApplicationStatus {
    /// 转换为存储字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::ReviewRequired => "review_required",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(ApplicationStatus::Approved),
            "review_required" => Ok(ApplicationStatus::ReviewRequired),
            "rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(format!("未知的审核状态: {}", other)),
        }
    }
}
