// ==========================================
// 贷款欺诈审核系统 - 风险分类引擎
// ==========================================
// 红线: 分类策略唯一出口，重算与种子数据共用
// ==========================================

use crate::domain::types::ApplicationStatus;

/// 复核档位系数：拒绝阈值的 70% 以上进入人工复核
pub const REVIEW_BAND_RATIO: f64 = 0.7;

/// 按阈值对风险百分比分类
///
/// # 参数
/// - risk_percentage: 风险百分比 (0-100 口径，调用方负责换算)
/// - threshold: 当前拒绝阈值 (百分比口径)
///
/// # 规则
/// - risk > threshold            → Rejected
/// - risk > threshold*0.7        → ReviewRequired
/// - 其余                        → Approved
///
/// 边界值落入低风险档：两处判定均为严格大于。
pub fn classify(risk_percentage: f64, threshold: f64) -> ApplicationStatus {
    if risk_percentage > threshold {
        ApplicationStatus::Rejected
    } else if risk_percentage > threshold * REVIEW_BAND_RATIO {
        ApplicationStatus::ReviewRequired
    } else {
        ApplicationStatus::Approved
    }
}
