// ==========================================
// 贷款欺诈审核系统 - 拒绝阈值存储
// ==========================================
// 职责: 持有进程级唯一的拒绝阈值，提供原子读写
// 红线: 阈值读写只经过本组件，其他组件不得缓存超过一次重算的生命周期
// ==========================================

use std::sync::RwLock;

/// 默认拒绝阈值（百分比口径）
pub const DEFAULT_FAIL_THRESHOLD: f64 = 70.0;

// ==========================================
// ThresholdStore - 阈值存储
// ==========================================
// 读多写少：get 仅持有读锁完成一次值拷贝
pub struct ThresholdStore {
    value: RwLock<f64>,
}

impl ThresholdStore {
    /// 创建阈值存储（使用默认阈值）
    pub fn new() -> Self {
        Self::with_value(DEFAULT_FAIL_THRESHOLD)
    }

    /// 以指定初始值创建阈值存储
    pub fn with_value(value: f64) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// 读取当前阈值
    ///
    /// 锁中毒时取回内部值继续使用：阈值为 Copy 标量，写入不存在半完成状态。
    pub fn get(&self) -> f64 {
        let guard = self
            .value
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard
    }

    /// 覆盖当前阈值
    ///
    /// 不保留历史，仅最新值有效。
    pub fn set(&self, value: f64) {
        let mut guard = self
            .value
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = value;
    }
}

impl Default for ThresholdStore {
    fn default() -> Self {
        Self::new()
    }
}
