// ==========================================
// 贷款欺诈审核系统 - 配置查询 API
// ==========================================
// 职责: 暴露当前生效的决策配置
// ==========================================

use crate::config::ThresholdStore;
use std::sync::Arc;

// ==========================================
// ConfigApi - 配置查询 API
// ==========================================
pub struct ConfigApi {
    threshold_store: Arc<ThresholdStore>,
}

impl ConfigApi {
    /// 创建新的 ConfigApi 实例
    pub fn new(threshold_store: Arc<ThresholdStore>) -> Self {
        Self { threshold_store }
    }

    /// 查询当前拒绝阈值（百分比口径）
    pub fn get_current_threshold(&self) -> f64 {
        self.threshold_store.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_FAIL_THRESHOLD;

    #[test]
    fn test_get_current_threshold() {
        let store = Arc::new(ThresholdStore::new());
        let api = ConfigApi::new(store.clone());

        assert_eq!(api.get_current_threshold(), DEFAULT_FAIL_THRESHOLD);

        store.set(55.0);
        assert_eq!(api.get_current_threshold(), 55.0);
    }
}
