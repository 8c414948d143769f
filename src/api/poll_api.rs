// ==========================================
// 贷款欺诈审核系统 - 长轮询 API
// ==========================================
// 职责: 注册-等待-注销 的完整轮询生命周期 + 手动刷新触发
// 说明: 等待被取消（调用方 Future 被丢弃）时，句柄析构自动注销
// ==========================================

use crate::notify::{Broadcaster, ChangeCoordinator};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// 一次轮询的结果
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PollOutcome {
    /// true: 收到刷新信号；false: 超时未收到
    pub refreshed: bool,
}

// ==========================================
// PollApi - 长轮询 API
// ==========================================
pub struct PollApi {
    broadcaster: Arc<Broadcaster>,
    coordinator: Arc<ChangeCoordinator>,
}

impl PollApi {
    /// 创建新的 PollApi 实例
    pub fn new(broadcaster: Arc<Broadcaster>, coordinator: Arc<ChangeCoordinator>) -> Self {
        Self {
            broadcaster,
            coordinator,
        }
    }

    /// 等待下一次刷新信号
    ///
    /// # 参数
    /// - timeout: 调用方给定的最长等待时间
    ///
    /// # 返回
    /// - PollOutcome { refreshed: true }: 等到了刷新信号
    /// - PollOutcome { refreshed: false }: 超时
    ///
    /// 无论结局如何，监听者槽位在返回前释放，不会在集合中残留。
    pub async fn wait_for_refresh(&self, timeout: Duration) -> PollOutcome {
        let mut listener = self.broadcaster.register();

        let refreshed = listener.wait(timeout).await;

        self.broadcaster.unregister(&listener);

        PollOutcome { refreshed }
    }

    /// 手动触发刷新（测试/运维用）
    ///
    /// 只广播信号，不改配置、不重算。
    pub fn trigger_manual_refresh(&self) {
        tracing::info!("手动触发刷新");
        self.coordinator.trigger_manual_refresh();
    }
}
