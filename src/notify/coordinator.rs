// ==========================================
// 贷款欺诈审核系统 - 变更编排器
// ==========================================
// 职责: 串接 阈值写入 → 状态重算 → 客户端通知 的唯一编排点
// 红线: 通知必须发生在本次重算返回之后（成功或失败均通知）
// ==========================================

use crate::config::ThresholdStore;
use crate::engine::RecalcEngine;
use crate::notify::Broadcaster;
use std::sync::Arc;

// ==========================================
// ChangeCoordinator - 变更编排器
// ==========================================
// 无内部状态，不排队重叠变更：并发到达的变更各自走完整流程，
// 重算读到哪个阈值快照取决于时序（接受的最终一致性权衡）。
pub struct ChangeCoordinator {
    threshold_store: Arc<ThresholdStore>,
    recalc_engine: Arc<RecalcEngine>,
    broadcaster: Arc<Broadcaster>,
}

impl ChangeCoordinator {
    /// 创建新的 ChangeCoordinator 实例
    pub fn new(
        threshold_store: Arc<ThresholdStore>,
        recalc_engine: Arc<RecalcEngine>,
        broadcaster: Arc<Broadcaster>,
    ) -> Self {
        Self {
            threshold_store,
            recalc_engine,
            broadcaster,
        }
    }

    /// 配置变更入口
    ///
    /// # 流程
    /// 1. 写入新阈值
    /// 2. 全量重算（失败记录日志，不重试，不阻断通知——客户端刷新后
    ///    看到的是当前已落库的状态）
    /// 3. 通知全部在线监听者
    pub fn on_config_changed(&self, value: f64) {
        tracing::info!("收到配置变更: fail_threshold={}%", value);

        self.threshold_store.set(value);

        if let Err(e) = self.recalc_engine.run() {
            tracing::error!("状态重算失败(仍将通知客户端刷新): {}", e);
        }

        let delivered = self.broadcaster.notify_all();
        tracing::info!("配置变更处理完成: 已通知 {} 个监听者", delivered);
    }

    /// 手动刷新入口
    ///
    /// 仅触发通知：不改阈值、不重算。
    pub fn trigger_manual_refresh(&self) {
        let delivered = self.broadcaster.notify_all();
        tracing::info!("手动刷新: 已通知 {} 个监听者", delivered);
    }
}
