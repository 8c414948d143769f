// ==========================================
// 贷款欺诈审核系统 - 配置变更源接入
// ==========================================
// 职责: 接入外部配置推送服务，驱动变更编排器
// 说明: 变更源以长活任务形式由进程持有，可在停机时取消；
//       其唯一副作用是调用 ChangeCoordinator::on_config_changed
// ==========================================

use crate::notify::ChangeCoordinator;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

// ==========================================
// ThresholdUpdate - 阈值推送载荷
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdUpdate {
    /// 新的拒绝阈值（百分比口径）
    pub fail_threshold: f64,
}

/// 阈值合法性校验（边界职责：非法值不进入核心）
///
/// 存储本身不限定范围，范围约束只在此边界生效。
pub fn is_valid_threshold(value: f64) -> bool {
    value.is_finite() && (0.0..=100.0).contains(&value)
}

// ==========================================
// ConfigFeed - 变更源 Trait
// ==========================================

/// 配置变更源
///
/// 外部推送服务的抽象：同一逻辑变更至多推送一次，
/// 推送与并发请求之间没有顺序保证。
#[async_trait]
pub trait ConfigFeed: Send + 'static {
    /// 拉取当前配置值（启动时调用一次；None 表示源端暂无配置）
    async fn fetch_current(&mut self) -> anyhow::Result<Option<ThresholdUpdate>>;

    /// 等待下一次配置推送（None 表示源端已关闭）
    async fn next_update(&mut self) -> Option<ThresholdUpdate>;
}

// ==========================================
// FeedHandle - 订阅任务句柄
// ==========================================
pub struct FeedHandle {
    shutdown_tx: watch::Sender<bool>,
    join_handle: JoinHandle<()>,
}

impl FeedHandle {
    /// 请求停机并等待订阅任务退出
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        if let Err(e) = self.join_handle.await {
            tracing::warn!("变更源任务退出异常: {}", e);
        }
    }
}

/// 启动变更源订阅任务
///
/// # 流程
/// 1. 启动时拉取一次当前配置并应用（失败则沿用默认阈值继续）
/// 2. 循环等待推送，逐条校验并交给编排器
/// 3. 收到停机信号或源端关闭时退出
///
/// 非法/越界的推送在本边界丢弃（记录日志），不会触达编排器。
pub fn spawn_feed_listener(
    mut feed: impl ConfigFeed,
    coordinator: Arc<ChangeCoordinator>,
) -> FeedHandle {
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let join_handle = tokio::spawn(async move {
        tracing::info!("变更源订阅任务启动");

        // 启动时拉取初始配置
        match feed.fetch_current().await {
            Ok(Some(update)) => apply_update(&coordinator, update),
            Ok(None) => tracing::info!("变更源暂无初始配置，沿用默认阈值"),
            Err(e) => tracing::warn!("初始配置拉取失败(沿用默认阈值): {}", e),
        }

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    tracing::info!("变更源订阅任务收到停机信号");
                    break;
                }
                maybe_update = feed.next_update() => {
                    match maybe_update {
                        Some(update) => apply_update(&coordinator, update),
                        None => {
                            tracing::info!("变更源已关闭，订阅任务退出");
                            break;
                        }
                    }
                }
            }
        }
    });

    FeedHandle {
        shutdown_tx,
        join_handle,
    }
}

/// 校验并应用一次推送
fn apply_update(coordinator: &ChangeCoordinator, update: ThresholdUpdate) {
    if !is_valid_threshold(update.fail_threshold) {
        tracing::warn!("丢弃非法阈值推送: {}", update.fail_threshold);
        return;
    }

    // 重算涉及阻塞数据库操作：在多线程运行时中转入阻塞上下文执行
    if let Ok(handle) = tokio::runtime::Handle::try_current() {
        if handle.runtime_flavor() == tokio::runtime::RuntimeFlavor::MultiThread {
            tokio::task::block_in_place(|| coordinator.on_config_changed(update.fail_threshold));
            return;
        }
    }
    coordinator.on_config_changed(update.fail_threshold);
}
