// ==========================================
// 贷款欺诈审核系统 - 刷新信号广播器
// ==========================================
// 职责: 维护在线监听者集合，向全部监听者做尽力而为的信号投递
// 红线: 投递永不阻塞、永不排队——单槽信号，槽满即丢弃
// ==========================================

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::mpsc;

/// 监听者集合（监听者句柄与广播器共享，句柄析构时自行摘除）
type ListenerMap = Arc<Mutex<HashMap<u64, mpsc::Sender<()>>>>;

// ==========================================
// Broadcaster - 刷新信号广播器
// ==========================================
pub struct Broadcaster {
    listeners: ListenerMap,
    next_id: AtomicU64,
}

impl Broadcaster {
    /// 创建广播器
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(Mutex::new(HashMap::new())),
            next_id: AtomicU64::new(1),
        }
    }

    /// 获取监听者集合锁
    ///
    /// 锁中毒时取回内部集合继续使用：集合操作均为插入/删除，无半完成状态。
    fn lock_listeners(&self) -> MutexGuard<'_, HashMap<u64, mpsc::Sender<()>>> {
        self.listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// 注册新监听者，返回等待句柄
    ///
    /// 信号槽容量固定为 1：消费者未取走的重复信号被丢弃而非排队。
    /// 本方法永不阻塞。
    pub fn register(&self) -> RefreshListener {
        let (tx, rx) = mpsc::channel(1);
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        self.lock_listeners().insert(id, tx);

        tracing::debug!("监听者注册: id={}", id);

        RefreshListener {
            id,
            rx,
            listeners: Arc::clone(&self.listeners),
        }
    }

    /// 注销监听者
    ///
    /// 幂等：重复注销或句柄不在集合中均为无操作。
    /// 摘除发送端后，尚在等待的句柄会观察到通道关闭并按未刷新返回。
    pub fn unregister(&self, listener: &RefreshListener) {
        let removed = self.lock_listeners().remove(&listener.id).is_some();
        if removed {
            tracing::debug!("监听者注销: id={}", listener.id);
        }
    }

    /// 向全部在线监听者投递一次刷新信号
    ///
    /// 对每个监听者执行 try_send：槽已满则丢弃本次信号（对方已有待取信号），
    /// 通道已关闭则跳过。返回实际投递数。
    pub fn notify_all(&self) -> usize {
        let listeners = self.lock_listeners();

        let mut delivered = 0usize;
        for (id, tx) in listeners.iter() {
            match tx.try_send(()) {
                Ok(()) => delivered += 1,
                Err(mpsc::error::TrySendError::Full(())) => {
                    tracing::trace!("信号槽已满，丢弃: id={}", id);
                }
                Err(mpsc::error::TrySendError::Closed(())) => {
                    tracing::trace!("通道已关闭，跳过: id={}", id);
                }
            }
        }

        tracing::debug!("刷新信号投递: total={}, delivered={}", listeners.len(), delivered);
        delivered
    }

    /// 当前在线监听者数量
    pub fn listener_count(&self) -> usize {
        self.lock_listeners().len()
    }
}

impl Default for Broadcaster {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// RefreshListener - 监听者等待句柄
// ==========================================
// 生命周期: 注册时创建，等待结束（收到信号/超时/取消）后销毁，不复用
pub struct RefreshListener {
    id: u64,
    rx: mpsc::Receiver<()>,
    listeners: ListenerMap,
}

impl RefreshListener {
    /// 在句柄上等待刷新信号
    ///
    /// # 返回
    /// - true: 收到刷新信号
    /// - false: 超时或通道已被注销关闭
    ///
    /// 信号在槽中持有：注册后、调用 wait 前到达的信号不会丢失。
    pub async fn wait(&mut self, timeout: Duration) -> bool {
        match tokio::time::timeout(timeout, self.rx.recv()).await {
            Ok(Some(())) => true,
            Ok(None) => false,
            Err(_) => false,
        }
    }

    /// 监听者 ID（日志用）
    pub fn id(&self) -> u64 {
        self.id
    }
}

// 句柄析构即注销：等待被取消（上游请求终止）时不泄漏集合条目
impl Drop for RefreshListener {
    fn drop(&mut self) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.remove(&self.id);
        }
    }
}
