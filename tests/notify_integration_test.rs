// ==========================================
// 通知层集成测试
// ==========================================
// 测试范围:
// 1. 广播时序（先注册者可见，后注册者不可见）
// 2. 高并发注册/注销/广播下的集合一致性
// 3. 长轮询 API 的完整生命周期
// ==========================================


use fraud_check_backend::api::PollApi;
use fraud_check_backend::notify::Broadcaster;
use std::sync::Arc;
use std::time::Duration;
use test_helpers::{build_core, create_test_db, open_test_connection};

fn setup_poll_api() -> (tempfile::NamedTempFile, Arc<Broadcaster>, Arc<PollApi>) {
    let (temp_file, db_path) = create_test_db().expect("创建测试数据库失败");
    let conn = open_test_connection(&db_path).expect("打开数据库失败");
    let core = build_core(conn);

    let poll_api = Arc::new(PollApi::new(
        core.broadcaster.clone(),
        core.coordinator.clone(),
    ));
    (temp_file, core.broadcaster, poll_api)
}

// ==========================================
// 测试用例
// ==========================================

#[tokio::test(flavor = "multi_thread")]
async fn test_all_registered_waiters_observe_signal() {
    let (_temp, broadcaster, poll_api) = setup_poll_api();

    let mut waiters = Vec::new();
    for _ in 0..10 {
        let api = poll_api.clone();
        waiters.push(tokio::spawn(async move {
            api.wait_for_refresh(Duration::from_secs(5)).await
        }));
    }

    // 等全部注册完成再广播
    for _ in 0..200 {
        if broadcaster.listener_count() == 10 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(broadcaster.listener_count(), 10);

    broadcaster.notify_all();

    for waiter in waiters {
        let outcome = waiter.await.unwrap();
        assert!(outcome.refreshed);
    }

    // 全部等待结束后集合清空
    assert_eq!(broadcaster.listener_count(), 0);
}

#[tokio::test]
async fn test_waiter_registered_after_notify_misses_signal() {
    let (_temp, broadcaster, poll_api) = setup_poll_api();

    // 广播在注册之前完成：该信号不可见
    broadcaster.notify_all();

    let outcome = poll_api.wait_for_refresh(Duration::from_millis(30)).await;
    assert!(!outcome.refreshed);
}

#[tokio::test]
async fn test_timeout_returns_not_refreshed_and_releases_slot() {
    let (_temp, broadcaster, poll_api) = setup_poll_api();

    let outcome = poll_api.wait_for_refresh(Duration::from_millis(30)).await;

    assert!(!outcome.refreshed);
    assert_eq!(broadcaster.listener_count(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_churn_keeps_registry_consistent() {
    let (_temp, broadcaster, poll_api) = setup_poll_api();

    let mut handles = Vec::new();

    // 大量短超时轮询（注册+超时+注销循环）
    for _ in 0..16 {
        let api = poll_api.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..20 {
                let _ = api.wait_for_refresh(Duration::from_millis(2)).await;
            }
        }));
    }

    // 并发持续广播
    for _ in 0..4 {
        let b = broadcaster.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..200 {
                b.notify_all();
                tokio::task::yield_now().await;
            }
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    // 高频注册/注销/广播后无泄漏
    assert_eq!(broadcaster.listener_count(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_repeated_notify_does_not_accumulate() {
    let (_temp, broadcaster, poll_api) = setup_poll_api();

    let api = poll_api.clone();
    let waiter = tokio::spawn(async move { api.wait_for_refresh(Duration::from_secs(5)).await });

    for _ in 0..200 {
        if broadcaster.listener_count() == 1 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    // 连续多次广播：单槽语义下多余信号被丢弃而非排队
    broadcaster.notify_all();
    broadcaster.notify_all();
    broadcaster.notify_all();

    let first = waiter.await.unwrap();
    assert!(first.refreshed);

    // 此时已无监听者，旧信号不会遗留给后续注册者
    let second = poll_api.wait_for_refresh(Duration::from_millis(50)).await;
    assert!(!second.refreshed);
}
