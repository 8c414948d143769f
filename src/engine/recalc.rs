// ==========================================
// 贷款欺诈审核系统 - 状态重算引擎
// ==========================================
// 职责: 按当前阈值重算全部申请的审核状态，仅回写发生变化的记录
// 红线: 单次重算使用单一阈值快照
// ==========================================

use crate::config::ThresholdStore;
use crate::engine::classifier::classify;
use crate::repository::{ApplicationRepository, RepositoryResult};
use std::sync::Arc;
use uuid::Uuid;

// ==========================================
// RecalcSummary - 重算结果摘要
// ==========================================
#[derive(Debug, Clone)]
pub struct RecalcSummary {
    /// 本次重算 ID（日志关联用）
    pub run_id: String,
    /// 本次重算使用的阈值快照
    pub threshold: f64,
    /// 扫描记录数
    pub scanned: usize,
    /// 实际回写记录数
    pub updated: usize,
    /// 回写失败记录数（已记录日志，不中断重算）
    pub failed: usize,
}

// ==========================================
// RecalcEngine - 状态重算引擎
// ==========================================
pub struct RecalcEngine {
    application_repo: Arc<ApplicationRepository>,
    threshold_store: Arc<ThresholdStore>,
}

impl RecalcEngine {
    /// 创建新的 RecalcEngine 实例
    pub fn new(
        application_repo: Arc<ApplicationRepository>,
        threshold_store: Arc<ThresholdStore>,
    ) -> Self {
        Self {
            application_repo,
            threshold_store,
        }
    }

    /// 全量重算
    ///
    /// # 流程
    /// 1. 读取一次阈值快照（重算期间的后续阈值变更由其自身的重算处理）
    /// 2. 列出全部申请（列表失败对本次重算是致命的，直接返回错误）
    /// 3. 逐条分类，状态变化才回写；单条回写失败记录日志后继续
    ///
    /// 跨记录不构成事务：中途失败会留下部分更新，由下一次重算收敛。
    pub fn run(&self) -> RepositoryResult<RecalcSummary> {
        let run_id = Uuid::new_v4().to_string();
        let threshold = self.threshold_store.get();

        tracing::info!("开始状态重算: run_id={}, threshold={}%", run_id, threshold);

        let applications = self.application_repo.list_all()?;

        let mut updated = 0usize;
        let mut failed = 0usize;

        for app in &applications {
            let target = classify(app.risk_percentage(), threshold);

            if target == app.status {
                continue;
            }

            match self.application_repo.update_status(app.id, target) {
                Ok(()) => {
                    tracing::debug!(
                        "状态变更: id={}, {} -> {}",
                        app.id,
                        app.status,
                        target
                    );
                    updated += 1;
                }
                Err(e) => {
                    tracing::warn!("状态回写失败(跳过): id={}, err={}", app.id, e);
                    failed += 1;
                }
            }
        }

        let summary = RecalcSummary {
            run_id,
            threshold,
            scanned: applications.len(),
            updated,
            failed,
        };

        tracing::info!(
            "状态重算完成: run_id={}, scanned={}, updated={}, failed={}",
            summary.run_id,
            summary.scanned,
            summary.updated,
            summary.failed
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ApplicationStatus;
    use crate::domain::NewApplication;
    use rusqlite::Connection;
    use std::sync::Mutex;

    fn setup_repo() -> Arc<ApplicationRepository> {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::configure_sqlite_connection(&conn).unwrap();
        crate::db::init_schema(&conn).unwrap();
        Arc::new(ApplicationRepository::new(Arc::new(Mutex::new(conn))))
    }

    fn insert_app(repo: &ApplicationRepository, risk_factor: f64, status: ApplicationStatus) -> i64 {
        repo.insert(&NewApplication {
            applicant_name: "Test Applicant".to_string(),
            credit_score: 650,
            amount_requested: 15_000.0,
            risk_factor,
            status,
        })
        .unwrap()
    }

    #[test]
    fn test_run_flips_changed_statuses_only() {
        let repo = setup_repo();
        let store = Arc::new(ThresholdStore::with_value(70.0));
        let engine = RecalcEngine::new(repo.clone(), store.clone());

        // 0.5 → 50%：70 阈值下应为复核；初始状态错置为通过
        let flip_id = insert_app(&repo, 0.5, ApplicationStatus::Approved);
        // 0.2 → 20%：已经是通过，不应回写
        let keep_id = insert_app(&repo, 0.2, ApplicationStatus::Approved);

        let summary = engine.run().unwrap();
        assert_eq!(summary.scanned, 2);
        assert_eq!(summary.updated, 1);
        assert_eq!(summary.failed, 0);

        assert_eq!(
            repo.get_by_id(flip_id).unwrap().status,
            ApplicationStatus::ReviewRequired
        );
        assert_eq!(
            repo.get_by_id(keep_id).unwrap().status,
            ApplicationStatus::Approved
        );
    }

    #[test]
    fn test_run_idempotent_without_changes() {
        let repo = setup_repo();
        let store = Arc::new(ThresholdStore::with_value(70.0));
        let engine = RecalcEngine::new(repo.clone(), store);

        insert_app(&repo, 0.95, ApplicationStatus::Approved);
        insert_app(&repo, 0.55, ApplicationStatus::Approved);
        insert_app(&repo, 0.10, ApplicationStatus::Approved);

        let first = engine.run().unwrap();
        assert_eq!(first.updated, 2); // 0.95→拒绝, 0.55→复核

        // 阈值与数据均未变化：第二次重算零回写
        let second = engine.run().unwrap();
        assert_eq!(second.scanned, 3);
        assert_eq!(second.updated, 0);
    }

    #[test]
    fn test_run_uses_threshold_snapshot() {
        let repo = setup_repo();
        let store = Arc::new(ThresholdStore::with_value(40.0));
        let engine = RecalcEngine::new(repo.clone(), store.clone());

        let id = insert_app(&repo, 0.5, ApplicationStatus::Approved);

        let summary = engine.run().unwrap();
        assert_eq!(summary.threshold, 40.0);
        // 50 > 40 → 拒绝
        assert_eq!(
            repo.get_by_id(id).unwrap().status,
            ApplicationStatus::Rejected
        );
    }
}
