// ==========================================
// 贷款欺诈审核系统 - 贷款申请仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// 存储: loan_applications 表
// ==========================================

use crate::domain::types::ApplicationStatus;
use crate::domain::{LoanApplication, NewApplication};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// ApplicationRepository - 贷款申请仓储
// ==========================================
pub struct ApplicationRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ApplicationRepository {
    /// 从共享连接创建仓储实例
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 获取连接锁
    fn lock_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(format!("锁获取失败: {}", e)))
    }

    /// 行映射: loan_applications -> LoanApplication
    fn map_row(row: &Row<'_>) -> rusqlite::Result<LoanApplication> {
        let status_raw: String = row.get(5)?;
        let status: ApplicationStatus = status_raw.parse().map_err(|msg: String| {
            rusqlite::Error::FromSqlConversionFailure(
                5,
                rusqlite::types::Type::Text,
                msg.into(),
            )
        })?;

        Ok(LoanApplication {
            id: row.get(0)?,
            applicant_name: row.get(1)?,
            credit_score: row.get(2)?,
            amount_requested: row.get(3)?,
            risk_factor: row.get(4)?,
            status,
            created_at: row.get(6)?,
        })
    }

    /// 查询全部申请（按创建时间倒序）
    pub fn list_all(&self) -> RepositoryResult<Vec<LoanApplication>> {
        let conn = self.lock_conn()?;

        let mut stmt = conn.prepare(
            "SELECT id, applicant_name, credit_score, amount_requested, risk_factor, status, created_at
             FROM loan_applications
             ORDER BY created_at DESC, id DESC",
        )?;

        let rows = stmt.query_map([], Self::map_row)?;

        let mut applications = Vec::new();
        for row in rows {
            applications.push(row?);
        }

        Ok(applications)
    }

    /// 按 ID 查询申请
    pub fn get_by_id(&self, id: i64) -> RepositoryResult<LoanApplication> {
        let conn = self.lock_conn()?;

        let result = conn.query_row(
            "SELECT id, applicant_name, credit_score, amount_requested, risk_factor, status, created_at
             FROM loan_applications
             WHERE id = ?1",
            params![id],
            Self::map_row,
        );

        match result {
            Ok(app) => Ok(app),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(RepositoryError::NotFound {
                entity: "LoanApplication".to_string(),
                id: id.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// 插入新申请，返回生成的 ID
    pub fn insert(&self, app: &NewApplication) -> RepositoryResult<i64> {
        if app.applicant_name.trim().is_empty() {
            return Err(RepositoryError::FieldValueError {
                field: "applicant_name".to_string(),
                message: "申请人姓名不能为空".to_string(),
            });
        }

        let conn = self.lock_conn()?;

        conn.execute(
            "INSERT INTO loan_applications (applicant_name, credit_score, amount_requested, risk_factor, status)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                app.applicant_name,
                app.credit_score,
                app.amount_requested,
                app.risk_factor,
                app.status.as_str(),
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// 更新申请的审核状态
    ///
    /// 仅状态字段可变更；其余字段在插入后视为只读。
    pub fn update_status(&self, id: i64, status: ApplicationStatus) -> RepositoryResult<()> {
        let conn = self.lock_conn()?;

        let affected = conn.execute(
            "UPDATE loan_applications SET status = ?1 WHERE id = ?2",
            params![status.as_str(), id],
        )?;

        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "LoanApplication".to_string(),
                id: id.to_string(),
            });
        }

        Ok(())
    }

    /// 统计申请总数
    pub fn count(&self) -> RepositoryResult<i64> {
        let conn = self.lock_conn()?;

        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM loan_applications", [], |row| row.get(0))?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_db() -> Arc<Mutex<Connection>> {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::configure_sqlite_connection(&conn).unwrap();
        crate::db::init_schema(&conn).unwrap();
        Arc::new(Mutex::new(conn))
    }

    fn sample_application(name: &str, risk_factor: f64) -> NewApplication {
        NewApplication {
            applicant_name: name.to_string(),
            credit_score: 650,
            amount_requested: 20_000.0,
            risk_factor,
            status: ApplicationStatus::Approved,
        }
    }

    #[test]
    fn test_insert_and_list() {
        let repo = ApplicationRepository::new(setup_test_db());

        let id = repo.insert(&sample_application("James Smith", 0.4)).unwrap();
        assert!(id > 0);

        let apps = repo.list_all().unwrap();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].applicant_name, "James Smith");
        assert_eq!(apps[0].status, ApplicationStatus::Approved);
    }

    #[test]
    fn test_insert_rejects_empty_name() {
        let repo = ApplicationRepository::new(setup_test_db());

        let result = repo.insert(&sample_application("  ", 0.4));
        assert!(matches!(
            result,
            Err(RepositoryError::FieldValueError { .. })
        ));
    }

    #[test]
    fn test_update_status() {
        let repo = ApplicationRepository::new(setup_test_db());

        let id = repo.insert(&sample_application("Mary Johnson", 0.8)).unwrap();
        repo.update_status(id, ApplicationStatus::Rejected).unwrap();

        let app = repo.get_by_id(id).unwrap();
        assert_eq!(app.status, ApplicationStatus::Rejected);
    }

    #[test]
    fn test_update_status_not_found() {
        let repo = ApplicationRepository::new(setup_test_db());

        let result = repo.update_status(9999, ApplicationStatus::Rejected);
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[test]
    fn test_count() {
        let repo = ApplicationRepository::new(setup_test_db());
        assert_eq!(repo.count().unwrap(), 0);

        repo.insert(&sample_application("John Brown", 0.2)).unwrap();
        repo.insert(&sample_application("Linda Davis", 0.6)).unwrap();
        assert_eq!(repo.count().unwrap(), 2);
    }
}
