// ==========================================
// 贷款欺诈审核系统 - 贷款申请 API
// ==========================================
// 职责: 申请列表/详情查询，供传输层包装
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::LoanApplication;
use crate::repository::ApplicationRepository;
use serde::Serialize;
use std::sync::Arc;

/// 申请列表响应
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationListResponse {
    pub applications: Vec<LoanApplication>,
    pub count: usize,
}

// ==========================================
// ApplicationApi - 贷款申请 API
// ==========================================
pub struct ApplicationApi {
    application_repo: Arc<ApplicationRepository>,
}

impl ApplicationApi {
    /// 创建新的 ApplicationApi 实例
    pub fn new(application_repo: Arc<ApplicationRepository>) -> Self {
        Self { application_repo }
    }

    /// 查询全部申请（按创建时间倒序）
    pub fn list_applications(&self) -> ApiResult<ApplicationListResponse> {
        let applications = self.application_repo.list_all()?;
        let count = applications.len();

        Ok(ApplicationListResponse {
            applications,
            count,
        })
    }

    /// 按 ID 查询申请详情
    pub fn get_application(&self, id: i64) -> ApiResult<LoanApplication> {
        let app = self.application_repo.get_by_id(id)?;
        Ok(app)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ApiError;
    use crate::domain::types::ApplicationStatus;
    use crate::domain::NewApplication;
    use rusqlite::Connection;
    use std::sync::Mutex;

    fn setup_api() -> (Arc<ApplicationRepository>, ApplicationApi) {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::configure_sqlite_connection(&conn).unwrap();
        crate::db::init_schema(&conn).unwrap();

        let repo = Arc::new(ApplicationRepository::new(Arc::new(Mutex::new(conn))));
        let api = ApplicationApi::new(repo.clone());
        (repo, api)
    }

    #[test]
    fn test_list_applications() {
        let (repo, api) = setup_api();

        repo.insert(&NewApplication {
            applicant_name: "Sarah Walker".to_string(),
            credit_score: 720,
            amount_requested: 8_000.0,
            risk_factor: 0.15,
            status: ApplicationStatus::Approved,
        })
        .unwrap();

        let response = api.list_applications().unwrap();
        assert_eq!(response.count, 1);
        assert_eq!(response.applications.len(), 1);
    }

    #[test]
    fn test_get_application_not_found() {
        let (_repo, api) = setup_api();

        let result = api.get_application(404);
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }
}
