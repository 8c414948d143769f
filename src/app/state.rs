// ==========================================
// 贷款欺诈审核系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use rusqlite::Connection;
use std::sync::{Arc, Mutex};

use crate::api::{ApplicationApi, ConfigApi, PollApi};
use crate::config::ThresholdStore;
use crate::engine::RecalcEngine;
use crate::importer::Seeder;
use crate::notify::{Broadcaster, ChangeCoordinator};
use crate::repository::ApplicationRepository;

/// 应用状态
///
/// 包含所有API实例和共享资源；
/// 进程启动时构造一次，进程结束时随之销毁（无环境级全局变量）。
pub struct AppState {
    /// 数据库路径
    pub db_path: String,

    /// 贷款申请API
    pub application_api: Arc<ApplicationApi>,

    /// 配置查询API
    pub config_api: Arc<ConfigApi>,

    /// 长轮询API
    pub poll_api: Arc<PollApi>,

    /// 变更编排器（变更源订阅任务的回调目标）
    pub coordinator: Arc<ChangeCoordinator>,

    /// 刷新信号广播器
    pub broadcaster: Arc<Broadcaster>,

    /// 阈值存储
    pub threshold_store: Arc<ThresholdStore>,

    /// 种子数据生成器
    pub seeder: Arc<Seeder>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 打开共享数据库连接并初始化 schema
    /// 2. 初始化 Repository / Engine / 通知组件
    /// 3. 创建所有API实例
    pub fn new(db_path: String) -> Result<Self, String> {
        tracing::info!("初始化AppState，数据库路径: {}", db_path);

        // 创建数据库连接（共享连接）
        let conn = crate::db::open_sqlite_connection(&db_path)
            .map_err(|e| format!("无法打开数据库: {}", e))?;
        crate::db::init_schema(&conn).map_err(|e| format!("无法初始化数据库表: {}", e))?;
        let conn = Arc::new(Mutex::new(conn));

        Self::from_connection(db_path, conn)
    }

    /// 从已有连接装配（测试可传入内存库）
    pub fn from_connection(
        db_path: String,
        conn: Arc<Mutex<Connection>>,
    ) -> Result<Self, String> {
        // ==========================================
        // Repository 层
        // ==========================================
        let application_repo = Arc::new(ApplicationRepository::new(conn));

        // ==========================================
        // 配置与引擎
        // ==========================================
        let threshold_store = Arc::new(ThresholdStore::new());
        let recalc_engine = Arc::new(RecalcEngine::new(
            application_repo.clone(),
            threshold_store.clone(),
        ));

        // ==========================================
        // 通知组件
        // ==========================================
        let broadcaster = Arc::new(Broadcaster::new());
        let coordinator = Arc::new(ChangeCoordinator::new(
            threshold_store.clone(),
            recalc_engine,
            broadcaster.clone(),
        ));

        // ==========================================
        // API 层
        // ==========================================
        let application_api = Arc::new(ApplicationApi::new(application_repo.clone()));
        let config_api = Arc::new(ConfigApi::new(threshold_store.clone()));
        let poll_api = Arc::new(PollApi::new(broadcaster.clone(), coordinator.clone()));

        let seeder = Arc::new(Seeder::new(application_repo, threshold_store.clone()));

        tracing::info!("AppState装配完成");

        Ok(Self {
            db_path,
            application_api,
            config_api,
            poll_api,
            coordinator,
            broadcaster,
            threshold_store,
            seeder,
        })
    }
}

/// 获取默认数据库路径
pub fn get_default_db_path() -> String {
    use std::path::PathBuf;

    // 允许通过环境变量显式指定 DB 路径（便于调试/测试/CI）
    if let Ok(path) = std::env::var("FRAUD_CHECK_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    // 默认回退值；能拿到用户数据目录时覆盖
    let mut path = PathBuf::from("./fraud_check_backend.db");

    if let Some(data_dir) = dirs::data_dir() {
        // 开发环境使用独立目录，避免污染生产数据
        #[cfg(debug_assertions)]
        {
            path = data_dir.join("fraud-check-backend-dev");
        }

        #[cfg(not(debug_assertions))]
        {
            path = data_dir.join("fraud-check-backend");
        }

        std::fs::create_dir_all(&path).ok();
        path = path.join("fraud_check_backend.db");
    }

    path.to_string_lossy().to_string()
}
