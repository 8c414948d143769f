// ==========================================
// 贷款欺诈审核系统 - 主入口
// ==========================================
// 技术栈: Rust + Tokio + SQLite
// 系统定位: 决策支持后端
// ==========================================

use fraud_check_backend::app::{get_default_db_path, AppState};
use fraud_check_backend::importer;
use fraud_check_backend::logging;

#[tokio::main]
async fn main() {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 决策支持后端", fraud_check_backend::APP_NAME);
    tracing::info!("系统版本: {}", fraud_check_backend::VERSION);
    tracing::info!("==================================================");

    // 获取数据库路径
    let db_path = get_default_db_path();
    tracing::info!("使用数据库: {}", db_path);

    // 创建AppState
    let app_state = match AppState::new(db_path) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("无法初始化AppState: {}", e);
            std::process::exit(1);
        }
    };

    // 空库时填充种子数据
    match app_state
        .seeder
        .seed(importer::DEFAULT_SEED_COUNT)
    {
        Ok(0) => {}
        Ok(n) => tracing::info!("已生成 {} 条种子申请", n),
        Err(e) => {
            tracing::error!("种子数据生成失败: {}", e);
            std::process::exit(1);
        }
    }

    tracing::info!(
        "当前拒绝阈值: {}%",
        app_state.config_api.get_current_threshold()
    );

    // 配置推送服务接入点：部署环境由运维注入具体 ConfigFeed 实现
    // （见 feed::spawn_feed_listener）；未配置时仅支持手动刷新。
    tracing::warn!("未配置外部变更源，阈值保持默认值，可通过手动刷新接口触发通知");

    tracing::info!("核心就绪，等待传输层接入 (Ctrl-C 退出)");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("等待退出信号失败: {}", e);
    }

    tracing::info!("进程退出");
}
