// ==========================================
// 贷款欺诈审核系统 - API 层
// ==========================================
// 职责: 面向任意传输层（HTTP 长轮询/RPC/CLI）的业务接口
// 说明: 本层不感知具体协议，只暴露普通操作
// ==========================================

pub mod application_api;
pub mod config_api;
pub mod error;
pub mod poll_api;

// 重导出
pub use application_api::{ApplicationApi, ApplicationListResponse};
pub use config_api::ConfigApi;
pub use error::{ApiError, ApiResult};
pub use poll_api::{PollApi, PollOutcome};
