// ==========================================
// 贷款欺诈审核系统 - 种子数据生成器
// ==========================================
// 用途: 空库启动时生成可信的假贷款申请数据
// 红线: 初始状态必须经由分类引擎判定（与重算同一策略出口）
// ==========================================

use crate::config::ThresholdStore;
use crate::domain::types::ApplicationStatus;
use crate::domain::NewApplication;
use crate::engine::classifier::classify;
use crate::repository::{ApplicationRepository, RepositoryResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// 默认种子数据量
pub const DEFAULT_SEED_COUNT: usize = 50;

// 姓名池（申请人姓名 = 名 + 姓）
const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda",
    "William", "Barbara", "David", "Elizabeth", "Richard", "Susan", "Joseph", "Jessica",
    "Thomas", "Sarah", "Charles", "Karen", "Christopher", "Nancy", "Daniel", "Lisa",
    "Matthew", "Betty", "Anthony", "Margaret", "Mark", "Sandra", "Donald", "Ashley",
    "Steven", "Kimberly", "Paul", "Emily", "Andrew", "Donna", "Joshua", "Michelle",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas",
    "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White",
    "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young",
    "Allen", "King", "Wright", "Scott", "Torres", "Nguyen", "Hill", "Flores",
];

// ==========================================
// Seeder - 种子数据生成器
// ==========================================
pub struct Seeder {
    application_repo: Arc<ApplicationRepository>,
    threshold_store: Arc<ThresholdStore>,
}

impl Seeder {
    /// 创建种子数据生成器
    pub fn new(
        application_repo: Arc<ApplicationRepository>,
        threshold_store: Arc<ThresholdStore>,
    ) -> Self {
        Self {
            application_repo,
            threshold_store,
        }
    }

    /// 填充种子数据（库非空则跳过）
    pub fn seed(&self, count: usize) -> RepositoryResult<usize> {
        let existing = self.application_repo.count()?;
        if existing > 0 {
            tracing::info!("数据库已有 {} 条申请，跳过种子数据", existing);
            return Ok(0);
        }

        let mut rng = StdRng::from_entropy();
        self.seed_n_with(&mut rng, count)
    }

    /// 以指定随机源生成 count 条申请（测试可传入固定种子保证可复现）
    pub fn seed_n_with(&self, rng: &mut StdRng, count: usize) -> RepositoryResult<usize> {
        let threshold = self.threshold_store.get();

        for _ in 0..count {
            let app = generate_fake_application(rng, threshold);
            self.application_repo.insert(&app)?;
        }

        tracing::info!("种子数据生成完成: {} 条申请", count);
        Ok(count)
    }
}

/// 生成一条假贷款申请
///
/// 初始状态通过分类引擎按当前阈值判定，保证与后续重算口径一致。
fn generate_fake_application(rng: &mut StdRng, threshold: f64) -> NewApplication {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];

    let credit_score: i32 = rng.gen_range(300..=850);
    let amount_requested: f64 = rng.gen_range(5_000..=100_000) as f64;

    let risk_factor = calculate_risk_factor(rng, credit_score, amount_requested);
    let status: ApplicationStatus = classify(risk_factor * 100.0, threshold);

    NewApplication {
        applicant_name: format!("{} {}", first, last),
        credit_score,
        amount_requested,
        risk_factor,
        status,
    }
}

/// 按信用评分与申请金额推导风险系数
///
/// # 规则
/// - 信用风险: 评分 300-850 线性反比（低分高风险）
/// - 金额风险: 金额占 10 万上限的比例
/// - 加权合成 (0.7 信用 + 0.3 金额)，再叠加 ±0.1 扰动
/// - 截断到 [0, 1]
fn calculate_risk_factor(rng: &mut StdRng, credit_score: i32, amount: f64) -> f64 {
    let credit_risk = 1.0 - ((credit_score - 300) as f64 / 550.0);
    let amount_risk = amount / 100_000.0;

    let mut total_risk = credit_risk * 0.7 + amount_risk * 0.3;
    total_risk += rng.gen_range(-0.1..0.1);

    total_risk.clamp(0.0, 1.0)
}
