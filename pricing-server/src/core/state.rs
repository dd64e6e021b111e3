use std::sync::Arc;

use crate::core::{Config, Result, ServerError};
use crate::db::{JsonFileRuleProvider, PriceRuleProvider};
use crate::quote::{QuoteOptions, RentalCatalog};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求 clone 一份的成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Arc<Config> | 配置项 (不可变) |
/// | rules | Arc<dyn PriceRuleProvider> | 价格规则来源 (只读) |
/// | catalog | Arc<RentalCatalog> | 车型 / 附加项 / 服务目录 |
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub rules: Arc<dyn PriceRuleProvider>,
    pub catalog: Arc<RentalCatalog>,
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("rules", &"<PriceRuleProvider>")
            .field("catalog", &self.catalog.car_models.len())
            .finish()
    }
}

impl ServerState {
    /// 使用现有组件创建状态 (测试常用)
    pub fn new(config: Config, rules: Arc<dyn PriceRuleProvider>, catalog: RentalCatalog) -> Self {
        Self {
            config: Arc::new(config),
            rules,
            catalog: Arc::new(catalog),
        }
    }

    /// 根据配置初始化: 从 RULES_FILE 读取规则，使用默认车型目录
    pub async fn initialize(config: &Config) -> Result<Self> {
        if config.rules_file.trim().is_empty() {
            return Err(ServerError::Config("RULES_FILE must not be empty".into()));
        }

        let provider = JsonFileRuleProvider::open(&config.rules_file).await?;
        Ok(Self::new(
            config.clone(),
            Arc::new(provider),
            RentalCatalog::default(),
        ))
    }

    /// 报价选项 (来自配置)
    pub fn quote_options(&self) -> QuoteOptions {
        QuoteOptions {
            enforce_validity_window: self.config.enforce_validity_window,
        }
    }
}
