//! Pricing Server - 租车价格规则引擎
//!
//! # 架构概述
//!
//! - **定价引擎** (`pricing`): 条件评估、规则选择、价格计算 (纯函数)
//! - **报价** (`quote`): 车型目录、预订上下文、服务附加费
//! - **规则来源** (`db`): 内存 / JSON 文件规则提供者
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! pricing-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── pricing/       # 条件评估与价格计算
//! ├── quote/         # 租车报价
//! ├── db/            # 规则提供者
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志、校验
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod pricing;
pub mod quote;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use db::{InMemoryRuleProvider, JsonFileRuleProvider, PriceRuleProvider};
pub use pricing::{calculate_price, evaluate_condition, evaluate_condition_group, select_rules};
pub use quote::{QuoteOptions, RentalCatalog, quote_rental};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: 加载 .env，读取配置，初始化日志
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref(),
    );
    config
}
