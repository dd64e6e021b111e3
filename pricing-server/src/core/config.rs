/// 服务器配置 - 定价服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | RULES_FILE | data/price_rules.json | 价格规则文件 (JSON 数组) |
/// | LOG_LEVEL | info | 日志级别 / 过滤器 |
/// | LOG_JSON | false | JSON 格式日志 |
/// | LOG_DIR | (未设置) | 按天滚动的日志目录 |
/// | PRICING_ENFORCE_VALIDITY_WINDOW | false | 按 startDate/endDate 过滤规则 |
///
/// # 示例
///
/// ```ignore
/// RULES_FILE=/etc/pricing/rules.json HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 价格规则文件路径
    pub rules_file: String,
    /// 日志级别
    pub log_level: String,
    /// 是否输出 JSON 日志
    pub log_json: bool,
    /// 日志目录 (None 表示只输出到终端)
    pub log_dir: Option<String>,
    /// 报价时是否检查规则有效期
    pub enforce_validity_window: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 3000,
            environment: "development".into(),
            rules_file: "data/price_rules.json".into(),
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            enforce_validity_window: false,
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            http_port: env_parse("HTTP_PORT").unwrap_or(defaults.http_port),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            rules_file: std::env::var("RULES_FILE").unwrap_or(defaults.rules_file),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: env_parse("LOG_JSON").unwrap_or(defaults.log_json),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            enforce_validity_window: env_parse("PRICING_ENFORCE_VALIDITY_WINDOW")
                .unwrap_or(defaults.enforce_validity_window),
        }
    }
}
