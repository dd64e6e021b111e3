use pricing_server::{Server, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Pricing server starting..."
    );

    // 2. 启动 HTTP 服务器 (规则在 Server::run 中加载)
    let server = Server::new(config);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
