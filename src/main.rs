use anyhow::Result;
use exam_report_scorer::utils::logging;
use exam_report_scorer::{App, Config};
use tokio::io::AsyncReadExt;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(config.verbose_logging);

    let sources: Vec<String> = std::env::args().skip(1).collect();
    let app = App::initialize(config).await?;

    if sources.is_empty() {
        // 无参数：从 stdin 读取一个 {"url": ...} 请求
        let mut body = String::new();
        tokio::io::stdin().read_to_string(&mut body).await?;

        let response = app.request_handler().handle(&body).await;
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let stats = app.run(sources).await?;
    if stats.failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}
