/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 同时处理的报告数量
    pub max_concurrent_reports: usize,
    /// 拉取报告的超时时间（秒）
    pub fetch_timeout_secs: u64,
    /// 超时 / 5xx 时的最大重试次数
    pub fetch_max_retries: u32,
    /// 请求使用的 User-Agent
    pub fetch_user_agent: String,
    /// JSON 结果输出目录
    pub output_dir: String,
    /// 输出日志文件
    pub output_log_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 自定义计分方案（TOML），为空则使用默认方案
    pub scoring_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_concurrent_reports: 4,
            fetch_timeout_secs: 10,
            fetch_max_retries: 2,
            fetch_user_agent:
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:89.0) Gecko/20100101 Firefox/89.0"
                    .to_string(),
            output_dir: "output_json".to_string(),
            output_log_file: "output.txt".to_string(),
            verbose_logging: false,
            scoring_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            max_concurrent_reports: std::env::var("MAX_CONCURRENT_REPORTS").ok().and_then(|v| v.parse().ok()).filter(|n| *n > 0).unwrap_or(default.max_concurrent_reports),
            fetch_timeout_secs: std::env::var("FETCH_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.fetch_timeout_secs),
            fetch_max_retries: std::env::var("FETCH_MAX_RETRIES").ok().and_then(|v| v.parse().ok()).unwrap_or(default.fetch_max_retries),
            fetch_user_agent: std::env::var("FETCH_USER_AGENT").unwrap_or(default.fetch_user_agent),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(default.output_dir),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            scoring_file: std::env::var("SCORING_FILE").ok().filter(|v| !v.is_empty()),
        }
    }
}
