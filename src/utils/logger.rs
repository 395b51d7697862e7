use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// 函式庫與兩個執行檔各自是獨立的 target
const DEFAULT_FILTER: &str = "warn,launchdarkly_blocks=info,ldblocks=info,lambda=info";
const VERBOSE_FILTER: &str = "info,launchdarkly_blocks=debug,ldblocks=debug,lambda=debug";

pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // 日誌寫到 stderr，stdout 保留給輸出的事件
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_lambda_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(), // Lambda uses JSON format for better CloudWatch integration
        )
        .init();
}
