use clap::Parser;
use launchdarkly_blocks::config::cli::{read_inputs, Command};
use launchdarkly_blocks::utils::error::{BlockError, ErrorSeverity};
use launchdarkly_blocks::utils::logger;
use launchdarkly_blocks::{BlockEngine, BlockInvocation, BlockRegistry, CliConfig, StdoutEmitter};
use serde_json::json;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config.command);

    if let Err(e) = execute(&config).await {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        // 輸出用戶友好的錯誤信息
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 1,
            ErrorSeverity::Medium => 2, // 可重試
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn execute(config: &CliConfig) -> Result<(), BlockError> {
    let registry = Arc::new(BlockRegistry::new());

    match &config.command {
        Command::List { category } => {
            let blocks = match category {
                Some(category) => registry.by_category(category),
                None => registry
                    .list()
                    .into_iter()
                    .filter_map(|id| registry.get(id))
                    .collect(),
            };

            if blocks.is_empty() {
                return Err(BlockError::InvalidFieldError {
                    field: "category".to_string(),
                    reason: format!(
                        "No blocks found. Known categories: {}",
                        registry.categories().join(", ")
                    ),
                });
            }

            for block in blocks {
                let beta = if block.beta { " (beta)" } else { "" };
                println!("{:<48} {:<6} {}{}", block.id, block.method, block.path, beta);
            }
        }
        Command::Describe { block } => {
            let definition = registry.get(block).ok_or_else(|| BlockError::UnknownBlockError {
                id: block.clone(),
            })?;

            let description = json!({
                "id": definition.id,
                "name": definition.name,
                "category": definition.category,
                "description": definition.description,
                "method": definition.method,
                "path": definition.path.as_str(),
                "beta": definition.beta,
                "contentType": definition.content_type.header_value(),
                "inputSchema": definition.input_schema(),
                "outputSchema": definition.output_schema,
            });
            let rendered = if config.pretty {
                serde_json::to_string_pretty(&description)?
            } else {
                serde_json::to_string(&description)?
            };
            println!("{}", rendered);
        }
        Command::Run {
            block,
            input,
            input_file,
        } => {
            let settings = config.settings()?;
            tracing::debug!("Resolved settings: {:?}", settings);

            let inputs = read_inputs(input.as_deref(), input_file.as_ref())?;
            let invocation =
                BlockInvocation::from_inputs(inputs).ok_or_else(|| BlockError::InvalidFieldError {
                    field: "inputs".to_string(),
                    reason: "Inputs must be a JSON object".to_string(),
                })?;

            let engine =
                BlockEngine::from_config(registry, StdoutEmitter::new(config.pretty), &settings)?;
            let outcome = engine.handle(block, &invocation).await?;

            tracing::info!(
                "📊 {} returned HTTP {} in {:?}",
                outcome.block_id,
                outcome.status,
                outcome.duration
            );
        }
    }

    Ok(())
}
