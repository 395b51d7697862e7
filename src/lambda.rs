use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use launchdarkly_blocks::domain::model::AppContext;
use launchdarkly_blocks::utils::logger;
use launchdarkly_blocks::utils::validation::Validate;
use launchdarkly_blocks::{
    BlockEngine, BlockInvocation, BlockRegistry, LambdaConfig, LogEmitter,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct Request {
    pub block: String,
    #[serde(default)]
    pub app: Option<AppContext>,
    #[serde(default)]
    pub inputs: Map<String, Value>,
}

#[derive(Serialize)]
pub struct Response {
    pub block: String,
    pub status: u16,
    pub output: Value,
}

async fn function_handler(
    engine: &BlockEngine<LogEmitter>,
    event: LambdaEvent<Request>,
) -> Result<Response, Error> {
    let Request { block, app, inputs } = event.payload;
    tracing::info!("🚀 Invoking block {} (request {})", block, event.context.request_id);

    let invocation = BlockInvocation { app, inputs };
    let outcome = engine.handle(&block, &invocation).await.map_err(|e| {
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        e
    })?;

    Ok(Response {
        block: outcome.block_id,
        status: outcome.status,
        output: outcome.output,
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env()?;
    config.validate()?;

    let registry = Arc::new(BlockRegistry::new());
    tracing::info!("Loaded {} blocks", registry.len());

    let engine = BlockEngine::from_config(registry, LogEmitter, &config)?;
    let engine = &engine;

    run(service_fn(move |event| async move { function_handler(engine, event).await })).await
}
