use crate::core::api::{build_http_client, LaunchDarklyClient, NullPolicy, DEFAULT_TIMEOUT_SECONDS};
use crate::core::registry::BlockRegistry;
use crate::domain::model::{AppConfig, BlockInvocation, BlockOutcome};
use crate::domain::ports::{ConfigProvider, EventEmitter};
use crate::utils::error::{BlockError, Result};
use chrono::Utc;
use reqwest::Client;
use std::sync::Arc;
use std::time::Instant;

/// 宿主呼叫的入口：找出 block、執行請求、把結果送到 emitter
pub struct BlockEngine<E: EventEmitter> {
    registry: Arc<BlockRegistry>,
    http: Client,
    emitter: E,
    default_config: Option<AppConfig>,
    null_policy: NullPolicy,
}

impl<E: EventEmitter> BlockEngine<E> {
    pub fn new(registry: Arc<BlockRegistry>, emitter: E) -> Result<Self> {
        Ok(Self {
            registry,
            http: build_http_client(DEFAULT_TIMEOUT_SECONDS)?,
            emitter,
            default_config: None,
            null_policy: NullPolicy::default(),
        })
    }

    /// 由設定檔建立，設定中的 API key 與 base URL 作為預設值
    pub fn from_config<C: ConfigProvider>(
        registry: Arc<BlockRegistry>,
        emitter: E,
        config: &C,
    ) -> Result<Self> {
        let default_config = if config.api_key().is_empty() {
            None
        } else {
            Some(AppConfig::new(config.api_key(), config.base_url()))
        };

        Ok(Self {
            registry,
            http: build_http_client(config.timeout_seconds())?,
            emitter,
            default_config,
            null_policy: NullPolicy::from_forward_nulls(config.forward_nulls()),
        })
    }

    pub fn with_default_config(mut self, config: AppConfig) -> Self {
        self.default_config = Some(config);
        self
    }

    pub fn with_null_policy(mut self, null_policy: NullPolicy) -> Self {
        self.null_policy = null_policy;
        self
    }

    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    pub async fn handle(&self, block_id: &str, invocation: &BlockInvocation) -> Result<BlockOutcome> {
        let block = self
            .registry
            .get(block_id)
            .ok_or_else(|| BlockError::UnknownBlockError {
                id: block_id.to_string(),
            })?;

        let app_config = invocation
            .app_config()
            .map(|config| config.with_fallback(self.default_config.as_ref()))
            .or_else(|| self.default_config.clone())
            .ok_or_else(|| BlockError::MissingConfigError {
                field: "app.config.apiKey".to_string(),
            })?;
        let client = LaunchDarklyClient::new(self.http.clone(), &app_config)?;

        let started_at = Utc::now();
        let start = Instant::now();

        let response = match block
            .execute(&client, &invocation.inputs, self.null_policy)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("❌ {} failed: {}", block_id, e);
                return Err(e);
            }
        };

        self.emitter.emit(block_id, &response.body).await?;

        let duration = start.elapsed();
        tracing::info!(
            "✅ {} completed with status {} in {:?}",
            block_id,
            response.status,
            duration
        );

        Ok(BlockOutcome {
            block_id: block_id.to_string(),
            status: response.status,
            output: response.body,
            started_at,
            duration,
        })
    }
}
