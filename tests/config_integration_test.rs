use anyhow::Result;
use httpmock::prelude::*;
use launchdarkly_blocks::utils::validation::Validate;
use launchdarkly_blocks::{
    AppConfig, BlockEngine, BlockError, BlockInvocation, BlockRegistry, MemoryEmitter, Settings,
    TomlConfig,
};
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;

/// TOML 設定的 API key 與 base URL 作為呼叫的預設值
#[tokio::test]
async fn test_engine_uses_toml_defaults() -> Result<()> {
    let server = MockServer::start_async().await;
    let temp_dir = TempDir::new()?;

    let config_content = format!(
        r#"
[launchdarkly]
api_key = "api-from-toml"
base_url = "{}"

[http]
timeout_seconds = 5
"#,
        server.base_url()
    );
    let config_path = temp_dir.path().join("ldblocks.toml");
    tokio::fs::write(&config_path, config_content).await?;

    let toml = TomlConfig::from_file(&config_path)?;
    toml.validate()?;
    let settings = Settings::default().merge_toml(&toml);

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/projects/web/environments/production")
                .header("Authorization", "api-from-toml");
            then.status(200)
                .json_body(json!({ "key": "production", "name": "Production" }));
        })
        .await;

    let engine = BlockEngine::from_config(
        Arc::new(BlockRegistry::new()),
        MemoryEmitter::new(),
        &settings,
    )?;
    let invocation =
        BlockInvocation::from_inputs(json!({ "projectKey": "web", "environmentKey": "production" }))
            .expect("object inputs");

    let outcome = engine.handle("get_environment", &invocation).await?;

    mock.assert_async().await;
    assert_eq!(outcome.output["name"], "Production");
    Ok(())
}

/// 呼叫自帶的 app 設定優先於預設值
#[tokio::test]
async fn test_invocation_app_config_overrides_defaults() -> Result<()> {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/members/me")
                .header("Authorization", "api-from-invocation");
            then.status(200).json_body(json!({ "_id": "me", "role": "admin" }));
        })
        .await;

    let settings = Settings::default()
        .with_api_key("api-default")
        .with_base_url("http://127.0.0.1:9");
    let engine = BlockEngine::from_config(
        Arc::new(BlockRegistry::new()),
        MemoryEmitter::new(),
        &settings,
    )?;

    let invocation = BlockInvocation::from_inputs(json!({ "id": "me" }))
        .expect("object inputs")
        .with_app_config(AppConfig::new("api-from-invocation", server.base_url()));

    engine.handle("get_member", &invocation).await?;

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_forward_nulls_from_toml() -> Result<()> {
    let server = MockServer::start_async().await;

    let toml = TomlConfig::from_toml_str(&format!(
        "[launchdarkly]\napi_key = \"api-k\"\nbase_url = \"{}\"\n\n[http]\nforward_nulls = true\n",
        server.base_url()
    ))?;
    let settings = Settings::default().merge_toml(&toml);

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v2/webhooks")
                .json_body(json!({
                    "url": "https://hooks.example.com/ld",
                    "sign": false,
                    "on": true,
                    "secret": null
                }));
            then.status(201).json_body(json!({ "_id": "hook-1" }));
        })
        .await;

    let engine = BlockEngine::from_config(
        Arc::new(BlockRegistry::new()),
        MemoryEmitter::new(),
        &settings,
    )?;
    let invocation = BlockInvocation::from_inputs(json!({
        "url": "https://hooks.example.com/ld",
        "sign": false,
        "on": true,
        "secret": null
    }))
    .expect("object inputs");

    engine.handle("post_webhook", &invocation).await?;

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_missing_api_key_everywhere() -> Result<()> {
    let engine = BlockEngine::from_config(
        Arc::new(BlockRegistry::new()),
        MemoryEmitter::new(),
        &Settings::default(),
    )?;

    let invocation = BlockInvocation::from_inputs(json!({})).expect("object inputs");
    let err = engine.handle("get_root", &invocation).await.unwrap_err();

    assert!(matches!(err, BlockError::MissingConfigError { .. }));
    Ok(())
}

/// 呼叫端只帶 apiKey 時，仍使用引擎設定的 base URL
#[tokio::test]
async fn test_invocation_key_only_keeps_default_base_url() -> Result<()> {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/projects/web")
                .header("Authorization", "api-other");
            then.status(200).json_body(json!({ "key": "web", "name": "Web" }));
        })
        .await;

    let settings = Settings::default()
        .with_api_key("api-default")
        .with_base_url(server.base_url());
    let engine = BlockEngine::from_config(
        Arc::new(BlockRegistry::new()),
        MemoryEmitter::new(),
        &settings,
    )?;
    let invocation: BlockInvocation = serde_json::from_value(json!({
        "app": { "config": { "apiKey": "api-other" } },
        "inputs": { "projectKey": "web" }
    }))?;

    let outcome = engine.handle("get_project", &invocation).await?;

    mock.assert_async().await;
    assert_eq!(outcome.output["name"], "Web");
    Ok(())
}
