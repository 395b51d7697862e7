use anyhow::Result;
use httpmock::prelude::*;
use launchdarkly_blocks::utils::error::ErrorSeverity;
use launchdarkly_blocks::{
    AppConfig, BlockEngine, BlockError, BlockInvocation, BlockRegistry, MemoryEmitter,
};
use serde_json::{json, Value};
use std::sync::Arc;

const API_KEY: &str = "api-0000-test";

fn engine() -> Result<BlockEngine<MemoryEmitter>> {
    Ok(BlockEngine::new(
        Arc::new(BlockRegistry::new()),
        MemoryEmitter::new(),
    )?)
}

fn invocation(server: &MockServer, inputs: Value) -> BlockInvocation {
    BlockInvocation::from_inputs(inputs)
        .expect("inputs must be an object")
        .with_app_config(AppConfig::new(API_KEY, server.base_url()))
}

/// 成功回應的 JSON 原封不動地送出
#[tokio::test]
async fn test_success_body_emitted_unchanged() -> Result<()> {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v2/flags/web/abc");
            then.status(200).json_body(json!({ "key": "abc" }));
        })
        .await;

    let engine = engine()?;
    let outcome = engine
        .handle(
            "get_feature_flag",
            &invocation(&server, json!({ "projectKey": "web", "featureFlagKey": "abc" })),
        )
        .await?;

    assert_eq!(outcome.status, 200);
    assert_eq!(outcome.output, json!({ "key": "abc" }));

    let events = engine.emitter().events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].block_id, "get_feature_flag");
    assert_eq!(events[0].payload, json!({ "key": "abc" }));
    Ok(())
}

#[tokio::test]
async fn test_api_error_carries_status_and_body() -> Result<()> {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v2/flags/web/missing");
            then.status(404)
                .body(r#"{"code":"not_found","message":"Unknown resource"}"#);
        })
        .await;

    let engine = engine()?;
    let err = engine
        .handle(
            "get_feature_flag",
            &invocation(&server, json!({ "projectKey": "web", "featureFlagKey": "missing" })),
        )
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(404));
    let message = err.to_string();
    assert!(message.contains("404"), "{}", message);
    assert!(message.contains("not_found"), "{}", message);
    assert!(engine.emitter().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_rate_limit_is_retryable() -> Result<()> {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v2/projects");
            then.status(429).body("Too many requests");
        })
        .await;

    let err = engine()?
        .handle("list_projects", &invocation(&server, json!({})))
        .await
        .unwrap_err();

    assert!(matches!(err, BlockError::ApiError { status: 429, .. }));
    assert_eq!(err.severity(), ErrorSeverity::Medium);
    Ok(())
}

#[tokio::test]
async fn test_no_content_emits_empty_object() -> Result<()> {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/v2/flags/web/old-flag");
            then.status(204);
        })
        .await;

    let engine = engine()?;
    let outcome = engine
        .handle(
            "delete_feature_flag",
            &invocation(&server, json!({ "projectKey": "web", "featureFlagKey": "old-flag" })),
        )
        .await?;

    mock.assert_async().await;
    assert_eq!(outcome.status, 204);
    assert_eq!(engine.emitter().payloads(), vec![json!({})]);
    Ok(())
}

#[tokio::test]
async fn test_non_json_body_is_wrapped() -> Result<()> {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v2");
            then.status(200).body("ok");
        })
        .await;

    let outcome = engine()?
        .handle("get_root", &invocation(&server, json!({})))
        .await?;

    assert_eq!(outcome.output, json!({ "body": "ok" }));
    Ok(())
}

/// 同樣的 GET 呼叫兩次得到同樣的輸出
#[tokio::test]
async fn test_get_is_idempotent() -> Result<()> {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v2/projects/web");
            then.status(200)
                .json_body(json!({ "key": "web", "name": "Web", "tags": ["frontend"] }));
        })
        .await;

    let engine = engine()?;
    let inputs = invocation(&server, json!({ "projectKey": "web" }));
    let first = engine.handle("get_project", &inputs).await?;
    let second = engine.handle("get_project", &inputs).await?;

    mock.assert_hits_async(2).await;
    assert_eq!(first.output, second.output);

    let payloads = engine.emitter().payloads();
    assert_eq!(payloads.len(), 2);
    assert_eq!(payloads[0], payloads[1]);
    Ok(())
}

/// 建立後再讀取，回應的欄位與送出的一致
#[tokio::test]
async fn test_create_then_get_roundtrip() -> Result<()> {
    let server = MockServer::start_async().await;

    let segment = json!({ "key": "beta-users", "name": "Beta users", "tags": ["beta"] });

    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v2/segments/web/production")
                .json_body(segment.clone());
            then.status(201).json_body(segment.clone());
        })
        .await;

    let get = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/segments/web/production/beta-users");
            then.status(200).json_body(segment.clone());
        })
        .await;

    let engine = engine()?;
    let created = engine
        .handle(
            "create_segment",
            &invocation(
                &server,
                json!({
                    "projectKey": "web",
                    "environmentKey": "production",
                    "key": "beta-users",
                    "name": "Beta users",
                    "tags": ["beta"]
                }),
            ),
        )
        .await?;

    let fetched = engine
        .handle(
            "get_segment",
            &invocation(
                &server,
                json!({
                    "projectKey": "web",
                    "environmentKey": "production",
                    "segmentKey": "beta-users"
                }),
            ),
        )
        .await?;

    create.assert_async().await;
    get.assert_async().await;
    assert_eq!(created.output, fetched.output);
    assert_eq!(fetched.output["name"], "Beta users");
    Ok(())
}
