use anyhow::Result;
use httpmock::prelude::*;
use launchdarkly_blocks::{
    AppConfig, BlockEngine, BlockError, BlockInvocation, BlockRegistry, MemoryEmitter, NullPolicy,
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

/// 未提供的選填欄位不會出現在 body；0、false、"" 會保留
#[tokio::test]
async fn test_optional_fields_absent_from_body() -> Result<()> {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v2/flags/web")
                .json_body(json!({
                    "name": "New checkout",
                    "key": "new-checkout",
                    "description": "",
                    "temporary": false
                }));
            then.status(201).json_body(json!({ "key": "new-checkout" }));
        })
        .await;

    let engine = engine()?;
    let inputs = json!({
        "projectKey": "web",
        "name": "New checkout",
        "key": "new-checkout",
        "description": "",
        "temporary": false
    });
    engine
        .handle("create_feature_flag", &invocation(&server, inputs))
        .await?;

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_null_optional_fields_follow_null_policy() -> Result<()> {
    let server = MockServer::start_async().await;

    let stripped = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v2/projects")
                .json_body(json!({ "name": "Web", "key": "web" }));
            then.status(201).json_body(json!({ "key": "web" }));
        })
        .await;

    let inputs = json!({ "name": "Web", "key": "web", "tags": null });
    engine()?
        .handle("create_project", &invocation(&server, inputs.clone()))
        .await?;
    stripped.assert_async().await;

    let forwarded = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v2/projects")
                .json_body(json!({ "name": "Web", "key": "web", "tags": null }));
            then.status(201).json_body(json!({ "key": "web" }));
        })
        .await;

    engine()?
        .with_null_policy(NullPolicy::Forward)
        .handle("create_project", &invocation(&server, inputs))
        .await?;
    forwarded.assert_async().await;

    Ok(())
}

/// 路徑參數依模板順序代入
#[tokio::test]
async fn test_path_params_substituted_in_order() -> Result<()> {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/flags/web/new-checkout");
            then.status(200).json_body(json!({ "key": "new-checkout" }));
        })
        .await;

    let inputs = json!({ "featureFlagKey": "new-checkout", "projectKey": "web" });
    engine()?
        .handle("get_feature_flag", &invocation(&server, inputs))
        .await?;

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_missing_path_param_sends_nothing() -> Result<()> {
    let server = MockServer::start_async().await;

    let catch_all = server
        .mock_async(|_when, then| {
            then.status(200).json_body(json!({}));
        })
        .await;

    let engine = engine()?;
    let err = engine
        .handle(
            "get_feature_flag",
            &invocation(&server, json!({ "projectKey": "web" })),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        BlockError::MissingFieldError { ref field, .. } if field == "featureFlagKey"
    ));
    catch_all.assert_hits_async(0).await;
    assert!(engine.emitter().is_empty());
    Ok(())
}

/// Authorization header 直接帶 API key，不加 Bearer 前綴
#[tokio::test]
async fn test_authorization_header_is_raw_key() -> Result<()> {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/caller-identity")
                .header("Authorization", API_KEY);
            then.status(200).json_body(json!({ "accountId": "acct-1" }));
        })
        .await;

    engine()?
        .handle("get_caller_identity", &invocation(&server, json!({})))
        .await?;

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_query_parameters_include_falsy_values() -> Result<()> {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/flags/web")
                .query_param("limit", "0")
                .query_param("archived", "false")
                .query_param("filter", "query:checkout");
            then.status(200)
                .json_body(json!({ "items": [], "totalCount": 0 }));
        })
        .await;

    let inputs = json!({
        "projectKey": "web",
        "limit": 0,
        "archived": false,
        "filter": "query:checkout"
    });
    engine()?
        .handle("list_feature_flags", &invocation(&server, inputs))
        .await?;

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_json_patch_body_is_sent_as_array() -> Result<()> {
    let server = MockServer::start_async().await;

    let patch = json!([{ "op": "replace", "path": "/name", "value": "Web (renamed)" }]);
    let mock = server
        .mock_async(|when, then| {
            when.method(PATCH)
                .path("/api/v2/projects/web")
                .header("Content-Type", "application/json")
                .json_body(patch.clone());
            then.status(200).json_body(json!({ "key": "web", "name": "Web (renamed)" }));
        })
        .await;

    let inputs = json!({ "projectKey": "web", "patch": patch });
    engine()?
        .handle("update_project", &invocation(&server, inputs))
        .await?;

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_semantic_patch_content_type() -> Result<()> {
    let server = MockServer::start_async().await;

    let instructions = json!([{ "kind": "turnFlagOn" }]);
    let mock = server
        .mock_async(|when, then| {
            when.method(PATCH)
                .path("/api/v2/flags/web/new-checkout")
                .header(
                    "Content-Type",
                    "application/json; domain-model=launchdarkly.semanticpatch",
                )
                .json_body(json!({
                    "environmentKey": "production",
                    "instructions": instructions.clone()
                }));
            then.status(200).json_body(json!({ "key": "new-checkout" }));
        })
        .await;

    let inputs = json!({
        "projectKey": "web",
        "featureFlagKey": "new-checkout",
        "environmentKey": "production",
        "instructions": instructions
    });
    engine()?
        .handle("update_feature_flag_semantic", &invocation(&server, inputs))
        .await?;

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_beta_blocks_send_api_version_header() -> Result<()> {
    let server = MockServer::start_async().await;

    let beta = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/flags/web/new-checkout/dependent-flags")
                .header("LD-API-Version", "beta");
            then.status(200).json_body(json!({ "items": [] }));
        })
        .await;

    let stable = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/projects/web")
                .header_missing("LD-API-Version");
            then.status(200).json_body(json!({ "key": "web" }));
        })
        .await;

    let engine = engine()?;
    engine
        .handle(
            "get_dependent_flags",
            &invocation(
                &server,
                json!({ "projectKey": "web", "featureFlagKey": "new-checkout" }),
            ),
        )
        .await?;
    engine
        .handle("get_project", &invocation(&server, json!({ "projectKey": "web" })))
        .await?;

    beta.assert_async().await;
    stable.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_wrong_input_kind_is_rejected_before_request() -> Result<()> {
    let server = MockServer::start_async().await;

    let catch_all = server
        .mock_async(|_when, then| {
            then.status(200).json_body(json!({}));
        })
        .await;

    let inputs = json!({ "projectKey": "web", "limit": "ten" });
    let err = engine()?
        .handle("list_feature_flags", &invocation(&server, inputs))
        .await
        .unwrap_err();

    assert!(matches!(err, BlockError::InvalidFieldError { ref field, .. } if field == "limit"));
    catch_all.assert_hits_async(0).await;
    Ok(())
}

/// "." 與 ".." 不能當作路徑參數，否則 DELETE 會打到上一層資源
#[tokio::test]
async fn test_dot_segment_path_param_sends_nothing() -> Result<()> {
    let server = MockServer::start_async().await;

    let catch_all = server
        .mock_async(|_when, then| {
            then.status(204);
        })
        .await;

    let engine = engine()?;
    for key in ["..", "."] {
        let err = engine
            .handle(
                "delete_feature_flag",
                &invocation(&server, json!({ "projectKey": "web", "featureFlagKey": key })),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            BlockError::InvalidFieldError { ref field, .. } if field == "featureFlagKey"
        ));
    }

    catch_all.assert_hits_async(0).await;
    assert!(engine.emitter().is_empty());
    Ok(())
}
