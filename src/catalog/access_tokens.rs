use super::{expiry, json_patch, schemas};
use crate::core::block::BlockDefinition;
use crate::domain::model::{FieldKind, HttpMethod, InputField};

const CATEGORY: &str = "access-tokens";

pub fn blocks() -> Vec<BlockDefinition> {
    vec![
        BlockDefinition::new("list_tokens", "List access tokens", HttpMethod::Get, "/api/v2/tokens")
            .category(CATEGORY)
            .description("Fetch a list of all access tokens")
            .inputs([
                InputField::query("showAll", FieldKind::Boolean)
                    .describe("If true, returns tokens for all members instead of only the caller"),
                InputField::query("limit", FieldKind::Integer),
                InputField::query("offset", FieldKind::Integer),
            ])
            .output(schemas::collection(schemas::access_token())),
        BlockDefinition::new("create_token", "Create access token", HttpMethod::Post, "/api/v2/tokens")
            .category(CATEGORY)
            .inputs([
                InputField::body("name", FieldKind::String).describe("A human-friendly name for the token"),
                InputField::body("description", FieldKind::String),
                InputField::body("role", FieldKind::String)
                    .describe("Built-in role for the token: reader, writer or admin"),
                InputField::body("customRoleIds", FieldKind::Array),
                InputField::body("inlineRole", FieldKind::Array)
                    .describe("Policy statements that define the token's permissions"),
                InputField::body("serviceToken", FieldKind::Boolean),
                InputField::body("defaultApiVersion", FieldKind::Integer),
            ])
            .output(schemas::access_token()),
        BlockDefinition::new("get_token", "Get access token", HttpMethod::Get, "/api/v2/tokens/{id}")
            .category(CATEGORY)
            .output(schemas::access_token()),
        BlockDefinition::new("patch_token", "Patch access token", HttpMethod::Patch, "/api/v2/tokens/{id}")
            .category(CATEGORY)
            .body_from(json_patch())
            .output(schemas::access_token()),
        BlockDefinition::new("delete_token", "Delete access token", HttpMethod::Delete, "/api/v2/tokens/{id}")
            .category(CATEGORY)
            .output(schemas::empty()),
        BlockDefinition::new(
            "reset_token",
            "Reset access token",
            HttpMethod::Post,
            "/api/v2/tokens/{id}/reset",
        )
        .category(CATEGORY)
        .description("Reset an access token's secret key with an optional expiry time for the old key")
        .input(expiry())
        .output(schemas::access_token()),
    ]
}
