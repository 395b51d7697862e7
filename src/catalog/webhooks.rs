use super::{json_patch, schemas, tags};
use crate::core::block::BlockDefinition;
use crate::domain::model::{FieldKind, HttpMethod, InputField};

const CATEGORY: &str = "webhooks";

pub fn blocks() -> Vec<BlockDefinition> {
    vec![
        BlockDefinition::new("get_all_webhooks", "List webhooks", HttpMethod::Get, "/api/v2/webhooks")
            .category(CATEGORY)
            .output(schemas::collection(schemas::webhook())),
        BlockDefinition::new("post_webhook", "Create webhook", HttpMethod::Post, "/api/v2/webhooks")
            .category(CATEGORY)
            .inputs([
                InputField::body("url", FieldKind::String)
                    .required()
                    .describe("The URL of the remote webhook"),
                InputField::body("sign", FieldKind::Boolean)
                    .required()
                    .describe("Whether LaunchDarkly should sign payloads with the secret"),
                InputField::body("on", FieldKind::Boolean)
                    .required()
                    .describe("Whether the webhook is enabled"),
                InputField::body("name", FieldKind::String),
                InputField::body("secret", FieldKind::String),
                InputField::body("statements", FieldKind::Array),
                tags(),
            ])
            .output(schemas::webhook()),
        BlockDefinition::new("get_webhook", "Get webhook", HttpMethod::Get, "/api/v2/webhooks/{id}")
            .category(CATEGORY)
            .output(schemas::webhook()),
        BlockDefinition::new("patch_webhook", "Update webhook", HttpMethod::Patch, "/api/v2/webhooks/{id}")
            .category(CATEGORY)
            .body_from(json_patch())
            .output(schemas::webhook()),
        BlockDefinition::new(
            "delete_webhook",
            "Delete webhook",
            HttpMethod::Delete,
            "/api/v2/webhooks/{id}",
        )
        .category(CATEGORY)
        .output(schemas::empty()),
    ]
}
