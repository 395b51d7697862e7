use super::{comment, expiry, json_patch, schemas};
use crate::core::block::BlockDefinition;
use crate::domain::model::{FieldKind, HttpMethod, InputField};

const CATEGORY: &str = "relay";

const CONFIGS: &str = "/api/v2/account/relay-auto-configs";
const CONFIG: &str = "/api/v2/account/relay-auto-configs/{id}";

pub fn blocks() -> Vec<BlockDefinition> {
    vec![
        BlockDefinition::new(
            "get_relay_proxy_configs",
            "List Relay Proxy configs",
            HttpMethod::Get,
            CONFIGS,
        )
        .category(CATEGORY)
        .output(schemas::collection(schemas::relay_auto_config())),
        BlockDefinition::new(
            "post_relay_auto_config",
            "Create a new Relay Proxy config",
            HttpMethod::Post,
            CONFIGS,
        )
        .category(CATEGORY)
        .inputs([
            InputField::body("name", FieldKind::String).required(),
            InputField::body("policy", FieldKind::Array)
                .required()
                .describe("Policy statements selecting the environments the Relay Proxy serves"),
        ])
        .output(schemas::relay_auto_config()),
        BlockDefinition::new("get_relay_proxy_config", "Get Relay Proxy config", HttpMethod::Get, CONFIG)
            .category(CATEGORY)
            .output(schemas::relay_auto_config()),
        BlockDefinition::new(
            "patch_relay_auto_config",
            "Update a Relay Proxy config",
            HttpMethod::Patch,
            CONFIG,
        )
        .category(CATEGORY)
        .inputs([json_patch(), comment()])
        .output(schemas::relay_auto_config()),
        BlockDefinition::new(
            "delete_relay_auto_config",
            "Delete Relay Proxy config by ID",
            HttpMethod::Delete,
            CONFIG,
        )
        .category(CATEGORY)
        .output(schemas::empty()),
        BlockDefinition::new(
            "reset_relay_auto_config",
            "Reset Relay Proxy configuration key",
            HttpMethod::Post,
            "/api/v2/account/relay-auto-configs/{id}/reset",
        )
        .category(CATEGORY)
        .input(expiry())
        .output(schemas::relay_auto_config()),
    ]
}
