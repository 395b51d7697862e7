use super::{comment, json_patch, paging, schemas};
use crate::core::block::BlockDefinition;
use crate::domain::model::{FieldKind, HttpMethod, InputField};

const CATEGORY: &str = "custom-roles";

pub fn blocks() -> Vec<BlockDefinition> {
    vec![
        BlockDefinition::new("get_custom_roles", "List custom roles", HttpMethod::Get, "/api/v2/roles")
            .category(CATEGORY)
            .inputs(paging())
            .output(schemas::collection(schemas::custom_role())),
        BlockDefinition::new("post_custom_role", "Create custom role", HttpMethod::Post, "/api/v2/roles")
            .category(CATEGORY)
            .inputs([
                InputField::body("name", FieldKind::String).required(),
                InputField::body("key", FieldKind::String).required(),
                InputField::body("description", FieldKind::String),
                InputField::body("policy", FieldKind::Array)
                    .required()
                    .describe("Policy statements granting or denying actions on resources"),
                InputField::body("basePermissions", FieldKind::String),
            ])
            .output(schemas::custom_role()),
        BlockDefinition::new(
            "get_custom_role",
            "Get custom role",
            HttpMethod::Get,
            "/api/v2/roles/{customRoleKey}",
        )
        .category(CATEGORY)
        .input(InputField::path("customRoleKey").describe("The custom role key or ID"))
        .output(schemas::custom_role()),
        BlockDefinition::new(
            "patch_custom_role",
            "Update custom role",
            HttpMethod::Patch,
            "/api/v2/roles/{customRoleKey}",
        )
        .category(CATEGORY)
        .inputs([json_patch(), comment()])
        .output(schemas::custom_role()),
        BlockDefinition::new(
            "delete_custom_role",
            "Delete custom role",
            HttpMethod::Delete,
            "/api/v2/roles/{customRoleKey}",
        )
        .category(CATEGORY)
        .output(schemas::empty()),
    ]
}
