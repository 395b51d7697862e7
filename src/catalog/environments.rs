use super::{expiry, filter, json_patch, paging, schemas, sort, tags};
use crate::core::block::BlockDefinition;
use crate::domain::model::{FieldKind, HttpMethod, InputField};

const CATEGORY: &str = "environments";

pub fn blocks() -> Vec<BlockDefinition> {
    vec![
        BlockDefinition::new(
            "list_environments",
            "List environments",
            HttpMethod::Get,
            "/api/v2/projects/{projectKey}/environments",
        )
        .category(CATEGORY)
        .description("Return a list of environments for the specified project")
        .inputs(paging())
        .inputs([filter(), sort()])
        .output(schemas::collection(schemas::environment())),
        BlockDefinition::new(
            "create_environment",
            "Create environment",
            HttpMethod::Post,
            "/api/v2/projects/{projectKey}/environments",
        )
        .category(CATEGORY)
        .description("Create a new environment in a specified project")
        .inputs([
            InputField::body("name", FieldKind::String).required(),
            InputField::body("key", FieldKind::String).required(),
            InputField::body("color", FieldKind::String)
                .required()
                .describe("A color to indicate this environment in the UI"),
            InputField::body("defaultTtl", FieldKind::Integer),
            InputField::body("secureMode", FieldKind::Boolean),
            InputField::body("defaultTrackEvents", FieldKind::Boolean),
            InputField::body("confirmChanges", FieldKind::Boolean),
            InputField::body("requireComments", FieldKind::Boolean),
            tags(),
            InputField::body("source", FieldKind::Object)
                .describe("An existing environment to copy settings from"),
            InputField::body("critical", FieldKind::Boolean),
        ])
        .output(schemas::environment()),
        BlockDefinition::new(
            "get_environment",
            "Get environment",
            HttpMethod::Get,
            "/api/v2/projects/{projectKey}/environments/{environmentKey}",
        )
        .category(CATEGORY)
        .output(schemas::environment()),
        BlockDefinition::new(
            "update_environment",
            "Update environment",
            HttpMethod::Patch,
            "/api/v2/projects/{projectKey}/environments/{environmentKey}",
        )
        .category(CATEGORY)
        .body_from(json_patch())
        .output(schemas::environment()),
        BlockDefinition::new(
            "delete_environment",
            "Delete environment",
            HttpMethod::Delete,
            "/api/v2/projects/{projectKey}/environments/{environmentKey}",
        )
        .category(CATEGORY)
        .output(schemas::empty()),
        BlockDefinition::new(
            "reset_environment_sdk_key",
            "Reset environment SDK key",
            HttpMethod::Post,
            "/api/v2/projects/{projectKey}/environments/{environmentKey}/apiKey",
        )
        .category(CATEGORY)
        .description("Reset an environment's SDK key with an optional expiry time for the old key")
        .input(expiry())
        .output(schemas::environment()),
        BlockDefinition::new(
            "reset_environment_mobile_key",
            "Reset environment mobile SDK key",
            HttpMethod::Post,
            "/api/v2/projects/{projectKey}/environments/{environmentKey}/mobileKey",
        )
        .category(CATEGORY)
        .output(schemas::environment()),
    ]
}
