use super::{comment, filter, paging, schemas, sort};
use crate::core::block::BlockDefinition;
use crate::domain::model::{FieldKind, HttpMethod, InputField};

const CATEGORY: &str = "contexts";

fn continuation_token() -> InputField {
    InputField::query("continuationToken", FieldKind::String)
        .describe("Limits results to contexts with sort values after the token")
}

pub fn blocks() -> Vec<BlockDefinition> {
    vec![
        BlockDefinition::new(
            "get_context_kinds_by_project_key",
            "Get context kinds",
            HttpMethod::Get,
            "/api/v2/projects/{projectKey}/context-kinds",
        )
        .category(CATEGORY)
        .output(schemas::collection(schemas::context_kind())),
        BlockDefinition::new(
            "put_context_kind",
            "Create or update context kind",
            HttpMethod::Put,
            "/api/v2/projects/{projectKey}/context-kinds/{key}",
        )
        .category(CATEGORY)
        .inputs([
            InputField::body("name", FieldKind::String)
                .required()
                .describe("The context kind name"),
            InputField::body("description", FieldKind::String),
            InputField::body("hideInTargeting", FieldKind::Boolean),
            InputField::body("archived", FieldKind::Boolean),
            InputField::body("version", FieldKind::Integer),
        ])
        .output(schemas::context_kind()),
        BlockDefinition::new(
            "get_context_attribute_names",
            "Get context attribute names",
            HttpMethod::Get,
            "/api/v2/projects/{projectKey}/environments/{environmentKey}/context-attributes",
        )
        .category(CATEGORY)
        .inputs([filter(), InputField::query("limit", FieldKind::Integer)])
        .output(schemas::context_attributes()),
        BlockDefinition::new(
            "get_context_attribute_values",
            "Get context attribute values",
            HttpMethod::Get,
            "/api/v2/projects/{projectKey}/environments/{environmentKey}/context-attributes/{attributeName}",
        )
        .category(CATEGORY)
        .input(filter())
        .output(schemas::context_attribute_values()),
        BlockDefinition::new(
            "search_contexts",
            "Search for contexts",
            HttpMethod::Post,
            "/api/v2/projects/{projectKey}/environments/{environmentKey}/contexts/search",
        )
        .category(CATEGORY)
        .description("Search for contexts with the given conditions")
        .inputs([
            InputField::body("filter", FieldKind::String)
                .describe("A collection of context filters"),
            InputField::body("sort", FieldKind::String),
            InputField::body("limit", FieldKind::Integer),
            InputField::body("continuationToken", FieldKind::String),
        ])
        .output(schemas::context_instances()),
        BlockDefinition::new(
            "get_contexts",
            "Get contexts",
            HttpMethod::Get,
            "/api/v2/projects/{projectKey}/environments/{environmentKey}/contexts/{kind}/{key}",
        )
        .category(CATEGORY)
        .inputs([
            InputField::query("limit", FieldKind::Integer),
            continuation_token(),
            sort(),
            filter(),
        ])
        .output(schemas::context_instances()),
        BlockDefinition::new(
            "delete_context_instances",
            "Delete context instances",
            HttpMethod::Delete,
            "/api/v2/projects/{projectKey}/environments/{environmentKey}/context-instances/{id}",
        )
        .category(CATEGORY)
        .output(schemas::empty()),
        BlockDefinition::new(
            "evaluate_context_instance",
            "Evaluate flags for context instance",
            HttpMethod::Post,
            "/api/v2/projects/{projectKey}/environments/{environmentKey}/flags/evaluate",
        )
        .category(CATEGORY)
        .description("Evaluate flags for a context instance, for example to determine the expected flag variation")
        .inputs(paging())
        .inputs([sort(), filter()])
        .body_from(
            InputField::body("context", FieldKind::Object)
                .required()
                .describe("The context instance to evaluate, including its kind and key"),
        )
        .output(schemas::context_evaluations()),
        BlockDefinition::new(
            "put_context_flag_setting",
            "Update flag settings for context",
            HttpMethod::Put,
            "/api/v2/projects/{projectKey}/environments/{environmentKey}/contexts/{contextKind}/{contextKey}/flags/{featureFlagKey}",
        )
        .category(CATEGORY)
        .description("Enable or disable a feature flag for a context based on its context kind and key")
        .inputs([
            InputField::body("setting", FieldKind::Any)
                .describe("The variation value to set for the context; omit or null to clear"),
            comment(),
        ])
        .output(schemas::empty()),
    ]
}
