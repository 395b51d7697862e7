use super::{comment, filter, instructions, json_patch, paging, schemas, sort, tags};
use crate::core::block::BlockDefinition;
use crate::domain::model::{FieldKind, HttpMethod, InputField};

const CATEGORY: &str = "segments";

const BASE: &str = "/api/v2/segments/{projectKey}/{environmentKey}";
const ITEM: &str = "/api/v2/segments/{projectKey}/{environmentKey}/{segmentKey}";

pub fn blocks() -> Vec<BlockDefinition> {
    vec![
        BlockDefinition::new("list_segments", "List segments", HttpMethod::Get, BASE)
            .category(CATEGORY)
            .description("Get a list of all segments in the given project and environment")
            .inputs(paging())
            .inputs([sort(), filter()])
            .output(schemas::collection(schemas::segment())),
        BlockDefinition::new("create_segment", "Create segment", HttpMethod::Post, BASE)
            .category(CATEGORY)
            .inputs([
                InputField::body("name", FieldKind::String)
                    .required()
                    .describe("A human-friendly name for the segment"),
                InputField::body("key", FieldKind::String)
                    .required()
                    .describe("A unique key used to reference the segment"),
                InputField::body("description", FieldKind::String),
                tags(),
                InputField::body("unbounded", FieldKind::Boolean)
                    .describe("Whether to create a standard segment or a big segment"),
                InputField::body("unboundedContextKind", FieldKind::String),
            ])
            .output(schemas::segment()),
        BlockDefinition::new("get_segment", "Get segment", HttpMethod::Get, ITEM)
            .category(CATEGORY)
            .output(schemas::segment()),
        BlockDefinition::new("update_segment", "Update segment", HttpMethod::Patch, ITEM)
            .category(CATEGORY)
            .description("Update a segment using JSON patch")
            .inputs([json_patch(), comment()])
            .output(schemas::segment()),
        BlockDefinition::new(
            "update_segment_semantic",
            "Patch segment with semantic patch",
            HttpMethod::Patch,
            ITEM,
        )
        .category(CATEGORY)
        .description("Update a segment using semantic patch instructions such as addIncludedTargets")
        .semantic_patch()
        .inputs([instructions(), comment()])
        .output(schemas::segment()),
        BlockDefinition::new("delete_segment", "Delete segment", HttpMethod::Delete, ITEM)
            .category(CATEGORY)
            .output(schemas::empty()),
        BlockDefinition::new(
            "update_big_segment_context_targets",
            "Update context targets on a big segment",
            HttpMethod::Post,
            "/api/v2/segments/{projectKey}/{environmentKey}/{segmentKey}/contexts",
        )
        .category(CATEGORY)
        .inputs([
            InputField::body("included", FieldKind::Object)
                .describe("Context keys to add to or remove from the included list"),
            InputField::body("excluded", FieldKind::Object)
                .describe("Context keys to add to or remove from the excluded list"),
        ])
        .output(schemas::empty()),
        BlockDefinition::new(
            "get_segment_membership_for_context",
            "Get big segment membership for context",
            HttpMethod::Get,
            "/api/v2/segments/{projectKey}/{environmentKey}/{segmentKey}/contexts/{contextKey}",
        )
        .category(CATEGORY)
        .output(schemas::segment_membership()),
        BlockDefinition::new(
            "get_expiring_targets_for_segment",
            "Get expiring targets for segment",
            HttpMethod::Get,
            "/api/v2/segments/{projectKey}/{segmentKey}/expiring-targets/{environmentKey}",
        )
        .category(CATEGORY)
        .output(schemas::expiring_targets()),
        BlockDefinition::new(
            "patch_expiring_targets_for_segment",
            "Update expiring targets for segment",
            HttpMethod::Patch,
            "/api/v2/segments/{projectKey}/{segmentKey}/expiring-targets/{environmentKey}",
        )
        .category(CATEGORY)
        .semantic_patch()
        .inputs([instructions(), comment()])
        .output(schemas::expiring_targets()),
        BlockDefinition::new(
            "create_big_segment_export",
            "Create big segment export",
            HttpMethod::Post,
            "/api/v2/segments/{projectKey}/{environmentKey}/{segmentKey}/exports",
        )
        .category(CATEGORY)
        .description("Start a new export process for a big segment")
        .output(schemas::empty()),
        BlockDefinition::new(
            "get_big_segment_export",
            "Get big segment export",
            HttpMethod::Get,
            "/api/v2/segments/{projectKey}/{environmentKey}/{segmentKey}/exports/{exportID}",
        )
        .category(CATEGORY)
        .output(schemas::export()),
    ]
}
