use super::{filter, paging, schemas, tags};
use crate::core::block::BlockDefinition;
use crate::domain::model::{FieldKind, HttpMethod, InputField};

const CATEGORY: &str = "releases";

const PIPELINES: &str = "/api/v2/projects/{projectKey}/release-pipelines";
const PIPELINE: &str = "/api/v2/projects/{projectKey}/release-pipelines/{pipelineKey}";
const FLAG_RELEASE: &str = "/api/v2/flags/{projectKey}/{flagKey}/release";

fn pipeline_fields() -> [InputField; 4] {
    [
        InputField::body("name", FieldKind::String).required(),
        InputField::body("description", FieldKind::String),
        InputField::body("phases", FieldKind::Array)
            .required()
            .describe("A logical grouping of one or more environments that share attributes"),
        tags(),
    ]
}

pub fn blocks() -> Vec<BlockDefinition> {
    vec![
        BlockDefinition::new(
            "get_all_release_pipelines",
            "List release pipelines",
            HttpMethod::Get,
            PIPELINES,
        )
        .category(CATEGORY)
        .beta()
        .inputs(paging())
        .input(filter())
        .output(schemas::collection(schemas::release_pipeline())),
        BlockDefinition::new(
            "post_release_pipeline",
            "Create release pipeline",
            HttpMethod::Post,
            PIPELINES,
        )
        .category(CATEGORY)
        .beta()
        .input(InputField::body("key", FieldKind::String).required())
        .inputs(pipeline_fields())
        .input(InputField::body("isProjectDefault", FieldKind::Boolean))
        .output(schemas::release_pipeline()),
        BlockDefinition::new("get_release_pipeline_by_key", "Get release pipeline", HttpMethod::Get, PIPELINE)
            .category(CATEGORY)
            .beta()
            .output(schemas::release_pipeline()),
        BlockDefinition::new("put_release_pipeline", "Update release pipeline", HttpMethod::Put, PIPELINE)
            .category(CATEGORY)
            .beta()
            .inputs(pipeline_fields())
            .output(schemas::release_pipeline()),
        BlockDefinition::new(
            "delete_release_pipeline",
            "Delete release pipeline",
            HttpMethod::Delete,
            PIPELINE,
        )
        .category(CATEGORY)
        .beta()
        .output(schemas::empty()),
        BlockDefinition::new("get_release_by_flag_key", "Get release for flag", HttpMethod::Get, FLAG_RELEASE)
            .category(CATEGORY)
            .beta()
            .output(schemas::release()),
        BlockDefinition::new(
            "delete_release_by_flag_key",
            "Delete release for flag",
            HttpMethod::Delete,
            FLAG_RELEASE,
        )
        .category(CATEGORY)
        .beta()
        .output(schemas::empty()),
    ]
}
