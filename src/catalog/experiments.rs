use super::{comment, expand, filter, instructions, paging, schemas};
use crate::core::block::BlockDefinition;
use crate::domain::model::{FieldKind, HttpMethod, InputField};

const CATEGORY: &str = "experiments";

const EXPERIMENTS: &str = "/api/v2/projects/{projectKey}/environments/{environmentKey}/experiments";
const EXPERIMENT: &str =
    "/api/v2/projects/{projectKey}/environments/{environmentKey}/experiments/{experimentKey}";
const HOLDOUTS: &str = "/api/v2/projects/{projectKey}/environments/{environmentKey}/holdouts";

fn iteration() -> InputField {
    InputField::body("iteration", FieldKind::Object)
        .required()
        .describe("Iteration settings: hypothesis, metrics, treatments and flags")
}

pub fn blocks() -> Vec<BlockDefinition> {
    vec![
        BlockDefinition::new("get_experiments", "List experiments", HttpMethod::Get, EXPERIMENTS)
            .category(CATEGORY)
            .beta()
            .inputs(paging())
            .inputs([
                filter(),
                expand(),
                InputField::query("lifecycleState", FieldKind::String)
                    .describe("Comma-separated list of states: archived, active"),
            ])
            .output(schemas::collection(schemas::experiment())),
        BlockDefinition::new("create_experiment", "Create experiment", HttpMethod::Post, EXPERIMENTS)
            .category(CATEGORY)
            .beta()
            .inputs([
                InputField::body("name", FieldKind::String).required(),
                InputField::body("key", FieldKind::String).required(),
                InputField::body("description", FieldKind::String),
                InputField::body("maintainerId", FieldKind::String),
                iteration(),
                InputField::body("holdoutId", FieldKind::String),
            ])
            .output(schemas::experiment()),
        BlockDefinition::new("get_experiment", "Get experiment", HttpMethod::Get, EXPERIMENT)
            .category(CATEGORY)
            .beta()
            .input(expand())
            .output(schemas::experiment()),
        BlockDefinition::new("patch_experiment", "Patch experiment", HttpMethod::Patch, EXPERIMENT)
            .category(CATEGORY)
            .description("Update an experiment with instructions such as startIteration or stopIteration")
            .beta()
            .inputs([instructions(), comment()])
            .output(schemas::experiment()),
        BlockDefinition::new(
            "create_iteration",
            "Create iteration",
            HttpMethod::Post,
            "/api/v2/projects/{projectKey}/environments/{environmentKey}/experiments/{experimentKey}/iterations",
        )
        .category(CATEGORY)
        .beta()
        .body_from(iteration())
        .output(schemas::iteration()),
        BlockDefinition::new(
            "get_experimentation_settings",
            "Get experimentation settings",
            HttpMethod::Get,
            "/api/v2/projects/{projectKey}/experimentation-settings",
        )
        .category(CATEGORY)
        .beta()
        .output(schemas::experimentation_settings()),
        BlockDefinition::new(
            "put_experimentation_settings",
            "Update experimentation settings",
            HttpMethod::Put,
            "/api/v2/projects/{projectKey}/experimentation-settings",
        )
        .category(CATEGORY)
        .beta()
        .input(
            InputField::body("randomizationUnits", FieldKind::Array)
                .required()
                .describe("An array of randomization units allowed for this project"),
        )
        .output(schemas::experimentation_settings()),
        BlockDefinition::new("get_all_holdouts", "List holdouts", HttpMethod::Get, HOLDOUTS)
            .category(CATEGORY)
            .beta()
            .inputs(paging())
            .output(schemas::collection(schemas::holdout())),
        BlockDefinition::new("post_holdout", "Create holdout", HttpMethod::Post, HOLDOUTS)
            .category(CATEGORY)
            .beta()
            .inputs([
                InputField::body("name", FieldKind::String).required(),
                InputField::body("key", FieldKind::String).required(),
                InputField::body("description", FieldKind::String),
                InputField::body("randomizationunit", FieldKind::String),
                InputField::body("holdoutamount", FieldKind::String)
                    .describe("Percentage of traffic allocated to the holdout"),
                InputField::body("primarymetrickey", FieldKind::String),
                InputField::body("metrics", FieldKind::Array),
                InputField::body("maintainerId", FieldKind::String),
            ])
            .output(schemas::holdout()),
        BlockDefinition::new(
            "get_holdout",
            "Get holdout",
            HttpMethod::Get,
            "/api/v2/projects/{projectKey}/environments/{environmentKey}/holdouts/{holdoutKey}",
        )
        .category(CATEGORY)
        .beta()
        .output(schemas::holdout()),
        BlockDefinition::new(
            "patch_holdout",
            "Patch holdout",
            HttpMethod::Patch,
            "/api/v2/projects/{projectKey}/environments/{environmentKey}/holdouts/{holdoutKey}",
        )
        .category(CATEGORY)
        .beta()
        .inputs([instructions(), comment()])
        .output(schemas::holdout()),
    ]
}
