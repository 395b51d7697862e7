use super::{expand, filter, json_patch, paging, schemas, sort, tags};
use crate::core::block::BlockDefinition;
use crate::domain::model::{FieldKind, HttpMethod, InputField};

const CATEGORY: &str = "metrics";

const METRIC: &str = "/api/v2/metrics/{projectKey}/{metricKey}";
const METRIC_GROUPS: &str = "/api/v2/projects/{projectKey}/metric-groups";
const METRIC_GROUP: &str = "/api/v2/projects/{projectKey}/metric-groups/{metricGroupKey}";

pub fn blocks() -> Vec<BlockDefinition> {
    vec![
        BlockDefinition::new("get_metrics", "List metrics", HttpMethod::Get, "/api/v2/metrics/{projectKey}")
            .category(CATEGORY)
            .inputs(paging())
            .inputs([expand(), sort(), filter()])
            .output(schemas::collection(schemas::metric())),
        BlockDefinition::new("post_metric", "Create metric", HttpMethod::Post, "/api/v2/metrics/{projectKey}")
            .category(CATEGORY)
            .inputs([
                InputField::body("key", FieldKind::String).required(),
                InputField::body("name", FieldKind::String),
                InputField::body("kind", FieldKind::String)
                    .required()
                    .describe("The kind of event the metric tracks: pageview, click or custom"),
                InputField::body("description", FieldKind::String),
                InputField::body("selector", FieldKind::String),
                InputField::body("urls", FieldKind::Array),
                InputField::body("isNumeric", FieldKind::Boolean),
                InputField::body("unit", FieldKind::String),
                InputField::body("eventKey", FieldKind::String),
                InputField::body("successCriteria", FieldKind::String),
                InputField::body("randomizationUnits", FieldKind::Array),
                tags(),
            ])
            .output(schemas::metric()),
        BlockDefinition::new("get_metric", "Get metric", HttpMethod::Get, METRIC)
            .category(CATEGORY)
            .inputs([expand(), InputField::query("versionId", FieldKind::String)])
            .output(schemas::metric()),
        BlockDefinition::new("patch_metric", "Update metric", HttpMethod::Patch, METRIC)
            .category(CATEGORY)
            .body_from(json_patch())
            .output(schemas::metric()),
        BlockDefinition::new("delete_metric", "Delete metric", HttpMethod::Delete, METRIC)
            .category(CATEGORY)
            .output(schemas::empty()),
        BlockDefinition::new("get_metric_groups", "List metric groups", HttpMethod::Get, METRIC_GROUPS)
            .category(CATEGORY)
            .beta()
            .inputs(paging())
            .inputs([filter(), sort(), expand()])
            .output(schemas::collection(schemas::metric_group())),
        BlockDefinition::new("create_metric_group", "Create metric group", HttpMethod::Post, METRIC_GROUPS)
            .category(CATEGORY)
            .beta()
            .inputs([
                InputField::body("key", FieldKind::String),
                InputField::body("name", FieldKind::String).required(),
                InputField::body("kind", FieldKind::String)
                    .required()
                    .describe("The type of the metric group: funnel or standard"),
                InputField::body("description", FieldKind::String),
                InputField::body("maintainerId", FieldKind::String).required(),
                tags(),
                InputField::body("metrics", FieldKind::Array).required(),
            ])
            .output(schemas::metric_group()),
        BlockDefinition::new("get_metric_group", "Get metric group", HttpMethod::Get, METRIC_GROUP)
            .category(CATEGORY)
            .beta()
            .input(expand())
            .output(schemas::metric_group()),
        BlockDefinition::new("patch_metric_group", "Patch metric group", HttpMethod::Patch, METRIC_GROUP)
            .category(CATEGORY)
            .beta()
            .body_from(json_patch())
            .output(schemas::metric_group()),
        BlockDefinition::new("delete_metric_group", "Delete metric group", HttpMethod::Delete, METRIC_GROUP)
            .category(CATEGORY)
            .beta()
            .output(schemas::empty()),
    ]
}
