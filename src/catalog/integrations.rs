use super::{expand, filter, json_patch, paging, schemas, sort};
use crate::core::block::BlockDefinition;
use crate::domain::model::{FieldKind, HttpMethod, InputField};

const CATEGORY: &str = "integrations";

const DESTINATION: &str = "/api/v2/destinations/{projectKey}/{environmentKey}/{id}";
const APPLICATION: &str = "/api/v2/applications/{applicationKey}";

pub fn blocks() -> Vec<BlockDefinition> {
    vec![
        BlockDefinition::new("get_destinations", "List Data Export destinations", HttpMethod::Get, "/api/v2/destinations")
            .category(CATEGORY)
            .output(schemas::collection(schemas::destination())),
        BlockDefinition::new(
            "post_destination",
            "Create Data Export destination",
            HttpMethod::Post,
            "/api/v2/destinations/{projectKey}/{environmentKey}",
        )
        .category(CATEGORY)
        .inputs([
            InputField::body("name", FieldKind::String),
            InputField::body("kind", FieldKind::String)
                .describe("The type of Data Export destination, for example kinesis or google-pubsub"),
            InputField::body("config", FieldKind::Object)
                .describe("Destination-specific configuration"),
            InputField::body("on", FieldKind::Boolean),
        ])
        .output(schemas::destination()),
        BlockDefinition::new("get_destination", "Get destination", HttpMethod::Get, DESTINATION)
            .category(CATEGORY)
            .output(schemas::destination()),
        BlockDefinition::new("patch_destination", "Update Data Export destination", HttpMethod::Patch, DESTINATION)
            .category(CATEGORY)
            .body_from(json_patch())
            .output(schemas::destination()),
        BlockDefinition::new("delete_destination", "Delete Data Export destination", HttpMethod::Delete, DESTINATION)
            .category(CATEGORY)
            .output(schemas::empty()),
        BlockDefinition::new("get_applications", "List applications", HttpMethod::Get, "/api/v2/applications")
            .category(CATEGORY)
            .beta()
            .inputs(paging())
            .inputs([filter(), sort(), expand()])
            .output(schemas::collection(schemas::application())),
        BlockDefinition::new("get_application", "Get application by key", HttpMethod::Get, APPLICATION)
            .category(CATEGORY)
            .beta()
            .input(expand())
            .output(schemas::application()),
        BlockDefinition::new("patch_application", "Update application", HttpMethod::Patch, APPLICATION)
            .category(CATEGORY)
            .beta()
            .body_from(json_patch())
            .output(schemas::application()),
        BlockDefinition::new("delete_application", "Delete application", HttpMethod::Delete, APPLICATION)
            .category(CATEGORY)
            .beta()
            .output(schemas::empty()),
    ]
}
