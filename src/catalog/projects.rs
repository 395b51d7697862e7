use super::{expand, filter, json_patch, paging, schemas, sort, tags};
use crate::core::block::BlockDefinition;
use crate::domain::model::{FieldKind, HttpMethod, InputField};

const CATEGORY: &str = "projects";

pub fn blocks() -> Vec<BlockDefinition> {
    vec![
        BlockDefinition::new("list_projects", "List projects", HttpMethod::Get, "/api/v2/projects")
            .category(CATEGORY)
            .description("Return a list of projects")
            .inputs(paging())
            .inputs([filter(), sort(), expand()])
            .output(schemas::collection(schemas::project())),
        BlockDefinition::new("create_project", "Create project", HttpMethod::Post, "/api/v2/projects")
            .category(CATEGORY)
            .description("Create a new project with the given key and name")
            .inputs([
                InputField::body("name", FieldKind::String)
                    .required()
                    .describe("A human-friendly name for the project"),
                InputField::body("key", FieldKind::String)
                    .required()
                    .describe("A unique key used to reference the project in your code"),
                InputField::body("includeInSnippetByDefault", FieldKind::Boolean),
                InputField::body("defaultClientSideAvailability", FieldKind::Object),
                tags(),
                InputField::body("environments", FieldKind::Array)
                    .describe("Environments to create with the project"),
                InputField::body("namingConvention", FieldKind::Object),
            ])
            .output(schemas::project()),
        BlockDefinition::new(
            "get_project",
            "Get project",
            HttpMethod::Get,
            "/api/v2/projects/{projectKey}",
        )
        .category(CATEGORY)
        .description("Get a single project by key")
        .input(InputField::path("projectKey").describe("The project key"))
        .input(expand())
        .output(schemas::project()),
        BlockDefinition::new(
            "update_project",
            "Update project",
            HttpMethod::Patch,
            "/api/v2/projects/{projectKey}",
        )
        .category(CATEGORY)
        .description("Update a project using a JSON patch")
        .body_from(json_patch())
        .output(schemas::project()),
        BlockDefinition::new(
            "delete_project",
            "Delete project",
            HttpMethod::Delete,
            "/api/v2/projects/{projectKey}",
        )
        .category(CATEGORY)
        .description("Delete a project by key, including all of its environments and flags")
        .output(schemas::empty()),
        BlockDefinition::new(
            "get_flag_defaults_by_project",
            "Get flag defaults for project",
            HttpMethod::Get,
            "/api/v2/projects/{projectKey}/flag-defaults",
        )
        .category(CATEGORY)
        .output(schemas::flag_defaults()),
        BlockDefinition::new(
            "patch_flag_defaults_by_project",
            "Update flag default for project",
            HttpMethod::Patch,
            "/api/v2/projects/{projectKey}/flag-defaults",
        )
        .category(CATEGORY)
        .body_from(json_patch())
        .output(schemas::flag_defaults()),
        BlockDefinition::new(
            "put_flag_defaults_by_project",
            "Create or update flag defaults for project",
            HttpMethod::Put,
            "/api/v2/projects/{projectKey}/flag-defaults",
        )
        .category(CATEGORY)
        .inputs([
            InputField::body("tags", FieldKind::Array).required(),
            InputField::body("temporary", FieldKind::Boolean).required(),
            InputField::body("booleanDefaults", FieldKind::Object).required(),
            InputField::body("defaultClientSideAvailability", FieldKind::Object).required(),
        ])
        .output(schemas::flag_defaults()),
    ]
}
