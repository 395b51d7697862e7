use super::{json_patch, schemas};
use crate::core::block::BlockDefinition;
use crate::domain::model::{FieldKind, HttpMethod, InputField};

const CATEGORY: &str = "code-refs";

const REPOSITORIES: &str = "/api/v2/code-refs/repositories";
const REPOSITORY: &str = "/api/v2/code-refs/repositories/{repo}";

pub fn blocks() -> Vec<BlockDefinition> {
    vec![
        BlockDefinition::new("get_repositories", "List repositories", HttpMethod::Get, REPOSITORIES)
            .category(CATEGORY)
            .inputs([
                InputField::query("withBranches", FieldKind::String)
                    .describe("If set to any value, the endpoint returns repositories with branch data"),
                InputField::query("withReferencesForDefaultBranch", FieldKind::String),
                InputField::query("projKey", FieldKind::String),
                InputField::query("flagKey", FieldKind::String),
            ])
            .output(schemas::collection(schemas::repository())),
        BlockDefinition::new("post_repository", "Create repository", HttpMethod::Post, REPOSITORIES)
            .category(CATEGORY)
            .inputs([
                InputField::body("name", FieldKind::String).required(),
                InputField::body("sourceLink", FieldKind::String),
                InputField::body("commitUrlTemplate", FieldKind::String),
                InputField::body("hunkUrlTemplate", FieldKind::String),
                InputField::body("type", FieldKind::String)
                    .describe("The type of repository: bitbucket, custom, github or gitlab"),
                InputField::body("defaultBranch", FieldKind::String),
            ])
            .output(schemas::repository()),
        BlockDefinition::new("get_repository", "Get repository", HttpMethod::Get, REPOSITORY)
            .category(CATEGORY)
            .output(schemas::repository()),
        BlockDefinition::new("patch_repository", "Update repository", HttpMethod::Patch, REPOSITORY)
            .category(CATEGORY)
            .body_from(json_patch())
            .output(schemas::repository()),
        BlockDefinition::new("delete_repository", "Delete repository", HttpMethod::Delete, REPOSITORY)
            .category(CATEGORY)
            .output(schemas::empty()),
        BlockDefinition::new(
            "get_branches",
            "List branches",
            HttpMethod::Get,
            "/api/v2/code-refs/repositories/{repo}/branches",
        )
        .category(CATEGORY)
        .output(schemas::collection(schemas::branch())),
        BlockDefinition::new(
            "get_branch",
            "Get branch",
            HttpMethod::Get,
            "/api/v2/code-refs/repositories/{repo}/branches/{branch}",
        )
        .category(CATEGORY)
        .inputs([
            InputField::path("branch").describe("The URL-encoded branch name"),
            InputField::query("projKey", FieldKind::String),
            InputField::query("flagKey", FieldKind::String),
        ])
        .output(schemas::branch()),
        BlockDefinition::new(
            "get_extinctions",
            "List extinctions",
            HttpMethod::Get,
            "/api/v2/code-refs/extinctions",
        )
        .category(CATEGORY)
        .inputs([
            InputField::query("repoName", FieldKind::String),
            InputField::query("branchName", FieldKind::String),
            InputField::query("projKey", FieldKind::String),
            InputField::query("flagKey", FieldKind::String),
            InputField::query("from", FieldKind::Integer),
            InputField::query("to", FieldKind::Integer),
        ])
        .output(schemas::any_collection()),
        BlockDefinition::new(
            "get_root_statistic",
            "Get links to code reference repositories for each project",
            HttpMethod::Get,
            "/api/v2/code-refs/statistics",
        )
        .category(CATEGORY)
        .output(schemas::root()),
        BlockDefinition::new(
            "get_statistics",
            "Get code references statistics for flags",
            HttpMethod::Get,
            "/api/v2/code-refs/statistics/{projectKey}",
        )
        .category(CATEGORY)
        .input(InputField::query("flagKey", FieldKind::String))
        .output(schemas::code_ref_statistics()),
    ]
}
