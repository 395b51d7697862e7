use super::{comment, expand, filter, instructions, paging, schemas};
use crate::core::block::BlockDefinition;
use crate::domain::model::{FieldKind, HttpMethod, InputField};

const CATEGORY: &str = "teams";

pub fn blocks() -> Vec<BlockDefinition> {
    vec![
        BlockDefinition::new("get_teams", "List teams", HttpMethod::Get, "/api/v2/teams")
            .category(CATEGORY)
            .inputs(paging())
            .inputs([filter(), expand()])
            .output(schemas::collection(schemas::team())),
        BlockDefinition::new("post_team", "Create team", HttpMethod::Post, "/api/v2/teams")
            .category(CATEGORY)
            .input(expand())
            .inputs([
                InputField::body("key", FieldKind::String).required(),
                InputField::body("name", FieldKind::String).required(),
                InputField::body("description", FieldKind::String),
                InputField::body("customRoleKeys", FieldKind::Array),
                InputField::body("memberIDs", FieldKind::Array),
                InputField::body("permissionGrants", FieldKind::Array),
            ])
            .output(schemas::team()),
        BlockDefinition::new("get_team", "Get team", HttpMethod::Get, "/api/v2/teams/{teamKey}")
            .category(CATEGORY)
            .input(expand())
            .output(schemas::team()),
        BlockDefinition::new("patch_team", "Update team", HttpMethod::Patch, "/api/v2/teams/{teamKey}")
            .category(CATEGORY)
            .description("Perform a partial update to a team using instructions such as addMembers")
            .input(expand())
            .inputs([instructions(), comment()])
            .output(schemas::team()),
        BlockDefinition::new("delete_team", "Delete team", HttpMethod::Delete, "/api/v2/teams/{teamKey}")
            .category(CATEGORY)
            .output(schemas::empty()),
        BlockDefinition::new(
            "get_team_maintainers",
            "Get team maintainers",
            HttpMethod::Get,
            "/api/v2/teams/{teamKey}/maintainers",
        )
        .category(CATEGORY)
        .inputs(paging())
        .output(schemas::collection(schemas::member_summary())),
        BlockDefinition::new(
            "get_team_roles",
            "Get team custom roles",
            HttpMethod::Get,
            "/api/v2/teams/{teamKey}/roles",
        )
        .category(CATEGORY)
        .inputs(paging())
        .output(schemas::collection(schemas::custom_role())),
    ]
}
