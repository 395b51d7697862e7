use super::{filter, json_patch, paging, schemas, sort};
use crate::core::block::BlockDefinition;
use crate::domain::model::{FieldKind, HttpMethod, InputField};

const CATEGORY: &str = "members";

pub fn blocks() -> Vec<BlockDefinition> {
    vec![
        BlockDefinition::new("get_members", "List account members", HttpMethod::Get, "/api/v2/members")
            .category(CATEGORY)
            .inputs(paging())
            .inputs([filter(), sort()])
            .output(schemas::collection(schemas::member())),
        BlockDefinition::new("post_members", "Invite new members", HttpMethod::Post, "/api/v2/members")
            .category(CATEGORY)
            .description("Invite one or more new members to join an account")
            .body_from(
                InputField::body("members", FieldKind::Array)
                    .required()
                    .describe("New members to invite, each with an email and an optional role"),
            )
            .output(schemas::collection(schemas::member())),
        BlockDefinition::new("get_member", "Get account member", HttpMethod::Get, "/api/v2/members/{id}")
            .category(CATEGORY)
            .input(InputField::path("id").describe("The member ID, or 'me' for the caller"))
            .output(schemas::member()),
        BlockDefinition::new(
            "patch_member",
            "Modify an account member",
            HttpMethod::Patch,
            "/api/v2/members/{id}",
        )
        .category(CATEGORY)
        .body_from(json_patch())
        .output(schemas::member()),
        BlockDefinition::new(
            "delete_member",
            "Delete account member",
            HttpMethod::Delete,
            "/api/v2/members/{id}",
        )
        .category(CATEGORY)
        .output(schemas::empty()),
        BlockDefinition::new(
            "post_member_teams",
            "Add a member to teams",
            HttpMethod::Post,
            "/api/v2/members/{id}/teams",
        )
        .category(CATEGORY)
        .input(
            InputField::body("teamKeys", FieldKind::Array)
                .required()
                .describe("List of team keys"),
        )
        .output(schemas::member()),
    ]
}
