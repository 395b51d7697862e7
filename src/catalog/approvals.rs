use super::{comment, expand, filter, instructions, paging, schemas};
use crate::core::block::BlockDefinition;
use crate::domain::model::{FieldKind, HttpMethod, InputField};

const CATEGORY: &str = "approvals";

const FLAG_APPROVALS: &str =
    "/api/v2/projects/{projectKey}/flags/{featureFlagKey}/environments/{environmentKey}/approval-requests";
const FLAG_APPROVAL: &str =
    "/api/v2/projects/{projectKey}/flags/{featureFlagKey}/environments/{environmentKey}/approval-requests/{id}";

fn description() -> InputField {
    InputField::body("description", FieldKind::String)
        .required()
        .describe("A brief description of the changes you're requesting")
}

fn reviewers() -> [InputField; 2] {
    [
        InputField::body("notifyMemberIds", FieldKind::Array)
            .describe("Member IDs of the reviewers to notify"),
        InputField::body("notifyTeamKeys", FieldKind::Array)
            .describe("Team keys of the reviewers to notify"),
    ]
}

fn review_kind() -> InputField {
    InputField::body("kind", FieldKind::String)
        .required()
        .describe("The type of review: approve, decline or comment")
}

pub fn blocks() -> Vec<BlockDefinition> {
    vec![
        BlockDefinition::new(
            "get_approval_requests",
            "List approval requests",
            HttpMethod::Get,
            "/api/v2/approval-requests",
        )
        .category(CATEGORY)
        .inputs(paging())
        .inputs([filter(), expand()])
        .output(schemas::collection(schemas::approval_request())),
        BlockDefinition::new(
            "post_approval_request",
            "Create approval request",
            HttpMethod::Post,
            "/api/v2/approval-requests",
        )
        .category(CATEGORY)
        .description("Create an approval request for a resource such as a segment")
        .inputs([
            InputField::body("resourceId", FieldKind::String)
                .required()
                .describe("The resource identifier, for example proj/p:env/e:segment/s"),
            description(),
            InputField::body("instructions", FieldKind::Array).required(),
            comment(),
            InputField::body("operatingOnId", FieldKind::String),
            InputField::body("integrationConfig", FieldKind::Object),
        ])
        .inputs(reviewers())
        .output(schemas::approval_request()),
        BlockDefinition::new(
            "get_approval_request",
            "Get approval request",
            HttpMethod::Get,
            "/api/v2/approval-requests/{id}",
        )
        .category(CATEGORY)
        .input(expand())
        .output(schemas::approval_request()),
        BlockDefinition::new(
            "delete_approval_request",
            "Delete approval request",
            HttpMethod::Delete,
            "/api/v2/approval-requests/{id}",
        )
        .category(CATEGORY)
        .output(schemas::empty()),
        BlockDefinition::new(
            "post_approval_request_apply",
            "Apply approval request",
            HttpMethod::Post,
            "/api/v2/approval-requests/{id}/apply",
        )
        .category(CATEGORY)
        .input(comment())
        .output(schemas::approval_request()),
        BlockDefinition::new(
            "post_approval_request_review",
            "Review approval request",
            HttpMethod::Post,
            "/api/v2/approval-requests/{id}/reviews",
        )
        .category(CATEGORY)
        .inputs([review_kind(), comment()])
        .output(schemas::approval_request()),
        BlockDefinition::new(
            "get_approvals_for_flag",
            "List approval requests for a flag",
            HttpMethod::Get,
            FLAG_APPROVALS,
        )
        .category(CATEGORY)
        .output(schemas::collection(schemas::approval_request())),
        BlockDefinition::new(
            "post_approval_request_for_flag",
            "Create approval request for a flag",
            HttpMethod::Post,
            FLAG_APPROVALS,
        )
        .category(CATEGORY)
        .inputs([description(), instructions(), comment()])
        .inputs(reviewers())
        .input(
            InputField::body("executionDate", FieldKind::Integer)
                .describe("Timestamp for when instructions will be executed"),
        )
        .output(schemas::approval_request()),
        BlockDefinition::new(
            "get_approval_for_flag",
            "Get approval request for a flag",
            HttpMethod::Get,
            FLAG_APPROVAL,
        )
        .category(CATEGORY)
        .output(schemas::approval_request()),
        BlockDefinition::new(
            "delete_approval_request_for_flag",
            "Delete approval request for a flag",
            HttpMethod::Delete,
            FLAG_APPROVAL,
        )
        .category(CATEGORY)
        .output(schemas::empty()),
        BlockDefinition::new(
            "post_flag_approval_request_apply",
            "Apply approval request for a flag",
            HttpMethod::Post,
            "/api/v2/projects/{projectKey}/flags/{featureFlagKey}/environments/{environmentKey}/approval-requests/{id}/apply",
        )
        .category(CATEGORY)
        .input(comment())
        .output(schemas::approval_request()),
        BlockDefinition::new(
            "post_flag_approval_request_review",
            "Review approval request for a flag",
            HttpMethod::Post,
            "/api/v2/projects/{projectKey}/flags/{featureFlagKey}/environments/{environmentKey}/approval-requests/{id}/reviews",
        )
        .category(CATEGORY)
        .inputs([review_kind(), comment()])
        .output(schemas::approval_request()),
    ]
}
