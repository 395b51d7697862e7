use super::schemas;
use crate::core::block::BlockDefinition;
use crate::domain::model::{FieldKind, HttpMethod, InputField};

const CATEGORY: &str = "audit-log";

fn window() -> [InputField; 4] {
    [
        InputField::query("before", FieldKind::Integer)
            .describe("Only return entries before this Unix timestamp in milliseconds"),
        InputField::query("after", FieldKind::Integer)
            .describe("Only return entries after this Unix timestamp in milliseconds"),
        InputField::query("q", FieldKind::String).describe("Full or partial text search"),
        InputField::query("limit", FieldKind::Integer),
    ]
}

pub fn blocks() -> Vec<BlockDefinition> {
    vec![
        BlockDefinition::new(
            "get_audit_log_entries",
            "List audit log entries",
            HttpMethod::Get,
            "/api/v2/auditlog",
        )
        .category(CATEGORY)
        .inputs(window())
        .input(
            InputField::query("spec", FieldKind::String)
                .describe("A resource specifier that filters entries to specific resources"),
        )
        .output(schemas::collection(schemas::audit_log_entry())),
        BlockDefinition::new(
            "post_audit_log_entries",
            "Search audit log entries",
            HttpMethod::Post,
            "/api/v2/auditlog",
        )
        .category(CATEGORY)
        .description("Search audit log entries using resource-specifier statements")
        .inputs(window())
        .body_from(
            InputField::body("statements", FieldKind::Array)
                .describe("Policy statements selecting which resources to return entries for"),
        )
        .output(schemas::collection(schemas::audit_log_entry())),
        BlockDefinition::new(
            "get_audit_log_entry",
            "Get audit log entry",
            HttpMethod::Get,
            "/api/v2/auditlog/{id}",
        )
        .category(CATEGORY)
        .output(schemas::audit_log_entry()),
    ]
}
