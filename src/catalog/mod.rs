//! LaunchDarkly REST API v2 block catalog.
//!
//! Every endpoint is a [`BlockDefinition`] value; one generic handler executes them all.

pub mod access_tokens;
pub mod account;
pub mod approvals;
pub mod audit_log;
pub mod code_refs;
pub mod contexts;
pub mod custom_roles;
pub mod environments;
pub mod experiments;
pub mod flags;
pub mod integrations;
pub mod members;
pub mod metrics;
pub mod projects;
pub mod relay;
pub mod releases;
pub mod schemas;
pub mod segments;
pub mod teams;
pub mod webhooks;

use crate::core::block::BlockDefinition;
use crate::domain::model::{FieldKind, InputField};

pub fn all_blocks() -> Vec<BlockDefinition> {
    [
        account::blocks(),
        projects::blocks(),
        environments::blocks(),
        flags::blocks(),
        segments::blocks(),
        contexts::blocks(),
        access_tokens::blocks(),
        members::blocks(),
        teams::blocks(),
        custom_roles::blocks(),
        webhooks::blocks(),
        audit_log::blocks(),
        approvals::blocks(),
        experiments::blocks(),
        metrics::blocks(),
        releases::blocks(),
        relay::blocks(),
        code_refs::blocks(),
        integrations::blocks(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub(crate) fn paging() -> [InputField; 2] {
    [
        InputField::query("limit", FieldKind::Integer).describe("The number of items to return"),
        InputField::query("offset", FieldKind::Integer)
            .describe("Where to start in the list, for pagination"),
    ]
}

pub(crate) fn filter() -> InputField {
    InputField::query("filter", FieldKind::String).describe("A comma-separated list of filters")
}

pub(crate) fn expand() -> InputField {
    InputField::query("expand", FieldKind::String)
        .describe("A comma-separated list of properties to expand in the response")
}

pub(crate) fn sort() -> InputField {
    InputField::query("sort", FieldKind::String).describe("A field to sort by; prefix with - for descending")
}

/// JSON Patch 陣列（RFC 6902）
pub(crate) fn json_patch() -> InputField {
    InputField::body("patch", FieldKind::Array)
        .required()
        .describe("A JSON Patch representation of the desired changes")
}

pub(crate) fn comment() -> InputField {
    InputField::body("comment", FieldKind::String).describe("Optional comment describing the change")
}

pub(crate) fn instructions() -> InputField {
    InputField::body("instructions", FieldKind::Array)
        .required()
        .describe("Semantic patch instructions")
}

pub(crate) fn tags() -> InputField {
    InputField::body("tags", FieldKind::Array).describe("Tags for the resource")
}

pub(crate) fn expiry() -> InputField {
    InputField::query("expiry", FieldKind::Integer)
        .describe("Expiration time of the old key, in Unix milliseconds")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{FieldLocation, HttpMethod};
    use std::collections::HashSet;

    #[test]
    fn test_block_ids_are_unique() {
        let blocks = all_blocks();
        let ids: HashSet<&str> = blocks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), blocks.len());
    }

    #[test]
    fn test_every_block_is_well_formed() {
        for block in all_blocks() {
            assert!(!block.name.is_empty(), "{} has no name", block.id);
            assert!(!block.category.is_empty(), "{} has no category", block.id);
            assert!(
                block.path.as_str().starts_with("/api/v2"),
                "{} has unexpected path {}",
                block.id,
                block.path
            );
            assert_eq!(block.output_schema["type"], "object", "{} output schema", block.id);

            // 每個路徑參數都必須宣告為必填的路徑欄位
            for param in block.path.params() {
                let field = block.field(param).expect("path param declared");
                assert_eq!(field.location, FieldLocation::Path, "{}.{}", block.id, param);
                assert!(field.required, "{}.{}", block.id, param);
            }

            if matches!(block.method, HttpMethod::Get | HttpMethod::Delete) {
                assert!(!block.has_body(), "{} should not send a body", block.id);
            }
        }
    }

    #[test]
    fn test_catalog_size() {
        assert!(all_blocks().len() >= 150);
    }
}
