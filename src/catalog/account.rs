use super::schemas;
use crate::core::block::BlockDefinition;
use crate::domain::model::HttpMethod;

const CATEGORY: &str = "account";

pub fn blocks() -> Vec<BlockDefinition> {
    vec![
        BlockDefinition::new("get_root", "Get API root", HttpMethod::Get, "/api/v2")
            .category(CATEGORY)
            .description("Get all of the resource categories the API supports")
            .output(schemas::root()),
        BlockDefinition::new(
            "get_caller_identity",
            "Identify the caller",
            HttpMethod::Get,
            "/api/v2/caller-identity",
        )
        .category(CATEGORY)
        .description("Get basic information about the identity used to make the request")
        .output(schemas::caller_identity()),
        BlockDefinition::new(
            "get_ips",
            "Get list of public IP addresses",
            HttpMethod::Get,
            "/api/v2/public-ip-list",
        )
        .category(CATEGORY)
        .output(schemas::ip_list()),
    ]
}
