use super::{comment, expand, filter, instructions, json_patch, paging, schemas, sort, tags};
use crate::core::block::BlockDefinition;
use crate::domain::model::{FieldKind, HttpMethod, InputField};

const CATEGORY: &str = "flags";
const TRIGGERS: &str = "flag-triggers";
const LINKS: &str = "flag-links";
const SCHEDULED_CHANGES: &str = "scheduled-changes";
const WORKFLOWS: &str = "workflows";

pub fn blocks() -> Vec<BlockDefinition> {
    let mut blocks = feature_flags();
    blocks.extend(flag_statuses());
    blocks.extend(triggers());
    blocks.extend(links());
    blocks.extend(scheduled_changes());
    blocks.extend(workflows());
    blocks
}

fn env_query() -> InputField {
    InputField::query("env", FieldKind::String)
        .describe("Filter configurations by environment key")
}

fn feature_flags() -> Vec<BlockDefinition> {
    vec![
        BlockDefinition::new(
            "list_feature_flags",
            "List feature flags",
            HttpMethod::Get,
            "/api/v2/flags/{projectKey}",
        )
        .category(CATEGORY)
        .description("Get a list of all feature flags in the given project")
        .input(InputField::path("projectKey").describe("The project key"))
        .inputs(paging())
        .inputs([
            env_query(),
            InputField::query("tag", FieldKind::String).describe("Filter feature flags by tag"),
            InputField::query("archived", FieldKind::Boolean),
            InputField::query("summary", FieldKind::Boolean)
                .describe("Whether to omit flag targeting rules from the response"),
            filter(),
            sort(),
            InputField::query("compare", FieldKind::Boolean),
            expand(),
        ])
        .output(schemas::collection(schemas::feature_flag())),
        BlockDefinition::new(
            "create_feature_flag",
            "Create a feature flag",
            HttpMethod::Post,
            "/api/v2/flags/{projectKey}",
        )
        .category(CATEGORY)
        .description("Create a feature flag with the given name, key, and variations")
        .inputs([
            InputField::path("projectKey").describe("The project key"),
            InputField::query("clone", FieldKind::String)
                .describe("The key of the feature flag to be cloned"),
            InputField::body("name", FieldKind::String)
                .required()
                .describe("A human-friendly name for the feature flag"),
            InputField::body("key", FieldKind::String)
                .required()
                .describe("A unique key used to reference the flag in your code"),
            InputField::body("description", FieldKind::String),
            InputField::body("includeInSnippet", FieldKind::Boolean),
            InputField::body("clientSideAvailability", FieldKind::Object),
            InputField::body("variations", FieldKind::Array)
                .describe("An array of possible variations for the flag"),
            InputField::body("temporary", FieldKind::Boolean),
            tags(),
            InputField::body("customProperties", FieldKind::Object),
            InputField::body("defaults", FieldKind::Object),
            InputField::body("purpose", FieldKind::String),
            InputField::body("maintainerId", FieldKind::String),
            InputField::body("maintainerTeamKey", FieldKind::String),
            InputField::body("initialPrerequisites", FieldKind::Array),
            InputField::body("isFlagOn", FieldKind::Boolean),
        ])
        .output(schemas::feature_flag()),
        BlockDefinition::new(
            "get_feature_flag",
            "Get feature flag",
            HttpMethod::Get,
            "/api/v2/flags/{projectKey}/{featureFlagKey}",
        )
        .category(CATEGORY)
        .description("Get a single feature flag by key")
        .inputs([env_query(), expand()])
        .output(schemas::feature_flag()),
        BlockDefinition::new(
            "update_feature_flag",
            "Update feature flag",
            HttpMethod::Patch,
            "/api/v2/flags/{projectKey}/{featureFlagKey}",
        )
        .category(CATEGORY)
        .description("Perform a partial update to a feature flag using JSON patch")
        .inputs([json_patch(), comment()])
        .output(schemas::feature_flag()),
        BlockDefinition::new(
            "update_feature_flag_semantic",
            "Update feature flag with semantic patch",
            HttpMethod::Patch,
            "/api/v2/flags/{projectKey}/{featureFlagKey}",
        )
        .category(CATEGORY)
        .description("Perform a partial update to a feature flag using semantic patch instructions")
        .semantic_patch()
        .inputs([
            instructions(),
            comment(),
            InputField::body("environmentKey", FieldKind::String)
                .describe("Required when instructions target environment-specific settings"),
        ])
        .output(schemas::feature_flag()),
        BlockDefinition::new(
            "delete_feature_flag",
            "Delete feature flag",
            HttpMethod::Delete,
            "/api/v2/flags/{projectKey}/{featureFlagKey}",
        )
        .category(CATEGORY)
        .description("Delete a feature flag in all environments")
        .output(schemas::empty()),
        BlockDefinition::new(
            "copy_feature_flag",
            "Copy feature flag",
            HttpMethod::Post,
            "/api/v2/flags/{projectKey}/{featureFlagKey}/copy",
        )
        .category(CATEGORY)
        .description("Copy flag settings from a source environment to a target environment")
        .inputs([
            InputField::body("source", FieldKind::Object)
                .required()
                .describe("The source environment key and optional version"),
            InputField::body("target", FieldKind::Object)
                .required()
                .describe("The target environment key and optional version"),
            comment(),
            InputField::body("includedActions", FieldKind::Array),
            InputField::body("excludedActions", FieldKind::Array),
        ])
        .output(schemas::feature_flag()),
        BlockDefinition::new(
            "get_expiring_context_targets",
            "Get expiring context targets for feature flag",
            HttpMethod::Get,
            "/api/v2/flags/{projectKey}/{featureFlagKey}/expiring-targets/{environmentKey}",
        )
        .category(CATEGORY)
        .output(schemas::expiring_targets()),
        BlockDefinition::new(
            "patch_expiring_targets",
            "Update expiring context targets on feature flag",
            HttpMethod::Patch,
            "/api/v2/flags/{projectKey}/{featureFlagKey}/expiring-targets/{environmentKey}",
        )
        .category(CATEGORY)
        .semantic_patch()
        .inputs([instructions(), comment()])
        .output(schemas::expiring_targets()),
        BlockDefinition::new(
            "get_dependent_flags",
            "List dependent feature flags",
            HttpMethod::Get,
            "/api/v2/flags/{projectKey}/{featureFlagKey}/dependent-flags",
        )
        .category(CATEGORY)
        .description("List dependent flags across all environments for the flag")
        .beta()
        .output(schemas::dependent_flags()),
        BlockDefinition::new(
            "get_dependent_flags_by_env",
            "List dependent feature flags by environment",
            HttpMethod::Get,
            "/api/v2/flags/{projectKey}/{environmentKey}/{featureFlagKey}/dependent-flags",
        )
        .category(CATEGORY)
        .beta()
        .output(schemas::dependent_flags()),
    ]
}

fn flag_statuses() -> Vec<BlockDefinition> {
    vec![
        BlockDefinition::new(
            "list_feature_flag_statuses",
            "List feature flag statuses",
            HttpMethod::Get,
            "/api/v2/flag-statuses/{projectKey}/{environmentKey}",
        )
        .category(CATEGORY)
        .output(schemas::collection(schemas::flag_status())),
        BlockDefinition::new(
            "get_feature_flag_status",
            "Get feature flag status",
            HttpMethod::Get,
            "/api/v2/flag-statuses/{projectKey}/{environmentKey}/{featureFlagKey}",
        )
        .category(CATEGORY)
        .output(schemas::flag_status()),
        BlockDefinition::new(
            "get_feature_flag_status_across_environments",
            "Get flag status across environments",
            HttpMethod::Get,
            "/api/v2/flag-status/{projectKey}/{featureFlagKey}",
        )
        .category(CATEGORY)
        .input(env_query())
        .output(schemas::flag_status_across_environments()),
    ]
}

fn triggers() -> Vec<BlockDefinition> {
    const BASE: &str = "/api/v2/flags/{projectKey}/{featureFlagKey}/triggers/{environmentKey}";
    const ITEM: &str = "/api/v2/flags/{projectKey}/{featureFlagKey}/triggers/{environmentKey}/{id}";

    vec![
        BlockDefinition::new("get_trigger_workflows", "List flag triggers", HttpMethod::Get, BASE)
            .category(TRIGGERS)
            .output(schemas::collection(schemas::trigger())),
        BlockDefinition::new(
            "create_trigger_workflow",
            "Create flag trigger",
            HttpMethod::Post,
            BASE,
        )
        .category(TRIGGERS)
        .description("Create a new flag trigger")
        .inputs([
            comment(),
            InputField::body("integrationKey", FieldKind::String)
                .required()
                .describe("The unique identifier of the integration for the trigger"),
            InputField::body("instructions", FieldKind::Array)
                .describe("The action to perform when triggering, e.g. turnFlagOn"),
        ])
        .output(schemas::trigger()),
        BlockDefinition::new("get_trigger_workflow_by_id", "Get flag trigger by ID", HttpMethod::Get, ITEM)
            .category(TRIGGERS)
            .output(schemas::trigger()),
        BlockDefinition::new("patch_trigger_workflow", "Update flag trigger", HttpMethod::Patch, ITEM)
            .category(TRIGGERS)
            .description("Update a flag trigger using instructions such as enableTrigger or replaceTriggerActionInstructions")
            .inputs([
                comment(),
                InputField::body("instructions", FieldKind::Array),
            ])
            .output(schemas::trigger()),
        BlockDefinition::new("delete_trigger_workflow", "Delete flag trigger", HttpMethod::Delete, ITEM)
            .category(TRIGGERS)
            .output(schemas::empty()),
    ]
}

fn links() -> Vec<BlockDefinition> {
    const BASE: &str = "/api/v2/flag-links/projects/{projectKey}/flags/{featureFlagKey}";
    const ITEM: &str = "/api/v2/flag-links/projects/{projectKey}/flags/{featureFlagKey}/{id}";

    vec![
        BlockDefinition::new("get_flag_links", "List flag links", HttpMethod::Get, BASE)
            .category(LINKS)
            .beta()
            .output(schemas::collection(schemas::flag_link())),
        BlockDefinition::new("create_flag_link", "Create flag link", HttpMethod::Post, BASE)
            .category(LINKS)
            .beta()
            .inputs([
                InputField::body("key", FieldKind::String),
                InputField::body("integrationKey", FieldKind::String),
                InputField::body("timestamp", FieldKind::Integer),
                InputField::body("deepLink", FieldKind::String),
                InputField::body("title", FieldKind::String),
                InputField::body("description", FieldKind::String),
                InputField::body("metadata", FieldKind::Object),
            ])
            .output(schemas::flag_link()),
        BlockDefinition::new("update_flag_link", "Update flag link", HttpMethod::Patch, ITEM)
            .category(LINKS)
            .beta()
            .body_from(json_patch())
            .output(schemas::flag_link()),
        BlockDefinition::new("delete_flag_link", "Delete flag link", HttpMethod::Delete, ITEM)
            .category(LINKS)
            .beta()
            .output(schemas::empty()),
    ]
}

fn scheduled_changes() -> Vec<BlockDefinition> {
    const BASE: &str = "/api/v2/projects/{projectKey}/flags/{featureFlagKey}/environments/{environmentKey}/scheduled-changes";
    const ITEM: &str = "/api/v2/projects/{projectKey}/flags/{featureFlagKey}/environments/{environmentKey}/scheduled-changes/{id}";

    let ignore_conflicts = || {
        InputField::query("ignoreConflicts", FieldKind::Boolean)
            .describe("Whether to succeed even if the change conflicts with another scheduled change")
    };

    vec![
        BlockDefinition::new(
            "get_flag_config_scheduled_changes",
            "List scheduled changes",
            HttpMethod::Get,
            BASE,
        )
        .category(SCHEDULED_CHANGES)
        .output(schemas::collection(schemas::scheduled_change())),
        BlockDefinition::new(
            "post_flag_config_scheduled_changes",
            "Create scheduled changes workflow",
            HttpMethod::Post,
            BASE,
        )
        .category(SCHEDULED_CHANGES)
        .inputs([
            ignore_conflicts(),
            comment(),
            InputField::body("executionDate", FieldKind::Integer)
                .required()
                .describe("When the scheduled changes should be executed, in Unix milliseconds"),
            instructions(),
        ])
        .output(schemas::scheduled_change()),
        BlockDefinition::new(
            "get_feature_flag_scheduled_change",
            "Get a scheduled change",
            HttpMethod::Get,
            ITEM,
        )
        .category(SCHEDULED_CHANGES)
        .output(schemas::scheduled_change()),
        BlockDefinition::new(
            "patch_flag_config_scheduled_change",
            "Update scheduled changes workflow",
            HttpMethod::Patch,
            ITEM,
        )
        .category(SCHEDULED_CHANGES)
        .inputs([ignore_conflicts(), comment(), instructions()])
        .output(schemas::scheduled_change()),
        BlockDefinition::new(
            "delete_flag_config_scheduled_changes",
            "Delete scheduled changes workflow",
            HttpMethod::Delete,
            ITEM,
        )
        .category(SCHEDULED_CHANGES)
        .output(schemas::empty()),
    ]
}

fn workflows() -> Vec<BlockDefinition> {
    const BASE: &str = "/api/v2/projects/{projectKey}/flags/{featureFlagKey}/environments/{environmentKey}/workflows";
    const ITEM: &str = "/api/v2/projects/{projectKey}/flags/{featureFlagKey}/environments/{environmentKey}/workflows/{workflowId}";

    vec![
        BlockDefinition::new("get_workflows", "Get workflows", HttpMethod::Get, BASE)
            .category(WORKFLOWS)
            .input(InputField::query("status", FieldKind::String))
            .inputs(paging())
            .output(schemas::collection(schemas::workflow())),
        BlockDefinition::new("post_workflow", "Create workflow", HttpMethod::Post, BASE)
            .category(WORKFLOWS)
            .inputs([
                InputField::query("dryRun", FieldKind::Boolean),
                InputField::body("maintainerId", FieldKind::String),
                InputField::body("name", FieldKind::String).required(),
                InputField::body("description", FieldKind::String),
                InputField::body("stages", FieldKind::Array),
                InputField::body("templateKey", FieldKind::String),
            ])
            .output(schemas::workflow()),
        BlockDefinition::new("get_custom_workflow", "Get custom workflow", HttpMethod::Get, ITEM)
            .category(WORKFLOWS)
            .output(schemas::workflow()),
        BlockDefinition::new("delete_workflow", "Delete workflow", HttpMethod::Delete, ITEM)
            .category(WORKFLOWS)
            .output(schemas::empty()),
    ]
}
