//! Output JSON schemas mirroring LaunchDarkly API responses.

use serde_json::{json, Value};

fn object(properties: Value) -> Value {
    json!({ "type": "object", "properties": properties })
}

fn string() -> Value {
    json!({ "type": "string" })
}

fn integer() -> Value {
    json!({ "type": "integer" })
}

fn boolean() -> Value {
    json!({ "type": "boolean" })
}

fn strings() -> Value {
    json!({ "type": "array", "items": { "type": "string" } })
}

fn array_of(item: Value) -> Value {
    json!({ "type": "array", "items": item })
}

fn any_object() -> Value {
    json!({ "type": "object", "additionalProperties": true })
}

pub fn links() -> Value {
    json!({
        "type": "object",
        "additionalProperties": {
            "type": "object",
            "properties": { "href": { "type": "string" }, "type": { "type": "string" } }
        }
    })
}

/// `{ items, totalCount, _links }` 形式的清單回應
pub fn collection(item: Value) -> Value {
    object(json!({
        "items": array_of(item),
        "totalCount": integer(),
        "_links": links(),
    }))
}

pub fn any_collection() -> Value {
    collection(any_object())
}

/// 沒有回應內容的端點（例如 DELETE 回 204）
pub fn empty() -> Value {
    json!({ "type": "object", "additionalProperties": false })
}

pub fn member_summary() -> Value {
    object(json!({
        "_id": string(),
        "_links": links(),
        "email": string(),
        "firstName": string(),
        "lastName": string(),
        "role": string(),
    }))
}

pub fn variation() -> Value {
    object(json!({
        "_id": string(),
        "value": {},
        "name": string(),
        "description": string(),
    }))
}

pub fn flag_environment() -> Value {
    object(json!({
        "on": boolean(),
        "archived": boolean(),
        "salt": string(),
        "sel": string(),
        "lastModified": integer(),
        "version": integer(),
        "targets": array_of(any_object()),
        "contextTargets": array_of(any_object()),
        "rules": array_of(any_object()),
        "fallthrough": any_object(),
        "offVariation": integer(),
        "prerequisites": array_of(any_object()),
        "_site": links(),
        "_environmentName": string(),
        "trackEvents": boolean(),
        "trackEventsFallthrough": boolean(),
    }))
}

pub fn feature_flag() -> Value {
    object(json!({
        "name": string(),
        "kind": { "type": "string", "enum": ["boolean", "multivariate"] },
        "description": string(),
        "key": string(),
        "_version": integer(),
        "creationDate": integer(),
        "includeInSnippet": boolean(),
        "clientSideAvailability": object(json!({
            "usingMobileKey": boolean(),
            "usingEnvironmentId": boolean(),
        })),
        "variations": array_of(variation()),
        "temporary": boolean(),
        "tags": strings(),
        "_links": links(),
        "maintainerId": string(),
        "_maintainer": member_summary(),
        "maintainerTeamKey": string(),
        "customProperties": any_object(),
        "archived": boolean(),
        "archivedDate": integer(),
        "deprecated": boolean(),
        "defaults": object(json!({ "onVariation": integer(), "offVariation": integer() })),
        "environments": { "type": "object", "additionalProperties": flag_environment() },
        "purpose": string(),
    }))
}

pub fn flag_status() -> Value {
    object(json!({
        "name": { "type": "string", "enum": ["new", "inactive", "active", "launched"] },
        "lastRequested": string(),
        "default": {},
        "_links": links(),
    }))
}

pub fn flag_status_across_environments() -> Value {
    object(json!({
        "environments": { "type": "object", "additionalProperties": flag_status() },
        "key": string(),
        "_links": links(),
    }))
}

pub fn dependent_flags() -> Value {
    collection(object(json!({
        "key": string(),
        "name": string(),
        "environments": array_of(any_object()),
        "_links": links(),
    })))
}

pub fn expiring_targets() -> Value {
    collection(object(json!({
        "_id": string(),
        "_version": integer(),
        "expirationDate": integer(),
        "contextKind": string(),
        "contextKey": string(),
        "targetType": string(),
        "variationId": string(),
        "_resourceId": any_object(),
    })))
}

pub fn flag_defaults() -> Value {
    object(json!({
        "_links": links(),
        "key": string(),
        "tags": strings(),
        "temporary": boolean(),
        "defaultClientSideAvailability": any_object(),
        "booleanDefaults": object(json!({
            "trueDisplayName": string(),
            "falseDisplayName": string(),
            "trueDescription": string(),
            "falseDescription": string(),
            "onVariation": integer(),
            "offVariation": integer(),
        })),
    }))
}

pub fn environment() -> Value {
    object(json!({
        "_links": links(),
        "_id": string(),
        "key": string(),
        "name": string(),
        "apiKey": string(),
        "mobileKey": string(),
        "color": string(),
        "defaultTtl": integer(),
        "secureMode": boolean(),
        "defaultTrackEvents": boolean(),
        "requireComments": boolean(),
        "confirmChanges": boolean(),
        "tags": strings(),
        "critical": boolean(),
    }))
}

pub fn project() -> Value {
    object(json!({
        "_links": links(),
        "_id": string(),
        "key": string(),
        "includeInSnippetByDefault": boolean(),
        "defaultClientSideAvailability": any_object(),
        "name": string(),
        "tags": strings(),
        "environments": collection(environment()),
    }))
}

pub fn segment() -> Value {
    object(json!({
        "name": string(),
        "description": string(),
        "tags": strings(),
        "creationDate": integer(),
        "lastModifiedDate": integer(),
        "key": string(),
        "included": strings(),
        "excluded": strings(),
        "includedContexts": array_of(any_object()),
        "excludedContexts": array_of(any_object()),
        "_links": links(),
        "rules": array_of(any_object()),
        "version": integer(),
        "deleted": boolean(),
        "unbounded": boolean(),
        "unboundedContextKind": string(),
        "generation": integer(),
    }))
}

pub fn segment_membership() -> Value {
    object(json!({ "included": boolean(), "excluded": boolean() }))
}

pub fn export() -> Value {
    object(json!({
        "id": string(),
        "segmentKey": string(),
        "creationTime": integer(),
        "status": string(),
        "sizeBytes": integer(),
        "size": string(),
        "initiator": any_object(),
        "_links": links(),
    }))
}

pub fn context_kind() -> Value {
    object(json!({
        "key": string(),
        "name": string(),
        "description": string(),
        "version": integer(),
        "creationDate": integer(),
        "lastModified": integer(),
        "archived": boolean(),
        "hideInTargeting": boolean(),
        "_links": links(),
    }))
}

pub fn context_instances() -> Value {
    object(json!({
        "_links": links(),
        "totalCount": integer(),
        "_environmentId": string(),
        "continuationToken": string(),
        "items": array_of(object(json!({
            "id": string(),
            "context": any_object(),
            "applicationId": string(),
            "lastSeen": string(),
        }))),
    }))
}

pub fn context_attributes() -> Value {
    collection(object(json!({
        "name": string(),
        "weight": integer(),
        "redacted": boolean(),
    })))
}

pub fn context_attribute_values() -> Value {
    collection(object(json!({ "name": {}, "weight": integer() })))
}

pub fn context_evaluations() -> Value {
    collection(object(json!({
        "name": string(),
        "key": string(),
        "_value": {},
        "reason": any_object(),
        "_links": links(),
    })))
}

pub fn access_token() -> Value {
    object(json!({
        "_id": string(),
        "ownerId": string(),
        "memberId": string(),
        "_member": member_summary(),
        "name": string(),
        "description": string(),
        "creationDate": integer(),
        "lastModified": integer(),
        "customRoleIds": strings(),
        "inlineRole": array_of(any_object()),
        "role": string(),
        "token": string(),
        "serviceToken": boolean(),
        "_links": links(),
        "defaultApiVersion": integer(),
        "lastUsed": integer(),
    }))
}

pub fn member() -> Value {
    object(json!({
        "_links": links(),
        "_id": string(),
        "firstName": string(),
        "lastName": string(),
        "role": string(),
        "email": string(),
        "_pendingInvite": boolean(),
        "_verified": boolean(),
        "customRoles": strings(),
        "mfa": string(),
        "_lastSeen": integer(),
        "creationDate": integer(),
        "teams": array_of(object(json!({ "key": string(), "name": string() }))),
    }))
}

pub fn team() -> Value {
    object(json!({
        "description": string(),
        "key": string(),
        "name": string(),
        "_access": any_object(),
        "_creationDate": integer(),
        "_links": links(),
        "_lastModified": integer(),
        "_version": integer(),
        "_idpSynced": boolean(),
        "roleAttributes": any_object(),
        "roles": collection(any_object()),
        "maintainers": collection(member_summary()),
        "projects": collection(any_object()),
    }))
}

pub fn custom_role() -> Value {
    object(json!({
        "_id": string(),
        "_links": links(),
        "description": string(),
        "key": string(),
        "name": string(),
        "policy": array_of(object(json!({
            "effect": { "type": "string", "enum": ["allow", "deny"] },
            "resources": strings(),
            "notResources": strings(),
            "actions": strings(),
            "notActions": strings(),
        }))),
        "basePermissions": string(),
        "resourceCategory": string(),
        "assignedTo": any_object(),
    }))
}

pub fn webhook() -> Value {
    object(json!({
        "_links": links(),
        "_id": string(),
        "name": string(),
        "url": string(),
        "secret": string(),
        "statements": array_of(any_object()),
        "on": boolean(),
        "tags": strings(),
    }))
}

pub fn audit_log_entry() -> Value {
    object(json!({
        "_links": links(),
        "_id": string(),
        "_accountId": string(),
        "date": integer(),
        "accesses": array_of(object(json!({ "action": string(), "resource": string() }))),
        "kind": string(),
        "name": string(),
        "description": string(),
        "shortDescription": string(),
        "comment": string(),
        "subject": any_object(),
        "member": member_summary(),
        "token": any_object(),
        "app": any_object(),
        "titleVerb": string(),
        "title": string(),
        "target": any_object(),
        "parent": any_object(),
        "delta": {},
        "triggerBody": {},
        "merge": {},
        "previousVersion": {},
        "currentVersion": {},
    }))
}

pub fn approval_request() -> Value {
    object(json!({
        "_id": string(),
        "_version": integer(),
        "creationDate": integer(),
        "serviceKind": string(),
        "requestorId": string(),
        "description": string(),
        "reviewStatus": { "type": "string", "enum": ["approved", "declined", "pending"] },
        "allReviews": array_of(object(json!({
            "_id": string(),
            "kind": string(),
            "creationDate": integer(),
            "comment": string(),
            "memberId": string(),
        }))),
        "notifyMemberIds": strings(),
        "appliedDate": integer(),
        "appliedByMemberId": string(),
        "status": { "type": "string", "enum": ["pending", "completed", "failed", "scheduled"] },
        "instructions": array_of(any_object()),
        "conflicts": array_of(any_object()),
        "_links": links(),
        "executionDate": integer(),
        "operatingOnId": string(),
        "resourceId": string(),
    }))
}

pub fn scheduled_change() -> Value {
    object(json!({
        "_id": string(),
        "_creationDate": integer(),
        "_maintainerId": string(),
        "_version": integer(),
        "executionDate": integer(),
        "instructions": array_of(any_object()),
        "conflicts": {},
        "_links": links(),
    }))
}

pub fn trigger() -> Value {
    object(json!({
        "_id": string(),
        "_version": integer(),
        "_creationDate": integer(),
        "_maintainerId": string(),
        "_maintainer": member_summary(),
        "enabled": boolean(),
        "_integrationKey": string(),
        "instructions": array_of(any_object()),
        "_lastTriggeredAt": integer(),
        "_recentTriggerBodies": array_of(any_object()),
        "_triggerCount": integer(),
        "triggerURL": string(),
        "_links": links(),
    }))
}

pub fn flag_link() -> Value {
    object(json!({
        "_links": links(),
        "_key": string(),
        "_integrationKey": string(),
        "_id": string(),
        "_deepLink": string(),
        "_timestamp": any_object(),
        "title": string(),
        "description": string(),
        "_metadata": any_object(),
        "_createdAt": integer(),
        "_member": member_summary(),
    }))
}

pub fn workflow() -> Value {
    object(json!({
        "_id": string(),
        "_version": integer(),
        "_conflicts": array_of(any_object()),
        "_creationDate": integer(),
        "_maintainerId": string(),
        "_links": links(),
        "name": string(),
        "description": string(),
        "kind": string(),
        "stages": array_of(any_object()),
        "_execution": object(json!({ "status": string(), "stopDate": integer() })),
        "meta": any_object(),
        "templateKey": string(),
    }))
}

pub fn experiment() -> Value {
    object(json!({
        "_id": string(),
        "key": string(),
        "name": string(),
        "description": string(),
        "_maintainerId": string(),
        "_creationDate": integer(),
        "environmentKey": string(),
        "archivedDate": integer(),
        "tags": strings(),
        "_links": links(),
        "holdoutId": string(),
        "currentIteration": iteration(),
        "draftIteration": iteration(),
        "previousIterations": array_of(iteration()),
    }))
}

pub fn iteration() -> Value {
    object(json!({
        "_id": string(),
        "hypothesis": string(),
        "status": string(),
        "createdAt": integer(),
        "startedAt": integer(),
        "endedAt": integer(),
        "winningTreatmentId": string(),
        "winningReason": string(),
        "canReshuffleTraffic": boolean(),
        "flags": any_object(),
        "primaryMetric": any_object(),
        "randomizationUnit": string(),
        "attributes": strings(),
        "treatments": array_of(any_object()),
        "secondaryMetrics": array_of(any_object()),
        "metrics": array_of(any_object()),
    }))
}

pub fn experimentation_settings() -> Value {
    object(json!({
        "_projectId": string(),
        "_projectKey": string(),
        "randomizationUnits": array_of(object(json!({
            "randomizationUnit": string(),
            "default": boolean(),
            "standardRandomizationUnit": string(),
            "_hidden": boolean(),
            "_displayName": string(),
        }))),
        "_creationDate": integer(),
        "_links": links(),
    }))
}

pub fn metric() -> Value {
    object(json!({
        "experimentCount": integer(),
        "metricGroupCount": integer(),
        "_id": string(),
        "_versionId": string(),
        "key": string(),
        "name": string(),
        "kind": { "type": "string", "enum": ["pageview", "click", "custom"] },
        "_attachedFlagCount": integer(),
        "_links": links(),
        "_site": links(),
        "_access": any_object(),
        "tags": strings(),
        "_creationDate": integer(),
        "lastModified": any_object(),
        "maintainerId": string(),
        "_maintainer": member_summary(),
        "description": string(),
        "category": string(),
        "isNumeric": boolean(),
        "successCriteria": string(),
        "unit": string(),
        "eventKey": string(),
        "randomizationUnits": strings(),
        "unitAggregationType": string(),
        "analysisType": string(),
        "percentileValue": integer(),
        "eventDefault": any_object(),
        "selector": string(),
        "urls": array_of(any_object()),
    }))
}

pub fn metric_group() -> Value {
    object(json!({
        "_id": string(),
        "key": string(),
        "name": string(),
        "kind": { "type": "string", "enum": ["funnel", "standard"] },
        "description": string(),
        "_links": links(),
        "_access": any_object(),
        "tags": strings(),
        "_creationDate": integer(),
        "_lastModified": integer(),
        "maintainer": any_object(),
        "metrics": array_of(any_object()),
        "_version": integer(),
        "experiments": array_of(any_object()),
        "experimentCount": integer(),
    }))
}

pub fn holdout() -> Value {
    object(json!({
        "_id": string(),
        "status": string(),
        "holdoutamount": string(),
        "createdAt": integer(),
        "updatedAt": integer(),
        "baseExperiment": experiment(),
        "experiments": array_of(any_object()),
        "metrics": array_of(any_object()),
    }))
}

pub fn release_pipeline() -> Value {
    object(json!({
        "createdAt": string(),
        "description": string(),
        "key": string(),
        "name": string(),
        "phases": array_of(object(json!({
            "id": string(),
            "audiences": array_of(any_object()),
            "name": string(),
            "configuration": any_object(),
        }))),
        "tags": strings(),
        "_version": integer(),
        "_access": any_object(),
        "isProjectDefault": boolean(),
        "_isLegacy": boolean(),
    }))
}

pub fn release() -> Value {
    object(json!({
        "_links": links(),
        "name": string(),
        "releasePipelineKey": string(),
        "releasePipelineDescription": string(),
        "phases": array_of(any_object()),
        "_version": integer(),
        "_releaseVariationId": string(),
        "_canceledAt": integer(),
    }))
}

pub fn relay_auto_config() -> Value {
    object(json!({
        "_id": string(),
        "_creator": member_summary(),
        "_access": any_object(),
        "name": string(),
        "policy": array_of(any_object()),
        "fullKey": string(),
        "displayKey": string(),
        "creationDate": integer(),
        "lastModified": integer(),
    }))
}

pub fn repository() -> Value {
    object(json!({
        "name": string(),
        "sourceLink": string(),
        "commitUrlTemplate": string(),
        "hunkUrlTemplate": string(),
        "type": { "type": "string", "enum": ["bitbucket", "custom", "github", "gitlab"] },
        "defaultBranch": string(),
        "enabled": boolean(),
        "version": integer(),
        "branches": array_of(branch()),
        "_links": links(),
    }))
}

pub fn branch() -> Value {
    object(json!({
        "name": string(),
        "head": string(),
        "updateSequenceId": integer(),
        "syncTime": integer(),
        "references": array_of(any_object()),
        "_links": links(),
    }))
}

pub fn code_ref_statistics() -> Value {
    object(json!({
        "_links": links(),
        "flags": { "type": "object", "additionalProperties": array_of(any_object()) },
        "projects": array_of(any_object()),
        "self": any_object(),
    }))
}

pub fn destination() -> Value {
    object(json!({
        "_id": string(),
        "_links": links(),
        "name": string(),
        "kind": string(),
        "version": integer(),
        "config": any_object(),
        "on": boolean(),
        "_access": any_object(),
    }))
}

pub fn application() -> Value {
    object(json!({
        "flags": any_object(),
        "_access": any_object(),
        "_links": links(),
        "autoAdded": boolean(),
        "creationDate": integer(),
        "description": string(),
        "key": string(),
        "kind": { "type": "string", "enum": ["browser", "mobile", "server"] },
        "_maintainer": any_object(),
        "name": string(),
    }))
}

pub fn caller_identity() -> Value {
    object(json!({
        "accountId": string(),
        "environmentId": string(),
        "projectId": string(),
        "environmentName": string(),
        "projectName": string(),
        "authKind": string(),
        "tokenKind": string(),
        "clientId": string(),
        "tokenName": string(),
        "tokenId": string(),
        "memberId": string(),
        "serviceToken": boolean(),
    }))
}

pub fn root() -> Value {
    object(json!({ "links": links() }))
}

pub fn ip_list() -> Value {
    object(json!({ "addresses": strings(), "outboundAddresses": strings() }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_wraps_item_schema() {
        let schema = collection(feature_flag());
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["items"]["type"], "array");
        assert_eq!(
            schema["properties"]["items"]["items"]["properties"]["key"]["type"],
            "string"
        );
    }
}
