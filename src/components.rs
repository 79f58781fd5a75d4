//! Reusable pieces of the document: the three security schemes and the
//! named schemas the policy, OIDC, and usage operations reference.
//!
//! Everything else in the document declares its schemas inline at the point
//! of use.

use indexmap::IndexMap;
use openapiv3::{
    APIKeyLocation, AdditionalProperties, Components, ObjectType, ReferenceOr, Schema, SchemaData,
    SchemaKind, SecurityScheme, Type,
};

use crate::nodes::*;

fn api_key_header() -> SecurityScheme {
    SecurityScheme::APIKey {
        location: APIKeyLocation::Header,
        name: "Circle-Token".to_string(),
        description: Some(
            "Project API tokens are not supported for API v2. Use a personal API token."
                .to_string(),
        ),
        extensions: IndexMap::new(),
    }
}

fn api_key_query() -> SecurityScheme {
    SecurityScheme::APIKey {
        location: APIKeyLocation::Query,
        name: "circle-token".to_string(),
        description: Some(
            "DEPRECATED - we will remove this option in the future. Project API tokens are not \
             supported for API v2. Use a personal API token."
                .to_string(),
        ),
        extensions: IndexMap::new(),
    }
}

fn basic_auth() -> SecurityScheme {
    SecurityScheme::HTTP {
        scheme: "basic".to_string(),
        bearer_format: None,
        description: Some(
            "HTTP basic authentication. The username should be set as the circle-token value, \
             and the password should be left blank. Note that project tokens are currently not \
             supported on API v2."
                .to_string(),
        ),
        extensions: IndexMap::new(),
    }
}

/// Object whose properties may be references to other named schemas.
fn object_with_refs(
    properties: Vec<(&str, ReferenceOr<Schema>)>,
    required: &[&str],
) -> Schema {
    Schema {
        schema_data: SchemaData::default(),
        schema_kind: SchemaKind::Type(Type::Object(ObjectType {
            properties: properties
                .into_iter()
                .map(|(name, schema)| {
                    let boxed = match schema {
                        ReferenceOr::Item(item) => ReferenceOr::boxed_item(item),
                        ReferenceOr::Reference { reference } => {
                            ReferenceOr::Reference { reference }
                        }
                    };
                    (name.to_string(), boxed)
                })
                .collect(),
            required: required.iter().map(|r| (*r).to_string()).collect(),
            ..ObjectType::default()
        })),
    }
}

fn violation() -> Schema {
    object(
        vec![("reason", string()), ("rule", string())],
        &["reason", "rule"],
    )
}

fn decision() -> Schema {
    object_with_refs(
        vec![
            ("enabled_rules", ReferenceOr::Item(array_of(string()))),
            ("hard_failures", ReferenceOr::Item(array_of_ref("Violation"))),
            ("reason", ReferenceOr::Item(string())),
            ("soft_failures", ReferenceOr::Item(array_of_ref("Violation"))),
            (
                "status",
                ReferenceOr::Item(string().desc("The overall status of the decision")),
            ),
        ],
        &["status"],
    )
}

fn decision_log() -> Schema {
    let vcs = object(
        vec![
            ("branch", string()),
            ("origin_repository_url", string()),
            ("release_tag", string()),
            ("target_repository_url", string()),
        ],
        &[],
    );
    let metadata = object(
        vec![
            ("build_number", integer()),
            ("project_id", uuid()),
            ("ssh_rerun", boolean()),
            ("vcs", vcs),
        ],
        &[],
    );
    object_with_refs(
        vec![
            ("created_at", ReferenceOr::Item(date_time())),
            ("decision", schema_ref("Decision")),
            ("id", ReferenceOr::Item(uuid())),
            ("metadata", ReferenceOr::Item(metadata)),
            (
                "policies",
                ReferenceOr::Item(map_of(string()).desc("policy-name-to-hash-map")),
            ),
            ("time_taken_ms", ReferenceOr::Item(integer())),
        ],
        &[],
    )
}

fn decision_settings() -> Schema {
    object(vec![("enabled", boolean())], &[])
}

fn policy() -> Schema {
    object(
        vec![
            ("content", string().desc("The raw Rego content of the policy")),
            ("created_at", date_time()),
            ("created_by", string()),
            (
                "name",
                string().desc("the policy name set by the rego policy_name rule"),
            ),
        ],
        &["content", "created_at", "created_by", "name"],
    )
}

/// Map of policy name to the stored policy document.
fn policy_bundle() -> Schema {
    Schema {
        schema_data: SchemaData::default(),
        schema_kind: SchemaKind::Type(Type::Object(ObjectType {
            additional_properties: Some(AdditionalProperties::Schema(Box::new(schema_ref(
                "Policy",
            )))),
            ..ObjectType::default()
        })),
    }
}

fn bundle_payload() -> Schema {
    object(
        vec![(
            "policies",
            map_of(string()).desc("map of policy names to policy content"),
        )],
        &[],
    )
}

fn bundle_diff() -> Schema {
    object(
        vec![
            ("created", array_of(string())),
            ("deleted", array_of(string())),
            ("modified", array_of(string())),
        ],
        &[],
    )
}

fn claim_response() -> Schema {
    object_with_refs(
        vec![
            ("audience", ReferenceOr::Item(array_of(string()))),
            ("audience_updated_at", ReferenceOr::Item(date_time())),
            ("org_id", ReferenceOr::Item(uuid())),
            ("project_id", ReferenceOr::Item(uuid())),
            ("ttl", schema_ref("JSONDuration")),
            ("ttl_updated_at", ReferenceOr::Item(date_time())),
        ],
        &[],
    )
}

fn patch_claims_request() -> Schema {
    object_with_refs(
        vec![
            ("audience", ReferenceOr::Item(array_of(string()))),
            ("ttl", schema_ref("JSONDuration")),
        ],
        &[],
    )
}

fn download_urls() -> Schema {
    array_of(str_format("uri")).desc(
        "A list of pre signed urls that the client can use to download the results of a Usage \
         Export.",
    )
}

fn usage_export_state() -> Schema {
    str_enum(&["created", "processing", "failed", "completed"])
}

fn usage_export_job() -> Schema {
    object(
        vec![
            ("download_urls", download_urls()),
            ("end", date_time()),
            ("start", date_time()),
            ("state", usage_export_state()),
            ("usage_export_job_id", uuid()),
        ],
        &["download_urls", "end", "start", "state", "usage_export_job_id"],
    )
}

fn usage_export_job_status() -> Schema {
    object(
        vec![
            ("download_urls", download_urls()),
            ("error_reason", string()),
            ("state", usage_export_state()),
            ("usage_export_job_id", uuid()),
        ],
        &["download_urls", "state", "usage_export_job_id"],
    )
}

pub(crate) fn build() -> Components {
    let mut security_schemes = IndexMap::new();
    security_schemes.insert(
        "api_key_header".to_string(),
        ReferenceOr::Item(api_key_header()),
    );
    security_schemes.insert(
        "api_key_query".to_string(),
        ReferenceOr::Item(api_key_query()),
    );
    security_schemes.insert("basic_auth".to_string(), ReferenceOr::Item(basic_auth()));

    let mut schemas = IndexMap::new();
    for (name, schema) in [
        ("BundleDiff", bundle_diff()),
        ("BundlePayload", bundle_payload()),
        ("ClaimResponse", claim_response()),
        ("Decision", decision()),
        ("DecisionLog", decision_log()),
        ("DecisionSettings", decision_settings()),
        ("JSONDuration", string()),
        ("PatchClaimsRequest", patch_claims_request()),
        ("Policy", policy()),
        ("PolicyBundle", policy_bundle()),
        ("Violation", violation()),
        ("get_usage_export_job_status", usage_export_job_status()),
        ("usage_export_job", usage_export_job()),
    ] {
        schemas.insert(name.to_string(), ReferenceOr::Item(schema));
    }

    Components {
        security_schemes,
        schemas,
        ..Components::default()
    }
}
