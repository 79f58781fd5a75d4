//! OIDC token management operations: custom claims on org and project
//! identity tokens.

use indexmap::IndexMap;
use openapiv3::{Operation, Parameter, PathItem, ReferenceOr, Responses, StatusCode};

use crate::nodes::*;

const OIDC_ERRORS: &[(u16, &str)] = &[
    (
        400,
        "The request is malformed (e.g, a given path parameter is invalid)",
    ),
    (403, "The user is forbidden from making this request"),
    (500, "Something unexpected happened on the server."),
];

fn claim_responses(success_description: &str) -> Responses {
    let mut map = IndexMap::new();
    map.insert(
        StatusCode::Code(200),
        ReferenceOr::Item(json_ref_response(success_description, "ClaimResponse")),
    );
    for (code, description) in OIDC_ERRORS {
        map.insert(
            StatusCode::Code(*code),
            ReferenceOr::Item(json_response(
                description,
                object(vec![("error", string())], &["error"]),
            )),
        );
    }
    Responses {
        default: Some(error_response()),
        responses: map,
        ..Responses::default()
    }
}

fn org_id_param() -> ReferenceOr<Parameter> {
    path_param("orgID", "", uuid())
}

fn project_id_param() -> ReferenceOr<Parameter> {
    path_param("projectID", "", uuid())
}

fn claims_param() -> ReferenceOr<Parameter> {
    required_query_param(
        "claims",
        "comma separated list of claims to delete. Valid values are \"audience\" and \"ttl\".",
        string(),
    )
}

fn delete_org_claims() -> Operation {
    Operation {
        summary: Some("Delete org-level claims".to_string()),
        description: Some("Deletes org-level custom claims of OIDC identity tokens".to_string()),
        operation_id: Some("deleteOrgClaims".to_string()),
        tags: vec!["OIDC Token Management".to_string()],
        parameters: vec![org_id_param(), claims_param()],
        responses: claim_responses("Claims successfully deleted."),
        ..Operation::default()
    }
}

fn get_org_claims() -> Operation {
    Operation {
        summary: Some("Get org-level claims".to_string()),
        description: Some("Fetches org-level custom claims of OIDC identity tokens".to_string()),
        operation_id: Some("getOrgClaims".to_string()),
        tags: vec!["OIDC Token Management".to_string()],
        parameters: vec![org_id_param()],
        responses: claim_responses("Claims successfully fetched."),
        ..Operation::default()
    }
}

fn patch_org_claims() -> Operation {
    Operation {
        summary: Some("Patch org-level claims".to_string()),
        description: Some(
            "Creates/Updates org-level custom claims of OIDC identity tokens".to_string(),
        ),
        operation_id: Some("patchOrgClaims".to_string()),
        tags: vec!["OIDC Token Management".to_string()],
        parameters: vec![org_id_param()],
        request_body: Some(json_request_ref(false, "PatchClaimsRequest")),
        responses: claim_responses("Claims successfully patched."),
        ..Operation::default()
    }
}

fn delete_project_claims() -> Operation {
    Operation {
        summary: Some("Delete project-level claims".to_string()),
        description: Some(
            "Deletes project-level custom claims of OIDC identity tokens".to_string(),
        ),
        operation_id: Some("deleteProjectClaims".to_string()),
        tags: vec!["OIDC Token Management".to_string()],
        parameters: vec![org_id_param(), project_id_param(), claims_param()],
        responses: claim_responses("Claims successfully deleted."),
        ..Operation::default()
    }
}

fn get_project_claims() -> Operation {
    Operation {
        summary: Some("Get project-level claims".to_string()),
        description: Some(
            "Fetches project-level custom claims of OIDC identity tokens".to_string(),
        ),
        operation_id: Some("getProjectClaims".to_string()),
        tags: vec!["OIDC Token Management".to_string()],
        parameters: vec![org_id_param(), project_id_param()],
        responses: claim_responses("Claims successfully fetched."),
        ..Operation::default()
    }
}

fn patch_project_claims() -> Operation {
    Operation {
        summary: Some("Patch project-level claims".to_string()),
        description: Some(
            "Creates/Updates project-level custom claims of OIDC identity tokens".to_string(),
        ),
        operation_id: Some("patchProjectClaims".to_string()),
        tags: vec!["OIDC Token Management".to_string()],
        parameters: vec![org_id_param(), project_id_param()],
        request_body: Some(json_request_ref(false, "PatchClaimsRequest")),
        responses: claim_responses("Claims successfully patched."),
        ..Operation::default()
    }
}

pub(crate) fn paths() -> Vec<(&'static str, PathItem)> {
    vec![
        (
            "/org/{orgID}/oidc-custom-claims",
            PathItem {
                delete: Some(delete_org_claims()),
                get: Some(get_org_claims()),
                patch: Some(patch_org_claims()),
                ..PathItem::default()
            },
        ),
        (
            "/org/{orgID}/project/{projectID}/oidc-custom-claims",
            PathItem {
                delete: Some(delete_project_claims()),
                get: Some(get_project_claims()),
                patch: Some(patch_project_claims()),
                ..PathItem::default()
            },
        ),
    ]
}
