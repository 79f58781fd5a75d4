//! Policy management operations under `/owner/{ownerID}/context/{context}`:
//! decision audit logs, policy bundles, and decision settings.
//!
//! Unlike the rest of the document these operations enumerate their error
//! statuses explicitly, each with an `{ error }` body.

use indexmap::IndexMap;
use openapiv3::{
    Operation, Parameter, PathItem, ReferenceOr, Response, Responses, StatusCode,
};

use crate::nodes::*;

fn error_body(description: &str) -> Response {
    json_response(description, object(vec![("error", string())], &["error"]))
}

/// A success response plus the explicit error statuses this family declares.
fn statuses(
    status: u16,
    success: Response,
    errors: &[(u16, &str)],
) -> Responses {
    let mut map = IndexMap::new();
    map.insert(StatusCode::Code(status), ReferenceOr::Item(success));
    for (code, description) in errors {
        map.insert(
            StatusCode::Code(*code),
            ReferenceOr::Item(error_body(description)),
        );
    }
    Responses {
        default: Some(error_response()),
        responses: map,
        ..Responses::default()
    }
}

const COMMON_ERRORS: &[(u16, &str)] = &[
    (
        400,
        "The request is malformed (e.g, a given path parameter is invalid)",
    ),
    (401, "The request is unauthorized"),
    (403, "The user is forbidden from making this request"),
    (500, "Something unexpected happened on the server."),
];

fn owner_id_param() -> ReferenceOr<Parameter> {
    path_param("ownerID", "", uuid())
}

fn context_param() -> ReferenceOr<Parameter> {
    path_param("context", "", string())
}

fn decision_id_param() -> ReferenceOr<Parameter> {
    path_param("decisionID", "", uuid())
}

fn get_decision_logs() -> Operation {
    Operation {
        summary: Some("Retrieves the owner's decision audit logs.".to_string()),
        description: Some(
            "This endpoint will return a list of decision audit logs that were made using this \
             owner's policies."
                .to_string(),
        ),
        operation_id: Some("getDecisionLogs".to_string()),
        tags: vec!["Policy Management".to_string()],
        parameters: vec![
            owner_id_param(),
            context_param(),
            query_param(
                "status",
                "Return decisions matching this decision status.",
                string(),
            ),
            query_param("after", "Return decisions made after this date.", date_time()),
            query_param(
                "before",
                "Return decisions made before this date.",
                date_time(),
            ),
            query_param("branch", "Return decisions made on this branch.", string()),
            query_param(
                "project_id",
                "Return decisions made for this project.",
                uuid(),
            ),
            query_param(
                "offset",
                "Sets the offset when retrieving the decisions, for paging.",
                integer(),
            ),
        ],
        responses: statuses(
            200,
            json_response(
                "Decision logs successfully retrieved.",
                array_of_ref("DecisionLog"),
            ),
            COMMON_ERRORS,
        ),
        ..Operation::default()
    }
}

fn make_decision() -> Operation {
    Operation {
        summary: Some("Makes a decision".to_string()),
        description: Some(
            "This endpoint will evaluate input data (config+metadata) against owner's stored \
             policies and return a decision."
                .to_string(),
        ),
        operation_id: Some("makeDecision".to_string()),
        tags: vec!["Policy Management".to_string()],
        parameters: vec![owner_id_param(), context_param()],
        request_body: Some(json_request(
            false,
            object(
                vec![
                    ("input", string()),
                    ("metadata", any_schema()),
                ],
                &["input"],
            ),
        )),
        responses: statuses(
            200,
            json_ref_response(
                "Decision rendered by applying the policy against the provided data. Response \
                 will be modeled by the data and rego processed.",
                "Decision",
            ),
            &[
                (400, "The request is malformed"),
                (401, "The request is unauthorized"),
                (500, "Something unexpected happened on the server."),
            ],
        ),
        ..Operation::default()
    }
}

fn get_decision_settings() -> Operation {
    Operation {
        summary: Some("Get the decision settings".to_string()),
        description: Some(
            "This endpoint retrieves the current decision settings (eg enable/disable policy \
             evaluation)"
                .to_string(),
        ),
        operation_id: Some("getDecisionSettings".to_string()),
        tags: vec!["Policy Management".to_string()],
        parameters: vec![owner_id_param(), context_param()],
        responses: statuses(
            200,
            json_ref_response("Decision settings successfully retrieved.", "DecisionSettings"),
            COMMON_ERRORS,
        ),
        ..Operation::default()
    }
}

fn set_decision_settings() -> Operation {
    Operation {
        summary: Some("Set the decision settings".to_string()),
        description: Some(
            "This endpoint allows modifying decision settings (eg enable/disable policy \
             evaluation)"
                .to_string(),
        ),
        operation_id: Some("setDecisionSettings".to_string()),
        tags: vec!["Policy Management".to_string()],
        parameters: vec![owner_id_param(), context_param()],
        request_body: Some(json_request_ref(false, "DecisionSettings")),
        responses: statuses(
            200,
            json_ref_response("Decision settings successfully set.", "DecisionSettings"),
            COMMON_ERRORS,
        ),
        ..Operation::default()
    }
}

fn get_decision_log() -> Operation {
    Operation {
        summary: Some(
            "Retrieves the owner's decision audit log by given decisionID".to_string(),
        ),
        description: Some(
            "This endpoint will retrieve a decision for a given decision log ID".to_string(),
        ),
        operation_id: Some("getDecisionLog".to_string()),
        tags: vec!["Policy Management".to_string()],
        parameters: vec![owner_id_param(), context_param(), decision_id_param()],
        responses: statuses(
            200,
            json_ref_response("Decision log successfully retrieved.", "DecisionLog"),
            &[
                (
                    400,
                    "The request is malformed (e.g, a given path parameter is invalid)",
                ),
                (401, "The request is unauthorized"),
                (403, "The user is forbidden from making this request"),
                (
                    404,
                    "There was no decision log found for given decision_id, and owner_id.",
                ),
                (500, "Something unexpected happened on the server."),
            ],
        ),
        ..Operation::default()
    }
}

fn get_decision_log_policy_bundle() -> Operation {
    Operation {
        summary: Some("Retrieves Policy Bundle for a given decision log ID".to_string()),
        description: Some(
            "This endpoint will retrieve a policy bundle for a given decision log ID".to_string(),
        ),
        operation_id: Some("getDecisionLogPolicyBundle".to_string()),
        tags: vec!["Policy Management".to_string()],
        parameters: vec![owner_id_param(), context_param(), decision_id_param()],
        responses: statuses(
            200,
            json_ref_response(
                "Policy-Bundle retrieved successfully for given decision log ID",
                "PolicyBundle",
            ),
            &[
                (
                    400,
                    "The request is malformed (e.g, a given path parameter is invalid)",
                ),
                (401, "The request is unauthorized"),
                (403, "The user is forbidden from making this request"),
                (
                    404,
                    "There was no decision log found for given decision_id, and owner_id.",
                ),
                (500, "Something unexpected happened on the server."),
            ],
        ),
        ..Operation::default()
    }
}

fn get_policy_bundle() -> Operation {
    Operation {
        summary: Some("Retrieves Policy Bundle".to_string()),
        description: Some("This endpoint will retrieve a policy bundle".to_string()),
        operation_id: Some("getPolicyBundle".to_string()),
        tags: vec!["Policy Management".to_string()],
        parameters: vec![owner_id_param(), context_param()],
        responses: statuses(
            200,
            json_ref_response("Policy-Bundle retrieved successfully.", "PolicyBundle"),
            COMMON_ERRORS,
        ),
        ..Operation::default()
    }
}

fn create_policy_bundle() -> Operation {
    Operation {
        summary: Some("Creates policy bundle for the context".to_string()),
        description: Some(
            "This endpoint replaces the current policy bundle with the provided policy bundle"
                .to_string(),
        ),
        operation_id: Some("createPolicyBundle".to_string()),
        tags: vec!["Policy Management".to_string()],
        parameters: vec![
            owner_id_param(),
            context_param(),
            query_param("dry", "", boolean()),
        ],
        request_body: Some(json_request_ref(false, "BundlePayload")),
        responses: statuses(
            200,
            json_ref_response("Policy-Bundle diff successfully returned.", "BundleDiff"),
            &[
                (
                    400,
                    "The request is malformed (e.g, a given path parameter is invalid)",
                ),
                (401, "The request is unauthorized"),
                (403, "The user is forbidden from making this request"),
                (
                    413,
                    "The request exceeds the maximum payload size for policy bundles ~2.5Mib",
                ),
                (500, "Something unexpected happened on the server."),
            ],
        ),
        ..Operation::default()
    }
}

fn get_policy_document() -> Operation {
    Operation {
        summary: Some("Retrieves a policy document".to_string()),
        description: Some("This endpoint will retrieve a policy document.".to_string()),
        operation_id: Some("getPolicyDocument".to_string()),
        tags: vec!["Policy Management".to_string()],
        parameters: vec![
            owner_id_param(),
            context_param(),
            path_param(
                "policyName",
                "the policy name set by the rego policy_name rule",
                string(),
            ),
        ],
        responses: statuses(
            200,
            json_ref_response("Policy retrieved successfully.", "Policy"),
            &[
                (
                    400,
                    "The request is malformed (e.g, a given path parameter is invalid)",
                ),
                (401, "The request is unauthorized"),
                (403, "The user is forbidden from making this request"),
                (
                    404,
                    "There was no policy that was found with the given owner_id and policy name.",
                ),
                (500, "Something unexpected happened on the server."),
            ],
        ),
        ..Operation::default()
    }
}

pub(crate) fn paths() -> Vec<(&'static str, PathItem)> {
    vec![
        (
            "/owner/{ownerID}/context/{context}/decision",
            PathItem {
                get: Some(get_decision_logs()),
                post: Some(make_decision()),
                ..PathItem::default()
            },
        ),
        (
            "/owner/{ownerID}/context/{context}/decision/settings",
            PathItem {
                get: Some(get_decision_settings()),
                patch: Some(set_decision_settings()),
                ..PathItem::default()
            },
        ),
        (
            "/owner/{ownerID}/context/{context}/decision/{decisionID}",
            PathItem {
                get: Some(get_decision_log()),
                ..PathItem::default()
            },
        ),
        (
            "/owner/{ownerID}/context/{context}/decision/{decisionID}/policy-bundle",
            PathItem {
                get: Some(get_decision_log_policy_bundle()),
                ..PathItem::default()
            },
        ),
        (
            "/owner/{ownerID}/context/{context}/policy-bundle",
            PathItem {
                get: Some(get_policy_bundle()),
                post: Some(create_policy_bundle()),
                ..PathItem::default()
            },
        ),
        (
            "/owner/{ownerID}/context/{context}/policy-bundle/{policyName}",
            PathItem {
                get: Some(get_policy_document()),
                ..PathItem::default()
            },
        ),
    ]
}
