//! Usage export operations under `/organizations/{org_id}/usage_export_job`.

use indexmap::IndexMap;
use openapiv3::{Operation, Parameter, PathItem, ReferenceOr, Response, Responses, StatusCode};

use crate::nodes::*;

const USAGE_ERRORS: &[(u16, &str)] = &[
    (400, "Unexpected request body provided."),
    (401, "Credentials provided are invalid."),
    (404, "Entity not found."),
    (429, "API rate limits exceeded."),
    (500, "Internal server error."),
];

fn usage_responses(status: u16, success: Response) -> Responses {
    let mut map = IndexMap::new();
    map.insert(StatusCode::Code(status), ReferenceOr::Item(success));
    for (code, description) in USAGE_ERRORS {
        map.insert(
            StatusCode::Code(*code),
            ReferenceOr::Item(json_response(
                description,
                object(vec![("message", string())], &[]),
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
    path_param("org_id", "An opaque identifier of an organization.", uuid())
}

fn create_usage_export() -> Operation {
    Operation {
        summary: Some("Create a usage export".to_string()),
        description: Some(
            "Submits a request to create a usage export for an organization.".to_string(),
        ),
        operation_id: Some("createUsageExport".to_string()),
        tags: vec!["Usage".to_string()],
        parameters: vec![org_id_param()],
        request_body: Some(json_request(
            true,
            object(
                vec![
                    (
                        "end",
                        date_time().desc(
                            "The end date & time (inclusive) of the range from which data will \
                             be pulled. Must be no more than 31 days after `start`.",
                        ),
                    ),
                    ("shared_org_ids", array_of(uuid())),
                    (
                        "start",
                        date_time().desc(
                            "The start date & time (inclusive) of the range from which data \
                             will be pulled. Must be no more than one year ago.",
                        ),
                    ),
                ],
                &["end", "start"],
            ),
        )),
        responses: usage_responses(
            201,
            json_ref_response("Usage export created successfully", "usage_export_job"),
        ),
        ..Operation::default()
    }
}

fn get_usage_export() -> Operation {
    Operation {
        summary: Some("Get a usage export".to_string()),
        description: Some("Gets a usage export for an organization.".to_string()),
        operation_id: Some("getUsageExport".to_string()),
        tags: vec!["Usage".to_string()],
        parameters: vec![
            org_id_param(),
            path_param(
                "usage_export_job_id",
                "An opaque identifier of a usage export job.",
                uuid(),
            ),
        ],
        responses: usage_responses(
            200,
            json_ref_response(
                "Usage export fetched successfully",
                "get_usage_export_job_status",
            ),
        ),
        ..Operation::default()
    }
}

pub(crate) fn paths() -> Vec<(&'static str, PathItem)> {
    vec![
        (
            "/organizations/{org_id}/usage_export_job",
            PathItem {
                post: Some(create_usage_export()),
                ..PathItem::default()
            },
        ),
        (
            "/organizations/{org_id}/usage_export_job/{usage_export_job_id}",
            PathItem {
                get: Some(get_usage_export()),
                ..PathItem::default()
            },
        ),
    ]
}
