//! `/webhook` operations: outbound webhook subscriptions.

use openapiv3::{Operation, PathItem, ReferenceOr, Schema};

use crate::nodes::*;

fn webhook_events() -> Schema {
    array_of(str_enum(&["workflow-completed", "job-completed"]))
        .desc("Events that will trigger the webhook")
}

fn webhook() -> Schema {
    object(
        vec![
            (
                "created-at",
                date_time().desc("The date and time the webhook was created."),
            ),
            ("events", webhook_events()),
            ("id", uuid().desc("The unique ID of the webhook")),
            ("name", string().desc("Name of the webhook")),
            (
                "scope",
                object(
                    vec![
                        (
                            "id",
                            uuid().desc(
                                "ID of the scope being used (at the moment, only project ID is \
                                 supported)",
                            ),
                        ),
                        ("type", string().desc("Type of the scope being used")),
                    ],
                    &["id", "type"],
                )
                .desc("The scope in which the relevant events that will trigger webhooks"),
            ),
            (
                "signing-secret",
                string().desc(
                    "Masked value of the secret used to build an HMAC hash of the payload and \
                     passed as a header in the webhook request",
                ),
            ),
            (
                "updated-at",
                date_time().desc("The date and time the webhook was last updated."),
            ),
            (
                "url",
                string().desc(
                    "URL to deliver the webhook to. Note: protocol must be included as well \
                     (only https is supported)",
                ),
            ),
            (
                "verify-tls",
                boolean().desc(
                    "Whether to enforce TLS certificate verification when delivering the webhook",
                ),
            ),
        ],
        &[
            "created-at",
            "events",
            "id",
            "name",
            "scope",
            "signing-secret",
            "updated-at",
            "url",
            "verify-tls",
        ],
    )
}

fn webhook_id_param() -> ReferenceOr<openapiv3::Parameter> {
    path_param("webhook-id", "ID of the webhook (UUID)", uuid())
}

fn get_webhooks() -> Operation {
    Operation {
        summary: Some("List webhooks".to_string()),
        description: Some(
            "Get a list of outbound webhooks that match the given scope-type and scope-id"
                .to_string(),
        ),
        operation_id: Some("getWebhooks".to_string()),
        tags: vec!["Webhook".to_string()],
        parameters: vec![
            required_query_param(
                "scope-id",
                "ID of the scope being used (at the moment, only project ID is supported)",
                uuid(),
            ),
            required_query_param(
                "scope-type",
                "Type of the scope being used",
                str_enum(&["project"]),
            ),
        ],
        responses: responses(
            200,
            json_response("A list of webhooks", paginated(webhook())),
        ),
        ..Operation::default()
    }
}

fn create_webhook() -> Operation {
    Operation {
        summary: Some("Create an outbound webhook".to_string()),
        description: Some("Creates an outbound webhook.".to_string()),
        operation_id: Some("createWebhook".to_string()),
        tags: vec!["Webhook".to_string()],
        request_body: Some(json_request(
            false,
            object(
                vec![
                    ("events", webhook_events()),
                    ("name", string().desc("Name of the webhook")),
                    (
                        "scope",
                        object(
                            vec![
                                (
                                    "id",
                                    uuid().desc(
                                        "ID of the scope being used (at the moment, only project \
                                         ID is supported)",
                                    ),
                                ),
                                (
                                    "type",
                                    str_enum(&["project"])
                                        .desc("Type of the scope being used"),
                                ),
                            ],
                            &["id", "type"],
                        )
                        .desc("The scope in which the relevant events that will trigger webhooks"),
                    ),
                    (
                        "signing-secret",
                        string().desc(
                            "Secret used to build an HMAC hash of the payload and passed as a \
                             header in the webhook request",
                        ),
                    ),
                    (
                        "url",
                        string().desc(
                            "URL to deliver the webhook to. Note: protocol must be included as \
                             well (only https is supported)",
                        ),
                    ),
                    (
                        "verify-tls",
                        boolean().desc(
                            "Whether to enforce TLS certificate verification when delivering the \
                             webhook",
                        ),
                    ),
                ],
                &[
                    "events",
                    "name",
                    "scope",
                    "signing-secret",
                    "url",
                    "verify-tls",
                ],
            ),
        )),
        responses: responses(
            201,
            json_response("Error response.", object(vec![("message", string())], &[])),
        ),
        ..Operation::default()
    }
}

fn delete_webhook() -> Operation {
    Operation {
        summary: Some("Delete an outbound webhook".to_string()),
        description: Some("Deletes an outbound webhook".to_string()),
        operation_id: Some("deleteWebhook".to_string()),
        tags: vec!["Webhook".to_string()],
        parameters: vec![webhook_id_param()],
        responses: responses(
            200,
            json_response(
                "A confirmation message",
                object(
                    vec![("message", string().desc("A human-readable message"))],
                    &["message"],
                ),
            ),
        ),
        ..Operation::default()
    }
}

fn get_webhook_by_id() -> Operation {
    Operation {
        summary: Some("Get a webhook".to_string()),
        description: Some("Get an outbound webhook by id.".to_string()),
        operation_id: Some("getWebhookById".to_string()),
        tags: vec!["Webhook".to_string()],
        parameters: vec![webhook_id_param()],
        responses: responses(200, json_response("A webhook", webhook())),
        ..Operation::default()
    }
}

fn update_webhook() -> Operation {
    Operation {
        summary: Some("Update an outbound webhook".to_string()),
        description: Some("Updates an outbound webhook.".to_string()),
        operation_id: Some("updateWebhook".to_string()),
        tags: vec!["Webhook".to_string()],
        parameters: vec![webhook_id_param()],
        request_body: Some(json_request(
            false,
            object(
                vec![
                    ("events", webhook_events()),
                    ("name", string().desc("Name of the webhook")),
                    (
                        "signing-secret",
                        string().desc(
                            "Secret used to build an HMAC hash of the payload and passed as a \
                             header in the webhook request",
                        ),
                    ),
                    (
                        "url",
                        string().desc(
                            "URL to deliver the webhook to. Note: protocol must be included as \
                             well (only https is supported)",
                        ),
                    ),
                    (
                        "verify-tls",
                        boolean().desc(
                            "Whether to enforce TLS certificate verification when delivering the \
                             webhook",
                        ),
                    ),
                ],
                &[],
            ),
        )),
        responses: responses(200, json_response("A webhook", webhook())),
        ..Operation::default()
    }
}

pub(crate) fn paths() -> Vec<(&'static str, PathItem)> {
    vec![
        (
            "/webhook",
            PathItem {
                get: Some(get_webhooks()),
                post: Some(create_webhook()),
                ..PathItem::default()
            },
        ),
        (
            "/webhook/{webhook-id}",
            PathItem {
                delete: Some(delete_webhook()),
                get: Some(get_webhook_by_id()),
                put: Some(update_webhook()),
                ..PathItem::default()
            },
        ),
    ]
}
