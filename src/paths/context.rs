//! `/context` operations: contexts and their environment variables.

use openapiv3::{Operation, PathItem};

use crate::nodes::*;

fn context() -> openapiv3::Schema {
    object(
        vec![
            ("id", uuid().desc("The unique ID of the context.")),
            ("name", string().desc("The user defined name of the context.")),
            (
                "created_at",
                date_time().desc("The date and time the context was created."),
            ),
        ],
        &["id", "name", "created_at"],
    )
}

fn environment_variable() -> openapiv3::Schema {
    object(
        vec![
            (
                "variable",
                string().desc("The name of the environment variable"),
            ),
            (
                "created_at",
                date_time().desc("The date and time the environment variable was created."),
            ),
            ("context_id", uuid().desc("ID of the context (UUID)")),
        ],
        &["variable", "created_at", "context_id"],
    )
}

fn confirmation_message() -> openapiv3::Schema {
    object(
        vec![("message", string().desc("A human-readable message"))],
        &["message"],
    )
}

fn context_id_param() -> openapiv3::ReferenceOr<openapiv3::Parameter> {
    path_param("context-id", "ID of the context (UUID)", uuid())
}

fn env_var_name_param() -> openapiv3::ReferenceOr<openapiv3::Parameter> {
    path_param(
        "env-var-name",
        "The name of the environment variable",
        string(),
    )
}

fn create_context() -> Operation {
    let owner = one_of(vec![
        object(
            vec![
                (
                    "id",
                    uuid().desc(
                        "The unique ID of the owner of the context. Specify either this or slug.",
                    ),
                ),
                (
                    "type",
                    str_enum(&["account", "organization"]).desc(
                        "The type of the owner. Defaults to \"organization\". Accounts are only \
                         used as context owners in server.",
                    ),
                ),
            ],
            &["id"],
        ),
        object(
            vec![
                (
                    "slug",
                    string().desc(
                        "A string that represents an organization. Specify either this or id. \
                         Cannot be used for accounts.",
                    ),
                ),
                (
                    "type",
                    str_enum(&["organization"]).desc(
                        "The type of owner. Defaults to \"organization\". Accounts are only used \
                         as context owners in server and must be specified by an id instead of a \
                         slug.",
                    ),
                ),
            ],
            &["slug"],
        ),
    ]);
    Operation {
        summary: Some("Create a new context".to_string()),
        operation_id: Some("createContext".to_string()),
        tags: vec!["Context".to_string()],
        request_body: Some(json_request(
            false,
            object(
                vec![
                    (
                        "name",
                        string().desc("The user defined name of the context."),
                    ),
                    ("owner", owner),
                ],
                &["name", "owner"],
            ),
        )),
        responses: responses(200, json_response("The new context", context())),
        ..Operation::default()
    }
}

fn list_contexts() -> Operation {
    Operation {
        summary: Some("List contexts".to_string()),
        description: Some("List all contexts for an owner.".to_string()),
        operation_id: Some("listContexts".to_string()),
        tags: vec!["Context".to_string()],
        parameters: vec![
            query_param(
                "owner-id",
                "The unique ID of the owner of the context. Specify either this or owner-slug.",
                uuid(),
            ),
            query_param(
                "owner-slug",
                "A string that represents an organization. Specify either this or owner-id. \
                 Cannot be used for accounts.",
                string(),
            ),
            query_param(
                "owner-type",
                "The type of the owner. Defaults to \"organization\". Accounts are only used as \
                 context owners in server.",
                str_enum(&["account", "organization"]),
            ),
            page_token_param(),
        ],
        responses: responses(
            200,
            json_response("A paginated list of contexts", paginated(context())),
        ),
        ..Operation::default()
    }
}

fn get_context() -> Operation {
    Operation {
        summary: Some("Get a context".to_string()),
        description: Some("Returns basic information about a context.".to_string()),
        operation_id: Some("getContext".to_string()),
        tags: vec!["Context".to_string()],
        parameters: vec![context_id_param()],
        responses: responses(200, json_response("The context", context())),
        ..Operation::default()
    }
}

fn delete_context() -> Operation {
    Operation {
        summary: Some("Delete a context".to_string()),
        operation_id: Some("deleteContext".to_string()),
        tags: vec!["Context".to_string()],
        parameters: vec![context_id_param()],
        responses: responses(
            200,
            json_response("A confirmation message", confirmation_message()),
        ),
        ..Operation::default()
    }
}

fn list_environment_variables_from_context() -> Operation {
    Operation {
        summary: Some("List environment variables".to_string()),
        description: Some(
            "List information about environment variables in a context, not including their \
             values."
                .to_string(),
        ),
        operation_id: Some("listEnvironmentVariablesFromContext".to_string()),
        tags: vec!["Context".to_string()],
        parameters: vec![context_id_param()],
        responses: responses(
            200,
            json_response(
                "A paginated list of environment variables",
                paginated(environment_variable()),
            ),
        ),
        ..Operation::default()
    }
}

fn delete_environment_variable_from_context() -> Operation {
    Operation {
        summary: Some("Remove an environment variable".to_string()),
        description: Some("Delete an environment variable from a context.".to_string()),
        operation_id: Some("deleteEnvironmentVariableFromContext".to_string()),
        tags: vec!["Context".to_string()],
        parameters: vec![env_var_name_param(), context_id_param()],
        responses: responses(
            200,
            json_response("A confirmation message", confirmation_message()),
        ),
        ..Operation::default()
    }
}

fn add_environment_variable_to_context() -> Operation {
    Operation {
        summary: Some("Add or update an environment variable".to_string()),
        description: Some(
            "Create or update an environment variable within a context. Returns information \
             about the environment variable, not including its value."
                .to_string(),
        ),
        operation_id: Some("addEnvironmentVariableToContext".to_string()),
        tags: vec!["Context".to_string()],
        parameters: vec![context_id_param(), env_var_name_param()],
        request_body: Some(json_request(
            false,
            object(
                vec![(
                    "value",
                    string().desc("The value of the environment variable"),
                )],
                &["value"],
            ),
        )),
        responses: responses(
            200,
            json_response(
                "The new environment variable",
                one_of(vec![environment_variable(), confirmation_message()]),
            ),
        ),
        ..Operation::default()
    }
}

pub(crate) fn paths() -> Vec<(&'static str, PathItem)> {
    vec![
        (
            "/context",
            PathItem {
                post: Some(create_context()),
                get: Some(list_contexts()),
                ..PathItem::default()
            },
        ),
        (
            "/context/{context-id}",
            PathItem {
                get: Some(get_context()),
                delete: Some(delete_context()),
                ..PathItem::default()
            },
        ),
        (
            "/context/{context-id}/environment-variable",
            PathItem {
                get: Some(list_environment_variables_from_context()),
                ..PathItem::default()
            },
        ),
        (
            "/context/{context-id}/environment-variable/{env-var-name}",
            PathItem {
                delete: Some(delete_environment_variable_from_context()),
                put: Some(add_environment_variable_to_context()),
                ..PathItem::default()
            },
        ),
    ]
}
