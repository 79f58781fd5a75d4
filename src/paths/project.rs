//! Project operations: project lookup, checkout keys, environment variables.

use openapiv3::{Operation, PathItem, ReferenceOr, Schema};

use crate::nodes::*;

fn project() -> Schema {
    object(
        vec![
            (
                "slug",
                string().desc(
                    "Project slug in the form `vcs-slug/org-name/repo-name`. The `/` characters \
                     may be URL-escaped.",
                ),
            ),
            ("name", string().desc("The name of the project")),
            ("id", uuid()),
            (
                "organization_name",
                string().desc("The name of the organization the project belongs to"),
            ),
            (
                "organization_slug",
                string().desc("The slug of the organization the project belongs to"),
            ),
            (
                "organization_id",
                uuid().desc("The id of the organization the project belongs to"),
            ),
            (
                "vcs_info",
                object(
                    vec![
                        (
                            "vcs_url",
                            string().desc("URL to the repository hosting the project's code"),
                        ),
                        (
                            "provider",
                            str_enum(&["Bitbucket", "CircleCI", "GitHub"])
                                .desc("The VCS provider"),
                        ),
                        ("default_branch", string()),
                    ],
                    &["vcs_url", "provider", "default_branch"],
                )
                .desc("Information about the VCS that hosts the project source code."),
            ),
        ],
        &[
            "slug",
            "name",
            "id",
            "organization_name",
            "organization_slug",
            "organization_id",
            "vcs_info",
        ],
    )
}

fn checkout_key() -> Schema {
    object(
        vec![
            ("public-key", string().desc("A public SSH key.")),
            (
                "type",
                str_enum(&["deploy-key", "github-user-key"]).desc(
                    "The type of checkout key. This may be either `deploy-key` or \
                     `github-user-key`.",
                ),
            ),
            ("fingerprint", string().desc("An SSH key fingerprint.")),
            (
                "preferred",
                boolean().desc("A boolean value that indicates if this key is preferred."),
            ),
            (
                "created-at",
                date_time().desc("The date and time the checkout key was created."),
            ),
        ],
        &[
            "public-key",
            "type",
            "fingerprint",
            "preferred",
            "created-at",
        ],
    )
}

fn environment_variable_pair() -> Schema {
    object(
        vec![
            ("name", string().desc("The name of the environment variable.")),
            (
                "value",
                string().desc("The value of the environment variable."),
            ),
        ],
        &["name", "value"],
    )
}

fn confirmation_message() -> Schema {
    object(
        vec![("message", string().desc("A human-readable message"))],
        &["message"],
    )
}

fn fingerprint_param() -> ReferenceOr<openapiv3::Parameter> {
    path_param("fingerprint", "An SSH key fingerprint.", string())
}

fn env_var_name_param() -> ReferenceOr<openapiv3::Parameter> {
    path_param("name", "The name of the environment variable.", string())
}

fn get_project_by_slug() -> Operation {
    Operation {
        summary: Some("Get a project".to_string()),
        description: Some("Retrieves a project by project slug.".to_string()),
        operation_id: Some("getProjectBySlug".to_string()),
        tags: vec!["Project".to_string()],
        parameters: vec![project_slug_param()],
        responses: responses(200, json_response("A project object", project())),
        ..Operation::default()
    }
}

fn create_checkout_key() -> Operation {
    Operation {
        summary: Some("Create a new checkout key".to_string()),
        description: Some(
            "Creates a new checkout key. This API request is only usable with a user API token."
                .to_string(),
        ),
        operation_id: Some("createCheckoutKey".to_string()),
        tags: vec!["Project".to_string()],
        parameters: vec![project_slug_param()],
        request_body: Some(json_request(
            false,
            object(
                vec![(
                    "type",
                    str_enum(&["user-key", "deploy-key"]).desc(
                        "The type of checkout key to create. This may be either `deploy-key` or \
                         `user-key`.",
                    ),
                )],
                &["type"],
            ),
        )),
        responses: responses(
            201,
            json_response("Error response.", object(vec![("message", string())], &[])),
        ),
        ..Operation::default()
    }
}

fn list_checkout_keys() -> Operation {
    Operation {
        summary: Some("Get all checkout keys".to_string()),
        description: Some("Returns a sequence of checkout keys for `:project`.".to_string()),
        operation_id: Some("listCheckoutKeys".to_string()),
        tags: vec!["Project".to_string()],
        parameters: vec![project_slug_param()],
        responses: responses(
            200,
            json_response("A sequence of checkout keys.", paginated(checkout_key())),
        ),
        ..Operation::default()
    }
}

fn delete_checkout_key() -> Operation {
    Operation {
        summary: Some("Delete a checkout key".to_string()),
        description: Some("Deletes the checkout key.".to_string()),
        operation_id: Some("deleteCheckoutKey".to_string()),
        tags: vec!["Project".to_string()],
        parameters: vec![project_slug_param(), fingerprint_param()],
        responses: responses(
            200,
            json_response("A confirmation message.", confirmation_message()),
        ),
        ..Operation::default()
    }
}

fn get_checkout_key() -> Operation {
    Operation {
        summary: Some("Get a checkout key".to_string()),
        description: Some("Returns an individual checkout key.".to_string()),
        operation_id: Some("getCheckoutKey".to_string()),
        tags: vec!["Project".to_string()],
        parameters: vec![project_slug_param(), fingerprint_param()],
        responses: responses(200, json_response("The checkout key.", checkout_key())),
        ..Operation::default()
    }
}

fn list_env_vars() -> Operation {
    Operation {
        summary: Some("List all environment variables".to_string()),
        description: Some(
            "Returns four 'x' characters, in addition to the last four ASCII characters of the \
             value, consistent with the display of environment variable values on the CircleCI \
             website."
                .to_string(),
        ),
        operation_id: Some("listEnvVars".to_string()),
        tags: vec!["Project".to_string()],
        parameters: vec![project_slug_param()],
        responses: responses(
            200,
            json_response(
                "A sequence of environment variables.",
                paginated(environment_variable_pair()),
            ),
        ),
        ..Operation::default()
    }
}

fn create_env_var() -> Operation {
    Operation {
        summary: Some("Create an environment variable".to_string()),
        description: Some("Creates a new environment variable.".to_string()),
        operation_id: Some("createEnvVar".to_string()),
        tags: vec!["Project".to_string()],
        parameters: vec![project_slug_param()],
        request_body: Some(json_request(false, environment_variable_pair())),
        responses: responses(
            201,
            json_response("Error response.", object(vec![("message", string())], &[])),
        ),
        ..Operation::default()
    }
}

fn get_env_var() -> Operation {
    Operation {
        summary: Some("Get a masked environment variable".to_string()),
        description: Some("Returns the masked value of environment variable :name.".to_string()),
        operation_id: Some("getEnvVar".to_string()),
        tags: vec!["Project".to_string()],
        parameters: vec![project_slug_param(), env_var_name_param()],
        responses: responses(
            200,
            json_response("The environment variable.", environment_variable_pair()),
        ),
        ..Operation::default()
    }
}

fn delete_env_var() -> Operation {
    Operation {
        summary: Some("Delete an environment variable".to_string()),
        description: Some("Deletes the environment variable named :name.".to_string()),
        operation_id: Some("deleteEnvVar".to_string()),
        tags: vec!["Project".to_string()],
        parameters: vec![project_slug_param(), env_var_name_param()],
        responses: responses(
            200,
            json_response("A confirmation message.", confirmation_message()),
        ),
        ..Operation::default()
    }
}

pub(crate) fn paths() -> Vec<(&'static str, PathItem)> {
    vec![
        (
            "/project/{project-slug}",
            PathItem {
                get: Some(get_project_by_slug()),
                ..PathItem::default()
            },
        ),
        (
            "/project/{project-slug}/checkout-key",
            PathItem {
                post: Some(create_checkout_key()),
                get: Some(list_checkout_keys()),
                ..PathItem::default()
            },
        ),
        (
            "/project/{project-slug}/checkout-key/{fingerprint}",
            PathItem {
                delete: Some(delete_checkout_key()),
                get: Some(get_checkout_key()),
                ..PathItem::default()
            },
        ),
        (
            "/project/{project-slug}/envvar",
            PathItem {
                get: Some(list_env_vars()),
                post: Some(create_env_var()),
                ..PathItem::default()
            },
        ),
        (
            "/project/{project-slug}/envvar/{name}",
            PathItem {
                get: Some(get_env_var()),
                delete: Some(delete_env_var()),
                ..PathItem::default()
            },
        ),
    ]
}
