//! `/me` and `/user` operations.

use openapiv3::{Operation, PathItem};

use crate::nodes::*;

fn user() -> openapiv3::Schema {
    object(
        vec![
            ("id", uuid().desc("The unique ID of the user.")),
            (
                "login",
                string().desc("The login information for the user on the VCS."),
            ),
            ("name", string().desc("The name of the user.")),
        ],
        &["id", "login", "name"],
    )
}

fn collaboration() -> openapiv3::Schema {
    object(
        vec![
            (
                "avatar_url",
                string().desc("URL to the user's avatar on the VCS"),
            ),
            ("id", uuid().desc("The UUID of the organization")),
            ("name", string().desc("The name of the organization")),
            ("slug", string().desc("The slug of the organization")),
            ("vcs-type", string().desc("The VCS provider")),
        ],
        &["avatar_url", "id", "name", "slug", "vcs-type"],
    )
}

fn get_current_user() -> Operation {
    Operation {
        summary: Some("User Information".to_string()),
        description: Some(
            "Provides information about the user that is currently signed in.".to_string(),
        ),
        operation_id: Some("getCurrentUser".to_string()),
        tags: vec!["User".to_string()],
        responses: responses(200, json_response("User login information.", user())),
        ..Operation::default()
    }
}

fn get_collaborations() -> Operation {
    Operation {
        summary: Some("Collaborations".to_string()),
        description: Some(
            "Provides the set of organizations of which a user is a member or a collaborator.\n\n\
             The set of organizations that a user can collaborate on is composed of:\n\n\
             * Organizations that the current user belongs to across VCS types (e.g. BitBucket, \
             GitHub)\n\
             * The parent organization of repository that the user can collaborate on, but is \
             not necessarily a member of\n\
             * The organization of the current user's account"
                .to_string(),
        ),
        operation_id: Some("getCollaborations".to_string()),
        tags: vec!["User".to_string()],
        responses: responses(
            200,
            json_response("Collaborations", array_of(collaboration())),
        ),
        ..Operation::default()
    }
}

fn get_user() -> Operation {
    Operation {
        summary: Some("User Information".to_string()),
        description: Some("Provides information about the user with the given ID.".to_string()),
        operation_id: Some("getUser".to_string()),
        tags: vec!["User".to_string()],
        parameters: vec![path_param("id", "The unique ID of the user.", uuid())],
        responses: responses(200, json_response("User login information.", user())),
        ..Operation::default()
    }
}

pub(crate) fn paths() -> Vec<(&'static str, PathItem)> {
    vec![
        (
            "/me",
            PathItem {
                get: Some(get_current_user()),
                ..PathItem::default()
            },
        ),
        (
            "/me/collaborations",
            PathItem {
                get: Some(get_collaborations()),
                ..PathItem::default()
            },
        ),
        (
            "/user/{id}",
            PathItem {
                get: Some(get_user()),
                ..PathItem::default()
            },
        ),
    ]
}
