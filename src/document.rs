use indexmap::IndexMap;
use openapiv3::{Info, License, OpenAPI, SecurityRequirement, Server, Tag};

use crate::{components, paths};

fn security_requirement(scheme: &str) -> SecurityRequirement {
    let mut requirement = IndexMap::new();
    requirement.insert(scheme.to_string(), Vec::new());
    requirement
}

fn tag(name: &str) -> Tag {
    Tag {
        name: name.to_string(),
        ..Tag::default()
    }
}

pub(crate) fn build() -> OpenAPI {
    OpenAPI {
        openapi: "3.0.0".to_string(),
        info: Info {
            title: "CircleCI API".to_string(),
            description: Some(
                "This describes the resources that make up the CircleCI API v2.".to_string(),
            ),
            license: Some(License {
                name: "MIT".to_string(),
                ..License::default()
            }),
            version: "v2".to_string(),
            ..Info::default()
        },
        servers: vec![Server {
            url: "https://circleci.com/api/v2".to_string(),
            ..Server::default()
        }],
        security: Some(vec![
            security_requirement("api_key_header"),
            security_requirement("basic_auth"),
            security_requirement("api_key_query"),
        ]),
        tags: vec![
            tag("Context"),
            tag("Insights"),
            tag("User"),
            tag("Pipeline"),
            tag("Job"),
            tag("Workflow"),
            tag("Webhook"),
            tag("OIDC Token Management"),
            tag("Policy Management"),
            tag("Project"),
            tag("Schedule"),
            tag("Usage"),
        ],
        paths: paths::all(),
        components: Some(components::build()),
        ..OpenAPI::default()
    }
}
