//! The path inventory, one module per operation group.

use openapiv3::{PathItem, Paths, ReferenceOr};

mod context;
mod insights;
mod job;
mod oidc;
mod pipeline;
mod policy;
mod project;
mod schedule;
mod usage;
mod user;
mod webhook;
mod workflow;

pub(crate) fn all() -> Paths {
    let groups: Vec<Vec<(&'static str, PathItem)>> = vec![
        context::paths(),
        insights::paths(),
        user::paths(),
        oidc::paths(),
        usage::paths(),
        policy::paths(),
        pipeline::paths(),
        project::paths(),
        job::paths(),
        schedule::paths(),
        webhook::paths(),
        workflow::paths(),
    ];
    let mut paths = Paths::default();
    for group in groups {
        for (path, item) in group {
            paths
                .paths
                .insert(path.to_string(), ReferenceOr::Item(item));
        }
    }
    paths
}
