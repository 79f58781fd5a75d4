//! Pipeline operations: list, trigger, continue, get, and their workflows
//! and configuration.

use openapiv3::{Operation, PathItem, ReferenceOr, Schema};
use serde_json::Value;

use crate::nodes::*;

fn pipeline_states() -> &'static [&'static str] {
    &["created", "errored", "setup-pending", "setup", "pending"]
}

fn pipeline_error() -> Schema {
    object(
        vec![
            ("message", string().desc("A human-readable error message.")),
            (
                "type",
                str_enum(&[
                    "config",
                    "config-fetch",
                    "timeout",
                    "permission",
                    "other",
                    "plan",
                ])
                .desc("The type of error."),
            ),
        ],
        &["message", "type"],
    )
}

fn trigger() -> Schema {
    object(
        vec![
            (
                "actor",
                object(
                    vec![
                        (
                            "avatar_url",
                            string().desc("URL to the user's avatar on the VCS"),
                        ),
                        (
                            "login",
                            string().desc("The login information for the user on the VCS."),
                        ),
                    ],
                    &["avatar_url", "login"],
                )
                .desc("The user who triggered the Pipeline."),
            ),
            (
                "received_at",
                date_time().desc("The date and time the trigger was received."),
            ),
            (
                "type",
                str_enum(&["scheduled_pipeline", "explicit", "api", "webhook"])
                    .desc("The type of trigger."),
            ),
        ],
        &["actor", "received_at", "type"],
    )
    .desc("A summary of the trigger.")
}

fn vcs() -> Schema {
    object(
        vec![
            (
                "branch",
                string().desc(
                    "The branch where the pipeline ran. The HEAD commit on this branch was used \
                     for the pipeline. Note that `branch` and `tag` are mutually exclusive. To \
                     trigger a pipeline for a PR by number use `pull/<number>/head` for the PR \
                     ref or `pull/<number>/merge` for the merge ref (GitHub only).",
                ),
            ),
            (
                "commit",
                object(
                    vec![
                        ("body", string().desc("The body of the commit message.")),
                        ("subject", string().desc("The subject of the commit message.")),
                    ],
                    &["body", "subject"],
                )
                .desc("The latest commit in the pipeline."),
            ),
            (
                "origin_repository_url",
                string().desc(
                    "URL for the repository where the trigger originated. For fork-PR \
                     pipelines, this is the URL to the fork. For other pipelines the `origin_` \
                     and `target_repository_url`s will be the same.",
                ),
            ),
            (
                "provider_name",
                string().desc("Name of the VCS provider (e.g. GitHub, Bitbucket)."),
            ),
            ("review_id", string().desc("The code review id.")),
            ("review_url", string().desc("The code review URL.")),
            (
                "revision",
                string().desc("The code revision the pipeline ran."),
            ),
            (
                "tag",
                string().desc(
                    "The tag used by the pipeline. The commit that this tag points to was used \
                     for the pipeline. Note that `branch` and `tag` are mutually exclusive.",
                ),
            ),
            (
                "target_repository_url",
                string().desc(
                    "URL for the repository the trigger targets (i.e. the repository where the \
                     PR will be merged). For fork-PR pipelines, this is the URL to the parent \
                     repo. For other pipelines, the `origin_` and `target_repository_url`s will \
                     be the same.",
                ),
            ),
        ],
        &[
            "origin_repository_url",
            "provider_name",
            "revision",
            "target_repository_url",
        ],
    )
    .desc("VCS information for the pipeline.")
}

fn pipeline() -> Schema {
    object(
        vec![
            (
                "created_at",
                date_time().desc("The date and time the pipeline was created."),
            ),
            (
                "errors",
                array_of(pipeline_error())
                    .desc("A sequence of errors that have occurred within the pipeline."),
            ),
            ("id", uuid().desc("The unique ID of the pipeline.")),
            ("number", int64().desc("The number of the pipeline.")),
            (
                "project_slug",
                string().desc("The project-slug for the pipeline."),
            ),
            (
                "state",
                str_enum(pipeline_states()).desc("The current state of the pipeline."),
            ),
            ("trigger", trigger()),
            (
                "trigger_parameters",
                map_of(any_of(vec![string(), integer(), boolean()])),
            ),
            (
                "updated_at",
                date_time().desc("The date and time the pipeline was last updated."),
            ),
            ("vcs", vcs()),
        ],
        &[
            "created_at",
            "errors",
            "id",
            "number",
            "project_slug",
            "state",
            "trigger",
        ],
    )
}

fn pipeline_parameters() -> Schema {
    map_of(any_of(vec![integer(), string(), boolean()])).desc(
        "An object containing pipeline parameters and their values. Pipeline parameters have \
         the following size limits: 100 max entries, 128 maximum key length, 512 maximum value \
         length.",
    )
}

fn pipeline_id_param() -> ReferenceOr<openapiv3::Parameter> {
    path_param_ex(
        "pipeline-id",
        "The unique ID of the pipeline.",
        uuid(),
        Value::String("5034460f-c7c4-4c43-9457-de07e2029e7b".to_string()),
    )
}

fn pipeline_project_slug_param() -> ReferenceOr<openapiv3::Parameter> {
    path_param_ex(
        "project-slug",
        "Project slug in the form `vcs-slug/org-name/repo-name`. The `/` characters may be \
         URL-escaped. For projects that use GitLab or GitHub App, use `circleci` as the \
         `vcs-slug`, replace `org-name` with the organization ID (found in Organization \
         Settings), and replace `repo-name` with the project ID (found in Project Settings).",
        string(),
        Value::String("gh/CircleCI-Public/api-preview-docs".to_string()),
    )
}

fn list_pipelines() -> Operation {
    Operation {
        summary: Some("Get a list of pipelines".to_string()),
        description: Some(
            "Returns all pipelines for the most recently built projects (max 250) you follow in \
             an organization."
                .to_string(),
        ),
        operation_id: Some("listPipelines".to_string()),
        tags: vec!["Pipeline".to_string()],
        parameters: vec![
            query_param_ex(
                "org-slug",
                "Org slug in the form `vcs-slug/org-name`. For projects that use GitLab or \
                 GitHub App, use `circleci` as the `vcs-slug` and replace the `org-name` with \
                 the organization ID (found in Organization Settings).",
                string(),
                Value::String("gh/CircleCI-Public".to_string()),
            ),
            page_token_param(),
            query_param("mine", "Only include entries created by your user.", boolean()),
        ],
        responses: responses(
            200,
            json_response("A sequence of pipelines.", paginated(pipeline())),
        ),
        ..Operation::default()
    }
}

fn continue_pipeline() -> Operation {
    Operation {
        summary: Some("Continue a pipeline".to_string()),
        description: Some(
            "Continue a pipeline from the setup phase. For information on using pipeline \
             parameters with dynamic configuration, see the [Pipeline values and parameters]\
             (https://circleci.com/docs/pipeline-variables/#pipeline-parameters-and-dynamic-configuration) \
             docs."
                .to_string(),
        ),
        operation_id: Some("continuePipeline".to_string()),
        tags: vec!["Pipeline".to_string()],
        request_body: Some(json_request(
            false,
            object(
                vec![
                    (
                        "configuration",
                        string().desc("A configuration string for the pipeline."),
                    ),
                    (
                        "continuation-key",
                        string().desc("A pipeline continuation key."),
                    ),
                    ("parameters", pipeline_parameters()),
                ],
                &["configuration", "continuation-key"],
            ),
        )),
        responses: responses(
            200,
            json_response(
                "A confirmation message.",
                object(
                    vec![("message", string().desc("A human-readable message"))],
                    &["message"],
                ),
            ),
        ),
        ..Operation::default()
    }
}

fn get_pipeline_by_id() -> Operation {
    Operation {
        summary: Some("Get a pipeline by ID".to_string()),
        description: Some("Returns a pipeline by the pipeline ID.".to_string()),
        operation_id: Some("getPipelineById".to_string()),
        tags: vec!["Pipeline".to_string()],
        parameters: vec![pipeline_id_param()],
        responses: responses(200, json_response("A pipeline object.", pipeline())),
        ..Operation::default()
    }
}

fn get_pipeline_config_by_id() -> Operation {
    Operation {
        summary: Some("Get a pipeline's configuration".to_string()),
        description: Some("Returns a pipeline's configuration by ID.".to_string()),
        operation_id: Some("getPipelineConfigById".to_string()),
        tags: vec!["Pipeline".to_string()],
        parameters: vec![pipeline_id_param()],
        responses: responses(
            200,
            json_response(
                "The configuration strings for the pipeline.",
                object(
                    vec![
                        (
                            "compiled",
                            string().desc(
                                "The compiled configuration for the pipeline, after all orb \
                                 expansion has been performed. If there were errors processing \
                                 the pipeline's configuration, then this field may be empty.",
                            ),
                        ),
                        (
                            "compiled-setup-config",
                            string().desc(
                                "The compiled setup configuration for the pipeline, after all \
                                 orb expansion has been performed. If there were errors \
                                 processing the pipeline's setup workflows, then this field may \
                                 be empty.",
                            ),
                        ),
                        (
                            "setup-config",
                            string().desc(
                                "The setup configuration for the pipeline used for Setup \
                                 Workflows. If there were errors processing the pipeline's \
                                 configuration or if setup workflows are not enabled, then this \
                                 field should not exist",
                            ),
                        ),
                        (
                            "source",
                            string().desc(
                                "The source configuration for the pipeline, before any config \
                                 compilation has been performed. If there is no config, then \
                                 this field will be empty.",
                            ),
                        ),
                    ],
                    &["compiled", "source"],
                ),
            ),
        ),
        ..Operation::default()
    }
}

fn list_workflows_by_pipeline_id() -> Operation {
    let workflow = object(
        vec![
            ("canceled_by", uuid()),
            (
                "created_at",
                date_time().desc("The date and time the workflow was created."),
            ),
            ("errored_by", uuid()),
            ("id", uuid().desc("The unique ID of the workflow.")),
            ("name", string().desc("The name of the workflow.")),
            (
                "pipeline_id",
                uuid().desc("The ID of the pipeline this workflow belongs to."),
            ),
            (
                "pipeline_number",
                int64().desc("The number of the pipeline this workflow belongs to."),
            ),
            (
                "project_slug",
                string().desc("The project-slug for the pipeline this workflow belongs to."),
            ),
            ("started_by", uuid()),
            (
                "status",
                str_enum(&[
                    "success",
                    "running",
                    "not_run",
                    "failed",
                    "error",
                    "failing",
                    "on_hold",
                    "canceled",
                    "unauthorized",
                ])
                .desc("The current status of the workflow."),
            ),
            (
                "stopped_at",
                date_time()
                    .nullable()
                    .desc("The date and time the workflow stopped."),
            ),
            ("tag", str_enum(&["setup"]).desc("Tag used for the workflow")),
        ],
        &[
            "created_at",
            "id",
            "name",
            "pipeline_id",
            "pipeline_number",
            "project_slug",
            "started_by",
            "status",
            "stopped_at",
        ],
    );
    Operation {
        summary: Some("Get a pipeline's workflows".to_string()),
        description: Some("Returns a paginated list of workflows by pipeline ID.".to_string()),
        operation_id: Some("listWorkflowsByPipelineId".to_string()),
        tags: vec!["Pipeline".to_string()],
        parameters: vec![pipeline_id_param(), page_token_param()],
        responses: responses(
            200,
            json_response("A paginated list of workflow objects.", paginated(workflow)),
        ),
        ..Operation::default()
    }
}

fn list_pipelines_for_project() -> Operation {
    Operation {
        summary: Some("Get all pipelines".to_string()),
        description: Some("Returns all pipelines for this project.".to_string()),
        operation_id: Some("listPipelinesForProject".to_string()),
        tags: vec!["Pipeline".to_string()],
        parameters: vec![
            pipeline_project_slug_param(),
            query_param("branch", "The name of a vcs branch.", string()),
            page_token_param(),
        ],
        responses: responses(
            200,
            json_response("A sequence of pipelines.", paginated(pipeline())),
        ),
        ..Operation::default()
    }
}

fn trigger_pipeline() -> Operation {
    Operation {
        summary: Some("Trigger a new pipeline".to_string()),
        description: Some(
            "Not yet available to projects that use GitLab or GitHub App. Triggers a new \
             pipeline on the project."
                .to_string(),
        ),
        operation_id: Some("triggerPipeline".to_string()),
        tags: vec!["Pipeline".to_string()],
        parameters: vec![pipeline_project_slug_param()],
        request_body: Some(json_request(
            false,
            object(
                vec![
                    (
                        "branch",
                        string().desc(
                            "The branch where the pipeline ran. The HEAD commit on this branch \
                             was used for the pipeline. Note that `branch` and `tag` are \
                             mutually exclusive. To trigger a pipeline for a PR by number use \
                             `pull/<number>/head` for the PR ref or `pull/<number>/merge` for \
                             the merge ref (GitHub only).",
                        ),
                    ),
                    ("parameters", pipeline_parameters()),
                    (
                        "tag",
                        string().desc(
                            "The tag used by the pipeline. The commit that this tag points to \
                             was used for the pipeline. Note that `branch` and `tag` are \
                             mutually exclusive.",
                        ),
                    ),
                ],
                &[],
            ),
        )),
        responses: responses(
            201,
            json_response("Error response.", object(vec![("message", string())], &[])),
        ),
        ..Operation::default()
    }
}

fn list_my_pipelines() -> Operation {
    Operation {
        summary: Some("Get your pipelines".to_string()),
        description: Some(
            "Returns a sequence of all pipelines for this project triggered by the user."
                .to_string(),
        ),
        operation_id: Some("listMyPipelines".to_string()),
        tags: vec!["Pipeline".to_string()],
        parameters: vec![pipeline_project_slug_param(), page_token_param()],
        responses: responses(
            200,
            json_response("A sequence of pipelines.", paginated(pipeline())),
        ),
        ..Operation::default()
    }
}

fn get_pipeline_by_number() -> Operation {
    Operation {
        summary: Some("Get a pipeline by pipeline number".to_string()),
        description: Some("Returns a pipeline by the pipeline number.".to_string()),
        operation_id: Some("getPipelineByNumber".to_string()),
        tags: vec!["Pipeline".to_string()],
        parameters: vec![
            pipeline_project_slug_param(),
            path_param("pipeline-number", "The number of the pipeline.", any_schema()),
        ],
        responses: responses(200, json_response("A pipeline object.", pipeline())),
        ..Operation::default()
    }
}

pub(crate) fn paths() -> Vec<(&'static str, PathItem)> {
    vec![
        (
            "/pipeline",
            PathItem {
                get: Some(list_pipelines()),
                ..PathItem::default()
            },
        ),
        (
            "/pipeline/continue",
            PathItem {
                post: Some(continue_pipeline()),
                ..PathItem::default()
            },
        ),
        (
            "/pipeline/{pipeline-id}",
            PathItem {
                get: Some(get_pipeline_by_id()),
                ..PathItem::default()
            },
        ),
        (
            "/pipeline/{pipeline-id}/config",
            PathItem {
                get: Some(get_pipeline_config_by_id()),
                ..PathItem::default()
            },
        ),
        (
            "/pipeline/{pipeline-id}/workflow",
            PathItem {
                get: Some(list_workflows_by_pipeline_id()),
                ..PathItem::default()
            },
        ),
        (
            "/project/{project-slug}/pipeline",
            PathItem {
                get: Some(list_pipelines_for_project()),
                post: Some(trigger_pipeline()),
                ..PathItem::default()
            },
        ),
        (
            "/project/{project-slug}/pipeline/mine",
            PathItem {
                get: Some(list_my_pipelines()),
                ..PathItem::default()
            },
        ),
        (
            "/project/{project-slug}/pipeline/{pipeline-number}",
            PathItem {
                get: Some(get_pipeline_by_number()),
                ..PathItem::default()
            },
        ),
    ]
}
