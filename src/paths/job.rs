//! Job operations: details, cancel, artifacts, test metadata.

use openapiv3::{Operation, PathItem, Schema};

use crate::nodes::*;

fn job_status() -> Schema {
    str_enum(&[
        "success",
        "running",
        "not_run",
        "failed",
        "retried",
        "queued",
        "not_running",
        "infrastructure_fail",
        "timedout",
        "on_hold",
        "terminated-unknown",
        "blocked",
        "canceled",
        "unauthorized",
    ])
    .desc("The current status of the job.")
}

fn job_details() -> Schema {
    object(
        vec![
            (
                "contexts",
                array_of(object(
                    vec![("name", string().desc("The name of the context."))],
                    &["name"],
                ))
                .desc("List of contexts used by the job."),
            ),
            (
                "created_at",
                date_time().desc("The time when the job was created."),
            ),
            (
                "duration",
                int64().desc("Duration of a job in milliseconds."),
            ),
            (
                "executor",
                object(
                    vec![
                        ("resource_class", string().desc("Resource class name.")),
                        ("type", string().desc("Executor type.")),
                    ],
                    &["resource_class"],
                )
                .desc("Information about executor used for a job."),
            ),
            (
                "latest_workflow",
                object(
                    vec![
                        ("id", uuid().desc("The unique ID of the workflow.")),
                        ("name", string().desc("The name of the workflow.")),
                    ],
                    &["id", "name"],
                )
                .desc("Info about the latest workflow the job was a part of."),
            ),
            (
                "messages",
                array_of(object(
                    vec![
                        ("message", string().desc("Information describing message.")),
                        (
                            "reason",
                            string().desc(
                                "Value describing the reason for message to be added to the job.",
                            ),
                        ),
                        ("type", string().desc("Message type.")),
                    ],
                    &["message", "type"],
                ))
                .desc("Messages from CircleCI execution platform."),
            ),
            ("name", string().desc("The name of the job.")),
            ("number", int64().desc("The number of the job.")),
            (
                "organization",
                object(
                    vec![("name", string().desc("The name of the organization."))],
                    &["name"],
                )
                .desc("Information about an organization."),
            ),
            (
                "parallel_runs",
                array_of(object(
                    vec![
                        ("index", int64().desc("Index of the parallel run.")),
                        ("status", string().desc("Status of the parallel run.")),
                    ],
                    &["index", "status"],
                ))
                .desc("Info about parallels runs and their status."),
            ),
            (
                "parallelism",
                int64().desc("A number of parallel runs the job has."),
            ),
            (
                "pipeline",
                object(
                    vec![("id", uuid().desc("The unique ID of the pipeline."))],
                    &["id"],
                )
                .desc("Info about a pipeline the job is a part of."),
            ),
            (
                "project",
                object(
                    vec![
                        (
                            "external_url",
                            string().desc("URL to the repository hosting the project's code"),
                        ),
                        ("id", uuid()),
                        ("name", string().desc("The name of the project")),
                        (
                            "slug",
                            string().desc(
                                "Project slug in the form `vcs-slug/org-name/repo-name`. The `/` \
                                 characters may be URL-escaped.",
                            ),
                        ),
                    ],
                    &["external_url", "id", "name", "slug"],
                )
                .desc("Information about a project."),
            ),
            (
                "queued_at",
                date_time().desc("The time when the job was placed in a queue."),
            ),
            (
                "started_at",
                date_time().desc("The date and time the job started."),
            ),
            ("status", job_status()),
            (
                "stopped_at",
                date_time()
                    .nullable()
                    .desc("The time when the job stopped."),
            ),
            (
                "web_url",
                string().desc("URL of the job in CircleCI Web UI."),
            ),
        ],
        &[
            "contexts",
            "created_at",
            "duration",
            "executor",
            "latest_workflow",
            "messages",
            "name",
            "number",
            "organization",
            "parallel_runs",
            "parallelism",
            "pipeline",
            "project",
            "queued_at",
            "started_at",
            "status",
            "web_url",
        ],
    )
}

fn artifact() -> Schema {
    object(
        vec![
            (
                "node_index",
                int64().desc("The index of the node that stored the artifact."),
            ),
            ("path", string().desc("The artifact path.")),
            (
                "url",
                string().desc("The URL to download the artifact contents."),
            ),
        ],
        &["node_index", "path", "url"],
    )
}

fn test() -> Schema {
    object(
        vec![
            (
                "classname",
                string().desc("The programmatic location of the test."),
            ),
            (
                "file",
                string().desc("The file in which the test is defined."),
            ),
            (
                "message",
                string().desc("The failure message associated with the test."),
            ),
            ("name", string().desc("The name of the test.")),
            (
                "result",
                string().desc("Indication of whether the test succeeded."),
            ),
            (
                "run_time",
                number().desc("The time it took to run the test in seconds"),
            ),
            (
                "source",
                string().desc("The program that generated the test results"),
            ),
        ],
        &[
            "classname", "file", "message", "name", "result", "run_time", "source",
        ],
    )
}

fn get_job_details() -> Operation {
    Operation {
        summary: Some("Get job details".to_string()),
        description: Some("Returns job details.".to_string()),
        operation_id: Some("getJobDetails".to_string()),
        tags: vec!["Job".to_string()],
        parameters: vec![job_number_param(), project_slug_param()],
        responses: responses(200, json_response("Job details.", job_details())),
        ..Operation::default()
    }
}

fn cancel_job() -> Operation {
    Operation {
        summary: Some("Cancel job".to_string()),
        description: Some("Cancel job with a given job number.".to_string()),
        operation_id: Some("cancelJob".to_string()),
        tags: vec!["Job".to_string()],
        parameters: vec![job_number_param(), project_slug_param()],
        responses: responses(
            200,
            json_response(
                "",
                object(
                    vec![("message", string().desc("A human-readable message"))],
                    &["message"],
                ),
            ),
        ),
        ..Operation::default()
    }
}

fn get_job_artifacts() -> Operation {
    Operation {
        summary: Some("Get a job's artifacts".to_string()),
        description: Some("Returns a job's artifacts.".to_string()),
        operation_id: Some("getJobArtifacts".to_string()),
        tags: vec!["Job".to_string()],
        parameters: vec![job_number_param(), project_slug_param()],
        responses: responses(
            200,
            json_response(
                "A paginated list of the job's artifacts.",
                paginated(artifact()),
            ),
        ),
        ..Operation::default()
    }
}

fn get_tests() -> Operation {
    Operation {
        summary: Some("Get test metadata".to_string()),
        description: Some(
            "Get test metadata for a build. In the rare case where there is more than 250MB of \
             test data on the job, no results will be returned."
                .to_string(),
        ),
        operation_id: Some("getTests".to_string()),
        tags: vec!["Job".to_string()],
        parameters: vec![job_number_param(), project_slug_param()],
        responses: responses(
            200,
            json_response("A paginated list of test results.", paginated(test())),
        ),
        ..Operation::default()
    }
}

pub(crate) fn paths() -> Vec<(&'static str, PathItem)> {
    vec![
        (
            "/project/{project-slug}/job/{job-number}",
            PathItem {
                get: Some(get_job_details()),
                ..PathItem::default()
            },
        ),
        (
            "/project/{project-slug}/job/{job-number}/cancel",
            PathItem {
                post: Some(cancel_job()),
                ..PathItem::default()
            },
        ),
        (
            "/project/{project-slug}/{job-number}/artifacts",
            PathItem {
                get: Some(get_job_artifacts()),
                ..PathItem::default()
            },
        ),
        (
            "/project/{project-slug}/{job-number}/tests",
            PathItem {
                get: Some(get_tests()),
                ..PathItem::default()
            },
        ),
    ]
}
