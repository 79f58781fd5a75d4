//! Workflow operations: get, approve, cancel, rerun, list jobs.

use openapiv3::{Operation, PathItem, ReferenceOr, Schema};

use crate::nodes::*;

fn workflow_id_param() -> ReferenceOr<openapiv3::Parameter> {
    path_param_ex(
        "id",
        "The unique ID of the workflow.",
        uuid(),
        serde_json::Value::String("5034460f-c7c4-4c43-9457-de07e2029e7b".to_string()),
    )
}

fn workflow() -> Schema {
    object(
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
    )
}

fn workflow_job() -> Schema {
    object(
        vec![
            (
                "approval_request_id",
                uuid().desc("The unique ID of the job."),
            ),
            ("approved_by", uuid().desc("The unique ID of the user.")),
            ("canceled_by", uuid().desc("The unique ID of the user.")),
            (
                "dependencies",
                array_of(uuid()).desc(
                    "A sequence of the unique job IDs for the jobs that this job depends upon in \
                     the workflow.",
                ),
            ),
            ("id", uuid().desc("The unique ID of the job.")),
            ("job_number", int64().desc("The number of the job.")),
            ("name", string().desc("The name of the job.")),
            (
                "project_slug",
                string().desc("The project-slug for the job."),
            ),
            (
                "requires",
                map_of(array_of(str_enum(&["success", "failed", "canceled"]))).desc(
                    "A sequence of the unique jobs and required statuses that this job depends \
                     upon in the workflow.",
                ),
            ),
            (
                "started_at",
                date_time().desc("The date and time the job started."),
            ),
            (
                "status",
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
                .desc("The current status of the job."),
            ),
            (
                "stopped_at",
                date_time()
                    .nullable()
                    .desc("The time when the job stopped."),
            ),
            (
                "type",
                str_enum(&["build", "approval"]).desc("The type of job."),
            ),
        ],
        &[
            "id",
            "name",
            "started_at",
            "dependencies",
            "project_slug",
            "status",
            "type",
        ],
    )
}

fn accepted_message() -> Schema {
    object(vec![("message", string())], &[])
}

fn get_workflow_by_id() -> Operation {
    Operation {
        summary: Some("Get a workflow".to_string()),
        description: Some("Returns summary fields of a workflow by ID.".to_string()),
        operation_id: Some("getWorkflowById".to_string()),
        tags: vec!["Workflow".to_string()],
        parameters: vec![workflow_id_param()],
        responses: responses(200, json_response("A workflow object.", workflow())),
        ..Operation::default()
    }
}

fn approve_pending_approval_job_by_id() -> Operation {
    Operation {
        summary: Some("Approve a job".to_string()),
        description: Some("Approves a pending approval job in a workflow.".to_string()),
        operation_id: Some("approvePendingApprovalJobById".to_string()),
        tags: vec!["Workflow".to_string()],
        parameters: vec![
            path_param(
                "approval_request_id",
                "The ID of the job being approved.",
                uuid(),
            ),
            workflow_id_param(),
        ],
        responses: responses(202, json_response("Error response.", accepted_message())),
        ..Operation::default()
    }
}

fn cancel_workflow() -> Operation {
    Operation {
        summary: Some("Cancel a workflow".to_string()),
        description: Some("Cancels a running workflow.".to_string()),
        operation_id: Some("cancelWorkflow".to_string()),
        tags: vec!["Workflow".to_string()],
        parameters: vec![workflow_id_param()],
        responses: responses(202, json_response("Error response.", accepted_message())),
        ..Operation::default()
    }
}

fn list_workflow_jobs() -> Operation {
    Operation {
        summary: Some("Get a workflow's jobs".to_string()),
        description: Some("Returns a sequence of jobs for a workflow.".to_string()),
        operation_id: Some("listWorkflowJobs".to_string()),
        tags: vec!["Workflow".to_string()],
        parameters: vec![workflow_id_param()],
        responses: responses(
            200,
            json_response("A paginated sequence of jobs.", paginated(workflow_job())),
        ),
        ..Operation::default()
    }
}

fn rerun_workflow() -> Operation {
    Operation {
        summary: Some("Rerun a workflow".to_string()),
        description: Some("Reruns a workflow.".to_string()),
        operation_id: Some("rerunWorkflow".to_string()),
        tags: vec!["Workflow".to_string()],
        parameters: vec![workflow_id_param()],
        request_body: Some(json_request(
            false,
            object(
                vec![
                    (
                        "enable_ssh",
                        boolean().desc(
                            "Whether to enable SSH access for the triggering user on the \
                             newly-rerun job. Requires the jobs parameter to be used and so is \
                             mutually exclusive with the from_failed parameter.",
                        ),
                    ),
                    (
                        "from_failed",
                        boolean().desc(
                            "Whether to rerun the workflow from the failed job. Mutually \
                             exclusive with the jobs parameter.",
                        ),
                    ),
                    ("jobs", array_of(uuid()).desc("A list of job IDs to rerun.")),
                    (
                        "sparse_tree",
                        boolean().desc(
                            "Completes rerun using sparse trees logic, an optimization for \
                             workflows that have disconnected subgraphs. Requires jobs parameter \
                             and so is mutually exclusive with the from_failed parameter.",
                        ),
                    ),
                ],
                &[],
            ),
        )),
        responses: responses(202, json_response("Error response.", accepted_message())),
        ..Operation::default()
    }
}

pub(crate) fn paths() -> Vec<(&'static str, PathItem)> {
    vec![
        (
            "/workflow/{id}",
            PathItem {
                get: Some(get_workflow_by_id()),
                ..PathItem::default()
            },
        ),
        (
            "/workflow/{id}/approve/{approval_request_id}",
            PathItem {
                post: Some(approve_pending_approval_job_by_id()),
                ..PathItem::default()
            },
        ),
        (
            "/workflow/{id}/cancel",
            PathItem {
                post: Some(cancel_workflow()),
                ..PathItem::default()
            },
        ),
        (
            "/workflow/{id}/job",
            PathItem {
                get: Some(list_workflow_jobs()),
                ..PathItem::default()
            },
        ),
        (
            "/workflow/{id}/rerun",
            PathItem {
                post: Some(rerun_workflow()),
                ..PathItem::default()
            },
        ),
    ]
}
