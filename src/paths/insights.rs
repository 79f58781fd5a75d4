//! `/insights` operations: aggregated CI metrics, time series, flaky and
//! slow test reports.

use openapiv3::{Operation, Parameter, PathItem, ReferenceOr, Schema};
use serde_json::Value;

use crate::nodes::*;

fn insights_project_slug_param() -> ReferenceOr<Parameter> {
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

fn workflow_name_param() -> ReferenceOr<Parameter> {
    path_param_ex(
        "workflow-name",
        "The name of the workflow.",
        string(),
        Value::String("build-and-test".to_string()),
    )
}

fn reporting_window_param() -> ReferenceOr<Parameter> {
    query_param(
        "reporting-window",
        "The time window used to calculate summary metrics. If not provided, defaults to \
         last-90-days",
        str_enum(&[
            "last-7-days",
            "last-90-days",
            "last-24-hours",
            "last-30-days",
            "last-60-days",
        ]),
    )
}

fn branch_param() -> ReferenceOr<Parameter> {
    query_param(
        "branch",
        "The name of a vcs branch. If not passed we will scope the API call to the default \
         branch.",
        string(),
    )
}

fn all_branches_param() -> ReferenceOr<Parameter> {
    query_param(
        "all-branches",
        "Whether to retrieve data for all branches combined. Use either this parameter OR the \
         branch name parameter.",
        boolean(),
    )
}

fn start_date_param() -> ReferenceOr<Parameter> {
    query_param(
        "start-date",
        "Include only executions that started at or after this date. This must be specified \
         if an end-date is provided.",
        date_time(),
    )
}

fn end_date_param() -> ReferenceOr<Parameter> {
    query_param(
        "end-date",
        "Include only executions that started before this date. This date can be at most 90 \
         days after the start-date.",
        date_time(),
    )
}

fn success_rate() -> Schema {
    float()
}

/// The five-field metric block shared by the org and project summaries.
fn summary_metrics() -> Schema {
    object(
        vec![
            ("success_rate", success_rate()),
            (
                "throughput",
                float().desc("The average number of runs per day."),
            ),
            (
                "total_credits_used",
                int64().desc("The total credits consumed over the current timeseries interval."),
            ),
            (
                "total_duration_secs",
                int64().desc("Total duration, in seconds."),
            ),
            (
                "total_runs",
                int64().desc(
                    "The total number of runs, including runs that are still on-hold or running.",
                ),
            ),
        ],
        &[
            "success_rate",
            "throughput",
            "total_credits_used",
            "total_duration_secs",
            "total_runs",
        ],
    )
}

fn summary_trends() -> Schema {
    object(
        vec![
            (
                "success_rate",
                float().desc("The trend value for the success rate."),
            ),
            (
                "throughput",
                float().desc("Trend value for the average number of runs per day."),
            ),
            (
                "total_credits_used",
                float().desc("The trend value for total credits consumed."),
            ),
            (
                "total_duration_secs",
                float().desc("Trend value for total duration."),
            ),
            (
                "total_runs",
                float().desc("The trend value for total number of runs."),
            ),
        ],
        &[
            "success_rate",
            "throughput",
            "total_credits_used",
            "total_duration_secs",
            "total_runs",
        ],
    )
}

fn workflow_or_branch_metrics() -> Schema {
    object(
        vec![
            (
                "p95_duration_secs",
                float().desc("The 95th percentile duration among a group of workflow runs."),
            ),
            ("success_rate", success_rate()),
            (
                "total_credits_used",
                int64().desc("The total credits consumed over the current timeseries interval."),
            ),
            (
                "total_runs",
                int64().desc(
                    "The total number of runs, including runs that are still on-hold or running.",
                ),
            ),
        ],
        &[
            "p95_duration_secs",
            "success_rate",
            "total_credits_used",
            "total_runs",
        ],
    )
    .desc("Metrics aggregated across a workflow or branchfor a project.")
}

fn workflow_or_branch_trends() -> Schema {
    object(
        vec![
            (
                "p95_duration_secs",
                float().desc("The 95th percentile duration among a group of workflow runs."),
            ),
            (
                "success_rate",
                float().desc("The trend value for the success rate."),
            ),
            (
                "total_credits_used",
                float().desc("The trend value for total credits consumed."),
            ),
            (
                "total_runs",
                float().desc("The trend value for total number of runs."),
            ),
        ],
        &[
            "p95_duration_secs",
            "success_rate",
            "total_credits_used",
            "total_runs",
        ],
    )
    .desc("Trends aggregated across a workflow or branch for a project.")
}

fn get_project_workflows_page_data() -> Operation {
    let project_data = object(
        vec![
            (
                "metrics",
                summary_metrics()
                    .desc("Metrics aggregated across all workflows and branches for a project."),
            ),
            (
                "trends",
                summary_trends().desc(
                    "Metric trends aggregated across all workflows and branches for a project.",
                ),
            ),
        ],
        &["metrics", "trends"],
    )
    .desc("Metrics and trends data aggregated for a given project.");
    let branch_data_item = object(
        vec![
            (
                "branch",
                string().desc("The VCS branch of a workflow's trigger."),
            ),
            ("metrics", workflow_or_branch_metrics()),
            ("trends", workflow_or_branch_trends()),
            ("workflow_name", string().desc("The name of the workflow.")),
        ],
        &["branch", "metrics", "trends", "workflow_name"],
    );
    let workflow_data_item = object(
        vec![
            ("metrics", workflow_or_branch_metrics()),
            ("trends", workflow_or_branch_trends()),
            ("workflow_name", string().desc("The name of the workflow.")),
        ],
        &["metrics", "trends", "workflow_name"],
    );
    Operation {
        summary: Some(
            "Get summary metrics and trends for a project across it's workflows and branches"
                .to_string(),
        ),
        description: Some(
            "Get summary metrics and trends for a project at workflow and branch level. \n\
             Workflow runs going back at most 90 days are included in the aggregation window. \n\
             Trends are only supported upto last 30 days. \n\
             Please note that Insights is not a financial reporting tool and should not be used \
             for precise credit reporting.  Credit reporting from Insights does not use the \
             same source of truth as the billing information that is found in the Plan Overview \
             page in the CircleCI UI, nor does the underlying data have the same data accuracy \
             guarantees as the billing information in the CircleCI UI.  This may lead to \
             discrepancies between credits reported from Insights and the billing information \
             in the Plan Overview page of the CircleCI UI.  For precise credit reporting, \
             always use the Plan Overview page in the CircleCI UI."
                .to_string(),
        ),
        operation_id: Some("getProjectWorkflowsPageData".to_string()),
        tags: vec!["Insights".to_string()],
        parameters: vec![
            insights_project_slug_param(),
            reporting_window_param(),
            query_param(
                "branches",
                "The names of VCS branches to include in branch-level workflow metrics.",
                any_schema(),
            ),
            query_param(
                "workflow-names",
                "The names of workflows to include in workflow-level metrics.",
                any_schema(),
            ),
        ],
        responses: responses(
            200,
            json_response(
                "Aggregated summary metrics and trends by workflow and branches",
                object(
                    vec![
                        (
                            "all_branches",
                            array_of(string())
                                .desc("A list of all the branches for a given project."),
                        ),
                        (
                            "all_workflows",
                            array_of(string())
                                .desc("A list of all the workflows for a given project."),
                        ),
                        (
                            "org_id",
                            any_schema().desc("The unique ID of the organization"),
                        ),
                        ("project_data", project_data),
                        (
                            "project_id",
                            any_schema().desc("The unique ID of the project"),
                        ),
                        (
                            "project_workflow_branch_data",
                            array_of(branch_data_item).desc(
                                "A list of metrics and trends data for branches for a given \
                                 project.",
                            ),
                        ),
                        (
                            "project_workflow_data",
                            array_of(workflow_data_item).desc(
                                "A list of metrics and trends data for workflows for a given \
                                 project.",
                            ),
                        ),
                    ],
                    &[],
                ),
            ),
        ),
        ..Operation::default()
    }
}

fn get_job_timeseries() -> Operation {
    let duration_metrics = object(
        vec![
            (
                "max",
                int64().desc("The max duration, in seconds, among a group of runs."),
            ),
            (
                "median",
                int64().desc("The median duration, in seconds, among a group of runs."),
            ),
            (
                "min",
                int64().desc("The minimum duration, in seconds, among a group of runs."),
            ),
            (
                "p95",
                int64().desc("The 95th percentile duration, in seconds, among a group of runs."),
            ),
            (
                "total",
                int64().desc("The total duration, in seconds, added across a group of runs."),
            ),
        ],
        &["max", "median", "min", "p95", "total"],
    )
    .desc("Metrics relating to the duration of runs for a workflow.");
    let metrics = object(
        vec![
            ("duration_metrics", duration_metrics),
            ("failed_runs", int64().desc("The number of failed runs.")),
            (
                "median_credits_used",
                int64().desc("The median credits consumed over the current timeseries interval."),
            ),
            (
                "successful_runs",
                int64().desc("The number of successful runs."),
            ),
            (
                "throughput",
                float().desc("The average number of runs per day."),
            ),
            (
                "total_credits_used",
                int64().desc("The total credits consumed over the current timeseries interval."),
            ),
            (
                "total_runs",
                int64().desc(
                    "The total number of runs, including runs that are still on-hold or running.",
                ),
            ),
        ],
        &[
            "duration_metrics",
            "failed_runs",
            "median_credits_used",
            "successful_runs",
            "throughput",
            "total_credits_used",
            "total_runs",
        ],
    )
    .desc("Metrics relating to a workflow's runs.");
    let item = object(
        vec![
            (
                "max_ended_at",
                date_time().desc("The end time of the last execution included in the metrics."),
            ),
            ("metrics", metrics),
            (
                "min_started_at",
                date_time()
                    .desc("The start time for the earliest execution included in the metrics."),
            ),
            ("name", string().desc("The name of the workflow.")),
            (
                "timestamp",
                date_time().desc("The start of the interval for timeseries metrics."),
            ),
        ],
        &["max_ended_at", "metrics", "min_started_at", "name", "timestamp"],
    );
    Operation {
        summary: Some("Job timeseries data".to_string()),
        description: Some(
            "Get timeseries data for all jobs within a workflow. Hourly granularity data is \
             only retained for 48 hours while daily granularity data is retained for 90 days."
                .to_string(),
        ),
        operation_id: Some("getJobTimeseries".to_string()),
        tags: vec!["Insights".to_string()],
        parameters: vec![
            insights_project_slug_param(),
            workflow_name_param(),
            branch_param(),
            query_param(
                "granularity",
                "The granularity for which to query timeseries data.",
                str_enum(&["daily", "hourly"]),
            ),
            start_date_param(),
            end_date_param(),
        ],
        responses: responses(
            200,
            json_response(
                "An array of timeseries data, one entry per job.",
                object(
                    vec![
                        (
                            "items",
                            array_of(item)
                                .desc("Aggregate metrics for a workflow at a time granularity"),
                        ),
                        ("next_page_token", next_page_token()),
                    ],
                    &["items", "next_page_token"],
                ),
            ),
        ),
        ..Operation::default()
    }
}

fn get_org_summary_data() -> Operation {
    let org_data = object(
        vec![
            (
                "metrics",
                summary_metrics().desc("Metrics for a single org metrics."),
            ),
            ("trends", summary_trends().desc("Trends for a single org.")),
        ],
        &["metrics", "trends"],
    )
    .desc("Aggregated metrics for an org, with trends.");
    let project_metrics = object(
        vec![
            ("success_rate", success_rate()),
            (
                "total_credits_used",
                int64().desc("The total credits consumed over the current timeseries interval."),
            ),
            (
                "total_duration_secs",
                int64().desc("Total duration, in seconds."),
            ),
            (
                "total_runs",
                int64().desc(
                    "The total number of runs, including runs that are still on-hold or running.",
                ),
            ),
        ],
        &[
            "success_rate",
            "total_credits_used",
            "total_duration_secs",
            "total_runs",
        ],
    )
    .desc("Metrics for a single project, across all branches.");
    let project_trends = object(
        vec![
            (
                "success_rate",
                float().desc("The trend value for the success rate."),
            ),
            (
                "total_credits_used",
                float().desc("The trend value for total credits consumed."),
            ),
            (
                "total_duration_secs",
                float().desc("Trend value for total duration."),
            ),
            (
                "total_runs",
                float().desc("The trend value for total number of runs."),
            ),
        ],
        &[
            "success_rate",
            "total_credits_used",
            "total_duration_secs",
            "total_runs",
        ],
    )
    .desc("Trends for a single project, across all branches.");
    let org_project_data_item = object(
        vec![
            ("metrics", project_metrics),
            ("project_name", string().desc("The name of the project.")),
            ("trends", project_trends),
        ],
        &["metrics", "project_name", "trends"],
    );
    Operation {
        summary: Some(
            "Get summary metrics with trends for the entire org, and for each project."
                .to_string(),
        ),
        description: Some(
            "Gets aggregated summary metrics with trends for the entire org. \n\
             Also gets aggregated metrics and trends for each project belonging to the org."
                .to_string(),
        ),
        operation_id: Some("getOrgSummaryData".to_string()),
        tags: vec!["Insights".to_string()],
        parameters: vec![
            path_param_ex(
                "org-slug",
                "Org slug in the form `vcs-slug/org-name`. The `/` characters may be \
                 URL-escaped.",
                string(),
                Value::String("gh/CircleCI-Public".to_string()),
            ),
            reporting_window_param(),
            query_param("project-names", "List of project names.", any_schema()),
        ],
        responses: responses(
            200,
            json_response(
                "summary metrics with trends for an entire org and it's projects.",
                object(
                    vec![
                        (
                            "all_projects",
                            array_of(string())
                                .desc("A list of all the project names in the organization."),
                        ),
                        ("org_data", org_data),
                        (
                            "org_project_data",
                            array_of(org_project_data_item)
                                .desc("Metrics for a single project, across all branches"),
                        ),
                    ],
                    &["all_projects", "org_data", "org_project_data"],
                ),
            ),
        ),
        ..Operation::default()
    }
}

fn get_all_insights_branches() -> Operation {
    Operation {
        summary: Some("Get all branches for a project".to_string()),
        description: Some(
            "Get a list of all branches for a specified project. The list will only contain \
             branches currently available within Insights. The maximum number of branches \
             returned by this endpoint is 5,000."
                .to_string(),
        ),
        operation_id: Some("getAllInsightsBranches".to_string()),
        tags: vec!["Insights".to_string()],
        parameters: vec![
            insights_project_slug_param(),
            query_param(
                "workflow-name",
                "The name of a workflow. If not passed we will scope the API call to the \
                 project.",
                string(),
            ),
        ],
        responses: responses(
            200,
            json_response(
                "A list of branches for a project",
                object(
                    vec![
                        (
                            "branches",
                            array_of(string())
                                .desc("A list of all the branches for a given project."),
                        ),
                        (
                            "org_id",
                            any_schema().desc("The unique ID of the organization"),
                        ),
                        (
                            "project_id",
                            any_schema().desc("The unique ID of the project"),
                        ),
                    ],
                    &["branches", "org_id", "project_id"],
                ),
            ),
        ),
        ..Operation::default()
    }
}

fn get_flaky_tests() -> Operation {
    let flaky_test = object(
        vec![
            (
                "classname",
                string().desc("The class the test belongs to."),
            ),
            ("file", string().desc("The file the test belongs to.")),
            ("job-name", string().desc("The name of the job.")),
            ("job-number", int64().desc("The number of the job.")),
            (
                "pipeline-number",
                int64().desc("The number of the pipeline."),
            ),
            ("source", string().desc("The source of the test.")),
            ("test-name", string().desc("The name of the test.")),
            ("time-wasted", int64()),
            (
                "times-flaked",
                int64().desc("The number of times the test flaked."),
            ),
            (
                "workflow-created-at",
                date_time().desc("The date and time when workflow was created."),
            ),
            (
                "workflow-id",
                any_schema()
                    .desc("The ID of the workflow associated with the provided test counts"),
            ),
            ("workflow-name", string().desc("The name of the workflow.")),
        ],
        &[
            "classname",
            "file",
            "job-name",
            "job-number",
            "pipeline-number",
            "source",
            "test-name",
            "times-flaked",
            "workflow-created-at",
            "workflow-id",
            "workflow-name",
        ],
    );
    Operation {
        summary: Some("Get flaky tests for a project".to_string()),
        description: Some(
            "Get a list of flaky tests for a given project. Flaky tests are branch agnostic. \n\
             A flaky test is a test that passed and failed in the same commit."
                .to_string(),
        ),
        operation_id: Some("getFlakyTests".to_string()),
        tags: vec!["Insights".to_string()],
        parameters: vec![insights_project_slug_param()],
        responses: responses(
            200,
            json_response(
                "A list of flaky tests for a project",
                object(
                    vec![
                        (
                            "flaky-tests",
                            array_of(flaky_test).desc(
                                "A list of all instances of flakes. Note that a test is no \
                                 longer considered flaky after 2 weeks have passed without a \
                                 flake. Each flake resets this timer.",
                            ),
                        ),
                        (
                            "total-flaky-tests",
                            int64().desc(
                                "A count of unique tests that have failed. If your project has \
                                 N tests that have flaked multiple times each, this will be \
                                 equal to N.",
                            ),
                        ),
                    ],
                    &["flaky-tests", "total-flaky-tests"],
                ),
            ),
        ),
        ..Operation::default()
    }
}

fn full_duration_metrics(scope: &str) -> Schema {
    object(
        vec![
            (
                "max",
                int64().desc("The max duration, in seconds, among a group of runs."),
            ),
            (
                "mean",
                int64().desc("The mean duration, in seconds, among a group of runs."),
            ),
            (
                "median",
                int64().desc("The median duration, in seconds, among a group of runs."),
            ),
            (
                "min",
                int64().desc("The minimum duration, in seconds, among a group of runs."),
            ),
            (
                "p95",
                int64().desc("The 95th percentile duration, in seconds, among a group of runs."),
            ),
            (
                "standard_deviation",
                float().desc("The standard deviation, in seconds, among a group of runs."),
            ),
        ],
        &["max", "mean", "median", "min", "p95", "standard_deviation"],
    )
    .desc(scope)
}

fn get_project_workflow_metrics() -> Operation {
    let metrics = object(
        vec![
            (
                "duration_metrics",
                full_duration_metrics("Metrics relating to the duration of runs for a workflow."),
            ),
            ("failed_runs", int64().desc("The number of failed runs.")),
            (
                "mttr",
                int64().desc(
                    "The mean time to recovery (mean time between failures and their next \
                     success) in seconds.",
                ),
            ),
            ("success_rate", success_rate()),
            (
                "successful_runs",
                int64().desc("The number of successful runs."),
            ),
            (
                "throughput",
                float().desc("The average number of runs per day."),
            ),
            (
                "total_credits_used",
                int64().desc(
                    "The total credits consumed by the workflow in the aggregation window. Note \
                     that Insights is not a real time financial reporting tool and should not \
                     be used for credit reporting.",
                ),
            ),
            (
                "total_recoveries",
                int64().desc("The number of recovered workflow executions per day."),
            ),
            (
                "total_runs",
                int64().desc(
                    "The total number of runs, including runs that are still on-hold or running.",
                ),
            ),
        ],
        &[
            "duration_metrics",
            "failed_runs",
            "mttr",
            "success_rate",
            "successful_runs",
            "throughput",
            "total_credits_used",
            "total_recoveries",
            "total_runs",
        ],
    )
    .desc("Metrics relating to a workflow's runs.");
    let item = object(
        vec![
            ("metrics", metrics),
            ("name", string().desc("The name of the workflow.")),
            (
                "project_id",
                any_schema().desc("The unique ID of the project"),
            ),
            (
                "window_end",
                date_time().desc(
                    "The timestamp of the last build within the requested reporting window.",
                ),
            ),
            (
                "window_start",
                date_time().desc(
                    "The timestamp of the first build within the requested reporting window.",
                ),
            ),
        ],
        &["metrics", "name", "project_id", "window_end", "window_start"],
    );
    Operation {
        summary: Some("Get summary metrics for a project's workflows".to_string()),
        description: Some(
            "Get summary metrics for a project's workflows.  Workflow runs going back at most \
             90 days are included in the aggregation window. Metrics are refreshed daily, and \
             thus may not include executions from the last 24 hours.  Please note that Insights \
             is not a financial reporting tool and should not be used for precise credit \
             reporting.  Credit reporting from Insights does not use the same source of truth \
             as the billing information that is found in the Plan Overview page in the CircleCI \
             UI, nor does the underlying data have the same data accuracy guarantees as the \
             billing information in the CircleCI UI.  This may lead to discrepancies between \
             credits reported from Insights and the billing information in the Plan Overview \
             page of the CircleCI UI.  For precise credit reporting, always use the Plan \
             Overview page in the CircleCI UI."
                .to_string(),
        ),
        operation_id: Some("getProjectWorkflowMetrics".to_string()),
        tags: vec!["Insights".to_string()],
        parameters: vec![
            insights_project_slug_param(),
            page_token_param(),
            all_branches_param(),
            branch_param(),
            reporting_window_param(),
        ],
        responses: responses(
            200,
            json_response(
                "A paginated list of summary metrics by workflow",
                object(
                    vec![
                        ("items", array_of(item).desc("Workflow summary metrics.")),
                        ("next_page_token", next_page_token()),
                    ],
                    &["items", "next_page_token"],
                ),
            ),
        ),
        ..Operation::default()
    }
}

fn get_project_workflow_runs() -> Operation {
    let item = object(
        vec![
            (
                "branch",
                string().desc("The VCS branch of a Workflow's trigger."),
            ),
            (
                "created_at",
                date_time().desc("The date and time the workflow was created."),
            ),
            (
                "credits_used",
                int64().desc(
                    "The number of credits used during execution. Note that Insights is not a \
                     real time financial reporting tool and should not be used for credit \
                     reporting.",
                ),
            ),
            (
                "duration",
                int64().desc("The duration in seconds of a run."),
            ),
            ("id", uuid().desc("The unique ID of the workflow.")),
            (
                "is_approval",
                boolean().desc(
                    "Describes if the job is an approval job or not. Approval jobs are \
                     intermediary jobs that are created to pause the workflow until approved.",
                ),
            ),
            (
                "status",
                str_enum(&["success", "failed", "error", "canceled", "unauthorized"])
                    .desc("Workflow status."),
            ),
            (
                "stopped_at",
                date_time()
                    .nullable()
                    .desc("The date and time the workflow stopped."),
            ),
        ],
        &[
            "branch",
            "created_at",
            "credits_used",
            "duration",
            "id",
            "is_approval",
            "status",
            "stopped_at",
        ],
    );
    Operation {
        summary: Some("Get recent runs of a workflow".to_string()),
        description: Some(
            "Get recent runs of a workflow. Runs going back at most 90 days are returned. \
             Please note that Insights is not a financial reporting tool and should not be \
             used for precise credit reporting.  Credit reporting from Insights does not use \
             the same source of truth as the billing information that is found in the Plan \
             Overview page in the CircleCI UI, nor does the underlying data have the same data \
             accuracy guarantees as the billing information in the CircleCI UI.  This may lead \
             to discrepancies between credits reported from Insights and the billing \
             information in the Plan Overview page of the CircleCI UI.  For precise credit \
             reporting, always use the Plan Overview page in the CircleCI UI."
                .to_string(),
        ),
        operation_id: Some("getProjectWorkflowRuns".to_string()),
        tags: vec!["Insights".to_string()],
        parameters: vec![
            insights_project_slug_param(),
            workflow_name_param(),
            all_branches_param(),
            branch_param(),
            page_token_param(),
            start_date_param(),
            end_date_param(),
        ],
        responses: responses(
            200,
            json_response(
                "A paginated list of recent workflow runs",
                object(
                    vec![
                        ("items", array_of(item).desc("Recent workflow runs.")),
                        ("next_page_token", next_page_token()),
                    ],
                    &["items", "next_page_token"],
                ),
            ),
        ),
        ..Operation::default()
    }
}

fn get_project_workflow_job_metrics() -> Operation {
    let metrics = object(
        vec![
            (
                "duration_metrics",
                full_duration_metrics(
                    "Metrics relating to the duration of runs for a workflow job.",
                ),
            ),
            ("failed_runs", int64().desc("The number of failed runs.")),
            ("success_rate", success_rate()),
            (
                "successful_runs",
                int64().desc("The number of successful runs."),
            ),
            (
                "throughput",
                float().desc("The average number of runs per day."),
            ),
            (
                "total_credits_used",
                int64().desc(
                    "The total credits consumed by the job in the aggregation window. Note that \
                     Insights is not a real time financial reporting tool and should not be \
                     used for credit reporting.",
                ),
            ),
            (
                "total_runs",
                int64().desc(
                    "The total number of runs, including runs that are still on-hold or running.",
                ),
            ),
        ],
        &[
            "duration_metrics",
            "failed_runs",
            "success_rate",
            "successful_runs",
            "throughput",
            "total_credits_used",
            "total_runs",
        ],
    )
    .desc("Metrics relating to a workflow job's runs.");
    let item = object(
        vec![
            ("metrics", metrics),
            ("name", string().desc("The name of the job.")),
            (
                "window_end",
                date_time().desc(
                    "The timestamp of the last build within the requested reporting window.",
                ),
            ),
            (
                "window_start",
                date_time().desc(
                    "The timestamp of the first build within the requested reporting window.",
                ),
            ),
        ],
        &["metrics", "name", "window_end", "window_start"],
    );
    Operation {
        summary: Some("Get summary metrics for a project workflow's jobs.".to_string()),
        description: Some(
            "Get summary metrics for a project workflow's jobs. Job runs going back at most 90 \
             days are included in the aggregation window. Metrics are refreshed daily, and thus \
             may not include executions from the last 24 hours. Please note that Insights is \
             not a financial reporting tool and should not be used for precise credit \
             reporting.  Credit reporting from Insights does not use the same source of truth \
             as the billing information that is found in the Plan Overview page in the CircleCI \
             UI, nor does the underlying data have the same data accuracy guarantees as the \
             billing information in the CircleCI UI.  This may lead to discrepancies between \
             credits reported from Insights and the billing information in the Plan Overview \
             page of the CircleCI UI.  For precise credit reporting, always use the Plan \
             Overview page in the CircleCI UI."
                .to_string(),
        ),
        operation_id: Some("getProjectWorkflowJobMetrics".to_string()),
        tags: vec!["Insights".to_string()],
        parameters: vec![
            insights_project_slug_param(),
            workflow_name_param(),
            page_token_param(),
            all_branches_param(),
            branch_param(),
            reporting_window_param(),
            query_param(
                "job-name",
                "The name of the jobs you would like to filter from your workflow. If not \
                 specified, all workflow jobs will be returned. The job name can either be the \
                 full job name or just a substring of the job name.",
                string(),
            ),
        ],
        responses: responses(
            200,
            json_response(
                "A paginated list of summary metrics by workflow job.",
                object(
                    vec![
                        ("items", array_of(item).desc("Job summary metrics.")),
                        ("next_page_token", next_page_token()),
                    ],
                    &["items", "next_page_token"],
                ),
            ),
        ),
        ..Operation::default()
    }
}

fn get_workflow_summary() -> Operation {
    let metrics = object(
        vec![
            (
                "completed_runs",
                int64().desc(
                    "The number of runs that ran to completion within the aggregation window",
                ),
            ),
            (
                "duration_metrics",
                full_duration_metrics("Metrics relating to the duration of runs for a workflow."),
            ),
            ("failed_runs", int64().desc("The number of failed runs.")),
            (
                "mttr",
                int64().desc(
                    "The mean time to recovery (mean time between failures and their next \
                     success) in seconds.",
                ),
            ),
            ("success_rate", success_rate()),
            (
                "successful_runs",
                int64().desc("The number of successful runs."),
            ),
            (
                "throughput",
                float().desc("The average number of runs per day."),
            ),
            (
                "total_credits_used",
                int64().desc(
                    "The total credits consumed by the workflow in the aggregation window. Note \
                     that Insights is not a real time financial reporting tool and should not \
                     be used for credit reporting.",
                ),
            ),
            (
                "total_runs",
                int64().desc(
                    "The total number of runs, including runs that are still on-hold or running.",
                ),
            ),
            (
                "window_end",
                date_time().desc(
                    "The timestamp of the last build within the requested reporting window.",
                ),
            ),
            (
                "window_start",
                date_time().desc(
                    "The timestamp of the first build within the requested reporting window.",
                ),
            ),
        ],
        &[
            "completed_runs",
            "duration_metrics",
            "failed_runs",
            "mttr",
            "success_rate",
            "successful_runs",
            "throughput",
            "total_credits_used",
            "total_runs",
            "window_end",
            "window_start",
        ],
    )
    .desc("Metrics aggregated across a workflow for a given time window.");
    let trends = object(
        vec![
            (
                "failed_runs",
                float().desc("The trend value for number of failed runs."),
            ),
            (
                "median_duration_secs",
                float().desc(
                    "Trend value for the 50th percentile duration for a workflow for a given \
                     time window.",
                ),
            ),
            (
                "mttr",
                float().desc(
                    "trend for mean time to recovery (mean time between failures and their \
                     next success).",
                ),
            ),
            (
                "p95_duration_secs",
                float().desc(
                    "Trend value for the 95th percentile duration for a workflow for a given \
                     time window.",
                ),
            ),
            (
                "success_rate",
                float().desc("The trend value for the success rate."),
            ),
            (
                "throughput",
                float().desc("Trend value for the average number of runs per day."),
            ),
            (
                "total_credits_used",
                float().desc("The trend value for total credits consumed."),
            ),
            (
                "total_runs",
                float().desc("The trend value for total number of runs."),
            ),
        ],
        &[
            "failed_runs",
            "median_duration_secs",
            "mttr",
            "p95_duration_secs",
            "success_rate",
            "throughput",
            "total_credits_used",
            "total_runs",
        ],
    )
    .desc("Trends for aggregated metrics across a workflow for a given time window.");
    Operation {
        summary: Some("Get metrics and trends for workflows".to_string()),
        description: Some(
            "Get the metrics and trends for a particular workflow on a single branch or all \
             branches"
                .to_string(),
        ),
        operation_id: Some("getWorkflowSummary".to_string()),
        tags: vec!["Insights".to_string()],
        parameters: vec![
            insights_project_slug_param(),
            workflow_name_param(),
            all_branches_param(),
            branch_param(),
        ],
        responses: responses(
            200,
            json_response(
                "Metrics and trends for a workflow",
                object(
                    vec![
                        ("metrics", metrics),
                        ("trends", trends),
                        (
                            "workflow_names",
                            array_of(string())
                                .desc("A list of all the workflow names for a given project."),
                        ),
                    ],
                    &["metrics", "trends", "workflow_names"],
                ),
            ),
        ),
        ..Operation::default()
    }
}

fn get_project_workflow_test_metrics() -> Operation {
    let test_metric = object(
        vec![
            (
                "classname",
                string().desc("The class the test belongs to."),
            ),
            (
                "failed_runs",
                int64().desc("The number of times the test failed"),
            ),
            ("file", string().desc("The file the test belongs to.")),
            ("flaky", boolean().desc("Whether the test is flaky.")),
            ("job_name", string().desc("The name of the job.")),
            (
                "p95_duration",
                float().desc(
                    "The 95th percentile duration, in seconds, among a group of test runs.",
                ),
            ),
            ("source", string().desc("The source of the test.")),
            ("test_name", string().desc("The name of the test.")),
            (
                "total_runs",
                int64().desc("The total number of times the test was run."),
            ),
        ],
        &[
            "classname",
            "failed_runs",
            "file",
            "flaky",
            "job_name",
            "p95_duration",
            "source",
            "test_name",
            "total_runs",
        ],
    );
    let test_run = object(
        vec![
            (
                "pipeline_number",
                int64().desc("The number of the pipeline associated with the provided test counts"),
            ),
            (
                "success_rate",
                float().desc("The success rate calculated from test counts"),
            ),
            (
                "test_counts",
                object(
                    vec![
                        (
                            "error",
                            int64().desc("The number of tests with the error status"),
                        ),
                        (
                            "failure",
                            int64().desc("The number of tests with the failure status"),
                        ),
                        (
                            "skipped",
                            int64().desc("The number of tests with the skipped status"),
                        ),
                        (
                            "success",
                            int64().desc("The number of tests with the success status"),
                        ),
                        ("total", int64().desc("The total number of tests")),
                    ],
                    &["error", "failure", "skipped", "success", "total"],
                )
                .desc("Test counts for a given pipeline number"),
            ),
            (
                "workflow_id",
                any_schema()
                    .desc("The ID of the workflow associated with the provided test counts"),
            ),
        ],
        &["pipeline_number", "success_rate", "test_counts", "workflow_id"],
    );
    Operation {
        summary: Some("Get test metrics for a project's workflows".to_string()),
        description: Some(
            "Get test metrics for a project's workflows. Currently tests metrics are \
             calculated based on 10 most recent workflow runs."
                .to_string(),
        ),
        operation_id: Some("getProjectWorkflowTestMetrics".to_string()),
        tags: vec!["Insights".to_string()],
        parameters: vec![
            insights_project_slug_param(),
            workflow_name_param(),
            branch_param(),
            all_branches_param(),
        ],
        responses: responses(
            200,
            json_response(
                "A list of test metrics by workflow",
                object(
                    vec![
                        (
                            "average_test_count",
                            int64().desc("The average number of tests executed per run"),
                        ),
                        (
                            "most_failed_tests",
                            array_of(test_metric.clone())
                                .desc("Metrics for the most frequently failing tests"),
                        ),
                        (
                            "most_failed_tests_extra",
                            int64().desc(
                                "The number of tests with the same success rate being omitted \
                                 from most_failed_tests",
                            ),
                        ),
                        (
                            "slowest_tests",
                            array_of(test_metric).desc("Metrics for the slowest running tests"),
                        ),
                        (
                            "slowest_tests_extra",
                            int64().desc(
                                "The number of tests with the same duration rate being omitted \
                                 from slowest_tests",
                            ),
                        ),
                        (
                            "test_runs",
                            array_of(test_run)
                                .desc("Test counts grouped by pipeline number and workflow id"),
                        ),
                        (
                            "total_test_runs",
                            int64().desc("The total number of test runs"),
                        ),
                    ],
                    &[
                        "average_test_count",
                        "most_failed_tests",
                        "most_failed_tests_extra",
                        "slowest_tests",
                        "slowest_tests_extra",
                        "test_runs",
                        "total_test_runs",
                    ],
                ),
            ),
        ),
        ..Operation::default()
    }
}

pub(crate) fn paths() -> Vec<(&'static str, PathItem)> {
    vec![
        (
            "/insights/pages/{project-slug}/summary",
            PathItem {
                get: Some(get_project_workflows_page_data()),
                ..PathItem::default()
            },
        ),
        (
            "/insights/time-series/{project-slug}/workflows/{workflow-name}/jobs",
            PathItem {
                get: Some(get_job_timeseries()),
                ..PathItem::default()
            },
        ),
        (
            "/insights/{org-slug}/summary",
            PathItem {
                get: Some(get_org_summary_data()),
                ..PathItem::default()
            },
        ),
        (
            "/insights/{project-slug}/branches",
            PathItem {
                get: Some(get_all_insights_branches()),
                ..PathItem::default()
            },
        ),
        (
            "/insights/{project-slug}/flaky-tests",
            PathItem {
                get: Some(get_flaky_tests()),
                ..PathItem::default()
            },
        ),
        (
            "/insights/{project-slug}/workflows",
            PathItem {
                get: Some(get_project_workflow_metrics()),
                ..PathItem::default()
            },
        ),
        (
            "/insights/{project-slug}/workflows/{workflow-name}",
            PathItem {
                get: Some(get_project_workflow_runs()),
                ..PathItem::default()
            },
        ),
        (
            "/insights/{project-slug}/workflows/{workflow-name}/jobs",
            PathItem {
                get: Some(get_project_workflow_job_metrics()),
                ..PathItem::default()
            },
        ),
        (
            "/insights/{project-slug}/workflows/{workflow-name}/summary",
            PathItem {
                get: Some(get_workflow_summary()),
                ..PathItem::default()
            },
        ),
        (
            "/insights/{project-slug}/workflows/{workflow-name}/test-metrics",
            PathItem {
                get: Some(get_project_workflow_test_metrics()),
                ..PathItem::default()
            },
        ),
    ]
}
