use pretty_assertions::assert_eq;
use serde_json::Value;

fn document() -> Value {
    serde_json::to_value(circleci_openapi::document()).expect("document serializes")
}

const METHODS: &[&str] = &[
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Every operation in the document, keyed by path and method.
const OPERATIONS: &[(&str, &str, &str)] = &[
    ("/context", "post", "createContext"),
    ("/context", "get", "listContexts"),
    ("/context/{context-id}", "get", "getContext"),
    ("/context/{context-id}", "delete", "deleteContext"),
    (
        "/context/{context-id}/environment-variable",
        "get",
        "listEnvironmentVariablesFromContext",
    ),
    (
        "/context/{context-id}/environment-variable/{env-var-name}",
        "delete",
        "deleteEnvironmentVariableFromContext",
    ),
    (
        "/context/{context-id}/environment-variable/{env-var-name}",
        "put",
        "addEnvironmentVariableToContext",
    ),
    (
        "/insights/pages/{project-slug}/summary",
        "get",
        "getProjectWorkflowsPageData",
    ),
    (
        "/insights/time-series/{project-slug}/workflows/{workflow-name}/jobs",
        "get",
        "getJobTimeseries",
    ),
    ("/insights/{org-slug}/summary", "get", "getOrgSummaryData"),
    (
        "/insights/{project-slug}/branches",
        "get",
        "getAllInsightsBranches",
    ),
    ("/insights/{project-slug}/flaky-tests", "get", "getFlakyTests"),
    (
        "/insights/{project-slug}/workflows",
        "get",
        "getProjectWorkflowMetrics",
    ),
    (
        "/insights/{project-slug}/workflows/{workflow-name}",
        "get",
        "getProjectWorkflowRuns",
    ),
    (
        "/insights/{project-slug}/workflows/{workflow-name}/jobs",
        "get",
        "getProjectWorkflowJobMetrics",
    ),
    (
        "/insights/{project-slug}/workflows/{workflow-name}/summary",
        "get",
        "getWorkflowSummary",
    ),
    (
        "/insights/{project-slug}/workflows/{workflow-name}/test-metrics",
        "get",
        "getProjectWorkflowTestMetrics",
    ),
    ("/me", "get", "getCurrentUser"),
    ("/me/collaborations", "get", "getCollaborations"),
    ("/user/{id}", "get", "getUser"),
    ("/org/{orgID}/oidc-custom-claims", "delete", "deleteOrgClaims"),
    ("/org/{orgID}/oidc-custom-claims", "get", "getOrgClaims"),
    ("/org/{orgID}/oidc-custom-claims", "patch", "patchOrgClaims"),
    (
        "/org/{orgID}/project/{projectID}/oidc-custom-claims",
        "delete",
        "deleteProjectClaims",
    ),
    (
        "/org/{orgID}/project/{projectID}/oidc-custom-claims",
        "get",
        "getProjectClaims",
    ),
    (
        "/org/{orgID}/project/{projectID}/oidc-custom-claims",
        "patch",
        "patchProjectClaims",
    ),
    (
        "/organizations/{org_id}/usage_export_job",
        "post",
        "createUsageExport",
    ),
    (
        "/organizations/{org_id}/usage_export_job/{usage_export_job_id}",
        "get",
        "getUsageExport",
    ),
    (
        "/owner/{ownerID}/context/{context}/decision",
        "get",
        "getDecisionLogs",
    ),
    (
        "/owner/{ownerID}/context/{context}/decision",
        "post",
        "makeDecision",
    ),
    (
        "/owner/{ownerID}/context/{context}/decision/settings",
        "get",
        "getDecisionSettings",
    ),
    (
        "/owner/{ownerID}/context/{context}/decision/settings",
        "patch",
        "setDecisionSettings",
    ),
    (
        "/owner/{ownerID}/context/{context}/decision/{decisionID}",
        "get",
        "getDecisionLog",
    ),
    (
        "/owner/{ownerID}/context/{context}/decision/{decisionID}/policy-bundle",
        "get",
        "getDecisionLogPolicyBundle",
    ),
    (
        "/owner/{ownerID}/context/{context}/policy-bundle",
        "get",
        "getPolicyBundle",
    ),
    (
        "/owner/{ownerID}/context/{context}/policy-bundle",
        "post",
        "createPolicyBundle",
    ),
    (
        "/owner/{ownerID}/context/{context}/policy-bundle/{policyName}",
        "get",
        "getPolicyDocument",
    ),
    ("/pipeline", "get", "listPipelines"),
    ("/pipeline/continue", "post", "continuePipeline"),
    ("/pipeline/{pipeline-id}", "get", "getPipelineById"),
    ("/pipeline/{pipeline-id}/config", "get", "getPipelineConfigById"),
    (
        "/pipeline/{pipeline-id}/workflow",
        "get",
        "listWorkflowsByPipelineId",
    ),
    (
        "/project/{project-slug}/pipeline",
        "get",
        "listPipelinesForProject",
    ),
    ("/project/{project-slug}/pipeline", "post", "triggerPipeline"),
    (
        "/project/{project-slug}/pipeline/mine",
        "get",
        "listMyPipelines",
    ),
    (
        "/project/{project-slug}/pipeline/{pipeline-number}",
        "get",
        "getPipelineByNumber",
    ),
    ("/project/{project-slug}", "get", "getProjectBySlug"),
    (
        "/project/{project-slug}/checkout-key",
        "post",
        "createCheckoutKey",
    ),
    ("/project/{project-slug}/checkout-key", "get", "listCheckoutKeys"),
    (
        "/project/{project-slug}/checkout-key/{fingerprint}",
        "delete",
        "deleteCheckoutKey",
    ),
    (
        "/project/{project-slug}/checkout-key/{fingerprint}",
        "get",
        "getCheckoutKey",
    ),
    ("/project/{project-slug}/envvar", "get", "listEnvVars"),
    ("/project/{project-slug}/envvar", "post", "createEnvVar"),
    ("/project/{project-slug}/envvar/{name}", "get", "getEnvVar"),
    ("/project/{project-slug}/envvar/{name}", "delete", "deleteEnvVar"),
    ("/project/{project-slug}/job/{job-number}", "get", "getJobDetails"),
    (
        "/project/{project-slug}/job/{job-number}/cancel",
        "post",
        "cancelJob",
    ),
    (
        "/project/{project-slug}/{job-number}/artifacts",
        "get",
        "getJobArtifacts",
    ),
    ("/project/{project-slug}/{job-number}/tests", "get", "getTests"),
    (
        "/project/{project-slug}/schedule",
        "get",
        "listSchedulesForProject",
    ),
    ("/project/{project-slug}/schedule", "post", "createSchedule"),
    ("/schedule/{schedule-id}", "delete", "deleteScheduleById"),
    ("/schedule/{schedule-id}", "get", "getScheduleById"),
    ("/schedule/{schedule-id}", "patch", "updateSchedule"),
    ("/webhook", "get", "getWebhooks"),
    ("/webhook", "post", "createWebhook"),
    ("/webhook/{webhook-id}", "delete", "deleteWebhook"),
    ("/webhook/{webhook-id}", "get", "getWebhookById"),
    ("/webhook/{webhook-id}", "put", "updateWebhook"),
    ("/workflow/{id}", "get", "getWorkflowById"),
    (
        "/workflow/{id}/approve/{approval_request_id}",
        "post",
        "approvePendingApprovalJobById",
    ),
    ("/workflow/{id}/cancel", "post", "cancelWorkflow"),
    ("/workflow/{id}/job", "get", "listWorkflowJobs"),
    ("/workflow/{id}/rerun", "post", "rerunWorkflow"),
];

#[test]
fn root_metadata() {
    let doc = document();
    assert_eq!(doc["openapi"], "3.0.0");
    assert_eq!(doc["info"]["title"], "CircleCI API");
    assert_eq!(doc["info"]["version"], "v2");
    assert_eq!(doc["info"]["license"]["name"], "MIT");
    assert_eq!(
        doc["servers"],
        serde_json::json!([{ "url": "https://circleci.com/api/v2" }])
    );
}

#[test]
fn security_schemes() {
    let doc = document();
    let schemes = doc["components"]["securitySchemes"]
        .as_object()
        .expect("securitySchemes is an object");
    let mut names: Vec<&str> = schemes.keys().map(String::as_str).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["api_key_header", "api_key_query", "basic_auth"]);

    assert_eq!(schemes["api_key_header"]["type"], "apiKey");
    assert_eq!(schemes["api_key_header"]["in"], "header");
    assert_eq!(schemes["api_key_header"]["name"], "Circle-Token");
    assert_eq!(schemes["api_key_query"]["in"], "query");
    assert_eq!(schemes["api_key_query"]["name"], "circle-token");
    assert_eq!(schemes["basic_auth"]["type"], "http");
    assert_eq!(schemes["basic_auth"]["scheme"], "basic");

    let security = doc["security"].as_array().expect("security is an array");
    assert_eq!(security.len(), 3);
}

#[test]
fn operation_inventory() {
    let doc = document();
    for (path, method, operation_id) in OPERATIONS {
        let operation = &doc["paths"][*path][*method];
        assert!(
            operation.is_object(),
            "missing operation: {} {}",
            method,
            path
        );
        assert_eq!(
            operation["operationId"],
            Value::String((*operation_id).to_string()),
            "wrong operationId for {} {}",
            method,
            path
        );
    }
}

#[test]
fn no_undeclared_operations() {
    let doc = document();
    let mut found = Vec::new();
    for (path, item) in doc["paths"].as_object().expect("paths is an object") {
        for method in METHODS {
            if item[*method].is_object() {
                found.push((path.clone(), *method));
            }
        }
    }
    let mut expected: Vec<(String, &str)> = OPERATIONS
        .iter()
        .map(|(path, method, _)| ((*path).to_string(), *method))
        .collect();
    expected.sort_unstable();
    found.sort_unstable();
    assert_eq!(found, expected);
}

#[test]
fn every_operation_has_a_default_error_response() {
    let doc = document();
    for (path, item) in doc["paths"].as_object().expect("paths is an object") {
        for method in METHODS {
            let operation = &item[*method];
            if !operation.is_object() {
                continue;
            }
            let default = &operation["responses"]["default"];
            assert_eq!(
                default["description"], "Error response.",
                "missing default response for {} {}",
                method, path
            );
            assert!(
                default["content"]["application/json"]["schema"]["properties"]["message"]
                    .is_object(),
                "default response for {} {} has no message property",
                method,
                path
            );
        }
    }
}

#[test]
fn every_operation_is_tagged() {
    let doc = document();
    let declared: Vec<&str> = doc["tags"]
        .as_array()
        .expect("tags is an array")
        .iter()
        .map(|tag| tag["name"].as_str().expect("tag name"))
        .collect();
    for (path, item) in doc["paths"].as_object().expect("paths is an object") {
        for method in METHODS {
            let operation = &item[*method];
            if !operation.is_object() {
                continue;
            }
            let tags = operation["tags"].as_array().expect("operation tags");
            assert_eq!(tags.len(), 1, "{} {} should carry one tag", method, path);
            let tag = tags[0].as_str().expect("tag is a string");
            assert!(
                declared.contains(&tag),
                "{} {} uses undeclared tag {}",
                method,
                path,
                tag
            );
        }
    }
}
