use pretty_assertions::assert_eq;
use serde_json::Value;

fn document() -> Value {
    serde_json::to_value(circleci_openapi::document()).expect("document serializes")
}

fn json_schema<'a>(response: &'a Value) -> &'a Value {
    &response["content"]["application/json"]["schema"]
}

fn sorted_strings(value: &Value) -> Vec<&str> {
    let mut strings: Vec<&str> = value
        .as_array()
        .expect("expected an array")
        .iter()
        .map(|v| v.as_str().expect("expected a string"))
        .collect();
    strings.sort_unstable();
    strings
}

#[test]
fn pipeline_state_enumeration() {
    let doc = document();
    let response = &doc["paths"]["/pipeline"]["get"]["responses"]["200"];
    let state = &json_schema(response)["properties"]["items"]["items"]["properties"]["state"];
    assert_eq!(
        state["enum"],
        serde_json::json!(["created", "errored", "setup-pending", "setup", "pending"])
    );
    assert_eq!(state["type"], "string");
}

#[test]
fn pipeline_object_required_fields() {
    let doc = document();
    let response = &doc["paths"]["/pipeline/{pipeline-id}"]["get"]["responses"]["200"];
    let pipeline = json_schema(response);
    assert_eq!(
        sorted_strings(&pipeline["required"]),
        vec!["created_at", "errors", "id", "number", "project_slug", "state", "trigger"]
    );
    let error_type =
        &pipeline["properties"]["errors"]["items"]["properties"]["type"]["enum"];
    assert_eq!(
        sorted_strings(error_type),
        vec!["config", "config-fetch", "other", "permission", "plan", "timeout"]
    );
}

#[test]
fn trigger_pipeline_request_body() {
    let doc = document();
    let body = &doc["paths"]["/project/{project-slug}/pipeline"]["post"]["requestBody"];
    let schema = json_schema(body);

    // Neither branch nor tag may be demanded; they are mutually exclusive.
    assert!(schema.get("required").is_none());
    assert!(schema["properties"]["branch"].is_object());
    assert!(schema["properties"]["tag"].is_object());

    let parameters = &schema["properties"]["parameters"];
    assert_eq!(parameters["type"], "object");
    let mut value_types: Vec<&str> = parameters["additionalProperties"]["anyOf"]
        .as_array()
        .expect("parameter values are a union")
        .iter()
        .map(|variant| variant["type"].as_str().expect("variant has a type"))
        .collect();
    value_types.sort_unstable();
    assert_eq!(value_types, vec!["boolean", "integer", "string"]);
}

#[test]
fn workflow_job_required_fields() {
    let doc = document();
    let response = &doc["paths"]["/workflow/{id}/job"]["get"]["responses"]["200"];
    let job = &json_schema(response)["properties"]["items"]["items"];
    assert_eq!(
        sorted_strings(&job["required"]),
        vec![
            "dependencies",
            "id",
            "name",
            "project_slug",
            "started_at",
            "status",
            "type"
        ]
    );
}

#[test]
fn pipeline_config_required_fields() {
    let doc = document();
    let response = &doc["paths"]["/pipeline/{pipeline-id}/config"]["get"]["responses"]["200"];
    assert_eq!(
        sorted_strings(&json_schema(response)["required"]),
        vec!["compiled", "source"]
    );
}

#[test]
fn schedule_parameter_values_are_a_union() {
    let doc = document();
    let body = &doc["paths"]["/project/{project-slug}/schedule"]["post"]["requestBody"];
    let parameters = &json_schema(body)["properties"]["parameters"];
    let mut value_types: Vec<&str> = parameters["additionalProperties"]["anyOf"]
        .as_array()
        .expect("parameter values are a union")
        .iter()
        .map(|variant| variant["type"].as_str().expect("variant has a type"))
        .collect();
    value_types.sort_unstable();
    assert_eq!(value_types, vec!["boolean", "integer", "string"]);
}

#[test]
fn policy_operations_reference_named_schemas() {
    let doc = document();
    let logs = &doc["paths"]["/owner/{ownerID}/context/{context}/decision"]["get"]["responses"]
        ["200"];
    assert_eq!(
        json_schema(logs)["items"]["$ref"],
        "#/components/schemas/DecisionLog"
    );
    let bundle = &doc["paths"]["/owner/{ownerID}/context/{context}/policy-bundle"]["get"]
        ["responses"]["200"];
    assert_eq!(
        json_schema(bundle)["$ref"],
        "#/components/schemas/PolicyBundle"
    );
    // Every $ref in the document must resolve to a declared schema.
    let schemas = doc["components"]["schemas"]
        .as_object()
        .expect("schemas object");
    let rendered = serde_json::to_string(&doc).expect("document renders");
    for target in rendered
        .split("#/components/schemas/")
        .skip(1)
        .map(|rest| rest.split('"').next().expect("terminated reference"))
    {
        assert!(schemas.contains_key(target), "dangling reference: {target}");
    }
}

#[test]
fn json_round_trip() {
    let rendered = circleci_openapi::to_json_string().expect("renders as JSON");
    let reparsed: openapiv3::OpenAPI =
        serde_json::from_str(&rendered).expect("parses back as OpenAPI");
    assert_eq!(
        serde_json::to_value(&reparsed).expect("reserializes"),
        document()
    );
}

#[test]
fn yaml_file_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("openapi.yml");
    std::fs::write(
        &path,
        circleci_openapi::to_yaml_string().expect("renders as YAML"),
    )
    .expect("writes the document");

    let raw = std::fs::read_to_string(&path).expect("reads the document");
    let reparsed: openapiv3::OpenAPI = serde_yaml::from_str(&raw).expect("parses back as OpenAPI");
    assert_eq!(
        serde_json::to_value(&reparsed).expect("reserializes"),
        document()
    );
}
