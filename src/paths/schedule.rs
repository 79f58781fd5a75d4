//! Schedule operations: recurring pipeline triggers.

use openapiv3::{Operation, PathItem, ReferenceOr, Schema};

use crate::nodes::*;

const DAYS_OF_WEEK: &[&str] = &["TUE", "SAT", "SUN", "MON", "THU", "WED", "FRI"];
const MONTHS: &[&str] = &[
    "MAR", "NOV", "DEC", "JUN", "MAY", "OCT", "FEB", "APR", "SEP", "AUG", "JAN", "JUL",
];

fn days_of_month() -> Schema {
    array_of(integer()).desc(
        "Days in a month in which the schedule triggers. This is mutually exclusive with days \
         in a week.",
    )
}

fn days_of_week() -> Schema {
    array_of(str_enum(DAYS_OF_WEEK)).desc("Days in a week in which the schedule triggers.")
}

fn hours_of_day() -> Schema {
    array_of(integer()).desc("Hours in a day in which the schedule triggers.")
}

fn months() -> Schema {
    array_of(str_enum(MONTHS)).desc("Months in which the schedule triggers.")
}

fn per_hour() -> Schema {
    integer().desc("Number of times a schedule triggers per hour, value must be between 1 and 60")
}

/// Weekly or monthly variant; exactly one of the day fields is required.
fn timetable() -> Schema {
    one_of(vec![
        object(
            vec![
                ("days-of-month", days_of_month()),
                ("days-of-week", days_of_week()),
                ("hours-of-day", hours_of_day()),
                ("months", months()),
                ("per-hour", per_hour()),
            ],
            &["days-of-week", "hours-of-day", "per-hour"],
        ),
        object(
            vec![
                ("days-of-month", days_of_month()),
                ("days-of-week", days_of_week()),
                ("hours-of-day", hours_of_day()),
                ("months", months()),
                ("per-hour", per_hour()),
            ],
            &["days-of-month", "hours-of-day", "per-hour"],
        ),
    ])
    .desc("Timetable that specifies when a schedule triggers.")
}

fn schedule_parameters() -> Schema {
    map_of(any_of(vec![integer(), string(), boolean()]))
        .desc("Pipeline parameters represented as key-value pairs. Must contain branch or tag.")
}

fn schedule() -> Schema {
    object(
        vec![
            (
                "actor",
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
                .desc("The attribution actor who will run the scheduled pipeline."),
            ),
            (
                "created-at",
                date_time().desc("The date and time the pipeline was created."),
            ),
            ("description", string().desc("Description of the schedule.")),
            ("id", uuid().desc("The unique ID of the schedule.")),
            ("name", string().desc("Name of the schedule.")),
            ("parameters", schedule_parameters()),
            (
                "project-slug",
                string().desc("The project-slug for the schedule"),
            ),
            ("timetable", timetable()),
            (
                "updated-at",
                date_time().desc("The date and time the pipeline was last updated."),
            ),
        ],
        &[
            "actor",
            "created-at",
            "description",
            "id",
            "name",
            "parameters",
            "project-slug",
            "timetable",
            "updated-at",
        ],
    )
}

fn schedule_project_slug_param() -> ReferenceOr<openapiv3::Parameter> {
    path_param_ex(
        "project-slug",
        "Project slug in the form `vcs-slug/org-name/repo-name`. The `/` characters may be \
         URL-escaped. For projects that use GitLab or GitHub App, use `circleci` as the \
         `vcs-slug`, replace `org-name` with the organization ID (found in Organization \
         Settings), and replace `repo-name` with the project ID (found in Project Settings).",
        string(),
        serde_json::Value::String("gh/CircleCI-Public/api-preview-docs".to_string()),
    )
}

fn schedule_id_param() -> ReferenceOr<openapiv3::Parameter> {
    path_param("schedule-id", "The unique ID of the schedule.", uuid())
}

fn list_schedules_for_project() -> Operation {
    Operation {
        summary: Some("Get all schedules".to_string()),
        description: Some("Returns all schedules for this project.".to_string()),
        operation_id: Some("listSchedulesForProject".to_string()),
        tags: vec!["Schedule".to_string()],
        parameters: vec![schedule_project_slug_param(), page_token_param()],
        responses: responses(
            200,
            json_response("A sequence of schedules.", paginated(schedule())),
        ),
        ..Operation::default()
    }
}

fn create_schedule() -> Operation {
    Operation {
        summary: Some("Create a schedule".to_string()),
        description: Some(
            "Not yet available to projects that use GitLab or GitHub App. Creates a schedule \
             and returns the created schedule."
                .to_string(),
        ),
        operation_id: Some("createSchedule".to_string()),
        tags: vec!["Schedule".to_string()],
        parameters: vec![schedule_project_slug_param()],
        request_body: Some(json_request(
            false,
            object(
                vec![
                    (
                        "attribution-actor",
                        str_enum(&["current", "system"])
                            .desc("The attribution-actor of the scheduled pipeline."),
                    ),
                    ("description", string().desc("Description of the schedule.")),
                    ("name", string().desc("Name of the schedule.")),
                    ("parameters", schedule_parameters()),
                    ("timetable", timetable()),
                ],
                &["attribution-actor", "name", "parameters", "timetable"],
            ),
        )),
        responses: responses(
            201,
            json_response("Error response.", object(vec![("message", string())], &[])),
        ),
        ..Operation::default()
    }
}

fn delete_schedule_by_id() -> Operation {
    Operation {
        summary: Some("Delete a schedule".to_string()),
        description: Some(
            "Not yet available to projects that use GitLab or GitHub App. Deletes the schedule \
             by id."
                .to_string(),
        ),
        operation_id: Some("deleteScheduleById".to_string()),
        tags: vec!["Schedule".to_string()],
        parameters: vec![schedule_id_param()],
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

fn get_schedule_by_id() -> Operation {
    Operation {
        summary: Some("Get a schedule".to_string()),
        description: Some("Get a schedule by id.".to_string()),
        operation_id: Some("getScheduleById".to_string()),
        tags: vec!["Schedule".to_string()],
        parameters: vec![schedule_id_param()],
        responses: responses(200, json_response("A schedule object.", schedule())),
        ..Operation::default()
    }
}

fn update_schedule() -> Operation {
    Operation {
        summary: Some("Update a schedule".to_string()),
        description: Some(
            "Not yet available to projects that use GitLab or GitHub App. Updates a schedule \
             and returns the updated schedule."
                .to_string(),
        ),
        operation_id: Some("updateSchedule".to_string()),
        tags: vec!["Schedule".to_string()],
        parameters: vec![schedule_id_param()],
        request_body: Some(json_request(
            false,
            object(
                vec![
                    (
                        "attribution-actor",
                        str_enum(&["current", "system"])
                            .desc("The attribution-actor of the scheduled pipeline."),
                    ),
                    ("description", string().desc("Description of the schedule.")),
                    ("name", string().desc("Name of the schedule.")),
                    ("parameters", schedule_parameters()),
                    (
                        "timetable",
                        object(
                            vec![
                                ("days-of-month", days_of_month()),
                                ("days-of-week", days_of_week()),
                                ("hours-of-day", hours_of_day()),
                                ("months", months()),
                                ("per-hour", per_hour()),
                            ],
                            &[],
                        )
                        .desc("Timetable that specifies when a schedule triggers."),
                    ),
                ],
                &[],
            ),
        )),
        responses: responses(200, json_response("A schedule object.", schedule())),
        ..Operation::default()
    }
}

pub(crate) fn paths() -> Vec<(&'static str, PathItem)> {
    vec![
        (
            "/project/{project-slug}/schedule",
            PathItem {
                get: Some(list_schedules_for_project()),
                post: Some(create_schedule()),
                ..PathItem::default()
            },
        ),
        (
            "/schedule/{schedule-id}",
            PathItem {
                delete: Some(delete_schedule_by_id()),
                get: Some(get_schedule_by_id()),
                patch: Some(update_schedule()),
                ..PathItem::default()
            },
        ),
    ]
}
