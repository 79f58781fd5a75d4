use indexmap::IndexMap;
use openapiv3::{
    AdditionalProperties, ArrayType, BooleanType, IntegerFormat, IntegerType, MediaType,
    NumberFormat, NumberType, ObjectType, Parameter, ParameterData, ParameterSchemaOrContent,
    ReferenceOr, RequestBody, Response, Responses, Schema, SchemaData, SchemaKind, StatusCode,
    StringFormat, StringType, Type, VariantOrUnknownOrEmpty,
};
use serde_json::Value;

/// Constructors for the schema nodes the document is built from. Every helper
/// returns an owned `openapiv3` value so call sites stay literal: the exact
/// strings (enum members, formats, descriptions) appear where the node does.

fn typed(t: Type) -> Schema {
    Schema {
        schema_data: SchemaData::default(),
        schema_kind: SchemaKind::Type(t),
    }
}

pub(crate) fn string() -> Schema {
    typed(Type::String(StringType::default()))
}

pub(crate) fn str_enum(values: &[&str]) -> Schema {
    typed(Type::String(StringType {
        enumeration: values.iter().map(|v| Some((*v).to_string())).collect(),
        ..StringType::default()
    }))
}

pub(crate) fn date_time() -> Schema {
    typed(Type::String(StringType {
        format: VariantOrUnknownOrEmpty::Item(StringFormat::DateTime),
        ..StringType::default()
    }))
}

/// String with a format outside the registered set (`uuid`, `uri`, ...).
pub(crate) fn str_format(format: &str) -> Schema {
    typed(Type::String(StringType {
        format: VariantOrUnknownOrEmpty::Unknown(format.to_string()),
        ..StringType::default()
    }))
}

pub(crate) fn uuid() -> Schema {
    str_format("uuid")
}

pub(crate) fn integer() -> Schema {
    typed(Type::Integer(IntegerType::default()))
}

pub(crate) fn int64() -> Schema {
    typed(Type::Integer(IntegerType {
        format: VariantOrUnknownOrEmpty::Item(IntegerFormat::Int64),
        ..IntegerType::default()
    }))
}

pub(crate) fn number() -> Schema {
    typed(Type::Number(NumberType::default()))
}

pub(crate) fn float() -> Schema {
    typed(Type::Number(NumberType {
        format: VariantOrUnknownOrEmpty::Item(NumberFormat::Float),
        ..NumberType::default()
    }))
}

pub(crate) fn boolean() -> Schema {
    typed(Type::Boolean(BooleanType::default()))
}

pub(crate) fn object(properties: Vec<(&str, Schema)>, required: &[&str]) -> Schema {
    typed(Type::Object(ObjectType {
        properties: properties
            .into_iter()
            .map(|(name, schema)| (name.to_string(), ReferenceOr::boxed_item(schema)))
            .collect(),
        required: required.iter().map(|r| (*r).to_string()).collect(),
        ..ObjectType::default()
    }))
}

/// Object whose `additionalProperties` is the given value schema.
pub(crate) fn map_of(values: Schema) -> Schema {
    typed(Type::Object(ObjectType {
        additional_properties: Some(AdditionalProperties::Schema(Box::new(ReferenceOr::Item(
            values,
        )))),
        ..ObjectType::default()
    }))
}

pub(crate) fn array_of(items: Schema) -> Schema {
    typed(Type::Array(ArrayType {
        items: Some(ReferenceOr::boxed_item(items)),
        min_items: None,
        max_items: None,
        unique_items: false,
    }))
}

pub(crate) fn one_of(schemas: Vec<Schema>) -> Schema {
    Schema {
        schema_data: SchemaData::default(),
        schema_kind: SchemaKind::OneOf {
            one_of: schemas.into_iter().map(ReferenceOr::Item).collect(),
        },
    }
}

pub(crate) fn any_of(schemas: Vec<Schema>) -> Schema {
    Schema {
        schema_data: SchemaData::default(),
        schema_kind: SchemaKind::AnyOf {
            any_of: schemas.into_iter().map(ReferenceOr::Item).collect(),
        },
    }
}

/// Completely unconstrained schema (`{}` in the source document).
pub(crate) fn any_schema() -> Schema {
    Schema {
        schema_data: SchemaData::default(),
        schema_kind: SchemaKind::Any(openapiv3::AnySchema::default()),
    }
}

/// `#/components/schemas/{name}` reference.
pub(crate) fn schema_ref(name: &str) -> ReferenceOr<Schema> {
    ReferenceOr::ref_(&format!("#/components/schemas/{name}"))
}

/// Array whose items are a `#/components/schemas/{name}` reference.
pub(crate) fn array_of_ref(name: &str) -> Schema {
    typed(Type::Array(ArrayType {
        items: Some(ReferenceOr::Reference {
            reference: format!("#/components/schemas/{name}"),
        }),
        min_items: None,
        max_items: None,
        unique_items: false,
    }))
}

pub(crate) trait SchemaExt: Sized {
    fn desc(self, description: &str) -> Self;
    fn nullable(self) -> Self;
}

impl SchemaExt for Schema {
    fn desc(mut self, description: &str) -> Self {
        self.schema_data.description = Some(description.to_string());
        self
    }

    fn nullable(mut self) -> Self {
        self.schema_data.nullable = true;
        self
    }
}

fn parameter_data(name: &str, description: &str, required: bool, schema: Schema) -> ParameterData {
    ParameterData {
        name: name.to_string(),
        description: Some(description.to_string()),
        required,
        deprecated: None,
        format: ParameterSchemaOrContent::Schema(ReferenceOr::Item(schema)),
        example: None,
        examples: IndexMap::new(),
        explode: None,
        extensions: IndexMap::new(),
    }
}

pub(crate) fn path_param(name: &str, description: &str, schema: Schema) -> ReferenceOr<Parameter> {
    ReferenceOr::Item(Parameter::Path {
        parameter_data: parameter_data(name, description, true, schema),
        style: Default::default(),
    })
}

pub(crate) fn path_param_ex(
    name: &str,
    description: &str,
    schema: Schema,
    example: Value,
) -> ReferenceOr<Parameter> {
    let mut data = parameter_data(name, description, true, schema);
    data.example = Some(example);
    ReferenceOr::Item(Parameter::Path {
        parameter_data: data,
        style: Default::default(),
    })
}

pub(crate) fn query_param(name: &str, description: &str, schema: Schema) -> ReferenceOr<Parameter> {
    ReferenceOr::Item(Parameter::Query {
        parameter_data: parameter_data(name, description, false, schema),
        allow_reserved: false,
        style: Default::default(),
        allow_empty_value: None,
    })
}

pub(crate) fn query_param_ex(
    name: &str,
    description: &str,
    schema: Schema,
    example: Value,
) -> ReferenceOr<Parameter> {
    let mut data = parameter_data(name, description, false, schema);
    data.example = Some(example);
    ReferenceOr::Item(Parameter::Query {
        parameter_data: data,
        allow_reserved: false,
        style: Default::default(),
        allow_empty_value: None,
    })
}

pub(crate) fn required_query_param(
    name: &str,
    description: &str,
    schema: Schema,
) -> ReferenceOr<Parameter> {
    ReferenceOr::Item(Parameter::Query {
        parameter_data: parameter_data(name, description, true, schema),
        allow_reserved: false,
        style: Default::default(),
        allow_empty_value: None,
    })
}

fn json_content(schema: ReferenceOr<Schema>) -> IndexMap<String, MediaType> {
    let mut content = IndexMap::new();
    content.insert(
        "application/json".to_string(),
        MediaType {
            schema: Some(schema),
            ..MediaType::default()
        },
    );
    content
}

pub(crate) fn json_response(description: &str, schema: Schema) -> Response {
    Response {
        description: description.to_string(),
        content: json_content(ReferenceOr::Item(schema)),
        ..Response::default()
    }
}

/// Response whose body is a `#/components/schemas/{name}` reference.
pub(crate) fn json_ref_response(description: &str, name: &str) -> Response {
    Response {
        description: description.to_string(),
        content: json_content(schema_ref(name)),
        ..Response::default()
    }
}

/// The `default` error response every operation carries.
pub(crate) fn error_response() -> ReferenceOr<Response> {
    ReferenceOr::Item(json_response(
        "Error response.",
        object(vec![("message", string())], &[]),
    ))
}

pub(crate) fn responses(status: u16, response: Response) -> Responses {
    let mut map = IndexMap::new();
    map.insert(StatusCode::Code(status), ReferenceOr::Item(response));
    Responses {
        default: Some(error_response()),
        responses: map,
        ..Responses::default()
    }
}

pub(crate) fn json_request(required: bool, schema: Schema) -> ReferenceOr<RequestBody> {
    ReferenceOr::Item(RequestBody {
        content: json_content(ReferenceOr::Item(schema)),
        required,
        ..RequestBody::default()
    })
}

pub(crate) fn json_request_ref(required: bool, name: &str) -> ReferenceOr<RequestBody> {
    ReferenceOr::Item(RequestBody {
        content: json_content(schema_ref(name)),
        required,
        ..RequestBody::default()
    })
}

/// The opaque cursor every list response carries.
pub(crate) fn next_page_token() -> Schema {
    string()
        .desc("A token to pass as a `page-token` query parameter to return the next page of results.")
}

/// `{ items, next_page_token }` wrapper used by the paginated list endpoints.
pub(crate) fn paginated(item: Schema) -> Schema {
    object(
        vec![("items", array_of(item)), ("next_page_token", next_page_token())],
        &["items", "next_page_token"],
    )
}

pub(crate) fn page_token_param() -> ReferenceOr<Parameter> {
    query_param(
        "page-token",
        "A token to retrieve the next page of results.",
        string(),
    )
}

pub(crate) fn project_slug_param() -> ReferenceOr<Parameter> {
    path_param_ex(
        "project-slug",
        "Project slug in the form `vcs-slug/org-name/repo-name`. The `/` characters may be \
         URL-escaped.",
        string(),
        Value::String("gh/CircleCI-Public/api-preview-docs".to_string()),
    )
}

pub(crate) fn job_number_param() -> ReferenceOr<Parameter> {
    path_param_ex(
        "job-number",
        "The number of the job.",
        any_schema(),
        Value::String("123".to_string()),
    )
}
