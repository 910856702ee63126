use std::fmt;

use serde::{Deserialize, Serialize};

/// The full response to [`INTROSPECTION_QUERY`](crate::INTROSPECTION_QUERY).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntrospectionResponse {
    /// `None` when the server answered with errors only.
    #[serde(default)]
    pub data: Option<IntrospectionData>,
    /// Errors reported alongside (or instead of) the data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ResponseError>>,
}

impl IntrospectionResponse {
    /// Wraps a schema description in a successful response.
    pub fn new(schema: IntrospectionSchema) -> Self {
        Self {
            data: Some(IntrospectionData {
                schema: Some(schema),
            }),
            errors: None,
        }
    }

    /// Deserializes a response from an already parsed JSON document.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Serializes the response into a JSON document, `"data"` first.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Joins the messages of every reported error.
    pub fn error_messages(&self) -> Option<String> {
        self.errors.as_ref().map(|errors| {
            errors
                .iter()
                .map(|err| err.message.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        })
    }
}

/// A GraphQL error as found in a response's `errors` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseError {
    /// Human readable message.
    pub message: String,
}

/// The `data` member of an introspection response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntrospectionData {
    /// The `__schema` root field.
    #[serde(rename = "__schema", default)]
    pub schema: Option<IntrospectionSchema>,
}

/// `__Schema` as selected by the introspection query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionSchema {
    /// Root query type. Required by GraphQL, optional here so a missing root
    /// can be reported with a useful message.
    #[serde(default)]
    pub query_type: Option<RootTypeRef>,
    /// Root mutation type.
    #[serde(default)]
    pub mutation_type: Option<RootTypeRef>,
    /// Root subscription type.
    #[serde(default)]
    pub subscription_type: Option<RootTypeRef>,
    /// Every named type, built-in ones included.
    pub types: Vec<FullType>,
    /// Every directive definition, built-in ones included.
    #[serde(default)]
    pub directives: Vec<IntrospectionDirective>,
}

/// `{ name }` selection of a root operation type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootTypeRef {
    /// Name of the root type.
    pub name: String,
}

/// The `FullType` fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullType {
    /// What kind of type this is.
    pub kind: TypeKind,
    /// Type name.
    pub name: String,
    /// Type description.
    #[serde(default)]
    pub description: Option<String>,
    /// Fields of objects and interfaces, `null` otherwise.
    #[serde(default)]
    pub fields: Option<Vec<IntrospectionField>>,
    /// Fields of input objects, `null` otherwise.
    #[serde(default)]
    pub input_fields: Option<Vec<IntrospectionInputValue>>,
    /// Interfaces implemented by objects and interfaces, `null` otherwise.
    #[serde(default)]
    pub interfaces: Option<Vec<IntrospectionTypeRef>>,
    /// Values of enums, `null` otherwise.
    #[serde(default)]
    pub enum_values: Option<Vec<IntrospectionEnumValue>>,
    /// Implementations of interfaces and members of unions, `null` otherwise.
    #[serde(default)]
    pub possible_types: Option<Vec<IntrospectionTypeRef>>,
}

/// `__Field` selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionField {
    /// Field name.
    pub name: String,
    /// Field description.
    #[serde(default)]
    pub description: Option<String>,
    /// Field arguments.
    #[serde(default)]
    pub args: Vec<IntrospectionInputValue>,
    /// Output type.
    #[serde(rename = "type")]
    pub type_: IntrospectionTypeRef,
    /// Whether the field is deprecated.
    #[serde(default)]
    pub is_deprecated: bool,
    /// Why the field is deprecated.
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

/// The `InputValue` fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionInputValue {
    /// Argument or input field name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Input type.
    #[serde(rename = "type")]
    pub type_: IntrospectionTypeRef,
    /// Default value, printed as a GraphQL literal.
    #[serde(default)]
    pub default_value: Option<String>,
}

/// `__EnumValue` selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionEnumValue {
    /// Value name.
    pub name: String,
    /// Value description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the value is deprecated.
    #[serde(default)]
    pub is_deprecated: bool,
    /// Why the value is deprecated.
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

/// The `TypeRef` fragment.
///
/// Wrapping types (`LIST`, `NON_NULL`) carry no name and point at the wrapped
/// type through `ofType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionTypeRef {
    /// Kind of the referenced type.
    pub kind: TypeKind,
    /// Name of named types.
    #[serde(default)]
    pub name: Option<String>,
    /// Wrapped type of `LIST` and `NON_NULL`.
    #[serde(default)]
    pub of_type: Option<Box<IntrospectionTypeRef>>,
}

impl IntrospectionTypeRef {
    /// A reference to a named type.
    pub fn named(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
            of_type: None,
        }
    }

    /// A `LIST` or `NON_NULL` reference wrapping `inner`.
    pub fn wrapping(kind: TypeKind, inner: IntrospectionTypeRef) -> Self {
        Self {
            kind,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }
}

/// `__Directive` selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionDirective {
    /// Directive name, without `@`.
    pub name: String,
    /// Directive description.
    #[serde(default)]
    pub description: Option<String>,
    /// Locations such as `FIELD_DEFINITION`.
    #[serde(default)]
    pub locations: Vec<String>,
    /// Directive arguments.
    #[serde(default)]
    pub args: Vec<IntrospectionInputValue>,
    /// Only sent by servers asked for it; never requested by our query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_repeatable: Option<bool>,
}

/// `__TypeKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    /// Leaf value.
    Scalar,
    /// Output object.
    Object,
    /// Abstract type with fields.
    Interface,
    /// Abstract type listing members.
    Union,
    /// Enumeration.
    Enum,
    /// Input object.
    InputObject,
    /// List wrapper.
    List,
    /// Non-null wrapper.
    NonNull,
}

impl TypeKind {
    /// The kind as spelled in GraphQL.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Scalar => "SCALAR",
            TypeKind::Object => "OBJECT",
            TypeKind::Interface => "INTERFACE",
            TypeKind::Union => "UNION",
            TypeKind::Enum => "ENUM",
            TypeKind::InputObject => "INPUT_OBJECT",
            TypeKind::List => "LIST",
            TypeKind::NonNull => "NON_NULL",
        }
    }

    /// `true` for `LIST` and `NON_NULL`.
    pub const fn is_wrapping(&self) -> bool {
        matches!(self, TypeKind::List | TypeKind::NonNull)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
