use std::fmt::{self, Display};

/// Reason attached to `@deprecated` when none is given.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// A named type declared by a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDefinition {
    /// `scalar Name`
    Scalar(ScalarType),
    /// `type Name { ... }`
    Object(ObjectType),
    /// `interface Name { ... }`
    Interface(InterfaceType),
    /// `union Name = A | B`
    Union(UnionType),
    /// `enum Name { ... }`
    Enum(EnumType),
    /// `input Name { ... }`
    InputObject(InputObjectType),
}

impl TypeDefinition {
    /// The type's name.
    pub fn name(&self) -> &str {
        match self {
            TypeDefinition::Scalar(ty) => &ty.name,
            TypeDefinition::Object(ty) => &ty.name,
            TypeDefinition::Interface(ty) => &ty.name,
            TypeDefinition::Union(ty) => &ty.name,
            TypeDefinition::Enum(ty) => &ty.name,
            TypeDefinition::InputObject(ty) => &ty.name,
        }
    }

    /// The type's description.
    pub fn description(&self) -> Option<&str> {
        match self {
            TypeDefinition::Scalar(ty) => ty.description.as_deref(),
            TypeDefinition::Object(ty) => ty.description.as_deref(),
            TypeDefinition::Interface(ty) => ty.description.as_deref(),
            TypeDefinition::Union(ty) => ty.description.as_deref(),
            TypeDefinition::Enum(ty) => ty.description.as_deref(),
            TypeDefinition::InputObject(ty) => ty.description.as_deref(),
        }
    }

    /// Interfaces implemented by objects and interfaces.
    pub fn implements_interfaces(&self) -> &[String] {
        match self {
            TypeDefinition::Object(ty) => &ty.implements_interfaces,
            TypeDefinition::Interface(ty) => &ty.implements_interfaces,
            _ => &[],
        }
    }

    /// Output fields of objects and interfaces.
    pub fn fields(&self) -> Option<&[FieldDefinition]> {
        match self {
            TypeDefinition::Object(ty) => Some(&ty.fields),
            TypeDefinition::Interface(ty) => Some(&ty.fields),
            _ => None,
        }
    }
}

/// Custom scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarType {
    pub name: String,
    pub description: Option<String>,
    /// URL given to `@specifiedBy`.
    pub specified_by_url: Option<String>,
}

impl ScalarType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            specified_by_url: None,
        }
    }
}

/// Object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectType {
    pub name: String,
    pub description: Option<String>,
    pub implements_interfaces: Vec<String>,
    pub fields: Vec<FieldDefinition>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            implements_interfaces: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Appends a field, keeping declaration order.
    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    /// Declares an implemented interface.
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.implements_interfaces.push(interface.into());
        self
    }
}

/// Interface type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceType {
    pub name: String,
    pub description: Option<String>,
    pub implements_interfaces: Vec<String>,
    pub fields: Vec<FieldDefinition>,
}

impl InterfaceType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            implements_interfaces: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Appends a field, keeping declaration order.
    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }
}

/// Union type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionType {
    pub name: String,
    pub description: Option<String>,
    pub members: Vec<String>,
}

impl UnionType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            members: Vec::new(),
        }
    }
}

/// Enum type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    pub name: String,
    pub description: Option<String>,
    pub values: Vec<EnumValueDefinition>,
}

impl EnumType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            values: Vec::new(),
        }
    }
}

/// Input object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<InputValueDefinition>,
}

impl InputObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
        }
    }
}

/// `@deprecated` as applied to a field, argument or enum value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deprecation {
    pub reason: Option<String>,
}

impl Deprecation {
    /// The reason, falling back to the GraphQL default.
    pub fn reason(&self) -> &str {
        self.reason.as_deref().unwrap_or(DEFAULT_DEPRECATION_REASON)
    }
}

/// Output field of an object or interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: String,
    pub description: Option<String>,
    pub arguments: Vec<InputValueDefinition>,
    pub ty: TypeRef,
    pub deprecation: Option<Deprecation>,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            arguments: Vec::new(),
            ty,
            deprecation: None,
        }
    }

    /// Appends an argument.
    pub fn argument(mut self, argument: InputValueDefinition) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the field deprecated.
    pub fn deprecated(mut self, reason: Option<String>) -> Self {
        self.deprecation = Some(Deprecation { reason });
        self
    }
}

/// Argument or input object field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputValueDefinition {
    pub name: String,
    pub description: Option<String>,
    pub ty: TypeRef,
    /// Default value as GraphQL literal text, e.g. `"cat"` or `[1, 2]`.
    pub default_value: Option<String>,
    pub deprecation: Option<Deprecation>,
}

impl InputValueDefinition {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
            default_value: None,
            deprecation: None,
        }
    }

    /// Sets the default value literal.
    pub fn default_value(mut self, literal: impl Into<String>) -> Self {
        self.default_value = Some(literal.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One value of an enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValueDefinition {
    pub name: String,
    pub description: Option<String>,
    pub deprecation: Option<Deprecation>,
}

impl EnumValueDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            deprecation: None,
        }
    }
}

/// Directive definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveDefinition {
    pub name: String,
    pub description: Option<String>,
    pub arguments: Vec<InputValueDefinition>,
    pub repeatable: bool,
    /// Locations as spelled in GraphQL, e.g. `FIELD_DEFINITION`.
    pub locations: Vec<String>,
}

impl DirectiveDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            arguments: Vec::new(),
            repeatable: false,
            locations: Vec::new(),
        }
    }
}

/// Reference to a type from a field, argument or input field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A named type.
    Named(String),
    /// `[T]`
    List(Box<TypeRef>),
    /// `T!`
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    pub fn list(inner: TypeRef) -> Self {
        TypeRef::List(Box::new(inner))
    }

    pub fn non_null(inner: TypeRef) -> Self {
        TypeRef::NonNull(Box::new(inner))
    }

    /// The named type at the bottom of any list/non-null wrapping.
    pub fn inner_name(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.inner_name(),
        }
    }
}

impl Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => write!(f, "{name}"),
            TypeRef::List(inner) => write!(f, "[{inner}]"),
            TypeRef::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn it_displays_wrapped_types() {
        let ty = TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::named("String"))));
        assert_eq!(ty.to_string(), "[String!]!");
        assert_eq!(ty.inner_name(), "String");
    }

    #[test]
    fn it_defaults_the_deprecation_reason() {
        assert_eq!(Deprecation { reason: None }.reason(), "No longer supported");
        assert_eq!(
            Deprecation {
                reason: Some("use `name`".to_string())
            }
            .reason(),
            "use `name`"
        );
    }
}
