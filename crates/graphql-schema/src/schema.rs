use crate::{DirectiveDefinition, TypeDefinition};

/// Root type names GraphQL assumes when a schema has no `schema { ... }` block.
pub(crate) const DEFAULT_QUERY_TYPE: &str = "Query";
pub(crate) const DEFAULT_MUTATION_TYPE: &str = "Mutation";
pub(crate) const DEFAULT_SUBSCRIPTION_TYPE: &str = "Subscription";

/// A GraphQL type system: root operation types, named types and directives.
///
/// Types and directives keep the order in which they were declared, which is
/// also the order they are printed and introspected in. Built-in scalars,
/// introspection types and built-in directives are never stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    description: Option<String>,
    query_type: String,
    mutation_type: Option<String>,
    subscription_type: Option<String>,
    types: Vec<TypeDefinition>,
    directives: Vec<DirectiveDefinition>,
}

impl Schema {
    /// Creates an empty schema whose query root is `query_type`.
    pub fn new(query_type: impl Into<String>) -> Self {
        Self {
            description: None,
            query_type: query_type.into(),
            mutation_type: None,
            subscription_type: None,
            types: Vec::new(),
            directives: Vec::new(),
        }
    }

    /// Name of the query root type.
    pub fn query_type(&self) -> &str {
        &self.query_type
    }

    /// Name of the mutation root type, if any.
    pub fn mutation_type(&self) -> Option<&str> {
        self.mutation_type.as_deref()
    }

    /// Name of the subscription root type, if any.
    pub fn subscription_type(&self) -> Option<&str> {
        self.subscription_type.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Named types in declaration order.
    pub fn types(&self) -> &[TypeDefinition] {
        &self.types
    }

    /// Custom directive definitions in declaration order.
    pub fn directives(&self) -> &[DirectiveDefinition] {
        &self.directives
    }

    /// Looks a type up by name.
    pub fn get_type(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.iter().find(|ty| ty.name() == name)
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn set_mutation_type(&mut self, name: Option<String>) {
        self.mutation_type = name;
    }

    pub fn set_subscription_type(&mut self, name: Option<String>) {
        self.subscription_type = name;
    }

    /// Adds a named type after the ones already declared.
    pub fn add_type(&mut self, ty: TypeDefinition) {
        self.types.push(ty);
    }

    /// Adds a directive definition after the ones already declared.
    pub fn add_directive(&mut self, directive: DirectiveDefinition) {
        self.directives.push(directive);
    }

    /// Whether SDL without a schema definition would describe the same roots.
    ///
    /// That holds when every root is named by convention and no unused
    /// `Mutation` or `Subscription` type would be picked up as a root when
    /// the SDL is read back.
    pub fn has_conventional_roots(&self) -> bool {
        let conventional = |root: Option<&str>, name: &str| match root {
            Some(root) => root == name,
            None => self.get_type(name).is_none(),
        };

        self.description.is_none()
            && self.query_type == DEFAULT_QUERY_TYPE
            && conventional(self.mutation_type(), DEFAULT_MUTATION_TYPE)
            && conventional(self.subscription_type(), DEFAULT_SUBSCRIPTION_TYPE)
    }

    /// Names of the types implementing `interface`, in declaration order.
    pub fn implementers_of<'a>(&'a self, interface: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.types
            .iter()
            .filter(move |ty| {
                matches!(ty, TypeDefinition::Object(_))
                    && ty.implements_interfaces().iter().any(|name| name == interface)
            })
            .map(TypeDefinition::name)
    }
}

#[cfg(test)]
mod tests {
    use speculoos::prelude::*;

    use super::*;
    use crate::{FieldDefinition, InterfaceType, ObjectType, TypeRef};

    fn schema() -> Schema {
        let mut schema = Schema::new("Query");
        schema.add_type(TypeDefinition::Interface(
            InterfaceType::new("Node").field(FieldDefinition::new("id", TypeRef::named("ID"))),
        ));
        schema.add_type(TypeDefinition::Object(
            ObjectType::new("User")
                .implements("Node")
                .field(FieldDefinition::new("id", TypeRef::named("ID"))),
        ));
        schema.add_type(TypeDefinition::Object(
            ObjectType::new("Query").field(FieldDefinition::new("me", TypeRef::named("User"))),
        ));
        schema
    }

    #[test]
    fn it_finds_types_by_name() {
        let schema = schema();
        assert_that!(schema.get_type("User").map(TypeDefinition::name)).is_equal_to(Some("User"));
        assert_that!(schema.get_type("Missing")).is_none();
    }

    #[test]
    fn it_lists_implementers() {
        let schema = schema();
        let implementers: Vec<_> = schema.implementers_of("Node").collect();
        assert_that!(implementers).is_equal_to(vec!["User"]);
    }

    #[test]
    fn it_detects_unconventional_roots() {
        let mut schema = schema();
        assert_that!(schema.has_conventional_roots()).is_true();

        schema.set_mutation_type(Some("Writes".to_string()));
        assert_that!(schema.has_conventional_roots()).is_false();

        assert_that!(Schema::new("AwesomeQuery").has_conventional_roots()).is_false();
    }

    #[test]
    fn it_keeps_the_schema_definition_when_a_mutation_type_is_not_a_root() {
        let mut schema = schema();
        schema.add_type(TypeDefinition::Object(
            ObjectType::new("Mutation").field(FieldDefinition::new("bump", TypeRef::named("Int"))),
        ));
        assert_that!(schema.has_conventional_roots()).is_false();

        schema.set_mutation_type(Some("Mutation".to_string()));
        assert_that!(schema.has_conventional_roots()).is_true();
    }
}
