//! Building a [`Schema`] from Schema Definition Language.
//!
//! Parsing and validation are delegated to `apollo-compiler`; the validated
//! type system is then copied into our own model, leaving out everything
//! GraphQL defines implicitly.

use std::path::Path;

use apollo_compiler::{
    ast::{self, DirectiveList},
    schema::ExtendedType,
    Node,
};

use crate::{
    builtins::{is_built_in_directive, is_built_in_type},
    Deprecation, DirectiveDefinition, EnumType, EnumValueDefinition, FieldDefinition,
    InputObjectType, InputValueDefinition, InterfaceType, ObjectType, ScalarType, Schema,
    SchemaError, TypeDefinition, TypeRef, UnionType,
};

impl Schema {
    /// Parses and validates SDL.
    ///
    /// `path` only names the source in error messages. Syntax errors are
    /// reported as [`SchemaError::Parse`], everything that parses but does not
    /// form a valid schema as [`SchemaError::Build`].
    pub fn parse(sdl: &str, path: impl AsRef<Path>) -> Result<Schema, SchemaError> {
        let path = path.as_ref();
        tracing::debug!("parsing SDL from {}", path.display());

        ast::Document::parse(sdl, path)
            .map_err(|invalid| SchemaError::Parse(invalid.errors.to_string()))?;
        let compiled = apollo_compiler::Schema::parse_and_validate(sdl, path)
            .map_err(|invalid| SchemaError::Build(invalid.errors.to_string()))?;

        Schema::from_compiled(&compiled)
    }

    /// Copies a validated schema into our model.
    ///
    /// Without a `schema` block `apollo-compiler` already fills in the roots
    /// from types named `Query`, `Mutation` and `Subscription`; with one, only
    /// the roots it declares exist.
    fn from_compiled(compiled: &apollo_compiler::Schema) -> Result<Schema, SchemaError> {
        let definition = &compiled.schema_definition;
        let query_type = definition
            .query
            .as_ref()
            .map(|name| name.to_string())
            .ok_or_else(|| SchemaError::Build("schema does not define a query root type".to_string()))?;

        let mut schema = Schema::new(query_type);
        schema.set_description(definition.description.as_ref().map(|d| d.to_string()));
        schema.set_mutation_type(definition.mutation.as_ref().map(|name| name.to_string()));
        schema.set_subscription_type(definition.subscription.as_ref().map(|name| name.to_string()));

        for (name, directive) in &compiled.directive_definitions {
            if !is_built_in_directive(name.as_str()) {
                schema.add_directive(convert_directive(directive));
            }
        }
        for (name, ty) in &compiled.types {
            if !is_built_in_type(name.as_str()) {
                schema.add_type(convert_type_definition(name.as_str(), ty));
            }
        }

        tracing::debug!(
            types = schema.types().len(),
            directives = schema.directives().len(),
            "built schema from SDL"
        );
        Ok(schema)
    }
}

pub(crate) fn convert_type_definition(name: &str, ty: &ExtendedType) -> TypeDefinition {
    match ty {
        ExtendedType::Scalar(scalar) => TypeDefinition::Scalar(ScalarType {
            name: name.to_string(),
            description: scalar.description.as_ref().map(|d| d.to_string()),
            specified_by_url: scalar
                .directives
                .get("specifiedBy")
                .and_then(|d| string_argument(&d.arguments, "url")),
        }),
        ExtendedType::Object(object) => TypeDefinition::Object(ObjectType {
            name: name.to_string(),
            description: object.description.as_ref().map(|d| d.to_string()),
            implements_interfaces: object
                .implements_interfaces
                .iter()
                .map(|i| i.to_string())
                .collect(),
            fields: object
                .fields
                .iter()
                .map(|(name, field)| convert_field(name.as_str(), field))
                .collect(),
        }),
        ExtendedType::Interface(interface) => TypeDefinition::Interface(InterfaceType {
            name: name.to_string(),
            description: interface.description.as_ref().map(|d| d.to_string()),
            implements_interfaces: interface
                .implements_interfaces
                .iter()
                .map(|i| i.to_string())
                .collect(),
            fields: interface
                .fields
                .iter()
                .map(|(name, field)| convert_field(name.as_str(), field))
                .collect(),
        }),
        ExtendedType::Union(union_) => TypeDefinition::Union(UnionType {
            name: name.to_string(),
            description: union_.description.as_ref().map(|d| d.to_string()),
            members: union_.members.iter().map(|m| m.to_string()).collect(),
        }),
        ExtendedType::Enum(enum_) => TypeDefinition::Enum(EnumType {
            name: name.to_string(),
            description: enum_.description.as_ref().map(|d| d.to_string()),
            values: enum_
                .values
                .iter()
                .map(|(name, value)| EnumValueDefinition {
                    name: name.to_string(),
                    description: value.description.as_ref().map(|d| d.to_string()),
                    deprecation: deprecation(&value.directives),
                })
                .collect(),
        }),
        ExtendedType::InputObject(input) => TypeDefinition::InputObject(InputObjectType {
            name: name.to_string(),
            description: input.description.as_ref().map(|d| d.to_string()),
            fields: input
                .fields
                .values()
                .map(|field| convert_input_value(field))
                .collect(),
        }),
    }
}

pub(crate) fn convert_directive(directive: &ast::DirectiveDefinition) -> DirectiveDefinition {
    DirectiveDefinition {
        name: directive.name.to_string(),
        description: directive.description.as_ref().map(|d| d.to_string()),
        arguments: directive
            .arguments
            .iter()
            .map(|arg| convert_input_value(arg))
            .collect(),
        repeatable: directive.repeatable,
        locations: directive
            .locations
            .iter()
            .map(|location| location.name().to_string())
            .collect(),
    }
}

fn convert_field(name: &str, field: &ast::FieldDefinition) -> FieldDefinition {
    FieldDefinition {
        name: name.to_string(),
        description: field.description.as_ref().map(|d| d.to_string()),
        arguments: field
            .arguments
            .iter()
            .map(|arg| convert_input_value(arg))
            .collect(),
        ty: convert_type(&field.ty),
        deprecation: deprecation(&field.directives),
    }
}

fn convert_input_value(value: &ast::InputValueDefinition) -> InputValueDefinition {
    InputValueDefinition {
        name: value.name.to_string(),
        description: value.description.as_ref().map(|d| d.to_string()),
        ty: convert_type(&value.ty),
        default_value: value
            .default_value
            .as_ref()
            .map(|v| v.serialize().no_indent().to_string()),
        deprecation: deprecation(&value.directives),
    }
}

fn convert_type(ty: &ast::Type) -> TypeRef {
    match ty {
        ast::Type::Named(name) => TypeRef::named(name.as_str()),
        ast::Type::NonNullNamed(name) => TypeRef::non_null(TypeRef::named(name.as_str())),
        ast::Type::List(inner) => TypeRef::list(convert_type(inner)),
        ast::Type::NonNullList(inner) => TypeRef::non_null(TypeRef::list(convert_type(inner))),
    }
}

fn deprecation(directives: &DirectiveList) -> Option<Deprecation> {
    directives.get("deprecated").map(|d| Deprecation {
        reason: string_argument(&d.arguments, "reason"),
    })
}

fn string_argument(arguments: &[Node<ast::Argument>], name: &str) -> Option<String> {
    arguments.iter().find(|arg| arg.name.as_str() == name).and_then(|arg| {
        if let ast::Value::String(s) = &*arg.value {
            Some(s.to_string())
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use speculoos::prelude::*;

    use super::*;

    const AWESOME_SDL: &str = indoc! {r#"
        schema {
          query: AwesomeQuery
        }

        type AwesomeQuery {
          version: Int!
        }
    "#};

    #[test]
    fn it_reads_the_declared_query_root() {
        let schema = Schema::parse(AWESOME_SDL, "schema.graphql").unwrap();
        assert_eq!(schema.query_type(), "AwesomeQuery");
        assert_eq!(schema.types().len(), 1);
    }

    #[test]
    fn it_falls_back_to_conventional_root_names() {
        let schema = Schema::parse(
            "type Query { me: String }\ntype Mutation { bump: Int }",
            "schema.graphql",
        )
        .unwrap();

        assert_eq!(schema.query_type(), "Query");
        assert_eq!(schema.mutation_type(), Some("Mutation"));
        assert_eq!(schema.subscription_type(), None);
    }

    #[test]
    fn it_only_uses_the_roots_a_schema_definition_declares() {
        let schema = Schema::parse(
            "schema { query: Query }\ntype Query { a: Int }\ntype Mutation { b: Int }",
            "schema.graphql",
        )
        .unwrap();

        assert_eq!(schema.query_type(), "Query");
        assert_eq!(schema.mutation_type(), None);
        assert_that!(schema.get_type("Mutation")).is_some();
        assert!(schema.to_sdl().starts_with("schema {\n  query: Query\n}"));
    }

    #[test]
    fn it_keeps_list_and_object_defaults_on_one_line() {
        let sdl = indoc! {"
            enum Genre {
              FICTION
              POETRY
            }

            input Filter {
              genres: [Genre!] = [FICTION]
              limit: Int
            }

            type Query {
              books(ids: [Int] = [1, 2], filter: Filter = {genres: [POETRY], limit: 5}): Int
            }"};

        let schema = Schema::parse(sdl, "schema.graphql").unwrap();
        let books = &schema.get_type("Query").unwrap().fields().unwrap()[0];

        assert_eq!(books.arguments[0].default_value.as_deref(), Some("[1, 2]"));
        assert_eq!(
            books.arguments[1].default_value.as_deref(),
            Some("{genres: [POETRY], limit: 5}")
        );
        assert_eq!(schema.to_sdl(), sdl);
    }

    #[test]
    fn it_prints_back_what_it_parsed() {
        let sdl = indoc! {r#"
            directive @cached(ttl: Int = 60) on FIELD_DEFINITION

            """A node in the graph"""
            interface Node {
              id: ID!
            }

            type User implements Node {
              id: ID!
              name: String @deprecated(reason: "use `displayName`")
              displayName: String
              friends(first: Int = 10, after: String): [User!]!
            }

            enum Role {
              ADMIN
              GUEST @deprecated
            }

            union Actor = User

            input UserFilter {
              role: Role = GUEST
              ids: [ID!]
            }

            scalar Url @specifiedBy(url: "https://tools.ietf.org/html/rfc3986")

            type Query {
              user(filter: UserFilter): User
              actors: [Actor]
            }"#};

        let schema = Schema::parse(sdl, "schema.graphql").unwrap();
        assert_eq!(schema.to_sdl(), sdl);
    }

    #[test]
    fn it_keeps_built_ins_out_of_the_schema() {
        let schema = Schema::parse("type Query { ok: Boolean }", "schema.graphql").unwrap();

        assert_that!(schema.get_type("Boolean")).is_none();
        assert_that!(schema.get_type("__Schema")).is_none();
        assert_that!(schema.directives().len()).is_equal_to(0);
    }

    #[test]
    fn it_reports_syntax_errors_as_parse_errors() {
        let result = Schema::parse("type Query {", "broken.graphql");
        assert_that!(result).is_err().matches(|err| matches!(err, SchemaError::Parse(_)));
    }

    #[test]
    fn it_reports_invalid_schemas_as_build_errors() {
        let result = Schema::parse("type Query { user: User }", "invalid.graphql");
        assert_that!(result).is_err().matches(|err| matches!(err, SchemaError::Build(_)));
    }

    #[test]
    fn it_requires_a_query_root() {
        let result = Schema::parse("type Thing { id: ID }", "rootless.graphql");
        assert_that!(result).is_err().matches(|err| matches!(err, SchemaError::Build(_)));
    }
}
