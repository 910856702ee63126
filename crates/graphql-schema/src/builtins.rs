//! Types and directives every GraphQL schema has without declaring them.

use std::sync::LazyLock;

use crate::{
    decode::{convert_directive, convert_type_definition},
    DirectiveDefinition, TypeDefinition,
};

/// Scalars defined by the GraphQL specification.
pub const BUILT_IN_SCALARS: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

/// Directives defined by the GraphQL specification.
pub const BUILT_IN_DIRECTIVES: [&str; 5] =
    ["skip", "include", "deprecated", "specifiedBy", "oneOf"];

/// Built-in scalars and introspection types, as `apollo-compiler` defines them.
static BUILT_IN_TYPES: LazyLock<Vec<TypeDefinition>> = LazyLock::new(|| {
    apollo_compiler::Schema::new()
        .types
        .iter()
        .map(|(name, ty)| convert_type_definition(name.as_str(), ty))
        .collect()
});

static BUILT_IN_DIRECTIVE_DEFINITIONS: LazyLock<Vec<DirectiveDefinition>> = LazyLock::new(|| {
    apollo_compiler::Schema::new()
        .directive_definitions
        .values()
        .map(|directive| convert_directive(directive))
        .collect()
});

/// Whether `name` is a built-in scalar or an introspection type.
pub fn is_built_in_type(name: &str) -> bool {
    name.starts_with("__") || BUILT_IN_SCALARS.contains(&name)
}

pub fn is_built_in_directive(name: &str) -> bool {
    BUILT_IN_DIRECTIVES.contains(&name)
}

/// Looks up a built-in scalar or introspection type.
pub(crate) fn built_in_type(name: &str) -> Option<&'static TypeDefinition> {
    BUILT_IN_TYPES.iter().find(|ty| ty.name() == name)
}

/// Introspection types (`__Schema`, `__Type`, ...) in definition order.
pub(crate) fn introspection_types() -> impl Iterator<Item = &'static TypeDefinition> {
    BUILT_IN_TYPES
        .iter()
        .filter(|ty| ty.name().starts_with("__"))
}

pub(crate) fn built_in_directives() -> &'static [DirectiveDefinition] {
    &BUILT_IN_DIRECTIVE_DEFINITIONS
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use speculoos::prelude::*;

    use super::*;

    #[rstest]
    #[case("Int", true)]
    #[case("ID", true)]
    #[case("__Schema", true)]
    #[case("__TypeKind", true)]
    #[case("Query", false)]
    #[case("Url", false)]
    fn it_recognises_built_in_types(#[case] name: &str, #[case] expected: bool) {
        assert_that!(is_built_in_type(name)).is_equal_to(expected);
    }

    #[test]
    fn it_knows_every_built_in_scalar() {
        for scalar in BUILT_IN_SCALARS {
            assert_that!(built_in_type(scalar)).is_some();
        }
    }

    #[test]
    fn it_includes_the_introspection_types() {
        let names: Vec<_> = introspection_types().map(TypeDefinition::name).collect();
        assert_that!(names).contains("__Schema");
        assert_that!(names).contains("__Type");
        assert_that!(names).contains("__Directive");
        assert_that!(names).contains("__TypeKind");
    }

    #[test]
    fn it_includes_deprecated_among_built_in_directives() {
        let deprecated = built_in_directives()
            .iter()
            .find(|directive| directive.name == "deprecated");
        assert_that!(deprecated).is_some();
        assert_that!(is_built_in_directive("deprecated")).is_true();
        assert_that!(is_built_in_directive("cached")).is_false();
    }
}
