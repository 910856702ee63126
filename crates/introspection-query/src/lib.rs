#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, future_incompatible, unreachable_pub, rust_2018_idioms)]

//! The standard GraphQL introspection query and the types its response
//! deserializes into.
//!
//! The query matches the one every GraphQL server understands: descriptions
//! are requested, deprecated fields and enum values are included, and type
//! references are unwrapped eight levels deep.

mod types;

pub use types::*;

/// Operation name of [`INTROSPECTION_QUERY`].
pub const OPERATION_NAME: &str = "IntrospectionQuery";

/// The fixed introspection query sent to servers and answered by local schemas.
pub const INTROSPECTION_QUERY: &str = r#"query IntrospectionQuery {
  __schema {
    queryType {
      name
    }
    mutationType {
      name
    }
    subscriptionType {
      name
    }
    types {
      ...FullType
    }
    directives {
      name
      description
      locations
      args {
        ...InputValue
      }
    }
  }
}

fragment FullType on __Type {
  kind
  name
  description
  fields(includeDeprecated: true) {
    name
    description
    args {
      ...InputValue
    }
    type {
      ...TypeRef
    }
    isDeprecated
    deprecationReason
  }
  inputFields {
    ...InputValue
  }
  interfaces {
    ...TypeRef
  }
  enumValues(includeDeprecated: true) {
    name
    description
    isDeprecated
    deprecationReason
  }
  possibleTypes {
    ...TypeRef
  }
}

fragment InputValue on __InputValue {
  name
  description
  type {
    ...TypeRef
  }
  defaultValue
}

fragment TypeRef on __Type {
  kind
  name
  ofType {
    kind
    name
    ofType {
      kind
      name
      ofType {
        kind
        name
        ofType {
          kind
          name
          ofType {
            kind
            name
            ofType {
              kind
              name
              ofType {
                kind
                name
              }
            }
          }
        }
      }
    }
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_names_its_operation() {
        assert!(INTROSPECTION_QUERY.starts_with(&format!("query {OPERATION_NAME} {{")));
    }

    #[test]
    fn query_defines_every_fragment_it_spreads() {
        for fragment in ["FullType", "InputValue", "TypeRef"] {
            assert!(INTROSPECTION_QUERY.contains(&format!("...{fragment}")));
            assert!(INTROSPECTION_QUERY.contains(&format!("fragment {fragment} on")));
        }
    }
}
