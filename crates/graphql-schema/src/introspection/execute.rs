use std::collections::HashSet;

use introspection_query::{
    FullType, IntrospectionDirective, IntrospectionEnumValue, IntrospectionField,
    IntrospectionInputValue, IntrospectionResponse, IntrospectionSchema, IntrospectionTypeRef,
    RootTypeRef, TypeKind,
};

use crate::{
    builtins::{self, BUILT_IN_SCALARS},
    Deprecation, DirectiveDefinition, FieldDefinition, InputValueDefinition, Schema,
    TypeDefinition, TypeRef,
};

/// Scalars the introspection types themselves refer to.
const ALWAYS_PRESENT_SCALARS: [&str; 2] = ["String", "Boolean"];

impl Schema {
    /// Answers the standard introspection query against this schema.
    ///
    /// Types are listed in declaration order, followed by the built-in
    /// scalars the schema uses and the introspection types. Custom directives
    /// come before the built-in ones.
    pub fn introspect(&self) -> IntrospectionResponse {
        let mut listed: Vec<&TypeDefinition> = self.types().iter().collect();
        // Pushed one at a time so the `'static` items shorten to `&self`'s lifetime.
        for ty in self.used_built_in_scalars() {
            listed.push(ty);
        }
        for ty in builtins::introspection_types() {
            listed.push(ty);
        }
        let types = listed.into_iter().map(|ty| self.full_type(ty)).collect();

        let mut declared: Vec<&DirectiveDefinition> = self.directives().iter().collect();
        for directive in builtins::built_in_directives() {
            declared.push(directive);
        }
        let directives = declared
            .into_iter()
            .map(|directive| self.directive(directive))
            .collect();

        IntrospectionResponse::new(IntrospectionSchema {
            query_type: Some(RootTypeRef {
                name: self.query_type().to_string(),
            }),
            mutation_type: self.mutation_type().map(|name| RootTypeRef {
                name: name.to_string(),
            }),
            subscription_type: self.subscription_type().map(|name| RootTypeRef {
                name: name.to_string(),
            }),
            types,
            directives,
        })
    }

    fn used_built_in_scalars(&self) -> Vec<&'static TypeDefinition> {
        let mut used: HashSet<&str> = ALWAYS_PRESENT_SCALARS.into_iter().collect();
        for ty in self.types() {
            match ty {
                TypeDefinition::Object(_) | TypeDefinition::Interface(_) => {
                    for field in ty.fields().unwrap_or_default() {
                        used.insert(field.ty.inner_name());
                        used.extend(field.arguments.iter().map(|arg| arg.ty.inner_name()));
                    }
                }
                TypeDefinition::InputObject(input) => {
                    used.extend(input.fields.iter().map(|field| field.ty.inner_name()));
                }
                _ => {}
            }
        }
        for directive in self.directives() {
            used.extend(directive.arguments.iter().map(|arg| arg.ty.inner_name()));
        }

        BUILT_IN_SCALARS
            .into_iter()
            .filter(|name| used.contains(name))
            .filter_map(builtins::built_in_type)
            .collect()
    }

    fn kind_of(&self, name: &str) -> TypeKind {
        match self
            .get_type(name)
            .or_else(|| builtins::built_in_type(name))
        {
            Some(ty) => kind(ty),
            None => {
                tracing::warn!("type {name} is referenced but never defined, reporting it as a scalar");
                TypeKind::Scalar
            }
        }
    }

    fn type_ref(&self, ty: &TypeRef) -> IntrospectionTypeRef {
        match ty {
            TypeRef::Named(name) => IntrospectionTypeRef::named(self.kind_of(name), name.as_str()),
            TypeRef::List(inner) => IntrospectionTypeRef::wrapping(TypeKind::List, self.type_ref(inner)),
            TypeRef::NonNull(inner) => {
                IntrospectionTypeRef::wrapping(TypeKind::NonNull, self.type_ref(inner))
            }
        }
    }

    fn named_refs<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Vec<IntrospectionTypeRef> {
        names
            .into_iter()
            .map(|name| IntrospectionTypeRef::named(self.kind_of(name), name))
            .collect()
    }

    fn full_type(&self, ty: &TypeDefinition) -> FullType {
        let mut full_type = FullType {
            kind: kind(ty),
            name: ty.name().to_string(),
            description: ty.description().map(str::to_string),
            fields: None,
            input_fields: None,
            interfaces: None,
            enum_values: None,
            possible_types: None,
        };

        match ty {
            TypeDefinition::Scalar(_) => {}
            TypeDefinition::Object(object) => {
                full_type.fields = Some(self.fields(&object.fields));
                full_type.interfaces = Some(
                    self.named_refs(object.implements_interfaces.iter().map(String::as_str)),
                );
            }
            TypeDefinition::Interface(interface) => {
                full_type.fields = Some(self.fields(&interface.fields));
                full_type.interfaces = Some(
                    self.named_refs(interface.implements_interfaces.iter().map(String::as_str)),
                );
                full_type.possible_types =
                    Some(self.named_refs(self.implementers_of(&interface.name)));
            }
            TypeDefinition::Union(union_) => {
                full_type.possible_types =
                    Some(self.named_refs(union_.members.iter().map(String::as_str)));
            }
            TypeDefinition::Enum(enum_) => {
                full_type.enum_values = Some(
                    enum_
                        .values
                        .iter()
                        .map(|value| IntrospectionEnumValue {
                            name: value.name.clone(),
                            description: value.description.clone(),
                            is_deprecated: value.deprecation.is_some(),
                            deprecation_reason: reason(value.deprecation.as_ref()),
                        })
                        .collect(),
                );
            }
            TypeDefinition::InputObject(input) => {
                full_type.input_fields = Some(self.input_values(&input.fields));
            }
        }

        full_type
    }

    fn fields(&self, fields: &[FieldDefinition]) -> Vec<IntrospectionField> {
        fields
            .iter()
            .map(|field| IntrospectionField {
                name: field.name.clone(),
                description: field.description.clone(),
                args: self.input_values(&field.arguments),
                type_: self.type_ref(&field.ty),
                is_deprecated: field.deprecation.is_some(),
                deprecation_reason: reason(field.deprecation.as_ref()),
            })
            .collect()
    }

    fn input_values(&self, values: &[InputValueDefinition]) -> Vec<IntrospectionInputValue> {
        values
            .iter()
            .map(|value| IntrospectionInputValue {
                name: value.name.clone(),
                description: value.description.clone(),
                type_: self.type_ref(&value.ty),
                default_value: value.default_value.clone(),
            })
            .collect()
    }

    fn directive(&self, directive: &DirectiveDefinition) -> IntrospectionDirective {
        IntrospectionDirective {
            name: directive.name.clone(),
            description: directive.description.clone(),
            locations: directive.locations.clone(),
            args: self.input_values(&directive.arguments),
            is_repeatable: None,
        }
    }
}

const fn kind(ty: &TypeDefinition) -> TypeKind {
    match ty {
        TypeDefinition::Scalar(_) => TypeKind::Scalar,
        TypeDefinition::Object(_) => TypeKind::Object,
        TypeDefinition::Interface(_) => TypeKind::Interface,
        TypeDefinition::Union(_) => TypeKind::Union,
        TypeDefinition::Enum(_) => TypeKind::Enum,
        TypeDefinition::InputObject(_) => TypeKind::InputObject,
    }
}

fn reason(deprecation: Option<&Deprecation>) -> Option<String> {
    deprecation.map(|deprecation| deprecation.reason().to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use speculoos::prelude::*;

    use crate::{EnumType, EnumValueDefinition, InterfaceType, ObjectType, UnionType};

    use super::*;

    fn awesome_schema() -> Schema {
        let mut schema = Schema::new("AwesomeQuery");
        schema.add_type(TypeDefinition::Object(ObjectType::new("AwesomeQuery").field(
            FieldDefinition::new("version", TypeRef::non_null(TypeRef::named("Int"))),
        )));
        schema
    }

    #[test]
    fn it_reports_the_query_root() {
        let response = awesome_schema().introspect();
        let value = response.to_value().unwrap();

        assert_eq!(value["data"]["__schema"]["queryType"], json!({ "name": "AwesomeQuery" }));
        assert_eq!(value["data"]["__schema"]["mutationType"], json!(null));
    }

    #[test]
    fn it_lists_user_types_then_used_scalars_then_introspection_types() {
        let response = awesome_schema().introspect();
        let schema = response.data.unwrap().schema.unwrap();
        let names: Vec<_> = schema.types.iter().map(|ty| ty.name.as_str()).collect();

        assert_eq!(&names[..4], &["AwesomeQuery", "Int", "String", "Boolean"]);
        assert_that!(names).contains("__Schema");
        assert_that!(names).does_not_contain("Float");
    }

    #[test]
    fn it_describes_wrapped_field_types() {
        let response = awesome_schema().introspect();
        let value = response.to_value().unwrap();

        assert_eq!(
            value["data"]["__schema"]["types"][0]["fields"][0]["type"],
            json!({
                "kind": "NON_NULL",
                "name": null,
                "ofType": { "kind": "SCALAR", "name": "Int", "ofType": null }
            })
        );
    }

    #[test]
    fn it_resolves_possible_types_and_deprecations() {
        let mut schema = Schema::new("Query");
        schema.add_type(TypeDefinition::Interface(
            InterfaceType::new("Pet").field(FieldDefinition::new("name", TypeRef::named("String"))),
        ));
        schema.add_type(TypeDefinition::Object(
            ObjectType::new("Cat")
                .implements("Pet")
                .field(FieldDefinition::new("name", TypeRef::named("String")).deprecated(None)),
        ));
        let mut any_pet = UnionType::new("AnyPet");
        any_pet.members.push("Cat".to_string());
        schema.add_type(TypeDefinition::Union(any_pet));
        let mut mood = EnumType::new("Mood");
        mood.values.push(EnumValueDefinition::new("SLEEPY"));
        schema.add_type(TypeDefinition::Enum(mood));
        schema.add_type(TypeDefinition::Object(
            ObjectType::new("Query").field(FieldDefinition::new("pet", TypeRef::named("Pet"))),
        ));

        let introspected = schema.introspect().data.unwrap().schema.unwrap();
        let pet = &introspected.types[0];
        let cat = &introspected.types[1];
        let any_pet = &introspected.types[2];

        assert_eq!(
            pet.possible_types,
            Some(vec![IntrospectionTypeRef::named(TypeKind::Object, "Cat")])
        );
        assert_eq!(
            cat.interfaces,
            Some(vec![IntrospectionTypeRef::named(TypeKind::Interface, "Pet")])
        );
        let name = &cat.fields.as_ref().unwrap()[0];
        assert_that!(name.is_deprecated).is_true();
        assert_eq!(name.deprecation_reason.as_deref(), Some("No longer supported"));
        assert_eq!(any_pet.possible_types.as_ref().map(Vec::len), Some(1));
        assert_eq!(introspected.types[3].enum_values.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn it_appends_built_in_directives() {
        let introspected = awesome_schema().introspect().data.unwrap().schema.unwrap();
        let names: Vec<_> = introspected
            .directives
            .iter()
            .map(|directive| directive.name.as_str())
            .collect();

        assert_that!(names).contains("include");
        assert_that!(names).contains("skip");
        assert_that!(names).contains("deprecated");
    }
}
