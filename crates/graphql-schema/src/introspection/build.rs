use introspection_query::{
    FullType, IntrospectionDirective, IntrospectionEnumValue, IntrospectionField,
    IntrospectionInputValue, IntrospectionResponse, IntrospectionSchema, IntrospectionTypeRef,
    TypeKind,
};

use crate::{
    builtins::{is_built_in_directive, is_built_in_type},
    Deprecation, DirectiveDefinition, EnumType, EnumValueDefinition, FieldDefinition,
    InputObjectType, InputValueDefinition, InterfaceType, ObjectType, ScalarType, Schema,
    SchemaError, TypeDefinition, TypeRef, UnionType,
};

impl TryFrom<IntrospectionResponse> for Schema {
    type Error = SchemaError;

    fn try_from(response: IntrospectionResponse) -> Result<Self, Self::Error> {
        let errors = response.error_messages();
        match response.data.and_then(|data| data.schema) {
            Some(schema) => Schema::try_from(schema),
            None => Err(SchemaError::Build(errors.unwrap_or_else(|| {
                "schema not found in introspection result".to_string()
            }))),
        }
    }
}

impl TryFrom<IntrospectionSchema> for Schema {
    type Error = SchemaError;

    fn try_from(introspection: IntrospectionSchema) -> Result<Self, Self::Error> {
        let query_type = introspection
            .query_type
            .map(|root| root.name)
            .ok_or_else(|| build_error("introspection result has no query type"))?;

        let mut schema = Schema::new(query_type);
        schema.set_mutation_type(introspection.mutation_type.map(|root| root.name));
        schema.set_subscription_type(introspection.subscription_type.map(|root| root.name));

        for full_type in introspection.types {
            if !is_built_in_type(&full_type.name) {
                schema.add_type(type_definition(full_type)?);
            }
        }
        for directive in introspection.directives {
            if !is_built_in_directive(&directive.name) {
                schema.add_directive(directive_definition(directive)?);
            }
        }

        let roots = [
            Some(schema.query_type()),
            schema.mutation_type(),
            schema.subscription_type(),
        ];
        for root in roots.into_iter().flatten() {
            if !matches!(schema.get_type(root), Some(TypeDefinition::Object(_))) {
                return Err(build_error(format!(
                    "root type {root} is not an object type in the introspection result"
                )));
            }
        }

        tracing::debug!(
            types = schema.types().len(),
            directives = schema.directives().len(),
            "built schema from introspection"
        );
        Ok(schema)
    }
}

fn build_error(message: impl Into<String>) -> SchemaError {
    SchemaError::Build(message.into())
}

fn missing(member: &str, ty: &FullType) -> SchemaError {
    build_error(format!(
        "introspection result is missing {member} for {} {}",
        ty.kind, ty.name
    ))
}

fn type_definition(ty: FullType) -> Result<TypeDefinition, SchemaError> {
    let definition = match ty.kind {
        TypeKind::Scalar => TypeDefinition::Scalar(ScalarType {
            name: ty.name,
            description: ty.description,
            specified_by_url: None,
        }),
        TypeKind::Object => {
            let fields = ty.fields.as_ref().ok_or_else(|| missing("fields", &ty))?;
            TypeDefinition::Object(ObjectType {
                fields: fields.iter().map(field).collect::<Result<_, _>>()?,
                implements_interfaces: names(ty.interfaces.as_deref())?,
                name: ty.name,
                description: ty.description,
            })
        }
        TypeKind::Interface => {
            let fields = ty.fields.as_ref().ok_or_else(|| missing("fields", &ty))?;
            TypeDefinition::Interface(InterfaceType {
                fields: fields.iter().map(field).collect::<Result<_, _>>()?,
                implements_interfaces: names(ty.interfaces.as_deref())?,
                name: ty.name,
                description: ty.description,
            })
        }
        TypeKind::Union => {
            let members = ty
                .possible_types
                .as_deref()
                .ok_or_else(|| missing("possibleTypes", &ty))?;
            TypeDefinition::Union(UnionType {
                members: names(Some(members))?,
                name: ty.name,
                description: ty.description,
            })
        }
        TypeKind::Enum => {
            let values = ty
                .enum_values
                .as_deref()
                .ok_or_else(|| missing("enumValues", &ty))?;
            TypeDefinition::Enum(EnumType {
                values: values.iter().map(enum_value).collect(),
                name: ty.name,
                description: ty.description,
            })
        }
        TypeKind::InputObject => {
            let fields = ty
                .input_fields
                .as_deref()
                .ok_or_else(|| missing("inputFields", &ty))?;
            TypeDefinition::InputObject(InputObjectType {
                fields: fields.iter().map(input_value).collect::<Result<_, _>>()?,
                name: ty.name,
                description: ty.description,
            })
        }
        TypeKind::List | TypeKind::NonNull => {
            return Err(build_error(format!(
                "{} cannot be the kind of named type {}",
                ty.kind, ty.name
            )));
        }
    };
    Ok(definition)
}

fn names(refs: Option<&[IntrospectionTypeRef]>) -> Result<Vec<String>, SchemaError> {
    refs.unwrap_or_default()
        .iter()
        .map(|type_ref| {
            type_ref
                .name
                .clone()
                .ok_or_else(|| build_error(format!("{} type reference has no name", type_ref.kind)))
        })
        .collect()
}

fn field(field: &IntrospectionField) -> Result<FieldDefinition, SchemaError> {
    Ok(FieldDefinition {
        name: field.name.clone(),
        description: field.description.clone(),
        arguments: field.args.iter().map(input_value).collect::<Result<_, _>>()?,
        ty: type_ref(&field.type_)?,
        deprecation: deprecation(field.is_deprecated, field.deprecation_reason.as_ref()),
    })
}

fn input_value(value: &IntrospectionInputValue) -> Result<InputValueDefinition, SchemaError> {
    Ok(InputValueDefinition {
        name: value.name.clone(),
        description: value.description.clone(),
        ty: type_ref(&value.type_)?,
        default_value: value.default_value.clone(),
        deprecation: None,
    })
}

fn enum_value(value: &IntrospectionEnumValue) -> EnumValueDefinition {
    EnumValueDefinition {
        name: value.name.clone(),
        description: value.description.clone(),
        deprecation: deprecation(value.is_deprecated, value.deprecation_reason.as_ref()),
    }
}

fn deprecation(is_deprecated: bool, reason: Option<&String>) -> Option<Deprecation> {
    is_deprecated.then(|| Deprecation {
        reason: reason.cloned(),
    })
}

fn directive_definition(
    directive: IntrospectionDirective,
) -> Result<DirectiveDefinition, SchemaError> {
    Ok(DirectiveDefinition {
        arguments: directive
            .args
            .iter()
            .map(input_value)
            .collect::<Result<_, _>>()?,
        name: directive.name,
        description: directive.description,
        repeatable: directive.is_repeatable.unwrap_or_default(),
        locations: directive.locations,
    })
}

fn type_ref(type_ref: &IntrospectionTypeRef) -> Result<TypeRef, SchemaError> {
    match (type_ref.kind, &type_ref.name, &type_ref.of_type) {
        (TypeKind::List, _, Some(inner)) => Ok(TypeRef::list(self::type_ref(inner)?)),
        (TypeKind::NonNull, _, Some(inner)) => Ok(TypeRef::non_null(self::type_ref(inner)?)),
        (kind, _, None) if kind.is_wrapping() => Err(build_error(format!(
            "{kind} type reference is missing ofType"
        ))),
        (_, Some(name), _) => Ok(TypeRef::named(name.as_str())),
        (kind, None, _) => Err(build_error(format!("{kind} type reference has no name"))),
    }
}
