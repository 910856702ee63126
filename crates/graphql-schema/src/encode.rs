//! Schema Definition Language printer.
//!
//! Output follows the canonical GraphQL printer: a `schema` block only when
//! root types are not named `Query`/`Mutation`/`Subscription`, then directive
//! definitions, then types, each separated by a blank line. Types, fields and
//! values are printed in declaration order.

use std::fmt::{self, Display};

use crate::{
    definition::DEFAULT_DEPRECATION_REASON, Deprecation, DirectiveDefinition, EnumType,
    FieldDefinition, InputObjectType, InputValueDefinition, InterfaceType, ObjectType, ScalarType,
    Schema, TypeDefinition, UnionType,
};

impl Schema {
    /// Prints the schema as SDL, without a trailing newline.
    pub fn to_sdl(&self) -> String {
        self.to_string()
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut definitions = Vec::new();

        if !self.has_conventional_roots() {
            definitions.push(SchemaDefinition(self).to_string());
        }
        definitions.extend(self.directives().iter().map(ToString::to_string));
        definitions.extend(self.types().iter().map(ToString::to_string));

        write!(f, "{}", definitions.join("\n\n"))
    }
}

struct SchemaDefinition<'a>(&'a Schema);

impl Display for SchemaDefinition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schema = self.0;
        write!(f, "{}", Description::top_level(schema.description()))?;
        write!(f, "schema {{\n  query: {}", schema.query_type())?;
        if let Some(mutation) = schema.mutation_type() {
            write!(f, "\n  mutation: {mutation}")?;
        }
        if let Some(subscription) = schema.subscription_type() {
            write!(f, "\n  subscription: {subscription}")?;
        }
        write!(f, "\n}}")
    }
}

impl Display for TypeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDefinition::Scalar(ty) => ty.fmt(f),
            TypeDefinition::Object(ty) => ty.fmt(f),
            TypeDefinition::Interface(ty) => ty.fmt(f),
            TypeDefinition::Union(ty) => ty.fmt(f),
            TypeDefinition::Enum(ty) => ty.fmt(f),
            TypeDefinition::InputObject(ty) => ty.fmt(f),
        }
    }
}

impl Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Description::top_level(self.description.as_deref()))?;
        write!(f, "scalar {}", self.name)?;
        if let Some(url) = &self.specified_by_url {
            write!(f, " @specifiedBy(url: {})", StringValue(url))?;
        }
        Ok(())
    }
}

impl Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Description::top_level(self.description.as_deref()))?;
        write!(f, "type {}", self.name)?;
        write!(f, "{}", Implements(&self.implements_interfaces))?;
        write!(f, "{}", Fields(&self.fields))
    }
}

impl Display for InterfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Description::top_level(self.description.as_deref()))?;
        write!(f, "interface {}", self.name)?;
        write!(f, "{}", Implements(&self.implements_interfaces))?;
        write!(f, "{}", Fields(&self.fields))
    }
}

impl Display for UnionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Description::top_level(self.description.as_deref()))?;
        write!(f, "union {}", self.name)?;
        if !self.members.is_empty() {
            write!(f, " = {}", self.members.join(" | "))?;
        }
        Ok(())
    }
}

impl Display for EnumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Description::top_level(self.description.as_deref()))?;
        write!(f, "enum {}", self.name)?;
        let lines = self
            .values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                format!(
                    "{}  {}{}",
                    Description::in_block(value.description.as_deref(), "  ", i == 0),
                    value.name,
                    Deprecated(value.deprecation.as_ref()),
                )
            })
            .collect::<Vec<_>>();
        write!(f, "{}", Block(&lines))
    }
}

impl Display for InputObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Description::top_level(self.description.as_deref()))?;
        write!(f, "input {}", self.name)?;
        let lines = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                format!(
                    "{}  {}",
                    Description::in_block(field.description.as_deref(), "  ", i == 0),
                    field
                )
            })
            .collect::<Vec<_>>();
        write!(f, "{}", Block(&lines))
    }
}

impl Display for DirectiveDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Description::top_level(self.description.as_deref()))?;
        write!(f, "directive @{}", self.name)?;
        write!(f, "{}", Arguments::new(&self.arguments, ""))?;
        if self.repeatable {
            write!(f, " repeatable")?;
        }
        write!(f, " on {}", self.locations.join(" | "))
    }
}

impl Display for FieldDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}: {}{}",
            self.name,
            Arguments::new(&self.arguments, "  "),
            self.ty,
            Deprecated(self.deprecation.as_ref())
        )
    }
}

/// Prints `name: Type = default`, without any description.
impl Display for InputValueDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)?;
        if let Some(default_value) = &self.default_value {
            write!(f, " = {default_value}")?;
        }
        write!(f, "{}", Deprecated(self.deprecation.as_ref()))
    }
}

struct Implements<'a>(&'a [String]);

impl Display for Implements<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            Ok(())
        } else {
            write!(f, " implements {}", self.0.join(" & "))
        }
    }
}

struct Fields<'a>(&'a [FieldDefinition]);

impl Display for Fields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .0
            .iter()
            .enumerate()
            .map(|(i, field)| {
                format!(
                    "{}  {}",
                    Description::in_block(field.description.as_deref(), "  ", i == 0),
                    field
                )
            })
            .collect::<Vec<_>>();
        write!(f, "{}", Block(&lines))
    }
}

/// ` {\n<lines>\n}`, or nothing for an empty body.
struct Block<'a>(&'a [String]);

impl Display for Block<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            Ok(())
        } else {
            write!(f, " {{\n{}\n}}", self.0.join("\n"))
        }
    }
}

struct Arguments<'a> {
    arguments: &'a [InputValueDefinition],
    indentation: &'a str,
}

impl<'a> Arguments<'a> {
    const fn new(arguments: &'a [InputValueDefinition], indentation: &'a str) -> Self {
        Self {
            arguments,
            indentation,
        }
    }
}

impl Display for Arguments<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.arguments.is_empty() {
            return Ok(());
        }

        // Arguments stay on one line unless one of them has a description.
        if self.arguments.iter().all(|arg| arg.description.is_none()) {
            let arguments = self
                .arguments
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>();
            return write!(f, "({})", arguments.join(", "));
        }

        let inner = format!("  {}", self.indentation);
        writeln!(f, "(")?;
        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{}{inner}{arg}",
                Description::in_block(arg.description.as_deref(), &inner, i == 0)
            )?;
        }
        write!(f, "\n{})", self.indentation)
    }
}

struct Deprecated<'a>(Option<&'a Deprecation>);

impl Display for Deprecated<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => Ok(()),
            Some(deprecation) if deprecation.reason() == DEFAULT_DEPRECATION_REASON => {
                write!(f, " @deprecated")
            }
            Some(deprecation) => {
                write!(f, " @deprecated(reason: {})", StringValue(deprecation.reason()))
            }
        }
    }
}

/// A description printed as a block string, followed by a newline.
struct Description<'a> {
    text: Option<&'a str>,
    indentation: &'a str,
    first_in_block: bool,
}

impl<'a> Description<'a> {
    const fn top_level(text: Option<&'a str>) -> Self {
        Self {
            text,
            indentation: "",
            first_in_block: true,
        }
    }

    const fn in_block(text: Option<&'a str>, indentation: &'a str, first_in_block: bool) -> Self {
        Self {
            text,
            indentation,
            first_in_block,
        }
    }
}

impl Display for Description<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(text) = self.text else {
            return Ok(());
        };

        // Described members after the first get a blank line above them.
        if !self.indentation.is_empty() && !self.first_in_block {
            writeln!(f)?;
        }

        let escaped = text.replace("\"\"\"", "\\\"\"\"");
        let single_line = !escaped.contains('\n')
            && !escaped.ends_with('"')
            && !escaped.ends_with('\\');

        if single_line {
            return writeln!(f, "{}\"\"\"{escaped}\"\"\"", self.indentation);
        }

        writeln!(f, "{}\"\"\"", self.indentation)?;
        for line in escaped.lines() {
            if line.is_empty() {
                writeln!(f)?;
            } else {
                writeln!(f, "{}{line}", self.indentation)?;
            }
        }
        writeln!(f, "{}\"\"\"", self.indentation)
    }
}

/// A GraphQL string literal.
pub(crate) struct StringValue<'a>(pub(crate) &'a str);

impl Display for StringValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"")?;
        for c in self.0.chars() {
            match c {
                '"' => write!(f, "\\\"")?,
                '\\' => write!(f, "\\\\")?,
                '\n' => write!(f, "\\n")?,
                '\r' => write!(f, "\\r")?,
                '\t' => write!(f, "\\t")?,
                '\u{8}' => write!(f, "\\b")?,
                '\u{c}' => write!(f, "\\f")?,
                c if c.is_control() => write!(f, "\\u{:04X}", c as u32)?,
                c => write!(f, "{c}")?,
            }
        }
        write!(f, "\"")
    }
}
