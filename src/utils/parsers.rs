use anyhow::{anyhow, Result};
use camino::Utf8PathBuf;

/// Where the CLI reads a local schema from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaLocation {
    Stdin,
    File(Utf8PathBuf),
}

pub fn parse_schema_location(loc: &str) -> Result<SchemaLocation> {
    if loc == "-" {
        Ok(SchemaLocation::Stdin)
    } else if loc.is_empty() {
        Err(anyhow!("The path provided to find a schema is empty"))
    } else {
        Ok(SchemaLocation::File(Utf8PathBuf::from(loc)))
    }
}

/// Parses a `KEY:VALUE` header. Only the first colon separates the two, so
/// values may contain colons themselves.
pub fn parse_header(header: &str) -> Result<(String, String)> {
    let (key, value) = header
        .split_once(':')
        .ok_or_else(|| anyhow!("header \"{header}\" must be a KEY:VALUE pair"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(anyhow!("header \"{header}\" has an empty name"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn it_correctly_parses_stdin_flag() {
        assert_eq!(parse_schema_location("-").unwrap(), SchemaLocation::Stdin);
    }

    #[test]
    fn it_correctly_parses_path_option() {
        let loc = parse_schema_location("./schema.graphql").unwrap();
        match loc {
            SchemaLocation::File(buf) => {
                assert_eq!(buf.as_str(), "./schema.graphql");
            }
            _ => panic!("parsed incorrectly as stdin"),
        }
    }

    #[test]
    fn it_errs_with_empty_path() {
        let loc = parse_schema_location("");
        assert!(loc.is_err());
    }

    #[rstest]
    #[case("Authorization:Bearer token", "Authorization", "Bearer token")]
    #[case("x-api-key: abc", "x-api-key", "abc")]
    #[case("Referer:https://example.com:8080/", "Referer", "https://example.com:8080/")]
    fn it_parses_headers(#[case] input: &str, #[case] key: &str, #[case] value: &str) {
        assert_eq!(
            parse_header(input).unwrap(),
            (key.to_string(), value.to_string())
        );
    }

    #[rstest]
    #[case("no-separator")]
    #[case(":value-only")]
    fn it_rejects_malformed_headers(#[case] input: &str) {
        assert!(parse_header(input).is_err());
    }
}
