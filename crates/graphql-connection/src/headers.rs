use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};

use crate::ConnectionError;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Builds the headers of one request. Later maps win over earlier ones, and
/// the JSON content type is always set.
pub(crate) fn build<'a>(
    header_maps: impl IntoIterator<Item = &'a HashMap<String, String>>,
) -> Result<HeaderMap, ConnectionError> {
    let mut headers = HeaderMap::new();

    // this should be consistent for any graphql requests
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

    for header_map in header_maps {
        for (key, value) in header_map {
            let invalid = |reason: String| ConnectionError::InvalidHeader {
                name: key.clone(),
                reason,
            };
            let header_key =
                HeaderName::from_bytes(key.as_bytes()).map_err(|e| invalid(e.to_string()))?;
            let header_value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
            headers.insert(header_key, header_value);
        }
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use speculoos::prelude::*;

    use super::*;

    #[test]
    fn it_always_sends_json() {
        let none: [&HashMap<String, String>; 0] = [];
        let headers = build(none).unwrap();
        assert_that!(headers.get("content-type").map(|v| v.to_str().unwrap()))
            .is_equal_to(Some("application/json"));
    }

    #[test]
    fn it_lets_later_maps_override_earlier_ones() {
        let configured = HashMap::from([("x-tenant".to_string(), "default".to_string())]);
        let derived = HashMap::from([("x-tenant".to_string(), "acme".to_string())]);

        let headers = build([&configured, &derived]).unwrap();
        assert_that!(headers.get("x-tenant").map(|v| v.to_str().unwrap()))
            .is_equal_to(Some("acme"));
    }

    #[test]
    fn it_rejects_invalid_header_names() {
        let bad = HashMap::from([("not a header".to_string(), "x".to_string())]);
        assert_that!(build([&bad]))
            .is_err()
            .matches(|err| matches!(err, ConnectionError::InvalidHeader { name, .. } if name == "not a header"));
    }
}
