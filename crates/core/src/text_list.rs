//! Codec for ordered string lists stored in `TEXT` columns.
//!
//! `products.features` and `product_variants.image_paths` hold a JSON array
//! of strings. A `NULL` or empty column decodes to an empty list.

use crate::error::CoreError;

/// Encode a list as JSON text for storage.
pub fn encode(items: &[String]) -> String {
    // Serializing a slice of strings cannot fail.
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// Decode stored JSON text back into an ordered list.
pub fn decode(raw: Option<&str>) -> Result<Vec<String>, CoreError> {
    match raw {
        None => Ok(Vec::new()),
        Some(text) if text.trim().is_empty() => Ok(Vec::new()),
        Some(text) => serde_json::from_str(text)
            .map_err(|e| CoreError::Internal(format!("Malformed list column: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn round_trip_preserves_order() {
        let items = vec![
            "Carbon Fiber Stability Plate".to_string(),
            "24K Gold Thread Embroidery".to_string(),
            "Anti-Gravity Traction System".to_string(),
        ];
        let text = encode(&items);
        assert_eq!(decode(Some(&text)).unwrap(), items);
    }

    #[test]
    fn round_trip_keeps_quotes_and_unicode() {
        let items = vec!["say \"hi\"".to_string(), "金虎".to_string()];
        assert_eq!(decode(Some(&encode(&items))).unwrap(), items);
    }

    #[test]
    fn unset_column_decodes_to_empty() {
        assert!(decode(None).unwrap().is_empty());
        assert!(decode(Some("")).unwrap().is_empty());
        assert!(decode(Some("[]")).unwrap().is_empty());
    }

    #[test]
    fn malformed_text_is_internal_error() {
        assert_matches!(decode(Some("not json")), Err(CoreError::Internal(_)));
        assert_matches!(decode(Some("[1, 2]")), Err(CoreError::Internal(_)));
    }
}
