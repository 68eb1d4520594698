// src/shared/json_field.rs
//
// Sequence-valued fields (technologies, images, achievements, tags) are
// persisted in a single TEXT column holding a JSON array. The decode side is
// lossy-safe: anything that is not a JSON array of strings comes back as an
// empty vec, never an error.

/// Decode a stored JSON blob into the in-memory sequence.
pub fn parse_json_field(raw: &str) -> Vec<String> {
    serde_json::from_str::<Vec<String>>(raw).unwrap_or_default()
}

/// Encode a sequence for storage. Order is preserved, nothing is deduplicated.
pub fn stringify_json_field(values: &[String]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| String::from("[]"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_order_and_duplicates() {
        let values = vec![
            "Rust".to_string(),
            "Actix".to_string(),
            "Rust".to_string(),
        ];

        let encoded = stringify_json_field(&values);
        let decoded = parse_json_field(&encoded);

        assert_eq!(decoded, values);
    }

    #[test]
    fn empty_sequence_round_trips() {
        let encoded = stringify_json_field(&[]);
        assert_eq!(encoded, "[]");
        assert_eq!(parse_json_field(&encoded), Vec::<String>::new());
    }

    #[test]
    fn malformed_blob_decodes_to_empty() {
        assert_eq!(parse_json_field("not json at all"), Vec::<String>::new());
        assert_eq!(parse_json_field(""), Vec::<String>::new());
        assert_eq!(parse_json_field("{\"a\": 1}"), Vec::<String>::new());
    }

    #[test]
    fn non_string_array_decodes_to_empty() {
        assert_eq!(parse_json_field("[1, 2, 3]"), Vec::<String>::new());
    }

    #[test]
    fn decode_handles_embedded_quotes() {
        let values = vec!["say \"hi\"".to_string()];
        let encoded = stringify_json_field(&values);
        assert_eq!(parse_json_field(&encoded), values);
    }
}
