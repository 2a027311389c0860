use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

/// Encodes bytes as standard base64.
#[must_use]
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes standard base64, tolerating a leading `data:` URL prefix.
///
/// Malformed input never fails: it decodes to an empty vector so callers can
/// fall back to the placeholder asset.
#[must_use]
pub fn decode_base64(encoded: &str) -> Vec<u8> {
    let payload = encoded
        .split_once(";base64,")
        .map_or(encoded, |(_, rest)| rest);

    match STANDARD.decode(payload.trim()) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!("discarding malformed base64 payload: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_arbitrary_bytes() {
        let bytes: Vec<u8> = (0..=255).collect();
        assert_eq!(decode_base64(&encode_base64(&bytes)), bytes);
    }

    #[test]
    fn round_trip_empty() {
        assert_eq!(decode_base64(&encode_base64(&[])), Vec::<u8>::new());
    }

    #[test]
    fn malformed_input_decodes_to_empty() {
        assert!(decode_base64("!!! not base64 !!!").is_empty());
    }

    #[test]
    fn data_url_prefix_is_tolerated() {
        let encoded = format!("data:image/jpeg;base64,{}", encode_base64(b"abc"));
        assert_eq!(decode_base64(&encoded), b"abc");
    }
}
