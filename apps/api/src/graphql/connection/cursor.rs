//! Opaque cursor codec
//!
//! Cursors are base64-encoded hex ObjectIds. Encoding keeps the token opaque
//! to clients; whether the id refers to a live record is checked separately by
//! each resolver's cursor validation.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use bson::oid::ObjectId;

/// Encode a record id as an opaque cursor string
pub fn encode_cursor(id: &ObjectId) -> String {
    BASE64.encode(id.to_hex())
}

/// Decode an opaque cursor back into a record id
///
/// Returns `None` for anything that is not base64-wrapped ObjectId hex. The
/// caller decides how to report the failure; this layer has no knowledge of
/// which argument carried the cursor.
pub fn decode_cursor(cursor: &str) -> Option<ObjectId> {
    let bytes = BASE64.decode(cursor).ok()?;
    let hex = String::from_utf8(bytes).ok()?;
    ObjectId::parse_str(&hex).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let id = ObjectId::new();
        let cursor = encode_cursor(&id);
        assert_eq!(decode_cursor(&cursor), Some(id));
    }

    #[test]
    fn test_cursor_is_opaque() {
        let id = ObjectId::new();
        assert_ne!(encode_cursor(&id), id.to_hex());
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        assert_eq!(decode_cursor("%%%not-base64%%%"), None);
    }

    #[test]
    fn test_decode_rejects_non_object_id_payload() {
        let cursor = BASE64.encode("definitely-not-an-object-id");
        assert_eq!(decode_cursor(&cursor), None);
    }
}
