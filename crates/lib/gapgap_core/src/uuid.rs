// UUIDv7 helper for chat and message ids.
//
// Messages written inside one transaction can share a timestamp, so the
// id doubles as the tie-breaker when ordering by `created_at`. Users keep
// PG's gen_random_uuid() (v4).

use uuid::Uuid;

/// Generate a new UUIDv7 (timestamp-sortable).
pub fn uuidv7() -> Uuid {
    Uuid::now_v7()
}

/// Parse a client-supplied identifier.
pub fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuidv7_is_monotonic() {
        let a = uuidv7();
        let b = uuidv7();
        assert!(b >= a);
    }

    #[test]
    fn parse_id_accepts_padded_uuid() {
        let id = uuidv7();
        assert_eq!(parse_id(&format!("  {id} ")), Some(id));
    }

    #[test]
    fn parse_id_rejects_garbage() {
        assert_eq!(parse_id("42"), None);
        assert_eq!(parse_id(""), None);
    }
}
