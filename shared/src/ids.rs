use uuid::Uuid;

/// Source of fresh expense ids.
///
/// Implementations must never hand out the same id twice within a session.
pub trait IdGenerator {
    fn generate_id(&mut self) -> String;
}

/// Random v4 UUIDs; works in the browser through uuid's `js` feature
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_ids_are_unique() {
        let mut generator = UuidIdGenerator;
        let ids: HashSet<String> = (0..1000).map(|_| generator.generate_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_uuid_id_format() {
        let id = UuidIdGenerator.generate_id();
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
