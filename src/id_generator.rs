use uuid::Uuid;

/// Fresh opaque identifier for elements, placements, regions and history entries
pub fn generate_id() -> Uuid {
    Uuid::new_v4()
}
