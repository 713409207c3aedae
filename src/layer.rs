//! Dense z-order management shared by annotation elements and asset placements.
//!
//! Every collection handled here keeps its items sorted by `z_index`, with the
//! indices forming a gapless run `1..=N`. All reordering operations preserve that
//! invariant, so the vector position of an item is always `z_index - 1`.
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Anything with a stable id and a stacking position
pub trait Layered {
    fn layer_id(&self) -> Uuid;
    fn z_index(&self) -> u32;
    fn set_z_index(&mut self, z_index: u32);
}

/// A reordering request for one item of a layered collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerOp {
    BringForward,
    SendBackward,
    BringToFront,
    SendToBack,
}

impl LayerOp {
    pub fn label(&self) -> &'static str {
        match self {
            LayerOp::BringForward => "Bring forward",
            LayerOp::SendBackward => "Send backward",
            LayerOp::BringToFront => "Bring to front",
            LayerOp::SendToBack => "Send to back",
        }
    }

    /// Apply to `items`. Returns false when the item is missing or already in place.
    pub fn apply<T: Layered>(&self, items: &mut [T], id: Uuid) -> bool {
        match self {
            LayerOp::BringForward => bring_forward(items, id),
            LayerOp::SendBackward => send_backward(items, id),
            LayerOp::BringToFront => bring_to_front(items, id),
            LayerOp::SendToBack => send_to_back(items, id),
        }
    }
}

/// Sort by current z-index and renumber densely from 1
pub fn normalize<T: Layered>(items: &mut [T]) {
    // stable sort keeps insertion order for duplicate indices
    items.sort_by_key(|item| item.z_index());
    renumber(items);
}

fn renumber<T: Layered>(items: &mut [T]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_z_index(index as u32 + 1);
    }
}

/// The z-index a newly appended item should receive
pub fn next_z_index<T: Layered>(items: &[T]) -> u32 {
    items.len() as u32 + 1
}

pub fn position_of<T: Layered>(items: &[T], id: Uuid) -> Option<usize> {
    items.iter().position(|item| item.layer_id() == id)
}

/// Whether the z-indices form the run 1..=N in vector order
pub fn is_dense<T: Layered>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(index, item)| item.z_index() == index as u32 + 1)
}

/// Swap with the item directly above
pub fn bring_forward<T: Layered>(items: &mut [T], id: Uuid) -> bool {
    match position_of(items, id) {
        Some(index) if index + 1 < items.len() => {
            items.swap(index, index + 1);
            renumber(items);
            true
        }
        _ => false,
    }
}

/// Swap with the item directly below
pub fn send_backward<T: Layered>(items: &mut [T], id: Uuid) -> bool {
    match position_of(items, id) {
        Some(index) if index > 0 => {
            items.swap(index, index - 1);
            renumber(items);
            true
        }
        _ => false,
    }
}

/// Move to N, shifting everything that was above it down by one
pub fn bring_to_front<T: Layered>(items: &mut [T], id: Uuid) -> bool {
    match position_of(items, id) {
        Some(index) if index + 1 < items.len() => {
            items[index..].rotate_left(1);
            renumber(items);
            true
        }
        _ => false,
    }
}

/// Move to 1, shifting everything that was below it up by one
pub fn send_to_back<T: Layered>(items: &mut [T], id: Uuid) -> bool {
    match position_of(items, id) {
        Some(index) if index > 0 => {
            items[..=index].rotate_right(1);
            renumber(items);
            true
        }
        _ => false,
    }
}

/// Remove an item and close the gap it leaves
pub fn remove<T: Layered>(items: &mut Vec<T>, id: Uuid) -> Option<T> {
    let index = position_of(items, id)?;
    let removed = items.remove(index);
    renumber(items);
    Some(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Item {
        id: Uuid,
        z: u32,
    }

    impl Layered for Item {
        fn layer_id(&self) -> Uuid {
            self.id
        }
        fn z_index(&self) -> u32 {
            self.z
        }
        fn set_z_index(&mut self, z_index: u32) {
            self.z = z_index;
        }
    }

    fn stack(n: usize) -> Vec<Item> {
        (0..n)
            .map(|i| Item {
                id: Uuid::new_v4(),
                z: i as u32 + 1,
            })
            .collect()
    }

    fn order(items: &[Item], ids: &[Uuid]) -> Vec<usize> {
        items
            .iter()
            .map(|item| ids.iter().position(|id| *id == item.id).unwrap())
            .collect()
    }

    #[test]
    fn bring_to_front_shifts_intervening_items_down() {
        let mut items = stack(4);
        let ids: Vec<Uuid> = items.iter().map(|i| i.id).collect();
        assert!(bring_to_front(&mut items, ids[1]));
        assert_eq!(order(&items, &ids), vec![0, 2, 3, 1]);
        assert!(is_dense(&items));
        assert_eq!(items[3].z, 4);
    }

    #[test]
    fn send_to_back_shifts_intervening_items_up() {
        let mut items = stack(4);
        let ids: Vec<Uuid> = items.iter().map(|i| i.id).collect();
        assert!(send_to_back(&mut items, ids[2]));
        assert_eq!(order(&items, &ids), vec![2, 0, 1, 3]);
        assert!(is_dense(&items));
    }

    #[test]
    fn forward_and_backward_swap_neighbours() {
        let mut items = stack(3);
        let ids: Vec<Uuid> = items.iter().map(|i| i.id).collect();
        assert!(bring_forward(&mut items, ids[0]));
        assert_eq!(order(&items, &ids), vec![1, 0, 2]);
        assert!(send_backward(&mut items, ids[2]));
        assert_eq!(order(&items, &ids), vec![1, 2, 0]);
        assert!(is_dense(&items));
    }

    #[test]
    fn edge_moves_are_rejected() {
        let mut items = stack(2);
        let ids: Vec<Uuid> = items.iter().map(|i| i.id).collect();
        assert!(!bring_forward(&mut items, ids[1]));
        assert!(!bring_to_front(&mut items, ids[1]));
        assert!(!send_backward(&mut items, ids[0]));
        assert!(!send_to_back(&mut items, ids[0]));
        assert!(!bring_forward(&mut items, Uuid::new_v4()));
    }

    #[test]
    fn remove_and_normalize_keep_run_dense() {
        let mut items = stack(4);
        let ids: Vec<Uuid> = items.iter().map(|i| i.id).collect();
        assert!(remove(&mut items, ids[1]).is_some());
        assert!(is_dense(&items));
        assert_eq!(next_z_index(&items), 4);

        items[0].z = 9;
        items[1].z = 3;
        normalize(&mut items);
        assert!(is_dense(&items));
        assert_eq!(items[0].id, ids[2]);
    }
}
