//! Drag-and-drop reordering.
//!
//! The dragged item is taken out of the display order first; the drop
//! target's index is then looked up in the shortened sequence and shifted
//! by one when the drop lands on the lower half of the target row.

/// Where to take the dragged item from and where to put it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Index of the dragged item in the original order.
    pub from: usize,
    /// Insertion index in the order with the dragged item removed.
    pub to: usize,
}

/// Plan a move of `from_id` next to `to_id` within `order`.
///
/// Returns `None` when nothing should happen: self-drop, or either id
/// not present.
pub fn plan_move<K: PartialEq>(order: &[K], from_id: &K, to_id: &K, insert_after: bool) -> Option<Move> {
    if from_id == to_id {
        return None;
    }
    let from = order.iter().position(|id| id == from_id)?;
    let target = order
        .iter()
        .filter(|id| *id != from_id)
        .position(|id| id == to_id)?;
    Some(Move {
        from,
        to: target + usize::from(insert_after),
    })
}

/// Splice the dragged item into its new position.
pub fn apply_move<T>(items: &mut Vec<T>, mv: Move) {
    let item = items.remove(mv.from);
    let to = mv.to.min(items.len());
    items.insert(to, item);
}
