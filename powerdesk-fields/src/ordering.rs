//! Pure reorder engine for fields and stages.
//!
//! A move is remove-at-`from`, insert-at-`to`, then renumber every element's
//! order to its index. Orders stay dense (exactly `0..N-1`) after every
//! structural change; there is no fractional insertion between existing
//! values. Field moves are scoped to one section; stage moves are global.
//!
//! The interactive capture of a drag in flight is a UI concern; only these
//! deterministic functions belong here.

use crate::error::{Result, SchemaError};
use crate::types::{FieldDefinition, FieldOption, StageDefinition};

/// An element carrying an integer order field.
pub trait Ordered {
    fn order(&self) -> i64;
    fn set_order(&mut self, order: i64);
}

impl Ordered for FieldDefinition {
    fn order(&self) -> i64 {
        self.display_order
    }
    fn set_order(&mut self, order: i64) {
        self.display_order = order;
    }
}

impl Ordered for StageDefinition {
    fn order(&self) -> i64 {
        self.order
    }
    fn set_order(&mut self, order: i64) {
        self.order = order;
    }
}

impl Ordered for FieldOption {
    fn order(&self) -> i64 {
        self.order
    }
    fn set_order(&mut self, order: i64) {
        self.order = order;
    }
}

/// Overwrite every element's order with its index.
pub fn renumber<T: Ordered>(items: &mut [T]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_order(index as i64);
    }
}

/// Move the element at `from` to `to` and renumber densely. `from == to`
/// still renumbers but changes no relative order.
pub fn reorder<T: Ordered>(items: &mut Vec<T>, from: usize, to: usize) -> Result<()> {
    let len = items.len();
    if from >= len {
        return Err(SchemaError::PositionOutOfRange { index: from, len });
    }
    if to >= len {
        return Err(SchemaError::PositionOutOfRange { index: to, len });
    }
    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
    renumber(items);
    Ok(())
}

/// Move a field within its section. `from` and `to` are positions within the
/// section's subsequence; fields of other sections keep their slots and their
/// orders untouched. The section's `display_order` values are renumbered to
/// the subsequence index.
pub fn reorder_in_section(
    fields: &mut [FieldDefinition],
    section: &str,
    from: usize,
    to: usize,
) -> Result<()> {
    let slots: Vec<usize> = fields
        .iter()
        .enumerate()
        .filter(|(_, f)| f.section == section)
        .map(|(i, _)| i)
        .collect();
    let len = slots.len();
    if from >= len {
        return Err(SchemaError::PositionOutOfRange { index: from, len });
    }
    if to >= len {
        return Err(SchemaError::PositionOutOfRange { index: to, len });
    }

    let mut permuted = slots.clone();
    let moved = permuted.remove(from);
    permuted.insert(to, moved);

    let mut reordered: Vec<FieldDefinition> =
        permuted.iter().map(|&i| fields[i].clone()).collect();
    renumber(&mut reordered);
    for (&slot, field) in slots.iter().zip(reordered) {
        fields[slot] = field;
    }
    Ok(())
}

/// Renumber one section's fields to their subsequence index. Used after an
/// add or delete within the section.
pub fn renumber_section(fields: &mut [FieldDefinition], section: &str) {
    let mut index = 0i64;
    for field in fields.iter_mut().filter(|f| f.section == section) {
        field.set_order(index);
        index += 1;
    }
}
