//! Inline error slots, one per field identifier.

use crate::forms::validation::{Field, ValidationResult};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct ErrorSlot {
    text: String,
    visible: bool,
}

/// Error display state for a form. A slot is either hidden with no text or
/// visible with exactly one message.
#[derive(Clone, Debug, Default)]
pub struct FieldErrors {
    slots: BTreeMap<Field, ErrorSlot>,
}

impl FieldErrors {
    #[must_use]
    pub fn new(fields: &[Field]) -> Self {
        Self {
            slots: fields
                .iter()
                .map(|field| (*field, ErrorSlot::default()))
                .collect(),
        }
    }

    pub fn show(&mut self, field: Field, message: &str) {
        let slot = self.slots.entry(field).or_default();
        message.clone_into(&mut slot.text);
        slot.visible = true;
    }

    pub fn clear(&mut self, field: Field) {
        if let Some(slot) = self.slots.get_mut(&field) {
            slot.text.clear();
            slot.visible = false;
        }
    }

    pub fn clear_all(&mut self) {
        for slot in self.slots.values_mut() {
            slot.text.clear();
            slot.visible = false;
        }
    }

    /// Shows or clears the slot for `field`; returns whether the value passed.
    pub fn apply(&mut self, field: Field, result: ValidationResult) -> bool {
        match result {
            Ok(()) => {
                self.clear(field);
                true
            }
            Err(error) => {
                self.show(field, error.message());
                false
            }
        }
    }

    #[must_use]
    pub fn message(&self, field: Field) -> Option<&str> {
        self.slots
            .get(&field)
            .filter(|slot| slot.visible)
            .map(|slot| slot.text.as_str())
    }

    #[must_use]
    pub fn is_visible(&self, field: Field) -> bool {
        self.slots.get(&field).is_some_and(|slot| slot.visible)
    }

    pub fn visible(&self) -> impl Iterator<Item = (Field, &str)> {
        self.slots
            .iter()
            .filter(|(_, slot)| slot.visible)
            .map(|(field, slot)| (*field, slot.text.as_str()))
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.slots.values().any(|slot| slot.visible)
    }
}
