//! In-memory host document.
//!
//! Mirrors the DOM's handle semantics: elements returned by
//! [`MemoryDocument::element_by_id`] share state with the document, so a write
//! through an element is visible through the document afterwards.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::host::{HostError, HostValue, TextDocument, TextElement};

#[derive(Debug, Default)]
struct Slots {
    values: BTreeMap<String, HostValue>,
    writes: usize,
}

/// A document holding named elements and their values.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    slots: Rc<RefCell<Slots>>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an element holding a string value.
    #[must_use]
    pub fn with_text(self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(id, HostValue::Text(text.into()));
        self
    }

    /// Add (or replace) an element holding an arbitrary value.
    #[must_use]
    pub fn with_value(self, id: impl Into<String>, value: HostValue) -> Self {
        self.insert(id, value);
        self
    }

    pub fn insert(&self, id: impl Into<String>, value: HostValue) {
        self.slots.borrow_mut().values.insert(id.into(), value);
    }

    /// Current value of `id`, `None` when no such element exists.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<HostValue> {
        self.slots.borrow().values.get(id).cloned()
    }

    /// Current string value of `id`.
    #[must_use]
    pub fn text(&self, id: &str) -> Option<String> {
        match self.get(id)? {
            HostValue::Text(text) => Some(text),
            HostValue::Undefined | HostValue::NotText => None,
        }
    }

    /// Number of `set_value` calls made through any element.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.slots.borrow().writes
    }

    /// Snapshot of every element, ordered by id.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(String, HostValue)> {
        self.slots
            .borrow()
            .values
            .iter()
            .map(|(id, value)| (id.clone(), value.clone()))
            .collect()
    }
}

/// Handle to one element of a [`MemoryDocument`].
#[derive(Debug, Clone)]
pub struct MemoryElement {
    slots: Rc<RefCell<Slots>>,
    id: String,
}

impl TextDocument for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Result<Option<MemoryElement>, HostError> {
        if !self.slots.borrow().values.contains_key(id) {
            return Ok(None);
        }
        Ok(Some(MemoryElement {
            slots: Rc::clone(&self.slots),
            id: id.to_owned(),
        }))
    }
}

impl TextElement for MemoryElement {
    fn value(&self) -> Result<HostValue, HostError> {
        Ok(self
            .slots
            .borrow()
            .values
            .get(&self.id)
            .cloned()
            .unwrap_or(HostValue::Undefined))
    }

    fn set_value(&self, value: &str) -> Result<(), HostError> {
        let mut slots = self.slots.borrow_mut();
        slots.writes += 1;
        slots
            .values
            .insert(self.id.clone(), HostValue::Text(value.to_owned()));
        Ok(())
    }
}
