//! Identity map used for cycle detection during one deep copy.

use std::collections::HashMap;

use crate::value::Value;

/// Maps each composite already reached to the copy produced for it.
///
/// Keys are handle addresses. They stay valid because every original is
/// borrowed from the input graph for the whole copy.
#[derive(Debug, Default)]
pub(super) struct Visited {
    copies: HashMap<usize, Value>,
}

impl Visited {
    pub(super) fn get(&self, original: &Value) -> Option<Value> {
        original
            .addr()
            .and_then(|addr| self.copies.get(&addr))
            .cloned()
    }

    pub(super) fn insert(&mut self, original: &Value, copy: &Value) {
        if let Some(addr) = original.addr() {
            self.copies.insert(addr, copy.clone());
        }
    }

    pub(super) fn len(&self) -> usize {
        self.copies.len()
    }
}
