//! Caller-owned conversion session state.
//!
//! The parsing components are stateless; whatever front-end drives them
//! owns one of these per user session. It holds at most one assembled
//! table and a generation counter that changes on every reset, so
//! downstream surfaces (preview, download) can tell stale results apart.

use crate::table::TransactionTable;

#[derive(Debug, Default)]
pub struct ConvertSession {
    result: Option<TransactionTable>,
    generation: u64,
}

impl ConvertSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once a conversion result has been stored and not yet reset.
    pub fn is_ready(&self) -> bool {
        self.result.is_some()
    }

    pub fn set_result(&mut self, table: TransactionTable) {
        self.result = Some(table);
    }

    pub fn result(&self) -> Option<&TransactionTable> {
        self.result.as_ref()
    }

    /// Discard the accumulated result and return to the initial state.
    pub fn reset(&mut self) {
        self.result = None;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Changes on every reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
