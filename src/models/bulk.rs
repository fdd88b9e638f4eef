//! Per-item outcomes of bulk operations.
//!
//! Bulk endpoints succeed as a whole even when single items are rejected;
//! every item carries its own status and errors.

/// Status of a single item in a bulk response.
pub trait ItemOutcome {
    /// Returns true if the remote side applied the change for this item.
    fn is_success(&self) -> bool;
}

/// A response made of ordered per-item outcomes.
pub trait BulkResponse {
    type Item: ItemOutcome;

    /// All item outcomes, in the order returned by the API.
    fn items(&self) -> &[Self::Item];

    /// Items that were applied.
    fn succeeded(&self) -> Box<dyn Iterator<Item = &Self::Item> + '_> {
        Box::new(self.items().iter().filter(|item| item.is_success()))
    }

    /// Items that were rejected.
    fn failed(&self) -> Box<dyn Iterator<Item = &Self::Item> + '_> {
        Box::new(self.items().iter().filter(|item| !item.is_success()))
    }

    /// Returns true if every item was applied.
    fn all_succeeded(&self) -> bool {
        self.items().iter().all(ItemOutcome::is_success)
    }
}
