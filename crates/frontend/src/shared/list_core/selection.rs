//! Rows chosen for a bulk action.

use std::collections::BTreeSet;

use contracts::shared::RecordId;

/// State of the "select all" header checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckState {
    Unchecked,
    Indeterminate,
    Checked,
}

/// Selected record ids.
///
/// Must stay within the visible ids: [`SelectionSet::reconcile`] is run on
/// every projection change so that a bulk action can never target a row the
/// user no longer sees (filtered out or deleted).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<RecordId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: &RecordId) {
        if !self.ids.remove(id) {
            self.ids.insert(id.clone());
        }
    }

    /// Checkbox change on a row
    pub fn set(&mut self, id: &RecordId, checked: bool) {
        if checked {
            self.ids.insert(id.clone());
        } else {
            self.ids.remove(id);
        }
    }

    pub fn select_all<'a>(&mut self, visible: impl IntoIterator<Item = &'a RecordId>) {
        self.ids.extend(visible.into_iter().cloned());
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn current(&self) -> &BTreeSet<RecordId> {
        &self.ids
    }

    /// Ids in a stable order, for building a bulk request
    pub fn snapshot(&self) -> Vec<RecordId> {
        self.ids.iter().cloned().collect()
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Drop every id that is not visible any more.
    /// Returns how many were dropped.
    pub fn reconcile(&mut self, visible: &BTreeSet<RecordId>) -> usize {
        let before = self.ids.len();
        self.ids.retain(|id| visible.contains(id));
        before - self.ids.len()
    }

    pub fn header_state<'a>(&self, visible: impl IntoIterator<Item = &'a RecordId>) -> HeaderCheckState {
        let mut total = 0;
        let mut selected = 0;
        for id in visible {
            total += 1;
            if self.ids.contains(id) {
                selected += 1;
            }
        }
        if selected == 0 {
            HeaderCheckState::Unchecked
        } else if selected == total {
            HeaderCheckState::Checked
        } else {
            HeaderCheckState::Indeterminate
        }
    }
}
