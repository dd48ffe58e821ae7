use crate::model::PropertyRecord;

/// Inline image strip of a single rendered listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryViewState {
    len: usize,
    focused: usize,
}

impl GalleryViewState {
    #[must_use]
    pub fn for_record(record: &PropertyRecord) -> Self {
        Self {
            len: record.images.len(),
            focused: 0,
        }
    }

    #[must_use]
    pub const fn focused(&self) -> usize {
        self.focused
    }

    /// An empty strip has nothing to open.
    #[must_use]
    pub const fn is_openable(&self) -> bool {
        self.len > 0
    }

    /// Returns whether the focus moved. Out-of-range indices are ignored.
    pub fn focus(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.focused {
            return false;
        }
        self.focused = index;
        true
    }
}
