#[cfg(test)]
#[path = "pager_test.rs"]
mod pager_test;

/// Rows per fetched window.
pub const PAGE_LIMIT: u64 = 50;

/// One step of page navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageMove {
    /// One window back.
    Back,
    /// Keep the current window (used to land on a fresh selection).
    Stay,
    /// One window forward.
    Forward,
}

impl PageMove {
    /// Signed direction as used by the offset arithmetic.
    #[must_use]
    pub fn direction(self) -> i64 {
        match self {
            Self::Back => -1,
            Self::Stay => 0,
            Self::Forward => 1,
        }
    }
}

/// Row offset plus the display page counter for the paged table.
///
/// The two fields normally satisfy `offset == (cur_page - 1) * PAGE_LIMIT`.
/// A backward step past the first window clamps the offset to 0 but leaves
/// the counter alone, and a rewind on selection change resets only the
/// offset, so the visible label can lag the data. Both behaviors are
/// contractual; callers must not re-derive one field from the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    /// Zero-based row offset; always a multiple of [`PAGE_LIMIT`].
    pub offset: u64,
    /// One-based page counter shown in the page label.
    pub cur_page: u64,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            offset: 0,
            cur_page: 1,
        }
    }
}

impl Pager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one navigation step.
    ///
    /// A backward step that would take the offset negative clamps it to 0
    /// and leaves `cur_page` untouched; every other step moves both fields
    /// together.
    pub fn step(&mut self, step: PageMove) {
        match step {
            PageMove::Back if self.offset < PAGE_LIMIT => {
                self.offset = 0;
            }
            PageMove::Back => {
                self.offset -= PAGE_LIMIT;
                self.cur_page = self.cur_page.saturating_sub(1);
            }
            PageMove::Stay => {}
            PageMove::Forward => {
                self.offset += PAGE_LIMIT;
                self.cur_page += 1;
            }
        }
    }

    /// Jump back to the first window without touching the page counter.
    pub fn rewind(&mut self) {
        self.offset = 0;
    }
}
