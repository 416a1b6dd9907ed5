//! Selector bookkeeping: which texts are on display and which entry is
//! highlighted after a rebuild.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use std::collections::HashSet;

use crate::net::types::TextRef;

/// Label of the no-selection placeholder entry.
pub const PLACEHOLDER_LABEL: &str = "Choose text";

/// Characters of text content shown in an entry label.
const PREVIEW_CHARS: usize = 30;

/// One entry of the text selector, ready for a UI surface to display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectEntry {
    /// Identifier carried by the entry; `None` for the placeholder.
    pub value: Option<String>,
    pub label: String,
    /// Untruncated text content, shown as a hover tooltip where supported.
    pub tooltip: Option<String>,
    pub selected: bool,
}

/// Explicit size-then-membership comparison; order-insensitive.
#[must_use]
pub fn sets_equal(a: &HashSet<String>, b: &HashSet<String>) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().all(|item| b.contains(item))
}

/// Identifiers last rendered into the selector.
///
/// Deciding whether a refresh needs to rebuild the selector is the cache's
/// only job; it never drives which entry is selected.
#[derive(Clone, Debug, Default)]
pub struct OptionsCache {
    known: HashSet<String>,
}

impl OptionsCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `texts` names a different set of identifiers than the one
    /// last rendered.
    #[must_use]
    pub fn needs_rebuild(&self, texts: &[TextRef]) -> bool {
        !sets_equal(&self.known, &id_set(texts))
    }

    /// Record `texts` as the set now on display.
    pub fn mark_rendered(&mut self, texts: &[TextRef]) {
        self.known = id_set(texts);
    }
}

fn id_set(texts: &[TextRef]) -> HashSet<String> {
    texts.iter().map(|text| text.id.clone()).collect()
}

/// Build the full selector entry list for `texts`.
///
/// The placeholder comes first; each text gets a truncated preview label
/// and its full content as tooltip. `previous` is the value the UI reported
/// as selected before the rebuild; the entry whose identifier equals it
/// stays selected, and when nothing matches the placeholder ends up
/// selected.
#[must_use]
pub fn build_entries(texts: &[TextRef], previous: Option<&str>) -> Vec<SelectEntry> {
    let mut entries = vec![SelectEntry {
        value: None,
        label: PLACEHOLDER_LABEL.to_owned(),
        tooltip: None,
        selected: false,
    }];

    for text in texts {
        let preview: String = text.text_str.chars().take(PREVIEW_CHARS).collect();
        entries.push(SelectEntry {
            value: Some(text.id.clone()),
            label: format!("{preview}... (ID: {})", text.id),
            tooltip: Some(text.text_str.clone()),
            selected: previous == Some(text.id.as_str()),
        });
    }

    if !entries.iter().any(|entry| entry.selected) {
        entries[0].selected = true;
    }

    entries
}
