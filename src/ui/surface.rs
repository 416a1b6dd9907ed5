#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::net::types::Row;
use crate::state::options::SelectEntry;

/// A file handed to the uploader by a file picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    /// MIME type as reported by the picker; the uploader accepts exactly
    /// `text/plain`.
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Binding to whatever is displaying the page: a selectable text list, a
/// paged table with its page label, and a blocking alert.
///
/// Implementations display what they are handed and report what is
/// selected; every decision stays in the controller, so a test double
/// with no real display is a complete substitute.
pub trait UiSurface: Send {
    /// Value currently selected in the text list, if any.
    fn selected_value(&self) -> Option<String>;

    /// Replace the text list wholesale.
    fn render_options(&mut self, entries: &[SelectEntry]);

    /// Update the visible page-number label.
    fn render_page_label(&mut self, page: u64);

    /// Replace the table contents wholesale with pre-stringified cells.
    fn render_rows(&mut self, rows: &[Vec<String>]);

    /// Surface a blocking validation message.
    fn alert(&mut self, message: &str);
}

/// Stringify one row into cells, one per value in key iteration order.
#[must_use]
pub fn row_cells(row: &Row) -> Vec<String> {
    row.values().map(cell_text).collect()
}

fn cell_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
