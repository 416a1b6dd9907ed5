//! Terminal rendition of the page: selector and table print to stdout,
//! alerts to stderr.

use crate::state::options::SelectEntry;
use crate::ui::surface::UiSurface;

/// UI surface for the interactive CLI.
///
/// The printed list stands in for the dropdown; the value the user picked
/// is recorded here so selector rebuilds can carry the highlight over the
/// same way the real page does.
#[derive(Debug, Default)]
pub struct ConsoleUi {
    selected: Option<String>,
}

impl ConsoleUi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the value the user picked from the printed list.
    pub fn set_selected(&mut self, value: impl Into<String>) {
        self.selected = Some(value.into());
    }
}

impl UiSurface for ConsoleUi {
    fn selected_value(&self) -> Option<String> {
        self.selected.clone()
    }

    fn render_options(&mut self, entries: &[SelectEntry]) {
        println!("texts:");
        for entry in entries {
            let marker = if entry.selected { '>' } else { ' ' };
            println!("  {marker} {}", entry.label);
        }
        self.selected = entries
            .iter()
            .find(|entry| entry.selected)
            .and_then(|entry| entry.value.clone());
    }

    fn render_page_label(&mut self, page: u64) {
        println!("Page: {page}");
    }

    fn render_rows(&mut self, rows: &[Vec<String>]) {
        for cells in rows {
            println!("{}", cells.join("\t"));
        }
    }

    fn alert(&mut self, message: &str) {
        eprintln!("{message}");
    }
}
