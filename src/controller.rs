//! The client page controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every user-visible behavior of the page funnels through here: refresh
//! the text list, switch the selected text, upload a new text, and move
//! one window through the row table. The controller talks to the backend
//! through one [`ApiClient`] and to the display through one injected
//! [`UiSurface`], so the whole thing runs unchanged against the console
//! UI or a recording double.
//!
//! Operations serialize behind `Arc<tokio::sync::Mutex<_>>`; a second
//! navigation issued while one is in flight waits instead of racing it,
//! and the last operation still wins.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::net::api::{ApiClient, ApiError};
use crate::net::types::Row;
use crate::state::options::{OptionsCache, build_entries};
use crate::state::pager::{PAGE_LIMIT, PageMove, Pager};
use crate::ui::surface::{PickedFile, UiSurface, row_cells};

/// Controller shared between a driving loop and background refreshes.
pub type SharedController<U> = Arc<Mutex<PageController<U>>>;

/// Outcome of an upload attempt.
#[derive(Debug)]
pub enum UploadOutcome {
    /// The picked file failed validation; an alert was raised and no
    /// request was sent.
    Rejected,
    /// The upload went through. The selector refresh runs in the handed
    /// back task; the table render has already completed by the time that
    /// task is dispatched.
    Accepted {
        refresh: JoinHandle<()>,
    },
}

/// Session state and behavior of the paged word-statistics view.
pub struct PageController<U> {
    api: ApiClient,
    ui: U,
    pager: Pager,
    text_id: Option<String>,
    options: OptionsCache,
}

impl<U: UiSurface> PageController<U> {
    #[must_use]
    pub fn new(api: ApiClient, ui: U) -> Self {
        Self {
            api,
            ui,
            pager: Pager::new(),
            text_id: None,
            options: OptionsCache::new(),
        }
    }

    #[must_use]
    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    #[must_use]
    pub fn pager(&self) -> Pager {
        self.pager
    }

    /// Identifier of the text currently being paged through.
    #[must_use]
    pub fn text_id(&self) -> Option<&str> {
        self.text_id.as_deref()
    }

    /// Re-fetch the text list and rebuild the selector when the set of
    /// identifiers changed.
    ///
    /// An unchanged set (in any order) leaves the selector alone, so the
    /// current highlight survives polling. On rebuild, the highlight
    /// follows the value the UI reported as selected beforehand.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the list fetch; the selector is left
    /// untouched in that case.
    pub async fn refresh_options(&mut self) -> Result<(), ApiError> {
        let texts = self.api.list_texts().await?;
        if self.options.needs_rebuild(&texts) {
            let previous = self.ui.selected_value();
            self.ui
                .render_options(&build_entries(&texts, previous.as_deref()));
            self.options.mark_rendered(&texts);
        }
        Ok(())
    }

    /// Switch to `id` and land on its first row window.
    ///
    /// The offset rewinds to 0; the page label keeps its old value until
    /// rows render, matching the stale-counter contract.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the row fetch.
    pub async fn select_text(&mut self, id: impl Into<String>) -> Result<(), ApiError> {
        self.text_id = Some(id.into());
        self.pager.rewind();
        self.change_page(PageMove::Stay).await
    }

    /// Move one window and re-render the table.
    ///
    /// The pager moves before anything else, selection or not. With no
    /// selected text nothing is fetched. An empty window leaves the
    /// previous table and page label in place.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the row fetch; the pager has already
    /// moved by then.
    pub async fn change_page(&mut self, step: PageMove) -> Result<(), ApiError> {
        self.pager.step(step);

        let Some(text_id) = self.text_id.clone() else {
            return Ok(());
        };

        let rows = self
            .api
            .fetch_rows(&text_id, self.pager.offset, PAGE_LIMIT)
            .await?;
        if rows.is_empty() {
            return Ok(());
        }

        self.render(&rows);
        Ok(())
    }

    /// Page label plus full table replace, in that order.
    fn render(&mut self, rows: &[Row]) {
        self.ui.render_page_label(self.pager.cur_page);
        let cells: Vec<Vec<String>> = rows.iter().map(row_cells).collect();
        self.ui.render_rows(&cells);
    }
}

impl<U: UiSurface + 'static> PageController<U> {
    /// Wrap the controller for use from multiple tasks.
    #[must_use]
    pub fn into_shared(self) -> SharedController<U> {
        Arc::new(Mutex::new(self))
    }

    /// Upload `file` and adopt the created text.
    ///
    /// A missing file or one whose MIME type is not exactly `text/plain`
    /// alerts through the UI and sends nothing. After a successful upload
    /// the current window is fetched for the adopted (or stale) selection
    /// and rendered, even when empty (unlike [`Self::change_page`]), and a
    /// selector refresh is dispatched as a background task once the render
    /// is done. The returned handle lets callers await that refresh
    /// without the uploader doing so.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the upload or the follow-up row fetch.
    pub async fn upload(
        shared: &SharedController<U>,
        file: Option<PickedFile>,
    ) -> Result<UploadOutcome, ApiError> {
        let mut ctl = shared.lock().await;

        let Some(file) = file.filter(|file| file.mime == "text/plain") else {
            ctl.ui.alert("Please select a text file.");
            return Ok(UploadOutcome::Rejected);
        };
        let PickedFile { name, bytes, .. } = file;

        let receipt = ctl.api.upload_text(&name, bytes).await?;
        if let Some(id) = receipt.id {
            ctl.text_id = Some(id);
        }

        if let Some(text_id) = ctl.text_id.clone() {
            let rows = ctl
                .api
                .fetch_rows(&text_id, ctl.pager.offset, PAGE_LIMIT)
                .await?;
            ctl.render(&rows);
        }

        drop(ctl);
        let handle = Arc::clone(shared);
        let refresh = tokio::spawn(async move {
            if let Err(error) = handle.lock().await.refresh_options().await {
                tracing::warn!(%error, "selector refresh after upload failed");
            }
        });

        Ok(UploadOutcome::Accepted { refresh })
    }
}
