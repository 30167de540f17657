//! # Browsing State Container
//!
//! Single state snapshot for the catalog UI, updated through explicit
//! transitions. Keeping page, filter, and selection in one container is what
//! enforces the reset-page-on-new-filter and seed-on-select invariants.
//!
//! The server is the sole source of truth for pagination bounds: every
//! response overwrites `last_page` and `per_page` unconditionally.

use crate::catalog::Book;
use crate::query::Page;

use super::composer::FilterForm;

/// Form mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Search,
    Add,
    EditDelete,
}

/// Client-side catalog browsing state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogState {
    mode: FormMode,
    form: FilterForm,
    active_query: String,
    shown_page: usize,
    last_page: usize,
    per_page: usize,
    results: Vec<Book>,
    selected: Option<usize>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            mode: FormMode::Search,
            form: FilterForm::new(),
            active_query: String::new(),
            shown_page: 1,
            last_page: 1,
            per_page: 0,
            results: Vec::new(),
            selected: None,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn form(&self) -> &FilterForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FilterForm {
        &mut self.form
    }

    pub fn shown_page(&self) -> usize {
        self.shown_page
    }

    pub fn last_page(&self) -> usize {
        self.last_page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn results(&self) -> &[Book] {
        &self.results
    }

    pub fn active_query(&self) -> &str {
        &self.active_query
    }

    pub fn selected_book(&self) -> Option<&Book> {
        self.selected.and_then(|i| self.results.get(i))
    }

    /// Switch form mode; entering edit mode seeds the form from the selection
    pub fn set_mode(&mut self, mode: FormMode) {
        self.mode = mode;
        self.seed_from_selection();
    }

    /// Apply the current form as the active filter.
    ///
    /// A new search always starts at the first page. Returns the query string
    /// to refetch with.
    pub fn apply_filter(&mut self) -> String {
        self.active_query = self.form.query_string();
        self.shown_page = 1;
        self.active_query.clone()
    }

    /// Navigate to a page, clamped into `[1, last_page]`
    pub fn goto_page(&mut self, page: usize) {
        self.shown_page = page.clamp(1, self.last_page);
    }

    pub fn next_page(&mut self) {
        self.goto_page(self.shown_page + 1);
    }

    pub fn previous_page(&mut self) {
        self.goto_page(self.shown_page.saturating_sub(1));
    }

    /// Toggle row selection; selecting seeds the edit form from the record
    pub fn select_row(&mut self, index: usize) {
        if index >= self.results.len() {
            return;
        }
        if self.selected == Some(index) {
            self.selected = None;
        } else {
            self.selected = Some(index);
            self.seed_from_selection();
        }
    }

    /// Ingest a successful search response.
    ///
    /// Server-reported pagination bounds overwrite client state; the row
    /// selection is cleared because indices refer to the old result set.
    pub fn apply_response(&mut self, page: Page) {
        self.results = page.data;
        self.last_page = page.last_page;
        self.per_page = page.per_page;
        self.selected = None;
    }

    /// Ordinal shown in the table's `#` column
    pub fn row_number(&self, index: usize) -> usize {
        (self.shown_page - 1) * self.per_page + index + 1
    }

    /// Whether the current mode's primary action may be submitted
    pub fn can_submit(&self) -> bool {
        match self.mode {
            FormMode::Search => true,
            FormMode::Add => self.form.can_submit(),
            FormMode::EditDelete => self.form.can_submit() && self.selected.is_some(),
        }
    }

    fn seed_from_selection(&mut self) {
        if self.mode != FormMode::EditDelete {
            return;
        }
        if let Some(book) = self.selected_book().cloned() {
            self.form.seed_from(&book);
        }
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}
