//! List view state. The collection is fetched once and never mutated in place; every
//! visible window and checkbox state is derived from it by pure functions.

use crate::client::CountriesApi;
use crate::model::Country;
use crate::view::EditPanel;
use futures_util::future::join_all;
use std::collections::BTreeSet;
use std::sync::Arc;

pub const PAGE_SIZE: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Failed(String),
}

/// Half-open `[start, end)` slice of the collection shown on `page` (1-indexed).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub start: usize,
    pub end: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl PageWindow {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// e.g. `21-40 / 45`
    pub fn label(&self) -> String {
        format!("{}-{} / {}", self.start + 1, self.end, self.total)
    }
}

pub fn paginate(total: usize, page: usize, page_size: usize) -> PageWindow {
    let page = page.max(1);
    let page_size = page_size.max(1);
    PageWindow {
        page,
        start: ((page - 1) * page_size).min(total),
        end: (page * page_size).min(total),
        total,
        total_pages: total.div_ceil(page_size),
    }
}

/// Header checkbox state: compares the selection size against the current page's row
/// count only, so selections made on other pages make it read unchecked.
pub fn select_all_checked(selected: &BTreeSet<i32>, page_ids: &[i32]) -> bool {
    selected.len() == page_ids.len()
}

pub struct ListView {
    phase: Phase,
    countries: Arc<[Country]>,
    selected: BTreeSet<i32>,
    current_page: usize,
    current_country: Option<Country>,
    panel_open: bool,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView {
    pub fn new() -> Self {
        ListView {
            phase: Phase::Loading,
            countries: Arc::from(Vec::new()),
            selected: BTreeSet::new(),
            current_page: 1,
            current_country: None,
            panel_open: false,
        }
    }

    /// Fetch the collection. Only the first call while loading has any effect.
    pub async fn load(&mut self, api: &dyn CountriesApi) {
        if self.phase != Phase::Loading {
            return;
        }
        let result = api.list().await.map_err(|e| e.to_string());
        self.settle(result);
    }

    /// Leave `Loading` with the fetch outcome. Ignored once settled.
    pub fn settle(&mut self, result: Result<Vec<Country>, String>) {
        if self.phase != Phase::Loading {
            return;
        }
        match result {
            Ok(rows) => {
                self.countries = Arc::from(rows);
                self.phase = Phase::Ready;
            }
            Err(message) => {
                tracing::warn!(error = %message, "country list failed to load");
                self.phase = Phase::Failed(message);
            }
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn selected(&self) -> &BTreeSet<i32> {
        &self.selected
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn window(&self) -> PageWindow {
        paginate(self.countries.len(), self.current_page, PAGE_SIZE)
    }

    pub fn visible(&self) -> &[Country] {
        let w = self.window();
        &self.countries[w.start..w.end]
    }

    fn visible_ids(&self) -> Vec<i32> {
        self.visible().iter().map(|c| c.country_id).collect()
    }

    /// Jump to `page`, clamped to `[1, total_pages]`.
    pub fn go_to_page(&mut self, page: usize) {
        let last = self.window().total_pages.max(1);
        self.current_page = page.clamp(1, last);
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page + 1);
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.current_page.saturating_sub(1));
    }

    pub fn toggle(&mut self, country_id: i32) {
        if !self.selected.remove(&country_id) {
            self.selected.insert(country_id);
        }
    }

    pub fn select_all_checked(&self) -> bool {
        select_all_checked(&self.selected, &self.visible_ids())
    }

    /// Checking replaces the selection with the current page's ids; unchecking clears it.
    pub fn set_select_all(&mut self, checked: bool) {
        self.selected = if checked {
            self.visible_ids().into_iter().collect()
        } else {
            BTreeSet::new()
        };
    }

    /// Delete every selected id. All requests are in flight together and the batch must
    /// settle before the collection changes. Any failure leaves the collection untouched
    /// and fails the page, even though some deletes may already have succeeded upstream.
    /// Returns the number of rows removed from the view.
    pub async fn delete_selected(&mut self, api: &dyn CountriesApi) -> usize {
        if self.selected.is_empty() || self.phase != Phase::Ready {
            return 0;
        }
        let ids: Vec<i32> = self.selected.iter().copied().collect();
        let outcomes = join_all(ids.iter().map(|&id| api.delete(id))).await;

        if let Some(err) = outcomes.into_iter().find_map(Result::err) {
            tracing::warn!(error = %err, requested = ids.len(), "bulk delete failed");
            self.phase = Phase::Failed(err.to_string());
            return 0;
        }

        let before = self.countries.len();
        let kept: Vec<Country> = self
            .countries
            .iter()
            .filter(|c| !self.selected.contains(&c.country_id))
            .cloned()
            .collect();
        self.countries = Arc::from(kept);
        self.selected.clear();
        before - self.countries.len()
    }

    pub fn open_edit(&mut self, country: &Country) {
        self.current_country = Some(country.clone());
        self.panel_open = true;
    }

    pub fn open_create(&mut self) {
        self.current_country = None;
        self.panel_open = true;
    }

    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    pub fn current_country(&self) -> Option<&Country> {
        self.current_country.as_ref()
    }

    /// The side panel, when open.
    pub fn edit_panel(&self) -> Option<EditPanel> {
        self.panel_open
            .then(|| EditPanel::for_country(self.current_country.as_ref()))
    }
}
