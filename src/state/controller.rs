/// The gallery controller
///
/// Owns the loaded records, the view state, the modal and the load phase.
/// User input arrives as [`Intent`]s through [`GalleryController::dispatch`];
/// record loads go through [`GalleryController::begin_load`] and
/// [`GalleryController::finish_load`]. Nothing in here touches the UI toolkit,
/// so every transition is testable without a window.

use std::fmt;

use tokio_util::sync::CancellationToken;

use super::data::ImageRecord;
use super::modal::Modal;
use super::view::{
    compute_view, filter_records, normalize_query, total_pages, DerivedView, SortOrder, ViewState,
};
use crate::source::{RecordPage, RecordQuery};

/// Message shown when records cannot be loaded
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load memes. Please try again later.";

/// Named user actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Raw search box contents; normalized by the controller
    Search(String),
    SortChanged(SortOrder),
    NextPage,
    PrevPage,
    OpenCard(u64),
    CloseModal,
}

/// What the UI has to do after an intent was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    ScrollToTop,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Identifies one outstanding load
#[derive(Debug, Clone)]
pub struct LoadTicket {
    pub id: u64,
    pub cancel: CancellationToken,
}

pub struct GalleryController {
    records: Vec<ImageRecord>,
    state: ViewState,
    modal: Modal,
    phase: LoadPhase,
    rng: fastrand::Rng,
    latest_load: u64,
    in_flight: Option<CancellationToken>,
}

impl GalleryController {
    pub fn new() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }

    /// Build a controller whose random order is driven by `rng`
    pub fn with_rng(rng: fastrand::Rng) -> Self {
        Self {
            records: Vec::new(),
            state: ViewState::default(),
            modal: Modal::default(),
            phase: LoadPhase::default(),
            rng,
            latest_load: 0,
            in_flight: None,
        }
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    #[cfg(test)]
    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// The error message to display, if the last load failed
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// The current page as it should be rendered
    pub fn view(&self) -> DerivedView {
        compute_view(&self.records, &self.state)
    }

    fn filtered_pages(&self) -> usize {
        total_pages(filter_records(&self.records, &self.state.search_term).len())
    }

    /// Apply one user intent
    pub fn dispatch(&mut self, intent: Intent) -> Effect {
        match intent {
            Intent::Search(raw) => {
                let previous_page = self.state.current_page;
                self.state.search_term = normalize_query(&raw);
                self.state.current_page = 1;
                if self.state.sort_order == SortOrder::Random {
                    self.state.shuffle_seed = self.rng.u64(..);
                }
                tracing::debug!(term = %self.state.search_term, "search applied");
                if previous_page != 1 {
                    Effect::ScrollToTop
                } else {
                    Effect::None
                }
            }
            Intent::SortChanged(order) => {
                self.state.sort_order = order;
                self.state.shuffle_seed = self.rng.u64(..);
                tracing::debug!(order = order.as_str(), "sort order changed");
                Effect::None
            }
            Intent::NextPage => {
                if self.state.current_page < self.filtered_pages() {
                    self.state.current_page += 1;
                    Effect::ScrollToTop
                } else {
                    Effect::None
                }
            }
            Intent::PrevPage => {
                if self.state.current_page > 1 {
                    self.state.current_page -= 1;
                    Effect::ScrollToTop
                } else {
                    Effect::None
                }
            }
            Intent::OpenCard(id) => {
                match self.records.iter().find(|r| r.id == id) {
                    Some(record) => {
                        tracing::debug!(id, "modal opened");
                        self.modal.open(record.clone());
                    }
                    None => tracing::warn!(id, "ignoring open for unknown record"),
                }
                Effect::None
            }
            Intent::CloseModal => {
                if self.modal.close() {
                    tracing::debug!("modal closed");
                }
                Effect::None
            }
        }
    }

    /// Query sent to the source when (re)loading the whole collection.
    /// Filtering, sorting and paging happen locally, so every field is unset.
    pub fn load_query(&self) -> RecordQuery {
        RecordQuery::default()
    }

    /// Start a load, cancelling whichever load was still in flight
    pub fn begin_load(&mut self) -> LoadTicket {
        if let Some(previous) = self.in_flight.take() {
            previous.cancel();
        }
        self.latest_load += 1;
        let cancel = CancellationToken::new();
        self.in_flight = Some(cancel.clone());
        self.phase = LoadPhase::Loading;
        tracing::info!(load = self.latest_load, "loading records");
        LoadTicket {
            id: self.latest_load,
            cancel,
        }
    }

    /// Apply a load result. Returns false when the result was superseded.
    pub fn finish_load<E: fmt::Display>(
        &mut self,
        id: u64,
        result: std::result::Result<RecordPage, E>,
    ) -> bool {
        if id != self.latest_load {
            tracing::debug!(load = id, latest = self.latest_load, "dropping stale load result");
            return false;
        }
        self.in_flight = None;

        match result {
            Ok(page) => {
                tracing::info!(load = id, count = page.records.len(), "records loaded");
                self.records = page.records;
                self.phase = LoadPhase::Loaded;
                let last_page = self.filtered_pages().max(1);
                self.state.current_page = self.state.current_page.clamp(1, last_page);
            }
            Err(e) => {
                tracing::error!(load = id, error = %e, "failed to load records");
                self.phase = LoadPhase::Failed(LOAD_FAILURE_MESSAGE.to_string());
            }
        }
        true
    }
}

impl Default for GalleryController {
    fn default() -> Self {
        Self::new()
    }
}
