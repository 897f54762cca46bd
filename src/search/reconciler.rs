// src/search/reconciler.rs

use crate::catalog::CatalogError;
use crate::domain::Property;
use crate::search::store::ListingStore;
use crate::voice::VoiceError;

/// Tag attached to every structured search request. Only the most recently
/// issued ticket may update the view.
pub type Ticket = u64;

/// What the result list currently represents. Exactly one interpretation is
/// live at a time; a new one replaces the old wholesale.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DisplayState {
    #[default]
    Initial,
    /// A text search with no constraint: the catalog as it stood then.
    ShowingCatalog(Vec<Property>),
    ShowingStructuredResult(Vec<Property>),
    ShowingTextResult(Vec<Property>),
}

/// Events that move the reconciler. Each is applied in one step.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    CatalogFailed(CatalogError),
    StructuredSearchCompleted {
        ticket: Ticket,
        listings: Vec<Property>,
    },
    StructuredSearchFailed {
        ticket: Ticket,
        error: CatalogError,
    },
    TextQueryChanged {
        query: String,
        listings: Vec<Property>,
    },
    TranscriptReceived {
        transcript: String,
        listings: Vec<Property>,
    },
    ListeningChanged(bool),
    VoiceFailed(VoiceError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// A structured response arrived for a ticket that is no longer current.
    Stale,
}

/// Blocking notices raised by failed actions, shown once then dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    FetchFailed,
    Voice(VoiceError),
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::FetchFailed => "Failed to fetch properties.",
            Notice::Voice(err) => err.user_message(),
        }
    }
}

/// What the presentation layer should draw.
#[derive(Debug, PartialEq)]
pub enum Display<'a> {
    Listings(&'a [Property]),
    NoResults,
}

/// Single writer over the displayed result set.
#[derive(Debug, Default)]
pub struct Reconciler {
    view: DisplayState,
    explicit_search_ran: bool,
    latest_ticket: Ticket,
    search_query: String,
    listening: bool,
    notices: Vec<Notice>,
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags a new structured request. Any earlier ticket becomes stale.
    pub fn issue_ticket(&mut self) -> Ticket {
        self.latest_ticket += 1;
        self.latest_ticket
    }

    pub fn apply(&mut self, action: Action) -> Outcome {
        match action {
            Action::CatalogFailed(error) => {
                tracing::warn!("catalog fetch failed: {error}");
                self.notices.push(Notice::FetchFailed);
            }
            Action::StructuredSearchCompleted { ticket, listings } => {
                if ticket != self.latest_ticket {
                    tracing::debug!(ticket, latest = self.latest_ticket, "discarding stale structured result");
                    return Outcome::Stale;
                }
                self.view = DisplayState::ShowingStructuredResult(listings);
                self.explicit_search_ran = true;
            }
            Action::StructuredSearchFailed { ticket, error } => {
                if ticket != self.latest_ticket {
                    tracing::debug!(ticket, "discarding stale structured failure: {error}");
                    return Outcome::Stale;
                }
                tracing::warn!(ticket, "structured search failed: {error}");
                self.notices.push(Notice::FetchFailed);
            }
            Action::TextQueryChanged { query, listings } => {
                self.view = if query.is_empty() {
                    DisplayState::ShowingCatalog(listings)
                } else {
                    DisplayState::ShowingTextResult(listings)
                };
                self.search_query = query;
            }
            Action::TranscriptReceived {
                transcript,
                listings,
            } => {
                self.view = DisplayState::ShowingTextResult(listings);
                self.search_query = transcript;
            }
            Action::ListeningChanged(listening) => {
                self.listening = listening;
            }
            Action::VoiceFailed(error) => {
                tracing::warn!("voice search failed: {error}");
                self.notices.push(Notice::Voice(error));
            }
        }
        Outcome::Applied
    }

    /// Resolves the current state into what should be drawn.
    ///
    /// An empty structured result always means "no results". An empty text
    /// result only does once a structured search has run; before that it
    /// falls back to the catalog.
    pub fn display<'a>(&'a self, store: &'a ListingStore) -> Display<'a> {
        match &self.view {
            DisplayState::Initial => Display::Listings(store.all()),
            DisplayState::ShowingStructuredResult(set) if set.is_empty() => Display::NoResults,
            DisplayState::ShowingCatalog(set) | DisplayState::ShowingTextResult(set)
                if set.is_empty() =>
            {
                if self.explicit_search_ran {
                    Display::NoResults
                } else {
                    Display::Listings(store.all())
                }
            }
            DisplayState::ShowingCatalog(set)
            | DisplayState::ShowingStructuredResult(set)
            | DisplayState::ShowingTextResult(set) => Display::Listings(set),
        }
    }

    pub fn view(&self) -> &DisplayState {
        &self.view
    }

    pub fn explicit_search_ran(&self) -> bool {
        self.explicit_search_ran
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
