// src/search/dispatcher.rs

use crate::catalog::CatalogService;
use crate::domain::{validate, FilterCriteria, FilterQuery, ValidationErrors};
use crate::search::matcher::{filter_catalog, normalize_query};
use crate::search::reconciler::{Action, Ticket};
use crate::search::store::ListingStore;

/// A validated structured search that has been tagged but not yet sent.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSearch {
    pub ticket: Ticket,
    pub query: FilterQuery,
}

/// Validates criteria and, only if they pass, tags a request for them.
/// Invalid criteria never get a ticket, so nothing is sent upstream.
pub fn prepare_structured<F>(
    criteria: &FilterCriteria,
    issue_ticket: F,
) -> Result<PendingSearch, ValidationErrors>
where
    F: FnOnce() -> Ticket,
{
    let errors = validate(criteria);
    if !errors.is_valid() {
        tracing::debug!(errors = errors.len(), "structured search rejected by validation");
        return Err(errors);
    }

    let pending = PendingSearch {
        ticket: issue_ticket(),
        query: FilterQuery::from_criteria(criteria),
    };
    tracing::info!(ticket = pending.ticket, params = ?pending.query.to_params(), "structured search issued");
    Ok(pending)
}

/// Sends one remote filter request. Transport errors come back as an action
/// so the reconciler decides what they mean.
pub fn run_structured(pending: &PendingSearch, service: &dyn CatalogService) -> Action {
    match service.fetch_filtered(&pending.query) {
        Ok(listings) => {
            tracing::info!(ticket = pending.ticket, results = listings.len(), "structured search completed");
            Action::StructuredSearchCompleted {
                ticket: pending.ticket,
                listings,
            }
        }
        Err(error) => Action::StructuredSearchFailed {
            ticket: pending.ticket,
            error,
        },
    }
}

/// Typed search. Always local; the catalog already in memory is the corpus.
pub fn text_search(store: &ListingStore, raw_query: &str) -> Action {
    let query = normalize_query(raw_query);
    let listings = filter_catalog(store.all(), &query);
    tracing::debug!(%query, results = listings.len(), "text search");
    Action::TextQueryChanged { query, listings }
}

/// Spoken search. The transcript is matched exactly like typed input.
pub fn transcript_search(store: &ListingStore, transcript: &str) -> Action {
    let transcript = normalize_query(transcript);
    let listings = filter_catalog(store.all(), &transcript);
    tracing::info!(%transcript, results = listings.len(), "voice search");
    Action::TranscriptReceived {
        transcript,
        listings,
    }
}
