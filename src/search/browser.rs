// src/search/browser.rs

use crate::catalog::{CatalogError, CatalogService};
use crate::domain::{FilterCriteria, FilterProfile, Property, ValidationErrors};
use crate::search::dispatcher::{self, PendingSearch};
use crate::search::reconciler::{Action, Display, Outcome, Reconciler};
use crate::search::store::ListingStore;
use crate::voice::{capture_transcript, SpeechRecognizer, VoiceError};
use std::sync::{Arc, Mutex, MutexGuard};

/// The listing-browser component: catalog, last entered filters, and the
/// reconciled result view. All mutation goes through [`Reconciler::apply`].
#[derive(Debug, Default)]
pub struct ListingBrowser {
    profile: FilterProfile,
    store: ListingStore,
    reconciler: Reconciler,
    criteria: FilterCriteria,
    errors: ValidationErrors,
}

impl ListingBrowser {
    pub fn new(profile: FilterProfile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }

    pub fn mount(&mut self, service: &dyn CatalogService) {
        self.catalog_fetched(service.fetch_all());
    }

    /// Applies the outcome of the one-time catalog fetch.
    pub fn catalog_fetched(&mut self, result: Result<Vec<Property>, CatalogError>) {
        match result {
            Ok(catalog) => {
                tracing::info!(listings = catalog.len(), "catalog mounted");
                self.store.replace(catalog);
            }
            Err(error) => {
                self.reconciler.apply(Action::CatalogFailed(error));
            }
        }
    }

    /// Validates and tags a structured search. Validation errors are kept
    /// for inline display and returned; no request is prepared for them.
    pub fn begin_structured_search(
        &mut self,
        criteria: FilterCriteria,
    ) -> Result<PendingSearch, ValidationErrors> {
        self.criteria = criteria;
        let reconciler = &mut self.reconciler;
        let result = dispatcher::prepare_structured(&self.criteria, || reconciler.issue_ticket());
        self.errors = match &result {
            Ok(_) => ValidationErrors::default(),
            Err(errors) => errors.clone(),
        };
        result
    }

    /// Runs a structured search to completion on the calling thread.
    pub fn submit_structured_search(
        &mut self,
        criteria: FilterCriteria,
        service: &dyn CatalogService,
    ) -> Result<Outcome, ValidationErrors> {
        let pending = self.begin_structured_search(criteria)?;
        let action = dispatcher::run_structured(&pending, service);
        Ok(self.apply(action))
    }

    pub fn submit_text_search(&mut self, raw_query: &str) {
        let action = dispatcher::text_search(&self.store, raw_query);
        self.apply(action);
    }

    pub fn receive_transcript(&mut self, transcript: &str) {
        let action = dispatcher::transcript_search(&self.store, transcript);
        self.apply(action);
    }

    pub fn apply(&mut self, action: Action) -> Outcome {
        self.reconciler.apply(action)
    }

    pub fn display(&self) -> Display<'_> {
        self.reconciler.display(&self.store)
    }

    pub fn profile(&self) -> FilterProfile {
        self.profile
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn reconciler(&self) -> &Reconciler {
        &self.reconciler
    }

    pub fn reconciler_mut(&mut self) -> &mut Reconciler {
        &mut self.reconciler
    }
}

/// Handle shared by server workers. The lock is held only to read or apply
/// state, never across a remote request or a voice capture.
#[derive(Clone)]
pub struct SharedBrowser {
    inner: Arc<Mutex<ListingBrowser>>,
    catalog: Arc<dyn CatalogService>,
    speech: Arc<dyn SpeechRecognizer>,
}

impl SharedBrowser {
    pub fn new(
        browser: ListingBrowser,
        catalog: Arc<dyn CatalogService>,
        speech: Arc<dyn SpeechRecognizer>,
    ) -> Self {
        Self {
            inner: Arc::new(Mutex::new(browser)),
            catalog,
            speech,
        }
    }

    fn lock(&self) -> MutexGuard<'_, ListingBrowser> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn with<T>(&self, f: impl FnOnce(&mut ListingBrowser) -> T) -> T {
        f(&mut self.lock())
    }

    pub fn mount(&self) {
        let result = self.catalog.fetch_all();
        self.lock().catalog_fetched(result);
    }

    /// Structured search across threads. A response that resolves after a
    /// newer request was issued is discarded by the reconciler.
    pub fn structured_search(&self, criteria: FilterCriteria) -> Result<Outcome, ValidationErrors> {
        let pending = self.lock().begin_structured_search(criteria)?;
        let action = dispatcher::run_structured(&pending, self.catalog.as_ref());
        Ok(self.lock().apply(action))
    }

    pub fn text_search(&self, raw_query: &str) {
        self.lock().submit_text_search(raw_query);
    }

    pub fn voice_available(&self) -> bool {
        self.speech.is_available()
    }

    /// Runs one voice capture and feeds its transcript into text search.
    /// Failures become notices; the listening indicator is always cleared.
    pub fn voice_search(&self) -> Result<Option<String>, VoiceError> {
        let result = if self.lock().reconciler().is_listening() {
            Err(VoiceError::AlreadyListening)
        } else {
            capture_transcript(self.speech.as_ref(), |listening| {
                self.lock().apply(Action::ListeningChanged(listening));
            })
        };

        match &result {
            Ok(Some(transcript)) => self.lock().receive_transcript(transcript),
            Ok(None) => tracing::info!("voice capture ended without a transcript"),
            Err(error) => {
                self.lock().apply(Action::VoiceFailed(error.clone()));
            }
        }
        result
    }

    pub fn stop_voice_search(&self) {
        tracing::info!("voice capture stop requested");
        self.speech.stop();
    }
}
