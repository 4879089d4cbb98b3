//! Process-wide holder for the loaded quality classifier.
//!
//! The classifier artifact is loaded at most once per slot. The outcome,
//! success or failure, is remembered so a broken artifact is not re-read on
//! every request. Initialisation and [`ClassifierSlot::reset`] take the write
//! lock; every other access only reads.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use crate::classifier::QualityClassifier;
use crate::error::{Error, Result};

/// Outcome of loading the classifier.
#[derive(Debug, Clone)]
pub enum ClassifierStatus {
    /// The classifier loaded and is ready for use.
    Ready(Arc<QualityClassifier>),
    /// Loading failed; classification stays disabled until the slot is reset.
    Unavailable(Error),
}

impl ClassifierStatus {
    /// The classifier, if it loaded.
    #[must_use]
    pub fn classifier(&self) -> Option<&Arc<QualityClassifier>> {
        match self {
            Self::Ready(classifier) => Some(classifier),
            Self::Unavailable(_) => None,
        }
    }

    /// The load error, if loading failed.
    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Ready(_) => None,
            Self::Unavailable(err) => Some(err),
        }
    }

    fn from_load(result: Result<QualityClassifier>, source: &str) -> Self {
        match result {
            Ok(classifier) => {
                tracing::info!(
                    source,
                    features = classifier.schema().len(),
                    "quality classifier loaded"
                );
                Self::Ready(Arc::new(classifier))
            }
            Err(err) => {
                tracing::warn!(source, error = %err, "quality classifier unavailable, labels will be Unknown");
                Self::Unavailable(err)
            }
        }
    }
}

/// A load-once slot for a classifier load outcome.
///
/// The first caller initialises the slot; every later caller, on any thread,
/// sees the same outcome until [`ClassifierSlot::reset`] empties it.
#[derive(Debug, Default)]
pub struct ClassifierSlot {
    cell: RwLock<Option<ClassifierStatus>>,
}

impl ClassifierSlot {
    /// An empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cell: RwLock::new(None),
        }
    }

    /// Load the artifact at `path` unless the slot is already initialised.
    ///
    /// Later calls return the first outcome even if `path` differs.
    pub fn get_or_load(&self, path: &Path) -> ClassifierStatus {
        self.get_or_insert_with(|| {
            ClassifierStatus::from_load(
                QualityClassifier::load(path),
                &path.display().to_string(),
            )
        })
    }

    /// Initialise the slot with `init` unless it is already initialised.
    pub fn get_or_init_with<F>(&self, init: F) -> ClassifierStatus
    where
        F: FnOnce() -> Result<QualityClassifier>,
    {
        self.get_or_insert_with(|| ClassifierStatus::from_load(init(), "in-memory"))
    }

    /// The current outcome, if the slot has been initialised.
    #[must_use]
    pub fn get(&self) -> Option<ClassifierStatus> {
        self.cell
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Empty the slot so the next access loads again.
    ///
    /// Returns the outcome that was held. Analyzers built before the reset
    /// keep the classifier they were given.
    pub fn reset(&self) -> Option<ClassifierStatus> {
        self.cell
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    fn get_or_insert_with(&self, load: impl FnOnce() -> ClassifierStatus) -> ClassifierStatus {
        if let Some(status) = self.get() {
            return status;
        }
        // Racing initialisers queue on the write lock; only the first loads.
        self.cell
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert_with(load)
            .clone()
    }
}

static SHARED: ClassifierSlot = ClassifierSlot::new();

/// The process-wide classifier slot used by [`crate::analyze()`].
///
/// Call `shared().reset()` to make the next analysis load the configured
/// artifact again.
#[must_use]
pub fn shared() -> &'static ClassifierSlot {
    &SHARED
}
