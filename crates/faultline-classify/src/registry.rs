use std::collections::HashMap;

use faultline_core::{OperationalError, RawFault};

use crate::builtin;

/// Driver code signalling a unique-constraint violation (MongoDB E11000)
///
/// Kept for compatibility with the upstream drivers this layer fronts;
/// other stores can re-register `Discriminator::UniqueViolation`.
pub const UNIQUE_VIOLATION_CODE: i64 = 11_000;

/// Key used to select a classifier for a raw fault
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Discriminator {
    /// Exact match on the raw fault's `name`
    Name(String),
    /// Numeric-code match for unique-constraint violations, checked
    /// before any name lookup
    UniqueViolation,
}

impl Discriminator {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}

/// A pure transform from a raw fault to an operational error
///
/// Returning `None` declines the fault (missing or unusable fields) and
/// leaves it on the unexpected path.
pub type Classifier = Box<dyn Fn(&RawFault) -> Option<OperationalError> + Send + Sync>;

/// Lookup table from discriminators to classifiers
///
/// Configured once before serving begins and read-only afterwards.
pub struct ClassifierRegistry {
    by_name: HashMap<String, Classifier>,
    unique_violation: Option<Classifier>,
}

impl ClassifierRegistry {
    /// Registry with no classifiers at all
    pub fn empty() -> Self {
        Self {
            by_name: HashMap::new(),
            unique_violation: None,
        }
    }

    /// Registry preloaded with the built-in classifiers
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        builtin::install(&mut registry);
        registry
    }

    /// Add or replace the classifier for a discriminator
    ///
    /// Later registrations win, so callers can override built-ins.
    pub fn register(
        &mut self,
        discriminator: Discriminator,
        classifier: impl Fn(&RawFault) -> Option<OperationalError> + Send + Sync + 'static,
    ) {
        match discriminator {
            Discriminator::Name(name) => {
                self.by_name.insert(name, Box::new(classifier));
            }
            Discriminator::UniqueViolation => {
                self.unique_violation = Some(Box::new(classifier));
            }
        }
    }

    /// Select and run the classifier for a raw fault
    ///
    /// Unique-constraint codes dispatch before names, whatever the fault's
    /// `name` says. Unmatched or declined faults return `None`.
    pub fn classify(&self, fault: &RawFault) -> Option<OperationalError> {
        if fault.code == Some(UNIQUE_VIOLATION_CODE) {
            return self.unique_violation.as_ref().and_then(|classify| classify(fault));
        }

        self.by_name.get(&fault.name).and_then(|classify| classify(fault))
    }
}

impl Default for ClassifierRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
