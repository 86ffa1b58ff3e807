//! Classifier: availability tier and severity of a feature.
//!
//! The tier comes from the descriptor, or from its baseline dates compared
//! with the clock's date captured when the classifier is built. Severity is
//! always `Severity::for_status(tier)`.

use chrono::NaiveDate;
use serde::Serialize;

use webcompat_core::{BaselineStatus, Clock, Severity};

use crate::catalog::FeatureDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub status: BaselineStatus,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    today: NaiveDate,
}

impl Classifier {
    pub fn new(clock: &dyn Clock) -> Self {
        Self::on_date(clock.today())
    }

    pub fn on_date(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn classify(&self, feature: &FeatureDescriptor) -> Classification {
        let status = feature.availability.status_on(self.today);
        Classification {
            status,
            severity: Severity::for_status(status),
        }
    }
}
