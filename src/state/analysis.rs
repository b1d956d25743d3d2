//! Hand-off of a finished analysis from the analysis page to the results
//! page.
//!
//! The analysed photo never needs to survive a reload, so the report
//! lives in a context signal rather than in the URL. Opening
//! `/dashboard/results` cold simply finds an empty slot and sends the
//! visitor back to start an analysis.

use leptos::prelude::*;

use crate::net::types::AnalysisOutcome;

/// A finished analysis: the photo that was analysed plus the outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisReport {
    /// Preview of the analysed photo, as a data URL for webcam captures
    /// or a backend URL for uploads. `None` when no preview exists.
    pub image: Option<String>,
    pub outcome: AnalysisOutcome,
}

/// Installs the report hand-off slot.
pub fn provide_analysis_report() {
    provide_context(RwSignal::new(None::<AnalysisReport>));
}

/// The report slot installed by [`provide_analysis_report`].
pub fn use_analysis_report() -> RwSignal<Option<AnalysisReport>> {
    expect_context::<RwSignal<Option<AnalysisReport>>>()
}
