use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::IdeafyError;
use crate::models::{
    ExecutiveOverview, Financials, IdeaSubmission, MarketCompetition, ProductValidation,
    Recommendations, StartupReport,
};
use super::tabs::Tab;

/// Where the viewer is in its fetch lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerPhase {
    /// No idea was supplied, so nothing will be fetched.
    NoIdea,
    /// A request to the report service is in flight.
    Loading,
    Loaded {
        report: StartupReport,
        raw: Value,
        elapsed_ms: u64,
    },
    Failed {
        message: String,
    },
}

/// The single section handed to a tab's renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SectionView<'a> {
    ExecutiveOverview(Option<&'a ExecutiveOverview>),
    MarketCompetition(Option<&'a MarketCompetition>),
    ProductValidation(Option<&'a ProductValidation>),
    Financials(Option<&'a Financials>),
    Recommendations(Option<&'a Recommendations>),
    BusinessTerms,
}

impl<'a> SectionView<'a> {
    /// Borrow exactly the section that belongs to `tab`.
    pub fn select(report: &'a StartupReport, tab: Tab) -> Self {
        match tab {
            Tab::ExecutiveOverview => Self::ExecutiveOverview(report.executive_overview.as_ref()),
            Tab::MarketCompetition => Self::MarketCompetition(report.market_competition.as_ref()),
            Tab::ProductValidation => Self::ProductValidation(report.product_validation.as_ref()),
            Tab::Financials => Self::Financials(report.financials.as_ref()),
            Tab::Recommendations => Self::Recommendations(report.recommendations.as_ref()),
            Tab::BusinessTerms => Self::BusinessTerms,
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            Self::ExecutiveOverview(_) => Tab::ExecutiveOverview,
            Self::MarketCompetition(_) => Tab::MarketCompetition,
            Self::ProductValidation(_) => Tab::ProductValidation,
            Self::Financials(_) => Tab::Financials,
            Self::Recommendations(_) => Tab::Recommendations,
            Self::BusinessTerms => Tab::BusinessTerms,
        }
    }
}

/// Client-side state of one report viewing session.
#[derive(Debug, Clone)]
pub struct ViewerState {
    idea: Option<IdeaSubmission>,
    phase: ViewerPhase,
    selected: Tab,
    fetches: u32,
}

impl ViewerState {
    pub fn new(idea: Option<IdeaSubmission>) -> Self {
        Self {
            idea,
            phase: ViewerPhase::NoIdea,
            selected: Tab::default(),
            fetches: 0,
        }
    }

    /// Enter `Loading` and hand back the idea to submit. Returns `None`, and
    /// stays in `NoIdea`, when there is nothing to submit. Calling this again
    /// after a load is how a report is regenerated.
    pub fn begin_fetch(&mut self) -> Option<IdeaSubmission> {
        let idea = self.idea.clone()?;
        self.phase = ViewerPhase::Loading;
        self.fetches += 1;
        debug!(attempt = self.fetches, business = %idea.business_name, "Fetching report");
        Some(idea)
    }

    /// Record the outcome of the request started by [`ViewerState::begin_fetch`].
    pub fn finish_fetch(&mut self, result: Result<Value, IdeafyError>, elapsed_ms: u64) {
        match result {
            Ok(raw) => self.load(raw, elapsed_ms),
            Err(e) => self.fail(e.to_string()),
        }
    }

    /// Store a successful reply. Replies that are not report objects fail instead.
    pub fn load(&mut self, raw: Value, elapsed_ms: u64) {
        if !self.expecting_result() {
            return;
        }
        match StartupReport::from_value(&raw) {
            Ok(report) => {
                self.selected = Tab::default();
                self.phase = ViewerPhase::Loaded { report, raw, elapsed_ms };
            }
            Err(e) => self.fail(e.to_string()),
        }
    }

    pub fn fail(&mut self, message: String) {
        if !self.expecting_result() {
            return;
        }
        warn!(error = %message, "Report fetch failed");
        self.phase = ViewerPhase::Failed { message };
    }

    fn expecting_result(&self) -> bool {
        if self.phase != ViewerPhase::Loading {
            warn!("Ignoring fetch result received outside of Loading");
            return false;
        }
        true
    }

    pub fn phase(&self) -> &ViewerPhase {
        &self.phase
    }

    pub fn idea(&self) -> Option<&IdeaSubmission> {
        self.idea.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ViewerPhase::Loading)
    }

    pub fn report(&self) -> Option<&StartupReport> {
        match &self.phase {
            ViewerPhase::Loaded { report, .. } => Some(report),
            _ => None,
        }
    }

    pub fn raw(&self) -> Option<&Value> {
        match &self.phase {
            ViewerPhase::Loaded { raw, .. } => Some(raw),
            _ => None,
        }
    }

    pub fn selected(&self) -> Tab {
        self.selected
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.selected = tab;
    }

    /// Select a tab by name; unrecognized names select the Executive Overview.
    pub fn select_tab(&mut self, name: &str) -> Tab {
        self.selected = Tab::from_name(name);
        self.selected
    }

    /// The section for the selected tab, once a report is loaded.
    pub fn current_view(&self) -> Option<SectionView<'_>> {
        self.report().map(|report| SectionView::select(report, self.selected))
    }

    /// Sharing needs stored reports, which this service does not keep; the
    /// action only acknowledges the request.
    pub fn share(&self) -> String {
        match self.report() {
            Some(_) => "Sharing is not available: reports are not stored. Use /raw to copy the report JSON.".into(),
            None => "Nothing to share yet.".into(),
        }
    }

    pub fn fetch_count(&self) -> u32 {
        self.fetches
    }
}
