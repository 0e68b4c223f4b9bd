//! Wizard Controller
//!
//! Linear four-stage authoring flow over one itinerary session:
//! Details → Day Planner → Pricing → Review. Forward navigation out of
//! Details requires a title and destination; backward navigation is always
//! allowed. Review is terminal, its only exits are back or materialize.

use log::info;

use crate::error::EngineError;
use crate::models::item::ItemDraft;
use crate::models::package::{FinalMarkup, TravelPackage};
use crate::models::trip::TripDetails;
use crate::services::item_store::ItinerarySession;
use crate::services::package_service::PackageService;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStage {
    Details,
    DayPlanner,
    Pricing,
    Review,
}

impl WizardStage {
    pub fn number(&self) -> u8 {
        match self {
            WizardStage::Details => 1,
            WizardStage::DayPlanner => 2,
            WizardStage::Pricing => 3,
            WizardStage::Review => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStage::Details => "Trip Details",
            WizardStage::DayPlanner => "Day Planner",
            WizardStage::Pricing => "Pricing",
            WizardStage::Review => "Review",
        }
    }

    fn next(&self) -> Option<WizardStage> {
        match self {
            WizardStage::Details => Some(WizardStage::DayPlanner),
            WizardStage::DayPlanner => Some(WizardStage::Pricing),
            WizardStage::Pricing => Some(WizardStage::Review),
            WizardStage::Review => None,
        }
    }

    fn previous(&self) -> Option<WizardStage> {
        match self {
            WizardStage::Details => None,
            WizardStage::DayPlanner => Some(WizardStage::Details),
            WizardStage::Pricing => Some(WizardStage::DayPlanner),
            WizardStage::Review => Some(WizardStage::Pricing),
        }
    }
}

pub struct WizardController {
    stage: WizardStage,
    pub session: ItinerarySession,
}

impl WizardController {
    /// Fresh authoring session, starting at Details with empty state.
    pub fn start() -> Self {
        Self {
            stage: WizardStage::Details,
            session: ItinerarySession::new(),
        }
    }

    /// Edit an existing saved package: state is populated wholesale and the
    /// session starts directly at the day planner.
    pub fn resume(details: TripDetails, drafts: Vec<ItemDraft>) -> Self {
        info!("resuming wizard for '{}' with saved items", details.title);
        Self {
            stage: WizardStage::DayPlanner,
            session: ItinerarySession::from_saved(details, drafts),
        }
    }

    pub fn stage(&self) -> WizardStage {
        self.stage
    }

    /// Advance one stage. Details → Day Planner is the only gated step:
    /// it requires a non-empty title and destination. Later steps are
    /// deliberately ungated, so a review with zero items is reachable.
    pub fn advance(&mut self) -> Result<WizardStage, EngineError> {
        if self.stage == WizardStage::Details {
            self.validate_details()?;
        }
        if let Some(next) = self.stage.next() {
            self.stage = next;
        }
        Ok(self.stage)
    }

    /// Step back one stage; no validation, no-op at Details.
    pub fn back(&mut self) -> WizardStage {
        if let Some(previous) = self.stage.previous() {
            self.stage = previous;
        }
        self.stage
    }

    /// Jump directly to an earlier stage. Forward jumps are rejected so the
    /// gate on Details cannot be skipped.
    pub fn jump_back(&mut self, stage: WizardStage) -> Result<WizardStage, EngineError> {
        if stage > self.stage {
            return Err(EngineError::Validation(
                "cannot jump forward past unvisited stages".to_string(),
            ));
        }
        self.stage = stage;
        Ok(self.stage)
    }

    /// Fold the session into a package document. Only valid at Review.
    pub fn materialize(&self, markup: FinalMarkup) -> Result<TravelPackage, EngineError> {
        if self.stage != WizardStage::Review {
            return Err(EngineError::Validation(
                "package can only be created from the review step".to_string(),
            ));
        }
        Ok(PackageService::materialize(&self.session, markup))
    }

    fn validate_details(&self) -> Result<(), EngineError> {
        let details = &self.session.details;
        if details.title.trim().is_empty() {
            return Err(EngineError::Validation("trip title is required".to_string()));
        }
        if details.destination.trim().is_empty() {
            return Err(EngineError::Validation("destination is required".to_string()));
        }
        Ok(())
    }
}
