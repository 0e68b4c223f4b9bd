//! Package Materializer
//!
//! Folds a finished authoring session into the persistable package
//! document: trip metadata, one descriptive text block per day, and a
//! single headline retail price. The headline price is an independent
//! markup over aggregate net cost and is intentionally not the pricing
//! screen's grand total.

use chrono::Utc;
use log::info;
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::package::{FinalMarkup, PackageDay, TravelPackage};
use crate::services::item_store::ItinerarySession;
use crate::services::pricing_service::round2;

const LEISURE_DAY_TEXT: &str = "Day at leisure. Explore the destination at your own pace.";

pub struct PackageService;

impl PackageService {
    pub fn materialize(session: &ItinerarySession, markup: FinalMarkup) -> TravelPackage {
        let details = &session.details;
        let total_cost = session.total_cost();
        let final_price = match markup {
            FinalMarkup::Percent(pct) => round2(total_cost * (1.0 + pct / 100.0)),
            FinalMarkup::Flat(flat) => round2(total_cost + flat),
        };

        let days = session
            .day_numbers()
            .map(|day| PackageDay {
                day,
                description: Self::day_description(session, day),
            })
            .collect();

        info!(
            "materialized package '{}', {} days, final price {:.2}",
            details.title, details.duration, final_price
        );

        TravelPackage {
            id: Uuid::new_v4().to_string(),
            title: details.title.clone(),
            destination: details.destination.clone(),
            start_date: details.start_date,
            duration: details.duration,
            adults: details.adults,
            children: details.children,
            cover_image: details.cover_image.clone(),
            days,
            total_cost,
            final_price,
            created_at: Utc::now(),
        }
    }

    /// One line per item in display order: optional time, title, optional
    /// description. An empty day gets the fixed leisure placeholder.
    fn day_description(session: &ItinerarySession, day: u32) -> String {
        let items = session.items_for_day(day);
        if items.is_empty() {
            return LEISURE_DAY_TEXT.to_string();
        }

        items
            .iter()
            .map(|item| {
                let mut line = String::new();
                if let Some(time) = &item.time {
                    line.push_str(time);
                    line.push_str(" - ");
                }
                line.push_str(&item.title);
                if let Some(description) = &item.description {
                    line.push_str(": ");
                    line.push_str(description);
                }
                line
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

/// Outbound persistence seam. The engine never talks to storage itself;
/// a collaborator implements this and receives the finished document.
pub trait PackageSink {
    /// Persist the package, returning its storage identifier.
    fn save(&mut self, package: &TravelPackage) -> Result<String, EngineError>;
}

/// Sink that keeps packages in memory, for tests and previews.
#[derive(Debug, Default)]
pub struct InMemoryPackageSink {
    pub saved: Vec<TravelPackage>,
}

impl PackageSink for InMemoryPackageSink {
    fn save(&mut self, package: &TravelPackage) -> Result<String, EngineError> {
        self.saved.push(package.clone());
        Ok(package.id.clone())
    }
}
