//! Chart projection for the comparison section
//!
//! Each selected hotel becomes one [`ChartRecord`]. Prices are synthetic:
//! a fresh random value is drawn on every projection, so two renders of the
//! same selection will not agree.

use rand::Rng;
use std::ops::Range;

use crate::compare::ComparisonSet;

/// Number of characters of the hotel name kept for chart labels
pub const CHART_NAME_LEN: usize = 10;

/// Range synthetic prices are drawn from
pub const PRICE_RANGE: Range<u32> = 100..400;

/// Rating shown for every hotel
pub const DEFAULT_RATING: u8 = 4;

/// Upper bound of the rating axis
pub const MAX_RATING: u8 = 5;

/// One bar group in the comparison chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRecord {
    pub name: String,
    pub price: u32,
    pub rating: u8,
}

/// First `CHART_NAME_LEN` characters of a name, without an ellipsis
pub fn truncate_name(name: &str) -> String {
    name.chars().take(CHART_NAME_LEN).collect()
}

/// Project the comparison set into chart records using `rng` for prices
pub fn project<R: Rng + ?Sized>(set: &ComparisonSet, rng: &mut R) -> Vec<ChartRecord> {
    set.iter()
        .map(|hotel| ChartRecord {
            name: truncate_name(&hotel.name),
            price: rng.gen_range(PRICE_RANGE),
            rating: DEFAULT_RATING,
        })
        .collect()
}

/// Project the comparison set using the thread-local RNG
pub fn project_random(set: &ComparisonSet) -> Vec<ChartRecord> {
    project(set, &mut rand::thread_rng())
}
