//! Per-building restriction settings and the eligibility evaluator.
//!
//! The catalog defines what a category *may* restrict; this module stores
//! what an operator actually restricted on each building, and answers the
//! matcher's "is this partner eligible?" question. The load-bearing
//! convention throughout: an empty allow-set means unrestricted, never
//! "nothing allowed".

mod evaluator;
mod persistence;
mod plugin;
mod systems;
#[cfg(test)]
mod tests;
mod types;

pub use evaluator::is_eligible;
pub use plugin::RestrictionsPlugin;
pub use systems::{
    handle_building_removed, handle_set_district_scope, handle_toggle_incoming,
    handle_toggle_outgoing,
};
pub use types::{
    BuildingRestrictions, DistrictScope, RestrictionSettings, SetDistrictScopeEvent,
    ToggleIncomingBuildingEvent, ToggleOutgoingBuildingEvent, MAX_DISTANCE_LIMIT,
    MIN_DISTANCE_LIMIT,
};
