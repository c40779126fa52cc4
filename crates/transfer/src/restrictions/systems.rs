//! Event handlers applying operator actions to the restriction store.

use bevy::prelude::*;

use crate::buildings::BuildingRemovedEvent;
use crate::rules::MatchDirection;

use super::types::{
    BuildingRestrictions, SetDistrictScopeEvent, ToggleIncomingBuildingEvent,
    ToggleOutgoingBuildingEvent,
};

pub fn handle_toggle_incoming(
    mut events: EventReader<ToggleIncomingBuildingEvent>,
    mut restrictions: ResMut<BuildingRestrictions>,
) {
    for event in events.read() {
        restrictions.toggle_incoming(event.building, event.rule, event.partner);
    }
}

pub fn handle_toggle_outgoing(
    mut events: EventReader<ToggleOutgoingBuildingEvent>,
    mut restrictions: ResMut<BuildingRestrictions>,
) {
    for event in events.read() {
        restrictions.toggle_outgoing(event.building, event.rule, event.partner);
    }
}

pub fn handle_set_district_scope(
    mut events: EventReader<SetDistrictScopeEvent>,
    mut restrictions: ResMut<BuildingRestrictions>,
) {
    for event in events.read() {
        match event.direction {
            MatchDirection::Incoming => {
                restrictions.set_incoming_scope(event.building, event.rule, event.scope);
            }
            MatchDirection::Outgoing => {
                restrictions.set_outgoing_scope(event.building, event.rule, event.scope);
            }
        }
    }
}

/// Settings die with their building; stale entries would otherwise leak into
/// saves and could shadow a future building that reuses the id.
pub fn handle_building_removed(
    mut events: EventReader<BuildingRemovedEvent>,
    mut restrictions: ResMut<BuildingRestrictions>,
) {
    for event in events.read() {
        restrictions.remove_building(event.building);
    }
}
