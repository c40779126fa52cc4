use bevy::prelude::*;

use super::systems::{
    handle_building_removed, handle_set_district_scope, handle_toggle_incoming,
    handle_toggle_outgoing,
};
use super::types::{
    BuildingRestrictions, SetDistrictScopeEvent, ToggleIncomingBuildingEvent,
    ToggleOutgoingBuildingEvent,
};

pub struct RestrictionsPlugin;

impl Plugin for RestrictionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BuildingRestrictions>()
            .add_event::<ToggleIncomingBuildingEvent>()
            .add_event::<ToggleOutgoingBuildingEvent>()
            .add_event::<SetDistrictScopeEvent>()
            .add_systems(
                Update,
                (
                    handle_toggle_incoming,
                    handle_toggle_outgoing,
                    handle_set_district_scope,
                    handle_building_removed,
                ),
            );

        // Register for save/load via the SaveableRegistry.
        app.init_resource::<crate::SaveableRegistry>();
        app.world_mut()
            .resource_mut::<crate::SaveableRegistry>()
            .register::<BuildingRestrictions>();
    }
}
