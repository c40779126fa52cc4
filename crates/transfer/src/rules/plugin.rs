use bevy::prelude::*;

use super::types::RuleCatalog;

pub struct RulesPlugin;

impl Plugin for RulesPlugin {
    fn build(&self, app: &mut App) {
        // Built exactly once, here; nothing takes ResMut<RuleCatalog> so the
        // table is immutable for the rest of the process lifetime.
        app.insert_resource(RuleCatalog::build());
    }
}
