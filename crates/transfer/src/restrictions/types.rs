//! Per-building runtime overrides narrowing the catalog's default scope.

use bevy::prelude::*;
use bitcode::{Decode, Encode};
use std::collections::{HashMap, HashSet};

use crate::buildings::{BuildingId, DistrictId};
use crate::rules::{MatchDirection, RuleId};

/// Smallest configurable distance cap, metres.
pub const MIN_DISTANCE_LIMIT: u32 = 100;

/// Largest configurable distance cap, metres.
pub const MAX_DISTANCE_LIMIT: u32 = 20_000;

/// District filtering for one direction of one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Encode, Decode)]
pub enum DistrictScope {
    /// No district filtering.
    #[default]
    Any,
    /// Partners must share the source building's current district.
    Local,
    /// Partners must be in the named district.
    Reference(DistrictId),
}

/// Operator overrides for one rule on one building.
///
/// An empty allow-set means unrestricted (subject to district scope only) —
/// it never means "nothing allowed". `distance_limit` does not gate
/// eligibility; the matcher reads it to weight candidates by distance.
#[derive(Debug, Clone, Default, PartialEq, Encode, Decode)]
pub struct RestrictionSettings {
    pub incoming_allowed: HashSet<BuildingId>,
    pub outgoing_allowed: HashSet<BuildingId>,
    pub incoming_scope: DistrictScope,
    pub outgoing_scope: DistrictScope,
    pub distance_limit: Option<u32>,
}

impl RestrictionSettings {
    /// True while every field is still at its unrestricted default.
    pub fn is_default(&self) -> bool {
        self.incoming_allowed.is_empty()
            && self.outgoing_allowed.is_empty()
            && self.incoming_scope == DistrictScope::Any
            && self.outgoing_scope == DistrictScope::Any
            && self.distance_limit.is_none()
    }

    /// Flip membership of a partner in the incoming allow-set.
    pub fn toggle_incoming(&mut self, partner: BuildingId) {
        if !self.incoming_allowed.remove(&partner) {
            self.incoming_allowed.insert(partner);
        }
    }

    /// Flip membership of a partner in the outgoing allow-set.
    pub fn toggle_outgoing(&mut self, partner: BuildingId) {
        if !self.outgoing_allowed.remove(&partner) {
            self.outgoing_allowed.insert(partner);
        }
    }

    pub fn allowed(&self, direction: MatchDirection) -> &HashSet<BuildingId> {
        match direction {
            MatchDirection::Incoming => &self.incoming_allowed,
            MatchDirection::Outgoing => &self.outgoing_allowed,
        }
    }

    pub fn scope(&self, direction: MatchDirection) -> DistrictScope {
        match direction {
            MatchDirection::Incoming => self.incoming_scope,
            MatchDirection::Outgoing => self.outgoing_scope,
        }
    }
}

/// Resource holding every building's restriction settings, keyed by
/// (building, rule id).
///
/// Entries are created lazily on first write and pruned as soon as they fall
/// back to the default state, so an untouched city persists as an empty map.
#[derive(Resource, Debug, Clone, Default, Encode, Decode)]
pub struct BuildingRestrictions {
    pub settings: HashMap<BuildingId, HashMap<RuleId, RestrictionSettings>>,
}

impl BuildingRestrictions {
    /// Settings for one rule on one building, if any override exists.
    /// Absence means unrestricted.
    pub fn get(&self, building: BuildingId, rule: RuleId) -> Option<&RestrictionSettings> {
        self.settings
            .get(&building)
            .and_then(|rules| rules.get(&rule))
    }

    /// Settings for one rule on one building, created at the unrestricted
    /// default on first access.
    pub fn get_or_create_mut(
        &mut self,
        building: BuildingId,
        rule: RuleId,
    ) -> &mut RestrictionSettings {
        self.settings
            .entry(building)
            .or_default()
            .entry(rule)
            .or_default()
    }

    /// Replace the stored settings for one rule on one building. Default
    /// settings are pruned rather than stored.
    pub fn set(&mut self, building: BuildingId, rule: RuleId, settings: RestrictionSettings) {
        if settings.is_default() {
            self.clear(building, rule);
        } else {
            *self.get_or_create_mut(building, rule) = settings;
        }
    }

    pub fn toggle_incoming(&mut self, building: BuildingId, rule: RuleId, partner: BuildingId) {
        self.get_or_create_mut(building, rule).toggle_incoming(partner);
        self.prune(building, rule);
    }

    pub fn toggle_outgoing(&mut self, building: BuildingId, rule: RuleId, partner: BuildingId) {
        self.get_or_create_mut(building, rule).toggle_outgoing(partner);
        self.prune(building, rule);
    }

    pub fn set_incoming_scope(&mut self, building: BuildingId, rule: RuleId, scope: DistrictScope) {
        self.get_or_create_mut(building, rule).incoming_scope = scope;
        self.prune(building, rule);
    }

    pub fn set_outgoing_scope(&mut self, building: BuildingId, rule: RuleId, scope: DistrictScope) {
        self.get_or_create_mut(building, rule).outgoing_scope = scope;
        self.prune(building, rule);
    }

    /// Set or clear the distance cap for one rule, clamped to the
    /// configurable range.
    pub fn set_distance_limit(&mut self, building: BuildingId, rule: RuleId, limit: Option<u32>) {
        self.get_or_create_mut(building, rule).distance_limit =
            limit.map(|metres| metres.clamp(MIN_DISTANCE_LIMIT, MAX_DISTANCE_LIMIT));
        self.prune(building, rule);
    }

    /// Drop every override owned by a building that left the simulation.
    pub fn remove_building(&mut self, building: BuildingId) {
        self.settings.remove(&building);
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    fn clear(&mut self, building: BuildingId, rule: RuleId) {
        if let Some(rules) = self.settings.get_mut(&building) {
            rules.remove(&rule);
            if rules.is_empty() {
                self.settings.remove(&building);
            }
        }
    }

    fn prune(&mut self, building: BuildingId, rule: RuleId) {
        if self
            .get(building, rule)
            .map(|settings| settings.is_default())
            .unwrap_or(false)
        {
            self.clear(building, rule);
        }
    }
}

/// Operator toggled a partner in a building's incoming allow-set.
#[derive(Event)]
pub struct ToggleIncomingBuildingEvent {
    pub building: BuildingId,
    pub rule: RuleId,
    pub partner: BuildingId,
}

/// Operator toggled a partner in a building's outgoing allow-set.
#[derive(Event)]
pub struct ToggleOutgoingBuildingEvent {
    pub building: BuildingId,
    pub rule: RuleId,
    pub partner: BuildingId,
}

/// Operator changed the district scope for one direction of one rule.
#[derive(Event)]
pub struct SetDistrictScopeEvent {
    pub building: BuildingId,
    pub rule: RuleId,
    pub direction: MatchDirection,
    pub scope: DistrictScope,
}
