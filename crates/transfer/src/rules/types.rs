//! Rule data model and the catalog's query surface.

use bevy::prelude::*;
use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::buildings::BuildingCategory;
use crate::materials::TransferMaterial;

/// Identifies a rule within its owning category's list.
///
/// Ids are a persistence contract: stored restriction settings reference
/// rules by (building, rule id), so an id, once assigned for a category, is
/// never reassigned to a different rule.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode,
)]
pub struct RuleId(pub u8);

/// Which side of a transfer a building is on for a given check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchDirection {
    Incoming,
    Outgoing,
}

/// One legal material flow for a building category.
///
/// `name_key` is an opaque localization key resolved by the host's string
/// tables; the catalog never stores display text.
#[derive(Debug, Clone, PartialEq)]
pub struct ReasonRule {
    pub id: RuleId,
    pub name_key: &'static str,
    /// Materials this rule governs. Non-empty; within one category no two
    /// rules claim the same material.
    pub materials: Vec<TransferMaterial>,
    pub incoming_district: bool,
    pub outgoing_district: bool,
    pub incoming_building: bool,
    pub outgoing_building: bool,
    pub distance: bool,
    pub import: bool,
    pub export: bool,
}

impl ReasonRule {
    pub fn new(id: u8, name_key: &'static str, materials: &[TransferMaterial]) -> Self {
        Self {
            id: RuleId(id),
            name_key,
            materials: materials.to_vec(),
            incoming_district: false,
            outgoing_district: false,
            incoming_building: false,
            outgoing_building: false,
            distance: false,
            import: false,
            export: false,
        }
    }

    pub fn in_district(mut self) -> Self {
        self.incoming_district = true;
        self
    }

    pub fn out_district(mut self) -> Self {
        self.outgoing_district = true;
        self
    }

    pub fn in_building(mut self) -> Self {
        self.incoming_building = true;
        self
    }

    pub fn out_building(mut self) -> Self {
        self.outgoing_building = true;
        self
    }

    pub fn with_distance(mut self) -> Self {
        self.distance = true;
        self
    }

    pub fn with_import(mut self) -> Self {
        self.import = true;
        self
    }

    pub fn with_export(mut self) -> Self {
        self.export = true;
        self
    }

    pub fn has_material(&self, material: TransferMaterial) -> bool {
        self.materials.contains(&material)
    }

    /// District-scope capability for one direction.
    pub fn district_capable(&self, direction: MatchDirection) -> bool {
        match direction {
            MatchDirection::Incoming => self.incoming_district,
            MatchDirection::Outgoing => self.outgoing_district,
        }
    }

    /// Building allow-list capability for one direction.
    pub fn building_capable(&self, direction: MatchDirection) -> bool {
        match direction {
            MatchDirection::Incoming => self.incoming_building,
            MatchDirection::Outgoing => self.outgoing_building,
        }
    }
}

/// The process-wide rule table: category to ordered rule list, plus three
/// capability sets derived once at build time.
///
/// Built exactly once in [`RulesPlugin`](super::RulesPlugin) startup and
/// never mutated afterwards; every consumer reads it through
/// `Res<RuleCatalog>`.
#[derive(Resource, Debug)]
pub struct RuleCatalog {
    pub(super) rules: HashMap<BuildingCategory, Vec<ReasonRule>>,
    pub(super) district_materials: HashSet<TransferMaterial>,
    pub(super) building_materials: HashSet<TransferMaterial>,
    pub(super) distance_materials: HashSet<TransferMaterial>,
}

impl RuleCatalog {
    /// Ordered rules for a category. Categories outside the catalog return
    /// an empty slice, never an error.
    pub fn rules_for(&self, category: BuildingCategory) -> &[ReasonRule] {
        self.rules.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The rule governing a (category, material) pair. By the build
    /// invariant at most one rule contains the material.
    pub fn find_rule(
        &self,
        category: BuildingCategory,
        material: TransferMaterial,
    ) -> Option<&ReasonRule> {
        self.rules_for(category)
            .iter()
            .find(|rule| rule.has_material(material))
    }

    /// Stable persistence key for a (category, material) pair.
    pub fn restriction_id(
        &self,
        category: BuildingCategory,
        material: TransferMaterial,
    ) -> Option<RuleId> {
        self.find_rule(category, material).map(|rule| rule.id)
    }

    pub fn has_incoming_district_rules(
        &self,
        category: BuildingCategory,
        material: TransferMaterial,
    ) -> bool {
        self.find_rule(category, material)
            .map(|rule| rule.incoming_district)
            .unwrap_or(false)
    }

    pub fn has_outgoing_district_rules(
        &self,
        category: BuildingCategory,
        material: TransferMaterial,
    ) -> bool {
        self.find_rule(category, material)
            .map(|rule| rule.outgoing_district)
            .unwrap_or(false)
    }

    pub fn has_distance_rules(
        &self,
        category: BuildingCategory,
        material: TransferMaterial,
    ) -> bool {
        self.find_rule(category, material)
            .map(|rule| rule.distance)
            .unwrap_or(false)
    }

    /// Whether any rule, in any category, carries a district dimension for
    /// this material.
    pub fn supports_district(&self, material: TransferMaterial) -> bool {
        self.district_materials.contains(&material)
    }

    /// Whether any rule, in any category, carries a building allow-list
    /// dimension for this material.
    pub fn supports_building_restriction(&self, material: TransferMaterial) -> bool {
        self.building_materials.contains(&material)
    }

    /// Whether any rule, in any category, carries a distance dimension for
    /// this material.
    pub fn supports_distance(&self, material: TransferMaterial) -> bool {
        self.distance_materials.contains(&material)
    }

    /// Categories registered in the catalog.
    pub fn categories(&self) -> impl Iterator<Item = BuildingCategory> + '_ {
        self.rules.keys().copied()
    }
}
