//! Read-only mirror of the host simulation's building facts.
//!
//! The engine never owns buildings. The host writes [`BuildingDirectory`]
//! (category, district, stored material, vehicle count, keyed by id) and the
//! engine only reads it. Despawns arrive as [`BuildingRemovedEvent`] so the
//! restriction store can drop the building's overrides.

use bevy::prelude::*;
use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::materials::TransferMaterial;

/// Identifies a building in the host simulation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode,
)]
pub struct BuildingId(pub u32);

/// Identifies an administrative district in the host simulation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode,
)]
pub struct DistrictId(pub u16);

/// Structural role of a building, fixed at creation by the host.
///
/// Every category the rule catalog registers. Categories outside this set do
/// not participate in matching at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingCategory {
    // Education
    ElementarySchool,
    HighSchool,
    University,
    // Airports
    AirportMainTerminal,
    AirportCargoTerminal,
    // Services
    Cemetery,
    Hospital,
    MedicalHelicopterDepot,
    PoliceStation,
    PoliceHelicopterDepot,
    Prison,
    Bank,
    FireStation,
    FireHelicopterDepot,
    ParkMaintenanceDepot,
    RoadMaintenanceDepot,
    TaxiDepot,
    TaxiStand,
    DisasterResponseUnit,
    SnowDump,
    // Garbage
    Landfill,
    IncinerationPlant,
    Recycling,
    WasteTransfer,
    WasteProcessing,
    // Mail
    PostOffice,
    PostSortingFacility,
    // Goods production
    Commercial,
    MainIndustryBuilding,
    ExtractionFacility,
    ProcessingFacility,
    UniqueFactory,
    GenericExtractor,
    GenericProcessing,
    GenericFactory,
    // Fishing chain
    FishFarm,
    FishHarbor,
    FishFactory,
    FishMarket,
    // Storage
    Warehouse,
    CargoFerryWarehouse,
    // City edge
    OutsideConnection,
    // Power and shelters
    CoalPowerPlant,
    PetrolPowerPlant,
    BoilerStation,
    DisasterShelter,
    PumpingService,
}

impl BuildingCategory {
    /// Storage categories whose effective material is whatever the instance
    /// currently holds, not anything the category alone determines.
    pub fn is_warehouse(self) -> bool {
        matches!(
            self,
            BuildingCategory::Warehouse | BuildingCategory::CargoFerryWarehouse
        )
    }

    pub fn is_garbage(self) -> bool {
        matches!(
            self,
            BuildingCategory::Landfill
                | BuildingCategory::IncinerationPlant
                | BuildingCategory::Recycling
                | BuildingCategory::WasteTransfer
                | BuildingCategory::WasteProcessing
        )
    }

    pub fn is_postal(self) -> bool {
        matches!(
            self,
            BuildingCategory::PostOffice | BuildingCategory::PostSortingFacility
        )
    }

    pub fn is_education(self) -> bool {
        matches!(
            self,
            BuildingCategory::ElementarySchool
                | BuildingCategory::HighSchool
                | BuildingCategory::University
        )
    }

    pub fn is_fishing(self) -> bool {
        matches!(
            self,
            BuildingCategory::FishFarm
                | BuildingCategory::FishHarbor
                | BuildingCategory::FishFactory
                | BuildingCategory::FishMarket
        )
    }
}

/// One building's matching-relevant facts, as last reported by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingRecord {
    pub category: BuildingCategory,
    /// District the building currently sits in, if any.
    pub district: Option<DistrictId>,
    /// Material currently held. Only meaningful for warehouse categories.
    pub stored_material: Option<TransferMaterial>,
    /// Vehicles the building currently owns (dispatch capacity).
    pub vehicle_count: u32,
}

impl BuildingRecord {
    pub fn new(category: BuildingCategory) -> Self {
        Self {
            category,
            district: None,
            stored_material: None,
            vehicle_count: 0,
        }
    }
}

/// Resource mapping building ids to their current facts.
///
/// Written by the host each time a building spawns, despawns, changes
/// district, or changes stored material; read by the catalog resolver and the
/// restriction evaluator.
#[derive(Resource, Default, Debug)]
pub struct BuildingDirectory {
    pub buildings: HashMap<BuildingId, BuildingRecord>,
}

impl BuildingDirectory {
    pub fn insert(&mut self, id: BuildingId, record: BuildingRecord) {
        self.buildings.insert(id, record);
    }

    pub fn remove(&mut self, id: BuildingId) {
        self.buildings.remove(&id);
    }

    pub fn get(&self, id: BuildingId) -> Option<&BuildingRecord> {
        self.buildings.get(&id)
    }

    pub fn category(&self, id: BuildingId) -> Option<BuildingCategory> {
        self.get(id).map(|r| r.category)
    }

    pub fn district(&self, id: BuildingId) -> Option<DistrictId> {
        self.get(id).and_then(|r| r.district)
    }

    pub fn stored_material(&self, id: BuildingId) -> Option<TransferMaterial> {
        self.get(id).and_then(|r| r.stored_material)
    }

    /// Whether the building currently owns any vehicles. Unknown buildings
    /// have no dispatch capacity.
    pub fn has_vehicles(&self, id: BuildingId) -> bool {
        self.get(id).map(|r| r.vehicle_count > 0).unwrap_or(false)
    }
}

/// Event fired by the host when a building leaves the simulation.
#[derive(Event)]
pub struct BuildingRemovedEvent {
    pub building: BuildingId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_lookups() {
        let mut directory = BuildingDirectory::default();
        let id = BuildingId(7);

        assert!(directory.get(id).is_none());
        assert_eq!(directory.category(id), None);
        assert!(!directory.has_vehicles(id));

        let mut record = BuildingRecord::new(BuildingCategory::Warehouse);
        record.district = Some(DistrictId(3));
        record.stored_material = Some(TransferMaterial::Coal);
        record.vehicle_count = 2;
        directory.insert(id, record);

        assert_eq!(directory.category(id), Some(BuildingCategory::Warehouse));
        assert_eq!(directory.district(id), Some(DistrictId(3)));
        assert_eq!(
            directory.stored_material(id),
            Some(TransferMaterial::Coal)
        );
        assert!(directory.has_vehicles(id));

        directory.remove(id);
        assert!(directory.get(id).is_none());
    }

    #[test]
    fn test_category_groups() {
        assert!(BuildingCategory::Warehouse.is_warehouse());
        assert!(BuildingCategory::CargoFerryWarehouse.is_warehouse());
        assert!(!BuildingCategory::UniqueFactory.is_warehouse());
        assert!(BuildingCategory::Landfill.is_garbage());
        assert!(BuildingCategory::PostOffice.is_postal());
        assert!(BuildingCategory::University.is_education());
        assert!(BuildingCategory::FishMarket.is_fishing());
    }
}
