//! The hand-authored rule table.
//!
//! One function per building category, executed unconditionally and exactly
//! once from [`RuleCatalog::build`]. Ids inside each category are stable
//! persistence keys — list order is display order, ids never move.

use std::collections::{HashMap, HashSet};

use crate::buildings::BuildingCategory;
use crate::materials::TransferMaterial::{self, *};

use super::types::{ReasonRule, RuleCatalog};

type CategoryRules = HashMap<BuildingCategory, Vec<ReasonRule>>;

const RAW_MATERIALS: &[TransferMaterial] = &[Oil, Grain, Ore, Logs];

const GENERIC_PRODUCTS: &[TransferMaterial] = &[Coal, Lumber, Petrol, Food];

const INTERMEDIATE_PRODUCTS: &[TransferMaterial] = &[
    PlanedTimber,
    Paper,
    Glass,
    Metals,
    Petroleum,
    Plastics,
    AnimalProducts,
    Flours,
];

impl RuleCatalog {
    /// Populate every category, then derive the capability sets in a single
    /// pass over all rules. Panics on an authoring bug (empty material list,
    /// or two rules of one category claiming the same material).
    pub fn build() -> Self {
        let mut rules = CategoryRules::new();

        // Education
        elementary_school(&mut rules);
        high_school(&mut rules);
        university(&mut rules);
        airport_terminals(&mut rules);

        // Services
        cemetery(&mut rules);
        hospital(&mut rules);
        medical_helicopter_depot(&mut rules);
        police_station(&mut rules);
        police_helicopter_depot(&mut rules);
        prison(&mut rules);
        bank(&mut rules);
        fire_station(&mut rules);
        fire_helicopter_depot(&mut rules);
        park_maintenance_depot(&mut rules);
        road_maintenance_depot(&mut rules);
        taxi_depot(&mut rules);
        taxi_stand(&mut rules);
        disaster_response_unit(&mut rules);
        snow_dump(&mut rules);

        // Garbage
        landfill(&mut rules);
        incineration_plant(&mut rules);
        recycling(&mut rules);
        waste_transfer(&mut rules);
        waste_processing(&mut rules);

        // Mail
        post_office(&mut rules);
        post_sorting_facility(&mut rules);

        // Goods production
        commercial(&mut rules);
        main_industry_building(&mut rules);
        extraction_facility(&mut rules);
        processing_facility(&mut rules);
        unique_factory(&mut rules);
        generic_extractor(&mut rules);
        generic_processing(&mut rules);
        generic_factory(&mut rules);

        // Fishing chain
        fish_farm(&mut rules);
        fish_harbor(&mut rules);
        fish_factory(&mut rules);
        fish_market(&mut rules);

        // Storage and city edge
        warehouses(&mut rules);
        outside_connection(&mut rules);

        // Power and shelters
        coal_power_plant(&mut rules);
        petrol_power_plant(&mut rules);
        boiler_station(&mut rules);
        disaster_shelter(&mut rules);
        pumping_service(&mut rules);

        let mut catalog = RuleCatalog {
            rules,
            district_materials: HashSet::new(),
            building_materials: HashSet::new(),
            distance_materials: HashSet::new(),
        };
        catalog.validate();
        catalog.derive_capability_sets();
        catalog
    }

    fn validate(&self) {
        for (category, list) in &self.rules {
            let mut claimed = HashSet::new();
            for rule in list {
                assert!(
                    !rule.materials.is_empty(),
                    "rule {:?} of {:?} has an empty material list",
                    rule.id,
                    category
                );
                for &material in &rule.materials {
                    assert!(
                        claimed.insert(material),
                        "{:?} is claimed by two rules of {:?}",
                        material,
                        category
                    );
                }
            }
        }
    }

    fn derive_capability_sets(&mut self) {
        for list in self.rules.values() {
            for rule in list {
                if rule.incoming_district || rule.outgoing_district {
                    self.district_materials.extend(rule.materials.iter().copied());
                }
                if rule.incoming_building || rule.outgoing_building {
                    self.building_materials.extend(rule.materials.iter().copied());
                }
                if rule.distance {
                    self.distance_materials.extend(rule.materials.iter().copied());
                }
            }
        }
    }
}

fn elementary_school(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::ElementarySchool,
        vec![ReasonRule::new(0, "reasonStudent1", &[Student1])
            .in_district()
            .with_distance()],
    );
}

fn high_school(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::HighSchool,
        vec![ReasonRule::new(0, "reasonStudent2", &[Student2])
            .in_district()
            .with_distance()],
    );
}

fn university(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::University,
        vec![ReasonRule::new(0, "reasonStudent3", &[Student3])
            .in_district()
            .with_distance()],
    );
}

// Both terminal categories share one list: same crime/garbage pickup flows.
fn airport_terminals(rules: &mut CategoryRules) {
    let list = vec![
        ReasonRule::new(0, "reasonCrime", &[Crime])
            .out_district()
            .out_building(),
        ReasonRule::new(1, "reasonGarbage", &[Garbage])
            .out_district()
            .out_building(),
    ];
    rules.insert(BuildingCategory::AirportMainTerminal, list.clone());
    rules.insert(BuildingCategory::AirportCargoTerminal, list);
}

fn cemetery(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::Cemetery,
        vec![
            ReasonRule::new(0, "reasonDead", &[Dead])
                .in_district()
                .with_distance(),
            ReasonRule::new(1, "reasonDeadMove", &[DeadMove])
                .in_district()
                .out_district()
                .in_building()
                .out_building()
                .with_distance(),
        ],
    );
}

fn hospital(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::Hospital,
        vec![
            ReasonRule::new(0, "reasonSick", &[Sick])
                .in_district()
                .with_distance(),
            // SickMove arrives from medical helicopters; no distance weighting.
            ReasonRule::new(1, "reasonSickMove", &[SickMove])
                .in_district()
                .in_building(),
        ],
    );
}

fn medical_helicopter_depot(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::MedicalHelicopterDepot,
        vec![
            // Sick2 requests a helicopter pickup.
            ReasonRule::new(0, "reasonSick", &[Sick2])
                .in_district()
                .with_distance(),
            // After pickup the helicopter looks for a hospital to hand off to.
            ReasonRule::new(1, "reasonSickMove", &[SickMove])
                .out_district()
                .out_building()
                .with_distance(),
        ],
    );
}

fn police_station(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::PoliceStation,
        vec![
            ReasonRule::new(0, "reasonCrime", &[Crime])
                .in_district()
                .in_building()
                .with_distance(),
            ReasonRule::new(1, "reasonCrimeMove", &[CriminalMove])
                .in_district()
                .out_district()
                .in_building()
                .out_building()
                .with_distance(),
        ],
    );
}

fn police_helicopter_depot(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::PoliceHelicopterDepot,
        vec![
            ReasonRule::new(0, "reasonCrime", &[Crime2])
                .in_district()
                .in_building()
                .with_distance(),
            ReasonRule::new(1, "reasonCrimeMove", &[CriminalMove])
                .in_district()
                .out_district()
                .in_building()
                .out_building()
                .with_distance(),
        ],
    );
}

fn prison(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::Prison,
        vec![ReasonRule::new(0, "reasonCrimeMove", &[CriminalMove])
            .in_district()
            .in_building()
            .with_distance()],
    );
}

fn bank(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::Bank,
        vec![ReasonRule::new(0, "reasonCash", &[Cash])
            .in_district()
            .in_building()
            .with_distance()],
    );
}

fn fire_station(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::FireStation,
        vec![ReasonRule::new(0, "reasonFire", &[Fire])
            .in_district()
            .in_building()
            .with_distance()],
    );
}

fn fire_helicopter_depot(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::FireHelicopterDepot,
        vec![
            ReasonRule::new(0, "reasonFire2", &[Fire2])
                .in_district()
                .in_building()
                .with_distance(),
            ReasonRule::new(1, "reasonForestFire", &[ForestFire])
                .in_district()
                .with_distance(),
        ],
    );
}

fn park_maintenance_depot(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::ParkMaintenanceDepot,
        vec![ReasonRule::new(0, "reasonParkMaintenance", &[ParkMaintenance])
            .out_district()
            .out_building()
            .with_distance()],
    );
}

fn road_maintenance_depot(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::RoadMaintenanceDepot,
        vec![ReasonRule::new(0, "reasonRoadMaintenance", &[RoadMaintenance])
            .out_district()
            .with_distance()],
    );
}

fn taxi_depot(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::TaxiDepot,
        vec![ReasonRule::new(0, "reasonTaxi", &[Taxi])
            .out_district()
            .with_distance()],
    );
}

fn taxi_stand(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::TaxiStand,
        vec![ReasonRule::new(0, "reasonTaxi", &[Taxi])
            .in_district()
            .in_building()
            .with_distance()],
    );
}

fn disaster_response_unit(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::DisasterResponseUnit,
        vec![
            // Trucks
            ReasonRule::new(0, "reasonCollapsed", &[Collapsed])
                .in_district()
                .in_building()
                .with_distance(),
            // Helicopters
            ReasonRule::new(1, "reasonCollapsed2", &[Collapsed2])
                .in_district()
                .in_building()
                .with_distance(),
        ],
    );
}

fn snow_dump(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::SnowDump,
        vec![
            ReasonRule::new(0, "reasonSnow", &[Snow])
                .in_district()
                .with_distance(),
            ReasonRule::new(1, "reasonSnowMove", &[SnowMove])
                .in_district()
                .out_district()
                .in_building()
                .out_building()
                .with_distance(),
        ],
    );
}

fn landfill(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::Landfill,
        vec![
            ReasonRule::new(0, "reasonGarbage", &[Garbage])
                .in_district()
                .in_building()
                .with_distance(),
            // Incoming passive from other dumps, outgoing active in empty mode.
            ReasonRule::new(1, "reasonGarbageMove", &[GarbageMove])
                .in_district()
                .out_district()
                .in_building()
                .out_building()
                .with_distance(),
            ReasonRule::new(2, "reasonGarbageTransfer", &[GarbageTransfer])
                .out_district()
                .out_building()
                .with_distance(),
        ],
    );
}

fn incineration_plant(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::IncinerationPlant,
        vec![
            ReasonRule::new(0, "reasonGarbage", &[Garbage])
                .in_district()
                .in_building()
                .with_distance(),
            ReasonRule::new(1, "reasonGarbageMove", &[GarbageMove])
                .in_district()
                .in_building(),
        ],
    );
}

fn recycling(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::Recycling,
        vec![
            ReasonRule::new(0, "reasonGarbage", &[Garbage])
                .in_district()
                .in_building()
                .with_distance(),
            ReasonRule::new(1, "reasonGarbageMove", &[GarbageMove])
                .in_district()
                .in_building(),
            ReasonRule::new(2, "reasonMaterialOut", &[Coal, Lumber, Petrol])
                .out_district()
                .out_building()
                .with_distance(),
        ],
    );
}

fn waste_transfer(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::WasteTransfer,
        vec![
            ReasonRule::new(0, "reasonGarbage", &[Garbage])
                .in_district()
                .in_building()
                .with_distance(),
            ReasonRule::new(1, "reasonGarbageMove", &[GarbageMove])
                .in_district()
                .out_district()
                .in_building()
                .out_building()
                .with_distance(),
            // Passive hand-off to waste processing; the processor drives it.
            ReasonRule::new(2, "reasonGarbageTransfer", &[GarbageTransfer])
                .out_district()
                .out_building(),
        ],
    );
}

fn waste_processing(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::WasteProcessing,
        vec![
            ReasonRule::new(0, "reasonGarbageTransfer", &[GarbageTransfer])
                .in_district()
                .in_building()
                .with_distance(),
            ReasonRule::new(1, "reasonMaterialOut", &[Coal, Lumber, Petrol])
                .out_district()
                .out_building()
                .with_distance(),
        ],
    );
}

fn post_office(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::PostOffice,
        vec![
            ReasonRule::new(0, "reasonMail", &[Mail])
                .in_district()
                .in_building()
                .with_distance(),
            ReasonRule::new(1, "reasonUnsortedMail", &[UnsortedMail])
                .out_district()
                .out_building()
                .with_distance()
                .with_export(),
            ReasonRule::new(2, "reasonSortedMail", &[SortedMail])
                .in_district()
                .in_building()
                .with_import(),
        ],
    );
}

fn post_sorting_facility(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::PostSortingFacility,
        vec![
            ReasonRule::new(0, "reasonUnsortedMail", &[UnsortedMail, OutgoingMail])
                .in_district()
                .in_building()
                .with_import()
                .with_export(),
            ReasonRule::new(1, "reasonSortedMail", &[SortedMail, IncomingMail])
                .out_district()
                .out_building()
                .with_distance()
                .with_import(),
        ],
    );
}

fn commercial(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::Commercial,
        vec![
            ReasonRule::new(0, "reasonIncomingMaterial1", &[Goods])
                .in_district()
                .in_building()
                .with_import(),
            ReasonRule::new(1, "reasonIncomingMaterial2", &[LuxuryProducts])
                .in_district()
                .in_building(),
        ],
    );
}

fn main_industry_building(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::MainIndustryBuilding,
        vec![
            ReasonRule::new(0, "reasonCrime", &[Crime])
                .out_district()
                .out_building(),
            ReasonRule::new(1, "reasonGarbage", &[Garbage])
                .out_district()
                .out_building(),
        ],
    );
}

fn extraction_facility(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::ExtractionFacility,
        vec![ReasonRule::new(0, "reasonRawMaterial", RAW_MATERIALS)
            .out_district()
            .out_building()
            .with_distance()
            .with_export()],
    );
}

fn processing_facility(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::ProcessingFacility,
        vec![
            ReasonRule::new(
                0,
                "reasonIncomingMaterial",
                &[RAW_MATERIALS, GENERIC_PRODUCTS].concat(),
            )
            .in_district()
            .in_building()
            .with_import(),
            ReasonRule::new(
                1,
                "reasonOutgoingMaterial",
                &[INTERMEDIATE_PRODUCTS, &[Goods]].concat(),
            )
            .out_district()
            .out_building()
            .with_distance()
            .with_export(),
        ],
    );
}

fn unique_factory(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::UniqueFactory,
        vec![
            // Rule 0 must stay first: it is the only rule a vehicle-less
            // factory keeps (it can still receive, it cannot dispatch).
            ReasonRule::new(
                0,
                "reasonIncomingMaterial",
                &[&[Grain][..], INTERMEDIATE_PRODUCTS].concat(),
            )
            .in_district()
            .in_building(),
            ReasonRule::new(1, "reasonOutgoingMaterial", &[LuxuryProducts])
                .out_district()
                .out_building()
                .with_distance()
                .with_export(),
        ],
    );
}

fn generic_extractor(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::GenericExtractor,
        vec![ReasonRule::new(0, "reasonOutgoingMaterial", RAW_MATERIALS)
            .out_district()
            .out_building()
            .with_distance()
            .with_export()],
    );
}

fn generic_processing(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::GenericProcessing,
        vec![
            ReasonRule::new(0, "reasonIncomingMaterial", RAW_MATERIALS)
                .in_district()
                .in_building()
                .with_distance()
                .with_import(),
            ReasonRule::new(1, "reasonOutgoingMaterial", GENERIC_PRODUCTS)
                .out_district()
                .out_building()
                .with_distance()
                .with_export(),
        ],
    );
}

fn generic_factory(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::GenericFactory,
        vec![
            ReasonRule::new(0, "reasonIncomingMaterial1", &[Lumber, Petrol, Food, Coal])
                .in_district()
                .in_building()
                .with_import(),
            // Id 1 was assigned to the factory output before this input rule
            // existed; list order is display order, ids stay stable.
            ReasonRule::new(2, "reasonIncomingMaterial2", INTERMEDIATE_PRODUCTS)
                .in_district()
                .in_building(),
            ReasonRule::new(1, "reasonOutgoingMaterial", &[Goods])
                .out_district()
                .out_building()
                .with_distance()
                .with_export(),
        ],
    );
}

fn fish_farm(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::FishFarm,
        vec![ReasonRule::new(0, "reasonOutgoingMaterial", &[Fish])
            .out_district()
            .out_building()
            .with_distance()
            .with_export()],
    );
}

fn fish_harbor(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::FishHarbor,
        vec![ReasonRule::new(0, "reasonOutgoingMaterial", &[Fish])
            .out_district()
            .out_building()
            .with_distance()
            .with_export()],
    );
}

fn fish_factory(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::FishFactory,
        vec![
            ReasonRule::new(0, "reasonIncomingMaterial", &[Fish])
                .in_district()
                .in_building()
                .with_distance()
                .with_import(),
            ReasonRule::new(1, "reasonOutgoingMaterial", &[Goods])
                .out_district()
                .out_building()
                .with_distance()
                .with_export(),
        ],
    );
}

fn fish_market(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::FishMarket,
        vec![ReasonRule::new(0, "reasonIncomingMaterial", &[Fish])
            .in_district()
            .in_building()
            .with_distance()
            .with_import()],
    );
}

// Road and cargo-ferry warehouses share one list; the resolver narrows it to
// the instance's stored material at query time.
fn warehouses(rules: &mut CategoryRules) {
    let list = vec![
        ReasonRule::new(
            0,
            "reasonWarehouse",
            &[INTERMEDIATE_PRODUCTS, &[LuxuryProducts, Fish]].concat(),
        )
        .in_district()
        .out_district()
        .in_building()
        .out_building()
        .with_distance()
        .with_export(),
        ReasonRule::new(
            1,
            "reasonWarehouse",
            &[&[Oil, Ore, Logs, Grain][..], GENERIC_PRODUCTS, &[Goods]].concat(),
        )
        .in_district()
        .out_district()
        .in_building()
        .out_building()
        .with_distance()
        .with_import()
        .with_export(),
    ];
    rules.insert(BuildingCategory::Warehouse, list.clone());
    rules.insert(BuildingCategory::CargoFerryWarehouse, list);
}

// The catch-all at the city edge: every tradeable material, import and
// export capable, with no district/building/distance dimension.
fn outside_connection(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::OutsideConnection,
        vec![
            ReasonRule::new(
                0,
                "reasonGoods",
                &[
                    &[Oil, Ore, Logs, Grain, Goods][..],
                    GENERIC_PRODUCTS,
                    INTERMEDIATE_PRODUCTS,
                    &[LuxuryProducts, Fish],
                ]
                .concat(),
            )
            .with_import()
            .with_export(),
            ReasonRule::new(
                1,
                "reasonMail",
                &[SortedMail, IncomingMail, UnsortedMail, OutgoingMail],
            )
            .with_import()
            .with_export(),
        ],
    );
}

fn coal_power_plant(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::CoalPowerPlant,
        vec![ReasonRule::new(0, "reasonIncomingMaterial", &[Coal])
            .in_district()
            .in_building()
            .with_import()],
    );
}

fn petrol_power_plant(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::PetrolPowerPlant,
        vec![ReasonRule::new(0, "reasonIncomingMaterial", &[Petrol])
            .in_district()
            .in_building()
            .with_import()],
    );
}

fn boiler_station(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::BoilerStation,
        vec![ReasonRule::new(0, "reasonIncomingMaterial", &[Petrol])
            .in_district()
            .in_building()
            .with_import()],
    );
}

fn disaster_shelter(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::DisasterShelter,
        vec![ReasonRule::new(0, "reasonIncomingMaterial", &[Goods])
            .in_district()
            .in_building()
            .with_import()],
    );
}

fn pumping_service(rules: &mut CategoryRules) {
    rules.insert(
        BuildingCategory::PumpingService,
        vec![ReasonRule::new(0, "reasonFloodWater", &[FloodWater])
            .in_district()
            .with_distance()],
    );
}
