//! Per-building refinement of a category's generic rule list.
//!
//! Most categories use their catalog list as-is. Warehouses only trade the
//! material they currently hold, and a unique factory without vehicles has no
//! dispatch capacity, so its outgoing rule is suppressed.

use crate::buildings::{BuildingCategory, BuildingDirectory, BuildingId};

use super::types::{ReasonRule, RuleCatalog};

/// The rules that actually apply to one building this tick.
///
/// Unknown buildings, and warehouses with no determinable stored material,
/// yield no rules: such a building neither offers nor requests anything.
pub fn effective_rules(
    catalog: &RuleCatalog,
    directory: &BuildingDirectory,
    building: BuildingId,
) -> Vec<ReasonRule> {
    let Some(record) = directory.get(building) else {
        return Vec::new();
    };
    let base = catalog.rules_for(record.category);

    match record.category {
        BuildingCategory::Warehouse | BuildingCategory::CargoFerryWarehouse => {
            match record.stored_material {
                Some(material) => base
                    .iter()
                    .find(|rule| rule.has_material(material))
                    .cloned()
                    .into_iter()
                    .collect(),
                None => Vec::new(),
            }
        }
        BuildingCategory::UniqueFactory if !directory.has_vehicles(building) => {
            base.first().cloned().into_iter().collect()
        }
        _ => base.to_vec(),
    }
}
