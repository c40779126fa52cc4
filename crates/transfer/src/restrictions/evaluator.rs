//! Partner eligibility checks consumed by the matching algorithm.

use crate::buildings::{BuildingDirectory, BuildingId};
use crate::rules::{MatchDirection, ReasonRule};

use super::types::{BuildingRestrictions, DistrictScope};

/// Whether `partner` is an eligible match target for `source` under `rule`,
/// in the given direction.
///
/// A rule with no capability for the direction imposes no restriction at all.
/// Otherwise both active conditions must hold: partner membership when the
/// allow-set is non-empty, and district agreement when a district scope is
/// configured. An empty allow-set is unrestricted, never "reject all".
/// Distance never gates eligibility here; the matcher weights by it
/// separately.
pub fn is_eligible(
    rule: &ReasonRule,
    restrictions: &BuildingRestrictions,
    directory: &BuildingDirectory,
    source: BuildingId,
    partner: BuildingId,
    direction: MatchDirection,
) -> bool {
    let building_capable = rule.building_capable(direction);
    let district_capable = rule.district_capable(direction);
    if !building_capable && !district_capable {
        return true;
    }

    let Some(settings) = restrictions.get(source, rule.id) else {
        // Never configured: unrestricted.
        return true;
    };

    if building_capable {
        let allowed = settings.allowed(direction);
        if !allowed.is_empty() && !allowed.contains(&partner) {
            return false;
        }
    }

    if district_capable {
        match settings.scope(direction) {
            DistrictScope::Any => {}
            DistrictScope::Local => {
                let source_district = directory.district(source);
                if source_district.is_none() || directory.district(partner) != source_district {
                    return false;
                }
            }
            DistrictScope::Reference(district) => {
                if directory.district(partner) != Some(district) {
                    return false;
                }
            }
        }
    }

    true
}
