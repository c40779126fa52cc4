use crate::buildings::{
    BuildingCategory, BuildingDirectory, BuildingId, BuildingRecord, DistrictId,
};
use crate::materials::TransferMaterial;
use crate::restrictions::{
    is_eligible, BuildingRestrictions, DistrictScope, RestrictionSettings, MAX_DISTANCE_LIMIT,
    MIN_DISTANCE_LIMIT,
};
use crate::rules::{MatchDirection, ReasonRule, RuleId};
use crate::Saveable;

const RULE: RuleId = RuleId(0);

fn incoming_rule() -> ReasonRule {
    ReasonRule::new(0, "reasonIncomingMaterial", &[TransferMaterial::Goods])
        .in_district()
        .in_building()
        .with_distance()
}

fn directory_with_districts(entries: &[(u32, Option<u16>)]) -> BuildingDirectory {
    let mut directory = BuildingDirectory::default();
    for &(id, district) in entries {
        let mut record = BuildingRecord::new(BuildingCategory::Commercial);
        record.district = district.map(DistrictId);
        directory.insert(BuildingId(id), record);
    }
    directory
}

#[test]
fn test_toggle_is_an_involution() {
    let mut settings = RestrictionSettings::default();
    let partner = BuildingId(5);

    settings.toggle_incoming(partner);
    assert!(settings.incoming_allowed.contains(&partner));
    settings.toggle_incoming(partner);
    assert!(settings.incoming_allowed.is_empty());

    settings.toggle_outgoing(partner);
    assert!(settings.outgoing_allowed.contains(&partner));
    settings.toggle_outgoing(partner);
    assert!(settings.outgoing_allowed.is_empty());
}

#[test]
fn test_store_prunes_entries_that_return_to_default() {
    let mut store = BuildingRestrictions::default();
    let building = BuildingId(1);
    let partner = BuildingId(2);

    store.toggle_incoming(building, RULE, partner);
    assert!(store.get(building, RULE).is_some());

    store.toggle_incoming(building, RULE, partner);
    assert!(store.get(building, RULE).is_none());
    assert!(store.is_empty());
}

#[test]
fn test_set_replaces_and_prunes_defaults() {
    let mut store = BuildingRestrictions::default();
    let building = BuildingId(1);

    let mut settings = RestrictionSettings::default();
    settings.toggle_outgoing(BuildingId(9));
    store.set(building, RULE, settings.clone());
    assert_eq!(store.get(building, RULE), Some(&settings));

    store.set(building, RULE, RestrictionSettings::default());
    assert!(store.is_empty());
}

#[test]
fn test_get_or_create_mut_starts_unrestricted() {
    let mut store = BuildingRestrictions::default();
    assert!(store.get_or_create_mut(BuildingId(1), RULE).is_default());
}

#[test]
fn test_distance_limit_is_clamped() {
    let mut store = BuildingRestrictions::default();
    let building = BuildingId(1);

    store.set_distance_limit(building, RULE, Some(1));
    assert_eq!(
        store.get(building, RULE).unwrap().distance_limit,
        Some(MIN_DISTANCE_LIMIT)
    );

    store.set_distance_limit(building, RULE, Some(u32::MAX));
    assert_eq!(
        store.get(building, RULE).unwrap().distance_limit,
        Some(MAX_DISTANCE_LIMIT)
    );

    store.set_distance_limit(building, RULE, None);
    assert!(store.is_empty());
}

#[test]
fn test_remove_building_drops_all_rules() {
    let mut store = BuildingRestrictions::default();
    let building = BuildingId(1);
    store.toggle_incoming(building, RuleId(0), BuildingId(2));
    store.toggle_outgoing(building, RuleId(1), BuildingId(3));

    store.remove_building(building);
    assert!(store.is_empty());
}

#[test]
fn test_no_capability_means_always_eligible() {
    let store = BuildingRestrictions::default();
    let directory = directory_with_districts(&[(1, Some(0)), (2, Some(1))]);
    // Incoming-only rule: the outgoing direction has no restriction dimension.
    let rule = incoming_rule();

    assert!(is_eligible(
        &rule,
        &store,
        &directory,
        BuildingId(1),
        BuildingId(2),
        MatchDirection::Outgoing,
    ));
}

#[test]
fn test_no_capability_ignores_configured_allow_set() {
    let mut store = BuildingRestrictions::default();
    let directory = directory_with_districts(&[(1, Some(0)), (2, Some(1))]);
    let rule = incoming_rule();

    // An outgoing allow-set exists but the rule has no outgoing dimension.
    store.toggle_outgoing(BuildingId(1), rule.id, BuildingId(99));
    assert!(is_eligible(
        &rule,
        &store,
        &directory,
        BuildingId(1),
        BuildingId(2),
        MatchDirection::Outgoing,
    ));
}

#[test]
fn test_empty_allow_set_is_unrestricted() {
    let mut store = BuildingRestrictions::default();
    let directory = directory_with_districts(&[(1, Some(0)), (2, Some(0))]);
    let rule = incoming_rule();

    // Touch the entry without populating the allow-set.
    store.set_incoming_scope(BuildingId(1), rule.id, DistrictScope::Local);
    assert!(store
        .get(BuildingId(1), rule.id)
        .unwrap()
        .incoming_allowed
        .is_empty());

    assert!(is_eligible(
        &rule,
        &store,
        &directory,
        BuildingId(1),
        BuildingId(2),
        MatchDirection::Incoming,
    ));
}

#[test]
fn test_allow_set_membership_required_when_non_empty() {
    let mut store = BuildingRestrictions::default();
    let directory = directory_with_districts(&[(1, None), (2, None), (3, None)]);
    let rule = incoming_rule();

    store.toggle_incoming(BuildingId(1), rule.id, BuildingId(2));

    assert!(is_eligible(
        &rule,
        &store,
        &directory,
        BuildingId(1),
        BuildingId(2),
        MatchDirection::Incoming,
    ));
    assert!(!is_eligible(
        &rule,
        &store,
        &directory,
        BuildingId(1),
        BuildingId(3),
        MatchDirection::Incoming,
    ));
}

#[test]
fn test_local_district_scope() {
    let mut store = BuildingRestrictions::default();
    let directory = directory_with_districts(&[(1, Some(0)), (2, Some(0)), (3, Some(1))]);
    let rule = incoming_rule();

    store.set_incoming_scope(BuildingId(1), rule.id, DistrictScope::Local);

    assert!(is_eligible(
        &rule,
        &store,
        &directory,
        BuildingId(1),
        BuildingId(2),
        MatchDirection::Incoming,
    ));
    assert!(!is_eligible(
        &rule,
        &store,
        &directory,
        BuildingId(1),
        BuildingId(3),
        MatchDirection::Incoming,
    ));
}

#[test]
fn test_local_scope_fails_when_source_has_no_district() {
    let mut store = BuildingRestrictions::default();
    let directory = directory_with_districts(&[(1, None), (2, None)]);
    let rule = incoming_rule();

    store.set_incoming_scope(BuildingId(1), rule.id, DistrictScope::Local);

    assert!(!is_eligible(
        &rule,
        &store,
        &directory,
        BuildingId(1),
        BuildingId(2),
        MatchDirection::Incoming,
    ));
}

#[test]
fn test_reference_district_scope() {
    let mut store = BuildingRestrictions::default();
    let directory = directory_with_districts(&[(1, Some(0)), (2, Some(4)), (3, Some(5))]);
    let rule = incoming_rule();

    store.set_incoming_scope(
        BuildingId(1),
        rule.id,
        DistrictScope::Reference(DistrictId(4)),
    );

    assert!(is_eligible(
        &rule,
        &store,
        &directory,
        BuildingId(1),
        BuildingId(2),
        MatchDirection::Incoming,
    ));
    assert!(!is_eligible(
        &rule,
        &store,
        &directory,
        BuildingId(1),
        BuildingId(3),
        MatchDirection::Incoming,
    ));
}

#[test]
fn test_allow_set_and_district_scope_compose_with_and() {
    let mut store = BuildingRestrictions::default();
    let directory = directory_with_districts(&[(1, Some(0)), (2, Some(1)), (3, Some(0))]);
    let rule = incoming_rule();

    store.set_incoming_scope(BuildingId(1), rule.id, DistrictScope::Local);
    store.toggle_incoming(BuildingId(1), rule.id, BuildingId(2));

    // In the allow-set but outside the district: still ineligible.
    assert!(!is_eligible(
        &rule,
        &store,
        &directory,
        BuildingId(1),
        BuildingId(2),
        MatchDirection::Incoming,
    ));
    // Inside the district but not in the non-empty allow-set: ineligible.
    assert!(!is_eligible(
        &rule,
        &store,
        &directory,
        BuildingId(1),
        BuildingId(3),
        MatchDirection::Incoming,
    ));

    // Once the partner is in both, it becomes eligible.
    store.toggle_incoming(BuildingId(1), rule.id, BuildingId(3));
    assert!(is_eligible(
        &rule,
        &store,
        &directory,
        BuildingId(1),
        BuildingId(3),
        MatchDirection::Incoming,
    ));
}

#[test]
fn test_distance_limit_never_gates_eligibility() {
    let mut store = BuildingRestrictions::default();
    let directory = directory_with_districts(&[(1, None), (2, None)]);
    let rule = incoming_rule();

    store.set_distance_limit(BuildingId(1), rule.id, Some(500));

    assert!(is_eligible(
        &rule,
        &store,
        &directory,
        BuildingId(1),
        BuildingId(2),
        MatchDirection::Incoming,
    ));
}

#[test]
fn test_saveable_roundtrip() {
    let mut store = BuildingRestrictions::default();
    store.toggle_incoming(BuildingId(10), RuleId(0), BuildingId(20));
    store.set_outgoing_scope(BuildingId(10), RuleId(1), DistrictScope::Reference(DistrictId(2)));
    store.set_distance_limit(BuildingId(11), RuleId(0), Some(2_000));

    let bytes = store.save_to_bytes().unwrap();
    let loaded = BuildingRestrictions::load_from_bytes(&bytes);

    assert_eq!(
        loaded.get(BuildingId(10), RuleId(0)),
        store.get(BuildingId(10), RuleId(0))
    );
    assert_eq!(
        loaded.get(BuildingId(10), RuleId(1)).unwrap().outgoing_scope,
        DistrictScope::Reference(DistrictId(2))
    );
    assert_eq!(
        loaded.get(BuildingId(11), RuleId(0)).unwrap().distance_limit,
        Some(2_000)
    );
}

#[test]
fn test_saveable_empty_returns_none() {
    assert!(BuildingRestrictions::default().save_to_bytes().is_none());
}

#[test]
fn test_saveable_corrupt_bytes_fall_back_to_default() {
    let loaded = BuildingRestrictions::load_from_bytes(&[0xFF, 0x03, 0x7A]);
    assert!(loaded.is_empty());
}
