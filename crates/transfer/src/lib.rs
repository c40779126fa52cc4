//! Transfer rule & restriction engine.
//!
//! Decides, for every (building, material) pair in a simulated city, whether
//! the pair may participate in transfer matching at all, within what scope
//! (city-wide, district-limited, building-limited), and what the effective
//! material is for buildings whose inventory is instance-dependent. The
//! matching algorithm itself is an external collaborator: it asks the
//! [`rules::RuleCatalog`] which rule governs a pair, the
//! [`restrictions`] module whether a candidate partner is eligible, and
//! reports job timings back to [`match_stats::MatchStats`].
//!
//! Hosts add [`TransferPlugin`] and mirror their building facts into
//! [`buildings::BuildingDirectory`]; everything else is read through
//! ordinary resource handles.

use bevy::prelude::*;
use std::collections::BTreeMap;

pub mod buildings;
pub mod match_stats;
pub mod materials;
pub mod restrictions;
pub mod rules;


// ---------------------------------------------------------------------------
// Saveable trait + registry: the persistence collaborator's interface
// ---------------------------------------------------------------------------

/// A resource the host's save pipeline persists under a stable string key.
///
/// Implementations own their encoding, so a new persisted feature only has to
/// call `register::<T>()` from its plugin — the save pipeline itself never
/// learns individual types.
pub trait Saveable: Resource + Default + Send + Sync + 'static {
    /// Key in the save file's extension map. Stable across versions.
    const SAVE_KEY: &'static str;

    /// Encode, or `None` to skip saving (resource at its default state).
    fn save_to_bytes(&self) -> Option<Vec<u8>>;

    /// Decode. Must not fail: corrupt bytes fall back to the default.
    fn load_from_bytes(bytes: &[u8]) -> Self;
}

/// Decode via `bitcode`, logging and returning the default on failure.
pub fn decode_or_warn<T: bitcode::DecodeOwned + Default>(key: &str, bytes: &[u8]) -> T {
    match bitcode::decode(bytes) {
        Ok(value) => value,
        Err(error) => {
            warn!(
                "Saveable {}: failed to decode {} bytes, falling back to default: {}",
                key,
                bytes.len(),
                error
            );
            T::default()
        }
    }
}

pub type SaveFn = Box<dyn Fn(&World) -> Option<Vec<u8>> + Send + Sync>;
pub type LoadFn = Box<dyn Fn(&mut World, &[u8]) + Send + Sync>;
pub type ResetFn = Box<dyn Fn(&mut World) + Send + Sync>;

/// Type-erased save/load/reset operations for one registered resource.
pub struct SaveableEntry {
    pub key: String,
    pub save_fn: SaveFn,
    pub load_fn: LoadFn,
    pub reset_fn: ResetFn,
}

/// All resources registered for persistence, in registration order.
#[derive(Resource, Default)]
pub struct SaveableRegistry {
    pub entries: Vec<SaveableEntry>,
}

impl SaveableRegistry {
    /// Register a `Saveable` resource type.
    ///
    /// A duplicate key would silently shadow another feature's data, so it is
    /// rejected with a warning (and a panic in debug builds).
    pub fn register<T: Saveable>(&mut self) {
        let key = T::SAVE_KEY.to_string();
        if self.entries.iter().any(|entry| entry.key == key) {
            warn!("SaveableRegistry: duplicate key '{}', ignoring", key);
            debug_assert!(false, "SaveableRegistry: duplicate key '{}'", key);
            return;
        }
        self.entries.push(SaveableEntry {
            key,
            save_fn: Box::new(|world: &World| {
                world.get_resource::<T>().and_then(|r| r.save_to_bytes())
            }),
            load_fn: Box::new(|world: &mut World, bytes: &[u8]| {
                world.insert_resource(T::load_from_bytes(bytes));
            }),
            reset_fn: Box::new(|world: &mut World| {
                world.insert_resource(T::default());
            }),
        });
    }

    /// Encode every registered resource that has state worth saving.
    pub fn save_all(&self, world: &World) -> BTreeMap<String, Vec<u8>> {
        let mut extensions = BTreeMap::new();
        for entry in &self.entries {
            if let Some(bytes) = (entry.save_fn)(world) {
                extensions.insert(entry.key.clone(), bytes);
            }
        }
        extensions
    }

    /// Restore registered resources from an extension map. Resources whose
    /// key is absent keep their current (default) state.
    pub fn load_all(&self, world: &mut World, extensions: &BTreeMap<String, Vec<u8>>) {
        for entry in &self.entries {
            if let Some(bytes) = extensions.get(&entry.key) {
                (entry.load_fn)(world, bytes);
            }
        }
    }

    /// Reset every registered resource to its default (new-game).
    pub fn reset_all(&self, world: &mut World) {
        for entry in &self.entries {
            (entry.reset_fn)(world);
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level plugin
// ---------------------------------------------------------------------------

pub struct TransferPlugin;

impl Plugin for TransferPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<buildings::BuildingDirectory>()
            .add_event::<buildings::BuildingRemovedEvent>();

        app.add_plugins((
            rules::RulesPlugin,
            restrictions::RestrictionsPlugin,
            match_stats::MatchStatsPlugin,
        ));
    }
}
