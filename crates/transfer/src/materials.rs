//! The closed set of materials a transfer can move.
//!
//! Raw ids are a stable wire/persistence contract: `as_raw`/`from_raw`
//! round-trip for every canonical variant, and the ids of materials that
//! predate the reserved extension block never change. Everything past the
//! boundary compares plain enum values — raw ids are resolved exactly once,
//! in [`TransferMaterial::from_raw`].

use serde::{Deserialize, Serialize};

/// First raw id of the block reserved for extension materials.
pub const EXTENSION_BLOCK_START: u8 = 120;

/// Last raw id of the block reserved for extension materials.
pub const EXTENSION_BLOCK_END: u8 = 127;

/// A resource or service category moved between buildings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TransferMaterial {
    // Garbage chain
    Garbage = 0,
    GarbageMove = 1,
    GarbageTransfer = 2,
    // Crime chain
    Crime = 3,
    CriminalMove = 4,
    Cash = 5,
    // Health chain
    Sick = 6,
    SickMove = 7,
    Dead = 8,
    DeadMove = 9,
    // Education tiers
    Student1 = 10,
    Student2 = 11,
    Student3 = 12,
    // Fire and disaster
    Fire = 13,
    Fire2 = 14,
    ForestFire = 15,
    Collapsed = 16,
    Collapsed2 = 17,
    Snow = 18,
    SnowMove = 19,
    FloodWater = 20,
    // Maintenance and transport services
    ParkMaintenance = 21,
    RoadMaintenance = 22,
    Taxi = 23,
    // Mail chain
    Mail = 24,
    UnsortedMail = 25,
    SortedMail = 26,
    IncomingMail = 27,
    OutgoingMail = 28,
    // Raw resources
    Oil = 29,
    Grain = 30,
    Ore = 31,
    Logs = 32,
    // Processed resources
    Coal = 33,
    Lumber = 34,
    Petrol = 35,
    Food = 36,
    Fish = 37,
    // Finished goods
    Goods = 38,
    LuxuryProducts = 39,
    // Intermediate products
    PlanedTimber = 40,
    Paper = 41,
    Glass = 42,
    Metals = 43,
    Petroleum = 44,
    Plastics = 45,
    AnimalProducts = 46,
    Flours = 47,
    // Extension block (helicopter service variants)
    Crime2 = 120,
    Sick2 = 121,
}

/// Raw ids older save data used for extension materials before the reserved
/// block was finalized. Each alias denotes the same logical material as its
/// canonical variant and must decode to it.
const LEGACY_ALIASES: &[(u8, TransferMaterial)] = &[
    (126, TransferMaterial::Crime2),
    (127, TransferMaterial::Sick2),
];

impl TransferMaterial {
    /// Every canonical material, in raw-id order.
    pub const ALL: &'static [TransferMaterial] = &[
        TransferMaterial::Garbage,
        TransferMaterial::GarbageMove,
        TransferMaterial::GarbageTransfer,
        TransferMaterial::Crime,
        TransferMaterial::CriminalMove,
        TransferMaterial::Cash,
        TransferMaterial::Sick,
        TransferMaterial::SickMove,
        TransferMaterial::Dead,
        TransferMaterial::DeadMove,
        TransferMaterial::Student1,
        TransferMaterial::Student2,
        TransferMaterial::Student3,
        TransferMaterial::Fire,
        TransferMaterial::Fire2,
        TransferMaterial::ForestFire,
        TransferMaterial::Collapsed,
        TransferMaterial::Collapsed2,
        TransferMaterial::Snow,
        TransferMaterial::SnowMove,
        TransferMaterial::FloodWater,
        TransferMaterial::ParkMaintenance,
        TransferMaterial::RoadMaintenance,
        TransferMaterial::Taxi,
        TransferMaterial::Mail,
        TransferMaterial::UnsortedMail,
        TransferMaterial::SortedMail,
        TransferMaterial::IncomingMail,
        TransferMaterial::OutgoingMail,
        TransferMaterial::Oil,
        TransferMaterial::Grain,
        TransferMaterial::Ore,
        TransferMaterial::Logs,
        TransferMaterial::Coal,
        TransferMaterial::Lumber,
        TransferMaterial::Petrol,
        TransferMaterial::Food,
        TransferMaterial::Fish,
        TransferMaterial::Goods,
        TransferMaterial::LuxuryProducts,
        TransferMaterial::PlanedTimber,
        TransferMaterial::Paper,
        TransferMaterial::Glass,
        TransferMaterial::Metals,
        TransferMaterial::Petroleum,
        TransferMaterial::Plastics,
        TransferMaterial::AnimalProducts,
        TransferMaterial::Flours,
        TransferMaterial::Crime2,
        TransferMaterial::Sick2,
    ];

    /// Stable raw id for persistence and diagnostics.
    pub fn as_raw(self) -> u8 {
        self as u8
    }

    /// Resolve a raw id to its canonical material.
    ///
    /// Legacy alias ids decode to the same variant as the canonical id, so
    /// callers never see two values for one logical material. Unknown ids
    /// return `None`.
    pub fn from_raw(raw: u8) -> Option<TransferMaterial> {
        if let Some(material) = TransferMaterial::ALL
            .iter()
            .find(|m| m.as_raw() == raw)
            .copied()
        {
            return Some(material);
        }
        LEGACY_ALIASES
            .iter()
            .find(|(alias, _)| *alias == raw)
            .map(|(_, material)| *material)
    }

    /// Whether this material lives in the reserved extension block.
    pub fn is_extension(self) -> bool {
        (EXTENSION_BLOCK_START..=EXTENSION_BLOCK_END).contains(&self.as_raw())
    }

    pub fn name(self) -> &'static str {
        match self {
            TransferMaterial::Garbage => "Garbage",
            TransferMaterial::GarbageMove => "Garbage Move",
            TransferMaterial::GarbageTransfer => "Garbage Transfer",
            TransferMaterial::Crime => "Crime",
            TransferMaterial::CriminalMove => "Criminal Move",
            TransferMaterial::Cash => "Cash",
            TransferMaterial::Sick => "Sick",
            TransferMaterial::SickMove => "Sick Move",
            TransferMaterial::Dead => "Dead",
            TransferMaterial::DeadMove => "Dead Move",
            TransferMaterial::Student1 => "Students (Elementary)",
            TransferMaterial::Student2 => "Students (High School)",
            TransferMaterial::Student3 => "Students (University)",
            TransferMaterial::Fire => "Fire",
            TransferMaterial::Fire2 => "Fire Helicopter",
            TransferMaterial::ForestFire => "Forest Fire",
            TransferMaterial::Collapsed => "Collapsed",
            TransferMaterial::Collapsed2 => "Collapsed (Helicopter)",
            TransferMaterial::Snow => "Snow",
            TransferMaterial::SnowMove => "Snow Move",
            TransferMaterial::FloodWater => "Flood Water",
            TransferMaterial::ParkMaintenance => "Park Maintenance",
            TransferMaterial::RoadMaintenance => "Road Maintenance",
            TransferMaterial::Taxi => "Taxi",
            TransferMaterial::Mail => "Mail",
            TransferMaterial::UnsortedMail => "Unsorted Mail",
            TransferMaterial::SortedMail => "Sorted Mail",
            TransferMaterial::IncomingMail => "Incoming Mail",
            TransferMaterial::OutgoingMail => "Outgoing Mail",
            TransferMaterial::Oil => "Oil",
            TransferMaterial::Grain => "Grain",
            TransferMaterial::Ore => "Ore",
            TransferMaterial::Logs => "Logs",
            TransferMaterial::Coal => "Coal",
            TransferMaterial::Lumber => "Lumber",
            TransferMaterial::Petrol => "Petrol",
            TransferMaterial::Food => "Food",
            TransferMaterial::Fish => "Fish",
            TransferMaterial::Goods => "Goods",
            TransferMaterial::LuxuryProducts => "Luxury Products",
            TransferMaterial::PlanedTimber => "Planed Timber",
            TransferMaterial::Paper => "Paper",
            TransferMaterial::Glass => "Glass",
            TransferMaterial::Metals => "Metals",
            TransferMaterial::Petroleum => "Petroleum",
            TransferMaterial::Plastics => "Plastics",
            TransferMaterial::AnimalProducts => "Animal Products",
            TransferMaterial::Flours => "Flours",
            TransferMaterial::Crime2 => "Crime Helicopter",
            TransferMaterial::Sick2 => "Sick Helicopter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_ids_round_trip() {
        for &material in TransferMaterial::ALL {
            assert_eq!(
                TransferMaterial::from_raw(material.as_raw()),
                Some(material)
            );
        }
    }

    #[test]
    fn test_raw_ids_unique() {
        for (i, &a) in TransferMaterial::ALL.iter().enumerate() {
            for &b in &TransferMaterial::ALL[i + 1..] {
                assert_ne!(a.as_raw(), b.as_raw(), "{:?} and {:?} collide", a, b);
            }
        }
    }

    #[test]
    fn test_legacy_aliases_resolve_to_canonical() {
        assert_eq!(
            TransferMaterial::from_raw(126),
            Some(TransferMaterial::Crime2)
        );
        assert_eq!(
            TransferMaterial::from_raw(127),
            Some(TransferMaterial::Sick2)
        );
        // An alias and its canonical id decode to values that compare equal.
        assert_eq!(
            TransferMaterial::from_raw(126),
            TransferMaterial::from_raw(TransferMaterial::Crime2.as_raw())
        );
    }

    #[test]
    fn test_legacy_aliases_stay_inside_reserved_block() {
        for &(alias, material) in LEGACY_ALIASES {
            assert!((EXTENSION_BLOCK_START..=EXTENSION_BLOCK_END).contains(&alias));
            assert!(material.is_extension());
        }
    }

    #[test]
    fn test_unknown_raw_id_is_none() {
        assert_eq!(TransferMaterial::from_raw(99), None);
    }

    #[test]
    fn test_extension_block_membership() {
        assert!(TransferMaterial::Crime2.is_extension());
        assert!(TransferMaterial::Sick2.is_extension());
        assert!(!TransferMaterial::Crime.is_extension());
        assert!(!TransferMaterial::Goods.is_extension());
    }
}
