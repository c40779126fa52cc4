use crate::Saveable;

use super::types::BuildingRestrictions;

impl Saveable for BuildingRestrictions {
    const SAVE_KEY: &'static str = "building_restrictions";

    fn save_to_bytes(&self) -> Option<Vec<u8>> {
        // The store prunes default entries eagerly, so empty means untouched.
        if self.is_empty() {
            return None;
        }
        Some(bitcode::encode(self))
    }

    fn load_from_bytes(bytes: &[u8]) -> Self {
        // A corrupt extension entry falls back to unrestricted settings; the
        // matcher must never see a load error.
        crate::decode_or_warn(Self::SAVE_KEY, bytes)
    }
}
