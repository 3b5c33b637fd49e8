//! Firearm attachment definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::items::UnknownName;

/// Mount point an attachment occupies on a firearm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AttachmentSlot {
    Sight,
    Barrel,
    SideRail,
    BottomRail,
    Ammunition,
    Stock,
    Stability,
    Body,
    Unassigned,
}

const SLOT_NAMES: &[(AttachmentSlot, &str)] = &[
    (AttachmentSlot::Sight, "Sight"),
    (AttachmentSlot::Barrel, "Barrel"),
    (AttachmentSlot::SideRail, "SideRail"),
    (AttachmentSlot::BottomRail, "BottomRail"),
    (AttachmentSlot::Ammunition, "Ammunition"),
    (AttachmentSlot::Stock, "Stock"),
    (AttachmentSlot::Stability, "Stability"),
    (AttachmentSlot::Body, "Body"),
    (AttachmentSlot::Unassigned, "Unassigned"),
];

impl AttachmentSlot {
    pub fn name(self) -> &'static str {
        SLOT_NAMES
            .iter()
            .find(|(slot, _)| *slot == self)
            .map(|(_, name)| *name)
            .unwrap_or("Unassigned")
    }

    /// Get slot by display name (case-insensitive)
    pub fn from_name(name: &str) -> Option<AttachmentSlot> {
        SLOT_NAMES
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name))
            .map(|(slot, _)| *slot)
    }
}

impl fmt::Display for AttachmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AttachmentSlot {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttachmentSlot::from_name(s.trim()).ok_or_else(|| UnknownName {
            kind: "attachment slot",
            name: s.to_string(),
        })
    }
}

/// Attachment kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AttachmentName {
    None,
    IronSights,
    DotSight,
    HoloSight,
    NightVisionSight,
    AmmoSight,
    ScopeSight,
    StandardStock,
    ExtendedStock,
    RetractedStock,
    LightweightStock,
    HeavyStock,
    RecoilReducingStock,
    Foregrip,
    Laser,
    Flashlight,
    AmmoCounter,
    StandardBarrel,
    ExtendedBarrel,
    SoundSuppressor,
    FlashHider,
    MuzzleBrake,
    MuzzleBooster,
    StandardMagFMJ,
    StandardMagAP,
    StandardMagJHP,
    ExtendedMagFMJ,
    ExtendedMagAP,
    ExtendedMagJHP,
    DrumMagFMJ,
    DrumMagAP,
    DrumMagJHP,
    LowcapMagFMJ,
    LowcapMagAP,
    LowcapMagJHP,
    CylinderMag4,
    CylinderMag6,
    CylinderMag8,
    CarbineBody,
    RifleBody,
    ShortBarrel,
    ShotgunChoke,
    ShotgunExtendedBarrel,
    NoRifleStock,
    ShotgunSingleShot,
    ShotgunDoubleShot,
}

const ATTACHMENT_NAMES: &[(AttachmentName, &str)] = &[
    (AttachmentName::None, "None"),
    (AttachmentName::IronSights, "IronSights"),
    (AttachmentName::DotSight, "DotSight"),
    (AttachmentName::HoloSight, "HoloSight"),
    (AttachmentName::NightVisionSight, "NightVisionSight"),
    (AttachmentName::AmmoSight, "AmmoSight"),
    (AttachmentName::ScopeSight, "ScopeSight"),
    (AttachmentName::StandardStock, "StandardStock"),
    (AttachmentName::ExtendedStock, "ExtendedStock"),
    (AttachmentName::RetractedStock, "RetractedStock"),
    (AttachmentName::LightweightStock, "LightweightStock"),
    (AttachmentName::HeavyStock, "HeavyStock"),
    (AttachmentName::RecoilReducingStock, "RecoilReducingStock"),
    (AttachmentName::Foregrip, "Foregrip"),
    (AttachmentName::Laser, "Laser"),
    (AttachmentName::Flashlight, "Flashlight"),
    (AttachmentName::AmmoCounter, "AmmoCounter"),
    (AttachmentName::StandardBarrel, "StandardBarrel"),
    (AttachmentName::ExtendedBarrel, "ExtendedBarrel"),
    (AttachmentName::SoundSuppressor, "SoundSuppressor"),
    (AttachmentName::FlashHider, "FlashHider"),
    (AttachmentName::MuzzleBrake, "MuzzleBrake"),
    (AttachmentName::MuzzleBooster, "MuzzleBooster"),
    (AttachmentName::StandardMagFMJ, "StandardMagFMJ"),
    (AttachmentName::StandardMagAP, "StandardMagAP"),
    (AttachmentName::StandardMagJHP, "StandardMagJHP"),
    (AttachmentName::ExtendedMagFMJ, "ExtendedMagFMJ"),
    (AttachmentName::ExtendedMagAP, "ExtendedMagAP"),
    (AttachmentName::ExtendedMagJHP, "ExtendedMagJHP"),
    (AttachmentName::DrumMagFMJ, "DrumMagFMJ"),
    (AttachmentName::DrumMagAP, "DrumMagAP"),
    (AttachmentName::DrumMagJHP, "DrumMagJHP"),
    (AttachmentName::LowcapMagFMJ, "LowcapMagFMJ"),
    (AttachmentName::LowcapMagAP, "LowcapMagAP"),
    (AttachmentName::LowcapMagJHP, "LowcapMagJHP"),
    (AttachmentName::CylinderMag4, "CylinderMag4"),
    (AttachmentName::CylinderMag6, "CylinderMag6"),
    (AttachmentName::CylinderMag8, "CylinderMag8"),
    (AttachmentName::CarbineBody, "CarbineBody"),
    (AttachmentName::RifleBody, "RifleBody"),
    (AttachmentName::ShortBarrel, "ShortBarrel"),
    (AttachmentName::ShotgunChoke, "ShotgunChoke"),
    (AttachmentName::ShotgunExtendedBarrel, "ShotgunExtendedBarrel"),
    (AttachmentName::NoRifleStock, "NoRifleStock"),
    (AttachmentName::ShotgunSingleShot, "ShotgunSingleShot"),
    (AttachmentName::ShotgunDoubleShot, "ShotgunDoubleShot"),
];

impl AttachmentName {
    pub fn name(self) -> &'static str {
        ATTACHMENT_NAMES
            .iter()
            .find(|(attachment, _)| *attachment == self)
            .map(|(_, name)| *name)
            .unwrap_or("None")
    }

    /// Get attachment by display name (case-insensitive)
    pub fn from_name(name: &str) -> Option<AttachmentName> {
        ATTACHMENT_NAMES
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name))
            .map(|(attachment, _)| *attachment)
    }
}

impl fmt::Display for AttachmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AttachmentName {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttachmentName::from_name(s.trim()).ok_or_else(|| UnknownName {
            kind: "attachment",
            name: s.to_string(),
        })
    }
}

/// One attachment a firearm can carry, with the weight it adds to the
/// firearm's attachments code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttachmentIdentifier {
    pub code: u32,
    pub name: AttachmentName,
    pub slot: AttachmentSlot,
}

impl AttachmentIdentifier {
    pub const fn new(code: u32, name: AttachmentName, slot: AttachmentSlot) -> Self {
        Self { code, name, slot }
    }
}

impl fmt::Display for AttachmentIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.slot, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_name_round_trip() {
        for (attachment, name) in ATTACHMENT_NAMES {
            assert_eq!(attachment.name(), *name);
            assert_eq!(AttachmentName::from_name(name), Some(*attachment));
        }
    }

    #[test]
    fn test_attachment_name_parse() {
        assert_eq!(
            "soundsuppressor".parse::<AttachmentName>(),
            Ok(AttachmentName::SoundSuppressor)
        );
        assert!("Bayonet".parse::<AttachmentName>().is_err());
    }

    #[test]
    fn test_slot_lookup() {
        assert_eq!(AttachmentSlot::from_name("siderail"), Some(AttachmentSlot::SideRail));
        assert_eq!(AttachmentSlot::Stability.name(), "Stability");
        assert!(AttachmentSlot::from_name("Pocket").is_none());
    }

    #[test]
    fn test_identifier_display() {
        let id = AttachmentIdentifier::new(4, AttachmentName::Laser, AttachmentSlot::SideRail);
        assert_eq!(id.to_string(), "Laser (SideRail, 4)");
    }

    #[test]
    fn test_identifier_serde() {
        let id = AttachmentIdentifier::new(8, AttachmentName::Foregrip, AttachmentSlot::BottomRail);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#"{"code":8,"name":"Foregrip","slot":"BottomRail"}"#);
        let back: AttachmentIdentifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
