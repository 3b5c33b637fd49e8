//! Item types and category lookups
//!
//! Static reference data for every item the server knows about, plus the
//! category predicates (weapon, ammo, keycard, ...) and the fixed mappings
//! between ammo/grenade enums and their inventory item.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inventory item kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemType {
    None,
    KeycardJanitor,
    KeycardScientist,
    KeycardResearchCoordinator,
    KeycardZoneManager,
    KeycardGuard,
    KeycardNTFOfficer,
    KeycardContainmentEngineer,
    KeycardNTFLieutenant,
    KeycardNTFCommander,
    KeycardFacilityManager,
    KeycardChaosInsurgency,
    KeycardO5,
    Radio,
    GunCOM15,
    Medkit,
    Flashlight,
    MicroHID,
    SCP500,
    SCP207,
    Ammo12gauge,
    GunE11SR,
    GunCrossvec,
    Ammo556x45,
    GunFSP9,
    GunLogicer,
    GrenadeHE,
    GrenadeFlash,
    Ammo44cal,
    Ammo762x39,
    Ammo9x19,
    GunCOM18,
    SCP018,
    SCP268,
    Adrenaline,
    Painkillers,
    Coin,
    ArmorLight,
    ArmorCombat,
    ArmorHeavy,
    GunRevolver,
    GunAK,
    GunShotgun,
}

/// Lowercase item name -> ItemType
static ITEMS_BY_NAME: phf::Map<&'static str, ItemType> = phf::phf_map! {
    "none" => ItemType::None,
    "keycardjanitor" => ItemType::KeycardJanitor,
    "keycardscientist" => ItemType::KeycardScientist,
    "keycardresearchcoordinator" => ItemType::KeycardResearchCoordinator,
    "keycardzonemanager" => ItemType::KeycardZoneManager,
    "keycardguard" => ItemType::KeycardGuard,
    "keycardntfofficer" => ItemType::KeycardNTFOfficer,
    "keycardcontainmentengineer" => ItemType::KeycardContainmentEngineer,
    "keycardntflieutenant" => ItemType::KeycardNTFLieutenant,
    "keycardntfcommander" => ItemType::KeycardNTFCommander,
    "keycardfacilitymanager" => ItemType::KeycardFacilityManager,
    "keycardchaosinsurgency" => ItemType::KeycardChaosInsurgency,
    "keycardo5" => ItemType::KeycardO5,
    "radio" => ItemType::Radio,
    "guncom15" => ItemType::GunCOM15,
    "medkit" => ItemType::Medkit,
    "flashlight" => ItemType::Flashlight,
    "microhid" => ItemType::MicroHID,
    "scp500" => ItemType::SCP500,
    "scp207" => ItemType::SCP207,
    "ammo12gauge" => ItemType::Ammo12gauge,
    "gune11sr" => ItemType::GunE11SR,
    "guncrossvec" => ItemType::GunCrossvec,
    "ammo556x45" => ItemType::Ammo556x45,
    "gunfsp9" => ItemType::GunFSP9,
    "gunlogicer" => ItemType::GunLogicer,
    "grenadehe" => ItemType::GrenadeHE,
    "grenadeflash" => ItemType::GrenadeFlash,
    "ammo44cal" => ItemType::Ammo44cal,
    "ammo762x39" => ItemType::Ammo762x39,
    "ammo9x19" => ItemType::Ammo9x19,
    "guncom18" => ItemType::GunCOM18,
    "scp018" => ItemType::SCP018,
    "scp268" => ItemType::SCP268,
    "adrenaline" => ItemType::Adrenaline,
    "painkillers" => ItemType::Painkillers,
    "coin" => ItemType::Coin,
    "armorlight" => ItemType::ArmorLight,
    "armorcombat" => ItemType::ArmorCombat,
    "armorheavy" => ItemType::ArmorHeavy,
    "gunrevolver" => ItemType::GunRevolver,
    "gunak" => ItemType::GunAK,
    "gunshotgun" => ItemType::GunShotgun,
};

impl ItemType {
    /// Every item kind, `None` first
    pub const ALL: [ItemType; 43] = [
        ItemType::None,
        ItemType::KeycardJanitor,
        ItemType::KeycardScientist,
        ItemType::KeycardResearchCoordinator,
        ItemType::KeycardZoneManager,
        ItemType::KeycardGuard,
        ItemType::KeycardNTFOfficer,
        ItemType::KeycardContainmentEngineer,
        ItemType::KeycardNTFLieutenant,
        ItemType::KeycardNTFCommander,
        ItemType::KeycardFacilityManager,
        ItemType::KeycardChaosInsurgency,
        ItemType::KeycardO5,
        ItemType::Radio,
        ItemType::GunCOM15,
        ItemType::Medkit,
        ItemType::Flashlight,
        ItemType::MicroHID,
        ItemType::SCP500,
        ItemType::SCP207,
        ItemType::Ammo12gauge,
        ItemType::GunE11SR,
        ItemType::GunCrossvec,
        ItemType::Ammo556x45,
        ItemType::GunFSP9,
        ItemType::GunLogicer,
        ItemType::GrenadeHE,
        ItemType::GrenadeFlash,
        ItemType::Ammo44cal,
        ItemType::Ammo762x39,
        ItemType::Ammo9x19,
        ItemType::GunCOM18,
        ItemType::SCP018,
        ItemType::SCP268,
        ItemType::Adrenaline,
        ItemType::Painkillers,
        ItemType::Coin,
        ItemType::ArmorLight,
        ItemType::ArmorCombat,
        ItemType::ArmorHeavy,
        ItemType::GunRevolver,
        ItemType::GunAK,
        ItemType::GunShotgun,
    ];

    /// Canonical name, as used in manifest files and on the command line
    pub fn name(self) -> &'static str {
        match self {
            ItemType::None => "None",
            ItemType::KeycardJanitor => "KeycardJanitor",
            ItemType::KeycardScientist => "KeycardScientist",
            ItemType::KeycardResearchCoordinator => "KeycardResearchCoordinator",
            ItemType::KeycardZoneManager => "KeycardZoneManager",
            ItemType::KeycardGuard => "KeycardGuard",
            ItemType::KeycardNTFOfficer => "KeycardNTFOfficer",
            ItemType::KeycardContainmentEngineer => "KeycardContainmentEngineer",
            ItemType::KeycardNTFLieutenant => "KeycardNTFLieutenant",
            ItemType::KeycardNTFCommander => "KeycardNTFCommander",
            ItemType::KeycardFacilityManager => "KeycardFacilityManager",
            ItemType::KeycardChaosInsurgency => "KeycardChaosInsurgency",
            ItemType::KeycardO5 => "KeycardO5",
            ItemType::Radio => "Radio",
            ItemType::GunCOM15 => "GunCOM15",
            ItemType::Medkit => "Medkit",
            ItemType::Flashlight => "Flashlight",
            ItemType::MicroHID => "MicroHID",
            ItemType::SCP500 => "SCP500",
            ItemType::SCP207 => "SCP207",
            ItemType::Ammo12gauge => "Ammo12gauge",
            ItemType::GunE11SR => "GunE11SR",
            ItemType::GunCrossvec => "GunCrossvec",
            ItemType::Ammo556x45 => "Ammo556x45",
            ItemType::GunFSP9 => "GunFSP9",
            ItemType::GunLogicer => "GunLogicer",
            ItemType::GrenadeHE => "GrenadeHE",
            ItemType::GrenadeFlash => "GrenadeFlash",
            ItemType::Ammo44cal => "Ammo44cal",
            ItemType::Ammo762x39 => "Ammo762x39",
            ItemType::Ammo9x19 => "Ammo9x19",
            ItemType::GunCOM18 => "GunCOM18",
            ItemType::SCP018 => "SCP018",
            ItemType::SCP268 => "SCP268",
            ItemType::Adrenaline => "Adrenaline",
            ItemType::Painkillers => "Painkillers",
            ItemType::Coin => "Coin",
            ItemType::ArmorLight => "ArmorLight",
            ItemType::ArmorCombat => "ArmorCombat",
            ItemType::ArmorHeavy => "ArmorHeavy",
            ItemType::GunRevolver => "GunRevolver",
            ItemType::GunAK => "GunAK",
            ItemType::GunShotgun => "GunShotgun",
        }
    }

    /// Look up an item by name (case-insensitive)
    pub fn from_name(name: &str) -> Option<ItemType> {
        ITEMS_BY_NAME.get(name.to_ascii_lowercase().as_str()).copied()
    }

    pub fn is_ammo(self) -> bool {
        matches!(
            self,
            ItemType::Ammo9x19
                | ItemType::Ammo12gauge
                | ItemType::Ammo44cal
                | ItemType::Ammo556x45
                | ItemType::Ammo762x39
        )
    }

    /// Whether the item is a weapon
    ///
    /// The MicroHID is not a firearm but counts as a weapon unless
    /// `check_micro` is false.
    pub fn is_weapon(self, check_micro: bool) -> bool {
        match self {
            ItemType::GunCrossvec
            | ItemType::GunLogicer
            | ItemType::GunRevolver
            | ItemType::GunShotgun
            | ItemType::GunAK
            | ItemType::GunCOM15
            | ItemType::GunCOM18
            | ItemType::GunE11SR
            | ItemType::GunFSP9 => true,
            ItemType::MicroHID => check_micro,
            _ => false,
        }
    }

    pub fn is_scp(self) -> bool {
        matches!(
            self,
            ItemType::SCP018 | ItemType::SCP500 | ItemType::SCP268 | ItemType::SCP207
        )
    }

    pub fn is_throwable(self) -> bool {
        matches!(
            self,
            ItemType::SCP018 | ItemType::GrenadeHE | ItemType::GrenadeFlash
        )
    }

    pub fn is_medical(self) -> bool {
        matches!(
            self,
            ItemType::Painkillers | ItemType::Medkit | ItemType::SCP500 | ItemType::Adrenaline
        )
    }

    pub fn is_utility(self) -> bool {
        matches!(self, ItemType::Flashlight | ItemType::Radio)
    }

    pub fn is_armor(self) -> bool {
        matches!(
            self,
            ItemType::ArmorCombat | ItemType::ArmorHeavy | ItemType::ArmorLight
        )
    }

    pub fn is_keycard(self) -> bool {
        matches!(
            self,
            ItemType::KeycardChaosInsurgency
                | ItemType::KeycardContainmentEngineer
                | ItemType::KeycardFacilityManager
                | ItemType::KeycardGuard
                | ItemType::KeycardJanitor
                | ItemType::KeycardNTFCommander
                | ItemType::KeycardNTFLieutenant
                | ItemType::KeycardO5
                | ItemType::KeycardScientist
                | ItemType::KeycardResearchCoordinator
                | ItemType::KeycardNTFOfficer
                | ItemType::KeycardZoneManager
        )
    }

    /// Ammo type carried by an ammo item, `AmmoType::None` for anything else
    pub fn ammo_type(self) -> AmmoType {
        match self {
            ItemType::Ammo9x19 => AmmoType::Nato9,
            ItemType::Ammo556x45 => AmmoType::Nato556,
            ItemType::Ammo762x39 => AmmoType::Nato762,
            ItemType::Ammo12gauge => AmmoType::Ammo12Gauge,
            ItemType::Ammo44cal => AmmoType::Ammo44Cal,
            _ => AmmoType::None,
        }
    }

    /// Grenade type of a throwable item
    pub fn grenade_type(self) -> Option<GrenadeType> {
        match self {
            ItemType::GrenadeFlash => Some(GrenadeType::Flashbang),
            ItemType::SCP018 => Some(GrenadeType::Scp018),
            ItemType::GrenadeHE => Some(GrenadeType::FragGrenade),
            _ => None,
        }
    }

    /// Category labels that apply to this item, in a fixed order
    pub fn categories(self) -> Vec<&'static str> {
        let checks: [(bool, &'static str); 8] = [
            (self.is_weapon(true), "weapon"),
            (self.is_ammo(), "ammo"),
            (self.is_scp(), "scp"),
            (self.is_throwable(), "throwable"),
            (self.is_medical(), "medical"),
            (self.is_utility(), "utility"),
            (self.is_armor(), "armor"),
            (self.is_keycard(), "keycard"),
        ];
        checks
            .into_iter()
            .filter_map(|(hit, label)| hit.then_some(label))
            .collect()
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: {name}")]
pub struct UnknownName {
    pub kind: &'static str,
    pub name: String,
}

impl FromStr for ItemType {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemType::from_name(s.trim()).ok_or_else(|| UnknownName {
            kind: "item",
            name: s.to_string(),
        })
    }
}

/// Ammunition kinds held in a player's ammo reserve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmmoType {
    None,
    Nato556,
    Nato762,
    Nato9,
    Ammo12Gauge,
    Ammo44Cal,
}

impl AmmoType {
    /// Inventory item for this ammo, `ItemType::None` for `AmmoType::None`
    pub fn item_type(self) -> ItemType {
        match self {
            AmmoType::Nato556 => ItemType::Ammo556x45,
            AmmoType::Nato762 => ItemType::Ammo762x39,
            AmmoType::Nato9 => ItemType::Ammo9x19,
            AmmoType::Ammo12Gauge => ItemType::Ammo12gauge,
            AmmoType::Ammo44Cal => ItemType::Ammo44cal,
            AmmoType::None => ItemType::None,
        }
    }
}

/// Throwable projectile kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrenadeType {
    FragGrenade,
    Flashbang,
    Scp018,
}

impl GrenadeType {
    pub fn item_type(self) -> ItemType {
        match self {
            GrenadeType::Flashbang => ItemType::GrenadeFlash,
            GrenadeType::Scp018 => ItemType::SCP018,
            GrenadeType::FragGrenade => ItemType::GrenadeHE,
        }
    }
}

/// Anything that knows which item kind it is (pickups, inventory slots, ...)
pub trait HasItemType {
    fn item_type(&self) -> ItemType;
}

impl HasItemType for ItemType {
    fn item_type(&self) -> ItemType {
        *self
    }
}

/// Collect the item kinds of a sequence of items, preserving order
pub fn item_types<'a, T, I>(items: I) -> Vec<ItemType>
where
    T: HasItemType + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(HasItemType::item_type).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_lookup_covers_all_items() {
        for item in ItemType::ALL {
            assert_eq!(ItemType::from_name(item.name()), Some(item));
        }
        assert_eq!(ITEMS_BY_NAME.len(), ItemType::ALL.len());
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("guncom15".parse::<ItemType>(), Ok(ItemType::GunCOM15));
        assert_eq!(" GunAK ".parse::<ItemType>(), Ok(ItemType::GunAK));
        let err = "Railgun".parse::<ItemType>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown item: Railgun");
    }

    #[test]
    fn test_weapon_predicate() {
        assert!(ItemType::GunE11SR.is_weapon(true));
        assert!(ItemType::GunE11SR.is_weapon(false));
        assert!(ItemType::MicroHID.is_weapon(true));
        assert!(!ItemType::MicroHID.is_weapon(false));
        assert!(!ItemType::Medkit.is_weapon(true));
        assert!(!ItemType::None.is_weapon(true));
    }

    #[test]
    fn test_category_predicates() {
        assert!(ItemType::Ammo44cal.is_ammo());
        assert!(ItemType::SCP018.is_scp());
        assert!(ItemType::SCP018.is_throwable());
        assert!(ItemType::SCP500.is_medical());
        assert!(ItemType::Radio.is_utility());
        assert!(ItemType::ArmorHeavy.is_armor());
        assert!(ItemType::KeycardO5.is_keycard());
        assert!(!ItemType::Coin.is_keycard());
    }

    #[test]
    fn test_categories_list() {
        assert_eq!(ItemType::SCP018.categories(), vec!["scp", "throwable"]);
        assert_eq!(ItemType::SCP500.categories(), vec!["scp", "medical"]);
        assert!(ItemType::Coin.categories().is_empty());
    }

    #[test]
    fn test_ammo_mapping_is_symmetric() {
        for item in ItemType::ALL.into_iter().filter(|i| i.is_ammo()) {
            assert_ne!(item.ammo_type(), AmmoType::None);
            assert_eq!(item.ammo_type().item_type(), item);
        }
        assert_eq!(ItemType::GunAK.ammo_type(), AmmoType::None);
        assert_eq!(AmmoType::None.item_type(), ItemType::None);
    }

    #[test]
    fn test_grenade_mapping() {
        assert_eq!(GrenadeType::Flashbang.item_type(), ItemType::GrenadeFlash);
        assert_eq!(GrenadeType::FragGrenade.item_type(), ItemType::GrenadeHE);
        assert_eq!(ItemType::SCP018.grenade_type(), Some(GrenadeType::Scp018));
        assert_eq!(ItemType::Medkit.grenade_type(), None);
    }

    #[test]
    fn test_item_types_preserves_order() {
        struct Pickup(ItemType);
        impl HasItemType for Pickup {
            fn item_type(&self) -> ItemType {
                self.0
            }
        }

        let pickups = vec![Pickup(ItemType::Coin), Pickup(ItemType::GunAK)];
        assert_eq!(
            item_types(&pickups),
            vec![ItemType::Coin, ItemType::GunAK]
        );
    }
}
