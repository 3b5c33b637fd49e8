//! Firearm catalog
//!
//! The resolver never reaches into global tables. It asks a catalog for a
//! firearm's attachment set, base code and weapon classification through the
//! traits below, so hosts and tests can supply their own data.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::attachments::{AttachmentIdentifier, AttachmentName};
use crate::code::BaseCode;
use crate::items::ItemType;
use crate::manifest;

/// Attachment sets per firearm
pub trait AttachmentCatalog {
    /// Ordered attachments the firearm can carry, empty for unknown kinds
    fn attachment_set(&self, weapon: ItemType) -> &[AttachmentIdentifier];
}

/// Base codes per firearm
pub trait BaseCodeTable {
    /// Code of the firearm with nothing installed, `0` for non-weapons
    fn base_code(&self, weapon: ItemType) -> BaseCode;
}

/// Weapon classification
pub trait WeaponClassifier {
    fn is_weapon(&self, kind: ItemType) -> bool;
}

/// Everything the resolver needs from its host
pub trait WeaponCatalog: AttachmentCatalog + BaseCodeTable + WeaponClassifier {}

impl<T> WeaponCatalog for T where T: AttachmentCatalog + BaseCodeTable + WeaponClassifier + ?Sized {}

/// Reference data for one firearm
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Firearm {
    pub weapon: ItemType,
    pub base_code: BaseCode,
    pub max_ammo: u8,
    pub attachments: Vec<AttachmentIdentifier>,
}

impl Firearm {
    pub fn new(weapon: ItemType, base_code: BaseCode, max_ammo: u8) -> Self {
        Self {
            weapon,
            base_code,
            max_ammo,
            attachments: Vec::new(),
        }
    }
}

/// In-memory catalog keyed by firearm
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    firearms: BTreeMap<ItemType, Firearm>,
}

impl Catalog {
    /// Catalog built from the manifest data embedded in the library
    pub fn builtin() -> &'static Catalog {
        &manifest::BUILTIN
    }

    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn firearm(&self, weapon: ItemType) -> Option<&Firearm> {
        self.firearms.get(&weapon)
    }

    /// Firearms in the catalog, in `ItemType` order
    pub fn firearms(&self) -> impl Iterator<Item = &Firearm> + '_ {
        self.firearms.values()
    }

    pub fn weapons(&self) -> impl Iterator<Item = ItemType> + '_ {
        self.firearms.keys().copied()
    }

    /// Magazine capacity of a firearm, `0` for anything that is not one
    pub fn max_ammo(&self, weapon: ItemType) -> u8 {
        self.firearm(weapon).map(|f| f.max_ammo).unwrap_or(0)
    }

    /// Find an attachment on a firearm by name
    pub fn find_attachment(
        &self,
        weapon: ItemType,
        name: AttachmentName,
    ) -> Option<&AttachmentIdentifier> {
        self.attachment_set(weapon).iter().find(|a| a.name == name)
    }

    pub fn len(&self) -> usize {
        self.firearms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.firearms.is_empty()
    }
}

impl AttachmentCatalog for Catalog {
    fn attachment_set(&self, weapon: ItemType) -> &[AttachmentIdentifier] {
        self.firearm(weapon)
            .map(|f| f.attachments.as_slice())
            .unwrap_or(&[])
    }
}

impl BaseCodeTable for Catalog {
    fn base_code(&self, weapon: ItemType) -> BaseCode {
        if !self.is_weapon(weapon) {
            return 0;
        }
        self.firearm(weapon).map(|f| f.base_code).unwrap_or(0)
    }
}

impl WeaponClassifier for Catalog {
    fn is_weapon(&self, kind: ItemType) -> bool {
        kind.is_weapon(true)
    }
}

/// Builder for hand-assembled catalogs
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    firearms: BTreeMap<ItemType, Firearm>,
}

impl CatalogBuilder {
    /// Add or replace a firearm's base code and magazine size, keeping any
    /// attachments already added for it
    pub fn firearm(mut self, weapon: ItemType, base_code: BaseCode, max_ammo: u8) -> Self {
        let entry = self
            .firearms
            .entry(weapon)
            .or_insert_with(|| Firearm::new(weapon, base_code, max_ammo));
        entry.base_code = base_code;
        entry.max_ammo = max_ammo;
        self
    }

    /// Append an attachment to a firearm's set
    pub fn attachment(mut self, weapon: ItemType, attachment: AttachmentIdentifier) -> Self {
        self.firearms
            .entry(weapon)
            .or_insert_with(|| Firearm::new(weapon, 0, 0))
            .attachments
            .push(attachment);
        self
    }

    pub fn build(self) -> Catalog {
        Catalog {
            firearms: self.firearms,
        }
    }
}
