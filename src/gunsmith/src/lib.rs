//! # gunsmith
//!
//! Item classification and firearm attachment codes.
//!
//! This library provides functionality to:
//! - Classify items (weapons, ammo, keycards, ...) and convert between
//!   item, ammo and grenade kinds
//! - Look up firearm reference data (base codes, magazine sizes, attachments)
//! - Decode an attachments code into the attachments it represents
//! - Encode a set of attachments back into a code
//!
//! ## Example
//!
//! ```
//! use gunsmith::{AttachmentCodeResolver, AttachmentName, Catalog, ItemType};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::builtin();
//! let resolver = AttachmentCodeResolver::new(catalog);
//!
//! let laser = catalog
//!     .find_attachment(ItemType::GunAK, AttachmentName::Laser)
//!     .copied()
//!     .ok_or("missing attachment")?;
//! let code = resolver.full_code(ItemType::GunAK, [&laser])?;
//!
//! assert_eq!(resolver.decompose(ItemType::GunAK, code)?, vec![laser]);
//! # Ok(())
//! # }
//! ```

pub mod attachments;
pub mod catalog;
pub mod code;
pub mod items;
pub mod manifest;
pub mod resolver;

// Re-export commonly used items
#[doc(inline)]
pub use attachments::{AttachmentIdentifier, AttachmentName, AttachmentSlot};
#[doc(inline)]
pub use catalog::{
    AttachmentCatalog, BaseCodeTable, Catalog, CatalogBuilder, Firearm, WeaponCatalog,
    WeaponClassifier,
};
#[doc(inline)]
pub use code::{encode, AttachmentsCode, BaseCode, CodeError, MAX_ENUMERATED_ATTACHMENTS};
#[doc(inline)]
pub use items::{item_types, AmmoType, GrenadeType, HasItemType, ItemType, UnknownName};
#[doc(inline)]
pub use manifest::{load_catalog_dir, parse_catalog, ManifestError};
#[doc(inline)]
pub use resolver::AttachmentCodeResolver;
