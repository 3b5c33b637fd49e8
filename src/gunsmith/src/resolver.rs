//! Attachments code decomposition
//!
//! Recovers which attachments are installed on a firearm from its
//! attachments code. The residual code (code minus the firearm's base code)
//! is matched against every subset of the firearm's attachment weights,
//! walking inclusion bitmasks `0..2^n` in ascending order. The first subset
//! whose weights sum to the residual wins, so the result is deterministic
//! even when weights are not distinct powers of two.
//!
//! Work is `O(2^n * n)` in the attachment count `n`; sets larger than
//! [`MAX_ENUMERATED_ATTACHMENTS`] are rejected up front.

use crate::attachments::AttachmentIdentifier;
use crate::catalog::{Catalog, WeaponCatalog};
use crate::code::{self, masked_sum, AttachmentsCode, CodeError, MAX_ENUMERATED_ATTACHMENTS};
use crate::items::ItemType;

/// Decodes and encodes attachments codes against a catalog
#[derive(Debug)]
pub struct AttachmentCodeResolver<'c, C: ?Sized> {
    catalog: &'c C,
}

impl<C: ?Sized> Clone for AttachmentCodeResolver<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for AttachmentCodeResolver<'_, C> {}

impl AttachmentCodeResolver<'static, Catalog> {
    /// Resolver over the embedded manifest data
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl<'c, C> AttachmentCodeResolver<'c, C>
where
    C: WeaponCatalog + ?Sized,
{
    pub fn new(catalog: &'c C) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c C {
        self.catalog
    }

    /// Attachments installed on `weapon` for the given attachments code
    ///
    /// Returns the attachments in catalog order. A code whose residual no
    /// subset sums to yields an empty list rather than an error.
    pub fn decompose(
        &self,
        weapon: ItemType,
        code: AttachmentsCode,
    ) -> Result<Vec<AttachmentIdentifier>, CodeError> {
        if !self.catalog.is_weapon(weapon) {
            return Err(CodeError::NotAWeapon(weapon));
        }

        let base = self.catalog.base_code(weapon);
        let residual = code
            .checked_sub(base)
            .ok_or(CodeError::BelowBaseCode { weapon, code, base })?;

        let set = self.catalog.attachment_set(weapon);
        if set.len() > MAX_ENUMERATED_ATTACHMENTS {
            return Err(CodeError::TooManyAttachments {
                weapon,
                count: set.len(),
                max: MAX_ENUMERATED_ATTACHMENTS,
            });
        }

        let weights: Vec<u32> = set.iter().map(|a| a.code).collect();
        for mask in 0..(1u64 << set.len()) {
            if masked_sum(&weights, mask)? == residual {
                return Ok(set
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| mask & (1u64 << j) != 0)
                    .map(|(_, a)| *a)
                    .collect());
            }
        }

        Ok(Vec::new())
    }

    /// Like [`decompose`](Self::decompose), but a non-weapon kind gives
    /// `Ok(None)` instead of an error
    pub fn try_decompose(
        &self,
        weapon: ItemType,
        code: AttachmentsCode,
    ) -> Result<Option<Vec<AttachmentIdentifier>>, CodeError> {
        if !self.catalog.is_weapon(weapon) {
            return Ok(None);
        }
        self.decompose(weapon, code).map(Some)
    }

    /// Sum of the attachments' weights, without the base code
    pub fn encode<'a, I>(&self, identifiers: I) -> Result<AttachmentsCode, CodeError>
    where
        I: IntoIterator<Item = &'a AttachmentIdentifier>,
    {
        code::encode(identifiers)
    }

    /// Full attachments code of `weapon` carrying `identifiers`
    pub fn full_code<'a, I>(
        &self,
        weapon: ItemType,
        identifiers: I,
    ) -> Result<AttachmentsCode, CodeError>
    where
        I: IntoIterator<Item = &'a AttachmentIdentifier>,
    {
        self.catalog
            .base_code(weapon)
            .checked_add(code::encode(identifiers)?)
            .ok_or(CodeError::Overflow)
    }
}
