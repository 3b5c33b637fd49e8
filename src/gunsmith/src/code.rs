//! Attachments code arithmetic
//!
//! A firearm's attachments code is its base code plus the summed weights of
//! every installed attachment. All sums are checked: a code that does not
//! fit in a `u32` is an error, never a wrapped value.

use crate::attachments::AttachmentIdentifier;
use crate::items::ItemType;

/// Encoded set of installed attachments
pub type AttachmentsCode = u32;

/// Code of a firearm with nothing installed
pub type BaseCode = u32;

/// Largest attachment set the resolver will enumerate.
/// Decomposition walks all 2^n subsets, so this bounds the work per call.
pub const MAX_ENUMERATED_ATTACHMENTS: usize = 24;

/// Errors that can occur while encoding or decoding attachments codes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    #[error("Attachments code {code} is below the base code {base} of {weapon}")]
    BelowBaseCode {
        weapon: ItemType,
        code: AttachmentsCode,
        base: BaseCode,
    },

    #[error("Attachments code exceeds {}", AttachmentsCode::MAX)]
    Overflow,

    #[error("{0} is not a weapon")]
    NotAWeapon(ItemType),

    #[error("{weapon} has {count} attachments, at most {max} can be searched")]
    TooManyAttachments {
        weapon: ItemType,
        count: usize,
        max: usize,
    },
}

/// Sum the weights of a set of attachments
///
/// Duplicates are summed as given.
pub fn encode<'a, I>(identifiers: I) -> Result<AttachmentsCode, CodeError>
where
    I: IntoIterator<Item = &'a AttachmentIdentifier>,
{
    checked_sum(identifiers.into_iter().map(|id| id.code))
}

pub(crate) fn checked_sum<I>(weights: I) -> Result<AttachmentsCode, CodeError>
where
    I: IntoIterator<Item = u32>,
{
    weights
        .into_iter()
        .try_fold(0u32, |acc, w| acc.checked_add(w).ok_or(CodeError::Overflow))
}

/// Sum of the weights selected by an inclusion bitmask (bit `j` selects `weights[j]`)
pub(crate) fn masked_sum(weights: &[u32], mask: u64) -> Result<AttachmentsCode, CodeError> {
    checked_sum(
        weights
            .iter()
            .enumerate()
            .filter(|(j, _)| mask & (1u64 << j) != 0)
            .map(|(_, w)| *w),
    )
}
