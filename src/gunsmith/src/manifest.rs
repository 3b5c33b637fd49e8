//! Manifest data for firearms and their attachments
//!
//! Firearm reference data is embedded at compile time from share/manifest/
//! and can be replaced at runtime with a directory holding the same files.
//!
//! Both files are TSV (tab-separated values) with a header row. Blank lines
//! and lines starting with `#` are ignored.
//!
//! - `firearms.tsv`: `weapon  base_code  max_ammo`
//! - `attachments.tsv`: `weapon  slot  name  code`, in the order the
//!   attachments appear on the firearm

use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};

use crate::attachments::{AttachmentIdentifier, AttachmentName, AttachmentSlot};
use crate::catalog::{Catalog, CatalogBuilder};
use crate::items::{ItemType, UnknownName};

pub const FIREARMS_FILE: &str = "firearms.tsv";
pub const ATTACHMENTS_FILE: &str = "attachments.tsv";

// Embed manifest files at compile time
const FIREARMS_TSV: &str = include_str!("../../../share/manifest/firearms.tsv");
const ATTACHMENTS_TSV: &str = include_str!("../../../share/manifest/attachments.tsv");

pub(crate) static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    parse_catalog(FIREARMS_TSV, ATTACHMENTS_TSV).unwrap_or_else(|e| {
        tracing::error!("Embedded firearm manifest is invalid: {}", e);
        Catalog::default()
    })
});

/// Errors that can occur while reading manifest data
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("{file}:{line}: expected {expected} columns, got {actual}")]
    Columns {
        file: &'static str,
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{file}:{line}: {source}")]
    UnknownName {
        file: &'static str,
        line: usize,
        #[source]
        source: UnknownName,
    },

    #[error("{file}:{line}: invalid number '{value}'")]
    InvalidNumber {
        file: &'static str,
        line: usize,
        value: String,
    },

    #[error("{file}:{line}: {weapon} is not a weapon")]
    NotAWeapon {
        file: &'static str,
        line: usize,
        weapon: ItemType,
    },

    #[error("{file}:{line}: duplicate firearm {weapon}")]
    DuplicateFirearm {
        file: &'static str,
        line: usize,
        weapon: ItemType,
    },

    #[error("{file}:{line}: {weapon} has no row in {}", FIREARMS_FILE)]
    UnknownFirearm {
        file: &'static str,
        line: usize,
        weapon: ItemType,
    },

    #[error("{file}:{line}: attachment code must be positive")]
    ZeroCode { file: &'static str, line: usize },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Data rows of a TSV file as (1-based line number, columns)
fn tsv_rows(tsv: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    tsv.lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty() && !line.starts_with('#'))
        .map(|(i, line)| (i + 1, line.split('\t').map(str::trim).collect()))
}

fn columns<'a>(
    file: &'static str,
    line: usize,
    cols: &'a [&'a str],
    expected: usize,
) -> Result<&'a [&'a str], ManifestError> {
    if cols.len() != expected {
        return Err(ManifestError::Columns {
            file,
            line,
            expected,
            actual: cols.len(),
        });
    }
    Ok(cols)
}

fn parse_name<T>(file: &'static str, line: usize, value: &str) -> Result<T, ManifestError>
where
    T: std::str::FromStr<Err = UnknownName>,
{
    value
        .parse()
        .map_err(|source| ManifestError::UnknownName { file, line, source })
}

fn parse_number<T: std::str::FromStr>(
    file: &'static str,
    line: usize,
    value: &str,
) -> Result<T, ManifestError> {
    value.parse().map_err(|_| ManifestError::InvalidNumber {
        file,
        line,
        value: value.to_string(),
    })
}

/// Build a catalog from the contents of `firearms.tsv` and `attachments.tsv`
pub fn parse_catalog(firearms_tsv: &str, attachments_tsv: &str) -> Result<Catalog, ManifestError> {
    let mut builder = CatalogBuilder::default();
    let mut seen: Vec<ItemType> = Vec::new();

    for (line, cols) in tsv_rows(firearms_tsv) {
        let cols = columns(FIREARMS_FILE, line, &cols, 3)?;
        let weapon: ItemType = parse_name(FIREARMS_FILE, line, cols[0])?;
        if !weapon.is_weapon(true) {
            return Err(ManifestError::NotAWeapon {
                file: FIREARMS_FILE,
                line,
                weapon,
            });
        }
        if seen.contains(&weapon) {
            return Err(ManifestError::DuplicateFirearm {
                file: FIREARMS_FILE,
                line,
                weapon,
            });
        }
        seen.push(weapon);

        let base_code = parse_number(FIREARMS_FILE, line, cols[1])?;
        let max_ammo = parse_number(FIREARMS_FILE, line, cols[2])?;
        builder = builder.firearm(weapon, base_code, max_ammo);
    }

    let mut attachment_count = 0usize;
    for (line, cols) in tsv_rows(attachments_tsv) {
        let cols = columns(ATTACHMENTS_FILE, line, &cols, 4)?;
        let weapon: ItemType = parse_name(ATTACHMENTS_FILE, line, cols[0])?;
        if !seen.contains(&weapon) {
            return Err(ManifestError::UnknownFirearm {
                file: ATTACHMENTS_FILE,
                line,
                weapon,
            });
        }
        let slot: AttachmentSlot = parse_name(ATTACHMENTS_FILE, line, cols[1])?;
        let name: AttachmentName = parse_name(ATTACHMENTS_FILE, line, cols[2])?;
        let code: u32 = parse_number(ATTACHMENTS_FILE, line, cols[3])?;
        if code == 0 {
            return Err(ManifestError::ZeroCode {
                file: ATTACHMENTS_FILE,
                line,
            });
        }
        builder = builder.attachment(weapon, AttachmentIdentifier::new(code, name, slot));
        attachment_count += 1;
    }

    tracing::debug!(
        firearms = seen.len(),
        attachments = attachment_count,
        "Parsed firearm manifest"
    );

    Ok(builder.build())
}

/// Load a catalog from a directory containing `firearms.tsv` and `attachments.tsv`
pub fn load_catalog_dir(dir: &Path) -> Result<Catalog, ManifestError> {
    let read = |name: &str| {
        let path = dir.join(name);
        fs::read_to_string(&path).map_err(|source| ManifestError::Io { path, source })
    };

    let firearms = read(FIREARMS_FILE)?;
    let attachments = read(ATTACHMENTS_FILE)?;
    tracing::debug!("Loading firearm manifest from {}", dir.display());

    parse_catalog(&firearms, &attachments)
}

/// Get statistics about loaded manifest data
pub fn stats() -> ManifestStats {
    ManifestStats {
        firearms: BUILTIN.len(),
        attachments: BUILTIN.firearms().map(|f| f.attachments.len()).sum(),
    }
}

#[derive(Debug, Clone)]
pub struct ManifestStats {
    pub firearms: usize,
    pub attachments: usize,
}
