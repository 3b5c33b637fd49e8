//! Attachments code command handlers
//!
//! Decode, encode and list firearm attachments against a catalog.

use anyhow::{bail, Context, Result};
use gunsmith::{
    AttachmentCodeResolver, AttachmentIdentifier, AttachmentName, AttachmentsCode, BaseCodeTable,
    Catalog, ItemType,
};
use serde::Serialize;

use crate::cli::OutputFormat;

/// Result of decoding an attachments code
#[derive(Debug, Serialize)]
pub struct DecodeReport {
    pub weapon: ItemType,
    pub code: AttachmentsCode,
    pub base_code: AttachmentsCode,
    /// False when no attachment combination sums to the residual
    pub matched: bool,
    pub attachments: Vec<AttachmentIdentifier>,
}

/// Result of encoding a set of attachments
#[derive(Debug, Serialize)]
pub struct EncodeReport {
    pub weapon: ItemType,
    pub base_code: AttachmentsCode,
    pub attachments_code: AttachmentsCode,
    pub code: AttachmentsCode,
    pub attachments: Vec<AttachmentIdentifier>,
}

pub fn decode_report(
    catalog: &Catalog,
    weapon: ItemType,
    code: AttachmentsCode,
) -> Result<DecodeReport> {
    let resolver = AttachmentCodeResolver::new(catalog);
    let attachments = resolver
        .try_decompose(weapon, code)
        .with_context(|| format!("Failed to decode attachments code {} for {}", code, weapon))?;

    let Some(attachments) = attachments else {
        bail!("{} is not a weapon", weapon);
    };

    let base_code = catalog.base_code(weapon);
    Ok(DecodeReport {
        weapon,
        code,
        base_code,
        matched: !attachments.is_empty() || code == base_code,
        attachments,
    })
}

pub fn encode_report(
    catalog: &Catalog,
    weapon: ItemType,
    names: &[AttachmentName],
) -> Result<EncodeReport> {
    if !weapon.is_weapon(true) {
        bail!("{} is not a weapon", weapon);
    }

    let mut attachments = Vec::with_capacity(names.len());
    for name in names {
        let attachment = catalog
            .find_attachment(weapon, *name)
            .with_context(|| format!("{} has no {} attachment", weapon, name))?;
        if attachments.contains(attachment) {
            tracing::warn!("{} listed more than once, counting it once", name);
            continue;
        }
        attachments.push(*attachment);
    }

    let resolver = AttachmentCodeResolver::new(catalog);
    let attachments_code = resolver.encode(&attachments)?;
    let code = resolver.full_code(weapon, &attachments)?;

    Ok(EncodeReport {
        weapon,
        base_code: catalog.base_code(weapon),
        attachments_code,
        code,
        attachments,
    })
}

/// Render an attachment table, one row per attachment
fn render_attachments(attachments: &[AttachmentIdentifier]) -> String {
    let mut out = format!("  {:<12} {:<22} {:>8}\n", "Slot", "Attachment", "Code");
    out.push_str(&format!("  {}\n", "-".repeat(44)));
    for a in attachments {
        out.push_str(&format!(
            "  {:<12} {:<22} {:>8}\n",
            a.slot.name(),
            a.name.name(),
            a.code
        ));
    }
    out
}

pub fn render_decode(report: &DecodeReport, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(report)?);
    }

    let mut out = format!(
        "{} code {} (base {}, residual {})\n",
        report.weapon,
        report.code,
        report.base_code,
        report.code - report.base_code
    );
    if report.attachments.is_empty() {
        if report.matched {
            out.push_str("No attachments installed\n");
        } else {
            out.push_str("No attachment combination matches this code\n");
        }
    } else {
        out.push_str(&render_attachments(&report.attachments));
    }
    Ok(out)
}

pub fn render_encode(report: &EncodeReport, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(report)?);
    }

    let mut out = format!(
        "{} code {} (base {} + attachments {})\n",
        report.weapon, report.code, report.base_code, report.attachments_code
    );
    if !report.attachments.is_empty() {
        out.push_str(&render_attachments(&report.attachments));
    }
    Ok(out)
}

pub fn render_list(catalog: &Catalog, weapon: ItemType, format: OutputFormat) -> Result<String> {
    let Some(firearm) = catalog.firearm(weapon) else {
        bail!("{} is not in the firearm catalog", weapon);
    };

    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(firearm)?);
    }

    let mut out = format!(
        "{} (base code {}, max ammo {}, {} attachments)\n",
        firearm.weapon,
        firearm.base_code,
        firearm.max_ammo,
        firearm.attachments.len()
    );
    out.push_str(&render_attachments(&firearm.attachments));
    Ok(out)
}

/// Handle the decode command
pub fn decode(
    catalog: &Catalog,
    weapon: ItemType,
    code: AttachmentsCode,
    format: OutputFormat,
) -> Result<()> {
    let report = decode_report(catalog, weapon, code)?;
    print!("{}", render_decode(&report, format)?);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

/// Handle the encode command
pub fn encode(
    catalog: &Catalog,
    weapon: ItemType,
    names: &[AttachmentName],
    format: OutputFormat,
) -> Result<()> {
    let report = encode_report(catalog, weapon, names)?;
    print!("{}", render_encode(&report, format)?);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

/// Handle the list command
pub fn list(catalog: &Catalog, weapon: ItemType, format: OutputFormat) -> Result<()> {
    print!("{}", render_list(catalog, weapon, format)?);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gunsmith::AttachmentSlot;

    fn sample() -> Catalog {
        Catalog::builder()
            .firearm(ItemType::GunCOM15, 10, 12)
            .attachment(
                ItemType::GunCOM15,
                AttachmentIdentifier::new(1, AttachmentName::DotSight, AttachmentSlot::Sight),
            )
            .attachment(
                ItemType::GunCOM15,
                AttachmentIdentifier::new(2, AttachmentName::Laser, AttachmentSlot::SideRail),
            )
            .attachment(
                ItemType::GunCOM15,
                AttachmentIdentifier::new(
                    4,
                    AttachmentName::SoundSuppressor,
                    AttachmentSlot::Barrel,
                ),
            )
            .build()
    }

    #[test]
    fn test_decode_report() {
        let report = decode_report(&sample(), ItemType::GunCOM15, 13).unwrap();
        assert!(report.matched);
        let names: Vec<_> = report.attachments.iter().map(|a| a.name).collect();
        assert_eq!(names, vec![AttachmentName::DotSight, AttachmentName::Laser]);
    }

    #[test]
    fn test_decode_report_distinguishes_no_match() {
        let catalog = sample();
        let empty = decode_report(&catalog, ItemType::GunCOM15, 10).unwrap();
        assert!(empty.matched);
        assert!(render_decode(&empty, OutputFormat::Table)
            .unwrap()
            .contains("No attachments installed"));

        let unmatched = decode_report(&catalog, ItemType::GunCOM15, 18).unwrap();
        assert!(!unmatched.matched);
        assert!(render_decode(&unmatched, OutputFormat::Table)
            .unwrap()
            .contains("No attachment combination matches"));
    }

    #[test]
    fn test_decode_errors() {
        let catalog = sample();
        let err = decode_report(&catalog, ItemType::Medkit, 0).unwrap_err();
        assert_eq!(err.to_string(), "Medkit is not a weapon");

        let err = decode_report(&catalog, ItemType::GunCOM15, 3).unwrap_err();
        assert!(err.to_string().contains("Failed to decode attachments code 3"));
    }

    #[test]
    fn test_render_decode_table() {
        let report = decode_report(&sample(), ItemType::GunCOM15, 15).unwrap();
        let out = render_decode(&report, OutputFormat::Table).unwrap();
        assert!(out.starts_with("GunCOM15 code 15 (base 10, residual 5)\n"));
        assert!(out.contains("DotSight"));
        assert!(out.contains("SoundSuppressor"));
        assert!(!out.contains("Laser"));
    }

    #[test]
    fn test_render_decode_json() {
        let report = decode_report(&sample(), ItemType::GunCOM15, 12).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render_decode(&report, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["weapon"], "GunCOM15");
        assert_eq!(json["matched"], true);
        assert_eq!(json["attachments"][0]["name"], "Laser");
        assert_eq!(json["attachments"][0]["code"], 2);
    }

    #[test]
    fn test_encode_report() {
        let report = encode_report(
            &sample(),
            ItemType::GunCOM15,
            &[AttachmentName::SoundSuppressor, AttachmentName::DotSight],
        )
        .unwrap();
        assert_eq!(report.attachments_code, 5);
        assert_eq!(report.code, 15);
        assert_eq!(report.base_code, 10);
    }

    #[test]
    fn test_encode_report_counts_duplicates_once() {
        let report = encode_report(
            &sample(),
            ItemType::GunCOM15,
            &[AttachmentName::Laser, AttachmentName::Laser],
        )
        .unwrap();
        assert_eq!(report.code, 12);
        assert_eq!(report.attachments.len(), 1);
    }

    #[test]
    fn test_encode_report_rejects_foreign_attachment() {
        let err = encode_report(&sample(), ItemType::GunCOM15, &[AttachmentName::DrumMagAP])
            .unwrap_err();
        assert_eq!(err.to_string(), "GunCOM15 has no DrumMagAP attachment");

        let err = encode_report(&sample(), ItemType::Coin, &[]).unwrap_err();
        assert_eq!(err.to_string(), "Coin is not a weapon");
    }

    #[test]
    fn test_encode_then_decode_builtin() {
        let catalog = Catalog::builtin();
        let names = [AttachmentName::ScopeSight, AttachmentName::Foregrip, AttachmentName::DrumMagAP];
        let encoded = encode_report(catalog, ItemType::GunAK, &names).unwrap();
        let decoded = decode_report(catalog, ItemType::GunAK, encoded.code).unwrap();
        assert_eq!(decoded.attachments, encoded.attachments);
    }

    #[test]
    fn test_render_list() {
        let out = render_list(&sample(), ItemType::GunCOM15, OutputFormat::Table).unwrap();
        assert!(out.starts_with("GunCOM15 (base code 10, max ammo 12, 3 attachments)\n"));
        assert_eq!(out.lines().count(), 6);

        assert!(render_list(&sample(), ItemType::GunAK, OutputFormat::Table).is_err());
    }
}
