//! Item info command handler

use anyhow::Result;
use gunsmith::{AmmoType, Catalog, GrenadeType, ItemType};
use serde::Serialize;

use crate::cli::OutputFormat;

/// Categories and conversions for a single item
#[derive(Debug, Serialize)]
pub struct ItemReport {
    pub item: ItemType,
    pub categories: Vec<&'static str>,
    pub ammo_type: Option<AmmoType>,
    pub grenade_type: Option<GrenadeType>,
    pub max_ammo: Option<u8>,
}

pub fn item_report(catalog: &Catalog, item: ItemType) -> ItemReport {
    let ammo_type = Some(item.ammo_type()).filter(|a| *a != AmmoType::None);
    let max_ammo = Some(catalog.max_ammo(item)).filter(|n| *n > 0);

    ItemReport {
        item,
        categories: item.categories(),
        ammo_type,
        grenade_type: item.grenade_type(),
        max_ammo,
    }
}

pub fn render_item(report: &ItemReport, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(report)?);
    }

    let mut out = format!("{}\n", report.item);
    let categories = if report.categories.is_empty() {
        "none".to_string()
    } else {
        report.categories.join(", ")
    };
    out.push_str(&format!("  Categories: {}\n", categories));
    if let Some(ammo) = report.ammo_type {
        out.push_str(&format!("  Ammo type:  {:?}\n", ammo));
    }
    if let Some(grenade) = report.grenade_type {
        out.push_str(&format!("  Grenade:    {:?}\n", grenade));
    }
    if let Some(max_ammo) = report.max_ammo {
        out.push_str(&format!("  Max ammo:   {}\n", max_ammo));
    }
    Ok(out)
}

/// Handle the item command
pub fn show(catalog: &Catalog, item: ItemType, format: OutputFormat) -> Result<()> {
    print!("{}", render_item(&item_report(catalog, item), format)?);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ammo_item() {
        let report = item_report(Catalog::builtin(), ItemType::Ammo556x45);
        assert_eq!(report.categories, vec!["ammo"]);
        assert_eq!(report.ammo_type, Some(AmmoType::Nato556));
        assert_eq!(report.max_ammo, None);
    }

    #[test]
    fn test_firearm_item() {
        let report = item_report(Catalog::builtin(), ItemType::GunRevolver);
        assert_eq!(report.categories, vec!["weapon"]);
        assert_eq!(report.max_ammo, Some(6));
        let out = render_item(&report, OutputFormat::Table).unwrap();
        assert_eq!(
            out,
            "GunRevolver\n  Categories: weapon\n  Max ammo:   6\n"
        );
    }

    #[test]
    fn test_grenade_item_json() {
        let report = item_report(Catalog::builtin(), ItemType::SCP018);
        let json: serde_json::Value =
            serde_json::from_str(&render_item(&report, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["grenade_type"], "Scp018");
        assert_eq!(json["categories"][1], "throwable");
        assert!(json["ammo_type"].is_null());
    }

    #[test]
    fn test_plain_item() {
        let report = item_report(&Catalog::default(), ItemType::Coin);
        let out = render_item(&report, OutputFormat::Table).unwrap();
        assert_eq!(out, "Coin\n  Categories: none\n");
    }
}
