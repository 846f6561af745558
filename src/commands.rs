use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::config;
use crate::fixtures::{AvailabilityProvider, Catalog, SlotQuery, StaticAvailability};

/// Print the salon's contact details, stylists and services.
pub fn run_catalog(config_path: &Path) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let catalog = Catalog::fixture();
    info!(
        "Catalog: {} stylists, {} services",
        catalog.staff.len(),
        catalog.services.len()
    );

    println!("{}", cfg.salon.name);
    println!("  {} | {} | {}", cfg.salon.address, cfg.salon.phone, cfg.salon.hours);
    println!();
    println!("Stylists:");
    for m in &catalog.staff {
        println!(
            "  [{}] {} - {} ({}, {})",
            m.id, m.name, m.specialization, m.phone, m.email
        );
    }
    println!();
    println!("Services:");
    for s in &catalog.services {
        println!(
            "  [{}] {} - {} min, {} ₽: {}",
            s.id, s.name, s.duration_minutes, s.price, s.description
        );
    }
    Ok(())
}

/// Print the daily time-slot pattern.
pub fn run_slots() -> Result<()> {
    let slots = StaticAvailability::default().slots(&SlotQuery::default());
    let open = slots.iter().filter(|s| s.available).count();
    println!("Time slots ({} of {} open):", open, slots.len());
    for slot in &slots {
        let status = if slot.available { "open" } else { "unavailable" };
        println!("  {}  {}", slot.time, status);
    }
    Ok(())
}
