//! Example demonstrating the record → entity → database flow.
//!
//! This example shows how a loader hands off raw records, how the
//! database links the two collections, and how the export rows look.

use neo_rust::api::ApproachId;
use neo_rust::db::NeoDatabase;
use neo_rust::models::{ApproachRecord, NeoRecord};

/// Example 1: building entities from partial records
fn example_record_construction() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Example 1: Record Construction ===");

    let eros = NeoRecord {
        designation: Some("433".to_string()),
        name: Some("Eros".to_string()),
        diameter: Some("16.840".to_string()),
        hazardous: Some("N".to_string()),
    }
    .build()?;
    println!("{}", eros);

    // Missing fields default instead of erroring.
    let sparse = NeoRecord {
        designation: Some("2000 AB".to_string()),
        ..Default::default()
    }
    .build()?;
    println!("{}", sparse);

    Ok(())
}

/// Example 2: linking and export
fn example_link_and_export() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n=== Example 2: Linking and Export ===");

    let neos = vec![NeoRecord {
        designation: Some("433".to_string()),
        name: Some("Eros".to_string()),
        diameter: Some("16.840".to_string()),
        hazardous: Some("N".to_string()),
    }
    .build()?];

    let approaches = vec![ApproachRecord {
        designation: Some("433".to_string()),
        time: Some("2025-Nov-30 02:18".to_string()),
        distance: Some("0.397647".to_string()),
        velocity: Some("3.72".to_string()),
    }
    .build()?];

    let db = NeoDatabase::new(neos, approaches);
    println!(
        "Database holds {} NEOs and {} close approaches",
        db.neos().len(),
        db.approaches().len()
    );

    if let Some(text) = db.describe_approach(ApproachId::new(0)) {
        println!("{}", text);
    }

    let row = db.serialize_approach(ApproachId::new(0))?;
    println!("Export row: {}", serde_json::to_string_pretty(&row)?);

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    example_record_construction()?;
    example_link_and_export()?;
    Ok(())
}
