//! Output formatting module

use crate::cli::OutputFormat;
use crate::domain::model::{FormEntry, MachinePreview, MachineProfile, ValidationMode};
use crate::error::Result;
use crate::registry::MachineRegistry;
use crate::store::SavedForm;
use serde_json::json;

/// Print the machine list
pub fn output_machines(output_format: OutputFormat, registry: &MachineRegistry) -> Result<()> {
    if output_format == OutputFormat::Json {
        let machines: Vec<_> = registry
            .profiles()
            .iter()
            .map(|p| {
                json!({
                    "id": p.id,
                    "name": p.name,
                    "production_type": p.production_type,
                    "barcode": p.barcode,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&machines)?);
    } else {
        println!("\nRegistered Machines");
        println!("===================");
        println!("{:<10} {:<10} {:<12} {:<10}", "ID", "NAME", "PRODUKSI", "BARCODE");
        println!("{}", "-".repeat(44));
        for profile in registry.profiles() {
            println!(
                "{:<10} {:<10} {:<12} {:<10}",
                profile.id, profile.name, profile.production_type, profile.barcode
            );
        }
    }

    Ok(())
}

/// Print one machine's full profile
pub fn output_profile(output_format: OutputFormat, profile: &MachineProfile) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(profile)?);
        return Ok(());
    }

    println!("\nMachine {}", profile.id);
    println!("================");
    println!("Name:        {}", profile.name);
    println!("Produksi:    {}", profile.production_type);
    println!("Barcode:     {}", profile.barcode);
    println!(
        "Tray rule:   1 {} = {} kg ({})",
        profile.tray.unit, profile.tray.kg_per_tray, profile.tray.description
    );

    println!("\nMaterials");
    println!("{:<12} {:<6} {:<22} {:<10}", "BAHAN", "UNIT", "DEFAULT MASUK", "VALIDATION");
    println!("{}", "-".repeat(52));
    for material in &profile.materials {
        let validation = match material.validation {
            ValidationMode::Numeric => "number",
            ValidationMode::FreeText => "text",
            ValidationMode::Optional => "optional",
        };
        println!(
            "{:<12} {:<6} {:<22} {:<10}",
            material.name, material.unit, material.default_masuk, validation
        );
    }

    println!("\nWaste Categories");
    println!("{:<22} {:<6} {:<10}", "NAME", "UNIT", "DEFAULT");
    println!("{}", "-".repeat(40));
    for waste in &profile.waste_types {
        println!(
            "{:<22} {:<6} {:<10}",
            waste.name, waste.unit, waste.default_amount
        );
    }

    Ok(())
}

/// Print the outcome of a barcode scan
pub fn output_scan(
    output_format: OutputFormat,
    machine_id: &str,
    preview: &MachinePreview,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "machine_id": machine_id,
                "preview": preview,
            }))?
        );
    } else {
        println!("Machine detected: {}", machine_id);
        println!("Name:     {}", preview.name);
        println!("Produksi: {}", preview.production_type);
        for (name, default_masuk) in &preview.materials {
            println!("  {:<12} {}", name, default_masuk);
        }
    }

    Ok(())
}

/// Print a form as the paper replica (or JSON)
pub fn output_form(
    output_format: OutputFormat,
    entry: &FormEntry,
    profile: Option<&MachineProfile>,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(entry)?);
        return Ok(());
    }

    let mesin = profile.map(|p| p.name.as_str()).unwrap_or(&entry.machine_id);
    let produksi = profile.map(|p| p.production_type.as_str()).unwrap_or("");

    println!("==================================================");
    println!("                      MAKER");
    println!("           CV. DELTA TOBACCO CIGARETTES");
    println!("==================================================");
    println!();
    println!("HARI/TANGGAL: {}", entry.info.tanggal);
    println!("SHIFT:        {}", entry.info.shift);
    println!("MESIN:        {}", mesin);
    println!("PRODUKSI:     {}", produksi);
    println!("OPERATOR:     {}", entry.info.operator);
    for (i, nama) in entry.info.nama.iter().enumerate() {
        if i == 0 {
            println!("NAMA:         1. {}", nama);
        } else {
            println!("              {}. {}", i + 1, nama);
        }
    }

    println!();
    println!(
        "{:<12} {:<22} {:<22} {:>8}",
        "BAHAN", "MASUK", "KELUAR", "SISA"
    );
    println!("{}", "-".repeat(68));
    for material in &entry.materials {
        println!(
            "{:<12} {:<22} {:<22} {:>8}",
            material.name, material.masuk, material.keluar, material.sisa
        );
    }

    println!();
    println!("WASTE DATA");
    println!("{}", "-".repeat(34));
    for waste in &entry.waste {
        println!("{:<22} {:>10}", waste.name, waste.value);
    }

    println!();
    println!("HASIL: {}", entry.hasil);
    println!();
    println!("KETERANGAN:        {}", entry.notes.keterangan);
    println!("PART YANG DIGANTI: {}", entry.notes.part_diganti);
    println!("==================================================");

    Ok(())
}

/// Print one saved form with its store metadata
pub fn output_saved_form(
    output_format: OutputFormat,
    form: &SavedForm,
    profile: Option<&MachineProfile>,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(form)?);
        return Ok(());
    }

    println!("Form {} (saved {})", form.id, form.saved_at.format("%Y-%m-%d %H:%M"));
    output_form(output_format, &form.entry, profile)
}

/// Print the saved-forms listing
pub fn output_saved_forms(output_format: OutputFormat, forms: &[&SavedForm]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&forms)?);
        return Ok(());
    }

    if forms.is_empty() {
        println!("No saved forms.");
        return Ok(());
    }

    println!("\nSaved Forms");
    println!("===========");
    println!(
        "{:<38} {:<17} {:<8} {:<12} {}",
        "ID", "SAVED AT", "MESIN", "OPERATOR", "HASIL"
    );
    println!("{}", "-".repeat(100));
    for form in forms {
        println!(
            "{:<38} {:<17} {:<8} {:<12} {}",
            form.id,
            form.saved_at.format("%Y-%m-%d %H:%M"),
            form.entry.machine_id,
            form.entry.info.operator,
            form.entry.hasil
        );
    }

    Ok(())
}

/// Print a single SISA computation
pub fn output_sisa(
    output_format: OutputFormat,
    masuk: &str,
    keluar: &str,
    sisa: &str,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "masuk": masuk,
                "keluar": keluar,
                "sisa": sisa,
            }))?
        );
    } else {
        println!("{}", sisa);
    }

    Ok(())
}
