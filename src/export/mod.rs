//! Export saved forms as JSON or CSV
//!
//! CSV output is the flat Field,Value layout the office spreadsheet
//! expects: header info first, then per-material MASUK/KELUAR/SISA
//! rows, waste rows, HASIL, and the notes.

use crate::error::Result;
use crate::store::SavedForm;
use std::path::Path;

/// Write a saved form as pretty JSON
pub fn write_json(form: &SavedForm, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(form)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Write a saved form as Field,Value CSV
pub fn write_csv(form: &SavedForm, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Field", "Value"])?;
    for (field, value) in csv_rows(form) {
        writer.write_record([field.as_str(), value.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Flatten a saved form into Field,Value rows
pub fn csv_rows(form: &SavedForm) -> Vec<(String, String)> {
    let entry = &form.entry;
    let mut rows = Vec::new();

    rows.push(("FORM ID".to_string(), form.id.clone()));
    rows.push(("MESIN".to_string(), entry.machine_id.clone()));
    rows.push(("HARI/TANGGAL".to_string(), entry.info.tanggal.clone()));
    rows.push(("SHIFT".to_string(), entry.info.shift.clone()));
    rows.push(("OPERATOR".to_string(), entry.info.operator.clone()));
    for (i, nama) in entry.info.nama.iter().enumerate() {
        rows.push((format!("NAMA {}", i + 1), nama.clone()));
    }

    for material in &entry.materials {
        rows.push((format!("{} MASUK", material.name), material.masuk.clone()));
        rows.push((format!("{} KELUAR", material.name), material.keluar.clone()));
        rows.push((format!("{} SISA", material.name), material.sisa.clone()));
    }

    for waste in &entry.waste {
        rows.push((waste.name.clone(), waste.value.clone()));
    }

    rows.push(("HASIL".to_string(), entry.hasil.clone()));
    rows.push(("KETERANGAN".to_string(), entry.notes.keterangan.clone()));
    rows.push((
        "PART YANG DIGANTI".to_string(),
        entry.notes.part_diganti.clone(),
    ));

    rows
}
