//! Interactive form session
//!
//! A session owns exactly one FormEntry and recomputes the derived
//! cells on every edit, the way the on-screen form does: editing a
//! material updates that row's SISA and the form HASIL; editing a
//! waste amount updates HASIL only.

use crate::domain::model::{FormEntry, MachineProfile, MaterialEntry, Notes, ProductionInfo, WasteEntry};
use crate::domain::service::quantity::{calculate_hasil, calculate_sisa, BLANK};
use crate::domain::service::shift::{format_tanggal, Shift};
use crate::error::{Error, Result};
use chrono::Timelike;

/// Number of NAMA lines on the printed form
const NAMA_LINES: usize = 5;

/// One operator's editing session over a machine-specific form
pub struct FormSession {
    profile: MachineProfile,
    entry: FormEntry,
}

impl FormSession {
    /// Start a session with today's date and the current shift
    pub fn new(profile: &MachineProfile) -> Self {
        let now = chrono::Local::now();
        Self::with_header(
            profile,
            format_tanggal(now.date_naive()),
            Shift::from_hour(now.hour()).label().to_string(),
        )
    }

    /// Start a session with explicit header values
    pub fn with_header(profile: &MachineProfile, tanggal: String, shift: String) -> Self {
        let entry = FormEntry {
            machine_id: profile.id.clone(),
            info: ProductionInfo {
                tanggal,
                shift,
                operator: String::new(),
                nama: vec![String::new(); NAMA_LINES],
            },
            materials: prefilled_materials(profile),
            waste: prefilled_waste(profile),
            notes: Notes::default(),
            hasil: profile.default_result.clone(),
        };

        let mut session = Self {
            profile: profile.clone(),
            entry,
        };
        session.recompute_all();
        session
    }

    pub fn profile(&self) -> &MachineProfile {
        &self.profile
    }

    pub fn entry(&self) -> &FormEntry {
        &self.entry
    }

    pub fn into_entry(self) -> FormEntry {
        self.entry
    }

    /// Edit a material's MASUK cell
    pub fn set_masuk(&mut self, material: &str, value: &str) -> Result<()> {
        let idx = self.material_index(material)?;
        self.entry.materials[idx].masuk = value.to_string();
        self.recompute_material(idx);
        self.recompute_hasil();
        Ok(())
    }

    /// Edit a material's KELUAR cell
    pub fn set_keluar(&mut self, material: &str, value: &str) -> Result<()> {
        let idx = self.material_index(material)?;
        self.entry.materials[idx].keluar = value.to_string();
        self.recompute_material(idx);
        self.recompute_hasil();
        Ok(())
    }

    /// Edit a waste amount
    pub fn set_waste(&mut self, name: &str, value: &str) -> Result<()> {
        let idx = self
            .entry
            .waste
            .iter()
            .position(|w| w.name == name)
            .ok_or_else(|| Error::UnknownWaste {
                machine: self.profile.id.clone(),
                waste: name.to_string(),
            })?;
        self.entry.waste[idx].value = value.to_string();
        self.recompute_hasil();
        Ok(())
    }

    pub fn set_tanggal(&mut self, tanggal: &str) {
        self.entry.info.tanggal = tanggal.to_string();
    }

    pub fn set_shift(&mut self, shift: &str) {
        self.entry.info.shift = shift.to_string();
    }

    pub fn set_operator(&mut self, operator: &str) {
        self.entry.info.operator = operator.to_string();
    }

    /// Set one of the NAMA lines (0-based)
    pub fn set_nama(&mut self, index: usize, name: &str) -> Result<()> {
        if index >= self.entry.info.nama.len() {
            return Err(Error::Validation(format!(
                "NAMA line {} does not exist (form has {})",
                index + 1,
                self.entry.info.nama.len()
            )));
        }
        self.entry.info.nama[index] = name.to_string();
        Ok(())
    }

    pub fn set_keterangan(&mut self, text: &str) {
        self.entry.notes.keterangan = text.to_string();
    }

    pub fn set_part_diganti(&mut self, text: &str) {
        self.entry.notes.part_diganti = text.to_string();
    }

    /// Restore the prefilled material and waste defaults; header and
    /// notes are kept
    pub fn reset(&mut self) {
        self.entry.materials = prefilled_materials(&self.profile);
        self.entry.waste = prefilled_waste(&self.profile);
        self.recompute_all();
    }

    /// Recompute every SISA cell and the HASIL line
    pub fn recompute_all(&mut self) {
        for idx in 0..self.entry.materials.len() {
            self.recompute_material(idx);
        }
        self.recompute_hasil();
    }

    /// The check performed before saving: operator must be filled in
    pub fn validate(&self) -> Result<()> {
        if self.entry.info.operator.trim().is_empty() {
            return Err(Error::Validation("OPERATOR is required".to_string()));
        }
        Ok(())
    }

    fn material_index(&self, name: &str) -> Result<usize> {
        self.entry
            .materials
            .iter()
            .position(|m| m.name == name)
            .ok_or_else(|| Error::UnknownMaterial {
                machine: self.profile.id.clone(),
                material: name.to_string(),
            })
    }

    fn recompute_material(&mut self, idx: usize) {
        let row = &mut self.entry.materials[idx];
        row.sisa = calculate_sisa(&row.masuk, &row.keluar);
    }

    fn recompute_hasil(&mut self) {
        self.entry.hasil =
            calculate_hasil(&self.entry.materials, &self.entry.waste, &self.profile.tray);
    }
}

fn prefilled_materials(profile: &MachineProfile) -> Vec<MaterialEntry> {
    profile
        .materials
        .iter()
        .map(|m| MaterialEntry {
            name: m.name.clone(),
            masuk: m.default_masuk.clone(),
            keluar: String::new(),
            sisa: BLANK.to_string(),
        })
        .collect()
}

fn prefilled_waste(profile: &MachineProfile) -> Vec<WasteEntry> {
    profile
        .waste_types
        .iter()
        .map(|w| WasteEntry {
            name: w.name.clone(),
            value: w.default_amount.clone(),
        })
        .collect()
}
