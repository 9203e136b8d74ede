//! Production form entry types
//!
//! A FormEntry is the mutable state one operator produces while filling
//! a machine's paper-form replica. Derived cells (SISA, HASIL) are
//! stored alongside the raw text so a saved form reads like the paper
//! original; they are recomputed from the raw text on every edit.

use serde::{Deserialize, Serialize};

/// One material row as filled in by the operator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialEntry {
    pub name: String,
    /// MASUK column, raw text
    pub masuk: String,
    /// KELUAR column, raw text
    pub keluar: String,
    /// SISA column, derived from MASUK and KELUAR
    pub sisa: String,
}

/// One waste row as filled in by the operator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasteEntry {
    pub name: String,
    /// Raw amount text
    pub value: String,
}

/// Header fields of the form; opaque operator strings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductionInfo {
    /// HARI/TANGGAL line ("Senin 05/08/2026")
    pub tanggal: String,
    /// SHIFT line ("1 Pagi")
    pub shift: String,
    /// OPERATOR line; the only field required before saving
    pub operator: String,
    /// NAMA lines 1-5
    #[serde(default)]
    pub nama: Vec<String>,
}

/// Free-text notes at the bottom of the form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Notes {
    /// KETERANGAN (remarks)
    pub keterangan: String,
    /// PART YANG DIGANTI (replaced parts)
    pub part_diganti: String,
}

/// The filled form for one machine and one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormEntry {
    /// Machine id this form was generated for
    pub machine_id: String,
    pub info: ProductionInfo,
    /// Material rows in form order
    pub materials: Vec<MaterialEntry>,
    /// Waste rows in form order
    pub waste: Vec<WasteEntry>,
    pub notes: Notes,
    /// HASIL line, recomputed on every relevant edit
    pub hasil: String,
}

impl FormEntry {
    /// Find a material row by name
    pub fn material(&self, name: &str) -> Option<&MaterialEntry> {
        self.materials.iter().find(|m| m.name == name)
    }

    /// Find a waste row by name
    pub fn waste(&self, name: &str) -> Option<&WasteEntry> {
        self.waste.iter().find(|w| w.name == name)
    }
}
