//! Machine profile type definitions
//!
//! One profile describes one physical production machine: the material
//! rows and waste categories printed on its paper form, and the tray
//! conversion rule used for the HASIL line.

use serde::{Deserialize, Serialize};

/// Validation rule applied to a material's MASUK field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationMode {
    /// Plain number ("20", "3.5") or the blank marker "-"
    #[serde(rename = "number")]
    Numeric,
    /// Any non-empty text
    #[serde(rename = "text")]
    FreeText,
    /// Always accepted
    #[serde(rename = "optional")]
    Optional,
}

impl ValidationMode {
    /// Check an operator-entered value against this mode
    pub fn accepts(&self, input: &str) -> bool {
        match self {
            ValidationMode::Numeric => input == "-" || is_plain_number(input),
            ValidationMode::FreeText => !input.is_empty(),
            ValidationMode::Optional => true,
        }
    }
}

/// Whole string is digits with at most one fractional part
fn is_plain_number(s: &str) -> bool {
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s, None),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match frac_part {
        Some(f) => !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()),
        None => true,
    }
}

/// One material row of the production form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Name shown in the BAHAN column (e.g. "TSG", "FILTER")
    pub name: String,
    /// Display unit (kg, Roll, Sak, Trey - free text)
    pub unit: String,
    /// Raw default text prefilled into the MASUK column; may embed
    /// several numbers and a parenthetical total ("20 (400)")
    #[serde(rename = "default")]
    pub default_masuk: String,
    /// Long name of the material
    pub description: String,
    /// Validation applied when the operator edits MASUK
    pub validation: ValidationMode,
}

/// One waste category of the production form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasteSpec {
    /// Category name (e.g. "WASTE BATANG"), unique within a profile
    pub name: String,
    /// Display unit
    pub unit: String,
    /// Raw default amount text
    #[serde(rename = "default")]
    pub default_amount: String,
}

/// Conversion rule from produced kilograms to trays
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrayRule {
    /// Display unit for the result (e.g. "TREY")
    pub unit: String,
    /// Kilograms per tray; always positive in a valid profile
    #[serde(rename = "multiplier")]
    pub kg_per_tray: f64,
    /// Human label appended to the result text ("1 Trey = 7.10 kg")
    pub description: String,
}

/// Configuration record for one physical production machine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineProfile {
    /// Stable short identifier ("GARANT"), unique key
    pub id: String,
    /// Display name on the printed form ("FMC 8")
    pub name: String,
    /// Production type label ("SEY AK")
    pub production_type: String,
    /// Scannable barcode mapped 1:1 to this machine
    pub barcode: String,
    /// Material rows in form order
    pub materials: Vec<MaterialSpec>,
    /// Waste categories in form order
    pub waste_types: Vec<WasteSpec>,
    /// Tray conversion rule
    pub tray: TrayRule,
    /// Historical HASIL text shown before the first recalculation
    pub default_result: String,
}

/// Short summary shown after a successful scan
#[derive(Debug, Clone, Serialize)]
pub struct MachinePreview {
    pub name: String,
    pub production_type: String,
    /// First material rows as (name, default MASUK) pairs
    pub materials: Vec<(String, String)>,
}

impl MachineProfile {
    /// Find a material spec by name
    pub fn material(&self, name: &str) -> Option<&MaterialSpec> {
        self.materials.iter().find(|m| m.name == name)
    }

    /// Find a waste spec by name
    pub fn waste(&self, name: &str) -> Option<&WasteSpec> {
        self.waste_types.iter().find(|w| w.name == name)
    }

    /// Summary with the first two material defaults
    pub fn preview(&self) -> MachinePreview {
        MachinePreview {
            name: self.name.clone(),
            production_type: self.production_type.clone(),
            materials: self
                .materials
                .iter()
                .take(2)
                .map(|m| (m.name.clone(), m.default_masuk.clone()))
                .collect(),
        }
    }
}
