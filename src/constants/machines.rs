//! Built-in machine profiles for the factory floor
//!
//! Defaults mirror the handwritten figures of each machine's paper
//! form, including the loose formatting ("1,2575 Roll (23.75)").

use crate::domain::model::{
    MachineProfile, MaterialSpec, TrayRule, ValidationMode, WasteSpec,
};

fn material(
    name: &str,
    unit: &str,
    default_masuk: &str,
    description: &str,
    validation: ValidationMode,
) -> MaterialSpec {
    MaterialSpec {
        name: name.to_string(),
        unit: unit.to_string(),
        default_masuk: default_masuk.to_string(),
        description: description.to_string(),
        validation,
    }
}

fn waste(name: &str, unit: &str, default_amount: &str) -> WasteSpec {
    WasteSpec {
        name: name.to_string(),
        unit: unit.to_string(),
        default_amount: default_amount.to_string(),
    }
}

/// Profiles for the four production machines, in floor order
pub fn builtin_profiles() -> Vec<MachineProfile> {
    vec![
        MachineProfile {
            id: "GARANT".to_string(),
            name: "GARANT".to_string(),
            production_type: "SEY AK".to_string(),
            barcode: "GAR001".to_string(),
            materials: vec![
                material(
                    "TSG",
                    "kg",
                    "20 (400)",
                    "Tobacco Shredded Grade",
                    ValidationMode::Numeric,
                ),
                material(
                    "TSG REJECT",
                    "kg",
                    "-",
                    "TSG Reject Material",
                    ValidationMode::Optional,
                ),
                material(
                    "FILTER",
                    "T",
                    "1+1.25 + 19T (59)",
                    "Filter Material",
                    ValidationMode::FreeText,
                ),
                material(
                    "AMBRI",
                    "Roll",
                    "1,2575 Roll (23.75)",
                    "Ambri Material",
                    ValidationMode::FreeText,
                ),
                material(
                    "CTP",
                    "Roll",
                    "0.75+29 (11.95)",
                    "CTP Material",
                    ValidationMode::FreeText,
                ),
            ],
            waste_types: vec![
                waste("WASTE BATANG", "Kg", "40.15"),
                waste("WASTE RAJANG", "Kg", "17"),
                waste("WASTE AMBRI / FILTER", "Kg", "8"),
                waste("WOL / DEBU", "Kg", "15"),
                waste("SPARATOR", "Kg", "0.15"),
            ],
            tray: TrayRule {
                unit: "TREY".to_string(),
                kg_per_tray: 7.10,
                description: "1 Trey = 7.10 kg".to_string(),
            },
            default_result: "87 TREY 617.7 (1 Trey = 7.10)".to_string(),
        },
        MachineProfile {
            id: "HILED".to_string(),
            name: "HILED".to_string(),
            production_type: "SKY KUCK".to_string(),
            barcode: "HIL002".to_string(),
            materials: vec![
                material(
                    "TSG",
                    "kg",
                    "15 (200)",
                    "Tobacco Shredded Grade",
                    ValidationMode::Numeric,
                ),
                material(
                    "TSG REJECT",
                    "kg",
                    "-",
                    "TSG Reject Material",
                    ValidationMode::Optional,
                ),
                material(
                    "FILTER",
                    "kg",
                    "11 (42.35)",
                    "Filter Material",
                    ValidationMode::FreeText,
                ),
                material(
                    "AMBRI",
                    "Roll",
                    "3.05 + 3R / 16.55",
                    "Ambri Material",
                    ValidationMode::FreeText,
                ),
                material(
                    "CTP",
                    "Roll",
                    "4.20 + 1R / 9.8",
                    "CTP Material",
                    ValidationMode::FreeText,
                ),
            ],
            waste_types: vec![
                waste("WASTE BATANG", "Kg", "14"),
                waste("WASTE RAJANG", "Kg", "5"),
                waste("WASTE AMBRI / FILTER", "Kg", "4"),
                waste("WOL / DEBU", "Kg", "5"),
                waste("SPARATOR", "Kg", "0"),
            ],
            tray: TrayRule {
                unit: "TREY".to_string(),
                kg_per_tray: 7.0,
                description: "1 Trey = 7 kg".to_string(),
            },
            default_result: "67 TREY I TRAY = 7 kg (469 kg)".to_string(),
        },
        MachineProfile {
            id: "JARANT".to_string(),
            name: "JARANT".to_string(),
            production_type: "Sky Click".to_string(),
            barcode: "JAR003".to_string(),
            materials: vec![
                material(
                    "TSG",
                    "Sak",
                    "20 Sak (400)",
                    "Tobacco Shredded Grade",
                    ValidationMode::FreeText,
                ),
                material(
                    "TSG REJECT",
                    "kg",
                    "-",
                    "TSG Reject Material",
                    ValidationMode::Optional,
                ),
                material(
                    "FILTER",
                    "T",
                    "15T (57.75)",
                    "Filter Material",
                    ValidationMode::FreeText,
                ),
                material(
                    "AMBRI",
                    "Roll",
                    "2.85+5R (25.35)",
                    "Ambri Material",
                    ValidationMode::FreeText,
                ),
                material(
                    "CTP",
                    "Roll",
                    "2.70 + 2R (13.9)",
                    "CTP Material",
                    ValidationMode::FreeText,
                ),
            ],
            waste_types: vec![
                waste("WASTE BATANG", "Kg", "29"),
                waste("WASTE RAJANG", "Kg", "7"),
                waste("WASTE AMBRI / FILTER", "Kg", "5"),
                waste("WOL / DEBU", "Kg", "12"),
                waste("SPARATOR", "Kg", ""),
            ],
            tray: TrayRule {
                unit: "TREY".to_string(),
                kg_per_tray: 7.10,
                description: "1 TRE 7.10".to_string(),
            },
            default_result: "82 TREY 1 TRE 7.10 (582.2)".to_string(),
        },
        MachineProfile {
            id: "FMC8".to_string(),
            name: "FMC 8".to_string(),
            production_type: "Soy Click".to_string(),
            barcode: "FMC004".to_string(),
            materials: vec![
                material(
                    "TSG",
                    "sak",
                    "15 sak",
                    "Tobacco Shredded Grade",
                    ValidationMode::FreeText,
                ),
                material(
                    "TSG REJECT",
                    "kg",
                    "-",
                    "TSG Reject Material",
                    ValidationMode::Optional,
                ),
                material(
                    "FILTER",
                    "Trey",
                    "11.Trey + 3,15 (95,5)",
                    "Filter Material",
                    ValidationMode::FreeText,
                ),
                material(
                    "AMBRI",
                    "Roll",
                    "3R + 1.70 (15.2)",
                    "Ambri Material",
                    ValidationMode::FreeText,
                ),
                material(
                    "CTP",
                    "Roll",
                    "1R + 2.65 (R.25)",
                    "CTP Material",
                    ValidationMode::FreeText,
                ),
            ],
            waste_types: vec![
                waste("WASTE BATANG", "Kg", "18.20"),
                waste("WASTE RAJANG", "Kg", "4"),
                waste("WASTE AMBRI / FILTER", "Kg", "5.20"),
                waste("WOL / DEBU", "Kg", "6"),
                waste("SPARATOR", "Kg", ""),
            ],
            tray: TrayRule {
                unit: "TREY".to_string(),
                kg_per_tray: 7.0,
                description: "1 The 7-".to_string(),
            },
            default_result: "61 TREY 427 (1 The 7-)".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_machines_defined() {
        let profiles = builtin_profiles();
        assert_eq!(profiles.len(), 4);
        let ids: Vec<&str> = profiles.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["GARANT", "HILED", "JARANT", "FMC8"]);
    }

    #[test]
    fn test_every_machine_has_full_form() {
        for profile in builtin_profiles() {
            assert_eq!(profile.materials.len(), 5, "machine {}", profile.id);
            assert_eq!(profile.waste_types.len(), 5, "machine {}", profile.id);
            assert!(profile.tray.kg_per_tray > 0.0, "machine {}", profile.id);
            assert!(!profile.barcode.is_empty(), "machine {}", profile.id);
        }
    }

    #[test]
    fn test_garant_defaults() {
        let profiles = builtin_profiles();
        let garant = profiles.iter().find(|p| p.id == "GARANT").unwrap();
        assert_eq!(garant.material("TSG").unwrap().default_masuk, "20 (400)");
        assert_eq!(garant.material("TSG REJECT").unwrap().default_masuk, "-");
        assert_eq!(garant.waste("SPARATOR").unwrap().default_amount, "0.15");
        assert_eq!(garant.tray.kg_per_tray, 7.10);
    }
}
