//! Immutable machine profile registry
//!
//! Built once at startup and shared read-only afterwards. Lookup misses
//! (unknown machine id, unrecognized barcode) are normal outcomes the
//! caller handles; only construction can fail, and it fails before any
//! form is generated.

use crate::constants::builtin_profiles;
use crate::domain::model::MachineProfile;
use crate::error::{Error, RegistryError, Result};
use std::collections::HashMap;
use std::path::Path;

/// Registry of machine profiles keyed by id and barcode
pub struct MachineRegistry {
    /// Profiles in definition order
    profiles: Vec<MachineProfile>,
    /// id -> index into profiles
    index: HashMap<String, usize>,
    /// barcode -> id
    barcodes: HashMap<String, String>,
}

impl MachineRegistry {
    /// Build a registry, rejecting defective profile sets
    pub fn new(profiles: Vec<MachineProfile>) -> std::result::Result<Self, RegistryError> {
        if profiles.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut index = HashMap::new();
        let mut barcodes: HashMap<String, String> = HashMap::new();

        for (i, profile) in profiles.iter().enumerate() {
            if index.insert(profile.id.clone(), i).is_some() {
                return Err(RegistryError::DuplicateId(profile.id.clone()));
            }
            if let Some(first) = barcodes.insert(profile.barcode.clone(), profile.id.clone()) {
                return Err(RegistryError::DuplicateBarcode {
                    barcode: profile.barcode.clone(),
                    first,
                    second: profile.id.clone(),
                });
            }
            if profile.materials.is_empty() {
                return Err(RegistryError::NoMaterials(profile.id.clone()));
            }
            if !(profile.tray.kg_per_tray > 0.0) {
                return Err(RegistryError::InvalidTrayWeight {
                    machine: profile.id.clone(),
                    kg_per_tray: profile.tray.kg_per_tray,
                });
            }
        }

        Ok(Self {
            profiles,
            index,
            barcodes,
        })
    }

    /// Registry with the factory's built-in machines
    pub fn builtin() -> std::result::Result<Self, RegistryError> {
        Self::new(builtin_profiles())
    }

    /// Load profiles from an external JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let profiles: Vec<MachineProfile> = serde_json::from_str(&content)?;
        Ok(Self::new(profiles).map_err(Error::Registry)?)
    }

    /// Machine ids in definition order
    pub fn machine_ids(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.id.as_str())
    }

    /// All profiles in definition order
    pub fn profiles(&self) -> &[MachineProfile] {
        &self.profiles
    }

    /// Look up a profile by machine id
    pub fn get(&self, id: &str) -> Option<&MachineProfile> {
        self.index.get(id).map(|&i| &self.profiles[i])
    }

    /// Resolve a scanned or typed barcode to a machine id
    pub fn resolve_barcode(&self, barcode: &str) -> Option<&str> {
        self.barcodes.get(barcode).map(|id| id.as_str())
    }

    /// Look up a profile by barcode
    pub fn get_by_barcode(&self, barcode: &str) -> Option<&MachineProfile> {
        self.resolve_barcode(barcode).and_then(|id| self.get(id))
    }

    /// Number of registered machines
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
