//! Form store for completed production forms

use crate::domain::model::FormEntry;
use crate::error::Result;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// A completed form as persisted to disk
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SavedForm {
    /// Unique identifier
    pub id: String,
    /// When the form was saved
    pub saved_at: chrono::DateTime<chrono::Utc>,
    /// The filled form
    pub entry: FormEntry,
}

/// Persistent store for saved production forms
pub struct FormStore {
    store_path: PathBuf,
    forms: HashMap<String, SavedForm>,
}

impl FormStore {
    /// Create or load a form store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("forms.json");

        let forms = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            HashMap::new()
        };

        Ok(Self { store_path, forms })
    }

    /// Save store to disk
    fn save(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.forms)?;
        Ok(())
    }

    /// Persist a completed form and return its new id
    pub fn add_form(&mut self, entry: FormEntry) -> Result<String> {
        let form = SavedForm {
            id: uuid::Uuid::new_v4().to_string(),
            saved_at: chrono::Utc::now(),
            entry,
        };
        let id = form.id.clone();
        self.forms.insert(id.clone(), form);
        self.save()?;
        Ok(id)
    }

    /// Get a saved form by id
    pub fn get_form(&self, id: &str) -> Option<&SavedForm> {
        self.forms.get(id)
    }

    /// Remove a saved form by id
    pub fn remove_form(&mut self, id: &str) -> Result<bool> {
        let removed = self.forms.remove(id).is_some();
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    /// All saved forms, newest first
    pub fn all_forms(&self) -> Vec<&SavedForm> {
        let mut forms: Vec<_> = self.forms.values().collect();
        forms.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        forms
    }

    /// Delete every saved form
    pub fn clear(&mut self) -> Result<usize> {
        let count = self.forms.len();
        self.forms.clear();
        self.save()?;
        Ok(count)
    }

    /// Number of saved forms
    pub fn count(&self) -> usize {
        self.forms.len()
    }
}
