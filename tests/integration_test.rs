//! Integration tests for the production form flow

use produksi_form::app::FormSession;
use produksi_form::domain::model::FormEntry;
use produksi_form::domain::service::quantity::{calculate_hasil, calculate_sisa};
use produksi_form::export;
use produksi_form::registry::MachineRegistry;
use produksi_form::store::FormStore;
use tempfile::tempdir;

fn garant_session() -> FormSession {
    let registry = MachineRegistry::builtin().expect("built-in registry should load");
    let profile = registry.get("GARANT").expect("GARANT should be registered");
    FormSession::with_header(profile, "Senin 01/01/2024".to_string(), "1 Pagi".to_string())
}

/// Full flow: resolve by barcode, fill the form, compute, save, reload
#[test]
fn test_form_flow_scan_fill_save() {
    let registry = MachineRegistry::builtin().expect("built-in registry should load");

    // Resolve by barcode, as the scanner screen would
    let machine_id = registry.resolve_barcode("GAR001").expect("GAR001 should resolve");
    assert_eq!(machine_id, "GARANT");
    let profile = registry.get(machine_id).expect("resolved machine should exist");

    let mut session =
        FormSession::with_header(profile, "Senin 01/01/2024".to_string(), "1 Pagi".to_string());
    session.set_operator("Budi");
    session.set_nama(0, "Sari").unwrap();

    // Only TSG goes in this shift; blank out the other materials
    session.set_masuk("TSG", "200").unwrap();
    session.set_keluar("TSG", "150").unwrap();
    session.set_masuk("FILTER", "-").unwrap();
    session.set_masuk("AMBRI", "-").unwrap();
    session.set_masuk("CTP", "-").unwrap();

    let entry = session.entry();
    assert_eq!(entry.material("TSG").unwrap().sisa, "50.00");
    // input 200, default waste total 80.3, production 119.7,
    // floor(119.7/7.10) = 16 trays
    assert_eq!(entry.hasil, "16 TREY 113.6 (1 Trey = 7.10 kg)");

    // Save and reload through the store
    session.validate().expect("operator is set");

    let temp_dir = tempdir().expect("Failed to create temp dir");
    let mut store = FormStore::open(temp_dir.path().to_path_buf()).expect("Failed to open store");
    assert_eq!(store.count(), 0);

    let id = store.add_form(session.into_entry()).expect("Failed to save form");
    assert_eq!(store.count(), 1);

    let reopened = FormStore::open(temp_dir.path().to_path_buf()).expect("Failed to reopen store");
    let saved = reopened.get_form(&id).expect("Saved form not found");
    assert_eq!(saved.entry.machine_id, "GARANT");
    assert_eq!(saved.entry.info.operator, "Budi");
    assert_eq!(saved.entry.hasil, "16 TREY 113.6 (1 Trey = 7.10 kg)");
}

/// Store CRUD operations
#[test]
fn test_form_store() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let mut store = FormStore::open(temp_dir.path().to_path_buf()).expect("Failed to open store");

    assert_eq!(store.count(), 0);
    assert!(store.all_forms().is_empty());

    let mut session = garant_session();
    session.set_operator("Budi");
    let id1 = store.add_form(session.entry().clone()).expect("Failed to add form");

    let mut session2 = garant_session();
    session2.set_operator("Sari");
    let id2 = store.add_form(session2.into_entry()).expect("Failed to add form");

    assert_eq!(store.count(), 2);
    assert_ne!(id1, id2);

    // Newest first
    let all = store.all_forms();
    assert_eq!(all.len(), 2);
    assert!(all[0].saved_at >= all[1].saved_at);

    let removed = store.remove_form(&id1).expect("Failed to remove");
    assert!(removed);
    assert_eq!(store.count(), 1);
    assert!(store.get_form(&id1).is_none());

    let cleared = store.clear().expect("Failed to clear");
    assert_eq!(cleared, 1);
    assert_eq!(store.count(), 0);
}

/// Derived cells are a pure function of the raw text: a serialize /
/// deserialize round trip followed by recomputation reproduces them
#[test]
fn test_round_trip_recompute() {
    let registry = MachineRegistry::builtin().expect("built-in registry should load");
    let profile = registry.get("HILED").expect("HILED should be registered");

    let mut session =
        FormSession::with_header(profile, "Selasa 02/01/2024".to_string(), "2 Siang".to_string());
    session.set_operator("Tono");
    session.set_keluar("TSG", "4").unwrap();
    session.set_keluar("FILTER", "2.5").unwrap();
    session.set_waste("SPARATOR", "1.25").unwrap();
    let original = session.into_entry();

    let json = serde_json::to_string(&original).expect("serialize");
    let restored: FormEntry = serde_json::from_str(&json).expect("deserialize");

    for (before, after) in original.materials.iter().zip(restored.materials.iter()) {
        assert_eq!(before.sisa, calculate_sisa(&after.masuk, &after.keluar));
    }
    assert_eq!(
        original.hasil,
        calculate_hasil(&restored.materials, &restored.waste, &profile.tray)
    );
}

/// Exported files reflect the saved form
#[test]
fn test_export_saved_form() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let mut store = FormStore::open(temp_dir.path().to_path_buf()).expect("Failed to open store");

    let mut session = garant_session();
    session.set_operator("Budi");
    session.set_keterangan("mesin lancar");
    let id = store.add_form(session.into_entry()).expect("Failed to save form");
    let form = store.get_form(&id).expect("Saved form not found");

    let csv_path = temp_dir.path().join("export.csv");
    export::write_csv(form, &csv_path).expect("CSV export failed");
    let csv = std::fs::read_to_string(&csv_path).expect("read CSV");
    assert!(csv.contains("OPERATOR,Budi"));
    assert!(csv.contains("TSG MASUK,20 (400)"));
    assert!(csv.contains("WASTE BATANG,40.15"));

    let json_path = temp_dir.path().join("export.json");
    export::write_json(form, &json_path).expect("JSON export failed");
    let parsed: produksi_form::store::SavedForm =
        serde_json::from_str(&std::fs::read_to_string(&json_path).expect("read JSON"))
            .expect("parse JSON");
    assert_eq!(parsed.id, id);
    assert_eq!(parsed.entry.info.operator, "Budi");
}
