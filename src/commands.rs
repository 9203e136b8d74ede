//! Command handlers

use crate::app::FormSession;
use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::domain::service::quantity::calculate_sisa;
use crate::error::{Error, Result};
use crate::export;
use crate::output::{
    output_form, output_machines, output_profile, output_saved_form, output_saved_forms,
    output_scan, output_sisa,
};
use crate::registry::MachineRegistry;
use crate::store::FormStore;
use std::path::PathBuf;

/// Field edits for a new form, as NAME=VALUE pairs from the CLI
struct NewForm<'a> {
    machine: Option<&'a str>,
    barcode: Option<&'a str>,
    operator: Option<&'a str>,
    shift: Option<&'a str>,
    tanggal: Option<&'a str>,
    nama: &'a [String],
    masuk: &'a [String],
    keluar: &'a [String],
    waste: &'a [String],
    keterangan: Option<&'a str>,
    part_diganti: Option<&'a str>,
    save: bool,
}

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Machines => cmd_machines(&config, output_format),

        Commands::Show { machine } => cmd_show(&config, machine, output_format),

        Commands::Scan { barcode } => cmd_scan(&cli, &config, barcode, output_format),

        Commands::New {
            machine,
            barcode,
            operator,
            shift,
            tanggal,
            nama,
            masuk,
            keluar,
            waste,
            keterangan,
            part_diganti,
            save,
        } => cmd_new(
            &cli,
            &config,
            output_format,
            NewForm {
                machine: machine.as_deref(),
                barcode: barcode.as_deref(),
                operator: operator.as_deref(),
                shift: shift.as_deref(),
                tanggal: tanggal.as_deref(),
                nama,
                masuk,
                keluar,
                waste,
                keterangan: keterangan.as_deref(),
                part_diganti: part_diganti.as_deref(),
                save: *save,
            },
        ),

        Commands::Sisa { masuk, keluar } => {
            output_sisa(output_format, masuk, keluar, &calculate_sisa(masuk, keluar))
        }

        Commands::Forms { limit, clear } => cmd_forms(&config, *limit, *clear, output_format),

        Commands::Form { form_id } => cmd_form(&config, form_id, output_format),

        Commands::Export { form_id, output } => cmd_export(&cli, &config, form_id, output.clone()),

        Commands::Config {
            show,
            set_store_dir,
            set_machines_file,
            set_output,
            reset,
        } => cmd_config(
            *show,
            set_store_dir.clone(),
            set_machines_file.clone(),
            *set_output,
            *reset,
        ),
    }
}

/// Build the registry from the configured source
fn load_registry(config: &Config) -> Result<MachineRegistry> {
    match &config.machines_file {
        Some(path) => MachineRegistry::from_json_file(path),
        None => Ok(MachineRegistry::builtin()?),
    }
}

fn cmd_machines(config: &Config, output_format: OutputFormat) -> Result<()> {
    let registry = load_registry(config)?;
    output_machines(output_format, &registry)
}

fn cmd_show(config: &Config, machine: &str, output_format: OutputFormat) -> Result<()> {
    let registry = load_registry(config)?;
    let profile = registry
        .get(machine)
        .ok_or_else(|| Error::UnknownMachine(machine.to_string()))?;
    output_profile(output_format, profile)
}

fn cmd_scan(cli: &Cli, config: &Config, barcode: &str, output_format: OutputFormat) -> Result<()> {
    let registry = load_registry(config)?;

    if cli.verbose {
        eprintln!("Barcode detected: {}", barcode);
    }

    let machine_id = registry
        .resolve_barcode(barcode)
        .ok_or_else(|| Error::UnknownBarcode(barcode.to_string()))?;
    let profile = registry
        .get(machine_id)
        .ok_or_else(|| Error::UnknownMachine(machine_id.to_string()))?;

    output_scan(output_format, machine_id, &profile.preview())
}

fn cmd_new(
    cli: &Cli,
    config: &Config,
    output_format: OutputFormat,
    args: NewForm<'_>,
) -> Result<()> {
    let registry = load_registry(config)?;

    let machine_id = match (args.machine, args.barcode) {
        (_, Some(code)) => registry
            .resolve_barcode(code)
            .ok_or_else(|| Error::UnknownBarcode(code.to_string()))?,
        (Some(id), None) => id,
        (None, None) => {
            return Err(Error::Validation(
                "a machine id or --barcode is required".to_string(),
            ))
        }
    };
    let profile = registry
        .get(machine_id)
        .ok_or_else(|| Error::UnknownMachine(machine_id.to_string()))?;

    if cli.verbose {
        eprintln!("Generating form for machine: {}", profile.id);
    }

    let mut session = FormSession::new(profile);

    if let Some(tanggal) = args.tanggal {
        session.set_tanggal(tanggal);
    }
    if let Some(shift) = args.shift {
        session.set_shift(shift);
    }
    if let Some(operator) = args.operator {
        session.set_operator(operator);
    }
    for (i, nama) in args.nama.iter().enumerate() {
        session.set_nama(i, nama)?;
    }
    for pair in args.masuk {
        let (name, value) = split_pair(pair)?;
        session.set_masuk(name, value)?;
    }
    for pair in args.keluar {
        let (name, value) = split_pair(pair)?;
        session.set_keluar(name, value)?;
    }
    for pair in args.waste {
        let (name, value) = split_pair(pair)?;
        session.set_waste(name, value)?;
    }
    if let Some(text) = args.keterangan {
        session.set_keterangan(text);
    }
    if let Some(text) = args.part_diganti {
        session.set_part_diganti(text);
    }

    output_form(output_format, session.entry(), Some(profile))?;

    if args.save {
        session.validate()?;
        let mut store = FormStore::open(config.store_dir()?)?;
        let id = store.add_form(session.into_entry())?;
        println!("Saved form: {}", id);
    }

    Ok(())
}

fn cmd_forms(config: &Config, limit: usize, clear: bool, output_format: OutputFormat) -> Result<()> {
    let mut store = FormStore::open(config.store_dir()?)?;

    if clear {
        let count = store.clear()?;
        println!("Cleared {} saved forms.", count);
        return Ok(());
    }

    let forms: Vec<_> = store.all_forms().into_iter().take(limit).collect();
    output_saved_forms(output_format, &forms)
}

fn cmd_form(config: &Config, form_id: &str, output_format: OutputFormat) -> Result<()> {
    let store = FormStore::open(config.store_dir()?)?;
    let form = store
        .get_form(form_id)
        .ok_or_else(|| Error::FormNotFound(form_id.to_string()))?;

    // The saving machine may have been removed from an external
    // profile file; the form still renders without it
    let registry = load_registry(config)?;
    let profile = registry.get(&form.entry.machine_id);

    output_saved_form(output_format, form, profile)
}

fn cmd_export(cli: &Cli, config: &Config, form_id: &str, output: PathBuf) -> Result<()> {
    let store = FormStore::open(config.store_dir()?)?;
    let form = store
        .get_form(form_id)
        .ok_or_else(|| Error::FormNotFound(form_id.to_string()))?;

    let is_csv = output
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        export::write_csv(form, &output)?;
    } else {
        export::write_json(form, &output)?;
    }

    if cli.verbose {
        eprintln!(
            "Exported as {}",
            if is_csv { "CSV" } else { "JSON" }
        );
    }
    println!("Exported form {} to {}", form_id, output.display());

    Ok(())
}

fn cmd_config(
    show: bool,
    set_store_dir: Option<PathBuf>,
    set_machines_file: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        println!("{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(dir) = set_store_dir {
        config.store_dir = Some(dir);
        changed = true;
    }
    if let Some(file) = set_machines_file {
        config.machines_file = Some(file);
        changed = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated.");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}

/// Split a NAME=VALUE argument
fn split_pair(pair: &str) -> Result<(&str, &str)> {
    pair.split_once('=')
        .map(|(name, value)| (name.trim(), value))
        .ok_or_else(|| Error::Validation(format!("expected NAME=VALUE, got: {}", pair)))
}
