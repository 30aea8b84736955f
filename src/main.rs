use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use std::fmt::Write as _;
use std::path::Path;
use std::thread;
use std::time::Duration;

use glb_viewer::cli::Cli;
use glb_viewer::core::Clock;
use glb_viewer::loaders::{self, LoadTask};
use glb_viewer::panel::bookmark_shortcut;
use glb_viewer::settings::{JsonFileStore, MemoryStore};
use glb_viewer::traits::KeyValueStore;
use glb_viewer::view_model::{format_factor, format_yes_no, ViewModel};
use glb_viewer::{FileSelection, LoadOutcome, Viewer};

// === Constants ===

const POLL_INTERVAL: Duration = Duration::from_millis(10);

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let store: Box<dyn KeyValueStore> = match (cli.ephemeral, JsonFileStore::open_default()) {
        (false, Some(store)) => {
            log::debug!("Using settings file {:?}", store.path());
            Box::new(store)
        }
        _ => Box::new(MemoryStore::new()),
    };

    let mut viewer = Viewer::new(store);
    let mut clock = Clock::new();

    for path in &cli.files {
        if !loaders::accepts(&path.to_string_lossy()) {
            log::warn!("{:?} is not a .glb file, loading anyway", path);
        }

        let selection = read_selection(path)?;
        let view = viewer.select_file(selection);
        let mut task = loaders::spawn_import(view);

        match wait_for_load(&mut viewer, &mut task, &mut clock, cli.wait_secs) {
            Some(LoadOutcome::Applied) => {}
            Some(outcome) => log::warn!("{:?}: load finished as {:?}", path, outcome),
            None => log::warn!("{:?}: gave up after {:.1}s", path, cli.wait_secs),
        }

        if let Some(vm) = viewer.view_model() {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(vm)?);
            } else {
                print!("{}", render_report(vm));
            }
        }
    }

    if viewer.popover_visible() {
        eprintln!(
            "📌 Like GLB Viewer? Press {} to bookmark it.",
            bookmark_shortcut()
        );
    }

    viewer.close();
    Ok(())
}

fn read_selection(path: &Path) -> Result<FileSelection> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {:?}", path))?;
    let metadata = std::fs::metadata(path).with_context(|| format!("Failed to stat {:?}", path))?;
    let last_modified = metadata
        .modified()
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(|_| Utc::now());
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(FileSelection {
        bytes,
        name,
        size_bytes: metadata.len(),
        last_modified,
    })
}

/// Pumps viewer timers until the task completes or `timeout` seconds pass
fn wait_for_load<S: KeyValueStore>(
    viewer: &mut Viewer<S>,
    task: &mut LoadTask,
    clock: &mut Clock,
    timeout: f32,
) -> Option<LoadOutcome> {
    let waiting = Clock::new();
    loop {
        viewer.tick(clock.tick());

        if let Some(outcome) = viewer.poll_load(task) {
            return Some(outcome);
        }
        if waiting.total() >= timeout {
            return None;
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn render_report(vm: &ViewModel) -> String {
    let mut out = String::new();
    let rows = [
        ("File Name", vm.file_name.clone()),
        ("File Size", vm.file_size.clone()),
        ("Last Modified", vm.last_modified.clone()),
        ("Materials", vm.materials_label()),
        ("Vertices", vm.vertices_label().to_string()),
        ("Dimensions", vm.dimensions_label().to_string()),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "{:<14} {}", format!("{}:", label), value);
    }

    let materials = vm.material_descriptors();
    if !materials.is_empty() {
        let _ = writeln!(out, "Material Details:");
        for material in materials {
            let _ = writeln!(out, "  - Name: {}", material.name);
            if let Some(hex) = &material.color_hex {
                let _ = writeln!(out, "    Color: {}", hex);
            }
            if let Some(roughness) = material.roughness {
                let _ = writeln!(out, "    Roughness: {}", format_factor(roughness));
            }
            if let Some(metalness) = material.metalness {
                let _ = writeln!(out, "    Metalness: {}", format_factor(metalness));
            }
            let _ = writeln!(out, "    Texture Map: {}", format_yes_no(material.has_texture_map));
        }
    }
    out
}
