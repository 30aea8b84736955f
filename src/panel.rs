//! egui rendering of the viewer's side panel, info button and bookmark hint
//!
//! Drawing only reads the viewer; user clicks are collected as
//! [`PanelAction`]s and applied once the frame's UI has been built.

use egui::{Align2, Color32, CornerRadius, Sense};

use crate::extract::MaterialDescriptor;
use crate::traits::KeyValueStore;
use crate::view_model::{format_factor, format_yes_no, ViewModel};
use crate::viewer::Viewer;

pub const PANEL_TITLE: &str = "Model Details";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    ToggleModelInfo,
    ToggleMaterialDetails,
    OpenSidebar,
    CloseSidebar,
    DismissPopover,
}

/// Platform bookmark shortcut shown in the hint
pub fn bookmark_shortcut() -> &'static str {
    if cfg!(target_os = "macos") {
        "⌘+D"
    } else {
        "Ctrl+D"
    }
}

pub fn apply<S: KeyValueStore>(viewer: &mut Viewer<S>, action: PanelAction) {
    match action {
        PanelAction::ToggleModelInfo => viewer.toggle_model_info(),
        PanelAction::ToggleMaterialDetails => viewer.toggle_material_details(),
        PanelAction::OpenSidebar => viewer.open_sidebar(),
        PanelAction::CloseSidebar => viewer.close_sidebar(),
        PanelAction::DismissPopover => {
            viewer.dismiss_popover();
        }
    }
}

/// Draws one frame of viewer UI and applies the resulting actions
pub fn show<S: KeyValueStore>(ctx: &egui::Context, viewer: &mut Viewer<S>) -> Vec<PanelAction> {
    let mut actions = Vec::new();

    if viewer.popover_visible() {
        bookmark_popover(ctx, &mut actions);
    }

    if viewer.info_button_visible() {
        egui::Area::new(egui::Id::new("model_info_button"))
            .anchor(Align2::RIGHT_TOP, [-12.0, 12.0])
            .show(ctx, |ui| {
                if ui.button("ℹ").on_hover_text("Show model information").clicked() {
                    actions.push(PanelAction::OpenSidebar);
                }
            });
    }

    if let (Some(vm), true) = (viewer.view_model(), viewer.sidebar_open()) {
        let expansion = viewer.expansion();
        egui::SidePanel::right("model_details")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(PANEL_TITLE);
                    if ui.button("✕").on_hover_text("Close sidebar").clicked() {
                        actions.push(PanelAction::CloseSidebar);
                    }
                });
                ui.separator();

                let info = egui::CollapsingHeader::new("Model Information")
                    .open(Some(expansion.model_info))
                    .show(ui, |ui| model_info(ui, vm));
                if info.header_response.clicked() {
                    actions.push(PanelAction::ToggleModelInfo);
                }

                let materials = vm.material_descriptors();
                if !materials.is_empty() {
                    ui.add_space(15.0);
                    let details = egui::CollapsingHeader::new("Material Details")
                        .open(Some(expansion.material_details))
                        .show(ui, |ui| {
                            for material in materials {
                                material_item(ui, material);
                            }
                        });
                    if details.header_response.clicked() {
                        actions.push(PanelAction::ToggleMaterialDetails);
                    }
                }
            });
    }

    for action in &actions {
        apply(viewer, *action);
    }
    actions
}

fn bookmark_popover(ctx: &egui::Context, actions: &mut Vec<PanelAction>) {
    egui::Window::new("bookmark_hint")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(Align2::CENTER_TOP, [0.0, 16.0])
        .show(ctx, |ui| {
            ui.strong("📌 Like GLB Viewer? Add it to your bookmarks for quick access!");
            ui.label(format!("Press {} to bookmark this page", bookmark_shortcut()));
            if ui.button("Got it!").clicked() {
                actions.push(PanelAction::DismissPopover);
            }
        });
}

fn model_info(ui: &mut egui::Ui, vm: &ViewModel) {
    egui::Grid::new("model_info_grid").num_columns(2).show(ui, |ui| {
        let rows = [
            ("File Name:", vm.file_name.clone()),
            ("File Size:", vm.file_size.clone()),
            ("Last Modified:", vm.last_modified.clone()),
            ("Materials:", vm.materials_label()),
            ("Vertices:", vm.vertices_label().to_string()),
            ("Dimensions:", vm.dimensions_label().to_string()),
        ];
        for (label, value) in rows {
            ui.strong(label);
            ui.label(value);
            ui.end_row();
        }
    });
}

fn material_item(ui: &mut egui::Ui, material: &MaterialDescriptor) {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.strong("Name:");
            ui.label(&material.name);
        });
        if let Some(hex) = &material.color_hex {
            ui.horizontal(|ui| {
                ui.strong("Color:");
                if let Ok(color) = Color32::from_hex(hex) {
                    let (rect, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), Sense::hover());
                    ui.painter().rect_filled(rect, CornerRadius::same(2), color);
                }
                ui.label(hex);
            });
        }
        if let Some(roughness) = material.roughness {
            ui.horizontal(|ui| {
                ui.strong("Roughness:");
                ui.label(format_factor(roughness));
            });
        }
        if let Some(metalness) = material.metalness {
            ui.horizontal(|ui| {
                ui.strong("Metalness:");
                ui.label(format_factor(metalness));
            });
        }
        ui.horizontal(|ui| {
            ui.strong("Texture Map:");
            ui.label(format_yes_no(material.has_texture_map));
        });
    });
}
