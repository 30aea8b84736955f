//! Viewer state machine
//!
//! `Empty -> FileSelected -> Ready`, and back to `FileSelected` on every new
//! selection. Scene metadata is only merged when the completing load belongs
//! to the currently active resource handle. The onboarding hint, the two
//! collapsible sections and the sidebar are orthogonal to the main states.

use crate::extract::{extract, MetadataSnapshot};
use crate::loaders::{LoadCompletion, LoadTask};
use crate::onboarding::{Onboarding, PopoverState};
use crate::resource::{FileDescriptor, FileSelection, HandleId, ResourceManager, ResourceView};
use crate::settings::ViewerConfig;
use crate::traits::{KeyValueStore, SceneNode};
use crate::view_model::{SceneSummary, ViewModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerState {
    Empty,
    FileSelected,
    Ready,
}

/// Whether a load completion was merged or dropped as stale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Failed,
    Stale,
}

/// Open/closed state of the two collapsible sidebar sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionState {
    pub model_info: bool,
    pub material_details: bool,
}

impl Default for ExpansionState {
    fn default() -> Self {
        Self {
            model_info: true,
            material_details: false,
        }
    }
}

pub struct Viewer<S: KeyValueStore> {
    resources: ResourceManager,
    file: Option<FileDescriptor>,
    snapshot: Option<MetadataSnapshot>,
    view_model: Option<ViewModel>,
    expansion: ExpansionState,
    sidebar_open: bool,
    onboarding: Onboarding<S>,
}

impl<S: KeyValueStore> Viewer<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, &ViewerConfig::default())
    }

    pub fn with_config(store: S, config: &ViewerConfig) -> Self {
        Self {
            resources: ResourceManager::new(),
            file: None,
            snapshot: None,
            view_model: None,
            expansion: ExpansionState::default(),
            sidebar_open: false,
            onboarding: Onboarding::new(store, config),
        }
    }

    pub fn state(&self) -> ViewerState {
        match (&self.file, &self.snapshot) {
            (None, _) => ViewerState::Empty,
            (Some(_), None) => ViewerState::FileSelected,
            (Some(_), Some(_)) => ViewerState::Ready,
        }
    }

    /// Replaces the current file; returns the view to hand to the importer
    ///
    /// The previous resource handle is released and any prior scene metadata
    /// is cleared before this returns.
    pub fn select_file(&mut self, selection: FileSelection) -> ResourceView {
        let acquired = self.resources.acquire(selection);
        if let Some(released) = acquired.released {
            log::debug!("Selection replaced {} with {}", released, acquired.view.id);
        }

        self.view_model = Some(ViewModel::for_file(&acquired.descriptor));
        self.file = Some(acquired.descriptor);
        self.snapshot = None;
        self.onboarding.on_file_selected();

        acquired.view
    }

    /// Merges the scene loaded for `origin`, unless a newer file replaced it
    pub fn on_scene_loaded<N: SceneNode>(&mut self, origin: HandleId, root: &N) -> LoadOutcome {
        if !self.resources.is_active(origin) {
            log::debug!("Discarding stale load for {}", origin);
            return LoadOutcome::Stale;
        }

        let snapshot = extract(root);
        log::info!(
            "Scene ready: {} materials, {} vertices",
            snapshot.material_count,
            snapshot.vertex_count
        );

        if let Some(view_model) = self.view_model.as_mut() {
            view_model.scene = Some(SceneSummary::from_snapshot(snapshot.clone()));
        }
        self.snapshot = Some(snapshot);
        LoadOutcome::Applied
    }

    /// Records a failed import; the view stays on its placeholders
    pub fn on_scene_failed(&mut self, origin: HandleId, error: &anyhow::Error) -> LoadOutcome {
        if !self.resources.is_active(origin) {
            log::debug!("Discarding stale failure for {}", origin);
            return LoadOutcome::Stale;
        }
        log::warn!("Failed to load scene for {}: {:#}", origin, error);
        LoadOutcome::Failed
    }

    pub fn complete_load(&mut self, completion: LoadCompletion) -> LoadOutcome {
        match completion.result {
            Ok(scene) => self.on_scene_loaded(completion.origin, &scene.root),
            Err(e) => self.on_scene_failed(completion.origin, &e),
        }
    }

    /// Non-blocking; merges the task's result if it has arrived
    pub fn poll_load(&mut self, task: &mut LoadTask) -> Option<LoadOutcome> {
        task.poll().map(|completion| self.complete_load(completion))
    }

    /// Advances timers by `delta` seconds
    pub fn tick(&mut self, delta: f32) {
        if self.onboarding.tick(delta) {
            log::debug!("Showing onboarding hint");
        }
    }

    pub fn popover_visible(&self) -> bool {
        self.onboarding.is_visible()
    }

    pub fn popover_state(&self) -> PopoverState {
        self.onboarding.state()
    }

    pub fn dismiss_popover(&mut self) -> bool {
        self.onboarding.dismiss()
    }

    pub fn expansion(&self) -> ExpansionState {
        self.expansion
    }

    pub fn toggle_model_info(&mut self) {
        self.expansion.model_info = !self.expansion.model_info;
    }

    pub fn toggle_material_details(&mut self) {
        self.expansion.material_details = !self.expansion.material_details;
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    /// The info button is offered while a file is loaded and the sidebar is closed
    pub fn info_button_visible(&self) -> bool {
        self.view_model.is_some() && !self.sidebar_open
    }

    pub fn view_model(&self) -> Option<&ViewModel> {
        self.view_model.as_ref()
    }

    pub fn file(&self) -> Option<&FileDescriptor> {
        self.file.as_ref()
    }

    pub fn snapshot(&self) -> Option<&MetadataSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn active_handle(&self) -> Option<HandleId> {
        self.resources.active_id()
    }

    pub fn store(&self) -> &S {
        self.onboarding.store()
    }

    /// Tears down the session: releases the active handle and clears the view
    pub fn close(&mut self) -> Option<HandleId> {
        self.file = None;
        self.snapshot = None;
        self.view_model = None;
        self.resources.release_active()
    }
}
