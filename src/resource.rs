//! Temporary byte resources backing a file selection
//!
//! A [`ResourceManager`] owns at most one active [`ResourceHandle`]. Handles
//! are not `Clone` and `release` consumes them, so a handle can be released
//! exactly once. The importer only ever sees a [`ResourceView`].

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

// Process-wide so ids never collide between viewer instances
static NEXT_HANDLE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a handle, stable for its whole lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct HandleId(u64);

impl HandleId {
    fn next() -> Self {
        Self(NEXT_HANDLE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "blob:{}", self.0)
    }
}

/// File-level metadata captured at selection time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileDescriptor {
    pub name: String,
    pub size_bytes: u64,
    pub last_modified: DateTime<Utc>,
}

/// Raw input of a file selection
#[derive(Debug, Clone)]
pub struct FileSelection {
    pub bytes: Vec<u8>,
    pub name: String,
    pub size_bytes: u64,
    pub last_modified: DateTime<Utc>,
}

impl FileSelection {
    /// Selection whose reported size is the payload length
    pub fn new(name: impl Into<String>, bytes: Vec<u8>, last_modified: DateTime<Utc>) -> Self {
        let size_bytes = bytes.len() as u64;
        Self {
            bytes,
            name: name.into(),
            size_bytes,
            last_modified,
        }
    }
}

/// Exclusively owned reference to a temporary byte blob
#[derive(Debug)]
pub struct ResourceHandle {
    id: HandleId,
    name: String,
    bytes: Arc<[u8]>,
}

impl ResourceHandle {
    pub fn id(&self) -> HandleId {
        self.id
    }

    fn view(&self) -> ResourceView {
        ResourceView {
            id: self.id,
            name: self.name.clone(),
            bytes: Arc::clone(&self.bytes),
        }
    }

    /// Consumes the handle; returns the id that was released
    fn release(self) -> HandleId {
        log::debug!("Releasing resource {} ({})", self.id, self.name);
        self.id
    }
}

/// Read-only view of an active handle, handed to the importer
#[derive(Debug, Clone)]
pub struct ResourceView {
    pub id: HandleId,
    pub name: String,
    pub bytes: Arc<[u8]>,
}

/// Result of [`ResourceManager::acquire`]
#[derive(Debug, Clone)]
pub struct Acquired {
    pub descriptor: FileDescriptor,
    pub view: ResourceView,
    /// Handle that was active before this call and has now been released
    pub released: Option<HandleId>,
}

/// Owns the single active resource handle of one viewer
#[derive(Debug, Default)]
pub struct ResourceManager {
    active: Option<ResourceHandle>,
}

impl ResourceManager {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Replaces the active handle with one backed by `selection`
    ///
    /// The previous handle is released before the new view is returned.
    pub fn acquire(&mut self, selection: FileSelection) -> Acquired {
        let FileSelection {
            bytes,
            name,
            size_bytes,
            last_modified,
        } = selection;

        let released = self.release_active();

        let handle = ResourceHandle {
            id: HandleId::next(),
            name: name.clone(),
            bytes: Arc::from(bytes),
        };
        log::debug!("Acquired resource {} for {:?} ({} bytes)", handle.id, name, size_bytes);

        let view = handle.view();
        self.active = Some(handle);

        Acquired {
            descriptor: FileDescriptor {
                name,
                size_bytes,
                last_modified,
            },
            view,
            released,
        }
    }

    pub fn active_id(&self) -> Option<HandleId> {
        self.active.as_ref().map(ResourceHandle::id)
    }

    pub fn is_active(&self, id: HandleId) -> bool {
        self.active_id() == Some(id)
    }

    /// Releases the active handle, if any
    pub fn release_active(&mut self) -> Option<HandleId> {
        self.active.take().map(ResourceHandle::release)
    }
}

impl Drop for ResourceManager {
    fn drop(&mut self) {
        self.release_active();
    }
}
