use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::raster_engine::raster::{ChannelLayout, Point, Raster};

/// An opened raster and the file it came from, if any.
#[derive(Debug, Clone)]
pub struct FocusedRaster {
    pub path: Option<PathBuf>,
    pub raster: Arc<Raster>,
}

impl FocusedRaster {
    pub fn new(path: Option<PathBuf>, raster: Arc<Raster>) -> Self {
        Self { path, raster }
    }

    pub fn layout(&self) -> ChannelLayout {
        self.raster.layout()
    }

    fn is_same(&self, other: &Arc<Raster>) -> bool {
        Arc::ptr_eq(&self.raster, other)
    }
}

/// Endpoints picked for a line profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileSelection {
    #[default]
    Empty,
    Started(Point),
    Complete { start: Point, end: Point },
}

impl ProfileSelection {
    /// Next state after a click: the first click sets the start, the second
    /// the end, and a third clears the selection.
    fn advance(self, point: Point) -> Self {
        match self {
            ProfileSelection::Empty => ProfileSelection::Started(point),
            ProfileSelection::Started(start) => ProfileSelection::Complete { start, end: point },
            ProfileSelection::Complete { .. } => ProfileSelection::Empty,
        }
    }
}

/// Which raster transforms operate on, the one focused before it, and the
/// line profile endpoints. The profile is reset whenever focus moves.
#[derive(Debug, Clone, Default)]
pub struct FocusState {
    active: Option<FocusedRaster>,
    previous: Option<FocusedRaster>,
    profile: ProfileSelection,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus event. Refocusing the active raster changes nothing.
    pub fn focus(&mut self, path: Option<PathBuf>, raster: Arc<Raster>) {
        if self.active.as_ref().is_some_and(|a| a.is_same(&raster)) {
            return;
        }

        debug!(path = ?path, layout = %raster.layout(), "Focus changed");
        self.previous = self.active.take();
        self.active = Some(FocusedRaster::new(path, raster));
        self.profile = ProfileSelection::Empty;
    }

    /// Pointer click at `point` on the active raster. Ignored when nothing
    /// is focused.
    pub fn click(&mut self, point: Point) -> ProfileSelection {
        if self.active.is_some() {
            self.profile = self.profile.advance(point);
            debug!(selection = ?self.profile, "Profile selection updated");
        }
        self.profile
    }

    /// Drops every reference to `raster`. Losing the active raster also
    /// resets the profile selection.
    pub fn forget(&mut self, raster: &Arc<Raster>) {
        if self.previous.as_ref().is_some_and(|p| p.is_same(raster)) {
            self.previous = None;
        }
        if self.active.as_ref().is_some_and(|a| a.is_same(raster)) {
            debug!("Focused raster closed");
            self.active = None;
            self.profile = ProfileSelection::Empty;
        }
    }

    pub fn active(&self) -> Option<&FocusedRaster> {
        self.active.as_ref()
    }

    pub fn active_raster(&self) -> Option<&Arc<Raster>> {
        self.active.as_ref().map(|a| &a.raster)
    }

    pub fn active_path(&self) -> Option<&Path> {
        self.active.as_ref().and_then(|a| a.path.as_deref())
    }

    pub fn active_layout(&self) -> Option<ChannelLayout> {
        self.active.as_ref().map(FocusedRaster::layout)
    }

    pub fn previous(&self) -> Option<&FocusedRaster> {
        self.previous.as_ref()
    }

    pub fn profile(&self) -> ProfileSelection {
        self.profile
    }

    pub fn profile_start(&self) -> Option<Point> {
        match self.profile {
            ProfileSelection::Empty => None,
            ProfileSelection::Started(start) | ProfileSelection::Complete { start, .. } => Some(start),
        }
    }

    pub fn profile_end(&self) -> Option<Point> {
        match self.profile {
            ProfileSelection::Complete { end, .. } => Some(end),
            _ => None,
        }
    }

    /// Both endpoints, once the second click has happened.
    pub fn profile_endpoints(&self) -> Option<(Point, Point)> {
        match self.profile {
            ProfileSelection::Complete { start, end } => Some((start, end)),
            _ => None,
        }
    }
}
