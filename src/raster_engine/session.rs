//! Session state
//!
//! Tracks the opened rasters, which one is focused, and the endpoints of the
//! interactive line profile. The surrounding UI feeds focus and click events
//! in and asks the session to run transforms on the focused raster.

mod focus;
mod editor;
mod presenter;


pub use focus::{FocusState, FocusedRaster, ProfileSelection};
pub use editor::Session;
pub use presenter::{Presenter, TextPresenter};
