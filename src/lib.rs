//! Popup menus anchored to fixed trigger buttons.
//!
//! The [`placement`] engine decides where a popup goes given its trigger's
//! bounds, the popup's measured size and the viewport. The [`controller`]
//! tracks which menu is open and publishes a position only once it has been
//! computed from fresh geometry. Hosts supply geometry through the
//! [`surface::Surface`] trait; the `runtime` feature adds a terminal host
//! built on ratatui and crossterm.

pub mod config;
pub mod controller;
pub mod events;
pub mod geometry;
pub mod placement;
pub mod surface;
pub mod trigger;

#[cfg(feature = "runtime")]
pub mod app;
#[cfg(feature = "runtime")]
pub mod view;

pub use controller::{MenuController, MenuState, MenuTransition};
pub use geometry::{Bounds, Position, Size};
pub use placement::{compute_placement, compute_position, Placement, PlacementConfig};
pub use trigger::{Locale, MenuAction, Trigger};
