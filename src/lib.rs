//! # trellis-ui
//!
//! A retained-mode widget toolkit core for games and interactive applications.
//!
//! trellis-ui owns the parts of a game UI that are not drawing: a JSON stylesheet
//! resolved into per-widget-type style variants, a slotmap-backed widget tree, and a
//! two-pass measure/arrange layout engine built around a proportion-based grid.
//! Fonts and drawables are supplied by the host renderer through the [`style::Font`]
//! and [`style::Drawable`] traits, which only report metrics.
//!
//! ## Core Systems
//!
//! - **[`style`]** — Stylesheet resolver, style variants, property trees, colors
//! - **[`widget`]** — Widget arena, lifecycle events, style application
//! - **[`widgets`]** — Built-in widgets: Label, Button, Image, Separator, Panel, Grid, ListBox
//! - **[`layout`]** — Proportions, grid track solver, measure/arrange passes
//! - **[`reactive`]** — Observable list driving collection-bound widgets
//! - **[`desktop`]** — Configuration and the top-level layout driver
//! - **[`geometry`]** — Size, Region, Spacing, Alignment primitives
//! - **[`testing`]** — Fixture fonts/drawables and layout dump helpers

// Foundation
pub mod error;
pub mod geometry;

// Core systems
pub mod layout;
pub mod style;

// Widget system
pub mod widget;
pub mod widgets;

// Collections
pub mod reactive;

// Application
pub mod desktop;

// Test support
pub mod testing;

pub use error::{Error, Result};
