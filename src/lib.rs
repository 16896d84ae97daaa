//! revealkit drives a scroll-synchronized triangle-grid reveal and the small interaction layer
//! around it, headlessly.
//!
//! The core is a [`RevealController`]: it owns a randomized [`TriangleStore`], turns scroll
//! progress into per-cell scale targets, eases scales toward them one tick at a time, and draws
//! each tick onto a pair of [`DrawSurface`] layers (wireframe outlines plus solid fills). Ticks
//! are requested through a [`TickDriver`] that never holds more than one pending request.
//!
//! - Record drawing commands with [`RecordingSurface`], or rasterize with [`CpuSurface`]
//! - Render a settled frame or a whole scroll sweep into a [`FrameSink`]
//! - Model the page around it: [`ScrollTrigger`], [`SmoothScroll`], [`CursorState`],
//!   [`LoadTimeline`] and [`ContactForm`]
//!
//! Every tunable lives in [`RevealConfig`], loadable from JSON.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;

pub(crate) mod animation;
/// Page tunables as one JSON document.
pub mod config;
/// Custom cursor state.
pub mod cursor;
/// Frame sinks.
pub mod encode;
/// Contact form submission.
pub mod form;
pub(crate) mod grid;
/// Page-load animation timeline.
pub mod loader;
/// Surfaces, grid drawing and CPU rasterization.
pub mod render;
/// The reveal controller and offline rendering.
pub mod scene;
/// Tick scheduling.
pub mod schedule;
/// Scroll-linked state: pinned section, card strip, smooth scroll.
pub mod scroll;

pub use crate::foundation::core::{Affine, BezPath, FrameIndex, Point, Rgba8, Vec2, Viewport};
pub use crate::foundation::error::{RevealError, RevealResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::tween::Tween;
pub use crate::config::RevealConfig;
pub use crate::cursor::{CursorFrame, CursorParams, CursorState};
pub use crate::encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig, write_png};
pub use crate::form::{
    ContactForm, FormConfig, FormData, FormOutcome, FormResponse, FormTransport, SubmitReport,
};
pub use crate::grid::layout::{
    GridConfig, GridDims, MAX_CELLS, fisher_yates, grid_dims, reveal_orders,
};
pub use crate::grid::reveal::{RevealParams, ease_cell, target_scale};
pub use crate::grid::store::{TriangleCell, TriangleStore};
pub use crate::loader::{Block, ItemFrame, LoadFrame, LoadTimeline, LoaderParams, block_count};
pub use crate::render::cpu::{CpuSurface, FrameRGBA};
pub use crate::render::grid::{GridRenderer, TickReport, triangle_path};
pub use crate::render::surface::{DrawCmd, DrawSurface, Layers, RecordingSurface};
pub use crate::scene::controller::{DrawOutcome, RevealController};
pub use crate::scene::sweep::{SweepOpts, render_settled, render_sweep};
pub use crate::schedule::driver::{TickDriver, TickId};
pub use crate::scroll::carousel::{CarouselParams, CarouselState, cards_visible, carousel_state};
pub use crate::scroll::smooth::{SmoothScroll, SmoothScrollOptions};
pub use crate::scroll::trigger::{ScrollTrigger, sticky_height};

#[cfg(feature = "http")]
pub use crate::form::IsahcTransport;
