//! Offline rendering of the reveal: single settled frames and scroll sweeps into a sink.

use rand::Rng;

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, Rgba8};
use crate::foundation::error::{RevealError, RevealResult};
use crate::render::cpu::{CpuSurface, FrameRGBA};
use crate::scene::controller::RevealController;

/// Options for [`render_sweep`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepOpts {
    /// Number of frames; progress runs evenly from 0 to 1 inclusive.
    pub frames: u64,
    /// Opaque backdrop under both layers, or `None` for transparency.
    pub background: Option<Rgba8>,
}

impl Default for SweepOpts {
    fn default() -> Self {
        Self {
            frames: 60,
            background: Some(Rgba8::new(0, 0, 0, 255)),
        }
    }
}

/// Scroll to `progress`, let the animation settle for up to `max_ticks` ticks, and flatten the
/// layers into one frame.
#[tracing::instrument(skip(controller))]
pub fn render_settled<R: Rng>(
    controller: &mut RevealController<CpuSurface, R>,
    progress: f64,
    max_ticks: usize,
    background: Option<Rgba8>,
) -> RevealResult<FrameRGBA> {
    controller.on_scroll(progress)?;
    let ran = controller.run_pending(max_ticks);
    tracing::debug!(ticks = ran, "settled");
    controller.layers().compose(background)
}

/// Sweep scroll progress across `opts.frames` frames, one animation tick per frame, pushing each
/// composed frame into `sink`. Returns the number of frames written.
#[tracing::instrument(skip(controller, sink))]
pub fn render_sweep<R: Rng>(
    controller: &mut RevealController<CpuSurface, R>,
    opts: SweepOpts,
    sink: &mut dyn FrameSink,
) -> RevealResult<u64> {
    if opts.frames == 0 {
        return Err(RevealError::validation("sweep needs at least one frame"));
    }

    let (width, height) = controller.layers().outline.pixel_size();
    sink.begin(SinkConfig {
        width,
        height,
        frame_count: opts.frames,
    })?;

    let last = (opts.frames - 1).max(1) as f64;
    for i in 0..opts.frames {
        let progress = (i as f64 / last).min(1.0);
        controller.on_scroll(progress)?;
        let frame = controller.layers().compose(opts.background)?;
        sink.push_frame(FrameIndex(i), &frame)?;
    }

    sink.end()?;
    Ok(opts.frames)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/sweep.rs"]
mod tests;
