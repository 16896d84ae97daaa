pub(crate) mod composite;
/// CPU rasterization and frames.
pub mod cpu;
/// Grid drawing.
pub mod grid;
/// Drawing surface abstraction.
pub mod surface;
