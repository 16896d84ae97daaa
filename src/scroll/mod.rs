/// Card strip choreography.
pub mod carousel;
/// Smooth-scroll emulation.
pub mod smooth;
/// Pinned-section progress.
pub mod trigger;
