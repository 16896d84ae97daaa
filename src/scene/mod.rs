/// Reveal state owner.
pub mod controller;
/// Offline frame rendering.
pub mod sweep;
