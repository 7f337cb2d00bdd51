//! Shared defaults for swipe handling.
//!
//! All distances are logical pixels. For very high-density touch screens the
//! host may scale the deadzone and threshold by the device's DPI factor
//! through [`SwipeConfig`](crate::SwipeConfig).

/// Movement from the press position, in either axis, that must be exceeded
/// before a gesture is classified as horizontal or vertical.
///
/// Smaller movements are treated as finger jitter: no axis is locked and the
/// card does not move.
pub const AXIS_LOCK_DEADZONE: f32 = 10.0;

/// Display offset at which a swipe commits on release.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 100.0;

/// Fraction of drag distance past the threshold that still moves the card.
pub const DEFAULT_RESISTANCE_FACTOR: f32 = 0.3;

/// Hard cap on card travel while dragging, as a multiple of the threshold.
pub const MAX_OVERSCROLL_RATIO: f32 = 1.5;

/// Duration of both the commit fly-out and the snap-back.
pub const RELEASE_ANIMATION_MILLIS: u64 = 200;

/// Off-screen distance used until the host reports its viewport width.
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1024.0;

/// Scale applied to the revealed action icon while the swipe is committed.
pub const COMMITTED_ICON_SCALE: f32 = 1.2;
