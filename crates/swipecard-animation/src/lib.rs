//! Tween animations driven by the swipecard frame clock.

mod animation;

pub use animation::*;
