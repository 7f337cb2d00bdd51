pub mod script;

#[cfg(feature = "web")]
pub mod web;
