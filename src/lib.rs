//! Latin to Glagolitic transliteration.
//!
//! Shared between the `glagol` terminal converter and the `glyphgen`
//! bitmap pre-renderer.

pub mod app;
pub mod assets;
pub mod buffer;
pub mod font5x7;
pub mod glyphsheet;
pub mod input;
pub mod layout;
pub mod translit;
