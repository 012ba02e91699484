//! Interaction core of the Kvadra landing page.
//!
//! Everything outside `web` is plain state and math so it can be tested on
//! the host; `web` binds it to the DOM when compiled for `wasm32`.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod drag;
pub mod error;
pub mod gemini;
pub mod header;
pub mod i18n;
pub mod idea;
pub mod lifecycle;
pub mod morph;
pub mod particles;
pub mod pointer;
pub mod reveal;
pub mod scroll;
pub mod text_fx;
pub mod tween;

#[cfg(target_arch = "wasm32")]
mod web;
