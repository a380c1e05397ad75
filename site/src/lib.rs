//! Personal portfolio site.
//!
//! The native binary composes the page and writes the static site to
//! `dist/`; the wasm build of this same crate mounts the scroll-spy runtime
//! against the rendered document.

pub mod app;
pub mod content;

pub mod sections {
    pub mod about;
    pub mod contact;
    pub mod hero;
    pub mod projects;
}

#[cfg(target_arch = "wasm32")]
pub mod web;
