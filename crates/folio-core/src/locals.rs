//! # Theming locals
//!
//! Folio uses a thread-local "composition local" for the page palette: the
//! stylesheet generator and any component that needs a color read `theme()`,
//! and a subtree (or a whole page build) can override it with `with_theme`:
//!
//! ```rust
//! use folio_core::*;
//!
//! let light = Theme {
//!     background: Color::from_hex("#fafaf9"),
//!     on_surface: Color::from_hex("#27272a"),
//!     ..Theme::default()
//! };
//!
//! with_theme(light, || {
//!     assert_eq!(theme().background, Color::from_hex("#fafaf9"));
//! });
//! ```
//!
//! Components should read from `theme()` rather than hard-coding colors.

use std::cell::RefCell;

use crate::Color;

thread_local! {
    static THEME_STACK: RefCell<Vec<Theme>> = const { RefCell::new(Vec::new()) };
}

/// Page palette.
///
/// Intentionally small and semantic; the stylesheet generator maps these onto
/// CSS custom properties, so the static rules never name raw colors.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Page background.
    pub background: Color,
    /// Raised container surface (cards, chips).
    pub surface: Color,
    /// Body text on top of `background`/`surface`.
    pub on_surface: Color,
    /// Headings and other high-emphasis text.
    pub heading: Color,
    /// Low-emphasis text (dates, captions, footer).
    pub muted: Color,

    /// Accent for the active nav entry, links, and highlights.
    pub accent: Color,
    /// Accent on hover.
    pub accent_hover: Color,
    /// Filled-control accent (primary call to action).
    pub accent_strong: Color,
    /// Foreground on top of `accent_strong`.
    pub on_accent: Color,

    /// Low-emphasis border color.
    pub outline: Color,
    /// Soft accent glow used by dividers and card shadows.
    pub glow: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_hex("#18181b"),
            surface: Color::from_hex("#27272a"),
            on_surface: Color::from_hex("#d6d3d1"),
            heading: Color::from_hex("#fafaf9"),
            muted: Color::from_hex("#a8a29e"),
            accent: Color::from_hex("#34d399"),
            accent_hover: Color::from_hex("#6ee7b7"),
            accent_strong: Color::from_hex("#059669"),
            on_accent: Color::from_hex("#18181b"),
            outline: Color::from_hex("#047857").with_alpha(77),
            glow: Color::from_hex("#34d399").with_alpha(38),
        }
    }
}

// Frame guard ensures the override is popped even on unwind.
fn with_theme_frame<R>(t: Theme, f: impl FnOnce() -> R) -> R {
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            THEME_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    THEME_STACK.with(|st| st.borrow_mut().push(t));
    let _guard = Guard;
    f()
}

pub fn with_theme<R>(t: Theme, f: impl FnOnce() -> R) -> R {
    with_theme_frame(t, f)
}

/// Innermost override, or the default palette if none is set.
pub fn theme() -> Theme {
    THEME_STACK.with(|st| st.borrow().last().copied().unwrap_or_default())
}
