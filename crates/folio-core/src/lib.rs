//! # State, scopes, and theme locals
//!
//! Folio keeps its UI state in a small reactive core instead of mutable
//! fields scattered through the page code. There are three main pieces:
//!
//! - `Signal<T>` — observable value with subscribe/unsubscribe.
//! - `Scope` / `Dispose` — lifecycle-aware cleanup for acquired resources.
//! - `Theme` locals — colors resolved through `with_theme` / `theme()`.
//!
//! ## Signals
//!
//! `Signal<T>` is a cloneable handle to a piece of state:
//!
//! ```rust
//! use folio_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! Observers register with `watch`, which hands back a `Dispose` guard so the
//! subscription is released on every exit path:
//!
//! ```rust
//! use folio_core::*;
//!
//! let active = signal("home");
//! let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
//! let guard = active.watch({
//!     let seen = seen.clone();
//!     move |v| seen.borrow_mut().push(*v)
//! });
//! active.set("about");
//! guard.run();
//! active.set("projects"); // not observed anymore
//! assert_eq!(*seen.borrow(), vec!["about"]);
//! ```
//!
//! ## Scopes
//!
//! Use `effect` / `scoped_effect` for side-effects with cleanups. When a
//! `Scope` is current, cleanups run on `Scope::dispose`, e.g. when the page
//! runtime is torn down:
//!
//! ```rust
//! use folio_core::*;
//!
//! let scope = Scope::new();
//! scope.run(|| {
//!     scoped_effect(|| {
//!         log::info!("mounted");
//!         Box::new(|| log::info!("unmounted"))
//!     });
//! });
//! scope.dispose(); // runs the cleanup
//! ```

pub mod color;
pub mod effects;
pub mod locals;
pub mod scope;
pub mod signal;
pub mod tests;

pub use color::*;
pub use effects::*;
pub use locals::*;
pub use scope::*;
pub use signal::*;
