//! DOM runtime for the scroll-spy navigation.
//!
//! Mounted once per page load: registers the four sections, attaches the
//! scroll tracker to the window, wires `[data-jump]` controls, and keeps the
//! nav highlight in step with the `active` signal. Everything acquired here
//! (listeners, signal observers) is released through one `Scope`, torn down
//! by `unmount` on every exit path.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

use folio_core::{Dispose, Scope, effect};
use folio_nav::{Measure, ScrollHost, ScrollTracker, Section, SectionBounds, SectionRegistry};

struct Runtime {
    scope: Scope,
    // Keeps the tracker alive even if no jump control references it.
    _tracker: Rc<ScrollTracker>,
}

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

/// Measurable handle over a mounted `<section>` element. Reads go straight
/// to the DOM so layout shifts are always reflected.
struct DomSection {
    el: HtmlElement,
}

impl Measure for DomSection {
    fn bounds(&self) -> Option<SectionBounds> {
        if !self.el.is_connected() {
            return None;
        }
        Some(SectionBounds::new(
            self.el.offset_top() as f32,
            self.el.offset_height() as f32,
        ))
    }
}

struct DomViewport {
    window: Window,
}

impl ScrollHost for DomViewport {
    fn scroll_to(&self, top: f32) {
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(f64::from(top));
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }

    fn subscribe(&self, on_scroll: Rc<dyn Fn(f32)>) -> Dispose {
        let window = self.window.clone();
        let cb = Closure::<dyn FnMut()>::new({
            let window = window.clone();
            move || {
                let offset = window.scroll_y().unwrap_or(0.0);
                on_scroll(offset as f32);
            }
        });
        if let Err(e) =
            window.add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref())
        {
            log::warn!("scroll listener: {e:?}");
        }
        Dispose::new(move || {
            let _ =
                window.remove_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
        })
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    let _ = console_log::init_with_level(log::Level::Info);
    mount();
}

/// Build the runtime against the current document. A second call tears the
/// previous runtime down first.
#[wasm_bindgen]
pub fn mount() {
    unmount();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let registry = Rc::new(SectionRegistry::new());
    for section in Section::ALL {
        match document.get_element_by_id(section.id()) {
            Some(el) => {
                if let Ok(el) = el.dyn_into::<HtmlElement>() {
                    registry.register(section, Rc::new(DomSection { el }));
                }
            }
            None => log::warn!("section '{section}' missing from the document"),
        }
    }

    let host = Rc::new(DomViewport {
        window: window.clone(),
    });
    let tracker = Rc::new(ScrollTracker::new(registry, host));

    let scope = Scope::new();
    scope.run(|| {
        let _ = tracker.attach();
        wire_jump_controls(&document, &tracker);
        observe_active(&document, &tracker);
    });

    // Evaluate once so a reload mid-page highlights the right entry.
    tracker.on_scroll(window.scroll_y().unwrap_or(0.0) as f32);

    RUNTIME.with(|r| {
        *r.borrow_mut() = Some(Runtime {
            scope,
            _tracker: tracker,
        })
    });
}

/// Release the scroll listener, click handlers, and signal observers.
#[wasm_bindgen]
pub fn unmount() {
    if let Some(runtime) = RUNTIME.with(|r| r.borrow_mut().take()) {
        runtime.scope.dispose();
    }
}

fn wire_jump_controls(document: &Document, tracker: &Rc<ScrollTracker>) {
    let Ok(nodes) = document.query_selector_all("[data-jump]") else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let Some(target) = el
            .get_attribute("data-jump")
            .and_then(|id| Section::from_id(&id))
        else {
            log::warn!("element with unknown jump target, skipping");
            continue;
        };

        let cb = Closure::<dyn FnMut(web_sys::Event)>::new({
            let tracker = tracker.clone();
            move |event: web_sys::Event| {
                // Anchors would otherwise fall back to instant #-navigation.
                event.prevent_default();
                tracker.jump_to(target);
            }
        });
        if let Err(e) = el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref()) {
            log::warn!("click listener: {e:?}");
            continue;
        }
        let _ = effect(move || {
            Dispose::new(move || {
                let _ =
                    el.remove_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
            })
        });
    }
}

fn observe_active(document: &Document, tracker: &Rc<ScrollTracker>) {
    let Ok(nodes) = document.query_selector_all(".nav-link[data-jump]") else {
        return;
    };
    let mut links: Vec<(Section, HtmlElement)> = Vec::new();
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok())
            && let Some(section) = el
                .get_attribute("data-jump")
                .and_then(|id| Section::from_id(&id))
        {
            links.push((section, el));
        }
    }

    apply_active(&links, tracker.active().get());
    let _ = tracker
        .active()
        .watch(move |active| apply_active(&links, *active));
}

fn apply_active(links: &[(Section, HtmlElement)], active: Section) {
    for (section, el) in links {
        let classes = el.class_list();
        let result = if *section == active {
            classes.add_1("active")
        } else {
            classes.remove_1("active")
        };
        if let Err(e) = result {
            log::warn!("nav highlight: {e:?}");
        }
    }
}
