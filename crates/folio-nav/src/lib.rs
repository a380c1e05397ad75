//! # Scroll-spy navigation
//!
//! The page has four fixed sections. While the visitor scrolls, exactly one
//! of them is considered *active* and its nav entry is highlighted; clicking
//! a nav entry smoothly scrolls the matching section into view.
//!
//! Two pieces cooperate:
//!
//! - [`SectionRegistry`] — maps each [`Section`] to a live, measurable handle
//!   for its mounted element. Positions are re-read on every query, never
//!   cached, so layout shifts (fonts, resizes) are picked up for free.
//! - [`ScrollTracker`] — owns the `active` signal and derives it from scroll
//!   notifications; `jump_to` issues smooth scroll requests through the
//!   [`ScrollHost`].
//!
//! The tracker never fails: an unmounted section measures as `None` and is
//! skipped, and `jump_to` on an unmounted section is a silent no-op.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use folio_core::{Dispose, Signal, effect, signal};
use serde::{Deserialize, Serialize};

/// Clearance for the fixed nav bar: a section counts as current once its
/// range covers the scroll offset plus this margin, so the highlight flips
/// while the section heading is still below the bar, not under it.
pub const HEADER_OFFSET: f32 = 200.0;

/// The four content regions of the page, in declaration order.
///
/// The order of [`Section::ALL`] is the tie-break for the scroll tracker:
/// the first section whose range contains the probe wins.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    /// Anchor id used in markup and in the DOM lookup (`home`, `about`, …).
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Capitalized display label for nav entries.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// A section's current document position, in layout pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    /// Distance from the document top to the section's top edge.
    pub top: f32,
    /// Rendered vertical extent.
    pub height: f32,
}

impl SectionBounds {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    /// Half-open containment: `[top, top + height)`.
    pub fn contains(self, y: f32) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Opaque measurable handle for a mounted section element.
pub trait Measure {
    /// Live read of the element's current position. `None` while the element
    /// is unmounted or cannot be measured; callers skip, never fail.
    fn bounds(&self) -> Option<SectionBounds>;
}

/// Non-owning map from [`Section`] to its mounted element handle.
///
/// At most one handle per section; re-registering replaces the old handle
/// (which matters on re-render but not for correctness, since positions are
/// re-queried on every measure rather than cached here).
#[derive(Default)]
pub struct SectionRegistry {
    slots: RefCell<HashMap<Section, Rc<dyn Measure>>>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, section: Section, handle: Rc<dyn Measure>) {
        log::debug!("register section '{section}'");
        self.slots.borrow_mut().insert(section, handle);
    }

    pub fn unregister(&self, section: Section) {
        log::debug!("unregister section '{section}'");
        self.slots.borrow_mut().remove(&section);
    }

    pub fn get(&self, section: Section) -> Option<Rc<dyn Measure>> {
        self.slots.borrow().get(&section).cloned()
    }

    /// Live read of a registered section's bounds; `None` for unknown names
    /// and for handles that currently measure as unmounted.
    pub fn measure(&self, section: Section) -> Option<SectionBounds> {
        self.get(section).and_then(|h| h.bounds())
    }
}

/// The viewport the tracker runs against.
///
/// The DOM runtime implements this over `web_sys::Window`; tests use a
/// recording fake.
pub trait ScrollHost {
    /// Request a smooth (animated) scroll that brings document offset `top`
    /// to the viewport's top edge. Asynchronous; a later request supersedes
    /// an in-flight animation on the host's side.
    fn scroll_to(&self, top: f32);

    /// Subscribe to scroll notifications, delivered in order, one call per
    /// notification (no coalescing). The guard releases the subscription.
    fn subscribe(&self, on_scroll: Rc<dyn Fn(f32)>) -> Dispose;
}

/// Derives the active section from scroll position.
///
/// `active` starts at [`Section::Home`] and is only ever written from
/// [`ScrollTracker::on_scroll`]; `jump_to` leaves it alone and lets the
/// highlight catch up through the scroll events the animation produces.
pub struct ScrollTracker {
    registry: Rc<SectionRegistry>,
    host: Rc<dyn ScrollHost>,
    active: Signal<Section>,
    header_offset: f32,
    attached: Cell<bool>,
}

impl ScrollTracker {
    pub fn new(registry: Rc<SectionRegistry>, host: Rc<dyn ScrollHost>) -> Self {
        Self {
            registry,
            host,
            active: signal(Section::Home),
            header_offset: HEADER_OFFSET,
            attached: Cell::new(false),
        }
    }

    pub fn header_offset(mut self, px: f32) -> Self {
        self.header_offset = px;
        self
    }

    /// Handle to the active-section state, for observers.
    pub fn active(&self) -> Signal<Section> {
        self.active.clone()
    }

    /// Recompute the active section for the given scroll offset.
    ///
    /// First section in [`Section::ALL`] order whose measured range contains
    /// `offset + header_offset` wins; with no match (above all content or
    /// past the last section) the previous value is kept.
    pub fn on_scroll(&self, offset: f32) {
        let probe = offset + self.header_offset;
        for section in Section::ALL {
            if let Some(bounds) = self.registry.measure(section)
                && bounds.contains(probe)
            {
                if self.active.get() != section {
                    self.active.set(section);
                }
                break;
            }
        }
    }

    /// Smoothly scroll `section` to the top of the viewport.
    ///
    /// Silent no-op while the section is not mounted.
    pub fn jump_to(&self, section: Section) {
        if let Some(bounds) = self.registry.measure(section) {
            self.host.scroll_to(bounds.top);
        } else {
            log::debug!("jump_to('{section}'): not mounted, ignoring");
        }
    }

    /// Subscribe to the host's scroll notifications.
    ///
    /// Called once per tracker lifetime; the guard (also registered with the
    /// current `Scope`, if any) releases the subscription on teardown. A
    /// second call is refused.
    pub fn attach(self: &Rc<Self>) -> Dispose {
        if self.attached.replace(true) {
            log::warn!("scroll tracker already attached; ignoring");
            return Dispose::noop();
        }

        let weak: Weak<ScrollTracker> = Rc::downgrade(self);
        let sub = self.host.subscribe(Rc::new(move |offset| {
            if let Some(tracker) = weak.upgrade() {
                tracker.on_scroll(offset);
            }
        }));
        effect(move || sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeSection {
        bounds: Cell<Option<SectionBounds>>,
    }

    impl FakeSection {
        fn mounted(top: f32, height: f32) -> Rc<Self> {
            Rc::new(Self {
                bounds: Cell::new(Some(SectionBounds::new(top, height))),
            })
        }

        fn unmounted() -> Rc<Self> {
            Rc::new(Self {
                bounds: Cell::new(None),
            })
        }
    }

    impl Measure for FakeSection {
        fn bounds(&self) -> Option<SectionBounds> {
            self.bounds.get()
        }
    }

    #[derive(Default)]
    struct FakeViewport {
        requests: RefCell<Vec<f32>>,
        listeners: Rc<RefCell<Vec<(u64, Rc<dyn Fn(f32)>)>>>,
        next_listener: Cell<u64>,
    }

    impl FakeViewport {
        fn deliver(&self, offset: f32) {
            let listeners: Vec<_> = self
                .listeners
                .borrow()
                .iter()
                .map(|(_, f)| f.clone())
                .collect();
            for f in listeners {
                f(offset);
            }
        }
    }

    impl ScrollHost for FakeViewport {
        fn scroll_to(&self, top: f32) {
            self.requests.borrow_mut().push(top);
        }

        fn subscribe(&self, on_scroll: Rc<dyn Fn(f32)>) -> Dispose {
            let id = self.next_listener.get();
            self.next_listener.set(id + 1);
            self.listeners.borrow_mut().push((id, on_scroll));
            let listeners = self.listeners.clone();
            Dispose::new(move || {
                listeners.borrow_mut().retain(|(lid, _)| *lid != id);
            })
        }
    }

    /// Page from the layout used throughout: home [0,800), about [800,1600),
    /// projects [1600,3200), contact [3200,4000).
    fn page() -> (Rc<SectionRegistry>, Rc<FakeViewport>, Rc<ScrollTracker>) {
        let registry = Rc::new(SectionRegistry::new());
        registry.register(Section::Home, FakeSection::mounted(0.0, 800.0));
        registry.register(Section::About, FakeSection::mounted(800.0, 800.0));
        registry.register(Section::Projects, FakeSection::mounted(1600.0, 1600.0));
        registry.register(Section::Contact, FakeSection::mounted(3200.0, 800.0));

        let viewport = Rc::new(FakeViewport::default());
        let tracker = Rc::new(ScrollTracker::new(registry.clone(), viewport.clone()));
        (registry, viewport, tracker)
    }

    #[test]
    fn initial_active_is_home() {
        let (_, _, tracker) = page();
        assert_eq!(tracker.active().get(), Section::Home);
    }

    #[test]
    fn scroll_selects_containing_section() {
        let (_, _, tracker) = page();

        tracker.on_scroll(700.0); // probe 900 -> about
        assert_eq!(tracker.active().get(), Section::About);

        tracker.on_scroll(0.0); // probe 200 -> home
        assert_eq!(tracker.active().get(), Section::Home);

        tracker.on_scroll(3100.0); // probe 3300 -> contact
        assert_eq!(tracker.active().get(), Section::Contact);

        tracker.on_scroll(5000.0); // probe 5200 -> past the end, unchanged
        assert_eq!(tracker.active().get(), Section::Contact);
    }

    #[test]
    fn no_match_above_content_keeps_previous() {
        let (_, _, tracker) = page();

        tracker.on_scroll(700.0);
        assert_eq!(tracker.active().get(), Section::About);

        tracker.on_scroll(-900.0); // probe -700, above everything
        assert_eq!(tracker.active().get(), Section::About);
    }

    #[test]
    fn first_match_in_declaration_order_wins() {
        // Overlapping ranges cannot happen under real layout; the tie-break
        // is still pinned down: earliest in Section::ALL order.
        let registry = Rc::new(SectionRegistry::new());
        registry.register(Section::Home, FakeSection::mounted(0.0, 2000.0));
        registry.register(Section::About, FakeSection::mounted(0.0, 2000.0));

        let viewport = Rc::new(FakeViewport::default());
        let tracker = ScrollTracker::new(registry, viewport);

        tracker.on_scroll(500.0);
        assert_eq!(tracker.active().get(), Section::Home);
    }

    #[test]
    fn probe_respects_custom_header_offset() {
        let registry = Rc::new(SectionRegistry::new());
        registry.register(Section::Home, FakeSection::mounted(0.0, 100.0));
        registry.register(Section::About, FakeSection::mounted(100.0, 100.0));

        let viewport = Rc::new(FakeViewport::default());
        let tracker = ScrollTracker::new(registry, viewport).header_offset(0.0);

        tracker.on_scroll(99.0);
        assert_eq!(tracker.active().get(), Section::Home);
        tracker.on_scroll(100.0);
        assert_eq!(tracker.active().get(), Section::About);
    }

    #[test]
    fn unmounted_sections_are_skipped() {
        let registry = Rc::new(SectionRegistry::new());
        registry.register(Section::Home, FakeSection::unmounted());
        registry.register(Section::About, FakeSection::mounted(800.0, 800.0));

        let viewport = Rc::new(FakeViewport::default());
        let tracker = ScrollTracker::new(registry, viewport);

        tracker.on_scroll(700.0); // probe 900; home yields no bounds
        assert_eq!(tracker.active().get(), Section::About);
    }

    #[test]
    fn jump_requests_section_top() {
        let (_, viewport, tracker) = page();

        tracker.jump_to(Section::Projects);
        assert_eq!(*viewport.requests.borrow(), vec![1600.0]);
    }

    #[test]
    fn jump_does_not_touch_active() {
        let (_, viewport, tracker) = page();

        tracker.jump_to(Section::Contact);
        assert_eq!(tracker.active().get(), Section::Home);
        assert_eq!(*viewport.requests.borrow(), vec![3200.0]);
    }

    #[test]
    fn jump_to_unregistered_section_is_a_noop() {
        let registry = Rc::new(SectionRegistry::new());
        let viewport = Rc::new(FakeViewport::default());
        let tracker = ScrollTracker::new(registry, viewport.clone());

        tracker.jump_to(Section::Projects);
        assert!(viewport.requests.borrow().is_empty());
    }

    #[test]
    fn unregister_makes_section_absent() {
        let (registry, viewport, tracker) = page();

        registry.unregister(Section::Projects);
        assert!(registry.measure(Section::Projects).is_none());

        tracker.jump_to(Section::Projects);
        assert!(viewport.requests.borrow().is_empty());
    }

    #[test]
    fn reregistration_replaces_the_handle() {
        let registry = Rc::new(SectionRegistry::new());
        registry.register(Section::Home, FakeSection::mounted(0.0, 800.0));
        registry.register(Section::Home, FakeSection::mounted(0.0, 400.0));

        assert_eq!(
            registry.measure(Section::Home),
            Some(SectionBounds::new(0.0, 400.0))
        );
    }

    #[test]
    fn measurements_are_live_reads() {
        let registry = Rc::new(SectionRegistry::new());
        let handle = FakeSection::mounted(0.0, 800.0);
        registry.register(Section::Home, handle.clone());

        // Layout shift between queries: the registry reflects it immediately.
        handle.bounds.set(Some(SectionBounds::new(40.0, 760.0)));
        assert_eq!(
            registry.measure(Section::Home),
            Some(SectionBounds::new(40.0, 760.0))
        );
    }

    #[test]
    fn attach_feeds_scroll_notifications() {
        let (_, viewport, tracker) = page();

        let guard = tracker.attach();
        viewport.deliver(700.0);
        assert_eq!(tracker.active().get(), Section::About);

        guard.run();
        viewport.deliver(0.0); // released: no longer observed
        assert_eq!(tracker.active().get(), Section::About);
    }

    #[test]
    fn attach_subscribes_exactly_once() {
        let (_, viewport, tracker) = page();

        let _first = tracker.attach();
        let _second = tracker.attach();
        assert_eq!(viewport.listeners.borrow().len(), 1);
    }

    #[test]
    fn section_ids_round_trip_through_serde() {
        assert_eq!(serde_json::to_string(&Section::About).unwrap(), "\"about\"");
        let s: Section = serde_json::from_str("\"projects\"").unwrap();
        assert_eq!(s, Section::Projects);
    }

    #[test]
    fn section_labels_are_capitalized_ids() {
        for section in Section::ALL {
            let label = section.label();
            let id = section.id();
            assert_eq!(label.to_lowercase(), id);
            assert!(label.chars().next().unwrap().is_uppercase());
            assert_eq!(Section::from_id(id), Some(section));
        }
    }
}
