#![allow(non_snake_case)]
//! Document components for composing the page as a view tree.
//!
//! Components are plain functions returning [`View`]; containers take a
//! [`Modifier`] and children are attached with [`ViewExt::child`], which
//! accepts a single view, a `Vec<View>`, or a tuple:
//!
//! ```rust
//! use folio_ui::*;
//!
//! let hero = Column(Modifier::new().class("hero")).child((
//!     Heading(1, "Eleana Mita"),
//!     Text("I enjoy solving complex problems."),
//! ));
//! assert_eq!(hero.children.len(), 2);
//! ```

pub mod modifier;
pub mod view;

pub use modifier::Modifier;
pub use view::*;

use folio_nav::Section;

pub fn Column(modifier: Modifier) -> View {
    View::new(ViewKind::Column).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(ViewKind::Row).modifier(modifier)
}

/// Fixed top bar; the brand control and one [`NavLink`] per section go in as
/// children.
pub fn NavBar(modifier: Modifier) -> View {
    View::new(ViewKind::NavBar).modifier(modifier)
}

pub fn Brand(label: impl Into<String>, target: Section) -> View {
    View::new(ViewKind::Brand {
        label: label.into(),
        target,
    })
}

/// Nav entry labeled with the section's capitalized name.
pub fn NavLink(target: Section) -> View {
    View::new(ViewKind::NavLink { target })
}

/// A content region carrying its anchor id.
pub fn SectionView(section: Section, modifier: Modifier) -> View {
    View::new(ViewKind::SectionView { section }).modifier(modifier)
}

pub fn Heading(level: u8, text: impl Into<String>) -> View {
    View::new(ViewKind::Heading {
        level: level.clamp(1, 6),
        text: text.into(),
    })
}

/// Single-run paragraph.
pub fn Text(text: impl Into<String>) -> View {
    Paragraph(vec![span(text)])
}

/// Paragraph with mixed emphasis, e.g. `[span("for "), strong("internships")]`.
pub fn Paragraph(spans: Vec<Span>) -> View {
    View::new(ViewKind::Paragraph { spans })
}

/// Same-context outbound link (e.g. `mailto:`).
pub fn Link(href: impl Into<String>, label: impl Into<String>) -> View {
    View::new(ViewKind::Link {
        href: href.into(),
        label: label.into(),
        new_tab: false,
    })
}

/// Outbound link opening a new browsing context.
pub fn ExternalLink(href: impl Into<String>, label: impl Into<String>) -> View {
    View::new(ViewKind::Link {
        href: href.into(),
        label: label.into(),
        new_tab: true,
    })
}

/// Filled call-to-action jumping to `target`.
pub fn JumpButton(target: Section, label: impl Into<String>) -> View {
    View::new(ViewKind::JumpButton {
        target,
        label: label.into(),
        accent: true,
    })
}

/// Outlined variant of [`JumpButton`].
pub fn JumpButtonOutline(target: Section, label: impl Into<String>) -> View {
    View::new(ViewKind::JumpButton {
        target,
        label: label.into(),
        accent: false,
    })
}

pub fn List(modifier: Modifier) -> View {
    View::new(ViewKind::List).modifier(modifier)
}

pub fn ListItem(text: impl Into<String>) -> View {
    View::new(ViewKind::ListItem { text: text.into() })
}

pub fn Chip(text: impl Into<String>) -> View {
    View::new(ViewKind::Chip { text: text.into() })
}

pub fn Card(modifier: Modifier) -> View {
    View::new(ViewKind::Card).modifier(modifier)
}

/// Gradient rule between adjacent sections.
pub fn Divider() -> View {
    View::new(ViewKind::Divider)
}

pub fn Image(src: impl Into<String>, alt: impl Into<String>) -> View {
    View::new(ViewKind::Image {
        src: src.into(),
        alt: alt.into(),
    })
}

pub fn FooterBar(modifier: Modifier) -> View {
    View::new(ViewKind::Footer).modifier(modifier)
}

pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(mut self, children: impl IntoChildren) -> Self {
        self.children.extend(children.into_children());
        self
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl IntoChildren for Option<View> {
    fn into_children(self) -> Vec<View> {
        self.into_iter().collect()
    }
}

macro_rules! tuple_into_children {
    ($($name:ident),+) => {
        impl<$($name: IntoChildren),+> IntoChildren for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_children(self) -> Vec<View> {
                let ($($name,)+) = self;
                let mut out = Vec::new();
                $(out.extend($name.into_children());)+
                out
            }
        }
    };
}

tuple_into_children!(A, B);
tuple_into_children!(A, B, C);
tuple_into_children!(A, B, C, D);
tuple_into_children!(A, B, C, D, E);
tuple_into_children!(A, B, C, D, E, F);
tuple_into_children!(A, B, C, D, E, F, G);
tuple_into_children!(A, B, C, D, E, F, G, H);
tuple_into_children!(A, B, C, D, E, F, G, H, I);
tuple_into_children!(A, B, C, D, E, F, G, H, I, J);
