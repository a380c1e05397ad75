use folio_nav::Section;

use crate::Modifier;

/// One run of inline text inside a paragraph.
#[derive(Clone, Debug, PartialEq)]
pub struct Span {
    pub text: String,
    pub strong: bool,
}

pub fn span(text: impl Into<String>) -> Span {
    Span {
        text: text.into(),
        strong: false,
    }
}

pub fn strong(text: impl Into<String>) -> Span {
    Span {
        text: text.into(),
        strong: true,
    }
}

#[derive(Clone, Debug)]
pub enum ViewKind {
    /// Generic block containers.
    Column,
    Row,

    /// Fixed top navigation bar; children are the nav entries.
    NavBar,
    /// Brand control in the nav bar; jumps like a nav entry.
    Brand { label: String, target: Section },
    /// Nav entry for a section; the runtime toggles its `active` class.
    NavLink { target: Section },

    /// One of the page's four content regions; emitted with its anchor id.
    SectionView { section: Section },

    Heading { level: u8, text: String },
    Paragraph { spans: Vec<Span> },

    /// Outbound link. `new_tab` opens a new browsing context.
    Link {
        href: String,
        label: String,
        new_tab: bool,
    },
    /// Scroll-spy jump control; behavior is attached by the page runtime.
    JumpButton {
        target: Section,
        label: String,
        accent: bool,
    },

    List,
    ListItem { text: String },
    Chip { text: String },
    Card,
    Divider,
    Image { src: String, alt: String },
    Footer,
}

#[derive(Clone, Debug)]
pub struct View {
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
    /// Accessible name, emitted as `aria-label` where the label text alone
    /// would be ambiguous.
    pub aria_label: Option<String>,
}

impl View {
    pub fn new(kind: ViewKind) -> Self {
        View {
            kind,
            modifier: Modifier::default(),
            children: vec![],
            aria_label: None,
        }
    }

    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }

    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }
}
