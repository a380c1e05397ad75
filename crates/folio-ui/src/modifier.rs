/// Class-token modifier for document nodes.
///
/// Styling is declarative CSS shipped with the page, so a modifier is just
/// the ordered set of class tokens a node carries. Builder-style chaining
/// mirrors how components are composed:
///
/// ```rust
/// use folio_ui::Modifier;
///
/// let m = Modifier::new().class("hero").class("container");
/// assert_eq!(m.class_attr().as_deref(), Some("hero container"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Modifier {
    classes: Vec<String>,
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        if !token.is_empty() && !self.classes.contains(&token) {
            self.classes.push(token);
        }
        self
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Space-joined value for a `class` attribute; `None` when empty so the
    /// attribute can be omitted entirely.
    pub fn class_attr(&self) -> Option<String> {
        if self.classes.is_empty() {
            None
        } else {
            Some(self.classes.join(" "))
        }
    }
}
