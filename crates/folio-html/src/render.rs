//! View tree to HTML document.
//!
//! Output is deliberately plain: one block element per line, classes merged
//! from the node's intrinsic class and its modifier tokens, and all text and
//! attribute content escaped.

use folio_ui::{Span, View, ViewKind};

/// A complete page: head metadata plus the composed body.
pub struct Page {
    pub title: String,
    pub description: String,
    pub body: View,
}

pub fn render_document(page: &Page) -> String {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n");
    out.push_str("<html lang=\"en\">\n");
    out.push_str("<head>\n");
    out.push_str("<meta charset=\"UTF-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    out.push_str(&format!(
        "<meta name=\"description\" content=\"{}\">\n",
        escape_html(&page.description)
    ));
    out.push_str(&format!("<title>{}</title>\n", escape_html(&page.title)));
    out.push_str("<link rel=\"stylesheet\" href=\"assets/folio.css\">\n");
    out.push_str("<script type=\"module\" src=\"assets/folio.js\"></script>\n");
    out.push_str("</head>\n");
    out.push_str("<body>\n");
    render_view(&mut out, &page.body);
    out.push_str("</body>\n");
    out.push_str("</html>\n");

    out
}

pub fn render_view(out: &mut String, v: &View) {
    match &v.kind {
        ViewKind::Column => container(out, v, "div", &[]),
        ViewKind::Row => container(out, v, "div", &["row"]),
        ViewKind::NavBar => container(out, v, "nav", &["topbar"]),
        ViewKind::SectionView { section } => {
            out.push_str(&format!(
                "<section id=\"{}\"{}>\n",
                section.id(),
                attrs(&[], v)
            ));
            for c in &v.children {
                render_view(out, c);
            }
            out.push_str("</section>\n");
        }
        ViewKind::Card => container(out, v, "div", &["card"]),
        ViewKind::List => container(out, v, "ul", &[]),
        ViewKind::Footer => container(out, v, "footer", &[]),

        ViewKind::Brand { label, target } => {
            out.push_str(&format!(
                "<button type=\"button\" data-jump=\"{}\"{}>{}</button>\n",
                target.id(),
                attrs(&["brand"], v),
                escape_html(label)
            ));
        }
        ViewKind::NavLink { target } => {
            out.push_str(&format!(
                "<a href=\"#{id}\" data-jump=\"{id}\"{attrs}>{label}</a>\n",
                id = target.id(),
                attrs = attrs(&["nav-link"], v),
                label = escape_html(target.label())
            ));
        }
        ViewKind::JumpButton {
            target,
            label,
            accent,
        } => {
            let variant = if *accent { "btn-accent" } else { "btn-outline" };
            out.push_str(&format!(
                "<button type=\"button\" data-jump=\"{}\"{}>{}</button>\n",
                target.id(),
                attrs(&["btn", variant], v),
                escape_html(label)
            ));
        }

        ViewKind::Heading { level, text } => {
            let class = attrs(&[], v);
            out.push_str(&format!(
                "<h{level}{class}>{}</h{level}>\n",
                escape_html(text)
            ));
        }
        ViewKind::Paragraph { spans } => {
            out.push_str(&format!("<p{}>", attrs(&[], v)));
            for span in spans {
                render_span(out, span);
            }
            out.push_str("</p>\n");
        }
        ViewKind::Link {
            href,
            label,
            new_tab,
        } => {
            let mut extra = String::new();
            if *new_tab {
                extra.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
            }
            out.push_str(&format!(
                "<a href=\"{}\"{}{}>{}</a>\n",
                escape_html(href),
                extra,
                attrs(&["link"], v),
                escape_html(label)
            ));
        }

        ViewKind::ListItem { text } => {
            out.push_str(&format!("<li>{}</li>\n", escape_html(text)));
        }
        ViewKind::Chip { text } => {
            out.push_str(&format!(
                "<span{}>{}</span>\n",
                attrs(&["chip"], v),
                escape_html(text)
            ));
        }
        ViewKind::Divider => {
            out.push_str("<div class=\"divider\"></div>\n");
        }
        ViewKind::Image { src, alt } => {
            out.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\"{}>\n",
                escape_html(src),
                escape_html(alt),
                attrs(&[], v)
            ));
        }
    }
}

fn container(out: &mut String, v: &View, tag: &str, intrinsic: &[&str]) {
    out.push_str(&format!("<{tag}{}>\n", attrs(intrinsic, v)));
    for c in &v.children {
        render_view(out, c);
    }
    out.push_str(&format!("</{tag}>\n"));
}

fn render_span(out: &mut String, span: &Span) {
    if span.strong {
        out.push_str(&format!("<strong>{}</strong>", escape_html(&span.text)));
    } else {
        out.push_str(&escape_html(&span.text));
    }
}

/// ` class="..."` + ` aria-label="..."`, both omitted when empty.
fn attrs(intrinsic: &[&str], v: &View) -> String {
    let mut classes: Vec<&str> = intrinsic.to_vec();
    for c in v.modifier.classes() {
        classes.push(c.as_str());
    }

    let mut out = String::new();
    if !classes.is_empty() {
        out.push_str(&format!(" class=\"{}\"", escape_html(&classes.join(" "))));
    }
    if let Some(label) = &v.aria_label {
        out.push_str(&format!(" aria-label=\"{}\"", escape_html(label)));
    }
    out
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_nav::Section;
    use folio_ui::*;

    #[test]
    fn escapes_special_characters() {
        assert_eq!(
            escape_html("a < b & \"c\"'s > d"),
            "a &lt; b &amp; &quot;c&quot;&#39;s &gt; d"
        );
    }

    #[test]
    fn nav_link_targets_its_anchor() {
        let mut out = String::new();
        render_view(&mut out, &NavLink(Section::About));
        assert_eq!(
            out,
            "<a href=\"#about\" data-jump=\"about\" class=\"nav-link\">About</a>\n"
        );
    }

    #[test]
    fn external_link_opens_a_new_context() {
        let mut out = String::new();
        render_view(
            &mut out,
            &ExternalLink("https://github.com/3leana", "github.com/3leana")
                .aria_label("Visit my GitHub profile"),
        );
        assert!(out.contains("target=\"_blank\" rel=\"noopener noreferrer\""));
        assert!(out.contains("aria-label=\"Visit my GitHub profile\""));
    }

    #[test]
    fn jump_button_carries_data_jump_only() {
        let mut out = String::new();
        render_view(&mut out, &JumpButton(Section::Projects, "View my work"));
        assert_eq!(
            out,
            "<button type=\"button\" data-jump=\"projects\" class=\"btn btn-accent\">View my work</button>\n"
        );
    }

    #[test]
    fn section_is_anchored_by_id() {
        let mut out = String::new();
        render_view(
            &mut out,
            &SectionView(Section::Contact, Modifier::new().class("section")).child(Text("hi")),
        );
        assert_eq!(
            out,
            "<section id=\"contact\" class=\"section\">\n<p>hi</p>\n</section>\n"
        );
    }

    #[test]
    fn paragraph_renders_mixed_emphasis() {
        let mut out = String::new();
        render_view(
            &mut out,
            &Paragraph(vec![
                span("Currently looking for "),
                strong("internships"),
                span("."),
            ]),
        );
        assert_eq!(
            out,
            "<p>Currently looking for <strong>internships</strong>.</p>\n"
        );
    }

    #[test]
    fn document_shell_references_assets() {
        let page = Page {
            title: "Eleana Mita".into(),
            description: "Portfolio".into(),
            body: Column(Modifier::new()).child(Text("hello")),
        };
        let html = render_document(&page);
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">\n"));
        assert!(html.contains("<title>Eleana Mita</title>"));
        assert!(html.contains("<link rel=\"stylesheet\" href=\"assets/folio.css\">"));
        assert!(html.contains("<script type=\"module\" src=\"assets/folio.js\"></script>"));
        assert!(html.ends_with("</body>\n</html>\n"));
    }
}
