use folio_nav::Section;
use folio_ui::*;

use crate::content::Profile;

pub fn view(profile: &Profile) -> View {
    SectionView(Section::Contact, Modifier::new()).child((
        Heading(2, "Let's Connect"),
        Paragraph(vec![
            span("Currently looking for "),
            strong("software engineering/developer internships"),
            span(". I'd love to discuss projects, opportunities, or tech in general!"),
        ]),
        Link(format!("mailto:{}", profile.email), profile.email.clone())
            .modifier(Modifier::new().class("contact-link")),
        ExternalLink(profile.github_url.clone(), profile.github_label.clone())
            .modifier(Modifier::new().class("contact-link")),
        ExternalLink(profile.linkedin_url.clone(), profile.linkedin_label.clone())
            .aria_label("Visit my LinkedIn profile")
            .modifier(Modifier::new().class("contact-link")),
    ))
}
