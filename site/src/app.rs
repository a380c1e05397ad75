//! Page assembly: nav bar, the four sections with dividers, footer.

use folio_html::Page;
use folio_nav::Section;
use folio_ui::*;

use crate::content::{self, Profile};
use crate::sections;

pub fn page() -> Page {
    let profile = content::profile();
    Page {
        title: format!("{} — {}", profile.name, profile.role),
        description: profile.lead.clone(),
        body: compose(&profile),
    }
}

fn compose(profile: &Profile) -> View {
    Column(Modifier::new()).child((
        nav_bar(profile),
        sections::hero::view(profile),
        Divider(),
        sections::about::view(profile, &content::skill_groups()),
        Divider(),
        sections::projects::view(&content::projects()),
        Divider(),
        sections::contact::view(profile),
        footer(profile),
    ))
}

fn nav_bar(profile: &Profile) -> View {
    NavBar(Modifier::new())
        .child(Brand(profile.name.clone(), Section::Home))
        .child(Section::ALL.into_iter().map(NavLink).collect::<Vec<_>>())
}

fn footer(profile: &Profile) -> View {
    FooterBar(Modifier::new()).child((
        Text(format!(
            "© 2025 {} | Built with Rust & WebAssembly.",
            profile.name
        )),
        Text("Designed & developed by me"),
        ExternalLink(profile.source_url.clone(), "View source code")
            .aria_label("Visit the source repository"),
    ))
}
