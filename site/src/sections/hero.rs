use folio_nav::Section;
use folio_ui::*;

use crate::content::Profile;

pub fn view(profile: &Profile) -> View {
    SectionView(Section::Home, Modifier::new()).child((
        Heading(1, profile.name.clone()),
        Text(profile.role.clone()).modifier(Modifier::new().class("hero-role")),
        Text(profile.lead.clone()).modifier(Modifier::new().class("hero-lead")),
        Row(Modifier::new()).child((
            JumpButton(Section::Projects, "View my work"),
            JumpButtonOutline(Section::Contact, "Get in touch"),
        )),
    ))
}
