use folio_nav::Section;
use folio_ui::*;

use crate::content::{Profile, SkillGroup};

pub fn view(profile: &Profile, skills: &[SkillGroup]) -> View {
    let story = Column(Modifier::new())
        .child(
            profile
                .about
                .iter()
                .map(|p| Text(p.clone()))
                .collect::<Vec<_>>(),
        )
        .child((
            Heading(3, "Education"),
            Text(profile.education.program.clone()),
            Text(profile.education.school.clone()).modifier(Modifier::new().class("muted")),
            Text(profile.education.note.clone()).modifier(Modifier::new().class("muted")),
        ));

    let portrait = Image(profile.portrait.clone(), profile.name.clone())
        .modifier(Modifier::new().class("portrait"));

    SectionView(Section::About, Modifier::new()).child((
        Heading(2, "About Me"),
        Row(Modifier::new()).child((story, portrait)),
        Heading(3, "Skills & Technologies"),
        Column(Modifier::new()).child(skills.iter().map(skill_group).collect::<Vec<_>>()),
    ))
}

fn skill_group(group: &SkillGroup) -> View {
    Column(Modifier::new()).child((
        Heading(4, group.category.clone()),
        Row(Modifier::new()).child(group.items.iter().map(|s| Chip(s.clone())).collect::<Vec<_>>()),
    ))
}
