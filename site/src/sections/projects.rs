use folio_nav::Section;
use folio_ui::*;

use crate::content::Project;

pub fn view(projects: &[Project]) -> View {
    SectionView(Section::Projects, Modifier::new()).child((
        Heading(2, "Technical Projects"),
        Text(
            "Here are some projects I've worked on. Some projects are course-based and cannot \
             be publicly shared, but I'm happy to discuss the architecture and implementation \
             details.",
        ),
        Column(Modifier::new()).child(projects.iter().map(card).collect::<Vec<_>>()),
    ))
}

fn card(project: &Project) -> View {
    Card(Modifier::new()).child((
        Row(Modifier::new()).child((
            Heading(3, project.title.clone()),
            Text(project.date.clone()).modifier(Modifier::new().class("date")),
        )),
        Text(project.description.clone()),
        Heading(4, "Key Highlights"),
        List(Modifier::new()).child(
            project
                .impact
                .iter()
                .map(|i| ListItem(i.clone()))
                .collect::<Vec<_>>(),
        ),
        Row(Modifier::new()).child(project.tech.iter().map(|t| Chip(t.clone())).collect::<Vec<_>>()),
    ))
}
