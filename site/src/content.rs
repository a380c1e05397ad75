//! Static page content.
//!
//! Presentation data only; nothing here is consulted by the scroll-spy
//! logic. Kept as plain serde-able structs so the data could move to a
//! config file without touching the composition code.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub lead: String,
    pub about: Vec<String>,
    pub education: Education,
    pub email: String,
    pub github_url: String,
    pub github_label: String,
    pub linkedin_url: String,
    pub linkedin_label: String,
    pub source_url: String,
    pub portrait: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Education {
    pub program: String,
    pub school: String,
    pub note: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub date: String,
    pub description: String,
    pub tech: Vec<String>,
    pub impact: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

pub fn profile() -> Profile {
    Profile {
        name: "Eleana Mita".into(),
        role: "Software Developer Student".into(),
        lead: "I enjoy solving complex problems and building software that matters. \
               My current interests include distributed systems, web development, and machine learning."
            .into(),
        about: vec![
            "Based in Toronto, ON, I'm a Computer Science student with a strong foundation \
             in algorithms, data structures, and software engineering."
                .into(),
            "I enjoy breaking down complex problems into manageable systems and building \
             solutions that scale. I'm particularly interested in backend development, \
             real-time applications, and combining machine learning with traditional \
             software systems."
                .into(),
        ],
        education: Education {
            program: "Honours Bachelor of Technology - Software Development".into(),
            school: "Seneca Polytechnic | Toronto ON".into(),
            note: "Expected Graduation: August 2027".into(),
        },
        email: "mita.eleana@gmail.com".into(),
        github_url: "https://github.com/3leana".into(),
        github_label: "github.com/3leana".into(),
        linkedin_url: "https://linkedin.com/in/eleana-mita".into(),
        linkedin_label: "linkedin.com/in/eleana-mita".into(),
        source_url: "https://github.com/3leana/portfolio".into(),
        portrait: "assets/portrait.png".into(),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Fragments — Distributed Microservices Platform".into(),
            date: "Sept – Dec 2025".into(),
            description: "Designed and deployed a distributed backend service for storing, \
                          retrieving, and transforming text and image fragments at scale."
                .into(),
            tech: ["Node.js", "AWS ECS/EC2", "Express", "Docker", "DynamoDB", "S3", "JWT"]
                .map(String::from)
                .to_vec(),
            impact: vec![
                "Supported CRUD operations across 10+ MIME types for structured and \
                 unstructured data"
                    .into(),
                "Enabled scalable storage using DynamoDB and S3 with clear separation of \
                 concerns"
                    .into(),
                "Automated Jest tests (90%+ coverage) executed via GitHub Actions, with \
                 Dockerized deployment to a Linux server."
                    .into(),
            ],
        },
        Project {
            title: "ChefAI — AI-Powered Recipe Recommendation Chatbot".into(),
            date: "March 2025".into(),
            description: "Built a full-stack AI-driven web application that generates \
                          personalized recipes based on user-selected ingredients and \
                          preferences."
                .into(),
            tech: ["React", "Node.js", "Express", "OpenAI API", "JavaScript", "CSS"]
                .map(String::from)
                .to_vec(),
            impact: vec![
                "Delivered an end-to-end AI-powered application during a hackathon environment"
                    .into(),
                "Improved usability through interactive recipe cards and dynamic filtering"
                    .into(),
                "Demonstrated practical integration of LLMs into a consumer-facing web app"
                    .into(),
            ],
        },
        Project {
            title: "Astron — B2B Construction Project Management Platform".into(),
            date: "March 2024".into(),
            description: "Led development of a web-based platform to centralize planning, \
                          tracking, and collaboration for construction and renovation projects."
                .into(),
            tech: ["React", "Node.js", "Express", "REST API", "Figma"]
                .map(String::from)
                .to_vec(),
            impact: vec![
                "Finalist at the Housing Crisis Hackathon for an innovative B2B solution".into(),
                "Improved visibility into project progress, materials, and workforce planning"
                    .into(),
                "Demonstrated team leadership and end-to-end product delivery".into(),
            ],
        },
    ]
}

pub fn skill_groups() -> Vec<SkillGroup> {
    vec![
        SkillGroup {
            category: "Languages".into(),
            items: ["JavaScript/TypeScript", "Python", "C/C++", "SQL", "HTML/CSS"]
                .map(String::from)
                .to_vec(),
        },
        SkillGroup {
            category: "Frameworks".into(),
            items: ["React", "Next.js", "Node.js", "Express", "REST APIs"]
                .map(String::from)
                .to_vec(),
        },
        SkillGroup {
            category: "Databases & Cloud".into(),
            items: [
                "MySQL",
                "Oracle (SQL)",
                "AWS",
                "EC2",
                "ECS",
                "Cognito",
                "S3",
                "DynamoDB",
            ]
            .map(String::from)
            .to_vec(),
        },
        SkillGroup {
            category: "DevOps & Tools".into(),
            items: ["Git", "Docker", "Jest", "Linux", "CI/CD"]
                .map(String::from)
                .to_vec(),
        },
    ]
}
