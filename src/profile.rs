use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Site owner data shown on the landing page. One embedded document,
/// deserialized once; no query layer on top.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub courses: Vec<Course>,
    pub publications: Vec<Publication>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub tech: Vec<String>,
    pub stars: u32,
    pub forks: u32,
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Course {
    pub title: String,
    pub students: u32,
    pub rating: f32,
    pub duration: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Publication {
    pub title: String,
    pub journal: String,
    pub year: String,
    pub url: String,
}

impl Profile {
    pub fn builtin() -> anyhow::Result<Self> {
        serde_json::from_str(include_str!("../data/profile.json"))
            .context("data/profile.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_profile_is_complete() {
        let profile = Profile::builtin().unwrap();
        assert_eq!(profile.name, "Alaa Abuiteiwi");
        assert!(!profile.skills.is_empty());
        assert_eq!(profile.projects.len(), 3);
        assert_eq!(profile.courses.len(), 3);
        assert_eq!(profile.publications.len(), 3);
    }
}
