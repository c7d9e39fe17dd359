use std::collections::HashSet;
use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::config::MotionConfig;

pub static SITE: LazyLock<SiteContent> =
    LazyLock::new(|| SiteContent::load().expect("Embedded site content should be valid"));

#[derive(Embed)]
#[folder = "content"]
struct ContentFiles;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    Missing(String),
    #[error("couldn't parse {file}: {reason}")]
    Parse { file: String, reason: String },
    #[error("catalog item has an empty identifier")]
    EmptyId,
    #[error("duplicate catalog identifier: {0}")]
    DuplicateId(String),
    #[error("skill level for {name} is {level}, expected 0..=100")]
    SkillLevel { name: String, level: u8 },
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// A project shown in the featured marquee and on `/projects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    pub image: String,
    pub live_demo: Option<String>,
    pub source: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub blurb: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusArea {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
    pub avatar: String,
    pub resume_path: String,
    pub resume_file_name: String,
    pub linkedin: String,
    pub about: Vec<String>,
    #[serde(default)]
    pub focus: Vec<FocusArea>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

impl SocialLink {
    /// `mailto:` links open in place, everything else in a new tab.
    pub fn is_external(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub highlights: Vec<String>,
    #[serde(default)]
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillSection {
    pub title: String,
    pub items: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub stats: Vec<Stat>,
    pub sections: Vec<SkillSection>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct SiteFile {
    profile: Profile,
    socials: Vec<SocialLink>,
    roles: Vec<String>,
    loading_messages: Vec<String>,
    #[serde(default)]
    ticker: Vec<String>,
    #[serde(default)]
    resume_highlights: Vec<String>,
    #[serde(default)]
    motion: MotionConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub profile: Profile,
    pub socials: Vec<SocialLink>,
    pub roles: Vec<String>,
    pub loading_messages: Vec<String>,
    pub ticker: Vec<String>,
    pub resume_highlights: Vec<String>,
    pub motion: MotionConfig,
    pub projects: Vec<CatalogItem>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Skills,
}

fn read_json<T: DeserializeOwned>(name: &str) -> Result<T, ContentError> {
    let file = ContentFiles::get(name).ok_or_else(|| ContentError::Missing(name.to_string()))?;
    serde_json::from_slice(&file.data).map_err(|e| ContentError::Parse {
        file: name.to_string(),
        reason: e.to_string(),
    })
}

fn check_catalog(items: &[CatalogItem]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for item in items {
        if item.id.trim().is_empty() {
            return Err(ContentError::EmptyId);
        }
        if !seen.insert(item.id.as_str()) {
            return Err(ContentError::DuplicateId(item.id.clone()));
        }
    }
    Ok(())
}

fn check_skills(skills: &Skills) -> Result<(), ContentError> {
    skills
        .sections
        .iter()
        .flat_map(|s| s.items.iter())
        .find(|s| s.level > 100)
        .map_or(Ok(()), |s| {
            Err(ContentError::SkillLevel {
                name: s.name.clone(),
                level: s.level,
            })
        })
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        let site: SiteFile = read_json("site.json")?;
        let projects: Vec<CatalogItem> = read_json("projects.json")?;
        let experience: Vec<ExperienceEntry> = read_json("experience.json")?;
        let skills: Skills = read_json("skills.json")?;
        Self::from_parts(site, projects, experience, skills)
    }

    fn from_parts(
        site: SiteFile,
        projects: Vec<CatalogItem>,
        experience: Vec<ExperienceEntry>,
        skills: Skills,
    ) -> Result<Self, ContentError> {
        if site.roles.is_empty() {
            return Err(ContentError::Empty("roles"));
        }
        if site.loading_messages.is_empty() {
            return Err(ContentError::Empty("loading_messages"));
        }
        check_catalog(&projects)?;
        check_skills(&skills)?;
        Ok(Self {
            profile: site.profile,
            socials: site.socials,
            roles: site.roles,
            loading_messages: site.loading_messages,
            ticker: site.ticker,
            resume_highlights: site.resume_highlights,
            motion: site.motion,
            projects,
            experience,
            skills,
        })
    }

    pub fn featured(&self) -> Vec<CatalogItem> {
        self.projects.iter().filter(|p| p.featured).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            title: id.to_uppercase(),
            image: format!("/{id}.png"),
            live_demo: None,
            source: "https://example.com".to_string(),
            tech: vec![],
            blurb: String::new(),
            featured: true,
        }
    }

    #[test]
    fn test_embedded_content_is_valid() {
        let site = SiteContent::load().expect("embedded content should load");
        assert!(!site.projects.is_empty());
        assert!(!site.featured().is_empty());
        assert_eq!(site.roles.len(), 3);
        assert_eq!(site.motion.marquee_speed, 80.0);
        assert!(site.projects.iter().any(|p| p.id == "coursestack"));
    }

    #[test]
    fn test_referenced_assets_are_shipped() {
        let site = SiteContent::load().expect("embedded content should load");
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        let local = [&site.profile.avatar, &site.profile.resume_path]
            .into_iter()
            .chain(site.projects.iter().map(|p| &p.image));
        for href in local {
            let path = href.strip_prefix('/').expect("asset paths are site-absolute");
            assert!(public.join(path).is_file(), "missing public asset: {href}");
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let items = vec![item("a"), item("b"), item("a")];
        assert_eq!(
            check_catalog(&items),
            Err(ContentError::DuplicateId("a".to_string()))
        );
        assert_eq!(check_catalog(&[item(" ")]), Err(ContentError::EmptyId));
        assert!(check_catalog(&[item("a"), item("b")]).is_ok());
    }

    #[test]
    fn test_skill_level_bounds() {
        let skills = Skills {
            stats: vec![],
            sections: vec![SkillSection {
                title: "Backend".to_string(),
                items: vec![
                    Skill {
                        name: "Rust".to_string(),
                        level: 100,
                    },
                    Skill {
                        name: "Go".to_string(),
                        level: 101,
                    },
                ],
            }],
        };
        assert_eq!(
            check_skills(&skills),
            Err(ContentError::SkillLevel {
                name: "Go".to_string(),
                level: 101
            })
        );
    }

    #[test]
    fn test_missing_file() {
        let res = read_json::<Skills>("nope.json");
        assert_eq!(res, Err(ContentError::Missing("nope.json".to_string())));
    }

    #[test]
    fn test_mailto_is_not_external() {
        let mail = SocialLink {
            label: "Email".to_string(),
            href: "mailto:me@example.com".to_string(),
        };
        let gh = SocialLink {
            label: "GitHub".to_string(),
            href: "https://github.com/me".to_string(),
        };
        assert!(!mail.is_external());
        assert!(gh.is_external());
    }
}
