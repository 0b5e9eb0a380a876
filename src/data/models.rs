use serde::{Deserialize, Serialize};

/// The whole `data.json` document: profile scalars at the top level plus the
/// ordered collections rendered into the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioDocument {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub links: ProfileLinks,
}

impl Profile {
    /// `mailto:` target for the email, only when an address is present.
    pub fn mailto(&self) -> Option<String> {
        non_empty(self.email.as_deref()).map(|email| format!("mailto:{email}"))
    }

    pub fn initial(&self) -> String {
        non_empty(self.name.as_deref())
            .and_then(|name| name.chars().next())
            .unwrap_or('R')
            .to_uppercase()
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileLinks {
    #[serde(default)]
    pub resume: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub gitlab: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "oneLiner", default, skip_serializing_if = "Option::is_none")]
    pub one_liner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
}

impl Project {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// One-line description; page variants disagree on the key name.
    pub fn summary(&self) -> &str {
        non_empty(self.one_liner.as_deref())
            .or(self.description.as_deref())
            .unwrap_or_default()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub gitlab: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub report: Option<String>,
}

impl ProjectLinks {
    pub fn source(&self) -> Option<&str> {
        authored(self.repo.as_deref()).or(self.github.as_deref())
    }

    pub fn demo(&self) -> Option<&str> {
        authored(self.demo.as_deref()).or(self.live.as_deref())
    }

    pub fn live(&self) -> Option<&str> {
        authored(self.live.as_deref()).or(self.demo.as_deref())
    }

    pub fn github(&self) -> Option<&str> {
        authored(self.github.as_deref()).or(self.repo.as_deref())
    }
}

/// A link field holding something other than blank or the `#` placeholder.
fn authored(value: Option<&str>) -> Option<&str> {
    non_empty(value).filter(|value| value.trim() != "#")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}
