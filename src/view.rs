//! Typed view-model bindings.
//!
//! A [`PageDescriptor`] lists every insertion point a page variant renders
//! into. [`bind`] checks a document against it up front, so missing markup is
//! reported as an error instead of being skipped at render time.

use std::collections::BTreeMap;
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dom::{Document, Element};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Full profile page: header, highlights, skills, filterable projects.
    #[default]
    Portfolio,
    /// Project grid with Live/GitHub/GitLab/Report action buttons.
    Showcase,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Portfolio => f.write_str("portfolio"),
            Self::Showcase => f.write_str("showcase"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    Name,
    Headline,
    HeroName,
    HeroRole,
    Summary,
    Location,
    EmailLink,
    ResumeLink,
    GithubLink,
    LinkedinLink,
    ContactEmail,
    ContactGithub,
    ContactLinkedin,
    ContactResume,
    FooterName,
    Year,
    Avatar,
    Hero,
    HighlightsList,
    SkillsGrid,
    ProjectsGrid,
    EmptyState,
    TagFilter,
    Search,
    ThemeButton,
}

/// How project cards lay out their links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    /// Repo and demo links, emitted only when the target is usable.
    Compact,
    /// A fixed Live/GitHub/GitLab/Report button row; unusable buttons are
    /// disabled and hidden.
    Actions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDescriptor {
    pub variant: Variant,
    pub card_style: CardStyle,
    slots: Vec<(Slot, &'static str)>,
}

impl PageDescriptor {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Portfolio => Self::portfolio(),
            Variant::Showcase => Self::showcase(),
        }
    }

    pub fn portfolio() -> Self {
        Self {
            variant: Variant::Portfolio,
            card_style: CardStyle::Compact,
            slots: vec![
                (Slot::Name, "name"),
                (Slot::Headline, "headline"),
                (Slot::HeroName, "heroName"),
                (Slot::HeroRole, "heroRole"),
                (Slot::Summary, "summary"),
                (Slot::Location, "location"),
                (Slot::EmailLink, "emailLink"),
                (Slot::ResumeLink, "resumeLink"),
                (Slot::GithubLink, "githubLink"),
                (Slot::LinkedinLink, "linkedinLink"),
                (Slot::ContactEmail, "contactEmail"),
                (Slot::ContactGithub, "contactGitHub"),
                (Slot::ContactLinkedin, "contactLinkedIn"),
                (Slot::ContactResume, "contactResume"),
                (Slot::FooterName, "footerName"),
                (Slot::Year, "year"),
                (Slot::Avatar, "avatar"),
                (Slot::Hero, "heroLeft"),
                (Slot::HighlightsList, "highlightsList"),
                (Slot::SkillsGrid, "skillsGrid"),
                (Slot::ProjectsGrid, "projectsGrid"),
                (Slot::EmptyState, "emptyState"),
                (Slot::TagFilter, "tagFilter"),
                (Slot::Search, "search"),
                (Slot::ThemeButton, "themeBtn"),
            ],
        }
    }

    pub fn showcase() -> Self {
        Self {
            variant: Variant::Showcase,
            card_style: CardStyle::Actions,
            slots: vec![
                (Slot::Year, "year"),
                (Slot::Hero, "heroLeft"),
                (Slot::ProjectsGrid, "projectGrid"),
                (Slot::EmptyState, "emptyState"),
                (Slot::TagFilter, "tagFilter"),
                (Slot::Search, "search"),
                (Slot::ThemeButton, "themeBtn"),
            ],
        }
    }

    pub fn slots(&self) -> &[(Slot, &'static str)] {
        &self.slots
    }

    pub fn id(&self, slot: Slot) -> Option<&'static str> {
        self.slots
            .iter()
            .find(|(candidate, _)| *candidate == slot)
            .map(|(_, id)| *id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("page `{variant}` is missing insertion points: {}", .ids.join(", "))]
pub struct MissingBinding {
    pub variant: Variant,
    pub ids: Vec<String>,
}

/// Insertion points verified to exist in a document.
#[derive(Debug, Clone)]
pub struct PageBindings {
    variant: Variant,
    card_style: CardStyle,
    slots: BTreeMap<Slot, &'static str>,
}

impl PageBindings {
    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn card_style(&self) -> CardStyle {
        self.card_style
    }

    pub fn id(&self, slot: Slot) -> Option<&'static str> {
        self.slots.get(&slot).copied()
    }

    /// `None` only when this page variant does not declare `slot`.
    pub fn element_mut<'d>(
        &self,
        document: &'d mut Document,
        slot: Slot,
    ) -> Option<&'d mut Element> {
        document.element_mut(self.id(slot)?)
    }
}

pub fn bind(document: &Document, descriptor: &PageDescriptor) -> Result<PageBindings, MissingBinding> {
    let missing = descriptor
        .slots()
        .iter()
        .filter(|(_, id)| document.element(id).is_none())
        .map(|(_, id)| id.to_string())
        .collect::<Vec<_>>();

    if !missing.is_empty() {
        return Err(MissingBinding {
            variant: descriptor.variant,
            ids: missing,
        });
    }

    Ok(PageBindings {
        variant: descriptor.variant,
        card_style: descriptor.card_style,
        slots: descriptor.slots().iter().copied().collect(),
    })
}
