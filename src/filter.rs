use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::data::Project;

/// Sentinel option that disables tag filtering.
pub const ALL_TAGS: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == ALL_TAGS {
            return Self::All;
        }
        Self::Tag(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_TAGS,
            Self::Tag(tag) => tag,
        }
    }

    fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => project.has_tag(tag),
        }
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TagFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Free-text query plus selected tag, narrowing the visible project set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Filter {
    query: String,
    tag: TagFilter,
}

impl Filter {
    pub fn new(query: Option<&str>, tag: Option<&str>) -> Self {
        Self {
            query: query.unwrap_or_default().to_string(),
            tag: tag.map(TagFilter::parse).unwrap_or_default(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn tag(&self) -> &TagFilter {
        &self.tag
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn set_tag(&mut self, tag: TagFilter) {
        self.tag = tag;
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.tag = TagFilter::All;
    }

    pub fn is_empty(&self) -> bool {
        self.normalized_query().is_empty() && self.tag == TagFilter::All
    }

    pub fn matches(&self, project: &Project) -> bool {
        let query = self.normalized_query();
        let query_matches = query.is_empty() || haystack(project).contains(&query);
        query_matches && self.tag.matches(project)
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects
            .iter()
            .filter(|project| self.matches(project))
            .collect()
    }

    fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }
}

fn haystack(project: &Project) -> String {
    let mut parts = vec![project.title(), project.summary()];
    parts.extend(project.tags.iter().map(String::as_str));
    parts.extend(project.highlights.iter().map(String::as_str));
    parts.join(" ").to_lowercase()
}

/// `"All"` followed by the sorted, deduplicated union of project tags.
///
/// Tags keep their authored case, so `ML` and `ml` are distinct options.
pub fn tag_options(projects: &[Project]) -> Vec<String> {
    let unique = projects
        .iter()
        .flat_map(|project| project.tags.iter())
        .filter(|tag| !tag.is_empty() && tag.as_str() != ALL_TAGS)
        .cloned()
        .collect::<BTreeSet<_>>();

    std::iter::once(ALL_TAGS.to_string())
        .chain(unique)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, tags: &[&str]) -> Project {
        Project {
            title: Some(title.to_string()),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            ..Project::default()
        }
    }

    fn titles(projects: Vec<&Project>) -> Vec<&str> {
        projects.into_iter().map(Project::title).collect()
    }

    #[test]
    fn selects_by_tag_with_empty_query() {
        let projects = vec![project("A", &["ml"]), project("B", &["web"])];
        let filter = Filter::new(Some(""), Some("ml"));
        assert_eq!(titles(filter.apply(&projects)), ["A"]);
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let projects = vec![project("A", &["ml"]), project("B", &["web"])];
        let filter = Filter::new(Some("b"), Some("All"));
        assert_eq!(titles(filter.apply(&projects)), ["B"]);
    }

    #[test]
    fn query_searches_summary_tags_and_highlights() {
        let mut flood = project("Flood", &["ml"]);
        flood.one_liner = Some("Random Forest severity model".to_string());
        flood.highlights = vec!["FastAPI backend".to_string()];
        let projects = vec![flood, project("Dash", &["Plotly"])];

        assert_eq!(titles(Filter::new(Some("forest"), None).apply(&projects)), ["Flood"]);
        assert_eq!(titles(Filter::new(Some(" fastapi "), None).apply(&projects)), ["Flood"]);
        assert_eq!(titles(Filter::new(Some("plotly"), None).apply(&projects)), ["Dash"]);
    }

    #[test]
    fn unknown_tag_yields_nothing() {
        let projects = vec![project("A", &["ml"]), project("B", &["web"])];
        let filter = Filter::new(None, Some("rust"));
        assert!(filter.apply(&projects).is_empty());
    }

    #[test]
    fn untagged_projects_are_visible_under_all() {
        let projects = vec![project("Bare", &[])];
        assert_eq!(titles(Filter::default().apply(&projects)), ["Bare"]);
        assert!(Filter::new(None, Some("ml")).apply(&projects).is_empty());
    }

    #[test]
    fn query_and_tag_must_both_match() {
        let projects = vec![project("Alpha", &["ml"]), project("Beta", &["ml"])];
        let filter = Filter::new(Some("alp"), Some("ml"));
        assert_eq!(titles(filter.apply(&projects)), ["Alpha"]);

        let filter = Filter::new(Some("alp"), Some("web"));
        assert!(filter.apply(&projects).is_empty());
    }

    #[test]
    fn tag_match_is_exact() {
        let projects = vec![project("A", &["ML"])];
        assert!(Filter::new(None, Some("ml")).apply(&projects).is_empty());
    }

    #[test]
    fn clear_resets_both_inputs() {
        let mut filter = Filter::new(Some("x"), Some("ml"));
        filter.clear();
        assert!(filter.is_empty());
        assert_eq!(filter.tag(), &TagFilter::All);
    }

    #[test]
    fn tag_options_are_sorted_unique_and_prefixed() {
        let projects = vec![
            project("A", &["web", "ml"]),
            project("B", &["ml", "ML"]),
            project("C", &[]),
        ];
        assert_eq!(tag_options(&projects), ["All", "ML", "ml", "web"]);
    }

    #[test]
    fn tag_options_list_all_once() {
        let projects = vec![project("A", &["All", "ml"])];
        assert_eq!(tag_options(&projects), ["All", "ml"]);
    }

    #[test]
    fn updating_inputs_refilters() {
        let projects = vec![project("Alpha", &["ml"]), project("Beta", &["web"])];
        let mut filter = Filter::default();
        assert_eq!(filter.apply(&projects).len(), 2);

        filter.set_tag(TagFilter::parse("web"));
        assert_eq!(titles(filter.apply(&projects)), ["Beta"]);

        filter.set_query("alp");
        assert!(filter.apply(&projects).is_empty());

        filter.set_tag(TagFilter::All);
        assert_eq!(titles(filter.apply(&projects)), ["Alpha"]);
    }
}
