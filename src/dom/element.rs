use std::fmt::Write as _;

const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A node of the in-memory page tree.
///
/// Text and attribute values are stored raw and escaped only when the tree
/// is serialized, so nothing authored in the data document can become markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
    hidden: bool,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        for class in class.split_whitespace() {
            self.add_class(class);
        }
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(Some(text));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children<I: IntoIterator<Item = Element>>(mut self, children: I) -> Self {
        self.children.extend(children);
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replaces all content with `text`; `None` clears to the empty string.
    pub fn set_text(&mut self, text: Option<&str>) {
        self.children.clear();
        self.text = Some(text.unwrap_or_default().to_string());
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
        self.text = None;
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn insert_child(&mut self, index: usize, child: Element) {
        let index = index.min(self.children.len());
        self.children.insert(index, child);
    }

    /// Removes the first direct child carrying `id`.
    pub fn remove_child_by_id(&mut self, id: &str) -> Option<Element> {
        let position = self
            .children
            .iter()
            .position(|child| child.id() == Some(id))?;
        Some(self.children.remove(position))
    }

    pub fn child_position_with_class(&self, class: &str) -> Option<usize> {
        self.children.iter().position(|child| child.has_class(class))
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(key, _)| key != name);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|existing| existing != class);
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn find(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    /// Depth-first list of descendants (self included) carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_by_class(class, &mut out);
        out
    }

    fn collect_by_class<'a>(&'a self, class: &str, out: &mut Vec<&'a Element>) {
        if self.has_class(class) {
            out.push(self);
        }
        for child in &self.children {
            child.collect_by_class(class, out);
        }
    }

    pub fn contains_attr(&self, name: &str, value: &str) -> bool {
        self.attr(name) == Some(value)
            || self
                .children
                .iter()
                .any(|child| child.contains_attr(name, value))
    }

    /// Visible text of this subtree, like the DOM `textContent` property.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);

        if let Some(id) = &self.id {
            write_attr(out, "id", id);
        }
        if !self.classes.is_empty() {
            write_attr(out, "class", &self.classes.join(" "));
        }
        for (name, value) in &self.attrs {
            write_attr(out, name, value);
        }
        if self.hidden {
            out.push_str(" hidden");
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }

        if let Some(text) = &self.text {
            out.push_str(&html_escape::encode_text(text));
        }
        for child in &self.children {
            child.write_html(out);
        }

        let _ = write!(out, "</{}>", self.tag);
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(
        out,
        " {name}=\"{}\"",
        html_escape::encode_double_quoted_attribute(value)
    );
}
