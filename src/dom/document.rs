use super::Element;

/// A whole page: the `<html>` root plus lookup by element id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.root.find(id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.root.find_mut(id)
    }

    pub fn text_content(&self) -> String {
        self.root.text_content()
    }

    pub fn to_html(&self) -> String {
        format!("<!doctype html>\n{}\n", self.root.to_html())
    }
}
