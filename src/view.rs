// Description of a visual subtree. The painter produces these instead of touching a document, the
// web client turns them into DOM nodes and the console tool serializes them to HTML.

use std::fmt;

use itertools::Itertools;

use crate::geometry::{FCoord, svg_number};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Namespace {
    Html,
    Svg,
}

impl Namespace {
    pub fn uri(self) -> Option<&'static str> {
        match self {
            Namespace::Html => None,
            Namespace::Svg => Some("http://www.w3.org/2000/svg"),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct VElement {
    pub namespace: Namespace,
    pub tag: &'static str,
    pub attributes: Vec<(&'static str, String)>,
    pub classes: Vec<String>,
    pub text: Option<String>,
    pub children: Vec<VElement>,
}

impl VElement {
    pub fn html(tag: &'static str) -> Self { Self::new(Namespace::Html, tag) }
    pub fn svg(tag: &'static str) -> Self { Self::new(Namespace::Svg, tag) }

    fn new(namespace: Namespace, tag: &'static str) -> Self {
        VElement {
            namespace,
            tag,
            attributes: vec![],
            classes: vec![],
            text: None,
            children: vec![],
        }
    }

    pub fn with_id(self, value: &str) -> Self { self.with_attribute("id", value) }

    pub fn with_title(self, title_text: &str) -> Self { self.with_attribute("title", title_text) }

    // Replaces the previous value, if any.
    pub fn with_attribute(mut self, name: &'static str, value: impl fmt::Display) -> Self {
        let value = value.to_string();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    pub fn with_point(self, x_name: &'static str, y_name: &'static str, point: FCoord) -> Self {
        self.with_attribute(x_name, svg_number(point.x))
            .with_attribute(y_name, svg_number(point.y))
    }

    pub fn with_classes(mut self, classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.classes.extend(classes.into_iter().map(|class| class.into()));
        self
    }

    pub fn with_text_content(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: VElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = VElement>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool { self.classes.iter().any(|c| c == class) }

    pub fn class_attribute(&self) -> String { self.classes.join(" ") }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.write_html(&mut html);
        html
    }

    fn write_html(&self, out: &mut String) {
        let mut attributes = self
            .attributes
            .iter()
            .map(|(name, value)| {
                format!("{}=\"{}\"", name, html_escape::encode_double_quoted_attribute(value))
            })
            .collect_vec();
        if !self.classes.is_empty() {
            attributes.push(format!(
                "class=\"{}\"",
                html_escape::encode_double_quoted_attribute(&self.class_attribute())
            ));
        }
        if attributes.is_empty() {
            out.push_str(&format!("<{}>", self.tag));
        } else {
            out.push_str(&format!("<{} {}>", self.tag, attributes.join(" ")));
        }
        if let Some(text) = &self.text {
            out.push_str(&html_escape::encode_text(text));
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str(&format!("</{}>", self.tag));
    }
}
