use tianji_board::view::VElement;

use crate::web_document::WebDocument;
use crate::web_element_ext::WebElementExt;
use crate::web_error_handling::JsResult;


pub fn build_element(document: &WebDocument, v: &VElement) -> JsResult<web_sys::Element> {
    let node = document
        .create_element_in(v.namespace, v.tag)?
        .with_classes(v.classes.iter().map(String::as_str))?;
    for (name, value) in &v.attributes {
        node.set_attribute(name, value)?;
    }
    if let Some(text) = &v.text {
        node.set_text_content(Some(text));
    }
    for child in &v.children {
        node.append_child(&build_element(document, child)?.into())?;
    }
    Ok(node)
}

pub fn build_elements<'a>(
    document: &WebDocument, elements: impl IntoIterator<Item = &'a VElement>,
) -> JsResult<Vec<web_sys::Element>> {
    elements.into_iter().map(|v| build_element(document, v)).collect()
}

// Replaces all children of `parent` with the given elements.
pub fn replace_children<'a>(
    document: &WebDocument, parent: &web_sys::Element,
    elements: impl IntoIterator<Item = &'a VElement>,
) -> JsResult<()> {
    parent.set_children(build_elements(document, elements)?)
}
