use tianji_board::view::Namespace;

use crate::rust_error;
use crate::web_error_handling::JsResult;
use crate::web_iterators::NodeListIterator;


pub struct WebDocument(web_sys::Document);

impl WebDocument {
    pub fn body(&self) -> JsResult<web_sys::HtmlElement> {
        self.0.body().ok_or_else(|| rust_error!("Cannot find document body"))
    }

    pub fn get_element_by_id(&self, element_id: &str) -> Option<web_sys::Element> {
        self.0.get_element_by_id(element_id)
    }
    pub fn get_existing_element_by_id(&self, element_id: &str) -> JsResult<web_sys::Element> {
        let element = self
            .0
            .get_element_by_id(element_id)
            .ok_or_else(|| rust_error!("Cannot find element \"{}\"", element_id))?;
        if !element.is_object() {
            return Err(rust_error!("Element \"{}\" is not an object", element_id));
        }
        Ok(element)
    }

    pub fn query_selector_all(&self, selectors: &str) -> JsResult<NodeListIterator> {
        self.0.query_selector_all(selectors).map(|iter| iter.into())
    }

    pub fn create_element_in(
        &self, namespace: Namespace, local_name: &str,
    ) -> JsResult<web_sys::Element> {
        match namespace.uri() {
            Some(uri) => self.0.create_element_ns(Some(uri), local_name),
            None => self.0.create_element(local_name),
        }
    }
    pub fn create_element(&self, local_name: &str) -> JsResult<web_sys::Element> {
        self.create_element_in(Namespace::Html, local_name)
    }
    pub fn create_svg_element(&self, local_name: &str) -> JsResult<web_sys::Element> {
        self.create_element_in(Namespace::Svg, local_name)
    }

    pub fn ensure_svg_node(
        &self, local_name: &str, id: &str, parent: &web_sys::Element,
    ) -> JsResult<web_sys::Element> {
        Ok(match self.get_element_by_id(id) {
            Some(v) => v,
            None => {
                let v = self.create_svg_element(local_name)?;
                v.set_attribute("id", id)?;
                parent.append_child(&v)?;
                v
            }
        })
    }
}

pub fn web_document() -> JsResult<WebDocument> {
    let window = web_sys::window().ok_or_else(|| rust_error!("Cannot find window"))?;
    let document = window.document().ok_or_else(|| rust_error!("Cannot find document"))?;
    Ok(WebDocument(document))
}
