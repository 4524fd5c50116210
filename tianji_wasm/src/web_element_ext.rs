use std::ops;

use wasm_bindgen::JsCast;

use crate::web_error_handling::JsResult;


pub trait WebElementExt {
    fn with_classes<'a>(self, classes: impl IntoIterator<Item = &'a str>) -> JsResult<web_sys::Element>;

    fn set_enabled(&self, enabled: bool) -> JsResult<()>;
    fn set_style_property(&self, property: &str, value: &str) -> JsResult<()>;

    fn remove_all_children(&self);
    fn set_children(
        &self, children: impl IntoIterator<Item = impl ops::Deref<Target = web_sys::Node>>,
    ) -> JsResult<()>;
    fn append_children(
        &self, children: impl IntoIterator<Item = impl ops::Deref<Target = web_sys::Node>>,
    ) -> JsResult<()>;
}

impl WebElementExt for web_sys::Element {
    fn with_classes<'a>(self, classes: impl IntoIterator<Item = &'a str>) -> JsResult<web_sys::Element> {
        for class in classes {
            self.class_list().add_1(class)?;
        }
        Ok(self)
    }

    fn set_enabled(&self, enabled: bool) -> JsResult<()> {
        self.toggle_attribute_with_force("disabled", !enabled)?;
        Ok(())
    }

    // No-op for elements without inline style (i.e. neither HTML nor SVG).
    fn set_style_property(&self, property: &str, value: &str) -> JsResult<()> {
        if let Some(e) = self.dyn_ref::<web_sys::HtmlElement>() {
            e.style().set_property(property, value)?;
        } else if let Some(e) = self.dyn_ref::<web_sys::SvgElement>() {
            e.style().set_property(property, value)?;
        }
        Ok(())
    }

    fn remove_all_children(&self) { self.replace_children_with_node_0() }

    fn set_children(
        &self, children: impl IntoIterator<Item = impl ops::Deref<Target = web_sys::Node>>,
    ) -> JsResult<()> {
        self.remove_all_children();
        self.append_children(children)
    }

    fn append_children(
        &self, children: impl IntoIterator<Item = impl ops::Deref<Target = web_sys::Node>>,
    ) -> JsResult<()> {
        for child in children {
            self.append_child(&child)?;
        }
        Ok(())
    }
}
