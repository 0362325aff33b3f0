use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;

use crate::web_document::web_document;
use crate::web_error_handling::{JsResult, describe_js_error};


pub trait WebElementExt {
    fn with_attribute(self, name: &str, value: &str) -> JsResult<web_sys::Element>;
    fn with_classes<'a>(
        self, classes: impl IntoIterator<Item = &'a str>,
    ) -> JsResult<web_sys::Element>;

    fn set_transform(&self, transform: &str) -> JsResult<()>;

    fn remove_all_children(&self);
    fn append_new_element(&self, local_name: &str) -> JsResult<web_sys::Element>;
    fn child_elements(&self) -> impl Iterator<Item = web_sys::Element>;
}

impl WebElementExt for web_sys::Element {
    fn with_attribute(self, name: &str, value: &str) -> JsResult<web_sys::Element> {
        self.set_attribute(name, value)?;
        Ok(self)
    }

    fn with_classes<'a>(
        self, classes: impl IntoIterator<Item = &'a str>,
    ) -> JsResult<web_sys::Element> {
        for class in classes {
            self.class_list().add_1(class)?;
        }
        Ok(self)
    }

    fn set_transform(&self, transform: &str) -> JsResult<()> {
        let element = self.dyn_ref::<web_sys::HtmlElement>().ok_or_else(|| {
            crate::rust_error!("Element \"{}\" is not an HTML element", self.id())
        })?;
        element.style().set_property("transform", transform)
    }

    fn remove_all_children(&self) { self.replace_children_with_node_0() }

    fn append_new_element(&self, local_name: &str) -> JsResult<web_sys::Element> {
        let node = web_document()?.create_element(local_name)?;
        self.append_child(&node)?;
        Ok(node)
    }

    // Children present when the call is made. Appending while iterating is not supported.
    fn child_elements(&self) -> impl Iterator<Item = web_sys::Element> {
        let children = self.children();
        (0..children.length()).filter_map(move |idx| children.item(idx))
    }
}

// Listener errors have nowhere to go once the closure is detached from Rust, so they are
// logged here.
pub fn add_event_listener_and_forget<E: FromWasmAbi + 'static>(
    target: &web_sys::EventTarget, event_type: &str,
    mut listener: impl FnMut(E) -> JsResult<()> + 'static,
) -> JsResult<()> {
    let event_type_owned = event_type.to_owned();
    let closure = Closure::<dyn FnMut(E)>::new(move |event: E| {
        if let Err(err) = listener(event) {
            log::error!("Error in \"{}\" listener: {}", event_type_owned, describe_js_error(&err));
        }
    });
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
