use fx_core::{StyleSink, SurfaceRect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// All elements in the document matching `selector`.
pub fn query_document<T: JsCast>(document: &web::Document, selector: &str) -> Vec<T> {
    collect_nodes(document.query_selector_all(selector), selector)
}

/// All descendants of `root` matching `selector`.
pub fn query_within<T: JsCast>(root: &web::Element, selector: &str) -> Vec<T> {
    collect_nodes(root.query_selector_all(selector), selector)
}

fn collect_nodes<T: JsCast>(
    list: Result<web::NodeList, wasm_bindgen::JsValue>,
    selector: &str,
) -> Vec<T> {
    let Ok(list) = list else {
        log::warn!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Current bounding box, or `None` when the element is not in the document
/// or has no layout yet.
pub fn surface_rect(element: &web::Element) -> Option<SurfaceRect> {
    if !element.is_connected() {
        return None;
    }
    let r = element.get_bounding_client_rect();
    let rect = SurfaceRect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    );
    (rect.width > 0.0 && rect.height > 0.0).then_some(rect)
}

/// Writes custom properties onto an element's inline style.
pub struct ElementStyleSink {
    element: web::HtmlElement,
}

impl ElementStyleSink {
    pub fn new(element: web::HtmlElement) -> Self {
        Self { element }
    }
}

impl StyleSink for ElementStyleSink {
    fn set_property(&mut self, name: &str, value: &str) {
        _ = self.element.style().set_property(name, value);
    }
}

/// An event listener that is removed from its target when dropped.
pub struct Listener<T: ?Sized> {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<T>,
}

impl<T: ?Sized> Listener<T> {
    pub fn attach(
        target: &web::EventTarget,
        event: &'static str,
        closure: Closure<T>,
    ) -> anyhow::Result<Self> {
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl<T: ?Sized> Drop for Listener<T> {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

#[inline]
pub fn set_class(element: &web::Element, class: &str, on: bool) {
    _ = element.class_list().toggle_with_force(class, on);
}
