use folio_core::{DomWrite, Geometry, Section, Selector, Span, TargetId};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Element table indexed by [`TargetId`].
#[derive(Default)]
pub struct Targets {
    elements: Vec<web::HtmlElement>,
}

impl Targets {
    pub fn add(&mut self, el: web::HtmlElement) -> TargetId {
        let id = TargetId(self.elements.len() as u32);
        self.elements.push(el);
        id
    }

    pub fn get(&self, id: TargetId) -> Option<&web::HtmlElement> {
        self.elements.get(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

pub fn first(scope: &web::Document, selector: &Selector) -> Option<web::HtmlElement> {
    let el = match selector {
        Selector::Id(id) => scope.get_element_by_id(id),
        other => scope.query_selector(&other.css()).ok().flatten(),
    };
    el.and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
}

/// All matching HTML elements under `scope`, in document order.
pub fn all_in(scope: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    scope
        .query_selector_all(selector)
        .map(node_list_elements)
        .unwrap_or_default()
}

pub fn all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    document
        .query_selector_all(selector)
        .map(node_list_elements)
        .unwrap_or_default()
}

fn node_list_elements(list: web::NodeList) -> Vec<web::HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

/// Document-space top of an element.
pub fn document_top(el: &web::Element) -> f32 {
    el.get_bounding_client_rect().top() as f32 + scroll_y()
}

pub fn measure(document: &web::Document, sections: &[(Section, web::HtmlElement)]) -> Geometry {
    let viewport_height = web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let scroll_height = document
        .document_element()
        .map(|root| root.scroll_height())
        .unwrap_or(0) as f32;
    let scroll_y = scroll_y();
    let spans = sections
        .iter()
        .map(|(section, el)| {
            let rect = el.get_bounding_client_rect();
            let span = Span {
                top: rect.top() as f32 + scroll_y,
                height: rect.height() as f32,
            };
            (*section, span)
        })
        .collect();
    Geometry {
        viewport_height,
        max_scroll: (scroll_height - viewport_height).max(0.0),
        scroll_y,
        sections: spans,
    }
}

/// Apply controller output to the page. Writes to unknown targets are
/// dropped.
pub fn apply_writes(targets: &Targets, writes: &[DomWrite]) {
    for write in writes {
        match write {
            DomWrite::Style { target, css } => {
                if let Some(el) = targets.get(*target) {
                    let style = el.style();
                    for (name, value) in css {
                        _ = style.set_property(name, value);
                    }
                }
            }
            DomWrite::Class { target, class, on } => {
                if let Some(el) = targets.get(*target) {
                    let cl = el.class_list();
                    _ = if *on { cl.add_1(class) } else { cl.remove_1(class) };
                }
            }
            DomWrite::Attr { target, name, value } => {
                if let Some(el) = targets.get(*target) {
                    _ = match value {
                        Some(v) => el.set_attribute(name, v),
                        None => el.remove_attribute(name),
                    };
                }
            }
            DomWrite::Text { target, text } => {
                if let Some(el) = targets.get(*target) {
                    el.set_text_content(Some(text));
                }
            }
            DomWrite::ScrollWindow { y } => {
                if let Some(w) = web::window() {
                    w.scroll_to_with_x_and_y(0.0, *y as f64);
                }
            }
        }
    }
}
