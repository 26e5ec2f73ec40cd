use super::{listen, Listeners, Wiring};
use crate::dom;
use folio_core::Section;
use std::rc::Rc;
use web_sys as web;

/// Feed scroll offsets to the triggers and re-measure on resize and once the
/// page has finished loading.
pub fn wire_scroll(
    w: &Wiring,
    sections: Rc<Vec<(Section, web::HtmlElement)>>,
    listeners: &mut Listeners,
) {
    let Some(window) = web::window() else {
        return;
    };

    let controller = w.controller.clone();
    listen(listeners, "scroll", &window, "scroll", move |_| {
        controller.borrow_mut().scroll(dom::scroll_y());
    });

    // Fonts and images settle section heights after mount
    for event in ["resize", "load"] {
        let controller = w.controller.clone();
        let document = w.document.clone();
        let sections = sections.clone();
        listen(listeners, "refresh", &window, event, move |_| {
            let geometry = dom::measure(&document, &sections);
            log::info!("[mount] {} re-measured {} sections", event, geometry.sections.len());
            controller.borrow_mut().refresh(geometry);
        });
    }
}
