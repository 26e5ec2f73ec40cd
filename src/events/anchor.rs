use super::{listen, Listeners, Wiring};
use crate::dom;
use folio_core::navigation::anchor_id;
use web_sys as web;

/// Replace the jump of same-page anchor links with a smooth scroll.
pub fn wire_anchor_nav(w: &Wiring, anchors: &[web::HtmlElement], listeners: &mut Listeners) {
    for link in anchors {
        let controller = w.controller.clone();
        let document = w.document.clone();
        let href_source = link.clone();
        listen(listeners, "anchor", link, "click", move |ev| {
            ev.prevent_default();
            let Some(href) = href_source.get_attribute("href") else {
                return;
            };
            let Some(target) = anchor_id(&href).and_then(|id| document.get_element_by_id(id)) else {
                log::warn!("[nav] no element for {}", href);
                return;
            };
            let top = dom::document_top(&target);
            controller.borrow_mut().navigate(top, dom::scroll_y());
        });
    }
}
