use super::{listen, Listeners, Wiring};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer for the cursor follower and show/hide the indicator as
/// the pointer enters or leaves the page.
pub fn wire_pointer(w: &Wiring, listeners: &mut Listeners) {
    if let Some(window) = web::window() {
        let controller = w.controller.clone();
        listen(listeners, "pointer", &window, "pointermove", move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                controller
                    .borrow_mut()
                    .pointer_move(ev.client_x() as f32, ev.client_y() as f32);
            }
        });
    }

    // mouseenter/mouseleave do not fire on the document node itself
    let Some(root) = w.document.document_element() else {
        log::warn!("[pointer] no document element; cursor show/hide disabled");
        return;
    };
    let enter = w.controller.clone();
    listen(listeners, "pointer", &root, "mouseenter", move |_| {
        enter.borrow_mut().pointer_enter_document();
    });
    let leave = w.controller.clone();
    listen(listeners, "pointer", &root, "mouseleave", move |_| {
        leave.borrow_mut().pointer_leave_document();
    });
}

/// Enlarge the cursor over interactive elements.
pub fn wire_hover(w: &Wiring, elements: &[web::HtmlElement], listeners: &mut Listeners) {
    for el in elements {
        let enter = w.controller.clone();
        listen(listeners, "hover", el, "mouseenter", move |_| {
            enter.borrow_mut().hover_enter();
        });
        let leave = w.controller.clone();
        listen(listeners, "hover", el, "mouseleave", move |_| {
            leave.borrow_mut().hover_leave();
        });
    }
}
