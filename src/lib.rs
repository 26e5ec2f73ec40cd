#![cfg(target_arch = "wasm32")]
use folio_core::MountPoints;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;

mod dom;
mod events;
mod frame;
mod mount;
mod subscription;

type Slot = Rc<RefCell<Option<mount::Mounted>>>;

thread_local! {
    // The page's current mount; a new mount tears it down before wiring
    static ACTIVE: RefCell<Weak<RefCell<Option<mount::Mounted>>>> = RefCell::new(Weak::new());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");
    Ok(())
}

/// Interaction layer handle for the page. Create it when the page is attached
/// and call `unmount` when it is detached.
#[wasm_bindgen]
pub struct PageMotion {
    slot: Slot,
}

#[wasm_bindgen]
impl PageMotion {
    pub fn mount() -> Result<PageMotion, JsValue> {
        let previous = ACTIVE.with(|a| a.borrow().upgrade());
        if let Some(prev) = previous {
            if let Some(mut mounted) = prev.borrow_mut().take() {
                log::warn!("[mount] previous mount still active; detaching it first");
                mounted.detach();
            }
        }

        let mounted = mount::Mounted::attach(&MountPoints::portfolio())
            .map_err(|e| JsValue::from_str(&format!("{e:#}")))?;
        let slot: Slot = Rc::new(RefCell::new(Some(mounted)));
        ACTIVE.with(|a| *a.borrow_mut() = Rc::downgrade(&slot));
        Ok(PageMotion { slot })
    }

    pub fn unmount(&mut self) {
        let taken = self.slot.borrow_mut().take();
        if let Some(mut mounted) = taken {
            mounted.detach();
        }
    }

    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.slot
            .borrow()
            .as_ref()
            .is_some_and(|m| m.is_mounted())
    }
}
