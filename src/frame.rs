use crate::dom::{self, Targets};
use folio_core::InteractionController;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Frames longer than this are treated as a stall (tab in background)
const MAX_FRAME_DT_SEC: f32 = 0.1;

pub struct FrameContext {
    pub controller: Rc<RefCell<InteractionController>>,
    pub targets: Rc<Targets>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;
        // Release the controller before touching the DOM
        let writes = self.controller.borrow_mut().frame(dt_sec);
        dom::apply_writes(&self.targets, &writes);
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame loop that can be stopped.
pub struct FrameLoop {
    tick: Tick,
    handle: Rc<Cell<Option<i32>>>,
    alive: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start(mut ctx: FrameContext) -> FrameLoop {
        let tick: Tick = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));
        let alive = Rc::new(Cell::new(true));

        let tick_clone = tick.clone();
        let handle_tick = handle.clone();
        let alive_tick = alive.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !alive_tick.get() {
                return;
            }
            ctx.frame();
            handle_tick.set(request_frame(&tick_clone));
        }) as Box<dyn FnMut()>));
        handle.set(request_frame(&tick));

        FrameLoop {
            tick,
            handle,
            alive,
        }
    }

    pub fn stop(&self) {
        self.alive.set(false);
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Break the closure's reference cycle through `tick`
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &Tick) -> Option<i32> {
    let w = web::window()?;
    let guard = tick.borrow();
    let closure = guard.as_ref()?;
    w.request_animation_frame(closure.as_ref().unchecked_ref()).ok()
}
