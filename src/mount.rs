//! Resolves the attachment points of the page and owns everything one mount
//! creates: the controller, its listeners and the frame loop.

use crate::dom::{self, Targets};
use crate::events::{self, Listeners, Wiring};
use crate::frame::{FrameContext, FrameLoop};
use folio_core::{
    CursorTargets, HeaderTargets, HeroTarget, InteractionController, MotionConfig, MotionError,
    MountPoints, PageLayout, Section, SectionTargets,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Resolved {
    layout: PageLayout,
    targets: Targets,
    sections: Vec<(Section, web::HtmlElement)>,
}

fn resolve(document: &web::Document, points: &MountPoints) -> Resolved {
    let mut targets = Targets::default();
    let mut layout = PageLayout::default();

    if let (Some(dot), Some(label)) = (
        dom::first(document, &points.cursor),
        dom::first(document, &points.cursor_label),
    ) {
        layout.cursor = Some(CursorTargets {
            dot: targets.add(dot),
            label: targets.add(label),
        });
    }

    let header_parts = [
        &points.header,
        &points.header_initial[0],
        &points.header_initial[1],
        &points.header_scrolled[0],
        &points.header_scrolled[1],
    ]
    .map(|sel| dom::first(document, sel));
    if let [Some(header), Some(il), Some(ir), Some(sl), Some(sr)] = header_parts {
        layout.header = Some(HeaderTargets {
            header: targets.add(header),
            initial: [targets.add(il), targets.add(ir)],
            scrolled: [targets.add(sl), targets.add(sr)],
        });
    }

    let fade_up = points.fade_up.css();
    let title = points.section_title.css();
    let mut sections = Vec::new();
    for &section in &points.sections {
        let Some(el) = document
            .get_element_by_id(section.id())
            .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        layout.sections.push(SectionTargets {
            section,
            fade_up: dom::all_in(&el, &fade_up)
                .into_iter()
                .map(|e| targets.add(e))
                .collect(),
            titles: dom::all_in(&el, &title)
                .into_iter()
                .map(|e| targets.add(e))
                .collect(),
        });
        sections.push((section, el));
    }

    if let Some(hero) = dom::first(document, &points.hero) {
        let text = hero.text_content().unwrap_or_default();
        layout.hero = Some(HeroTarget {
            target: targets.add(hero),
            text,
            glitch_class: points.glitch_class,
        });
    }

    layout.footer_chars = dom::all(document, &points.footer_chars.css())
        .into_iter()
        .map(|e| targets.add(e))
        .collect();

    Resolved {
        layout,
        targets,
        sections,
    }
}

pub struct Mounted {
    controller: Rc<RefCell<InteractionController>>,
    listeners: Listeners,
    frame: Option<FrameLoop>,
}

impl Mounted {
    pub fn attach(points: &MountPoints) -> anyhow::Result<Mounted> {
        let document =
            dom::window_document().ok_or(MotionError::MissingAttachment("document"))?;
        let config = MotionConfig::from_constants()?;

        let Resolved {
            layout,
            targets,
            sections,
        } = resolve(&document, points);
        let geometry = dom::measure(&document, &sections);

        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let mut controller = InteractionController::new(config, seed);
        let report = controller.mount(&layout, geometry);
        log::info!(
            "[mount] targets={} sections={} report={:?}",
            targets.len(),
            sections.len(),
            report
        );

        let controller = Rc::new(RefCell::new(controller));
        let wiring = Wiring {
            controller: controller.clone(),
            document: document.clone(),
        };
        let mut listeners = Listeners::new();
        if report.cursor {
            events::wire_pointer(&wiring, &mut listeners);
            let interactive = dom::all(&document, &points.interactive.css());
            events::wire_hover(&wiring, &interactive, &mut listeners);
        }
        let anchors = dom::all(&document, points.anchors);
        events::wire_anchor_nav(&wiring, &anchors, &mut listeners);
        events::wire_scroll(&wiring, Rc::new(sections), &mut listeners);

        let frame = FrameLoop::start(FrameContext {
            controller: controller.clone(),
            targets: Rc::new(targets),
            last_instant: Instant::now(),
        });

        Ok(Mounted {
            controller,
            listeners,
            frame: Some(frame),
        })
    }

    pub fn is_mounted(&self) -> bool {
        self.controller.borrow().is_mounted()
    }

    /// Stop the frame loop, remove every listener and dispose the scroll
    /// observers. Safe to call more than once.
    pub fn detach(&mut self) {
        if let Some(frame) = self.frame.take() {
            frame.stop();
        }
        let listeners = self.listeners.dispose_all();
        if self.controller.borrow().is_mounted() {
            let observers = self.controller.borrow_mut().unmount();
            log::info!(
                "[mount] detached: {} listeners, {} observers",
                listeners,
                observers
            );
        }
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.detach();
    }
}
