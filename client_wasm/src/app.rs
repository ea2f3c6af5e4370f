//! Browser driver: DOM listeners, canvas sizing and the animation loop.
//!
//! Listeners only write into the shared [`InputState`]; the frame callback
//! takes one snapshot per frame and owns every call into the simulation.

use crate::input::{handle_key_down, handle_key_up, handle_touch, TouchControl};
use crate::layout::fit_canvas;
use crate::renderer::Renderer;
use game_core::{InputState, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlCanvasElement, KeyboardEvent, TouchEvent};

pub struct App {
    pub sim: Simulation,
    pub renderer: Renderer,
    pub canvas: HtmlCanvasElement,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    static INPUT: RefCell<InputState> = RefCell::new(InputState::new());
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub fn is_installed() -> bool {
    APP.with(|cell| cell.borrow().is_some())
}

pub fn with_input<R>(f: impl FnOnce(&mut InputState) -> R) -> R {
    INPUT.with(|cell| f(&mut cell.borrow_mut()))
}

fn document() -> Result<Document, JsValue> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document available"))
}

/// Take ownership of `app`, wire the page up and start the frame loop.
pub fn install(app: App) -> Result<(), JsValue> {
    let doc = document()?;

    sync_status(&doc, &app.sim);
    APP.with(|cell| *cell.borrow_mut() = Some(app));
    resize_canvas();

    add_keyboard_listeners(&doc)?;
    add_window_listeners()?;

    if let Some(button) = doc.get_element_by_id("startButton") {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            with_input(|input| input.press_restart());
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    for (id, control) in [
        ("leftButton", TouchControl::Left),
        ("rightButton", TouchControl::Right),
        ("jumpButton", TouchControl::Jump),
    ] {
        if let Some(button) = doc.get_element_by_id(id) {
            add_touch_listeners(&button, control)?;
        }
    }

    start_loop();
    log::info!("game loop started");
    Ok(())
}

fn add_keyboard_listeners(doc: &Document) -> Result<(), JsValue> {
    {
        let closure = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
            if with_input(|input| handle_key_down(input, &evt.key(), evt.repeat())) {
                evt.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
            with_input(|input| handle_key_up(input, &evt.key()));
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn add_window_listeners() -> Result<(), JsValue> {
    let w = window().ok_or_else(|| JsValue::from_str("No window available"))?;
    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            resize_canvas();
        }) as Box<dyn FnMut(_)>);
        w.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        // Key-up events are lost while the page is unfocused
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            with_input(|input| input.release_all());
        }) as Box<dyn FnMut(_)>);
        w.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn add_touch_listeners(button: &Element, control: TouchControl) -> Result<(), JsValue> {
    {
        let target = button.clone();
        let closure = Closure::wrap(Box::new(move |evt: TouchEvent| {
            evt.prevent_default();
            let _ = target.set_attribute("data-active", "true");
            with_input(|input| handle_touch(input, control, true));
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    for event in ["touchend", "touchcancel"] {
        let target = button.clone();
        let closure = Closure::wrap(Box::new(move |_evt: TouchEvent| {
            let _ = target.set_attribute("data-active", "false");
            with_input(|input| handle_touch(input, control, false));
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

/// Fit the canvas to its container and reconfigure the surface.
fn resize_canvas() {
    let Some(w) = window() else { return };
    let window_height = w
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let doc = w.document();

    APP.with(|cell| {
        if let Some(app) = cell.borrow_mut().as_mut() {
            let container = doc
                .as_ref()
                .and_then(|d| d.query_selector(".game-container").ok().flatten())
                .or_else(|| app.canvas.parent_element());
            let Some(container) = container else { return };

            let (width, height) = fit_canvas(container.client_width() as f64, window_height);
            app.canvas.set_width(width);
            app.canvas.set_height(height);
            app.renderer.resize(width, height);
        }
    });
}

/// Mirror the run state into the status line and the control button.
fn sync_status(doc: &Document, sim: &Simulation) {
    if let Some(message) = doc.get_element_by_id("gameMessage") {
        message.set_text_content(Some(sim.status_message()));
    }
    if let Some(button) = doc.get_element_by_id("startButton") {
        button.set_text_content(Some(sim.button_label()));
        let can_restart = if sim.can_restart() { "true" } else { "false" };
        let _ = button.set_attribute("data-can-restart", can_restart);
    }
}

fn tick(app: &mut App, timestamp: f64) {
    let input = with_input(|input| input.snapshot());
    let report = app.sim.run_frame(timestamp, &input);

    if report.transition.is_some_and(|t| t.success) {
        if let Ok(doc) = document() {
            sync_status(&doc, &app.sim);
        }
    }

    if let Err(e) = app.renderer.draw(&app.sim) {
        log::error!("draw failed: {}", e);
    }
}

fn request_frame(callback: &FrameCallback) {
    if let (Some(w), Some(closure)) = (window(), callback.borrow().as_ref()) {
        if let Err(e) = w.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}

fn start_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        APP.with(|cell| {
            if let Some(app) = cell.borrow_mut().as_mut() {
                tick(app, ts);
            }
        });
        request_frame(&f);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&g);
}
