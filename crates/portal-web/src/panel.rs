use portal_core::{Color, ShadingParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire the debug panel inputs to the shared shading parameters.
///
/// Missing elements are skipped with a warning so the renderer still runs on a
/// page without the panel markup.
pub fn bind_panel(document: &web::Document, params: Rc<RefCell<ShadingParams>>) {
    bind_color(document, "clear-color", params.clone(), |p| &mut p.clear_color);
    bind_color(document, "portal-color-start", params.clone(), |p| {
        &mut p.portal_color_start
    });
    bind_color(document, "portal-color-end", params.clone(), |p| {
        &mut p.portal_color_end
    });
    bind_firefly_size(document, "firefly-size", params);
}

fn input_by_id(document: &web::Document, id: &str) -> Option<web::HtmlInputElement> {
    let el = document.get_element_by_id(id)?;
    match el.dyn_into::<web::HtmlInputElement>() {
        Ok(input) => Some(input),
        Err(_) => {
            log::warn!("#{id} exists but is not an <input>");
            None
        }
    }
}

fn bind_color(
    document: &web::Document,
    id: &'static str,
    params: Rc<RefCell<ShadingParams>>,
    field: impl Fn(&mut ShadingParams) -> &mut Color + 'static,
) {
    let Some(input) = input_by_id(document, id) else {
        log::warn!("debug panel: #{id} not found, skipping");
        return;
    };
    input.set_value(&field(&mut params.borrow_mut()).to_hex());

    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let Some(target) = ev.target() else { return };
        let Ok(input) = target.dyn_into::<web::HtmlInputElement>() else {
            return;
        };
        match Color::from_hex(&input.value()) {
            Ok(color) => *field(&mut params.borrow_mut()) = color,
            Err(e) => log::warn!("#{id}: {e}"),
        }
    }) as Box<dyn FnMut(_)>);
    input
        .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())
        .ok();
    closure.forget();
}

fn bind_firefly_size(
    document: &web::Document,
    id: &'static str,
    params: Rc<RefCell<ShadingParams>>,
) {
    let Some(input) = input_by_id(document, id) else {
        log::warn!("debug panel: #{id} not found, skipping");
        return;
    };
    input.set_value(&params.borrow().firefly_size.to_string());

    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let Some(target) = ev.target() else { return };
        let Ok(input) = target.dyn_into::<web::HtmlInputElement>() else {
            return;
        };
        match input.value().parse::<f32>() {
            Ok(size) => params.borrow_mut().set_firefly_size(size),
            Err(e) => log::warn!("#{id}: {e}"),
        }
    }) as Box<dyn FnMut(_)>);
    input
        .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())
        .ok();
    closure.forget();
}
