// Copyright 2026 the Animax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: a column of cards that animate as they scroll into view.
//!
//! Every third card toggles continuously (`once = false`), the rest animate
//! once. A badge at the top pulses forever. The "Tear down" button disposes
//! every session.
//!
//! Build with: `wasm-pack build --target web demos/scroll_reveal`
//! Then serve `demos/scroll_reveal/` and open `index.html`.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use animax_backend_web::{AnimateOptions, Cleanup, ConsoleSink, animate_with_tracer};
use animax_core::backend::ObserverOptions;
use animax_core::motion::Motion;
use animax_core::trace::Tracer;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlButtonElement};

const CARD_COUNT: usize = 12;

const CARD_MOTIONS: [Motion; 6] = [
    Motion::FadeInUp,
    Motion::ZoomIn,
    Motion::LightSpeedIn,
    Motion::SlideInLeft,
    Motion::BounceIn,
    Motion::FlipInX,
];

/// Keyframes for the motions used on this page. The library only names
/// them; the page has to define them.
const KEYFRAMES: &str = "
@keyframes fadeInUp { from { opacity: 0; transform: translate3d(0, 40px, 0); } to { opacity: 1; transform: none; } }
@keyframes zoomIn { from { opacity: 0; transform: scale3d(0.3, 0.3, 0.3); } 50% { opacity: 1; } }
@keyframes lightSpeedIn { from { transform: translate3d(100%, 0, 0) skewX(-30deg); opacity: 0; } 60% { transform: skewX(20deg); opacity: 1; } 80% { transform: skewX(-5deg); } to { transform: none; } }
@keyframes slideInLeft { from { transform: translate3d(-100%, 0, 0); visibility: visible; } to { transform: none; } }
@keyframes bounceIn { from, 20%, 40%, 60%, 80%, to { animation-timing-function: cubic-bezier(0.215, 0.61, 0.355, 1); } 0% { opacity: 0; transform: scale3d(0.3, 0.3, 0.3); } 20% { transform: scale3d(1.1, 1.1, 1.1); } 40% { transform: scale3d(0.9, 0.9, 0.9); } 60% { opacity: 1; transform: scale3d(1.03, 1.03, 1.03); } 80% { transform: scale3d(0.97, 0.97, 0.97); } to { opacity: 1; transform: none; } }
@keyframes flipInX { from { transform: perspective(400px) rotate3d(1, 0, 0, 90deg); opacity: 0; } 40% { transform: perspective(400px) rotate3d(1, 0, 0, -20deg); } 60% { transform: perspective(400px) rotate3d(1, 0, 0, 10deg); opacity: 1; } to { transform: perspective(400px); } }
@keyframes pulse { from, to { transform: none; } 50% { transform: scale3d(1.05, 1.05, 1.05); } }
";

/// Entry point for the scroll-reveal demo.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let sheet = document.create_element("style")?;
    sheet.set_text_content(Some(KEYFRAMES));
    body.append_child(&sheet)?;

    let cleanups: Rc<RefCell<Vec<Cleanup>>> = Rc::new(RefCell::new(Vec::new()));

    let header = element(
        &document,
        "header",
        "position: sticky; top: 0; display: flex; gap: 16px; align-items: center; padding: 16px 24px; background: #1d2b3a; color: #f4f1ea; z-index: 1;",
    )?;
    let badge = element(
        &document,
        "span",
        "display: inline-block; padding: 4px 12px; border-radius: 999px; background: #e0703a;",
    )?;
    badge.set_text_content(Some("scroll down"));
    header.append_child(&badge)?;

    let button: HtmlButtonElement = document.create_element("button")?.unchecked_into();
    button.set_text_content(Some("Tear down"));
    header.append_child(&button)?;
    body.append_child(&header)?;

    let pulse = AnimateOptions::default()
        .with_motion(Motion::Pulse)
        .with_duration("1.2s")
        .with_infinite(true);
    cleanups
        .borrow_mut()
        .push(animate_with_tracer(Some(badge), &pulse, tracer("badge")));

    let column = element(
        &document,
        "main",
        "display: flex; flex-direction: column; gap: 48px; padding: 80vh 24px 40vh; max-width: 560px; margin: 0 auto;",
    )?;
    body.append_child(&column)?;

    let observer = ObserverOptions::default()
        .with_threshold([0.25])
        .with_root_margin("0px 0px -10% 0px");

    for index in 0..CARD_COUNT {
        let motion = CARD_MOTIONS[index % CARD_MOTIONS.len()].clone();
        let continuous = index % 3 == 2;

        let card = element(
            &document,
            "section",
            "padding: 32px; border-radius: 14px; background: #ffffff; box-shadow: 0 12px 30px rgba(29,43,58,0.15);",
        )?;
        card.set_text_content(Some(&format!(
            "#{index} {motion}{}",
            if continuous { " (continuous)" } else { "" }
        )));
        column.append_child(&card)?;

        let options = AnimateOptions::default()
            .with_motion(motion)
            .with_duration("800ms")
            .with_once(!continuous)
            .with_observer(observer.clone());
        let label = format!("card {index}");
        cleanups
            .borrow_mut()
            .push(animate_with_tracer(Some(card), &options, tracer(&label)));
    }

    let on_click = Closure::wrap(Box::new(move || {
        for cleanup in cleanups.borrow().iter() {
            cleanup.cleanup();
        }
    }) as Box<dyn FnMut()>);
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    // The button lives as long as the page.
    on_click.forget();

    Ok(())
}

fn tracer(label: &str) -> Tracer {
    Tracer::new(Box::new(ConsoleSink::new(label)))
}

fn element(doc: &Document, tag: &str, css: &str) -> Result<Element, JsValue> {
    let el = doc.create_element(tag)?;
    el.set_attribute("style", css)?;
    Ok(el)
}
