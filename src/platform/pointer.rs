//! Navbar, parallax, cursor, magnetic buttons and image tilt

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use super::dom;
use super::schedule::FrameTask;
use crate::config::FxConfig;
use crate::error::Result;
use crate::fx::CursorFollower;
use crate::fx::pointer::*;

/// Elements that grow the cursor and attract magnetically
const INTERACTIVE_SELECTOR: &str = "a, button, .magnetic-btn, [data-magnetic]";
const MAGNETIC_SELECTOR: &str = ".magnetic-btn, [data-magnetic]";

fn mouse(event: &web_sys::Event) -> Option<&MouseEvent> {
    event.dyn_ref::<MouseEvent>()
}

fn apply_navbar(navbar: &HtmlElement, state: NavbarState) {
    let classes = navbar.class_list();
    let _ = match state {
        NavbarState::Blurred => classes.add_1(NavbarState::BLUR_CLASS),
        NavbarState::Resting => classes.remove_1(NavbarState::BLUR_CLASS),
    };
    dom::set_style(navbar, "padding", state.padding());
    dom::set_style(navbar, "background", state.background());
}

/// Navbar compacts once the page scrolls past the threshold. Always active.
pub fn init_navbar(config: &FxConfig) -> Result<()> {
    let navbar = dom::require_id("navbar")?;
    let threshold = config.navbar_blur_threshold;

    dom::listen_passive(&dom::window()?, "scroll", move |_| {
        apply_navbar(&navbar, NavbarState::from_scroll(dom::scroll_y(), threshold));
    })
}

/// Hero image drifts with the scroll position (desktop only)
pub fn init_hero_parallax(config: &FxConfig) -> Result<()> {
    if !config.is_desktop(dom::viewport_width()) {
        return Ok(());
    }
    let Some(img) = dom::document()?
        .query_selector(".parallax-img")?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::debug!("No parallax image");
        return Ok(());
    };

    let rate = config.hero_parallax_rate;
    dom::listen_passive(&dom::window()?, "scroll", move |_| {
        let offset = hero_parallax(dom::scroll_y(), rate);
        dom::set_style(&img, "transform", &hero_parallax_transform(offset));
    })
}

/// Trailing cursor dot (desktop only)
pub fn init_cursor(config: &FxConfig) -> Result<()> {
    if !config.is_desktop(dom::viewport_width()) {
        return Ok(());
    }
    let Some(dot) = dom::by_id("cursor-dot") else {
        log::debug!("No cursor dot");
        return Ok(());
    };

    let cursor = Rc::new(RefCell::new(CursorFollower::new(config.cursor_smoothing)));

    {
        let cursor = cursor.clone();
        dom::listen(&dom::document()?, "mousemove", move |event| {
            if let Some(e) = mouse(&event) {
                cursor.borrow_mut().set_target(dom::client_point(e));
            }
        })?;
    }

    let frame_dot = dot.clone();
    let task = FrameTask::start(move |_| {
        let mut c = cursor.borrow_mut();
        c.step();
        let origin = c.dot_origin();
        dom::set_style(&frame_dot, "left", &format!("{}px", origin.x));
        dom::set_style(&frame_dot, "top", &format!("{}px", origin.y));
        true
    })?;
    super::track_frame_task(task);

    for el in dom::query_all(INTERACTIVE_SELECTOR)? {
        let grow = dot.clone();
        dom::listen(&el, "mouseenter", move |_| {
            let (transform, opacity) = CURSOR_HOVER_STYLE;
            dom::set_style(&grow, "transform", transform);
            dom::set_style(&grow, "opacity", opacity);
        })?;
        let shrink = dot.clone();
        dom::listen(&el, "mouseleave", move |_| {
            let (transform, opacity) = CURSOR_REST_STYLE;
            dom::set_style(&shrink, "transform", transform);
            dom::set_style(&shrink, "opacity", opacity);
        })?;
    }

    log::info!("Cursor follower running");
    Ok(())
}

/// Buttons lean toward the pointer (desktop only)
pub fn init_magnetic(config: &FxConfig) -> Result<()> {
    if !config.is_desktop(dom::viewport_width()) {
        return Ok(());
    }
    let factor = config.magnetic_factor;

    let buttons = dom::query_all(MAGNETIC_SELECTOR)?;
    for btn in &buttons {
        let target = btn.clone();
        dom::listen(btn, "mousemove", move |event| {
            if let Some(e) = mouse(&event) {
                let offset = magnetic_offset(dom::client_point(e), dom::rect_of(&target), factor);
                dom::set_style(&target, "transform", &magnetic_transform(offset));
            }
        })?;

        let target = btn.clone();
        dom::listen(btn, "mouseleave", move |_| {
            dom::set_style(&target, "transform", MAGNETIC_REST_TRANSFORM);
        })?;
    }

    log::debug!("{} magnetic buttons", buttons.len());
    Ok(())
}

/// Images inside `.img-reveal` zoom and shift against the pointer (desktop only)
pub fn init_tilt(config: &FxConfig) -> Result<()> {
    if !config.is_desktop(dom::viewport_width()) {
        return Ok(());
    }

    for container in dom::query_all(".img-reveal")? {
        let Some(img) = container
            .query_selector("img")?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };

        let (bounds, target) = (container.clone(), img.clone());
        dom::listen(&container, "mousemove", move |event| {
            if let Some(e) = mouse(&event) {
                let offset = tilt_offset(dom::client_point(e), dom::rect_of(&bounds));
                dom::set_style(&target, "transform", &tilt_transform(offset));
            }
        })?;

        dom::listen(&container, "mouseleave", move |_| {
            dom::set_style(&img, "transform", TILT_REST_TRANSFORM);
        })?;
    }
    Ok(())
}
