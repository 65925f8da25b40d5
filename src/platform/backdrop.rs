//! Hero backdrop: a wgpu (WebGL) shader plane under `#hero-webgl`

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlElement, MouseEvent};

use super::dom;
use super::schedule::FrameTask;
use crate::config::FxConfig;
use crate::error::{FxError, Result};
use crate::renderer::BackdropRenderState;

fn mount_size(mount: &HtmlElement) -> (u32, u32) {
    (
        mount.client_width().max(1) as u32,
        mount.client_height().max(1) as u32,
    )
}

fn size_canvas(canvas: &HtmlCanvasElement, (width, height): (u32, u32)) {
    canvas.set_width(width);
    canvas.set_height(height);
    let _ = canvas.style().set_property("width", &format!("{}px", width));
    let _ = canvas.style().set_property("height", &format!("{}px", height));
}

pub async fn init(config: Rc<FxConfig>) -> Result<()> {
    let Some(mount) = dom::by_id("hero-webgl") else {
        log::debug!("No backdrop mount");
        return Ok(());
    };
    if !config.is_desktop(dom::viewport_width()) {
        log::info!("Backdrop skipped on mobile viewport");
        return Ok(());
    }

    let canvas: HtmlCanvasElement = dom::document()?
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| FxError::Js("created element is not a canvas".into()))?;
    let size = mount_size(&mount);
    size_canvas(&canvas, size);
    mount.append_child(&canvas)?;

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::GL,
        ..Default::default()
    });

    let surface = instance
        .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
        .map_err(|e| FxError::Renderer(e.to_string()))?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .map_err(|e| FxError::Renderer(e.to_string()))?;

    log::info!("Backdrop adapter: {:?}", adapter.get_info().name);

    let state = Rc::new(RefCell::new(
        BackdropRenderState::new(surface, &adapter, size.0, size.1).await?,
    ));

    let window = dom::window()?;

    {
        let state = state.clone();
        let mount = mount.clone();
        dom::listen(&window, "mousemove", move |event| {
            if let Some(e) = event.dyn_ref::<MouseEvent>() {
                state
                    .borrow_mut()
                    .uniforms
                    .set_pointer(dom::client_point(e), dom::rect_of(&mount));
            }
        })?;
    }

    {
        let state = state.clone();
        dom::listen(&window, "resize", move |_| {
            let size = mount_size(&mount);
            size_canvas(&canvas, size);
            state.borrow_mut().resize(size.0, size.1);
        })?;
    }

    let mut start: Option<f64> = None;
    let task = FrameTask::start(move |time| {
        let t0 = *start.get_or_insert(time);
        let elapsed = ((time - t0) / 1000.0) as f32;

        let mut s = state.borrow_mut();
        match s.render(elapsed) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = s.size;
                s.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Backdrop out of memory, stopping");
                return false;
            }
            Err(e) => log::warn!("Backdrop render error: {:?}", e),
        }
        true
    })?;
    super::track_frame_task(task);

    log::info!("Backdrop running at {}x{}", size.0, size.1);
    Ok(())
}
