use crate::constants::HERO_CANVAS_ID;
use crate::context::AppContext;
use crate::dom;
use glam::Vec3;
use instant::Instant;
use site_core::constants::{PARTICLE_COLOR, PARTICLE_SIZE};
use site_core::scene::{pixel_size, pointer_ndc, project, rgba, Camera, SceneModel};
use site_core::{Recolor, Theme};
use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Particle/sphere background painted on the hero canvas every frame.
pub struct HeroScene {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    model: RefCell<SceneModel>,
    camera: RefCell<Camera>,
    css_size: Cell<(f64, f64)>,
    started: Instant,
}

impl Recolor for HeroScene {
    fn recolor(&self, theme: Theme) {
        self.model.borrow_mut().recolor(theme);
        log::debug!("[scene] recolored for {}", theme);
    }
}

impl HeroScene {
    pub fn new(canvas: web::HtmlCanvasElement, theme: Theme) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let scene = Self {
            canvas,
            ctx,
            model: RefCell::new(SceneModel::new(seed, theme)),
            camera: RefCell::new(Camera::hero(1.0)),
            css_size: Cell::new((0.0, 0.0)),
            started: Instant::now(),
        };
        scene.resize();
        Ok(scene)
    }

    pub fn resize(&self) {
        let (w, h) = dom::sync_canvas_to_window(&self.canvas);
        self.css_size.set((w, h));
        if w > 0.0 && h > 0.0 {
            self.camera.borrow_mut().aspect = (w / h) as f32;
        }
    }

    pub fn pointer_moved(&self, client_x: f64, client_y: f64) {
        let (w, h) = self.css_size.get();
        self.model
            .borrow_mut()
            .set_pointer(pointer_ndc(client_x, client_y, w, h));
    }

    pub fn frame(&self) {
        let elapsed = self.started.elapsed().as_secs_f32();
        let width = self.canvas.width() as f32;
        let height = self.canvas.height() as f32;
        let ctx = &self.ctx;
        ctx.set_global_composite_operation("source-over").ok();
        ctx.clear_rect(0.0, 0.0, width as f64, height as f64);

        let camera = self.camera.borrow();
        let view_proj = camera.view_proj();
        let fovy = camera.fovy_radians;
        let model = self.model.borrow();

        // additive blending so overlapping particles glow
        ctx.set_global_composite_operation("lighter").ok();
        ctx.set_fill_style_str(&rgba(PARTICLE_COLOR, model.particle_opacity()));
        let spin = model.particle_transform(elapsed);
        for p in &model.particles {
            let world = spin.transform_point3(*p);
            if let Some(pt) = project(view_proj, world, width, height) {
                let size = pixel_size(PARTICLE_SIZE, pt.depth, height, fovy).max(0.5) as f64;
                ctx.fill_rect(
                    pt.screen.x as f64 - size * 0.5,
                    pt.screen.y as f64 - size * 0.5,
                    size,
                    size,
                );
            }
        }

        ctx.set_global_composite_operation("source-over").ok();
        let shape_alpha = model.shape_opacity();
        for shape in &model.shapes {
            let centre: Vec3 = shape.position_at(elapsed);
            let Some(pt) = project(view_proj, centre, width, height) else {
                continue;
            };
            let r = pixel_size(shape.radius, pt.depth, height, fovy) as f64;
            ctx.begin_path();
            if ctx
                .arc(pt.screen.x as f64, pt.screen.y as f64, r, 0.0, TAU)
                .is_ok()
            {
                ctx.set_fill_style_str(&rgba(shape.color, shape_alpha));
                ctx.fill();
            }
        }
    }
}

pub fn start_loop(scene: Rc<HeroScene>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        scene.frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Mount the background on `#heroCanvas` and register it for theme changes.
pub fn init_hero_scene(ctx: &Rc<AppContext>) -> anyhow::Result<()> {
    let Some(canvas) = dom::by_id::<web::HtmlCanvasElement>(&ctx.document, HERO_CANVAS_ID) else {
        log::info!("[scene] #{} not found; background disabled", HERO_CANVAS_ID);
        return Ok(());
    };
    let scene = Rc::new(HeroScene::new(canvas, ctx.current_theme())?);
    ctx.attach_scene(scene.clone());

    let on_move = scene.clone();
    dom::add_listener(&ctx.document, "mousemove", move |ev: web::MouseEvent| {
        on_move.pointer_moved(ev.client_x() as f64, ev.client_y() as f64);
    });
    let on_resize = scene.clone();
    dom::add_window_listener("resize", move |_: web::Event| on_resize.resize());

    log::info!(
        "[scene] {} particles, {} shapes",
        scene.model.borrow().particles.len(),
        scene.model.borrow().shapes.len()
    );
    start_loop(scene);
    Ok(())
}
