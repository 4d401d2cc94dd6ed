use crate::constants::{BG_CANVAS_ID, CLASS_VISIBLE, DATA_STARTED};
use crate::dom;
use crate::frame;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::{StreakField, StreakParams, Viewport, BACKGROUND_FILL, FLAG_SET};
use wasm_bindgen::JsCast;
use web_sys as web;

fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(dom::js_err)?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Match the backing store to the viewport and draw in CSS pixels.
fn resize(canvas: &web::HtmlCanvasElement, ctx: &web::CanvasRenderingContext2d) {
    let vp = dom::viewport();
    let (w, h) = vp.backing_size();
    canvas.set_width(w);
    canvas.set_height(h);
    dom::set_style(canvas, "width", "100%");
    dom::set_style(canvas, "height", "100%");
    let dpr = vp.backing_scale();
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
}

fn draw(ctx: &web::CanvasRenderingContext2d, field: &StreakField, vp: Viewport) {
    ctx.set_fill_style_str(BACKGROUND_FILL);
    ctx.fill_rect(0.0, 0.0, vp.width as f64, vp.height as f64);

    for s in field.iter() {
        let tail = s.tail();
        ctx.set_line_width(s.width as f64);
        ctx.set_stroke_style_str(&s.stroke_style());
        ctx.begin_path();
        ctx.move_to(s.pos.x as f64, s.pos.y as f64);
        ctx.line_to(tail.x as f64, tail.y as f64);
        ctx.stroke();
    }
}

/// Start the streak background on `#bg`. Idempotent per canvas.
pub fn start(document: &web::Document) {
    if dom::prefers_reduced_motion() {
        log::debug!("[background] reduced motion; skipped");
        return;
    }
    let Some(canvas) = document
        .get_element_by_id(BG_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        return;
    };

    let dataset = canvas.dataset();
    if dataset.get(DATA_STARTED).as_deref() == Some(FLAG_SET) {
        return;
    }
    _ = dataset.set(DATA_STARTED, FLAG_SET);
    dom::add_class(&canvas, CLASS_VISIBLE);

    let ctx = match context_2d(&canvas) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("[background] {:?}", e);
            return;
        }
    };

    resize(&canvas, &ctx);
    {
        let canvas = canvas.clone();
        let ctx = ctx.clone();
        dom::add_window_listener("resize", move |_| resize(&canvas, &ctx));
    }

    let mut field = StreakField::with_rng(StreakParams::default(), StdRng::from_entropy());
    let mut last_instant = Instant::now();
    log::info!("[background] started");

    frame::start_loop(move || {
        let now = Instant::now();
        let dt = now - last_instant;
        last_instant = now;

        let vp = dom::viewport();
        draw(&ctx, &field, vp);
        field.frame(dt, vp);
    });
}
