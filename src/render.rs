use crate::frame::Surface;
use crate::params::{Background, LineStyle};
use crate::surface::SurfaceSize;
use glam::Vec2;
use web_sys as web;

/// `Surface` over a canvas 2D context whose transform is already DPR-scaled.
pub struct Canvas2dSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for Canvas2dSurface {
    fn clear(&mut self, size: SurfaceSize, background: &Background) {
        let (w, h) = (size.width as f64, size.height as f64);
        match background {
            Background::Transparent => self.ctx.clear_rect(0.0, 0.0, w, h),
            Background::Solid(color) => {
                self.ctx.set_fill_style_str(color);
                self.ctx.fill_rect(0.0, 0.0, w, h);
            }
        }
    }

    fn stroke_polyline(&mut self, points: &[Vec2], style: &LineStyle) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.set_stroke_style_str(&style.color);
        self.ctx.set_line_width(style.width as f64);
        self.ctx.set_line_cap(style.cap.as_str());
        self.ctx.set_line_join(style.join.as_str());

        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.stroke();
    }
}
