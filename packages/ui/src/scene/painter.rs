//! Draws a [`SceneFrame`] onto the scene's `<canvas>`.

use super::frame::SceneFrame;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPainter;

#[cfg(not(target_arch = "wasm32"))]
pub use headless::CanvasPainter;

#[cfg(target_arch = "wasm32")]
mod canvas {
    use std::f64::consts::TAU;

    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use super::SceneFrame;

    pub struct CanvasPainter {
        canvas: HtmlCanvasElement,
        context: CanvasRenderingContext2d,
    }

    impl CanvasPainter {
        /// Look up the canvas by id. `None` until it is in the document.
        pub fn attach(id: &str) -> Option<Self> {
            let canvas: HtmlCanvasElement = web_sys::window()?
                .document()?
                .get_element_by_id(id)?
                .dyn_into()
                .ok()?;
            let context: CanvasRenderingContext2d =
                canvas.get_context("2d").ok()??.dyn_into().ok()?;
            Some(Self { canvas, context })
        }

        /// Match the backing store to the element's CSS size and return the
        /// drawing surface size in CSS pixels.
        pub fn fit(&self) -> (f64, f64) {
            let ratio = web_sys::window()
                .map(|w| w.device_pixel_ratio())
                .unwrap_or(1.0);
            let width = self.canvas.client_width().max(1) as f64;
            let height = self.canvas.client_height().max(1) as f64;
            let backing_w = (width * ratio).round() as u32;
            let backing_h = (height * ratio).round() as u32;
            if self.canvas.width() != backing_w || self.canvas.height() != backing_h {
                self.canvas.set_width(backing_w);
                self.canvas.set_height(backing_h);
            }
            let _ = self.context.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0);
            (width, height)
        }

        pub fn paint(&self, frame: &SceneFrame) {
            let ctx = &self.context;
            ctx.clear_rect(0.0, 0.0, frame.width, frame.height);

            for star in &frame.stars {
                let radius = star.size / 2.0;
                if star.x < -radius
                    || star.y < -radius
                    || star.x > frame.width + radius
                    || star.y > frame.height + radius
                {
                    continue;
                }
                ctx.set_global_alpha(0.85);
                ctx.set_fill_style_str(&star.color.to_css());
                ctx.begin_path();
                let _ = ctx.arc(star.x, star.y, radius, 0.0, TAU);
                ctx.fill();
            }

            ctx.set_global_alpha(1.0);
            for face in &frame.faces {
                let css = face.color.to_css();
                let [a, b, c] = face.points;
                ctx.set_fill_style_str(&css);
                ctx.set_stroke_style_str(&css);
                ctx.begin_path();
                ctx.move_to(a.0, a.1);
                ctx.line_to(b.0, b.1);
                ctx.line_to(c.0, c.1);
                ctx.close_path();
                ctx.fill();
                // Hairline stroke hides seams between neighbouring faces
                ctx.stroke();
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use super::SceneFrame;

    /// No canvas outside the browser; attaching always fails and the frame
    /// loop idles.
    pub struct CanvasPainter;

    impl CanvasPainter {
        pub fn attach(_id: &str) -> Option<Self> {
            None
        }

        pub fn fit(&self) -> (f64, f64) {
            (0.0, 0.0)
        }

        pub fn paint(&self, _frame: &SceneFrame) {}
    }
}
