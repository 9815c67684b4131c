//! # Decorative scene
//!
//! Animated background behind the page: a slowly tumbling, breathing
//! icosahedron inside a starfield, seen through an auto-rotating orbit camera.
//! It carries no data and never intercepts the pointer.
//!
//! | Module | Role |
//! |--------|------|
//! | [`motion`] | Mesh pose and float wobble as pure functions of time. |
//! | [`mesh`] | Subdivided icosahedron, material and lighting. |
//! | [`stars`] | Starfield generation and twinkle. |
//! | [`camera`] | Orbit camera and perspective projection. |
//! | [`frame`] | Combines the above into a drawable [`SceneFrame`]. |
//! | [`ticker`] | Per-frame subscription scoped to the component. |
//! | [`painter`] | Canvas 2D drawing (browser only). |

use std::rc::Rc;

use content::SceneConfig;
use dioxus::prelude::*;

pub mod camera;
pub mod frame;
pub mod math;
pub mod mesh;
pub mod motion;
mod painter;
pub mod stars;
mod ticker;

pub use frame::{SceneFrame, SceneState};
pub use motion::MeshPose;
pub use ticker::use_frame_ticks;

use painter::CanvasPainter;

const SCENE_CSS: Asset = asset!("/assets/styling/scene.css");
const CANVAS_ID: &str = "scene-canvas";

#[component]
pub fn Scene(config: SceneConfig) -> Element {
    let state = use_hook(|| {
        Rc::new(SceneState::new(
            &config,
            motion::random_phase(),
            &mut rand::thread_rng(),
        ))
    });

    let mut painter: Option<CanvasPainter> = None;
    use_frame_ticks(move |elapsed| {
        if painter.is_none() {
            painter = CanvasPainter::attach(CANVAS_ID);
        }
        if let Some(ref painter) = painter {
            let (width, height) = painter.fit();
            painter.paint(&state.frame(elapsed, width, height));
        }
    });

    rsx! {
        document::Stylesheet { href: SCENE_CSS }
        div {
            class: "scene",
            aria_hidden: "true",
            canvas { id: CANVAS_ID, class: "scene-canvas" }
        }
    }
}
