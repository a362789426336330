use web_sys::HtmlElement;
use yew::prelude::*;

use crate::motion::driver::SectionMotion;
use crate::motion::progress::{document_region, TrackSpan};
use crate::motion::transform::map_range;

/// Fixed decorative layer behind every section: blurred orbs, small
/// geometric shapes, and hairlines, each drifting at its own rate as the
/// page scrolls. One driver feeds all of them the same progress scalar.
#[function_component(FloatingElements)]
pub fn floating_elements() -> Html {
    let orb_slow = use_node_ref();
    let orb_fast = use_node_ref();
    let orb_mid = use_node_ref();
    let square = use_node_ref();
    let dot = use_node_ref();

    {
        let drift: Vec<(NodeRef, f64, f64)> = vec![
            (orb_slow.clone(), -200.0, 0.0),
            (orb_fast.clone(), -400.0, 0.0),
            (orb_mid.clone(), -150.0, 0.0),
            (square.clone(), -200.0, 360.0),
            (dot.clone(), -400.0, 0.0),
        ];
        use_effect_with_deps(
            move |_| {
                let mut motion = None;
                if let Some(region) = document_region() {
                    motion = Some(SectionMotion::direct(region, TrackSpan::Page, move |p| {
                        for (node, travel, spin) in &drift {
                            if let Some(el) = node.cast::<HtmlElement>() {
                                let y = map_range(p, (0.0, 1.0), (0.0, *travel));
                                let rotate = map_range(p, (0.0, 1.0), (0.0, *spin));
                                let _ = el.style().set_property(
                                    "transform",
                                    &format!("translateY({y:.1}px) rotate({rotate:.1}deg)"),
                                );
                            }
                        }
                    }));
                }
                move || drop(motion)
            },
            (),
        );
    }

    html! {
        <>
            <div class="floating-layer" aria-hidden="true">
                <div ref={orb_slow} class="float-orb orb-a"></div>
                <div ref={orb_fast} class="float-orb orb-b"></div>
                <div ref={orb_mid} class="float-orb orb-c"></div>
                <div ref={square} class="float-square"></div>
                <div ref={dot} class="float-dot"></div>
            </div>
            <style>
                {r#"
                    .floating-layer {
                        position: fixed;
                        inset: 0;
                        pointer-events: none;
                        z-index: 0;
                        overflow: hidden;
                    }

                    .float-orb {
                        position: absolute;
                        border-radius: 50%;
                    }

                    .orb-a {
                        top: 20%;
                        left: 10%;
                        width: 24rem;
                        height: 24rem;
                        background: radial-gradient(circle, rgba(201, 151, 61, 0.08) 0%, transparent 70%);
                        filter: blur(60px);
                    }

                    .orb-b {
                        top: 40%;
                        right: 5%;
                        width: 31rem;
                        height: 31rem;
                        background: radial-gradient(circle, rgba(201, 151, 61, 0.05) 0%, transparent 70%);
                        filter: blur(80px);
                    }

                    .orb-c {
                        top: 60%;
                        left: 20%;
                        width: 18rem;
                        height: 18rem;
                        background: radial-gradient(circle, rgba(201, 151, 61, 0.06) 0%, transparent 70%);
                        filter: blur(50px);
                    }

                    .float-square {
                        position: absolute;
                        top: 15%;
                        right: 20%;
                        width: 1rem;
                        height: 1rem;
                        border: 1px solid rgba(201, 151, 61, 0.2);
                    }

                    .float-dot {
                        position: absolute;
                        top: 45%;
                        left: 5%;
                        width: 1.5rem;
                        height: 1.5rem;
                        border: 1px solid rgba(201, 151, 61, 0.15);
                        border-radius: 50%;
                    }
                "#}
            </style>
        </>
    }
}
