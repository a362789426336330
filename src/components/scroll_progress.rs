use web_sys::HtmlElement;
use yew::prelude::*;

use crate::motion::driver::SectionMotion;
use crate::motion::progress::{document_region, TrackSpan};
use crate::motion::spring::SpringConfig;

/// Reading-progress chrome: a top bar scaled by page progress plus a side
/// indicator on large screens, both fed by one spring-smoothed driver.
#[function_component(ScrollProgressBar)]
pub fn scroll_progress_bar() -> Html {
    let bar = use_node_ref();
    let side_fill = use_node_ref();

    {
        let bar = bar.clone();
        let side_fill = side_fill.clone();
        use_effect_with_deps(
            move |_| {
                let mut motion = None;
                if let Some(region) = document_region() {
                    motion = Some(SectionMotion::smooth(
                        region,
                        TrackSpan::Page,
                        SpringConfig::default(),
                        move |p| {
                            if let Some(bar) = bar.cast::<HtmlElement>() {
                                let _ = bar
                                    .style()
                                    .set_property("transform", &format!("scaleX({p:.4})"));
                            }
                            if let Some(fill) = side_fill.cast::<HtmlElement>() {
                                let _ = fill
                                    .style()
                                    .set_property("transform", &format!("scaleY({p:.4})"));
                            }
                        },
                    ));
                }
                move || drop(motion)
            },
            (),
        );
    }

    html! {
        <>
            <div ref={bar} class="progress-bar"></div>
            <div class="progress-rail">
                <div ref={side_fill} class="progress-rail-fill"></div>
            </div>
            <style>
                {r#"
                    .progress-bar {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 2px;
                        background: var(--primary);
                        transform: scaleX(0);
                        transform-origin: left;
                        z-index: 100;
                    }

                    .progress-rail {
                        display: none;
                        position: fixed;
                        right: 1.5rem;
                        top: 50%;
                        transform: translateY(-50%);
                        width: 2px;
                        height: 8rem;
                        border-radius: 999px;
                        background: rgba(42, 36, 30, 0.5);
                        overflow: hidden;
                        z-index: 50;
                    }

                    .progress-rail-fill {
                        width: 100%;
                        height: 100%;
                        background: var(--primary);
                        border-radius: 999px;
                        transform: scaleY(0);
                        transform-origin: top;
                    }

                    @media (min-width: 1024px) {
                        .progress-rail {
                            display: block;
                        }
                    }
                "#}
            </style>
        </>
    }
}
