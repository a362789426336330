use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::motion::driver::SectionMotion;
use crate::motion::progress::TrackSpan;
use crate::motion::spring::SpringConfig;
use crate::motion::transform::{map_range, Keyframes};

#[derive(Properties, PartialEq)]
pub struct ParallaxImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Fraction of the frame height the image drifts across the full span.
    #[prop_or(0.2)]
    pub speed: f64,
    /// Breathe between 1.1 and 1.0 while passing through the viewport.
    #[prop_or(true)]
    pub zoom: bool,
}

/// Image in an overflow-clipped frame, translated and scaled by the frame's
/// scroll progress with spring smoothing.
#[function_component(ParallaxImage)]
pub fn parallax_image(props: &ParallaxImageProps) -> Html {
    let frame = use_node_ref();
    let image = use_node_ref();

    {
        let frame = frame.clone();
        let image = image.clone();
        let speed = props.speed;
        let zoom = props.zoom;
        use_effect_with_deps(
            move |_| {
                let mut motion = None;
                if let (Some(section), Some(img)) =
                    (frame.cast::<Element>(), image.cast::<HtmlElement>())
                {
                    let breathe = Keyframes::new([(0.0, 1.1), (0.5, 1.0), (1.0, 1.1)]);
                    motion = Some(SectionMotion::smooth(
                        section,
                        TrackSpan::EnterToExit,
                        SpringConfig::default(),
                        move |p| {
                            let y = map_range(p, (0.0, 1.0), (0.0, speed * 100.0));
                            let scale = if zoom { breathe.sample(p) } else { 1.0 };
                            let _ = img.style().set_property(
                                "transform",
                                &format!("translateY({y:.2}%) scale({scale:.4})"),
                            );
                        },
                    ));
                }
                move || drop(motion)
            },
            (),
        );
    }

    html! {
        <div ref={frame} class={classes!("parallax-frame", props.class.clone())}>
            <img ref={image} src={props.src.clone()} alt={props.alt.clone()} loading="lazy" />
        </div>
    }
}
