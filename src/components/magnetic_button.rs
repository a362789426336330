use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::motion::events::EventHandle;

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    /// How far the child chases the cursor, as a fraction of the offset
    /// from the wrapper center.
    #[prop_or(0.15)]
    pub strength: f64,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Hover wrapper that pulls its child toward the cursor and eases it back
/// on leave. The ease-back is the CSS transition on `.magnetic-target`.
#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let wrapper = use_node_ref();
    let target = use_node_ref();

    {
        let wrapper = wrapper.clone();
        let target = target.clone();
        let strength = props.strength;
        use_effect_with_deps(
            move |_| {
                let mut listeners = Vec::new();
                if let (Some(zone), Some(inner)) =
                    (wrapper.cast::<Element>(), target.cast::<HtmlElement>())
                {
                    let track = {
                        let zone = zone.clone();
                        let inner = inner.clone();
                        move |event: web_sys::Event| {
                            let event: MouseEvent = event.unchecked_into();
                            let rect = zone.get_bounding_client_rect();
                            let dx = event.client_x() as f64 - (rect.left() + rect.width() / 2.0);
                            let dy = event.client_y() as f64 - (rect.top() + rect.height() / 2.0);
                            let _ = inner.style().set_property(
                                "transform",
                                &format!(
                                    "translate({:.1}px, {:.1}px)",
                                    dx * strength,
                                    dy * strength
                                ),
                            );
                        }
                    };
                    let release = move |_: web_sys::Event| {
                        let _ = inner.style().set_property("transform", "translate(0px, 0px)");
                    };
                    listeners.push(EventHandle::listen(zone.as_ref(), "mousemove", track));
                    listeners.push(EventHandle::listen(zone.as_ref(), "mouseleave", release));
                }
                move || drop(listeners)
            },
            (),
        );
    }

    html! {
        <span ref={wrapper} class={classes!("magnetic-zone", props.class.clone())}>
            <span ref={target} class="magnetic-target">
                { for props.children.iter() }
            </span>
        </span>
    }
}
