use yew::prelude::*;

use crate::motion::hooks::{use_in_view, InViewOptions};
use crate::motion::reveal::{split_into_units, Granularity, Stagger};

#[derive(Properties, PartialEq)]
pub struct AnimatedTextProps {
    pub text: AttrValue,
    #[prop_or(Granularity::Words)]
    pub granularity: Granularity,
    /// Delay before the first unit starts, in seconds.
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(true)]
    pub once: bool,
    #[prop_or_default]
    pub class: Classes,
}

/// Staggered text reveal. Each unit carries its own `animation-delay`, so
/// once the wrapper enters the viewport the string sweeps in as a wave.
#[function_component(AnimatedText)]
pub fn animated_text(props: &AnimatedTextProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(
        node.clone(),
        InViewOptions {
            once: props.once,
            ..Default::default()
        },
    );

    let units = split_into_units(
        &props.text,
        props.granularity,
        Stagger::starting_at(props.delay, props.granularity),
    );

    let mode = match props.granularity {
        Granularity::Chars => "at-chars",
        Granularity::Words => "at-words",
        Granularity::Lines => "at-lines",
    };

    html! {
        <span
            ref={node}
            class={classes!(
                "animated-text",
                mode,
                props.class.clone(),
                in_view.then_some("revealed"),
            )}
        >
            { for units.iter().map(|unit| {
                let style = format!("animation-delay: {:.3}s;", unit.delay_s);
                html! { <span class="reveal-unit" {style}>{ unit.text.clone() }</span> }
            }) }
        </span>
    }
}
