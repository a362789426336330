use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::motion::driver::SectionMotion;
use crate::motion::hooks::{use_in_view, InViewOptions};
use crate::motion::progress::TrackSpan;
use crate::motion::transform::{map_range, Keyframes};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DividerVariant {
    Line,
    Gradient,
    Dots,
    Wave,
}

#[derive(Properties, PartialEq)]
pub struct SectionDividerProps {
    #[prop_or(DividerVariant::Line)]
    pub variant: DividerVariant,
}

/// Decorative rule between sections. `Line` and `Gradient` grow with raw
/// scroll progress; `Dots` and `Wave` play once on entering the viewport.
#[function_component(SectionDivider)]
pub fn section_divider(props: &SectionDividerProps) -> Html {
    let wrap = use_node_ref();
    let fill = use_node_ref();
    let in_view = use_in_view(wrap.clone(), InViewOptions::default());

    let scroll_driven = matches!(
        props.variant,
        DividerVariant::Line | DividerVariant::Gradient
    );
    {
        let wrap = wrap.clone();
        let fill = fill.clone();
        use_effect_with_deps(
            move |_| {
                let mut motion = None;
                if scroll_driven {
                    if let (Some(section), Some(fill)) =
                        (wrap.cast::<Element>(), fill.cast::<HtmlElement>())
                    {
                        let fade = Keyframes::new([(0.0, 0.0), (0.3, 1.0), (0.7, 1.0), (1.0, 0.0)]);
                        motion = Some(SectionMotion::direct(
                            section,
                            TrackSpan::EnterToExit,
                            move |p| {
                                let grow = map_range(p, (0.0, 0.5), (0.0, 1.0));
                                let style = fill.style();
                                let _ = style
                                    .set_property("transform", &format!("scaleX({grow:.4})"));
                                let _ = style
                                    .set_property("opacity", &format!("{:.3}", fade.sample(p)));
                            },
                        ));
                    }
                }
                move || drop(motion)
            },
            (),
        );
    }

    match props.variant {
        DividerVariant::Line => html! {
            <div ref={wrap} class="divider divider-line">
                <div ref={fill} class="divider-fill"></div>
            </div>
        },
        DividerVariant::Gradient => html! {
            <div ref={wrap} class="divider divider-gradient">
                <div ref={fill} class="divider-fill divider-fill-gradient"></div>
            </div>
        },
        DividerVariant::Dots => html! {
            <div ref={wrap} class={classes!("divider", "divider-dots", in_view.then_some("revealed"))}>
                { for (0..5).map(|i| {
                    let style = format!("transition-delay: {:.2}s;", i as f64 * 0.1);
                    html! { <span class="divider-dot" {style}></span> }
                }) }
            </div>
        },
        DividerVariant::Wave => html! {
            <div ref={wrap} class={classes!("divider", "divider-wave", in_view.then_some("revealed"))}>
                <svg viewBox="0 0 1200 120" preserveAspectRatio="none">
                    <path
                        d="M0,60 C200,120 400,0 600,60 C800,120 1000,0 1200,60"
                        fill="none"
                        stroke="var(--primary)"
                        stroke-width="2"
                    />
                </svg>
            </div>
        },
    }
}
