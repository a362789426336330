use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::components::animated_text::AnimatedText;
use crate::components::magnetic_button::MagneticButton;
use crate::motion::driver::SectionMotion;
use crate::motion::events::EventHandle;
use crate::motion::progress::TrackSpan;
use crate::motion::reveal::Granularity;
use crate::motion::spring::SpringConfig;
use crate::motion::transform::{map_range, Keyframes};

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?q=80&w=2000&auto=format&fit=crop";

/// Full-height opening section. The background parallaxes away under a
/// spring while the content fades, lifts and blurs out on raw progress;
/// decorative orbs follow the cursor.
#[function_component(Hero)]
pub fn hero() -> Html {
    let section = use_node_ref();
    let backdrop = use_node_ref();
    let veil = use_node_ref();
    let content = use_node_ref();
    let orb_warm = use_node_ref();
    let orb_soft = use_node_ref();
    let diamond = use_node_ref();

    // Background drift, spring-smoothed so fast flicks stay fluid.
    {
        let section = section.clone();
        let backdrop = backdrop.clone();
        use_effect_with_deps(
            move |_| {
                let mut motion = None;
                if let (Some(region), Some(bg)) =
                    (section.cast::<Element>(), backdrop.cast::<HtmlElement>())
                {
                    motion = Some(SectionMotion::smooth(
                        region,
                        TrackSpan::TopToExit,
                        SpringConfig::default(),
                        move |p| {
                            let y = map_range(p, (0.0, 1.0), (0.0, 50.0));
                            let scale = map_range(p, (0.0, 1.0), (1.0, 1.3));
                            let _ = bg.style().set_property(
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

    // Content fade-out and veil thinning track the raw scroll position.
    {
        let section = section.clone();
        let content = content.clone();
        let veil = veil.clone();
        use_effect_with_deps(
            move |_| {
                let mut motion = None;
                if let Some(region) = section.cast::<Element>() {
                    let veil_fade = Keyframes::new([(0.0, 1.0), (0.3, 0.6)]);
                    motion = Some(SectionMotion::direct(
                        region,
                        TrackSpan::TopToExit,
                        move |p| {
                            if let Some(inner) = content.cast::<HtmlElement>() {
                                let opacity = map_range(p, (0.0, 0.5), (1.0, 0.0));
                                let lift = map_range(p, (0.0, 0.5), (0.0, 30.0));
                                let blur = map_range(p, (0.0, 0.5), (0.0, 10.0));
                                let style = inner.style();
                                let _ = style.set_property("opacity", &format!("{opacity:.3}"));
                                let _ = style.set_property(
                                    "transform",
                                    &format!("translateY({lift:.2}%)"),
                                );
                                let _ =
                                    style.set_property("filter", &format!("blur({blur:.2}px)"));
                            }
                            if let Some(layer) = veil.cast::<HtmlElement>() {
                                let _ = layer
                                    .style()
                                    .set_property("opacity", &format!("{:.3}", veil_fade.sample(p)));
                            }
                        },
                    ));
                }
                move || drop(motion)
            },
            (),
        );
    }

    // Cursor parallax on the decorative layer.
    {
        let drift: Vec<(NodeRef, f64)> = vec![
            (orb_warm.clone(), 30.0),
            (orb_soft.clone(), -20.0),
            (diamond.clone(), 15.0),
        ];
        use_effect_with_deps(
            move |_| {
                let listener = EventHandle::on_window("mousemove", move |event| {
                    let event: MouseEvent = event.unchecked_into();
                    let Some(window) = web_sys::window() else { return };
                    let width = window
                        .inner_width()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(1.0)
                        .max(1.0);
                    let height = window
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(1.0)
                        .max(1.0);
                    let nx = (event.client_x() as f64 / width - 0.5) * 2.0;
                    let ny = (event.client_y() as f64 / height - 0.5) * 2.0;
                    for (node, reach) in &drift {
                        if let Some(el) = node.cast::<HtmlElement>() {
                            let _ = el.style().set_property(
                                "transform",
                                &format!("translate({:.1}px, {:.1}px)", nx * reach, ny * reach),
                            );
                        }
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    html! {
        <section ref={section} id="home" class="hero">
            <div ref={backdrop} class="hero-backdrop">
                <img src={HERO_IMAGE} alt="Balhir luxury apartment living space" />
                <div ref={veil} class="hero-veil"></div>
            </div>

            <div class="hero-grain" aria-hidden="true"></div>

            <div class="hero-decor" aria-hidden="true">
                <div ref={orb_warm} class="hero-orb hero-orb-warm"></div>
                <div ref={orb_soft} class="hero-orb hero-orb-soft"></div>
                <div ref={diamond} class="hero-diamond"></div>
            </div>

            <div ref={content} class="hero-content">
                <p class="hero-eyebrow hero-enter" style="animation-delay: 0.2s;">
                    {"Welcome to"}
                </p>
                <h1 class="hero-title">
                    <AnimatedText
                        text="Balhir"
                        granularity={Granularity::Chars}
                        delay={0.5}
                    />
                    <span class="hero-dot hero-enter" style="animation-delay: 1.5s;">{"."}</span>
                </h1>
                <p class="hero-tagline hero-enter" style="animation-delay: 1.2s;">
                    {"Experience luxury living in the heart of Addis Ababa. Where modern \
                      elegance meets Ethiopian hospitality."}
                </p>
                <div class="hero-cta-row hero-enter" style="animation-delay: 1.4s;">
                    <MagneticButton strength={0.15}>
                        <a href="#contact" class="btn btn-gold">{"Book Your Stay"}</a>
                    </MagneticButton>
                    <MagneticButton strength={0.15}>
                        <a href="#about" class="btn btn-outline">{"Explore"}</a>
                    </MagneticButton>
                </div>

                <div class="hero-scroll-hint hero-enter" style="animation-delay: 2s;">
                    <span>{"Scroll to discover"}</span>
                    <div class="hero-scroll-pill">
                        <div class="hero-scroll-bead"></div>
                    </div>
                </div>
            </div>

            <p class="hero-side-note hero-enter" style="animation-delay: 2s;">
                {"Addis Ababa • Ethiopia"}
            </p>
            <div class="hero-corner hero-corner-tl hero-enter" style="animation-delay: 2.2s;"></div>
            <div class="hero-corner hero-corner-br hero-enter" style="animation-delay: 2.4s;"></div>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 120vh;
                        width: 100%;
                        overflow: hidden;
                    }

                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        will-change: transform;
                    }

                    .hero-backdrop img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }

                    .hero-veil {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(
                            to bottom,
                            rgba(12, 10, 8, 0.8),
                            rgba(12, 10, 8, 0.4) 50%,
                            var(--background)
                        );
                    }

                    .hero-grain {
                        position: absolute;
                        inset: 0;
                        z-index: 10;
                        opacity: 0.03;
                        pointer-events: none;
                        mix-blend-mode: overlay;
                        background-image: url("data:image/svg+xml,%3Csvg viewBox='0 0 400 400' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='n'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.9' numOctaves='3' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23n)'/%3E%3C/svg%3E");
                    }

                    .hero-decor {
                        position: absolute;
                        inset: 0;
                        z-index: 10;
                        pointer-events: none;
                        overflow: hidden;
                    }

                    .hero-orb {
                        position: absolute;
                        border-radius: 50%;
                    }

                    .hero-orb-warm {
                        top: 5rem;
                        right: 2.5rem;
                        width: 31rem;
                        height: 31rem;
                        background: radial-gradient(circle, rgba(201, 151, 61, 0.12) 0%, transparent 70%);
                        filter: blur(80px);
                    }

                    .hero-orb-soft {
                        bottom: 10rem;
                        left: 2.5rem;
                        width: 24rem;
                        height: 24rem;
                        background: radial-gradient(circle, rgba(201, 151, 61, 0.08) 0%, transparent 70%);
                        filter: blur(60px);
                    }

                    .hero-diamond {
                        position: absolute;
                        top: 25%;
                        right: 15%;
                        width: 5rem;
                        height: 5rem;
                        border: 1px solid rgba(201, 151, 61, 0.2);
                        rotate: 45deg;
                    }

                    .hero-content {
                        position: relative;
                        z-index: 20;
                        height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 0 1.5rem;
                    }

                    .hero-eyebrow {
                        color: var(--primary);
                        font-weight: 500;
                        letter-spacing: 0.4em;
                        text-transform: uppercase;
                        font-size: 0.85rem;
                        margin-bottom: 1.5rem;
                    }

                    .hero-title {
                        font-size: clamp(4.5rem, 16vw, 12rem);
                        letter-spacing: -0.02em;
                        line-height: 1;
                        margin-bottom: 2rem;
                    }

                    .hero-dot {
                        color: var(--primary);
                        display: inline-block;
                    }

                    .hero-tagline {
                        color: var(--muted);
                        font-size: 1.15rem;
                        max-width: 40rem;
                        margin: 0 auto 3rem;
                    }

                    .hero-cta-row {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                    }

                    .hero-cta-row .btn {
                        min-width: 200px;
                    }

                    .hero-scroll-hint {
                        position: absolute;
                        bottom: 5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.75rem;
                        color: var(--muted);
                        font-size: 0.7rem;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                    }

                    .hero-scroll-pill {
                        width: 1.5rem;
                        height: 2.5rem;
                        border: 2px solid rgba(201, 151, 61, 0.3);
                        border-radius: 999px;
                        display: flex;
                        justify-content: center;
                        padding-top: 0.5rem;
                        animation: hero-bob 2s ease-in-out infinite;
                    }

                    .hero-scroll-bead {
                        width: 4px;
                        height: 4px;
                        border-radius: 50%;
                        background: var(--primary);
                        animation: hero-bob 1.5s ease-in-out infinite;
                    }

                    .hero-side-note {
                        display: none;
                        position: absolute;
                        left: 2rem;
                        top: 50%;
                        translate: 0 -50%;
                        z-index: 20;
                        writing-mode: vertical-rl;
                        font-size: 0.7rem;
                        letter-spacing: 0.5em;
                        text-transform: uppercase;
                        color: var(--muted);
                    }

                    .hero-corner {
                        display: none;
                        position: absolute;
                        width: 4rem;
                        height: 4rem;
                        z-index: 20;
                    }

                    .hero-corner-tl {
                        top: 2rem;
                        left: 2rem;
                        border-left: 1px solid rgba(201, 151, 61, 0.3);
                        border-top: 1px solid rgba(201, 151, 61, 0.3);
                    }

                    .hero-corner-br {
                        bottom: 2rem;
                        right: 2rem;
                        border-right: 1px solid rgba(201, 151, 61, 0.3);
                        border-bottom: 1px solid rgba(201, 151, 61, 0.3);
                    }

                    .hero-enter {
                        animation: hero-rise 1s cubic-bezier(0.25, 0.1, 0.25, 1) backwards;
                    }

                    @keyframes hero-rise {
                        from {
                            opacity: 0;
                            transform: translateY(2.5rem);
                        }
                        to {
                            opacity: 1;
                            transform: translateY(0);
                        }
                    }

                    @keyframes hero-bob {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(0.5rem); }
                    }

                    @media (min-width: 1024px) {
                        .hero-side-note,
                        .hero-corner {
                            display: block;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
