use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::components::animated_text::AnimatedText;
use crate::components::parallax_image::ParallaxImage;
use crate::motion::driver::SectionMotion;
use crate::motion::hooks::{use_in_view, InViewOptions};
use crate::motion::progress::TrackSpan;
use crate::motion::transform::{map_range, Keyframes};

const BEDROOM_IMAGE: &str =
    "https://images.unsplash.com/photo-1505693416388-ac5ce068fe85?q=80&w=1400&auto=format&fit=crop";

struct Stat {
    number: &'static str,
    label: &'static str,
    icon: &'static str,
}

const STATS: [Stat; 3] = [
    Stat { number: "150+", label: "Happy Guests", icon: "♥" },
    Stat { number: "5", label: "Star Rating", icon: "★" },
    Stat { number: "24/7", label: "Concierge", icon: "✦" },
];

/// Two-column introduction: parallax image with a floating badge on one
/// side, copy and stats on the other, the columns counter-drifting as the
/// section passes through the viewport.
#[function_component(About)]
pub fn about() -> Html {
    let section = use_node_ref();
    let image_col = use_node_ref();
    let text_col = use_node_ref();
    let badge = use_node_ref();
    let in_view = use_in_view(section.clone(), InViewOptions { margin_px: -100, once: true });

    {
        let section = section.clone();
        let image_col = image_col.clone();
        let text_col = text_col.clone();
        let badge = badge.clone();
        use_effect_with_deps(
            move |_| {
                let mut motion = None;
                if let Some(region) = section.cast::<Element>() {
                    let badge_scale = Keyframes::new([(0.0, 0.8), (0.5, 1.0), (1.0, 0.9)]);
                    motion = Some(SectionMotion::direct(
                        region,
                        TrackSpan::EnterToExit,
                        move |p| {
                            if let Some(col) = image_col.cast::<HtmlElement>() {
                                let y = map_range(p, (0.0, 1.0), (100.0, -100.0));
                                let _ = col
                                    .style()
                                    .set_property("transform", &format!("translateY({y:.1}px)"));
                            }
                            if let Some(col) = text_col.cast::<HtmlElement>() {
                                let y = map_range(p, (0.0, 1.0), (50.0, -50.0));
                                let _ = col
                                    .style()
                                    .set_property("transform", &format!("translateY({y:.1}px)"));
                            }
                            if let Some(card) = badge.cast::<HtmlElement>() {
                                let _ = card.style().set_property(
                                    "transform",
                                    &format!("scale({:.4})", badge_scale.sample(p)),
                                );
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
        <section ref={section} id="about" class="about section-block">
            <div class="container">
                <div class="about-grid">
                    <div ref={image_col} class="about-media">
                        <div class={classes!("about-frame", "rise-in", in_view.then_some("revealed"))}>
                            <ParallaxImage
                                src={BEDROOM_IMAGE}
                                alt="Luxury bedroom"
                                class="about-image"
                                speed={0.15}
                            />
                        </div>
                        <div ref={badge} class="about-badge glass">
                            <p class="about-badge-number">{"12+"}</p>
                            <p class="about-badge-label">{"Years of Excellence"}</p>
                        </div>
                    </div>

                    <div ref={text_col} class="about-copy">
                        <div class={classes!("section-heading", "rise-in", in_view.then_some("revealed"))}>
                            <span class="label-rule"></span>
                            <span class="section-label">{"About Us"}</span>
                        </div>

                        <h2 class="about-title">
                            <AnimatedText text="A Haven of" delay={0.2} />
                            <br />
                            <span class="text-gradient">
                                <AnimatedText text="Sophistication" delay={0.4} />
                            </span>
                        </h2>

                        <p class={classes!("about-lead", "rise-in", in_view.then_some("revealed"))}
                            style="transition-delay: 0.4s;">
                            {"Nestled in the vibrant heart of Addis Ababa, Balhir Apartment \
                              offers an unparalleled blend of luxury and comfort. Our \
                              meticulously designed spaces reflect the rich cultural heritage \
                              of Ethiopia while embracing contemporary elegance."}
                        </p>
                        <p class={classes!("about-body", "rise-in", in_view.then_some("revealed"))}
                            style="transition-delay: 0.5s;">
                            {"Every detail has been carefully curated to ensure your stay \
                              exceeds expectations, from premium amenities to breathtaking \
                              city views. Experience the warmth of Ethiopian hospitality in \
                              a setting that feels like home."}
                        </p>

                        <div class="about-stats">
                            { for STATS.iter().enumerate().map(|(i, stat)| {
                                let style = format!("transition-delay: {:.2}s;", 0.6 + i as f64 * 0.15);
                                html! {
                                    <div class={classes!("about-stat", "rise-in", in_view.then_some("revealed"))} {style}>
                                        <span class="about-stat-icon">{ stat.icon }</span>
                                        <p class="about-stat-number">{ stat.number }</p>
                                        <p class="about-stat-label">{ stat.label }</p>
                                    </div>
                                }
                            }) }
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .about-grid {
                        display: grid;
                        gap: 4rem;
                        align-items: center;
                    }

                    .about-media {
                        position: relative;
                        will-change: transform;
                    }

                    .about-image {
                        aspect-ratio: 3 / 4;
                        border-radius: 1rem;
                    }

                    .about-badge {
                        position: absolute;
                        bottom: -2rem;
                        right: 1rem;
                        border-radius: 1rem;
                        padding: 1.5rem;
                        box-shadow: 0 0 40px rgba(201, 151, 61, 0.15);
                    }

                    .about-badge-number {
                        font-family: var(--font-serif);
                        font-size: 3rem;
                        color: var(--primary);
                        line-height: 1;
                    }

                    .about-badge-label {
                        font-size: 0.85rem;
                        color: var(--muted);
                        margin-top: 0.35rem;
                    }

                    .about-copy {
                        will-change: transform;
                    }

                    .about-title {
                        font-size: clamp(2.5rem, 6vw, 3.75rem);
                        line-height: 1.15;
                        margin-bottom: 2rem;
                    }

                    .about-lead {
                        color: var(--muted);
                        font-size: 1.1rem;
                        margin-bottom: 1.5rem;
                    }

                    .about-body {
                        color: var(--muted);
                        margin-bottom: 3rem;
                    }

                    .about-stats {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }

                    .about-stat {
                        text-align: center;
                    }

                    .about-stat-icon {
                        color: var(--primary);
                        font-size: 1.3rem;
                    }

                    .about-stat-number {
                        font-family: var(--font-serif);
                        font-size: 2.2rem;
                        margin: 0.5rem 0 0.2rem;
                    }

                    .about-stat-label {
                        font-size: 0.7rem;
                        letter-spacing: 0.15em;
                        text-transform: uppercase;
                        color: var(--muted);
                    }

                    @media (min-width: 1024px) {
                        .about-grid {
                            grid-template-columns: 1fr 1fr;
                            gap: 6rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
