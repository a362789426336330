use yew::prelude::*;

use crate::motion::hooks::{use_in_view, InViewOptions};

struct Amenity {
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const AMENITIES: [Amenity; 8] = [
    Amenity {
        icon: "📶",
        title: "High-Speed WiFi",
        blurb: "Stay connected with lightning-fast internet throughout.",
    },
    Amenity {
        icon: "🚗",
        title: "Private Parking",
        blurb: "Secure underground parking for your peace of mind.",
    },
    Amenity {
        icon: "🍽",
        title: "Gourmet Kitchen",
        blurb: "Fully equipped kitchen with premium appliances.",
    },
    Amenity {
        icon: "🛡",
        title: "24/7 Security",
        blurb: "Round-the-clock security and surveillance systems.",
    },
    Amenity {
        icon: "📺",
        title: "Smart Entertainment",
        blurb: "Smart TV with streaming services and sound system.",
    },
    Amenity {
        icon: "❄",
        title: "Climate Control",
        blurb: "Individual climate control in every room.",
    },
    Amenity {
        icon: "☕",
        title: "Premium Coffee",
        blurb: "Ethiopian coffee experience with premium equipment.",
    },
    Amenity {
        icon: "✨",
        title: "Daily Housekeeping",
        blurb: "Professional cleaning to keep your space pristine.",
    },
];

#[function_component(Amenities)]
pub fn amenities() -> Html {
    let section = use_node_ref();
    let in_view = use_in_view(section.clone(), InViewOptions { margin_px: -100, once: true });

    html! {
        <section ref={section} id="amenities" class="amenities section-block">
            <div class="amenities-pattern" aria-hidden="true"></div>
            <div class="container">
                <div class="amenities-header">
                    <span class={classes!("section-label", "rise-in", in_view.then_some("revealed"))}>
                        {"Amenities"}
                    </span>
                    <h2 class={classes!("amenities-title", "rise-in", in_view.then_some("revealed"))}
                        style="transition-delay: 0.1s;">
                        {"Everything You "}<span class="text-gradient">{"Need"}</span>
                    </h2>
                    <p class={classes!("amenities-sub", "rise-in", in_view.then_some("revealed"))}
                        style="transition-delay: 0.2s;">
                        {"Thoughtfully curated amenities designed to make your stay \
                          comfortable and memorable."}
                    </p>
                </div>

                <div class="amenities-grid">
                    { for AMENITIES.iter().enumerate().map(|(i, amenity)| {
                        let style = format!("transition-delay: {:.2}s;", i as f64 * 0.1);
                        html! {
                            <div class={classes!("amenity-card", "rise-in", in_view.then_some("revealed"))} {style}>
                                <div class="amenity-icon">{ amenity.icon }</div>
                                <h3>{ amenity.title }</h3>
                                <p>{ amenity.blurb }</p>
                            </div>
                        }
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .amenities {
                        background: rgba(22, 18, 16, 0.3);
                    }

                    .amenities-pattern {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        opacity: 0.05;
                        background-image: radial-gradient(circle at 1px 1px, var(--foreground) 1px, transparent 0);
                        background-size: 40px 40px;
                    }

                    .amenities-header {
                        position: relative;
                        text-align: center;
                        max-width: 48rem;
                        margin: 0 auto 4rem;
                    }

                    .amenities-title {
                        font-size: clamp(2.2rem, 5vw, 3.5rem);
                        margin-top: 1rem;
                    }

                    .amenities-sub {
                        color: var(--muted);
                        font-size: 1.05rem;
                        margin-top: 1.2rem;
                    }

                    .amenities-grid {
                        position: relative;
                        display: grid;
                        gap: 1.5rem;
                    }

                    .amenity-card {
                        padding: 2rem;
                        border-radius: 1rem;
                        background: rgba(12, 10, 8, 0.5);
                        border: 1px solid var(--border);
                        transition-property: opacity, transform, border-color;
                    }

                    .amenity-card:hover {
                        border-color: rgba(201, 151, 61, 0.5);
                        transform: translateY(-8px);
                    }

                    .amenity-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 0.75rem;
                        background: var(--primary-soft);
                        font-size: 1.4rem;
                        margin-bottom: 1.5rem;
                        transition: transform 0.6s ease;
                    }

                    .amenity-card:hover .amenity-icon {
                        transform: rotate(360deg) scale(1.1);
                    }

                    .amenity-card h3 {
                        font-size: 1.2rem;
                    }

                    .amenity-card p {
                        font-size: 0.9rem;
                        color: var(--muted);
                        margin-top: 0.75rem;
                    }

                    @media (min-width: 768px) {
                        .amenities-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (min-width: 1024px) {
                        .amenities-grid {
                            grid-template-columns: repeat(4, 1fr);
                        }
                    }
                "#}
            </style>
        </section>
    }
}
