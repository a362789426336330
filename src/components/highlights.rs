use yew::prelude::*;

use crate::motion::hooks::{use_in_view, InViewOptions};

struct Highlight {
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        icon: "🏙",
        title: "Prime Bole Address",
        blurb: "Minutes from the airport and top dining, in Addis Ababa's most sought-after district.",
    },
    Highlight {
        icon: "🛡",
        title: "Secure & Private",
        blurb: "24/7 security, controlled access, and discreet services for total peace of mind.",
    },
    Highlight {
        icon: "☀",
        title: "Bright Modern Spaces",
        blurb: "Floor-to-ceiling windows, premium finishes, and warm contemporary design.",
    },
    Highlight {
        icon: "📶",
        title: "Work & Relax",
        blurb: "High-speed Wi-Fi, smart TVs, and comfortable lounges for work or leisure.",
    },
];

#[function_component(Highlights)]
pub fn highlights() -> Html {
    let section = use_node_ref();
    let in_view = use_in_view(section.clone(), InViewOptions::default());

    html! {
        <section ref={section} id="highlights" class="highlights section-block">
            <div class="container">
                <div class="highlights-header">
                    <span class={classes!("section-label", "rise-in", in_view.then_some("revealed"))}>
                        {"Highlights"}
                    </span>
                    <h2 class={classes!("highlights-title", "rise-in", in_view.then_some("revealed"))}
                        style="transition-delay: 0.1s;">
                        {"A better way to stay"}
                    </h2>
                    <p class={classes!("highlights-sub", "rise-in", in_view.then_some("revealed"))}
                        style="transition-delay: 0.2s;">
                        {"Thoughtfully designed residences with amenities that elevate every moment."}
                    </p>
                </div>

                <div class="highlights-grid">
                    { for HIGHLIGHTS.iter().enumerate().map(|(i, item)| {
                        let style = format!("transition-delay: {:.2}s;", i as f64 * 0.05);
                        html! {
                            <div class={classes!("highlight-card", "rise-in", in_view.then_some("revealed"))} {style}>
                                <div class="highlight-icon">{ item.icon }</div>
                                <h3>{ item.title }</h3>
                                <p>{ item.blurb }</p>
                            </div>
                        }
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .highlights-header {
                        text-align: center;
                        max-width: 48rem;
                        margin: 0 auto 3.5rem;
                    }

                    .highlights-title {
                        font-size: clamp(2.2rem, 5vw, 3rem);
                        margin-top: 1rem;
                    }

                    .highlights-sub {
                        color: var(--muted);
                        margin-top: 1rem;
                    }

                    .highlights-grid {
                        display: grid;
                        gap: 1.5rem;
                    }

                    .highlight-card {
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        background: rgba(22, 18, 16, 0.5);
                        border: 1px solid var(--border);
                        transition-property: opacity, transform, border-color;
                    }

                    .highlight-card:hover {
                        border-color: rgba(201, 151, 61, 0.4);
                        transform: translateY(-6px);
                    }

                    .highlight-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.5rem;
                        background: var(--primary-soft);
                        font-size: 1.2rem;
                        margin-bottom: 1rem;
                    }

                    .highlight-card h3 {
                        font-family: var(--font-sans);
                        font-weight: 500;
                        font-size: 1.1rem;
                    }

                    .highlight-card p {
                        font-size: 0.9rem;
                        color: var(--muted);
                        margin-top: 0.5rem;
                    }

                    @media (min-width: 640px) {
                        .highlights-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (min-width: 1024px) {
                        .highlights-grid {
                            grid-template-columns: repeat(4, 1fr);
                        }
                    }
                "#}
            </style>
        </section>
    }
}
