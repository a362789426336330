use yew::prelude::*;

use crate::motion::hooks::{use_in_view, InViewOptions};

struct Plan {
    name: &'static str,
    size: &'static str,
    beds: &'static str,
    image: &'static str,
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Studio Suite",
        size: "45 m²",
        beds: "1 Bed",
        image: "https://images.unsplash.com/photo-1600566752355-35792bedcfea?q=80&w=1200&auto=format&fit=crop",
    },
    Plan {
        name: "One Bedroom",
        size: "68 m²",
        beds: "1 Bed + Lounge",
        image: "https://images.unsplash.com/photo-1505692794403-34d4982f88aa?q=80&w=1200&auto=format&fit=crop",
    },
    Plan {
        name: "Two Bedroom",
        size: "102 m²",
        beds: "2 Bed + Lounge",
        image: "https://images.unsplash.com/photo-1600566752802-99429c3951c6?q=80&w=1200&auto=format&fit=crop",
    },
];

#[function_component(FloorPlans)]
pub fn floor_plans() -> Html {
    let section = use_node_ref();
    let in_view = use_in_view(section.clone(), InViewOptions::default());

    html! {
        <section ref={section} id="floor-plans" class="floor-plans section-block">
            <div class="container">
                <div class="plans-header">
                    <div>
                        <span class={classes!("section-label", "rise-in", in_view.then_some("revealed"))}>
                            {"Floor Plans"}
                        </span>
                        <h2 class={classes!("plans-title", "rise-in", in_view.then_some("revealed"))}
                            style="transition-delay: 0.1s;">
                            {"Choose your layout"}
                        </h2>
                    </div>
                    <p class={classes!("plans-sub", "rise-in", in_view.then_some("revealed"))}
                        style="transition-delay: 0.2s;">
                        {"Spacious, light-filled apartments crafted for modern living and \
                          longer stays."}
                    </p>
                </div>

                <div class="plans-grid">
                    { for PLANS.iter().enumerate().map(|(i, plan)| {
                        let style = format!("transition-delay: {:.2}s;", i as f64 * 0.05);
                        html! {
                            <article class={classes!("plan-card", "rise-in", in_view.then_some("revealed"))} {style}>
                                <div class="plan-image">
                                    <img src={plan.image} alt={plan.name} loading="lazy" />
                                </div>
                                <div class="plan-meta">
                                    <h3>{ plan.name }</h3>
                                    <div class="plan-specs">
                                        <span>{ plan.size }</span>
                                        <span class="plan-sep">{"•"}</span>
                                        <span>{ plan.beds }</span>
                                    </div>
                                </div>
                            </article>
                        }
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .floor-plans {
                        background: rgba(22, 18, 16, 0.3);
                    }

                    .plans-header {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        margin-bottom: 2.5rem;
                    }

                    .plans-title {
                        font-size: clamp(2.2rem, 5vw, 3rem);
                        margin-top: 1rem;
                    }

                    .plans-sub {
                        color: var(--muted);
                        max-width: 42rem;
                    }

                    .plans-grid {
                        display: grid;
                        gap: 1.5rem;
                    }

                    .plan-card {
                        border-radius: 0.75rem;
                        overflow: hidden;
                        background: var(--card);
                        border: 1px solid var(--border);
                        transition-property: opacity, transform, border-color;
                    }

                    .plan-card:hover {
                        border-color: rgba(201, 151, 61, 0.4);
                    }

                    .plan-image {
                        aspect-ratio: 16 / 10;
                        overflow: hidden;
                    }

                    .plan-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.8s cubic-bezier(0.25, 0.1, 0.25, 1);
                    }

                    .plan-card:hover .plan-image img {
                        transform: scale(1.06);
                    }

                    .plan-meta {
                        padding: 1.25rem;
                    }

                    .plan-meta h3 {
                        font-family: var(--font-sans);
                        font-weight: 500;
                        font-size: 1.1rem;
                    }

                    .plan-specs {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        font-size: 0.9rem;
                        color: var(--muted);
                        margin-top: 0.5rem;
                    }

                    .plan-sep {
                        opacity: 0.4;
                    }

                    @media (min-width: 768px) {
                        .plans-header {
                            flex-direction: row;
                            align-items: flex-end;
                            justify-content: space-between;
                        }

                        .plans-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }
                "#}
            </style>
        </section>
    }
}
