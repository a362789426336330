use yew::prelude::*;

use crate::motion::hooks::{use_in_view, InViewOptions};

struct Testimonial {
    name: &'static str,
    role: &'static str,
    quote: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Hanna T.",
        role: "Business Traveller",
        quote: "Immaculate apartment and excellent location. The team was incredibly \
                responsive and kind. It felt like home.",
    },
    Testimonial {
        name: "Daniel K.",
        role: "Extended Stay",
        quote: "Bright spaces, reliable Wi-Fi, and quiet. I stayed for three weeks and \
                loved every day of it.",
    },
    Testimonial {
        name: "Maya S.",
        role: "Holiday Visit",
        quote: "The design is beautiful and the amenities are thoughtful. Perfect base \
                for exploring Addis.",
    },
];

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let section = use_node_ref();
    let in_view = use_in_view(section.clone(), InViewOptions::default());

    html! {
        <section ref={section} id="testimonials" class="testimonials section-block">
            <div class="container">
                <div class="testimonials-header">
                    <span class={classes!("section-label", "rise-in", in_view.then_some("revealed"))}>
                        {"Testimonials"}
                    </span>
                    <h2 class={classes!("testimonials-title", "rise-in", in_view.then_some("revealed"))}
                        style="transition-delay: 0.1s;">
                        {"Guests love staying here"}
                    </h2>
                </div>

                <div class="testimonials-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, t)| {
                        let style = format!("transition-delay: {:.2}s;", i as f64 * 0.07);
                        html! {
                            <blockquote class={classes!("quote-card", "rise-in", in_view.then_some("revealed"))} {style}>
                                <span class="quote-mark">{"“"}</span>
                                <p class="quote-text">{ t.quote }</p>
                                <footer class="quote-footer">
                                    <span class="quote-name">{ t.name }</span>
                                    <span class="quote-sep">{"•"}</span>
                                    <span>{ t.role }</span>
                                </footer>
                            </blockquote>
                        }
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .testimonials-header {
                        text-align: center;
                        max-width: 40rem;
                        margin: 0 auto 3rem;
                    }

                    .testimonials-title {
                        font-size: clamp(2.2rem, 5vw, 3rem);
                        margin-top: 1rem;
                    }

                    .testimonials-grid {
                        display: grid;
                        gap: 1.5rem;
                    }

                    .quote-card {
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        background: rgba(22, 18, 16, 0.5);
                        border: 1px solid var(--border);
                        transition-property: opacity, transform, border-color;
                    }

                    .quote-card:hover {
                        border-color: rgba(201, 151, 61, 0.4);
                    }

                    .quote-mark {
                        font-family: var(--font-serif);
                        font-size: 2.5rem;
                        line-height: 1;
                        color: rgba(201, 151, 61, 0.7);
                    }

                    .quote-text {
                        margin-top: 0.75rem;
                        line-height: 1.7;
                    }

                    .quote-footer {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-top: 1.5rem;
                        font-size: 0.9rem;
                        color: var(--muted);
                    }

                    .quote-name {
                        color: var(--foreground);
                        font-weight: 500;
                    }

                    .quote-sep {
                        opacity: 0.5;
                    }

                    @media (min-width: 768px) {
                        .testimonials-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }
                "#}
            </style>
        </section>
    }
}
