use yew::prelude::*;

use crate::motion::hooks::use_scrolled_beyond;

/// Mobile-only bottom bar that slides in once the reader has scrolled past
/// the hero.
#[function_component(StickyCta)]
pub fn sticky_cta() -> Html {
    let past_hero = use_scrolled_beyond(600.0);

    html! {
        <>
            <div class={classes!("sticky-cta", past_hero.then_some("sticky-cta-visible"))}>
                <div class="sticky-cta-card glass">
                    <div class="sticky-cta-copy">
                        <p class="sticky-cta-title">{"Ready to book your stay?"}</p>
                        <p class="sticky-cta-sub">{"Secure your dates in seconds."}</p>
                    </div>
                    <a href="#contact" class="btn btn-gold">{"Book Now"}</a>
                </div>
            </div>
            <style>
                {r#"
                    .sticky-cta {
                        position: fixed;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        z-index: 60;
                        padding: 0 1rem 1rem;
                        opacity: 0;
                        transform: translateY(5rem);
                        pointer-events: none;
                        transition: opacity 0.4s ease, transform 0.4s ease;
                    }

                    .sticky-cta-visible {
                        opacity: 1;
                        transform: translateY(0);
                        pointer-events: auto;
                    }

                    .sticky-cta-card {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 0.75rem;
                        padding: 0.8rem 1rem;
                        border-radius: 0.75rem;
                        box-shadow: 0 16px 40px rgba(0, 0, 0, 0.5);
                    }

                    .sticky-cta-title {
                        font-size: 0.9rem;
                        font-weight: 500;
                        white-space: nowrap;
                        overflow: hidden;
                        text-overflow: ellipsis;
                    }

                    .sticky-cta-sub {
                        font-size: 0.75rem;
                        color: var(--muted);
                        white-space: nowrap;
                        overflow: hidden;
                        text-overflow: ellipsis;
                    }

                    @media (min-width: 768px) {
                        .sticky-cta {
                            display: none;
                        }
                    }
                "#}
            </style>
        </>
    }
}
