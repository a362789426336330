use web_sys::{HtmlInputElement, InputEvent};
use yew::prelude::*;

use crate::components::animated_text::AnimatedText;
use crate::components::magnetic_button::MagneticButton;
use crate::config;
use crate::motion::hooks::{use_in_view, InViewOptions};

struct ContactInfo {
    icon: &'static str,
    label: &'static str,
    value: &'static str,
}

const CONTACT_INFO: [ContactInfo; 4] = [
    ContactInfo { icon: "📍", label: "Address", value: config::ADDRESS },
    ContactInfo { icon: "📞", label: "Phone", value: config::CONTACT_PHONE },
    ContactInfo { icon: "✉", label: "Email", value: config::CONTACT_EMAIL },
    ContactInfo { icon: "🕑", label: "Check-in", value: config::CHECK_IN_HOURS },
];

/// Location section: contact cards, the map panel, and the token input
/// that upgrades the static embed to the interactive map. An empty or bad
/// token simply leaves the static embed in place.
#[function_component(Location)]
pub fn location() -> Html {
    let section = use_node_ref();
    let in_view = use_in_view(section.clone(), InViewOptions { margin_px: -100, once: true });
    let map_token = use_state(String::new);

    let on_token_input = {
        let map_token = map_token.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            map_token.set(input.value());
        })
    };

    let directions = format!(
        "https://www.openstreetmap.org/?mlat={}&mlon={}#map=16/{}/{}",
        config::MAP_LAT,
        config::MAP_LNG,
        config::MAP_LAT,
        config::MAP_LNG,
    );

    html! {
        <section ref={section} id="location" class="location section-block">
            <div class="container">
                <div class="location-header">
                    <div class={classes!("section-heading", "centered", "rise-in", in_view.then_some("revealed"))}>
                        <span class="label-rule"></span>
                        <span class="section-label">{"Location"}</span>
                        <span class="label-rule"></span>
                    </div>
                    <h2 class="location-title">
                        <AnimatedText text="Find" delay={0.1} />
                        {" "}
                        <span class="text-gradient">
                            <AnimatedText text="Us" delay={0.2} />
                        </span>
                    </h2>
                    <p class={classes!("location-sub", "rise-in", in_view.then_some("revealed"))}
                        style="transition-delay: 0.3s;">
                        {"Located in the prestigious Bole district, just minutes from the \
                          airport and the city's finest attractions."}
                    </p>
                </div>

                <div class="location-grid">
                    <div class="location-info">
                        { for CONTACT_INFO.iter().enumerate().map(|(i, info)| {
                            let style = format!("transition-delay: {:.2}s;", 0.2 + i as f64 * 0.1);
                            html! {
                                <div class={classes!("info-card", "slide-in", in_view.then_some("revealed"))} {style}>
                                    <div class="info-icon">{ info.icon }</div>
                                    <div>
                                        <p class="info-label">{ info.label }</p>
                                        <p class="info-value">{ info.value }</p>
                                    </div>
                                </div>
                            }
                        }) }

                        <div class={classes!("location-directions", "rise-in", in_view.then_some("revealed"))}
                            style="transition-delay: 0.6s;">
                            <MagneticButton strength={0.1}>
                                <a
                                    href={directions}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="btn btn-gold"
                                >
                                    {"Get Directions ↗"}
                                </a>
                            </MagneticButton>
                        </div>
                    </div>

                    <div class={classes!("location-map", "rise-in", in_view.then_some("revealed"))}
                        style="transition-delay: 0.3s;">
                        <div class="map-frame">
                            { if map_token.is_empty() {
                                html! {
                                    <iframe
                                        title="Balhir location map"
                                        loading="lazy"
                                        referrerpolicy="no-referrer-when-downgrade"
                                        src={config::osm_embed_url()}
                                    />
                                }
                            } else {
                                html! {
                                    <iframe
                                        title="Balhir interactive map"
                                        loading="lazy"
                                        src={config::mapbox_embed_url(&map_token)}
                                    />
                                }
                            } }
                        </div>
                        <div class="map-token-row">
                            <p>{"Showing demo map. Enter a Mapbox token to enable the interactive map."}</p>
                            <input
                                type="text"
                                placeholder="pk.your_mapbox_token..."
                                value={(*map_token).clone()}
                                oninput={on_token_input}
                            />
                        </div>

                        <div class="map-card glass">
                            <p class="map-card-title">{"Balhir Apartment"}</p>
                            <p class="map-card-sub">{"Bole • Addis Ababa"}</p>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .location {
                        background: rgba(22, 18, 16, 0.3);
                    }

                    .location-header {
                        text-align: center;
                        max-width: 48rem;
                        margin: 0 auto 4rem;
                    }

                    .location-title {
                        font-size: clamp(2.5rem, 6vw, 3.75rem);
                        margin-bottom: 1.5rem;
                    }

                    .location-sub {
                        color: var(--muted);
                        font-size: 1.05rem;
                    }

                    .location-grid {
                        display: grid;
                        gap: 2rem;
                        align-items: start;
                    }

                    .location-info {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .info-card {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        padding: 1.25rem;
                        border-radius: 0.75rem;
                        background: rgba(12, 10, 8, 0.5);
                        border: 1px solid var(--border);
                        transition-property: opacity, transform, border-color;
                    }

                    .info-card:hover {
                        border-color: rgba(201, 151, 61, 0.5);
                        transform: translateX(8px);
                    }

                    .info-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3rem;
                        height: 3rem;
                        flex-shrink: 0;
                        border-radius: 0.75rem;
                        background: var(--primary-soft);
                    }

                    .info-label {
                        font-size: 0.7rem;
                        letter-spacing: 0.15em;
                        text-transform: uppercase;
                        color: var(--muted);
                    }

                    .info-value {
                        font-weight: 500;
                        margin-top: 0.2rem;
                    }

                    .location-directions .btn {
                        width: 100%;
                    }

                    .location-map {
                        position: relative;
                    }

                    .map-frame {
                        aspect-ratio: 16 / 10;
                        border-radius: 1rem;
                        overflow: hidden;
                        border: 1px solid var(--border);
                        transition: border-color 0.5s ease;
                    }

                    .map-frame:hover {
                        border-color: rgba(201, 151, 61, 0.3);
                    }

                    .map-frame iframe {
                        width: 100%;
                        height: 100%;
                        border: 0;
                    }

                    .map-token-row {
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        padding: 0.9rem 1rem;
                        margin-top: 0.5rem;
                        border-radius: 0.75rem;
                        background: rgba(22, 18, 16, 0.6);
                        border: 1px solid var(--border);
                    }

                    .map-token-row p {
                        font-size: 0.75rem;
                        color: var(--muted);
                    }

                    .map-token-row input {
                        padding: 0.6rem 0.8rem;
                        border-radius: 0.5rem;
                        background: var(--background);
                        border: 1px solid var(--border);
                        color: var(--foreground);
                        font-size: 0.85rem;
                    }

                    .map-token-row input:focus {
                        outline: none;
                        border-color: var(--primary);
                    }

                    .map-card {
                        position: absolute;
                        bottom: 4rem;
                        left: 1.5rem;
                        padding: 1.25rem;
                        border-radius: 0.75rem;
                        box-shadow: 0 0 40px rgba(201, 151, 61, 0.15);
                    }

                    .map-card-title {
                        font-family: var(--font-serif);
                        font-size: 1.1rem;
                    }

                    .map-card-sub {
                        font-size: 0.85rem;
                        color: var(--muted);
                    }

                    @media (min-width: 1024px) {
                        .location-grid {
                            grid-template-columns: 1fr 2fr;
                        }

                        .map-token-row {
                            flex-direction: row;
                            align-items: center;
                            justify-content: space-between;
                        }

                        .map-token-row input {
                            min-width: 320px;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
