use chrono::Datelike;
use web_sys::ScrollToOptions;
use yew::prelude::*;

use crate::config;
use crate::motion::hooks::{use_in_view, InViewOptions};

const QUICK_LINKS: [(&str, &str); 5] = [
    ("About", "#about"),
    ("Amenities", "#amenities"),
    ("Gallery", "#gallery"),
    ("Location", "#location"),
    ("Contact", "#contact"),
];

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("Instagram", "IG"),
    ("Facebook", "FB"),
    ("Twitter", "TW"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let section = use_node_ref();
    let in_view = use_in_view(section.clone(), InViewOptions::default());

    let scroll_to_top = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    let year = chrono::Utc::now().year();

    html! {
        <footer ref={section} class="footer">
            <div class={classes!("container", "footer-inner", "rise-in", in_view.then_some("revealed"))}>
                <div class="footer-grid">
                    <div class="footer-brand">
                        <a href="#home" class="footer-logo serif">
                            {"Balhir"}<span class="footer-logo-dot">{"."}</span>
                        </a>
                        <p class="footer-blurb">
                            {"Experience luxury living in the heart of Addis Ababa. Where \
                              modern elegance meets Ethiopian hospitality."}
                        </p>
                        <div class="footer-social">
                            { for SOCIAL_LINKS.iter().map(|&(name, short)| html! {
                                <a href="#" aria-label={name} class="footer-social-link">{ short }</a>
                            }) }
                        </div>
                    </div>

                    <div class="footer-links">
                        <h4 class="serif">{"Quick Links"}</h4>
                        <ul>
                            { for QUICK_LINKS.iter().map(|&(name, href)| html! {
                                <li><a href={href} class="footer-link">{ name }</a></li>
                            }) }
                        </ul>
                    </div>

                    <div class="footer-contact">
                        <h4 class="serif">{"Get in Touch"}</h4>
                        <ul>
                            <li>
                                <span class="footer-contact-label">{"Address:"}</span>
                                <p>{ config::ADDRESS }</p>
                            </li>
                            <li>
                                <span class="footer-contact-label">{"Email:"}</span>
                                <p>
                                    <a href={config::booking_mailto()} class="footer-link">
                                        { config::CONTACT_EMAIL }
                                    </a>
                                </p>
                            </li>
                            <li>
                                <span class="footer-contact-label">{"Phone:"}</span>
                                <p>
                                    <a href={config::CONTACT_PHONE_LINK} class="footer-link">
                                        { config::CONTACT_PHONE }
                                    </a>
                                </p>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="footer-rule"></div>

                <div class="footer-bottom">
                    <p>{ format!("© {year} Balhir Apartment. Made with ♥ in Ethiopia.") }</p>
                    <button class="footer-top" onclick={scroll_to_top}>
                        {"Back to top"}
                        <span class="footer-top-arrow">{"↑"}</span>
                    </button>
                </div>
            </div>

            <style>
                {r#"
                    .footer {
                        position: relative;
                        padding: 5rem 0 2.5rem;
                        border-top: 1px solid var(--border);
                        background: linear-gradient(to top, rgba(22, 18, 16, 0.5), transparent);
                        overflow: hidden;
                    }

                    .footer-grid {
                        display: grid;
                        gap: 3rem;
                        margin-bottom: 4rem;
                    }

                    .footer-logo {
                        font-size: 2.2rem;
                        letter-spacing: 0.02em;
                    }

                    .footer-logo:hover {
                        color: var(--primary);
                    }

                    .footer-logo-dot {
                        color: var(--primary);
                    }

                    .footer-blurb {
                        color: var(--muted);
                        max-width: 24rem;
                        margin: 1.5rem 0;
                    }

                    .footer-social {
                        display: flex;
                        gap: 0.75rem;
                    }

                    .footer-social-link {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 2.75rem;
                        height: 2.75rem;
                        border-radius: 0.75rem;
                        background: var(--card);
                        border: 1px solid var(--border);
                        color: var(--muted);
                        font-size: 0.75rem;
                        letter-spacing: 0.1em;
                        transition: color 0.3s ease, border-color 0.3s ease, transform 0.3s ease;
                    }

                    .footer-social-link:hover {
                        color: var(--primary);
                        border-color: rgba(201, 151, 61, 0.5);
                        transform: scale(1.08);
                    }

                    .footer h4 {
                        font-size: 1.1rem;
                        margin-bottom: 1.5rem;
                    }

                    .footer ul {
                        list-style: none;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        font-size: 0.9rem;
                    }

                    .footer-link {
                        position: relative;
                        color: var(--muted);
                        transition: color 0.3s ease;
                    }

                    .footer-link::after {
                        content: '';
                        position: absolute;
                        left: 0;
                        bottom: -2px;
                        width: 0;
                        height: 1px;
                        background: var(--primary);
                        transition: width 0.3s ease;
                    }

                    .footer-link:hover {
                        color: var(--primary);
                    }

                    .footer-link:hover::after {
                        width: 100%;
                    }

                    .footer-contact-label {
                        color: var(--muted);
                        font-size: 0.8rem;
                    }

                    .footer-contact p {
                        margin-top: 0.25rem;
                    }

                    .footer-rule {
                        height: 1px;
                        background: linear-gradient(to right, transparent, var(--border), transparent);
                        margin-bottom: 2rem;
                    }

                    .footer-bottom {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1rem;
                        color: var(--muted);
                        font-size: 0.85rem;
                    }

                    .footer-top {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: none;
                        border: 1px solid transparent;
                        border-radius: 0.5rem;
                        padding: 0.5rem 1rem;
                        color: var(--muted);
                        font-size: 0.85rem;
                        transition: color 0.3s ease, border-color 0.3s ease;
                    }

                    .footer-top:hover {
                        color: var(--primary);
                        border-color: var(--border);
                    }

                    .footer-top-arrow {
                        animation: footer-nudge 1.5s ease-in-out infinite;
                    }

                    @keyframes footer-nudge {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-3px); }
                    }

                    @media (min-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 5fr 3fr 4fr;
                        }

                        .footer-bottom {
                            flex-direction: row;
                            justify-content: space-between;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}
