use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod motion {
    pub mod driver;
    pub mod events;
    pub mod frame;
    pub mod hooks;
    pub mod progress;
    pub mod reveal;
    pub mod spring;
    pub mod transform;
    pub mod visibility;
}
mod components {
    pub mod about;
    pub mod amenities;
    pub mod animated_text;
    pub mod contact;
    pub mod floating_elements;
    pub mod floor_plans;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod highlights;
    pub mod location;
    pub mod magnetic_button;
    pub mod parallax_image;
    pub mod scroll_progress;
    pub mod section_divider;
    pub mod sticky_cta;
    pub mod testimonials;
    pub mod toast;
}
mod pages {
    pub mod home;
}

use motion::hooks::use_scrolled_beyond;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        // A one-page site: everything lives on the home route and the
        // sections are reached by in-page anchors.
        Route::Home | Route::NotFound => html! { <Home /> },
    }
}

const NAV_LINKS: [(&str, &str); 5] = [
    ("Home", "#home"),
    ("About", "#about"),
    ("Amenities", "#amenities"),
    ("Gallery", "#gallery"),
    ("Location", "#location"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let is_scrolled = use_scrolled_beyond(50.0);
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <>
            <nav class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
                <div class="nav-content">
                    <a href="#home" class="nav-logo serif">
                        {"Balhir"}<span class="nav-logo-dot">{"."}</span>
                    </a>

                    <div class="nav-links">
                        { for NAV_LINKS.iter().enumerate().map(|(i, &(name, href))| {
                            let style = format!("animation-delay: {:.1}s;", 0.1 * i as f64);
                            html! {
                                <a href={href} class="nav-link nav-enter" {style}>{ name }</a>
                            }
                        }) }
                    </div>

                    <a href="#contact" class="btn btn-outline nav-book nav-enter" style="animation-delay: 0.6s;">
                        {"Book Now"}
                    </a>

                    <button class="burger-menu" onclick={toggle_menu} aria-label="Open menu">
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>

            { if *menu_open {
                html! {
                    <div class="mobile-menu">
                        <div class="mobile-menu-top">
                            <span class="nav-logo serif">
                                {"Balhir"}<span class="nav-logo-dot">{"."}</span>
                            </span>
                            <button class="mobile-menu-close" onclick={close_menu.clone()} aria-label="Close menu">
                                {"×"}
                            </button>
                        </div>
                        <div class="mobile-menu-links">
                            { for NAV_LINKS.iter().enumerate().map(|(i, &(name, href))| {
                                let style = format!("animation-delay: {:.1}s;", 0.1 * i as f64);
                                html! {
                                    <a
                                        href={href}
                                        class="mobile-menu-link nav-enter"
                                        {style}
                                        onclick={close_menu.clone()}
                                    >
                                        { name }
                                    </a>
                                }
                            }) }
                            <a
                                href="#contact"
                                class="btn btn-gold nav-enter"
                                style="animation-delay: 0.6s;"
                                onclick={close_menu}
                            >
                                {"Book Now"}
                            </a>
                        </div>
                    </div>
                }
            } else {
                html! {}
            } }

            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1.5rem 0;
                        transition: background 0.5s ease, padding 0.5s ease,
                            border-color 0.5s ease, backdrop-filter 0.5s ease;
                        border-bottom: 1px solid transparent;
                    }

                    .top-nav.scrolled {
                        padding: 1rem 0;
                        background: rgba(12, 10, 8, 0.9);
                        backdrop-filter: blur(16px);
                        border-bottom-color: rgba(42, 36, 30, 0.5);
                    }

                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 2rem;
                    }

                    .nav-logo {
                        font-size: 1.75rem;
                        letter-spacing: 0.02em;
                    }

                    .nav-logo-dot {
                        color: var(--primary);
                    }

                    .nav-links {
                        display: none;
                        align-items: center;
                        gap: 2rem;
                    }

                    .nav-link {
                        font-size: 0.8rem;
                        font-weight: 500;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        color: var(--muted);
                        transition: color 0.3s ease;
                    }

                    .nav-link:hover {
                        color: var(--primary);
                    }

                    .nav-book {
                        display: none;
                        padding: 0.7rem 1.5rem;
                    }

                    .nav-enter {
                        animation: nav-drop 0.5s ease backwards;
                    }

                    @keyframes nav-drop {
                        from {
                            opacity: 0;
                            transform: translateY(-1.25rem);
                        }
                        to {
                            opacity: 1;
                            transform: translateY(0);
                        }
                    }

                    .burger-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        padding: 0.5rem;
                    }

                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: var(--foreground);
                    }

                    .mobile-menu {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        background: var(--background);
                        display: flex;
                        flex-direction: column;
                        padding: 1.5rem;
                        animation: menu-fade 0.3s ease;
                    }

                    @keyframes menu-fade {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }

                    .mobile-menu-top {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .mobile-menu-close {
                        background: none;
                        border: none;
                        color: var(--foreground);
                        font-size: 2rem;
                        line-height: 1;
                    }

                    .mobile-menu-links {
                        flex: 1;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 2rem;
                    }

                    .mobile-menu-link {
                        font-family: var(--font-serif);
                        font-size: 1.9rem;
                        transition: color 0.3s ease;
                    }

                    .mobile-menu-link:hover {
                        color: var(--primary);
                    }

                    @media (min-width: 768px) {
                        .nav-links {
                            display: flex;
                        }

                        .nav-book {
                            display: inline-flex;
                        }

                        .burger-menu {
                            display: none;
                        }
                    }
                "#}
            </style>
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Readable panics in the browser console.
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
