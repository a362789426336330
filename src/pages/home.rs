use yew::prelude::*;

use crate::components::about::About;
use crate::components::amenities::Amenities;
use crate::components::contact::Contact;
use crate::components::floating_elements::FloatingElements;
use crate::components::floor_plans::FloorPlans;
use crate::components::footer::Footer;
use crate::components::gallery::Gallery;
use crate::components::hero::Hero;
use crate::components::highlights::Highlights;
use crate::components::location::Location;
use crate::components::scroll_progress::ScrollProgressBar;
use crate::components::section_divider::{DividerVariant, SectionDivider};
use crate::components::sticky_cta::StickyCta;
use crate::components::testimonials::Testimonials;

/// The single page: every section in reading order, plus the fixed chrome
/// (progress indicators, floating decor, sticky call-to-action).
#[function_component(Home)]
pub fn home() -> Html {
    // Land at the top on initial mount.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <main class="home">
            <ScrollProgressBar />
            <FloatingElements />

            <Hero />
            <About />
            <SectionDivider variant={DividerVariant::Gradient} />
            <Highlights />
            <Amenities />
            <SectionDivider variant={DividerVariant::Wave} />
            <FloorPlans />
            <Gallery />
            <SectionDivider variant={DividerVariant::Dots} />
            <Testimonials />
            <Location />
            <SectionDivider variant={DividerVariant::Line} />
            <Contact />
            <Footer />

            <StickyCta />
        </main>
    }
}
