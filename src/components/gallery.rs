use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::components::animated_text::AnimatedText;
use crate::motion::hooks::{use_in_view, InViewOptions};

struct GalleryImage {
    src: &'static str,
    title: &'static str,
    category: &'static str,
}

const IMAGES: [GalleryImage; 4] = [
    GalleryImage {
        src: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?q=80&w=1600&auto=format&fit=crop",
        title: "Living Space",
        category: "Interior",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1505693416388-ac5ce068fe85?q=80&w=1600&auto=format&fit=crop",
        title: "Master Suite",
        category: "Bedroom",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1556911220-bff31c812dba?q=80&w=1600&auto=format&fit=crop",
        title: "Gourmet Kitchen",
        category: "Kitchen",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?q=80&w=2000&auto=format&fit=crop",
        title: "Rooftop Views",
        category: "Terrace",
    },
];

const GRID_SPANS: [&str; 4] = ["span-tall", "span-half", "span-half", "span-wide"];

/// Lightbox navigation wraps modulo the image count.
fn next_index(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        (current + 1) % count
    }
}

fn prev_index(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        (current + count - 1) % count
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let section = use_node_ref();
    let in_view = use_in_view(section.clone(), InViewOptions::default());
    let selected = use_state(|| None::<usize>);

    // Keyboard navigation while the lightbox is open.
    {
        let dep = *selected;
        let selected = selected.clone();
        use_effect_with_deps(
            move |open: &Option<usize>| {
                let mut listener = None;
                if let Some(current) = *open {
                    listener = crate::motion::events::EventHandle::on_document(
                        "keydown",
                        move |event| {
                            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|k| k.key())
                            else {
                                return;
                            };
                            match key.as_str() {
                                "Escape" => selected.set(None),
                                "ArrowRight" => {
                                    selected.set(Some(next_index(current, IMAGES.len())))
                                }
                                "ArrowLeft" => {
                                    selected.set(Some(prev_index(current, IMAGES.len())))
                                }
                                _ => {}
                            }
                        },
                    );
                }
                move || drop(listener)
            },
            dep,
        );
    }

    let close = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };
    let go_next = {
        let selected = selected.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            if let Some(current) = *selected {
                selected.set(Some(next_index(current, IMAGES.len())));
            }
        })
    };
    let go_prev = {
        let selected = selected.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            if let Some(current) = *selected {
                selected.set(Some(prev_index(current, IMAGES.len())));
            }
        })
    };

    html! {
        <>
            <section ref={section} id="gallery" class="gallery section-block">
                <div class="container">
                    <div class="gallery-header">
                        <div>
                            <div class={classes!("section-heading", "rise-in", in_view.then_some("revealed"))}>
                                <span class="label-rule"></span>
                                <span class="section-label">{"Gallery"}</span>
                            </div>
                            <h2 class="gallery-title">
                                <AnimatedText text="Explore Our" delay={0.1} />
                                <br />
                                <span class="text-gradient">
                                    <AnimatedText text="Spaces" delay={0.3} />
                                </span>
                            </h2>
                        </div>
                        <p class={classes!("gallery-sub", "rise-in", in_view.then_some("revealed"))}
                            style="transition-delay: 0.4s;">
                            {"Every corner tells a story of elegance and thoughtful design."}
                        </p>
                    </div>

                    <div class="gallery-grid">
                        { for IMAGES.iter().enumerate().map(|(i, image)| {
                            let style = format!("transition-delay: {:.2}s;", i as f64 * 0.15);
                            let open = {
                                let selected = selected.clone();
                                Callback::from(move |_: MouseEvent| selected.set(Some(i)))
                            };
                            html! {
                                <div
                                    class={classes!("gallery-item", GRID_SPANS[i], "rise-in", in_view.then_some("revealed"))}
                                    {style}
                                    onclick={open}
                                >
                                    <img src={image.src} alt={image.title} loading="lazy" />
                                    <div class="gallery-item-shade"></div>
                                    <div class="gallery-item-caption">
                                        <span class="gallery-item-category">{ image.category }</span>
                                        <h3>{ image.title }</h3>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            </section>

            { if let Some(index) = *selected {
                let image = &IMAGES[index];
                html! {
                    <div class="lightbox" onclick={close.clone()}>
                        <button class="lightbox-close" onclick={close.clone()}>{"×"}</button>
                        <button class="lightbox-nav lightbox-prev" onclick={go_prev}>{"←"}</button>
                        <button class="lightbox-nav lightbox-next" onclick={go_next}>{"→"}</button>
                        <div class="lightbox-stage" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                            <img src={image.src} alt={image.title} />
                        </div>
                        <div class="lightbox-caption">
                            <span class="gallery-item-category">{ image.category }</span>
                            <h3>{ image.title }</h3>
                            <p>{ format!("{} / {}", index + 1, IMAGES.len()) }</p>
                        </div>
                    </div>
                }
            } else {
                html! {}
            } }

            <style>
                {r#"
                    .gallery-header {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        margin-bottom: 4rem;
                    }

                    .gallery-title {
                        font-size: clamp(2.5rem, 6vw, 3.75rem);
                        line-height: 1.15;
                    }

                    .gallery-sub {
                        color: var(--muted);
                        max-width: 28rem;
                    }

                    .gallery-grid {
                        display: grid;
                        gap: 1rem;
                    }

                    .gallery-item {
                        position: relative;
                        border-radius: 1rem;
                        overflow: hidden;
                        cursor: pointer;
                        aspect-ratio: 4 / 3;
                        transition-property: opacity, transform;
                    }

                    .gallery-item img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.8s cubic-bezier(0.25, 0.1, 0.25, 1);
                    }

                    .gallery-item:hover img {
                        transform: scale(1.08);
                    }

                    .gallery-item-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(12, 10, 8, 0.9), rgba(12, 10, 8, 0.2) 50%, transparent);
                        opacity: 0;
                        transition: opacity 0.7s ease;
                    }

                    .gallery-item:hover .gallery-item-shade {
                        opacity: 1;
                    }

                    .gallery-item-caption {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        justify-content: flex-end;
                        padding: 1.5rem;
                        opacity: 0;
                        transform: translateY(1rem);
                        transition: opacity 0.5s ease, transform 0.5s ease;
                    }

                    .gallery-item:hover .gallery-item-caption {
                        opacity: 1;
                        transform: translateY(0);
                    }

                    .gallery-item-category {
                        color: var(--primary);
                        font-size: 0.7rem;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                    }

                    .gallery-item-caption h3 {
                        font-size: 1.6rem;
                        margin-top: 0.5rem;
                    }

                    .lightbox {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(12, 10, 8, 0.98);
                        backdrop-filter: blur(24px);
                        animation: lightbox-in 0.3s ease;
                    }

                    @keyframes lightbox-in {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }

                    .lightbox-stage img {
                        max-width: 90vw;
                        max-height: 80vh;
                        object-fit: contain;
                        border-radius: 1rem;
                        animation: stage-in 0.4s cubic-bezier(0.25, 0.1, 0.25, 1);
                    }

                    @keyframes stage-in {
                        from {
                            opacity: 0;
                            transform: scale(0.9) translateY(1rem);
                        }
                        to {
                            opacity: 1;
                            transform: scale(1) translateY(0);
                        }
                    }

                    .lightbox-close,
                    .lightbox-nav {
                        position: absolute;
                        z-index: 10;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        background: rgba(22, 18, 16, 0.5);
                        border: 1px solid var(--border);
                        color: var(--foreground);
                        font-size: 1.2rem;
                        transition: color 0.3s ease, border-color 0.3s ease;
                    }

                    .lightbox-close:hover,
                    .lightbox-nav:hover {
                        color: var(--primary);
                        border-color: var(--primary);
                    }

                    .lightbox-close {
                        top: 1.5rem;
                        right: 1.5rem;
                    }

                    .lightbox-prev {
                        left: 1rem;
                    }

                    .lightbox-next {
                        right: 1rem;
                    }

                    .lightbox-caption {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        text-align: center;
                    }

                    .lightbox-caption h3 {
                        font-size: 1.5rem;
                        margin-top: 0.5rem;
                    }

                    .lightbox-caption p {
                        color: var(--muted);
                        font-size: 0.85rem;
                        margin-top: 0.5rem;
                    }

                    @media (min-width: 768px) {
                        .gallery-header {
                            flex-direction: row;
                            align-items: flex-end;
                            justify-content: space-between;
                        }

                        .gallery-grid {
                            grid-template-columns: repeat(12, 1fr);
                        }

                        .gallery-item.span-tall {
                            grid-column: span 7;
                            grid-row: span 2;
                            aspect-ratio: 4 / 5;
                        }

                        .gallery-item.span-half {
                            grid-column: span 5;
                            aspect-ratio: 1;
                        }

                        .gallery-item.span-wide {
                            grid-column: span 12;
                            aspect-ratio: 21 / 9;
                        }

                        .lightbox-prev {
                            left: 2rem;
                        }

                        .lightbox-next {
                            right: 2rem;
                        }
                    }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_the_first_image() {
        assert_eq!(next_index(0, 4), 1);
        assert_eq!(next_index(2, 4), 3);
        assert_eq!(next_index(3, 4), 0);
    }

    #[test]
    fn prev_wraps_to_the_last_image() {
        assert_eq!(prev_index(3, 4), 2);
        assert_eq!(prev_index(1, 4), 0);
        assert_eq!(prev_index(0, 4), 3);
    }

    #[test]
    fn empty_collections_stay_at_zero() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }

    #[test]
    fn grid_has_a_span_per_image() {
        assert_eq!(IMAGES.len(), GRID_SPANS.len());
    }
}
