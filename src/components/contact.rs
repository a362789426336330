use chrono::NaiveDate;
use log::info;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent,
};
use yew::prelude::*;

use crate::components::animated_text::AnimatedText;
use crate::components::magnetic_button::MagneticButton;
use crate::components::toast::Toast;
use crate::motion::driver::SectionMotion;
use crate::motion::hooks::{use_in_view, InViewOptions};
use crate::motion::progress::TrackSpan;
use crate::motion::transform::map_range;

/// Pretend network latency for the simulated submission.
const SUBMIT_DELAY_MS: u32 = 1_500;

/// In-memory booking draft. Lives only as long as the form view; cleared on
/// submission, never persisted anywhere.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: String,
    pub message: String,
}

impl Default for FormDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            check_in: String::new(),
            check_out: String::new(),
            guests: "2".to_owned(),
            message: String::new(),
        }
    }
}

/// Nights between the drafted dates, when both parse and the order makes
/// sense. Display-only; the form submits regardless.
fn nights_between(check_in: &str, check_out: &str) -> Option<i64> {
    let check_in = NaiveDate::parse_from_str(check_in, "%Y-%m-%d").ok()?;
    let check_out = NaiveDate::parse_from_str(check_out, "%Y-%m-%d").ok()?;
    let nights = check_out.signed_duration_since(check_in).num_days();
    (nights > 0).then_some(nights)
}

fn input_setter(
    draft: &UseStateHandle<FormDraft>,
    apply: fn(&mut FormDraft, String),
) -> Callback<InputEvent> {
    let draft = draft.clone();
    Callback::from(move |event: InputEvent| {
        let input: HtmlInputElement = event.target_unchecked_into();
        let mut next = (*draft).clone();
        apply(&mut next, input.value());
        draft.set(next);
    })
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let section = use_node_ref();
    let form = use_node_ref();
    let glow = use_node_ref();
    let in_view = use_in_view(section.clone(), InViewOptions { margin_px: -100, once: true });
    let draft = use_state(FormDraft::default);
    let submitting = use_state(|| false);
    let toast_visible = use_state(|| false);

    // The form floats gently against the scroll; the background glow drifts
    // the other way.
    {
        let section = section.clone();
        let form = form.clone();
        let glow = glow.clone();
        use_effect_with_deps(
            move |_| {
                let mut motion = None;
                if let Some(region) = section.cast::<Element>() {
                    motion = Some(SectionMotion::direct(
                        region,
                        TrackSpan::EnterToExit,
                        move |p| {
                            if let Some(card) = form.cast::<HtmlElement>() {
                                let y = map_range(p, (0.0, 1.0), (50.0, -50.0));
                                let _ = card
                                    .style()
                                    .set_property("transform", &format!("translateY({y:.1}px)"));
                            }
                            if let Some(layer) = glow.cast::<HtmlElement>() {
                                let y = map_range(p, (0.0, 1.0), (0.0, -80.0));
                                let _ = layer
                                    .style()
                                    .set_property("transform", &format!("translateY({y:.1}px)"));
                            }
                        },
                    ));
                }
                move || drop(motion)
            },
            (),
        );
    }

    let on_submit = {
        let draft = draft.clone();
        let submitting = submitting.clone();
        let toast_visible = toast_visible.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);

            let payload = (*draft).clone();
            let draft = draft.clone();
            let submitting = submitting.clone();
            let toast_visible = toast_visible.clone();
            spawn_local(async move {
                // Stand-in for the eventual booking request; it never fails.
                gloo_timers::future::TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                match serde_json::to_string(&payload) {
                    Ok(body) => info!("booking inquiry submitted: {body}"),
                    Err(_) => info!("booking inquiry submitted"),
                }
                draft.set(FormDraft::default());
                submitting.set(false);
                toast_visible.set(true);
            });
        })
    };

    let dismiss_toast = {
        let toast_visible = toast_visible.clone();
        Callback::from(move |_| toast_visible.set(false))
    };

    let on_guests_change = {
        let draft = draft.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let mut next = (*draft).clone();
            next.guests = select.value();
            draft.set(next);
        })
    };
    let on_message_input = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            let area: HtmlTextAreaElement = event.target_unchecked_into();
            let mut next = (*draft).clone();
            next.message = area.value();
            draft.set(next);
        })
    };

    let nights = nights_between(&draft.check_in, &draft.check_out);

    let field_class = |index: usize| -> (Classes, String) {
        (
            classes!("form-field", "rise-in", in_view.then_some("revealed")),
            format!("transition-delay: {:.2}s;", 0.4 + index as f64 * 0.08),
        )
    };

    html! {
        <section ref={section} id="contact" class="contact section-block">
            <div ref={glow} class="contact-glow" aria-hidden="true"></div>

            <div class="container">
                <div class="contact-inner">
                    <div class="contact-header">
                        <div class={classes!("section-heading", "centered", "rise-in", in_view.then_some("revealed"))}>
                            <span class="label-rule"></span>
                            <span class="section-label">{"Book Your Stay"}</span>
                            <span class="label-rule"></span>
                        </div>
                        <h2 class="contact-title">
                            <AnimatedText text="Make a" delay={0.1} />
                            {" "}
                            <span class="text-gradient">
                                <AnimatedText text="Reservation" delay={0.2} />
                            </span>
                        </h2>
                        <p class={classes!("contact-sub", "rise-in", in_view.then_some("revealed"))}
                            style="transition-delay: 0.4s;">
                            {"Start your luxury experience at Balhir Apartment today."}
                        </p>
                    </div>

                    <form
                        ref={form}
                        class={classes!("contact-form", "glass", "rise-in", in_view.then_some("revealed"))}
                        style="transition-delay: 0.3s;"
                        onsubmit={on_submit}
                    >
                        <div class="form-grid">
                            {{
                                let (class, style) = field_class(0);
                                html! {
                                    <div {class} {style}>
                                        <label>{"Full Name"}</label>
                                        <input
                                            type="text"
                                            required={true}
                                            placeholder="Your name"
                                            value={draft.name.clone()}
                                            oninput={input_setter(&draft, |d, v| d.name = v)}
                                        />
                                    </div>
                                }
                            }}
                            {{
                                let (class, style) = field_class(1);
                                html! {
                                    <div {class} {style}>
                                        <label>{"Email"}</label>
                                        <input
                                            type="email"
                                            required={true}
                                            placeholder="your@email.com"
                                            value={draft.email.clone()}
                                            oninput={input_setter(&draft, |d, v| d.email = v)}
                                        />
                                    </div>
                                }
                            }}
                            {{
                                let (class, style) = field_class(2);
                                html! {
                                    <div {class} {style}>
                                        <label>{"Phone"}</label>
                                        <input
                                            type="tel"
                                            placeholder="+251 9XX XXX XXX"
                                            value={draft.phone.clone()}
                                            oninput={input_setter(&draft, |d, v| d.phone = v)}
                                        />
                                    </div>
                                }
                            }}
                            {{
                                let (class, style) = field_class(3);
                                html! {
                                    <div {class} {style}>
                                        <label>{"Guests"}</label>
                                        <select value={draft.guests.clone()} onchange={on_guests_change}>
                                            <option value="1" selected={draft.guests == "1"}>{"1 Guest"}</option>
                                            <option value="2" selected={draft.guests == "2"}>{"2 Guests"}</option>
                                            <option value="3" selected={draft.guests == "3"}>{"3 Guests"}</option>
                                            <option value="4" selected={draft.guests == "4"}>{"4+ Guests"}</option>
                                        </select>
                                    </div>
                                }
                            }}
                            {{
                                let (class, style) = field_class(4);
                                html! {
                                    <div {class} {style}>
                                        <label>{"Check-in Date"}</label>
                                        <input
                                            type="date"
                                            required={true}
                                            value={draft.check_in.clone()}
                                            oninput={input_setter(&draft, |d, v| d.check_in = v)}
                                        />
                                    </div>
                                }
                            }}
                            {{
                                let (class, style) = field_class(5);
                                html! {
                                    <div {class} {style}>
                                        <label>{"Check-out Date"}</label>
                                        <input
                                            type="date"
                                            required={true}
                                            value={draft.check_out.clone()}
                                            oninput={input_setter(&draft, |d, v| d.check_out = v)}
                                        />
                                        { if let Some(nights) = nights {
                                            html! {
                                                <span class="form-nights">
                                                    { format!("{} night{}", nights, if nights == 1 { "" } else { "s" }) }
                                                </span>
                                            }
                                        } else {
                                            html! {}
                                        } }
                                    </div>
                                }
                            }}
                            {{
                                let (class, style) = field_class(6);
                                html! {
                                    <div class={classes!(class, "form-field-wide")} {style}>
                                        <label>{"Special Requests"}</label>
                                        <textarea
                                            rows="4"
                                            placeholder="Any special requirements or requests..."
                                            value={draft.message.clone()}
                                            oninput={on_message_input}
                                        />
                                    </div>
                                }
                            }}
                        </div>

                        <div class={classes!("form-actions", "rise-in", in_view.then_some("revealed"))}
                            style="transition-delay: 0.8s;">
                            <MagneticButton strength={0.1}>
                                <button type="submit" class="btn btn-gold form-submit" disabled={*submitting}>
                                    { if *submitting {
                                        html! { <span class="form-spinner"></span> }
                                    } else {
                                        html! { <>{"Send Inquiry"}<span class="form-send">{"➤"}</span></> }
                                    } }
                                </button>
                            </MagneticButton>
                        </div>
                    </form>
                </div>
            </div>

            <Toast
                title="Inquiry Sent!"
                body="We'll get back to you within 24 hours."
                visible={*toast_visible}
                on_dismiss={dismiss_toast}
            />

            <style>
                {r#"
                    .contact-glow {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        background:
                            radial-gradient(500px 250px at 50% 100%, rgba(201, 151, 61, 0.08), transparent 70%),
                            radial-gradient(400px 400px at 100% 25%, rgba(201, 151, 61, 0.05), transparent 70%);
                    }

                    .contact-inner {
                        max-width: 60rem;
                        margin: 0 auto;
                    }

                    .contact-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }

                    .contact-title {
                        font-size: clamp(2.5rem, 6vw, 3.75rem);
                        margin-bottom: 1.5rem;
                    }

                    .contact-sub {
                        color: var(--muted);
                        font-size: 1.05rem;
                    }

                    .contact-form {
                        position: relative;
                        border-radius: 1.5rem;
                        padding: 2rem;
                        will-change: transform;
                    }

                    .form-grid {
                        display: grid;
                        gap: 1.5rem;
                    }

                    .form-field {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }

                    .form-field label {
                        font-size: 0.85rem;
                        color: var(--muted);
                        letter-spacing: 0.02em;
                    }

                    .form-field input,
                    .form-field select,
                    .form-field textarea {
                        width: 100%;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        background: rgba(12, 10, 8, 0.5);
                        border: 1px solid var(--border);
                        color: var(--foreground);
                        font-family: inherit;
                        font-size: 0.95rem;
                        transition: border-color 0.3s ease, box-shadow 0.3s ease;
                    }

                    .form-field input::placeholder,
                    .form-field textarea::placeholder {
                        color: var(--muted);
                    }

                    .form-field input:focus,
                    .form-field select:focus,
                    .form-field textarea:focus {
                        outline: none;
                        border-color: var(--primary);
                        box-shadow: 0 0 0 2px rgba(201, 151, 61, 0.2);
                    }

                    .form-field textarea {
                        resize: none;
                    }

                    .form-nights {
                        position: absolute;
                        top: 0;
                        right: 0;
                        font-size: 0.75rem;
                        color: var(--primary);
                    }

                    .form-actions {
                        display: flex;
                        justify-content: center;
                        margin-top: 2rem;
                    }

                    .form-submit {
                        min-width: 280px;
                    }

                    .form-send {
                        font-size: 0.8rem;
                        transition: transform 0.3s ease;
                    }

                    .form-submit:hover .form-send {
                        transform: translate(2px, -2px);
                    }

                    .form-spinner {
                        width: 1.2rem;
                        height: 1.2rem;
                        border: 2px solid rgba(26, 20, 8, 0.4);
                        border-top-color: #1a1408;
                        border-radius: 50%;
                        animation: form-spin 1s linear infinite;
                    }

                    @keyframes form-spin {
                        to { transform: rotate(360deg); }
                    }

                    @media (min-width: 768px) {
                        .contact-form {
                            padding: 3rem;
                        }

                        .form-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }

                        .form-field-wide {
                            grid-column: span 2;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_keeps_the_default_guest_count() {
        let draft = FormDraft::default();
        assert!(draft.name.is_empty());
        assert!(draft.check_in.is_empty());
        assert_eq!(draft.guests, "2");
    }

    #[test]
    fn nights_come_from_a_valid_date_pair() {
        assert_eq!(nights_between("2026-08-10", "2026-08-15"), Some(5));
        assert_eq!(nights_between("2026-08-10", "2026-08-11"), Some(1));
    }

    #[test]
    fn inverted_or_unparsable_dates_yield_nothing() {
        assert_eq!(nights_between("2026-08-15", "2026-08-10"), None);
        assert_eq!(nights_between("2026-08-10", "2026-08-10"), None);
        assert_eq!(nights_between("soon", "2026-08-10"), None);
        assert_eq!(nights_between("", ""), None);
    }

    #[test]
    fn submission_payload_carries_every_field() {
        let draft = FormDraft {
            name: "Hanna".into(),
            email: "hanna@example.com".into(),
            phone: "+251 911 000 000".into(),
            check_in: "2026-09-01".into(),
            check_out: "2026-09-04".into(),
            guests: "3".into(),
            message: "Late arrival".into(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        for key in [
            "name", "email", "phone", "check_in", "check_out", "guests", "message",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["guests"], "3");
    }
}
