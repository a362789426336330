use gloo_timers::callback::Timeout;
use yew::prelude::*;

const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub title: AttrValue,
    pub body: AttrValue,
    pub visible: bool,
    pub on_dismiss: Callback<()>,
}

/// Fixed-position confirmation notification. Slides in when `visible`
/// flips true and asks to be dismissed after a few seconds; the pending
/// timer is dropped (cancelled) if the toast hides first.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |visible| {
                let mut pending = None;
                if *visible {
                    pending = Some(Timeout::new(AUTO_DISMISS_MS, move || on_dismiss.emit(())));
                }
                move || drop(pending)
            },
            props.visible,
        );
    }

    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(()))
    };

    html! {
        <>
            <div class={classes!("toast", props.visible.then_some("toast-visible"))} role="status">
                <span class="toast-check">{"✓"}</span>
                <div class="toast-text">
                    <p class="toast-title">{ props.title.clone() }</p>
                    <p class="toast-body">{ props.body.clone() }</p>
                </div>
                <button class="toast-close" onclick={dismiss}>{"×"}</button>
            </div>
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        bottom: 2rem;
                        right: 2rem;
                        z-index: 200;
                        display: flex;
                        align-items: flex-start;
                        gap: 0.9rem;
                        max-width: 340px;
                        padding: 1rem 1.2rem;
                        border-radius: 1rem;
                        background: rgba(22, 18, 16, 0.92);
                        border: 1px solid var(--border);
                        backdrop-filter: blur(16px);
                        box-shadow: 0 16px 40px rgba(0, 0, 0, 0.45);
                        opacity: 0;
                        transform: translateY(1rem);
                        pointer-events: none;
                        transition: opacity 0.4s ease, transform 0.4s ease;
                    }

                    .toast-visible {
                        opacity: 1;
                        transform: translateY(0);
                        pointer-events: auto;
                    }

                    .toast-check {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 2rem;
                        height: 2rem;
                        flex-shrink: 0;
                        border-radius: 50%;
                        background: var(--primary-soft);
                        color: var(--primary);
                        font-weight: 600;
                    }

                    .toast-title {
                        font-weight: 600;
                        font-size: 0.95rem;
                    }

                    .toast-body {
                        color: var(--muted);
                        font-size: 0.85rem;
                        margin-top: 0.15rem;
                    }

                    .toast-close {
                        background: none;
                        border: none;
                        color: var(--muted);
                        font-size: 1.2rem;
                        line-height: 1;
                        padding: 0;
                    }

                    .toast-close:hover {
                        color: var(--foreground);
                    }
                "#}
            </style>
        </>
    }
}
