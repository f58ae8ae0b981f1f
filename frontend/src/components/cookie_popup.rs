use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::content::{content, Language};

#[derive(Properties, PartialEq)]
pub struct CookiePopupProps {
    pub language: Language,
    /// Consent already given; the popup never shows.
    pub consented: bool,
    pub delay_ms: u32,
    pub on_accept: Callback<()>,
}

#[function_component(CookiePopup)]
pub fn cookie_popup(props: &CookiePopupProps) -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(consented, delay_ms)| {
                let timeout = if *consented {
                    visible.set(false);
                    None
                } else {
                    Some(Timeout::new(*delay_ms, move || visible.set(true)))
                };
                // Dropping an unfired Timeout cancels it.
                move || drop(timeout)
            },
            (props.consented, props.delay_ms),
        );
    }

    if !*visible {
        return html! {};
    }

    let copy = &content(props.language).consent;
    let accept = {
        let visible = visible.clone();
        let on_accept = props.on_accept.clone();
        Callback::from(move |_: MouseEvent| {
            visible.set(false);
            on_accept.emit(());
        })
    };

    html! {
        <div class="cookie-popup no-print">
            <style>
                {r#"
                    .cookie-popup {
                        position: fixed;
                        bottom: 24px;
                        inset-inline: 24px;
                        z-index: 45;
                        display: flex;
                        justify-content: center;
                        animation: popupIn 0.4s ease-out;
                    }
                    .cookie-card {
                        max-width: 560px;
                        background: rgba(30, 41, 59, 0.96);
                        border: 1px solid rgba(81, 122, 229, 0.4);
                        border-radius: 16px;
                        padding: 24px;
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.35);
                    }
                    .cookie-card h4 { margin: 0 0 8px; font-size: 1.2rem; }
                    .cookie-card p { color: #cbd5e1; margin: 0 0 16px; }
                    @keyframes popupIn {
                        from { transform: translateY(40px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            <div class="cookie-card" role="dialog" aria-live="polite">
                <h4>{ copy.title }</h4>
                <p>{ copy.message }</p>
                <button class="button" onclick={accept}>{ copy.accept }</button>
            </div>
        </div>
    }
}
