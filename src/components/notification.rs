use yew::prelude::*;
use web_sys::MouseEvent;
use gloo_timers::callback::Timeout;

const SUCCESS_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub kind: NoticeKind,
    pub message: AttrValue,
    pub on_dismiss: Callback<()>,
}

/// Transient, non-blocking notice. Success notices dismiss themselves
/// after five seconds; error notices stay until the user closes them.
#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    {
        let kind = props.kind;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = (kind == NoticeKind::Success).then(|| {
                    Timeout::new(SUCCESS_DISMISS_MS, move || on_dismiss.emit(()))
                });
                move || drop(timeout)
            },
            (props.kind, props.message.clone()),
        );
    }

    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_dismiss.emit(());
        })
    };

    let kind_class = match props.kind {
        NoticeKind::Success => "notice-success",
        NoticeKind::Error => "notice-error",
    };

    html! {
        <div class={classes!("notice", kind_class)} role="status">
            <style>
                {r#"
                .notice {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 0.9rem 1.1rem;
                    border-radius: 10px;
                    font-size: 0.9rem;
                    margin-bottom: 1rem;
                }
                .notice-success {
                    background: #eaf7ee;
                    border: 1px solid #bfe5cb;
                    color: #1d6b37;
                }
                .notice-error {
                    background: #fdeeee;
                    border: 1px solid #f2c4c4;
                    color: #9b2424;
                }
                .notice-close {
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 1rem;
                    cursor: pointer;
                    line-height: 1;
                    padding: 0.1rem 0.3rem;
                }
                "#}
            </style>
            <span>{ props.message.clone() }</span>
            <button class="notice-close" onclick={dismiss} aria-label="Dismiss">{"×"}</button>
        </div>
    }
}
