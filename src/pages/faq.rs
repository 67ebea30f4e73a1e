use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{ props.question.clone() }</span>
                <span class="toggle-icon">{ if *is_open { "−" } else { "+" } }</span>
            </button>
            <div class="faq-answer">
                <p>{ props.answer.clone() }</p>
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    html! {
        <section id="faq" class="faq-section">
            <style>
                {r#"
                .faq-section {
                    padding: 5rem 1rem;
                    background: #ffffff;
                }
                .faq-inner {
                    max-width: 680px;
                    margin: 0 auto;
                }
                .faq-inner h2 {
                    text-align: center;
                    font-size: 2.2rem;
                    color: #102a52;
                    margin-bottom: 2.5rem;
                }
                .faq-item {
                    background: #fbfcfe;
                    border: 1px solid #e5e9f0;
                    border-radius: 12px;
                    margin-bottom: 0.75rem;
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }
                .faq-item:hover {
                    border-color: rgba(58, 111, 184, 0.4);
                }
                .faq-question {
                    width: 100%;
                    padding: 1.1rem 1.4rem;
                    background: none;
                    border: none;
                    color: #102a52;
                    font-size: 1rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .faq-question:hover {
                    color: #3a6fb8;
                }
                .toggle-icon {
                    font-size: 1.3rem;
                    color: #3a6fb8;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.4s ease;
                    padding: 0 1.4rem;
                }
                .faq-item.open .faq-answer {
                    max-height: 500px;
                    padding: 0 1.4rem 1.1rem;
                }
                .faq-answer p {
                    color: #6b7687;
                    line-height: 1.6;
                    margin: 0;
                }
                "#}
            </style>
            <div class="faq-inner">
                <h2>{"Frequently Asked Questions"}</h2>
                {
                    for content::FAQS.iter().map(|(q, a)| html! {
                        <FaqItem question={*q} answer={*a} />
                    })
                }
            </div>
        </section>
    }
}
