use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::FaqEntry;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" aria-expanded={props.is_open.to_string()} onclick={toggle}>
                <h3 class="question-text">{props.entry.question}</h3>
                <span class="toggle-icon">{"⌄"}</span>
            </button>
            {
                if props.is_open {
                    html! {
                        <div class="faq-answer">
                            <p>{props.entry.answer}</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqSectionProps {
    pub entries: &'static [FaqEntry],
    pub expanded: Option<usize>,
    pub on_toggle: Callback<usize>,
}

#[function_component(FaqSection)]
pub fn faq_section(props: &FaqSectionProps) -> Html {
    html! {
        <section id="faq" class="page-section faq-section" data-animate="true">
            <div class="section-inner narrow">
                <h2 class="section-title">{"Frequently Asked Questions About Our Nursing Programs"}</h2>
                <div class="faq-list">
                    {
                        props.entries.iter().enumerate().map(|(idx, entry)| {
                            let on_toggle = props.on_toggle.reform(move |_| idx);
                            html! {
                                <FaqItem
                                    key={idx}
                                    entry={*entry}
                                    is_open={props.expanded == Some(idx)}
                                    {on_toggle}
                                />
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .faq-item {
                    border: 1px solid #e2e8f0;
                    border-radius: 8px;
                    overflow: hidden;
                }
                .faq-question {
                    width: 100%;
                    padding: 1rem 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    cursor: pointer;
                    text-align: left;
                }
                .faq-question:hover {
                    background: #f8fafc;
                }
                .question-text {
                    font-size: 1rem;
                    font-weight: 700;
                    color: #0f172a;
                    padding-right: 0.75rem;
                    margin: 0;
                }
                .toggle-icon {
                    flex-shrink: 0;
                    font-size: 1.25rem;
                    transition: transform 0.2s ease;
                }
                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }
                .faq-answer {
                    padding: 1rem 1.5rem;
                    border-top: 1px solid #e2e8f0;
                    background: #f8fafc;
                    animation: fadeIn 0.3s ease-out;
                }
                .faq-answer p {
                    color: #475569;
                    font-size: 0.875rem;
                    line-height: 1.6;
                    margin: 0;
                }
                "#}
            </style>
        </section>
    }
}
