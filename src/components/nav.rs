use yew::prelude::*;
use web_sys::MouseEvent;

use crate::config;

const SECTION_LINKS: [(&str, &str); 4] = [
    ("#programs", "Programs"),
    ("#requirements", "Requirements"),
    ("#how-it-works", "How It Works"),
    ("#faq", "FAQ"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_close_menu: Callback<()>,
    pub on_apply: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { menu_open, on_toggle_menu, on_close_menu, on_apply } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    // Anchor links keep their default so the browser still jumps to the section.
    let close_menu = {
        let on_close_menu = on_close_menu.clone();
        Callback::from(move |_: MouseEvent| on_close_menu.emit(()))
    };

    let apply = {
        let on_apply = on_apply.clone();
        Callback::from(move |_: MouseEvent| on_apply.emit(()))
    };

    let links = |class: &'static str| -> Html {
        SECTION_LINKS
            .iter()
            .map(|(href, label)| html! {
                <a href={*href} class={class} onclick={close_menu.clone()}>{*label}</a>
            })
            .collect()
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <span class="nav-monogram">{config::MONOGRAM}</span>
                    <span class="nav-name">{config::SHORT_NAME}</span>
                </a>

                <div class="nav-right">
                    { links("nav-link") }
                    <button class="nav-apply-button" onclick={apply.clone()}>
                        {"Apply Now"}
                    </button>
                </div>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { links("mobile-link") }
                            <button class="nav-apply-button full-width" onclick={apply}>
                                {"Apply Now"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    background: #ffffff;
                    border-bottom: 1px solid #e2e8f0;
                    z-index: 50;
                }
                .nav-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    text-decoration: none;
                }
                .nav-monogram {
                    width: 2rem;
                    height: 2rem;
                    background: #2563eb;
                    border-radius: 4px;
                    color: #fff;
                    font-size: 0.7rem;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .nav-name {
                    font-weight: 700;
                    color: #0f172a;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link, .mobile-link {
                    color: #475569;
                    font-weight: 500;
                    font-size: 0.875rem;
                    text-decoration: none;
                }
                .nav-link:hover, .mobile-link:hover {
                    color: #0f172a;
                }
                .nav-apply-button {
                    padding: 0.5rem 1.5rem;
                    background: #2563eb;
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    font-weight: 600;
                    font-size: 0.875rem;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .nav-apply-button:hover {
                    background: #1d4ed8;
                }
                .nav-apply-button.full-width {
                    width: 100%;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    cursor: pointer;
                    color: #0f172a;
                }
                .mobile-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1rem;
                    border-top: 1px solid #e2e8f0;
                    background: #fff;
                }
                @media (max-width: 768px) {
                    .nav-right {
                        display: none;
                    }
                    .burger-menu {
                        display: block;
                    }
                }
                @media (min-width: 769px) {
                    .mobile-menu {
                        display: none;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
