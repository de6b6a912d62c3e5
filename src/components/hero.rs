use log::warn;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::content::HERO_STATS;
use crate::effects::blur::{blur_radius, quantize_blur};
use crate::effects::listener::{viewport_height, WindowListener};
use crate::error::PageError;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_apply: Callback<()>,
}

fn current_blur(hero: &NodeRef) -> Result<f64, PageError> {
    let hero = hero
        .cast::<Element>()
        .ok_or_else(|| PageError::MissingElement("hero".to_string()))?;
    let bottom = hero.get_bounding_client_rect().bottom();
    Ok(quantize_blur(blur_radius(bottom, viewport_height()?)))
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let hero_ref = use_node_ref();
    let blur = use_state_eq(|| 0.0_f64);

    {
        let hero_ref = hero_ref.clone();
        let blur = blur.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || match current_blur(&hero_ref) {
                    Ok(radius) => blur.set(radius),
                    Err(e) => warn!("Hero blur skipped: {}", e),
                };

                // Mounting mid-page starts with the matching blur.
                update();

                let scroll_callback = Closure::wrap(Box::new(update) as Box<dyn FnMut()>);

                let listener = WindowListener::attach("scroll", scroll_callback)
                    .map_err(|e| warn!("Hero blur disabled: {}", e))
                    .ok();
                move || drop(listener)
            },
            (),
        );
    }

    let start_application = {
        let on_apply = props.on_apply.clone();
        Callback::from(move |_: MouseEvent| on_apply.emit(()))
    };

    let background_style = format!(
        "background-image: url('{}'); filter: blur({:.1}px);",
        config::HERO_IMAGE_URL,
        *blur
    );

    html! {
        <section class="hero" ref={hero_ref}>
            <div class="hero-background" style={background_style}></div>
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <span class="hero-badge intro" style="animation-delay: 0.2s;">
                    {"Professional Nursing Education"}
                </span>
                <h1 class="hero-headline intro" style="animation-delay: 0.3s;">
                    {"Become a Healthcare Professional"}
                </h1>
                <p class="hero-subheadline intro" style="animation-delay: 0.5s;">
                    {format!(
                        "Join {} and receive world-class SANC-accredited nursing education in {}, {}.",
                        config::ACADEMY_NAME, config::LOCALITY, config::REGION
                    )}
                </p>
                <div class="hero-cta-group">
                    <button class="hero-button primary intro" style="animation-delay: 0.7s;" onclick={start_application}>
                        {"Start Application →"}
                    </button>
                    <a href="#how-it-works" class="hero-button secondary intro" style="animation-delay: 0.85s;">
                        {"Learn More"}
                    </a>
                </div>
                <div class="hero-stats">
                    {
                        HERO_STATS.iter().enumerate().map(|(idx, stat)| {
                            let delay = format!("animation-delay: {:.1}s;", 0.9 + 0.1 * idx as f64);
                            html! {
                                <div class="stat-card intro" style={delay}>
                                    <div class="stat-value">{stat.value}</div>
                                    <p>{stat.label}</p>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                    background-attachment: fixed;
                    transition: filter 0.1s linear;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    text-align: center;
                }
                .hero-badge {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    background: #3b82f6;
                    color: #fff;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 600;
                    margin-bottom: 1.5rem;
                }
                .hero-headline {
                    font-size: clamp(2.25rem, 6vw, 3.75rem);
                    font-weight: 700;
                    color: #fff;
                    margin-bottom: 1.5rem;
                }
                .hero-subheadline {
                    font-size: 1.2rem;
                    color: #f3f4f6;
                    max-width: 42rem;
                    margin: 0 auto 2.5rem;
                }
                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                }
                .hero-button {
                    padding: 0.75rem 2rem;
                    border-radius: 8px;
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                    text-decoration: none;
                    transition: all 0.2s ease;
                }
                .hero-button.primary {
                    background: #2563eb;
                    color: #fff;
                    border: none;
                }
                .hero-button.primary:hover {
                    background: #1d4ed8;
                }
                .hero-button.secondary {
                    border: 2px solid #fff;
                    color: #fff;
                }
                .hero-button.secondary:hover {
                    background: #fff;
                    color: #0f172a;
                }
                .hero-stats {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
                    gap: 2rem;
                    margin-top: 8rem;
                }
                .stat-card {
                    backdrop-filter: blur(4px);
                    background: rgba(255, 255, 255, 0.1);
                    border-radius: 8px;
                    padding: 1.5rem;
                    color: #fff;
                }
                .stat-value {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #93c5fd;
                    margin-bottom: 0.5rem;
                }
                .intro {
                    opacity: 0;
                    animation: heroIntro 0.8s ease-out forwards;
                }
                @keyframes heroIntro {
                    from {
                        opacity: 0;
                        transform: translateY(20px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }
                "#}
            </style>
        </section>
    }
}
