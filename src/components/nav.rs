use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};

use crate::content;

/// Smooth-scroll to a section by element id. Used by the nav, the footer
/// quick links and the category cards.
pub fn scroll_to_section(id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let window_clone = window.clone();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = window_clone.scroll_y().unwrap_or(0.0);
                is_scrolled.set(scroll_top > 20.0);
            }) as Box<dyn FnMut()>);

            window
                .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window
                    .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_buttons = content::NAV_LINKS.iter().map(|(label, section)| {
        let menu_open = menu_open.clone();
        let section = *section;
        let onclick = Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            scroll_to_section(section);
        });
        html! {
            <button class="nav-link" {onclick}>{ *label }</button>
        }
    });

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(6px);
                    transition: box-shadow 0.3s ease, background 0.3s ease;
                }
                .top-nav.scrolled {
                    background: #ffffff;
                    box-shadow: 0 4px 20px rgba(16, 42, 82, 0.12);
                    border-bottom: 1px solid #e5e9f0;
                }
                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0.75rem 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-brand {
                    display: flex;
                    flex-direction: column;
                    line-height: 1.2;
                }
                .nav-brand .brand-name {
                    font-size: 1.2rem;
                    font-weight: 700;
                    color: #102a52;
                }
                .nav-brand .brand-hindi {
                    font-size: 0.75rem;
                    color: #6b7687;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 1.25rem;
                }
                .nav-link {
                    background: none;
                    border: none;
                    font-size: 0.9rem;
                    font-weight: 500;
                    color: #243b5e;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }
                .nav-link:hover {
                    color: #102a52;
                }
                .nav-phone {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.4rem;
                    background: #102a52;
                    color: #fff;
                    padding: 0.5rem 1rem;
                    border-radius: 8px;
                    font-weight: 600;
                    font-size: 0.85rem;
                    text-decoration: none;
                    transition: box-shadow 0.2s ease;
                }
                .nav-phone:hover {
                    box-shadow: 0 4px 16px rgba(16, 42, 82, 0.35);
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    display: block;
                    width: 22px;
                    height: 2px;
                    background: #102a52;
                    margin: 5px 0;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: block;
                    }
                    .nav-links {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        align-items: stretch;
                        background: #ffffff;
                        border-top: 1px solid #e5e9f0;
                        padding: 0.5rem 1rem 1rem;
                        box-shadow: 0 12px 24px rgba(16, 42, 82, 0.15);
                    }
                    .nav-links.mobile-menu-open {
                        display: flex;
                    }
                    .nav-link {
                        text-align: left;
                        padding: 0.75rem 0.25rem;
                        font-size: 1rem;
                    }
                }
                "#}
            </style>
            <div class="nav-content">
                <div class="nav-brand">
                    <span class="brand-name">{ content::STORE_NAME }</span>
                    <span class="brand-hindi">{ content::STORE_NAME_HINDI }</span>
                </div>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for nav_buttons }
                    <a href={content::PHONE_HREF} class="nav-phone">
                        { "📞 " }{ content::PHONE }
                    </a>
                </div>
            </div>
        </nav>
    }
}
