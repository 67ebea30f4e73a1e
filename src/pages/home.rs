use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::contact::ContactSection;
use crate::components::nav::scroll_to_section;
use crate::components::star_rating::StarRating;
use crate::content;
use crate::lead::LeadServiceHandle;
use crate::pages::faq::FaqSection;
use crate::submissions::SubmissionsCache;

#[function_component(HeroSection)]
fn hero_section() -> Html {
    html! {
        <header id="home" class="hero">
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 92vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding-top: 5rem;
                    background:
                        linear-gradient(to bottom,
                            rgba(12, 30, 58, 0.85),
                            rgba(12, 30, 58, 0.75),
                            rgba(7, 19, 38, 0.9)),
                        url('/assets/hero-bookstore.jpg') center / cover no-repeat;
                    text-align: center;
                    color: #ffffff;
                }
                .hero-content {
                    max-width: 760px;
                    padding: 0 1rem;
                }
                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.6rem;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(217, 165, 20, 0.3);
                    border-radius: 999px;
                    padding: 0.4rem 1.2rem;
                    margin-bottom: 2rem;
                    font-size: 0.85rem;
                    font-weight: 600;
                }
                .hero h1 {
                    font-size: 3.2rem;
                    line-height: 1.1;
                    margin: 0 0 1.2rem;
                }
                .hero h1 .accent {
                    color: #d9a514;
                }
                .hero-subtitle {
                    color: rgba(255, 255, 255, 0.75);
                    font-size: 1.15rem;
                    max-width: 560px;
                    margin: 0 auto 2.5rem;
                    line-height: 1.6;
                }
                .hero-cta-group {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                .hero-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.9rem 2rem;
                    border-radius: 12px;
                    font-size: 1rem;
                    font-weight: 700;
                    text-decoration: none;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }
                .hero-cta:hover {
                    transform: scale(1.04);
                }
                .hero-cta.primary {
                    background: #d9a514;
                    color: #1c1708;
                }
                .hero-cta.whatsapp {
                    background: #1fa855;
                    color: #ffffff;
                }
                .hero-cta.ghost {
                    border: 1px solid rgba(255, 255, 255, 0.4);
                    color: rgba(255, 255, 255, 0.85);
                }
                .hero-cta.ghost:hover {
                    background: rgba(255, 255, 255, 0.1);
                }
                .hero-address {
                    margin-top: 2.5rem;
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.85rem;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.2rem;
                    }
                }
                "#}
            </style>
            <div class="hero-content">
                <div class="hero-badge">
                    <StarRating rating={4} />
                    <span>{"4.0 · 350+ Google Reviews"}</span>
                </div>
                <h1>
                    {"Patna's Trusted"}<br />
                    <span class="accent">{"Book & Stationery"}</span>
                    {" Store"}
                </h1>
                <p class="hero-subtitle">
                    {"All school books, NCERT, competitive exam guides & stationery — \
                      available at prices every student can afford."}
                </p>
                <div class="hero-cta-group">
                    <a href={content::PHONE_HREF} class="hero-cta primary">{"📞 Call Now"}</a>
                    <a href={content::WHATSAPP_HREF} target="_blank" rel="noopener noreferrer" class="hero-cta whatsapp">
                        {"💬 WhatsApp Order"}
                    </a>
                    <a href={content::MAPS_HREF} target="_blank" rel="noopener noreferrer" class="hero-cta ghost">
                        {"📍 Get Directions"}
                    </a>
                </div>
                <div class="hero-address">{"📍 "}{ content::STORE_ADDRESS }</div>
            </div>
        </header>
    }
}

#[function_component(TrustSection)]
fn trust_section() -> Html {
    html! {
        <section class="trust-section">
            <style>
                {r#"
                .trust-section {
                    padding: 5rem 1rem;
                    background: #ffffff;
                }
                .trust-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                    text-align: center;
                }
                .trust-inner h2 {
                    font-size: 2.2rem;
                    color: #102a52;
                    margin: 0.5rem 0;
                }
                .trust-inner > p {
                    color: #6b7687;
                    max-width: 560px;
                    margin: 0 auto 3rem;
                }
                .trust-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 1.25rem;
                }
                .trust-card {
                    background: #fbfcfe;
                    border: 1px solid #e5e9f0;
                    border-radius: 16px;
                    padding: 1.5rem 1rem;
                    transition: box-shadow 0.3s ease, border-color 0.3s ease;
                }
                .trust-card:hover {
                    border-color: rgba(58, 111, 184, 0.4);
                    box-shadow: 0 8px 24px rgba(16, 42, 82, 0.1);
                }
                .trust-card .icon {
                    font-size: 2.2rem;
                    margin-bottom: 0.75rem;
                }
                .trust-card h3 {
                    font-size: 0.95rem;
                    color: #102a52;
                    margin: 0 0 0.5rem;
                }
                .trust-card p {
                    font-size: 0.8rem;
                    color: #6b7687;
                    line-height: 1.5;
                    margin: 0;
                }
                .section-label {
                    display: block;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    color: #3a6fb8;
                }
                "#}
            </style>
            <div class="trust-inner">
                <span class="section-label">{"Why Choose Us"}</span>
                <h2>{"Your Trusted Education Partner"}</h2>
                <p>{"Serving Patna students with quality books and stationery at unbeatable prices."}</p>
                <div class="trust-grid">
                    {
                        for content::TRUST_POINTS.iter().map(|pt| html! {
                            <div class="trust-card">
                                <div class="icon">{ pt.icon }</div>
                                <h3>{ pt.title }</h3>
                                <p>{ pt.desc }</p>
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct CategoriesProps {
    on_enquire: Callback<String>,
}

#[function_component(CategoriesSection)]
fn categories_section(props: &CategoriesProps) -> Html {
    let cards = content::CATEGORIES.iter().map(|cat| {
        let on_enquire = props.on_enquire.clone();
        let label = cat.label;
        let onclick = Callback::from(move |_: MouseEvent| {
            on_enquire.emit(label.to_string());
            scroll_to_section("contact");
        });
        html! {
            <button class="category-card" {onclick}>
                <div class="spine"></div>
                <div class="icon">{ cat.icon }</div>
                <h3>{ cat.label }</h3>
                <p>{"Tap to enquire"}</p>
            </button>
        }
    });

    html! {
        <section id="products" class="categories-section">
            <style>
                {r#"
                .categories-section {
                    padding: 5rem 1rem;
                    background: #eef4fb;
                }
                .categories-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                    text-align: center;
                }
                .categories-inner h2 {
                    font-size: 2.2rem;
                    color: #102a52;
                    margin: 0.5rem 0;
                }
                .categories-inner > p {
                    color: #6b7687;
                    margin: 0 auto 3rem;
                }
                .category-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 1.25rem;
                }
                .category-card {
                    background: #ffffff;
                    border: 1px solid #e5e9f0;
                    border-radius: 16px;
                    padding: 2rem 1.5rem;
                    cursor: pointer;
                    transition: transform 0.25s ease, box-shadow 0.25s ease;
                    font-family: inherit;
                }
                .category-card:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 12px 28px rgba(16, 42, 82, 0.14);
                }
                .category-card .spine {
                    width: 4px;
                    height: 2.5rem;
                    background: #102a52;
                    border-radius: 999px;
                    margin: 0 auto 1.25rem;
                    transition: background 0.3s ease, height 0.3s ease;
                }
                .category-card:hover .spine {
                    background: #3a6fb8;
                    height: 3.5rem;
                }
                .category-card .icon {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }
                .category-card h3 {
                    font-size: 1rem;
                    color: #102a52;
                    margin: 0;
                }
                .category-card p {
                    font-size: 0.75rem;
                    color: #6b7687;
                    margin: 0.4rem 0 0;
                }
                "#}
            </style>
            <div class="categories-inner">
                <span class="section-label">{"Browse Categories"}</span>
                <h2>{"Everything You Need"}</h2>
                <p>{"Click any category to enquire about availability or place an order."}</p>
                <div class="category-grid">
                    { for cards }
                </div>
            </div>
        </section>
    }
}

#[function_component(ReviewsSection)]
fn reviews_section() -> Html {
    // The list is doubled so the marquee loops without a visible seam.
    let doubled = content::TESTIMONIALS.iter().chain(content::TESTIMONIALS.iter());

    html! {
        <section id="reviews" class="reviews-section">
            <style>
                {r#"
                .reviews-section {
                    padding: 5rem 0;
                    background: #ffffff;
                    overflow: hidden;
                }
                .reviews-header {
                    text-align: center;
                    margin-bottom: 2.5rem;
                    padding: 0 1rem;
                }
                .reviews-header h2 {
                    font-size: 2.2rem;
                    color: #102a52;
                    margin: 0.5rem 0;
                }
                .reviews-score {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-top: 1rem;
                }
                .reviews-score .score {
                    font-size: 1.8rem;
                    font-weight: 800;
                    color: #102a52;
                }
                .reviews-score .count {
                    color: #6b7687;
                    font-size: 0.85rem;
                }
                .testimonial-track {
                    display: flex;
                    gap: 1.25rem;
                    width: max-content;
                    padding: 0 1.25rem;
                    animation: reviews-marquee 30s linear infinite;
                }
                .testimonial-track:hover {
                    animation-play-state: paused;
                }
                @keyframes reviews-marquee {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                .testimonial-card {
                    width: 19rem;
                    flex-shrink: 0;
                    background: #fbfcfe;
                    border: 1px solid #e5e9f0;
                    border-radius: 16px;
                    padding: 1.5rem;
                    text-align: left;
                }
                .testimonial-card .quote {
                    font-style: italic;
                    font-size: 0.9rem;
                    color: #243b5e;
                    line-height: 1.6;
                    margin: 0.75rem 0 1rem;
                }
                .testimonial-card .author {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.85rem;
                    font-weight: 600;
                    color: #102a52;
                }
                .testimonial-card .avatar {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    background: #102a52;
                    color: #ffffff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.75rem;
                    font-weight: 700;
                }
                .reviews-more {
                    text-align: center;
                    margin-top: 2.5rem;
                }
                .reviews-more a {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: #3a6fb8;
                    color: #ffffff;
                    padding: 0.75rem 1.5rem;
                    border-radius: 12px;
                    font-weight: 600;
                    font-size: 0.9rem;
                    text-decoration: none;
                    transition: transform 0.2s ease;
                }
                .reviews-more a:hover {
                    transform: scale(1.04);
                }
                "#}
            </style>
            <div class="reviews-header">
                <span class="section-label">{"What Customers Say"}</span>
                <h2>{"Student Reviews"}</h2>
                <div class="reviews-score">
                    <StarRating rating={4} />
                    <span class="score">{"4.0"}</span>
                    <span class="count">{"· 350+ Reviews"}</span>
                </div>
            </div>
            <div class="testimonial-track">
                {
                    for doubled.map(|t| html! {
                        <div class="testimonial-card">
                            <StarRating rating={t.rating} />
                            <p class="quote">{ format!("\"{}\"", t.text) }</p>
                            <div class="author">
                                <span class="avatar">{ t.author.chars().next().unwrap_or('?').to_string() }</span>
                                <span>{ t.author }</span>
                            </div>
                        </div>
                    })
                }
            </div>
            <div class="reviews-more">
                <a href={content::GOOGLE_REVIEWS_HREF} target="_blank" rel="noopener noreferrer">
                    {"⭐ Read More Reviews on Google"}
                </a>
            </div>
        </section>
    }
}

#[function_component(CtaBanner)]
fn cta_banner() -> Html {
    html! {
        <section class="cta-banner">
            <style>
                {r#"
                .cta-banner {
                    padding: 5rem 1rem;
                    background: #102a52;
                    text-align: center;
                    color: #ffffff;
                }
                .cta-banner h2 {
                    font-size: 2.6rem;
                    line-height: 1.2;
                    margin: 0 0 1rem;
                }
                .cta-banner h2 .accent {
                    color: #d9a514;
                }
                .cta-banner p {
                    color: rgba(255, 255, 255, 0.7);
                    max-width: 480px;
                    margin: 0 auto 2.5rem;
                    font-size: 1.1rem;
                }
                .cta-banner .cta-group {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                "#}
            </style>
            <h2>
                {"Need Books Today?"}<br />
                <span class="accent">{"Call Now or WhatsApp Us!"}</span>
            </h2>
            <p>{"We'll help you find exactly what you need — school books, NCERT, exam guides, or stationery."}</p>
            <div class="cta-group">
                <a href={content::PHONE_HREF} class="hero-cta primary">{"📞 "}{ content::PHONE }</a>
                <a href={content::WHATSAPP_HREF} target="_blank" rel="noopener noreferrer" class="hero-cta whatsapp">
                    {"💬 WhatsApp Order"}
                </a>
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
fn about_section() -> Html {
    html! {
        <section id="about" class="about-section">
            <style>
                {r#"
                .about-section {
                    padding: 5rem 1rem;
                    background: #ffffff;
                }
                .about-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .about-text h2 {
                    font-size: 2.2rem;
                    color: #102a52;
                    margin: 0.5rem 0 1.5rem;
                }
                .about-text p {
                    color: #6b7687;
                    line-height: 1.7;
                    margin-bottom: 1rem;
                }
                .about-stats {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin: 2rem 0;
                    text-align: center;
                }
                .about-stats .value {
                    font-size: 1.8rem;
                    font-weight: 700;
                    color: #102a52;
                }
                .about-stats .label {
                    font-size: 0.75rem;
                    color: #6b7687;
                    margin-top: 0.25rem;
                }
                .about-map iframe {
                    width: 100%;
                    aspect-ratio: 4 / 3;
                    border: 1px solid #e5e9f0;
                    border-radius: 16px;
                }
                .about-map p {
                    font-size: 0.8rem;
                    color: #6b7687;
                    text-align: center;
                    margin-top: 0.75rem;
                }
                @media (max-width: 900px) {
                    .about-inner {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <div class="about-inner">
                <div class="about-text">
                    <span class="section-label">{"Our Story"}</span>
                    <h2>{"Serving Patna Students for Years"}</h2>
                    <p>
                        {"Located in the heart of Bhootnath Road, ABC Book Center has been the \
                          go-to destination for students, parents, and teachers across Patna. We \
                          believe quality education should be accessible and affordable to everyone."}
                    </p>
                    <p>
                        {"Our store stocks a comprehensive range — from NCERT textbooks for Class 1 \
                          to 12, to competitive exam preparation books for UPSC, BPSC, SSC, Railway, \
                          and Bank exams. We also carry a wide variety of stationery and art & craft \
                          supplies."}
                    </p>
                    <p>
                        {"Our friendly staff is always ready to help you find exactly what you need. \
                          Can't find a specific book? Just call or WhatsApp us — we'll do our best \
                          to arrange it for you."}
                    </p>
                    <div class="about-stats">
                        <div><div class="value">{"350+"}</div><div class="label">{"Happy Customers"}</div></div>
                        <div><div class="value">{"4.0★"}</div><div class="label">{"Google Rating"}</div></div>
                        <div><div class="value">{"1000+"}</div><div class="label">{"Book Titles"}</div></div>
                    </div>
                </div>
                <div class="about-map">
                    <iframe
                        src={content::MAPS_EMBED}
                        loading="lazy"
                        referrerpolicy="no-referrer-when-downgrade"
                        title="ABC Book Center Location"
                    />
                    <p>{"📍 "}{ content::STORE_ADDRESS }</p>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let quick_links = content::NAV_LINKS.iter().map(|(label, section)| {
        let section = *section;
        let onclick = Callback::from(move |_: MouseEvent| scroll_to_section(section));
        html! {
            <button class="footer-link" {onclick}>{ *label }</button>
        }
    });

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    background: #071326;
                    color: rgba(255, 255, 255, 0.8);
                    padding: 3rem 1rem 2rem;
                }
                .footer-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                    margin-bottom: 2.5rem;
                }
                .footer-brand .name {
                    font-size: 1.2rem;
                    font-weight: 700;
                    color: #ffffff;
                }
                .footer-brand .hindi {
                    font-size: 0.8rem;
                    color: rgba(255, 255, 255, 0.5);
                    margin-bottom: 1rem;
                }
                .footer-brand p {
                    font-size: 0.85rem;
                    color: rgba(255, 255, 255, 0.6);
                    line-height: 1.6;
                }
                .site-footer h4 {
                    color: #ffffff;
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    margin: 0 0 1rem;
                }
                .footer-contact a,
                .footer-contact span {
                    display: block;
                    font-size: 0.85rem;
                    color: rgba(255, 255, 255, 0.8);
                    text-decoration: none;
                    margin-bottom: 0.6rem;
                }
                .footer-contact a:hover {
                    color: #d9a514;
                }
                .footer-link {
                    display: block;
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.85rem;
                    cursor: pointer;
                    padding: 0.25rem 0;
                    text-align: left;
                }
                .footer-link:hover {
                    color: #d9a514;
                }
                .footer-bottom {
                    max-width: 1100px;
                    margin: 0 auto;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding-top: 1.5rem;
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.4);
                    text-align: center;
                }
                "#}
            </style>
            <div class="footer-inner">
                <div class="footer-brand">
                    <div class="name">{ content::STORE_NAME }</div>
                    <div class="hindi">{ content::STORE_NAME_HINDI }</div>
                    <p>
                        {"Patna's trusted destination for school books, NCERT textbooks, \
                          competitive exam guides, and stationery."}
                    </p>
                </div>
                <div class="footer-contact">
                    <h4>{"Contact"}</h4>
                    <a href={content::PHONE_HREF}>{"📞 "}{ content::PHONE }</a>
                    <a href={content::WHATSAPP_HREF} target="_blank" rel="noopener noreferrer">
                        {"💬 WhatsApp Order"}
                    </a>
                    <span>{"📍 "}{ content::STORE_ADDRESS }</span>
                </div>
                <div>
                    <h4>{"Quick Links"}</h4>
                    { for quick_links }
                </div>
            </div>
            <div class="footer-bottom">
                {"© 2026 ABC Book Center. All rights reserved."}
            </div>
        </footer>
    }
}

#[function_component(FloatingElements)]
fn floating_elements() -> Html {
    html! {
        <>
            <style>
                {r#"
                .whatsapp-bubble {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 50;
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 50%;
                    background: #1fa855;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.6rem;
                    text-decoration: none;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.25);
                    transition: transform 0.2s ease;
                }
                .whatsapp-bubble:hover {
                    transform: scale(1.1);
                }
                .mobile-call-bar {
                    display: none;
                }
                @media (max-width: 768px) {
                    .mobile-call-bar {
                        display: flex;
                        position: fixed;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        z-index: 40;
                        background: #ffffff;
                        border-top: 1px solid #e5e9f0;
                    }
                    .mobile-call-bar a {
                        flex: 1;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 1rem;
                        font-size: 0.9rem;
                        font-weight: 700;
                        text-decoration: none;
                    }
                    .mobile-call-bar .call {
                        background: #102a52;
                        color: #ffffff;
                    }
                    .mobile-call-bar .whatsapp {
                        background: #1fa855;
                        color: #ffffff;
                    }
                    .whatsapp-bubble {
                        bottom: 5rem;
                    }
                }
                "#}
            </style>
            <a
                href={content::WHATSAPP_HREF}
                target="_blank"
                rel="noopener noreferrer"
                class="whatsapp-bubble"
                aria-label="WhatsApp Chat"
            >
                {"💬"}
            </a>
            <div class="mobile-call-bar">
                <a href={content::PHONE_HREF} class="call">{"📞 Call Now"}</a>
                <a href={content::WHATSAPP_HREF} target="_blank" rel="noopener noreferrer" class="whatsapp">
                    {"💬 WhatsApp"}
                </a>
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub service: LeadServiceHandle,
    pub cache: SubmissionsCache,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    // Lifted so category cards can prefill the enquiry textarea.
    let prefill = use_state(|| None::<AttrValue>);

    let on_enquire = {
        let prefill = prefill.clone();
        Callback::from(move |label: String| {
            prefill.set(Some(AttrValue::from(label)));
        })
    };

    html! {
        <main class="home-page">
            <HeroSection />
            <TrustSection />
            <CategoriesSection {on_enquire} />
            <ReviewsSection />
            <CtaBanner />
            <AboutSection />
            <ContactSection
                service={props.service.clone()}
                cache={props.cache.clone()}
                prefill={(*prefill).clone()}
            />
            <FaqSection />
            <Footer />
            <FloatingElements />
        </main>
    }
}
