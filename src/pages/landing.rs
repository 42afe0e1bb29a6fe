use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::nav::scroll_to_section;
use crate::components::notification::Severity;
use crate::components::scroll_effects::ScrollEffects;
use crate::components::testimonials::Testimonials;

fn hovered_card(event: &MouseEvent) -> Option<HtmlElement> {
    event.current_target().and_then(|t| t.dyn_into::<HtmlElement>().ok())
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub on_notify: Callback<(String, Severity)>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let go_to = |section_id: &'static str| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(section_id);
        })
    };

    let on_card_enter = Callback::from(|e: MouseEvent| {
        if let Some(card) = hovered_card(&e) {
            let _ = card.style().set_property("transform", "translateY(-8px) scale(1.02)");
        }
    });
    let on_card_leave = Callback::from(|e: MouseEvent| {
        if let Some(card) = hovered_card(&e) {
            let resting = if card.class_list().contains("featured") {
                "scale(1.05)"
            } else {
                "translateY(0) scale(1)"
            };
            let _ = card.style().set_property("transform", resting);
        }
    });

    html! {
        <div class="landing-page">
            <style>{ LANDING_STYLES }</style>

            // Hero
            <section id="inicio" class="hero">
                <div class="hero-container">
                    <div class="hero-content">
                        <h1>{ "Impulsamos el crecimiento de su empresa" }</h1>
                        <p class="hero-subtitle">
                            { "Consultoría estratégica, procesos y auditoría para organizaciones \
                               que quieren llegar más lejos." }
                        </p>
                        <div class="hero-actions">
                            <button class="btn-primary" onclick={go_to("contacto")}>
                                { "Solicitar Consulta" }
                            </button>
                            <button class="btn-secondary" onclick={go_to("servicios")}>
                                { "Nuestros Servicios" }
                            </button>
                        </div>
                    </div>
                    <div class="hero-visual">
                        <img
                            class="hero-image"
                            src="https://images.pexels.com/photos/3760067/pexels-photo-3760067.jpeg?auto=compress&cs=tinysrgb&w=800"
                            alt="Equipo de consultores en una reunión"
                        />
                        <div class="hero-floating-card">
                            <span class="floating-figure">{ "+120" }</span>
                            <span class="floating-label">{ "Proyectos entregados" }</span>
                        </div>
                        <div class="hero-floating-card">
                            <span class="floating-figure">{ "98%" }</span>
                            <span class="floating-label">{ "Clientes satisfechos" }</span>
                        </div>
                    </div>
                </div>
            </section>

            // Servicios
            <section id="servicios" class="services">
                <div class="section-container">
                    <h2>{ "Servicios" }</h2>
                    <p class="section-lead">{ "Soluciones a medida para cada etapa de su negocio." }</p>
                    <div class="services-grid">
                        <div
                            class="service-card"
                            onmouseenter={on_card_enter.clone()}
                            onmouseleave={on_card_leave.clone()}
                        >
                            <h3>{ "Asesoría estratégica" }</h3>
                            <p>{ "Definimos con usted la hoja de ruta: mercado, posicionamiento \
                                  y plan de crecimiento." }</p>
                        </div>
                        <div
                            class="service-card featured"
                            onmouseenter={on_card_enter.clone()}
                            onmouseleave={on_card_leave.clone()}
                        >
                            <span class="featured-tag">{ "Más solicitado" }</span>
                            <h3>{ "Consultoría de procesos" }</h3>
                            <p>{ "Diagnóstico y rediseño de operaciones para reducir costes y \
                                  ganar agilidad." }</p>
                        </div>
                        <div
                            class="service-card"
                            onmouseenter={on_card_enter}
                            onmouseleave={on_card_leave}
                        >
                            <h3>{ "Auditoría" }</h3>
                            <p>{ "Revisión independiente de cuentas y controles con informes \
                                  claros y accionables." }</p>
                        </div>
                    </div>
                </div>
            </section>

            // Nosotros
            <section id="nosotros" class="about">
                <div class="section-container about-layout">
                    <div class="about-text">
                        <h2>{ "Nosotros" }</h2>
                        <p>
                            { "Desde 2012 acompañamos a pymes y grandes cuentas en sus decisiones \
                               más importantes. Creemos en el trabajo cercano: cada proyecto tiene \
                               un socio responsable de principio a fin." }
                        </p>
                        <div class="features-grid">
                            <div class="feature-card">
                                <h4>{ "Experiencia sectorial" }</h4>
                                <p>{ "Industria, distribución, tecnología y servicios financieros." }</p>
                            </div>
                            <div class="feature-card">
                                <h4>{ "Resultados medibles" }</h4>
                                <p>{ "Cada propuesta incluye indicadores y objetivos verificables." }</p>
                            </div>
                            <div class="feature-card">
                                <h4>{ "Equipo senior" }</h4>
                                <p>{ "Sin rotaciones a mitad de proyecto: quien vende, ejecuta." }</p>
                            </div>
                        </div>
                    </div>
                    <img
                        class="about-image"
                        src="https://images.pexels.com/photos/3184465/pexels-photo-3184465.jpeg?auto=compress&cs=tinysrgb&w=800"
                        alt="Oficinas de Nexia Consultores"
                    />
                </div>
            </section>

            // Equipo
            <section id="equipo" class="team">
                <div class="section-container">
                    <h2>{ "Equipo" }</h2>
                    <p class="section-lead">{ "Las personas detrás de cada proyecto." }</p>
                    <div class="team-grid">
                        <div class="team-card">
                            <img
                                class="team-image"
                                src="https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=400"
                                alt="Retrato de Marta Esquivel"
                            />
                            <h3>{ "Marta Esquivel" }</h3>
                            <p>{ "Socia directora · Estrategia" }</p>
                        </div>
                        <div class="team-card">
                            <img
                                class="team-image"
                                src="https://images.pexels.com/photos/2182970/pexels-photo-2182970.jpeg?auto=compress&cs=tinysrgb&w=400"
                                alt="Retrato de Diego Arce"
                            />
                            <h3>{ "Diego Arce" }</h3>
                            <p>{ "Socio · Operaciones" }</p>
                        </div>
                        <div class="team-card">
                            <img
                                class="team-image"
                                src="https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=400"
                                alt="Retrato de Elena Bosch"
                            />
                            <h3>{ "Elena Bosch" }</h3>
                            <p>{ "Directora · Auditoría" }</p>
                        </div>
                    </div>
                </div>
            </section>

            // Testimonios
            <section class="testimonials">
                <div class="section-container">
                    <h2>{ "Lo que dicen nuestros clientes" }</h2>
                    <Testimonials />
                </div>
            </section>

            // Contacto
            <section id="contacto" class="contact">
                <div class="section-container contact-layout">
                    <div class="contact-info">
                        <h2>{ "Contacto" }</h2>
                        <p class="section-lead">{ "Cuéntenos su reto; respondemos en menos de 24 horas." }</p>
                        <div class="contact-item">
                            <i class="fas fa-map-marker-alt"></i>
                            <span>{ "Paseo de la Castellana 120, Madrid" }</span>
                        </div>
                        <div class="contact-item">
                            <i class="fas fa-phone"></i>
                            <span>{ "+34 910 000 123" }</span>
                        </div>
                        <div class="contact-item">
                            <i class="fas fa-envelope"></i>
                            <span>{ "hola@nexiaconsultores.es" }</span>
                        </div>
                    </div>
                    <ContactForm on_notify={props.on_notify.clone()} />
                </div>
            </section>

            <footer class="footer">
                <div class="section-container">
                    <span>{ "© 2025 Nexia Consultores" }</span>
                    <span>{ "Madrid · Barcelona · Lisboa" }</span>
                </div>
            </footer>

            <ScrollEffects />
        </div>
    }
}

const LANDING_STYLES: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    color: #1f2937;
    background: #f9fafb;
    line-height: 1.6;
}

.section-container {
    max-width: 1100px;
    margin: 0 auto;
    padding: 80px 24px;
}

/* Navbar */

.navbar {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 1000;
    background: rgba(255, 255, 255, 0.95);
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
    transition: background 0.3s ease, box-shadow 0.3s ease;
}

.navbar.scrolled {
    background: rgba(255, 255, 255, 0.98);
    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.1);
}

.nav-container {
    max-width: 1100px;
    margin: 0 auto;
    padding: 0 24px;
    height: 64px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-logo {
    font-weight: 700;
    font-size: 1.2rem;
    color: #111827;
    text-decoration: none;
}

.nav-links {
    display: flex;
    gap: 28px;
}

.nav-link,
.mobile-nav-link {
    color: #4b5563;
    text-decoration: none;
    font-weight: 500;
    transition: color 0.2s;
}

.nav-link.active,
.mobile-nav-link.active,
.nav-link:hover {
    color: #2563eb;
}

.mobile-menu-btn {
    display: none;
    flex-direction: column;
    gap: 5px;
    background: none;
    border: none;
    cursor: pointer;
    padding: 8px;
}

.hamburger-line {
    width: 24px;
    height: 2px;
    background: #111827;
    transition: transform 0.3s ease, opacity 0.3s ease;
}

.mobile-menu {
    display: none;
}

.mobile-menu.active {
    display: flex;
    flex-direction: column;
    gap: 16px;
    padding: 16px 24px 24px;
    background: rgba(255, 255, 255, 0.98);
    box-shadow: 0 12px 20px rgba(0, 0, 0, 0.08);
}

@media (max-width: 768px) {
    .nav-links {
        display: none;
    }
    .mobile-menu-btn {
        display: flex;
    }
}

/* Section reveal: sections start hidden and slide up once scrolled into
   view; the hero is always visible. */

section {
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
}

section.revealed {
    opacity: 1;
    transform: translateY(0);
}

#inicio {
    opacity: 1;
    transform: translateY(0);
}

/* Hero */

.hero {
    padding-top: 64px;
    background: linear-gradient(160deg, #eff6ff 0%, #f9fafb 60%);
}

.hero-container {
    max-width: 1100px;
    margin: 0 auto;
    padding: 96px 24px;
    display: grid;
    grid-template-columns: 1.1fr 1fr;
    gap: 48px;
    align-items: center;
}

.hero-content h1 {
    font-size: 2.8rem;
    line-height: 1.15;
    color: #111827;
    margin-bottom: 20px;
}

.hero-subtitle {
    font-size: 1.15rem;
    color: #4b5563;
    margin-bottom: 32px;
}

.hero-actions {
    display: flex;
    gap: 16px;
}

.btn-primary,
.btn-secondary,
.btn-submit {
    font-size: 1rem;
    font-weight: 600;
    padding: 12px 24px;
    border-radius: 10px;
    border: none;
    cursor: pointer;
    transition: background 0.2s, transform 0.2s;
}

.btn-primary,
.btn-submit {
    background: #2563eb;
    color: white;
}

.btn-primary:hover,
.btn-submit:hover:not(:disabled) {
    background: #1d4ed8;
}

.btn-submit:disabled {
    opacity: 0.7;
    cursor: wait;
}

.btn-secondary {
    background: white;
    color: #2563eb;
    border: 1px solid #bfdbfe;
}

.hero-visual {
    position: relative;
}

.hero-image {
    width: 100%;
    border-radius: 16px;
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15);
}

.hero-floating-card {
    position: absolute;
    background: white;
    border-radius: 12px;
    padding: 14px 18px;
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.12);
    display: flex;
    flex-direction: column;
}

.hero-floating-card:nth-of-type(1) {
    top: -20px;
    right: -16px;
}

.hero-floating-card:nth-of-type(2) {
    bottom: -20px;
    left: -16px;
}

.floating-figure {
    font-size: 1.4rem;
    font-weight: 700;
    color: #2563eb;
}

.floating-label {
    font-size: 0.85rem;
    color: #6b7280;
}

@media (max-width: 768px) {
    .hero-container {
        grid-template-columns: 1fr;
        padding: 64px 24px;
    }
}

/* Cards */

.services-grid,
.team-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 24px;
    margin-top: 40px;
}

.service-card,
.team-card,
.feature-card {
    background: white;
    border-radius: 14px;
    padding: 28px;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.06);
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}

.service-card.featured {
    transform: scale(1.05);
    border: 1px solid #bfdbfe;
    position: relative;
}

.featured-tag {
    position: absolute;
    top: -12px;
    left: 24px;
    background: #2563eb;
    color: white;
    font-size: 0.75rem;
    font-weight: 600;
    padding: 4px 10px;
    border-radius: 999px;
}

.service-card h3,
.team-card h3 {
    margin-bottom: 10px;
    color: #111827;
}

.team-card {
    text-align: center;
}

.team-image {
    width: 96px;
    height: 96px;
    object-fit: cover;
    border-radius: 50%;
    margin-bottom: 16px;
}

.about-layout {
    display: grid;
    grid-template-columns: 1.2fr 1fr;
    gap: 48px;
    align-items: center;
}

.about-image {
    width: 100%;
    border-radius: 16px;
}

.features-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 16px;
    margin-top: 28px;
}

.feature-card {
    padding: 18px 22px;
}

@media (max-width: 768px) {
    .about-layout {
        grid-template-columns: 1fr;
    }
}

.section-lead {
    color: #6b7280;
    margin-top: 8px;
}

/* Testimonials */

.testimonials-slider {
    max-width: 680px;
    margin: 40px auto 0;
    min-height: 180px;
}

.testimonial-card {
    background: white;
    border-radius: 14px;
    padding: 32px;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.06);
    text-align: center;
}

.testimonial-quote {
    font-size: 1.1rem;
    font-style: italic;
    color: #374151;
    margin-bottom: 20px;
}

.testimonial-author {
    display: flex;
    flex-direction: column;
    gap: 2px;
}

.author-name {
    font-weight: 600;
    color: #111827;
}

.author-role {
    font-size: 0.9rem;
    color: #6b7280;
}

/* Contact */

.contact-layout {
    display: grid;
    grid-template-columns: 1fr 1.2fr;
    gap: 48px;
}

.contact-item {
    display: flex;
    align-items: center;
    gap: 12px;
    margin-top: 18px;
    color: #374151;
}

.contact-item i {
    color: #2563eb;
    width: 20px;
    text-align: center;
}

@media (max-width: 768px) {
    .contact-layout {
        grid-template-columns: 1fr;
    }
}

/* Form */

.contact-form {
    background: white;
    border-radius: 16px;
    padding: 32px;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.06);
}

.form-row {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 16px;
}

@media (max-width: 600px) {
    .form-row {
        grid-template-columns: 1fr;
    }
}

.form-group {
    margin-bottom: 18px;
}

.form-group label {
    display: block;
    font-size: 0.9rem;
    font-weight: 500;
    color: #6b7280;
    margin-bottom: 6px;
    transition: color 0.2s;
}

.form-group.focused label {
    color: #2563eb;
}

.form-input,
.form-select,
.form-textarea {
    width: 100%;
    padding: 11px 14px;
    border-radius: 10px;
    border: 1px solid rgba(31, 41, 55, 0.2);
    font-size: 1rem;
    font-family: inherit;
    background: #f9fafb;
    transition: border-color 0.2s;
}

.form-input:focus,
.form-select:focus,
.form-textarea:focus {
    outline: none;
    border-color: #2563eb;
}

.form-input.error,
.form-textarea.error {
    border-color: #ef4444;
}

.btn-submit {
    width: 100%;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
}

/* Footer */

.footer {
    background: #111827;
    color: #9ca3af;
}

.footer .section-container {
    padding: 28px 24px;
    display: flex;
    justify-content: space-between;
    flex-wrap: wrap;
    gap: 8px;
}

/* Imagery fades in once the window has fully loaded. */

body:not(.loaded) .hero-image,
body:not(.loaded) .about-image,
body:not(.loaded) .team-image {
    opacity: 0;
}

body.loaded .hero-image,
body.loaded .about-image,
body.loaded .team-image {
    opacity: 1;
    transition: opacity 0.5s ease-out;
}
"#;
