//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::preso::leptos::banner;
use crate::preso::leptos::nav;
use chrono::Datelike;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <header class="site-header">
            <banner::SalesBanner />
            <nav::NavBar />
        </header>
        <HeroSection />
        <AboutSection />
        <ServicesSection />
        <LocationSection />
        <ContactSection />
        <Footer />
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero is-fullheight hero-home">
            <div class="hero-body">
                <div class="container has-text-centered">
                    <span class="tag is-medium location-badge">
                        <span class="badge-dot"></span>
                        "Freienbach, Schwyz"
                    </span>
                    <h1 class="title is-1 has-text-white hero-title">
                        "Immobilien mit " <span class="brand-accent">"Weitblick"</span>
                    </h1>
                    <p class="subtitle is-4 hero-subtitle">
                        "Erwerb, Entwicklung, Vermietung und Verwaltung von erstklassigen Liegenschaften – in der Schweiz und international."
                    </p>
                    <div class="buttons is-centered">
                        <a class="button is-warning is-large" href="#leistungen">
                            "Unsere Leistungen"
                        </a>
                        <a class="button is-outlined is-light is-large" href="#kontakt">
                            "Kontakt aufnehmen"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id="ueber-uns" class="section is-large">
            <div class="container">
                <div class="columns is-variable is-8">
                    <div class="column">
                        <p class="section-kicker">"Über uns"</p>
                        <h2 class="title is-2">"Ihr Partner für Immobilien"</h2>
                        <p class="block is-size-5">
                            "Die Immo 1301 AG mit Sitz in Freienbach bezweckt den Erwerb, die Veräusserung, die Erstellung, die Entwicklung, die Vermietung, das Halten und die Verwaltung von Immobilien."
                        </p>
                        <p class="block is-size-5">
                            "Wir können Zweigniederlassungen und Tochtergesellschaften im In- und Ausland errichten und uns an anderen Unternehmen beteiligen sowie alle Geschäfte tätigen, die direkt oder indirekt mit unserem Zweck in Zusammenhang stehen."
                        </p>
                        <a class="brand-link" href="#kontakt">
                            "Mehr erfahren "
                            <span class="icon is-small">
                                <i class="fa-solid fa-arrow-right" aria-hidden="true"></i>
                            </span>
                        </a>
                    </div>
                    <div class="column">
                        <div class="box company-card">
                            <h3 class="title is-4">"Unternehmensdaten"</h3>
                            <div class="media">
                                <div class="media-left">
                                    <span class="icon company-icon">
                                        <i class="fa-solid fa-circle-check" aria-hidden="true"></i>
                                    </span>
                                </div>
                                <div class="media-content">
                                    <p class="has-text-weight-bold">"CHE-461.372.332"</p>
                                    <p class="is-size-7 has-text-grey">"Handelsregister-Nr."</p>
                                </div>
                            </div>
                            <div class="media">
                                <div class="media-left">
                                    <span class="icon company-icon">
                                        <i class="fa-solid fa-location-dot" aria-hidden="true"></i>
                                    </span>
                                </div>
                                <div class="media-content">
                                    <p class="has-text-weight-bold">"8807"</p>
                                    <p class="is-size-7 has-text-grey">"Freienbach, SZ"</p>
                                </div>
                            </div>
                            <div class="media">
                                <div class="media-left">
                                    <span class="icon company-icon">
                                        <i class="fa-solid fa-building" aria-hidden="true"></i>
                                    </span>
                                </div>
                                <div class="media-content">
                                    <p class="has-text-weight-bold">"AG"</p>
                                    <p class="is-size-7 has-text-grey">"Rechtsform"</p>
                                </div>
                            </div>
                            <hr />
                            <div class="media">
                                <div class="media-left">
                                    <span class="icon company-icon accent">
                                        <i class="fa-solid fa-map-pin" aria-hidden="true"></i>
                                    </span>
                                </div>
                                <div class="media-content">
                                    <p class="has-text-weight-bold">"Deuberrainweg 5"</p>
                                    <p class="is-size-7 has-text-grey">"8807 Freienbach, Schwyz"</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(icon: &'static str, title: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <div class="column is-one-third">
            <div class="box service-card">
                <span class="icon is-large service-icon">
                    <i class=format!("fa-solid {} fa-xl", icon) aria-hidden="true"></i>
                </span>
                <h3 class="title is-5">{title}</h3>
                <p class="has-text-grey">{blurb}</p>
            </div>
        </div>
    }
}

#[component]
fn ServicesSection() -> impl IntoView {
    view! {
        <section id="leistungen" class="section is-large alt-background">
            <div class="container">
                <div class="has-text-centered section-intro">
                    <p class="section-kicker">"Leistungen"</p>
                    <h2 class="title is-2">"Was wir bieten"</h2>
                    <p class="is-size-5 has-text-grey">
                        "Umfassende Dienstleistungen rund um Immobilien – von der Akquisition über die Entwicklung bis zur langfristigen Verwaltung."
                    </p>
                </div>
                <div class="columns is-multiline">
                    <ServiceCard
                        icon="fa-building"
                        title="Erwerb & Veräusserung"
                        blurb="Strategischer Kauf und Verkauf von Immobilien im In- und Ausland mit fundierter Marktkenntnis."
                    />
                    <ServiceCard
                        icon="fa-compass-drafting"
                        title="Entwicklung"
                        blurb="Von der Projektidee bis zur Realisierung – wir entwickeln Immobilienprojekte mit Weitblick."
                    />
                    <ServiceCard
                        icon="fa-house"
                        title="Vermietung"
                        blurb="Professionelle Vermarktung und nachhaltige Vermietung von Wohn- und Gewerbeimmobilien."
                    />
                    <ServiceCard
                        icon="fa-gears"
                        title="Verwaltung"
                        blurb="Umfassende Immobilienverwaltung – von der Buchhaltung bis zur technischen Betreuung."
                    />
                    <ServiceCard
                        icon="fa-coins"
                        title="Finanzierung"
                        blurb="Finanzierungen für eigene oder fremde Rechnung sowie Garantien und Bürgschaften."
                    />
                    <ServiceCard
                        icon="fa-chart-pie"
                        title="Beteiligungen"
                        blurb="Strategische Beteiligungen an Unternehmen im In- und Ausland zur Diversifikation."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn LocationSection() -> impl IntoView {
    view! {
        <section id="standort" class="section is-large">
            <div class="container">
                <div class="has-text-centered section-intro">
                    <p class="section-kicker">"Standort"</p>
                    <h2 class="title is-2">"Unser Standort"</h2>
                    <p class="is-size-5 has-text-grey">
                        "Zentral gelegen in Freienbach, Kanton Schwyz – im Herzen der Schweiz."
                    </p>
                </div>
                <div class="columns is-variable is-6">
                    <div class="column is-three-fifths">
                        <div class="map-frame">
                            <iframe
                                src="https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d2715.5!2d8.7536!3d47.2022!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x479aa7e1a1a1a1a1%3A0x1!2sDeuberrainweg%205%2C%208807%20Freienbach!5e0!3m2!1sde!2sch!4v1700000000000"
                                width="100%"
                                height="400"
                                loading="lazy"
                                allowfullscreen=true
                                referrerpolicy="no-referrer-when-downgrade"
                                title="Standort Immo 1301 AG"
                            ></iframe>
                        </div>
                    </div>
                    <div class="column">
                        <div class="box">
                            <h3 class="title is-5">"Adresse"</h3>
                            <div class="media">
                                <div class="media-left">
                                    <span class="icon company-icon">
                                        <i class="fa-solid fa-building" aria-hidden="true"></i>
                                    </span>
                                </div>
                                <div class="media-content">
                                    <p class="has-text-weight-bold">"Immo 1301 AG"</p>
                                    <p class="is-size-7 has-text-grey">"Aktiengesellschaft"</p>
                                </div>
                            </div>
                            <div class="media">
                                <div class="media-left">
                                    <span class="icon company-icon">
                                        <i class="fa-solid fa-location-dot" aria-hidden="true"></i>
                                    </span>
                                </div>
                                <div class="media-content">
                                    <p class="has-text-weight-bold">"Deuberrainweg 5"</p>
                                    <p class="is-size-7 has-text-grey">"8807 Freienbach, SZ"</p>
                                </div>
                            </div>
                            <div class="media">
                                <div class="media-left">
                                    <span class="icon company-icon">
                                        <i class="fa-solid fa-flag" aria-hidden="true"></i>
                                    </span>
                                </div>
                                <div class="media-content">
                                    <p class="has-text-weight-bold">"Schweiz"</p>
                                    <p class="is-size-7 has-text-grey">"Kanton Schwyz"</p>
                                </div>
                            </div>
                        </div>
                        <div class="box location-pitch">
                            <h3 class="title is-5 has-text-white">"Strategische Lage"</h3>
                            <p>
                                "Freienbach liegt am Zürichsee und bietet optimale Verkehrsanbindungen. Die Nähe zu Zürich und zum internationalen Flughafen macht unseren Standort ideal für nationale und internationale Geschäftstätigkeit."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    // decorative form, submitting only flips a local thank-you flag
    let submitted = RwSignal::new(false);
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        submitted.set(true);
    };

    view! {
        <section id="kontakt" class="section is-large alt-background">
            <div class="container">
                <div class="has-text-centered section-intro">
                    <p class="section-kicker">"Kontakt"</p>
                    <h2 class="title is-2">"Kontaktieren Sie uns"</h2>
                    <p class="is-size-5 has-text-grey">
                        "Haben Sie Fragen zu unseren Leistungen oder möchten Sie ein Projekt besprechen? Wir freuen uns auf Ihre Nachricht."
                    </p>
                </div>
                <div class="columns is-centered">
                    <div class="column is-two-thirds">
                        <div class="box contact-card">
                            <Show when=move || submitted.get()>
                                <div class="notification is-success is-light">
                                    "Vielen Dank für Ihre Nachricht! Wir melden uns bei Ihnen."
                                </div>
                            </Show>
                            <form on:submit=on_submit>
                                <div class="columns">
                                    <div class="column">
                                        <div class="field">
                                            <label class="label">"Vorname"</label>
                                            <div class="control">
                                                <input
                                                    class="input"
                                                    type="text"
                                                    required=true
                                                    placeholder="Max"
                                                />
                                            </div>
                                        </div>
                                    </div>
                                    <div class="column">
                                        <div class="field">
                                            <label class="label">"Nachname"</label>
                                            <div class="control">
                                                <input
                                                    class="input"
                                                    type="text"
                                                    required=true
                                                    placeholder="Muster"
                                                />
                                            </div>
                                        </div>
                                    </div>
                                </div>
                                <div class="field">
                                    <label class="label">"E-Mail"</label>
                                    <div class="control">
                                        <input
                                            class="input"
                                            type="email"
                                            required=true
                                            placeholder="max.muster@beispiel.ch"
                                        />
                                    </div>
                                </div>
                                <div class="field">
                                    <label class="label">"Betreff"</label>
                                    <div class="control">
                                        <div class="select is-fullwidth">
                                            <select>
                                                <option disabled=true selected=true>
                                                    "Bitte wählen"
                                                </option>
                                                <option>"Allgemeine Anfrage"</option>
                                                <option>"Immobilienerwerb"</option>
                                                <option>"Vermietung"</option>
                                                <option>"Verwaltung"</option>
                                                <option>"Finanzierung & Beteiligungen"</option>
                                                <option>"Sonstiges"</option>
                                            </select>
                                        </div>
                                    </div>
                                </div>
                                <div class="field">
                                    <label class="label">"Nachricht"</label>
                                    <div class="control">
                                        <textarea
                                            class="textarea"
                                            rows=5
                                            required=true
                                            placeholder="Ihre Nachricht..."
                                        ></textarea>
                                    </div>
                                </div>
                                <button type="submit" class="button is-warning is-fullwidth is-medium">
                                    "Nachricht senden"
                                </button>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="footer site-footer">
            <div class="container">
                <div class="columns is-variable is-8">
                    <div class="column">
                        <p class="is-size-4 has-text-weight-bold has-text-white">
                            "IMMO " <span class="brand-accent">"1301"</span> " AG"
                        </p>
                        <p>
                            "Ihr Partner für Immobilien in der Schweiz und international. Erwerb, Entwicklung, Vermietung und Verwaltung."
                        </p>
                    </div>
                    <div class="column">
                        <h4 class="title is-6 has-text-white">"Navigation"</h4>
                        <ul class="footer-links">
                            <li>
                                <a href="#ueber-uns">"Über uns"</a>
                            </li>
                            <li>
                                <a href="#leistungen">"Leistungen"</a>
                            </li>
                            <li>
                                <a href="#standort">"Standort"</a>
                            </li>
                            <li>
                                <a href="#kontakt">"Kontakt"</a>
                            </li>
                        </ul>
                    </div>
                    <div class="column">
                        <h4 class="title is-6 has-text-white">"Kontakt"</h4>
                        <p>"Immo 1301 AG"</p>
                        <p>"Deuberrainweg 5"</p>
                        <p>"8807 Freienbach, SZ"</p>
                        <p class="mt-4">"CHE-461.372.332"</p>
                    </div>
                </div>
                <hr class="footer-divider" />
                <div class="level">
                    <div class="level-left">
                        <p class="is-size-7">
                            {format!("© {} Immo 1301 AG. Alle Rechte vorbehalten.", year)}
                        </p>
                    </div>
                    <div class="level-right">
                        <a class="is-size-7 footer-legal" href="#">
                            "Impressum"
                        </a>
                        <a class="is-size-7 footer-legal" href="#">
                            "Datenschutz"
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
