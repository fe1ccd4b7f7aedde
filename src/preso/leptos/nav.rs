//
// Copyright (c) 2025 Nathan Fiedler
//
use leptos::html::Nav;
use leptos::prelude::*;
use leptos_use::{on_click_outside, use_window_scroll};

#[component]
pub fn NavBar() -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let nav_ref: NodeRef<Nav> = NodeRef::new();
    let _ = on_click_outside(nav_ref, move |_| menu_open.set(false));
    let (_scroll_x, scroll_y) = use_window_scroll();

    view! {
        <nav
            class="navbar site-navbar"
            class:is-scrolled=move || scroll_y.get() > 40.0
            node_ref=nav_ref
            role="navigation"
            aria-label="main navigation"
        >
            <div class="navbar-brand">
                <a class="navbar-item brand-mark" href="#">
                    "IMMO " <span class="brand-accent">"1301"</span> " AG"
                </a>
                <a
                    role="button"
                    class="navbar-burger"
                    class:is-active=move || menu_open.get()
                    aria-label="Menü öffnen"
                    aria-expanded="false"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <span aria-hidden="true"></span>
                    <span aria-hidden="true"></span>
                    <span aria-hidden="true"></span>
                    <span aria-hidden="true"></span>
                </a>
            </div>

            <div class="navbar-menu" class:is-active=move || menu_open.get()>
                <div class="navbar-end">
                    <a class="navbar-item" href="#ueber-uns" on:click=move |_| menu_open.set(false)>
                        "Über uns"
                    </a>

                    <a class="navbar-item" href="#leistungen" on:click=move |_| menu_open.set(false)>
                        "Leistungen"
                    </a>

                    <a class="navbar-item" href="#standort" on:click=move |_| menu_open.set(false)>
                        "Standort"
                    </a>

                    <a class="navbar-item" href="#kontakt" on:click=move |_| menu_open.set(false)>
                        "Kontakt"
                    </a>

                    <div class="navbar-item">
                        <a
                            class="button is-warning"
                            href="#kontakt"
                            on:click=move |_| menu_open.set(false)
                        >
                            "Anfrage senden"
                        </a>
                    </div>
                </div>
            </div>
        </nav>
    }
}
