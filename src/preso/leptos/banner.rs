//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::entities::ContactSubmission;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

// Shown below the form when the endpoint reports anything but success.
static SEND_ERROR_TEXT: &str = "Fehler beim Senden. Bitte versuchen Sie es erneut.";

///
/// Promotional banner offering the website for sale, with the contact dialog
/// and the confirmation dialog it opens. All of the state here is local to
/// the browser session, reloading the page resets everything.
///
#[component]
pub fn SalesBanner() -> impl IntoView {
    let visible = RwSignal::new(true);
    let sent = RwSignal::new(false);
    let show_form = RwSignal::new(false);
    let show_success = RwSignal::new(false);
    let sending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        sending.set(true);
        let phone_value = phone.get();
        let submission = ContactSubmission {
            name: name.get(),
            email: email.get(),
            phone: if phone_value.trim().is_empty() {
                None
            } else {
                Some(phone_value)
            },
        };
        leptos::task::spawn_local(async move {
            let accepted = match gloo::net::http::Request::post("/api/send").json(&submission) {
                Ok(request) => match request.send().await {
                    Ok(response) => response.ok(),
                    Err(_) => false,
                },
                Err(_) => false,
            };
            if accepted {
                sent.set(true);
                show_form.set(false);
                show_success.set(true);
            } else {
                error.set(Some(SEND_ERROR_TEXT.to_owned()));
                sending.set(false);
            }
        });
    };

    view! {
        <Show when=move || visible.get()>
            <div class="sales-banner">
                <span class="sales-banner-text">
                    "Gefällt Ihnen diese Webseite? Sie können sie jetzt erwerben!"
                </span>
                <button
                    class="button is-dark is-small sales-banner-button"
                    disabled=move || sent.get()
                    on:click=move |_| show_form.set(true)
                >
                    {move || if sent.get() { "Anfrage gesendet" } else { "Jetzt Anfrage senden" }}
                </button>
                <button
                    class="delete sales-banner-close"
                    aria-label="Banner schliessen"
                    on:click=move |_| visible.set(false)
                ></button>
            </div>

            <Show when=move || show_form.get()>
                <div class="modal is-active">
                    <div class="modal-background" on:click=move |_| show_form.set(false)></div>
                    <div class="modal-content">
                        <div class="box contact-dialog">
                            <h3 class="title is-4 has-text-centered">"Webseite erwerben"</h3>
                            <p class="subtitle is-6 has-text-centered has-text-grey">
                                "Hinterlassen Sie Ihre Kontaktdaten und wir melden uns bei Ihnen."
                            </p>
                            <form on:submit=on_submit>
                                <div class="field">
                                    <label class="label">"Name *"</label>
                                    <div class="control">
                                        <input
                                            class="input"
                                            type="text"
                                            required=true
                                            placeholder="Max Muster"
                                            prop:value=move || name.get()
                                            on:input=move |ev| name.set(event_target_value(&ev))
                                        />
                                    </div>
                                </div>
                                <div class="field">
                                    <label class="label">"E-Mail *"</label>
                                    <div class="control">
                                        <input
                                            class="input"
                                            type="email"
                                            required=true
                                            placeholder="max@beispiel.ch"
                                            prop:value=move || email.get()
                                            on:input=move |ev| email.set(event_target_value(&ev))
                                        />
                                    </div>
                                </div>
                                <div class="field">
                                    <label class="label">"Telefon"</label>
                                    <div class="control">
                                        <input
                                            class="input"
                                            type="tel"
                                            placeholder="+41 79 123 45 67"
                                            prop:value=move || phone.get()
                                            on:input=move |ev| phone.set(event_target_value(&ev))
                                        />
                                    </div>
                                </div>
                                {move || {
                                    error
                                        .get()
                                        .map(|message| {
                                            view! {
                                                <p class="help is-danger has-text-centered">{message}</p>
                                            }
                                        })
                                }}
                                <button
                                    type="submit"
                                    class="button is-warning is-fullwidth mt-4"
                                    disabled=move || sending.get()
                                >
                                    {move || {
                                        if sending.get() { "Wird gesendet..." } else { "Anfrage senden" }
                                    }}
                                </button>
                            </form>
                            <button
                                class="button is-ghost is-fullwidth mt-2"
                                on:click=move |_| show_form.set(false)
                            >
                                "Abbrechen"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            <Show when=move || show_success.get()>
                <div class="modal is-active">
                    <div class="modal-background" on:click=move |_| show_success.set(false)></div>
                    <div class="modal-content">
                        <div class="box contact-dialog has-text-centered">
                            <span class="icon success-check">
                                <i class="fa-solid fa-check" aria-hidden="true"></i>
                            </span>
                            <h3 class="title is-4">"Anfrage gesendet!"</h3>
                            <p class="has-text-grey">
                                "Vielen Dank für Ihr Interesse. Wir melden uns in Kürze bei Ihnen."
                            </p>
                            <button
                                class="button is-warning mt-4"
                                on:click=move |_| show_success.set(false)
                            >
                                "OK"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </Show>
    }
}
