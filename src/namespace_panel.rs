use leptos::prelude::*;

use crate::events::{get_namespaced_events, EventNames};

#[component]
pub fn NamespacePanel() -> impl IntoView {
    let (events, set_events) = signal("open,close".to_string());
    let (namespace, set_namespace) = signal("modal".to_string());

    // Comma separated input so that spaces reach the validator
    let formatted = Memo::new(move |_| {
        let names: Vec<String> = events.get().split(',').map(str::to_string).collect();
        let names = match names.len() {
            1 => EventNames::One(names.into_iter().next().unwrap_or_default()),
            _ => EventNames::Many(names),
        };
        get_namespaced_events(names, &namespace.get()).map_err(|e| e.to_string())
    });

    view! {
        <section class="namespacer">
            <h2>"Namespaced events"</h2>
            <input
                type="text"
                prop:value=move || events.get()
                on:input:target=move |ev| set_events.set(ev.target().value())
                placeholder="events, comma separated"
            />
            <input
                type="text"
                prop:value=move || namespace.get()
                on:input:target=move |ev| set_namespace.set(ev.target().value())
                placeholder="namespace"
            />
            {move || match formatted.get() {
                Ok(s) => view! { <code>{s}</code> }.into_any(),
                Err(e) => view! { <div class="error-message">{e}</div> }.into_any(),
            }}
        </section>
    }
}
