use leptos::prelude::*;

use crate::state::AppState;

#[component]
pub fn BreakpointPanel() -> impl IntoView {
    let state = use_context::<AppState>().expect("state to have been provided");
    let (query, set_query) = signal(String::new());
    let (answer, set_answer) = signal(None::<String>);

    let on_check = move |_| {
        let name = query.get_untracked().trim().to_string();
        if name.is_empty() {
            set_answer.set(None);
        } else {
            set_answer.set(Some(state.lookup(&name)));
        }
    };

    view! {
        <section class="breakpoints">
            <h2>"Breakpoints"</h2>
            <Show when=move || state.error.get().is_some()>
                <div class="error-message">{move || state.error.get().unwrap_or_default()}</div>
            </Show>
            <table>
                <tbody>
                    {move || {
                        let active = state.active.get();
                        state
                            .catalog
                            .get()
                            .into_iter()
                            .map(|(name, value)| {
                                let on = active
                                    .iter()
                                    .find(|(n, _)| *n == name)
                                    .is_some_and(|(_, on)| *on);
                                view! {
                                    <tr data-active=on.to_string()>
                                        <td>{name}</td>
                                        <td>{value}</td>
                                        <td>{if on { "active" } else { "" }}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            <pre>{move || state.active_json.get()}</pre>
            <div class="lookup">
                <input
                    type="text"
                    prop:value=move || query.get()
                    on:input:target=move |ev| set_query.set(ev.target().value())
                    placeholder="breakpoint name"
                />
                <button data-size="compact" on:click=on_check>
                    "Check"
                </button>
                {move || answer.get().map(|a| view! { <span>{a}</span> })}
            </div>
        </section>
    }
}
