use codee::string::FromToStringCodec;
use leptos::logging::log;
use leptos::prelude::*;
use leptos_use::storage::use_local_storage;

use crate::device::toggle_hover_ability;
use crate::state::AppState;

pub const HOVER_STORAGE_KEY: &str = "ipt_hover_enabled";

#[component]
pub fn Header() -> impl IntoView {
    let state = use_context::<AppState>().expect("state to have been provided");
    let (hover_pref, set_hover_pref, _) =
        use_local_storage::<String, FromToStringCodec>(HOVER_STORAGE_KEY);

    let apply_hover = move |force: Option<bool>| match toggle_hover_ability(force) {
        Ok(enabled) => {
            state.hover_enabled.set(enabled);
            set_hover_pref.set(enabled.to_string());
        }
        Err(e) => log!("[ERROR] [DEVICE] Failed to toggle hover ability: {}", e),
    };

    // A stored preference overrides the touch-based default once on startup
    if let Ok(stored) = hover_pref.get_untracked().parse::<bool>() {
        if stored != state.hover_enabled.get_untracked() {
            apply_hover(Some(stored));
        }
    }

    let flag = |label: &'static str, value: bool| {
        view! {
            <span class="device-flag" data-active=value.to_string()>
                {label}
            </span>
        }
    };

    view! {
        <header>
            <div class="device-flags">
                {flag("touch", state.device.is_touch_device)}
                {flag("mobile", state.device.is_mobile)}
                {flag("iPhone", state.device.is_iphone)}
            </div>
            <button
                data-size="compact"
                style:margin-left="auto"
                data-active=move || state.hover_enabled.get().to_string()
                on:click=move |_| apply_hover(None)
            >
                {move || if state.hover_enabled.get() { "Hover: on" } else { "Hover: off" }}
            </button>
        </header>
    }
}
