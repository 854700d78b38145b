mod breakpoint_panel;
mod breakpoints;
mod device;
mod error;
mod events;
mod header;
mod namespace_panel;
mod state;
mod utils;

use anyhow::{Context, Result};
use leptos::logging::log;
use leptos::prelude::*;
use leptos_use::use_event_listener;

use crate::breakpoint_panel::BreakpointPanel;
use crate::breakpoints::{BreakpointOracle, ProbeConfig};
use crate::device::DeviceDetection;
use crate::header::Header;
use crate::namespace_panel::NamespacePanel;
use crate::state::{AppState, Oracle};

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

fn detect_device() -> Result<DeviceDetection> {
    let device = DeviceDetection::detect();
    device
        .apply_to_root()
        .context("failed to reflect device flags on <html>")?;
    Ok(device)
}

fn create_oracle() -> Result<Oracle> {
    BreakpointOracle::for_document(ProbeConfig::default())
        .context("failed to attach breakpoint probe to the document")
}

#[component]
fn App() -> impl IntoView {
    let device = detect_device().unwrap_or_else(|e| {
        log!("[ERROR] [DEVICE] {:#}", e);
        DeviceDetection::detect()
    });
    let oracle = create_oracle()
        .map_err(|e| log!("[ERROR] [BREAKPOINTS] {:#}", e))
        .ok();

    let state = AppState::new(device, oracle);
    provide_context(state);

    Effect::new(move |_| state.refresh());
    let _ = use_event_listener(window(), leptos::ev::resize, move |_| state.refresh());

    view! {
        <Header />
        <main>
            <BreakpointPanel />
            <NamespacePanel />
        </main>
    }
}
