use leptos::logging::log;
use leptos::prelude::*;

use crate::breakpoints::{ActiveMap, BreakpointOracle, Catalog, WebProbeHost};
use crate::device::DeviceDetection;

pub type Oracle = BreakpointOracle<WebProbeHost>;

#[derive(Clone, Copy)]
pub struct AppState {
    pub device: DeviceDetection,
    pub hover_enabled: RwSignal<bool>,
    oracle: StoredValue<Option<Oracle>, LocalStorage>,
    // Mirrors of the oracle's last answers, refreshed on resize
    pub active: RwSignal<Vec<(String, bool)>>,
    pub active_json: RwSignal<String>,
    pub catalog: RwSignal<Vec<(String, String)>>,
    pub error: RwSignal<Option<String>>,
}

impl AppState {
    pub fn new(device: DeviceDetection, oracle: Option<Oracle>) -> Self {
        AppState {
            device,
            hover_enabled: RwSignal::new(!device.is_touch_device),
            oracle: StoredValue::new_local(oracle),
            active: RwSignal::new(Vec::new()),
            active_json: RwSignal::new("{}".to_string()),
            catalog: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
        }
    }

    /// Asks the oracle for the current breakpoints and mirrors the answer into the signals.
    pub fn refresh(&self) {
        let state = *self;
        self.oracle.update_value(|oracle| {
            let Some(oracle) = oracle else {
                return;
            };
            match oracle.get_media_queries() {
                Ok(map) => {
                    state.show_active(&map);
                    state.error.set(None);
                }
                Err(e) => {
                    log!("[ERROR] [BREAKPOINTS] Failed to read media queries: {}", e);
                    state.error.set(Some(e.to_string()));
                    return;
                }
            }
            if state.catalog.with_untracked(Vec::is_empty) {
                match oracle.get_media_queries_array() {
                    Ok(catalog) => state.show_catalog(&catalog),
                    Err(e) => log!("[ERROR] [BREAKPOINTS] Failed to read catalog: {}", e),
                }
            }
        });
    }

    /// Answer for a single breakpoint, formatted for display.
    pub fn lookup(&self, name: &str) -> String {
        let mut answer = String::from("breakpoint detection unavailable");
        self.oracle.update_value(|oracle| {
            if let Some(oracle) = oracle {
                answer = match oracle.is_media_query(name) {
                    Ok(active) => {
                        let value = oracle
                            .load_catalog()
                            .ok()
                            .and_then(|catalog| catalog.value_of(name))
                            .unwrap_or("?");
                        let status = if active { "active" } else { "inactive" };
                        format!("{name} ({value}) is {status}")
                    }
                    Err(e) => e.to_string(),
                };
            }
        });
        answer
    }

    fn show_active(&self, map: &ActiveMap) {
        self.active
            .set(map.iter().map(|(name, on)| (name.to_string(), on)).collect());
        self.active_json
            .set(serde_json::to_string_pretty(map).unwrap_or_default());
    }

    fn show_catalog(&self, catalog: &Catalog) {
        self.catalog.set(
            catalog
                .iter()
                .map(|bp| (bp.name.clone(), bp.value.clone()))
                .collect(),
        );
    }
}
