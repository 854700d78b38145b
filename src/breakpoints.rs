//! Detects which stylesheet breakpoints are active.
//!
//! The stylesheet declares the breakpoints on a hidden probe container: its
//! `::before` content lists the names, its `::after` content lists the values,
//! and its rendered height is a bitfield with bit `i` set while breakpoint `i`
//! matches.

mod catalog;
mod decoder;
mod probe;

use std::rc::Rc;

use leptos::logging::log;

pub use catalog::Catalog;
pub use decoder::{decode_active_map, ActiveMap};
pub use probe::{ProbeConfig, ProbeHost, Pseudo, WebProbeHost};

use crate::error::{Result, UtilsError};

/// Owns the probe host together with the loaded catalog and the last decoded map.
pub struct BreakpointOracle<H: ProbeHost> {
    host: H,
    catalog: Catalog,
    provisioned: usize,
    cached: Option<(u32, Rc<ActiveMap>)>,
}

impl BreakpointOracle<WebProbeHost> {
    /// Oracle over the current browser document.
    pub fn for_document(config: ProbeConfig) -> Result<Self> {
        Ok(Self::new(WebProbeHost::new(config)?))
    }
}

impl<H: ProbeHost> BreakpointOracle<H> {
    pub fn new(host: H) -> Self {
        BreakpointOracle {
            host,
            catalog: Catalog::default(),
            provisioned: 0,
            cached: None,
        }
    }

    /// Creates the probe container if the document does not have one yet.
    pub fn ensure_probe_exists(&mut self) -> Result<()> {
        if !self.host.has_container()? {
            self.host.create_container()?;
        }
        Ok(())
    }

    /// Makes sure there is one sub-probe per catalog entry, appending the
    /// missing positions when the catalog outgrew what is in the document.
    fn ensure_detectors(&mut self) -> Result<()> {
        let wanted = self.catalog.len();
        if self.provisioned >= wanted {
            return Ok(());
        }
        let present = self.host.detector_count()?;
        for position in (present + 1)..=wanted {
            self.host.append_detector(position)?;
        }
        if present < wanted {
            log!(
                "[INFO] [BREAKPOINTS] Provisioned detectors {}..={}",
                present + 1,
                wanted
            );
        }
        self.provisioned = wanted;
        Ok(())
    }

    /// Reads the breakpoint declarations from the probe container. Once a
    /// non-empty catalog has been read it is kept for the oracle's lifetime.
    pub fn load_catalog(&mut self) -> Result<&Catalog> {
        if self.catalog.is_empty() {
            let names = self.host.pseudo_content(Pseudo::Before)?;
            let values = self.host.pseudo_content(Pseudo::After)?;
            let catalog = Catalog::parse(&names, &values)?;
            if catalog.is_empty() {
                log!("[DEBUG] [BREAKPOINTS] No breakpoints declared on the probe container");
            } else {
                log!(
                    "[INFO] [BREAKPOINTS] Loaded {} breakpoints: {}",
                    catalog.len(),
                    catalog.names().collect::<Vec<_>>().join(", ")
                );
                self.cached = None;
            }
            self.catalog = catalog;
        }
        Ok(&self.catalog)
    }

    /// Current activity of every declared breakpoint. The same `Rc` is handed
    /// out for as long as the probe height does not change.
    pub fn get_media_queries(&mut self) -> Result<Rc<ActiveMap>> {
        self.ensure_probe_exists()?;
        self.load_catalog()?;
        self.ensure_detectors()?;

        let height = self.host.container_height()?;
        if let Some((cached_height, map)) = &self.cached {
            if *cached_height == height {
                return Ok(Rc::clone(map));
            }
        }

        let map = Rc::new(decode_active_map(height, &self.catalog));
        self.cached = Some((height, Rc::clone(&map)));
        Ok(map)
    }

    pub fn is_media_query(&mut self, name: &str) -> Result<bool> {
        self.get_media_queries()?
            .get(name)
            .ok_or_else(|| UtilsError::UnknownBreakpoint(name.to_string()))
    }

    /// The declared breakpoints with their values, regardless of activity.
    pub fn get_media_queries_array(&mut self) -> Result<Catalog> {
        self.ensure_probe_exists()?;
        Ok(self.load_catalog()?.clone())
    }
}
