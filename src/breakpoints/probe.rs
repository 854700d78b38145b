use leptos::logging::log;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::{Result, UtilsError};

pub const DETECTORS_CLASS: &str = "media-queries-detectors";
pub const DETECTOR_CLASS: &str = "media-queries-detectors__detector";

/// Which generated-content pseudo-element to read from the probe container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pseudo {
    /// Carries the breakpoint names.
    Before,
    /// Carries the breakpoint values.
    After,
}

impl Pseudo {
    pub fn selector(self) -> &'static str {
        match self {
            Pseudo::Before => "::before",
            Pseudo::After => "::after",
        }
    }
}

/// Class names the stylesheet uses for the probe elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub container_class: String,
    pub detector_class: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        ProbeConfig {
            container_class: DETECTORS_CLASS.to_string(),
            detector_class: DETECTOR_CLASS.to_string(),
        }
    }
}

impl ProbeConfig {
    pub fn container_selector(&self) -> String {
        format!(".{}", self.container_class)
    }

    pub fn detector_selector(&self) -> String {
        format!(".{}", self.detector_class)
    }

    /// Modifier class tagging the sub-probe at 1-indexed `position`.
    pub fn detector_modifier(&self, position: usize) -> String {
        format!("{}--{}", self.detector_class, position)
    }
}

/// Everything the oracle needs from the document.
pub trait ProbeHost {
    fn has_container(&self) -> Result<bool>;

    /// Appends a fresh probe container to the document body.
    fn create_container(&mut self) -> Result<()>;

    /// Computed `content` of the container's pseudo-element, as reported by the browser.
    fn pseudo_content(&self, pseudo: Pseudo) -> Result<String>;

    fn detector_count(&self) -> Result<usize>;

    /// Appends the sub-probe for 1-indexed `position` to the container.
    fn append_detector(&mut self, position: usize) -> Result<()>;

    /// Rendered height of the container in whole pixels.
    fn container_height(&self) -> Result<u32>;
}

/// [`ProbeHost`] backed by the live browser document.
pub struct WebProbeHost {
    window: Window,
    document: Document,
    config: ProbeConfig,
}

impl WebProbeHost {
    pub fn new(config: ProbeConfig) -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| UtilsError::Dom("no global window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| UtilsError::Dom("window has no document".to_string()))?;
        Ok(WebProbeHost {
            window,
            document,
            config,
        })
    }

    fn container(&self) -> Result<Element> {
        self.document
            .query_selector(&self.config.container_selector())
            .map_err(|e| UtilsError::dom("querySelector for probe container", e))?
            .ok_or_else(|| UtilsError::Dom("probe container is missing".to_string()))
    }
}

impl ProbeHost for WebProbeHost {
    fn has_container(&self) -> Result<bool> {
        let found = self
            .document
            .query_selector_all(&self.config.container_selector())
            .map_err(|e| UtilsError::dom("querySelectorAll for probe container", e))?;
        Ok(found.length() > 0)
    }

    fn create_container(&mut self) -> Result<()> {
        let body = self
            .document
            .body()
            .ok_or_else(|| UtilsError::Dom("document has no body".to_string()))?;
        let container = self
            .document
            .create_element("div")
            .map_err(|e| UtilsError::dom("create probe container", e))?;
        container
            .class_list()
            .add_1(&self.config.container_class)
            .map_err(|e| UtilsError::dom("tag probe container", e))?;
        body.append_child(&container)
            .map_err(|e| UtilsError::dom("append probe container", e))?;
        log!("[INFO] [BREAKPOINTS] Created probe container");
        Ok(())
    }

    fn pseudo_content(&self, pseudo: Pseudo) -> Result<String> {
        let container = self.container()?;
        let style = self
            .window
            .get_computed_style_with_pseudo_elt(&container, pseudo.selector())
            .map_err(|e| UtilsError::dom("getComputedStyle", e))?;
        match style {
            Some(style) => style
                .get_property_value("content")
                .map_err(|e| UtilsError::dom("read content property", e)),
            None => Ok(String::new()),
        }
    }

    fn detector_count(&self) -> Result<usize> {
        let found = self
            .document
            .query_selector_all(&self.config.detector_selector())
            .map_err(|e| UtilsError::dom("querySelectorAll for detectors", e))?;
        Ok(found.length() as usize)
    }

    fn append_detector(&mut self, position: usize) -> Result<()> {
        let container = self.container()?;
        let detector = self
            .document
            .create_element("div")
            .map_err(|e| UtilsError::dom("create detector", e))?;
        detector
            .class_list()
            .add_2(
                &self.config.detector_class,
                &self.config.detector_modifier(position),
            )
            .map_err(|e| UtilsError::dom("tag detector", e))?;
        container
            .append_child(&detector)
            .map_err(|e| UtilsError::dom("append detector", e))?;
        Ok(())
    }

    fn container_height(&self) -> Result<u32> {
        let container = self
            .container()?
            .dyn_into::<HtmlElement>()
            .map_err(|_| UtilsError::Dom("probe container is not an HTML element".to_string()))?;
        Ok(u32::try_from(container.offset_height()).unwrap_or(0))
    }
}
