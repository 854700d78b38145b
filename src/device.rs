use leptos::logging::log;
use leptos::prelude::{document, window};
use web_sys::Element;

use crate::error::{Result, UtilsError};
use crate::utils::has_touch_start;

pub const IS_TOUCH_CLASS: &str = "is-touch";
pub const IS_IPHONE_CLASS: &str = "is-iphone";
pub const HOVER_CLASS: &str = "hover";

const MOBILE_AGENT_MARKERS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

pub fn is_touch_device() -> bool {
    has_touch_start() || window().navigator().max_touch_points() > 0
}

pub fn is_mobile() -> bool {
    window()
        .navigator()
        .user_agent()
        .map(|ua| user_agent_is_mobile(&ua))
        .unwrap_or(false)
}

pub fn is_iphone() -> bool {
    window()
        .navigator()
        .platform()
        .map(|p| p == "iPhone")
        .unwrap_or(false)
}

fn user_agent_is_mobile(user_agent: &str) -> bool {
    let ua = user_agent.to_lowercase();
    MOBILE_AGENT_MARKERS.iter().any(|marker| ua.contains(marker))
}

/// State the hover flag ends up in: `force` wins, otherwise the current state flips.
fn next_hover_state(current: bool, force: Option<bool>) -> bool {
    force.unwrap_or(!current)
}

fn root_element() -> Result<Element> {
    document()
        .document_element()
        .ok_or_else(|| UtilsError::Dom("document has no root element".to_string()))
}

/// Sets or flips the `hover` class on `<html>`, returning whether hover is now enabled.
pub fn toggle_hover_ability(force: Option<bool>) -> Result<bool> {
    let classes = root_element()?.class_list();
    let enabled = next_hover_state(classes.contains(HOVER_CLASS), force);
    classes
        .toggle_with_force(HOVER_CLASS, enabled)
        .map_err(|e| UtilsError::dom("toggle hover class", e))
}

/// Device capabilities sampled once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceDetection {
    pub is_touch_device: bool,
    pub is_iphone: bool,
    pub is_mobile: bool,
}

impl DeviceDetection {
    pub fn detect() -> Self {
        DeviceDetection {
            is_touch_device: is_touch_device(),
            is_iphone: is_iphone(),
            is_mobile: is_mobile(),
        }
    }

    /// Reflects the snapshot as classes on `<html>`. Hover starts enabled
    /// only on devices without touch input.
    pub fn apply_to_root(&self) -> Result<()> {
        let classes = root_element()?.class_list();
        classes
            .toggle_with_force(IS_TOUCH_CLASS, self.is_touch_device)
            .map_err(|e| UtilsError::dom("toggle touch class", e))?;
        classes
            .toggle_with_force(IS_IPHONE_CLASS, self.is_iphone)
            .map_err(|e| UtilsError::dom("toggle iphone class", e))?;
        toggle_hover_ability(Some(!self.is_touch_device))?;
        log!("[INFO] [DEVICE] Detected {:?}", self);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_user_agents() {
        assert!(user_agent_is_mobile(
            "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36"
        ));
        assert!(user_agent_is_mobile(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"
        ));
        assert!(user_agent_is_mobile("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)"));
        assert!(!user_agent_is_mobile(
            "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0"
        ));
    }

    #[test]
    fn hover_toggle_honours_force() {
        assert!(next_hover_state(false, None));
        assert!(!next_hover_state(true, None));
        assert!(next_hover_state(true, Some(true)));
        assert!(!next_hover_state(false, Some(false)));
    }
}
