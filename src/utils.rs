use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = r#"
export function has_touch_start() {
  return 'ontouchstart' in window;
}
"#)]
extern "C" {
    pub fn has_touch_start() -> bool;
}
