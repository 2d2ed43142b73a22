// Small browser helpers shared by the components.

pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg; // console only exists in the browser
}

/// Client (viewport) coordinates to coordinates relative to an element's top-left.
pub fn client_to_local(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> (f64, f64) {
    (client_x - rect_left, client_y - rect_top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_to_local() {
        assert_eq!(client_to_local(150.0, 120.0, 50.0, 20.0), (100.0, 100.0));
        assert_eq!(client_to_local(10.0, 10.0, 20.0, 30.0), (-10.0, -20.0));
    }
}
