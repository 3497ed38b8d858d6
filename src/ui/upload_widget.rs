//! Bridge to the hosted image upload widget
//!
//! The widget script is loaded by the page shell and exposes
//! `window.cloudinary.openUploadWidget(options, callback)`.

use std::rc::Rc;

use crate::core::upload::{UploadError, UploadResult, UploadWidgetOptions};

pub const UPLOAD_WIDGET_SCRIPT: &str = "https://upload-widget.cloudinary.com/global/all.js";

#[cfg(not(feature = "ssr"))]
type JsCallback = leptos::wasm_bindgen::closure::Closure<
    dyn FnMut(leptos::wasm_bindgen::JsValue, leptos::wasm_bindgen::JsValue),
>;

/// Upload widget handle owning its JS callback
///
/// Create one per view and reuse it for every open. The callback is built on
/// the first open and lives as long as the handle.
pub struct UploadWidget {
    #[cfg_attr(feature = "ssr", allow(dead_code))]
    on_result: Rc<dyn Fn(UploadResult)>,
    #[cfg(not(feature = "ssr"))]
    callback: std::cell::OnceCell<JsCallback>,
}

impl UploadWidget {
    /// `on_result` runs for every result the widget reports
    pub fn new<F>(on_result: F) -> Self
    where
        F: Fn(UploadResult) + 'static,
    {
        Self {
            on_result: Rc::new(on_result),
            #[cfg(not(feature = "ssr"))]
            callback: std::cell::OnceCell::new(),
        }
    }

    #[cfg(not(feature = "ssr"))]
    fn callback(&self) -> &JsCallback {
        use leptos::logging::warn;
        use leptos::wasm_bindgen::{JsValue, closure::Closure};

        self.callback.get_or_init(|| {
            let handler = Rc::clone(&self.on_result);
            Closure::wrap(Box::new(move |error: JsValue, result: JsValue| {
                if !error.is_null() && !error.is_undefined() {
                    warn!("Upload widget reported an error: {:?}", error);
                    return;
                }
                match serde_wasm_bindgen::from_value::<UploadResult>(result) {
                    Ok(result) => handler(result),
                    Err(err) => warn!("Unreadable upload result: {}", err),
                }
            }) as Box<dyn FnMut(JsValue, JsValue)>)
        })
    }

    #[cfg(test)]
    fn deliver(&self, result: UploadResult) {
        (self.on_result)(result);
    }

    #[cfg(not(feature = "ssr"))]
    pub fn open(&self, options: &UploadWidgetOptions) -> Result<(), UploadError> {
        use leptos::wasm_bindgen::{JsCast, JsValue};

        let window = web_sys::window().ok_or(UploadError::Unavailable)?;
        let cloudinary = js_sys::Reflect::get(&window, &JsValue::from_str("cloudinary"))
            .map_err(|_| UploadError::Unavailable)?;
        if cloudinary.is_undefined() {
            return Err(UploadError::Unavailable);
        }

        let open = js_sys::Reflect::get(&cloudinary, &JsValue::from_str("openUploadWidget"))
            .map_err(|_| UploadError::Unavailable)?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| UploadError::Unavailable)?;

        let options = serde_wasm_bindgen::to_value(options)
            .map_err(|e| UploadError::Options(e.to_string()))?;

        open.call2(&cloudinary, &options, self.callback().as_ref().unchecked_ref())
            .map_err(|e| UploadError::Open(format!("{:?}", e)))?;
        Ok(())
    }

    #[cfg(feature = "ssr")]
    pub fn open(&self, _options: &UploadWidgetOptions) -> Result<(), UploadError> {
        Err(UploadError::Unavailable)
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn test_one_handler_serves_every_open() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let widget = UploadWidget::new(move |result: UploadResult| {
            sink.borrow_mut().push(result.secure_url().map(str::to_string));
        });
        let options = UploadWidgetOptions::new("gunita", "lz6eovct");

        for url in ["https://cdn/a.jpg", "https://cdn/b.jpg"] {
            assert_eq!(widget.open(&options), Err(UploadError::Unavailable));
            widget.deliver(
                serde_json::from_value(serde_json::json!({
                    "event": "success",
                    "info": {"secure_url": url}
                }))
                .unwrap(),
            );
        }

        assert_eq!(
            *seen.borrow(),
            vec![
                Some("https://cdn/a.jpg".to_string()),
                Some("https://cdn/b.jpg".to_string())
            ]
        );
        assert_eq!(Rc::strong_count(&widget.on_result), 1);
    }
}
