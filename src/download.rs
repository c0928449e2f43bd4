//! Hands an exported file to the user: saved next to the app natively,
//! offered as a browser download on the web.

use crate::error::SketchResult;

/// Save `bytes` as `file_name` in the working directory
#[cfg(not(target_arch = "wasm32"))]
pub fn offer_download(bytes: &[u8], file_name: &str) -> SketchResult<()> {
    let path = std::path::Path::new(file_name);
    std::fs::write(path, bytes)?;
    log::info!("Saved {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Trigger a client-side download of `bytes` named `file_name`
#[cfg(target_arch = "wasm32")]
pub fn offer_download(bytes: &[u8], file_name: &str) -> SketchResult<()> {
    use crate::error::SketchError;
    use eframe::wasm_bindgen::{JsCast as _, JsValue};

    fn js_error(err: JsValue) -> SketchError {
        SketchError::Download(format!("{err:?}"))
    }

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| SketchError::Download("no document".to_owned()))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_error)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let anchor = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| SketchError::Download("not an anchor element".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_error)?;
    log::info!("Offered {} for download ({} bytes)", file_name, bytes.len());
    Ok(())
}
