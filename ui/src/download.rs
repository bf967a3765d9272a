//! Client-side delivery of the generated report.

/// File name the report is saved under.
pub const REPORT_FILE_NAME: &str = "analisis_facial_optiscan.pdf";

/// Hand the PDF bytes to the user.
///
/// Web builds create an object URL and click a synthetic anchor;
/// native builds write the file into the working directory.
#[cfg(target_arch = "wasm32")]
pub fn save_document(document: &[u8], file_name: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(document));
    let options = BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| "failed to build the document blob".to_string())?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| "failed to create an object URL".to_string())?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let dom = window.document().ok_or_else(|| "no document".to_string())?;
    let anchor: HtmlAnchorElement = dom
        .create_element("a")
        .map_err(|_| "failed to create the download anchor".to_string())?
        .dyn_into()
        .map_err(|_| "anchor has an unexpected type".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    let _ = Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_document(document: &[u8], file_name: &str) -> Result<(), String> {
    std::fs::write(file_name, document).map_err(|e| e.to_string())
}
