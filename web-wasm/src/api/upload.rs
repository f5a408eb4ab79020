//! `/upload` endpoint client

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// POST a score file to the upload endpoint as multipart form data.
///
/// Any 2xx status counts as success; the response body is not consumed.
pub async fn upload_file(upload_url: &str, file: &File) -> Result<(), JsValue> {
    let form = FormData::new()?;
    form.append_with_blob("file", file)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    // No explicit Content-Type header: the browser supplies the multipart
    // boundary itself.
    let request = Request::new_with_str_and_init(upload_url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "Upload failed: {}",
            resp.status()
        )));
    }

    Ok(())
}
