use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::types::OrganizeResult;

pub async fn organize_conversation(conversation: String) -> Result<OrganizeResult, JsValue> {
    let body = serde_json::json!({ "conversation": conversation }).to_string();

    let opts = web_sys::RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));

    let request = web_sys::Request::new_with_str_and_init("/api/organize", &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or("window not available")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: web_sys::Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "organize request failed with status {}",
            resp.status()
        )));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let result: OrganizeResult = serde_wasm_bindgen::from_value(json)
        .map_err(|e| JsValue::from_str(&format!("unexpected response shape: {}", e)))?;

    Ok(result)
}
