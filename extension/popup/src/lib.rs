use std::cell::RefCell;
use std::collections::HashMap;

use cj_protocol::{CookieQuery, CookieRecord};
use cookiejar::format::netscape;
use cookiejar::{query, select, Export, Format};
use js_sys::Array;
use serde::{Deserialize, Serialize};
use url::Url;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag};

/// localStorage key shared with the popup's format picker.
const SELECTED_FORMAT_KEY: &str = "selectedFormat";

thread_local! {
    /// Object URLs of downloads still in progress, by download id.
    static PENDING: RefCell<HashMap<i32, String>> = RefCell::new(HashMap::new());
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FormatEntry {
    key: &'static str,
    label: &'static str,
    ext: &'static str,
    mime_type: &'static str,
    importable: bool,
}

impl From<&'static Format> for FormatEntry {
    fn from(format: &'static Format) -> Self {
        Self {
            key: format.key,
            label: format.label,
            ext: format.ext,
            mime_type: format.mime_type,
            importable: format.is_importable(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DownloadOptions<'a> {
    url: &'a str,
    filename: &'a str,
    save_as: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportResult {
    download_id: i32,
    filename: String,
    format: &'static str,
    count: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

/// `chrome.downloads.DownloadDelta`, reduced to what revocation needs.
#[derive(Debug, Deserialize)]
struct DownloadDelta {
    id: i32,
    #[serde(default)]
    state: Option<StringDelta>,
}

#[derive(Debug, Deserialize)]
struct StringDelta {
    #[serde(default)]
    current: Option<String>,
}

impl DownloadDelta {
    /// Whether this change moves the download out of `in_progress`.
    fn finished(&self) -> bool {
        self.state
            .as_ref()
            .and_then(|s| s.current.as_deref())
            .is_some_and(|state| state != "in_progress")
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let on_changed = Closure::<dyn FnMut(JsValue)>::new(|delta: JsValue| {
        let Ok(delta) = serde_wasm_bindgen::from_value::<DownloadDelta>(delta) else {
            return;
        };
        if !delta.finished() {
            return;
        }
        if let Some(url) = PENDING.with(|p| p.borrow_mut().remove(&delta.id)) {
            let _ = web_sys::Url::revoke_object_url(&url);
        }
    });
    downloads_on_changed_add_listener(&on_changed);
    on_changed.forget();
}

/// Registered formats in picker order.
#[wasm_bindgen]
pub fn formats() -> Result<JsValue, JsValue> {
    let entries: Vec<FormatEntry> = cookiejar::list().iter().map(FormatEntry::from).collect();
    to_js(&entries)
}

/// Serializes `cookies` (an array of `chrome.cookies.Cookie`) with format `key`.
#[wasm_bindgen]
pub fn serialize(key: &str, cookies: JsValue) -> Result<String, JsValue> {
    let cookies: Vec<CookieRecord> = serde_wasm_bindgen::from_value(cookies)?;
    Ok(export(key, &cookies)?.text)
}

/// Seven display strings per cookie, identical to the Netscape export fields.
#[wasm_bindgen(js_name = netscapeRows)]
pub fn netscape_rows(cookies: JsValue) -> Result<JsValue, JsValue> {
    let cookies: Vec<CookieRecord> = serde_wasm_bindgen::from_value(cookies)?;
    to_js(&netscape::rows(&cookies))
}

/// Parses `text` with an importable format.
#[wasm_bindgen]
pub fn parse(key: &str, text: &str) -> Result<JsValue, JsValue> {
    let cookies = select::import(key, text).map_err(js_error)?;
    to_js(&cookies)
}

/// Downloads the cookies of the tab at `url` as `<host>_cookies<ext>`.
#[wasm_bindgen(js_name = exportTab)]
pub async fn export_tab(url: String, key: String, save_as: bool) -> Result<JsValue, JsValue> {
    // Validate before asking the browser for anything
    select::format(&key).map_err(js_error)?;
    let tab = parse_url(&url)?;
    let cookies = get_all(&query::for_tab(&tab)).await?;
    download(&key, &cookies, &select::basename(Some(&tab)), save_as).await
}

/// Downloads every cookie in every store partition as `cookies<ext>`.
#[wasm_bindgen(js_name = exportAll)]
pub async fn export_all(key: String) -> Result<JsValue, JsValue> {
    select::format(&key).map_err(js_error)?;
    let cookies = get_all(&CookieQuery::all()).await?;
    download(&key, &cookies, &select::basename(None), false).await
}

/// Copies the tab's cookies to the clipboard and returns the copied text.
#[wasm_bindgen(js_name = copyText)]
pub async fn copy_text(url: String, key: String) -> Result<String, JsValue> {
    select::format(&key).map_err(js_error)?;
    let tab = parse_url(&url)?;
    let cookies = get_all(&query::for_tab(&tab)).await?;
    let export = export(&key, &cookies)?;

    JsFuture::from(clipboard_write_text(&export.text)).await?;
    store_selected_format(&key);
    Ok(export.text)
}

/// Netscape rows for the tab's cookies.
#[wasm_bindgen(js_name = tableRows)]
pub async fn table_rows(url: String) -> Result<JsValue, JsValue> {
    let tab = parse_url(&url)?;
    let cookies = get_all(&query::for_tab(&tab)).await?;
    to_js(&netscape::rows(&cookies))
}

/// Stored format key, or the default when none (or an unknown one) is stored.
#[wasm_bindgen(js_name = selectedFormat)]
pub fn selected_format() -> String {
    let stored = local_storage().and_then(|s| s.get_item(SELECTED_FORMAT_KEY).ok().flatten());
    effective_format(stored.as_deref()).to_string()
}

#[wasm_bindgen(js_name = setSelectedFormat)]
pub fn set_selected_format(key: &str) -> Result<(), JsValue> {
    select::format(key).map_err(js_error)?;
    store_selected_format(key);
    Ok(())
}

fn effective_format(stored: Option<&str>) -> &str {
    let stored = stored.filter(|key| cookiejar::lookup(key).is_some());
    select::resolve_key(None, stored)
}

fn export(key: &str, cookies: &[CookieRecord]) -> Result<Export, JsValue> {
    let export = select::export(key, cookies).map_err(js_error)?;
    for warning in &export.warnings {
        web_sys::console::warn_1(&JsValue::from_str(&warning.to_string()));
    }
    Ok(export)
}

async fn get_all(query: &CookieQuery) -> Result<Vec<CookieRecord>, JsValue> {
    let details = to_js(query)?;
    let value = JsFuture::from(cookies_get_all(&details)).await?;
    Ok(serde_wasm_bindgen::from_value(value)?)
}

/// Hands `cookies` to the browser as a file download.
///
/// The object URL stays alive until `downloads.onChanged` reports the
/// download finished or failed.
async fn download(
    key: &str,
    cookies: &[CookieRecord],
    basename: &str,
    save_as: bool,
) -> Result<JsValue, JsValue> {
    let export = export(key, cookies)?;
    let filename = export.filename(basename);
    let object_url = object_url(&export.text, export.format.mime_type)?;

    let options = to_js(&DownloadOptions {
        url: &object_url,
        filename: &filename,
        save_as,
    })?;
    let id = JsFuture::from(downloads_download(&options))
        .await
        .and_then(|id| {
            id.as_f64()
                .map(|n| n as i32)
                .ok_or_else(|| js_error("download did not return an id"))
        });
    let id = match id {
        Ok(id) => id,
        Err(err) => {
            let _ = web_sys::Url::revoke_object_url(&object_url);
            return Err(err);
        }
    };
    PENDING.with(|p| p.borrow_mut().insert(id, object_url));
    store_selected_format(key);

    to_js(&ExportResult {
        download_id: id,
        filename,
        format: export.format.key,
        count: cookies.len(),
        warnings: export.warnings.iter().map(ToString::to_string).collect(),
    })
}

fn object_url(text: &str, mime_type: &str) -> Result<String, JsValue> {
    let parts = Array::of1(&JsValue::from_str(text));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    web_sys::Url::create_object_url_with_blob(&blob)
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn store_selected_format(key: &str) {
    let stored = local_storage().map(|s| s.set_item(SELECTED_FORMAT_KEY, key));
    if !matches!(stored, Some(Ok(()))) {
        web_sys::console::log_1(&JsValue::from_str("selected format not saved: localStorage unavailable"));
    }
}

fn parse_url(url: &str) -> Result<Url, JsValue> {
    Url::parse(url).map_err(|err| js_error(format!("invalid url '{url}': {err}")))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["chrome", "cookies"], js_name = getAll)]
    fn cookies_get_all(details: &JsValue) -> js_sys::Promise;

    #[wasm_bindgen(js_namespace = ["chrome", "downloads"], js_name = download)]
    fn downloads_download(options: &JsValue) -> js_sys::Promise;

    #[wasm_bindgen(js_namespace = ["chrome", "downloads", "onChanged"], js_name = addListener)]
    fn downloads_on_changed_add_listener(cb: &Closure<dyn FnMut(JsValue)>);

    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText)]
    fn clipboard_write_text(text: &str) -> js_sys::Promise;
}
