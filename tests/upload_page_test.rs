//! Upload Page Tests

#![cfg(target_arch = "wasm32")]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use leptos::prelude::*;
use leptos_router::components::Router;
use slide_search_web::api::{provide_api_client, ApiClient, ApiResult, HttpResponse, SlideFile, Transport};
use slide_search_web::config::ApiConfig;
use slide_search_web::pages::upload::{DROP_HERE_MESSAGE, FORMATS_HINT, PROMPT_MESSAGE, SUCCESS_MESSAGE};
use slide_search_web::pages::UploadPage;
use url::Url;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

/// Accepts every upload and records the batches it received.
#[derive(Default)]
struct RecordingUpload {
    batches: Mutex<Vec<(String, Vec<SlideFile>)>>,
}

#[async_trait(?Send)]
impl Transport for RecordingUpload {
    async fn get(&self, _url: Url) -> ApiResult<HttpResponse> {
        Ok(HttpResponse { status: 200, body: "[]".to_string() })
    }

    async fn post_multipart(&self, _url: Url, field: &str, files: Vec<SlideFile>) -> ApiResult<HttpResponse> {
        self.batches.lock().unwrap().push((field.to_string(), files));
        Ok(HttpResponse { status: 200, body: "{\"status\":\"ok\"}".to_string() })
    }
}

fn mount_page() -> web_sys::HtmlElement {
    mount_with(ApiClient::new(&ApiConfig::default()))
}

fn mount_with(client: ApiClient) -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let root: web_sys::HtmlElement = document.create_element("div").unwrap().unchecked_into();
    document.body().unwrap().append_child(&root).unwrap();

    leptos::mount::mount_to(root.clone(), move || {
        provide_api_client(client);
        view! {
            <Router>
                <UploadPage />
            </Router>
        }
    })
    .forget();
    root
}

fn zone(root: &web_sys::HtmlElement) -> web_sys::Element {
    root.query_selector("[data-testid='drop-zone']").unwrap().unwrap()
}

fn fire(target: &web_sys::Element, name: &str) {
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = web_sys::Event::new_with_event_init_dict(name, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

async fn tick() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 20)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn test_idle_zone_shows_prompt() {
    let root = mount_page();
    let zone = zone(&root);

    assert_eq!(zone.get_attribute("data-status").as_deref(), Some("idle"));
    let text = zone.text_content().unwrap_or_default();
    assert!(text.contains(PROMPT_MESSAGE));
    assert!(text.contains(FORMATS_HINT));
    assert!(!root.text_content().unwrap_or_default().contains(SUCCESS_MESSAGE));
}

#[wasm_bindgen_test]
fn test_file_input_accepts_slides_only() {
    let root = mount_page();
    let input = root.query_selector("input[type='file']").unwrap().unwrap();

    let accept = input.get_attribute("accept").unwrap_or_default();
    assert!(accept.contains(".pptx"));
    assert!(accept.contains("application/pdf"));
    assert!(input.has_attribute("multiple"));
}

#[wasm_bindgen_test]
async fn test_drag_over_and_leave() {
    let root = mount_page();
    let zone = zone(&root);

    fire(&zone, "dragover");
    tick().await;
    assert!(zone.text_content().unwrap_or_default().contains(DROP_HERE_MESSAGE));

    fire(&zone, "dragleave");
    tick().await;
    assert!(zone.text_content().unwrap_or_default().contains(PROMPT_MESSAGE));
}

fn drop_files(target: &web_sys::Element, files: &[web_sys::File]) {
    let transfer = web_sys::DataTransfer::new().unwrap();
    for file in files {
        transfer.items().add_with_file(file).unwrap();
    }

    let init = web_sys::DragEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_data_transfer(Some(&transfer));
    let event = web_sys::DragEvent::new_with_event_init_dict("drop", &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn file(name: &str) -> web_sys::File {
    let bits = js_sys::Array::of1(&JsValue::from_str("slide bytes"));
    web_sys::File::new_with_str_sequence(&bits, name).unwrap()
}

#[wasm_bindgen_test]
async fn test_dropping_a_deck_uploads_it() {
    let transport = Arc::new(RecordingUpload::default());
    let client = ApiClient::with_transport(Url::parse("http://api.test").unwrap(), transport.clone());
    let root = mount_with(client);

    drop_files(&zone(&root), &[file("deck.pptx")]);
    tick().await;
    tick().await;

    let batches = transport.batches.lock().unwrap().clone();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].0, "files");
    assert_eq!(batches[0].1.len(), 1);
    assert_eq!(batches[0].1[0].name, "deck.pptx");
    assert_eq!(batches[0].1[0].bytes, b"slide bytes".to_vec());

    let text = root.text_content().unwrap_or_default();
    assert_eq!(text.matches(SUCCESS_MESSAGE).count(), 1);
    assert_eq!(zone(&root).get_attribute("data-status").as_deref(), Some("success"));
}

#[wasm_bindgen_test]
async fn test_unsupported_file_never_leaves_idle() {
    let transport = Arc::new(RecordingUpload::default());
    let client = ApiClient::with_transport(Url::parse("http://api.test").unwrap(), transport.clone());
    let root = mount_with(client);

    drop_files(&zone(&root), &[file("notes.txt")]);
    tick().await;

    assert!(transport.batches.lock().unwrap().is_empty());
    assert_eq!(zone(&root).get_attribute("data-status").as_deref(), Some("idle"));
}
