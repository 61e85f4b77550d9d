//! Upload Page
//!
//! A drop zone that doubles as a file picker. Each accepted batch becomes one
//! upload job; the zone and the outcome notice follow the job's status.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use phosphor_leptos::{Icon, CLOUD_ARROW_UP};
use web_sys::{File, FileList, HtmlInputElement};

use crate::api::{use_api_client, ApiClient, ApiResult, SlideFile, UploadReceipt};
use crate::components::design_system::{Notice, NoticeKind};
use crate::services::upload_job::{
    accept_attribute, partition_files, DropZoneState, JobTicket, QueuedFile, UploadStatus,
    UploadTracker, ZoneMessage,
};

pub const UPLOADING_MESSAGE: &str = "Uploading...";
pub const DROP_HERE_MESSAGE: &str = "Drop the files here...";
pub const PROMPT_MESSAGE: &str = "Drag and drop files here, or click to select files";
pub const FORMATS_HINT: &str = "Supported formats: PPTX, PDF";
pub const SUCCESS_MESSAGE: &str = "Files uploaded successfully!";
pub const FAILURE_MESSAGE: &str = "Error uploading files. Please try again.";

fn files_from(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

fn queued_file(file: &File) -> QueuedFile {
    QueuedFile {
        name: file.name(),
        media_type: file.type_(),
        size_bytes: file.size() as u64,
    }
}

async fn upload_batch(client: &ApiClient, files: &[File]) -> ApiResult<UploadReceipt> {
    let mut batch = Vec::with_capacity(files.len());
    for file in files {
        batch.push(SlideFile::read(file).await?);
    }
    client.upload_slides(batch).await
}

async fn run_upload(
    client: ApiClient,
    tracker: StoredValue<UploadTracker>,
    status: RwSignal<UploadStatus>,
    ticket: JobTicket,
    files: Vec<File>,
) {
    let outcome = upload_batch(&client, &files).await;
    match &outcome {
        Ok(_) => log::info!("Upload job {} finished", ticket.id()),
        Err(e) => log::error!("Upload job {} failed: {e}", ticket.id()),
    }

    let settled = tracker
        .try_update_value(|t| t.settle(ticket, outcome.is_ok()).then(|| t.status()))
        .flatten();
    if let Some(next) = settled {
        status.set(next);
    }
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let client = use_api_client();
    let tracker = StoredValue::new(UploadTracker::new());
    let status = RwSignal::new(UploadStatus::Idle);
    let zone = RwSignal::new(DropZoneState::Idle);
    let file_input = NodeRef::<html::Input>::new();

    let submit = move |files: Vec<File>| {
        let (accepted, rejected) = partition_files(files, queued_file);
        for file in &rejected {
            log::warn!("Skipping '{}': unsupported type '{}'", file.name, file.media_type);
        }

        let batch = accepted.iter().map(queued_file).collect();
        let Some(ticket) = tracker.try_update_value(|t| t.begin(batch)).flatten() else {
            return;
        };
        status.set(UploadStatus::Pending);
        spawn_local(run_upload(client.clone(), tracker, status, ticket, accepted));
    };

    let on_drag_over = move |evt: ev::DragEvent| {
        evt.prevent_default();
        zone.set(DropZoneState::DragOver);
    };
    let on_drag_leave = move |_: ev::DragEvent| {
        zone.set(DropZoneState::Idle);
    };
    let on_drop = {
        let submit = submit.clone();
        move |evt: ev::DragEvent| {
            evt.prevent_default();
            zone.set(DropZoneState::Idle);
            if let Some(list) = evt.data_transfer().and_then(|dt| dt.files()) {
                submit(files_from(&list));
            }
        }
    };
    let on_pick = move |evt: ev::Event| {
        let input = event_target::<HtmlInputElement>(&evt);
        if let Some(list) = input.files() {
            submit(files_from(&list));
        }
        // Lets the same file be picked again.
        input.set_value("");
    };
    let open_picker = move |_: ev::MouseEvent| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let zone_class = move || {
        let base = "border-2 border-dashed rounded-lg p-12 text-center cursor-pointer transition-colors";
        match zone.get() {
            DropZoneState::DragOver => format!("{base} border-primary-500 bg-primary-50"),
            DropZoneState::Idle => format!("{base} border-gray-300 hover:border-primary-400"),
        }
    };

    let zone_message = move || match ZoneMessage::select(status.get(), zone.get()) {
        ZoneMessage::Uploading => view! {
            <p class="text-gray-600">{UPLOADING_MESSAGE}</p>
        }.into_any(),
        ZoneMessage::DropHere => view! {
            <p class="text-primary-600">{DROP_HERE_MESSAGE}</p>
        }.into_any(),
        ZoneMessage::Prompt => view! {
            <div>
                <p class="text-gray-600">{PROMPT_MESSAGE}</p>
                <p class="mt-2 text-sm text-gray-500">{FORMATS_HINT}</p>
            </div>
        }.into_any(),
    };

    let outcome = move || match status.get() {
        UploadStatus::Success => Some(view! {
            <Notice kind=NoticeKind::Success class="mt-4">{SUCCESS_MESSAGE}</Notice>
        }.into_any()),
        UploadStatus::Error => Some(view! {
            <Notice kind=NoticeKind::Error class="mt-4">{FAILURE_MESSAGE}</Notice>
        }.into_any()),
        UploadStatus::Idle | UploadStatus::Pending => None,
    };

    view! {
        <div class="max-w-3xl mx-auto">
            <h1 class="text-2xl font-bold text-gray-900 mb-6">"Upload Slides"</h1>
            <div
                class=zone_class
                data-testid="drop-zone"
                data-status=move || status.get().as_str()
                on:click=open_picker
                on:dragenter=on_drag_over.clone()
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <input
                    type="file"
                    multiple=true
                    accept=accept_attribute()
                    class="hidden"
                    node_ref=file_input
                    on:click=|evt: ev::MouseEvent| evt.stop_propagation()
                    on:change=on_pick
                />
                <div class="flex justify-center mb-4 text-gray-400">
                    <Icon icon=CLOUD_ARROW_UP size="48px" />
                </div>
                {zone_message}
            </div>
            {outcome}
        </div>
    }
}
