//! Upload job state
//!
//! One batch of dropped or picked files is one job. Starting a new batch
//! replaces the previous job; a response for a replaced job is ignored.

use uuid::Uuid;

pub const PPTX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Media types the drop surface lets through, with their extensions.
pub const ACCEPTED_TYPES: &[(&str, &str)] = &[(PPTX_MEDIA_TYPE, ".pptx"), (PDF_MEDIA_TYPE, ".pdf")];

/// Value for the file input's `accept` attribute.
pub fn accept_attribute() -> String {
    ACCEPTED_TYPES
        .iter()
        .flat_map(|(media_type, extension)| [*media_type, *extension])
        .collect::<Vec<_>>()
        .join(",")
}

/// Whether a file may be uploaded.
///
/// A declared accepted type is enough. Browsers frequently report no type
/// (or a generic binary type) for `.pptx`, so in that case the extension
/// decides.
pub fn is_accepted(name: &str, media_type: &str) -> bool {
    let media_type = media_type.trim().to_ascii_lowercase();
    if ACCEPTED_TYPES.iter().any(|(accepted, _)| *accepted == media_type) {
        return true;
    }
    if !media_type.is_empty() && media_type != "application/octet-stream" {
        return false;
    }

    let name = name.to_ascii_lowercase();
    ACCEPTED_TYPES
        .iter()
        .any(|(_, extension)| name.ends_with(extension))
}

/// Split a batch into the files that may be uploaded and summaries of the
/// ones that may not. Order is preserved on both sides.
pub fn partition_files<T>(
    files: Vec<T>,
    describe: impl Fn(&T) -> QueuedFile,
) -> (Vec<T>, Vec<QueuedFile>) {
    let mut accepted = Vec::with_capacity(files.len());
    let mut rejected = Vec::new();
    for file in files {
        let summary = describe(&file);
        if is_accepted(&summary.name, &summary.media_type) {
            accepted.push(file);
        } else {
            rejected.push(summary);
        }
    }
    (accepted, rejected)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

impl UploadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadStatus::Idle => "idle",
            UploadStatus::Pending => "pending",
            UploadStatus::Success => "success",
            UploadStatus::Error => "error",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, UploadStatus::Pending)
    }
}

/// What the job remembers about each file of its batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedFile {
    pub name: String,
    pub media_type: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadJob {
    pub id: Uuid,
    pub files: Vec<QueuedFile>,
    pub status: UploadStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobTicket {
    id: Uuid,
}

impl JobTicket {
    pub fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Default)]
pub struct UploadTracker {
    job: Option<UploadJob>,
}

impl UploadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> UploadStatus {
        self.job.as_ref().map(|job| job.status).unwrap_or_default()
    }

    pub fn job(&self) -> Option<&UploadJob> {
        self.job.as_ref()
    }

    /// Start a job for an already-filtered batch. An empty batch starts
    /// nothing and leaves the current state as it is.
    pub fn begin(&mut self, files: Vec<QueuedFile>) -> Option<JobTicket> {
        if files.is_empty() {
            log::debug!("Ignoring empty upload batch");
            return None;
        }

        let id = Uuid::new_v4();
        if let Some(previous) = &self.job {
            log::debug!("Upload job {} replaced by {}", previous.id, id);
        }
        self.job = Some(UploadJob {
            id,
            files,
            status: UploadStatus::Pending,
        });
        Some(JobTicket { id })
    }

    /// Record the outcome of a job. Returns `false` when the ticket belongs
    /// to a job that has since been replaced.
    pub fn settle(&mut self, ticket: JobTicket, succeeded: bool) -> bool {
        match self.job.as_mut() {
            Some(job) if job.id == ticket.id && job.status.is_pending() => {
                job.status = if succeeded {
                    UploadStatus::Success
                } else {
                    UploadStatus::Error
                };
                true
            }
            _ => {
                log::debug!("Ignoring outcome of superseded upload job {}", ticket.id);
                false
            }
        }
    }
}

/// Visual state of the drop zone, tracked separately from the job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropZoneState {
    #[default]
    Idle,
    DragOver,
}

/// Text shown inside the drop zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneMessage {
    Uploading,
    DropHere,
    Prompt,
}

impl ZoneMessage {
    pub fn select(status: UploadStatus, zone: DropZoneState) -> Self {
        if status.is_pending() {
            ZoneMessage::Uploading
        } else if zone == DropZoneState::DragOver {
            ZoneMessage::DropHere
        } else {
            ZoneMessage::Prompt
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queued(name: &str, media_type: &str) -> QueuedFile {
        QueuedFile {
            name: name.to_string(),
            media_type: media_type.to_string(),
            size_bytes: 1024,
        }
    }

    fn accepted(batch: Vec<QueuedFile>) -> Vec<QueuedFile> {
        partition_files(batch, QueuedFile::clone).0
    }

    #[test]
    fn test_accepts_declared_types() {
        assert!(is_accepted("deck.pptx", PPTX_MEDIA_TYPE));
        assert!(is_accepted("report.pdf", PDF_MEDIA_TYPE));
        assert!(is_accepted("renamed.bin", "Application/PDF"));
    }

    #[test]
    fn test_extension_fallback_for_missing_type() {
        assert!(is_accepted("deck.pptx", ""));
        assert!(is_accepted("DECK.PPTX", "application/octet-stream"));
        assert!(!is_accepted("deck.key", ""));
    }

    #[test]
    fn test_rejects_other_types() {
        assert!(!is_accepted("notes.txt", "text/plain"));
        assert!(!is_accepted("photo.png", "image/png"));
        assert!(!is_accepted("fake.pdf", "text/plain"));
        assert!(!is_accepted("old.ppt", "application/vnd.ms-powerpoint"));
    }

    #[test]
    fn test_accept_attribute_lists_types_and_extensions() {
        let accept = accept_attribute();
        assert!(accept.contains(PPTX_MEDIA_TYPE));
        assert!(accept.contains(".pptx"));
        assert!(accept.contains(PDF_MEDIA_TYPE));
        assert!(accept.contains(".pdf"));
    }

    #[test]
    fn test_partition_keeps_order_and_reports_rejects() {
        let (accepted, rejected) = partition_files(
            vec![
                queued("a.pdf", PDF_MEDIA_TYPE),
                queued("notes.txt", "text/plain"),
                queued("b.pptx", ""),
                queued("photo.png", "image/png"),
            ],
            QueuedFile::clone,
        );

        let names = |files: &[QueuedFile]| files.iter().map(|f| f.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&accepted), vec!["a.pdf", "b.pptx"]);
        assert_eq!(names(&rejected), vec!["notes.txt", "photo.png"]);
    }

    #[test]
    fn test_idle_until_first_batch() {
        let tracker = UploadTracker::new();
        assert_eq!(tracker.status(), UploadStatus::Idle);
        assert!(tracker.job().is_none());
    }

    #[test]
    fn test_success_path() {
        let mut tracker = UploadTracker::new();
        let ticket = tracker.begin(vec![queued("deck.pptx", PPTX_MEDIA_TYPE)]).unwrap();
        assert_eq!(tracker.status(), UploadStatus::Pending);

        assert!(tracker.settle(ticket, true));
        assert_eq!(tracker.status(), UploadStatus::Success);
    }

    #[test]
    fn test_error_path() {
        let mut tracker = UploadTracker::new();
        let ticket = tracker.begin(vec![queued("deck.pdf", PDF_MEDIA_TYPE)]).unwrap();
        assert!(tracker.settle(ticket, false));
        assert_eq!(tracker.status(), UploadStatus::Error);
    }

    #[test]
    fn test_unsupported_file_alone_stays_idle() {
        let mut tracker = UploadTracker::new();
        let batch = accepted(vec![queued("notes.txt", "text/plain")]);
        assert!(tracker.begin(batch).is_none());
        assert_eq!(tracker.status(), UploadStatus::Idle);
    }

    #[test]
    fn test_mixed_batch_keeps_accepted_files() {
        let mut tracker = UploadTracker::new();
        let batch = accepted(vec![
            queued("deck.pptx", ""),
            queued("notes.txt", "text/plain"),
        ]);
        tracker.begin(batch).unwrap();
        let job = tracker.job().unwrap();
        assert_eq!(job.files.len(), 1);
        assert_eq!(job.files[0].name, "deck.pptx");
    }

    #[test]
    fn test_new_batch_after_outcome_goes_pending() {
        let mut tracker = UploadTracker::new();
        let first = tracker.begin(vec![queued("a.pdf", PDF_MEDIA_TYPE)]).unwrap();
        tracker.settle(first, false);

        tracker.begin(vec![queued("b.pdf", PDF_MEDIA_TYPE)]).unwrap();
        assert_eq!(tracker.status(), UploadStatus::Pending);
    }

    #[test]
    fn test_rejected_batch_keeps_previous_outcome() {
        let mut tracker = UploadTracker::new();
        let first = tracker.begin(vec![queued("a.pdf", PDF_MEDIA_TYPE)]).unwrap();
        tracker.settle(first, true);

        assert!(tracker.begin(Vec::new()).is_none());
        assert_eq!(tracker.status(), UploadStatus::Success);
    }

    #[test]
    fn test_superseded_job_outcome_ignored() {
        let mut tracker = UploadTracker::new();
        let old = tracker.begin(vec![queued("a.pdf", PDF_MEDIA_TYPE)]).unwrap();
        let new = tracker.begin(vec![queued("b.pdf", PDF_MEDIA_TYPE)]).unwrap();
        assert_ne!(old, new);

        assert!(!tracker.settle(old, false));
        assert_eq!(tracker.status(), UploadStatus::Pending);
        assert!(tracker.settle(new, true));
        assert_eq!(tracker.status(), UploadStatus::Success);
    }

    #[test]
    fn test_settle_twice_is_ignored() {
        let mut tracker = UploadTracker::new();
        let ticket = tracker.begin(vec![queued("a.pdf", PDF_MEDIA_TYPE)]).unwrap();
        assert!(tracker.settle(ticket, true));
        assert!(!tracker.settle(ticket, false));
        assert_eq!(tracker.status(), UploadStatus::Success);
    }

    #[test]
    fn test_zone_message_precedence() {
        assert_eq!(
            ZoneMessage::select(UploadStatus::Pending, DropZoneState::DragOver),
            ZoneMessage::Uploading
        );
        assert_eq!(
            ZoneMessage::select(UploadStatus::Success, DropZoneState::DragOver),
            ZoneMessage::DropHere
        );
        assert_eq!(
            ZoneMessage::select(UploadStatus::Idle, DropZoneState::Idle),
            ZoneMessage::Prompt
        );
        assert_eq!(
            ZoneMessage::select(UploadStatus::Error, DropZoneState::Idle),
            ZoneMessage::Prompt
        );
    }
}
