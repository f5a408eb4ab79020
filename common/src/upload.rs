//! Upload validation and status state
//!
//! The panel validates a file name before any network call, then tracks a
//! single-slot status banner plus the in-flight flag.

/// File extensions the backend accepts, matched case-insensitively
pub const ACCEPTED_EXTENSIONS: [&str; 3] = [".xml", ".mxl", ".pdf"];

/// Banner shown when the extension check fails
pub const UNSUPPORTED_FORMAT_MESSAGE: &str = "Please upload a MusicXML (.xml, .mxl) or PDF file.";

/// Banner shown when the upload request fails
pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload file. Please try again.";

/// How long the success banner stays visible, in milliseconds
pub const SUCCESS_BANNER_MS: u32 = 3_000;

/// Extension of `name` from its last dot, lowercased
pub fn file_extension(name: &str) -> Option<String> {
    name.rfind('.').map(|i| name[i..].to_ascii_lowercase())
}

/// Whether `name` carries one of the accepted extensions
pub fn is_accepted_file(name: &str) -> bool {
    file_extension(name).is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
}

/// Outcome kind of the last upload attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Single-slot status banner, overwritten on each attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadStatus {
    pub kind: StatusKind,
    pub message: String,
}

/// Upload panel state: the in-flight flag and the current banner
#[derive(Debug, Clone, Default)]
pub struct UploadState {
    uploading: bool,
    status: Option<UploadStatus>,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn status(&self) -> Option<&UploadStatus> {
        self.status.as_ref()
    }

    /// Start an upload attempt for `file_name`.
    ///
    /// Returns `true` when the file passed validation and the upload is
    /// now in flight. An unsupported extension sets the error banner and
    /// returns `false` without touching the in-flight flag; a call while
    /// another upload is outstanding is a no-op.
    pub fn begin(&mut self, file_name: &str) -> bool {
        if self.uploading {
            return false;
        }
        if !is_accepted_file(file_name) {
            self.status = Some(UploadStatus {
                kind: StatusKind::Error,
                message: UNSUPPORTED_FORMAT_MESSAGE.to_string(),
            });
            return false;
        }
        self.uploading = true;
        self.status = None;
        true
    }

    /// Record a successful upload of `file_name`.
    pub fn succeed(&mut self, file_name: &str) {
        self.uploading = false;
        self.status = Some(UploadStatus {
            kind: StatusKind::Success,
            message: format!("Successfully uploaded {}!", file_name),
        });
    }

    /// Record a failed upload; the banner persists until the next action.
    pub fn fail(&mut self) {
        self.uploading = false;
        self.status = Some(UploadStatus {
            kind: StatusKind::Error,
            message: UPLOAD_FAILED_MESSAGE.to_string(),
        });
    }

    /// Drop the current banner (success auto-dismiss).
    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_extensions() {
        assert!(is_accepted_file("score.xml"));
        assert!(is_accepted_file("score.mxl"));
        assert!(is_accepted_file("score.pdf"));
    }

    #[test]
    fn test_extension_case_insensitive() {
        assert!(is_accepted_file("SCORE.XML"));
        assert!(is_accepted_file("Missa Brevis.PdF"));
        assert!(is_accepted_file("kyrie.MxL"));
    }

    #[test]
    fn test_rejected_extensions() {
        assert!(!is_accepted_file("score.docx"));
        assert!(!is_accepted_file("score.midi"));
        assert!(!is_accepted_file("score.xml.bak"));
    }

    #[test]
    fn test_dotless_name_rejected() {
        assert!(!is_accepted_file("score"));
        assert!(!is_accepted_file(""));
    }

    #[test]
    fn test_file_extension_last_dot_wins() {
        assert_eq!(file_extension("a.b.PDF").as_deref(), Some(".pdf"));
        assert_eq!(file_extension("noext"), None);
    }

    #[test]
    fn test_begin_rejects_without_network() {
        let mut state = UploadState::new();
        let started = state.begin("score.docx");

        assert!(!started);
        assert!(!state.is_uploading());
        let status = state.status().expect("banner expected");
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.message, UNSUPPORTED_FORMAT_MESSAGE);
    }

    #[test]
    fn test_begin_accepts_and_clears_old_banner() {
        let mut state = UploadState::new();
        state.begin("bad.docx");
        assert!(state.status().is_some());

        let started = state.begin("score.xml");
        assert!(started);
        assert!(state.is_uploading());
        assert!(state.status().is_none());
    }

    #[test]
    fn test_begin_noop_while_in_flight() {
        let mut state = UploadState::new();
        assert!(state.begin("first.xml"));
        assert!(!state.begin("second.xml"));
        assert!(state.is_uploading());
    }

    #[test]
    fn test_succeed_names_file_and_clears_flag() {
        let mut state = UploadState::new();
        state.begin("score.xml");
        state.succeed("score.xml");

        assert!(!state.is_uploading());
        let status = state.status().expect("banner expected");
        assert_eq!(status.kind, StatusKind::Success);
        assert!(status.message.contains("score.xml"));
    }

    #[test]
    fn test_success_banner_clears_after_delay() {
        let mut state = UploadState::new();
        state.begin("score.xml");
        state.succeed("score.xml");
        state.clear_status();
        assert!(state.status().is_none());
    }

    #[test]
    fn test_fail_sets_fixed_message() {
        let mut state = UploadState::new();
        state.begin("score.pdf");
        state.fail();

        assert!(!state.is_uploading());
        let status = state.status().expect("banner expected");
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.message, UPLOAD_FAILED_MESSAGE);
    }

    #[test]
    fn test_status_overwritten_each_attempt() {
        let mut state = UploadState::new();
        state.begin("score.xml");
        state.fail();
        state.begin("hymn.mxl");
        state.succeed("hymn.mxl");

        let status = state.status().expect("banner expected");
        assert_eq!(status.kind, StatusKind::Success);
        assert!(status.message.contains("hymn.mxl"));
    }
}
