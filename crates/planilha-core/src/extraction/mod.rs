pub mod pdftotext;

use std::path::Path;

use crate::consolidate::consolidate;
use crate::error::ConversionError;
use crate::model::{ConsolidatedResult, ExtractedTable};
use crate::notify::{Notification, Notifier};

/// Trait for PDF table-detection backends.
///
/// A backend scans the whole document in stream mode and returns every
/// table grid it finds, in page order. The detection algorithm itself is
/// external to this crate; backends only wrap a capability.
pub trait TableDetector: Send + Sync {
    /// Detect all tables in the document at `pdf_path`. The path is assumed
    /// to exist and be readable; existence checks are the caller's concern.
    fn detect_tables(&self, pdf_path: &Path) -> Result<Vec<ExtractedTable>, ConversionError>;

    /// Name of this detection backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Extract one document into a consolidated result, containing any fault.
///
/// Zero detected tables produce an empty result, not an error. A detector
/// fault is reported through `notifier` (identifying the failing path and
/// the underlying cause) and also degrades to an empty result, so one bad
/// document never aborts the surrounding batch.
pub fn extract_document(
    detector: &dyn TableDetector,
    pdf_path: &Path,
    notifier: &dyn Notifier,
) -> ConsolidatedResult {
    match detector.detect_tables(pdf_path) {
        Ok(tables) => consolidate(tables),
        Err(e) => {
            notifier.notify(Notification::ExtractionFailed {
                path: pdf_path.to_path_buf(),
                message: e.to_string(),
            });
            ConsolidatedResult::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FailingDetector;

    impl TableDetector for FailingDetector {
        fn detect_tables(
            &self,
            _pdf_path: &Path,
        ) -> Result<Vec<ExtractedTable>, ConversionError> {
            Err(ConversionError::Detection("startxref not found".into()))
        }

        fn backend_name(&self) -> &str {
            "failing"
        }
    }

    struct SilentDetector;

    impl TableDetector for SilentDetector {
        fn detect_tables(
            &self,
            _pdf_path: &Path,
        ) -> Result<Vec<ExtractedTable>, ConversionError> {
            Ok(vec![])
        }

        fn backend_name(&self) -> &str {
            "silent"
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        seen: Mutex<Vec<Notification>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.seen.lock().unwrap().push(notification);
        }
    }

    #[test]
    fn detector_fault_degrades_to_empty_result_with_notification() {
        let notifier = RecordingNotifier::default();
        let result = extract_document(&FailingDetector, Path::new("bad.pdf"), &notifier);

        assert!(result.is_empty());
        let seen = notifier.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        match &seen[0] {
            Notification::ExtractionFailed { path, message } => {
                assert_eq!(path, Path::new("bad.pdf"));
                assert!(message.contains("startxref"));
            }
            other => panic!("unexpected notification: {other:?}"),
        }
    }

    #[test]
    fn zero_tables_is_empty_but_not_a_fault() {
        let notifier = RecordingNotifier::default();
        let result = extract_document(&SilentDetector, Path::new("blank.pdf"), &notifier);

        assert!(result.is_empty());
        assert!(notifier.seen.lock().unwrap().is_empty());
    }
}
