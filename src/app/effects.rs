use crate::app::{App, Message, Model, ToastLevel};
use crate::document;

impl App {
    pub(super) fn handle_message_side_effects(&self, model: &mut Model, msg: &Message) {
        if matches!(msg, Message::Save) {
            self.save(model);
        }
    }

    /// Write the buffer through the storage port.
    ///
    /// Failures are reported as a toast; the buffer and its modified state
    /// are left as they were. An unedited file with mixed line endings is
    /// not rewritten.
    fn save(&self, model: &mut Model) {
        if model.has_mixed_endings() && !model.is_dirty() {
            tracing::info!(
                path = %model.file_path.display(),
                "save skipped: unchanged mixed endings"
            );
            model.show_toast(
                ToastLevel::Info,
                format!("No changes; {} left as is", model.file_name()),
            );
            return;
        }
        let data = document::encode(&model.buffer, model.separator);
        match self.storage.write(&model.file_path, data.as_bytes()) {
            Ok(()) => {
                model.mark_saved();
                tracing::info!(
                    path = %model.file_path.display(),
                    bytes = data.len(),
                    "saved file"
                );
                model.show_toast(
                    ToastLevel::Info,
                    format!("Wrote {} bytes to {}", data.len(), model.file_name()),
                );
            }
            Err(err) => {
                tracing::warn!(path = %model.file_path.display(), error = %err, "save failed");
                model.show_toast(ToastLevel::Error, format!("Save failed: {err}"));
            }
        }
    }
}
