use console::style;
use planilha_core::notify::{Notification, Notifier};

/// Renders pipeline notifications as styled terminal lines.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        match notification {
            Notification::ExtractionFailed { path, message } => {
                print_error(&format!("failed to process {}: {message}", path.display()));
            }
            Notification::BatchCompleted { output_path } => {
                print_success(&format!("workbook saved to {}", output_path.display()));
            }
        }
    }
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", style("error:").red().bold());
}

pub fn print_warning(message: &str) {
    eprintln!("{} {message}", style("warning:").yellow().bold());
}

pub fn print_success(message: &str) {
    println!("{} {message}", style("success:").green().bold());
}
