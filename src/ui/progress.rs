use indicatif::{ProgressBar, ProgressStyle};

/// Bar counting completed tasks of one scenario.
pub fn create_task_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{msg:>16} ▕{bar:25}▏ {pos}/{len} tasks • {elapsed_precise}")
    {
        pb.set_style(style.progress_chars("█░ "));
    }
    pb.set_message(label.to_string());
    pb
}
