//! Console output utilities.

use console::style;

use crate::download::{DownloadOutcome, ResolvedPost};

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     InstaSaver                                        ║
║     Instagram post downloader                         ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print what was found at a post URL.
pub fn print_post_summary(resolved: &ResolvedPost) {
    let post = &resolved.post;

    println!();
    println!("{}", style("Post ready to download:").bold());
    println!("  Author: {}", post.author);
    println!("  ID:     {}", post.post_id);
    println!("  Type:   {}", resolved.kind);
    if let Some(taken_at) = post.taken_at {
        println!("  Posted: {}", taken_at.format("%Y-%m-%d %H:%M UTC"));
    }
    if let Some(caption) = post.caption.as_deref() {
        let first_line = caption.lines().next().unwrap_or_default();
        let preview: String = first_line.chars().take(60).collect();
        println!("  Text:   {}", style(preview).dim());
    }
    println!();
}

/// Print the result of a download.
pub fn print_outcome(outcome: &DownloadOutcome) {
    print_success(&format!("Saved {}", outcome.path.display()));

    if let Some(video) = outcome.video_path.as_ref().filter(|_| !outcome.video_removed) {
        print_info(&format!("Video kept at {}", video.display()));
    }
}
