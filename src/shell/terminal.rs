//! Terminal front-end for the download shell.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use crate::api::PostProvider;
use crate::error::Result;
use crate::media::{AudioExtractor, AudioFormat};
use crate::output::{create_spinner, print_error, print_post_summary, print_success, print_warning};

use super::{Notice, Shell, ShellEvent, ShellState};

/// Run the prompt loop until the user enters an empty URL.
pub async fn run_interactive<P, A>(shell: &Shell<P, A>, mut state: ShellState) -> Result<()>
where
    P: PostProvider,
    A: AudioExtractor,
{
    let theme = ColorfulTheme::default();

    loop {
        let url: String = Input::with_theme(&theme)
            .with_prompt("Post URL (leave empty to quit)")
            .allow_empty(true)
            .interact_text()?;

        if url.trim().is_empty() {
            break;
        }
        state = state.apply(ShellEvent::UrlChanged(url));

        let directory_prompt = match &state.default_directory {
            Some(dir) => format!("Directory [{}]", dir.display()),
            None => "Directory".to_string(),
        };
        let directory: String = Input::with_theme(&theme)
            .with_prompt(directory_prompt)
            .allow_empty(true)
            .interact_text()?;
        state = state.apply(ShellEvent::DirectoryChanged(directory));

        if !state.can_get_post() {
            print_warning("Enter both a post URL and a directory");
            continue;
        }

        let spinner = create_spinner("Fetching post...");
        state = shell.get_post(state).await;
        spinner.finish_and_clear();
        show_notice(&state);

        let Some(resolved) = state.resolved() else {
            continue;
        };
        print_post_summary(resolved);

        if state.audio_controls_visible() {
            let audio_only = Confirm::with_theme(&theme)
                .with_prompt("Download audio only?")
                .default(false)
                .interact()?;
            state = state.apply(ShellEvent::AudioOnlyToggled(audio_only));

            if audio_only {
                let default = AudioFormat::ALL
                    .iter()
                    .position(|f| *f == state.audio_format)
                    .unwrap_or(0);
                let selection = Select::with_theme(&theme)
                    .with_prompt("Audio format")
                    .items(&AudioFormat::ALL)
                    .default(default)
                    .interact()?;
                state = state.apply(ShellEvent::AudioFormatSelected(AudioFormat::ALL[selection]));
            }
        }

        let confirmed = Confirm::with_theme(&theme)
            .with_prompt("Download now?")
            .default(true)
            .interact()?;
        if !confirmed {
            state = state.apply(ShellEvent::Reset);
            continue;
        }

        state = shell.download(state).await;
        show_notice(&state);
    }

    Ok(())
}

fn show_notice(state: &ShellState) {
    match &state.notice {
        Some(Notice::Info(message)) => print_success(message),
        Some(Notice::Error(message)) => print_error(message),
        None => {}
    }
}
