use dnsfilter_application::use_cases::DnsServerConfigPresenter;
use dnsfilter_domain::config::EditorConfig;
use dnsfilter_infrastructure::widget::VecDnsListAdapter;
use tracing::{info, warn};

use crate::commands;
use crate::di::Repositories;
use crate::view::ConsoleView;
use crate::Command;

/// Runs one command against the settings screen: restores the pending
/// edits, applies the command and keeps the edits for the next run unless
/// the screen closed.
pub async fn run(
    command: Command,
    repos: &Repositories,
    editor: &EditorConfig,
) -> anyhow::Result<()> {
    if let Command::Discard = command {
        repos.saved_state.clear().await?;
        info!("Unsaved DNS settings discarded");
        return Ok(());
    }

    let saved_state = match repos.saved_state.load().await {
        Ok(state) => state,
        Err(e) => {
            warn!(error = %e, "Ignoring unreadable editor state");
            None
        }
    };

    let view = ConsoleView::new();
    let mut presenter = DnsServerConfigPresenter::new(
        repos.config_store.clone(),
        repos.defaults.clone(),
        view.clone(),
        Box::new(VecDnsListAdapter::new()),
        editor,
        saved_state,
    )
    .await;

    if view.is_closed() {
        repos.saved_state.clear().await?;
        anyhow::bail!(
            "DNS filter configuration {} could not be loaded",
            repos.config_store.path().display()
        );
    }

    commands::run(command, &mut presenter, &view).await?;

    if view.is_closed() {
        repos.saved_state.clear().await?;
    } else {
        let state = presenter.save_state(&view.edit_mode());
        repos.saved_state.save(&state).await?;
    }

    Ok(())
}
