use anyhow::Context;
use dnsfilter_application::ports::DnsServerConfigView;
use dnsfilter_application::use_cases::{DnsServerConfigPresenter, EditMode};
use std::io::Read;

use crate::view::ConsoleView;
use crate::Command;

pub async fn run(
    command: Command,
    presenter: &mut DnsServerConfigPresenter,
    view: &ConsoleView,
) -> anyhow::Result<()> {
    match command {
        Command::Show => print_state(presenter, view),
        Command::Raw => {
            let mode = view.edit_mode();
            if !mode.is_raw() {
                presenter.on_changed_edit_mode_value(&mode);
            }
            if let Some(text) = view.edit_mode().raw_text() {
                print!("{}", text);
            }
        }
        Command::List { input } => {
            let text = match input {
                Some(source) => read_input(&source)?,
                None => match view.edit_mode() {
                    EditMode::Raw(text) => text,
                    EditMode::List => {
                        println!("Already editing the server list");
                        return Ok(());
                    }
                },
            };
            presenter.on_changed_edit_mode_value(&EditMode::Raw(text));
            print_state(presenter, view);
        }
        Command::Manual { enabled } => {
            presenter.on_changed_manual_dns_servers(enabled);
            print_state(presenter, view);
        }
        Command::Reset => {
            presenter.reset_dns_config_to_default().await;
            print_state(presenter, view);
        }
        Command::Apply { input } => {
            let mode = match input {
                Some(source) => {
                    let text = read_input(&source)?;
                    view.show_raw_mode(&text);
                    EditMode::Raw(text)
                }
                None => view.edit_mode(),
            };
            presenter.apply_new_configuration(&mode).await;
            if view.is_closed() {
                println!("DNS configuration saved");
            }
        }
        // Handled before the presenter is built.
        Command::Discard => {}
    }

    Ok(())
}

fn read_input(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read DNS servers from stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(source).with_context(|| format!("Failed to read {}", source))
}

fn print_state(presenter: &DnsServerConfigPresenter, view: &ConsoleView) {
    println!(
        "Manual DNS servers: {}",
        if presenter.is_manual_dns_servers() { "yes" } else { "no" }
    );

    match view.edit_mode() {
        EditMode::Raw(text) => {
            println!("Mode: raw (run `list` to leave)");
            print!("{}", text);
            if !text.is_empty() && !text.ends_with('\n') {
                println!();
            }
        }
        EditMode::List => {
            println!("Mode: list");
            let adapter = presenter.list_adapter();
            if adapter.objects_count() == 0 {
                println!("  (no servers)");
            }
            for index in 0..adapter.objects_count() {
                if let Some(entry) = adapter.item(index) {
                    println!("  {:>2}. {}", index + 1, entry);
                }
            }
        }
    }
}
