use color_eyre::eyre::Result;
use jielewe_journal::activities::select_script;
use jielewe_journal::analyzer::Analyzer;
use jielewe_journal::config::Config;
use jielewe_journal::journal_state::JournalState;
use jielewe_journal::logging;
use jielewe_journal::store::JsonFileStore;
use jielewe_journal::ui::{Action, UI};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::load()?;
    let _log_guard = logging::init(&config)?;
    info!(data_file = %config.data_file.display(), "starting JIELEWE");

    let mut journal = JournalState::open(Box::new(JsonFileStore::new(&config.data_file)));
    let mut analyzer = Analyzer::new(config.analysis_delay);
    let mut ui = UI::new()?;

    loop {
        if let Some(classified) = analyzer.poll_result()? {
            let recorded = journal.record(classified).map(|_| ());
            ui.on_entry_saved();
            if let Err(e) = recorded {
                ui.show_problem("Uh oh!", &e.to_string());
            }
        }

        ui.display(&journal, analyzer.is_pending())?;

        if let Some(action) = ui.handle_input(journal.current_mood(), analyzer.is_pending())? {
            match action {
                Action::Submit(text) => {
                    if let Err(e) = analyzer.submit(&text) {
                        ui.show_problem("Oops! 📝", &e.to_string());
                    }
                }
                Action::ChooseActivity(id) => {
                    let script = select_script(id);
                    match &script {
                        Ok(_) => info!(activity = id, "activity selected"),
                        Err(e) => warn!(error = %e, "selected activity has no script"),
                    }
                    ui.open_activity(script);
                }
                Action::Quit => break,
            }
        }
    }

    info!(entries = journal.len(), "shutting down");
    Ok(())
}
