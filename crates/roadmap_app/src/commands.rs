use std::sync::Arc;

use anyhow::{bail, Context};
use roadmap_core::share_link;
use roadmap_logging::roadmap_info;
use roadmap_store::{ensure_dir, FileStore, KeyValueStore, RoadmapSession, Theme};

use crate::cli::{Cli, Command};
use crate::config;
use crate::generator::ResponseFileGenerator;

/// No system query is available from a terminal.
const SYSTEM_THEME: Theme = Theme::Dark;

pub(crate) async fn run(cli: Cli) -> anyhow::Result<()> {
    ensure_dir(&cli.data_dir)
        .with_context(|| format!("preparing data directory {:?}", cli.data_dir))?;
    let settings = config::load_settings(&cli.data_dir);
    roadmap_info!("Using data directory {:?}", cli.data_dir);

    let response = match &cli.command {
        Command::Generate { response, .. } | Command::OpenLink { response, .. } => {
            Some(response.clone())
        }
        _ => None,
    };
    let kv: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(cli.data_dir.clone()));
    let generator = Arc::new(ResponseFileGenerator::new(response));
    let mut session = RoadmapSession::new(kv, generator, settings.clone());

    match cli.command {
        Command::History => print_history(&session),
        Command::Generate { url, .. } => {
            session.generate(&url).await?;
            print_view(&mut session);
        }
        Command::OpenLink { location, .. } => match session.open_shared_link(&location).await? {
            Some(cleaned) => {
                print_view(&mut session);
                println!("Location: {cleaned}");
            }
            None => println!("No course link in {location}"),
        },
        Command::Show { id } => {
            open(&mut session, id)?;
            print_view(&mut session);
        }
        Command::Toggle { id, topics } => {
            open(&mut session, id)?;
            for topic in topics {
                let outcome = session
                    .toggle(topic)
                    .context("roadmap closed while toggling")?;
                let mark = if outcome.completed { "done" } else { "open" };
                println!("Topic {topic}: {mark} ({}%)", outcome.percent);
                if outcome.celebrated {
                    if let Some(view) = session.view() {
                        println!(
                            "Course completed! You've mastered all {} topics.",
                            view.total_count
                        );
                    }
                }
            }
        }
        Command::Remove { id } => {
            let remaining = session.remove_from_history(id).len();
            println!("{remaining} roadmap(s) in history");
        }
        Command::Clear => {
            session.clear_history();
            println!("History cleared");
        }
        Command::Share { id, app } => {
            let Some(entry) = session.history().find(id) else {
                bail!("no roadmap with id {id} in history");
            };
            let link = share_link(&app, &entry.original_url)
                .with_context(|| format!("invalid application URL {app:?}"))?;
            println!("{link}");
        }
        Command::Theme { toggle } => {
            let theme = if toggle {
                session.toggle_theme(SYSTEM_THEME)
            } else {
                session.theme(SYSTEM_THEME)
            };
            println!("{theme}");
        }
        Command::InitConfig => {
            let path = config::write_settings(&cli.data_dir, &settings)?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

fn open(session: &mut RoadmapSession, id: i64) -> anyhow::Result<()> {
    if !session.open_from_history(id) {
        bail!("no roadmap with id {id} in history");
    }
    Ok(())
}

fn print_history(session: &RoadmapSession) {
    if session.history().is_empty() {
        println!("No roadmaps yet");
        return;
    }
    for entry in session.history().iter() {
        println!(
            "{:>14}  {:>3}%  [{}] {} ({} topics)",
            entry.id,
            session.history_progress(entry),
            entry.platform,
            entry.title,
            entry.total_topics
        );
    }
}

fn print_view(session: &mut RoadmapSession) {
    let Some(view) = session.view() else {
        return;
    };
    println!("{} [{}]", view.title, view.platform);
    println!(
        "{} of {} completed ({}%)",
        view.completed_count, view.total_count, view.percent
    );
    for row in &view.topics {
        let mark = if row.completed { 'x' } else { ' ' };
        println!("  [{mark}] {:>2}. {} (#{})", row.order, row.title, row.topic_id);
    }
}
