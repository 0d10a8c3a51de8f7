use chrono::Datelike;
use env_logger::Env;
use futures::future::join_all;

use fyyur_venues::args::{self, Command};
use fyyur_venues::date::{DisplayFormat, format_instant, parse_iso_string};
use fyyur_venues::handler::DeleteHandler;
use fyyur_venues::page::RecordingPage;
use fyyur_venues::venue::{DeleteOutcome, HttpVenueClient, VenueId};
use fyyur_venues::view::render_delete_button;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = args::args_checks();

    match args.command {
        Command::ParseDate { input } => {
            let dt = parse_iso_string(&input)?;
            println!("{}", dt.to_rfc3339());
            println!("month index: {}", dt.month0());
            println!("{}", format_instant(&dt, DisplayFormat::Medium));
            println!("{}", format_instant(&dt, DisplayFormat::Full));
        }
        Command::Delete {
            base_url,
            ids,
            page: page_file,
        } => {
            let clicks = args::resolve_clicks(&ids, page_file.as_deref())?;
            let api = HttpVenueClient::new(&base_url)?;
            let page = RecordingPage::new();
            let handler = DeleteHandler::new(&api, &page);

            let results = join_all(clicks.into_iter().map(|click| handler.on_click(click))).await;
            let mut failed = 0;
            for result in results {
                match result {
                    Ok(DeleteOutcome::Navigated(href)) => println!("navigate {href}"),
                    Ok(DeleteOutcome::NotDeleted) => println!("not deleted"),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        failed += 1;
                    }
                }
            }
            if failed > 0 {
                std::process::exit(1);
            }
        }
        Command::RenderButton { id } => {
            println!("{}", render_delete_button(&VenueId::new(id)).into_string());
        }
    }
    Ok(())
}
