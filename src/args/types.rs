use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Parse a timestamp such as 2020-03-15T08:30:00.000 and print it.
    ParseDate {
        #[arg(value_name = "TIMESTAMP")]
        input: String,
    },
    /// Delete venues the way the venue page's delete button does.
    Delete {
        /// Where the venue server lives, e.g. http://127.0.0.1:5000
        #[arg(
            long,
            env = "FYYUR_BASE_URL",
            value_name = "BASE_URL",
            value_parser = crate::args::validation::check_base_url
        )]
        base_url: String,
        /// Venue id to delete. Repeat for several independent clicks.
        #[arg(
            long = "id",
            value_name = "VENUE_ID",
            required_unless_present = "page",
            conflicts_with = "page"
        )]
        ids: Vec<String>,
        /// Saved venue page; its #delete_venue button supplies the id.
        #[arg(
            long,
            value_name = "PAGE_HTML",
            value_parser = crate::args::validation::check_readable_file
        )]
        page: Option<PathBuf>,
    },
    /// Print the delete button markup for a venue.
    RenderButton {
        #[arg(value_name = "VENUE_ID")]
        id: String,
    },
}
