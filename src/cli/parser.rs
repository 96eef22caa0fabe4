use crate::export::ExportFormat;
use crate::models::event_field::EventField;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for locandine
/// CLI application to turn poster OCR text into sorted event records
#[derive(Parser)]
#[command(
    name = "locandine",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn the OCR text of event posters into structured events, sorted by date",
    long_about = None
)]
pub struct Cli {
    /// Override the events data file (useful for tests or multiple collections)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file read or written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Field values typed by the user. Each one, when given, wins over the
/// extracted value.
#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    #[arg(long, help = "Event title")]
    pub title: Option<String>,

    #[arg(long, help = "Event date, free form (e.g. \"15 Marzo 2026\")")]
    pub date: Option<String>,

    #[arg(long, help = "Event time (HH:MM)")]
    pub time: Option<String>,

    #[arg(long, help = "City or area")]
    pub location: Option<String>,

    #[arg(long, help = "Hall, theatre, building")]
    pub venue: Option<String>,

    #[arg(long, help = "Street address")]
    pub address: Option<String>,

    #[arg(long, help = "Free description")]
    pub description: Option<String>,
}

impl FieldArgs {
    /// The fields actually given on the command line.
    pub fn overrides(&self) -> Vec<(EventField, String)> {
        [
            (EventField::Title, &self.title),
            (EventField::Date, &self.date),
            (EventField::Time, &self.time),
            (EventField::Location, &self.location),
            (EventField::Venue, &self.venue),
            (EventField::Address, &self.address),
            (EventField::Description, &self.description),
        ]
        .into_iter()
        .filter_map(|(f, v)| v.as_ref().map(|v| (f, v.trim().to_string())))
        .collect()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, the data file and the folders
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,

        #[arg(
            long = "year",
            help = "Set the year appended to poster dates without one"
        )]
        year: Option<i32>,
    },

    /// Extract the event fields from poster OCR text
    Extract {
        /// Text file with the OCR output ("-" or nothing = stdin)
        file: Option<String>,

        /// Image the text was read from
        #[arg(long = "image", value_name = "PATH")]
        image: Option<String>,

        #[arg(long = "json", help = "Print the extracted record as JSON")]
        json: bool,

        #[arg(long = "save", help = "Add the (corrected) record to the events")]
        save: bool,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Add an event typed by hand (no OCR)
    Add {
        #[arg(long = "image", value_name = "PATH")]
        image: Option<String>,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Import a JSON list of OCR dumps ({ "text", "image_file" })
    Import {
        file: String,

        /// Folder the image files live in
        #[arg(long = "base-dir", value_name = "DIR")]
        base_dir: Option<String>,
    },

    /// List the events, soonest first
    List {
        #[arg(long = "json", help = "Print the events as JSON")]
        json: bool,
    },

    /// Show every field of one event
    Show {
        /// Position of the event (as shown by `list`)
        position: usize,
    },

    /// Update fields of an event
    Edit {
        /// Position of the event (as shown by `list`)
        position: usize,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete an event
    Del {
        /// Position of the event (as shown by `list`)
        position: usize,
    },

    /// Store the events in chronological order
    Sort,

    /// Create a ZIP backup of the events and the images
    Backup {
        #[arg(long, value_name = "FILE")]
        file: Option<String>,
    },

    /// Restore a ZIP backup, or merge events from a JSON file
    Restore { file: String },

    /// Delete all events
    Reset {
        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Export the sorted events for rendering
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
