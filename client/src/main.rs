use clap::{Parser, Subcommand};

use client::{api::Api, form::Form, notify::Notifier, view};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Base URL of the RSVP backend.
    #[arg(long, default_value = "http://localhost:3000")]
    server: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Confirm attendance: a name and, optionally, how many people you bring.
    Confirm {
        name: String,

        people: Option<String>,
    },

    /// Show the guest list with occupancy.
    List {
        #[arg(long, default_value_t = roster::stats::DEFAULT_CAPACITY)]
        capacity: u32,
    },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let api = Api::new(args.server);

    match args.command {
        Command::Confirm { name, people } => {
            let mut form = Form::new(name, people.unwrap_or_default());
            let notifier = Notifier::new();

            form.submit(&api, &notifier).await;
        }
        Command::List { capacity } => view::render(&api, capacity).await,
    }
}
