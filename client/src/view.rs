//! Guest-list view: spinner while the roster loads, then the summary
//! counters, the banded capacity bar, and the table. The terminal cut of
//! the site's people page.

use std::time::Duration;

use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use roster::{
    Rsvp,
    stats::{Band, Occupancy, occupancy},
};

use crate::api::Api;

/// Fetches the list exactly once. On failure the error is shown and that is
/// that; rerun the command to retry.
pub async fn render(api: &Api, capacity: u32) {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Convocando a los espíritus...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let guests = match api.get_list().await {
        Ok(guests) => {
            spinner.finish_and_clear();
            guests
        }
        Err(e) => {
            spinner.finish_and_clear();
            eprintln!("💀 Error: {e}");
            return;
        }
    };

    let stats = occupancy(&guests, capacity);

    print_summary(&stats);
    print_capacity_bar(&stats);

    for line in table_lines(&guests) {
        println!("  {line}");
    }
}

fn print_summary(stats: &Occupancy) {
    println!("👻 Lista de Invocados 👻\n");
    println!("  Personas confirmadas: {}", stats.total_people);
    println!("  Grupos registrados:   {}", stats.total_groups);
    println!("  Espacios restantes:   {}", stats.remaining_spots);
    println!();
}

fn print_capacity_bar(stats: &Occupancy) {
    let colors = match stats.band() {
        Band::Critical => "red/black",
        Band::Warning => "yellow/black",
        Band::Nominal => "green/black",
    };

    println!(
        "  🎃 Capacidad del Aquelarre ({} personas máximo)",
        stats.capacity
    );

    let bar = ProgressBar::new(u64::from(stats.capacity));
    bar.set_style(
        ProgressStyle::with_template(&format!(
            "  [{{bar:40.{colors}}}] {{pos}}/{{len}} ({:.1}%)",
            stats.occupancy_percentage
        ))
        .unwrap()
        .progress_chars("=> "),
    );
    bar.set_position(stats.total_people.clamp(0, i64::from(stats.capacity)) as u64);
    bar.abandon();

    println!();
}

fn table_lines(guests: &[Rsvp]) -> Vec<String> {
    let mut lines = vec![
        format!("{:<30} {:>8}   {}", "Nombre", "Personas", "Confirmado"),
        "-".repeat(60),
    ];

    if guests.is_empty() {
        lines.push("🕸️  Aún no hay almas registradas... 🕸️".to_string());
        return lines;
    }

    for guest in guests {
        lines.push(format!(
            "{:<30} {:>8}   {}",
            guest.name,
            guest.people_count,
            format_date(&guest.created_at)
        ));
    }

    lines
}

/// The confirmation column's `DD Mon YYYY, HH:MM` format.
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%d %b %Y, %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use roster::Rsvp;

    use super::{format_date, table_lines};

    fn guest(id: i64, name: &str, people_count: i32) -> Rsvp {
        Rsvp {
            id,
            name: name.to_string(),
            people_count,
            created_at: Utc.with_ymd_and_hms(2025, 10, 31, 20, 30, 0).unwrap(),
        }
    }

    #[test]
    fn date_column_format() {
        let at = Utc.with_ymd_and_hms(2025, 10, 31, 20, 30, 0).unwrap();

        assert_eq!(format_date(&at), "31 Oct 2025, 20:30");
    }

    #[test]
    fn empty_roster_renders_the_placeholder_row() {
        let lines = table_lines(&[]);

        assert_eq!(lines.len(), 3);
        assert!(lines[2].contains("Aún no hay almas registradas"));
    }

    #[test]
    fn one_line_per_guest() {
        let lines = table_lines(&[guest(1, "Drácula", 5), guest(2, "Ana Romero", 1)]);

        assert_eq!(lines.len(), 4);
        assert!(lines[2].contains("Drácula"));
        assert!(lines[3].contains("Ana Romero"));
    }
}
