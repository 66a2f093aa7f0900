//! Terminal presentation of fetch results.

use std::io::Write;

use crate::catalog::Entity;
use crate::fetch::FetchResult;
use crate::location::{MovementNotifier, Position};

pub const FOUND_TOAST: &str = "Creature found";
pub const FAILED_TOAST: &str = "Failed to fetch creature";

/// Short status line for a result.
pub fn toast(result: &FetchResult) -> &'static str {
    match result {
        FetchResult::Found(_) => FOUND_TOAST,
        FetchResult::NoResult => FAILED_TOAST,
    }
}

/// Card for one entity: name, image, description and stats.
pub fn render(entity: &Entity) -> String {
    let mut out = String::new();
    out.push_str(&capitalize(&entity.name));
    out.push('\n');
    if !entity.image_url.is_empty() {
        out.push_str(&format!("Image: {}\n", entity.image_url));
    }
    out.push('\n');
    out.push_str(&clean_flavor_text(&entity.description));
    out.push_str("\n\n");
    out.push_str(&format!(
        "ID: {}\nHeight: {}\nWeight: {}",
        entity.id, entity.height, entity.weight
    ));
    out
}

/// Upper-case the first character, leave the rest alone.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Flavor text carries hard line breaks and form feeds from the games.
/// Collapse all whitespace runs into single spaces.
pub fn clean_flavor_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Writes a buzz line to stderr on each accepted movement.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl MovementNotifier for ConsoleNotifier {
    fn on_trigger(&self, position: &Position) {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "~ bzzt ~ moved to ({:.5}, {:.5})",
            position.latitude, position.longitude
        );
    }
}
