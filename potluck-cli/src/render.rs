//! Terminal rendering for potluck-core types.
//!
//! Extension traits that add colored output using owo_colors.

use chrono::Utc;
use owo_colors::OwoColorize;
use potluck_core::report::{ItemCost, Lookup, ResponseCounts, SelectionCost};
use potluck_core::selection::SelectionWrite;
use potluck_core::{Event, Item};

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let date = self
            .event_date
            .with_timezone(&chrono::Local)
            .format("%a %b %-d %Y %H:%M")
            .to_string();
        let location = self
            .location
            .as_deref()
            .map(|l| format!(" @ {}", l))
            .unwrap_or_default();

        let line = format!("#{} {}{}", self.id, self.name, location);
        if self.is_past(Utc::now()) {
            format!("{} {}", line.dimmed(), date.dimmed())
        } else {
            format!("{} {}", line.bold(), date.dimmed())
        }
    }
}

impl Render for ResponseCounts {
    fn render(&self) -> String {
        format!(
            "   {} accepted  {} declined  {} no response  ({} guests)",
            self.accepted.to_string().green(),
            self.declined.to_string().red(),
            self.no_response.to_string().yellow(),
            self.total()
        )
    }
}

impl Render for SelectionCost {
    fn render(&self) -> String {
        format!(
            "{} units claimed, {} total",
            self.sum_item_qty,
            self.total_cost.to_string().bold()
        )
    }
}

impl Render for ItemCost {
    fn render(&self) -> String {
        format!(
            "#{} {:<24} {:>8} {:>10}",
            self.item_id,
            self.name,
            self.sum_item_qty.to_string(),
            self.total_cost.to_string()
        )
    }
}

impl Render for Item {
    fn render(&self) -> String {
        format!(
            "#{} {} @ {} [{}]",
            self.id,
            self,
            self.cost_perunit,
            self.category.dimmed()
        )
    }
}

impl Render for Lookup {
    fn render(&self) -> String {
        match self {
            Lookup::Found => self.to_string().green().to_string(),
            Lookup::Unfound => self.to_string().yellow().to_string(),
        }
    }
}

impl Render for SelectionWrite {
    fn render(&self) -> String {
        match self {
            SelectionWrite::Inserted => format!("{} selection {}", "+".green(), self),
            SelectionWrite::Updated => format!("{} selection {}", "~".yellow(), self),
        }
    }
}
