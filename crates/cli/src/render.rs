//! Detailed record display

use crate::util;
use owo_colors::OwoColorize;
use reflect_core::{Document, Note, Report, Vim};

/// Per-collection fields shown by `reflect show`
pub trait Describe: Document {
    /// Labelled fields, in display order
    fn fields(&self) -> Vec<(&'static str, String)>;
}

impl Describe for Vim {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Command", self.command.clone()),
            ("Description", self.description.clone()),
        ]
    }
}

impl Describe for Report {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Date", self.date.format("%Y-%m-%d").to_string()),
            ("Title", self.title.clone()),
            ("Body", self.body.clone()),
        ]
    }
}

impl Describe for Note {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![("Title", self.title.clone()), ("Body", self.body.clone())]
    }
}

/// Print every field of a record
pub fn display_record_detail<T: Describe>(doc: &T) {
    println!("{}", T::COLLECTION.singular().to_uppercase().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  ID:          {}", doc.id().to_string().yellow());

    for (label, value) in doc.fields() {
        let label = format!("{}:", label);
        if value.contains('\n') {
            println!("  {}", label);
            for line in value.lines() {
                println!("    {}", line);
            }
        } else {
            println!("  {:<12} {}", label, value);
        }
    }

    println!("  Tags:        {}", util::format_tags(doc.search()).cyan());
    println!(
        "  Created:     {} ({})",
        util::format_absolute_time(doc.created_ms()),
        util::format_relative_time(doc.created_ms()).dimmed()
    );
    if doc.updated_ms() != doc.created_ms() {
        println!(
            "  Updated:     {} ({})",
            util::format_absolute_time(doc.updated_ms()),
            util::format_relative_time(doc.updated_ms()).dimmed()
        );
    }
}
