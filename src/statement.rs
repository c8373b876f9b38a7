use crate::registry::{Registry, TechnologyRecord};

pub const MULTIPLE_OCCURRENCES_COMMENT: &str =
    " -- you should review this name, multiple occurrences were found";
pub const SIMILAR_TECHNOLOGIES_COMMENT: &str = " -- similar technologies found: ";

// Names are written verbatim; quotes are not escaped.
pub fn render(record: &TechnologyRecord) -> String {
    let mut statement = format!(
        "insert into technology (name) values ('{}');",
        record.original_name()
    );

    if record.has_multiple_occurrences() {
        statement.push_str(MULTIPLE_OCCURRENCES_COMMENT);
    }

    if !record.similar_names().is_empty() {
        statement.push_str(SIMILAR_TECHNOLOGIES_COMMENT);
        let names: Vec<&str> = record.similar_names().iter().map(String::as_str).collect();
        statement.push_str(&names.join(", "));
    }

    statement
}

pub fn render_all(registry: &Registry) -> Vec<String> {
    registry.records().map(render).collect()
}
