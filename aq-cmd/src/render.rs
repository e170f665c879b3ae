//! Plain text rendering of a lookup result.

use std::fmt::Write;

use aq_core::QueryResult;

/// Text counterpart of the browser's result panel.
pub fn render_text(result: &QueryResult) -> String {
    let classification = result.classification();
    let mut out = String::new();

    if classification.title.is_empty() {
        let _ = writeln!(out, "Air Quality: unrecognized level {:?}", result.level);
    } else {
        let _ = writeln!(
            out,
            "Air Quality: {} ({})",
            classification.title,
            classification.tier.name()
        );
    }

    let _ = writeln!(
        out,
        "Station: #{} \"{}\"",
        result.station.id, result.station.name
    );
    if let Some(url) = &result.station.url {
        let _ = writeln!(out, "Station page: {}", url);
    }
    for (label, value) in result.readings() {
        let _ = writeln!(out, "{}: {}", label, value);
    }
    let updated = result.updated_display();
    if !updated.is_empty() {
        let _ = writeln!(out, "Last updated: {}", updated);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_minimal() {
        let result = QueryResult::from_json(
            r#"{"station":{"id":7,"name":"X"},"aqi":42,"level":"good","time":"T"}"#,
        )
        .unwrap();
        assert_eq!(
            render_text(&result),
            "Air Quality: Good (success)\n\
             Station: #7 \"X\"\n\
             Air quality index: 42\n\
             Last updated: T\n"
        );
    }

    #[test]
    fn test_render_unknown_level() {
        let result =
            QueryResult::from_json(include_str!("../../fixtures/status-unknown-level.json"))
                .unwrap();
        let text = render_text(&result);
        assert!(text.starts_with("Air Quality: unrecognized level \"unknown_future_value\"\n"));
        assert!(text.contains("Particulate matter 2.5: 163\n"));
        assert!(!text.contains("Ozone"));
    }
}
