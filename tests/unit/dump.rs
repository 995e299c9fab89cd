//! Unit tests for debug dumps
//!
//! Entry order, inline failures and rendering.

#[cfg(test)]
mod dump_tests {
    use indexmap::IndexMap;
    use route_tester::dump::{dump, DumpBody, DumpKind, MapSource, FAILURE_PREFIX};
    use route_tester::error::DumpError;
    use route_tester::render_dump;
    use serde_json::{json, Value};

    fn entries(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(label, name)| ((*label).to_string(), (*name).to_string()))
            .collect()
    }

    #[test]
    fn test_sections_follow_entry_order() {
        let source = MapSource::new()
            .insert(DumpKind::Message, "validation", json!({"not_empty": "must not be empty"}))
            .insert(DumpKind::Message, "auth", json!({"failed": "login failed"}));

        let dump = dump(
            DumpKind::Message,
            &entries(&[("Validation", "validation"), ("Auth", "auth")]),
            &source,
        );

        let labels: Vec<_> = dump.sections.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Validation", "Auth"]);
        assert_eq!(dump.failures(), 0);
    }

    #[test]
    fn test_source_error_rendered_inline() {
        let source = |kind: DumpKind, name: &str| -> Result<Value, DumpError> {
            if name == "broken" {
                Err(DumpError::Source("undefined constant SITE_URL".into()))
            } else {
                Ok(json!({ "kind": kind.to_string() }))
            }
        };

        let dump = dump(
            DumpKind::Config,
            &entries(&[("Broken", "broken"), ("Site", "site")]),
            &source,
        );

        assert_eq!(
            dump.sections[0].body,
            DumpBody::Failed(format!("{FAILURE_PREFIX}undefined constant SITE_URL"))
        );
        assert_eq!(dump.sections[1].body, DumpBody::Value(json!({"kind": "config"})));

        let text = render_dump(&dump);
        assert!(text.starts_with("Config Dump\n"));
        assert!(text.contains("Broken\nSomething went terribly wrong."));
        assert!(text.contains("\"kind\": \"config\""));
    }

    #[test]
    fn test_empty_entries() {
        let dump = dump(DumpKind::I18n, &IndexMap::new(), &MapSource::new());
        assert!(dump.sections.is_empty());
        assert_eq!(render_dump(&dump), "I18n Dump\n");
    }
}
