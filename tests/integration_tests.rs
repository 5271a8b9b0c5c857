//! End-to-end behaviour of the `Errors` accumulator as seen by code that
//! validates nested records and hands the result across layers.

use errata::{ErrorRecord, ErrorTree, Errors, Query, params, path};

#[test]
fn test_nested_add_is_visible_from_root() {
    let e = Errors::new();
    e.at("articles").at(0).at("title").add("too_short");

    assert_eq!(e.count(), 1);
    assert_eq!(
        e.to_vec(),
        vec![ErrorRecord::new("too_short", path!["articles", 0, "title"])]
    );
    assert!(e.contains_key("articles"));
    assert!(e.at("articles").contains_key(0));
}

fn record(errors: &Errors, field: &str, kind: &str) {
    errors.at(field).add(kind);
}

#[test]
fn test_runtime_field_names_and_kinds() {
    let errors = Errors::new();
    let fields = vec![String::from("email"), String::from("name")];
    for field in &fields {
        record(&errors, field.as_str(), &format!("{field}_blank"));
    }

    assert_eq!(errors.keys(), path!["email", "name"]);
    assert!(errors.contains_key(fields[0].as_str()));
    assert!(errors.contains(Query::kind("email_blank").path(path!["email"])));
    assert!(errors.contains(String::from("name_blank").as_str()));
    assert_eq!(errors.dig(fields.iter().take(1).map(String::as_str)).count(), 1);
}

#[test]
fn test_distinct_accumulators_with_same_content_are_equal() {
    let a = Errors::new();
    a.add("x");
    let b = Errors::new();
    b.add("x");

    assert_eq!(a, b);
    assert!(!a.ptr_eq(&b));
}

#[test]
fn test_merge_scenario() {
    let a = Errors::new();
    a.add("x");
    let other = Errors::new();
    other.at("nested").add("y");

    let merged = a.merge(&other);
    assert_eq!(merged.count(), 2);
    assert_eq!(a.count(), 1);
    assert_eq!(other.count(), 1);
}

#[test]
fn test_aliasing_through_every_navigation_route() {
    let v = Errors::new();
    v.dig(path!["a", 1]).add("x");
    v.at("a").at(1).add("y");

    assert_eq!(v.at("a").at(1).count(), 2);
    assert_eq!(v.dig(path!["a", 1]).count(), 2);
    assert!(v.contains(Query::kind("x").path(path!["a", 1])));
    assert!(v.at("a").contains(Query::kind("y").path(path!["a", 1])));
}

#[test]
fn test_detachment_properties() {
    let v = Errors::new();
    v.at("k").add("x").add("y");
    v.at("other").add("z");
    let before = v.count();
    let under_k = v.at("k").count();

    let w = v.delete("k");
    assert!(!v.contains_key("k"));
    assert_eq!(v.count(), before - under_k);

    w.add("more");
    w.at("deeper").add("more");
    assert_eq!(v.count(), before - under_k);
}

#[test]
fn test_copy_independence() {
    let v = Errors::new();
    v.at("a").add("x");
    let c = v.dup();

    c.add("y");
    assert_eq!(v.count(), 1);
    v.at("a").add("z");
    assert_eq!(c.count(), 2);
}

#[test]
fn test_equality_is_order_independent() {
    let records = [
        ErrorRecord::new("blank", path!["name"]),
        ErrorRecord::new("too_short", path!["items", 0, "title"]).with_params(params! { "min" => 3 }),
        ErrorRecord::new("invalid", path![]),
        ErrorRecord::new("blank", path!["name"]),
    ];

    let forward: Errors = records.iter().cloned().collect();
    let backward: Errors = records.iter().rev().cloned().collect();
    assert_eq!(forward, backward);
    assert_eq!(forward.count(), 4);

    let deduplicated: Errors = records.iter().skip(1).cloned().collect();
    assert_ne!(forward, deduplicated);
}

#[test]
fn test_update_changes_exactly_one_side() {
    let v = Errors::new();
    v.at("a").add("x");
    let other = Errors::new();
    other.at("a").add("y");
    other.at("b").at(0).add("z");

    let union = v.merge(&other);
    let other_snapshot = other.to_tree();

    assert!(std::ptr::eq(v.update(&other), &v));
    assert_eq!(v, union);
    assert_eq!(other.to_tree(), other_snapshot);

    v.at("b").at(0).add("only in v");
    assert_eq!(other.to_tree(), other_snapshot);
}

#[test]
fn test_assigned_raw_tree_is_owned_by_the_trie() {
    let errors = Errors::new();
    let tree = ErrorTree::new()
        .child("street", ErrorTree::new().entry("blank", params! {}))
        .child("zip", ErrorTree::new().entry("invalid", params! { "format" => "5 digits" }));

    errors.at("user").set("address", tree.clone());

    assert_eq!(errors.at("user").at("address").to_tree(), tree);
    assert!(errors.contains(
        Query::kind("invalid")
            .params(params! { "format" => "5 digits" })
            .path(path!["user", "address", "zip"])
    ));
}

#[derive(Debug, thiserror::Error)]
enum SaveError {
    #[error("validation failed")]
    Invalid(#[source] Errors),
    #[error("storage unavailable")]
    #[allow(dead_code)]
    Unavailable,
}

fn validate(name: &str, tags: &[&str]) -> Result<(), Errors> {
    let errors = Errors::new();
    if name.is_empty() {
        errors.at("name").add("blank");
    }
    for (i, tag) in tags.iter().enumerate() {
        if tag.len() > 8 {
            errors
                .at("tags")
                .at(i)
                .add_with("too_long", params! { "max" => 8, "actual" => tag.len() as i64 });
        }
    }
    errors.into_result()
}

fn save(name: &str, tags: &[&str]) -> Result<(), SaveError> {
    validate(name, tags).map_err(SaveError::Invalid)?;
    Ok(())
}

#[test]
fn test_errors_cross_layer_boundaries_as_error_source() {
    assert!(save("ada", &["math"]).is_ok());

    let error = save("", &["ok", "much-too-long"]).unwrap_err();
    let SaveError::Invalid(errors) = &error else {
        panic!("expected a validation failure");
    };
    assert_eq!(errors.count(), 2);
    assert!(errors.contains(Query::kind("too_long").path(path!["tags", 1])));

    let source = std::error::Error::source(&error).expect("validation errors as source");
    assert!(source.to_string().starts_with("● errors (2)"));
}

#[test]
fn test_shared_accumulator_across_threads() {
    let errors = Errors::new();
    std::thread::scope(|scope| {
        for i in 0..4 {
            let item = errors.at("items").at(i);
            scope.spawn(move || {
                item.add("checked");
            });
        }
    });

    assert_eq!(errors.count(), 4);
    assert_eq!(errors.at("items").keys(), path![0, 1, 2, 3]);
}

#[cfg(feature = "tracing")]
#[test]
fn test_mutations_emit_trace_events() {
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let errors = Errors::new();
        errors.at("title").add("blank");
        let _ = errors.delete("title");
    });

    let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("adding error entry"));
    assert!(output.contains("deleting subtree"));
}
