mod common;

use common::fixtures::{foo_bar_list, game_list, star_fox_json};
use common::{TestResult, init_logging, select};
use partial_response::{FieldSet, TreeFilter, filter};
use serde_json::{Value, json};

#[test]
fn test_top_level_fields_only() -> TestResult {
    init_logging();
    assert_eq!(
        select("Id,Name", &star_fox_json())?,
        json!({ "Id": 1, "Name": "Star Fox" })
    );
    Ok(())
}

#[test]
fn test_grouped_nested_field() -> TestResult {
    let value = json!({ "Id": 1, "Developer": { "Id": 1, "Name": "Nintendo EAD" } });
    assert_eq!(
        select("Developer(Name)", &value)?,
        json!({ "Developer": { "Name": "Nintendo EAD" } })
    );
    Ok(())
}

#[test]
fn test_wildcard_returns_input() -> TestResult {
    let value = star_fox_json();
    assert_eq!(select("*", &value)?, value);
    Ok(())
}

#[test]
fn test_empty_selector_prunes_to_empty_root() -> TestResult {
    assert_eq!(select("", &json!({ "foo": "bar" }))?, json!({}));
    Ok(())
}

#[test]
fn test_path_into_array_of_objects() -> TestResult {
    let value = json!({
        "Characters": [{ "Id": 1, "Name": "Fox" }, { "Id": 2, "Name": "Falco" }]
    });
    assert_eq!(
        select("Characters/Id", &value)?,
        json!({ "Characters": [{ "Id": 1 }, { "Id": 2 }] })
    );
    Ok(())
}

#[test]
fn test_synthetic_predicates() {
    let value = json!({ "foo": { "bar": "baz" }, "qux": "quux" });

    let without_qux = |path: &str| path != "qux";
    assert_eq!(filter(&value, &without_qux), json!({ "foo": { "bar": "baz" } }));

    let foo_only = FieldSet::try_parse("foo").unwrap();
    assert_eq!(filter(&value, &foo_only), json!({ "foo": { "bar": "baz" } }));

    let qux_only = FieldSet::try_parse("qux").unwrap();
    assert_eq!(filter(&value, &qux_only), json!({ "qux": "quux" }));
}

#[test]
fn test_selecting_a_container_keeps_it_whole() -> TestResult {
    let developer = json!({ "Id": 1, "Name": "Nintendo EAD" });
    assert_eq!(
        select("Id,Developer", &star_fox_json())?,
        json!({ "Id": 1, "Developer": developer.clone() })
    );
    assert_eq!(
        select("Id,Developer/*", &star_fox_json())?,
        json!({ "Id": 1, "Developer": developer })
    );

    let value = json!({
        "Id": 1,
        "Developer": { "Id": 1, "Name": "Nintendo EAD" },
        "Characters": [{ "Id": 1 }]
    });
    assert_eq!(
        select("Developer,Characters", &value)?,
        json!({ "Developer": { "Id": 1, "Name": "Nintendo EAD" }, "Characters": [{ "Id": 1 }] })
    );
    Ok(())
}

#[test]
fn test_empty_page_survives_filtering() -> TestResult {
    let page = json!({ "totalCount": 0, "data": [] });
    assert_eq!(select("*", &page)?, page);
    assert_eq!(select("totalCount,data(Id)", &page)?, page);
    Ok(())
}

#[test]
fn test_mixed_selector_on_game() -> TestResult {
    assert_eq!(
        select("Name,Developer(Name),Characters/*", &star_fox_json())?,
        json!({
            "Name": "Star Fox",
            "Developer": { "Name": "Nintendo EAD" },
            "Characters": [
                { "Id": 1, "Name": "Fox McCloud" },
                { "Id": 2, "Name": "Falco Lombardi" }
            ]
        })
    );
    Ok(())
}

#[test]
fn test_root_array_from_demo() -> TestResult {
    assert_eq!(
        select("Foo,Bar(Qux)", &foo_bar_list())?,
        json!([
            { "Foo": 1, "Bar": { "Qux": 3 } },
            { "Foo": 2, "Bar": { "Qux": 4 } },
            { "Foo": 3, "Bar": { "Qux": 6 } }
        ])
    );
    assert_eq!(select("Nope", &foo_bar_list())?, json!([]));
    Ok(())
}

#[test]
fn test_deep_wildcard_under_array() -> TestResult {
    let filtered = select("Characters/*", &game_list(3))?;
    let expected: Vec<Value> = (0..3)
        .map(|_| {
            json!({
                "Characters": [
                    { "Id": 1, "Name": "Hero", "Stats": { "Speed": 3, "Power": 5 } },
                    { "Id": 2, "Name": "Sidekick", "Stats": { "Speed": 4, "Power": 2 } }
                ]
            })
        })
        .collect();
    assert_eq!(filtered, Value::Array(expected));
    Ok(())
}

#[test]
fn test_cache_hits_on_homogeneous_arrays() {
    let fields = FieldSet::try_parse("Id,Characters(Stats/Speed)").unwrap();
    let value = game_list(50);

    let mut cached = TreeFilter::new(&fields);
    let mut uncached = TreeFilter::new(&fields).without_cache();

    assert_eq!(cached.apply(&value), uncached.apply(&value));
    assert!(cached.stats().evaluated < uncached.stats().evaluated);
    assert_eq!(
        cached.stats().evaluated + cached.stats().cache_hits,
        uncached.stats().evaluated
    );
}
