//! Snapshot tests for inspection reports.

use flow_inspect::{InspectionStrategy, Inspector};
use flow_model::Table;

fn housing() -> Table {
    let df = polars::df!(
        "Order" => [1i64, 2, 3, 4],
        "MS Zoning" => [Some("RL"), Some("RH"), None, Some("RL")],
        "Lot Frontage" => [Some(141i64), None, None, Some(93)],
    )
    .unwrap();
    Table::new(df).unwrap()
}

#[test]
fn types_report_snapshot() {
    let report = Inspector::new(InspectionStrategy::Types)
        .execute(&housing())
        .unwrap();

    insta::assert_json_snapshot!(report, @r#"
    {
      "view": "types",
      "columns": [
        {
          "name": "Order",
          "dtype": "i64",
          "kind": "integer",
          "non_null": 4,
          "null": 0
        },
        {
          "name": "MS Zoning",
          "dtype": "str",
          "kind": "text",
          "non_null": 3,
          "null": 1
        },
        {
          "name": "Lot Frontage",
          "dtype": "i64",
          "kind": "integer",
          "non_null": 2,
          "null": 2
        }
      ]
    }
    "#);
}

#[test]
fn missing_report_snapshot() {
    let report = Inspector::new(InspectionStrategy::Missing)
        .execute(&housing())
        .unwrap();

    insta::assert_json_snapshot!(report, @r#"
    {
      "view": "missing",
      "rows": 4,
      "columns": [
        {
          "name": "MS Zoning",
          "missing": 1,
          "percent": 25.0
        },
        {
          "name": "Lot Frontage",
          "missing": 2,
          "percent": 50.0
        }
      ]
    }
    "#);
}

#[test]
fn summary_report_lists_both_kinds() {
    let mut inspector = Inspector::default();
    inspector.set_strategy(InspectionStrategy::Summary);

    match inspector.execute(&housing()).unwrap() {
        flow_inspect::InspectionReport::Summary {
            numeric,
            categorical,
        } => {
            let names: Vec<&str> = numeric.iter().map(|s| s.name.as_str()).collect();
            assert_eq!(names, vec!["Order", "Lot Frontage"]);
            assert_eq!(numeric[1].mean, Some(117.0));
            assert_eq!(categorical[0].top.as_deref(), Some("RL"));
            assert_eq!(categorical[0].freq, 2);
        }
        other => panic!("expected summary report, got {other:?}"),
    }
}
