#![cfg(feature = "serde")]

use rat_schema_table::{
    CellValue, ColumnType, SchemaTableStyle, TableModel, Validator,
};
use ratatui::style::{Color, Style, Stylize};

#[test]
fn test_model() {
    let s = r#"[
        { "key": "size", "label": "Size", "type": "digit",
          "validators": ["required", { "min": 0 }] },
        { "key": "kind", "label": "Kind", "type": "select",
          "options": [{ "label": "Cat", "value": "cat" }] },
        { "key": "ok", "label": "Ok", "type": "checkbox" }
    ]"#;
    let model: TableModel = serde_json::from_str(s).expect("model");
    assert_eq!(model.len(), 3);
    assert_eq!(model.columns()[0].column_type, ColumnType::Digit);
    assert!(matches!(
        model.columns()[0].validators.as_slice(),
        [Validator::Required, Validator::Min(v)] if *v == 0.0
    ));
    assert_eq!(model.columns()[1].options[0].label, "Cat");
    assert!(model.columns()[2].validators.is_empty());

    let s = serde_json::to_string(&model).expect("json");
    let model2: TableModel = serde_json::from_str(&s).expect("model");
    assert_eq!(model2.len(), 3);
}

#[test]
fn test_duplicate_key() {
    let s = r#"[
        { "key": "a", "label": "A", "type": "text" },
        { "key": "a", "label": "B", "type": "text" }
    ]"#;
    let r = serde_json::from_str::<TableModel>(s);
    assert!(r.is_err());
}

#[test]
fn test_rows() {
    let s = r#"[[12, "cat", null, true], ["x"]]"#;
    let rows: Vec<Vec<CellValue>> = serde_json::from_str(s).expect("rows");
    assert_eq!(
        rows[0],
        vec![
            CellValue::from(12),
            CellValue::from("cat"),
            CellValue::Null,
            CellValue::from(true)
        ]
    );
    assert_eq!(serde_json::to_string(&rows[0]).expect("json"), r#"[12.0,"cat",null,true]"#);
}

#[test]
fn test_style() {
    let style = SchemaTableStyle {
        style: Style::new().fg(Color::Rgb(192, 172, 152)),
        focus: Some(Style::new().black().on_cyan()),
        column_spacing: Some(2),
        ..Default::default()
    };

    let s = serde_json::to_string_pretty(&style).expect("json");
    let v: SchemaTableStyle = serde_json::from_str(&s).expect("style");
    assert_eq!(v.focus, style.focus);
    assert_eq!(v.column_spacing, Some(2));
}
