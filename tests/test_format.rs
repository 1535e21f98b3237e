use rat_schema_table::format::{check_glyph, view_value, CHECKED, UNCHECKED, UNKNOWN};
use rat_schema_table::{CellValue, ColumnDef, ColumnType};

fn select() -> ColumnDef {
    ColumnDef::new("kind", "Kind", ColumnType::Select)
        .option("Cat", "cat")
        .option("", "blank")
        .option("Mouse", "mouse")
}

#[test]
fn test_checkbox() {
    let column = ColumnDef::new("ok", "Ok", ColumnType::Checkbox);
    assert_eq!(view_value(&CellValue::Bool(true), &column), CHECKED);
    assert_eq!(view_value(&CellValue::Bool(false), &column), UNCHECKED);
    assert_eq!(view_value(&CellValue::Null, &column), UNKNOWN);
    assert_eq!(check_glyph(&CellValue::from(1)), UNKNOWN);
}

#[test]
fn test_select() {
    let column = select();
    assert_eq!(view_value(&CellValue::from("cat"), &column), "Cat");
    assert_eq!(view_value(&CellValue::from("mouse"), &column), "Mouse");
    assert_eq!(view_value(&CellValue::from("dog"), &column), "dog ❓");
    // empty label falls back to the value
    assert_eq!(view_value(&CellValue::from("blank"), &column), "blank ❓");
    assert_eq!(view_value(&CellValue::Null, &column), " ❓");
    assert_eq!(view_value(&CellValue::from(3), &column), "3 ❓");
}

#[test]
fn test_text_digit() {
    let text = ColumnDef::new("name", "Name", ColumnType::Text);
    let digit = ColumnDef::new("size", "Size", ColumnType::Digit);

    assert_eq!(view_value(&CellValue::from("abc"), &text), "abc");
    assert_eq!(view_value(&CellValue::from(""), &text), UNKNOWN);
    assert_eq!(view_value(&CellValue::Null, &text), UNKNOWN);
    assert_eq!(view_value(&CellValue::from(true), &text), "true");

    assert_eq!(view_value(&CellValue::from(12), &digit), "12");
    assert_eq!(view_value(&CellValue::from(0), &digit), "0");
    assert_eq!(view_value(&CellValue::from(1.5), &digit), "1.5");
    assert_eq!(view_value(&CellValue::from(-0.0), &digit), "0");
    assert_eq!(view_value(&CellValue::from(f64::NAN), &digit), "NaN");
    assert_eq!(view_value(&CellValue::Null, &digit), UNKNOWN);
}

#[test]
fn test_truthy() {
    assert!(!CellValue::Null.is_truthy());
    assert!(!CellValue::from(false).is_truthy());
    assert!(!CellValue::from(0).is_truthy());
    assert!(!CellValue::from(f64::NAN).is_truthy());
    assert!(!CellValue::from("").is_truthy());
    assert!(CellValue::from("0").is_truthy());
    assert!(CellValue::from(-1).is_truthy());
    assert!(CellValue::from(true).is_truthy());

    assert_eq!(CellValue::from(0).truthy_or_null(), CellValue::Null);
    assert_eq!(CellValue::from(7).truthy_or_null(), CellValue::from(7));
    assert_eq!(CellValue::from(Some("x")), CellValue::from("x"));
    assert_eq!(CellValue::from(None::<bool>), CellValue::Null);
    assert_eq!(CellValue::from(12).to_string(), "12");
    assert_eq!(CellValue::Null.to_string(), "");
}

#[test]
fn test_number_exponent() {
    assert_eq!(CellValue::from(1e21).to_string(), "1e+21");
    assert_eq!(CellValue::from(-1.5e22).to_string(), "-1.5e+22");
    assert_eq!(CellValue::from(1e-7).to_string(), "1e-7");
    assert_eq!(CellValue::from(1e20).to_string(), "100000000000000000000");
    assert_eq!(CellValue::from(0.000001).to_string(), "0.000001");
}
