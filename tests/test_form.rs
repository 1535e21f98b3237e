use rat_schema_table::form::{build_forms, FormField, RowForm};
use rat_schema_table::{
    CellValue, ColumnDef, ColumnType, FieldError, TableModel, Validator, ViewGrid,
};

fn model() -> TableModel {
    TableModel::new(vec![
        ColumnDef::new("size", "Size", ColumnType::Digit)
            .validators([Validator::Required, Validator::Min(0.0), Validator::Max(100.0)]),
        ColumnDef::new("name", "Name", ColumnType::Text)
            .validators([Validator::MinLength(2), Validator::MaxLength(5)]),
        ColumnDef::new("ok", "Ok", ColumnType::Checkbox),
    ])
    .expect("model")
}

#[test]
fn test_validators() {
    assert_eq!(
        Validator::Required.validate(&CellValue::Null),
        Some(FieldError::Required)
    );
    assert_eq!(
        Validator::Required.validate(&CellValue::from("")),
        Some(FieldError::Required)
    );
    assert_eq!(Validator::Required.validate(&CellValue::from(false)), None);

    assert_eq!(
        Validator::Min(0.0).validate(&CellValue::from(-1)),
        Some(FieldError::Min {
            min: 0.0,
            actual: -1.0
        })
    );
    assert_eq!(
        Validator::Min(0.0).validate(&CellValue::from("-2")),
        Some(FieldError::Min {
            min: 0.0,
            actual: -2.0
        })
    );
    assert_eq!(Validator::Min(0.0).validate(&CellValue::from("abc")), None);
    assert_eq!(Validator::Min(0.0).validate(&CellValue::Null), None);
    assert_eq!(
        Validator::Max(10.0).validate(&CellValue::from(11)),
        Some(FieldError::Max {
            max: 10.0,
            actual: 11.0
        })
    );

    assert_eq!(
        Validator::MinLength(3).validate(&CellValue::from("äb")),
        Some(FieldError::MinLength { min: 3, actual: 2 })
    );
    assert_eq!(Validator::MinLength(3).validate(&CellValue::from("")), None);
    assert_eq!(
        Validator::MaxLength(1).validate(&CellValue::from("ab")),
        Some(FieldError::MaxLength { max: 1, actual: 2 })
    );

    let even = Validator::custom("even", |v| match v.as_number() {
        Some(n) if n % 2.0 != 0.0 => Some("not even".into()),
        _ => None,
    });
    assert_eq!(even.validate(&CellValue::from(2)), None);
    assert_eq!(
        even.validate(&CellValue::from(3)),
        Some(FieldError::Custom {
            name: "even",
            message: "not even".into()
        })
    );
    assert_eq!(
        format!("{:?}", even),
        format!("{:?}", Validator::custom("even", |_| None))
    );
}

#[test]
fn test_field() {
    let mut field = FormField::new("size", CellValue::Null, vec![Validator::Required]);
    assert_eq!(field.key(), "size");
    assert!(!field.is_valid());
    assert!(!field.is_dirty());

    assert!(field.set_value(CellValue::from(1)));
    assert!(field.is_valid());
    assert!(field.is_dirty());
    assert!(!field.set_value(CellValue::from(1)));

    field.set_value(CellValue::from(""));
    assert_eq!(field.errors(), &[FieldError::Required]);
}

#[test]
fn test_row_form() {
    let model = model();
    let form = RowForm::from_row(
        &model,
        &[CellValue::from(0), CellValue::from("x"), CellValue::from(true)],
    );
    assert_eq!(form.len(), 3);
    // 0 is falsy and becomes Null
    assert_eq!(
        form.values(),
        vec![CellValue::Null, CellValue::from("x"), CellValue::from(true)]
    );
    assert!(!form.is_valid());
    assert_eq!(
        form.errors(),
        vec![
            ("size", &FieldError::Required),
            ("name", &FieldError::MinLength { min: 2, actual: 1 })
        ]
    );
    assert_eq!(
        form.field_by_key("ok").map(|v| v.value()),
        Some(&CellValue::from(true))
    );
    assert!(form.field_by_key("other").is_none());
}

#[test]
fn test_row_form_set() {
    let model = model();
    let mut form = RowForm::from_row(&model, &[]);
    assert_eq!(form.values(), vec![CellValue::Null; 3]);

    assert!(form.set_value(0, CellValue::from(200)));
    assert_eq!(
        form.field(0).map(|v| v.errors().to_vec()),
        Some(vec![FieldError::Max {
            max: 100.0,
            actual: 200.0
        }])
    );
    assert!(!form.set_value(5, CellValue::from(1)));
}

#[test]
fn test_build_forms() {
    let model = model();
    let grid = ViewGrid::from_raw(
        3,
        vec![
            vec![CellValue::from(5), CellValue::from("abc")],
            vec![CellValue::from(6)],
        ],
    );
    let forms = build_forms(&model, &grid);
    assert_eq!(forms.len(), 2);
    assert!(forms[0].is_valid());
    assert_eq!(forms[1].field(0).map(|v| v.value()), Some(&CellValue::from(6)));
}
