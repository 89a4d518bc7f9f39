use rowmark_model::{CellCoord, CellValue, EnumConstraint, GridError, Sheet, TableAccess};

fn put(sheet: &mut Sheet, row: u32, col: u32, value: &str) {
    sheet
        .set_value(CellCoord::new(row, col), CellValue::from(value))
        .unwrap();
}

#[test]
fn insert_shifts_values_styles_and_widgets_down() {
    let mut sheet = Sheet::new(6, 5);
    put(&mut sheet, 1, 1, "header");
    put(&mut sheet, 2, 1, "alpha");
    put(&mut sheet, 2, 2, "beta");
    sheet.set_style_id(CellCoord::new(2, 1), 9).unwrap();
    sheet.insert_checkbox(CellCoord::new(2, 4)).unwrap();
    sheet
        .set_constraint(CellCoord::new(2, 5), EnumConstraint::new(["y", "n"]))
        .unwrap();
    put(&mut sheet, 5, 3, "tail");

    sheet.insert_row_before(2).unwrap();

    assert_eq!(sheet.row_count(), 7);
    // Above the insertion point nothing moves.
    assert_eq!(sheet.value(CellCoord::new(1, 1)), CellValue::from("header"));
    // The displaced row carries everything it had.
    assert_eq!(sheet.value(CellCoord::new(3, 1)), CellValue::from("alpha"));
    assert_eq!(sheet.value(CellCoord::new(3, 2)), CellValue::from("beta"));
    assert_eq!(sheet.style_id(CellCoord::new(3, 1)), 9);
    assert!(sheet.has_checkbox(CellCoord::new(3, 4)));
    assert!(sheet.constraint(CellCoord::new(3, 5)).is_some());
    // Rows further down shift too.
    assert_eq!(sheet.value(CellCoord::new(6, 3)), CellValue::from("tail"));
    assert_eq!(sheet.value(CellCoord::new(5, 3)), CellValue::Empty);
}

#[test]
fn insert_propagates_widgets_but_not_values_into_the_new_row() {
    let mut sheet = Sheet::new(6, 5);
    put(&mut sheet, 2, 1, "alpha");
    sheet.set_style_id(CellCoord::new(2, 2), 4).unwrap();
    sheet.insert_checkbox(CellCoord::new(2, 4)).unwrap();
    sheet
        .set_constraint(CellCoord::new(2, 5), EnumConstraint::new(["y", "n"]))
        .unwrap();

    sheet.insert_row_before(2).unwrap();

    // The new row starts blank and unformatted...
    assert_eq!(sheet.value(CellCoord::new(2, 1)), CellValue::Empty);
    assert_eq!(sheet.value(CellCoord::new(2, 5)), CellValue::Empty);
    assert_eq!(sheet.style_id(CellCoord::new(2, 2)), 0);
    // ...but inherits the displaced row's widget layers, the way live
    // surfaces propagate checkboxes and validation into inserted rows.
    assert!(sheet.has_checkbox(CellCoord::new(2, 4)));
    assert_eq!(
        sheet.constraint(CellCoord::new(2, 5)),
        Some(&EnumConstraint::new(["y", "n"]))
    );
}

#[test]
fn insert_before_first_row_shifts_the_whole_grid() {
    let mut sheet = Sheet::new(3, 3);
    put(&mut sheet, 1, 1, "header");
    put(&mut sheet, 3, 3, "corner");

    sheet.insert_row_before(1).unwrap();

    assert_eq!(sheet.row_count(), 4);
    assert_eq!(sheet.value(CellCoord::new(1, 1)), CellValue::Empty);
    assert_eq!(sheet.value(CellCoord::new(2, 1)), CellValue::from("header"));
    assert_eq!(sheet.value(CellCoord::new(4, 3)), CellValue::from("corner"));
}

#[test]
fn capability_surface_checks_bounds() {
    let mut sheet = Sheet::new(4, 3);
    let table: &mut dyn TableAccess = &mut sheet;

    assert_eq!(
        table.write_cell(0, 1, CellValue::from("x")),
        Err(GridError::CellOutOfBounds { row: 0, col: 1 })
    );
    assert_eq!(
        table.set_checkbox(2, 4, true),
        Err(GridError::CellOutOfBounds { row: 2, col: 4 })
    );
    assert_eq!(
        table.read_cells(2, 1, 4),
        Err(GridError::CellOutOfBounds { row: 2, col: 4 })
    );
    assert_eq!(
        table.insert_blank_row_before(9),
        Err(GridError::RowOutOfBounds { row: 9 })
    );

    table.write_cell(2, 1, CellValue::from("x")).unwrap();
    table.insert_blank_row_before(2).unwrap();
    assert_eq!(
        table.read_cells(3, 1, 3).unwrap(),
        vec![CellValue::from("x"), CellValue::Empty, CellValue::Empty]
    );
}

#[test]
fn clear_formatting_resets_styles_only_inside_the_span() {
    let mut sheet = Sheet::new(4, 4);
    for col in 1..=4 {
        put(&mut sheet, 2, col, "v");
        sheet.set_style_id(CellCoord::new(2, col), 7).unwrap();
    }

    sheet.clear_formatting(2, 1, 3).unwrap();

    for col in 1..=3 {
        assert_eq!(sheet.style_id(CellCoord::new(2, col)), 0);
        assert_eq!(sheet.value(CellCoord::new(2, col)), CellValue::from("v"));
    }
    assert_eq!(sheet.style_id(CellCoord::new(2, 4)), 7);
}

#[test]
fn constraints_are_advisory() {
    let mut sheet = Sheet::new(4, 4);
    sheet
        .set_enum_constraint(2, 4, vec!["y".into(), "n".into()], None)
        .unwrap();

    // Writes outside the allowed set still land; enforcement is the host's
    // concern.
    sheet.write_cell(2, 4, CellValue::from("maybe")).unwrap();
    assert_eq!(sheet.value(CellCoord::new(2, 4)), CellValue::from("maybe"));
    assert!(!sheet
        .constraint(CellCoord::new(2, 4))
        .unwrap()
        .allows("maybe"));
}

#[test]
fn sheet_round_trips_through_json() {
    let mut sheet = Sheet::new(6, 5);
    put(&mut sheet, 1, 1, "who");
    put(&mut sheet, 2, 2, "beta");
    sheet
        .set_value(CellCoord::new(2, 3), CellValue::Number(12.5))
        .unwrap();
    sheet
        .set_value(CellCoord::new(3, 1), CellValue::Boolean(true))
        .unwrap();
    sheet.set_style_id(CellCoord::new(2, 2), 3).unwrap();
    sheet.insert_checkbox(CellCoord::new(2, 4)).unwrap();
    sheet
        .set_constraint(CellCoord::new(2, 5), EnumConstraint::new(["✔️", "❌", "❓"]))
        .unwrap();

    let json = serde_json::to_string(&sheet).unwrap();
    let back: Sheet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sheet);
}

#[test]
fn sparse_storage_stays_proportional_to_content() {
    let mut sheet = Sheet::new(1_000_000, 26);
    put(&mut sheet, 999_999, 26, "far corner");
    put(&mut sheet, 1, 1, "origin");
    assert_eq!(sheet.cell_count(), 2);

    sheet.insert_row_before(1).unwrap();
    assert_eq!(sheet.cell_count(), 2);
    assert_eq!(
        sheet.value(CellCoord::new(1_000_000, 26)),
        CellValue::from("far corner")
    );
}
