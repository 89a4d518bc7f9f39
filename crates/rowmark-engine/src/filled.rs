use rowmark_model::{GridError, TableAccess};

/// Reports whether every data cell of `row` is populated.
///
/// Reads `span` contiguous cells starting at column 1 and applies the
/// strict blank test ([`CellValue::is_blank`]): whitespace-only text,
/// numeric zero, and `false` all count as populated. The result reflects
/// table state at call time; callers re-derive it after any write instead
/// of caching it across mutations.
///
/// [`CellValue::is_blank`]: rowmark_model::CellValue::is_blank
pub fn is_row_filled<T>(table: &T, row: u32, span: u32) -> Result<bool, GridError>
where
    T: TableAccess + ?Sized,
{
    let cells = table.read_cells(row, 1, span)?;
    Ok(cells.iter().all(|value| !value.is_blank()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowmark_model::{CellValue, Sheet};

    #[test]
    fn full_row_reports_filled() {
        let mut sheet = Sheet::new(5, 4);
        sheet.write_cell(2, 1, CellValue::from("a")).unwrap();
        sheet.write_cell(2, 2, CellValue::from(0.0)).unwrap();
        sheet.write_cell(2, 3, CellValue::Boolean(false)).unwrap();
        assert_eq!(is_row_filled(&sheet, 2, 3), Ok(true));
    }

    #[test]
    fn any_blank_cell_reports_unfilled() {
        let mut sheet = Sheet::new(5, 4);
        sheet.write_cell(2, 1, CellValue::from("a")).unwrap();
        sheet.write_cell(2, 3, CellValue::from("c")).unwrap();
        assert_eq!(is_row_filled(&sheet, 2, 3), Ok(false));

        // Zero-length text is as blank as an unset cell.
        sheet.write_cell(2, 2, CellValue::Text(String::new())).unwrap();
        assert_eq!(is_row_filled(&sheet, 2, 3), Ok(false));

        sheet.write_cell(2, 2, CellValue::from(" ")).unwrap();
        assert_eq!(is_row_filled(&sheet, 2, 3), Ok(true));
    }

    #[test]
    fn cells_past_the_span_are_ignored() {
        let mut sheet = Sheet::new(5, 4);
        sheet.write_cell(2, 1, CellValue::from("a")).unwrap();
        sheet.write_cell(2, 2, CellValue::from("b")).unwrap();
        sheet.write_cell(2, 3, CellValue::from("c")).unwrap();
        // Column 4 stays blank; a span of 3 must not look at it.
        assert_eq!(is_row_filled(&sheet, 2, 3), Ok(true));
        assert_eq!(is_row_filled(&sheet, 2, 4), Ok(false));
    }

    #[test]
    fn faults_pass_through() {
        let sheet = Sheet::new(5, 2);
        assert!(is_row_filled(&sheet, 2, 3).is_err());
        assert!(is_row_filled(&sheet, 9, 2).is_err());
    }
}
