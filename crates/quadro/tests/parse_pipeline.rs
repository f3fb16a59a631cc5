//! End-to-end tests for the quadro pipeline.
//!
//! Each test builds a synthetic in-memory workbook shaped like the real
//! training-validity spreadsheets (title banner, blank padding, two-row
//! header, mixed date encodings, decorative gaps, trailing footer), parses
//! it through the facade, and asserts on the derived table, filters, and
//! validity counts.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use quadro::prelude::*;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A miniature validity-control workbook with every layout hazard the
/// engine must survive.
fn sample_book() -> Book {
    let mut book = Book::new();
    book.add_sheet("Resumo").unwrap();
    let idx = book.add_sheet("Controle de Validade").unwrap();
    let sheet = book.sheet_mut(idx).unwrap();

    // Title banner and blank padding above the header
    sheet.set_value(0, 0, "FORM.1341 - CONTROLE DE VALIDADE DE TREINAMENTOS");

    // Two-row header: categories at row 2, sub-labels at row 3
    for (col, name) in [
        (0u16, "Empresa"),
        (1, "Nome Completo"),
        (2, "CPF"),
        (3, "Função"),
        (4, "NR-10"),
        (5, "NR-10"),
        (6, "NR-33"),
        (7, "NR-33"),
        (8, "NR-35"),
        (9, "NR-35"),
        (10, "Carga Horária"),
    ] {
        sheet.set_value(2, col, name);
    }
    for col in [4u16, 6, 8] {
        sheet.set_value(3, col, "Data Realização");
        sheet.set_value(3, col + 1, "Validade");
    }

    // Ana: serials, a native date, and day-first text all mixed together
    sheet.set_value(4, 0, "FAFEN-SE");
    sheet.set_value(4, 1, "Ana Lima");
    sheet.set_value(4, 2, 11122233344.0);
    sheet.set_value(4, 3, "Eletricista");
    sheet.set_value(4, 4, 45200.0);
    sheet.set_value(4, 5, ymd(2025, 3, 1));
    sheet.set_value(4, 6, "10/01/2024");
    sheet.set_value(4, 7, "10/01/2026");
    sheet.set_value(4, 8, 45100.0);
    sheet.set_value(4, 9, 45671.0);
    sheet.set_value(4, 10, 8.0);

    // Bruno: one training missing entirely, one deadline still pending
    sheet.set_value(5, 0, "FAFEN-SE");
    sheet.set_value(5, 1, "Bruno Dias");
    sheet.set_value(5, 2, 22233344455.0);
    sheet.set_value(5, 3, "Soldador");
    sheet.set_value(5, 4, 45210.0);
    sheet.set_value(5, 5, ymd(2023, 5, 10));
    sheet.set_value(5, 8, 45110.0);
    sheet.set_value(5, 9, "pendente");
    sheet.set_value(5, 10, 16.0);

    // Decorative gap at rows 6-7, then Carla
    sheet.set_value(8, 0, "Bahia");
    sheet.set_value(8, 1, "Carla Reis");
    sheet.set_value(8, 2, 33344455566.0);
    sheet.set_value(8, 3, "Técnica de Segurança");
    sheet.set_value(8, 4, "05/02/2024");
    sheet.set_value(8, 5, "05/02/2026");
    sheet.set_value(8, 6, 45220.0);
    sheet.set_value(8, 7, 45900.0);
    sheet.set_value(8, 9, "20/07/2025");
    sheet.set_value(8, 10, 40.0);

    // Trailing footer with blank anchor columns must never become data
    sheet.set_value(11, 3, "Emitido pelo RH");

    book
}

fn parse_control_sheet(book: &Book) -> Table {
    let sheet = quadro::preferred_sheet(book).unwrap();
    let profile = quadro::recommended_profile(sheet.name());
    parse_sheet(sheet, &profile).unwrap()
}

#[test]
fn test_preferred_sheet_is_the_control_sheet() {
    let book = sample_book();
    assert_eq!(
        quadro::preferred_sheet(&book).unwrap().name(),
        "Controle de Validade"
    );
}

#[test]
fn test_header_and_column_names() {
    let table = parse_control_sheet(&sample_book());

    assert_eq!(
        table.column_names(),
        vec![
            "Empresa",
            "Nome Completo",
            "CPF",
            "Função",
            "NR-10 - Data Realização",
            "NR-10 - Validade",
            "NR-33 - Data Realização",
            "NR-33 - Validade",
            "NR-35 - Data Realização",
            "NR-35 - Validade",
            "Carga Horária",
        ]
    );
}

#[test]
fn test_rows_cross_gap_and_skip_footer() {
    let table = parse_control_sheet(&sample_book());

    assert_eq!(table.row_count(), 3);
    assert_eq!(table.rows[2][1], CellValue::text("Carla Reis"));

    for row in &table.rows {
        assert_eq!(row.len(), table.column_count());
        assert!(!row
            .iter()
            .any(|cell| cell.as_text().is_some_and(|s| s.contains("Emitido"))));
    }
}

#[test]
fn test_column_classification() {
    let table = parse_control_sheet(&sample_book());

    assert_eq!(table.meta.date_columns, vec![4, 5, 6, 7, 8, 9]);
    // Only the deadline sub-columns; "Data Realização" marks an event date
    assert_eq!(table.meta.validity_date_columns, vec![5, 7, 9]);
    assert_eq!(table.meta.numeric_columns, vec![10]);
    // Tax ids look numeric but are identity, not data
    assert!(!table.meta.is_numeric_column(2));
}

#[test]
fn test_validity_counts() {
    let table = parse_control_sheet(&sample_book());
    let today = ymd(2025, 1, 1);

    let counts = count_statuses(
        table.rows.iter().map(|r| r.as_slice()),
        &table.meta,
        today,
    );
    // 45671 is 2025-01-14: within the 30-day warning window
    assert_eq!(
        counts,
        ValidityCounts {
            on_time: 5,
            upcoming: 1,
            expired: 1,
        }
    );
}

#[test]
fn test_search_filter() {
    let table = parse_control_sheet(&sample_book());

    let filter = RowFilter {
        search: "ana lima".into(),
        ..RowFilter::default()
    };
    let rows = filter.apply(&table);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][1], CellValue::text("Ana Lima"));
}

#[test]
fn test_year_filter_reads_only_validity_columns() {
    let table = parse_control_sheet(&sample_book());

    let filter = RowFilter {
        year: Some(2026),
        ..RowFilter::default()
    };
    let rows = filter.apply(&table);
    // Ana and Carla hold 2026 deadlines; Bruno does not
    assert_eq!(rows.len(), 2);

    // 2024 appears only in "Data Realização" columns, which the filter
    // must not consult
    let filter = RowFilter {
        year: Some(2024),
        ..RowFilter::default()
    };
    assert!(filter.apply(&table).is_empty());
}

#[test]
fn test_distinct_years() {
    let table = parse_control_sheet(&sample_book());
    assert_eq!(distinct_years(&table), vec![2023, 2025, 2026]);
}

#[test]
fn test_generic_sheet_parses_leniently() {
    let mut book = sample_book();
    let sheet = book.sheet_by_name_mut("Resumo").unwrap();
    sheet.set_value(0, 0, "Indicador");
    sheet.set_value(0, 1, "Valor");
    sheet.set_value(1, 0, "Treinamentos vencidos");
    sheet.set_value(1, 1, 4.0);

    let profile = quadro::recommended_profile("Resumo");
    let table = parse_sheet(book.sheet_by_name("Resumo").unwrap(), &profile).unwrap();

    assert_eq!(table.column_names(), vec!["Indicador", "Valor"]);
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.meta.numeric_columns, vec![1]);
}

#[test]
fn test_empty_sheet_reports_no_table() {
    let book = sample_book();
    let sheet = book.sheet_by_name("Resumo").unwrap();

    let err = parse_sheet(sheet, &ParseProfile::generic()).unwrap_err();
    assert!(matches!(err, ParseError::NoTable(_)));
}
