use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2026, 10, 19)
}

/// Builds a 13-cell row with the given title, period, brand, and event id.
fn row(title: &str, period: &str, brand: &str, event_id: &str) -> RawRow {
    let mut cells = vec![String::new(); MIN_ROW_CELLS];
    cells[COL_TITLE] = title.to_owned();
    cells[COL_PERIOD] = period.to_owned();
    cells[COL_THUMBNAIL] = "https://img.example.com/thumb.jpg".to_owned();
    cells[COL_DESCRIPTION] = format!("{title} 설명");
    cells[COL_BRAND] = brand.to_owned();
    cells[COL_PRODUCT] = "운동화".to_owned();
    cells[COL_PRICE] = "50% 할인".to_owned();
    cells[COL_EVENT_ID] = event_id.to_owned();
    cells
}

fn mapping() -> UrlMappingTable {
    [
        ("aaa111", "songdo-season-off.html"),
        ("bbb222", "songdo-outdoor-week.html"),
        ("ccc333_02", "songdo-kids-fair-2.html"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn merges_rows_sharing_title_and_dates() {
    let rows = vec![
        row("시즌 오프", "10.01 ~ 10.31", "나이키", "aaa111"),
        row("시즌 오프", "10.01 ~ 10.31", "아디다스", "aaa111"),
        row("아웃도어 위크", "10.10 ~ 10.20", "K2", "bbb222"),
    ];
    let out = ingest(&rows, Outlet::Songdo, &mapping(), today());

    assert_eq!(out.events.len(), 2);
    let first = &out.events[0];
    assert_eq!(first.title, "시즌 오프");
    assert_eq!(first.items.len(), 2);
    assert_eq!(first.items[0].brand, "나이키");
    assert_eq!(first.items[1].brand, "아디다스");
    assert_eq!(out.events[1].title, "아웃도어 위크");
    assert_eq!(out.events[1].items.len(), 1);
    assert_eq!(out.report.events, 2);
    assert_eq!(out.report.skipped(), 0);
}

#[test]
fn same_title_with_different_dates_stays_separate() {
    let rows = vec![
        row("시즌 오프", "10.01 ~ 10.15", "나이키", "aaa111"),
        row("시즌 오프", "10.16 ~ 10.31", "나이키", "aaa111"),
    ];
    let out = ingest(&rows, Outlet::Songdo, &mapping(), today());
    assert_eq!(out.events.len(), 2);
}

#[test]
fn preserves_first_seen_order() {
    let rows = vec![
        row("B 행사", "10.10 ~ 10.20", "K2", "bbb222"),
        row("A 행사", "10.01 ~ 10.31", "나이키", "aaa111"),
        row("B 행사", "10.10 ~ 10.20", "네파", "bbb222"),
    ];
    let out = ingest(&rows, Outlet::Songdo, &mapping(), today());
    let titles: Vec<&str> = out.events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["B 행사", "A 행사"]);
    assert_eq!(out.events[0].items.len(), 2);
}

#[test]
fn first_row_of_group_supplies_event_fields() {
    let mut second = row("시즌 오프", "10.01 ~ 10.31", "아디다스", "aaa111");
    second[COL_DESCRIPTION] = "다른 설명".to_owned();
    let rows = vec![row("시즌 오프", "10.01 ~ 10.31", "나이키", "aaa111"), second];
    let out = ingest(&rows, Outlet::Songdo, &mapping(), today());
    assert_eq!(out.events[0].description, "시즌 오프 설명");
    assert_eq!(out.events[0].event_id, "aaa111");
    assert_eq!(out.events[0].outlet, Outlet::Songdo);
}

#[test]
fn computes_inclusive_and_exclusive_end() {
    let rows = vec![row("시즌 오프", "10.01 ~ 10.31", "나이키", "aaa111")];
    let out = ingest(&rows, Outlet::Songdo, &mapping(), today());
    let event = &out.events[0];
    assert_eq!(event.start, date(2026, 10, 1));
    assert_eq!(event.end, date(2026, 10, 31));
    assert_eq!(event.end_exclusive, date(2026, 11, 1));
}

#[test]
fn skips_short_rows() {
    let mut short = row("시즌 오프", "10.01 ~ 10.31", "나이키", "aaa111");
    short.truncate(12);
    let out = ingest(&[short], Outlet::Songdo, &mapping(), today());
    assert!(out.events.is_empty());
    assert_eq!(out.report.malformed, 1);
}

#[test]
fn skips_rows_missing_title_or_period() {
    let rows = vec![
        row("", "10.01 ~ 10.31", "나이키", "aaa111"),
        row("시즌 오프", "", "나이키", "aaa111"),
    ];
    let out = ingest(&rows, Outlet::Songdo, &mapping(), today());
    assert!(out.events.is_empty());
    assert_eq!(out.report.malformed, 2);
    assert_eq!(out.report.received, 2);
}

#[test]
fn skips_rows_with_bad_dates() {
    let rows = vec![
        row("상시 행사", "상시 진행", "나이키", "aaa111"),
        row("시즌 오프", "10.01 ~ 10.31", "나이키", "aaa111"),
    ];
    let out = ingest(&rows, Outlet::Songdo, &mapping(), today());
    assert_eq!(out.events.len(), 1);
    assert_eq!(out.report.invalid_date, 1);
}

#[test]
fn drops_rows_without_mapping() {
    let rows = vec![
        row("시즌 오프", "10.01 ~ 10.31", "나이키", "zzz999"),
        row("키즈 페어", "10.05 ~ 10.25", "뉴발란스", "ccc333"),
    ];
    let out = ingest(&rows, Outlet::Songdo, &mapping(), today());
    assert_eq!(out.events.len(), 1);
    assert_eq!(out.events[0].title, "키즈 페어");
    assert_eq!(out.report.unmapped, 1);
}

#[test]
fn empty_mapping_table_drops_everything() {
    let rows = vec![
        row("시즌 오프", "10.01 ~ 10.31", "나이키", "aaa111"),
        row("아웃도어 위크", "10.10 ~ 10.20", "K2", "bbb222"),
    ];
    let out = ingest(&rows, Outlet::Gimpo, &UrlMappingTable::default(), today());
    assert!(out.events.is_empty());
    assert_eq!(out.report.unmapped, 2);
}

#[test]
fn resolves_uuid_event_ids_by_short_id() {
    let rows = vec![row(
        "시즌 오프",
        "10.01 ~ 10.31",
        "나이키",
        "78565274-4f6e-420f-9df7-aaa111",
    )];
    let out = ingest(&rows, Outlet::Songdo, &mapping(), today());
    assert_eq!(out.events.len(), 1);
    assert_eq!(out.events[0].event_id, "78565274-4f6e-420f-9df7-aaa111");
}

#[test]
fn uses_iso_columns_when_present() {
    let mut r = row("시즌 오프", "기간 미정", "나이키", "aaa111");
    r[COL_ISO_START] = "2026-11-01".to_owned();
    r[COL_ISO_END] = "2026-11-03".to_owned();
    let out = ingest(&[r], Outlet::Songdo, &mapping(), today());
    assert_eq!(out.events[0].start, date(2026, 11, 1));
    assert_eq!(out.events[0].end, date(2026, 11, 3));
}

#[test]
fn no_two_events_share_identity_key() {
    let rows: Vec<RawRow> = (0..10)
        .map(|i| {
            let title = if i % 2 == 0 { "짝수" } else { "홀수" };
            row(title, "10.01 ~ 10.31", &format!("브랜드{i}"), "aaa111")
        })
        .collect();
    let out = ingest(&rows, Outlet::SpaceOne, &mapping(), today());
    assert_eq!(out.events.len(), 2);
    assert_eq!(out.events.iter().map(|e| e.items.len()).sum::<usize>(), 10);
}
