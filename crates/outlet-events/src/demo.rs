//! Built-in sample events, used when no Sheets API key is configured so the
//! calendar, filters, and featured panel still have content.

use chrono::{Days, NaiveDate};
use outlet_core::{EventItem, NormalizedEvent, Outlet};

/// Six events (two per outlet) starting `today`: one running a week, one
/// running through tomorrow.
#[must_use]
pub fn demo_events(today: NaiveDate) -> Vec<NormalizedEvent> {
    let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
    let next_week = today.checked_add_days(Days::new(7)).unwrap_or(today);

    let fixtures: [(&str, Outlet, NaiveDate, &str, &str, &str); 6] = [
        ("나이키 시즌 오프 최대 70%", Outlet::Songdo, next_week, "나이키", "운동화", "50% 할인"),
        ("언더아머 썸머 익스트림 세일", Outlet::Songdo, tomorrow, "언더아머", "스포츠웨어", "최대 70%"),
        ("라코스테 클리어런스 UP TO 85% OFF", Outlet::Gimpo, next_week, "라코스테", "폴로셔츠", "85% 할인"),
        ("스케쳐스 썸머 특별 프로모션", Outlet::Gimpo, tomorrow, "스케쳐스", "운동화", "특가"),
        ("브룩스브라더스 패밀리 세일", Outlet::SpaceOne, next_week, "브룩스브라더스", "셔츠", "50% 할인"),
        ("스케쳐스 썸머 특별 프로모션", Outlet::SpaceOne, tomorrow, "스케쳐스", "샌들", "40% 할인"),
    ];

    fixtures
        .into_iter()
        .enumerate()
        .map(|(idx, (title, outlet, end, brand, product, price))| NormalizedEvent {
            title: title.to_owned(),
            start: today,
            end,
            end_exclusive: end.succ_opt().unwrap_or(end),
            description: String::new(),
            outlet,
            items: vec![EventItem {
                brand: brand.to_owned(),
                product: product.to_owned(),
                price: price.to_owned(),
            }],
            thumbnail: String::new(),
            event_id: format!("dummy-{}", idx + 1),
        })
        .collect()
}
