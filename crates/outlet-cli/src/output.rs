//! Terminal rendering for CLI commands.

use outlet_core::{NormalizedEvent, OutletFilter};
use outlet_events::{format_date_range, EventLink};

pub(crate) fn print_events(events: &[&NormalizedEvent]) {
    if events.is_empty() {
        println!("no events match the current filter");
        return;
    }
    for event in events {
        let brands: Vec<&str> = event.brands().collect();
        println!(
            "{:<12} {:<40} {}",
            format_date_range(event.start, event.end),
            event.display_title(),
            brands.join(", ")
        );
    }
    println!("{} events", events.len());
}

pub(crate) fn print_brands(outlet: OutletFilter, brands: &[String]) {
    println!("brands for {outlet}: {}", brands.len());
    for brand in brands {
        println!("  {brand}");
    }
}

pub(crate) fn print_highlights(events: &[&NormalizedEvent]) {
    if events.is_empty() {
        println!("현재 진행 중인 이벤트가 없습니다.");
        return;
    }
    for event in events {
        println!(
            "{}\n  기간: {}",
            event.display_title(),
            format_date_range(event.start, event.end)
        );
    }
}

pub(crate) fn print_links(links: &[EventLink]) {
    for link in links {
        println!("{}\t{}", link.href, link.label);
    }
}

pub(crate) fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
