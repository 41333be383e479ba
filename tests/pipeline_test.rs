use async_trait::async_trait;
use auction_harvester::export;
use auction_harvester::pipeline::{self, PipelineConfig};
use auction_harvester::scrapers::PageRenderer;
use auction_harvester::ScrapeError;
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::sync::Mutex;

const CATALOG: &str = "https://auctions.test/shop/komornicze";

/// Serves canned pages and records every requested URL
#[derive(Default)]
struct FixtureRenderer {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl FixtureRenderer {
    fn with_page(mut self, url: &str, html: String) -> Self {
        self.pages.insert(url.to_string(), html);
        self
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageRenderer for FixtureRenderer {
    async fn render(&self, url: &str) -> auction_harvester::Result<String> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::transport(url, "connection refused"))
    }

    fn backend_name(&self) -> &'static str {
        "fixture"
    }
}

fn listing(title: &str, rooms: Option<&str>, areas: &[&str], location: &str) -> String {
    let mut params = String::new();
    if let Some(rooms) = rooms {
        params.push_str(&format!("<li class=\"offer-item-rooms hidden-xs\">{rooms}</li>"));
    }
    params.push_str("<li class=\"offer-item-price\">199 000 zł</li>");
    for area in areas {
        params.push_str(&format!("<li class=\"hidden-xs offer-item-area\">{area}</li>"));
    }
    params.push_str("<li class=\"hidden-xs offer-item-price-per-m\">2 000 zł/m²</li>");

    format!(
        "<article class=\"offer-item\">\
           <div class=\"offer-item-details\">\
             <header><h3><a href=\"#\"><span class=\"offer-item-title\">{title}</span></a></h3>\
             <p class=\"text-nowrap\"><span class=\"hidden-xs\">Lokalizacja: </span>{location}</p></header>\
             <ul class=\"params\">{params}</ul>\
           </div>\
         </article>"
    )
}

fn page(total: u32, listings: &[String]) -> String {
    format!(
        "<html><body><div class=\"col-md-shop-content\">\
           <div class=\"offers-index pull-left\">Ogłoszenia: <strong>{total}</strong></div>\
           {}\
         </div></body></html>",
        listings.concat()
    )
}

fn apartments(count: usize, offset: usize) -> Vec<String> {
    (1..=count)
        .map(|n| {
            listing(
                &format!("Mieszkanie nr {}", n + offset),
                Some("2"),
                &["48"],
                "Warszawa, powiat warszawski, Mokotów",
            )
        })
        .collect()
}

fn two_page_catalog() -> FixtureRenderer {
    let first = page(28, &apartments(25, 0));
    let mut second = apartments(1, 25);
    second.push(listing("Działka rolna", None, &["1200"], "Kraków, powiat krakowski, "));
    second.extend(apartments(1, 27));

    FixtureRenderer::default()
        .with_page(CATALOG, first.clone())
        .with_page(&format!("{CATALOG}?page=1"), first)
        .with_page(&format!("{CATALOG}?page=2"), page(28, &second))
}

#[tokio::test]
async fn test_two_page_catalog_end_to_end() {
    let renderer = two_page_catalog();
    let report = pipeline::run(&renderer, &PipelineConfig::new(CATALOG)).await.unwrap();

    assert_eq!(
        renderer.requests(),
        vec![
            CATALOG.to_string(),
            format!("{CATALOG}?page=1"),
            format!("{CATALOG}?page=2"),
        ]
    );
    assert_eq!(report.pages, 2);
    assert_eq!(report.processed, 28);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.records.len(), 28);

    let titles: Vec<&str> = report.records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles[0], "Mieszkanie nr 1");
    assert_eq!(titles[24], "Mieszkanie nr 25");
    assert_eq!(titles[25], "Mieszkanie nr 26");
    assert_eq!(titles[26], "Działka rolna");
    assert_eq!(titles[27], "Mieszkanie nr 28");

    let apartment = &report.records[0];
    assert_eq!(apartment.rooms.as_deref(), Some("2"));
    assert_eq!(apartment.building_area.as_deref(), Some("48"));
    assert_eq!(apartment.land_area, None);
    assert_eq!(apartment.price.as_deref(), Some("199 000 zł"));
    assert_eq!(apartment.city.as_deref(), Some("Warszawa"));
    assert_eq!(apartment.district.as_deref(), Some("Mokotów"));

    let plot = &report.records[26];
    assert_eq!(plot.rooms, None);
    assert_eq!(plot.building_area, None);
    assert_eq!(plot.land_area.as_deref(), Some("1200"));
    assert_eq!(plot.city.as_deref(), Some("Kraków"));
    assert_eq!(plot.district.as_deref(), Some("powiat krakowski"));

    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("aukcjekomornicze.csv");
    export::write_csv(&csv_path, &report.records).await.unwrap();

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 29);
    assert_eq!(lines[0], "index,title,rooms,building_area,land_area,price,City,District");
    assert_eq!(lines[1], "0,Mieszkanie nr 1,2,48,,199 000 zł,Warszawa,Mokotów");
    assert_eq!(lines[27], "26,Działka rolna,,,1200,199 000 zł,Kraków,powiat krakowski");
}

#[tokio::test]
async fn test_max_pages_caps_the_run() {
    let renderer = two_page_catalog();
    let mut config = PipelineConfig::new(CATALOG);
    config.max_pages = Some(1);

    let report = pipeline::run(&renderer, &config).await.unwrap();

    assert_eq!(report.pages, 1);
    assert_eq!(report.records.len(), 25);
    assert_eq!(renderer.requests().len(), 2);
}

#[tokio::test]
async fn test_broken_listings_are_skipped_and_counted() {
    let broken = "<article class=\"offer-item\"><p>Lokalizacja: Radom, powiat radomski, </p></article>".to_string();
    let listings = vec![
        listing("Lokal użytkowy", None, &["75"], "Radom, powiat radomski, Śródmieście"),
        broken,
        listing("Dom", Some("5"), &["160", "1000"], "Radom"),
    ];
    let html = page(3, &listings);
    let renderer = FixtureRenderer::default()
        .with_page(CATALOG, html.clone())
        .with_page(&format!("{CATALOG}?page=1"), html);

    let report = pipeline::run(&renderer, &PipelineConfig::new(CATALOG)).await.unwrap();

    assert_eq!(report.processed, 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.records[0].title, "Lokal użytkowy");
    // No plot marker, so the single area stays a building area
    assert_eq!(report.records[0].building_area.as_deref(), Some("75"));
    assert_eq!(report.records[1].land_area.as_deref(), Some("1000"));
    assert_eq!(report.records[1].city.as_deref(), Some("Radom"));
    assert_eq!(report.records[1].district, None);
}

#[tokio::test]
async fn test_missing_count_indicator_aborts_before_paging() {
    let renderer = FixtureRenderer::default().with_page(
        CATALOG,
        "<html><body><div class=\"col-md-shop-content\"></div></body></html>".to_string(),
    );

    let err = pipeline::run(&renderer, &PipelineConfig::new(CATALOG)).await.unwrap_err();

    assert!(matches!(err, ScrapeError::Structure { .. }));
    assert_eq!(renderer.requests(), vec![CATALOG.to_string()]);
}

#[tokio::test]
async fn test_failed_page_fetch_aborts_the_run() {
    let renderer = FixtureRenderer::default()
        .with_page(CATALOG, page(30, &apartments(25, 0)))
        .with_page(&format!("{CATALOG}?page=1"), page(30, &apartments(25, 0)));

    let err = pipeline::run(&renderer, &PipelineConfig::new(CATALOG)).await.unwrap_err();

    match err {
        ScrapeError::Transport { url, .. } => assert_eq!(url, format!("{CATALOG}?page=2")),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_catalog_yields_no_records() {
    let renderer = FixtureRenderer::default().with_page(CATALOG, page(0, &[]));

    let report = pipeline::run(&renderer, &PipelineConfig::new(CATALOG)).await.unwrap();

    assert_eq!(report.pages, 0);
    assert!(report.records.is_empty());
    assert_eq!(renderer.requests().len(), 1);
}
