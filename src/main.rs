use anyhow::Context;
use shelf_app::pages::{CatalogPage, ReadingListsPage};
use shelf_app::Api;
use shelf_kernel::Settings;

const DEMO_USER: &str = "user-1";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load shelf settings")?;
    shelf_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        api = %settings.api.base_url,
        "shelf-app bootstrap starting"
    );

    let api = Api::from_settings(&settings.api).context("failed to build API client")?;

    let mut catalog = CatalogPage::new(api.clone());
    catalog.load().await;

    let mut lists = ReadingListsPage::new(api, DEMO_USER);
    lists.load().await;

    println!("Catalog ({} books)", catalog.state.data.len());
    for book in catalog.visible() {
        println!(
            "  {:<28} {:<22} {:>4}  {:.1}",
            book.title, book.author, book.published_year, book.rating
        );
    }

    println!("Reading lists for {}", lists.user_id());
    for list in &lists.state.data {
        println!("  {} ({} books)", list.name, list.book_ids.len());
    }

    tracing::info!("shelf-app bootstrap complete");
    Ok(())
}
