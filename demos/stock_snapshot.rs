use std::error::Error;

use clap::Parser;
use futures::TryStreamExt;
use ozon_seller_client::{
    OzonClient, ProductListFilter, ProductListParams, StocksInfoFilter, StocksInfoParams,
    Visibility,
};

/// Prints the stock of every product in the seller account.
///
/// Credentials are read from `OZON_CLIENT_ID` and `OZON_API_KEY`.
#[derive(Parser, Debug)]
#[command(name = "stock_snapshot")]
struct Args {
    /// Products requested per page.
    #[arg(long, default_value_t = 100)]
    page_size: i64,

    /// Only list archived products.
    #[arg(long)]
    archived: bool,

    /// Override the API base URL.
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let args = Args::parse();

    let mut builder = OzonClient::builder().from_env();
    if let Some(base_url) = &args.base_url {
        builder = builder.base_url(base_url);
    }
    let client = builder.build()?;

    println!("Ozon Stock Snapshot");
    println!("===================");
    println!("Client-Id: {}", client.client_id());

    let params = ProductListParams {
        filter: ProductListFilter {
            visibility: args.archived.then_some(Visibility::Archived),
            ..Default::default()
        },
        limit: Some(args.page_size),
        ..Default::default()
    };

    let products = client.products();
    let mut pages = Box::pin(products.list_pages(params));
    let mut total = 0;

    println!("\n{:<14} {:<30} {:>8} {:>9}", "PRODUCT", "OFFER", "PRESENT", "RESERVED");
    println!("{}", "-".repeat(64));

    while let Some(page) = pages.try_next().await? {
        let product_ids: Vec<i64> = page
            .result
            .items
            .iter()
            .map(|item| item.product_id)
            .collect();
        if product_ids.is_empty() {
            continue;
        }

        let stocks = products
            .stocks_info(&StocksInfoParams {
                filter: StocksInfoFilter {
                    product_id: product_ids,
                    ..Default::default()
                },
                limit: Some(args.page_size),
                ..Default::default()
            })
            .await?;

        for item in &stocks.items {
            let present: i32 = item.stocks.iter().map(|stock| stock.present).sum();
            let reserved: i32 = item.stocks.iter().map(|stock| stock.reserved).sum();
            println!(
                "{:<14} {:<30} {:>8} {:>9}",
                item.product_id, item.offer_id, present, reserved
            );
        }
        total += page.result.items.len();
    }

    println!("\n{total} products");
    Ok(())
}
