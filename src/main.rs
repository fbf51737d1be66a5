//! Lot Auction - Demo Driver
//!
//! Loads a fixed set of prosumer bids and consumer asks, runs one clearing
//! round and prints both execution books and the round receipt.
//!
//! Set `RUST_LOG=debug` to see the round summary from the engine.

use lot_auction::types::quantity::from_fixed;
use lot_auction::{AuctionEngine, Author, EngineConfig, ExecutionBook, Order};
use rust_decimal::Decimal;

fn print_book(title: &str, book: &ExecutionBook) {
    println!("{title}:");
    if book.is_empty() {
        println!("  (nothing matched)");
        return;
    }
    let totals = book.totals();
    for (author, lots) in book.iter() {
        let total = totals.get(author).copied().unwrap_or_default();
        let trace: Vec<String> = lots
            .iter()
            .map(|m| format!("{}<-{}", m.amount, m.offer_id))
            .collect();
        println!("  {author:<10} total {total:>4}  [{}]", trace.join(", "));
    }
}

fn main() -> lot_auction::Result<()> {
    env_logger::init();

    println!("===========================================");
    println!("  Lot Auction - single clearing round");
    println!("===========================================");
    println!();

    let mut engine = AuctionEngine::new(EngineConfig::default())?;

    let prosumers = [
        (Author::new("Prosumer1", "4"), "1", 40, 35),
        (Author::new("Prosumer2", "5"), "2", 25, 60),
        (Author::new("Prosumer3", "6"), "3", 55, 20),
    ];
    let consumers = [
        (Author::new("Consumer1", "1"), "4", 30, 25),
        (Author::new("Consumer3", "3"), "5", 12, 45),
        (Author::new("Consumer2", "2"), "6", 45, 70),
    ];

    for (author, id, amount, price) in prosumers {
        engine.add_bid(Order::new(author, id, amount, Decimal::from(price)))?;
    }
    for (author, id, amount, price) in consumers {
        engine.add_ask(Order::new(author, id, amount, Decimal::from(price)))?;
    }

    let snapshot = engine.snapshot();
    println!(
        "Resting: {} bids ({} total), {} asks ({} total), lot size {}",
        snapshot.bids.len(),
        snapshot.total_bid_amount(),
        snapshot.asks.len(),
        snapshot.total_ask_amount(),
        engine.lot_size()
    );
    println!();

    let result = engine.run_auction();
    println!(
        "Clearing quantity: {} lots ({} lot units), {} pairings",
        result.clearing_quantity, result.matched_volume, result.matched_pairs
    );
    println!();

    print_book("Bid execution book", &result.books.bid_execution_book);
    print_book("Ask execution book", &result.books.ask_execution_book);
    println!();

    let receipt = result.receipt();
    println!("Receipt:");
    println!("  clearing quantity: {}", from_fixed(receipt.clearing_quantity));
    println!("  books root:        {}", receipt.books_root_hex());
    if let Some(rate) = receipt.ask_fill_rate() {
        println!("  ask fill rate:     {:.2}", rate);
    }
    match ssz_rs::serialize(&receipt) {
        Ok(bytes) => println!("  ssz size:          {} bytes", bytes.len()),
        Err(e) => println!("  ERROR: Failed to serialize: {:?}", e),
    }

    Ok(())
}
