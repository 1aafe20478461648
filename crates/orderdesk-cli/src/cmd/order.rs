use crate::output::{format_amount, print_json, print_table};
use clap::Subcommand;
use orderdesk_core::query;
use orderdesk_core::store::RecordStore;

#[derive(Subcommand)]
pub enum OrderSubcommand {
    /// List all orders with their totals
    List,
    /// Show one order and its line items
    Show { id: String },
    /// Print the total of one order
    Total { id: String },
}

pub fn run(store: &RecordStore, subcmd: OrderSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        OrderSubcommand::List => list(store, json),
        OrderSubcommand::Show { id } => show(store, &id, json),
        OrderSubcommand::Total { id } => total(store, &id, json),
    }
}

fn list(store: &RecordStore, json: bool) -> anyhow::Result<()> {
    let orders = store.orders.list();

    if json {
        return print_json(orders);
    }

    if orders.is_empty() {
        println!("No orders.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = orders
        .iter()
        .map(|o| {
            vec![
                o.number.clone(),
                o.contents.len().to_string(),
                format_amount(query::compute_total(o)),
            ]
        })
        .collect();
    print_table(&["NUMBER", "ITEMS", "TOTAL"], &rows);
    Ok(())
}

fn show(store: &RecordStore, id: &str, json: bool) -> anyhow::Result<()> {
    let order = query::find_order(store, id)?;

    if json {
        return print_json(order);
    }

    println!("Order: {}", order.number);
    let rows: Vec<Vec<String>> = order
        .contents
        .iter()
        .map(|i| {
            vec![
                i.item.clone(),
                i.amount.to_string(),
                format_amount(i.price),
                format_amount(i.subtotal()),
            ]
        })
        .collect();
    print_table(&["ITEM", "AMOUNT", "PRICE", "SUBTOTAL"], &rows);
    println!("Total: {}", format_amount(query::compute_total(order)));
    Ok(())
}

fn total(store: &RecordStore, id: &str, json: bool) -> anyhow::Result<()> {
    let total = query::order_total(store, id)?;

    if json {
        print_json(&serde_json::json!({ "number": id, "total": total }))
    } else {
        println!("{}", format_amount(total));
        Ok(())
    }
}
