use crate::output::{print_json, print_table};
use clap::Subcommand;
use orderdesk_core::query;
use orderdesk_core::store::RecordStore;

#[derive(Subcommand)]
pub enum CustomerSubcommand {
    /// List all customers
    List,
    /// Show one customer
    Show { id: String },
}

pub fn run(store: &RecordStore, subcmd: CustomerSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        CustomerSubcommand::List => list(store, json),
        CustomerSubcommand::Show { id } => show(store, &id, json),
    }
}

fn list(store: &RecordStore, json: bool) -> anyhow::Result<()> {
    let customers = store.customers.list();

    if json {
        return print_json(customers);
    }

    if customers.is_empty() {
        println!("No customers.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = customers
        .iter()
        .map(|c| {
            vec![
                c.id.clone(),
                format!("{} {}", c.first_name, c.last_name),
                c.email.clone(),
            ]
        })
        .collect();
    print_table(&["ID", "NAME", "EMAIL"], &rows);
    Ok(())
}

fn show(store: &RecordStore, id: &str, json: bool) -> anyhow::Result<()> {
    let customer = query::find_customer(store, id)?;

    if json {
        return print_json(customer);
    }

    println!("Customer: {}", customer.id);
    println!("Name:     {} {}", customer.first_name, customer.last_name);
    println!("Email:    {}", customer.email);
    Ok(())
}
