use colored::*;
use loliglio::api::models::ChampionInfo;
use loliglio::api::routing::{Cluster, Division, Queue, Region, Tier};
use serde_json::Value;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct RegionRow {
    #[tabled(rename = "#")]
    index: usize,
    region: String,
    cluster: String,
}

#[derive(Tabled)]
struct CodeRow {
    #[tabled(rename = "#")]
    index: usize,
    cluster: String,
    queue: String,
    tier: String,
    division: String,
}

#[derive(Tabled)]
struct ChampionRow {
    key: String,
    id: String,
    name: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(pretty) => println!("{}", pretty),
        Err(_) => println!("{}", value),
    }
}

pub fn display_list<T: ToString>(title: &str, items: &[T]) {
    println!("\n{}", format!("{} ({})", title, items.len()).bold().cyan());
    println!("{}", "=".repeat(60).cyan());
    for item in items {
        println!("  {}", item.to_string());
    }
    println!();
}

pub fn display_champion(champion: &ChampionInfo) {
    println!("\n{}", champion.name.bold().cyan());
    let table = Table::new(vec![ChampionRow {
        key: champion.key.clone(),
        id: champion.id.clone(),
        name: champion.name.clone(),
    }])
    .with(Style::rounded())
    .to_string();
    println!("{}", table);
    if let Some(title) = champion.details.get("title").and_then(Value::as_str) {
        println!("  {}", title.italic());
    }
    println!();
}

/// Print every routing and ladder table with the index each value has.
pub fn display_code_tables() {
    println!("\n{}", "🌍 REGIONS".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let rows: Vec<RegionRow> = Region::ALL
        .iter()
        .enumerate()
        .map(|(index, region)| RegionRow {
            index,
            region: region.to_string(),
            cluster: region.cluster().to_string(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!("\n{}", "🏆 CLUSTERS & LADDER".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let longest = Tier::ALL.len();
    let cell = |value: Option<String>| value.unwrap_or_default();
    let rows: Vec<CodeRow> = (0..longest)
        .map(|index| CodeRow {
            index,
            cluster: cell(Cluster::ALL.get(index).map(ToString::to_string)),
            queue: cell(Queue::ALL.get(index).map(ToString::to_string)),
            tier: cell(Tier::ALL.get(index).map(ToString::to_string)),
            division: cell(Division::ALL.get(index).map(ToString::to_string)),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}
