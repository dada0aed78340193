//! # Scoop CLI
//!
//! Submits one order from a file and prints the finished dish.
//!
//! ## Usage
//! ```bash
//! # Submit an order with the default config
//! cargo run -p scoop-cli -- --order ./order.toml
//!
//! # Print the dish as JSON, with a specific config
//! cargo run -p scoop-cli -- --order ./order.json --config ./scoop.toml --json
//!
//! # Write the effective config to the config path
//! cargo run -p scoop-cli -- --init-config --config ./scoop.toml
//! ```
//!
//! Logs go to stderr and honour `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use scoop_core::{IceCreamDish, IceCreamShop};
use scoop_counter::{load_order, CountedStock, CounterConfig, ReceiptLedger};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Scoop - submit an ice cream order

Usage: scoop --order <FILE> [OPTIONS]
       scoop --init-config [--config <FILE>]

Options:
  -o, --order <FILE>     Order file (.toml or .json)
  -c, --config <FILE>    Config file (default: platform config dir/scoop.toml)
      --json             Print the finished dish as JSON
      --init-config      Write the effective config and exit
  -h, --help             Show this help message";

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    order: Option<PathBuf>,
    config: Option<PathBuf>,
    json: bool,
    init_config: bool,
    help: bool,
}

fn parse_args<I>(args: I) -> Result<Args, String>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--order" | "-o" => {
                let value = args.next().ok_or("--order needs a file path")?;
                parsed.order = Some(PathBuf::from(value));
            }
            "--config" | "-c" => {
                let value = args.next().ok_or("--config needs a file path")?;
                parsed.config = Some(PathBuf::from(value));
            }
            "--json" => parsed.json = true,
            "--init-config" => parsed.init_config = true,
            "--help" | "-h" => parsed.help = true,
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(parsed)
}

fn summary(shop_name: &str, dish: &IceCreamDish) -> String {
    let flavors: Vec<String> = dish.flavors().iter().map(ToString::to_string).collect();
    let toppings: Vec<String> = dish.toppings().iter().map(ToString::to_string).collect();

    let mut line = format!(
        "{}: {} {} with {}",
        shop_name,
        dish.cone().portion_size(),
        dish.cone().cone_type(),
        flavors.join(", ")
    );
    if !toppings.is_empty() {
        line.push_str(&format!(", topped with {}", toppings.join(", ")));
    }
    if dish.is_vegan() {
        line.push_str(" (vegan)");
    }
    line
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = CounterConfig::load(args.config.clone())?;
    info!(shop = %config.shop.name, "Configuration loaded");

    if args.init_config {
        config.save(args.config)?;
        return Ok(());
    }

    let order_path = args.order.ok_or("--order is required")?;
    let order = load_order(&order_path)?;

    let stock = Arc::new(CountedStock::from_config(&config.stock));
    let ledger = Arc::new(ReceiptLedger::from_config(&config.billing));
    let shop = IceCreamShop::new(stock, ledger.clone());

    let dish = shop.submit(&order)?;

    if let Some(receipt) = ledger.last_receipt() {
        info!(receipt_id = %receipt.id, "Order complete");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dish)?);
    } else {
        println!("{}", summary(&config.shop.name, &dish));
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}\n\n{}", e, USAGE);
            return ExitCode::FAILURE;
        }
    };

    if args.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoop_core::{Cone, ConeType, Flavor, PortionSize, ShopError, Topping};

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("scoop-cli-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let parsed = parse_args(args(&["-o", "order.toml", "--config", "scoop.toml", "--json"]))
            .unwrap();

        assert_eq!(parsed.order, Some(PathBuf::from("order.toml")));
        assert_eq!(parsed.config, Some(PathBuf::from("scoop.toml")));
        assert!(parsed.json);
        assert!(!parsed.init_config);
    }

    #[test]
    fn test_parse_args_rejects_unknown_and_dangling() {
        assert!(parse_args(args(&["--colour"])).is_err());
        assert!(parse_args(args(&["--order"])).is_err());
    }

    #[test]
    fn test_summary() {
        let mut dish = IceCreamDish::new(Cone::new(ConeType::Biscuit, PortionSize::Medium), true);
        dish.add_flavor(Flavor::Vanilla).unwrap();
        dish.add_flavor(Flavor::Strawberry).unwrap();
        dish.add_topping(Topping::HotFudge);

        assert_eq!(
            summary("Kiosk", &dish),
            "Kiosk: medium biscuit with vanilla, strawberry, topped with hot_fudge (vegan)"
        );
    }

    #[test]
    fn test_run_reports_out_of_stock() {
        let dir = temp_dir();
        let config = dir.join("scoop.toml");
        let order = dir.join("order.toml");
        std::fs::write(&config, "[stock]\nvanilla = 0\n").unwrap();
        std::fs::write(
            &order,
            "cone_type = \"cup\"\nportion_size = \"small\"\nflavors = [\"vanilla\"]\n",
        )
        .unwrap();

        let err = run(Args {
            order: Some(order),
            config: Some(config),
            ..Args::default()
        })
        .unwrap_err();
        std::fs::remove_dir_all(dir).unwrap();

        assert!(matches!(
            err.downcast_ref::<ShopError>(),
            Some(ShopError::OutOfStock {
                flavor: Flavor::Vanilla
            })
        ));
    }

    #[test]
    fn test_run_submits_order() {
        let dir = temp_dir();
        let order = dir.join("order.json");
        std::fs::write(
            &order,
            r#"{"cone_type": "biscuit", "portion_size": "medium", "flavors": ["strawberry"]}"#,
        )
        .unwrap();

        let result = run(Args {
            order: Some(order),
            config: Some(dir.join("scoop.toml")),
            json: true,
            ..Args::default()
        });
        std::fs::remove_dir_all(dir).unwrap();

        assert!(result.is_ok());
    }

    #[test]
    fn test_run_init_config_writes_file() {
        let dir = temp_dir();
        let config = dir.join("nested").join("scoop.toml");

        run(Args {
            config: Some(config.clone()),
            init_config: true,
            ..Args::default()
        })
        .unwrap();

        assert!(config.exists());
        assert_eq!(
            CounterConfig::load(Some(config)).unwrap().shop.name,
            "Scoop Counter"
        );
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_run_requires_order() {
        let dir = temp_dir();
        let err = run(Args {
            config: Some(dir.join("scoop.toml")),
            ..Args::default()
        })
        .unwrap_err();
        std::fs::remove_dir_all(dir).unwrap();

        assert_eq!(err.to_string(), "--order is required");
    }
}
