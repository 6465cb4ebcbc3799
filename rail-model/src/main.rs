use std::error::Error;

use rail_model::domain::RollingStockKind;
use rail_model::network::{Route, Stations};
use rail_model::train::TrainRegistry;
use rail_model::wagon::Wagon;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut stations = Stations::new();
    let moscow = stations.add("Moscow");
    let tver = stations.add("Tver");
    let spb = stations.add("Saint Petersburg");
    let route = Route::new(vec![moscow, tver, spb])?;

    let mut registry = TrainRegistry::new();

    let express = registry.create(Some("SAP-01"), Some("passenger"))?;
    express.set_manufacturer("Siemens");
    for _ in 0..3 {
        if let Err(wagon) = express.attach_wagon(Wagon::passenger(60)) {
            println!("Refused wagon for SAP-01: {wagon:?}");
        }
    }
    express.set_route(route.clone(), &mut stations);

    let freight = registry.create(Some("GRZ77"), Some("cargo"))?;
    if let Err(wagon) = freight.attach_wagon(Wagon::cargo(120)) {
        println!("Refused wagon for GRZ77: {wagon:?}");
    }
    freight.set_route(route, &mut stations);

    if let Err(e) = registry.create(Some("SAP-01"), Some("cargo")) {
        println!("Rejected second SAP-01: {e}");
    }

    if let Some(express) = registry.find_mut("SAP-01") {
        express.gain_speed(80);
        express.forward(&mut stations);
        express.forward(&mut stations);
        express.reset_speed(100);
    }

    println!("Station occupancy:");
    for (_, station) in stations.iter() {
        let passenger: Vec<&str> = station
            .trains_of_type(RollingStockKind::Passenger)
            .map(|n| n.as_str())
            .collect();
        let cargo: Vec<&str> = station
            .trains_of_type(RollingStockKind::Cargo)
            .map(|n| n.as_str())
            .collect();
        println!(
            "  {:<18} passenger: {:?}  cargo: {:?}",
            station.name(),
            passenger,
            cargo
        );
    }

    println!();
    println!("Trains created:");
    for kind in [RollingStockKind::Cargo, RollingStockKind::Passenger] {
        println!("  {kind}: {}", registry.counter().instances(kind));
    }

    Ok(())
}
