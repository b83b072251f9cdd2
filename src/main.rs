use latticekit::{export, LatticeConfig, Result};
use log::info;
use std::env;
use std::process;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: latticekit <config.json> [output.csv]");
        process::exit(2);
    }

    let config_path = &args[1];
    info!("loading lattice config from {}", config_path);

    let config = LatticeConfig::from_path(config_path)?;
    let lattice = config.build()?;

    println!("latticekit - Lattice Info\n");

    println!("Cell vectors:");
    for vector in lattice.unit_cell().cell_vectors() {
        println!("  [{:>10.4}, {:>10.4}, {:>10.4}]", vector[0], vector[1], vector[2]);
    }

    println!("\nBasis points ({}):", lattice.unit_cell().basis_size());
    for point in lattice.unit_cell().basis() {
        println!("  ({:.4}, {:.4}, {:.4})", point.x(), point.y(), point.z());
    }

    let reps = lattice.repetitions();
    let periodic = lattice.periodic();
    println!("\nRepetitions: {} x {} x {}", reps[0], reps[1], reps[2]);
    println!(
        "Periodic:    ({}, {}, {})",
        periodic[0], periodic[1], periodic[2]
    );
    println!("Total sites: {}", lattice.len());

    let sites = lattice.sites();
    println!("\nFirst sites (fractional):");
    for (n, site) in sites.iter().take(8).enumerate() {
        println!("  {:>4}: ({:.4}, {:.4}, {:.4})", n, site.x(), site.y(), site.z());
    }
    if sites.len() > 8 {
        println!("  ... {} more", sites.len() - 8);
    }

    if let Some(output_path) = args.get(2) {
        info!("exporting {} sites to {}", lattice.len(), output_path);
        let written = export::export_sites_csv(output_path, &lattice)?;
        println!("\nWrote {} site records to {}", written, output_path);
    }

    Ok(())
}
