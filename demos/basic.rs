//! Basic example demonstrating kmeanspp-rs usage
//!
//! Run with: cargo run --example basic

use kmeanspp_rs::{Column, ColumnData, Dataset, KMeans, KMeansConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== kmeanspp-rs example ===\n");

    // A wide table: the country name is not a feature
    let table = Dataset::new(vec![
        Column::text(
            "country",
            ["Chile", "Peru", "Spain", "Norway", "Mali", "Niger", "Japan", "Bolivia"],
        ),
        Column::float(
            "GDP_per_capita",
            [15000.0, 7000.0, 30000.0, 87000.0, 900.0, 600.0, 34000.0, f64::NAN],
        ),
        Column::float(
            "life_expectancy",
            [80.0, 77.0, 83.0, 83.0, 59.0, 62.0, 84.0, 72.0],
        ),
        Column::float(
            "literacy_rate",
            [96.0, 94.0, 98.0, 99.0, 31.0, 35.0, 99.0, 93.0],
        ),
    ])?;

    let features = table.select(&["GDP_per_capita", "life_expectancy", "literacy_rate"])?;
    println!(
        "Clustering {} rows over {} features...\n",
        features.n_rows(),
        features.n_columns()
    );

    let config = KMeansConfig::new(3).with_max_iters(10).with_seed(42);
    let kmeans = KMeans::with_config(config);
    let clustering = kmeans.fit(&features)?;

    println!("Final centroids (normalized):");
    for (i, centroid) in clustering.centroid_list().iter().enumerate() {
        println!(
            "  Centroid {}: ({:.4}, {:.4}, {:.4})",
            i, centroid[0], centroid[1], centroid[2]
        );
    }
    println!();

    println!("Cluster distribution:");
    for (i, count) in clustering.cluster_sizes().iter().enumerate() {
        println!("  Cluster {}: {} rows", i, count);
    }
    println!();

    println!("Assignments:");
    let names = match table.column("country").map(|c| &c.data) {
        Some(ColumnData::Text(names)) => names.clone(),
        _ => Vec::new(),
    };
    for (&row, &label) in clustering.source_rows().iter().zip(clustering.labels().iter()) {
        let name = names.get(row).cloned().flatten().unwrap_or_default();
        println!("  {:<8} -> Cluster {}", name, label);
    }

    println!("\nInertia: {:.4}", clustering.inertia());
    println!("\n=== Done! ===");
    Ok(())
}
