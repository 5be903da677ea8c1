#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::indexing_slicing)]

use plotters::prelude::*;
use primemap::{
    ChainedMap, HashTable, KeyHasher, OpenAddressingMap, PositionWeighted, StdKeyHasher,
    SumOfCodes,
};
use rand::{Rng, distr::Alphanumeric};

const KEY_COUNT: usize = 2_000;
const KEY_LENGTH: usize = 8;
const INITIAL_CAPACITY: usize = 11;
// Record every SAMPLE_EVERY-th insertion
const SAMPLE_EVERY: usize = 10;

const IMAGE_SIZE: (u32, u32) = (1200, 800);

/// Measurements taken while filling one table.
struct Run {
    name: String,
    load_factor: Vec<(usize, f64)>,
    empty_ratio: Vec<(usize, f64)>,
    final_capacity: usize,
}

fn random_keys(count: usize) -> Vec<String> {
    let mut rng = rand::rng();
    (0..count)
        .map(|i| {
            let suffix: String =
                (&mut rng).sample_iter(&Alphanumeric).take(KEY_LENGTH).map(char::from).collect();
            // The index keeps keys distinct.
            format!("{i}-{suffix}")
        })
        .collect()
}

fn record<T: HashTable<String, usize>>(name: String, mut table: T, keys: &[String]) -> Run {
    let mut load_factor = Vec::new();
    let mut empty_ratio = Vec::new();

    for (inserted, key) in keys.iter().enumerate() {
        table.put(key.clone(), inserted);
        let count = inserted + 1;
        if count % SAMPLE_EVERY == 0 {
            load_factor.push((count, table.table_load()));
            empty_ratio.push((count, table.empty_buckets() as f64 / table.capacity() as f64));
        }
    }

    Run { name, load_factor, empty_ratio, final_capacity: table.capacity() }
}

fn runs_for<H: KeyHasher + Copy>(hasher: H, label: &str, keys: &[String]) -> [Run; 2] {
    [
        record(
            format!("Open addressing / {label}"),
            OpenAddressingMap::new(INITIAL_CAPACITY, hasher),
            keys,
        ),
        record(format!("Chaining / {label}"), ChainedMap::new(INITIAL_CAPACITY, hasher), keys),
    ]
}

fn plot(
    path: &str,
    caption: &str,
    y_desc: &str,
    runs: &[Run],
    series: fn(&Run) -> &[(usize, f64)],
) -> Result<(), Box<dyn std::error::Error>> {
    let font_family = "sans-serif";
    let colors = [
        RGBColor(220, 50, 50),
        RGBColor(50, 90, 220),
        RGBColor(50, 180, 50),
        RGBColor(180, 50, 180),
        RGBColor(230, 140, 20),
        RGBColor(20, 160, 170),
    ];

    let root = BitMapBackend::new(path, IMAGE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let max_y = runs
        .iter()
        .flat_map(|run| series(run).iter().map(|(_, y)| *y))
        .fold(0.0, f64::max) *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (font_family, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..KEY_COUNT, 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_desc("Number of Keys Inserted")
        .y_desc(y_desc)
        .axis_desc_style((font_family, 16))
        .draw()?;

    for (index, run) in runs.iter().enumerate() {
        let color = &colors[index % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(2);
        chart
            .draw_series(LineSeries::new(series(run).iter().copied(), line_style))?
            .label(run.name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let keys = random_keys(KEY_COUNT);
    println!("Generated {} random keys of length {}", keys.len(), KEY_LENGTH);

    let mut runs = Vec::new();
    runs.extend(runs_for(SumOfCodes, "sum of codes", &keys));
    runs.extend(runs_for(PositionWeighted, "position weighted", &keys));
    runs.extend(runs_for(StdKeyHasher, "std hasher", &keys));

    for run in &runs {
        let mean_empty = run.empty_ratio.iter().map(|(_, ratio)| ratio).sum::<f64>() /
            run.empty_ratio.len().max(1) as f64;
        println!(
            "  {}: final capacity = {}, mean empty-bucket ratio = {:.3}",
            run.name, run.final_capacity, mean_empty
        );
    }

    plot(
        "load_factor.png",
        "Load Factor While Filling",
        "Load Factor",
        &runs,
        |run| run.load_factor.as_slice(),
    )?;
    plot(
        "empty_buckets.png",
        "Share of Empty Buckets While Filling",
        "Empty Buckets / Capacity",
        &runs,
        |run| run.empty_ratio.as_slice(),
    )?;

    println!("Generated plot images: load_factor.png, empty_buckets.png");

    Ok(())
}
