#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::pedantic)]
#![allow(warnings)]

use chainmap::ChainedHashMap;
use plotters::prelude::*;
use rand::distr::Alphanumeric;
use rand::Rng;
use std::mem::size_of;

// Fixed bucket count for the simulation; growth is studied separately
// through the library cross-check at the end.
const BUCKET_COUNT: usize = 100_000;
// Create load factors from 0.1 to 0.95 with 10 steps
const NUM_LOAD_FACTORS: usize = 10;

// String hash schemes to compare
const SCHEMES: [&str; 4] = ["Weighted Sum x11", "Plain Char Sum", "Polynomial 31", "FNV-1a"];

// Number of keys fed to the real map at the end
const CROSS_CHECK_KEYS: usize = 50_000;

// The library's scheme: character codes scaled by 11 and summed
fn weighted_sum_x11(key: &str) -> u64 {
    key.chars().map(|c| c as u64 * 11).sum()
}

// Unweighted character sum, the baseline the weighting improves on
fn plain_char_sum(key: &str) -> u64 {
    key.chars().map(|c| c as u64).sum()
}

// Horner-style polynomial with base 31
fn polynomial_31(key: &str) -> u64 {
    key.chars().fold(0u64, |h, c| h * 31 + c as u64)
}

// FNV-1a over the UTF-8 bytes
fn fnv1a(key: &str) -> u64 {
    let mut hash = 0xcbf2_9ce4_8422_2325u64;
    for byte in key.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

// Random alphanumeric key between 4 and 12 characters
fn random_key(rng: &mut impl Rng) -> String {
    let len = rng.random_range(4..=12);
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

// Appends a key to its chain and reports how many nodes the insert
// touched: the full scan to the tail plus the new node itself.
fn chained_insert(table: &mut Vec<Vec<String>>, index: usize, key: &str) -> usize {
    let scanned = table[index].len() + 1;
    table[index].push(key.to_string());
    scanned
}

// Estimate memory usage of a chained table (in bytes)
fn estimate_memory(table: &Vec<Vec<String>>) -> usize {
    // This is a simple approximation - real chains also pay for allocator
    // headers and alignment padding.
    let slot_memory = table.len() * size_of::<Vec<String>>();
    let node_memory: usize = table
        .iter()
        .flat_map(|chain| chain.iter())
        .map(|key| size_of::<String>() + key.len() + size_of::<usize>())
        .sum();

    slot_memory + node_memory
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate load factors from 0.1 to 0.95
    let load_factors: Vec<f64> = (0..NUM_LOAD_FACTORS)
        .map(|i| 0.1 + (0.95 - 0.1) * (i as f64) / ((NUM_LOAD_FACTORS - 1) as f64))
        .collect();

    // Calculate number of keys for each load factor
    let num_keys: Vec<usize> =
        load_factors.iter().map(|&load| (BUCKET_COUNT as f64 * load) as usize).collect();

    println!("Load factors: {:?}", load_factors);
    println!("Number of keys: {:?}", num_keys);

    // Results storage
    let mut average_scan_length: Vec<Vec<f64>> = vec![Vec::new(); SCHEMES.len()];
    let mut worst_chain_length: Vec<Vec<usize>> = vec![Vec::new(); SCHEMES.len()];
    let mut memory_footprint: Vec<Vec<usize>> = vec![Vec::new(); SCHEMES.len()];

    // Generate random keys outside the loop to ensure fair comparison
    let mut rng = rand::rng();
    let max_keys_needed = *num_keys.iter().max().unwrap();
    let keys: Vec<String> = (0..max_keys_needed).map(|_| random_key(&mut rng)).collect();

    // Running experiments
    for &n_keys in &num_keys {
        println!("Testing with {} keys", n_keys);

        for (scheme_idx, &scheme) in SCHEMES.iter().enumerate() {
            let mut table: Vec<Vec<String>> = vec![Vec::new(); BUCKET_COUNT];
            let mut scans: Vec<usize> = Vec::with_capacity(n_keys);

            for key in keys.iter().take(n_keys) {
                let hash = match scheme {
                    "Weighted Sum x11" => weighted_sum_x11(key),
                    "Plain Char Sum" => plain_char_sum(key),
                    "Polynomial 31" => polynomial_31(key),
                    "FNV-1a" => fnv1a(key),
                    _ => panic!("Unknown scheme"),
                };
                let index = (hash as usize) % BUCKET_COUNT;
                scans.push(chained_insert(&mut table, index, key));
            }

            // Calculate statistics
            let avg_scan = scans.iter().sum::<usize>() as f64 / scans.len() as f64;
            let worst_chain = table.iter().map(|chain| chain.len()).max().unwrap_or(0);
            let memory_usage = estimate_memory(&table);

            // Store results
            average_scan_length[scheme_idx].push(avg_scan);
            worst_chain_length[scheme_idx].push(worst_chain);
            memory_footprint[scheme_idx].push(memory_usage);

            println!(
                "  {}: Avg scan = {:.3}, Worst chain = {}, Memory = {} bytes",
                scheme, avg_scan, worst_chain, memory_usage
            );
        }
    }

    // Plot configuration shared by all three charts
    let font_family = "sans-serif";

    let colors = [
        RGBColor(220, 50, 50),  // Bright red
        RGBColor(50, 90, 220),  // Bright blue
        RGBColor(50, 180, 50),  // Bright green
        RGBColor(180, 50, 180), // Bright magenta
    ];

    let line_width = 2;
    let marker_size = 4;
    let text_size = 16;
    let title_size = 35;

    // Custom x-axis labels shared by all charts
    let x_labels: Vec<String> = num_keys.iter().map(|&n| n.to_string()).collect();

    // Plot 1: Average insert scan length
    let root = BitMapBackend::new("chained_scan_length.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_avg = average_scan_length
        .iter()
        .flat_map(|v| v.iter())
        .fold(0.0, |max, &x| if x > max { x } else { max }) *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption("Chain Scan Cost per Hash Scheme", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..(num_keys.len() - 1), 0.0..max_avg)?;

    chart
        .configure_mesh()
        .x_labels(num_keys.len() - 1)
        .x_label_formatter(&|x| {
            if *x < x_labels.len() { x_labels[*x].clone() } else { "".to_string() }
        })
        .x_desc("Number of Keys Inserted")
        .y_desc("Average Insert Scan Length (nodes)")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    // Mark where the library map would have doubled its bucket count
    let growth_idx = load_factors.iter().position(|&lf| lf > 0.75).unwrap_or(num_keys.len() - 1);
    if growth_idx < num_keys.len() - 1 {
        let reference_style = ShapeStyle::from(&BLACK.mix(0.3)).stroke_width(1);
        chart
            .draw_series(LineSeries::new(
                vec![(growth_idx, 0.0), (growth_idx, max_avg)],
                reference_style,
            ))?
            .label("0.75 Growth Threshold")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], reference_style));
    }

    // Draw lines for each scheme
    for (scheme_idx, &scheme) in SCHEMES.iter().enumerate() {
        let color = &colors[scheme_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(
                (0..num_keys.len() - 1).map(|i| (i, average_scan_length[scheme_idx][i])),
                line_style,
            ))?
            .label(scheme)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series((0..num_keys.len() - 1).map(|i| {
            Circle::new((i, average_scan_length[scheme_idx][i]), marker_size, color.filled())
        }))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    // Plot 2: Worst chain length
    let root = BitMapBackend::new("worst_chain_length.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_worst = worst_chain_length
        .iter()
        .flat_map(|v| v.iter())
        .fold(0, |max, &x| if x > max { x } else { max }) as f64 *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption("Worst Chain Length per Hash Scheme", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..(num_keys.len() - 1), 0.0..max_worst)?;

    chart
        .configure_mesh()
        .x_labels(num_keys.len() - 1)
        .x_label_formatter(&|x| {
            if *x < x_labels.len() { x_labels[*x].clone() } else { "".to_string() }
        })
        .x_desc("Number of Keys Inserted")
        .y_desc("Longest Chain (nodes)")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    // Draw lines for each scheme
    for (scheme_idx, &scheme) in SCHEMES.iter().enumerate() {
        let color = &colors[scheme_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(
                (0..num_keys.len() - 1).map(|i| (i, worst_chain_length[scheme_idx][i] as f64)),
                line_style,
            ))?
            .label(scheme)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series((0..num_keys.len() - 1).map(|i| {
            Circle::new(
                (i, worst_chain_length[scheme_idx][i] as f64),
                marker_size,
                color.filled(),
            )
        }))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    // Plot 3: Estimated memory footprint
    let root = BitMapBackend::new("chain_memory_footprint.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_memory = memory_footprint
        .iter()
        .flat_map(|v| v.iter())
        .fold(0, |max, &x| if x > max { x } else { max }) as f64 *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption("Estimated Memory Footprint", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..(num_keys.len() - 1), 0.0..max_memory)?;

    chart
        .configure_mesh()
        .x_labels(num_keys.len() - 1)
        .x_label_formatter(&|x| {
            if *x < x_labels.len() { x_labels[*x].clone() } else { "".to_string() }
        })
        .x_desc("Number of Keys Inserted")
        .y_desc("Memory Footprint (bytes)")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    // Draw lines for each scheme; the sum-based schemes cluster keys into
    // fewer buckets, so their footprint tracks chain growth
    for (scheme_idx, &scheme) in SCHEMES.iter().enumerate() {
        let color = &colors[scheme_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(
                (0..num_keys.len() - 1).map(|i| (i, memory_footprint[scheme_idx][i] as f64)),
                line_style,
            ))?
            .label(scheme)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series((0..num_keys.len() - 1).map(|i| {
            Circle::new((i, memory_footprint[scheme_idx][i] as f64), marker_size, color.filled())
        }))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    println!(
        "Generated plot images: chained_scan_length.png, worst_chain_length.png, chain_memory_footprint.png"
    );

    // Cross-check against the real map, which doubles its bucket count
    // instead of letting chains grow unbounded
    println!();
    println!("Library cross-check with {} keys", CROSS_CHECK_KEYS);
    let mut map = ChainedHashMap::new();
    for (i, key) in keys.iter().take(CROSS_CHECK_KEYS).enumerate() {
        map.insert(key.clone(), i);
    }
    println!(
        "ChainedHashMap: len = {}, capacity = {}, load factor = {:.3}",
        map.len(),
        map.capacity(),
        map.load_factor()
    );

    Ok(())
}
