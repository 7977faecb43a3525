use std::time::Instant;

use miette::*;

use aoc2025_day_3::part2;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| miette!("usage: part2 <input-file>"))?;

    let start = Instant::now();
    let input = std::fs::read_to_string(&path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {path}"))?;
    tracing::info!(elapsed = ?start.elapsed(), "read input file");

    let start = Instant::now();
    let result = part2::process(&input)?;
    tracing::info!(elapsed = ?start.elapsed(), "compute");

    println!("result: {result}");
    Ok(())
}
