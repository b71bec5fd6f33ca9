use std::time::Instant;

use disjoint_set::{DisjointSet, UnionFind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Minimum spanning forest of a random weighted graph, using Kruskal's algorithm.
///
/// Usage: `cargo run --example kruskal -- [nodes] [edges]`
fn main() -> Result<(), disjoint_set::Error> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let nodes: usize = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(10_000);
    let edge_count: usize = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(50_000);

    let mut uf = UnionFind::new(nodes)?;

    let mut rng = StdRng::seed_from_u64(1);
    let mut edges: Vec<(u32, usize, usize)> = (0..edge_count)
        .map(|_| {
            (
                rng.gen_range(1..1000),
                rng.gen_range(0..nodes),
                rng.gen_range(0..nodes),
            )
        })
        .collect();
    info!(nodes, edges = edges.len(), "generated graph");

    let before = Instant::now();
    edges.sort_unstable();
    let mut total_weight = 0_u64;
    let mut forest_edges = 0;
    for (weight, a, b) in edges {
        if uf.unify(a, b)? {
            total_weight += u64::from(weight);
            forest_edges += 1;
        }
    }
    let duration = before.elapsed();

    let largest = uf
        .roots()
        .map(|root| uf.component_size(root))
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .max()
        .unwrap_or(0);

    println!(
        "Spanning forest: {} edges, weight {}, {} trees (largest has {} nodes)",
        forest_edges,
        total_weight,
        uf.components(),
        largest
    );
    println!("Took {:.3}s", duration.as_secs_f64());
    Ok(())
}
