use core::{Cache, Fbm, NoiseModule, Perlin, ScaleBias, Select, Voronoi};

fn main() {
    // Rolling base terrain: six octaves of Perlin
    let perlin = Perlin::new(2025);
    let mut base = Fbm::new(&perlin);
    base.set_frequency(2.0);

    // Cellular ridges, lifted into roughly [0, 1]
    let mut cells = Voronoi::new(2025);
    cells.set_frequency(4.0);
    cells.enable_distance(true);
    let mut ridges = ScaleBias::new(&cells);
    ridges.set_scale(0.5);
    ridges.set_bias(0.5);

    // Blend the two by a second, slower Perlin field
    let control = Perlin::new(77);
    let mut select = Select::new(&control, &base, &ridges);
    select.set_bounds(0.0, 1.0).unwrap();
    select.set_edge_falloff(0.25);

    // Memoize the finished graph
    let graph = Cache::new(&select, 64).unwrap();

    // Print the top-left 16x16 corner of the field
    for y in 0..16 {
        for x in 0..16 {
            let v = graph.get2(x as f64 / 16.0, y as f64 / 16.0);
            print!("{:>7.3} ", v);
        }
        println!();
    }
}
