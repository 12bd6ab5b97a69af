use core::{Billow, Fbm, NoiseModule, Perlin, RidgedMulti, ScaleBias, Select};
use image::{Rgb, RgbImage};
use palette::{Gradient, LinSrgb};
use std::path::Path;

fn main() {
    let size = 513;

    // Mountains: ridged multifractal over Perlin
    let rough = Perlin::new(2025);
    let mut mountains = RidgedMulti::new(&rough);
    mountains.set_frequency(2.0);

    // Plains: billowy lowlands, flattened and pushed down
    let soft = Perlin::new(31337);
    let billow = Billow::new(&soft);
    let mut plains = ScaleBias::new(&billow);
    plains.set_scale(0.125);
    plains.set_bias(-0.75);

    // A slow Fbm field decides which region wins
    let control_base = Perlin::new(501);
    let mut control = Fbm::new(&control_base);
    control.set_frequency(0.5);

    let mut terrain = Select::new(&control, &plains, &mountains);
    terrain.set_bounds(0.0, 1000.0).unwrap();
    terrain.set_edge_falloff(0.25);

    // Evaluate the graph over the unit square
    let mut heights = vec![0.0f32; size * size];
    for y in 0..size {
        for x in 0..size {
            let nx = x as f64 / size as f64 * 4.0;
            let ny = y as f64 / size as f64 * 4.0;
            heights[y * size + x] = terrain.get2(nx, ny) as f32;
        }
    }

    // Normalize to [0, 1] for coloring
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &h in &heights {
        min = min.min(h);
        max = max.max(h);
    }
    let range = (max - min).max(1e-6);

    // Deep water to beach to grass to rock to snow
    let gradient = Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.0, 0.0, 0.5)),
        (0.30, LinSrgb::new(0.8, 0.8, 0.5)),
        (0.50, LinSrgb::new(0.1, 0.6, 0.2)),
        (0.75, LinSrgb::new(0.5, 0.4, 0.3)),
        (1.00, LinSrgb::new(1.0, 1.0, 1.0)),
    ]);

    let mut img = RgbImage::new(size as u32, size as u32);
    for y in 0..size {
        for x in 0..size {
            let norm = (heights[y * size + x] - min) / range;
            let col: LinSrgb = gradient.get(norm);
            let rgb = col.into_format::<u8>();
            img.put_pixel(x as u32, y as u32, Rgb([rgb.red, rgb.green, rgb.blue]));
        }
    }

    let path = Path::new("terrain_composite.png");
    img.save(path).unwrap();
    println!("Saved composite terrain image to {:?}", path);
}
