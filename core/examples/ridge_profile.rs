// Prints a single layer's raw fractal profile next to its pixel heights

use mountains::{fractal, get_heights};

fn main() -> mountains::Result<()> {
    let width = 32;
    let peaks = 2;
    let wavelength = width as f64 / peaks as f64;

    let raw = fractal(4, wavelength, width, 1)?;
    let heights = get_heights(width, 100.0, 4, 3.0, 0.3, peaks, 1)?;

    for (x, (r, h)) in raw.iter().zip(&heights).enumerate() {
        let bar = "#".repeat((100.0 - h).max(0.0) as usize / 2);
        println!("{:>3} {:>7.3} {:>7.2} {}", x, r, h, bar);
    }
    Ok(())
}
