//! Precision sweep for a slightly perturbed 3-4-5 triangle.
//!
//! Shows where the right-angle band stops absorbing the perturbation and the
//! sign of `a² + b² − c²` takes over.

use trikind::{triangle_kind_f64, TriangleError};

fn main() {
    let hypotenuses = [4.999, 4.9999, 5.0, 5.0001, 5.001];
    let precisions = [1e-1, 1e-2, 1e-3, 1e-4, 1e-6];

    print!("{:>10}", "c \\ prec");
    for p in precisions {
        print!("{p:>10.0e}");
    }
    println!();

    for c in hypotenuses {
        print!("{c:>10}");
        for p in precisions {
            let cell = match triangle_kind_f64(3.0, 4.0, c, p) {
                Ok(kind) => kind.to_string(),
                Err(TriangleError::GeometricallyImpossible) => "-".to_string(),
                Err(e) => format!("{e}"),
            };
            print!("{cell:>10}");
        }
        println!();
    }
}
