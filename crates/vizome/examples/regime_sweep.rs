//! Print how the default arrow degenerates as its length shrinks.
//!
//! Usage:
//!   cargo run -p vizome --example regime_sweep
//!   cargo run -p vizome --example regime_sweep -- 0.5 1.2 8 12
//!
//! Arguments (optional): alpha beta height1 height2.

use vizome::designer::{ArrowCfg, ArrowDesigner};
use vizome::prepare::polygon_points;

fn main() {
    let args: Vec<f64> = std::env::args()
        .skip(1)
        .filter_map(|a| a.parse().ok())
        .collect();
    let cfg = match args.as_slice() {
        [alpha, beta, height1, height2] => ArrowCfg {
            alpha: *alpha,
            beta: *beta,
            height1: *height1,
            height2: *height2,
        },
        _ => ArrowCfg::default(),
    };
    let designer = ArrowDesigner::new(cfg).expect("valid arrow configuration");
    println!(
        "cfg={:?} threshold1={:.3} threshold2={:.3}",
        cfg,
        designer.threshold1(),
        designer.threshold2()
    );
    let top = 1.5 * designer.threshold2();
    for k in (0..=12).rev() {
        let length = top * k as f64 / 12.0;
        println!(
            "length={:>8.3} regime={:<9} shaft={:>7.3} points=[{}]",
            length,
            format!("{:?}", designer.regime(length)),
            designer.shaft_height(length),
            polygon_points(&designer.outline(length))
        );
    }
}
