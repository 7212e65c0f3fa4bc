use block_histogram::{
    BinError, Config, LEVELS_PER_ROW, OutOfRange, bin, core::rng::Lcg, histogram, render,
};

fn lines(chart: &str) -> Vec<&str> {
    chart.lines().collect()
}

#[test]
fn chart_has_height_plus_one_rows_of_width_glyphs() {
    let mut rng = Lcg::seed(1);
    let x: Vec<f64> = (0..10_000).map(|_| rng.randn()).collect();
    let y = vec![1.0; x.len()];

    for (w, h) in [(1, 1), (20, 10), (40, 8), (77, 3)] {
        let cfg = Config::builder(w, h).x_range(-4.0..=4.0).build().unwrap();
        let chart = histogram(&x, &y, &cfg).unwrap();
        let rows = lines(&chart);
        assert_eq!(rows.len(), h + 1);
        assert!(rows.iter().all(|r| r.chars().count() == w));
        assert_eq!(chart.matches('\n').count(), h + 1);
    }
}

#[test]
fn histogram_is_render_of_bin() {
    let mut rng = Lcg::seed(5);
    let x: Vec<f64> = (0..1_000).map(|_| rng.uniform()).collect();
    let y: Vec<f64> = (0..1_000)
        .map(|_| f64::from(rng.int_inclusive(1, 10)))
        .collect();
    let cfg = Config::builder(40, 8).x_range(0.0..=1.0).build().unwrap();

    let levels = bin(&x, &y, &cfg).unwrap();
    assert_eq!(histogram(&x, &y, &cfg).unwrap(), render(&levels, 8));
}

#[test]
fn all_zero_weights_render_blank() {
    let cfg = Config::builder(6, 2).build().unwrap();
    let chart = histogram(&[0.0, 1.0, 2.0], &[0.0; 3], &cfg).unwrap();
    assert_eq!(lines(&chart), vec!["      "; 3]);
}

#[test]
fn tallest_bin_fills_every_band_below_headroom() {
    let cfg = Config::builder(3, 4).x_range(0.0..=3.0).build().unwrap();
    let levels = bin(&[0.5, 1.5, 1.6, 2.5], &[1.0; 4], &cfg).unwrap();
    assert_eq!(levels, vec![16, 32, 16]);
    assert_eq!(levels[1], 4 * LEVELS_PER_ROW);

    let chart = histogram(&[0.5, 1.5, 1.6, 2.5], &[1.0; 4], &cfg).unwrap();
    let rows = lines(&chart);
    assert_eq!(rows[0], "   ");
    assert!(rows[1..].iter().all(|r| r.chars().nth(1) == Some('█')));
    assert_eq!(rows[1..], [" █ ", " █ ", "███", "███"]);
}

#[test]
fn bounded_window_ignores_outside_samples() {
    let x = [-10.0, 0.25, 0.75, 10.0];
    let y = [100.0, 1.0, 2.0, 100.0];
    let cfg = Config::builder(2, 1).x_range(0.0..=1.0).build().unwrap();
    assert_eq!(histogram(&x, &y, &cfg).unwrap(), "  \n▄█\n");

    let strict = Config::builder(2, 1)
        .x_range(0.0..=1.0)
        .out_of_range(OutOfRange::Reject)
        .build()
        .unwrap();
    assert_eq!(
        histogram(&x, &y, &strict),
        Err(BinError::OutOfRange { index: 0, x: -10.0 })
    );
}

#[test]
fn errors_surface_before_rendering() {
    let cfg = Config::builder(2, 1).build().unwrap();
    assert!(matches!(
        histogram(&[1.0], &[], &cfg),
        Err(BinError::LengthMismatch { x_len: 1, y_len: 0 })
    ));
    assert!(matches!(
        histogram(&[1.0, 1.0], &[1.0, 1.0], &cfg),
        Err(BinError::Range { .. })
    ));
}
