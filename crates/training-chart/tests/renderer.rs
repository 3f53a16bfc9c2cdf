// File: crates/training-chart/tests/renderer.rs
// Purpose: End-to-end training chart: input lookup by dataset id, frame bounds, PNG export, hard failures.

use std::path::Path;

use training_chart::theme::colors;
use training_chart::{ChartError, ChartRenderer, Curve, LineStyle, PlotConfig, RenderOptions, TrainingHistory};

const CURVES: [&str; 9] = [
    "d_loss_orig", "d_loss_r_orig", "d_loss_f_orig",
    "d_acc_orig", "d_acc_r_orig", "d_acc_f_orig",
    "g_loss_mean", "g_loss_orig", "g_loss_flip",
];

fn history(n: usize, skip: Option<&str>) -> TrainingHistory {
    TrainingHistory::from_curves(CURVES.iter().filter(|c| Some(**c) != skip).enumerate().map(|(k, name)| {
        let ys: Vec<f64> = (0..n).map(|i| 0.5 + 0.1 * k as f64 + 0.01 * i as f64).collect();
        Curve::from_values(*name, &ys)
    }))
}

fn config_in(root: &Path, dsid: &str) -> PlotConfig {
    let mut cfg = PlotConfig::with_dsid(Some(dsid));
    cfg.input_dir = root.join("GAN");
    cfg.output_dir = root.join("img");
    cfg
}

fn quiet() -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts
}

#[test]
fn writes_non_empty_png_for_dataset() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = config_in(dir.path(), "361024");
    std::fs::create_dir_all(&cfg.input_dir).unwrap();
    history(25, None).save_json(cfg.input_path()).unwrap();

    let out = ChartRenderer::new(cfg.clone()).with_options(quiet()).run().expect("run");
    assert_eq!(out, dir.path().join("img/training_361024.png"));
    let bytes = std::fs::read(&out).expect("output exists");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));

    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (800, 1800));
}

#[test]
fn x_range_matches_first_curve_sample_count() {
    let h = history(37, None);
    let b = ChartRenderer::frame_bounds(&h).unwrap();
    assert_eq!(b.n_epochs, 37);

    let fig = ChartRenderer::build_figure(&h).unwrap();
    assert_eq!(fig.panels.len(), 3);
    for p in &fig.panels {
        assert_eq!((p.x_axis.min, p.x_axis.max), (0.0, 37.0));
        assert_eq!(p.y_axis.min, 0.0);
    }
}

#[test]
fn generator_frame_gets_headroom_over_mean_maximum() {
    let h = history(10, None);
    let g_max = h.curve("g_loss_mean").unwrap().max_y().unwrap();
    let b = ChartRenderer::frame_bounds(&h).unwrap();
    assert!((b.g_loss_max - 1.3 * g_max).abs() < 1e-12);
    assert_eq!(b.d_loss_max, 1.3);
    assert_eq!(b.d_acc_max, 1.3);

    let fig = ChartRenderer::build_figure(&h).unwrap();
    assert_eq!(fig.panels[2].y_axis.max, b.g_loss_max);
    assert_eq!(fig.panels[2].y_axis.label, "Generator Loss");
}

#[test]
fn panels_overlay_curves_and_legends_in_fixed_order() {
    let fig = ChartRenderer::build_figure(&history(5, None)).unwrap();
    let drawn: Vec<Vec<&str>> = fig
        .panels
        .iter()
        .map(|p| p.curves.iter().map(|c| c.curve.name.as_str()).collect())
        .collect();
    assert_eq!(drawn[0], ["d_loss_f_orig", "d_loss_r_orig", "d_loss_orig"]);
    assert_eq!(drawn[1], ["d_acc_f_orig", "d_acc_r_orig", "d_acc_orig"]);
    assert_eq!(drawn[2], ["g_loss_orig", "g_loss_flip", "g_loss_mean"]);

    let legend = fig.panels[2].legend.as_ref().expect("legend");
    let labels: Vec<_> = legend.entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["Average loss", "Original loss", "Flipped loss"]);
    assert!((legend.y1 - 0.75).abs() < 1e-12);
}

#[test]
fn curves_and_legend_entries_carry_fixed_styles() {
    let red = LineStyle::new(colors::RED, 1.0);
    let blue = LineStyle::new(colors::BLUE, 1.0);
    let plain = LineStyle::new(colors::BLACK, 1.0);
    assert_eq!(LineStyle::default(), plain);

    let fig = ChartRenderer::build_figure(&history(5, None)).unwrap();

    // draw order: (name, style) back to front
    let want_curves = [
        [("d_loss_f_orig", red), ("d_loss_r_orig", blue), ("d_loss_orig", plain)],
        [("d_acc_f_orig", red), ("d_acc_r_orig", blue), ("d_acc_orig", plain)],
        [("g_loss_orig", red), ("g_loss_flip", blue), ("g_loss_mean", plain)],
    ];
    let want_legends = [
        [("Average loss", plain), ("Real loss", blue), ("Fake loss", red)],
        [("Average acc", plain), ("Real acc", blue), ("Fake acc", red)],
        [("Average loss", plain), ("Original loss", red), ("Flipped loss", blue)],
    ];

    for (i, panel) in fig.panels.iter().enumerate() {
        let curves: Vec<_> = panel.curves.iter().map(|c| (c.curve.name.as_str(), c.style)).collect();
        assert_eq!(curves, want_curves[i], "panel {i} curves");

        let legend = panel.legend.as_ref().expect("legend");
        let entries: Vec<_> = legend.entries.iter().map(|e| (e.label.as_str(), e.style)).collect();
        assert_eq!(entries, want_legends[i], "panel {i} legend");
        assert_eq!(legend.border_size, 0.0);
        assert!(legend.fill.is_none());
        assert!((legend.y1 - 0.75).abs() < 1e-12);
    }
}

#[test]
fn nonexistent_dataset_fails_without_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = config_in(dir.path(), "999999");

    let err = ChartRenderer::new(cfg.clone()).with_options(quiet()).run().unwrap_err();
    assert!(matches!(err, ChartError::InputNotFound(_)), "{err}");
    assert!(!cfg.output_path().exists());
}

#[test]
fn missing_curve_fails_without_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = config_in(dir.path(), "361024");
    std::fs::create_dir_all(&cfg.input_dir).unwrap();
    history(8, Some("d_acc_r_orig")).save_json(cfg.input_path()).unwrap();

    let err = ChartRenderer::new(cfg.clone()).with_options(quiet()).run().unwrap_err();
    match err {
        ChartError::MissingCurve(name) => assert_eq!(name, "d_acc_r_orig"),
        other => panic!("unexpected: {other}"),
    }
    assert!(!cfg.output_path().exists());
}

#[test]
fn default_identifier_is_used_without_argument() {
    let cfg = PlotConfig::with_dsid(None::<&str>);
    assert_eq!(cfg.dsid, "361024");
    assert_eq!(cfg.preselection, "incl");
    assert!(cfg.input_path().ends_with("training_history.361024.rnn.GAN.incl.nominal.json"));
}
