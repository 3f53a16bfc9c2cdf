use criterion::{black_box, criterion_group, criterion_main, Criterion};
use training_chart::{ChartRenderer, Curve, RenderOptions, Result, TrainingHistory};

const NAMES: [&str; 9] = [
    "d_loss_orig", "d_loss_r_orig", "d_loss_f_orig",
    "d_acc_orig", "d_acc_r_orig", "d_acc_f_orig",
    "g_loss_mean", "g_loss_orig", "g_loss_flip",
];

fn build_history(n: usize) -> TrainingHistory {
    TrainingHistory::from_curves(NAMES.iter().enumerate().map(|(k, name)| {
        let ys: Vec<f64> = (0..n)
            .map(|i| 0.7 + 0.3 * ((i as f64 * 0.05) + k as f64).sin())
            .collect();
        Curve::from_values(*name, &ys)
    }))
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("training_chart_png_bytes");
    for &n in &[100usize, 5_000usize] {
        group.bench_function(format!("epochs_{n}"), |b| {
            let figure = ChartRenderer::build_figure(&build_history(n)).expect("figure");
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = figure.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
