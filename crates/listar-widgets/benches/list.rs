//! Benchmark tests for the list control.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use listar_core::{Key, Modifiers, RenderCache, RenderError, StyleSignature};
use listar_widgets::ListView;

fn raster(text: &str, _style: &StyleSignature) -> Result<String, RenderError> {
    Ok(text.to_string())
}

fn build_list(len: usize, rows: usize) -> ListView<String> {
    let items: Vec<String> = (0..len).map(|i| format!("item {i}")).collect();
    let mut view = ListView::new(items, raster).unwrap();
    view.set_viewport_height(35.0 * rows as f32).unwrap();
    view
}

fn bench_visible_rows_warm_cache(c: &mut Criterion) {
    let mut view = build_list(1000, 20);
    view.visible_rows().unwrap();

    c.bench_function("visible_rows_warm_20_of_1000", |b| {
        b.iter(|| black_box(view.visible_rows().unwrap()))
    });
}

fn bench_key_navigation(c: &mut Criterion) {
    let mut view = build_list(1000, 20);

    c.bench_function("key_navigation_down_up", |b| {
        b.iter(|| {
            view.on_key(black_box(Key::Down), Modifiers::NONE);
            view.on_key(black_box(Key::Up), Modifiers::NONE);
            view.drain_events()
        })
    });
}

fn bench_pointer_press(c: &mut Criterion) {
    let mut view = build_list(1000, 20);

    c.bench_function("pointer_press", |b| {
        b.iter(|| {
            view.on_pointer_press(black_box(350.0));
            view.drain_events()
        })
    });
}

fn bench_cache_hit(c: &mut Criterion) {
    let mut cache = RenderCache::new();
    let style = StyleSignature::default();
    let mut rasterizer = raster;
    cache
        .get_or_render("hello world", &style, &mut rasterizer)
        .unwrap();

    c.bench_function("cache_hit", |b| {
        b.iter(|| {
            cache
                .get_or_render(black_box("hello world"), &style, &mut rasterizer)
                .unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_visible_rows_warm_cache,
    bench_key_navigation,
    bench_pointer_press,
    bench_cache_hit
);
criterion_main!(benches);
