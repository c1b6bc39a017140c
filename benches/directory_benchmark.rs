use criterion::{criterion_group, criterion_main, Criterion};
use mergington_activities::db::ActivityDirectory;
use std::hint::black_box;

fn benchmark_signup_unregister(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to build runtime");
    let directory = ActivityDirectory::seeded();

    let mut group = c.benchmark_group("directory_writes");

    group.bench_function("signup_then_unregister", |b| {
        b.iter(|| {
            runtime.block_on(async {
                directory
                    .signup(black_box("Chess Club"), black_box("bench@mergington.edu"))
                    .await
                    .expect("signup failed");
                directory
                    .unregister(black_box("Chess Club"), black_box("bench@mergington.edu"))
                    .await
                    .expect("unregister failed");
            })
        })
    });

    group.bench_function("list_activities", |b| {
        b.iter(|| runtime.block_on(directory.list()))
    });

    group.finish();
}

criterion_group!(benches, benchmark_signup_unregister);
criterion_main!(benches);
