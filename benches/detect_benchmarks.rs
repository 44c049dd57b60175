use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dupefinder::detect_duplicates;
use dupefinder::duplicates::{bucket_by_size, Resolver, ResolverConfig};
use dupefinder::scanner::Walker;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// Helper to create a test directory with a specific structure
fn setup_test_dir(depth: usize, files_per_dir: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    create_dir_recursive(temp_dir.path().to_path_buf(), depth, files_per_dir);
    temp_dir
}

fn create_dir_recursive(path: PathBuf, depth: usize, files_per_dir: usize) {
    if depth == 0 {
        return;
    }

    if !path.exists() {
        fs::create_dir_all(&path).expect("Failed to create dir");
    }

    for i in 0..files_per_dir {
        let file_path = path.join(format!("file_{}.txt", i));
        // Distinct sizes per index so bucketing has real work to do
        fs::write(file_path, format!("file content number {}", i)).expect("Failed to write file");
    }

    if depth > 1 {
        for i in 0..2 {
            // 2 subdirectories per level
            let sub_dir = path.join(format!("dir_{}", i));
            create_dir_recursive(sub_dir, depth - 1, files_per_dir);
        }
    }
}

// 1. Candidate Collection Benchmarks
fn bench_walker(c: &mut Criterion) {
    let temp_dir = setup_test_dir(4, 10); // depth 4, 10 files per dir -> roughly 150 files

    c.bench_function("walker_150_files", |b| {
        b.iter(|| {
            let candidates = Walker::new(temp_dir.path(), true).collect().unwrap();
            black_box(candidates);
        })
    });
}

// 2. Bucketing Benchmarks
fn bench_bucketing(c: &mut Criterion) {
    let temp_dir = setup_test_dir(4, 10);
    let candidates = Walker::new(temp_dir.path(), true).collect().unwrap();

    c.bench_function("bucket_150_files", |b| {
        b.iter(|| {
            let (buckets, stats) = bucket_by_size(candidates.clone());
            black_box((buckets, stats));
        })
    });
}

// 3. Full Pipeline Benchmark
fn bench_pipeline(c: &mut Criterion) {
    let temp_dir = setup_test_dir(3, 10); // ~70 files
                                          // Create some duplicates
    let src = temp_dir.path().join("file_0.txt");
    for i in 1..10 {
        let dst = temp_dir.path().join(format!("dup_{}.txt", i));
        fs::copy(&src, &dst).expect("Failed to copy duplicate");
    }

    c.bench_function("pipeline_approx_80_files", |b| {
        b.iter(|| {
            let report = detect_duplicates(temp_dir.path(), true).unwrap();
            black_box(report);
        })
    });
}

// 4. Resolver Thread Scaling
fn bench_resolver_threads(c: &mut Criterion) {
    let temp_dir = setup_test_dir(1, 4);
    // Ten duplicate chains of ~64KB each
    for chain in 0..10 {
        let content = vec![chain as u8; 64 * 1024 + chain];
        for copy in 0..4 {
            fs::write(
                temp_dir.path().join(format!("chain{}_copy{}", chain, copy)),
                &content,
            )
            .expect("Failed to write file");
        }
    }
    let candidates = Walker::new(temp_dir.path(), true).collect().unwrap();

    let mut group = c.benchmark_group("resolver_threads");
    for threads in [1, 4] {
        let resolver = Resolver::new(ResolverConfig::default().with_threads(threads));
        group.bench_with_input(format!("{}_threads", threads), &resolver, |b, resolver| {
            b.iter(|| {
                let report = resolver.resolve(candidates.clone());
                black_box(report);
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_walker,
    bench_bucketing,
    bench_pipeline,
    bench_resolver_threads
);
criterion_main!(benches);
