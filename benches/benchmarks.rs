//! 三种冲突解决方式在不同负载因子下的基准测试

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use probe_hashtable::workload::{KeySet, KEY_RANGE};
use probe_hashtable::{HashTable, TableConfig, TableFactory, TableType, DEFAULT_CAPACITY};
use rand::rngs::StdRng;
use rand::SeedableRng;

// 基准测试配置
const SEED: u64 = 42;
const LOAD_PERCENTS: [usize; 5] = [10, 30, 50, 70, 90];

fn key_count(percent: usize) -> usize {
    DEFAULT_CAPACITY * percent / 100
}

/// 创建并预填充哈希表
fn filled_table(table_type: TableType, keys: &[i64]) -> Box<dyn HashTable> {
    let mut table = TableFactory::new(table_type, TableConfig::default())
        .create()
        .expect("默认配置应有效");
    for &key in keys {
        table.insert(key).expect("负载不超过90%时插入不应失败");
    }
    table
}

/// 插入操作基准测试
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("Insert");
    for &percent in LOAD_PERCENTS.iter() {
        let mut rng = StdRng::seed_from_u64(SEED);
        let keys = KeySet::generate(key_count(percent), KEY_RANGE, &mut rng).expect("生成键失败");
        group.throughput(Throughput::Elements(keys.len() as u64));
        for table_type in TableType::ALL {
            group.bench_with_input(
                BenchmarkId::new(table_type.as_str(), percent),
                keys.keys(),
                |b, keys| {
                    b.iter_batched(
                        || TableFactory::new(table_type, TableConfig::default()).create().expect("默认配置应有效"),
                        |mut table| {
                            for &key in keys {
                                table.insert(key).expect("插入失败");
                            }
                            table
                        },
                        criterion::BatchSize::LargeInput,
                    );
                },
            );
        }
    }
    group.finish();
}

/// 命中查找基准测试
fn bench_search_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("SearchHit");
    for &percent in LOAD_PERCENTS.iter() {
        let mut rng = StdRng::seed_from_u64(SEED);
        let keys = KeySet::generate(key_count(percent), KEY_RANGE, &mut rng).expect("生成键失败");
        group.throughput(Throughput::Elements(keys.len() as u64));
        for table_type in TableType::ALL {
            let table = filled_table(table_type, keys.keys());
            group.bench_with_input(
                BenchmarkId::new(table_type.as_str(), percent),
                keys.keys(),
                |b, keys| {
                    b.iter(|| {
                        for &key in keys {
                            criterion::black_box(table.search(key));
                        }
                    });
                },
            );
        }
    }
    group.finish();
}

/// 未命中查找基准测试
fn bench_search_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("SearchMiss");
    for &percent in LOAD_PERCENTS.iter() {
        let mut rng = StdRng::seed_from_u64(SEED);
        let keys = KeySet::generate(key_count(percent), KEY_RANGE, &mut rng).expect("生成键失败");
        let absent = KeySet::disjoint(keys.len(), &mut rng).expect("生成键失败");
        group.throughput(Throughput::Elements(absent.len() as u64));
        for table_type in TableType::ALL {
            let table = filled_table(table_type, keys.keys());
            group.bench_with_input(
                BenchmarkId::new(table_type.as_str(), percent),
                absent.keys(),
                |b, absent| {
                    b.iter(|| {
                        for &key in absent {
                            criterion::black_box(table.search(key));
                        }
                    });
                },
            );
        }
    }
    group.finish();
}

/// 删除操作基准测试（线性探测包含簇重排开销）
fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("Remove");
    for &percent in LOAD_PERCENTS.iter() {
        let mut rng = StdRng::seed_from_u64(SEED);
        let keys = KeySet::generate(key_count(percent), KEY_RANGE, &mut rng).expect("生成键失败");
        group.throughput(Throughput::Elements(keys.len() as u64));
        for table_type in TableType::ALL {
            group.bench_with_input(
                BenchmarkId::new(table_type.as_str(), percent),
                keys.keys(),
                |b, keys| {
                    b.iter_batched(
                        || filled_table(table_type, keys),
                        |mut table| {
                            for &key in keys {
                                criterion::black_box(table.remove(key));
                            }
                            table
                        },
                        criterion::BatchSize::LargeInput,
                    );
                },
            );
        }
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_search_hit,
    bench_search_miss,
    bench_remove
);
criterion_main!(benches);
