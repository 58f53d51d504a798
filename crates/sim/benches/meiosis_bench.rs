use breedsim_sim::crossing::{CrossingBuilder, ParentRef, Pedigree};
use breedsim_sim::genome::{random_founders, GeneticMap};
use breedsim_sim::meiosis::{interval_search, Bivalent, Haldane};
use breedsim_sim::Sex;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

fn bench_interval_search(c: &mut Criterion) {
    let map = GeneticMap::uniform(10_000, 2.0).unwrap();
    let positions = map.positions();

    c.bench_function("interval_search_10k", |b| {
        b.iter(|| {
            black_box(interval_search(positions, black_box(1.2345), 0));
            black_box(interval_search(positions, black_box(0.0001), 0));
            black_box(interval_search(positions, black_box(1.9999), 5_000));
        })
    });
}

fn bench_gamete(c: &mut Criterion) {
    let mut group = c.benchmark_group("gamete");

    for n_loci in [1_000, 10_000, 100_000] {
        let map = GeneticMap::uniform(n_loci, 1.5).unwrap();
        let chr1 = vec![0u8; n_loci];
        let chr2 = vec![1u8; n_loci];
        let mut gamete = vec![0u8; n_loci];
        let mut bivalent = Bivalent::new(&Haldane);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

        group.throughput(Throughput::Elements(n_loci as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n_loci), &n_loci, |b, _| {
            b.iter(|| {
                bivalent
                    .gamete_into(&chr1, &chr2, map.positions(), &mut rng, &mut gamete)
                    .unwrap();
                black_box(&gamete);
            })
        });
    }

    group.finish();
}

fn bench_engines(c: &mut Criterion) {
    let loci = vec![1_000; 10];
    let maps = loci
        .iter()
        .map(|&n| GeneticMap::uniform(n, 1.2).unwrap())
        .collect();
    let engine = CrossingBuilder::new().genetic_maps(maps).build().unwrap();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let founders = random_founders(&loci, 100, 0.5, &mut rng).unwrap();

    let n_offspring = 1_000;
    let mothers: Vec<usize> = (0..n_offspring).map(|i| i % 100).collect();
    let fathers: Vec<usize> = (0..n_offspring).map(|i| (i * 31 + 7) % 100).collect();

    let mut group = c.benchmark_group("engines");
    group.sample_size(20);

    group.bench_function("cross_1000x10chr", |b| {
        b.iter(|| {
            black_box(
                engine
                    .cross(&founders, &mothers, &founders, &fathers, &mut rng)
                    .unwrap(),
            )
        })
    });

    group.bench_function("doubled_haploids_100x10", |b| {
        b.iter(|| black_box(engine.doubled_haploids(&founders, 10, Sex::Female, &mut rng).unwrap()))
    });

    let n_entries = 1_000;
    let mothers: Vec<ParentRef> = (0..n_entries)
        .map(|i| if i < 50 { ParentRef::Founder } else { ParentRef::Individual(i - 50) })
        .collect();
    let fathers: Vec<ParentRef> = (0..n_entries)
        .map(|i| if i < 50 { ParentRef::Founder } else { ParentRef::Individual(i - 49) })
        .collect();
    let pedigree = Pedigree::new(mothers, fathers).unwrap();

    group.bench_function("pedigree_1000", |b| {
        b.iter(|| black_box(engine.cross_pedigree(&founders, &pedigree, &mut rng).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_interval_search, bench_gamete, bench_engines);
criterion_main!(benches);
