use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hotel_merge::{to_json_pretty, Hotel, HotelFilter, HotelRegistry, Image};
use rand::{seq::SliceRandom, thread_rng, Rng};

const AMENITIES: &[&str] = &[
    "Pool", "WiFi", "Gym", "Spa", "Bar", "Aircon", "Tv", "Kettle", "Iron", "Bathtub",
];

// One supplier's batch: `hotels` ids, random amenities and images
fn supplier_batch(hotels: usize, supplier: usize) -> Vec<Hotel> {
    let mut rng = thread_rng();
    (0..hotels)
        .map(|i| {
            let mut hotel = Hotel::new(format!("hotel{}", i), format!("{}", i % 20), "Hotel");
            hotel.description = "x".repeat(rng.gen_range(0..200));
            hotel.amenities.general = (0..8)
                .map(|_| AMENITIES.choose(&mut rng).unwrap().to_string())
                .collect();
            hotel.amenities.room = (0..8)
                .map(|_| AMENITIES.choose(&mut rng).unwrap().to_string())
                .collect();
            hotel.images.rooms = (0..3)
                .map(|n| Image::new(format!("https://img/{}/{}/{}.jpg", supplier, i, n), "Room"))
                .collect();
            hotel
        })
        .collect()
}

pub fn merge_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("hotel_registry");

    // Three suppliers, increasing catalogue size
    for size in [100, 1_000, 10_000].iter() {
        let batches: Vec<Vec<Hotel>> = (0..3).map(|s| supplier_batch(*size, s)).collect();

        group.bench_with_input(BenchmarkId::new("merge", size), &batches, |b, batches| {
            b.iter(|| {
                let mut registry = HotelRegistry::new();
                for batch in batches {
                    registry.merge_hotels(batch.clone());
                }
                black_box(registry.len())
            });
        });

        let mut registry = HotelRegistry::new();
        for batch in &batches {
            registry.merge_hotels(batch.clone());
        }
        let filter = HotelFilter::from_args("none", "1,2,3");

        group.bench_with_input(BenchmarkId::new("find_and_render", size), &registry, |b, registry| {
            b.iter(|| {
                let found: Vec<Hotel> = registry.find(&filter).into_iter().cloned().collect();
                black_box(to_json_pretty(&found).unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, merge_benchmark);
criterion_main!(benches);
