use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flight_features::{
    CategoricalColumn, FeatureEncoder, FittedTargetEncoder, FlightQuery, HandleUnknown,
};
use std::sync::Arc;

fn bench_encode(c: &mut Criterion) {
    let target = FittedTargetEncoder::new(0.8, HandleUnknown::Value)
        .with_column(CategoricalColumn::CarrierOrigin, [("DL_ATL", 0.83)])
        .with_column(CategoricalColumn::CarrierDest, [("DL_JFK", 0.77)])
        .with_column(CategoricalColumn::DayMonth, [("3_3", 0.81)])
        .with_column(CategoricalColumn::UniqueCarrier, [("DL", 0.85)])
        .with_column(CategoricalColumn::Origin, [("ATL", 0.79)])
        .with_column(CategoricalColumn::Dest, [("JFK", 0.74)]);
    let encoder = FeatureEncoder::new(Arc::new(target));

    let query = FlightQuery {
        month: 3,
        day_of_month: 15,
        day_of_week: 3,
        departure_time: 830,
        carrier: "DL".to_string(),
        origin: "ATL".to_string(),
        destination: "JFK".to_string(),
        distance: 760,
    };

    c.bench_function("encode_single_query", |b| {
        b.iter(|| encoder.encode(black_box(&query)))
    });
}

criterion_group!(benches, bench_encode);
criterion_main!(benches);
