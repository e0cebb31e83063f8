use basen::{Base64, Codec, Registry};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SIZES: [usize; 5] = [64, 256, 1024, 4096, 16384];

fn codecs() -> impl Iterator<Item = (&'static str, &'static dyn Codec)> {
    ["base16", "base32", "base32hex", "base64"]
        .into_iter()
        .map(|name| (name, Registry::global().get(name).unwrap()))
}

fn bench_encode(c: &mut Criterion) {
    for (name, codec) in codecs() {
        let mut group = c.benchmark_group(format!("encode_{}", name));

        for size in SIZES.iter() {
            group.throughput(Throughput::Bytes(*size as u64));
            let data: Vec<u8> = (0..*size).map(|i| (i % 256) as u8).collect();

            group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
                b.iter(|| codec.encode_to_vec(black_box(data)).unwrap());
            });
        }
        group.finish();
    }
}

fn bench_decode(c: &mut Criterion) {
    for (name, codec) in codecs() {
        let mut group = c.benchmark_group(format!("decode_{}", name));

        for size in SIZES.iter() {
            let data: Vec<u8> = (0..*size).map(|i| (i % 256) as u8).collect();
            let encoded = codec.encode_to_vec(&data).unwrap();

            group.throughput(Throughput::Bytes(*size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
                b.iter(|| codec.decode_to_vec(black_box(encoded)).unwrap());
            });
        }
        group.finish();
    }
}

fn bench_ranged_decode(c: &mut Criterion) {
    let codec = &Base64::URL_SAFE;
    let mut group = c.benchmark_group("decode_range_base64url");

    for size in SIZES.iter() {
        let data: Vec<u8> = (0..*size).map(|i| (i * 31 % 256) as u8).collect();
        let encoded = codec.encode_to_vec(&data).unwrap();
        let mut output = vec![0u8; size + 17];

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| {
                codec
                    .decode_range(black_box(encoded), 0, encoded.len(), &mut output, 17)
                    .unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_ranged_decode);
criterion_main!(benches);
