use divan::AllocProfiler;

#[global_allocator]
static ALLOC: AllocProfiler = AllocProfiler::system();

fn main() {
    divan::main();
}

fn get_input() -> Vec<u8> {
    std::fs::read(format!(
        "{}/resources/messages.mbm",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

pub mod read {
    use divan::Bencher;
    use eo_mbm::MessageArchive;

    #[divan::bench]
    fn from_bytes(bencher: Bencher) {
        bencher.with_inputs(super::get_input).bench_refs(|data| {
            divan::black_box(MessageArchive::from_bytes(data).unwrap());
        });
    }
}

pub mod write {
    use divan::Bencher;
    use eo_mbm::MessageArchive;

    #[divan::bench]
    fn to_bytes(bencher: Bencher) {
        bencher
            .with_inputs(|| MessageArchive::from_bytes(&super::get_input()).unwrap())
            .bench_refs(|archive| {
                divan::black_box(archive.to_bytes().unwrap());
            });
    }

    #[divan::bench(sample_count = 1)]
    fn modify_and_encode(bencher: Bencher) {
        let mut archive = MessageArchive::from_bytes(&super::get_input()).unwrap();

        bencher.bench_local(move || {
            for index in 0..archive.len() {
                if archive.text(index).is_some() {
                    archive.set(index, Some("MODIFIED TEXT[LineBreak]".into())).unwrap();
                }
            }
            divan::black_box(archive.to_bytes().unwrap());
        });
    }
}
