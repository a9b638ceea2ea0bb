use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            na_bson_fuzz::test_views(data);
            na_bson_fuzz::test_values(data);
            na_bson_fuzz::test_shared(data);
        });
    }
}
