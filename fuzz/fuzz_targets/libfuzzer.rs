#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    na_bson_fuzz::test_views(data);
    na_bson_fuzz::test_values(data);
    na_bson_fuzz::test_shared(data);
});
