#![no_main]

use libfuzzer_sys::fuzz_target;
use paket::core::{Delivery, International};
use paket::core::international::pack_customs_papers;
use paket::core::services::pack_delivery_days;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Accepted input must pack back to an accepted value.
        if let Ok(b) = Delivery::builder().day(s) {
            let packed = pack_delivery_days(b.build().day());
            assert!(Delivery::builder().day(&packed).is_ok() || packed.is_empty());
        }
        if let Ok(b) = International::builder().customs_paper(s) {
            let packed = pack_customs_papers(b.build().customs_paper());
            assert!(International::builder().customs_paper(&packed).is_ok());
        }
    }
});
