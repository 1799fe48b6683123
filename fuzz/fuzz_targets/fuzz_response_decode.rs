#![no_main]

use libfuzzer_sys::fuzz_target;
use paket::core::{Login, StoreOrdersResponse, TrackingResult};
use paket::soap::decode_reply;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        let _ = decode_reply::<Login>(s, "getAuthResponse", "return");
        let _ = decode_reply::<StoreOrdersResponse>(s, "storeOrdersResponse", "orderResult");
        let _ = decode_reply::<TrackingResult>(s, "getTrackingDataResponse", "trackingresult");
    }
});
