#![no_main]

use gridwalk::scl::{SclDocument, SubstationTopology};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let xml = String::from_utf8_lossy(data);
    if let Ok(doc) = SclDocument::from_str(&xml) {
        let _ = SubstationTopology::from_document(&doc);
    }
});
