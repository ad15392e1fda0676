// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for worksheet JSON payloads.
//!
//! Payloads come from files and stdin. Malformed JSON, ragged rows, and
//! garbage cells must all come back as errors, never as panics.

#![no_main]

use cramer::Worksheet;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(sheet) = Worksheet::from_json_str(text) else {
        return;
    };

    // A loaded worksheet always converts or reports the first bad cell
    let _ = sheet.solve();

    // Re-serializing must load back to the same worksheet
    let json = serde_json::to_string(&sheet.to_payload()).expect("payload serializes");
    let reloaded = Worksheet::from_json_str(&json).expect("own payload reloads");
    assert_eq!(reloaded.dimension(), sheet.dimension());
});
