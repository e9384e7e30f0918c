#![no_main]
// Verification and key agreement over arbitrary input never panic
use anycurve::{Curve, create_curve, named};
use libfuzzer_sys::fuzz_target;
use sha2::Sha512;
use std::sync::LazyLock;

static CURVES: LazyLock<Vec<Curve<Sha512>>> = LazyLock::new(|| {
    named::ALL
        .iter()
        .filter_map(|definition| create_curve(definition()).ok())
        .collect()
});

fuzz_target!(|data: &[u8]| {
    let Some((&split, body)) = data.split_first() else {
        return;
    };

    for curve in CURVES.iter() {
        let sig_len = curve.signature_len().min(body.len());
        let (signature, rest) = body.split_at(sig_len);
        let key_len = usize::from(split).min(rest.len());
        let (public_key, msg) = rest.split_at(key_len);

        let _ = curve.verify(signature, msg, public_key);

        let private_key_len = curve.private_key_len().min(msg.len());
        let private_key = &msg[..private_key_len];
        let _ = curve.get_public_key(private_key, true);
        let _ = curve.get_shared_secret(private_key, public_key);

        // Signatures from any accepted key verify
        if let Ok(pk) = curve.get_public_key(private_key, false) {
            if let Ok(sig) = curve.sign(msg, private_key) {
                assert_eq!(curve.verify(sig.as_ref(), msg, &pk), Ok(true));
            }
        }
    }
});
