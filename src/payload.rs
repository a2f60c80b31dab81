use rand::distributions::Alphanumeric;
use rand::Rng;

/// Number of characters in a payload of `size_kb` kilobytes.
pub fn payload_len(size_kb: f64) -> usize {
    if !size_kb.is_finite() || size_kb <= 0.0 {
        return 0;
    }
    (size_kb * 1024.0).floor() as usize
}

/// Random alphanumeric string of `floor(size_kb * 1024)` characters.
///
/// Returns `None` when that length is zero so the caller sends no body at all.
pub fn generate(size_kb: f64) -> Option<String> {
    let len = payload_len(size_kb);
    if len == 0 {
        return None;
    }

    let payload = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect();
    Some(payload)
}
