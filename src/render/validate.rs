/// Returns the fields unchanged when all of them are present and non-blank.
///
/// A single missing or whitespace-only field rejects the whole set.
pub fn require_present<const N: usize>(fields: [Option<&str>; N]) -> Option<[&str; N]> {
    let mut present = [""; N];
    for (slot, field) in present.iter_mut().zip(fields) {
        let value = field?;
        if value.trim().is_empty() {
            return None;
        }
        *slot = value;
    }
    Some(present)
}
