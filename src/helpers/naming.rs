/// Turn a schema node name into a fragment usable inside a C identifier.
///
/// The name is lowercased and every character outside `[a-z0-9_]` becomes
/// `_`. Words are never split at case changes, so `IPv4Address` becomes
/// `ipv4address`. Distinct names may map to the same fragment (`a-b` and
/// `a_b`, `Mtu` and `mtu`); no collision check is made.
pub fn to_c_variable(name: &str) -> String {
    let fragment: String = name
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if fragment.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{fragment}")
    } else {
        fragment
    }
}
