//! Postal address assembly.

use streetaid_client::Address;

/// Join the non-empty address parts with `", "`, then append the
/// postcode after a period.
///
/// Parts are taken in order `[street1, street2, street3, city]`, each
/// trimmed; empty or absent parts are omitted without doubling the
/// separator.
#[must_use]
pub fn format_address(address: &Address) -> String {
    let parts = [
        address.street1.as_deref(),
        address.street2.as_deref(),
        address.street3.as_deref(),
        address.city.as_deref(),
    ];

    let joined = parts
        .iter()
        .filter_map(|part| part.map(str::trim))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    format!("{joined}. {}", address.postcode)
}
