//! Query construction.

use super::GeocodeError;

/// Builds the provider query for an address.
///
/// Appends `", {locality}"` to bias short or ambiguous addresses toward the
/// service area, unless the locality is blank or the address already ends
/// with it.
///
/// # Examples
///
/// ```
/// use u_dispatch::geocoding::build_query;
///
/// let q = build_query("Rua Augusta, 100", Some("São Paulo, SP, Brasil")).unwrap();
/// assert_eq!(q, "Rua Augusta, 100, São Paulo, SP, Brasil");
///
/// let q = build_query("  Rua Augusta, 100, São Paulo, SP, Brasil ", Some("são paulo, sp, brasil")).unwrap();
/// assert_eq!(q, "Rua Augusta, 100, São Paulo, SP, Brasil");
///
/// assert!(build_query("   ", None).is_err());
/// ```
pub fn build_query(address: &str, locality: Option<&str>) -> Result<String, GeocodeError> {
    let address = address.trim();
    if address.is_empty() {
        return Err(GeocodeError::EmptyAddress);
    }

    let locality = locality.map(str::trim).unwrap_or_default();
    if locality.is_empty() || address.to_lowercase().ends_with(&locality.to_lowercase()) {
        return Ok(address.to_string());
    }

    Ok(format!("{address}, {locality}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_locality() {
        assert_eq!(build_query(" Rua 1 ", None).expect("ok"), "Rua 1");
        assert_eq!(build_query("Rua 1", Some("  ")).expect("ok"), "Rua 1");
    }

    #[test]
    fn test_appends_locality() {
        assert_eq!(
            build_query("Rua 1", Some(" Campinas, SP ")).expect("ok"),
            "Rua 1, Campinas, SP"
        );
    }

    #[test]
    fn test_locality_only_checked_at_end() {
        assert_eq!(
            build_query("Campinas street 5", Some("Campinas")).expect("ok"),
            "Campinas street 5, Campinas"
        );
    }

    #[test]
    fn test_empty_address() {
        assert_eq!(build_query("", Some("X")), Err(GeocodeError::EmptyAddress));
    }
}
