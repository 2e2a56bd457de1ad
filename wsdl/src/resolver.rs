//! Resolution of `<attribute ref="...">` under a restriction.
//!
//! Such an element does not carry its value under a fixed name: `ref`
//! names another attribute of the same element, and that attribute holds
//! the value. `ref="tns:arrayType" arrayType="xsd:string[]"` resolves to
//! key `arrayType` and value `xsd:string[]`.

use super::{error::Error, types::QualifiedName, types::RestrictionAttr};

/// Resolves one element's attributes, given as `(local name, value)`
/// pairs in document order.
///
/// Fails only when `ref` is absent or has an empty local part. A `ref`
/// naming an attribute the element does not carry resolves to an empty
/// value.
pub fn resolve_restriction_attr(
    attributes: &[(String, String)],
) -> Result<RestrictionAttr, Error> {
    let reference = lookup(attributes, "ref").ok_or(Error::MissingRequiredAttribute {
        element: "attribute",
        attribute: "ref",
    })?;

    let key = QualifiedName::parse(reference).local;
    if key.is_empty() {
        return Err(Error::MissingRequiredAttribute {
            element: "attribute",
            attribute: "ref",
        });
    }

    let value = lookup(attributes, key).unwrap_or_default();

    Ok(RestrictionAttr {
        reference: reference.to_owned(),
        key: key.to_owned(),
        value: value.to_owned(),
    })
}

fn lookup<'a>(attributes: &'a [(String, String)], name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn attrs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn resolves_value_from_sibling_attribute() {
        let resolved = resolve_restriction_attr(&attrs(&[
            ("ref", "tns:arrayType"),
            ("arrayType", "xsd:string[]"),
        ]))
        .unwrap();

        assert_eq!(resolved.reference, "tns:arrayType");
        assert_eq!(resolved.key, "arrayType");
        assert_eq!(resolved.value, "xsd:string[]");
    }

    #[test]
    fn sibling_may_precede_ref() {
        let resolved =
            resolve_restriction_attr(&attrs(&[("arrayType", "tns:Item[]"), ("ref", "arrayType")]))
                .unwrap();

        assert_eq!(resolved.key, "arrayType");
        assert_eq!(resolved.value, "tns:Item[]");
    }

    #[test]
    fn absent_sibling_gives_empty_value() {
        let resolved = resolve_restriction_attr(&attrs(&[("ref", "tns:arrayType")])).unwrap();

        assert_eq!(resolved.key, "arrayType");
        assert_eq!(resolved.value, "");
    }

    #[test]
    fn missing_ref_is_an_error() {
        let error = resolve_restriction_attr(&attrs(&[("arrayType", "xsd:int[]")])).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingRequiredAttribute);
    }

    #[test]
    fn ref_without_local_part_is_an_error() {
        let error = resolve_restriction_attr(&attrs(&[("ref", "tns:")])).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingRequiredAttribute);
    }

    #[test]
    fn first_matching_attribute_wins() {
        let resolved = resolve_restriction_attr(&attrs(&[
            ("ref", "soapenc:arrayType"),
            ("arrayType", "first"),
            ("arrayType", "second"),
        ]))
        .unwrap();

        assert_eq!(resolved.value, "first");
    }
}
