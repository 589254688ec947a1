//! geo-lod vocabulary modules.
//!
//! The core module is shared by every archive family; each extension imports
//! it and adds the family-specific classes. See [`crate::Ontology::new`] for
//! the assembly order.

pub mod core;
pub mod ice_core;
pub mod speleothem;

use crate::model::{ExternalLabel, Property, PropertyKind};

pub(crate) fn object(
    id: &'static str,
    label: &'static str,
    comment: Option<&'static str>,
    domain: Option<&'static str>,
    range: Option<&'static str>,
) -> Property {
    Property {
        id,
        label,
        comment,
        kind: PropertyKind::Object,
        sub_property_of: &[],
        domain,
        range,
    }
}

pub(crate) fn datatype(
    id: &'static str,
    label: &'static str,
    comment: Option<&'static str>,
    domain: Option<&'static str>,
    range: &'static str,
) -> Property {
    Property {
        id,
        label,
        comment,
        kind: PropertyKind::Datatype,
        sub_property_of: &[],
        domain,
        range: Some(range),
    }
}

pub(crate) fn external(
    id: &'static str,
    label: &'static str,
    comment: Option<&'static str>,
) -> ExternalLabel {
    ExternalLabel { id, label, comment }
}
