//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data, attribute kinds.

use crate::{Error, Result, Sample, Instance};


/// Check whether the training sample can be fitted or not.
/// An empty sample is not buildable.
#[inline(always)]
pub(crate) fn check_sample(sample: &Sample, who: &str) -> Result<()> {
    if sample.n_instances() == 0 {
        let msg = format!("{who} cannot be fitted on an empty sample");
        return Err(Error::Unbuildable(msg));
    }
    Ok(())
}


/// Check whether every attribute (including the class) is nominal.
#[inline(always)]
pub(crate) fn check_nominal_only(sample: &Sample, who: &str) -> Result<()> {
    let numeric = sample.attributes()
        .iter()
        .find(|attr| !attr.is_nominal());

    if let Some(attr) = numeric {
        let msg = format!(
            "{who} handles nominal attributes only, \
             but `{}` is numeric",
            attr.name()
        );
        return Err(Error::invalid(msg));
    }
    Ok(())
}


/// Check whether the class attribute is nominal.
#[inline(always)]
pub(crate) fn check_nominal_class(sample: &Sample, who: &str) -> Result<()> {
    let class = sample.class_attribute();
    if !class.is_nominal() {
        let msg = format!(
            "{who} requires a nominal class, but `{}` is numeric",
            class.name()
        );
        return Err(Error::invalid(msg));
    }
    Ok(())
}


/// Check that no attribute other than the class has a missing value.
#[inline(always)]
pub(crate) fn check_no_missing(sample: &Sample, who: &str) -> Result<()> {
    let class_index = sample.class_index();
    for (row, instance) in sample.instances().iter().enumerate() {
        let missing = (0..sample.n_attributes())
            .filter(|&j| j != class_index)
            .find(|&j| instance.is_missing(j));
        if let Some(j) = missing {
            let msg = format!(
                "{who} does not accept missing values, \
                 but record {row} misses `{}`",
                sample.attribute(j).name()
            );
            return Err(Error::invalid(msg));
        }
    }
    Ok(())
}


/// Check whether the given instance matches the header of `sample`.
#[inline(always)]
pub(crate) fn check_instance(sample: &Sample, instance: &Instance)
    -> Result<()>
{
    if instance.len() != sample.n_attributes() {
        let msg = format!(
            "the instance has {} values, but the header has {} attributes",
            instance.len(),
            sample.n_attributes()
        );
        return Err(Error::invalid(msg));
    }

    for (attr, &value) in sample.attributes().iter().zip(instance.values()) {
        if value.is_nan() || !attr.is_nominal() {
            continue;
        }
        if attr.code_of(value).is_none() {
            let msg = format!(
                "value {value} is out of range for `{}` ({} values)",
                attr.name(),
                attr.n_values()
            );
            return Err(Error::invalid(msg));
        }
    }
    Ok(())
}
