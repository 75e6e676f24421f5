//! Configuration for the cyclical encoder.

use serde::{Deserialize, Serialize};

use crate::enums::{CycleType, CyclicTransform};
use crate::error::{FeatureError, Result};

/// Ordered transform and cycle-type selections for the cyclical encoder.
///
/// Both lists are validated non-empty at construction. Output columns are
/// produced for the full cross-product in transform-major, cycle-minor
/// order; that ordering is part of the observable contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclicOptions {
    pub transforms: Vec<CyclicTransform>,
    pub cycle_types: Vec<CycleType>,
}

impl Default for CyclicOptions {
    /// `sin`/`cos` over `second_of_day` and `minute_of_day`.
    fn default() -> Self {
        Self {
            transforms: vec![CyclicTransform::Sin, CyclicTransform::Cos],
            cycle_types: vec![CycleType::SecondOfDay, CycleType::MinuteOfDay],
        }
    }
}

impl CyclicOptions {
    pub fn new(transforms: Vec<CyclicTransform>, cycle_types: Vec<CycleType>) -> Result<Self> {
        if transforms.is_empty() {
            return Err(FeatureError::EmptySelection { what: "transform" });
        }
        if cycle_types.is_empty() {
            return Err(FeatureError::EmptySelection { what: "cycle type" });
        }
        Ok(Self {
            transforms,
            cycle_types,
        })
    }

    /// Parse string vocabularies into options.
    ///
    /// Every provided name is resolved against its closed vocabulary before
    /// any data is processed; the first unknown name fails with an error
    /// naming it and listing the valid set.
    pub fn from_names<T, C>(transforms: &[T], cycle_types: &[C]) -> Result<Self>
    where
        T: AsRef<str>,
        C: AsRef<str>,
    {
        let transforms = transforms
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<CyclicTransform>>>()?;
        let cycle_types = cycle_types
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<CycleType>>>()?;
        Self::new(transforms, cycle_types)
    }

    /// Output column names in transform-major, cycle-minor order.
    pub fn feature_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.transforms.len() * self.cycle_types.len());
        for transform in &self.transforms {
            for cycle in &self.cycle_types {
                names.push(format!("{}_{}", transform.as_str(), cycle.as_str()));
            }
        }
        names
    }
}
