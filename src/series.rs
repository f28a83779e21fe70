use std::collections::BTreeMap;

use serde::Serialize;

use crate::projector::ProjectedSample;

/// All per-body time series of a run, keyed by lowercase body name.
///
/// `BTreeMap` keeps the key order deterministic so identical runs produce
/// byte-identical artifacts.
pub type Dataset = BTreeMap<String, BodySeries>;

/// Ordered, index-aligned columns for one body.
///
/// A single `push` appends to every column, so all columns always share the
/// same length and position i in each column refers to the i-th grid
/// instant. The serialized field names are the artifact keys and must not
/// change.
#[derive(Debug, Clone, Serialize)]
pub struct BodySeries {
    utc: Vec<f64>,
    ut1: Vec<f64>,
    tdb: Vec<f64>,
    icrs_ra: Vec<f64>,
    icrs_dec: Vec<f64>,
    gcrs_ra: Vec<f64>,
    gcrs_dec: Vec<f64>,
    enu_az: Vec<f64>,
    enu_alt: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    itrs: Option<Vec<[f64; 3]>>,
}

impl BodySeries {
    pub fn with_capacity(samples: usize, include_itrs: bool) -> Self {
        Self {
            utc: Vec::with_capacity(samples),
            ut1: Vec::with_capacity(samples),
            tdb: Vec::with_capacity(samples),
            icrs_ra: Vec::with_capacity(samples),
            icrs_dec: Vec::with_capacity(samples),
            gcrs_ra: Vec::with_capacity(samples),
            gcrs_dec: Vec::with_capacity(samples),
            enu_az: Vec::with_capacity(samples),
            enu_alt: Vec::with_capacity(samples),
            itrs: include_itrs.then(|| Vec::with_capacity(samples)),
        }
    }

    pub fn push(&mut self, sample: &ProjectedSample) {
        self.utc.push(sample.utc);
        self.ut1.push(sample.ut1);
        self.tdb.push(sample.tdb);
        self.icrs_ra.push(sample.icrs_ra);
        self.icrs_dec.push(sample.icrs_dec);
        self.gcrs_ra.push(sample.gcrs_ra);
        self.gcrs_dec.push(sample.gcrs_dec);
        self.enu_az.push(sample.enu_az);
        self.enu_alt.push(sample.enu_alt);
        if let Some(itrs) = &mut self.itrs {
            itrs.push(sample.itrs_km);
        }
    }

    /// Shared length of every column.
    pub fn len(&self) -> usize {
        self.utc.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utc.is_empty()
    }
}
