use crate::scalingerror::ScalingError;

/// Evenly spaced sample points over a closed interval, both ends included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearDomain {
    start: f64,
    end: f64,
    num_points: usize
}

impl LinearDomain {
    pub fn new(start: f64, end: f64, num_points: usize) -> Result<LinearDomain, ScalingError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ScalingError::InvalidDomain(
                format!("bounds must be finite, got [{}, {}]", start, end)
            ));
        }
        if start >= end {
            return Err(ScalingError::InvalidDomain(
                format!("start {} must be below end {}", start, end)
            ));
        }
        if num_points < 2 {
            return Err(ScalingError::InvalidDomain(
                format!("at least 2 points required, got {}", num_points)
            ));
        }
        Ok(LinearDomain { start, end, num_points })
    }

    pub fn len(&self) -> usize {
        self.num_points
    }

    fn step(&self) -> f64 {
        (self.end - self.start) / ((self.num_points - 1) as f64)
    }

    /// The `index`-th sample; the last one is pinned to `end` exactly.
    pub fn value(&self, index: usize) -> Option<f64> {
        if index + 1 == self.num_points {
            Some(self.end)
        } else if index < self.num_points {
            Some(self.start + self.step() * (index as f64))
        } else {
            None
        }
    }

    pub fn iter(&self) -> LinearDomainIterator<'_> {
        LinearDomainIterator {
            domain: self,
            index: 0,
        }
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }
}

pub struct LinearDomainIterator<'a> {
    domain: &'a LinearDomain,
    index: usize,
}

impl<'a> Iterator for LinearDomainIterator<'a> {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.domain.value(self.index);
        if result.is_some() {
            self.index += 1;
        }
        result
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.domain.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for LinearDomainIterator<'a> {}
