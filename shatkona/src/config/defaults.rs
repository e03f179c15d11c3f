//! Default value functions for serde deserialization.

pub fn grid_size() -> usize {
    20
}

pub fn cell_size() -> f32 {
    0.5
}

pub fn num_rays() -> usize {
    12
}

pub fn max_range() -> f32 {
    10.0
}
