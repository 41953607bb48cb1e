/// Add `array` into `sum` element by element.
///
/// Positions missing from `sum` count as zero, so the accumulator grows to
/// cover `array`. Positions of `sum` past the end of `array` are untouched.
/// Values are not validated: NaN or infinite counts propagate.
pub fn sum_elements<'a>(sum: &'a mut Vec<f64>, array: &[f64]) -> &'a mut Vec<f64> {
    if sum.len() < array.len() {
        sum.resize(array.len(), 0.0);
    }
    for (acc, value) in sum.iter_mut().zip(array) {
        *acc += *value;
    }
    sum
}

/// Element-wise sum of `inputs` over exactly `len` positions.
///
/// Reads past the end of an input contribute zero; inputs longer than `len`
/// are cut off.
pub fn sum_series<'a, I>(len: usize, inputs: I) -> Vec<f64>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    let mut sum = vec![0.0; len];
    for input in inputs {
        for (acc, value) in sum.iter_mut().zip(input) {
            *acc += *value;
        }
    }
    sum
}

/// Length of the longest input, or 0 when there are none.
pub fn max_len<'a, I>(inputs: I) -> usize
where
    I: IntoIterator<Item = &'a [f64]>,
{
    inputs.into_iter().map(<[f64]>::len).max().unwrap_or(0)
}
