//! Sliding median smoothing over voiced f0 samples

/// Replace every sample with the median of a centered window
///
/// Windows are clipped at the sequence edges, so the first and last samples
/// use only the neighbours that exist. An even-sized clipped window takes the
/// mean of its two middle values.
///
/// # Arguments
///
/// * `values` - Voiced f0 values in Hz
/// * `window` - Window length (odd values give a symmetric window)
///
/// # Returns
///
/// Smoothed values, same length as the input
pub fn median_smooth(values: &[f64], window: usize) -> Vec<f64> {
    log::debug!("Median smoothing {} samples with window {}", values.len(), window);

    if window <= 1 || values.len() < 2 {
        return values.to_vec();
    }

    let half = window / 2;
    let mut scratch = Vec::with_capacity(window);

    (0..values.len())
        .map(|i| {
            let start = i.saturating_sub(half);
            let end = (i + half + 1).min(values.len());
            scratch.clear();
            scratch.extend_from_slice(&values[start..end]);
            median(&mut scratch)
        })
        .collect()
}

/// Median of a non-empty slice (sorts in place)
pub(crate) fn median(values: &mut [f64]) -> f64 {
    values.sort_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}
