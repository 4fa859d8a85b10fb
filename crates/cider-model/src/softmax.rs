//! Numerically stable softmax.

/// Softmax over raw logits.
///
/// Subtracts the maximum before exponentiating so large logits cannot
/// overflow. An empty slice comes back empty; a degenerate input where
/// every term vanishes falls back to the uniform distribution.
pub fn softmax(logits: &[f32]) -> Vec<f64> {
    if logits.is_empty() {
        return Vec::new();
    }
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f64> = logits.iter().map(|&l| f64::from(l - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    if sum > 0.0 {
        exps.iter().map(|e| e / sum).collect()
    } else {
        vec![1.0 / logits.len() as f64; logits.len()]
    }
}
