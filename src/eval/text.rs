/// Index of the text state selected at `progress`.
///
/// Counts the ascending `change_points` that are `<= progress`, so a value exactly
/// on a threshold selects the later state.
pub fn text_state_index(progress: f64, change_points: &[f64]) -> usize {
    change_points.iter().take_while(|&&p| progress >= p).count()
}
