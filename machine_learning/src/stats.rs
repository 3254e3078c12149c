use ndarray::ArrayView1;

/// Computes the arithmetic mean of `values`.
///
/// # Returns
/// `None` if `values` is empty.
pub fn mean(values: &[f64]) -> Option<f64> {
    ArrayView1::from(values).mean()
}

/// Computes the coefficient of determination of some predictions.
///
/// A constant `y` scores `1.0` when predicted perfectly and `0.0` otherwise.
///
/// # Returns
/// `None` if there are no values to score.
pub fn r2_score(y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> Option<f64> {
    let y_mean = y.mean()?;
    let ss_res: f64 = y_pred.iter().zip(y.iter()).map(|(p, t)| (t - p).powi(2)).sum();
    let ss_tot: f64 = y.iter().map(|t| (t - y_mean).powi(2)).sum();

    if ss_tot == 0. {
        return Some(if ss_res == 0. { 1. } else { 0. });
    }

    Some(1. - ss_res / ss_tot)
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn mean_of_marks() {
        assert_eq!(mean(&[80., 90., 70., 60.]), Some(75.));
        assert_eq!(mean(&[42.5]), Some(42.5));
    }

    #[test]
    fn mean_of_nothing() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn perfect_fit() {
        let y = array![1., 2., 3.];
        assert_eq!(r2_score(y.view(), y.view()), Some(1.));
    }

    #[test]
    fn mean_fit() {
        let y = array![1., 2., 3.];
        let y_pred = array![2., 2., 2.];
        assert_eq!(r2_score(y_pred.view(), y.view()), Some(0.));
    }

    #[test]
    fn constant_target() {
        let y = array![5., 5.];
        let y_pred = array![4., 6.];
        assert_eq!(r2_score(y_pred.view(), y.view()), Some(0.));
        assert_eq!(r2_score(y.view(), y.view()), Some(1.));
    }
}
