//! Box edges and centre line

use chart_core::utils::{sorted, validate_sample};
use chart_core::Result;

/// Lower and upper quartiles by quartile depth
///
/// The depth from each end is `(floor(n / 2) + 1) / 2`. A whole depth picks
/// that value; a half depth averages the two values either side of it. For
/// `[1, 3, 4, 5, 60]` the depth is 1.5, giving `(2, 32.5)`.
pub fn quartiles(sample: &[f64]) -> Result<(f64, f64)> {
    validate_sample(sample, "quartiles")?;
    let vals = sorted(sample);
    let n = vals.len();
    if n == 1 {
        return Ok((vals[0], vals[0]));
    }
    // twice the depth keeps the arithmetic in integers
    let double_depth = n / 2 + 1;
    let l_depth = double_depth / 2;

    if double_depth % 2 == 0 {
        Ok((vals[l_depth - 1], vals[n - l_depth]))
    } else {
        let u_depth = l_depth + 1;
        let lq = (vals[l_depth - 1] + vals[u_depth - 1]) / 2.0;
        let uq = (vals[n - l_depth] + vals[n - u_depth]) / 2.0;
        Ok((lq, uq))
    }
}

/// Middle value, or the mean of the two middle values for an even count
pub fn median(sample: &[f64]) -> Result<f64> {
    validate_sample(sample, "median")?;
    let vals = sorted(sample);
    let mid = vals.len() / 2;
    if vals.len() % 2 == 1 {
        Ok(vals[mid])
    } else {
        Ok((vals[mid - 1] + vals[mid]) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_core::Error;

    #[test]
    fn test_half_depth_averages() {
        assert_eq!(quartiles(&[1.0, 3.0, 4.0, 5.0, 60.0]).unwrap(), (2.0, 32.5));
        assert_eq!(quartiles(&[60.0, 4.0, 1.0, 5.0, 3.0]).unwrap(), (2.0, 32.5));
    }

    #[test]
    fn test_whole_depth_picks_value() {
        // n = 6: depth 2
        assert_eq!(quartiles(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap(), (2.0, 5.0));
        // n = 7: depth 2
        assert_eq!(
            quartiles(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]).unwrap(),
            (2.0, 6.0)
        );
    }

    #[test]
    fn test_small_samples() {
        assert_eq!(quartiles(&[4.0]).unwrap(), (4.0, 4.0));
        assert_eq!(quartiles(&[1.0, 3.0]).unwrap(), (1.0, 3.0));
        assert_eq!(quartiles(&[1.0, 2.0, 9.0]).unwrap(), (1.0, 9.0));
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
        assert_eq!(median(&[7.0]).unwrap(), 7.0);
    }

    #[test]
    fn test_bad_samples() {
        assert!(matches!(quartiles(&[]), Err(Error::EmptySample { .. })));
        assert!(matches!(median(&[]), Err(Error::EmptySample { .. })));
        assert!(matches!(
            quartiles(&[1.0, f64::NAN]),
            Err(Error::NonFinite { .. })
        ));
    }
}
