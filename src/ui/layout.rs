#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourlyDensity {
    Wide,
    Standard,
    Compact,
    Narrow,
}

#[must_use]
pub fn hourly_density(width: u16) -> HourlyDensity {
    match width {
        120..=u16::MAX => HourlyDensity::Wide,
        84..=119 => HourlyDensity::Standard,
        60..=83 => HourlyDensity::Compact,
        _ => HourlyDensity::Narrow,
    }
}

/// Hourly cards that fit side by side; each card is six columns plus spacing.
#[must_use]
pub fn visible_hour_count(width: u16) -> usize {
    match hourly_density(width) {
        HourlyDensity::Wide => 16,
        HourlyDensity::Standard => 11,
        HourlyDensity::Compact => 8,
        HourlyDensity::Narrow => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_boundaries() {
        assert_eq!(hourly_density(120), HourlyDensity::Wide);
        assert_eq!(hourly_density(119), HourlyDensity::Standard);
        assert_eq!(hourly_density(84), HourlyDensity::Standard);
        assert_eq!(hourly_density(83), HourlyDensity::Compact);
        assert_eq!(hourly_density(60), HourlyDensity::Compact);
        assert_eq!(hourly_density(59), HourlyDensity::Narrow);
        assert_eq!(hourly_density(0), HourlyDensity::Narrow);
    }

    #[test]
    fn visible_cards_fit_inside_borders() {
        for width in [40_u16, 59, 60, 83, 84, 119, 120, 200] {
            let needed = visible_hour_count(width) * 7;
            assert!(needed <= usize::from(width - 2), "width {width} needs {needed}");
        }
    }
}
